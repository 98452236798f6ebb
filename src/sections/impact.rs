use leptos::prelude::*;

use crate::components::{IconName, Pill, Rise, Section, Stat, StatTile, Tone, Trend};
use crate::theme::Theme;

const IMPACT_STATS: [Stat; 4] = [
    Stat {
        label: "Revenue Growth",
        detail: "Increase in ARPOB / ARPE",
        value: "8–15%",
        unit: None,
        icon: IconName::TrendingUp,
        trend: Trend::Up,
    },
    Stat {
        label: "Cost Efficiency",
        detail: "Reduction in Cost per Episode",
        value: "10–20%",
        unit: None,
        icon: IconName::Wallet,
        trend: Trend::Down,
    },
    Stat {
        label: "Operational Speed",
        detail: "Reduction in Avg. Length of Stay",
        value: "0.5–1.5",
        unit: Some("Days"),
        icon: IconName::Clock,
        trend: Trend::Down,
    },
    Stat {
        label: "Profitability",
        detail: "Improvement in EBITDA Margins",
        value: "3–8%",
        unit: None,
        icon: IconName::PieChart,
        trend: Trend::Up,
    },
];

#[component]
pub fn MeasurableImpact(theme: Signal<Theme>) -> impl IntoView {
    view! {
        <Section theme tone=Tone::Paper>
            <Rise class="section-heading">
                <div>
                    <Pill text="Real World Data"/>
                    <h2 class="section-title">"Measurable Impact"</h2>
                </div>
                <p class="lede">
                    "Hospitals using our platform achieve significant improvements across key performance indicators."
                </p>
            </Rise>

            <div class="stat-grid">
                {IMPACT_STATS
                    .iter()
                    .enumerate()
                    .map(|(index, stat)| view! { <StatTile stat=*stat delay_ms={index as u32 * 100}/> })
                    .collect_view()}
            </div>
        </Section>
    }
}
