use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{
    Icon, IconName, PageHero, Pill, Rise, Section, Stat, StatTile, Tone, Trend,
};
use crate::routes::SiteRoute;
use crate::sections::CallToAction;
use crate::theme::Theme;

const RESULTS: [Stat; 3] = [
    Stat {
        label: "Cost Reduction",
        detail: "Lower cost per episode across both IPUs.",
        value: "12%",
        unit: None,
        icon: IconName::Wallet,
        trend: Trend::Down,
    },
    Stat {
        label: "LOS Reduction",
        detail: "Average length of stay shortened through standard pathways.",
        value: "1.2",
        unit: Some("Days"),
        icon: IconName::Clock,
        trend: Trend::Down,
    },
    Stat {
        label: "EBITDA Uplift",
        detail: "Significant margin improvement post-implementation.",
        value: "5%",
        unit: None,
        icon: IconName::TrendingUp,
        trend: Trend::Up,
    },
];

const DEPLOYED_IPUS: [(IconName, &str); 2] = [
    (IconName::Activity, "Diabetes IPU"),
    (IconName::Cross, "Orthopedic IPU"),
];

#[component]
fn FeaturedStudy(theme: Signal<Theme>) -> impl IntoView {
    view! {
        <Section theme tone=Tone::Paper>
            <Rise class="card case-card">
                <div class="case-heading">
                    <Pill icon=IconName::MapPin text="North India"/>
                    <h2 class="section-title">
                        "Multi-Specialty " <span class="accent-text">"Hospital"</span>
                    </h2>
                </div>

                <div class="two-col">
                    <div>
                        <h3 class="caption"><Icon name=IconName::Alert/>"The Challenge"</h3>
                        <p>"Rising operational costs and inconsistent clinical outcomes across departments."</p>
                    </div>
                    <div>
                        <h3 class="caption"><Icon name=IconName::Target/>"The Solution"</h3>
                        <p>"Implemented condition-based care units with real-time outcome and cost tracking:"</p>
                        <ul class="check-list">
                            {DEPLOYED_IPUS
                                .iter()
                                .map(|(icon, label)| view! { <li><Icon name=*icon size=16/><span>{*label}</span></li> })
                                .collect_view()}
                        </ul>
                    </div>
                </div>
            </Rise>

            <div class="card-grid three">
                {RESULTS
                    .into_iter()
                    .enumerate()
                    .map(|(index, stat)| view! { <StatTile stat delay_ms={200 + index as u32 * 100}/> })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
pub fn CaseStudiesPage(theme: Signal<Theme>) -> impl IntoView {
    view! {
        <Title text=SiteRoute::CaseStudies.title()/>
        <div class="case-studies-page">
            <PageHero
                theme
                eyebrow="Case Studies"
                icon=IconName::Briefcase
                title="Proven"
                accent="Outcomes."
                lede="How hospitals moved from volume to value with condition-based care units."
            />
            <FeaturedStudy theme/>
            <CallToAction
                theme
                headline="Want results like these for your hospital?"
                body="Every engagement starts with a readiness assessment of your priority conditions."
            />
        </div>
    }
}
