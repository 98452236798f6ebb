use leptos::prelude::*;

use crate::components::{Icon, IconName, Pill, Rise, Section, Tone};
use crate::theme::Theme;

const PILLARS: [(IconName, &str, &str); 3] = [
    (IconName::Users, "Integrated Practice Units", "Multidisciplinary Teams"),
    (IconName::Database, "Unified Data", "Clinical & Financial"),
    (IconName::Activity, "Full-Cycle Measurement", "Outcome vs Cost"),
];

#[component]
pub fn TheSolution(theme: Signal<Theme>) -> impl IntoView {
    view! {
        <Section theme tone=Tone::Canvas class="centered">
            <Rise>
                <Pill icon=IconName::Sparkles text="Our Solution"/>
                <h2 class="section-title display">
                    "Clinical Care."
                    <br/>
                    <span class="accent-text">"Measurable Impact."</span>
                </h2>
                <div class="shift-inline">
                    <span>"Volume-Driven"</span>
                    <Icon name=IconName::ArrowRight size=16/>
                    <strong>"Outcome-Driven"</strong>
                </div>
            </Rise>

            <div class="pillar-grid">
                {PILLARS
                    .iter()
                    .enumerate()
                    .map(|(index, (icon, title, sub))| {
                        view! {
                            <Rise class="card pillar" delay_ms={index as u32 * 150}>
                                <span class="icon-badge"><Icon name=*icon size=24/></span>
                                <h3 class="card-title">{*title}</h3>
                                <p class="caption">{*sub}</p>
                            </Rise>
                        }
                    })
                    .collect_view()}
            </div>

            <Rise class="result-bar" delay_ms=500>
                <span><Icon name=IconName::CheckCircle size=16/>"Better Outcomes"</span>
                <span class="divider"></span>
                <span><Icon name=IconName::TrendingUp size=16/>"Stronger Financials"</span>
            </Rise>
        </Section>
    }
}
