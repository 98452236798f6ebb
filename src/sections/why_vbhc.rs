use leptos::prelude::*;

use crate::components::{Icon, IconName, Pill, Rise, Section, SectionHeading, Tone};
use crate::theme::Theme;

const SHIFTS: [(&str, &str); 3] = [
    ("Volume", "Value"),
    ("Departments", "Conditions"),
    ("Revenue per Service", "Outcome per Rupee"),
];

const IPU_FOCUS: [(IconName, &str); 3] = [
    (IconName::Activity, "Clinical Outcomes"),
    (IconName::Wallet, "Cost per Episode"),
    (IconName::Users, "Patient Journey"),
];

#[component]
pub fn WhyVbhc(theme: Signal<Theme>) -> impl IntoView {
    view! {
        <Section theme tone=Tone::Paper>
            <SectionHeading
                eyebrow="The Shift"
                title="Realizing the Promise of"
                accent="Value-Based Healthcare."
                lede="Moving from volume to value: outcomes relative to cost."
            />

            <div class="bento">
                <Rise class="card span-7">
                    <div class="card-heading">
                        <span class="icon-badge"><Icon name=IconName::TrendingUp size=24/></span>
                        <h3>"The Core Definition"</h3>
                    </div>
                    <p class="card-lead">
                        "VBHC focuses on outcomes that matter to patients relative to the cost of delivering those outcomes across the full cycle of care."
                    </p>
                    <div class="shift-list">
                        {SHIFTS
                            .iter()
                            .map(|(from, to)| {
                                view! {
                                    <div class="shift-row">
                                        <span class="shift-from">{*from}</span>
                                        <Icon name=IconName::ArrowRight class="pulse"/>
                                        <span class="shift-to">{*to}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </Rise>

                <Rise class="card card-ink span-5" delay_ms=150>
                    <div class="card-heading">
                        <span class="icon-badge"><Icon name=IconName::ShieldCheck size=24/></span>
                        <h3>"Indian Hospital Context"</h3>
                    </div>
                    <div class="context-points">
                        <div class="point point-alert">
                            <h5>"Pressure Points"</h5>
                            <p>"Thin margins, rising clinical costs, insurer scrutiny."</p>
                        </div>
                        <div class="point point-ok">
                            <h5>"VBHC Advantage"</h5>
                            <p>"Better outcomes with controlled costs and leverage."</p>
                        </div>
                    </div>
                    <div class="card-footer">
                        <div class="big-figure">"ROI ↑"</div>
                        <div class="muted">"Built for scalable care"</div>
                    </div>
                </Rise>

                <Rise class="card span-12 split" delay_ms=300>
                    <div>
                        <Pill text="The Architecture"/>
                        <h3>"Integrated Practice Units"</h3>
                        <p class="muted">"Multidisciplinary teams organized around conditions, not departments."</p>
                    </div>
                    <div class="tile-row">
                        {IPU_FOCUS
                            .iter()
                            .map(|(icon, label)| {
                                view! {
                                    <div class="tile">
                                        <Icon name=*icon size=32/>
                                        <span>{*label}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </Rise>
            </div>
        </Section>
    }
}
