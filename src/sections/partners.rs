use leptos::prelude::*;

use crate::components::{Icon, IconName, Rise, Section, SectionHeading, Tone};
use crate::reveal::RevealOptions;
use crate::theme::Theme;

const DECISION_MAKERS: [(IconName, &str); 3] = [
    (IconName::Briefcase, "Promoters"),
    (IconName::Stethoscope, "Medical Directors"),
    (IconName::Activity, "COOs & CIOs"),
];

#[component]
pub fn WhoWeWorkWith(theme: Signal<Theme>) -> impl IntoView {
    view! {
        <Section theme tone=Tone::Emphasis reveal=RevealOptions::threshold(0.15)>
            <SectionHeading
                eyebrow="Target Partners"
                title="Who We Empower."
                lede="We partner with forward-thinking institutions ready to embrace data-driven architecture."
            />

            <div class="bento">
                <Rise class="card span-5">
                    <span class="pill">"Private Hospitals"</span>
                    <div class="bed-range">
                        <span>"50"</span>
                        <span class="faded">"–"</span>
                        <span>"100"</span>
                    </div>
                    <div class="caption">"Bed Capacity"</div>
                    <p class="muted">
                        "Private hospitals looking to optimize operations and maximize ROI through architectural precision."
                    </p>
                </Rise>

                <Rise class="card span-4" delay_ms=150>
                    <span class="icon-badge"><Icon name=IconName::Stethoscope size=28/></span>
                    <h3>"Specialty & Multi-Specialty"</h3>
                    <p class="muted">"From focused single-specialty clinics to complex multi-specialty hubs."</p>
                </Rise>

                <Rise class="card span-3" delay_ms=300>
                    <h3>"Decision Makers"</h3>
                    <p class="muted">"Partnering with visionary leadership teams."</p>
                    <div class="role-list">
                        {DECISION_MAKERS
                            .iter()
                            .map(|(icon, label)| {
                                view! {
                                    <div class="role-chip">
                                        <Icon name=*icon size=16/>
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
