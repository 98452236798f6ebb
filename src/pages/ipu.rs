use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{
    CheckList, Icon, IconCard, IconName, PageHero, Pill, Rise, Section, SectionHeading, Tone,
};
use crate::routes::SiteRoute;
use crate::sections::CallToAction;
use crate::theme::Theme;

const CARE_SCOPE: [&str; 3] = [
    "Screening & Diagnosis",
    "Clinical Management",
    "Monitoring & Follow-ups",
];

const OUTCOMES_TRACKED: [(IconName, &str); 3] = [
    (IconName::TrendingUp, "HbA1c Improvement"),
    (IconName::Activity, "Complication Rates"),
    (IconName::Wallet, "Cost Per Patient/Year"),
];

const FINANCIAL_IMPACT: [&str; 3] = [
    "Higher lifetime patient value",
    "Improved follow-up revenue",
    "Reduced complications & admissions",
];

const OTHER_IPUS: [(IconName, &str, &str); 3] = [
    (
        IconName::Cross,
        "Orthopedics IPU",
        "Joint replacement and trauma pathways measured from pre-op to rehabilitation.",
    ),
    (
        IconName::Baby,
        "Maternity IPU",
        "Antenatal to postnatal care with bundled pricing and outcome tracking.",
    ),
    (
        IconName::Heart,
        "Cardiac IPU",
        "Cardiac care coordinated across cath lab, surgery and cardiac rehab.",
    ),
];

#[component]
fn DiabetesFeature(theme: Signal<Theme>) -> impl IntoView {
    view! {
        <Section theme tone=Tone::Paper>
            <Rise class="section-heading">
                <div>
                    <Pill icon=IconName::Sparkles text="Flagship Model"/>
                    <h2 class="section-title">"Diabetes IPU"</h2>
                </div>
                <p class="lede">
                    "Enable end-to-end diabetes care across screening, diagnosis, and long-term management."
                </p>
            </Rise>

            <Rise class="card feature-columns" delay_ms=150>
                <div>
                    <h3 class="caption"><Icon name=IconName::Stethoscope/>"Care Scope"</h3>
                    <CheckList items=&CARE_SCOPE icon=IconName::Check/>
                </div>
                <div>
                    <h3 class="caption"><Icon name=IconName::Target/>"Outcomes Tracked"</h3>
                    <ul class="check-list">
                        {OUTCOMES_TRACKED
                            .iter()
                            .map(|(icon, label)| view! { <li><Icon name=*icon size=16/><span>{*label}</span></li> })
                            .collect_view()}
                    </ul>
                </div>
                <div class="accent-column">
                    <h3 class="caption"><Icon name=IconName::Wallet/>"Financial Impact"</h3>
                    <CheckList items=&FINANCIAL_IMPACT/>
                </div>
            </Rise>
        </Section>
    }
}

#[component]
fn OtherIpus(theme: Signal<Theme>) -> impl IntoView {
    view! {
        <Section theme tone=Tone::Canvas>
            <SectionHeading eyebrow="Condition Architecture" title="More IPU Models"/>
            <div class="card-grid three">
                {OTHER_IPUS
                    .iter()
                    .enumerate()
                    .map(|(index, (icon, title, body))| {
                        view! { <IconCard icon=*icon title=*title body=*body delay_ms={index as u32 * 120}/> }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
pub fn IpuSolutionsPage(theme: Signal<Theme>) -> impl IntoView {
    view! {
        <Title text=SiteRoute::IpuSolutions.title()/>
        <div class="ipu-page">
            <PageHero
                theme
                eyebrow="Condition Architecture"
                icon=IconName::Activity
                title="IPU"
                accent="Solutions"
                lede="Specialized care models designed to optimize outcomes and costs for specific medical conditions."
            />
            <DiabetesFeature theme/>
            <OtherIpus theme/>
            <CallToAction theme/>
        </div>
    }
}
