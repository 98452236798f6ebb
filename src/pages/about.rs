use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{IconCard, IconName, PageHero, Rise, Section, SectionHeading, Tone};
use crate::routes::SiteRoute;
use crate::sections::CallToAction;
use crate::theme::Theme;

const TEAM: [(IconName, &str, &str); 4] = [
    (
        IconName::Stethoscope,
        "Clinicians",
        "Doctors who have run wards and know where care pathways break.",
    ),
    (
        IconName::Building,
        "Hospital Operators",
        "Leaders who have balanced occupancy, staffing and margins.",
    ),
    (
        IconName::PieChart,
        "Health Economists",
        "Specialists in cost per episode, bundled pricing and payer contracts.",
    ),
    (
        IconName::Cpu,
        "Technology Experts",
        "Engineers building secure, interoperable healthcare data systems.",
    ),
];

#[component]
fn Mission(theme: Signal<Theme>) -> impl IntoView {
    view! {
        <Section theme tone=Tone::Emphasis>
            <Rise class="mission">
                <h4 class="eyebrow">"Our Mission"</h4>
                <h2 class="section-title">
                    "To enable hospitals to deliver "
                    <span class="accent-text">"Better Outcomes"</span>
                    " at "
                    <span class="accent-text">"Lower Costs."</span>
                </h2>
            </Rise>
        </Section>
    }
}

#[component]
fn Team(theme: Signal<Theme>) -> impl IntoView {
    view! {
        <Section theme tone=Tone::Paper>
            <SectionHeading
                eyebrow="Our Team"
                title="The"
                accent="Collective."
                lede="A multidisciplinary team that speaks the language of the ward, the boardroom and the server room."
            />
            <div class="card-grid four">
                {TEAM
                    .iter()
                    .enumerate()
                    .map(|(index, (icon, title, body))| {
                        view! { <IconCard icon=*icon title=*title body=*body delay_ms={index as u32 * 100}/> }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
pub fn AboutUsPage(theme: Signal<Theme>) -> impl IntoView {
    view! {
        <Title text=SiteRoute::AboutUs.title()/>
        <div class="about-page">
            <PageHero
                theme
                eyebrow="About Orio Labs"
                icon=IconName::Users
                title="Built for"
                accent="Value."
                lede="Orio Labs designs the architecture hospitals need to measure, manage and get paid for outcomes."
            />
            <Mission theme/>
            <Team theme/>
            <CallToAction theme/>
        </div>
    }
}
