use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{
    Icon, IconCard, IconName, PageHero, Pill, Rise, Section, SectionHeading, Tone,
};
use crate::routes::SiteRoute;
use crate::sections::CallToAction;
use crate::theme::Theme;

const CONNECTED_SYSTEMS: [(IconName, &str); 4] = [
    (IconName::FileText, "HIS / EMR"),
    (IconName::Activity, "LIS & RIS"),
    (IconName::Heart, "Pharmacy"),
    (IconName::Wallet, "Billing / ERP"),
];

/// Platform layers, top of the stack first.
const LAYERS: [(IconName, &str, &str); 4] = [
    (
        IconName::Users,
        "IPU Enablement Layer",
        "Condition-wise dashboards and care pathway tracking.",
    ),
    (
        IconName::PieChart,
        "Analytics & Insights Engine",
        "Tracks outcomes, costs, LOS, utilization, and margins.",
    ),
    (
        IconName::Database,
        "Unified Data Layer",
        "Combines clinical, operational, and financial data.",
    ),
    (
        IconName::Share,
        "Integration Layer",
        "Connects all hospital systems into a single data flow.",
    ),
];

const SECURITY: [(IconName, &str, &str); 4] = [
    (
        IconName::Lock,
        "Role-Based Access",
        "Every user sees only what their role requires.",
    ),
    (
        IconName::Eye,
        "Audit Trails",
        "Every read and write is recorded and reviewable.",
    ),
    (
        IconName::ShieldCheck,
        "Privacy & Consent",
        "Consent is captured and enforced on every data flow.",
    ),
    (
        IconName::Cpu,
        "Enterprise Security",
        "Encryption in transit and at rest on hardened infrastructure.",
    ),
];

#[component]
fn ConnectedSystems() -> impl IntoView {
    view! {
        <div class="hub">
            {CONNECTED_SYSTEMS
                .iter()
                .map(|(icon, label)| {
                    view! {
                        <div class="hub-node">
                            <Icon name=*icon/>
                            <span>{*label}</span>
                        </div>
                    }
                })
                .collect_view()}
            <div class="hub-core">"CORE"</div>
        </div>
    }
}

#[component]
fn CoreLayers(theme: Signal<Theme>) -> impl IntoView {
    view! {
        <Section theme tone=Tone::Paper>
            <SectionHeading
                eyebrow="Architecture"
                title="Core Platform Layers"
                lede="A modular architecture designed to turn fragmented data into actionable intelligence."
            />
            <div class="layer-stack">
                {LAYERS
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
fn SecurityCompliance(theme: Signal<Theme>) -> impl IntoView {
    view! {
        <Section theme tone=Tone::Ink>
            <Rise class="section-heading">
                <div>
                    <Pill icon=IconName::ShieldCheck text="HIPAA / GDPR Ready"/>
                    <h2 class="section-title">"Security & Compliance"</h2>
                </div>
                <p class="lede">"Your data is your asset. We protect it with enterprise-grade standards."</p>
            </Rise>
            <div class="card-grid two">
                {SECURITY
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
pub fn PlatformPage(theme: Signal<Theme>) -> impl IntoView {
    view! {
        <Title text=SiteRoute::Platform.title()/>
        <div class="platform-page">
            <PageHero
                theme
                eyebrow="Platform & Technology"
                icon=IconName::Layers
                title="Interoperability,"
                accent="Not Replacement."
                lede="We connect the systems you already run into one secure data backbone instead of ripping them out."
            >
                <ConnectedSystems/>
            </PageHero>
            <CoreLayers theme/>
            <SecurityCompliance theme/>
            <CallToAction theme/>
        </div>
    }
}
