use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{Icon, IconCard, IconName, PageHero, Rise, Section, SectionHeading, Tone};
use crate::routes::SiteRoute;
use crate::sections::CallToAction;
use crate::theme::Theme;

const FRAGMENTATION: [(IconName, &str, &str); 4] = [
    (
        IconName::Users,
        "Incomplete Patient Journeys",
        "Clinicians lack a unified view of history.",
    ),
    (IconName::Database, "Data Duplication", "Redundant entries across silos."),
    (IconName::FileText, "Manual Reporting", "Time wasted compiling spreadsheets."),
    (
        IconName::Cpu,
        "Intuition-Based Decisions",
        "Strategy driven by guesses, not data.",
    ),
];

const INEFFICIENCIES: [(IconName, &str, &str); 3] = [
    (
        IconName::Clock,
        "Variable LOS",
        "Length of Stay varies widely for similar medical cases, indicating a lack of standardized care protocols.",
    ),
    (
        IconName::Building,
        "Resource Misallocation",
        "OT and ICU capacities are often blocked by patients who could be managed in lower-acuity settings.",
    ),
    (
        IconName::Users,
        "Suboptimal Productivity",
        "Clinical and non-clinical staff spend excessive time on coordination rather than patient care.",
    ),
];

const LEAKAGES: [(IconName, &str); 4] = [
    (IconName::Stethoscope, "Missed Diagnostics"),
    (IconName::Users, "Poor Follow-ups"),
    (IconName::Unplug, "Unbundled Care"),
    (IconName::Wallet, "Weak Monetization"),
];

#[component]
fn FragmentedTech(theme: Signal<Theme>) -> impl IntoView {
    view! {
        <Section theme tone=Tone::Paper>
            <div class="card-grid two">
                {FRAGMENTATION
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
fn OperationalInefficiency(theme: Signal<Theme>) -> impl IntoView {
    view! {
        <Section theme tone=Tone::Canvas>
            <SectionHeading
                eyebrow="Operations"
                title="Operational Inefficiencies"
                lede="Without condition-level visibility, resources are misallocated and productivity suffers."
            />
            <div class="card-grid three">
                {INEFFICIENCIES
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
fn FinancialLeakage(theme: Signal<Theme>) -> impl IntoView {
    view! {
        <Section theme tone=Tone::Ink>
            <SectionHeading
                eyebrow="Financial Leakage"
                title="Stop the Bleeding."
                lede="Our platform identifies and fixes these leakages automatically."
            />
            <div class="tile-row four">
                {LEAKAGES
                    .iter()
                    .enumerate()
                    .map(|(index, (icon, title))| {
                        view! {
                            <Rise class="tile" delay_ms={index as u32 * 100}>
                                <Icon name=*icon size=28/>
                                <span>{*title}</span>
                            </Rise>
                        }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
pub fn WhatWeSolvePage(theme: Signal<Theme>) -> impl IntoView {
    view! {
        <Title text=SiteRoute::WhatWeSolve.title()/>
        <div class="what-we-solve-page">
            <PageHero
                theme
                eyebrow="What We Solve"
                icon=IconName::Unplug
                title="Fragmented"
                accent="Tech Ecosystems"
                lede="Hospitals often operate with disconnected systems that do not communicate, creating blind spots in care."
            />
            <FragmentedTech theme/>
            <OperationalInefficiency theme/>
            <FinancialLeakage theme/>
            <CallToAction theme/>
        </div>
    }
}
