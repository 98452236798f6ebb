use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{
    CheckList, Icon, IconCard, IconName, PageHero, Pill, Rise, Section, SectionHeading, Tone,
};
use crate::routes::SiteRoute;
use crate::scroll::{parallax_style, use_scroll_offset};
use crate::sections::CallToAction;
use crate::theme::Theme;

const SHIFTS: [(&str, &str); 3] = [
    ("Fee-for-service volume", "Outcomes per rupee spent"),
    ("Department silos", "Condition-based care teams"),
    ("Episodic treatment", "Full cycle of care"),
];

const PRESSURES: [&str; 4] = [
    "Thin and shrinking operating margins",
    "Rising clinical input and staffing costs",
    "Growing insurer and TPA scrutiny",
    "Patients comparing outcomes, not just prices",
];

const ENABLES: [&str; 4] = [
    "Improve clinical outcomes for priority conditions",
    "Standardize care pathways and reduce variation",
    "Negotiate from strength with payers",
    "Grow margins without heavy capex",
];

const IPU_MEASURES: [(IconName, &str); 3] = [
    (IconName::Heart, "Clinical Outcomes"),
    (IconName::Wallet, "Cost Per Episode"),
    (IconName::Users, "Patient Exp"),
];

const BARRIERS: [(IconName, &str, &str); 3] = [
    (
        IconName::Unplug,
        "Fragmented Tech",
        "Clinical, operational and financial data live in systems that never talk to each other.",
    ),
    (
        IconName::Settings,
        "Operational Inefficiency",
        "Without condition-level visibility, capacity and staff time are spent in the wrong places.",
    ),
    (
        IconName::TrendingDown,
        "Financial Leakage",
        "Missed follow-ups and unbundled care quietly drain revenue every month.",
    ),
];

/// One of the data modernisation routes offered by HealthOrio Bridge.
struct DataPath {
    title: &'static str,
    subtitle: &'static str,
    when: &'static str,
    what_we_do: &'static str,
    value: &'static str,
    quote: &'static str,
}

const DATA_PATHS: [DataPath; 4] = [
    DataPath {
        title: "Full Data Stack Migration",
        subtitle: "High Control, High Cost",
        when: "Legacy systems are end-of-life and a clean slate is affordable.",
        what_we_do: "Ingests full historical and operational datasets, normalizes into a compliance‑first schema, creates a single source of truth.",
        value: "Clean slate, future‑proof architecture, maximum interoperability.",
        quote: "Full migration eliminates decades of technical debt.",
    },
    DataPath {
        title: "Selective ETL on Existing Systems",
        subtitle: "Fastest, Lowest Cost",
        when: "Core systems work and only AI-ready data is missing.",
        what_we_do: "Extracts only fields needed for AI, maps into AI‑ready schema, leaves core systems untouched.",
        value: "Minimal disruption, rapid deployment, fast ROI.",
        quote: "AI without migration.",
    },
    DataPath {
        title: "Mixed Data Sourcing",
        subtitle: "Hybrid Strategy",
        when: "Structured systems coexist with paper files and scanned reports.",
        what_we_do: "Pulls structured data via APIs, extracts unstructured data via OCR/NLP, harmonizes both.",
        value: "Modernization without waiting for perfect data.",
        quote: "Start where you are, modernize as you go.",
    },
    DataPath {
        title: "Refactor Existing Data Store",
        subtitle: "Schema Modernization",
        when: "The existing store is sound but slow, unindexed or inconsistent.",
        what_we_do: "Rebuilds or optimizes schema, adds indexing and metadata, enables structured capture and rapid retrieval.",
        value: "Better clinician experience, faster access, foundation for future AI.",
        quote: "Upgrade your existing system without migration.",
    },
];

#[component]
fn WhatIsVbhc(theme: Signal<Theme>) -> impl IntoView {
    view! {
        <Section theme tone=Tone::Paper>
            <SectionHeading eyebrow="The Concept" title="What is" accent="Value-Based Healthcare?"/>
            <Rise class="card card-lead">
                <p>
                    "Value-Based Healthcare focuses on outcomes that matter to patients relative to the cost of delivering those outcomes—measured across the full cycle of care, not isolated services."
                </p>
            </Rise>
            <Rise delay_ms=150>
                <h3 class="subheading">"VBHC shifts healthcare from:"</h3>
                <div class="shift-list">
                    {SHIFTS
                        .iter()
                        .map(|(from, to)| {
                            view! {
                                <div class="shift-row">
                                    <span class="shift-from">{*from}</span>
                                    <Icon name=IconName::ArrowRight/>
                                    <span class="shift-to">{*to}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </Rise>
        </Section>
    }
}

#[component]
fn WhyItMatters(theme: Signal<Theme>) -> impl IntoView {
    view! {
        <Section theme tone=Tone::Emphasis>
            <SectionHeading eyebrow="The Impact" title="Why VBHC Matters for" accent="Hospitals"/>
            <div class="two-col">
                <Rise class="card">
                    <h3 class="subheading">"Modern Hospitals operate under intense pressure:"</h3>
                    <CheckList items=&PRESSURES icon=IconName::Alert/>
                </Rise>
                <Rise class="card card-ink" delay_ms=150>
                    <h3 class="subheading">"VBHC allows hospitals to:"</h3>
                    <CheckList items=&ENABLES/>
                </Rise>
            </div>
        </Section>
    }
}

#[component]
fn IpuModel(theme: Signal<Theme>) -> impl IntoView {
    view! {
        <Section theme tone=Tone::Canvas>
            <SectionHeading
                eyebrow="Structural Change"
                title="The Integrated Practice Unit"
                lede="An IPU brings every clinician a condition needs into one team, measured on one set of outcomes and one cost per episode."
            />
            <div class="tile-row">
                {IPU_MEASURES
                    .iter()
                    .enumerate()
                    .map(|(index, (icon, label))| {
                        view! {
                            <Rise class="tile" delay_ms={index as u32 * 120}>
                                <Icon name=*icon size=32/>
                                <span>{*label}</span>
                            </Rise>
                        }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
fn Barriers(theme: Signal<Theme>) -> impl IntoView {
    view! {
        <Section theme tone=Tone::Paper>
            <SectionHeading eyebrow="The Core Problem" title="What We" accent="Solve."/>
            <div class="card-grid three">
                {BARRIERS
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
fn HowWeSolve(theme: Signal<Theme>) -> impl IntoView {
    view! {
        <Section theme tone=Tone::Canvas reveal=crate::reveal::RevealOptions::threshold(0.1)>
            <SectionHeading eyebrow="The Solution" title="How We" accent="Solve."/>

            <div class="two-col">
                <Rise class="card">
                    <h3>"Fragmented Data"</h3>
                    <p class="muted">
                        "Healthcare data is scattered across legacy systems, paper files, siloed databases, and outdated schemas."
                    </p>
                </Rise>
                <Rise class="card" delay_ms=100>
                    <h3>"Unready Infrastructure"</h3>
                    <p class="muted">
                        "Hospitals want AI, analytics, and digital workflows — but their data isn't structured, accessible, or compliant."
                    </p>
                </Rise>
            </div>

            <Rise class="card card-ink bridge-intro" delay_ms=200>
                <h3>"The HealthOrio Bridge Solution"</h3>
                <p>"A secure, compliant, API‑powered data backbone that modernizes any hospital at any maturity level."</p>
                <h4 class="accent-text">"One Platform. Four Paths."</h4>
                <p class="muted">
                    "Hospitals don't need to choose between expensive migration and doing nothing. HealthOrioBridge offers four paths — each designed for different budgets, timelines, and digital maturity levels."
                </p>
            </Rise>

            <div class="card-grid two">
                {DATA_PATHS
                    .iter()
                    .enumerate()
                    .map(|(index, path)| {
                        view! {
                            <Rise class="card path-card" delay_ms={300 + index as u32 * 100}>
                                <Pill text=path.subtitle/>
                                <h3>{path.title}</h3>
                                <dl>
                                    <dt>"When:"</dt>
                                    <dd>{path.when}</dd>
                                    <dt>"What we do:"</dt>
                                    <dd>{path.what_we_do}</dd>
                                    <dt>"Value:"</dt>
                                    <dd>{path.value}</dd>
                                </dl>
                                <blockquote>{path.quote}</blockquote>
                            </Rise>
                        }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
pub fn VbhcPage(theme: Signal<Theme>) -> impl IntoView {
    let offset = use_scroll_offset();

    view! {
        <Title text=SiteRoute::Vbhc.title()/>
        <div class="vbhc-page">
            <PageHero
                theme
                eyebrow="Value-Based"
                icon=IconName::Sparkles
                title="Value-Based"
                accent="Healthcare"
                lede="We focus on outcomes that matter to patients relative to the cost of delivering those outcomes—measured across the full cycle of care, not isolated services."
                backdrop=move || {
                    view! {
                        <div
                            class="grid-lines parallax"
                            aria-hidden="true"
                            style=move || parallax_style(offset.get())
                        ></div>
                    }
                }
            >
                <a href="#what-is-vbhc" class="scroll-cue">
                    <Icon name=IconName::ArrowDown size=20/>
                </a>
            </PageHero>
            <div id="what-is-vbhc">
                <WhatIsVbhc theme/>
            </div>
            <WhyItMatters theme/>
            <IpuModel theme/>
            <Barriers theme/>
            <HowWeSolve theme/>
            <CallToAction theme/>
        </div>
    }
}
