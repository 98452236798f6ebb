use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{Icon, IconName, PageHero, Pill, Rise, Section, SectionHeading, Tone};
use crate::forms::{FormStatus, NewsletterSignup};
use crate::routes::SiteRoute;
use crate::theme::Theme;

struct Guide {
    kind: &'static str,
    title: &'static str,
    summary: &'static str,
    icon: IconName,
}

const GUIDES: [Guide; 4] = [
    Guide {
        kind: "Strategy Guide",
        title: "VBHC Implementation Playbooks",
        summary: "Step-by-step roadmap for moving priority conditions from fee-for-service to value-based care.",
        icon: IconName::FileText,
    },
    Guide {
        kind: "Operational Framework",
        title: "IPU Setup Guides",
        summary: "Team design, care pathways and measurement plans for launching an Integrated Practice Unit.",
        icon: IconName::Layers,
    },
    Guide {
        kind: "Data Report",
        title: "Hospital KPI Benchmarks",
        summary: "Reference ranges for LOS, ARPOB, EBITDA and outcome metrics across Indian hospitals.",
        icon: IconName::PieChart,
    },
    Guide {
        kind: "Self-Assessment",
        title: "Readiness Checklists",
        summary: "Quick diagnostics to gauge your data, clinical and financial readiness for VBHC.",
        icon: IconName::Clipboard,
    },
];

#[component]
fn GuideLibrary(theme: Signal<Theme>) -> impl IntoView {
    view! {
        <Section theme tone=Tone::Paper>
            <SectionHeading eyebrow="Library" title="Guides &" accent="Frameworks"/>
            <div class="card-grid two">
                {GUIDES
                    .iter()
                    .enumerate()
                    .map(|(index, guide)| {
                        view! {
                            <Rise class="card guide-card" delay_ms={index as u32 * 100}>
                                <div class="card-heading">
                                    <div class="icon-badge"><Icon name=guide.icon size=22/></div>
                                    <Pill text=guide.kind/>
                                </div>
                                <h3 class="card-title">{guide.title}</h3>
                                <p class="card-body">{guide.summary}</p>
                                <span class="card-link">
                                    "Available on request"
                                    <Icon name=IconName::Download size=16/>
                                </span>
                            </Rise>
                        }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
fn LibrarySignup(theme: Signal<Theme>) -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (status, set_status) = signal(FormStatus::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let result = NewsletterSignup {
            email: email.get_untracked(),
        }
        .validate();
        if result.is_ok() {
            tracing::info!("resource library signup accepted");
            set_email.set(String::new());
        }
        set_status.set(FormStatus::from_result(result));
    };

    view! {
        <Section theme tone=Tone::Ink>
            <Rise class="signup-panel">
                <Icon name=IconName::Mail size=28/>
                <h2>"Get the full library"</h2>
                <p>"Join 500+ hospital leaders receiving our VBHC insights and new frameworks every month."</p>
                <form class="newsletter-form" on:submit=on_submit novalidate>
                    <input
                        type="email"
                        placeholder="Email address"
                        prop:value=email
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    <button type="submit" class="btn btn-accent">"Subscribe"</button>
                </form>
                {move || match status.get() {
                    FormStatus::Idle => ().into_any(),
                    FormStatus::Rejected(message) => view! { <p class="form-error">{message}</p> }.into_any(),
                    FormStatus::Received => {
                        view! { <p class="form-success">"Thanks! The library is on its way."</p> }.into_any()
                    }
                }}
            </Rise>
        </Section>
    }
}

#[component]
pub fn ResourcesPage(theme: Signal<Theme>) -> impl IntoView {
    view! {
        <Title text=SiteRoute::Resources.title()/>
        <div class="resources-page">
            <PageHero
                theme
                eyebrow="Knowledge Hub"
                icon=IconName::FileText
                title="VBHC"
                accent="Resources."
                lede="Playbooks, benchmarks and checklists for hospital leaders starting the move to value."
            />
            <GuideLibrary theme/>
            <LibrarySignup theme/>
        </div>
    }
}
