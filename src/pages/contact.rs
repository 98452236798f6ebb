use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{CheckList, Icon, IconName, PageHero, Rise, Section, Tone};
use crate::forms::{AssessmentRequest, BedCapacity, FormStatus};
use crate::routes::SiteRoute;
use crate::theme::Theme;

const ASSESSMENT_COVERS: [&str; 4] = [
    "Hospital Size",
    "Specialties",
    "Current Challenges",
    "Priority Conditions",
];

#[component]
fn AssessmentForm() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (hospital, set_hospital) = signal(String::new());
    let (bed_capacity, set_bed_capacity) = signal(None::<BedCapacity>);
    let (challenge, set_challenge) = signal(String::new());
    let (status, set_status) = signal(FormStatus::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = AssessmentRequest {
            name: name.get_untracked(),
            email: email.get_untracked(),
            hospital: hospital.get_untracked(),
            bed_capacity: bed_capacity.get_untracked(),
            challenge: challenge.get_untracked(),
        };
        let result = request.validate();
        match &result {
            Ok(()) => tracing::info!(
                hospital = %request.hospital,
                beds = request.bed_capacity.map(BedCapacity::key),
                "assessment request accepted"
            ),
            Err(err) => tracing::debug!(%err, "assessment request rejected"),
        }
        set_status.set(FormStatus::from_result(result));
    };

    view! {
        <form class="card assessment-form" on:submit=on_submit novalidate>
            <div class="form-row">
                <label>
                    "Name"
                    <input
                        type="text"
                        placeholder="Dr. John Doe"
                        prop:value=name
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Work Email"
                    <input
                        type="email"
                        placeholder="john@hospital.com"
                        prop:value=email
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </label>
            </div>
            <label>
                "Hospital Name"
                <input
                    type="text"
                    placeholder="City General Hospital"
                    prop:value=hospital
                    on:input=move |ev| set_hospital.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Bed Capacity"
                <select on:change=move |ev| set_bed_capacity.set(event_target_value(&ev).parse().ok())>
                    <option value="" selected=move || bed_capacity.get().is_none()>
                        "Select capacity"
                    </option>
                    {BedCapacity::ALL
                        .into_iter()
                        .map(|capacity| {
                            view! {
                                <option
                                    value=capacity.key()
                                    selected=move || bed_capacity.get() == Some(capacity)
                                >
                                    {capacity.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>
            <label>
                "Priority Challenge"
                <textarea
                    rows="4"
                    placeholder="e.g. High LOS in Orthopedics, Rising Diabetes complications..."
                    prop:value=challenge
                    on:input=move |ev| set_challenge.set(event_target_value(&ev))
                ></textarea>
            </label>
            <button type="submit" class="btn btn-primary btn-block">
                "Schedule Assessment"
                <Icon name=IconName::Calendar size=18/>
            </button>
            {move || match status.get() {
                FormStatus::Idle => ().into_any(),
                FormStatus::Rejected(message) => view! { <p class="form-error">{message}</p> }.into_any(),
                FormStatus::Received => {
                    view! {
                        <p class="form-success">
                            "Thank you. Our team will reach out within two business days to schedule your assessment."
                        </p>
                    }
                        .into_any()
                }
            }}
            <p class="form-note">
                <Icon name=IconName::Lock size=14/>
                "Confidential & Secure"
            </p>
        </form>
    }
}

#[component]
pub fn ContactPage(theme: Signal<Theme>) -> impl IntoView {
    view! {
        <Title text=SiteRoute::Contact.title()/>
        <div class="contact-page">
            <PageHero
                theme
                eyebrow="Get Started"
                icon=IconName::Mail
                title="Start with a"
                accent="VBHC Readiness Assessment."
                lede="A structured review of where your hospital stands today and which conditions to move to value first."
            />
            <Section theme tone=Tone::Paper>
                <div class="two-col">
                    <Rise>
                        <h3 class="subheading">"The assessment covers:"</h3>
                        <CheckList items=&ASSESSMENT_COVERS/>
                        <ul class="contact-lines">
                            <li>
                                <Icon name=IconName::Mail/>
                                <a href="mailto:hello@oriolabs.health">"hello@oriolabs.health"</a>
                            </li>
                            <li>
                                <Icon name=IconName::Phone/>
                                <span>"+91 98765 43210"</span>
                            </li>
                        </ul>
                    </Rise>
                    <Rise delay_ms=150>
                        <AssessmentForm/>
                    </Rise>
                </div>
            </Section>
        </div>
    }
}
