use chrono::Datelike;
use leptos::prelude::*;
use leptos_router::components::A;

use super::icon::{Icon, IconName};
use super::logo::OrioLogo;
use crate::forms::{FormStatus, NewsletterSignup};
use crate::routes::SiteRoute;
use crate::theme::Theme;

struct FooterColumn {
    heading: &'static str,
    links: &'static [(&'static str, SiteRoute)],
}

const COLUMNS: [FooterColumn; 3] = [
    FooterColumn {
        heading: "Platform",
        links: &[
            ("IPU Architecture", SiteRoute::IpuSolutions),
            ("Clinical Data", SiteRoute::Platform),
            ("Financial ROI", SiteRoute::Roi),
            ("Outcomes", SiteRoute::WhatWeSolve),
        ],
    },
    FooterColumn {
        heading: "Company",
        links: &[
            ("About Us", SiteRoute::AboutUs),
            ("Case Studies", SiteRoute::CaseStudies),
            ("Solutions by Role", SiteRoute::SolutionsByRole),
            ("Contact", SiteRoute::Contact),
        ],
    },
    FooterColumn {
        heading: "Resources",
        links: &[
            ("Guides", SiteRoute::Resources),
            ("Value-Based Healthcare", SiteRoute::Vbhc),
            ("Hospital Assessment", SiteRoute::Contact),
            ("Help Center", SiteRoute::Contact),
        ],
    },
];

#[component]
fn NewsletterForm() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (status, set_status) = signal(FormStatus::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let signup = NewsletterSignup {
            email: email.get_untracked(),
        };
        let result = signup.validate();
        match &result {
            Ok(()) => {
                tracing::info!("newsletter signup accepted");
                set_email.set(String::new());
            }
            Err(err) => tracing::debug!(%err, "newsletter signup rejected"),
        }
        set_status.set(FormStatus::from_result(result));
    };

    view! {
        <div class="newsletter">
            <h3 class="eyebrow">"Stay Updated"</h3>
            <form class="newsletter-form" on:submit=on_submit novalidate>
                <input
                    type="email"
                    placeholder="Enter your email address"
                    prop:value=email
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <button type="submit" class="btn btn-accent">
                    "Subscribe"
                    <Icon name=IconName::ArrowRight size=18/>
                </button>
            </form>
            {move || match status.get() {
                FormStatus::Idle => ().into_any(),
                FormStatus::Rejected(message) => view! { <p class="form-error">{message}</p> }.into_any(),
                FormStatus::Received => view! { <p class="form-success">"Thanks! You're on the list."</p> }.into_any(),
            }}
        </div>
    }
}

#[component]
pub fn Footer(theme: Signal<Theme>) -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="site-footer" data-theme=move || theme.get().as_str()>
            <div class="footer-inner">
                <div class="footer-top">
                    <div>
                        <div class="footer-brand">
                            <span class="logo-disc">
                                <OrioLogo theme=Signal::stored(Theme::Dark)/>
                            </span>
                            <span>"ORIO LABS."</span>
                        </div>
                        <p class="footer-blurb">
                            "Transforming healthcare operations through Value-Based Healthcare architecture and IPU-driven technology."
                        </p>
                    </div>
                    <NewsletterForm/>
                </div>

                <div class="footer-columns">
                    {COLUMNS
                        .iter()
                        .map(|column| {
                            view! {
                                <div>
                                    <h4>{column.heading}</h4>
                                    <ul>
                                        {column
                                            .links
                                            .iter()
                                            .map(|(label, route)| view! { <li><A href=route.path()>{*label}</A></li> })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                    <div>
                        <h4>"Contact"</h4>
                        <ul class="footer-contact">
                            <li>
                                <Icon name=IconName::MapPin/>
                                <span>"123 Innovation Drive,"<br/>"Bangalore, India 560001"</span>
                            </li>
                            <li>
                                <Icon name=IconName::Mail/>
                                <a href="mailto:hello@oriolabs.health">"hello@oriolabs.health"</a>
                            </li>
                            <li>
                                <Icon name=IconName::Phone/>
                                <span>"+91 98765 43210"</span>
                            </li>
                        </ul>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{format!("© {year} Orio Labs Pvt Ltd. All rights reserved.")}</p>
                    <div class="socials">
                        <a href="https://www.linkedin.com" aria-label="LinkedIn"><Icon name=IconName::Linkedin/></a>
                        <a href="https://twitter.com" aria-label="Twitter"><Icon name=IconName::Twitter/></a>
                        <a href="https://www.instagram.com" aria-label="Instagram"><Icon name=IconName::Instagram/></a>
                    </div>
                </div>
            </div>
        </footer>
    }
}
