use leptos::prelude::*;

use crate::components::{CtaLink, OrioLogo, Rise, Section, Tone};
use crate::routes::SiteRoute;
use crate::theme::Theme;

#[component]
pub fn Hero(theme: Signal<Theme>) -> impl IntoView {
    view! {
        <Section theme tone=Tone::Canvas class="hero">
            <div class="grid-lines" aria-hidden="true">
                {(0..12).map(|_| view! { <span></span> }).collect_view()}
            </div>

            <div class="hero-content">
                <Rise>
                    <h1 class="hero-title">
                        <span class="highlight-block">"TRANSFORM"</span>
                        " Hospital Outcomes, Costs & Margins"
                        <span class="hero-subline">
                            "with "<span class="accent-underline">"Value-Based Care"</span>
                        </span>
                    </h1>
                </Rise>

                <Rise delay_ms=200>
                    <p class="hero-lede">
                        "We help 50–100 bed hospitals integrate fragmented systems and implement IPU-based care models to improve clinical outcomes and increase EBITDA—without heavy capex."
                    </p>
                </Rise>

                <Rise delay_ms=300 class="cta-row">
                    <CtaLink href=SiteRoute::Contact.path() label="Request VBHC Assessment"/>
                    <CtaLink href=SiteRoute::Roi.path() label="See IPU ROI" secondary=true/>
                </Rise>
            </div>

            <div class="hero-brand">
                <OrioLogo theme class="hero-logo"/>
                <span class="wordmark">
                    <span class="wordmark-strong">"HEALTH"</span>
                    " "
                    <span class="wordmark-light">"ORIO"</span>
                </span>
            </div>
        </Section>
    }
}
