use leptos::prelude::*;

use crate::components::{CtaLink, Icon, IconName, Rise, Section, Tone};
use crate::routes::SiteRoute;
use crate::theme::Theme;

#[component]
pub fn CallToAction(
    theme: Signal<Theme>,
    #[prop(default = "Ready to evaluate your hospital’s VBHC potential?")] headline: &'static str,
    #[prop(default = "Take the first step towards outcome-driven architecture with a comprehensive analysis.")]
    body: &'static str,
) -> impl IntoView {
    view! {
        <Section theme tone=Tone::Canvas>
            <Rise class="cta-panel">
                <div>
                    <Icon name=IconName::Sparkles size=28 class="cta-spark"/>
                    <h2>{headline}</h2>
                    <p>{body}</p>
                </div>
                <CtaLink href=SiteRoute::Contact.path() label="Book a Hospital Assessment"/>
            </Rise>
        </Section>
    }
}
