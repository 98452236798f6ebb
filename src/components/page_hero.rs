use leptos::prelude::*;

use super::cards::Pill;
use super::icon::IconName;
use super::section::{Rise, Section, Tone};
use crate::theme::Theme;

/// Opening block shared by the inner pages.
#[component]
pub fn PageHero(
    theme: Signal<Theme>,
    eyebrow: &'static str,
    #[prop(optional)] icon: Option<IconName>,
    title: &'static str,
    #[prop(optional)] accent: Option<&'static str>,
    lede: &'static str,
    /// Decorative layer drawn behind the content.
    #[prop(optional, into)]
    backdrop: Option<ViewFn>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <Section theme tone=Tone::Canvas class="page-hero">
            {backdrop.map(|backdrop| backdrop.run())}
            <Rise>
                {match icon {
                    Some(icon) => view! { <Pill icon text=eyebrow/> }.into_any(),
                    None => view! { <Pill text=eyebrow/> }.into_any(),
                }}
                <h1 class="page-title">
                    {title}
                    {accent.map(|accent| view! { " "<span class="accent-text">{accent}</span> })}
                </h1>
                <p class="hero-lede">{lede}</p>
            </Rise>
            {children.map(|children| view! { <Rise delay_ms=200>{children()}</Rise> })}
        </Section>
    }
}
