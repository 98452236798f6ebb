use leptos::prelude::*;

use crate::reveal::{use_reveal, RevealOptions};
use crate::theme::{Role, Theme};

/// Background surface of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Canvas,
    Paper,
    Emphasis,
    /// Dark in both themes.
    Ink,
}

impl Tone {
    pub fn background(self) -> Role {
        match self {
            Tone::Canvas => Role::Canvas,
            Tone::Paper => Role::Paper,
            Tone::Emphasis => Role::Emphasis,
            Tone::Ink => Role::Ink,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Tone::Canvas => "tone-canvas",
            Tone::Paper => "tone-paper",
            Tone::Emphasis => "tone-emphasis",
            Tone::Ink => "tone-ink",
        }
    }
}

/// A page section with its own reveal latch.
///
/// Descendants wrapped in [`Rise`] animate in when the section is revealed.
#[component]
pub fn Section(
    theme: Signal<Theme>,
    tone: Tone,
    #[prop(optional)] id: Option<&'static str>,
    #[prop(optional, into)] class: String,
    #[prop(optional)] reveal: Option<RevealOptions>,
    children: Children,
) -> impl IntoView {
    let (node, visible) = use_reveal(reveal.unwrap_or_default());

    view! {
        <section
            id=id
            class=format!("section {} {class}", tone.class())
            style=format!("background: var(--orio-{})", tone.background().css_name())
            data-theme=move || theme.get().as_str()
        >
            <div
                node_ref=node
                class=move || {
                    if visible.get() { "section-inner reveal is-visible" } else { "section-inner reveal" }
                }
            >
                {children()}
            </div>
        </section>
    }
}

/// Entrance-animated block, staggered by `delay_ms`.
#[component]
pub fn Rise(
    #[prop(optional)] delay_ms: u32,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!("rise {class}") style=format!("transition-delay: {delay_ms}ms")>
            {children()}
        </div>
    }
}

#[component]
pub fn SectionHeading(
    eyebrow: &'static str,
    title: &'static str,
    #[prop(optional)] accent: Option<&'static str>,
    #[prop(optional)] lede: Option<&'static str>,
) -> impl IntoView {
    view! {
        <Rise class="section-heading">
            <div>
                <h4 class="eyebrow">{eyebrow}</h4>
                <h2 class="section-title">
                    {title}
                    {accent.map(|accent| view! { <br/><span class="accent-text">{accent}</span> })}
                </h2>
            </div>
            {lede.map(|lede| view! { <p class="lede">{lede}</p> })}
        </Rise>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ink_is_dark_in_both_themes() {
        assert_eq!(
            Tone::Ink.background().color(Theme::Light),
            Tone::Ink.background().color(Theme::Dark)
        );
    }

    #[test]
    fn tone_classes_are_distinct() {
        let classes = [Tone::Canvas, Tone::Paper, Tone::Emphasis, Tone::Ink].map(Tone::class);
        for (i, a) in classes.iter().enumerate() {
            for b in &classes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
