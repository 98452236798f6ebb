use leptos::prelude::*;

use crate::components::{IconCard, IconName, Rise, Section, Tone};
use crate::reveal::RevealOptions;
use crate::theme::Theme;

const PROBLEMS: [(IconName, &str, &str); 5] = [
    (
        IconName::Unplug,
        "Fragmented Ecosystems",
        "HIS, EMR, LIS, RIS, billing and pharmacy systems operate in isolation.",
    ),
    (
        IconName::EyeOff,
        "Limited Visibility",
        "Blind spots across the full cycle of patient care prevent optimization.",
    ),
    (
        IconName::TrendingUp,
        "Rising Costs, Stagnant Margins",
        "Clinical input costs are increasing while operational margins shrink.",
    ),
    (
        IconName::Layers,
        "Department-Centric Operations",
        "Workflows focus on isolated departments instead of patient conditions.",
    ),
    (
        IconName::Users,
        "Revenue Leakage",
        "Poor post-discharge engagement results in lost follow-up revenue.",
    ),
];

#[component]
pub fn TheProblem(theme: Signal<Theme>) -> impl IntoView {
    view! {
        <Section theme tone=Tone::Emphasis class="split-section" reveal=RevealOptions::threshold(0.2)>
            <Rise class="split-intro">
                <h4 class="eyebrow">"The Problem"</h4>
                <h2 class="section-title">
                    <span class="faded">"Today’s Hospital Model"</span>
                    <br/>
                    "Is Broken."
                </h2>
                <p class="lede">
                    "Most Indian hospitals struggle with disconnected systems. This results in higher costs, inconsistent outcomes, and underutilized capacity."
                </p>
            </Rise>

            <div class="card-stack">
                {PROBLEMS
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
