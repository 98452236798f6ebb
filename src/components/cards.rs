use leptos::prelude::*;
use leptos_router::components::A;

use super::icon::{Icon, IconName};
use super::section::Rise;

#[component]
pub fn IconCard(
    icon: IconName,
    title: &'static str,
    #[prop(optional)] body: Option<&'static str>,
    #[prop(optional)] delay_ms: u32,
) -> impl IntoView {
    view! {
        <Rise class="card icon-card" delay_ms>
            <div class="icon-badge">
                <Icon name=icon size=22/>
            </div>
            <div>
                <h3 class="card-title">{title}</h3>
                {body.map(|body| view! { <p class="card-body">{body}</p> })}
            </div>
        </Rise>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

/// A headline metric such as "10-20%" with its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub detail: &'static str,
    pub value: &'static str,
    pub unit: Option<&'static str>,
    pub icon: IconName,
    pub trend: Trend,
}

#[component]
pub fn StatTile(stat: Stat, #[prop(optional)] delay_ms: u32) -> impl IntoView {
    let trend_icon = match stat.trend {
        Trend::Up => IconName::ArrowUpRight,
        Trend::Down => IconName::TrendingDown,
    };

    view! {
        <Rise class="card stat-tile" delay_ms>
            <div class="stat-head">
                <h3 class="stat-label">{stat.label}</h3>
                <Icon name=stat.icon size=20/>
            </div>
            <div class="stat-value">
                <span class="stat-number">{stat.value}</span>
                {stat.unit.map(|unit| view! { <span class="stat-unit">{unit}</span> })}
                <Icon name=trend_icon size=22 class="stat-trend"/>
            </div>
            <p class="stat-detail">{stat.detail}</p>
        </Rise>
    }
}

#[component]
pub fn Pill(#[prop(optional)] icon: Option<IconName>, text: &'static str) -> impl IntoView {
    view! {
        <span class="pill">
            {icon.map(|name| view! { <Icon name size=14/> })}
            {text}
        </span>
    }
}

#[component]
pub fn CheckList(
    items: &'static [&'static str],
    #[prop(default = IconName::CheckCircle)] icon: IconName,
) -> impl IntoView {
    view! {
        <ul class="check-list">
            {items
                .iter()
                .map(|item| {
                    view! {
                        <li>
                            <Icon name=icon size=16/>
                            <span>{*item}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

/// Call-to-action link styled as a button.
#[component]
pub fn CtaLink(
    href: &'static str,
    label: &'static str,
    #[prop(optional)] secondary: bool,
) -> impl IntoView {
    let class = if secondary { "btn btn-secondary" } else { "btn btn-primary" };

    view! {
        <A href=href attr:class=class>
            {label}
            <Icon name=IconName::ArrowRight size=18/>
        </A>
    }
}
