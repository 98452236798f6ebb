use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use super::icon::{Icon, IconName};
use super::logo::OrioLogo;
use crate::routes::{SiteRoute, DESKTOP_LINKS, MOBILE_LINKS};
use crate::scroll::{use_scrolled, COMPACT_OFFSET};
use crate::theme::Theme;

#[component]
pub fn Navbar(theme: Signal<Theme>, on_toggle: Callback<()>) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let scrolled = use_scrolled(COMPACT_OFFSET);
    let close_menu = move |_: leptos::ev::MouseEvent| set_menu_open.set(false);
    let pathname = use_location().pathname;
    let current = Memo::new(move |_| SiteRoute::from_path(&pathname.get()));
    let is_current = move |route: SiteRoute| current.get() == Some(route);

    view! {
        <nav class=move || if scrolled.get() { "main-nav compact" } else { "main-nav" }>
            <div class="nav-bar">
                <A href=SiteRoute::Home.path() attr:class="nav-brand" on:click=close_menu>
                    <OrioLogo theme class="nav-logo"/>
                    <span>"ORIO LABS"</span>
                </A>

                <div class="nav-links">
                    {DESKTOP_LINKS
                        .into_iter()
                        .map(|link| {
                            view! {
                                <A
                                    href=link.route.path()
                                    attr:class=move || if is_current(link.route) { "active" } else { "" }
                                >
                                    {link.label}
                                </A>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="nav-actions">
                    <button
                        class="theme-toggle"
                        aria-label="Toggle Theme"
                        on:click=move |_| on_toggle.run(())
                    >
                        {move || {
                            let icon = if theme.get().is_light() { IconName::Sun } else { IconName::Moon };
                            view! { <Icon name=icon size=20/> }
                        }}
                    </button>

                    <A href=SiteRoute::Contact.path() attr:class="btn btn-primary nav-cta">
                        "Get Started"
                        <Icon name=IconName::ArrowUpRight size=16/>
                    </A>

                    <button
                        class="menu-toggle"
                        aria-label="Toggle Menu"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || {
                            let icon = if menu_open.get() { IconName::X } else { IconName::Menu };
                            view! { <Icon name=icon size=24/> }
                        }}
                    </button>
                </div>
            </div>

            <div class=move || if menu_open.get() { "mobile-menu open" } else { "mobile-menu" }>
                {MOBILE_LINKS
                    .into_iter()
                    .enumerate()
                    .map(|(index, link)| {
                        view! {
                            <A
                                href=link.route.path()
                                attr:class=move || if is_current(link.route) { "mobile-link active" } else { "mobile-link" }
                                attr:style=format!("transition-delay: {}ms", index * 50)
                                on:click=close_menu
                            >
                                <span>{link.label}</span>
                                <Icon name=IconName::ArrowUpRight size=16/>
                            </A>
                        }
                    })
                    .collect_view()}
                <A href=SiteRoute::Contact.path() attr:class="btn btn-primary mobile-cta" on:click=close_menu>
                    "Get Started"
                </A>
            </div>
        </nav>
    }
}
