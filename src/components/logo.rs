use leptos::prelude::*;

use crate::theme::Theme;

#[component]
pub fn OrioLogo(theme: Signal<Theme>, #[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <img
            src=move || theme.get().logo_src()
            alt="Orio Labs Logo"
            class=format!("logo {class}")
        />
    }
}
