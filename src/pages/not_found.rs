use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{CtaLink, IconName, PageHero};
use crate::routes::SiteRoute;
use crate::theme::Theme;

/// Rendered for any path outside the route table.
#[component]
pub fn NotFoundPage(theme: Signal<Theme>) -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(axum::http::StatusCode::NOT_FOUND);
    }

    view! {
        <Title text="Page Not Found - Health Orio"/>
        <PageHero
            theme
            eyebrow="404"
            icon=IconName::Alert
            title="Page"
            accent="Not Found."
            lede="The page you are looking for has moved or never existed."
        >
            <CtaLink href=SiteRoute::Home.path() label="Back to Home"/>
        </PageHero>
    }
}
