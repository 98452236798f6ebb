use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::components::{Footer, Navbar};
use crate::pages::*;
use crate::routes::ScrollReset;
use crate::theme::Theme;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let (theme, set_theme) = signal(Theme::default());
    let theme: Signal<Theme> = theme.into();
    let toggle_theme = Callback::new(move |_: ()| {
        set_theme.update(|current| {
            *current = current.toggle();
            tracing::debug!(theme = %current, "theme toggled");
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/health-orio.css"/>
        <Title text="Health Orio - Value-Based Care for Hospitals"/>
        <Meta name="description" content="We help 50-100 bed hospitals integrate fragmented systems and implement IPU-based care models."/>

        <Router>
            <ScrollReset/>
            <div
                class="site"
                data-theme=move || theme.get().as_str()
                style=move || theme.get().css_vars()
            >
                <Navbar theme on_toggle=toggle_theme/>
                <main>
                    <Routes fallback=move || view! { <NotFoundPage theme/> }>
                        <Route path=path!("/") view=move || view! { <HomePage theme/> }/>
                        <Route path=path!("/vbhc") view=move || view! { <VbhcPage theme/> }/>
                        <Route path=path!("/what-we-solve") view=move || view! { <WhatWeSolvePage theme/> }/>
                        <Route path=path!("/platform") view=move || view! { <PlatformPage theme/> }/>
                        <Route path=path!("/ipu-solutions") view=move || view! { <IpuSolutionsPage theme/> }/>
                        <Route path=path!("/roi") view=move || view! { <RoiPage theme/> }/>
                        <Route path=path!("/case-studies") view=move || view! { <CaseStudiesPage theme/> }/>
                        <Route path=path!("/solutions-by-role") view=move || view! { <SolutionsByRolePage theme/> }/>
                        <Route path=path!("/resources") view=move || view! { <ResourcesPage theme/> }/>
                        <Route path=path!("/about-us") view=move || view! { <AboutUsPage theme/> }/>
                        <Route path=path!("/contact") view=move || view! { <ContactPage theme/> }/>
                    </Routes>
                </main>
                <Footer theme/>
            </div>
        </Router>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use leptos_axum::ResponseOptions;
    use leptos_router::location::RequestUrl;

    use super::*;
    use crate::routes::SiteRoute;

    const PAGE_CLASSES: [(SiteRoute, &str); 11] = [
        (SiteRoute::Home, "home-page"),
        (SiteRoute::Vbhc, "vbhc-page"),
        (SiteRoute::WhatWeSolve, "what-we-solve-page"),
        (SiteRoute::Platform, "platform-page"),
        (SiteRoute::IpuSolutions, "ipu-page"),
        (SiteRoute::Roi, "roi-page"),
        (SiteRoute::CaseStudies, "case-studies-page"),
        (SiteRoute::SolutionsByRole, "solutions-page"),
        (SiteRoute::Resources, "resources-page"),
        (SiteRoute::AboutUs, "about-page"),
        (SiteRoute::Contact, "contact-page"),
    ];

    fn render(path: &str) -> (String, ResponseOptions) {
        let owner = Owner::new();
        owner.with(|| {
            let (meta, _) = ServerMetaContext::new();
            let response = ResponseOptions::default();
            provide_context(meta);
            provide_context(response.clone());
            provide_context(RequestUrl::new(path));
            (view! { <App/> }.to_html(), response)
        })
    }

    fn status(response: &ResponseOptions) -> Option<u16> {
        response.0.read().ok()?.status.map(|status| status.as_u16())
    }

    #[test]
    fn every_route_renders_its_own_page() {
        assert_eq!(PAGE_CLASSES.len(), SiteRoute::ALL.len());
        for (route, class) in PAGE_CLASSES {
            let (html, response) = render(route.path());
            assert_eq!(SiteRoute::from_path(route.path()), Some(route));
            assert!(html.contains(&format!("class=\"{class}\"")), "{route:?}");
            for (other, other_class) in PAGE_CLASSES {
                if other != route {
                    assert!(!html.contains(&format!("class=\"{other_class}\"")), "{route:?} shows {other:?}");
                }
            }
            assert!(html.contains("site-footer"), "{route:?}");
            assert_eq!(status(&response), None, "{route:?}");
        }
    }

    #[test]
    fn unknown_path_falls_back_to_not_found() {
        let (html, response) = render("/nope");
        assert_eq!(SiteRoute::from_path("/nope"), None);
        assert!(html.contains("Not Found."));
        assert!(html.contains("Back to Home"));
        assert!(!html.contains("class=\"home-page\""));
        assert_eq!(status(&response), Some(404));
    }

    #[test]
    fn home_sections_render_in_order() {
        let (html, _) = render("/");
        let markers = [
            "TRANSFORM",
            "Realizing the Promise of",
            "The Problem",
            "Clinical Care.",
            "Measurable Impact</h2>",
            "Who We Empower.",
            "Book a Hospital Assessment",
        ];
        let positions: Vec<usize> = markers
            .iter()
            .map(|marker| html.find(marker).unwrap_or_else(|| panic!("missing {marker}")))
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]), "{positions:?}");
    }

    #[test]
    fn nav_marks_the_current_page() {
        let (home, _) = render("/");
        assert!(!home.contains("class=\"active\""));

        let (vbhc, _) = render("/vbhc");
        assert!(vbhc.contains("class=\"active\""));
        assert!(vbhc.contains("mobile-link active"));
    }

    #[test]
    fn vbhc_hero_grid_starts_unshifted() {
        let (html, _) = render(SiteRoute::Vbhc.path());
        assert!(html.contains("grid-lines parallax"));
        assert!(html.contains("transform: translateY(0.0px)"));
    }

    #[test]
    fn solutions_page_opens_on_the_roles_tab() {
        let (html, _) = render(SiteRoute::SolutionsByRole.path());
        assert_eq!(html.matches("role=\"tab\"").count(), 3);
        assert!(html.contains("Financial Velocity."));
        assert!(!html.contains("Universal System Connectivity"));
    }
}
