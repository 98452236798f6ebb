use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// The static route table: one literal path per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SiteRoute {
    Home,
    Vbhc,
    WhatWeSolve,
    Platform,
    IpuSolutions,
    Roi,
    CaseStudies,
    SolutionsByRole,
    Resources,
    AboutUs,
    Contact,
}

impl SiteRoute {
    pub const ALL: [SiteRoute; 11] = [
        SiteRoute::Home,
        SiteRoute::Vbhc,
        SiteRoute::WhatWeSolve,
        SiteRoute::Platform,
        SiteRoute::IpuSolutions,
        SiteRoute::Roi,
        SiteRoute::CaseStudies,
        SiteRoute::SolutionsByRole,
        SiteRoute::Resources,
        SiteRoute::AboutUs,
        SiteRoute::Contact,
    ];

    pub fn path(self) -> &'static str {
        match self {
            SiteRoute::Home => "/",
            SiteRoute::Vbhc => "/vbhc",
            SiteRoute::WhatWeSolve => "/what-we-solve",
            SiteRoute::Platform => "/platform",
            SiteRoute::IpuSolutions => "/ipu-solutions",
            SiteRoute::Roi => "/roi",
            SiteRoute::CaseStudies => "/case-studies",
            SiteRoute::SolutionsByRole => "/solutions-by-role",
            SiteRoute::Resources => "/resources",
            SiteRoute::AboutUs => "/about-us",
            SiteRoute::Contact => "/contact",
        }
    }

    /// Document title for the page.
    pub fn title(self) -> &'static str {
        match self {
            SiteRoute::Home => "Health Orio - Value-Based Care for Hospitals",
            SiteRoute::Vbhc => "Value-Based Healthcare - Health Orio",
            SiteRoute::WhatWeSolve => "What We Solve - Health Orio",
            SiteRoute::Platform => "Platform & Technology - Health Orio",
            SiteRoute::IpuSolutions => "IPU Solutions - Health Orio",
            SiteRoute::Roi => "ROI - Health Orio",
            SiteRoute::CaseStudies => "Case Studies - Health Orio",
            SiteRoute::SolutionsByRole => "Solutions by Role - Health Orio",
            SiteRoute::Resources => "Resources - Health Orio",
            SiteRoute::AboutUs => "About Us - Health Orio",
            SiteRoute::Contact => "Book an Assessment - Health Orio",
        }
    }

    /// Exact lookup; a single trailing slash is tolerated.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = match path.strip_suffix('/') {
            Some("") | None => path,
            Some(trimmed) => trimmed,
        };
        Self::ALL.into_iter().find(|route| route.path() == path)
    }
}

/// A labelled navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub route: SiteRoute,
}

const fn link(label: &'static str, route: SiteRoute) -> NavLink {
    NavLink { label, route }
}

pub const DESKTOP_LINKS: [NavLink; 6] = [
    link("Solutions", SiteRoute::SolutionsByRole),
    link("VBHC", SiteRoute::Vbhc),
    link("Platform", SiteRoute::Platform),
    link("IPU", SiteRoute::IpuSolutions),
    link("ROI", SiteRoute::Roi),
    link("Resources", SiteRoute::Resources),
];

pub const MOBILE_LINKS: [NavLink; 7] = [
    link("Solutions", SiteRoute::SolutionsByRole),
    link("VBHC", SiteRoute::Vbhc),
    link("Platform", SiteRoute::Platform),
    link("IPU", SiteRoute::IpuSolutions),
    link("ROI", SiteRoute::Roi),
    link("Company", SiteRoute::AboutUs),
    link("Contact", SiteRoute::Contact),
];

/// Remembers the last seen path and reports when it changes.
#[derive(Debug, Default, Clone)]
pub struct PathWatch {
    last: Option<String>,
}

impl PathWatch {
    pub fn changed(&mut self, path: &str) -> bool {
        if self.last.as_deref() == Some(path) {
            return false;
        }
        self.last = Some(path.to_string());
        true
    }
}

fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}

/// Resets the window scroll position whenever the path changes.
#[component]
pub fn ScrollReset() -> impl IntoView {
    let location = use_location();
    let watch = StoredValue::new(PathWatch::default());

    Effect::new(move |_| {
        let path = location.pathname.get();
        if watch.try_update_value(|w| w.changed(&path)).unwrap_or(false) {
            tracing::debug!(%path, "navigated, resetting scroll");
            scroll_to_top();
        }
    });
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn paths_are_unique_and_absolute() {
        let paths: HashSet<_> = SiteRoute::ALL.iter().map(|r| r.path()).collect();
        assert_eq!(paths.len(), SiteRoute::ALL.len());
        assert!(paths.iter().all(|p| p.starts_with('/')));
    }

    #[test]
    fn every_route_resolves_to_itself() {
        for route in SiteRoute::ALL {
            assert_eq!(SiteRoute::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn vbhc_resolves_only_to_vbhc() {
        assert_eq!(SiteRoute::from_path("/vbhc"), Some(SiteRoute::Vbhc));
        assert_eq!(SiteRoute::from_path("/vbhc/"), Some(SiteRoute::Vbhc));
        assert_eq!(SiteRoute::from_path("/vbhc/extra"), None);
        assert_eq!(SiteRoute::from_path("vbhc"), None);
    }

    #[test]
    fn unknown_paths_do_not_match() {
        assert_eq!(SiteRoute::from_path("/pricing"), None);
        assert_eq!(SiteRoute::from_path(""), None);
        assert_eq!(SiteRoute::from_path("/"), Some(SiteRoute::Home));
    }

    #[test]
    fn nav_links_point_at_real_routes() {
        for link in DESKTOP_LINKS.iter().chain(MOBILE_LINKS.iter()) {
            assert_eq!(SiteRoute::from_path(link.route.path()), Some(link.route));
            assert!(!link.label.is_empty());
        }
    }

    #[test]
    fn every_navigation_between_routes_resets_scroll() {
        let mut watch = PathWatch::default();
        assert!(watch.changed("/"));
        for from in SiteRoute::ALL {
            for to in SiteRoute::ALL {
                if from == to {
                    continue;
                }
                watch.changed(from.path());
                assert!(watch.changed(to.path()), "{from:?} -> {to:?}");
            }
        }
    }

    #[test]
    fn same_path_does_not_reset() {
        let mut watch = PathWatch::default();
        assert!(watch.changed("/roi"));
        assert!(!watch.changed("/roi"));
    }
}
