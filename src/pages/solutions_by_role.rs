use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{
    Icon, IconCard, IconName, PageHero, Pill, Rise, Section, SectionHeading, Tone,
};
use crate::reveal::RevealOptions;
use crate::routes::SiteRoute;
use crate::sections::CallToAction;
use crate::theme::Theme;

/// A titled feature with a one-sentence description.
type Feature = (IconName, &'static str, &'static str);

const BRIDGE_FEATURES: [Feature; 7] = [
    (
        IconName::ShieldCheck,
        "Compliance-First by Design",
        "Native support for India and UAE healthcare regulations with real-time consent tagging and audit trails.",
    ),
    (
        IconName::Network,
        "Universal System Connectivity",
        "Secure connectors for EMR, LIMS, PACS, HL7, FHIR, and proprietary hospital systems.",
    ),
    (
        IconName::FileText,
        "Structured + Unstructured Data Ingestion",
        "OCR and NLP pipelines to digitize paper records, PDFs, and scanned reports.",
    ),
    (
        IconName::Share,
        "API-Powered Interoperability",
        "Standards-aligned APIs that enable seamless data exchange across systems and partners.",
    ),
    (
        IconName::Database,
        "Cloud-Native Data Lake",
        "Unified storage for clinical, operational, and imaging data, ready for scale.",
    ),
    (
        IconName::Cpu,
        "Analytics & AI Readiness",
        "Clean, normalized datasets optimized for analytics, reporting, and AI/ML workflows.",
    ),
    (
        IconName::Lock,
        "Patient-Controlled Access",
        "Secure patient app for record access, sharing, and consent management.",
    ),
];

const INSIGHTS_FEATURES: [Feature; 9] = [
    (
        IconName::Sparkles,
        "AI-Powered Medical Report Analysis",
        "Automatically extracts, structures, and summarizes medical reports into clinical insights, problem areas, monitoring plans, and recommended actions.",
    ),
    (
        IconName::Calendar,
        "Chronological Health Timeline",
        "Displays reports based on actual test date (not upload date), giving doctors and patients a clear medical progression view.",
    ),
    (
        IconName::Layers,
        "Structured + Raw Data View",
        "Dual interface with AI-generated overview and detailed tabular test results for clinical transparency.",
    ),
    (
        IconName::Share,
        "Secure Report Sharing",
        "Time-bound public link generation for sharing reports with doctors, specialists, or caregivers.",
    ),
    (
        IconName::Activity,
        "HealthOrio AI Assistant",
        "Context-aware AI chat that understands individual medical reports and enables meaningful health conversations.",
    ),
    (
        IconName::Users,
        "Family Health Management",
        "Multi-member health dashboard with individual reports, vaccination tracking, and appointment visibility.",
    ),
    (
        IconName::Clipboard,
        "Vaccination Tracking System",
        "Centralized vaccine status monitoring (completed, overdue, upcoming) with booster dose tracking and full history.",
    ),
    (
        IconName::PieChart,
        "Analytics-Ready Architecture",
        "Clean, structured datasets optimized for provider analytics, engagement tracking, and future AI/ML enhancements.",
    ),
    (
        IconName::ShieldCheck,
        "Enterprise-Grade Security",
        "OTP verification, controlled access, consent-based data sharing, and secure infrastructure.",
    ),
];

/// What each leadership role gets out of the platform.
struct RoleBrief {
    role: &'static str,
    icon: IconName,
    headline: &'static str,
    tone: Tone,
    benefits: [Feature; 3],
}

static ROLES: [RoleBrief; 3] = [
    RoleBrief {
        role: "For Promoters & CEOs",
        icon: IconName::Briefcase,
        headline: "Financial Velocity.",
        tone: Tone::Paper,
        benefits: [
            (
                IconName::TrendingUp,
                "Faster EBITDA Improvement",
                "Unlock hidden margins through IPU-driven cost containment.",
            ),
            (
                IconName::Building,
                "Capital-Efficient Growth",
                "Scale outcome models across locations without linear cost increases.",
            ),
            (
                IconName::PieChart,
                "Predictable Financial Outcomes",
                "Data-driven forecasting replaces intuition-based budgeting.",
            ),
        ],
    },
    RoleBrief {
        role: "For Medical Directors",
        icon: IconName::Stethoscope,
        headline: "Clinical Excellence.",
        tone: Tone::Canvas,
        benefits: [
            (
                IconName::Eye,
                "Outcome Transparency",
                "Real-time visibility into clinical success rates per condition.",
            ),
            (
                IconName::Clipboard,
                "Standardized Pathways",
                "Ensure adherence to best protocols across all departments.",
            ),
            (
                IconName::Alert,
                "Reduced Complications",
                "Early warning systems to prevent adverse events before they happen.",
            ),
        ],
    },
    RoleBrief {
        role: "For IT & Technology Heads",
        icon: IconName::Cpu,
        headline: "Architecture.",
        tone: Tone::Paper,
        benefits: [
            (
                IconName::Network,
                "Seamless Integrations",
                "API-first design connects easily with existing hospital systems.",
            ),
            (
                IconName::Settings,
                "Minimal IT Overhead",
                "Cloud-native deployment means zero hardware maintenance.",
            ),
            (
                IconName::Layers,
                "Scalable Architecture",
                "Grow from 1 hospital to 100 without rebuilding your tech stack.",
            ),
        ],
    },
];

/// Panels of the solutions page. Only the selected one is rendered.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PlatformTab {
    #[default]
    Roles,
    Bridge,
    Insights,
}

impl PlatformTab {
    pub const ALL: [PlatformTab; 3] = [PlatformTab::Roles, PlatformTab::Bridge, PlatformTab::Insights];

    pub fn label(self) -> &'static str {
        match self {
            PlatformTab::Roles => "By Role",
            PlatformTab::Bridge => "Bridge",
            PlatformTab::Insights => "Insights",
        }
    }

    pub fn icon(self) -> IconName {
        match self {
            PlatformTab::Roles => IconName::Briefcase,
            PlatformTab::Bridge => IconName::Database,
            PlatformTab::Insights => IconName::Users,
        }
    }

    /// Element id of the panel the tab controls.
    pub fn panel_id(self) -> &'static str {
        match self {
            PlatformTab::Roles => "panel-roles",
            PlatformTab::Bridge => "panel-bridge",
            PlatformTab::Insights => "panel-insights",
        }
    }

    /// Product panels are revealed as soon as they mount, since the visitor
    /// opened them on purpose and may already be scrolled past the fold.
    pub fn reveal(self) -> RevealOptions {
        match self {
            PlatformTab::Roles => RevealOptions::default(),
            PlatformTab::Bridge | PlatformTab::Insights => RevealOptions::threshold(0.3).eager(),
        }
    }
}

#[component]
fn TabList(tab: ReadSignal<PlatformTab>, set_tab: WriteSignal<PlatformTab>) -> impl IntoView {
    view! {
        <div class="tab-list" role="tablist" aria-label="Solutions">
            {PlatformTab::ALL
                .into_iter()
                .map(|option| {
                    view! {
                        <button
                            type="button"
                            role="tab"
                            aria-controls=option.panel_id()
                            aria-selected=move || (tab.get() == option).to_string()
                            on:click=move |_| set_tab.set(option)
                        >
                            <Icon name=option.icon() size=18/>
                            {option.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ProductSuite(
    theme: Signal<Theme>,
    tone: Tone,
    name: &'static str,
    tagline: &'static str,
    features: &'static [Feature],
    #[prop(optional)] reveal: Option<RevealOptions>,
) -> impl IntoView {
    view! {
        <Section theme tone reveal=reveal.unwrap_or_default()>
            <SectionHeading eyebrow="HealthOrio" title=name lede=tagline/>
            <div class="card-grid three">
                {features
                    .iter()
                    .enumerate()
                    .map(|(index, (icon, title, body))| {
                        view! { <IconCard icon=*icon title=*title body=*body delay_ms={index as u32 * 80}/> }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
fn TabPanel(theme: Signal<Theme>, tab: PlatformTab) -> impl IntoView {
    let panel = match tab {
        PlatformTab::Roles => {
            ROLES.iter().map(|brief| view! { <RoleSection theme brief/> }).collect_view().into_any()
        }
        PlatformTab::Bridge => {
            view! {
                <ProductSuite
                    theme
                    tone=Tone::Paper
                    name="Bridge"
                    tagline="Modernize your data. Stay compliant. Move at startup speed."
                    features=&BRIDGE_FEATURES
                    reveal=tab.reveal()
                />
            }
                .into_any()
        }
        PlatformTab::Insights => {
            view! {
                <ProductSuite
                    theme
                    tone=Tone::Paper
                    name="Insights"
                    tagline="Turn every medical report into a clinical insight patients and doctors can act on."
                    features=&INSIGHTS_FEATURES
                    reveal=tab.reveal()
                />
            }
                .into_any()
        }
    };

    view! {
        <div id=tab.panel_id() role="tabpanel">
            {panel}
        </div>
    }
}

#[component]
fn RoleSection(theme: Signal<Theme>, brief: &'static RoleBrief) -> impl IntoView {
    view! {
        <Section theme tone=brief.tone>
            <Rise class="section-heading">
                <div>
                    <Pill icon=brief.icon text=brief.role/>
                    <h2 class="section-title accent-text">{brief.headline}</h2>
                </div>
            </Rise>
            <div class="card-grid three">
                {brief
                    .benefits
                    .iter()
                    .enumerate()
                    .map(|(index, (icon, title, body))| {
                        view! { <IconCard icon=*icon title=*title body=*body delay_ms={index as u32 * 120}/> }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
pub fn SolutionsByRolePage(theme: Signal<Theme>) -> impl IntoView {
    let (tab, set_tab) = signal(PlatformTab::default());

    view! {
        <Title text=SiteRoute::SolutionsByRole.title()/>
        <div class="solutions-page">
            <PageHero
                theme
                eyebrow="Solutions & Platforms"
                icon=IconName::Target
                title="Solutions for Every"
                accent="Hospital Leader."
                lede="One platform, tuned to the priorities of promoters, medical directors and technology heads."
            />
            <TabList tab set_tab/>
            {move || view! { <TabPanel theme tab=tab.get()/> }}
            <CallToAction theme/>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_tab_is_open_first() {
        assert_eq!(PlatformTab::default(), PlatformTab::Roles);
        assert_eq!(PlatformTab::ALL[0], PlatformTab::Roles);
    }

    #[test]
    fn product_tabs_reveal_on_mount() {
        assert!(!PlatformTab::Roles.reveal().is_eager());
        for tab in [PlatformTab::Bridge, PlatformTab::Insights] {
            let reveal = tab.reveal();
            assert!(reveal.is_eager(), "{tab:?}");
            assert_eq!(reveal.value(), 0.3);
        }
    }

    #[test]
    fn tabs_have_distinct_labels_and_panels() {
        for (i, a) in PlatformTab::ALL.iter().enumerate() {
            for b in &PlatformTab::ALL[i + 1..] {
                assert_ne!(a.label(), b.label());
                assert_ne!(a.panel_id(), b.panel_id());
            }
        }
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn only_the_selected_panel_is_rendered() {
        let render = |tab: PlatformTab| {
            let owner = Owner::new();
            owner.with(|| view! { <TabPanel theme=Signal::stored(Theme::Dark) tab/> }.to_html())
        };

        let roles = render(PlatformTab::Roles);
        assert!(roles.contains("panel-roles"));
        assert!(roles.contains("Financial Velocity."));
        assert!(!roles.contains("Universal System Connectivity"));

        let bridge = render(PlatformTab::Bridge);
        assert!(bridge.contains("Universal System Connectivity"));
        assert!(!bridge.contains("Financial Velocity."));
        assert!(!bridge.contains("Family Health Management"));

        let insights = render(PlatformTab::Insights);
        assert!(insights.contains("Family Health Management"));
        assert!(!insights.contains("Universal System Connectivity"));
    }
}
