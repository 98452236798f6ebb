use leptos::prelude::*;

/// Stroke icons drawn on a 24x24 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconName {
    Activity,
    Alert,
    ArrowDown,
    ArrowRight,
    ArrowUpRight,
    Baby,
    Briefcase,
    Building,
    Calendar,
    Check,
    CheckCircle,
    Clipboard,
    Clock,
    Cpu,
    Cross,
    Database,
    Download,
    Eye,
    EyeOff,
    FileText,
    Globe,
    Heart,
    Instagram,
    Layers,
    Linkedin,
    Lock,
    Mail,
    MapPin,
    Menu,
    Moon,
    Network,
    Phone,
    PieChart,
    Settings,
    Share,
    ShieldCheck,
    Sparkles,
    Stethoscope,
    Sun,
    Target,
    TrendingDown,
    TrendingUp,
    Twitter,
    Unplug,
    Users,
    Wallet,
    X,
}

impl IconName {
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            IconName::Activity => &["M22 12h-4l-3 9L9 3l-3 9H2"],
            IconName::Alert => &[
                "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20",
                "M12 8v4",
                "M12 16h.01",
            ],
            IconName::ArrowDown => &["M12 5v14", "m19 12-7 7-7-7"],
            IconName::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            IconName::ArrowUpRight => &["M7 7h10v10", "M7 17 17 7"],
            IconName::Baby => &[
                "M9 12h.01",
                "M15 12h.01",
                "M10 16c.5.3 1.2.5 2 .5s1.5-.2 2-.5",
                "M19 6.3a9 9 0 0 1 1.8 3.9 2 2 0 0 1 0 3.6 9 9 0 0 1-17.6 0 2 2 0 0 1 0-3.6A9 9 0 0 1 12 3c2 0 3.5 1.1 3.5 2.5s-.9 2.5-2 2.5c-.8 0-1.5-.4-1.5-1",
            ],
            IconName::Briefcase => &["M2 7h20v14H2z", "M16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16"],
            IconName::Building => &[
                "M6 22V4a2 2 0 0 1 2-2h8a2 2 0 0 1 2 2v18Z",
                "M6 12H4a2 2 0 0 0-2 2v6a2 2 0 0 0 2 2h2",
                "M18 9h2a2 2 0 0 1 2 2v9a2 2 0 0 1-2 2h-2",
                "M10 6h4",
                "M10 10h4",
                "M10 14h4",
                "M10 18h4",
            ],
            IconName::Calendar => &["M3 4h18v18H3z", "M16 2v4", "M8 2v4", "M3 10h18", "m9 16 2 2 4-4"],
            IconName::Check => &["M20 6 9 17l-5-5"],
            IconName::CheckCircle => &["M22 11.08V12a10 10 0 1 1-5.93-9.14", "m9 11 3 3L22 4"],
            IconName::Clipboard => &[
                "M8 2h8v4H8z",
                "M16 4h2a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2h2",
                "m9 14 2 2 4-4",
            ],
            IconName::Clock => &["M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20", "M12 6v6l4 2"],
            IconName::Cpu => &[
                "M4 4h16v16H4z",
                "M9 9h6v6H9z",
                "M9 1v3",
                "M15 1v3",
                "M9 20v3",
                "M15 20v3",
                "M20 9h3",
                "M20 14h3",
                "M1 9h3",
                "M1 14h3",
            ],
            IconName::Cross => &["M11 2a2 2 0 0 0-2 2v5H4a2 2 0 0 0-2 2v2c0 1.1.9 2 2 2h5v5c0 1.1.9 2 2 2h2a2 2 0 0 0 2-2v-5h5a2 2 0 0 0 2-2v-2a2 2 0 0 0-2-2h-5V4a2 2 0 0 0-2-2h-2z"],
            IconName::Database => &[
                "M3 5a9 3 0 1 0 18 0a9 3 0 1 0-18 0",
                "M3 5v14a9 3 0 0 0 18 0V5",
                "M3 12a9 3 0 0 0 18 0",
            ],
            IconName::Download => &["M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4", "m7 10 5 5 5-5", "M12 15V3"],
            IconName::Eye => &[
                "M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7Z",
                "M12 9a3 3 0 1 0 0 6a3 3 0 1 0 0-6",
            ],
            IconName::EyeOff => &[
                "M9.88 9.88a3 3 0 1 0 4.24 4.24",
                "M10.73 5.08A10.43 10.43 0 0 1 12 5c7 0 10 7 10 7a13.16 13.16 0 0 1-1.67 2.68",
                "M6.61 6.61A13.53 13.53 0 0 0 2 12s3 7 10 7a9.74 9.74 0 0 0 5.39-1.61",
                "m2 2 20 20",
            ],
            IconName::FileText => &[
                "M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z",
                "M14 2v6h6",
                "M16 13H8",
                "M16 17H8",
            ],
            IconName::Globe => &[
                "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20",
                "M2 12h20",
                "M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z",
            ],
            IconName::Heart => &["M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z"],
            IconName::Instagram => &[
                "M2 7a5 5 0 0 1 5-5h10a5 5 0 0 1 5 5v10a5 5 0 0 1-5 5H7a5 5 0 0 1-5-5Z",
                "M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z",
                "M17.5 6.5h.01",
            ],
            IconName::Layers => &["m12 2 10 5-10 5L2 7z", "m2 17 10 5 10-5", "m2 12 10 5 10-5"],
            IconName::Linkedin => &[
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6z",
                "M2 9h4v12H2z",
                "M4 2a2 2 0 1 0 0 4a2 2 0 1 0 0-4",
            ],
            IconName::Lock => &["M5 11h14v11H5z", "M7 11V7a5 5 0 0 1 10 0v4"],
            IconName::Mail => &["M2 4h20v16H2z", "m22 7-10 5L2 7"],
            IconName::MapPin => &[
                "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z",
                "M12 7a3 3 0 1 0 0 6a3 3 0 1 0 0-6",
            ],
            IconName::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
            IconName::Moon => &["M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"],
            IconName::Network => &[
                "M16 16h6v6h-6z",
                "M2 16h6v6H2z",
                "M9 2h6v6H9z",
                "M5 16v-3a1 1 0 0 1 1-1h12a1 1 0 0 1 1 1v3",
                "M12 12V8",
            ],
            IconName::Phone => &["M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z"],
            IconName::PieChart => &["M21.21 15.89A10 10 0 1 1 8 2.83", "M22 12A10 10 0 0 0 12 2v10z"],
            IconName::Settings => &[
                "M12 9a3 3 0 1 0 0 6a3 3 0 1 0 0-6",
                "M19.4 15a1.65 1.65 0 0 0 .33 1.82l.06.06a2 2 0 1 1-2.83 2.83l-.06-.06a1.65 1.65 0 0 0-1.82-.33 1.65 1.65 0 0 0-1 1.51V21a2 2 0 0 1-4 0v-.09A1.65 1.65 0 0 0 9 19.4a1.65 1.65 0 0 0-1.82.33l-.06.06a2 2 0 1 1-2.83-2.83l.06-.06A1.65 1.65 0 0 0 4.68 15a1.65 1.65 0 0 0-1.51-1H3a2 2 0 0 1 0-4h.09A1.65 1.65 0 0 0 4.6 9a1.65 1.65 0 0 0-.33-1.82l-.06-.06a2 2 0 1 1 2.83-2.83l.06.06A1.65 1.65 0 0 0 9 4.68a1.65 1.65 0 0 0 1-1.51V3a2 2 0 0 1 4 0v.09a1.65 1.65 0 0 0 1 1.51 1.65 1.65 0 0 0 1.82-.33l.06-.06a2 2 0 1 1 2.83 2.83l-.06.06A1.65 1.65 0 0 0 19.4 9a1.65 1.65 0 0 0 1.51 1H21a2 2 0 0 1 0 4h-.09a1.65 1.65 0 0 0-1.51 1z",
            ],
            IconName::Share => &[
                "M18 2a3 3 0 1 0 0 6a3 3 0 1 0 0-6",
                "M6 9a3 3 0 1 0 0 6a3 3 0 1 0 0-6",
                "M18 16a3 3 0 1 0 0 6a3 3 0 1 0 0-6",
                "m8.59 13.51 6.83 3.98",
                "m15.41 6.51-6.82 3.98",
            ],
            IconName::ShieldCheck => &[
                "M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10",
                "m9 12 2 2 4-4",
            ],
            IconName::Sparkles => &["m12 3-1.9 5.8a2 2 0 0 1-1.3 1.3L3 12l5.8 1.9a2 2 0 0 1 1.3 1.3L12 21l1.9-5.8a2 2 0 0 1 1.3-1.3L21 12l-5.8-1.9a2 2 0 0 1-1.3-1.3Z"],
            IconName::Stethoscope => &[
                "M4.8 2.3A.3.3 0 1 0 5 2H4a2 2 0 0 0-2 2v5a6 6 0 0 0 6 6 6 6 0 0 0 6-6V4a2 2 0 0 0-2-2h-1a.2.2 0 1 0 .3.3",
                "M8 15v1a6 6 0 0 0 6 6 6 6 0 0 0 6-6v-4",
                "M20 8a2 2 0 1 0 0 4a2 2 0 1 0 0-4",
            ],
            IconName::Sun => &[
                "M12 8a4 4 0 1 0 0 8a4 4 0 1 0 0-8",
                "M12 2v2",
                "M12 20v2",
                "m4.93 4.93 1.41 1.41",
                "m17.66 17.66 1.41 1.41",
                "M2 12h2",
                "M20 12h2",
                "m6.34 17.66-1.41 1.41",
                "m19.07 4.93-1.41 1.41",
            ],
            IconName::Target => &[
                "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20",
                "M12 6a6 6 0 1 0 0 12a6 6 0 1 0 0-12",
                "M12 10a2 2 0 1 0 0 4a2 2 0 1 0 0-4",
            ],
            IconName::TrendingDown => &["m22 17-8.5-8.5-5 5L2 7", "M16 17h6v-6"],
            IconName::TrendingUp => &["m22 7-8.5 8.5-5-5L2 17", "M16 7h6v6"],
            IconName::Twitter => &["M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z"],
            IconName::Unplug => &[
                "m19 5 3-3",
                "m2 22 3-3",
                "M6.3 20.3a2.4 2.4 0 0 0 3.4 0L12 18l-6-6-2.3 2.3a2.4 2.4 0 0 0 0 3.4Z",
                "M7.5 13.5 10 11",
                "M10.5 16.5 13 14",
                "m12 6 6 6 2.3-2.3a2.4 2.4 0 0 0 0-3.4l-2.6-2.6a2.4 2.4 0 0 0-3.4 0Z",
            ],
            IconName::Users => &[
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M9 3a4 4 0 1 0 0 8a4 4 0 1 0 0-8",
                "M22 21v-2a4 4 0 0 0-3-3.87",
                "M16 3.13a4 4 0 0 1 0 7.75",
            ],
            IconName::Wallet => &[
                "M19 7V4a1 1 0 0 0-1-1H5a2 2 0 0 0 0 4h15a1 1 0 0 1 1 1v4h-3a2 2 0 0 0 0 4h3a1 1 0 0 0 1-1v-2a1 1 0 0 0-1-1",
                "M3 5v14a2 2 0 0 0 2 2h15a1 1 0 0 0 1-1v-4",
            ],
            IconName::X => &["M18 6 6 18", "m6 6 12 12"],
        }
    }
}

#[component]
pub fn Icon(
    name: IconName,
    #[prop(default = 20)] size: u32,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! {
        <svg
            class=format!("icon {class}")
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {name.paths().iter().map(|d| view! { <path d=*d/> }).collect_view()}
        </svg>
    }
}
