use std::fmt;
use std::str::FromStr;

/// Site-wide palette selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Unknown theme: {0}")]
pub struct ThemeParseError(pub String);

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_light(self) -> bool {
        self == Theme::Light
    }

    /// Inline style declaring every role as a `--orio-*` custom property.
    pub fn css_vars(self) -> String {
        Role::ALL
            .iter()
            .map(|role| format!("--orio-{}:{};", role.css_name(), role.color(self)))
            .collect()
    }

    /// Brand mark asset for this palette.
    pub fn logo_src(self) -> &'static str {
        match self {
            Theme::Light => "/assets/orio-logo.png",
            Theme::Dark => "/assets/orio-logo-dark.png",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ThemeParseError(other.to_string())),
        }
    }
}

/// Semantic colour roles used by the stylesheet.
///
/// The surface roles (`Canvas`, `Paper`, `Emphasis`, `Ink`) are section
/// backgrounds; a section picks one and its text follows from `Text`/`Muted`
/// unless the surface is always dark (`Ink`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Canvas,
    Paper,
    Emphasis,
    Ink,
    Text,
    Muted,
    Card,
    Border,
    Accent,
    OnAccent,
}

impl Role {
    pub const ALL: [Role; 10] = [
        Role::Canvas,
        Role::Paper,
        Role::Emphasis,
        Role::Ink,
        Role::Text,
        Role::Muted,
        Role::Card,
        Role::Border,
        Role::Accent,
        Role::OnAccent,
    ];

    pub fn css_name(self) -> &'static str {
        match self {
            Role::Canvas => "canvas",
            Role::Paper => "paper",
            Role::Emphasis => "emphasis",
            Role::Ink => "ink",
            Role::Text => "text",
            Role::Muted => "muted",
            Role::Card => "card",
            Role::Border => "border",
            Role::Accent => "accent",
            Role::OnAccent => "on-accent",
        }
    }

    pub fn color(self, theme: Theme) -> &'static str {
        match (self, theme) {
            (Role::Canvas, Theme::Light) => "#E6EBE0",
            (Role::Canvas, Theme::Dark) => "#0E0E0F",
            (Role::Paper, Theme::Light) => "#F8FAFC",
            (Role::Paper, Theme::Dark) => "#151618",
            (Role::Emphasis, Theme::Light) => "#FFFFFF",
            (Role::Emphasis, Theme::Dark) => "#F5AD3D",
            (Role::Ink, Theme::Light) => "#1F2022",
            (Role::Ink, Theme::Dark) => "#1F2022",
            (Role::Text, Theme::Light) => "#1F2022",
            (Role::Text, Theme::Dark) => "#FFFFFF",
            (Role::Muted, Theme::Light) => "#52525B",
            (Role::Muted, Theme::Dark) => "#A1A1AA",
            (Role::Card, Theme::Light) => "#FFFFFF",
            (Role::Card, Theme::Dark) => "#1C1D20",
            (Role::Border, Theme::Light) => "#D4D8CF",
            (Role::Border, Theme::Dark) => "#2A2B2E",
            (Role::Accent, Theme::Light) => "#1F2022",
            (Role::Accent, Theme::Dark) => "#F5AD3D",
            (Role::OnAccent, Theme::Light) => "#E6EBE0",
            (Role::OnAccent, Theme::Dark) => "#1F2022",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_hex_colour(value: &str) -> bool {
        value.len() == 7
            && value.starts_with('#')
            && value[1..].chars().all(|c| c.is_ascii_hexdigit())
    }

    #[test]
    fn every_role_has_a_colour_in_both_themes() {
        for theme in Theme::ALL {
            for role in Role::ALL {
                let colour = role.color(theme);
                assert!(is_hex_colour(colour), "{role:?}/{theme}: {colour}");
            }
        }
    }

    #[test]
    fn toggle_is_an_involution() {
        for theme in Theme::ALL {
            assert_ne!(theme.toggle(), theme);
            assert_eq!(theme.toggle().toggle(), theme);
        }
    }

    #[test]
    fn starts_dark_and_alternates() {
        let theme = Theme::default();
        assert_eq!(theme, Theme::Dark);
        assert_eq!(theme.toggle(), Theme::Light);
        assert_eq!(theme.toggle().toggle(), Theme::Dark);
    }

    #[test]
    fn css_vars_declare_every_role() {
        let vars = Theme::Light.css_vars();
        for role in Role::ALL {
            assert!(vars.contains(&format!("--orio-{}:", role.css_name())));
        }
        assert!(vars.contains("--orio-canvas:#E6EBE0;"));
        assert_ne!(Theme::Light.css_vars(), Theme::Dark.css_vars());
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!(" Dark ".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!(
            "sepia".parse::<Theme>(),
            Err(ThemeParseError("sepia".to_string()))
        );
        for theme in Theme::ALL {
            assert_eq!(theme.to_string().parse::<Theme>(), Ok(theme));
        }
    }

    #[test]
    fn logo_follows_theme() {
        assert_ne!(Theme::Light.logo_src(), Theme::Dark.logo_src());
    }
}
