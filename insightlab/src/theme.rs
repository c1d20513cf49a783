//! Theme state and chart colour tokens
//!
//! Two themes, persisted through a [`ThemeStore`] and defaulting to dark.
//! Charts cannot be re-themed in place, so a theme change means destroying
//! and rebuilding every chart with the new palette.

use tracing::warn;

use crate::error::Result;

/// `<meta name="theme-color">` value per theme
pub const DARK_THEME_COLOR: &str = "#0b1221";
pub const LIGHT_THEME_COLOR: &str = "#f5f7fb";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn as_attr(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Anything other than "light" reads as dark
    pub fn from_attr(value: &str) -> Self {
        if value.trim() == "light" {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    pub fn meta_color(self) -> &'static str {
        match self {
            Theme::Dark => DARK_THEME_COLOR,
            Theme::Light => LIGHT_THEME_COLOR,
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Theme::Dark => &DARK,
            Theme::Light => &LIGHT,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_attr())
    }
}

/// Chart colour tokens for one theme
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub primary: &'static str,
    pub text: &'static str,
    pub text_muted: &'static str,
    pub grid: &'static str,
    pub surface: &'static str,
    pub boroughs: [&'static str; 5],
}

impl Palette {
    /// Series colour for the n-th borough, cycling
    pub fn borough(&self, index: usize) -> &'static str {
        self.boroughs[index % self.boroughs.len()]
    }
}

static DARK: Palette = Palette {
    primary: "oklch(74% 0.23 220)",
    text: "oklch(92% 0.01 250)",
    text_muted: "oklch(70% 0.015 250)",
    grid: "oklch(36% 0.015 250 / 0.28)",
    surface: "oklch(21% 0.016 250)",
    boroughs: [
        "oklch(74% 0.23 220)",
        "oklch(70% 0.21 300)",
        "oklch(72% 0.2 160)",
        "oklch(68% 0.21 40)",
        "oklch(69% 0.2 345)",
    ],
};

static LIGHT: Palette = Palette {
    primary: "oklch(60% 0.16 220)",
    text: "oklch(24% 0.018 250)",
    text_muted: "oklch(48% 0.015 250)",
    grid: "oklch(84% 0.01 250 / 0.6)",
    surface: "oklch(96% 0.01 250)",
    boroughs: [
        "oklch(60% 0.16 220)",
        "oklch(58% 0.16 300)",
        "oklch(62% 0.18 30)",
        "oklch(58% 0.16 160)",
        "oklch(56% 0.14 340)",
    ],
};

/// Rewrite `oklch(L C H[ / a])` as `oklch(L C H / alpha)`.
///
/// Colours in any other notation are returned unchanged.
pub fn with_alpha(color: &str, alpha: f64) -> String {
    let Some(inner) = color
        .strip_prefix("oklch(")
        .and_then(|rest| rest.strip_suffix(')'))
    else {
        return color.to_string();
    };
    let params: Vec<&str> = inner.split_whitespace().collect();
    if params.len() < 3 {
        return color.to_string();
    }
    format!("oklch({} {} {} / {alpha})", params[0], params[1], params[2])
}

/// Diverging fill for a year-over-year change cell
pub fn heatmap_color(palette: &Palette, value: f64) -> String {
    if !value.is_finite() || value == 0.0 {
        return with_alpha(palette.grid, 0.18);
    }
    let intensity = (value.abs() / 8.0).min(1.0);
    let lightness = 68.0 - intensity * 22.0;
    let chroma = 0.16 + intensity * 0.12;
    let hue = if value > 0.0 { 50 } else { 305 };
    let alpha = 0.32 + intensity * 0.48;
    format!("oklch({lightness:.1}% {chroma:.3} {hue} / {alpha:.2})")
}

/// Durable storage for the theme preference
pub trait ThemeStore {
    fn load(&self) -> Result<Option<String>>;
    fn save(&self, value: &str) -> Result<()>;
}

/// Stored preference, falling back to dark when absent or unreadable
pub fn load_theme(store: &dyn ThemeStore) -> Theme {
    match store.load() {
        Ok(Some(value)) => Theme::from_attr(&value),
        Ok(None) => Theme::default(),
        Err(e) => {
            warn!(error = %e, "theme preference unreadable; using dark");
            Theme::default()
        }
    }
}

/// Persist the preference; a storage failure only costs persistence
pub fn persist_theme(store: &dyn ThemeStore, theme: Theme) {
    if let Err(e) = store.save(theme.as_attr()) {
        warn!(error = %e, %theme, "theme preference not saved");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MemoryStore;

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::from_attr("light"), Theme::Light);
        assert_eq!(Theme::from_attr("sepia"), Theme::Dark);
    }

    #[test]
    fn test_with_alpha() {
        assert_eq!(with_alpha("oklch(74% 0.23 220)", 0.85), "oklch(74% 0.23 220 / 0.85)");
        assert_eq!(
            with_alpha("oklch(36% 0.015 250 / 0.28)", 0.6),
            "oklch(36% 0.015 250 / 0.6)"
        );
        assert_eq!(with_alpha("#0b1221", 0.5), "#0b1221");
        assert_eq!(with_alpha("oklch(50%)", 0.5), "oklch(50%)");
    }

    #[test]
    fn test_heatmap_color_scale() {
        let palette = Theme::Dark.palette();
        assert_eq!(heatmap_color(palette, 0.0), "oklch(36% 0.015 250 / 0.18)");
        assert_eq!(heatmap_color(palette, 8.0), "oklch(46.0% 0.280 50 / 0.80)");
        assert_eq!(heatmap_color(palette, -16.0), "oklch(46.0% 0.280 305 / 0.80)");
        assert_eq!(heatmap_color(palette, 4.0), "oklch(57.0% 0.220 50 / 0.56)");
    }

    #[test]
    fn test_theme_defaults_to_dark() {
        let store = MemoryStore::default();
        assert_eq!(load_theme(&store), Theme::Dark);

        persist_theme(&store, Theme::Light);
        assert_eq!(load_theme(&store), Theme::Light);
    }

    #[test]
    fn test_unreadable_store_falls_back() {
        let store = MemoryStore::failing();
        assert_eq!(load_theme(&store), Theme::Dark);
        persist_theme(&store, Theme::Light);
    }

    #[test]
    fn test_palette_cycles_borough_colours() {
        let palette = Theme::Light.palette();
        assert_eq!(palette.borough(0), palette.borough(5));
        assert_ne!(palette.borough(0), palette.borough(1));
    }
}
