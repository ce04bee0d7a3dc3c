use once_cell::sync::Lazy;

/// Glyph set shared by the chart renderers and panel frames.
#[derive(Clone, Debug)]
pub struct Theme {
    pub bar_fill: &'static str,
    pub point: &'static str,
    pub stroke: &'static str,
    pub grid: &'static str,
    pub area_fill: &'static str,
    pub area_fill_alt: &'static str,
    pub area_overlap: &'static str,
    /// Cycled over donut slices, one glyph per slice.
    pub palette: [&'static str; 4],
    pub corner_tl: &'static str,
    pub corner_tr: &'static str,
    pub corner_bl: &'static str,
    pub corner_br: &'static str,
    pub edge_h: &'static str,
    pub edge_v: &'static str,
    pub empty_icon: &'static str,
}

impl Theme {
    pub const fn unicode() -> Self {
        Self {
            bar_fill: "█",
            point: "●",
            stroke: "·",
            grid: "┄",
            area_fill: "▓",
            area_fill_alt: "░",
            area_overlap: "█",
            palette: ["█", "▓", "▒", "░"],
            corner_tl: "┌",
            corner_tr: "┐",
            corner_bl: "└",
            corner_br: "┘",
            edge_h: "─",
            edge_v: "│",
            empty_icon: "◌",
        }
    }

    /// ASCII-only glyphs for terminals without UTF-8 support.
    pub const fn ascii() -> Self {
        Self {
            bar_fill: "#",
            point: "o",
            stroke: ".",
            grid: "-",
            area_fill: "X",
            area_fill_alt: "x",
            area_overlap: "@",
            palette: ["#", "X", "x", "."],
            corner_tl: "+",
            corner_tr: "+",
            corner_bl: "+",
            corner_br: "+",
            edge_h: "-",
            edge_v: "|",
            empty_icon: "o",
        }
    }

    /// Pick a theme from the environment: `RED_THEME=ascii` forces the
    /// ASCII set, otherwise the locale decides.
    pub fn auto() -> Self {
        if let Ok(mode) = std::env::var("RED_THEME") {
            if mode.eq_ignore_ascii_case("ascii") {
                return Self::ascii();
            }
            if mode.eq_ignore_ascii_case("unicode") {
                return Self::unicode();
            }
        }
        if Self::supports_utf8() {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }

    fn supports_utf8() -> bool {
        for var in ["LANG", "LC_ALL", "LC_CTYPE"] {
            if let Ok(value) = std::env::var(var) {
                if value.to_ascii_uppercase().contains("UTF") {
                    return true;
                }
            }
        }
        // Default: assume UTF-8 is available
        true
    }
}

/// Placeholder content for a chart with nothing to draw.
#[derive(Clone, Debug)]
pub struct EmptyState {
    pub label: String,
    pub guidance: Vec<String>,
}

impl EmptyState {
    pub fn new(
        label: impl Into<String>,
        guidance: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            label: label.into(),
            guidance: guidance.into_iter().map(|g| g.into()).collect(),
        }
    }

    pub fn render_lines(&self, theme: &Theme) -> Vec<String> {
        let mut lines = Vec::new();
        lines.push(format!("{} {}", theme.empty_icon, self.label));
        for tip in &self.guidance {
            lines.push(format!("{} {}", theme.stroke, tip));
        }
        lines
    }
}

pub static THEME: Lazy<Theme> = Lazy::new(Theme::auto);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_theme_has_no_multibyte_glyphs() {
        let theme = Theme::ascii();
        for glyph in [
            theme.bar_fill,
            theme.point,
            theme.stroke,
            theme.grid,
            theme.area_fill,
            theme.edge_v,
        ] {
            assert_eq!(glyph.len(), 1);
        }
    }

    #[test]
    fn test_palette_cycles_four_glyphs() {
        let theme = Theme::unicode();
        assert_eq!(theme.palette.len(), 4);
        assert_eq!(theme.palette[4 % 4], theme.palette[0]);
    }

    #[test]
    fn test_empty_state_lines() {
        let empty = EmptyState::new("No data bound", ["Bind a series to this panel"]);
        let lines = empty.render_lines(&Theme::unicode());
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("No data bound"));
    }
}
