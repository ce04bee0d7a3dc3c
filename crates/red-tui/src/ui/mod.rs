//! Panel cards and the dashboard grid.
//!
//! A [`Panel`] is one bordered card holding a subheading and a block
//! of chart lines; a [`PanelGrid`] arranges panels two across under a
//! page heading. Rendering is pure string composition.

mod theme;

pub use theme::{EmptyState, Theme, THEME};

/// One bordered card: subheading in the frame, chart lines inside.
#[derive(Clone, Debug)]
pub struct Panel {
    pub title: String,
    pub body: Vec<String>,
}

impl Panel {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: Vec::new(),
        }
    }

    pub fn body(mut self, lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.body = lines.into_iter().map(|l| l.into()).collect();
        self
    }

    fn inner_width(&self) -> usize {
        self.body
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0)
            .max(self.title.chars().count() + 2)
    }

    pub fn render_lines(&self) -> Vec<String> {
        let theme = &*THEME;
        let width = self.inner_width();
        let mut lines = Vec::with_capacity(self.body.len() + 2);

        let title_len = self.title.chars().count();
        let tail = width.saturating_sub(title_len + 1);
        lines.push(format!(
            "{}{} {} {}{}",
            theme.corner_tl,
            theme.edge_h,
            self.title,
            theme.edge_h.repeat(tail),
            theme.corner_tr
        ));

        for line in &self.body {
            let pad = width.saturating_sub(line.chars().count());
            lines.push(format!(
                "{} {}{} {}",
                theme.edge_v,
                line,
                " ".repeat(pad),
                theme.edge_v
            ));
        }

        lines.push(format!(
            "{}{}{}",
            theme.corner_bl,
            theme.edge_h.repeat(width + 2),
            theme.corner_br
        ));
        lines
    }
}

/// Fixed-order grid of panels under a page heading, two per row.
#[derive(Clone, Debug)]
pub struct PanelGrid {
    pub heading: String,
    pub panels: Vec<Panel>,
    pub columns: usize,
}

impl PanelGrid {
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            panels: Vec::new(),
            columns: 2,
        }
    }

    pub fn with_panel(mut self, panel: Panel) -> Self {
        self.panels.push(panel);
        self
    }

    pub fn columns(mut self, columns: usize) -> Self {
        self.columns = columns.max(1);
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.heading);
        out.push('\n');
        out.push('\n');

        for row in self.panels.chunks(self.columns) {
            let blocks: Vec<Vec<String>> = row.iter().map(|p| p.render_lines()).collect();
            let widths: Vec<usize> = blocks
                .iter()
                .map(|b| b.iter().map(|l| l.chars().count()).max().unwrap_or(0))
                .collect();
            let height = blocks.iter().map(|b| b.len()).max().unwrap_or(0);

            for line_idx in 0..height {
                let mut line = String::new();
                for (block, width) in blocks.iter().zip(&widths) {
                    let cell = block.get(line_idx).map(String::as_str).unwrap_or("");
                    line.push_str(cell);
                    let pad = width.saturating_sub(cell.chars().count());
                    line.push_str(&" ".repeat(pad));
                    line.push_str("  ");
                }
                out.push_str(line.trim_end());
                out.push('\n');
            }
            out.push('\n');
        }
        out
    }
}
