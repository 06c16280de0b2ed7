//! Vertical placement of lines on the PDF page

use crate::config::ExportConfig;
use crate::models::Line;

/// Where one line goes on the page
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement<'a> {
    /// Position of the line in the document
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub line: &'a Line,
}

/// Single-column layout driven by a vertical cursor
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExportLayout {
    pub margin_x: f64,
    pub start_y: f64,
    pub line_height: f64,
    pub math_line_height: f64,
}

impl ExportLayout {
    /// Assign a position to every line, in document order
    pub fn plan<'a>(&self, lines: &'a [Line]) -> Vec<Placement<'a>> {
        let mut y = self.start_y;
        lines
            .iter()
            .enumerate()
            .map(|(index, line)| {
                let placement = Placement { index, x: self.margin_x, y, line };
                y += self.advance(line);
                placement
            })
            .collect()
    }

    fn advance(&self, line: &Line) -> f64 {
        match line {
            Line::Text(_) => self.line_height,
            Line::Math(_) => self.math_line_height,
        }
    }
}

impl Default for ExportLayout {
    fn default() -> Self {
        Self::from(&ExportConfig::default())
    }
}

impl From<&ExportConfig> for ExportLayout {
    fn from(config: &ExportConfig) -> Self {
        Self {
            margin_x: config.margin_x,
            start_y: config.start_y,
            line_height: config.line_height,
            math_line_height: config.math_line_height,
        }
    }
}
