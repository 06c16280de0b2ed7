//! Document session
//!
//! The session owns the append-only line sequence and the pending text
//! buffer. The pending math buffer lives in the math input capability and is
//! only read and cleared here.

use serde::{Deserialize, Serialize};

use crate::input::MathInput;
use crate::models::line::{is_blank, Line};
use crate::renderers::{MathRenderer, RenderBlock};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Session {
    lines: Vec<Line>,

    /// Pending text buffer (textarea contents)
    #[serde(default)]
    text_buffer: String,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn has_math(&self) -> bool {
        self.lines.iter().any(Line::is_math)
    }

    pub fn text_buffer(&self) -> &str {
        &self.text_buffer
    }

    /// Replace the pending text buffer
    pub fn set_text(&mut self, value: impl Into<String>) {
        self.text_buffer = value.into();
    }

    /// Append the math input's current value as a math line
    ///
    /// Returns the index of the new line. A blank value is ignored and the
    /// input is left untouched.
    pub fn commit_math<I: MathInput + ?Sized>(&mut self, input: &mut I) -> Option<usize> {
        let latex = input.value();
        let line = match Line::math(latex) {
            Some(line) => line,
            None => {
                log::debug!("commit_math: blank input ignored");
                return None;
            }
        };

        input.set_value("");
        Some(self.push(line))
    }

    /// Append the pending text buffer as a text line
    ///
    /// Returns the index of the new line. A blank buffer is ignored and kept.
    pub fn commit_text(&mut self) -> Option<usize> {
        if is_blank(&self.text_buffer) {
            log::debug!("commit_text: blank buffer ignored");
            return None;
        }

        let value = std::mem::take(&mut self.text_buffer);
        Some(self.push(Line::Text(value)))
    }

    /// Render every line for display, in document order
    pub fn render<R: MathRenderer + ?Sized>(&self, renderer: &R) -> Vec<RenderBlock> {
        self.lines
            .iter()
            .map(|line| RenderBlock::from_line(line, renderer))
            .collect()
    }

    fn push(&mut self, line: Line) -> usize {
        log::debug!("appending {} line #{}", line.kind().as_str(), self.lines.len());
        self.lines.push(line);
        self.lines.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MathFieldBuffer;
    use crate::renderers::FallbackRenderer;

    #[test]
    fn test_new_session_is_empty() {
        let session = Session::new();
        assert!(session.is_empty());
        assert_eq!(session.text_buffer(), "");
        assert!(!session.has_math());
    }

    #[test]
    fn test_commit_math_appends_and_clears_input() {
        let mut session = Session::new();
        let mut field = MathFieldBuffer::new("x^2+1");

        assert_eq!(session.commit_math(&mut field), Some(0));
        assert_eq!(session.lines(), &[Line::Math("x^2+1".to_string())]);
        assert_eq!(field.value(), "");
        assert!(session.has_math());
    }

    #[test]
    fn test_commit_math_blank_keeps_input() {
        let mut session = Session::new();
        let mut field = MathFieldBuffer::new("   ");

        assert_eq!(session.commit_math(&mut field), None);
        assert!(session.is_empty());
        assert_eq!(field.value(), "   ");
    }

    #[test]
    fn test_commit_text_blank_keeps_buffer() {
        let mut session = Session::new();
        session.set_text(" \n ");

        assert_eq!(session.commit_text(), None);
        assert_eq!(session.len(), 0);
        assert_eq!(session.text_buffer(), " \n ");
    }

    #[test]
    fn test_commit_text_preserves_order() {
        let mut session = Session::new();
        let mut field = MathFieldBuffer::new("a+b");

        session.set_text("first");
        session.commit_text();
        session.commit_math(&mut field);
        session.set_text("last");
        assert_eq!(session.commit_text(), Some(2));

        let kinds: Vec<_> = session.lines().iter().map(|l| l.value()).collect();
        assert_eq!(kinds, vec!["first", "a+b", "last"]);
        assert_eq!(session.text_buffer(), "");
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut session = Session::new();
        session.set_text("Hello");
        session.commit_text();
        session.commit_math(&mut MathFieldBuffer::new(r"\sqrt{2}"));

        let renderer = FallbackRenderer;
        assert_eq!(session.render(&renderer), session.render(&renderer));
        assert_eq!(session.render(&renderer).len(), 2);
    }
}
