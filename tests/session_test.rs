// Session behavior through the public API: commits, rejection of blank
// input, and the preview display list.

use math_editor_wasm::input::{MathFieldBuffer, MathInput};
use math_editor_wasm::renderers::{preview_html, FallbackRenderer, MathRenderer, RenderBlock};
use math_editor_wasm::{Line, LineKind, Session};

/// Renderer that tags its output so tests can tell it apart from raw text
struct TaggingRenderer;

impl MathRenderer for TaggingRenderer {
    fn render(&self, latex: &str) -> String {
        format!("<math>{}</math>", latex)
    }
}

#[test]
fn test_math_commit_appends_exactly_one_line() {
    let inputs = ["x", "x^2+1", r"\frac{a}{b}", "  padded  ", r"\sqrt{", "α + β"];

    let mut session = Session::new();
    for (i, latex) in inputs.iter().enumerate() {
        let mut field = MathFieldBuffer::new(*latex);
        let before = session.len();

        assert_eq!(session.commit_math(&mut field), Some(i));
        assert_eq!(session.len(), before + 1);
        assert_eq!(session.lines().last(), Some(&Line::Math(latex.to_string())));
        assert_eq!(field.value(), "", "math field should be cleared after commit");
    }
}

#[test]
fn test_blank_submissions_are_ignored() {
    let mut session = Session::new();

    for blank in ["", " ", "\t", "\n  \n"] {
        let mut field = MathFieldBuffer::new(blank);
        assert_eq!(session.commit_math(&mut field), None);
        assert_eq!(field.value(), blank);

        session.set_text(blank);
        assert_eq!(session.commit_text(), None);
        assert_eq!(session.text_buffer(), blank);
    }

    assert_eq!(session.len(), 0);
}

#[test]
fn test_empty_text_commit_leaves_session_empty() {
    let mut session = Session::new();
    session.set_text("");
    session.commit_text();
    assert_eq!(session.len(), 0);
}

#[test]
fn test_hello_then_equation_sequence() {
    let mut session = Session::new();
    session.set_text("Hello");
    assert_eq!(session.commit_text(), Some(0));
    session.commit_math(&mut MathFieldBuffer::new("x^2+1"));

    assert_eq!(
        session.lines(),
        &[Line::Text("Hello".to_string()), Line::Math("x^2+1".to_string())]
    );
    let kinds: Vec<LineKind> = session.lines().iter().map(Line::kind).collect();
    assert_eq!(kinds, vec![LineKind::Text, LineKind::Math]);
}

#[test]
fn test_render_uses_renderer_for_math_only() {
    let mut session = Session::new();
    session.set_text("a <b>");
    session.commit_text();
    session.commit_math(&mut MathFieldBuffer::new("y=mx+c"));

    let blocks = session.render(&TaggingRenderer);
    assert_eq!(
        blocks,
        vec![
            RenderBlock::Text { text: "a <b>".to_string() },
            RenderBlock::Math {
                latex: "y=mx+c".to_string(),
                markup: "<math>y=mx+c</math>".to_string(),
            },
        ]
    );

    assert_eq!(
        preview_html(&blocks),
        r#"<p>a &lt;b&gt;</p><p class="math"><math>y=mx+c</math></p>"#
    );
}

#[test]
fn test_render_is_idempotent_without_commits() {
    let mut session = Session::new();
    session.set_text("Intro");
    session.commit_text();
    session.commit_math(&mut MathFieldBuffer::new(r"\int_0^1 x\,dx"));

    let first = session.render(&FallbackRenderer);
    let second = session.render(&FallbackRenderer);
    assert_eq!(first, second);

    // Editing the pending buffer is not a commit
    session.set_text("draft");
    assert_eq!(session.render(&FallbackRenderer), first);
}

#[test]
fn test_lines_serialize_as_kind_value_records() {
    let mut session = Session::new();
    session.set_text("Hello");
    session.commit_text();
    session.commit_math(&mut MathFieldBuffer::new("x^2+1"));

    let json = serde_json::to_string(session.lines()).unwrap();
    assert_eq!(
        json,
        r#"[{"kind":"text","value":"Hello"},{"kind":"math","value":"x^2+1"}]"#
    );
}
