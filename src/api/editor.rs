//! The editor handle exposed to JavaScript
//!
//! One `MathEditor` per page. It owns the session and the mounted math
//! field; the page wires its three buttons and the textarea to the methods
//! below and re-renders the preview after every change.

use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;
use web_sys::HtmlElement;

use crate::api::helpers::{deserialize, serialize, to_js_error};
use crate::config::EditorConfig;
use crate::export::{export_document, DomStagingHost, JsPdfGenerator};
use crate::input::MathField;
use crate::models::Session;
use crate::renderers::{preview_html, KatexRenderer, RenderOpts};
use crate::{wasm_info, wasm_log};

#[wasm_bindgen]
pub struct MathEditor {
    session: Session,
    field: MathField,
    renderer: KatexRenderer,
    config: EditorConfig,
}

#[wasm_bindgen]
impl MathEditor {
    /// Mount on a `<math-field>` element
    ///
    /// `config` may be omitted; missing fields take their defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(math_field: HtmlElement, config: JsValue) -> Result<MathEditor, JsValue> {
        let config: EditorConfig = if config.is_undefined() || config.is_null() {
            EditorConfig::default()
        } else {
            deserialize(config, "Invalid editor config")?
        };
        config.validate().map_err(to_js_error)?;

        let field = MathField::mount(math_field, &config.math_field)?;
        wasm_info!("MathEditor created, export target {}", config.export.filename);

        Ok(MathEditor {
            session: Session::new(),
            field,
            renderer: KatexRenderer::new(RenderOpts::default()),
            config,
        })
    }

    /// "Add Equation": returns false if the field was blank
    #[wasm_bindgen(js_name = commitMath)]
    pub fn commit_math(&mut self) -> bool {
        let index = self.session.commit_math(&mut self.field);
        wasm_log!("commitMath -> {:?}", index);
        index.is_some()
    }

    /// Textarea change
    #[wasm_bindgen(js_name = setText)]
    pub fn set_text(&mut self, value: String) {
        self.session.set_text(value);
    }

    /// "Add Text": returns false if the buffer was blank
    #[wasm_bindgen(js_name = commitText)]
    pub fn commit_text(&mut self) -> bool {
        let index = self.session.commit_text();
        wasm_log!("commitText -> {:?}", index);
        index.is_some()
    }

    #[wasm_bindgen(js_name = textBuffer)]
    pub fn text_buffer(&self) -> String {
        self.session.text_buffer().to_string()
    }

    #[wasm_bindgen(js_name = lineCount)]
    pub fn line_count(&self) -> usize {
        self.session.len()
    }

    /// All lines as `{kind, value}` objects
    pub fn lines(&self) -> Result<JsValue, JsValue> {
        serialize(self.session.lines(), "Failed to serialize lines")
    }

    /// Display blocks for the preview, in document order
    pub fn render(&self) -> Result<JsValue, JsValue> {
        serialize(&self.session.render(&self.renderer), "Failed to serialize render blocks")
    }

    #[wasm_bindgen(js_name = previewHtml)]
    pub fn preview_html(&self) -> String {
        preview_html(&self.session.render(&self.renderer))
    }

    /// "Download as PDF"
    ///
    /// Exports the lines as they are now; later commits do not affect a
    /// running export. Resolves with the export report.
    #[wasm_bindgen(js_name = exportPdf)]
    pub fn export_pdf(&self) -> Promise {
        let lines = self.session.lines().to_vec();
        let renderer = self.renderer;
        let config = self.config.export.clone();
        wasm_info!("exportPdf called with {} lines", lines.len());

        future_to_promise(async move {
            let host = DomStagingHost::new().map_err(to_js_error)?;
            let mut generator = JsPdfGenerator::new().map_err(to_js_error)?;
            let report = export_document(&lines, &renderer, &host, &mut generator, &config)
                .await
                .map_err(to_js_error)?;
            serialize(&report, "Failed to serialize export report")
        })
    }
}
