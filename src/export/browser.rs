//! jsPDF and DOM bindings for export in the browser
//!
//! `jsPDF.html()` reports completion through a `callback` option. The
//! callback is bridged into a `Promise` so the exporter can await it.

use async_trait::async_trait;
use js_sys::{Object, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlElement};

use crate::error::ExportError;
use crate::export::generator::PdfGenerator;
use crate::export::staging::StagingHost;

#[wasm_bindgen]
extern "C" {
    /// `window.jspdf.jsPDF` from the UMD bundle
    #[wasm_bindgen(js_namespace = jspdf, js_name = jsPDF)]
    pub type JsPdf;

    #[wasm_bindgen(constructor, catch, js_namespace = jspdf, js_class = "jsPDF")]
    fn new() -> Result<JsPdf, JsValue>;

    #[wasm_bindgen(method, catch, js_class = "jsPDF")]
    fn text(this: &JsPdf, text: &str, x: f64, y: f64) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_class = "jsPDF")]
    fn html(this: &JsPdf, element: &HtmlElement, options: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_class = "jsPDF")]
    fn save(this: &JsPdf, filename: &str) -> Result<JsValue, JsValue>;
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

pub struct JsPdfGenerator {
    doc: JsPdf,
}

impl JsPdfGenerator {
    pub fn new() -> Result<Self, ExportError> {
        let doc = JsPdf::new().map_err(|e| ExportError::Generator(describe(&e)))?;
        Ok(Self { doc })
    }
}

#[async_trait(?Send)]
impl PdfGenerator for JsPdfGenerator {
    type Node = HtmlElement;

    fn add_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), String> {
        self.doc.text(text, x, y).map(|_| ()).map_err(|e| describe(&e))
    }

    async fn place_element(&mut self, node: &HtmlElement, x: f64, y: f64) -> Result<(), String> {
        let mut resolve_slot = None;
        let completion = Promise::new(&mut |resolve, _reject| {
            resolve_slot = Some(resolve);
        });
        let resolve = resolve_slot.ok_or_else(|| "promise executor did not run".to_string())?;

        // Owned here so it is freed on every exit path, called or not
        let on_complete = Closure::<dyn FnMut(JsValue)>::new(move |_doc: JsValue| {
            let _ = resolve.call0(&JsValue::NULL);
        });

        let options = Object::new();
        Reflect::set(&options, &"x".into(), &x.into())
            .and_then(|_| Reflect::set(&options, &"y".into(), &y.into()))
            .and_then(|_| Reflect::set(&options, &"callback".into(), on_complete.as_ref()))
            .map_err(|e| describe(&e))?;

        // The returned worker settles after the callback has run; a rejection
        // there means the callback never will.
        let worker = self.doc.html(node, &options).map_err(|e| describe(&e))?;
        JsFuture::from(Promise::resolve(&worker)).await.map_err(|e| describe(&e))?;
        JsFuture::from(completion).await.map_err(|e| describe(&e))?;

        drop(on_complete);
        Ok(())
    }

    fn save(&mut self, filename: &str) -> Result<(), String> {
        self.doc.save(filename).map(|_| ()).map_err(|e| describe(&e))
    }
}

/// Off-screen placement for staged containers
const STAGING_STYLE: &str = "position:absolute;left:-10000px;top:0";

/// Stages markup in an off-screen `<div>` appended to `document.body`
pub struct DomStagingHost {
    document: Document,
    body: HtmlElement,
}

impl DomStagingHost {
    pub fn new() -> Result<Self, ExportError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| ExportError::Generator("no document available".to_string()))?;
        let body = document
            .body()
            .ok_or_else(|| ExportError::Generator("document has no body".to_string()))?;
        Ok(Self { document, body })
    }
}

impl StagingHost for DomStagingHost {
    type Node = HtmlElement;

    fn attach(&self, markup: &str) -> Result<HtmlElement, String> {
        let container = self
            .document
            .create_element("div")
            .map_err(|e| describe(&e))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| "created element is not an HTMLElement".to_string())?;
        container.set_inner_html(markup);
        container.set_attribute("data-staging", "math").map_err(|e| describe(&e))?;
        container.set_attribute("style", STAGING_STYLE).map_err(|e| describe(&e))?;

        self.body.append_child(&container).map_err(|e| describe(&e))?;
        Ok(container)
    }

    fn detach(&self, node: &HtmlElement) {
        node.remove();
    }
}
