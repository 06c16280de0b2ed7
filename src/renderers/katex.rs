//! KaTeX binding
//!
//! Calls the page's global `katex.renderToString` in non-throwing mode. If
//! the call throws regardless (KaTeX missing, or an internal error) the
//! source is shown through [`FallbackRenderer`].

use wasm_bindgen::prelude::*;

use crate::renderers::math::{FallbackRenderer, MathRenderer, RenderOpts};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = katex, js_name = renderToString)]
    fn katex_render_to_string(latex: &str, options: &JsValue) -> Result<String, JsValue>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct KatexRenderer {
    opts: RenderOpts,
}

impl KatexRenderer {
    pub fn new(opts: RenderOpts) -> Self {
        Self {
            opts: RenderOpts {
                throw_on_error: false,
                ..opts
            },
        }
    }

    pub fn opts(&self) -> RenderOpts {
        self.opts
    }
}

impl MathRenderer for KatexRenderer {
    fn render(&self, latex: &str) -> String {
        let options = match serde_wasm_bindgen::to_value(&self.opts) {
            Ok(options) => options,
            Err(e) => {
                log::error!("failed to build KaTeX options: {}", e);
                return FallbackRenderer.render(latex);
            }
        };

        match katex_render_to_string(latex, &options) {
            Ok(markup) => markup,
            Err(e) => {
                log::warn!("KaTeX render failed for {:?}: {:?}", latex, e);
                FallbackRenderer.render(latex)
            }
        }
    }
}
