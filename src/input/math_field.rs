//! `<math-field>` binding
//!
//! Wraps a MathLive math field element. Configuration is applied once, at
//! mount time, from an explicit [`MathFieldConfig`] instead of being poked
//! into the page ad hoc.

use js_sys::{Array, Reflect};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::config::{KeyboardConfig, MathFieldConfig};
use crate::input::MathInput;

pub struct MathField {
    element: HtmlElement,
}

impl MathField {
    /// Wrap `element` and apply `config` to it and to the virtual keyboard
    pub fn mount(element: HtmlElement, config: &MathFieldConfig) -> Result<Self, JsValue> {
        element.set_attribute("virtual-keyboard-mode", config.keyboard_mode.as_str())?;
        element.set_attribute("virtual-keyboard-theme", config.keyboard_theme.as_str())?;
        element.set_attribute("menu", if config.menu { "true" } else { "false" })?;

        configure_keyboard(&config.keyboard)?;

        log::info!(
            "math field mounted: mode={}, theme={}",
            config.keyboard_mode.as_str(),
            config.keyboard_theme.as_str()
        );
        Ok(Self { element })
    }

    pub fn element(&self) -> &HtmlElement {
        &self.element
    }
}

impl MathInput for MathField {
    fn value(&self) -> String {
        Reflect::get(&self.element, &JsValue::from_str("value"))
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default()
    }

    fn set_value(&mut self, value: &str) {
        if let Err(e) = Reflect::set(&self.element, &JsValue::from_str("value"), &JsValue::from_str(value)) {
            log::warn!("failed to set math field value: {:?}", e);
        }
    }
}

/// Apply layouts and toolbar visibility to MathLive's shared keyboard
///
/// A page without MathLive loaded has no keyboard object; that is not an error.
fn configure_keyboard(keyboard: &KeyboardConfig) -> Result<(), JsValue> {
    let window = match web_sys::window() {
        Some(window) => window,
        None => return Ok(()),
    };

    let target = Reflect::get(&window, &JsValue::from_str("mathVirtualKeyboard"))?;
    if target.is_undefined() || target.is_null() {
        log::warn!("mathVirtualKeyboard not available, keyboard config skipped");
        return Ok(());
    }

    let layouts: Array = keyboard
        .layouts
        .iter()
        .map(|layout| JsValue::from_str(layout.as_str()))
        .collect();
    Reflect::set(&target, &JsValue::from_str("layouts"), &layouts)?;
    Reflect::set(
        &target,
        &JsValue::from_str("showToolbar"),
        &JsValue::from_bool(keyboard.show_toolbar),
    )?;
    Ok(())
}
