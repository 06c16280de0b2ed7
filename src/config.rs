//! Editor configuration
//!
//! Everything the original page set through attributes and the shared
//! virtual keyboard object is an explicit value here, passed to the math
//! field at mount time. All fields default, so a partial JSON object (or
//! none at all) is a valid configuration.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ConfigError;

/// Named symbol group of the virtual keyboard
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum KeyboardLayout {
    Numeric,
    Symbols,
    Alphabetic,
    Greek,
}

impl KeyboardLayout {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyboardLayout::Numeric => "numeric",
            KeyboardLayout::Symbols => "symbols",
            KeyboardLayout::Alphabetic => "alphabetic",
            KeyboardLayout::Greek => "greek",
        }
    }
}

/// When the virtual keyboard appears
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeyboardMode {
    #[default]
    OnFocus,
    Manual,
    Off,
}

impl KeyboardMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyboardMode::OnFocus => "onfocus",
            KeyboardMode::Manual => "manual",
            KeyboardMode::Off => "off",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeyboardTheme {
    #[default]
    Apple,
    Material,
}

impl KeyboardTheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyboardTheme::Apple => "apple",
            KeyboardTheme::Material => "material",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct KeyboardConfig {
    /// Keyboard tabs, in display order; duplicates dropped on load
    #[serde(deserialize_with = "unique_layouts")]
    pub layouts: Vec<KeyboardLayout>,
    pub show_toolbar: bool,
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            layouts: vec![
                KeyboardLayout::Numeric,
                KeyboardLayout::Symbols,
                KeyboardLayout::Alphabetic,
                KeyboardLayout::Greek,
            ],
            show_toolbar: true,
        }
    }
}

/// Keep the first occurrence of each layout, in order
fn unique_layouts<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<KeyboardLayout>, D::Error> {
    let listed = Vec::<KeyboardLayout>::deserialize(deserializer)?;
    let mut layouts = Vec::with_capacity(listed.len());
    for layout in listed {
        if !layouts.contains(&layout) {
            layouts.push(layout);
        }
    }
    Ok(layouts)
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct MathFieldConfig {
    pub keyboard_mode: KeyboardMode,
    pub keyboard_theme: KeyboardTheme,

    /// Show the field's contextual menu
    pub menu: bool,

    pub keyboard: KeyboardConfig,
}

impl Default for MathFieldConfig {
    fn default() -> Self {
        Self {
            keyboard_mode: KeyboardMode::OnFocus,
            keyboard_theme: KeyboardTheme::Apple,
            menu: true,
            keyboard: KeyboardConfig::default(),
        }
    }
}

/// PDF page placement, in jsPDF's default unit (mm)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ExportConfig {
    pub filename: String,
    pub margin_x: f64,
    pub start_y: f64,

    /// Cursor advance after a text line
    pub line_height: f64,

    /// Cursor advance after a math line
    pub math_line_height: f64,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            filename: "math-editor.pdf".to_string(),
            margin_x: 10.0,
            start_y: 20.0,
            line_height: 10.0,
            math_line_height: 10.0,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    pub math_field: MathFieldConfig,
    pub export: ExportConfig,
}

impl EditorConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: EditorConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.math_field.keyboard.layouts.is_empty() {
            return Err(ConfigError::NoLayouts);
        }

        let export = &self.export;
        if export.filename.trim().is_empty() {
            return Err(ConfigError::EmptyFilename);
        }
        for (name, value) in [
            ("lineHeight", export.line_height),
            ("mathLineHeight", export.math_line_height),
        ] {
            // NaN fails this comparison too
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        Ok(())
    }
}
