//! PDF export
//!
//! Walks the document once, in order. Text lines are placed directly; math
//! lines are rendered, staged in a temporary container, and placed through
//! the generator's asynchronous API. Each placement is awaited before the
//! next one starts, and the file is saved exactly once after the last
//! placement has completed, whether or not the document contains math.

pub mod browser;
pub mod generator;
pub mod layout;
pub mod staging;

pub use browser::{DomStagingHost, JsPdfGenerator};
pub use generator::PdfGenerator;
pub use layout::{ExportLayout, Placement};
pub use staging::{Staged, StagingHost};

use serde::{Deserialize, Serialize};

use crate::config::ExportConfig;
use crate::error::ExportError;
use crate::models::Line;
use crate::renderers::MathRenderer;

/// Summary of a completed export
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExportReport {
    pub filename: String,
    pub text_blocks: usize,
    pub math_blocks: usize,
}

/// Feed `lines` to `generator` in order, then save once
///
/// The first failure aborts the export without saving. Staged containers
/// are released on every path.
pub async fn export_document<R, H, G>(
    lines: &[Line],
    renderer: &R,
    host: &H,
    generator: &mut G,
    config: &ExportConfig,
) -> Result<ExportReport, ExportError>
where
    R: MathRenderer + ?Sized,
    H: StagingHost,
    G: PdfGenerator<Node = H::Node>,
{
    log::info!("exporting {} lines to {}", lines.len(), config.filename);

    let mut report = ExportReport {
        filename: config.filename.clone(),
        text_blocks: 0,
        math_blocks: 0,
    };

    for Placement { index, x, y, line } in ExportLayout::from(config).plan(lines) {
        match line {
            Line::Text(text) => {
                generator
                    .add_text(text, x, y)
                    .map_err(|message| ExportError::Placement { index, message })?;
                report.text_blocks += 1;
            }
            Line::Math(latex) => {
                let markup = renderer.render(latex);
                let staged = Staged::new(host, &markup)
                    .map_err(|message| ExportError::Staging { index, message })?;

                generator
                    .place_element(staged.node(), x, y)
                    .await
                    .map_err(|message| ExportError::Placement { index, message })?;
                report.math_blocks += 1;
            }
        }
    }

    generator.save(&config.filename).map_err(|message| ExportError::Save {
        filename: config.filename.clone(),
        message,
    })?;

    log::info!(
        "export finished: {} text, {} math",
        report.text_blocks,
        report.math_blocks
    );
    Ok(report)
}
