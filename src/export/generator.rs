//! PDF generator capability
//!
//! Text is placed synchronously. Staged elements are placed asynchronously:
//! the returned future resolves once the generator has finished laying the
//! element out, which is when its completion callback would fire.

use async_trait::async_trait;

#[async_trait(?Send)]
pub trait PdfGenerator {
    /// Staged element type this generator can place
    type Node;

    fn add_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), String>;

    async fn place_element(&mut self, node: &Self::Node, x: f64, y: f64) -> Result<(), String>;

    /// Serialize the document and hand it to the user
    fn save(&mut self, filename: &str) -> Result<(), String>;
}
