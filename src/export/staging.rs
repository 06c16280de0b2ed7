//! Scoped staging of rendered markup
//!
//! The PDF generator measures math blocks from a live element, so each
//! block is materialized in a temporary container for the duration of its
//! placement. [`Staged`] owns that container and detaches it on drop, on
//! every exit path.

/// Somewhere rendered markup can be temporarily materialized
pub trait StagingHost {
    type Node;

    fn attach(&self, markup: &str) -> Result<Self::Node, String>;

    fn detach(&self, node: &Self::Node);
}

/// A staged container; detached from its host when dropped
pub struct Staged<'h, H: StagingHost> {
    host: &'h H,
    node: H::Node,
}

impl<'h, H: StagingHost> Staged<'h, H> {
    pub fn new(host: &'h H, markup: &str) -> Result<Self, String> {
        let node = host.attach(markup)?;
        Ok(Self { host, node })
    }

    pub fn node(&self) -> &H::Node {
        &self.node
    }
}

impl<H: StagingHost> Drop for Staged<'_, H> {
    fn drop(&mut self) {
        self.host.detach(&self.node);
    }
}
