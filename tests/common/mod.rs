// In-memory staging host and PDF generator shared by the native tests.
// They record what an export did instead of producing a file, so the
// placement order is observable.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use async_trait::async_trait;

use math_editor_wasm::export::{PdfGenerator, StagingHost};

#[derive(Clone, Debug)]
pub struct MemoryNode {
    id: usize,
    markup: String,
    attached: Rc<Cell<bool>>,
}

impl MemoryNode {
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub fn is_attached(&self) -> bool {
        self.attached.get()
    }
}

#[derive(Debug, Default)]
pub struct MemoryStagingHost {
    next_id: Cell<usize>,
    live: RefCell<Vec<usize>>,
    fail: bool,
}

impl MemoryStagingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// A host whose every attach fails
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Number of nodes currently attached
    pub fn live(&self) -> usize {
        self.live.borrow().len()
    }

    /// Number of nodes ever attached
    pub fn attached_total(&self) -> usize {
        self.next_id.get()
    }
}

impl StagingHost for MemoryStagingHost {
    type Node = MemoryNode;

    fn attach(&self, markup: &str) -> Result<MemoryNode, String> {
        if self.fail {
            return Err("staging host unavailable".to_string());
        }

        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.live.borrow_mut().push(id);

        Ok(MemoryNode {
            id,
            markup: markup.to_string(),
            attached: Rc::new(Cell::new(true)),
        })
    }

    fn detach(&self, node: &MemoryNode) {
        node.attached.set(false);
        self.live.borrow_mut().retain(|&id| id != node.id);
    }
}

/// One call made on the generator
#[derive(Clone, Debug, PartialEq)]
pub enum GeneratorOp {
    Text { text: String, x: f64, y: f64 },
    Element { markup: String, x: f64, y: f64 },
    Save { filename: String },
}

#[derive(Debug, Default)]
pub struct MemoryGenerator {
    ops: Vec<GeneratorOp>,
    placements: usize,
    fail_at: Option<usize>,
}

impl MemoryGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// A generator that rejects the `index`-th placement (text or element)
    pub fn failing_at(index: usize) -> Self {
        Self {
            fail_at: Some(index),
            ..Self::default()
        }
    }

    pub fn ops(&self) -> &[GeneratorOp] {
        &self.ops
    }

    /// Text and element placements, in call order
    pub fn placements(&self) -> Vec<&GeneratorOp> {
        self.ops
            .iter()
            .filter(|op| !matches!(op, GeneratorOp::Save { .. }))
            .collect()
    }

    pub fn saves(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, GeneratorOp::Save { .. }))
            .count()
    }

    fn next_placement(&mut self) -> Result<(), String> {
        let index = self.placements;
        self.placements += 1;
        if self.fail_at == Some(index) {
            return Err(format!("placement {} rejected", index));
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl PdfGenerator for MemoryGenerator {
    type Node = MemoryNode;

    fn add_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), String> {
        self.next_placement()?;
        self.ops.push(GeneratorOp::Text { text: text.to_string(), x, y });
        Ok(())
    }

    async fn place_element(&mut self, node: &MemoryNode, x: f64, y: f64) -> Result<(), String> {
        self.next_placement()?;

        // Layout completes on a later poll, like a completion callback
        LayoutTick::default().await;
        if !node.is_attached() {
            return Err(format!("node {} detached before layout completed", node.id));
        }

        self.ops.push(GeneratorOp::Element {
            markup: node.markup.clone(),
            x,
            y,
        });
        Ok(())
    }

    fn save(&mut self, filename: &str) -> Result<(), String> {
        self.ops.push(GeneratorOp::Save { filename: filename.to_string() });
        Ok(())
    }
}

/// Pending on the first poll, ready on the second
#[derive(Default)]
struct LayoutTick {
    polled: bool,
}

impl Future for LayoutTick {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.polled {
            return Poll::Ready(());
        }
        self.polled = true;
        cx.waker().wake_by_ref();
        Poll::Pending
    }
}
