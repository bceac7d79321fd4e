#![forbid(unsafe_code)]

//! Recording surface.

use std::cell::RefCell;
use std::rc::Rc;

use tempo_widget::{Surface, View};

/// A host fullscreen request the widget issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenRequest {
    /// `request_fullscreen` was called.
    Enter,
    /// `exit_fullscreen` was called.
    Exit,
}

#[derive(Debug, Default)]
struct Inner {
    views: Vec<View>,
    requests: Vec<FullscreenRequest>,
}

/// A [`Surface`] that captures everything it is asked to present.
///
/// Clones share the recording; hand one clone to the widget and keep one to
/// inspect. Fullscreen requests are recorded only — the test decides whether
/// to answer with `Event::FullscreenChanged` or `Event::FullscreenDenied`.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    inner: Rc<RefCell<Inner>>,
}

impl RecordingSurface {
    /// An empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate the host's container lookup: `None` models a page without
    /// the widget's container element.
    #[must_use]
    pub fn mount(container: Option<&str>) -> Option<Self> {
        container.map(|_| Self::new())
    }

    /// The most recently applied view.
    #[must_use]
    pub fn last_view(&self) -> Option<View> {
        self.inner.borrow().views.last().cloned()
    }

    /// How many views have been applied.
    #[must_use]
    pub fn view_count(&self) -> usize {
        self.inner.borrow().views.len()
    }

    /// All fullscreen requests, in order.
    #[must_use]
    pub fn requests(&self) -> Vec<FullscreenRequest> {
        self.inner.borrow().requests.clone()
    }
}

impl Surface for RecordingSurface {
    fn apply(&mut self, view: &View) {
        self.inner.borrow_mut().views.push(view.clone());
    }

    fn request_fullscreen(&mut self) {
        self.inner.borrow_mut().requests.push(FullscreenRequest::Enter);
    }

    fn exit_fullscreen(&mut self) {
        self.inner.borrow_mut().requests.push(FullscreenRequest::Exit);
    }
}
