//! Graph shared between interrupt handlers and tasks
//!
//! [`LcdGraph`] methods are not reentrant: appending is a read-modify-write
//! of the ring buffer indices. [`SharedGraph`] serializes every access
//! through a critical section so a sampling interrupt and the main loop can
//! both use one graph.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

use crate::driver::GlyphDisplay;
use crate::error::{DisplayError, GraphResult};
use crate::graph::LcdGraph;
use crate::sample::Sample;

/// An [`LcdGraph`] behind a critical-section mutex
pub struct SharedGraph<T: Sample, D> {
    inner: Mutex<CriticalSectionRawMutex, RefCell<LcdGraph<T, D>>>,
}

impl<T: Sample, D: GlyphDisplay> SharedGraph<T, D> {
    /// Wrap `graph`; usable in a `static` initializer
    pub const fn new(graph: LcdGraph<T, D>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(graph)),
        }
    }

    /// Run `f` with exclusive access to the graph
    pub fn with<R>(&self, f: impl FnOnce(&mut LcdGraph<T, D>) -> R) -> R {
        self.inner.lock(|graph| f(&mut graph.borrow_mut()))
    }

    /// Append one sample, see [`LcdGraph::append`]
    pub fn append(&self, value: T) {
        self.with(|graph| graph.append(value));
    }

    /// Fit the range to the stored samples, see [`LcdGraph::rescale`]
    pub fn rescale(&self, force_zero: bool, allow_shrink: bool) -> GraphResult<()> {
        self.with(|graph| graph.rescale(force_zero, allow_shrink))
    }

    /// Upload the current glyphs, see [`LcdGraph::publish`]
    pub fn publish(&self) -> Result<(), DisplayError<D::Error>> {
        self.with(|graph| graph.publish())
    }

    /// Unwrap the graph, e.g. to detach its display
    pub fn into_inner(self) -> LcdGraph<T, D> {
        self.inner.into_inner().into_inner()
    }
}
