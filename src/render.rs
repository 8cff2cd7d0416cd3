//! Layer 5: Render
//!
//! # Purpose
//!
//! This module defines the two traits that keep the numeric core independent
//! of any drawing technology. A widget produces an immutable snapshot; a
//! renderer consumes it.
//!
//! # Design notes
//!
//! * **One-way data flow**: Renderers receive `&S` and cannot reach back into
//!   the widget.
//! * **Fallible output**: Rendering errors belong to the renderer and are
//!   surfaced through its associated `Error` type, never as `VizError`.
//!
//! # Non-goals
//!
//! * Canvas, DOM or chart-library bindings.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Widgets
//!   ↓
//! Layer 5: Render ← You are here
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::convert::Infallible;

/// Consumer of widget snapshots.
pub trait Renderer<S> {
    /// Error produced while drawing.
    type Error;

    /// Draw one snapshot.
    fn render(&mut self, snapshot: &S) -> Result<(), Self::Error>;
}

/// Collects snapshots in order; useful for tests and recording sessions.
impl<S: Clone> Renderer<S> for Vec<S> {
    type Error = Infallible;

    fn render(&mut self, snapshot: &S) -> Result<(), Self::Error> {
        self.push(snapshot.clone());
        Ok(())
    }
}

/// An interactive widget with derived, renderable state.
pub trait Widget {
    /// Immutable view of the widget state.
    type Snapshot;

    /// Compute the current snapshot.
    fn snapshot(&self) -> Self::Snapshot;

    /// Compute a snapshot and hand it to `renderer`.
    fn redraw<R: Renderer<Self::Snapshot>>(&self, renderer: &mut R) -> Result<(), R::Error> {
        let snapshot = self.snapshot();
        tracing::trace!("redraw");
        renderer.render(&snapshot)
    }
}
