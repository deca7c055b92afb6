//! Capabilities the pane consumes from its host platform.
//!
//! The pane never reaches for ambient globals. Input subscription, visual
//! placement and geometry measurement are injected at construction, so the
//! same state machine drives a browser DOM ([`crate::dom`]) or an in-memory
//! fake in tests.

use crate::geometry::{Point, Rect};
use crate::input::{GestureKind, InputEvent};

/// Callback invoked with each normalized pointer event.
pub type InputHandler = Box<dyn FnMut(&mut InputEvent)>;

/// Subscribes handlers to pointer-like events on an element.
pub trait InputSource<E> {
    /// Token returned by [`InputSource::subscribe`] and consumed by
    /// [`InputSource::unsubscribe`].
    type Handle;

    /// Deliver every `kind` event reaching `target` to `handler`.
    ///
    /// Implementations normalize mouse and touch input into an
    /// [`InputEvent`] before calling the handler, and forward the handler's
    /// propagation/default requests to the native event afterwards.
    fn subscribe(&mut self, target: &E, kind: GestureKind, handler: InputHandler) -> Self::Handle;

    /// Remove a subscription created by [`InputSource::subscribe`].
    fn unsubscribe(&mut self, handle: Self::Handle);
}

/// Places an element at a logical offset.
pub trait Transformer<E> {
    /// Position `element` at `offset` from its natural top-left alignment.
    fn apply_offset(&mut self, element: &E, offset: Point);

    /// Animate subsequent [`Transformer::apply_offset`] calls over `ms`
    /// milliseconds; `0` applies them instantly.
    fn set_transition_duration(&mut self, element: &E, ms: u32);
}

/// Reads element geometry.
pub trait Geometry<E> {
    /// Bounding box of `element` in viewport-relative coordinates.
    fn measure(&self, element: &E) -> Rect;

    /// The single movable child of `viewport`, if it has one.
    fn movable_child(&self, viewport: &E) -> Option<E>;
}
