//! Browser implementations of the host capabilities.
//!
//! `DomInput` maps logical gesture kinds onto native mouse and touch events
//! and normalizes both into an [`InputEvent`], handing each native event to
//! the pane once even though a content move also bubbles to the document. `DomTransformer` writes inline
//! styles on the content element. `DomGeometry` reads bounding client rects.
//!
//! None of this is exercised natively; the logic it feeds lives in
//! [`crate::pane`] and is tested there.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Element, Event, EventTarget, HtmlElement, MouseEvent, TouchEvent};

use crate::config::TransformMode;
use crate::error::PaneError;
use crate::geometry::{Point, Rect};
use crate::host::{Geometry, InputHandler, InputSource, Transformer};
use crate::input::{GestureKind, InputEvent, RepeatFilter};

/// The document element, used as the capture surface for move/up.
pub fn capture_surface() -> Result<Element, PaneError> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .ok_or_else(|| PaneError::Dom("no document element available".into()))
}

// =============================================================
// Input
// =============================================================

/// Native listeners registered for one logical subscription.
pub struct DomSubscription {
    target: EventTarget,
    listeners: Vec<(&'static str, Closure<dyn FnMut(Event)>)>,
}

/// Subscribes to mouse and touch events through `addEventListener`.
///
/// Use one instance per pane: its subscriptions share the repeat filter.
#[derive(Default, Clone)]
pub struct DomInput {
    delivered: Rc<RepeatFilter<Event>>,
}

impl InputSource<Element> for DomInput {
    type Handle = DomSubscription;

    fn subscribe(&mut self, target: &Element, kind: GestureKind, handler: InputHandler) -> DomSubscription {
        let handler = Rc::new(RefCell::new(handler));
        // Touch listeners default to passive on document-level targets, which
        // would make `prevent_default` a no-op.
        let options = AddEventListenerOptions::new();
        options.set_passive(false);

        let mut listeners = Vec::new();
        for &name in kind.native_names() {
            let handler = Rc::clone(&handler);
            let delivered = Rc::clone(&self.delivered);
            let closure = Closure::<dyn FnMut(Event)>::new(move |native: Event| {
                if !delivered.admit(&native) {
                    tracing::trace!(event = name, "repeat delivery dropped");
                    return;
                }
                let Some(mut ev) = normalize(&native) else {
                    return;
                };
                match handler.try_borrow_mut() {
                    Ok(mut handler) => (*handler)(&mut ev),
                    Err(_) => return,
                }
                if ev.propagation_stopped() {
                    native.stop_propagation();
                }
                if ev.default_prevented() {
                    native.prevent_default();
                }
            });
            if let Err(err) = target.add_event_listener_with_callback_and_add_event_listener_options(
                name,
                closure.as_ref().unchecked_ref(),
                &options,
            ) {
                tracing::warn!(event = name, error = ?err, "addEventListener failed");
                continue;
            }
            listeners.push((name, closure));
        }
        DomSubscription { target: target.clone().into(), listeners }
    }

    fn unsubscribe(&mut self, handle: DomSubscription) {
        for (name, closure) in handle.listeners {
            if let Err(err) =
                handle.target.remove_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
            {
                tracing::warn!(event = name, error = ?err, "removeEventListener failed");
            }
        }
    }
}

/// Reduce a native mouse or touch event to one coordinate pair.
///
/// Touch input takes the first active contact, falling back to the first
/// changed contact for `touchend` (when no contact remains active).
fn normalize(native: &Event) -> Option<InputEvent> {
    let timestamp_ms = native.time_stamp();
    // `instanceof TouchEvent` throws on engines without touch support, so
    // dispatch on the event type name instead.
    if native.type_().starts_with("touch") {
        let touch: &TouchEvent = native.unchecked_ref();
        let active = touch.touches();
        let first = active.get(0).or_else(|| touch.changed_touches().get(0))?;
        let point = Point::new(f64::from(first.page_x()), f64::from(first.page_y()));
        return Some(InputEvent::new(point, active.length().max(1), timestamp_ms));
    }
    let mouse = native.dyn_ref::<MouseEvent>()?;
    let point = Point::new(f64::from(mouse.page_x()), f64::from(mouse.page_y()));
    Some(InputEvent::new(point, 1, timestamp_ms))
}

// =============================================================
// Transformer
// =============================================================

/// Positions the content through inline styles.
///
/// [`TransformMode::Position`] writes `left` / `top`, so the content must be
/// absolutely positioned by the host's stylesheet.
#[derive(Debug, Default, Clone, Copy)]
pub struct DomTransformer {
    mode: TransformMode,
}

impl DomTransformer {
    #[must_use]
    pub fn new(mode: TransformMode) -> Self {
        Self { mode }
    }

    fn write(element: &Element, property: &str, value: &str) {
        let Some(el) = element.dyn_ref::<HtmlElement>() else {
            tracing::warn!(property, "content is not an HTML element; style not applied");
            return;
        };
        if let Err(err) = el.style().set_property(property, value) {
            tracing::warn!(property, value, error = ?err, "style write failed");
        }
    }
}

impl Transformer<Element> for DomTransformer {
    fn apply_offset(&mut self, element: &Element, offset: Point) {
        for (property, value) in self.mode.style(offset.x, offset.y) {
            Self::write(element, property, &value);
        }
    }

    fn set_transition_duration(&mut self, element: &Element, ms: u32) {
        let (property, value) = self.mode.transition(ms);
        Self::write(element, property, &value);
    }
}

// =============================================================
// Geometry
// =============================================================

/// Measures elements with `getBoundingClientRect`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DomGeometry;

impl Geometry<Element> for DomGeometry {
    fn measure(&self, element: &Element) -> Rect {
        let r = element.get_bounding_client_rect();
        Rect::new(r.left(), r.top(), r.width(), r.height())
    }

    fn movable_child(&self, viewport: &Element) -> Option<Element> {
        viewport.first_element_child()
    }
}
