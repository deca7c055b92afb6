//! `SwipePane`: wires a [`PaneCore`] to its host capabilities.
//!
//! The pane subscribes to pointer-down/move/up on the content element and to
//! move/up on a broader capture surface, so a drag that leaves the content's
//! hit area keeps tracking until release. Each delivered event runs to
//! completion: the core computes actions, the pane executes the visual ones
//! against the [`Transformer`], then notifies observers with no borrow held,
//! so listeners may call back into the pane.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::{RefCell, RefMut};
use std::rc::{Rc, Weak};

use crate::config::PaneConfig;
use crate::error::PaneError;
use crate::events::{Emitter, EventKind, ListenerId, PaneEvent};
use crate::geometry::{Point, Range};
use crate::host::{Geometry, InputHandler, InputSource, Transformer};
use crate::input::{GestureKind, GestureState, InputEvent};
use crate::pane::{Action, PaneCore};

/// State shared between the pane and its input subscriptions.
struct PaneState<E> {
    viewport: E,
    content: E,
    core: PaneCore,
    transformer: Box<dyn Transformer<E>>,
    geometry: Box<dyn Geometry<E>>,
}

impl<E> PaneState<E> {
    /// Run one input event through the core; returns the notifications to deliver.
    fn handle(&mut self, kind: GestureKind, ev: &mut InputEvent) -> Vec<PaneEvent> {
        match kind {
            GestureKind::Down => {
                let halt = self.core.halt_transition();
                self.execute(halt);
                let viewport = self.geometry.measure(&self.viewport);
                let content = self.geometry.measure(&self.content);
                let actions = self.core.on_gesture_start(ev, &viewport, &content);
                self.execute(actions)
            }
            GestureKind::Move => {
                let actions = self.core.on_gesture_move(ev);
                self.execute(actions)
            }
            GestureKind::Up => {
                let actions = self.core.on_gesture_end(ev);
                self.execute(actions)
            }
        }
    }

    fn execute(&mut self, actions: Vec<Action>) -> Vec<PaneEvent> {
        let mut events = Vec::new();
        for action in actions {
            match action {
                Action::SetTransition(ms) => self.transformer.set_transition_duration(&self.content, ms),
                Action::ApplyOffset(offset) => self.transformer.apply_offset(&self.content, offset),
                Action::Emit(event) => events.push(event),
            }
        }
        events
    }
}

/// A gesture-driven panning controller bound to one viewport.
pub struct SwipePane<E: 'static, I: InputSource<E>> {
    state: Rc<RefCell<PaneState<E>>>,
    emitter: Rc<RefCell<Emitter>>,
    input: I,
    capture: E,
    subscriptions: Vec<I::Handle>,
}

impl<E, I> SwipePane<E, I>
where
    E: Clone + 'static,
    I: InputSource<E>,
{
    /// Bind a pane to `viewport` and its single movable child with default options.
    ///
    /// `capture` is the broader surface (usually the document) that keeps
    /// receiving move/up after the pointer leaves the content.
    ///
    /// # Errors
    ///
    /// [`PaneError::MissingContent`] when `viewport` has no movable child.
    pub fn new(
        viewport: E,
        capture: E,
        transformer: impl Transformer<E> + 'static,
        input: I,
        geometry: impl Geometry<E> + 'static,
    ) -> Result<Self, PaneError> {
        Self::with_config(viewport, capture, transformer, input, geometry, PaneConfig::default())
    }

    /// Bind a pane with explicit options.
    ///
    /// # Errors
    ///
    /// [`PaneError::MissingContent`] when `viewport` has no movable child.
    pub fn with_config(
        viewport: E,
        capture: E,
        transformer: impl Transformer<E> + 'static,
        input: I,
        geometry: impl Geometry<E> + 'static,
        config: PaneConfig,
    ) -> Result<Self, PaneError> {
        let content = geometry.movable_child(&viewport).ok_or(PaneError::MissingContent)?;
        let state = PaneState {
            viewport,
            content,
            core: PaneCore::new(config.duration_ms),
            transformer: Box::new(transformer),
            geometry: Box::new(geometry),
        };
        let mut pane = Self {
            state: Rc::new(RefCell::new(state)),
            emitter: Rc::new(RefCell::new(Emitter::new())),
            input,
            capture,
            subscriptions: Vec::new(),
        };
        pane.bind();
        Ok(pane)
    }

    // --- Subscriptions ---

    /// Subscribe to input. Does nothing while already bound.
    pub fn bind(&mut self) {
        if self.is_bound() {
            return;
        }
        let content = self.state.borrow().content.clone();
        let plan = [
            (&content, GestureKind::Down),
            (&content, GestureKind::Move),
            (&content, GestureKind::Up),
            (&self.capture, GestureKind::Move),
            (&self.capture, GestureKind::Up),
        ];
        for (target, kind) in plan {
            let handler = self.handler(kind);
            let handle = self.input.subscribe(target, kind, handler);
            self.subscriptions.push(handle);
        }
        tracing::debug!(subscriptions = self.subscriptions.len(), "swipe pane bound");
    }

    /// Release every subscription. Safe to call repeatedly or before `bind`.
    pub fn unbind(&mut self) {
        if self.subscriptions.is_empty() {
            return;
        }
        let released = self.subscriptions.len();
        for handle in self.subscriptions.drain(..) {
            self.input.unsubscribe(handle);
        }
        tracing::debug!(released, "swipe pane unbound");
    }

    #[must_use]
    pub fn is_bound(&self) -> bool {
        !self.subscriptions.is_empty()
    }

    fn handler(&self, kind: GestureKind) -> InputHandler {
        let state = Rc::downgrade(&self.state);
        let emitter = Rc::downgrade(&self.emitter);
        Box::new(move |ev: &mut InputEvent| dispatch(&state, &emitter, kind, ev))
    }

    /// Feed one normalized event directly, bypassing the input source.
    pub fn handle_input(&self, kind: GestureKind, ev: &mut InputEvent) {
        dispatch(&Rc::downgrade(&self.state), &Rc::downgrade(&self.emitter), kind, ev);
    }

    // --- Configuration ---

    /// Set the settle duration for the next release.
    pub fn set_duration(&mut self, ms: u32) -> &mut Self {
        self.state.borrow_mut().core.set_duration(ms);
        self
    }

    #[must_use]
    pub fn duration(&self) -> u32 {
        self.state.borrow().core.duration()
    }

    /// Re-apply the committed position, e.g. after the viewport was re-laid-out.
    pub fn redraw(&self) {
        let mut state = self.state.borrow_mut();
        let actions = state.core.redraw();
        state.execute(actions);
    }

    // --- Observers ---

    pub fn on(&self, kind: EventKind, listener: impl Fn(&PaneEvent) + 'static) -> ListenerId {
        self.emitter.borrow_mut().on(kind, listener)
    }

    pub fn once(&self, kind: EventKind, listener: impl Fn(&PaneEvent) + 'static) -> ListenerId {
        self.emitter.borrow_mut().once(kind, listener)
    }

    pub fn off(&self, id: ListenerId) -> bool {
        self.emitter.borrow_mut().off(id)
    }

    pub fn off_all(&self, kind: EventKind) {
        self.emitter.borrow_mut().off_all(kind);
    }

    #[must_use]
    pub fn has_listeners(&self, kind: EventKind) -> bool {
        self.emitter.borrow().has_listeners(kind)
    }

    /// Direct access to the listener registry.
    ///
    /// Drop the guard before input is delivered again: events emitted while
    /// it is held are not delivered to listeners.
    pub fn events_mut(&self) -> RefMut<'_, Emitter> {
        self.emitter.borrow_mut()
    }

    // --- Queries ---

    #[must_use]
    pub fn position(&self) -> Point {
        self.state.borrow().core.position()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.state.borrow().core.is_dragging()
    }

    #[must_use]
    pub fn gesture(&self) -> Option<GestureState> {
        self.state.borrow().core.gesture()
    }

    #[must_use]
    pub fn range(&self) -> Option<Range> {
        self.state.borrow().core.range()
    }

    /// The movable child the pane drives.
    #[must_use]
    pub fn content(&self) -> E {
        self.state.borrow().content.clone()
    }
}

impl<E: 'static, I: InputSource<E>> Drop for SwipePane<E, I> {
    fn drop(&mut self) {
        for handle in self.subscriptions.drain(..) {
            self.input.unsubscribe(handle);
        }
    }
}

fn dispatch<E>(
    state: &Weak<RefCell<PaneState<E>>>,
    emitter: &Weak<RefCell<Emitter>>,
    kind: GestureKind,
    ev: &mut InputEvent,
) {
    let Some(state) = state.upgrade() else {
        return;
    };
    let events = match state.try_borrow_mut() {
        Ok(mut state) => state.handle(kind, ev),
        Err(_) => {
            tracing::warn!(?kind, "input delivered while the pane was busy; dropped");
            return;
        }
    };
    let Some(emitter) = emitter.upgrade() else {
        return;
    };
    for event in events {
        let listeners = match emitter.try_borrow_mut() {
            Ok(mut emitter) => emitter.prepare(&event),
            Err(_) => {
                tracing::warn!(kind = event.kind().as_str(), "listener registry is borrowed; event not delivered");
                continue;
            }
        };
        for listener in listeners {
            listener(&event);
        }
    }
}
