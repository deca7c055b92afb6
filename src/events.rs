//! Lifecycle notifications and the observer registry that delivers them.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use std::rc::Rc;

use serde::Serialize;

use crate::geometry::Point;

/// Notification emitted for each gesture phase.
///
/// `Start` carries the pointer position. `Swipe` carries the resisted content
/// offset and `End` the clamped one; neither is a raw pointer delta.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PaneEvent {
    Start { x: f64, y: f64 },
    Swipe { x: f64, y: f64 },
    End { x: f64, y: f64 },
}

impl PaneEvent {
    #[must_use]
    pub fn start(p: Point) -> Self {
        Self::Start { x: p.x, y: p.y }
    }

    #[must_use]
    pub fn swipe(p: Point) -> Self {
        Self::Swipe { x: p.x, y: p.y }
    }

    #[must_use]
    pub fn end(p: Point) -> Self {
        Self::End { x: p.x, y: p.y }
    }

    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Start { .. } => EventKind::Start,
            Self::Swipe { .. } => EventKind::Swipe,
            Self::End { .. } => EventKind::End,
        }
    }

    #[must_use]
    pub fn point(&self) -> Point {
        match *self {
            Self::Start { x, y } | Self::Swipe { x, y } | Self::End { x, y } => Point { x, y },
        }
    }
}

/// Event name used to register listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Start,
    Swipe,
    End,
}

impl EventKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Swipe => "swipe",
            Self::End => "end",
        }
    }

    /// Parse a host-supplied event name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "start" => Some(Self::Start),
            "swipe" => Some(Self::Swipe),
            "end" => Some(Self::End),
            _ => None,
        }
    }
}

/// Identifies a registered listener so it can be removed later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Shared listener callback.
pub type Listener = Rc<dyn Fn(&PaneEvent)>;

struct Entry {
    id: ListenerId,
    kind: EventKind,
    once: bool,
    listener: Listener,
}

/// Observer registry keyed by [`EventKind`].
///
/// Listeners run in registration order. Dispatch works on a snapshot taken
/// before the first listener runs.
#[derive(Default)]
pub struct Emitter {
    entries: Vec<Entry>,
    next_id: u64,
}

impl std::fmt::Debug for Emitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Emitter").field("listeners", &self.entries.len()).finish()
    }
}

impl Emitter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` for every `kind` event.
    pub fn on(&mut self, kind: EventKind, listener: impl Fn(&PaneEvent) + 'static) -> ListenerId {
        self.push(kind, false, Rc::new(listener))
    }

    /// Register `listener` for the next `kind` event only.
    pub fn once(&mut self, kind: EventKind, listener: impl Fn(&PaneEvent) + 'static) -> ListenerId {
        self.push(kind, true, Rc::new(listener))
    }

    /// Remove one listener. Returns whether it was registered.
    pub fn off(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Remove every listener for `kind`.
    pub fn off_all(&mut self, kind: EventKind) {
        self.entries.retain(|e| e.kind != kind);
    }

    /// Remove every listener.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.entries.iter().filter(|e| e.kind == kind).count()
    }

    #[must_use]
    pub fn has_listeners(&self, kind: EventKind) -> bool {
        self.entries.iter().any(|e| e.kind == kind)
    }

    /// Take the listeners that should receive `event`, dropping `once`
    /// registrations from the registry.
    ///
    /// Callers that hold the emitter behind a `RefCell` invoke the returned
    /// listeners after releasing the borrow, so listeners may re-enter.
    #[must_use]
    pub fn prepare(&mut self, event: &PaneEvent) -> Vec<Listener> {
        let kind = event.kind();
        let listeners =
            self.entries.iter().filter(|e| e.kind == kind).map(|e| Rc::clone(&e.listener)).collect();
        self.entries.retain(|e| !(e.once && e.kind == kind));
        listeners
    }

    /// Deliver `event` to every listener registered for its kind.
    pub fn emit(&mut self, event: &PaneEvent) {
        for listener in self.prepare(event) {
            listener(event);
        }
    }

    fn push(&mut self, kind: EventKind, once: bool, listener: Listener) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.entries.push(Entry { id, kind, once, listener });
        id
    }
}
