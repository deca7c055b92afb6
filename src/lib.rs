//! Gesture-driven panning for a movable surface inside a fixed viewport.
//!
//! A pane turns pointer-down / move / up sequences into a bounded 2D
//! translation of its content: the content follows the pointer, overshoot
//! past either edge is damped by half (rubber band), and on release the
//! content settles inside its legal range over a configurable transition.
//! Each phase is announced to observers as a `start`, `swipe` or `end` event.
//!
//! The crate compiles to WebAssembly for the browser ([`bindings`], [`dom`])
//! but the state machine itself depends only on three injected capabilities
//! ([`host`]), so it runs and is tested natively.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`pane`] | Testable [`pane::PaneCore`] state machine producing [`pane::Action`]s |
//! | [`controller`] | [`controller::SwipePane`]: binds capabilities and dispatches input |
//! | [`host`] | Capability traits: input source, transformer, geometry |
//! | [`input`] | Normalized input events and gesture state |
//! | [`geometry`] | Points, rectangles, range, resistance and clamp math |
//! | [`events`] | Lifecycle events and the observer registry |
//! | [`config`] | Host options (duration, transform mode) |
//! | [`error`] | Error taxonomy |
//! | [`dom`] | web-sys implementations of the capabilities |
//! | [`bindings`] | `wasm-bindgen` JavaScript API |
//! | [`consts`] | Shared numeric constants |

pub mod bindings;
pub mod config;
pub mod consts;
pub mod controller;
pub mod dom;
pub mod error;
pub mod events;
pub mod geometry;
pub mod host;
pub mod input;
pub mod pane;

pub use config::{PaneConfig, TransformMode};
pub use controller::SwipePane;
pub use error::PaneError;
pub use events::{EventKind, PaneEvent};
pub use geometry::{Point, Range, Rect};
