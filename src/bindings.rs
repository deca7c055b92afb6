//! JavaScript-facing wrapper exported through `wasm-bindgen`.
//!
//! ```js
//! const pane = new SwipePane(document.querySelector('.viewport'), '{"duration_ms": 200}');
//! pane.on('end', ({ x, y }) => console.log(x, y));
//! ```

use js_sys::{Function, Object, Reflect};
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::config::PaneConfig;
use crate::controller::SwipePane;
use crate::dom::{DomGeometry, DomInput, DomTransformer, capture_surface};
use crate::error::PaneError;
use crate::events::{EventKind, PaneEvent};
use crate::geometry::Point;

/// A swipe pane bound to a DOM viewport element.
#[wasm_bindgen(js_name = SwipePane)]
pub struct JsSwipePane {
    inner: SwipePane<Element, DomInput>,
}

#[wasm_bindgen(js_class = SwipePane)]
impl JsSwipePane {
    /// Turn `viewport` into a pannable pane. `options` is an optional JSON
    /// object string (`duration_ms`, `transform`).
    #[wasm_bindgen(constructor)]
    pub fn new(viewport: Element, options: Option<String>) -> Result<JsSwipePane, JsValue> {
        let config = match options {
            Some(raw) => PaneConfig::from_json(&raw)?,
            None => PaneConfig::default(),
        };
        let capture = capture_surface()?;
        let inner = SwipePane::with_config(
            viewport,
            capture,
            DomTransformer::new(config.transform),
            DomInput::default(),
            DomGeometry,
            config,
        )?;
        Ok(Self { inner })
    }

    /// Call `callback({x, y})` on every `start`, `swipe` or `end` event.
    pub fn on(&self, event: &str, callback: Function) -> Result<(), JsValue> {
        let kind = parse_kind(event)?;
        self.inner.on(kind, move |e: &PaneEvent| {
            let delivered = point_object(e.point()).and_then(|payload| callback.call1(&JsValue::NULL, &payload));
            if let Err(err) = delivered {
                tracing::warn!(event = e.kind().as_str(), error = ?err, "pane listener threw");
            }
        });
        Ok(())
    }

    /// Remove every callback registered for `event`.
    pub fn off(&self, event: &str) -> Result<(), JsValue> {
        self.inner.off_all(parse_kind(event)?);
        Ok(())
    }

    /// Set the settle transition in milliseconds.
    pub fn duration(&mut self, ms: u32) {
        self.inner.set_duration(ms);
    }

    pub fn redraw(&self) {
        self.inner.redraw();
    }

    pub fn bind(&mut self) {
        self.inner.bind();
    }

    pub fn unbind(&mut self) {
        self.inner.unbind();
    }

    /// Committed offset as `{x, y}`.
    pub fn position(&self) -> Result<JsValue, JsValue> {
        point_object(self.inner.position())
    }

    #[wasm_bindgen(getter)]
    pub fn dragging(&self) -> bool {
        self.inner.is_dragging()
    }
}

fn parse_kind(event: &str) -> Result<EventKind, PaneError> {
    EventKind::parse(event).ok_or_else(|| PaneError::UnknownEvent(event.to_string()))
}

fn point_object(p: Point) -> Result<JsValue, JsValue> {
    let obj = Object::new();
    Reflect::set(&obj, &JsValue::from_str("x"), &JsValue::from_f64(p.x))?;
    Reflect::set(&obj, &JsValue::from_str("y"), &JsValue::from_f64(p.y))?;
    Ok(obj.into())
}
