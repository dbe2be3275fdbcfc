//! JavaScript bindings.
//!
//! The host page wires DOM events straight to these methods; the engine
//! draws into the canvas itself, so JS never sees an `Action`.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::camera::Point;
use crate::config::Config;
use crate::engine::{Engine, EngineError};
use crate::input::{Button, Key, Modifiers, Shortcut, WheelDelta};

/// Initialize the WASM module.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    tracing::info!("whiteboard initialized");
}

/// One whiteboard bound to a `<canvas>` element.
#[wasm_bindgen]
pub struct Whiteboard {
    engine: Engine,
}

#[wasm_bindgen]
impl Whiteboard {
    /// Bind to the canvas with id `canvas_id`. `config_json` may be omitted
    /// or empty for the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error string if the canvas is missing, has no 2D context,
    /// or the config is invalid.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, config_json: Option<String>) -> Result<Whiteboard, JsValue> {
        let config = Config::from_json(config_json.as_deref().unwrap_or("")).map_err(to_js)?;
        let canvas = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(canvas_id))
            .ok_or_else(|| JsValue::from_str(&format!("canvas #{canvas_id} not found")))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str(&format!("#{canvas_id} is not a canvas")))?;
        let engine = Engine::new(canvas, config).map_err(to_js)?;
        Ok(Self { engine })
    }

    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, x: f64, y: f64, button: i16) {
        if let Some(button) = Button::from_dom(button) {
            self.engine.on_pointer_down(Point::new(x, y), button);
        }
    }

    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.engine.on_pointer_move(Point::new(x, y));
    }

    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self, x: f64, y: f64, button: i16) {
        if let Some(button) = Button::from_dom(button) {
            self.engine.on_pointer_up(Point::new(x, y), button);
        }
    }

    pub fn wheel(&mut self, x: f64, y: f64, delta_y: f64) {
        self.engine.on_wheel(Point::new(x, y), WheelDelta { dx: 0.0, dy: delta_y });
    }

    /// Returns `true` if the key was consumed as a shortcut (the host should
    /// call `preventDefault`).
    #[wasm_bindgen(js_name = keyDown)]
    pub fn key_down(&mut self, key: String, ctrl: bool, meta: bool) -> bool {
        let key = Key(key);
        let modifiers = Modifiers { ctrl, meta };
        let consumed = Shortcut::from_key(&key, modifiers).is_some();
        self.engine.on_key_down(&key, modifiers);
        consumed
    }

    pub fn resize(&mut self, width: f64, height: f64, dpr: f64) {
        self.engine.set_viewport(width, height, dpr);
    }

    /// The window lost focus; abandon any stroke in progress.
    pub fn blur(&mut self) {
        self.engine.on_focus_lost();
    }

    /// Repaint from scratch.
    ///
    /// # Errors
    ///
    /// Returns an error string if a canvas call fails.
    pub fn render(&mut self) -> Result<(), JsValue> {
        self.engine.render().map_err(to_js)
    }

    /// Returns `false` if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        !self.engine.undo().is_empty()
    }

    /// Returns `false` if there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        !self.engine.redo().is_empty()
    }

    #[wasm_bindgen(js_name = strokeCount)]
    #[must_use]
    pub fn stroke_count(&self) -> usize {
        self.engine.core.store.len()
    }

    #[wasm_bindgen(js_name = canUndo)]
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.engine.core.history().can_undo()
    }

    #[wasm_bindgen(js_name = canRedo)]
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.engine.core.history().can_redo()
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.engine.core.camera().scale()
    }

    /// Logical `[width, height]` currently on screen.
    #[wasm_bindgen(js_name = visibleExtent)]
    #[must_use]
    pub fn visible_extent(&self) -> Vec<f64> {
        let (w, h) = self.engine.core.visible_extent();
        vec![w, h]
    }

    /// CSS colour of the next stroke, for a host-side swatch.
    #[wasm_bindgen(js_name = penColor)]
    #[must_use]
    pub fn pen_color(&self) -> String {
        self.engine.core.pen_color().css()
    }
}

fn to_js(err: impl Into<EngineError>) -> JsValue {
    JsValue::from_str(&err.into().to_string())
}
