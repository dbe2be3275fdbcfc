//! Freehand whiteboard engine.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! whole drawing model: translating raw pointer, wheel and keyboard events
//! into strokes and camera changes, keeping an undo/redo history of whole
//! strokes, and repainting the scene. The host page only forwards DOM events
//! to [`wasm::Whiteboard`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`camera`] | Pan/zoom transform between logical and screen space |
//! | [`doc`] | Segments, strokes, and the stroke store |
//! | [`history`] | Undo/redo stacks over whole strokes |
//! | [`input`] | Input event types and the interaction state machine |
//! | [`render`] | Drawing-surface trait and full repaint |
//! | [`color`] | Pen colour and next-stroke hue source |
//! | [`config`] | Host-supplied configuration |
//! | [`consts`] | Shared defaults (line width, zoom limits, etc.) |
//! | [`wasm`] | JavaScript bindings |

pub mod camera;
pub mod color;
pub mod config;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod history;
pub mod input;
pub mod render;
pub mod wasm;
