// Game module - the tap game and the screen that presents it
//
// This module contains:
// - state.rs: TapGame model (score, time left, started flag, countdown)
// - screen.rs: TapScreen controller wiring input, model, HUD and lifecycle
// - types.rs: Orientation and screen layout
// - ui_manager.rs: overlays, toast and score blink

pub mod screen;
pub mod state;
pub mod types;
pub mod ui_manager;

pub use screen::TapScreen;
pub use types::Orientation;
