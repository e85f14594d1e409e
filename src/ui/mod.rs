//! HUD Components
//!
//! Elements drawn on the game screen itself, as opposed to the overlays in
//! `gui`. Animation state lives in plain structs advanced by the frame delta,
//! so everything except the `render` methods can be tested without SDL.
//!
//! # Available Components
//!
//! - [`TapButton`] - The button with its bounce animation
//! - [`FloatingText`] / [`ScoreIndicators`] - "+1" indicators
//! - [`Toast`] - Transient bottom-of-screen message
//! - [`Blink`] - Score text blink

pub mod animation;
pub mod button;
pub mod floating_text;
pub mod toast;

pub use animation::Blink;
pub use button::TapButton;
pub use floating_text::{FloatingText, ScoreIndicators};
pub use toast::{Toast, TOAST_LONG};
