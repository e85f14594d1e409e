//! Screen-Space Overlays
//!
//! Stateful overlays drawn on top of the game screen. While one is open it
//! receives input instead of the game.
//!
//! # Available Components
//!
//! - [`OptionsMenu`] - Overflow menu holding "About"
//! - [`AboutDialog`] - App name, version and a short message
//!
//! # Example Usage
//!
//! ```rust
//! use crate::gui::{OptionsMenu, OptionsMenuItem};
//!
//! let mut options_menu = OptionsMenu::new();
//! options_menu.open();
//!
//! match options_menu.selected_option() {
//!     Some(OptionsMenuItem::About) => about_dialog.show(),
//!     None => {}
//! }
//! ```

pub mod about_dialog;
pub mod menu;
pub mod options_menu;

pub use about_dialog::AboutDialog;
pub use menu::{Menu, MenuItem};
pub use options_menu::{OptionsMenu, OptionsMenuItem};
