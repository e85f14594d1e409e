//! Save/restore of transient screen state
//!
//! The screen is torn down and rebuilt when the window rotates. Before that
//! happens it writes its game values into an `InstanceState`, and the new
//! screen is created from that bundle. Nothing here is written to disk.
//!
//! # Architecture
//!
//! - `types`: keys, snapshot and error types
//! - `bundle`: `InstanceState` key/value store
//! - `saveable`: `Saveable` trait for values stored in a bundle
//!
//! # Example Usage
//!
//! ```ignore
//! let mut state = InstanceState::new();
//! game.snapshot().save_state(&mut state)?;
//!
//! // ... screen dropped and rebuilt ...
//! let snapshot = GameSnapshot::restore_state(&state)?;
//! ```

pub mod bundle;
pub mod saveable;
pub mod types;

pub use bundle::InstanceState;
pub use saveable::Saveable;
pub use types::*;
