//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per frame
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod physics;
pub mod rect;
pub mod spawn;
pub mod state;
pub mod stream;
pub mod tick;

pub use collision::{BounceResult, resolve_platforms};
pub use rect::Rect;
pub use spawn::next_platform;
pub use state::{EndReason, GamePhase, GameState, Platform, Player};
pub use stream::{StreamResult, prune, stream};
pub use tick::{TickInput, TickReport, tick};
