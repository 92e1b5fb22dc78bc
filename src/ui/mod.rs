//! In-Game HUD
//!
//! Stateless overlay drawn in screen coordinates on top of the world while
//! playing. See [`Hud`].

pub mod hud;

pub use hud::Hud;
