//! Screen-Space GUI
//!
//! Full-screen views drawn at fixed screen positions instead of world
//! coordinates. They produce `DrawCommand`s like everything else and never
//! touch SDL directly.
//!
//! # Available Components
//!
//! - [`TitleScreen`] - Black title screen shown in the menu state

pub mod title_screen;

pub use title_screen::TitleScreen;
