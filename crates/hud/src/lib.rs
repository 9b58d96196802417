//! Debug HUD: a small translucent egui window in the top-left corner.
//!
//! The HUD only displays state. Nothing in the starter mutates it in
//! response to input.

mod hud;

pub use hud::{HudState, draw_hud};
