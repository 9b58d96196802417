//! Dungeon levels: ASCII maps parsed into a typed wall/floor grid.
//!
//! # Map format
//! One text line per grid row. `#` is a wall, any other character is floor,
//! and `@` additionally marks the player start cell. Blank lines are ignored.
//!
//! # Invariants
//! - `cells.len() == width * height` for every `Level`.
//! - Parsing never fails; only reading the file can.

mod grid;
mod loader;

pub use grid::{Cell, GridPos, Level};
pub use loader::{LevelError, load_map_ascii};

pub fn crate_info() -> &'static str {
    "dungeon-level v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("level"));
    }
}
