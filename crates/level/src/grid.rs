use serde::Serialize;
use std::fmt;

/// Character marking a wall cell. Everything else is floor.
const WALL_CHAR: char = '#';
/// Character marking the player start. The cell itself is floor.
const PLAYER_CHAR: char = '@';

/// A single map cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Cell {
    Wall,
    Floor,
}

impl Cell {
    fn from_char(c: char) -> Self {
        if c == WALL_CHAR { Cell::Wall } else { Cell::Floor }
    }
}

/// A cell coordinate: `x` is the column, `y` is the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Player start used when a map has no `@`.
impl Default for GridPos {
    fn default() -> Self {
        Self { x: 1, y: 1 }
    }
}

/// A parsed level: a row-major grid of cells plus the player start.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Level {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    player: GridPos,
}

impl Level {
    /// Parse ASCII map text.
    ///
    /// Width is taken from the first non-blank line. Longer rows are cut to
    /// that width and shorter rows are padded with walls. If the map holds
    /// several `@`, the last one in row-major order is the player start.
    pub fn parse(text: &str) -> Self {
        let lines: Vec<&str> = text.lines().filter(|line| !line.is_empty()).collect();

        let height = lines.len();
        let width = lines.first().map_or(0, |line| line.chars().count());
        let mut cells = vec![Cell::Wall; width * height];
        let mut player = GridPos::default();

        for (y, line) in lines.iter().enumerate() {
            for (x, c) in line.chars().take(width).enumerate() {
                cells[y * width + x] = Cell::from_char(c);
                if c == PLAYER_CHAR {
                    player = GridPos::new(x as i32, y as i32);
                }
            }
        }

        Self {
            width,
            height,
            cells,
            player,
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Player start cell.
    pub fn player(&self) -> GridPos {
        self.player
    }

    /// True for a level with no cells (e.g. parsed from empty text).
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Row-major index of `(x, y)`. Does not bounds-check.
    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Cell at `(x, y)`, or `None` outside the grid.
    pub fn cell(&self, x: i32, y: i32) -> Option<Cell> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[self.index(x, y)])
    }

    /// Number of cells of the given kind.
    pub fn count(&self, kind: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == kind).count()
    }

    /// Iterate `(position, cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (GridPos, Cell)> + '_ {
        let width = self.width.max(1);
        self.cells.iter().enumerate().map(move |(i, &cell)| {
            let pos = GridPos::new((i % width) as i32, (i / width) as i32);
            (pos, cell)
        })
    }
}

/// Re-renders the grid: `#` wall, `.` floor, `@` player start.
impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let c = match self.cells[self.index(x, y)] {
                    Cell::Wall => WALL_CHAR,
                    Cell::Floor if self.player == GridPos::new(x as i32, y as i32) => PLAYER_CHAR,
                    Cell::Floor => '.',
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_basic_room() {
        let level = Level::parse("#####\n#@..#\n#####\n");
        assert_eq!(level.width(), 5);
        assert_eq!(level.height(), 3);
        assert_eq!(level.cells().len(), 15);
        assert_eq!(level.player(), GridPos::new(1, 1));
        assert_eq!(level.cell(0, 0), Some(Cell::Wall));
        assert_eq!(level.cell(2, 1), Some(Cell::Floor));
        assert_eq!(level.count(Cell::Floor), 3);
        assert_eq!(level.count(Cell::Wall), 12);
    }

    #[test]
    fn player_cell_is_floor() {
        let level = Level::parse("###\n#@#\n###");
        assert_eq!(level.cell(1, 1), Some(Cell::Floor));
    }

    #[test]
    fn any_non_hash_is_floor() {
        let level = Level::parse("x .~");
        assert!(level.cells().iter().all(|&c| c == Cell::Floor));
    }

    #[test]
    fn blank_lines_are_skipped() {
        let level = Level::parse("\n###\n\n#.#\n\n###\n\n");
        assert_eq!(level.height(), 3);
        assert_eq!(level.cell(1, 1), Some(Cell::Floor));
    }

    #[test]
    fn crlf_line_endings() {
        let level = Level::parse("###\r\n#@#\r\n###\r\n");
        assert_eq!(level.width(), 3);
        assert_eq!(level.height(), 3);
        assert_eq!(level.player(), GridPos::new(1, 1));
    }

    #[test]
    fn width_comes_from_first_line() {
        let level = Level::parse("##\n#....\n#");
        assert_eq!(level.width(), 2);
        assert_eq!(level.cells().len(), 6);
        // Long row truncated.
        assert_eq!(level.cell(1, 1), Some(Cell::Floor));
        assert_eq!(level.cell(2, 1), None);
        // Short row padded with walls.
        assert_eq!(level.cell(1, 2), Some(Cell::Wall));
    }

    #[test]
    fn player_outside_width_is_ignored() {
        let level = Level::parse("#.\n#..@");
        assert_eq!(level.player(), GridPos::default());
    }

    #[test]
    fn last_player_marker_wins() {
        let level = Level::parse("@..\n..@");
        assert_eq!(level.player(), GridPos::new(2, 1));
    }

    #[test]
    fn missing_player_uses_default() {
        let level = Level::parse("....\n....\n....");
        assert_eq!(level.player(), GridPos::new(1, 1));
    }

    #[test]
    fn empty_text_gives_empty_level() {
        let level = Level::parse("");
        assert!(level.is_empty());
        assert_eq!(level.width(), 0);
        assert_eq!(level.height(), 0);
        assert_eq!(level.player(), GridPos::default());
        assert_eq!(level.iter().count(), 0);
    }

    #[test]
    fn cell_out_of_bounds() {
        let level = Level::parse("#.\n.#");
        assert_eq!(level.cell(-1, 0), None);
        assert_eq!(level.cell(0, -1), None);
        assert_eq!(level.cell(2, 0), None);
        assert_eq!(level.cell(0, 2), None);
    }

    #[test]
    fn iter_is_row_major() {
        let level = Level::parse("#.\n.#");
        let items: Vec<_> = level.iter().collect();
        assert_eq!(
            items,
            vec![
                (GridPos::new(0, 0), Cell::Wall),
                (GridPos::new(1, 0), Cell::Floor),
                (GridPos::new(0, 1), Cell::Floor),
                (GridPos::new(1, 1), Cell::Wall),
            ]
        );
        assert_eq!(level.index(1, 1), 3);
    }

    #[test]
    fn display_round_trips_layout() {
        let text = "#####\n#@.x#\n#####\n";
        let level = Level::parse(text);
        assert_eq!(level.to_string(), "#####\n#@..#\n#####\n");
        assert_eq!(Level::parse(&level.to_string()), level);
    }
}
