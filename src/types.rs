// Core grid and action types
// Shared by the generic search engine, the heuristics, and the game-tree engine

use serde::{Deserialize, Serialize};

/// 2D coordinate on the maze grid
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    /// Creates a new coordinate
    pub fn new(x: i32, y: i32) -> Self {
        Coord { x, y }
    }
}

/// Represents the possible movement actions for the maze agent
///
/// `Stop` is always legal in the game but is filtered out by the search
/// and game-tree engines before expansion.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
    Stop,
}

impl Direction {
    /// The four movement directions, excluding `Stop`
    pub const CARDINAL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Converts direction to string representation for logs and reports
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
            Direction::Stop => "stop",
        }
    }

    /// Calculates the next coordinate when moving in this direction
    pub fn apply(&self, coord: &Coord) -> Coord {
        match self {
            Direction::North => Coord { x: coord.x, y: coord.y + 1 },
            Direction::South => Coord { x: coord.x, y: coord.y - 1 },
            Direction::East => Coord { x: coord.x + 1, y: coord.y },
            Direction::West => Coord { x: coord.x - 1, y: coord.y },
            Direction::Stop => *coord,
        }
    }
}

/// Row-major boolean occupancy grid
///
/// Used for both the static wall layout and the remaining-food set.
/// Wall grids are immutable once built; food grids are cloned and cleared
/// cell by cell as objectives are consumed.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<bool>,
}

impl Grid {
    /// Creates an empty (all-false) grid of the given dimensions
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");
        Grid {
            width,
            height,
            cells: vec![false; (width * height) as usize],
        }
    }

    /// Builds a grid from text rows, marking cells containing `mark` as set
    ///
    /// Rows are listed top to bottom, so the last row is y = 0.
    pub fn parse(rows: &[&str], mark: char) -> Self {
        let height = rows.len() as i32;
        let width = rows.first().map_or(0, |r| r.chars().count()) as i32;
        let mut grid = Grid::new(width, height);

        for (row_idx, row) in rows.iter().enumerate() {
            let y = height - 1 - row_idx as i32;
            for (x, ch) in row.chars().enumerate() {
                if ch == mark {
                    grid.set(Coord::new(x as i32, y), true);
                }
            }
        }

        grid
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Checks whether a coordinate lies inside the grid
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.x >= 0 && coord.x < self.width && coord.y >= 0 && coord.y < self.height
    }

    /// Returns the cell value; out-of-bounds coordinates read as unset
    pub fn get(&self, coord: Coord) -> bool {
        if !self.in_bounds(coord) {
            return false;
        }
        self.cells[(coord.y * self.width + coord.x) as usize]
    }

    /// Sets the cell value at an in-bounds coordinate
    pub fn set(&mut self, coord: Coord, value: bool) {
        assert!(self.in_bounds(coord), "set out of bounds: {:?}", coord);
        self.cells[(coord.y * self.width + coord.x) as usize] = value;
    }

    /// Number of set cells
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Coordinates of all set cells, in row-major order
    pub fn positions(&self) -> Vec<Coord> {
        let mut positions = Vec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                let coord = Coord::new(x, y);
                if self.get(coord) {
                    positions.push(coord);
                }
            }
        }
        positions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_apply() {
        let origin = Coord::new(3, 3);
        assert_eq!(Direction::North.apply(&origin), Coord::new(3, 4));
        assert_eq!(Direction::South.apply(&origin), Coord::new(3, 2));
        assert_eq!(Direction::East.apply(&origin), Coord::new(4, 3));
        assert_eq!(Direction::West.apply(&origin), Coord::new(2, 3));
        assert_eq!(Direction::Stop.apply(&origin), origin);
    }

    #[test]
    fn test_cardinal_excludes_stop() {
        assert_eq!(Direction::CARDINAL.len(), 4);
        assert!(!Direction::CARDINAL.contains(&Direction::Stop));
    }

    #[test]
    fn test_grid_parse_orientation() {
        // Last text row is y = 0
        let grid = Grid::parse(&["#..", "...", "..#"], '#');
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 3);
        assert!(grid.get(Coord::new(0, 2)), "top-left mark");
        assert!(grid.get(Coord::new(2, 0)), "bottom-right mark");
        assert!(!grid.get(Coord::new(1, 1)));
        assert_eq!(grid.count(), 2);
    }

    #[test]
    fn test_grid_out_of_bounds_reads_unset() {
        let grid = Grid::new(2, 2);
        assert!(!grid.get(Coord::new(-1, 0)));
        assert!(!grid.get(Coord::new(0, 5)));
    }

    #[test]
    fn test_grid_positions() {
        let mut grid = Grid::new(3, 2);
        grid.set(Coord::new(2, 0), true);
        grid.set(Coord::new(0, 1), true);
        assert_eq!(grid.positions(), vec![Coord::new(2, 0), Coord::new(0, 1)]);
    }
}
