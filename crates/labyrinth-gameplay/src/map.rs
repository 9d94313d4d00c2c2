//! Level grid and the requests enemies send to it.
//!
//! Rows run along Z and columns along X: the cell at `(row, col)` sits at
//! world `(col, _, row)`.

use labyrinth_common::{GridCell, MapError, MapResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Contents of one map cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Solid wall block
    Wall,
    /// Walkable floor
    Empty,
    /// Enemy spawn point (cleared when the enemy dies)
    Enemy,
    /// Player spawn point
    Player,
    /// Anything else (pickups, props)
    Other(char),
}

impl Cell {
    /// Parses a map symbol.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Self {
        match symbol {
            '#' => Self::Wall,
            '·' | '.' | ' ' => Self::Empty,
            'E' => Self::Enemy,
            'P' => Self::Player,
            other => Self::Other(other),
        }
    }

    /// Map symbol of this cell.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Wall => '#',
            Self::Empty => '·',
            Self::Enemy => 'E',
            Self::Player => 'P',
            Self::Other(symbol) => symbol,
        }
    }
}

/// Mutation a map collaborator is asked to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MapRequest {
    /// Set one cell to empty
    ClearCell {
        /// Row (Z)
        row: usize,
        /// Column (X)
        col: usize,
    },
}

/// Rectangular level grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapGrid {
    rows: Vec<Vec<Cell>>,
}

impl MapGrid {
    /// Parses a grid from text, one row per line.
    ///
    /// Blank lines are skipped; every remaining row must be as wide as the
    /// first.
    pub fn parse(text: &str) -> MapResult<Self> {
        let rows: Vec<Vec<Cell>> = text
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().map(Cell::from_symbol).collect())
            .collect();

        let expected = rows.first().map(Vec::len).ok_or(MapError::Empty)?;
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != expected {
                return Err(MapError::Ragged {
                    row,
                    expected,
                    actual: cells.len(),
                });
            }
        }

        debug!(rows = rows.len(), cols = expected, "parsed map");
        Ok(Self { rows })
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Cell at `(row, col)`.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Cell under a grid coordinate.
    #[must_use]
    pub fn cell_at(&self, cell: GridCell) -> Option<Cell> {
        self.get(cell.row()?, cell.col()?)
    }

    /// Overwrites one cell.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> MapResult<()> {
        let slot = self
            .rows
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(MapError::OutOfBounds { row, col })?;
        *slot = cell;
        Ok(())
    }

    /// Applies a request from an enemy.
    pub fn apply(&mut self, request: MapRequest) -> MapResult<()> {
        match request {
            MapRequest::ClearCell { row, col } => {
                self.set(row, col, Cell::Empty)?;
                info!(row, col, "cleared map cell");
            },
        }
        Ok(())
    }

    /// Every cell of the given kind.
    pub fn cells_of(&self, kind: Cell) -> impl Iterator<Item = GridCell> + '_ {
        self.rows.iter().enumerate().flat_map(move |(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(move |(_, cell)| **cell == kind)
                .map(move |(col, _)| GridCell::from_row_col(row, col))
        })
    }

    /// Wall cells.
    pub fn walls(&self) -> impl Iterator<Item = GridCell> + '_ {
        self.cells_of(Cell::Wall)
    }

    /// Enemy spawn cells.
    pub fn enemy_spawns(&self) -> impl Iterator<Item = GridCell> + '_ {
        self.cells_of(Cell::Enemy)
    }

    /// First player spawn cell.
    #[must_use]
    pub fn player_spawn(&self) -> Option<GridCell> {
        self.cells_of(Cell::Player).next()
    }
}

impl std::fmt::Display for MapGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.rows {
            let line: String = row.iter().map(|cell| cell.symbol()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
