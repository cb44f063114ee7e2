use serde::{Deserialize, Serialize};

pub use board::*;
pub use error::*;
pub use save::*;
pub use types::*;

mod board;
mod error;
mod save;
mod types;

/// Construction parameters for a [`Board`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub grid_size: Coord,
    pub cell_size: u32,
    pub figure: String,
}

impl BoardConfig {
    pub fn new_unchecked(grid_size: Coord, cell_size: u32, figure: String) -> Self {
        Self {
            grid_size,
            cell_size,
            figure,
        }
    }

    pub fn new(grid_size: Coord, cell_size: u32, figure: impl Into<String>) -> Self {
        let grid_size = grid_size.clamp(1, Coord::MAX);
        let cell_size = cell_size.max(1);
        Self::new_unchecked(grid_size, cell_size, figure.into())
    }

    pub const fn total_cells(&self) -> CellCount {
        square(self.grid_size)
    }
}
