use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Square grid of clickable cells plus the piece metadata drawn on them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<bool>,
    cell_size: u32,
    figure: String,
}

impl Board {
    pub fn new(config: BoardConfig) -> Self {
        let side = usize::from(config.grid_size);
        Self {
            cells: Array2::default([side, side]),
            cell_size: config.cell_size,
            figure: config.figure,
        }
    }

    pub fn grid_size(&self) -> Coord {
        self.cells.dim().0.try_into().unwrap()
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn figure(&self) -> &str {
        &self.figure
    }

    pub fn config(&self) -> BoardConfig {
        BoardConfig {
            grid_size: self.grid_size(),
            cell_size: self.cell_size,
            figure: self.figure.clone(),
        }
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len().try_into().unwrap()
    }

    pub fn clicked_count(&self) -> CellCount {
        self.cells
            .iter()
            .filter(|&&clicked| clicked)
            .count()
            .try_into()
            .unwrap()
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.grid_size();
        if coords.0 < size && coords.1 < size {
            Ok(coords)
        } else {
            Err(BoardError::InvalidCoords)
        }
    }

    /// Flips the clicked state of one cell, returning the new state.
    pub fn toggle(&mut self, coords: Coord2) -> Result<bool> {
        let coords = self.validate_coords(coords)?;
        let cell = &mut self.cells[coords.to_nd_index()];
        *cell = !*cell;
        Ok(*cell)
    }

    pub fn get(&self, coords: Coord2) -> Result<bool> {
        let coords = self.validate_coords(coords)?;
        Ok(self.cells[coords.to_nd_index()])
    }

    pub fn is_clicked(&self, coords: Coord2) -> bool {
        self[coords]
    }

    /// Row-major iteration over every cell and its clicked state.
    pub fn iter(&self) -> impl Iterator<Item = (Coord2, bool)> + '_ {
        self.cells.indexed_iter().map(|((row, col), &clicked)| {
            (
                (row.try_into().unwrap(), col.try_into().unwrap()),
                clicked,
            )
        })
    }

    pub(crate) fn restore(&mut self, cells: Array2<bool>, cell_size: u32, figure: String) {
        self.cells = cells;
        self.cell_size = cell_size;
        self.figure = figure;
    }
}

impl Index<Coord2> for Board {
    type Output = bool;

    fn index(&self, (row, col): Coord2) -> &Self::Output {
        &self.cells[(row as usize, col as usize)]
    }
}

impl IndexMut<Coord2> for Board {
    fn index_mut(&mut self, (row, col): Coord2) -> &mut Self::Output {
        &mut self.cells[(row as usize, col as usize)]
    }
}
