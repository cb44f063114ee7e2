/// Single coordinate axis used for rows, columns, and the grid dimension.
pub type Coord = u8;

/// Count type used for clicked-cell and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional cell coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn square(side: Coord) -> CellCount {
    let side = side as CellCount;
    side.saturating_mul(side)
}
