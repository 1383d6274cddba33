use ndarray::Array2;

/// Single coordinate axis used for row/column counts and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
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

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Size of a grid array as `(rows, cols)`.
pub(crate) fn grid_size<T>(grid: &Array2<T>) -> Coord2 {
    let (rows, cols) = grid.dim();
    // grids are only ever allocated from a `Coord2`
    (rows as Coord, cols as Coord)
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, center: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, center: Coord2) -> NeighborIter {
        NeighborIter::new(center, grid_size(self))
    }
}

/// Walks the up-to-8 cells around `center`, clipped (not wrapped) at the grid
/// edges. The center itself is never yielded.
#[derive(Clone, Debug)]
pub struct NeighborIter {
    center: Coord2,
    row_end: Coord,
    col_start: Coord,
    col_end: Coord,
    row: Coord,
    col: Coord,
}

impl NeighborIter {
    pub fn new(center: Coord2, (rows, cols): Coord2) -> Self {
        let (row, col) = center;
        let row_start = row.saturating_sub(1);
        let col_start = col.saturating_sub(1);
        Self {
            center,
            row_end: row.saturating_add(1).min(rows.saturating_sub(1)),
            col_start,
            col_end: col.saturating_add(1).min(cols.saturating_sub(1)),
            row: row_start,
            col: col_start,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while self.row <= self.row_end {
            if self.col > self.col_end {
                self.row += 1;
                self.col = self.col_start;
                continue;
            }

            let pos = (self.row, self.col);
            self.col += 1;
            if pos != self.center {
                return Some(pos);
            }
        }
        None
    }
}
