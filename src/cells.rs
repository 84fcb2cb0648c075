use smallvec::SmallVec;
use std::convert::From;

use crate::units::{ColumnIndex, ColumnsCount, RowIndex};

/// A grid position. `x` is the column and `y` the row, both zero indexed
/// from the north west corner of the grid.
#[derive(Hash, Eq, PartialEq, Ord, PartialOrd, Copy, Clone, Debug)]
pub struct Cartesian2DCoordinate {
    pub x: u32,
    pub y: u32,
}

pub type CoordinateSmallVec = SmallVec<[Cartesian2DCoordinate; 4]>;
pub type CoordinateOptionSmallVec = SmallVec<[Option<Cartesian2DCoordinate>; 4]>;

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CompassPrimary {
    North,
    South,
    East,
    West,
}

/// The canonical direction order. Every deterministic traversal that looks at
/// a cell's sides does so in this order.
pub const COMPASS_PRIMARY_DIRECTIONS: [CompassPrimary; 4] = [
    CompassPrimary::North,
    CompassPrimary::South,
    CompassPrimary::East,
    CompassPrimary::West,
];

impl Cartesian2DCoordinate {
    pub fn new(x: u32, y: u32) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate { x, y }
    }

    #[inline]
    pub fn from_row_major_index(index: usize, columns: ColumnsCount) -> Cartesian2DCoordinate {
        let ColumnsCount(width) = columns;
        Cartesian2DCoordinate::new((index % width) as u32, (index / width) as u32)
    }

    #[inline]
    pub fn from_row_column_indices(col_index: ColumnIndex, row_index: RowIndex) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(col_index.0 as u32, row_index.0 as u32)
    }

    /// The coordinate one step away in `direction`, or None when that
    /// position is not representable (north or west of the origin). Bounds
    /// against the south and east extents are a grid concern, not a
    /// coordinate concern.
    pub fn offset(&self, direction: CompassPrimary) -> Option<Cartesian2DCoordinate> {
        match direction {
            CompassPrimary::North => {
                if self.y > 0 {
                    Some(Cartesian2DCoordinate::new(self.x, self.y - 1))
                } else {
                    None
                }
            }
            CompassPrimary::South => Some(Cartesian2DCoordinate::new(self.x, self.y + 1)),
            CompassPrimary::East => Some(Cartesian2DCoordinate::new(self.x + 1, self.y)),
            CompassPrimary::West => {
                if self.x > 0 {
                    Some(Cartesian2DCoordinate::new(self.x - 1, self.y))
                } else {
                    None
                }
            }
        }
    }
}

impl From<(u32, u32)> for Cartesian2DCoordinate {
    fn from(x_y_pair: (u32, u32)) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(x_y_pair.0, x_y_pair.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_major_index_round_trips() {
        let columns = ColumnsCount(4);
        assert_eq!(Cartesian2DCoordinate::from_row_major_index(0, columns),
                   Cartesian2DCoordinate::new(0, 0));
        assert_eq!(Cartesian2DCoordinate::from_row_major_index(3, columns),
                   Cartesian2DCoordinate::new(3, 0));
        assert_eq!(Cartesian2DCoordinate::from_row_major_index(4, columns),
                   Cartesian2DCoordinate::new(0, 1));
        assert_eq!(Cartesian2DCoordinate::from_row_major_index(11, columns),
                   Cartesian2DCoordinate::new(3, 2));
    }

    #[test]
    fn offsets_at_the_origin() {
        let origin = Cartesian2DCoordinate::new(0, 0);
        assert_eq!(origin.offset(CompassPrimary::North), None);
        assert_eq!(origin.offset(CompassPrimary::West), None);
        assert_eq!(origin.offset(CompassPrimary::South), Some(Cartesian2DCoordinate::new(0, 1)));
        assert_eq!(origin.offset(CompassPrimary::East), Some(Cartesian2DCoordinate::new(1, 0)));
    }

    #[test]
    fn offsets_away_from_the_origin() {
        let c = Cartesian2DCoordinate::new(2, 3);
        assert_eq!(c.offset(CompassPrimary::North), Some(Cartesian2DCoordinate::new(2, 2)));
        assert_eq!(c.offset(CompassPrimary::South), Some(Cartesian2DCoordinate::new(2, 4)));
        assert_eq!(c.offset(CompassPrimary::East), Some(Cartesian2DCoordinate::new(3, 3)));
        assert_eq!(c.offset(CompassPrimary::West), Some(Cartesian2DCoordinate::new(1, 3)));
    }
}
