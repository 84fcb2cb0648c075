use std::{u16, u32, u8};

use crate::errors::{ErrorKind, Result};
use crate::grid::Grid;
use crate::masks::BinaryMask2D;
use crate::units::{ColumnsCount, RowsCount};

pub type SmallRectangularGrid = Grid<u8>;
pub type MediumRectangularGrid = Grid<u16>;
pub type LargeRectangularGrid = Grid<u32>;

/// A grid whose cells are addressable by a u8, so at most 255 cells.
pub fn small_rect_grid(rows: RowsCount, columns: ColumnsCount) -> Result<SmallRectangularGrid> {
    check_cells_fit_index_type(rows.0 * columns.0, u8::MAX as usize)?;
    Grid::new(rows, columns)
}

/// A grid whose cells are addressable by a u16, so at most 65535 cells.
pub fn medium_rect_grid(rows: RowsCount, columns: ColumnsCount) -> Result<MediumRectangularGrid> {
    check_cells_fit_index_type(rows.0 * columns.0, u16::MAX as usize)?;
    Grid::new(rows, columns)
}

/// A grid whose cells are addressable by a u32.
pub fn large_rect_grid(rows: RowsCount, columns: ColumnsCount) -> Result<LargeRectangularGrid> {
    check_cells_fit_index_type(rows.0 * columns.0, u32::MAX as usize)?;
    Grid::new(rows, columns)
}

/// A mask shaped grid with u8 cell addressing. The mask's full extent must
/// fit the index type, not just its unmasked cells.
pub fn small_masked_grid(mask: &BinaryMask2D) -> Result<SmallRectangularGrid> {
    check_cells_fit_index_type((mask.width * mask.height) as usize, u8::MAX as usize)?;
    Grid::with_mask(mask)
}

/// A mask shaped grid with u16 cell addressing.
pub fn medium_masked_grid(mask: &BinaryMask2D) -> Result<MediumRectangularGrid> {
    check_cells_fit_index_type((mask.width * mask.height) as usize, u16::MAX as usize)?;
    Grid::with_mask(mask)
}

/// A mask shaped grid with u32 cell addressing.
pub fn large_masked_grid(mask: &BinaryMask2D) -> Result<LargeRectangularGrid> {
    check_cells_fit_index_type((mask.width * mask.height) as usize, u32::MAX as usize)?;
    Grid::with_mask(mask)
}

fn check_cells_fit_index_type(cells: usize, max_cells: usize) -> Result<()> {
    if cells > max_cells {
        Err(ErrorKind::GridTooLarge(cells, max_cells).into())
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_type_limits() {
        assert!(small_rect_grid(RowsCount(15), ColumnsCount(17)).is_ok());
        match small_rect_grid(RowsCount(16), ColumnsCount(16)) {
            Err(error) => match *error.kind() {
                ErrorKind::GridTooLarge(cells, max_cells) => {
                    assert_eq!(cells, 256);
                    assert_eq!(max_cells, 255);
                }
                ref other => panic!("unexpected error kind {:?}", other),
            },
            Ok(_) => panic!("oversized grid accepted"),
        }
        assert!(medium_rect_grid(RowsCount(16), ColumnsCount(16)).is_ok());
        assert!(medium_rect_grid(RowsCount(256), ColumnsCount(256)).is_err());
        assert!(large_rect_grid(RowsCount(256), ColumnsCount(256)).is_ok());
    }

    #[test]
    fn masked_limits_use_the_full_mask_extent() {
        // 16 x 16 mask with one unmasked cell still needs u16 addressing.
        let mut rows = vec![vec![false; 16]; 16];
        rows[0][0] = true;
        let mask = BinaryMask2D::from_rows(&rows);
        assert!(small_masked_grid(&mask).is_err());
        let grid = medium_masked_grid(&mask).expect("medium grid");
        assert_eq!(grid.present_count(), 1);
    }
}
