use std::fmt;

use crate::cells::CompassPrimary;
use crate::grid::{Grid, IndexType};

/// Fixed-width text rendering of a carved grid.
///
/// Cell bodies are three spaces wide and one row high. Horizontal boundaries
/// print as `+---+` where walled and `+   +` where a passage runs through,
/// vertical boundaries as `|` and space. Absent slots keep all four walls
/// without any special casing: no passage can involve them, so every boundary
/// query against them answers "walled".
impl<GridIndexType: IndexType> fmt::Display for Grid<GridIndexType> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let columns_count = self.columns().0;

        let mut output = String::from("+");
        for _ in 0..columns_count {
            output.push_str("---+");
        }
        output.push('\n');

        for row in self.iter_row() {
            let mut east_boundary = String::from("|");
            let mut south_boundary = String::from("+");
            for cell_coord in row {
                east_boundary.push_str("   ");
                if self.is_neighbour_linked(cell_coord, CompassPrimary::East) {
                    east_boundary.push(' ');
                } else {
                    east_boundary.push('|');
                }
                if self.is_neighbour_linked(cell_coord, CompassPrimary::South) {
                    south_boundary.push_str("   +");
                } else {
                    south_boundary.push_str("---+");
                }
            }
            output.push_str(&east_boundary);
            output.push('\n');
            output.push_str(&south_boundary);
            output.push('\n');
        }
        write!(f, "{}", output)
    }
}
