use crate::cells::Cartesian2DCoordinate;

error_chain! {
    errors {
        /// A grid with no present cells cannot seed a carver.
        EmptyMask {
            description("no present cells")
            display("the grid has no present cells to carve")
        }

        /// More cells requested than the grid's index type can address.
        GridTooLarge(cells: usize, max_cells: usize) {
            description("too many cells for the grid index type")
            display("{} cells exceed the {} addressable by the grid index type", cells, max_cells)
        }

        /// Link or unlink named a coordinate that is out of bounds or masked off.
        InvalidGridCoordinate(a: Cartesian2DCoordinate, b: Cartesian2DCoordinate) {
            description("coordinate is not a present grid cell")
            display("cannot alter links between ({}, {}) and ({}, {}): not both present grid cells",
                    a.x, a.y, b.x, b.y)
        }

        SelfLink(cell: Cartesian2DCoordinate) {
            description("cell cannot link to itself")
            display("cell ({}, {}) cannot link to itself", cell.x, cell.y)
        }

        /// Unlink of a pair with no passage between them. Silently ignoring
        /// this would hide carver bugs, so it fails loudly.
        NotLinked(a: Cartesian2DCoordinate, b: Cartesian2DCoordinate) {
            description("cells are not linked")
            display("no passage between ({}, {}) and ({}, {}) to remove", a.x, a.y, b.x, b.y)
        }

        UnknownSelectionPolicy(name: String) {
            description("unknown growing tree selection policy")
            display("unknown growing tree selection policy {:?}, expected newest, oldest or random", name)
        }
    }
}
