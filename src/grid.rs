use bit_set::BitSet;
use petgraph::graph;
pub use petgraph::graph::IndexType;
use petgraph::{Graph, Undirected};
use rand::Rng;
use std::{cmp, fmt, slice};

use crate::cells::{Cartesian2DCoordinate, CompassPrimary, CoordinateOptionSmallVec,
                   CoordinateSmallVec, COMPASS_PRIMARY_DIRECTIONS};
use crate::errors::{ErrorKind, Result};
use crate::masks::BinaryMask2D;
use crate::units::{ColumnIndex, ColumnsCount, RowIndex, RowsCount};

/// A rows × columns arena of maze cells.
///
/// Cells live as nodes of an undirected petgraph `Graph`, addressed by their
/// stable row-major index, and carved passages are edges - so the symmetry of
/// linking is structural rather than maintained by hand. A presence bit set
/// records which slots actually exist: a full rectangular grid and a
/// mask-constrained grid are the same type with different presence data, and
/// every neighbour or link query answers through the same presence checks.
///
/// `GridIndexType` picks the unsigned width of the node indices, which is the
/// main memory cost of a grid.
pub struct Grid<GridIndexType: IndexType> {
    graph: Graph<(), (), Undirected, GridIndexType>,
    rows: RowsCount,
    columns: ColumnsCount,
    presence: BitSet,
    present_count: usize,
    visited: BitSet,
}

impl<GridIndexType: IndexType> fmt::Debug for Grid<GridIndexType> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "Grid {{ rows: {}, columns: {}, cells: {}/{}, links: {} }}",
               self.rows.0,
               self.columns.0,
               self.present_count,
               self.size(),
               self.links_count())
    }
}

impl<GridIndexType: IndexType> Grid<GridIndexType> {
    /// An unmasked rectangular grid: every slot is a present cell.
    pub fn new(rows: RowsCount, columns: ColumnsCount) -> Result<Grid<GridIndexType>> {
        let cells_count = rows.0 * columns.0;
        let mut presence = BitSet::with_capacity(cells_count);
        for index in 0..cells_count {
            presence.insert(index);
        }
        Grid::with_presence(rows, columns, presence)
    }

    /// A masked grid, taking its dimensions from the mask: slots exist only
    /// where the mask is unmasked.
    pub fn with_mask(mask: &BinaryMask2D) -> Result<Grid<GridIndexType>> {
        let rows = RowsCount(mask.height as usize);
        let columns = ColumnsCount(mask.width as usize);
        let cells_count = rows.0 * columns.0;
        let mut presence = BitSet::with_capacity(cells_count);
        for index in 0..cells_count {
            let coord = Cartesian2DCoordinate::from_row_major_index(index, columns);
            if !mask.is_masked(coord) {
                presence.insert(index);
            }
        }
        Grid::with_presence(rows, columns, presence)
    }

    fn with_presence(rows: RowsCount,
                     columns: ColumnsCount,
                     presence: BitSet)
                     -> Result<Grid<GridIndexType>> {
        let present_count = presence.len();
        if present_count == 0 {
            bail!(ErrorKind::EmptyMask);
        }
        let cells_count = rows.0 * columns.0;
        // Every cell can have up to 4 links, the cells on the longest side
        // at most 3, which bounds the edge count from above.
        let edges_count_hint = 4 * cells_count - 4 * cmp::max(rows.0, columns.0);

        let mut grid = Grid {
            graph: Graph::with_capacity(cells_count, edges_count_hint),
            rows,
            columns,
            presence,
            present_count,
            visited: BitSet::with_capacity(cells_count),
        };
        // Absent slots get a node too, so that node indices and row-major
        // grid indices always agree.
        for _ in 0..cells_count {
            let _ = grid.graph.add_node(());
        }
        Ok(grid)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.rows.0 * self.columns.0
    }

    /// The number of present cells, which is `size()` minus the masked-off slots.
    #[inline]
    pub fn present_count(&self) -> usize {
        self.present_count
    }

    #[inline]
    pub fn rows(&self) -> RowsCount {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        self.columns
    }

    /// The number of carved passages in the grid.
    #[inline]
    pub fn links_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Is the coordinate within the grid dimensions and not masked off?
    #[inline]
    pub fn is_valid_coordinate(&self, coord: Cartesian2DCoordinate) -> bool {
        self.grid_coordinate_to_index(coord).is_some()
    }

    /// Bounds and presence checked access: any coordinate handed back is a
    /// present cell.
    pub fn at(&self, column: u32, row: u32) -> Option<Cartesian2DCoordinate> {
        let coord = Cartesian2DCoordinate::new(column, row);
        if self.is_valid_coordinate(coord) {
            Some(coord)
        } else {
            None
        }
    }

    /// Uniformly sample a present cell.
    ///
    /// Rejection samples against the presence set so a masked-off slot is
    /// never handed back. Construction guarantees at least one present cell,
    /// so the retry loop terminates.
    pub fn random_cell<R: Rng>(&self, rng: &mut R) -> Cartesian2DCoordinate {
        let cells_count = self.size();
        loop {
            let index = rng.gen::<usize>() % cells_count;
            if self.presence.contains(index) {
                return Cartesian2DCoordinate::from_row_major_index(index, self.columns);
            }
        }
    }

    /// Carve a passage between two cells. The link is undirected and
    /// idempotent: re-linking an already linked pair changes nothing.
    pub fn link(&mut self, a: Cartesian2DCoordinate, b: Cartesian2DCoordinate) -> Result<()> {
        if a == b {
            bail!(ErrorKind::SelfLink(a));
        }
        match (self.grid_coordinate_graph_index(a), self.grid_coordinate_graph_index(b)) {
            (Some(a_index), Some(b_index)) => {
                let _ = self.graph.update_edge(a_index, b_index, ());
                Ok(())
            }
            _ => Err(ErrorKind::InvalidGridCoordinate(a, b).into()),
        }
    }

    /// Remove the passage between two cells, both sides at once.
    pub fn unlink(&mut self, a: Cartesian2DCoordinate, b: Cartesian2DCoordinate) -> Result<()> {
        let edge = match (self.grid_coordinate_graph_index(a), self.grid_coordinate_graph_index(b)) {
            (Some(a_index), Some(b_index)) => self.graph.find_edge(a_index, b_index),
            _ => bail!(ErrorKind::InvalidGridCoordinate(a, b)),
        };
        match edge {
            Some(edge_index) => {
                // Invalidates the last edge index in the graph, which is fine
                // as edge indices are never stored.
                let _ = self.graph.remove_edge(edge_index);
                Ok(())
            }
            None => Err(ErrorKind::NotLinked(a, b).into()),
        }
    }

    /// Cells linked to the given cell by a carved passage. None for a
    /// coordinate that is not a present cell.
    pub fn links(&self, coord: Cartesian2DCoordinate) -> Option<CoordinateSmallVec> {
        self.grid_coordinate_graph_index(coord).map(|index| {
            self.graph
                .neighbors(index)
                .map(|node_index| {
                    Cartesian2DCoordinate::from_row_major_index(node_index.index(), self.columns)
                })
                .collect()
        })
    }

    /// Is there a carved passage between the two cells? False whenever either
    /// coordinate is not a present cell - asking about the space beyond a
    /// boundary is routine for renderers, not an error.
    pub fn is_linked(&self, a: Cartesian2DCoordinate, b: Cartesian2DCoordinate) -> bool {
        match (self.grid_coordinate_graph_index(a), self.grid_coordinate_graph_index(b)) {
            (Some(a_index), Some(b_index)) => self.graph.find_edge(a_index, b_index).is_some(),
            _ => false,
        }
    }

    /// Is the cell linked to its neighbour one step in `direction`?
    pub fn is_neighbour_linked(&self, coord: Cartesian2DCoordinate, direction: CompassPrimary) -> bool {
        self.neighbour_at_direction(coord, direction)
            .map_or(false, |neighbour_coord| self.is_linked(coord, neighbour_coord))
    }

    /// Present cells adjacent to the given cell, in canonical North, South,
    /// East, West order. Adjacency only - says nothing about passages.
    pub fn neighbours(&self, coord: Cartesian2DCoordinate) -> CoordinateSmallVec {
        COMPASS_PRIMARY_DIRECTIONS
            .iter()
            .filter_map(|&direction| self.neighbour_at_direction(coord, direction))
            .collect()
    }

    /// As `neighbour_at_direction` over a slice of directions, preserving the
    /// query order with a None for each direction lacking a present neighbour.
    pub fn neighbours_at_directions(&self,
                                    coord: Cartesian2DCoordinate,
                                    dirs: &[CompassPrimary])
                                    -> CoordinateOptionSmallVec {
        dirs.iter()
            .map(|&direction| self.neighbour_at_direction(coord, direction))
            .collect()
    }

    /// The present cell one step in `direction`, or None at the grid edge or
    /// against a masked-off slot.
    pub fn neighbour_at_direction(&self,
                                  coord: Cartesian2DCoordinate,
                                  direction: CompassPrimary)
                                  -> Option<Cartesian2DCoordinate> {
        coord.offset(direction).and_then(|neighbour_coord| {
            if self.is_valid_coordinate(neighbour_coord) {
                Some(neighbour_coord)
            } else {
                None
            }
        })
    }

    /// Has the cell been seen by the carving pass in progress?
    #[inline]
    pub fn is_visited(&self, coord: Cartesian2DCoordinate) -> bool {
        self.grid_coordinate_to_index(coord)
            .map_or(false, |index| self.visited.contains(index))
    }

    pub fn mark_visited(&mut self, coord: Cartesian2DCoordinate) {
        if let Some(index) = self.grid_coordinate_to_index(coord) {
            self.visited.insert(index);
        }
    }

    /// Reset all visited flags. Carvers call this before starting afresh.
    pub fn clear_visited(&mut self) {
        self.visited.clear();
    }

    /// Row-major iteration over the present cells. Each call starts a fresh
    /// traversal.
    pub fn iter(&self) -> CellIter {
        CellIter {
            grid_index: 0,
            cells_count: self.size(),
            columns: self.columns,
            presence: &self.presence,
        }
    }

    /// Iteration over rows of cell positions, covering every slot whether
    /// present or not. The text display needs the absent slots so they can
    /// draw their default fully-walled pattern.
    pub fn iter_row(&self) -> BatchIter {
        BatchIter {
            current_row: 0,
            rows: self.rows,
            columns: self.columns,
        }
    }

    /// Iteration over every carved passage as a coordinate pair.
    pub fn iter_links(&self) -> LinksIter<GridIndexType> {
        LinksIter {
            graph_edge_iter: self.graph.raw_edges().iter(),
            columns: self.columns,
        }
    }

    /// Convert a grid coordinate to a one dimensional row-major index. None
    /// if out of the grid's bounds or masked off.
    #[inline]
    pub fn grid_coordinate_to_index(&self, coord: Cartesian2DCoordinate) -> Option<usize> {
        let (x, y) = (coord.x as usize, coord.y as usize);
        if x < self.columns.0 && y < self.rows.0 {
            let index = y * self.columns.0 + x;
            if self.presence.contains(index) {
                Some(index)
            } else {
                None
            }
        } else {
            None
        }
    }

    fn grid_coordinate_graph_index(&self,
                                   coord: Cartesian2DCoordinate)
                                   -> Option<graph::NodeIndex<GridIndexType>> {
        self.grid_coordinate_to_index(coord)
            .map(graph::NodeIndex::<GridIndexType>::new)
    }
}

#[derive(Debug, Clone)]
pub struct CellIter<'a> {
    grid_index: usize,
    cells_count: usize,
    columns: ColumnsCount,
    presence: &'a BitSet,
}

impl<'a> Iterator for CellIter<'a> {
    type Item = Cartesian2DCoordinate;
    fn next(&mut self) -> Option<Self::Item> {
        while self.grid_index < self.cells_count {
            let index = self.grid_index;
            self.grid_index += 1;
            if self.presence.contains(index) {
                return Some(Cartesian2DCoordinate::from_row_major_index(index, self.columns));
            }
        }
        None
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.cells_count - self.grid_index))
    }
}

#[derive(Debug, Copy, Clone)]
pub struct BatchIter {
    current_row: usize,
    rows: RowsCount,
    columns: ColumnsCount,
}

impl Iterator for BatchIter {
    type Item = Vec<Cartesian2DCoordinate>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_row < self.rows.0 {
            let row = self.current_row;
            self.current_row += 1;
            Some((0..self.columns.0)
                     .map(|col| {
                         Cartesian2DCoordinate::from_row_column_indices(ColumnIndex(col), RowIndex(row))
                     })
                     .collect())
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.rows.0 - self.current_row;
        (remaining, Some(remaining))
    }
}

pub struct LinksIter<'a, GridIndexType: IndexType> {
    graph_edge_iter: slice::Iter<'a, graph::Edge<(), GridIndexType>>,
    columns: ColumnsCount,
}

impl<'a, GridIndexType: IndexType> Iterator for LinksIter<'a, GridIndexType> {
    type Item = (Cartesian2DCoordinate, Cartesian2DCoordinate);
    fn next(&mut self) -> Option<Self::Item> {
        self.graph_edge_iter.next().map(|edge| {
            (Cartesian2DCoordinate::from_row_major_index(edge.source().index(), self.columns),
             Cartesian2DCoordinate::from_row_major_index(edge.target().index(), self.columns))
        })
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.graph_edge_iter.size_hint()
    }
}
