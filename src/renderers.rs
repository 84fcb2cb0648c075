//! Vector wall tracing.
//!
//! Walks a carved grid and emits a flat list of line segments describing
//! every wall, in grid-relative drawing units. The output carries no drawing
//! commands: a consumer maps each segment to its format of choice (SVG lines,
//! plotter moves, CAD strokes). Each cell's contribution depends only on its
//! own link state and that of its immediate neighbours, so cell order can
//! never change the drawing.
//!
//! Two wall models are supported. With `wall_thickness` zero every wall is a
//! single hairline on the cell boundary. With a positive thickness each wall
//! becomes a band of that thickness: internal bands hang east or south of
//! their boundary, boundary bands hang outward so the cell interior keeps its
//! full size, and small stub segments close off the exposed ends of bands
//! around each internal corner.

use crate::cells::{Cartesian2DCoordinate, CompassPrimary};
use crate::grid::{Grid, IndexType};

/// Outer segments trace the boundary between the maze and the space outside
/// it (the grid edge or a masked-off slot); inner segments trace walls
/// between two present cells. The split lets consumers style the silhouette
/// differently from the interior walls.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum StrokeClass {
    Outer,
    Inner,
}

/// One wall line. Coordinates are in drawing units with the origin at the
/// north west corner of cell (0, 0), x growing east and y growing south.
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct WallSegment {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub class: StrokeClass,
    pub stroke_width: f32,
}

#[derive(Debug, Clone)]
pub struct StrokeStyle {
    pub colour: String,
    pub width: f32,
}

#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Side length of one cell in drawing units.
    pub cell_size: f32,
    /// Wall band thickness in drawing units. Zero draws hairline walls.
    pub wall_thickness: f32,
    pub outer: StrokeStyle,
    pub inner: StrokeStyle,
}

impl Default for RenderOptions {
    fn default() -> RenderOptions {
        RenderOptions {
            cell_size: 10.0,
            wall_thickness: 0.0,
            outer: StrokeStyle { colour: String::from("black"), width: 1.0 },
            inner: StrokeStyle { colour: String::from("black"), width: 1.0 },
        }
    }
}

impl RenderOptions {
    pub fn stroke_style(&self, class: StrokeClass) -> &StrokeStyle {
        match class {
            StrokeClass::Outer => &self.outer,
            StrokeClass::Inner => &self.inner,
        }
    }
}

/// The drawing extents of a rendered grid as `(min_x, min_y, width, height)`,
/// covering the cells plus any outward boundary band.
pub fn drawing_bounds<GridIndexType: IndexType>(grid: &Grid<GridIndexType>,
                                                options: &RenderOptions)
                                                -> (f32, f32, f32, f32) {
    let wall = options.wall_thickness;
    let width = grid.columns().0 as f32 * options.cell_size + 2.0 * wall;
    let height = grid.rows().0 as f32 * options.cell_size + 2.0 * wall;
    (-wall, -wall, width, height)
}

/// Trace every wall of a carved grid.
pub fn wall_segments<GridIndexType: IndexType>(grid: &Grid<GridIndexType>,
                                               options: &RenderOptions)
                                               -> Vec<WallSegment> {
    let mut segments = Vec::new();
    for cell in grid.iter() {
        if options.wall_thickness > 0.0 {
            emit_cell_bands(grid, cell, options, &mut segments);
            emit_junction_infill(grid, cell, options, &mut segments);
        } else {
            emit_cell_hairlines(grid, cell, options, &mut segments);
        }
    }
    segments
}

struct CellGeometry {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

fn cell_geometry(cell: Cartesian2DCoordinate, cell_size: f32) -> CellGeometry {
    let x1 = cell.x as f32 * cell_size;
    let y1 = cell.y as f32 * cell_size;
    CellGeometry { x1, y1, x2: x1 + cell_size, y2: y1 + cell_size }
}

fn horizontal(x1: f32, x2: f32, y: f32, class: StrokeClass, options: &RenderOptions) -> WallSegment {
    WallSegment { x1, y1: y, x2, y2: y, class, stroke_width: options.stroke_style(class).width }
}

fn vertical(x: f32, y1: f32, y2: f32, class: StrokeClass, options: &RenderOptions) -> WallSegment {
    WallSegment { x1: x, y1, x2: x, y2, class, stroke_width: options.stroke_style(class).width }
}

/// Hairline walls: single lines on the cell boundary.
///
/// Each cell draws the walls it owns: its east and south boundaries when
/// unlinked, plus any boundary facing the outside. Shared internal walls are
/// drawn once because only the west/north cell of the pair owns them.
fn emit_cell_hairlines<GridIndexType: IndexType>(grid: &Grid<GridIndexType>,
                                                 cell: Cartesian2DCoordinate,
                                                 options: &RenderOptions,
                                                 segments: &mut Vec<WallSegment>) {
    let CellGeometry { x1, y1, x2, y2 } = cell_geometry(cell, options.cell_size);
    let outside = |direction| grid.neighbour_at_direction(cell, direction).is_none();

    if outside(CompassPrimary::North) {
        segments.push(horizontal(x1, x2, y1, StrokeClass::Outer, options));
    }
    if outside(CompassPrimary::West) {
        segments.push(vertical(x1, y1, y2, StrokeClass::Outer, options));
    }
    if outside(CompassPrimary::East) {
        segments.push(vertical(x2, y1, y2, StrokeClass::Outer, options));
    } else if !grid.is_neighbour_linked(cell, CompassPrimary::East) {
        segments.push(vertical(x2, y1, y2, StrokeClass::Inner, options));
    }
    if outside(CompassPrimary::South) {
        segments.push(horizontal(x1, x2, y2, StrokeClass::Outer, options));
    } else if !grid.is_neighbour_linked(cell, CompassPrimary::South) {
        segments.push(horizontal(x1, x2, y2, StrokeClass::Inner, options));
    }
}

/// Thick walls: the two long edges of each wall band.
///
/// Boundary bands hang outward from the cell. Their outer edge extends past
/// the cell corner by the wall thickness wherever the perpendicular side also
/// faces the outside, so the outer silhouette closes at its corners. Internal
/// bands hang east or south of the shared boundary, drawn by the west/north
/// owning cell; their short ends are closed by `emit_junction_infill`.
fn emit_cell_bands<GridIndexType: IndexType>(grid: &Grid<GridIndexType>,
                                             cell: Cartesian2DCoordinate,
                                             options: &RenderOptions,
                                             segments: &mut Vec<WallSegment>) {
    let wall = options.wall_thickness;
    let CellGeometry { x1, y1, x2, y2 } = cell_geometry(cell, options.cell_size);
    let outside = |direction| grid.neighbour_at_direction(cell, direction).is_none();

    let north_outside = outside(CompassPrimary::North);
    let south_outside = outside(CompassPrimary::South);
    let east_outside = outside(CompassPrimary::East);
    let west_outside = outside(CompassPrimary::West);

    if north_outside {
        let start = if west_outside { x1 - wall } else { x1 };
        let end = if east_outside { x2 + wall } else { x2 };
        segments.push(horizontal(start, end, y1 - wall, StrokeClass::Outer, options));
        segments.push(horizontal(x1, x2, y1, StrokeClass::Outer, options));
    }
    if south_outside {
        let start = if west_outside { x1 - wall } else { x1 };
        let end = if east_outside { x2 + wall } else { x2 };
        segments.push(horizontal(start, end, y2 + wall, StrokeClass::Outer, options));
        segments.push(horizontal(x1, x2, y2, StrokeClass::Outer, options));
    }
    if west_outside {
        let start = if north_outside { y1 - wall } else { y1 };
        let end = if south_outside { y2 + wall } else { y2 };
        segments.push(vertical(x1 - wall, start, end, StrokeClass::Outer, options));
        segments.push(vertical(x1, y1, y2, StrokeClass::Outer, options));
    }
    if east_outside {
        let start = if north_outside { y1 - wall } else { y1 };
        let end = if south_outside { y2 + wall } else { y2 };
        segments.push(vertical(x2 + wall, start, end, StrokeClass::Outer, options));
        segments.push(vertical(x2, y1, y2, StrokeClass::Outer, options));
    }

    if !east_outside && !grid.is_neighbour_linked(cell, CompassPrimary::East) {
        segments.push(vertical(x2, y1, y2, StrokeClass::Inner, options));
        segments.push(vertical(x2 + wall, y1, y2, StrokeClass::Inner, options));
    }
    if !south_outside && !grid.is_neighbour_linked(cell, CompassPrimary::South) {
        segments.push(horizontal(x1, x2, y2, StrokeClass::Inner, options));
        segments.push(horizontal(x1, x2, y2 + wall, StrokeClass::Inner, options));
    }
}

/// Close the exposed short ends of wall bands around a junction.
///
/// Each cell owns the junction square at its south west corner, the
/// `wall_thickness` sized square hanging south east of the corner point.
/// Four wall bands can touch that square, one from each side. A band that
/// stops at the square leaves an open short end there unless a band on the
/// opposite or adjacent side covers it; a small stub segment closes each end
/// that would otherwise stay open.
///
/// A side with no present cell behind it contributes its wall through the
/// boundary band of some neighbouring present cell, or not at all when the
/// whole junction sits outside the maze. The match arms below fold that in:
/// absent cells can never be linked, but their side only counts as walled
/// where a boundary band really runs there.
fn emit_junction_infill<GridIndexType: IndexType>(grid: &Grid<GridIndexType>,
                                                  cell: Cartesian2DCoordinate,
                                                  options: &RenderOptions,
                                                  segments: &mut Vec<WallSegment>) {
    let wall = options.wall_thickness;
    let CellGeometry { x1, y2, .. } = cell_geometry(cell, options.cell_size);

    let west = grid.neighbour_at_direction(cell, CompassPrimary::West);
    let south = grid.neighbour_at_direction(cell, CompassPrimary::South);
    // The south west cell is reached by direct offset: stepping through the
    // west or south neighbour would lose it whenever that stepping stone is
    // itself masked off.
    let south_west = if cell.x > 0 {
        let coord = Cartesian2DCoordinate::new(cell.x - 1, cell.y + 1);
        if grid.is_valid_coordinate(coord) { Some(coord) } else { None }
    } else {
        None
    };

    // Walled state of the four sides of the junction square.
    let north_walled = west.map_or(false, |west_cell| !grid.is_linked(cell, west_cell));
    let east_walled = !south.map_or(false, |south_cell| grid.is_linked(cell, south_cell));
    let south_walled = match (south, south_west) {
        (Some(south_cell), Some(south_west_cell)) => !grid.is_linked(south_cell, south_west_cell),
        // The south west cell's east boundary band runs under the square.
        (None, Some(_)) => true,
        _ => false,
    };
    let west_walled = match (west, south_west) {
        (Some(west_cell), Some(south_west_cell)) => !grid.is_linked(west_cell, south_west_cell),
        // The west cell's south boundary band runs beside the square.
        (Some(_), None) => true,
        // Junction on the outer silhouette: the boundary bands of this cell
        // and the south cell already run continuously past it.
        (None, None) => true,
        (None, Some(_)) => false,
    };

    // A band end needs a stub only when no band on the far side continues it
    // and no perpendicular band covers the square.
    let close_north_end = north_walled && !south_walled && !east_walled;
    let close_south_end = south_walled && !north_walled && !east_walled;
    let close_west_end = west_walled && !east_walled && !south_walled
                         && !(west.is_none() && south_west.is_none());
    let close_east_end = east_walled && !west_walled && !south_walled;

    if close_north_end || close_south_end {
        segments.push(horizontal(x1, x1 + wall, y2, StrokeClass::Inner, options));
    }
    if close_west_end || close_east_end {
        segments.push(vertical(x1, y2, y2 + wall, StrokeClass::Inner, options));
    }
}
