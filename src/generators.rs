//! Maze carving algorithms.
//!
//! Each carver takes an uncarved grid and an `Rng` and links cells until the
//! present cells form a perfect maze: exactly one path between any two cells
//! of the same connected region, no loops. On a mask that splits the grid
//! into disconnected regions the result is a spanning forest, one tree per
//! region.

use rand::Rng;
use std::str::FromStr;

use crate::cells::{Cartesian2DCoordinate, CompassPrimary, CoordinateSmallVec};
use crate::errors::{Error, ErrorKind, Result};
use crate::grid::{Grid, IndexType};

/// Carve a perfect maze with the binary tree algorithm.
///
/// Visits every present cell once and links it to its north or east present
/// neighbour, chosen uniformly between the two when both exist. No visited
/// tracking is needed and cells never re-enter consideration. The maze is
/// biased: the northmost row and eastmost column always form unbroken
/// corridors, which is a property of the algorithm rather than a defect.
pub fn binary_tree<GridIndexType, R>(grid: &mut Grid<GridIndexType>, rng: &mut R) -> Result<()>
    where GridIndexType: IndexType,
          R: Rng
{
    const CARVE_DIRECTIONS: [CompassPrimary; 2] = [CompassPrimary::North, CompassPrimary::East];

    let cells: Vec<Cartesian2DCoordinate> = grid.iter().collect();
    for cell_coord in cells {
        let carve_candidates: CoordinateSmallVec =
            grid.neighbours_at_directions(cell_coord, &CARVE_DIRECTIONS)
                .iter()
                .filter_map(|&neighbour_maybe| neighbour_maybe)
                .collect();
        if !carve_candidates.is_empty() {
            let link_coord = carve_candidates[rng.gen::<usize>() % carve_candidates.len()];
            grid.link(cell_coord, link_coord)?;
        }
    }
    Ok(())
}

/// Chooses which cell of the growing tree's active collection to expand
/// next. A policy only ever sees the collection's current size.
pub trait CellSelection {
    /// An index into the active collection, `0..active_count`. Never called
    /// with an empty collection.
    fn select_index<R: Rng>(&self, active_count: usize, rng: &mut R) -> usize;
}

/// The built in growing tree selection policies.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum SelectionPolicy {
    /// Always the most recently added cell: long winding corridors, the same
    /// texture as a recursive backtracker.
    Newest,
    /// Always the earliest added cell: short passages branching evenly
    /// outward from the seed, like a breadth first frontier.
    Oldest,
    /// A uniformly random active cell: texture between the two extremes.
    Random,
}

impl CellSelection for SelectionPolicy {
    fn select_index<R: Rng>(&self, active_count: usize, rng: &mut R) -> usize {
        match *self {
            SelectionPolicy::Newest => active_count - 1,
            SelectionPolicy::Oldest => 0,
            SelectionPolicy::Random => rng.gen::<usize>() % active_count,
        }
    }
}

impl FromStr for SelectionPolicy {
    type Err = Error;
    fn from_str(s: &str) -> Result<SelectionPolicy> {
        match s {
            "newest" => Ok(SelectionPolicy::Newest),
            "oldest" => Ok(SelectionPolicy::Oldest),
            "random" => Ok(SelectionPolicy::Random),
            _ => Err(ErrorKind::UnknownSelectionPolicy(String::from(s)).into()),
        }
    }
}

/// Carve a perfect maze with the growing tree algorithm.
///
/// Grows from a random seed cell, keeping an active collection of cells that
/// may still have unvisited neighbours. Each step the `selection` policy
/// picks an active cell; the cell links to a random unvisited neighbour which
/// joins the collection, or retires from the collection when no unvisited
/// neighbour remains.
///
/// A masked grid may hold pockets unreachable from the first seed, so when a
/// pass exhausts its collection the grid is rescanned for an untouched cell
/// and reseeded there. Every present cell is visited exactly once overall,
/// giving a spanning tree per connected region.
pub fn growing_tree<GridIndexType, R, S>(grid: &mut Grid<GridIndexType>,
                                         rng: &mut R,
                                         selection: &S)
                                         -> Result<()>
    where GridIndexType: IndexType,
          R: Rng,
          S: CellSelection
{
    grid.clear_visited();
    let seed_cell = grid.random_cell(rng);
    grow_from_seed(grid, rng, selection, seed_cell)?;

    loop {
        let pocket_seed = grid.iter().find(|&coord| !grid.is_visited(coord));
        match pocket_seed {
            Some(seed) => grow_from_seed(grid, rng, selection, seed)?,
            None => break,
        }
    }
    Ok(())
}

fn grow_from_seed<GridIndexType, R, S>(grid: &mut Grid<GridIndexType>,
                                       rng: &mut R,
                                       selection: &S,
                                       seed_cell: Cartesian2DCoordinate)
                                       -> Result<()>
    where GridIndexType: IndexType,
          R: Rng,
          S: CellSelection
{
    grid.mark_visited(seed_cell);
    let mut active_cells = vec![seed_cell];

    while !active_cells.is_empty() {
        let active_index = selection.select_index(active_cells.len(), rng);
        let cell = active_cells[active_index];

        let mut neighbours = grid.neighbours(cell);
        rng.shuffle(&mut neighbours);
        let unvisited_neighbour = neighbours.iter()
                                            .cloned()
                                            .find(|&neighbour| !grid.is_visited(neighbour));

        match unvisited_neighbour {
            Some(next_cell) => {
                grid.link(cell, next_cell)?;
                grid.mark_visited(next_cell);
                active_cells.push(next_cell);
            }
            None => {
                // Every neighbour already carved into, the cell is done.
                // Plain remove keeps insertion order intact, which the
                // newest/oldest policies depend on.
                let _ = active_cells.remove(active_index);
            }
        }
    }
    Ok(())
}
