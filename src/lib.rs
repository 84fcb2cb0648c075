//! Maze carving over masked rectangular grids.
//!
//! A [`Grid`](grid/struct.Grid.html) is an arena of cells, optionally
//! restricted to an arbitrary shape by a [`BinaryMask2D`](masks/struct.BinaryMask2D.html).
//! The carvers in [`generators`](generators/index.html) turn a grid into a
//! perfect maze - a spanning tree of the cells, or a spanning forest when the
//! mask splits the grid into disconnected regions. A carved grid renders as
//! fixed-width text via `Display` or as a flat list of wall line segments via
//! [`renderers::wall_segments`](renderers/fn.wall_segments.html) for vector
//! drawing consumers.

#[macro_use]
extern crate error_chain;

pub mod cells;
pub mod errors;
pub mod generators;
pub mod grid;
pub mod grid_displays;
pub mod grids;
pub mod masks;
pub mod renderers;
pub mod units;
