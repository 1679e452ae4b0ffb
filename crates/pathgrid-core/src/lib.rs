//! **pathgrid-core** — grid model shared by the pathgrid crates.
//!
//! This crate provides the foundational types used across the *pathgrid*
//! workspace: [`Coordinates`] and [`Range`] geometry, the [`Cell`] with its
//! per-search state, and the exclusively-owned [`Grid`].

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;

pub use cell::{Cell, UNREACHABLE};
pub use error::GridError;
pub use geom::{Coordinates, Range};
pub use grid::Grid;
