//! Game implementations.

pub mod domino;
