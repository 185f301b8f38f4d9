//! # Word Grid Solver
//!
//! A word grid is a square board of letters. Words are traced by paths of
//! adjacent cells, orthogonally or, when the option is enabled, diagonally
//! as well, without revisiting any cell. Boards are sampled from a
//! frequency-weighted letter pool to bias them toward solvable, balanced
//! layouts.
//!
//! This crate generates boards and enumerates every word on them. The
//! dictionary is a prefix tree walked by a backtrackable cursor in lockstep
//! with a depth-first traversal of the board, so the search abandons a path
//! the instant no dictionary word can complete it.

pub mod dictionary;
pub mod generator;
pub mod grid;
pub mod solver;
pub mod trie;
