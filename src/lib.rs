//! # Fore & Aft Solver Library
//!
//! This library provides the board model and an A* search engine for the
//! "Fore & Aft" sliding-piece puzzle: red pieces advance down/right, blue
//! pieces up/left, sliding into the single empty cell or jumping over one
//! adjacent opposite-color piece, until the start arrangement becomes its
//! color mirror with the empty cell back at its original coordinate.
//!
//! It is used by one binary:
//! - `astar_solver`: builds a canonical instance for a chosen board size,
//!   runs the search with an optional deadline, and writes the state trail
//!   and move list to a report file.
//!
//! ## Modules
//! - `engine`: board representation (`Board`), cell states (`Piece`), move
//!   representation and application, legal-move enumeration, board keying.
//! - `heuristics`: the admissible greedy-assignment Manhattan estimate.
//! - `solver`: the `solve` A* engine, `Solution`, `SolveError`, and
//!   solution-path reconstruction.
//! - `layouts`: canonical start/goal/anchor triples for sizes 5, 7, 9, 11.
//! - `utils`: parsing boards from row strings, for tests and tooling.

pub mod engine;
pub mod heuristics;
pub mod layouts;
pub mod solver;
pub mod utils;
