pub mod input;
pub mod logger;
pub mod solver;
pub mod utils;

pub use solver::{RunReport, Solver, SolverConfig};
