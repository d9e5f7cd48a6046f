pub mod census;
pub mod formula;
mod solver;

#[cfg(test)]
mod brute_force;

#[derive(PartialEq, Eq, Clone, Debug)]
pub enum SatResult {
    Satisfiable(Model),
    Unsatisfiable,
}

impl SatResult {
    pub fn is_satisfiable(&self) -> bool {
        matches!(self, SatResult::Satisfiable(_))
    }

    pub fn model(&self) -> Option<&Model> {
        match self {
            SatResult::Satisfiable(model) => Some(model),
            SatResult::Unsatisfiable => None,
        }
    }
}

pub use formula::dimacs::{DimacsParseError, Header};
pub use formula::{Clause, Formula, Literal, Variable};
pub use solver::{solve, Model, Solver, Stats};
