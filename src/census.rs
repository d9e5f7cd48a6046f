//! Counting experiment over small clause universes.
//!
//! Every clause over `n` variables is generated (each variable absent, positive or negative),
//! clauses with fewer than two literals are filtered out, and then every set of `k` distinct
//! clauses is enumerated. A set survives subsumption filtering if none of its clauses is a
//! sub-clause of another, since such a set has no redundant member.

use crate::formula::{Clause, Literal, Variable};
use log::{debug, trace};

/// Largest variable count a [`CensusClause`] can represent.
pub const MAX_VARIABLES: usize = 16;

/// Clauses with fewer literals than this are dropped from the universe.
pub const MIN_WEIGHT: u32 = 2;

/// A clause as a pair of disjoint bitmasks; bit `i` stands for variable `i + 1`.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct CensusClause {
    pub positive: u32,
    pub negative: u32,
}

impl CensusClause {
    pub fn new(positive: u32, negative: u32) -> Self {
        debug_assert_eq!(positive & negative, 0);
        Self { positive, negative }
    }

    /// Number of literals.
    pub fn weight(&self) -> u32 {
        self.positive.count_ones() + self.negative.count_ones()
    }

    /// True iff every literal of `self` also occurs in `other`.
    pub fn is_subclause_of(&self, other: &CensusClause) -> bool {
        (self.positive & !other.positive) == 0 && (self.negative & !other.negative) == 0
    }

    pub fn to_clause(&self) -> Clause {
        let literals = (0..32).filter_map(|bit| {
            let variable = Variable(bit + 1);
            if self.positive & (1 << bit) != 0 {
                Some(Literal::Positive(variable))
            } else if self.negative & (1 << bit) != 0 {
                Some(Literal::Negative(variable))
            } else {
                None
            }
        });
        Clause::new(literals)
    }
}

#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct Counts {
    pub all: u64,
    pub after_subsumption: u64,
}

/// All `3^num_variables` clauses over the given variables, including the empty clause.
///
/// Panics if `num_variables` exceeds [`MAX_VARIABLES`].
pub fn all_clauses(num_variables: usize) -> Vec<CensusClause> {
    assert!(
        num_variables <= MAX_VARIABLES,
        "at most {} variables supported",
        MAX_VARIABLES
    );
    if num_variables == 0 {
        return vec![CensusClause::default()];
    }
    let mut clauses = vec![];
    for parent in all_clauses(num_variables - 1) {
        let (p, n) = (parent.positive << 1, parent.negative << 1);
        clauses.push(CensusClause::new(p, n));
        clauses.push(CensusClause::new(p | 1, n));
        clauses.push(CensusClause::new(p, n | 1));
    }
    clauses
}

/// The clause universe used by [`count`]: every clause with at least [`MIN_WEIGHT`] literals.
pub fn clause_universe(num_variables: usize) -> Vec<CensusClause> {
    let universe = all_clauses(num_variables)
        .into_iter()
        .filter(|clause| clause.weight() >= MIN_WEIGHT)
        .collect::<Vec<_>>();
    debug!("{} clauses over {} variables", universe.len(), num_variables);
    for clause in &universe {
        trace!("universe clause {}", clause.to_clause());
    }
    universe
}

/// Enumerate every set of `num_clauses` distinct clauses from `universe`.
pub fn count(universe: &[CensusClause], num_clauses: usize) -> Counts {
    let mut counts = Counts::default();
    let mut chosen = Vec::with_capacity(num_clauses);
    enumerate(universe, 0, num_clauses, &mut chosen, &mut counts);
    counts
}

fn enumerate(
    universe: &[CensusClause],
    start: usize,
    num_clauses: usize,
    chosen: &mut Vec<CensusClause>,
    counts: &mut Counts,
) {
    if chosen.len() == num_clauses {
        counts.all += 1;
        if !has_subsumption(chosen) {
            counts.after_subsumption += 1;
        }
        return;
    }
    for index in start..universe.len() {
        chosen.push(universe[index]);
        enumerate(universe, index + 1, num_clauses, chosen, counts);
        chosen.pop();
    }
}

fn has_subsumption(clauses: &[CensusClause]) -> bool {
    clauses.iter().enumerate().any(|(i, x)| {
        clauses[i + 1..]
            .iter()
            .any(|y| x.is_subclause_of(y) || y.is_subclause_of(x))
    })
}
