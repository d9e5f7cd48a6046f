use crate::formula::{Formula, Literal, Variable};
use crate::SatResult;
use log::{debug, trace};

/// A satisfying partial assignment: the decisions along the successful branch, in the order
/// they were made. Variables without a decision are don't-cares.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Model {
    decisions: Vec<Literal>,
}

impl Model {
    pub fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.decisions.iter()
    }

    pub fn len(&self) -> usize {
        self.decisions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decisions.is_empty()
    }

    /// The value decided for `variable`, or `None` if it was left free.
    pub fn value(&self, variable: Variable) -> Option<bool> {
        self.decisions
            .iter()
            .find(|literal| *literal.variable() == variable)
            .map(|literal| literal.is_positive())
    }

    /// Whether every clause of `formula` has a literal made true by this model.
    pub fn satisfies(&self, formula: &Formula) -> bool {
        formula.clauses().all(|clause| {
            clause
                .literals()
                .any(|literal| self.value(*literal.variable()) == Some(literal.is_positive()))
        })
    }
}

#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct Stats {
    pub decisions: usize,
    pub backtracks: usize,
    pub max_depth: usize,
}

/// Plain recursive DPLL without unit propagation, pure literal elimination or learning.
///
/// Branches on the first literal of the first clause, trying it true before false. This is
/// exponential in the number of variables and intended as a slow but obviously correct oracle
/// for small instances.
pub struct Solver {
    formula: Formula,
    stats: Stats,
}

impl Solver {
    pub fn new(formula: Formula) -> Self {
        Self {
            formula,
            stats: Stats::default(),
        }
    }

    pub fn solve(&mut self) -> SatResult {
        self.stats = Stats::default();
        let result = match search(&self.formula, 0, &mut self.stats) {
            Some(mut decisions) => {
                decisions.reverse();
                SatResult::Satisfiable(Model { decisions })
            }
            None => SatResult::Unsatisfiable,
        };
        debug!(
            "{} after {} decisions, {} backtracks, max depth {}",
            if result.is_satisfiable() { "sat" } else { "unsat" },
            self.stats.decisions,
            self.stats.backtracks,
            self.stats.max_depth
        );
        result
    }

    /// Statistics for the most recent call to [`Solver::solve`].
    pub fn stats(&self) -> Stats {
        self.stats
    }
}

pub fn solve(formula: Formula) -> SatResult {
    Solver::new(formula).solve()
}

// Returns the decisions of a satisfying branch below this point, deepest first, or None if every
// branch fails. Each level eliminates one variable, so depth is bounded by the variable count.
fn search(formula: &Formula, depth: usize, stats: &mut Stats) -> Option<Vec<Literal>> {
    stats.max_depth = stats.max_depth.max(depth);

    let first_clause = match formula.first_clause() {
        // the empty conjunction is true
        None => return Some(vec![]),
        Some(clause) => clause,
    };
    // the empty disjunction is false
    let literal = *first_clause.first()?;

    for &decision in &[literal, literal.negated()] {
        stats.decisions += 1;
        trace!("decide {} at depth {}", decision, depth);
        if let Some(mut decisions) = search(&formula.reduce(&decision), depth + 1, stats) {
            decisions.push(decision);
            return Some(decisions);
        }
    }

    stats.backtracks += 1;
    trace!("both polarities of {} failed, backtracking from depth {}", literal.idx(), depth);
    None
}
