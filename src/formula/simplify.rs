use crate::formula::{Clause, Formula};
use log::debug;
use std::collections::HashSet;

/// Drop every clause in which some variable occurs more than once.
///
/// This removes tautologies (`x | !x`) but also clauses with a repeated literal (`x | x | y`),
/// which are discarded whole rather than deduplicated. The solver is correct with or without
/// this pass.
pub fn simplify(formula: &Formula) -> Formula {
    let simplified = Formula::new(
        formula
            .clauses()
            .filter(|clause| has_distinct_variables(clause))
            .cloned(),
    );
    debug!(
        "simplify: dropped {} of {} clauses",
        formula.num_clauses() - simplified.num_clauses(),
        formula.num_clauses()
    );
    simplified
}

fn has_distinct_variables(clause: &Clause) -> bool {
    let variables = clause.literals().map(|literal| literal.idx()).collect::<HashSet<_>>();
    variables.len() == clause.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::{formula_strategy, n, p};
    use proptest::prelude::*;

    #[test]
    fn keeps_distinct_clauses_in_order() {
        let f = Formula::new(vec![
            Clause::new(vec![p(3), n(1)]),
            Clause::new(vec![]),
            Clause::new(vec![n(2)]),
        ]);
        assert_eq!(simplify(&f), f);
    }

    #[test]
    fn drops_tautologies_and_repeats() {
        let f = Formula::new(vec![
            Clause::new(vec![p(1), p(2), n(1)]),
            Clause::new(vec![p(1), p(2)]),
            Clause::new(vec![n(3), p(2), n(3)]),
            Clause::new(vec![p(3)]),
        ]);
        assert_eq!(
            simplify(&f),
            Formula::new(vec![Clause::new(vec![p(1), p(2)]), Clause::new(vec![p(3)])])
        );
    }

    proptest! {
        #[test]
        fn proptest_simplify_idempotent((_, f) in formula_strategy(5, 10, 4)) {
            let once = simplify(&f);
            prop_assert!(once.num_clauses() <= f.num_clauses());
            prop_assert_eq!(simplify(&once), once);
        }
    }
}
