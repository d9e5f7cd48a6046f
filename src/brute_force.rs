use crate::*;

// Truth-table check over variables 1..=num_variables, for cross-checking the solver
pub(crate) fn solve_brute_force(f: &Formula, num_variables: usize) -> bool {
    assert!(num_variables <= 15); // just for safety

    fn assignment_for(assignment: u32, x: usize) -> bool {
        assignment & (1 << (x - 1)) != 0
    }

    'search: for assignment in 0..2u32.pow(num_variables as u32) {
        'clauses: for clause in f.clauses() {
            for literal in clause.literals() {
                if assignment_for(assignment, literal.idx()) == literal.is_positive() {
                    // this clause is satisfied, let's go to the next one
                    continue 'clauses;
                }
            }
            // if we got here, this clause was not satisfied, so this assignment is bogus
            continue 'search;
        }
        // if we got here, every clause was satisfied
        return true;
    }
    // no assignment is valid
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::{n, p};

    #[test]
    fn brute_force_sat() {
        let c1 = Clause::new(vec![p(1), p(2)]);
        let c2 = Clause::new(vec![n(1)]);
        let f = Formula::new(vec![c1, c2]);

        assert!(solve_brute_force(&f, 2));
    }

    #[test]
    fn brute_force_unsat() {
        let c1 = Clause::new(vec![p(1), p(2)]);
        let c2 = Clause::new(vec![n(1)]);
        let c3 = Clause::new(vec![n(2)]);
        let f = Formula::new(vec![c1, c2, c3]);

        assert!(!solve_brute_force(&f, 2));
    }

    #[test]
    fn brute_force_trivial() {
        assert!(solve_brute_force(&Formula::new(vec![]), 0));
        assert!(!solve_brute_force(&Formula::new(vec![Clause::new(vec![])]), 3));
    }
}
