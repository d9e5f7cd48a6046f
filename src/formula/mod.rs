pub mod dimacs;
pub mod simplify;

use std::fmt::{self, Debug, Display, Formatter};

/// A propositional variable, numbered from 1 as in DIMACS.
#[derive(Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash, Debug)]
pub struct Variable(pub usize);

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Literal {
    Positive(Variable),
    Negative(Variable),
}

impl Literal {
    /// Interpret a signed DIMACS integer. `0` is the clause terminator, not a literal.
    pub fn from_dimacs(value: isize) -> Option<Self> {
        if value > 0 {
            Some(Literal::Positive(Variable(value as usize)))
        } else if value < 0 {
            Some(Literal::Negative(Variable(value.unsigned_abs())))
        } else {
            None
        }
    }

    pub fn to_dimacs(&self) -> isize {
        match self {
            Literal::Positive(Variable(x)) => *x as isize,
            Literal::Negative(Variable(x)) => -(*x as isize),
        }
    }

    pub fn variable(&self) -> &Variable {
        match self {
            Literal::Positive(v) => v,
            Literal::Negative(v) => v,
        }
    }

    pub fn is_positive(&self) -> bool {
        match self {
            Literal::Positive(_) => true,
            Literal::Negative(_) => false,
        }
    }

    pub fn idx(&self) -> usize {
        self.variable().0
    }

    pub fn negated(&self) -> Self {
        match self {
            Literal::Positive(v) => Literal::Negative(*v),
            Literal::Negative(v) => Literal::Positive(*v),
        }
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.to_dimacs())
    }
}

/// A disjunction of literals. Literal order is kept exactly as constructed, since the solver
/// branches on the first literal of the first clause.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Clause {
    literals: Vec<Literal>,
}

impl Clause {
    pub fn new(disjuncts: impl IntoIterator<Item = Literal>) -> Self {
        Self {
            literals: disjuncts.into_iter().collect(),
        }
    }

    pub fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.literals.iter()
    }

    pub fn first(&self) -> Option<&Literal> {
        self.literals.first()
    }

    pub fn contains(&self, literal: &Literal) -> bool {
        self.literals.contains(literal)
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }
}

impl Display for Clause {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if self.literals.is_empty() {
            return f.write_str("false");
        }
        if self.literals.len() > 1 {
            f.write_str("(")?;
        }
        let mut first_literal = true;
        for literal in &self.literals {
            if first_literal {
                first_literal = false;
            } else {
                f.write_str(" | ")?;
            }
            write!(f, "{}", literal)?;
        }
        if self.literals.len() > 1 {
            f.write_str(")")?;
        }
        Ok(())
    }
}

/// A conjunction of clauses. Formulas are never mutated in place: [`Formula::reduce`] and the
/// simplifier build new values.
#[derive(Clone, PartialEq, Eq)]
pub struct Formula {
    clauses: Vec<Clause>,
}

impl Formula {
    pub fn new(conjuncts: impl IntoIterator<Item = Clause>) -> Self {
        Self {
            clauses: conjuncts.into_iter().collect(),
        }
    }

    /// The largest variable index mentioned in any clause, or 0 if there is none.
    pub fn max_variable(&self) -> usize {
        self.clauses
            .iter()
            .flat_map(|clause| clause.literals())
            .map(|literal| literal.idx())
            .max()
            .unwrap_or(0)
    }

    pub fn clauses(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter()
    }

    pub fn first_clause(&self) -> Option<&Clause> {
        self.clauses.first()
    }

    pub fn num_clauses(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Fix `literal` to true. Clauses containing `literal` are satisfied and dropped; every
    /// occurrence of its negation is removed from the remaining clauses. The result mentions
    /// neither polarity of the literal's variable.
    pub fn reduce(&self, literal: &Literal) -> Formula {
        let negated = literal.negated();
        Formula::new(
            self.clauses
                .iter()
                .filter(|clause| !clause.contains(literal))
                .map(|clause| Clause::new(clause.literals().filter(|l| **l != negated).copied())),
        )
    }
}

impl Display for Formula {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if self.clauses.is_empty() {
            return f.write_str("true");
        }
        let mut first_clause = true;
        for clause in &self.clauses {
            if first_clause {
                first_clause = false;
            } else {
                f.write_str(" & ")?;
            }
            write!(f, "{}", clause)?;
        }
        Ok(())
    }
}

impl Debug for Formula {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        Display::fmt(self, f)
    }
}

#[cfg(test)]
pub(crate) fn p(x: usize) -> Literal {
    Literal::Positive(Variable(x))
}

#[cfg(test)]
pub(crate) fn n(x: usize) -> Literal {
    Literal::Negative(Variable(x))
}

/// Random formulas over variables `1..=num_variables`, paired with that variable count. Clauses
/// may be empty and may repeat a variable.
#[cfg(test)]
pub(crate) fn formula_strategy(
    max_variables: usize,
    max_clauses: usize,
    max_clause_len: usize,
) -> impl proptest::strategy::Strategy<Value = (usize, Formula)> {
    use proptest::prelude::*;

    (1..=max_variables).prop_flat_map(move |num_variables| {
        let literal = (1..=num_variables, any::<bool>())
            .prop_map(|(v, positive)| if positive { p(v) } else { n(v) });
        let clause = prop::collection::vec(literal, 0..=max_clause_len).prop_map(Clause::new);
        prop::collection::vec(clause, 0..=max_clauses)
            .prop_map(move |clauses| (num_variables, Formula::new(clauses)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn dimacs_literals() {
        assert_eq!(Literal::from_dimacs(3), Some(p(3)));
        assert_eq!(Literal::from_dimacs(-7), Some(n(7)));
        assert_eq!(Literal::from_dimacs(0), None);
        assert_eq!(n(7).to_dimacs(), -7);
        assert_eq!(p(3).negated(), n(3));
        assert_eq!(format!("{}", n(12)), "-12");
    }

    #[test]
    fn reduce_drops_satisfied_and_shrinks_falsified() {
        let f = Formula::new(vec![
            Clause::new(vec![p(1), n(2)]),
            Clause::new(vec![p(2), p(3)]),
            Clause::new(vec![n(1), p(3), n(1)]),
        ]);

        let r = f.reduce(&p(1));
        assert_eq!(
            r,
            Formula::new(vec![Clause::new(vec![p(2), p(3)]), Clause::new(vec![p(3)])])
        );

        let r = f.reduce(&n(3));
        assert_eq!(
            r,
            Formula::new(vec![
                Clause::new(vec![p(1), n(2)]),
                Clause::new(vec![p(2)]),
                Clause::new(vec![n(1), n(1)]),
            ])
        );
    }

    #[test]
    fn reduce_can_produce_empty_clause() {
        let f = Formula::new(vec![Clause::new(vec![p(1)]), Clause::new(vec![n(1)])]);
        let r = f.reduce(&p(1));
        assert_eq!(r.num_clauses(), 1);
        assert!(r.first_clause().unwrap().is_empty());
    }

    #[test]
    fn max_variable() {
        assert_eq!(Formula::new(vec![]).max_variable(), 0);
        assert_eq!(Formula::new(vec![Clause::new(vec![])]).max_variable(), 0);
        let f = Formula::new(vec![Clause::new(vec![p(4), n(9)]), Clause::new(vec![p(2)])]);
        assert_eq!(f.max_variable(), 9);
    }

    #[test]
    fn display() {
        let f = Formula::new(vec![
            Clause::new(vec![p(1), n(3)]),
            Clause::new(vec![p(2)]),
            Clause::new(vec![]),
        ]);
        assert_eq!(format!("{}", f), "(1 | -3) & 2 & false");
        assert_eq!(format!("{}", Formula::new(vec![])), "true");
    }

    proptest! {
        #[test]
        fn proptest_reduce_eliminates_variable(
            (_, f) in formula_strategy(6, 8, 4),
            v in 1usize..=6,
            positive in any::<bool>(),
        ) {
            let literal = if positive { p(v) } else { n(v) };
            let r = f.reduce(&literal);
            prop_assert!(r.num_clauses() <= f.num_clauses());
            for clause in r.clauses() {
                prop_assert!(!clause.contains(&literal));
                prop_assert!(!clause.contains(&literal.negated()));
            }
        }
    }
}
