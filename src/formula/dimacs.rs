use crate::formula::{Clause, Formula, Literal};
use log::{debug, warn};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// The `p cnf <num_variables> <num_clauses>` problem line.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Header {
    pub num_variables: usize,
    pub num_clauses: usize,
}

/// Parse a DIMACS CNF instance.
///
/// The reader is strict: every number must be written in canonical decimal form, every literal
/// must name a declared variable, and the number of clauses must match the problem line. Two
/// liberties are taken, both common in the wild: a line consisting of `%` ends the clause
/// section, and a final clause missing its `0` terminator is closed implicitly.
pub fn parse<R: Read>(reader: R) -> Result<(Formula, Header), DimacsParseError> {
    let reader = BufReader::new(reader);
    let mut lines = reader.lines();
    let mut line_number = 0;

    let problem_line = loop {
        line_number += 1;
        let line = match lines.next() {
            Some(line) => line?,
            None => return Err(DimacsParseError::Preamble { line: line_number }),
        };
        if line.starts_with('c') {
            continue;
        }
        if line.starts_with('p') {
            break line;
        }
        return Err(DimacsParseError::Preamble { line: line_number });
    };

    let header = parse_header(&problem_line).map_err(|reason| DimacsParseError::Header {
        line: line_number,
        reason,
    })?;
    debug!(
        "problem line declares {} variables, {} clauses",
        header.num_variables, header.num_clauses
    );

    let mut clauses = vec![];
    let mut clause = vec![];

    for line in lines {
        line_number += 1;
        let line = line?;

        if line == "%" {
            debug!("end-of-clauses marker on line {}", line_number);
            break;
        }

        for token in tokenize(&line) {
            let value = parse_canonical::<isize>(token).ok_or_else(|| DimacsParseError::Token {
                line: line_number,
                token: token.to_string(),
            })?;

            match Literal::from_dimacs(value) {
                None => clauses.push(Clause::new(std::mem::take(&mut clause))),
                Some(literal) => {
                    if literal.idx() > header.num_variables {
                        return Err(DimacsParseError::LiteralRange {
                            line: line_number,
                            literal: value,
                            num_variables: header.num_variables,
                        });
                    }
                    clause.push(literal);
                }
            }
        }
    }

    if !clause.is_empty() {
        warn!("closing unterminated last clause");
        clauses.push(Clause::new(clause));
    }

    if clauses.len() != header.num_clauses {
        return Err(DimacsParseError::ClauseCount {
            expected: header.num_clauses,
            found: clauses.len(),
        });
    }

    Ok((Formula::new(clauses), header))
}

pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<(Formula, Header), DimacsParseError> {
    let file = File::open(path)?;
    parse(file)
}

/// Write `formula` in DIMACS CNF form, one clause per line.
pub fn write<W: Write>(mut writer: W, num_variables: usize, formula: &Formula) -> io::Result<()> {
    writeln!(writer, "p cnf {} {}", num_variables, formula.num_clauses())?;
    for clause in formula.clauses() {
        for literal in clause.literals() {
            write!(writer, "{} ", literal)?;
        }
        writeln!(writer, "0")?;
    }
    Ok(())
}

fn parse_header(line: &str) -> Result<Header, String> {
    let tokens = tokenize(line).collect::<Vec<_>>();
    match tokens.as_slice() {
        ["p", "cnf", num_variables, num_clauses] => {
            let num_variables = parse_canonical::<usize>(num_variables)
                .ok_or_else(|| format!("invalid num_variables '{}'", num_variables))?;
            // every literal must be representable as a signed DIMACS integer
            if num_variables > isize::MAX as usize {
                return Err(format!("num_variables {} is too large", num_variables));
            }
            let num_clauses = parse_canonical::<usize>(num_clauses)
                .ok_or_else(|| format!("invalid num_clauses '{}'", num_clauses))?;
            Ok(Header {
                num_variables,
                num_clauses,
            })
        }
        _ => Err(format!("expected 'p cnf <variables> <clauses>', got '{}'", line)),
    }
}

fn tokenize(line: &str) -> impl Iterator<Item = &str> {
    line.split(|c| c == ' ' || c == '\t').filter(|token| !token.is_empty())
}

// Only accept a number if printing it back gives the same text, which rules out signs, leading
// zeros and `-0`.
fn parse_canonical<T: FromStr + ToString>(token: &str) -> Option<T> {
    let value = token.parse::<T>().ok()?;
    if value.to_string() == token {
        Some(value)
    } else {
        None
    }
}

#[derive(Debug, Error)]
pub enum DimacsParseError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: expected a comment or the problem line")]
    Preamble { line: usize },
    #[error("line {line}: malformed problem line: {reason}")]
    Header { line: usize, reason: String },
    #[error("line {line}: invalid token '{token}' in clause section")]
    Token { line: usize, token: String },
    #[error("line {line}: literal {literal} out of range for {num_variables} variables")]
    LiteralRange {
        line: usize,
        literal: isize,
        num_variables: usize,
    },
    #[error("expected {expected} clauses, found {found}")]
    ClauseCount { expected: usize, found: usize },
}
