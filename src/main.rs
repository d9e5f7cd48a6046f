use clap::{App, Arg};
use refsat::formula::dimacs::{parse, parse_file, DimacsParseError, Header};
use refsat::formula::simplify::simplify;
use refsat::formula::Formula;
use refsat::*;

fn main() {
    env_logger::init();

    let matches = App::new("refsat")
        .about("Reference DPLL satisfiability checker")
        .arg(
            Arg::with_name("simplify")
                .long("simplify")
                .help("drop clauses that mention a variable twice before solving"),
        )
        .arg(
            Arg::with_name("stats")
                .long("stats")
                .help("print search statistics to stderr"),
        )
        .arg(
            Arg::with_name("INPUT")
                .help("input files (in CNF); reads stdin if none are given")
                .multiple(true)
                .index(1),
        )
        .get_matches();

    let simplify_first = matches.is_present("simplify");
    let print_stats = matches.is_present("stats");

    let inputs: Vec<Option<&str>> = match matches.values_of("INPUT") {
        Some(paths) => paths.map(Some).collect(),
        None => vec![None],
    };

    for path in inputs {
        let name = path.unwrap_or("<stdin>");
        let (formula, header) = match parse_input(path) {
            Ok(parsed) => parsed,
            Err(e) => {
                eprintln!("{}: parse error: {}", name, e);
                std::process::exit(1);
            }
        };

        let formula = if simplify_first {
            simplify(&formula)
        } else {
            formula
        };

        let max_variable = formula.max_variable();
        let mut solver = Solver::new(formula);
        let result = solver.solve();
        report(name, &result);

        if print_stats {
            let stats = solver.stats();
            eprintln!(
                "{}: {} variables ({} used), {} clauses, {} decisions, {} backtracks, max depth {}",
                name,
                header.num_variables,
                max_variable,
                header.num_clauses,
                stats.decisions,
                stats.backtracks,
                stats.max_depth
            );
        }
    }
}

fn parse_input(path: Option<&str>) -> Result<(Formula, Header), DimacsParseError> {
    match path {
        Some(path) => parse_file(path),
        None => parse(std::io::stdin()),
    }
}

fn report(name: &str, result: &SatResult) {
    match result {
        SatResult::Satisfiable(model) => {
            println!("Instance '{}' is SATISFIABLE.", name);
            let literals = model
                .literals()
                .map(|literal| literal.to_string())
                .collect::<Vec<_>>();
            if literals.is_empty() {
                println!("    solution: {{ }}");
            } else {
                println!("    solution: {{ {} }}", literals.join(", "));
            }
        }
        SatResult::Unsatisfiable => println!("Instance '{}' is UNSATISFIABLE.", name),
    }
}
