use clap::{App, Arg};
use refsat::census::{clause_universe, count, MAX_VARIABLES};

fn main() {
    env_logger::init();

    let matches = App::new("census")
        .about("Count clause sets that survive subsumption filtering")
        .arg(
            Arg::with_name("variables")
                .short("v")
                .long("variables")
                .takes_value(true)
                .default_value("4")
                .validator(|v| match v.parse::<usize>() {
                    Ok(n) if n <= MAX_VARIABLES => Ok(()),
                    _ => Err(format!("expected a variable count up to {}", MAX_VARIABLES)),
                }),
        )
        .arg(
            Arg::with_name("clauses")
                .short("c")
                .long("clauses")
                .takes_value(true)
                .default_value("3")
                .validator(|v| v.parse::<usize>().map(|_| ()).map_err(|e| e.to_string())),
        )
        .get_matches();

    // both values are validated above
    let num_variables = matches.value_of("variables").and_then(|v| v.parse().ok()).unwrap_or(0);
    let num_clauses = matches.value_of("clauses").and_then(|v| v.parse().ok()).unwrap_or(0);

    let universe = clause_universe(num_variables);
    println!("generated {} possible clauses.", universe.len());

    let counts = count(&universe, num_clauses);
    println!("counts.all .................... : {}", counts.all);
    println!("counts.after_subsumption ...... : {}", counts.after_subsumption);
}
