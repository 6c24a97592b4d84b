extern crate multimap;

use std::env;
use std::process;

use crate::data_structures::SolveError;
use crate::options::{parse_options, show_help, show_version, Action};

mod data_structures;
mod dpll;
mod format;
mod literal_selection;
mod options;
mod parse_config;
mod util;

/*
The main function for the DPLL satisfiability solver.

Run "sat_solver <file.cnf>" to solve a single instance, or see --help for
the output, configuration and benchmark options.
*/
fn main() {
    let options = match parse_options(env::args().skip(1)) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("{}", err);
            eprintln!("Try --help for usage");
            process::exit(1);
        }
    };

    let result = match options.action {
        Action::ShowHelp => {
            show_help();
            Ok(())
        }
        Action::ShowVersion => {
            show_version();
            Ok(())
        }
        Action::SolveProblem => dpll::run_instance(&options),
        Action::RunBench => dpll::run_bench(&options),
    };

    if let Err(err) = result {
        eprintln!("{}", err);
        if let SolveError::InvalidUsage(_) = err {
            eprintln!("Try --help for usage");
        }
        process::exit(1);
    }
}
