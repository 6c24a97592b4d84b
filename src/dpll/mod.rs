mod assignment;
mod bench;
mod dpll;
mod dpll_tests;

use std::fs;
use std::io::{self, Read};
use std::time::Instant;

use crate::data_structures::{Config, SolveError, Solver};
use crate::dpll::dpll::search_assignments;
use crate::format::{read_problem, write_solution};
use crate::options::Options;
use crate::parse_config::read_config_json;

/*
A function to read a problem according to the command line options, search
for a satisfying assignment, and write the solution.
*/
pub fn run_instance(options: &Options) -> Result<(), SolveError> {
    let config = read_config(options)?;
    let input = read_input(options)?;

    let mut solver = read_problem(&input, config)?;
    solve_problem(&mut solver);

    write_output(options, &solver)
}

/*
A function to benchmark every instance in the directory given on the
command line. The report lands in the -o target, or "results-bench".
*/
pub fn run_bench(options: &Options) -> Result<(), SolveError> {
    let config = read_config(options)?;
    let directory = match &options.bench_dir {
        Some(directory) => directory,
        None => {
            return Err(SolveError::InvalidUsage(String::from(
                "--bench requires a directory",
            )));
        }
    };
    let report_name = options.outfile.as_deref().unwrap_or("results-bench");

    bench::run_bench_directory(directory, config, report_name)
}

/*
A function to run the search on a parsed solver and record the runtime.
*/
pub fn solve_problem(solver: &mut Solver) {
    let timer = Instant::now();
    solver.solution = search_assignments(solver);
    solver.elapsed = timer.elapsed();
}

fn read_config(options: &Options) -> Result<Config, SolveError> {
    match &options.config_file {
        Some(path) => read_config_json(path),
        None => Ok(Config::default()),
    }
}

fn read_input(options: &Options) -> Result<String, SolveError> {
    match &options.infile {
        Some(path) => {
            fs::read_to_string(path).map_err(|err| SolveError::FileAccess(path.clone(), err))
        }
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .map_err(|err| SolveError::FileAccess(String::from("<stdin>"), err))?;
            Ok(input)
        }
    }
}

fn write_output(options: &Options, solver: &Solver) -> Result<(), SolveError> {
    match &options.outfile {
        Some(path) => {
            let mut stream =
                fs::File::create(path).map_err(|err| SolveError::FileAccess(path.clone(), err))?;
            write_solution(solver, &mut stream)
                .map_err(|err| SolveError::FileAccess(path.clone(), err))
        }
        None => {
            let stdout = io::stdout();
            write_solution(solver, &mut stdout.lock())
                .map_err(|err| SolveError::FileAccess(String::from("<stdout>"), err))
        }
    }
}
