use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::time::{Duration, Instant};

use multimap::MultiMap;

use crate::data_structures::{Config, Solution, SolveError};
use crate::dpll::solve_problem;
use crate::format::read_problem;
use crate::util::read_instance_name;

/*
A function to run a directory of files in DIMACS CNF format. Every .cnf
file is parsed and solved; instances that cannot be read or parsed are
tallied as failed rather than aborting the run.

Stores detailed results in a file with the provided name: the per-instance
runtimes and counters, plus the combined runtime of each
(variables, clauses) size class.
*/
pub fn run_bench_directory(
    directory: &str,
    config: Config,
    report_name: &str,
) -> Result<(), SolveError> {
    let paths =
        fs::read_dir(directory).map_err(|err| SolveError::FileAccess(directory.to_string(), err))?;

    let mut test_times = BTreeMap::new();
    let mut statistic_database = HashMap::new();
    let mut size_classes: MultiMap<(usize, usize), Duration> = MultiMap::new();
    let (mut total, mut satisfiable, mut unsatisfiable, mut failed) = (0, 0, 0, 0);
    let bench_timer = Instant::now();

    for path in paths {
        let path = match path {
            Ok(entry) => entry.path(),
            Err(_) => continue,
        };
        let file_path = path.display().to_string();
        if !file_path.ends_with(".cnf") {
            continue;
        }

        let instance_name = read_instance_name(&file_path);
        total += 1;

        let input = match fs::read_to_string(&path) {
            Ok(input) => input,
            Err(_) => {
                failed += 1;
                continue;
            }
        };

        let mut solver = match read_problem(&input, config.clone()) {
            Ok(solver) => solver,
            Err(_) => {
                failed += 1;
                continue;
            }
        };

        solve_problem(&mut solver);
        match solver.solution {
            Solution::Satisfiable => satisfiable += 1,
            Solution::Unsatisfiable => unsatisfiable += 1,
            Solution::Unknown => {}
        }

        size_classes.insert((solver.n_vars, solver.n_clauses), solver.elapsed);
        statistic_database.insert(
            instance_name.clone(),
            (
                solver.statistics.branch_count,
                solver.statistics.propagation_count,
                solver.solution,
            ),
        );
        test_times.insert(instance_name, solver.elapsed);
    }

    // Formatting to store overall results
    let mut output_string = format!(
        "--- DPLL ---\nCONFIG: [Literal Selection: {:?}]",
        config.literal_selection
    );
    output_string += &format!(
        "\n--------------------------------------------------------------\nTotal: {}, Sat: {}, Unsat: {}, Failed: {}\nComplete time: {:?}",
        total, satisfiable, unsatisfiable, failed, bench_timer.elapsed()
    );
    for (key, val) in test_times {
        let stats = statistic_database.get(&key).unwrap();
        output_string += &format!(
            "\nInstance: {} -- Runtime: {:?} -- Result: {:?} -- Branches: {}, Propagations: {}",
            key, val, stats.2, stats.0, stats.1
        );
    }
    output_string += "\n(<variable number>, <clause number>) -> Combined time";
    for (key, values) in size_classes {
        output_string += &format!(
            "\n({}var, {}cl): {:?}",
            key.0,
            key.1,
            values.iter().sum::<Duration>()
        );
    }

    fs::write(report_name, output_string)
        .map_err(|err| SolveError::FileAccess(report_name.to_string(), err))
}
