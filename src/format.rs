use std::io::{self, Write};

use crate::data_structures::{int_from_lit, lit_from_int, Config, Solution, SolveError, Solver};

/*
A function to parse a problem in DIMACS CNF format into a fresh solver.

The input consists of optional leading comment lines, one problem line of
the form "p cnf <n_vars> <n_clauses>", and then the clause data as one
stream of whitespace-separated signed integers in which 0 terminates a
clause. Exactly n_clauses clauses must follow the problem line, every
literal must name a declared variable, and nothing but whitespace may
follow the final clause. Comment lines between clauses are not accepted.
*/
pub fn read_problem(input: &str, config: Config) -> Result<Solver, SolveError> {
    let mut lines = input.lines();

    // Skip over the leading comment lines.
    let problem_line = loop {
        match lines.next() {
            Some(line) if line.starts_with('c') => continue,
            Some(line) => break line,
            None => return Err(invalid_format("expected problem line")),
        }
    };

    if !problem_line.starts_with('p') {
        return Err(invalid_format("expected problem line"));
    }

    let mut fields = problem_line.split_whitespace();
    if fields.next() != Some("p") || fields.next() != Some("cnf") {
        return Err(invalid_format("invalid problem line"));
    }
    let n_vars = read_problem_count(fields.next(), "invalid number of variables")?;
    let n_clauses = read_problem_count(fields.next(), "invalid number of clauses")?;
    if fields.next().is_some() {
        return Err(invalid_format("invalid problem line"));
    }

    let mut solver = Solver::new(n_vars, n_clauses, config);

    let mut tokens = lines.flat_map(str::split_whitespace);
    for clause_index in 0..n_clauses {
        loop {
            let token = tokens
                .next()
                .ok_or_else(|| invalid_format("expected more clauses"))?;
            let repr = token
                .parse::<i32>()
                .map_err(|_| invalid_format("expected a literal"))?;
            if repr == 0 {
                break;
            }
            if repr.unsigned_abs() as usize > n_vars {
                return Err(invalid_format("literal out of range"));
            }
            solver.add_literal_to_clause(clause_index, lit_from_int(repr));
        }

        // A clause that closed without any literal can never be satisfied.
        // The assignment engine never visits it, so it is counted here.
        if solver.clauses[clause_index].lits.is_empty() {
            solver.n_unsat_clauses += 1;
        }
    }

    if tokens.next().is_some() {
        return Err(invalid_format("expected end of input"));
    }

    Ok(solver)
}

/*
A function to read one count from the problem line. Counts must be strictly
positive.
*/
fn read_problem_count(field: Option<&str>, message: &str) -> Result<usize, SolveError> {
    let count = field
        .and_then(|field| field.parse::<i64>().ok())
        .ok_or_else(|| invalid_format(message))?;
    if count <= 0 {
        return Err(invalid_format(message));
    }
    Ok(count as usize)
}

fn invalid_format(message: &str) -> SolveError {
    SolveError::InvalidFormat(message.to_string())
}

/*
A function to write the solution: a comment block with the performance
statistics, the status line, and for a satisfiable problem the values of
every assigned variable in variable-index order.
*/
pub fn write_solution<W: Write>(solver: &Solver, out: &mut W) -> io::Result<()> {
    writeln!(out, "c Generated by sat_solver {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out, "c")?;
    writeln!(out, "c Performance statistics")?;
    writeln!(out, "c ----------------------")?;
    writeln!(out, "c Elapsed time:       {:.6} (s)", solver.elapsed.as_secs_f64())?;
    writeln!(out, "c Attempted branches: {}", solver.statistics.branch_count)?;
    writeln!(out, "c Unit propagations:  {}", solver.statistics.propagation_count)?;
    writeln!(out, "c")?;

    match solver.solution {
        Solution::Satisfiable => writeln!(out, "s SATISFIABLE")?,
        Solution::Unsatisfiable => writeln!(out, "s UNSATISFIABLE")?,
        Solution::Unknown => writeln!(out, "s UNKNOWN")?,
    }

    if solver.solution == Solution::Satisfiable {
        write_values(solver, out)?;
    }

    Ok(())
}

/*
A function to write the value block. Each fixed variable contributes one
signed integer, positive when the variable is true. Lines wrap before the
80th column and every line, including the closing " 0", begins with "v".
*/
fn write_values<W: Write>(solver: &Solver, out: &mut W) -> io::Result<()> {
    let mut column = 2;
    write!(out, "v")?;

    for lit in 0..(solver.n_vars << 1) {
        let lstate = &solver.lits[lit];
        if !(lstate.fixed && lstate.assigned) {
            continue;
        }

        let field = format!(" {}", int_from_lit(lit));
        if column + field.len() > 79 {
            write!(out, "\nv")?;
            column = 1;
        }
        write!(out, "{}", field)?;
        column += field.len();
    }

    if column + 2 > 79 {
        writeln!(out, "\nv 0")?;
    } else {
        writeln!(out, " 0")?;
    }

    Ok(())
}
