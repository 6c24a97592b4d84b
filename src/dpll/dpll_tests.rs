#[cfg(test)]
mod test {
    use std::fs;

    use crate::data_structures::{lit_from_int, Config, Solution, Solver};
    use crate::dpll::assignment::{make_assignment, undo_assignment};
    use crate::dpll::dpll::try_assignment;
    use crate::dpll::solve_problem;
    use crate::format::read_problem;

    fn config() -> Config {
        Config::default()
    }

    fn solve_str(input: &str) -> Solver {
        let mut solver = read_problem(input, config()).unwrap();
        solve_problem(&mut solver);
        solver
    }

    fn solve_file(filename: &str) -> Solver {
        let input = fs::read_to_string(filename).unwrap();
        solve_str(&input)
    }

    /*
    Checks that every clause has a literal assigned true on the trail.
    */
    fn assert_model_satisfies(solver: &Solver) {
        for cstate in &solver.clauses {
            assert!(cstate
                .lits
                .iter()
                .any(|&lit| solver.lits[lit].fixed && solver.lits[lit].assigned));
        }
    }

    /*
    Checks the counter bookkeeping against a full scan of the clause
    database: the per-clause counts must partition the literals, and the
    global satisfied/contradicted counts must match the clause states.
    */
    fn assert_counters_consistent(solver: &Solver) {
        let mut n_sat = 0;
        let mut n_unsat = 0;

        for cstate in &solver.clauses {
            assert_eq!(
                cstate.lits.len(),
                cstate.n_assigned_true + cstate.n_assigned_false + cstate.n_free_lits
            );

            let true_count = cstate
                .lits
                .iter()
                .filter(|&&lit| solver.lits[lit].fixed && solver.lits[lit].assigned)
                .count();
            assert_eq!(true_count, cstate.n_assigned_true);

            if cstate.n_assigned_true > 0 {
                n_sat += 1;
            }
            if cstate.n_assigned_true == 0 && cstate.n_free_lits == 0 {
                n_unsat += 1;
            }
        }

        assert_eq!(n_sat, solver.n_sat_clauses);
        assert_eq!(n_unsat, solver.n_unsat_clauses);
    }

    /* START OF INSTANCE TESTS */

    #[test]
    fn unit_instance_test() {
        let solver = solve_file("./test_files/unit.cnf");
        assert_eq!(Solution::Satisfiable, solver.solution);
        assert_model_satisfies(&solver);
        assert!(solver.lits[lit_from_int(1)].assigned);
        assert!(solver.statistics.branch_count >= 1);
        assert!(solver.unit_stack.is_empty());
    }

    #[test]
    fn contradictory_units_instance_test() {
        let solver = solve_file("./test_files/contradictory_units.cnf");
        assert_eq!(Solution::Unsatisfiable, solver.solution);
        // The whole trail is unwound on failure.
        assert!(solver.assigned.is_empty());
        assert_counters_consistent(&solver);
    }

    #[test]
    fn simple_sat_instance_test() {
        let solver = solve_file("./test_files/simple_sat.cnf");
        assert_eq!(Solution::Satisfiable, solver.solution);
        assert_model_satisfies(&solver);
        assert_counters_consistent(&solver);
    }

    /*
    All four two-literal clauses over two variables leave no assignment.
    */
    #[test]
    fn all_polarities_instance_test() {
        let solver = solve_file("./test_files/all_polarities.cnf");
        assert_eq!(Solution::Unsatisfiable, solver.solution);
        assert!(solver.assigned.is_empty());
    }

    /*
    The pigeonhole principle for three pigeons and two holes, nine clauses
    of pure symmetry that force the search to actually branch.
    */
    #[test]
    fn pigeonhole_instance_test() {
        let solver = solve_file("./test_files/pigeonhole_3_2.cnf");
        assert_eq!(Solution::Unsatisfiable, solver.solution);
        assert!(solver.statistics.branch_count >= 1);
    }

    /*
    A Horn chain where every assignment after the branch is forced by
    unit propagation.
    */
    #[test]
    fn horn_chain_instance_test() {
        let solver = solve_file("./test_files/horn_chain.cnf");
        assert_eq!(Solution::Satisfiable, solver.solution);
        for repr in 1..=4 {
            assert!(solver.lits[lit_from_int(repr)].assigned);
        }
        assert!(solver.statistics.propagation_count >= 2);
        assert_model_satisfies(&solver);
    }

    /*
    A clause holding a variable in both polarities is always satisfied and
    must not confuse the counters.
    */
    #[test]
    fn tautological_clause_test() {
        let solver = solve_str("p cnf 1 1\n1 -1 0\n");
        assert_eq!(Solution::Satisfiable, solver.solution);
        assert_counters_consistent(&solver);
    }

    /* END OF INSTANCE TESTS */

    /* START OF ASSIGNMENT ENGINE TESTS */

    /*
    Tests the counter movement of a single assignment: satisfied clauses
    counted once, complement occurrences falsified.
    */
    #[test]
    fn make_assignment_counters_test() {
        let mut solver = read_problem("p cnf 3 2\n1 -3 0\n2 3 -1 0\n", config()).unwrap();

        make_assignment(&mut solver, lit_from_int(1));

        assert_eq!(1, solver.n_sat_clauses);
        assert_eq!(0, solver.n_unsat_clauses);
        assert_eq!(1, solver.clauses[0].n_assigned_true);
        assert_eq!(1, solver.clauses[0].n_free_lits);
        assert_eq!(1, solver.clauses[1].n_assigned_false);
        assert_eq!(2, solver.clauses[1].n_free_lits);
        assert_counters_consistent(&solver);
    }

    /*
    Tests that undoing an assignment restores every clause record and
    every literal entry to its exact previous state.
    */
    #[test]
    fn make_undo_round_trip_test() {
        let mut solver =
            read_problem("p cnf 3 3\n1 -3 0\n2 3 -1 0\n-2 3 0\n", config()).unwrap();

        let clauses_before = solver.clauses.clone();
        let lits_before = solver.lits.clone();

        make_assignment(&mut solver, lit_from_int(-2));
        undo_assignment(&mut solver, lit_from_int(-2));

        assert_eq!(clauses_before, solver.clauses);
        assert_eq!(lits_before, solver.lits);
        assert_eq!(0, solver.n_sat_clauses);
        assert_eq!(0, solver.n_unsat_clauses);
    }

    /*
    Tests that falsifying all but one literal of a clause pushes exactly
    the remaining free literal as a unit.
    */
    #[test]
    fn unit_detection_test() {
        let mut solver = read_problem("p cnf 2 1\n1 -2 0\n", config()).unwrap();

        make_assignment(&mut solver, lit_from_int(-1));

        assert_eq!(vec![lit_from_int(-2)], solver.unit_stack);
        assert_eq!(0, solver.n_unsat_clauses);
    }

    /*
    Tests that falsifying the last free literal of an unsatisfied clause
    is counted as a contradiction, and that the undo clears it.
    */
    #[test]
    fn contradiction_detection_test() {
        let mut solver = read_problem("p cnf 1 1\n1 0\n", config()).unwrap();

        make_assignment(&mut solver, lit_from_int(-1));
        assert_eq!(1, solver.n_unsat_clauses);
        assert!(solver.any_contradiction());

        undo_assignment(&mut solver, lit_from_int(-1));
        assert_eq!(0, solver.n_unsat_clauses);
        assert_counters_consistent(&solver);
    }

    /*
    Tests that a failed branch leaves the trail depth and all state
    exactly as they were when the branch was tried.
    */
    #[test]
    fn failed_branch_restores_state_test() {
        let input = "p cnf 2 4\n1 2 0\n1 -2 0\n-1 2 0\n-1 -2 0\n";
        let mut solver = read_problem(input, config()).unwrap();

        let clauses_before = solver.clauses.clone();
        let lits_before = solver.lits.clone();

        let solution = try_assignment(&mut solver, lit_from_int(1));

        assert_eq!(Solution::Unsatisfiable, solution);
        assert!(solver.assigned.is_empty());
        assert!(solver.unit_stack.is_empty());
        assert_eq!(clauses_before, solver.clauses);
        assert_eq!(lits_before, solver.lits);
    }

    /* END OF ASSIGNMENT ENGINE TESTS */

    /* START OF RANDOM FORMULA TESTS */

    /*
    Xorshift algorithm, giving fast reproducible pseudo-random numbers
    from a fixed seed.
    */
    struct XorShift {
        state: u64,
    }

    impl XorShift {
        fn new(seed: u64) -> Self {
            XorShift { state: seed }
        }

        fn next(&mut self) -> u64 {
            let mut x = self.state;
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            self.state = x;
            x
        }
    }

    fn random_cnf(rng: &mut XorShift, n_vars: usize, n_clauses: usize) -> String {
        let mut input = format!("p cnf {} {}\n", n_vars, n_clauses);
        for _ in 0..n_clauses {
            let len = 1 + (rng.next() as usize) % 3;
            for _ in 0..len {
                let var = (1 + (rng.next() as usize) % n_vars) as i32;
                let repr = if rng.next() % 2 == 0 { var } else { -var };
                input += &format!("{} ", repr);
            }
            input += "0\n";
        }
        input
    }

    /*
    Checks an instance against exhaustive enumeration of all assignments.
    */
    fn brute_force_satisfiable(solver: &Solver) -> bool {
        for mask in 0u32..(1u32 << solver.n_vars) {
            let satisfied = solver.clauses.iter().all(|cstate| {
                cstate.lits.iter().any(|&lit| {
                    let wants_true = lit & 1 == 0;
                    let var_true = (mask >> (lit >> 1)) & 1 == 1;
                    var_true == wants_true
                })
            });
            if satisfied {
                return true;
            }
        }
        false
    }

    /*
    Tests soundness and completeness on a batch of random small formulas:
    the search must agree with brute force, satisfiable answers must come
    with a model, and the counters must survive the whole search intact.
    */
    #[test]
    fn random_instances_match_brute_force_test() {
        let mut rng = XorShift::new(123456789);

        for round in 0..80 {
            let n_vars = 3 + (round % 4);
            let n_clauses = 1 + (rng.next() as usize) % 12;
            let input = random_cnf(&mut rng, n_vars, n_clauses);

            let solver = solve_str(&input);
            let expected = brute_force_satisfiable(&solver);

            match solver.solution {
                Solution::Satisfiable => {
                    assert!(expected, "claimed satisfiable on:\n{}", input);
                    assert_model_satisfies(&solver);
                }
                Solution::Unsatisfiable => {
                    assert!(!expected, "claimed unsatisfiable on:\n{}", input);
                    assert!(solver.assigned.is_empty());
                }
                Solution::Unknown => panic!("search terminated without an answer"),
            }

            assert_counters_consistent(&solver);
            assert!(solver.unit_stack.is_empty());
        }
    }

    /* END OF RANDOM FORMULA TESTS */
}
