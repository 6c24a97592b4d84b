use crate::data_structures::{negate, Literal, LiteralSelection, Solver};

/*
A function to select the next branch literal according to the configured
selection scheme. The chosen literal will be assigned true first.

Must not be called once every variable is assigned or every clause is
satisfied; propagation has already drained all unit clauses by the time
the search branches.
*/
pub fn choose_branch(solver: &mut Solver) -> Literal {
    debug_assert!(solver.assigned.len() != solver.n_vars);
    debug_assert!(solver.n_sat_clauses != solver.n_clauses);

    if solver.config.literal_selection.eq(&LiteralSelection::Ordered) {
        select_literal_ordered(solver)
    } else {
        select_literal_two_sided(solver)
    }
}

/*
A function to select the positive literal of the lowest-indexed free
variable. A baseline scheme, useful when comparing heuristics.
*/
fn select_literal_ordered(solver: &Solver) -> Literal {
    for var in 0..solver.n_vars {
        let lit = var << 1;
        if !solver.lits[lit].fixed {
            return lit;
        }
    }
    unreachable!("no free variable to branch on");
}

/*
A function to select a branch by the two-sided pair score. Every free
variable is scored as (score(v) + 1) * (score(not v) + 1) and the best
pair wins, with ties broken towards the lower variable index. Within the
winning pair the polarity with the larger single-sided score is chosen,
preferring the positive one on a tie.
*/
fn select_literal_two_sided(solver: &mut Solver) -> Literal {
    update_scores(solver);

    let mut best_lit = 0;
    let mut best_score = 0;

    for lit in (0..solver.n_vars << 1).step_by(2) {
        if solver.lits[lit].fixed {
            continue;
        }

        let a = solver.lits[lit].score;
        let b = solver.lits[negate(lit)].score;
        let score = (a + 1) * (b + 1);

        if score > best_score {
            best_score = score;
            // Choose the higher-scoring of the pair.
            best_lit = if a >= b { lit } else { negate(lit) };
        }
    }

    best_lit
}

/*
A function to recompute the score of every literal. A literal earns points
for each unsatisfied clause it appears in, weighted by how close the clause
is to becoming unit: 4 points for a binary clause, 2 for a ternary one and
1 otherwise. Satisfied clauses and fixed literals score nothing.
*/
pub fn update_scores(solver: &mut Solver) {
    for lstate in solver.lits.iter_mut() {
        lstate.score = 0;
    }

    for lit in 0..(solver.n_vars << 1) {
        if solver.lits[lit].fixed {
            continue;
        }

        let mut score = 0;
        for &clause_index in &solver.lits[lit].cont_clauses {
            let cstate = &solver.clauses[clause_index];

            // Skip clauses that have been satisfied.
            if cstate.n_assigned_true != 0 {
                continue;
            }

            score += match cstate.n_free_lits {
                2 => 4,
                3 => 2,
                _ => 1,
            };
        }

        solver.lits[lit].score = score;
    }
}
