use crate::data_structures::{negate, Literal, Solver};

/*
A function to assign a literal true. The assignment flags are set before
any clause is touched so that get_unit already sees the variable as fixed
while the clause counters are being updated. Every clause containing the
literal gains a true assignment, every clause containing its complement
gains a false one.
*/
pub fn make_assignment(solver: &mut Solver, lit: Literal) {
    let nlit = negate(lit);

    debug_assert!(!solver.lits[lit].fixed);
    debug_assert!(!solver.lits[nlit].fixed);

    solver.lits[lit].fixed = true;
    solver.lits[lit].assigned = true;
    solver.lits[nlit].fixed = true;
    solver.lits[nlit].assigned = false;

    for i in 0..solver.lits[lit].cont_clauses.len() {
        let clause_index = solver.lits[lit].cont_clauses[i];
        add_true_assignment(solver, clause_index);
    }

    for i in 0..solver.lits[nlit].cont_clauses.len() {
        let clause_index = solver.lits[nlit].cont_clauses[i];
        add_false_assignment(solver, clause_index);
    }
}

/*
A function to undo a true assignment of a literal. The clause updates of
make_assignment are reversed one for one, then the flags on both literal
entries are cleared. Assignments must be undone in LIFO order of the trail
for the counter deltas to cancel exactly.
*/
pub fn undo_assignment(solver: &mut Solver, lit: Literal) {
    let nlit = negate(lit);

    debug_assert!(solver.lits[lit].fixed && solver.lits[lit].assigned);
    debug_assert!(solver.lits[nlit].fixed && !solver.lits[nlit].assigned);

    for i in 0..solver.lits[lit].cont_clauses.len() {
        let clause_index = solver.lits[lit].cont_clauses[i];
        undo_true_assignment(solver, clause_index);
    }

    for i in 0..solver.lits[nlit].cont_clauses.len() {
        let clause_index = solver.lits[nlit].cont_clauses[i];
        undo_false_assignment(solver, clause_index);
    }

    solver.lits[lit].fixed = false;
    solver.lits[lit].assigned = false;
    solver.lits[nlit].fixed = false;
    solver.lits[nlit].assigned = false;
}

/*
A function to record a true assignment in one clause.
*/
fn add_true_assignment(solver: &mut Solver, clause_index: usize) {
    debug_assert!(solver.clauses[clause_index].n_free_lits > 0);

    // The clause is satisfied from this assignment on.
    if solver.clauses[clause_index].n_assigned_true == 0 {
        solver.n_sat_clauses += 1;
    }

    let cstate = &mut solver.clauses[clause_index];
    cstate.n_assigned_true += 1;
    cstate.n_free_lits -= 1;
}

/*
A function to record a false assignment in one clause. A clause whose last
free literal is being falsified becomes a contradiction, checked before
the counters move. A clause left with exactly one free literal and no true
one has become unit, checked after, and its unit literal is pushed for
propagation.
*/
fn add_false_assignment(solver: &mut Solver, clause_index: usize) {
    debug_assert!(solver.clauses[clause_index].n_free_lits > 0);

    if solver.clauses[clause_index].n_assigned_true == 0
        && solver.clauses[clause_index].n_free_lits == 1
    {
        solver.n_unsat_clauses += 1;
    }

    {
        let cstate = &mut solver.clauses[clause_index];
        cstate.n_assigned_false += 1;
        cstate.n_free_lits -= 1;
    }

    if solver.clauses[clause_index].n_assigned_true == 0
        && solver.clauses[clause_index].n_free_lits == 1
    {
        let unit = get_unit(solver, clause_index);
        solver.unit_stack.push(unit);
    }
}

/*
A function to reverse add_true_assignment for one clause.
*/
fn undo_true_assignment(solver: &mut Solver, clause_index: usize) {
    debug_assert!(
        solver.clauses[clause_index].n_free_lits < solver.clauses[clause_index].lits.len()
    );

    {
        let cstate = &mut solver.clauses[clause_index];
        cstate.n_assigned_true -= 1;
        cstate.n_free_lits += 1;
    }

    if solver.clauses[clause_index].n_assigned_true == 0 {
        solver.n_sat_clauses -= 1;
    }
}

/*
A function to reverse add_false_assignment for one clause.
*/
fn undo_false_assignment(solver: &mut Solver, clause_index: usize) {
    debug_assert!(
        solver.clauses[clause_index].n_free_lits < solver.clauses[clause_index].lits.len()
    );

    {
        let cstate = &mut solver.clauses[clause_index];
        cstate.n_assigned_false -= 1;
        cstate.n_free_lits += 1;
    }

    if solver.clauses[clause_index].n_assigned_true == 0
        && solver.clauses[clause_index].n_free_lits == 1
    {
        solver.n_unsat_clauses -= 1;
    }
}

/*
A function to find the unit literal of a clause with exactly one free
literal and no true one: the first literal whose variable is unfixed.

This scan is only correct because a clause holds at most one copy of each
literal. With duplicates, the free count could reach one while several
positions are still unfixed and the wrong literal could be returned.
*/
pub fn get_unit(solver: &Solver, clause_index: usize) -> Literal {
    let cstate = &solver.clauses[clause_index];

    debug_assert!(cstate.n_assigned_true == 0);
    debug_assert!(cstate.n_free_lits == 1);

    for &lit in &cstate.lits {
        if !solver.lits[lit].fixed {
            return lit;
        }
    }

    unreachable!("unit clause with no free literal");
}
