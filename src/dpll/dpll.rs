use crate::data_structures::{negate, Literal, Solution, Solver};
use crate::dpll::assignment::{make_assignment, undo_assignment};
use crate::literal_selection::choose_branch;

/*
A function that performs the Davis-Putnam-Logemann-Loveland (DPLL)
procedure over the current solver state: detect a contradiction or a full
satisfaction, otherwise pick a branch literal and try both of its
polarities in turn.

Returns Satisfiable or Unsatisfiable; the search has no other outcome.
*/
pub fn search_assignments(solver: &mut Solver) -> Solution {
    if solver.any_contradiction() {
        return Solution::Unsatisfiable;
    } else if solver.all_satisfied() {
        return Solution::Satisfiable;
    }

    let branch = choose_branch(solver);

    let solution = try_assignment(solver, branch);
    if solution != Solution::Unsatisfiable {
        return solution;
    }

    try_assignment(solver, negate(branch))
}

/*
A function to try one branch: assign the branch literal, cascade the unit
propagations it triggers, and recurse. On an unsatisfiable outcome the
trail is unwound back to the depth recorded on entry, so the caller sees
exactly the state it had before the call.
*/
pub fn try_assignment(solver: &mut Solver, branch: Literal) -> Solution {
    let prev_n_assigned = solver.assigned.len();

    solver.statistics.increment_branch_count();
    solver.assigned.push(branch);
    make_assignment(solver, branch);

    let solution = if propagate_units(solver) {
        Solution::Unsatisfiable
    } else {
        search_assignments(solver)
    };

    if solution == Solution::Unsatisfiable {
        while solver.assigned.len() > prev_n_assigned {
            let lit = solver.assigned.pop().unwrap();
            undo_assignment(solver, lit);
        }
        debug_assert_eq!(prev_n_assigned, solver.assigned.len());
    }

    solution
}

/*
A function to drain the unit stack. Each pending literal is assigned true
unless its variable was fixed in the meantime: a literal already true is
simply skipped, while one already false means the branch has derived a
contradiction and the whole burst is abandoned.

A literal can sit on the stack more than once, so the propagation count
tracks effective assignments rather than stack traffic.

Returns true when a false unit was derived.
*/
fn propagate_units(solver: &mut Solver) -> bool {
    while let Some(unit) = solver.unit_stack.pop() {
        if !solver.lits[unit].fixed {
            solver.statistics.increment_propagation_count();
            solver.assigned.push(unit);
            make_assignment(solver, unit);
        } else if !solver.lits[unit].assigned {
            solver.unit_stack.clear();
            return true;
        }
    }

    false
}
