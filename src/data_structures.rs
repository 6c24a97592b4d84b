use std::error::Error;
use std::fmt;
use std::io;
use std::time::Duration;

/*
A literal is a variable occurrence with a polarity, packed into an unsigned
integer. The variable index sits in the upper bits and the polarity in the
lowest bit, so a literal doubles as a direct index into the literal table.

lit >> 1 is the zero-based variable index, lit & 1 == 0 means the positive
polarity and lit & 1 == 1 the negative one.
*/
pub type Literal = usize;

/*
A function to negate a literal by flipping the polarity bit.
*/
pub fn negate(lit: Literal) -> Literal {
    lit ^ 1
}

/*
A function to encode a signed DIMACS integer as a literal. The integer must
not be zero, which is the clause terminator and never a literal.
*/
pub fn lit_from_int(repr: i32) -> Literal {
    assert!(repr != 0);
    if repr > 0 {
        ((repr - 1) << 1) as Literal
    } else {
        (((-repr - 1) << 1) | 1) as Literal
    }
}

/*
A function to decode a literal back into its signed DIMACS integer.
*/
pub fn int_from_lit(lit: Literal) -> i32 {
    if lit & 1 == 1 {
        -(((lit >> 1) + 1) as i32)
    } else {
        ((lit >> 1) + 1) as i32
    }
}

/*
An enum to store the state of a solve. Unknown is the initial state; the
search only ever terminates in one of the other two.
*/
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Solution {
    Unknown,
    Satisfiable,
    Unsatisfiable,
}

/*
An enum to store the literal selection scheme used when branching.

Ordered picks the lowest-indexed free variable. TwoSided scores both
polarities of every free variable and picks the pair with the highest
combined score.
*/
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum LiteralSelection {
    Ordered,
    TwoSided,
}

/*
A struct to store the solver configuration.
*/
#[derive(Clone)]
pub struct Config {
    pub literal_selection: LiteralSelection,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            literal_selection: LiteralSelection::TwoSided,
        }
    }
}

/*
An enum to store the errors reported at the process boundary: bad command
line usage, malformed DIMACS input or configuration, and files that cannot
be opened. The search itself has no fallible paths.
*/
#[derive(Debug)]
pub enum SolveError {
    InvalidUsage(String),
    InvalidFormat(String),
    FileAccess(String, io::Error),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::InvalidUsage(message) => write!(f, "{}", message),
            SolveError::InvalidFormat(message) => write!(f, "sat_solver: {}", message),
            SolveError::FileAccess(path, err) => write!(f, "sat_solver: {}: {}", path, err),
        }
    }
}

impl Error for SolveError {}

/*
A struct to store statistics relating to the number of attempted branches
and the number of effective unit propagations.
*/
#[derive(Clone)]
pub struct Statistics {
    pub branch_count: u64,
    pub propagation_count: u64,
}

impl Statistics {
    /*
    Create an empty statistics struct.
    */
    pub fn new() -> Self {
        Statistics {
            branch_count: 0,
            propagation_count: 0,
        }
    }

    /*
    A function to increment the branch count.
    */
    pub fn increment_branch_count(&mut self) {
        self.branch_count += 1;
    }

    /*
    A function to increment the unit propagation count.
    */
    pub fn increment_propagation_count(&mut self) {
        self.propagation_count += 1;
    }
}

/*
A struct to store a single clause together with the counts that track its
state under the current assignment. The counts allow SAT and UNSAT detection
without re-examining the literals on every assignment.

Invariant: n_assigned_true + n_assigned_false + n_free_lits == lits.len().
Invariant: lits holds at most one copy of each literal.
*/
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ClauseState {
    pub lits: Vec<Literal>,

    pub n_assigned_true: usize,
    pub n_assigned_false: usize,
    pub n_free_lits: usize,
}

impl ClauseState {
    /*
    A function to create a new empty clause.
    */
    pub fn new() -> Self {
        ClauseState {
            lits: Vec::new(),
            n_assigned_true: 0,
            n_assigned_false: 0,
            n_free_lits: 0,
        }
    }

    /*
    A function to append a literal to the clause. The caller is responsible
    for the no-duplicates invariant; see Solver::add_literal_to_clause.
    */
    pub fn add_literal(&mut self, lit: Literal) {
        self.lits.push(lit);
        self.n_free_lits += 1;
    }
}

/*
A struct to store the per-literal state: the current assignment flags, the
branching score, and the indices of every clause containing this literal.

When fixed is set, assigned records whether this literal itself is true.
Both flags are always set and cleared together with the complement entry.
*/
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct LitState {
    pub fixed: bool,
    pub assigned: bool,

    // Overall favorability of this literal as a branch choice.
    pub score: usize,

    // Indices into Solver::clauses, built once at parse time.
    pub cont_clauses: Vec<usize>,
}

impl LitState {
    /*
    A function to create the state for an unassigned literal.
    */
    pub fn new() -> Self {
        LitState {
            fixed: false,
            assigned: false,
            score: 0,
            cont_clauses: Vec::new(),
        }
    }
}

/*
A struct to store the complete solver state.

- lits holds one entry per literal, 2 * n_vars in total, indexed directly
  by the literal encoding.
- clauses is the clause database; it is never resized after creation so the
  indices stored in cont_clauses stay valid for the life of the solver.
- n_sat_clauses counts clauses with at least one true literal, and
  n_unsat_clauses counts clauses whose literals are all false. Together
  they give O(1) termination checks.
- assigned is the trail: every literal currently assigned true, in
  assignment order. Undo walks it back in LIFO order.
- unit_stack buffers literals forced by unit clauses during propagation.
*/
pub struct Solver {
    pub n_vars: usize,
    pub n_clauses: usize,
    pub lits: Vec<LitState>,
    pub clauses: Vec<ClauseState>,

    pub n_sat_clauses: usize,
    pub n_unsat_clauses: usize,
    pub unit_stack: Vec<Literal>,
    pub assigned: Vec<Literal>,

    pub solution: Solution,
    pub statistics: Statistics,
    pub elapsed: Duration,
    pub config: Config,
}

impl Solver {
    /*
    A function to create a solver for a fixed number of variables and
    clauses. Every buffer used by the search is sized here so the solve
    phase performs no further allocation.
    */
    pub fn new(n_vars: usize, n_clauses: usize, config: Config) -> Self {
        // There must be at least one variable, but there can be zero clauses.
        assert!(n_vars > 0);

        let mut lits = Vec::with_capacity(n_vars << 1);
        lits.resize_with(n_vars << 1, LitState::new);

        let mut clauses = Vec::with_capacity(n_clauses);
        clauses.resize_with(n_clauses, ClauseState::new);

        // Each push onto the unit stack corresponds to a distinct clause
        // turning unit within one propagation burst, so this bound holds.
        let max_unit_props = (n_vars << 1) + n_clauses;

        Solver {
            n_vars,
            n_clauses,
            lits,
            clauses,
            n_sat_clauses: 0,
            n_unsat_clauses: 0,
            unit_stack: Vec::with_capacity(max_unit_props),
            assigned: Vec::with_capacity(n_vars),
            solution: Solution::Unknown,
            statistics: Statistics::new(),
            elapsed: Duration::ZERO,
            config,
        }
    }

    /*
    A function to add a literal to a clause while it is being built by the
    parser. Inserting a literal the clause already contains is a no-op, so
    a clause ends up with at most one copy of each literal. Later solver
    functions rely on this to read the clause counters correctly.
    */
    pub fn add_literal_to_clause(&mut self, clause_index: usize, lit: Literal) {
        if self.clauses[clause_index].lits.contains(&lit) {
            return;
        }

        self.clauses[clause_index].add_literal(lit);
        self.lits[lit].cont_clauses.push(clause_index);
    }

    /*
    A function that returns true when every clause has a true literal.
    */
    pub fn all_satisfied(&self) -> bool {
        self.n_sat_clauses == self.n_clauses
    }

    /*
    A function that returns true when some clause has all literals false.
    */
    pub fn any_contradiction(&self) -> bool {
        self.n_unsat_clauses > 0
    }
}
