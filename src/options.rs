use crate::data_structures::SolveError;

/*
An enum to store the action selected on the command line.
*/
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Action {
    SolveProblem,
    RunBench,
    ShowHelp,
    ShowVersion,
}

/*
A struct to store the parsed command line options: the action to perform,
the input and output paths, the optional configuration file, and the
benchmark directory when running in benchmark mode.
*/
#[derive(Clone, Debug)]
pub struct Options {
    pub action: Action,
    pub infile: Option<String>,
    pub outfile: Option<String>,
    pub config_file: Option<String>,
    pub bench_dir: Option<String>,
}

/*
A function to parse the command line arguments. Arguments starting with "-"
are options, the single remaining argument is the input file. A missing
input file means the problem is read from standard input.
*/
pub fn parse_options<I>(args: I) -> Result<Options, SolveError>
where
    I: IntoIterator<Item = String>,
{
    let mut options = Options {
        action: Action::SolveProblem,
        infile: None,
        outfile: None,
        config_file: None,
        bench_dir: None,
    };

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        if arg.starts_with('-') {
            match arg.as_str() {
                "--help" => options.action = Action::ShowHelp,
                "--version" => options.action = Action::ShowVersion,
                "-o" => options.outfile = Some(read_flag_argument(&arg, args.next())?),
                "--config" => options.config_file = Some(read_flag_argument(&arg, args.next())?),
                "--bench" => {
                    options.bench_dir = Some(read_flag_argument(&arg, args.next())?);
                    options.action = Action::RunBench;
                }
                _ => {
                    return Err(SolveError::InvalidUsage(format!("Invalid argument {}", arg)));
                }
            }
        } else if options.infile.is_none() {
            options.infile = Some(arg);
        } else {
            return Err(SolveError::InvalidUsage(format!("Extra argument {}", arg)));
        }
    }

    if options.action == Action::RunBench && options.infile.is_some() {
        return Err(SolveError::InvalidUsage(String::from(
            "--bench does not take an input file",
        )));
    }

    Ok(options)
}

/*
A function to read the value that must follow a flag such as -o.
*/
fn read_flag_argument(flag: &str, value: Option<String>) -> Result<String, SolveError> {
    value.ok_or_else(|| SolveError::InvalidUsage(format!("Expected argument after {}", flag)))
}

/*
A function to print the help text.
*/
pub fn show_help() {
    println!("Usage: sat_solver [options] [file]");
    println!();
    println!("Reads a problem in DIMACS CNF format from the file, or from standard");
    println!("input when no file is given, and decides its satisfiability.");
    println!();
    println!("Options:");
    println!("  --help           Show this help text");
    println!("  --version        Show the program version");
    println!("  -o <file>        Write the solution to <file> instead of standard output");
    println!("  --config <file>  Read solver options from a JSON file");
    println!("  --bench <dir>    Solve every .cnf instance in <dir> and write a report");
}

/*
A function to print the program version.
*/
pub fn show_version() {
    println!("sat_solver {}", env!("CARGO_PKG_VERSION"));
}
