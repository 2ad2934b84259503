use std::{
    io::{BufRead, BufReader},
    path::Path,
    process::exit,
    time::Instant,
};

use clap::Parser as ClapParser;

use wffcnf::{Formula, FormulaError, Options};

/// Checks propositional formulas for well-formedness and prints their conjunctive normal form
#[derive(ClapParser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
struct Args {
    /// Read formulas from this file, one per line, instead of stdin
    #[arg(long, short = 'f')]
    file: Option<String>,

    /// Print every intermediate stage of the conversion
    #[arg(long)]
    stages: bool,

    /// The maximum number of clauses of the CNF before giving up
    #[arg(long, short = 'c')]
    max_clauses: Option<usize>,

    /// The formulas to convert. If none are given, formulas are read line by line
    formulas: Vec<String>,
}

/// Parses the command line arguments and converts every formula.
fn main() {
    env_logger::init();
    let ts = Instant::now();
    let cli = Args::parse();
    let opts = convert_options(&cli);

    let formulas = match read_formulas(&cli) {
        Ok(fs) => fs,
        Err(err) => {
            log::error!("Error: {}", err);
            exit(1);
        }
    };

    let mut failed = false;
    for text in formulas.iter() {
        let formula = Formula::new(text);
        if cli.stages {
            print_stages(&formula);
        }
        match verdict(&formula, &opts) {
            Ok(line) => println!("{}", line),
            Err(err) => {
                log::error!("Error: {}", err);
                println!("too large");
                failed = true;
            }
        }
    }

    log::info!("Done ({}ms).", ts.elapsed().as_millis());
    if failed {
        exit(1);
    }
}

/// The line printed for a formula: its CNF, or `not well-formed` if it was rejected.
fn verdict(formula: &Formula, opts: &Options) -> Result<String, FormulaError> {
    match formula.cnf_with(opts) {
        Ok(cnf) => Ok(cnf.to_string()),
        Err(FormulaError::NotWellFormed(_)) => Ok("not well-formed".to_string()),
        Err(err) => Err(err),
    }
}

/// Positional formulas are taken as given, blank lines of a file or stdin are skipped.
fn read_formulas(cli: &Args) -> std::io::Result<Vec<String>> {
    if !cli.formulas.is_empty() {
        return Ok(cli.formulas.clone());
    }
    let lines: Vec<String> = match &cli.file {
        Some(file) => {
            let file = Path::new(file);
            BufReader::new(std::fs::File::open(file)?)
                .lines()
                .collect::<std::io::Result<_>>()?
        }
        None => std::io::stdin()
            .lock()
            .lines()
            .collect::<std::io::Result<_>>()?,
    };
    Ok(lines
        .into_iter()
        .filter(|l| !l.trim().is_empty())
        .collect())
}

fn print_stages(formula: &Formula) {
    println!("tokens: {}", formula.tokens());
    println!("well-formed: {}", formula.is_well_formed());
    if let (Ok(postfix), Ok(tree), Ok(impl_free), Ok(nnf)) = (
        formula.postfix(),
        formula.parse_tree(),
        formula.implication_free(),
        formula.nnf(),
    ) {
        println!("postfix: {}", postfix);
        println!("tree: {}", tree);
        println!("implication-free: {}", impl_free);
        println!("nnf: {}", nnf);
    }
}

fn convert_options(options: &Args) -> Options {
    let mut opts = Options::default();
    if let Some(max) = options.max_clauses {
        opts.set_max_clauses(max);
    }
    opts
}
