use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::PathBuf,
};

use clap::{value_parser, Arg, Command};

use aurochs_sat::{
    config::Config,
    context::{Context, Report},
    types::err::{BuildError, ErrorKind},
};

fn cli() -> Command {
    Command::new("aurochs_sat")
        .about("Determines whether a DIMACS CNF formula is satisfiable or unsatisfiable")
        .arg(
            Arg::new("input")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .help("The DIMACS CNF file to solve."),
        )
        .arg(
            Arg::new("output")
                .required(false)
                .value_parser(value_parser!(PathBuf))
                .help("A file to write the result to, in place of stdout."),
        )
}

/// Writes the result, and on a satisfiable formula the assignment as signed one-indexed atoms.
///
/// Writes to stdout carry an `s ` prefix on the result, writes to a file do not.
fn write_result(
    ctx: &Context,
    report: Report,
    out: &mut impl Write,
    to_stdout: bool,
) -> std::io::Result<()> {
    match to_stdout {
        true => writeln!(out, "s {report}")?,
        false => writeln!(out, "{report}")?,
    }

    if report == Report::Satisfiable {
        let mut assignments = String::default();
        for (atom, value) in ctx.assignment().into_iter().enumerate() {
            match value {
                true => assignments.push_str(&format!("{} ", atom + 1)),
                false => assignments.push_str(&format!("-{} ", atom + 1)),
            }
        }
        assignments += "0";
        writeln!(out, "{assignments}")?;
    }

    Ok(())
}

fn main() {
    env_logger::init();

    let matches = match cli().try_get_matches() {
        Ok(matches) => matches,
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    let input = matches
        .get_one::<PathBuf>("input")
        .expect("Input is a required argument");

    let file = match File::open(input) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Unable to open {input:?}: {e}");
            std::process::exit(1);
        }
    };

    let mut ctx: Context = Context::from_config(Config::default());

    match ctx.read_dimacs(BufReader::new(&file)) {
        // An unsatisfiable build is a result, delivered by the solve below.
        Ok(_) | Err(ErrorKind::Build(BuildError::Unsatisfiable)) => {}

        Err(e) => {
            eprintln!("Unable to parse {input:?}: {e:?}");
            std::process::exit(1);
        }
    }

    let report = match ctx.solve() {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Solve failure: {e:?}");
            std::process::exit(1);
        }
    };

    println!("c conflicts:  {}", ctx.counters.total_conflicts);
    println!("c decisions:  {}", ctx.counters.total_decisions);
    println!("c restarts:   {}", ctx.counters.total_restarts);
    println!("c iterations: {}", ctx.counters.total_iterations);

    let io_result = match matches.get_one::<PathBuf>("output") {
        Some(path) => match File::create(path) {
            Ok(file) => write_result(&ctx, report, &mut BufWriter::new(file), false),
            Err(e) => {
                eprintln!("Unable to write to {path:?}: {e}");
                std::process::exit(1);
            }
        },

        None => write_result(&ctx, report, &mut std::io::stdout(), true),
    };

    if let Err(e) = io_result {
        eprintln!("Unable to write the result: {e}");
        std::process::exit(1);
    }
}
