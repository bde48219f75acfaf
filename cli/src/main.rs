mod forms;
mod logger;
mod reader;
mod script;

use clap::{Arg, ArgAction, ArgMatches, Command};
use console::style;
use hyforge_core::{HyforgeErrorExt, Lowerer, generate_error_report};
use std::fs;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Command::new("hyforge")
        .version("0.1.0")
        .about("Lowers Lisp-style source into an imperative program tree");

    let cli = setup_cli(cli);
    let matches = cli.get_matches();

    if let Err(e) = logger::init(matches.get_count("verbose"), matches.get_flag("quiet")) {
        eprintln!("Failed to install logger: {}", e);
    }

    match dispatch_commands(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", style(generate_error_report(e.as_ref())).for_stderr().red());
            ExitCode::FAILURE
        }
    }
}

/// Sets up the CLI with subcommands and arguments.
fn setup_cli(cli: Command) -> Command {
    cli.arg(
        Arg::new("verbose")
            .help("Increase log verbosity (repeatable)")
            .short('v')
            .long("verbose")
            .action(ArgAction::Count)
            .global(true),
    )
    .arg(
        Arg::new("quiet")
            .help("Only log errors")
            .short('q')
            .long("quiet")
            .action(ArgAction::SetTrue)
            .global(true),
    )
    .subcommand(
        Command::new("lower")
            .about("Lower a source file and print the resulting program")
            .arg(
                Arg::new("file")
                    .help("The source file to lower")
                    .required(true)
                    .index(1),
            )
            .arg(
                Arg::new("dump")
                    .help("What to print: the read source tree, the target listing, or JSON")
                    .short('d')
                    .long("dump")
                    .value_parser(["tree", "target", "json"])
                    .default_value("target")
                    .value_name("STAGE"),
            )
            .arg(
                Arg::new("name")
                    .help("Module name for the program unit (defaults to the file stem)")
                    .short('n')
                    .long("name")
                    .value_parser(clap::value_parser!(String))
                    .value_name("NAME"),
            )
            .arg(
                Arg::new("output")
                    .help("Write the dump to a file instead of stdout")
                    .short('o')
                    .long("output")
                    .value_parser(clap::value_parser!(String))
                    .value_name("FILE"),
            ),
    )
    .subcommand(Command::new("forms").about("List the structural and special forms the lowerer recognizes"))
}

/// Dispatches the command based on the parsed arguments.
fn dispatch_commands(matches: &ArgMatches) -> Result<(), Box<dyn HyforgeErrorExt>> {
    match matches.subcommand() {
        Some(("lower", sub_m)) => lower_command(sub_m),
        Some(("forms", _)) => {
            println!("{}", forms::forms_table(&Lowerer::new()));
            Ok(())
        }
        _ => {
            println!("No valid subcommand was used. Use --help for more information.");
            Ok(())
        }
    }
}

fn lower_command(sub_m: &ArgMatches) -> Result<(), Box<dyn HyforgeErrorExt>> {
    let Some(file) = sub_m.get_one::<String>("file") else {
        return Ok(());
    };
    let script = script::Script::new(std::path::PathBuf::from(file))?;
    let forest = reader::read_forest(&script)?;
    log::info!("read {} top-level form(s) from {}", forest.len(), script.name);

    let dump = sub_m.get_one::<String>("dump").map(String::as_str).unwrap_or("target");
    let rendered = if dump == "tree" {
        forest.iter().map(|n| format!("{}\n", n)).collect::<String>()
    } else {
        let name = sub_m.get_one::<String>("name").cloned().unwrap_or_else(|| script.module_name());
        let unit = hyforge_core::compile_forest(&name, &forest)?;
        if dump == "json" {
            let mut json = unit.to_json().map_err(|e| output_error(format!("Failed to serialize program: {}", e)))?;
            json.push('\n');
            json
        } else {
            unit.to_string()
        }
    };

    match sub_m.get_one::<String>("output") {
        Some(output_file) => fs::write(output_file, rendered)
            .map_err(|e| output_error(format!("Failed to write {}: {}", output_file, e))),
        None => {
            print!("{}", rendered);
            Ok(())
        }
    }
}

fn output_error(message: String) -> Box<dyn HyforgeErrorExt> {
    Box::new(script::OutputError { message })
}
