//! Command-line interface for kiste
//! This binary compiles kiste templates into Rust source code.
//!
//! Usage:
//!   kiste compile `<source>` [--output `<path>`] [--source-map `<path>`]   - Compile a template
//!         [--report-exceptions] [--no-line-directives] [--config `<path>`]
//!
//! Settings are read from the built-in defaults, then `kiste.toml` in the working directory,
//! then `--config`, then the command line flags.

mod compile;

use std::process;

use clap::{Arg, ArgAction, Command};
use env_logger::Env;

fn cli() -> Command {
    Command::new("kiste")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compiles kiste templates into Rust views")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log compiler internals (same as RUST_LOG=debug)")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("compile")
                .about("Compile a template into Rust source code")
                .arg(
                    Arg::new("source")
                        .help("Path to the template file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_name("PATH")
                        .help("Write generated code to PATH instead of stdout"),
                )
                .arg(
                    Arg::new("source-map")
                        .long("source-map")
                        .value_name("PATH")
                        .help("Write the generated-to-template line map as JSON to PATH"),
                )
                .arg(
                    Arg::new("report-exceptions")
                        .long("report-exceptions")
                        .help("Forward panics in embedded expressions to the serializer and keep rendering")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("no-line-directives")
                        .long("no-line-directives")
                        .help("Do not emit //@line markers")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .value_name("PATH")
                        .help("Configuration file layered over kiste.toml"),
                ),
        )
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn main() {
    let matches = match cli().try_get_matches() {
        Ok(matches) => matches,
        Err(err) => {
            // Help and version go to stdout and succeed; usage errors exit with 1.
            let _ = err.print();
            process::exit(if err.use_stderr() { 1 } else { 0 });
        }
    };

    init_logging(matches.get_flag("verbose"));

    let result = match matches.subcommand() {
        Some(("compile", sub_matches)) => compile::handle_compile_command(sub_matches),
        _ => unreachable!("clap requires a subcommand"),
    };

    if let Err(err) = result {
        eprintln!("{}", err);
        process::exit(1);
    }
}
