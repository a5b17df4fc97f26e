//! The `compile` command
//!
//! The whole template is compiled and its source map serialized before anything is written, so
//! a failed command never leaves a partial output file behind.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::ArgMatches;
use config::ConfigError;
use kiste_compiler::{compile_file, CompileError, CompileOptions};
use kiste_config::{Loader, PROJECT_CONFIG_FILE};
use log::{debug, info};

#[derive(Debug)]
pub enum CliError {
    Config(ConfigError),
    Compile(CompileError),
    Write { path: PathBuf, source: io::Error },
    SourceMap(serde_json::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(err) => write!(f, "Configuration error: {}", err),
            CliError::Compile(err) => write!(f, "{}", err),
            CliError::Write { path, source } => {
                write!(f, "Could not write {}: {}", path.display(), source)
            }
            CliError::SourceMap(err) => write!(f, "Could not serialize source map: {}", err),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(err) => Some(err),
            CliError::Compile(err) => Some(err),
            CliError::Write { source, .. } => Some(source),
            CliError::SourceMap(err) => Some(err),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::Config(err)
    }
}

impl From<CompileError> for CliError {
    fn from(err: CompileError) -> Self {
        CliError::Compile(err)
    }
}

/// Handle `kiste compile`
pub fn handle_compile_command(matches: &ArgMatches) -> Result<(), CliError> {
    let source = matches
        .get_one::<String>("source")
        .map(PathBuf::from)
        .unwrap_or_default();
    let options = resolve_options(matches)?;
    debug!("compiling {} with {:?}", source.display(), options);

    let compilation = compile_file(&source, &options)?;
    let source_map = match matches.get_one::<String>("source-map") {
        Some(path) => {
            let json = compilation.source_map.to_json().map_err(CliError::SourceMap)?;
            Some((Path::new(path), json))
        }
        None => None,
    };

    let output = matches.get_one::<String>("output").map(Path::new);
    match output {
        Some(path) => {
            write_file(path, &compilation.code)?;
            info!("wrote {}", path.display());
        }
        None => print!("{}", compilation.code),
    }

    if let Some((path, json)) = source_map {
        if let Err(err) = write_file(path, &json) {
            // Both files or neither.
            if let Some(output) = output {
                let _ = fs::remove_file(output);
            }
            return Err(err);
        }
        info!("wrote source map {}", path.display());
    }

    Ok(())
}

/// Defaults, then `kiste.toml`, then `--config`, then flags.
fn resolve_options(matches: &ArgMatches) -> Result<CompileOptions, CliError> {
    let mut loader = Loader::new().with_optional_file(PROJECT_CONFIG_FILE);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if matches.get_flag("report-exceptions") {
        loader = loader.set_override("compile.report_exceptions", true)?;
    }
    if matches.get_flag("no-line-directives") {
        loader = loader.set_override("compile.line_directives", false)?;
    }
    Ok(loader.build()?.compile.to_options())
}

fn write_file(path: &Path, contents: &str) -> Result<(), CliError> {
    fs::write(path, contents).map_err(|source| CliError::Write {
        path: path.to_path_buf(),
        source,
    })
}
