//! otk - Object Toolkit CLI
//!
//! A command line tool for structural operations on YAML/JSON files.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use object_toolkit::compare::{compare, deep_equal_with_tolerance, diff};
use object_toolkit::merge::{merge, merge_union_arrays};
use object_toolkit::path::{self as paths, Path};
use object_toolkit::value::{self, Map, Value};
use object_toolkit::logging;

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Debug, Parser)]
#[command(name = "otk", version, about = "Structural operations on YAML/JSON files")]
struct Cli {
    /// Output location. Use '-' for stdout
    #[arg(short, long, default_value = "-", global = true)]
    output: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Json, global = true)]
    format: Format,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Yaml,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Merge files left to right; later files win
    Merge {
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Union lists instead of replacing them
        #[arg(long)]
        union_arrays: bool,
    },
    /// Show the keys that differ between two files
    Diff {
        lhs: PathBuf,
        rhs: PathBuf,
        /// Report added/removed/modified leaf paths instead of top-level keys
        #[arg(long)]
        leaves: bool,
    },
    /// Check two files for structural equality
    Equal {
        lhs: PathBuf,
        rhs: PathBuf,
        /// Largest numeric difference still counted as equal
        #[arg(long, default_value_t = 0.0)]
        tolerance: f64,
    },
    /// Print the value at a path
    Get {
        file: PathBuf,
        path: String,
        #[arg(long, default_value = ".")]
        separator: String,
        /// JSON value printed when the path does not resolve
        #[arg(long)]
        default: Option<String>,
    },
    /// Set the value at a path and print the result
    Set {
        file: PathBuf,
        path: String,
        /// JSON value to store; bare words are stored as strings
        #[arg(value_name = "VALUE")]
        raw: String,
        #[arg(long, default_value = ".")]
        separator: String,
    },
    /// Flatten nested maps into a single level
    Flatten {
        file: PathBuf,
        #[arg(long, default_value = ".")]
        separator: String,
    },
    /// Rebuild nested maps from a flattened file
    Unflatten {
        file: PathBuf,
        #[arg(long, default_value = ".")]
        separator: String,
    },
}

fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<ExitCode> {
    let mut output: Box<dyn Write> = if cli.output == "-" {
        Box::new(io::stdout())
    } else {
        Box::new(
            fs::File::create(&cli.output)
                .map_err(|e| format!("Failed to create output file {:?}: {}", cli.output, e))?,
        )
    };
    tracing::debug!(command = ?cli.command, "running");

    let format = cli.format;
    match cli.command {
        Command::Merge { files, union_arrays } => {
            let merged = merge_files(&files, union_arrays)?;
            emit(&merged, format, &mut output)?;
        }
        Command::Diff { lhs, rhs, leaves } => {
            let (lhs, rhs) = (read_value(&lhs)?, read_value(&rhs)?);
            if leaves {
                let comparison = compare(&lhs, &rhs);
                if comparison.is_same() {
                    writeln!(output, "Objects are identical")?;
                } else {
                    writeln!(output, "{}", comparison)?;
                }
            } else {
                let changed = diff(lhs.expect_map("diff")?, rhs.expect_map("diff")?);
                emit(&Value::Map(changed), format, &mut output)?;
            }
        }
        Command::Equal { lhs, rhs, tolerance } => {
            let (lhs, rhs) = (read_value(&lhs)?, read_value(&rhs)?);
            let equal = deep_equal_with_tolerance(&lhs, &rhs, tolerance);
            writeln!(output, "{}", equal)?;
            if !equal {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Get {
            file,
            path,
            separator,
            default,
        } => {
            let root = read_value(&file)?;
            let path = Path::parse(&path, &separator);
            match (paths::get_path(&root, &path), default) {
                (Some(found), _) => emit(found, format, &mut output)?,
                (None, Some(default)) => emit(&parse_literal(&default), format, &mut output)?,
                (None, None) => return Err(format!("path '{}' not found", path).into()),
            }
        }
        Command::Set {
            file,
            path,
            raw,
            separator,
        } => {
            let mut root = read_map(&file, "set")?;
            paths::set_path(&mut root, &Path::parse(&path, &separator), parse_literal(&raw))?;
            emit(&Value::Map(root), format, &mut output)?;
        }
        Command::Flatten { file, separator } => {
            let root = read_map(&file, "flatten")?;
            let flat = paths::flatten_with_separator(&root, &separator)?;
            emit(&Value::Map(flat), format, &mut output)?;
        }
        Command::Unflatten { file, separator } => {
            let flat = read_map(&file, "unflatten")?;
            let nested = paths::unflatten_with_separator(&flat, &separator)?;
            emit(&Value::Map(nested), format, &mut output)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn read_value(file: &PathBuf) -> CliResult<Value> {
    let content = fs::read_to_string(file)
        .map_err(|e| format!("Failed to read file {:?}: {}", file, e))?;
    let parsed = value::from_yaml(&content)
        .map_err(|e| format!("Failed to parse file {:?}: {}", file, e))?;
    Ok(parsed)
}

fn read_map(file: &PathBuf, operation: &str) -> CliResult<Map> {
    match read_value(file)? {
        Value::Map(map) => Ok(map),
        other => Err(object_toolkit::Error::type_mismatch(operation, "map", other.kind()).into()),
    }
}

fn merge_files(files: &[PathBuf], union_arrays: bool) -> CliResult<Value> {
    let values = files.iter().map(read_value).collect::<CliResult<Vec<_>>>()?;
    if !union_arrays {
        return Ok(merge(&values)?);
    }
    let mut merged = Map::new();
    for (file, doc) in files.iter().zip(&values) {
        let source = doc
            .expect_map("merge")
            .map_err(|e| format!("{:?}: {}", file, e))?;
        merge_union_arrays(&mut merged, source);
    }
    Ok(Value::Map(merged))
}

/// Parses a command line value as JSON, falling back to a plain string.
fn parse_literal(raw: &str) -> Value {
    value::from_json(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn emit(doc: &Value, format: Format, output: &mut dyn Write) -> CliResult<()> {
    match format {
        Format::Json => {
            let json = value::to_json_pretty(doc)
                .map_err(|e| format!("Failed to serialize result: {}", e))?;
            writeln!(output, "{}", json)?;
        }
        Format::Yaml => {
            let yaml = value::to_yaml(doc)
                .map_err(|e| format!("Failed to serialize result: {}", e))?;
            write!(output, "{}", yaml)?;
        }
    }
    Ok(())
}
