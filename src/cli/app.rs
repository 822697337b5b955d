//! Main CLI application

use crate::cli::preprocess::strip_leading_text;
use crate::config::{parse_schema_file, validate_schema, ArgValue, ArgumentDef, DataType, Schema};
use crate::error::{ConfigError, ConfigResult, Result};
use crate::render::{render_file, ArgumentValue, RenderContext};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

/// Default schema file location
const DEFAULT_CONFIG_FILE: &str = "config.yaml";

/// Default template file location
const DEFAULT_TEMPLATE_FILE: &str = "output.tmpl";

/// Environment variable overriding the schema file location
const CONFIG_FILE_ENV: &str = "ARGFORM_CONFIG_FILE";

/// Environment variable overriding the template file location
const TEMPLATE_FILE_ENV: &str = "ARGFORM_TEMPLATE_FILE";

/// Resolved input file locations
///
/// The environment is consulted exactly once, here; the rest of the pipeline
/// receives plain paths.
#[derive(Debug, Clone)]
pub struct Locations {
    /// Schema file path
    pub config: PathBuf,
    /// Template file path
    pub template: PathBuf,
}

impl Locations {
    /// Resolve locations from the environment, falling back to the defaults
    pub fn from_env() -> Self {
        Locations {
            config: env::var(CONFIG_FILE_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE)),
            template: env::var(TEMPLATE_FILE_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_TEMPLATE_FILE)),
        }
    }
}

/// CLI application
pub struct App {
    /// The dynamically built clap command
    command: Command,
    /// Parsed argument schema
    schema: Schema,
    /// Template file path
    template_path: PathBuf,
}

impl App {
    /// Create a new app with locations resolved from the environment
    pub fn new() -> Result<Self> {
        Self::with_locations(Locations::from_env())
    }

    /// Create an app from explicit file locations
    pub fn with_locations(locations: Locations) -> Result<Self> {
        let schema = parse_schema_file(&locations.config)?;
        validate_schema(&schema)?;

        let command = build_command(&schema)?;

        Ok(App {
            command,
            schema,
            template_path: locations.template,
        })
    }

    /// Run the pipeline against an invocation token list
    pub fn run(self, args: Vec<String>) -> Result<()> {
        let args = strip_leading_text(&args);

        let matches = self
            .command
            .try_get_matches_from(args)
            .unwrap_or_else(|e| e.exit());

        let values = collect_values(&self.schema, &matches);
        let output = render_file(&self.template_path, &RenderContext::new(values))?;

        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(output.as_bytes())?;
        handle.flush()?;

        Ok(())
    }
}

/// Build the clap command from the argument schema
fn build_command(schema: &Schema) -> Result<Command> {
    let mut cmd = Command::new("argform")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Renders command-line arguments through a text template");

    for def in &schema.arguments {
        match register_flag(def) {
            Ok(arg) => cmd = cmd.arg(arg),
            Err(e) => {
                // A bad declared default is a schema authoring bug; show the
                // flags assembled so far before bailing out.
                eprintln!("{}", cmd.render_help());
                return Err(e.into());
            }
        }
    }

    Ok(cmd)
}

/// Translate one definition into a typed clap argument
fn register_flag(def: &ArgumentDef) -> ConfigResult<Arg> {
    let default = def
        .data_type
        .coerce(&def.default_value)
        .map_err(|reason| ConfigError::DefaultCoercion {
            long: def.long.clone(),
            reason,
        })?;

    let arg = Arg::new(def.long.clone())
        .long(def.long.clone())
        .help(def.help.clone());

    let arg = match def.data_type {
        DataType::String => arg
            .action(ArgAction::Set)
            .value_name(def.long.to_uppercase())
            .default_value(default.to_string()),
        DataType::Int => arg
            .action(ArgAction::Set)
            .value_name(def.long.to_uppercase())
            .value_parser(clap::value_parser!(i64))
            .default_value(default.to_string()),
        // A bare `--name` means true; an explicit value may still be given.
        DataType::Bool => arg
            .action(ArgAction::Set)
            .num_args(0..=1)
            .value_name("BOOL")
            .value_parser(clap::value_parser!(bool))
            .default_missing_value("true")
            .default_value(default.to_string()),
    };

    Ok(arg)
}

/// Collect the final value of every schema-declared argument
///
/// Iterates the schema, not the invocation, so arguments left at their
/// default still appear, and the result order is declaration order.
fn collect_values(schema: &Schema, matches: &ArgMatches) -> Vec<ArgumentValue> {
    schema
        .arguments
        .iter()
        .map(|def| {
            let value = match def.data_type {
                DataType::String => matches
                    .get_one::<String>(&def.long)
                    .cloned()
                    .map(ArgValue::Str),
                DataType::Int => matches.get_one::<i64>(&def.long).copied().map(ArgValue::Int),
                DataType::Bool => matches
                    .get_one::<bool>(&def.long)
                    .copied()
                    .map(ArgValue::Bool),
            };

            // Every flag carries a default, so a value is always present.
            let value = value.unwrap_or(ArgValue::Str(String::new()));
            ArgumentValue::new(def.long.clone(), value.to_string())
        })
        .collect()
}

/// Run the full pipeline with the process's environment and arguments
pub fn run() -> Result<()> {
    crate::logging::init();

    let app = App::new()?;
    app.run(env::args().collect())
}
