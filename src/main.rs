//! Mauka Spell - Main entrypoint.
//!
//! This is the main entry point for the Mauka spell checker command line.
//! It loads configuration, initializes the logging system, opens the
//! dictionary, and runs a single command against it.

use clap::{Parser, Subcommand};
use mauka_spell_lib::checker::{CheckOutcome, LoadOutcome, SpellChecker};
use mauka_spell_lib::config::{ConfigLoader, LogConfig, SpellConfig, ENV_PREFIX};
use mauka_spell_lib::error::{SpellError, SpellResult, TracingErrorReporter};
use mauka_spell_lib::suggest::Suggestion;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Command line arguments for the Mauka spell checker.
#[derive(Parser, Debug)]
#[clap(name = "Mauka Spell", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Dictionary file, overriding the configured path
    #[clap(short, long, value_parser)]
    dictionary: Option<PathBuf>,

    /// Language label, overriding the configured language
    #[clap(short, long)]
    language: Option<String>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Check the spelling of a word
    Check {
        /// Word to check
        word: String,
    },

    /// Suggest corrections for a word
    Suggest {
        /// Word to correct
        word: String,

        /// Maximum edit distance of a suggestion
        #[clap(long)]
        max_distance: Option<usize>,

        /// Maximum number of suggestions
        #[clap(long)]
        max_results: Option<usize>,

        /// Print suggestions as JSON
        #[clap(long)]
        json: bool,
    },

    /// Add a word to the dictionary
    Add {
        /// Word to add
        word: String,
    },

    /// Remove a word from the dictionary
    Remove {
        /// Word to remove
        word: String,
    },

    /// List every word in the dictionary
    List,

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
fn init_logging(log: &LogConfig) -> SpellResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_line_number(log.source_location)
        .with_file(log.source_location)
        .with_thread_names(true);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.pretty().finish())
    };

    result.map_err(|e| SpellError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Main entry point for the application.
fn main() -> SpellResult<()> {
    // Parse command-line arguments
    let args = <Args as clap::Parser>::parse();

    // Load configuration; logging settings come from it
    let config_loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);
    let loaded = config_loader.load();

    let log_config = loaded
        .as_ref()
        .map(|config| config.log.clone())
        .unwrap_or_default();
    init_logging(&log_config)?;

    let mut config = match loaded.map_err(SpellError::from) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };

    if let Some(dictionary) = args.dictionary {
        config.dictionary.path = dictionary;
    }
    if let Some(language) = args.language {
        config.dictionary.language = language;
    }

    match args.command {
        Command::Validate => {
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => generate_config(&output),
        command => {
            let checker = open_checker(config);
            if let Err(e) = run(&checker, command) {
                error!("{}", e);
                process::exit(1);
            }
            Ok(())
        }
    }
}

/// Opens the configured dictionary with a tracing error reporter attached.
fn open_checker(config: SpellConfig) -> SpellChecker {
    let path = config.dictionary.path.clone();
    let language = config.dictionary.language.clone();
    let checker = SpellChecker::new(config).with_reporter(Arc::new(TracingErrorReporter));

    if let LoadOutcome::Recovered { cause, persisted } = checker.load(&path, language) {
        if !persisted {
            warn!(error = %cause, "Continuing with an unsaved empty dictionary");
        }
    }
    checker
}

fn run(checker: &SpellChecker, command: Command) -> SpellResult<()> {
    match command {
        Command::Check { word } => match checker.check(&word)? {
            CheckOutcome::Correct => println!("'{word}' is spelled correctly."),
            CheckOutcome::Misspelled { suggestions } => {
                println!("'{word}' is not in the dictionary.");
                print_suggestions(&suggestions);
            }
        },
        Command::Suggest {
            word,
            max_distance,
            max_results,
            json,
        } => {
            let defaults = checker.suggest_config();
            let suggestions = checker.suggest(
                &word,
                max_distance.unwrap_or(defaults.max_distance),
                max_results.or(defaults.max_results),
            )?;
            if json {
                println!("{}", serde_json::to_string_pretty(&suggestions)?);
            } else {
                print_suggestions(&suggestions);
            }
        }
        Command::Add { word } => {
            if checker.add(&word)? {
                save_if_manual(checker)?;
                println!("Added '{word}' to the dictionary.");
            } else {
                println!("'{word}' is already in the dictionary.");
            }
        }
        Command::Remove { word } => {
            if checker.remove(&word)? {
                save_if_manual(checker)?;
                println!("Removed '{word}' from the dictionary.");
            } else {
                println!("'{word}' is not in the dictionary.");
            }
        }
        Command::List => {
            for word in checker.words() {
                println!("{word}");
            }
        }
        Command::Validate | Command::GenConfig { .. } => {}
    }
    Ok(())
}

/// Saves explicitly when autosave is off, since the process exits right after.
fn save_if_manual(checker: &SpellChecker) -> SpellResult<()> {
    if checker.autosave() {
        return Ok(());
    }
    match checker.dictionary_path() {
        Some(path) => checker.save(path),
        None => Ok(()),
    }
}

fn print_suggestions(suggestions: &[Suggestion]) {
    if suggestions.is_empty() {
        println!("No suggestions found.");
        return;
    }
    println!("Suggestions:");
    for suggestion in suggestions {
        println!("  {} (distance {})", suggestion.word, suggestion.distance);
    }
}

fn generate_config(output: &Path) -> SpellResult<()> {
    info!("Generating default configuration");
    let default_config = SpellConfig::default();

    // Create parent directories if they don't exist
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent).map_err(SpellError::Io)?;
    }

    // Serialize to TOML
    let toml = toml::to_string_pretty(&default_config)
        .map_err(|e| SpellError::Custom(format!("Failed to serialize config: {e}")))?;

    // Write to file
    std::fs::write(output, toml).map_err(SpellError::Io)?;

    info!("Default configuration written to {:?}", output);
    Ok(())
}
