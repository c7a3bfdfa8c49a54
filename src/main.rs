use anyhow::{bail, Context, Result};
use chrono::{DateTime, Local};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncBufReadExt, AsyncReadExt, BufReader};
use tokio::runtime::Handle;

use land_calculator::core::debounce::Scheduler;
use land_calculator::core::features::land_converter::{self, parse_input_value};
use land_calculator::core::history::open_or_in_memory;
use land_calculator::core::i18n::{self, FORMULA_KEYS};
use land_calculator::shared::errors::BulkLineError;
use land_calculator::shared::settings::AppSettings;
use land_calculator::{AppState, ConversionValues, LandCalculator, LandUnit, Language};

#[derive(Parser)]
#[command(name = "land-calculator", version, about = "Land measurement calculator (Lucknow, Uttar Pradesh)")]
struct Cli {
    /// State database path (overrides settings)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Display language for this run: hi or en
    #[arg(long, global = true)]
    lang: Option<Language>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert one value into every unit and record it in history
    Convert {
        value: String,
        /// Unit name, e.g. bigha, "sq ft", वर्ग मीटर
        #[arg(num_args = 1.., required = true)]
        unit: Vec<String>,
    },
    /// Convert "<value> <unit>" lines from a file or stdin
    Bulk {
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Show or clear conversion history
    History {
        #[arg(long)]
        clear: bool,
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
    /// Set the saved display language
    Language { language: Language },
    /// Print the conversion formulas
    Formulas,
    /// Read "<unit> <text>" edits from stdin as an interactive session
    Watch,
}

fn print_values(values: &ConversionValues, language: Language) {
    for (unit, value) in values.iter() {
        println!(
            "  {:<14} {}",
            i18n::unit_name(unit, language),
            land_converter::format_number(value, unit)
        );
    }
}

fn format_timestamp(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis)
        .map(|ts| ts.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| millis.to_string())
}

async fn read_input(file: Option<PathBuf>) -> Result<String> {
    match file {
        Some(path) => tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            tokio::io::stdin().read_to_string(&mut text).await?;
            Ok(text)
        }
    }
}

async fn watch(state: Arc<Mutex<AppState>>, settings: &AppSettings, language: Language) -> Result<()> {
    let mut calculator = LandCalculator::new(state, Scheduler::new(Handle::current()), settings.debounce());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        // "<unit> <text>", where the unit may contain spaces and the text may be empty
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (unit_text, text) = match line.rsplit_once(' ') {
            Some((unit_text, text)) if land_converter::resolve_unit(unit_text).is_some() => (unit_text, text),
            _ => (line, ""),
        };
        let Some(unit) = land_converter::resolve_unit(unit_text) else {
            let err = BulkLineError::UnknownUnit {
                unit: unit_text.to_string(),
                line: line.to_string(),
            };
            eprintln!("{}", err.localized(language));
            continue;
        };

        if calculator.on_input(unit, text.trim()) {
            for unit in LandUnit::ALL {
                println!("  {:<14} {}", i18n::unit_name(unit, language), calculator.field(unit));
            }
            println!();
        }
    }

    calculator.flush();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let mut settings = AppSettings::load().await.unwrap_or_else(|e| {
        log::warn!("Failed to load settings: {}", e);
        AppSettings::default()
    });
    if let Some(store) = cli.store {
        settings.storage_path = Some(store);
    }

    let storage = open_or_in_memory(&settings.state_path()?);
    let state = Arc::new(Mutex::new(AppState::load(storage, settings.default_language)));
    let language = match cli.lang {
        Some(language) => language,
        None => state.lock().map(|s| s.language()).unwrap_or_default(),
    };

    match cli.command {
        Command::Convert { value, unit } => {
            let unit_text = unit.join(" ");
            let Some(unit) = land_converter::resolve_unit(&unit_text) else {
                let line = format!("{} {}", value, unit_text);
                bail!("{}", BulkLineError::UnknownUnit { unit: unit_text, line }.localized(language));
            };
            let Some(amount) = parse_input_value(&value) else {
                bail!("{}", BulkLineError::InvalidValue { line: value }.localized(language));
            };

            let values = land_converter::convert(amount, unit);
            print_values(&values, language);
            let mut state = state.lock().map_err(|e| anyhow::anyhow!("State lock poisoned: {}", e))?;
            state.set_current_values(values);
            state.add_to_history(values);
        }
        Command::Bulk { file } => {
            let text = read_input(file).await?;
            let outcome = land_converter::parse_and_convert(&text);

            if !outcome.results.is_empty() {
                println!("{}:", i18n::lookup("results", language));
            }
            for result in &outcome.results {
                println!(
                    "{} {}",
                    land_converter::format_number(result.input.value, result.input.unit),
                    i18n::unit_name(result.input.unit, language)
                );
                print_values(&result.converted, language);
            }
            for message in outcome.error_messages(language) {
                eprintln!("{}", message);
            }
        }
        Command::History { clear, limit } => {
            let mut state = state.lock().map_err(|e| anyhow::anyhow!("State lock poisoned: {}", e))?;
            if clear {
                state.clear_history();
                return Ok(());
            }
            if state.history().is_empty() {
                println!("{}", i18n::lookup("noHistory", language));
                return Ok(());
            }
            for entry in state.history().entries().iter().take(limit) {
                println!("{}", format_timestamp(entry.timestamp));
                print_values(&entry.values, language);
            }
        }
        Command::Language { language } => {
            let mut state = state.lock().map_err(|e| anyhow::anyhow!("State lock poisoned: {}", e))?;
            state.set_language(language);
        }
        Command::Formulas => {
            println!("{}", i18n::lookup("formulas.title", language));
            for key in FORMULA_KEYS {
                println!("  {}", i18n::lookup(key, language));
            }
        }
        Command::Watch => watch(state, &settings, language).await?,
    }

    Ok(())
}
