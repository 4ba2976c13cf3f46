//! `morning`: terminal front end for the morning routine assistant.

mod error_mapping;
mod render;
mod sections;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use morning_core::{AppError, Config, ConfigError};
use morning_routine::timer::{MAX_MINUTES, MIN_MINUTES};
use morning_routine::Mood;

#[derive(Debug, Parser)]
#[command(name = "morning", version, about = "Get ready for the day")]
struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(long, global = true, env = "MORNING_CONFIG")]
    config: Option<PathBuf>,

    /// Only log warnings and errors
    #[arg(long, short, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check the weather and get an outfit suggestion
    Weather {
        /// City name, e.g. Tokyo, Osaka, Sapporo
        city: String,
    },
    /// List the ingredients the planner knows about
    Ingredients,
    /// Suggest breakfast menus and total calories from ingredients on hand
    Breakfast {
        /// Ingredient keys or labels, e.g. egg トマト bread
        ingredients: Vec<String>,
    },
    /// List the available moods
    Moods,
    /// Show motivation videos for a mood
    Mood {
        #[arg(value_parser = parse_mood)]
        mood: Mood,
    },
    /// Count down the time left to get ready
    Timer {
        /// Minutes to count down (1 to 10)
        #[arg(
            long,
            short,
            value_parser = clap::value_parser!(u32)
                .range(i64::from(MIN_MINUTES)..=i64::from(MAX_MINUTES))
        )]
        minutes: Option<u32>,
    },
    /// Show today's schedule, one entry per line
    Schedule {
        /// Read entries from a file instead of stdin
        #[arg(long, short)]
        file: Option<PathBuf>,
    },
}

fn parse_mood(s: &str) -> Result<Mood, String> {
    s.parse::<Mood>().map_err(|e| {
        let choices: Vec<_> = Mood::ALL.iter().map(|m| m.key()).collect();
        format!("{} (choose from: {})", e.user_message(), choices.join(", "))
    })
}

fn load_config(path: Option<&PathBuf>) -> Result<Config, AppError> {
    if let Some(p) = path {
        if !p.exists() {
            return Err(ConfigError::NotFound(p.display().to_string()).into());
        }
    }

    Config::load_validated(path.map(PathBuf::as_path))
        .map(|(config, _)| config)
        .map_err(|e| ConfigError::Invalid(format!("{:#}", e)).into())
}

/// Run one section. The config is only read by sections that use it.
async fn run(cli: Cli) -> Result<String, AppError> {
    let Cli { config, command, .. } = cli;

    match command {
        Command::Weather { city } => {
            let config = load_config(config.as_ref())?;
            sections::weather(&config, &city).await
        }
        Command::Ingredients => Ok(sections::ingredients()),
        Command::Breakfast { ingredients } => sections::breakfast(&ingredients),
        Command::Moods => Ok(sections::moods()),
        Command::Mood { mood } => Ok(sections::mood(mood)),
        Command::Timer { minutes } => {
            let minutes = match minutes {
                Some(minutes) => minutes,
                None => load_config(config.as_ref())?.timer.default_minutes,
            };
            sections::timer(minutes).await?;
            Ok(String::new())
        }
        Command::Schedule { file } => sections::schedule(file.as_deref()),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.quiet { "warn" } else { "info" };
    if let Err(e) = morning_core::init(level) {
        eprintln!("{:#}", e);
    }

    match run(cli).await {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) if e.is_warning() => {
            println!("⚠ {}", e.user_message());
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("❌ {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}
