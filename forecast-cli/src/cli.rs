use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand};
use forecast_core::{Config, ForecastState, forecast};
use inquire::Text;
use serde_json::json;
use std::{
    io::{self, Write},
    path::Path,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "forecast", version, about = "Record a city and its weather condition")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Record a city/condition pair and print the forecast line.
    Record {
        /// City or location name; falls back to the configured default.
        city: Option<String>,

        /// Weather condition; falls back to the configured default.
        condition: Option<String>,

        /// Print the line and the recorded state as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Set the default city and condition used by `record`.
    Configure {
        /// Default city; prompted for if absent.
        #[arg(long)]
        city: Option<String>,

        /// Default condition; prompted for if absent.
        #[arg(long)]
        condition: Option<String>,
    },

    /// Print the location of the config file.
    ConfigPath,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        let config_path = Config::config_file_path()?;
        let stdout = io::stdout();
        self.execute(&config_path, &mut stdout.lock())
    }

    /// Run the command against the config file at `config_path`, writing output to `out`.
    fn execute(self, config_path: &Path, out: &mut impl Write) -> anyhow::Result<()> {
        match self.command {
            Command::Record { city, condition, json } => {
                let cfg = Config::load_from(config_path).context("Failed to load configuration")?;
                let (city, condition) = resolve_pair(city, condition, &cfg)?;

                let mut state = ForecastState::new();
                let line = forecast(&mut state, &city, &condition);

                if json {
                    writeln!(out, "{}", render_json(&line, &state)?)?;
                } else {
                    writeln!(out, "{line}")?;
                }
            }
            Command::Configure { city, condition } => {
                let mut cfg =
                    Config::load_from(config_path).context("Failed to load configuration")?;

                let city = match city {
                    Some(c) => c,
                    None => prompt("Default city:", cfg.default_city())?,
                };
                let condition = match condition {
                    Some(c) => c,
                    None => prompt("Default condition:", cfg.default_condition())?,
                };

                cfg.set_default_city(city);
                cfg.set_default_condition(condition);
                cfg.save_to(config_path).context("Failed to save configuration")?;

                writeln!(out, "Saved defaults to {}", config_path.display())?;
            }
            Command::ConfigPath => {
                writeln!(out, "{}", config_path.display())?;
            }
        }

        Ok(())
    }
}

/// Pick the city and condition for `record`: explicit arguments first, then config defaults.
fn resolve_pair(
    city: Option<String>,
    condition: Option<String>,
    cfg: &Config,
) -> anyhow::Result<(String, String)> {
    let city = match city {
        Some(c) => c,
        None => {
            let c = cfg.default_city().ok_or_else(|| missing_value("city"))?;
            tracing::debug!(city = c, "using configured default city");
            c.to_owned()
        }
    };
    let condition = match condition {
        Some(c) => c,
        None => {
            let c = cfg.default_condition().ok_or_else(|| missing_value("condition"))?;
            tracing::debug!(condition = c, "using configured default condition");
            c.to_owned()
        }
    };

    Ok((city, condition))
}

fn missing_value(what: &str) -> anyhow::Error {
    anyhow!(
        "No {what} given and no default {what} configured.\n\
         Hint: pass it as an argument or run `forecast configure` first."
    )
}

fn render_json(line: &str, state: &ForecastState) -> anyhow::Result<String> {
    let value = json!({
        "summary": line,
        "state": state,
    });

    serde_json::to_string_pretty(&value).context("Failed to serialize forecast as JSON")
}

fn prompt(message: &str, current: Option<&str>) -> anyhow::Result<String> {
    let mut text = Text::new(message);
    if let Some(current) = current {
        text = text.with_default(current);
    }

    text.prompt().context("Failed to read input")
}
