use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use replview_present::{Depth, Mode, Present, PresenterRegistry};
use std::io::{self, Read, Write};
use std::path::Path;

use crate::args::{Cli, ColorChoice, LogLevel};
use crate::config::Config;
use crate::convert::json_to_value;
use crate::render;

/// Effective settings after merging CLI flags over the config file
#[derive(Debug, Clone, PartialEq, Eq)]
struct Settings {
    depth: Depth,
    mode: Mode,
    default_class: String,
}

impl Settings {
    fn resolve(cli: &Cli, config: &Config, stdout_is_terminal: bool) -> Self {
        let depth = if cli.unbounded {
            Depth::Unbounded
        } else if let Some(depth) = cli.depth {
            Depth::Limited(depth)
        } else {
            config.depth()
        };

        let enable_color = match cli.color.unwrap_or(config.color) {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => stdout_is_terminal,
        };

        Self {
            depth,
            mode: Mode::from_color(enable_color),
            default_class: config.default_class.clone(),
        }
    }
}

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.log_level);

    let config = Config::load(cli.config.as_deref())?;
    let settings = Settings::resolve(&cli, &config, io::stdout().is_terminal());
    tracing::debug!(?settings, "resolved settings");

    let input = read_input(cli.input.as_deref())?;
    let documents = parse_documents(&input, cli.jsonl)?;

    let registry = PresenterRegistry::with_defaults();
    let mut stdout = io::stdout().lock();

    for document in &documents {
        let value = json_to_value(document, &settings.default_class);
        let text = registry
            .present(&value, settings.depth, settings.mode)
            .with_context(|| format!("failed to present {}", value.type_name()))?;

        let text = match settings.mode {
            Mode::Color => render::to_ansi(&text),
            Mode::Plain => text,
        };

        if cli.prompt {
            writeln!(stdout, "=> {}", text)?;
        } else {
            writeln!(stdout, "{}", text)?;
        }
    }

    Ok(())
}

fn init_logging(level: LogLevel) {
    // A subscriber may already be set when embedded in tests.
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::from(level))
        .with_writer(io::stderr)
        .try_init();
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            Ok(input)
        }
    }
}

/// Parse every document up front so that malformed input produces no output.
fn parse_documents(input: &str, jsonl: bool) -> Result<Vec<serde_json::Value>> {
    if !jsonl {
        let document: serde_json::Value =
            serde_json::from_str(input).context("invalid JSON input")?;
        return Ok(vec![document]);
    }

    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            serde_json::from_str::<serde_json::Value>(line)
                .with_context(|| format!("invalid JSON on line {}", index + 1))
        })
        .collect()
}
