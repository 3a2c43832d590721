//! Command-line inspector: parses a Markdown file and prints the document tree.
use anyhow::{Context, Result};
use clap::{Parser as ClapParser, ValueEnum};
use markdown_doctree_config::{Config, OutputFormat, WordCharset};
use markdown_doctree_engine::{AsciiAlphanumeric, Parser, WordChars, snapshot};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

#[derive(ClapParser, Debug)]
#[command(name = "markdown-doctree")]
#[command(about = "Parse Markdown into a document tree and print it")]
struct Args {
    /// Markdown file to parse; reads stdin when omitted
    file: Option<PathBuf>,

    /// Output format, overriding the config file
    #[arg(long, value_enum)]
    format: Option<Format>,

    /// Treat only ASCII letters and digits as word characters for `_` markers
    #[arg(long)]
    ascii: bool,

    /// Config file to use instead of ~/.config/markdown-doctree/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Outline,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Outline => OutputFormat::Outline,
            Format::Json => OutputFormat::Json,
        }
    }
}

/// Settings after merging the config file with command-line flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Settings {
    word_chars: WordCharset,
    output: OutputFormat,
}

impl Settings {
    fn merge(config: Config, args: &Args) -> Self {
        Self {
            word_chars: if args.ascii {
                WordCharset::Ascii
            } else {
                config.word_chars
            },
            output: args.format.map(Into::into).unwrap_or(config.output),
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("markdown-doctree starting up");

    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;
    let settings = Settings::merge(config, &args);
    log::debug!("Effective settings: {settings:?}");

    let text = read_input(args.file.as_deref())?;
    let rendered = render(&text, settings)?;

    io::stdout()
        .lock()
        .write_all(rendered.as_bytes())
        .context("Failed to write output")?;
    Ok(())
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        let path = Config::expand_path(path);
        log::info!("Config path: {}", path.display());
        return Config::load_from_path(&path)?
            .with_context(|| format!("Config file not found: {}", path.display()));
    }

    log::info!("Config path: {}", Config::config_path().display());
    match Config::load()? {
        Some(config) => Ok(config),
        None => {
            log::info!("No config file, using defaults");
            Ok(Config::default())
        }
    }
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

fn render(text: &str, settings: Settings) -> Result<String> {
    match settings.word_chars {
        WordCharset::Unicode => render_with(&Parser::new(), text, settings.output),
        WordCharset::Ascii => render_with(
            &Parser::with_word_chars(AsciiAlphanumeric),
            text,
            settings.output,
        ),
    }
}

fn render_with<W: WordChars>(
    parser: &Parser<W>,
    text: &str,
    output: OutputFormat,
) -> Result<String> {
    let doc = parser.parse(text);
    log::info!("Parsed {} block(s)", doc.len());

    match output {
        OutputFormat::Outline => Ok(snapshot::outline(&doc)),
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(&doc).context("Failed to serialize document")?;
            json.push('\n');
            Ok(json)
        }
    }
}
