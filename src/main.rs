use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;

use tagmint::config::{self, Config};
use tagmint::error::TagmintError;
use tagmint::provider::OllamaClient;
use tagmint::suggest::{TagList, TagSuggester, fallback_tags};

/// Longest accepted product name, in characters
const MAX_NAME_CHARS: usize = 255;

/// Longest accepted product description, in characters
const MAX_DESCRIPTION_CHARS: usize = 1000;

/// Suggest keyword tags for a product
#[derive(Debug, Parser)]
#[command(name = "tagmint", version, about)]
struct Cli {
    /// Product name
    name: String,

    /// Product description
    description: String,

    /// Model endpoint base URL (overrides config file and environment)
    #[arg(long)]
    url: Option<String>,

    /// Model identifier (overrides config file and environment)
    #[arg(long)]
    model: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Skip the model and use the deterministic keyword extractor only
    #[arg(long)]
    offline: bool,

    /// Print the tags as a JSON array instead of one per line
    #[arg(long)]
    json: bool,

    /// Config file path (defaults to ~/.config/tagmint/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;
    env_logger::init();

    let cli = Cli::parse();
    validate_input(&cli.name, &cli.description)?;

    let config = resolve_config(&cli)?;
    let tags = suggest(&cli, &config)?;

    print_tags(&tags, cli.json)
}

/// Merge CLI flags over the loaded config
fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = config::load(cli.config.as_deref())?;

    if let Some(url) = &cli.url {
        config.model.url = url.clone();
    }
    if let Some(model) = &cli.model {
        config.model.model = model.clone();
    }
    if let Some(secs) = cli.timeout_secs {
        config.model.timeout_secs = secs;
    }

    Ok(config)
}

fn suggest(cli: &Cli, config: &Config) -> Result<TagList> {
    if cli.offline {
        return Ok(fallback_tags(&cli.name, &cli.description));
    }

    let client = OllamaClient::new(
        &config.model.url,
        Duration::from_secs(config.model.timeout_secs),
    )?;
    let suggester = TagSuggester::new(client, config.model.model.clone());

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    Ok(runtime.block_on(suggester.suggest(&cli.name, &cli.description)))
}

/// Enforce the request bounds before the core runs
fn validate_input(name: &str, description: &str) -> Result<(), TagmintError> {
    if name.trim().is_empty() {
        return Err(TagmintError::InvalidInput(
            "name must not be empty".to_string(),
        ));
    }
    if name.chars().count() > MAX_NAME_CHARS {
        return Err(TagmintError::InvalidInput(format!(
            "name must be at most {MAX_NAME_CHARS} characters"
        )));
    }
    if description.trim().is_empty() {
        return Err(TagmintError::InvalidInput(
            "description must not be empty".to_string(),
        ));
    }
    if description.chars().count() > MAX_DESCRIPTION_CHARS {
        return Err(TagmintError::InvalidInput(format!(
            "description must be at most {MAX_DESCRIPTION_CHARS} characters"
        )));
    }
    Ok(())
}

fn print_tags(tags: &TagList, json: bool) -> Result<()> {
    if json {
        // TagList serializes as a plain JSON array
        println!("{}", serde_json::to_string(tags)?);
    } else {
        for tag in tags.iter() {
            println!("{tag}");
        }
    }
    Ok(())
}
