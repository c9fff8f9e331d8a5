use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use querybatch::{ParamValue, RequestModel, ServiceConfig, logging};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "querybatch", version, about = "Build and batch web service queries")]
struct Cli {
    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the URL of every batch
    Urls(ServiceArgs),
    /// Fetch every batch and print the extracted JSON
    Fetch(ServiceArgs),
}

#[derive(Args)]
struct ServiceArgs {
    /// Service definition (JSON)
    #[arg(short, long)]
    config: PathBuf,

    /// Set a scalar field: name=value
    #[arg(long = "set", value_name = "NAME=VALUE")]
    set: Vec<String>,

    /// Set a list field: name=a,b,c
    #[arg(long = "list", value_name = "NAME=A,B,C")]
    list: Vec<String>,

    /// Override the configured batch size
    #[arg(long)]
    batch_size: Option<usize>,

    /// Override the pause before each request, in milliseconds
    #[arg(long)]
    pause_ms: Option<u64>,
}

fn split_assignment(raw: &str) -> Result<(&str, &str)> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name, value)),
        _ => bail!("expected NAME=VALUE, got '{}'", raw),
    }
}

/// Items of a `--list` value; empty items are dropped
fn list_items(value: &str) -> Vec<&str> {
    value.split(',').filter(|s| !s.is_empty()).collect()
}

fn apply_batch_size(config: &mut ServiceConfig, size: Option<usize>) -> Result<()> {
    if let Some(size) = size {
        match config.batch.as_mut() {
            Some(batch) => batch.size = size,
            None => bail!("--batch-size given but the service defines no batch field"),
        }
    }
    Ok(())
}

/// Apply `--set` and `--list` assignments on top of the configured fields
fn apply_fields(model: &mut RequestModel, set: &[String], list: &[String]) -> Result<()> {
    for raw in set {
        let (name, value) = split_assignment(raw)?;
        model.set_field(name, value)?;
    }
    for raw in list {
        let (name, value) = split_assignment(raw)?;
        model.set_field(name, ParamValue::from(list_items(value)))?;
    }
    Ok(())
}

impl ServiceArgs {
    fn load(&self) -> Result<(ServiceConfig, RequestModel)> {
        let mut config = ServiceConfig::load(&self.config)
            .with_context(|| format!("Failed to load {}", self.config.display()))?;

        apply_batch_size(&mut config, self.batch_size)?;
        if let Some(ms) = self.pause_ms {
            config.pause_ms = Some(ms);
        }

        let mut model = config.request_model()?;
        apply_fields(&mut model, &self.set, &self.list)?;

        Ok((config, model))
    }
}

/// Batches of the model, or the model itself when the service is unbatched
fn requests<'a>(
    config: &ServiceConfig,
    model: &'a RequestModel,
) -> Result<Box<dyn ExactSizeIterator<Item = RequestModel> + 'a>> {
    match config.splitter() {
        Some((splitter, field)) => Ok(Box::new(splitter.split(model, &[field])?)),
        None => Ok(Box::new(std::iter::once(model.clone()))),
    }
}

fn print_urls(args: &ServiceArgs) -> Result<()> {
    let (config, model) = args.load()?;
    for request in requests(&config, &model)? {
        println!("{}", request.url()?);
    }
    Ok(())
}

fn fetch(args: &ServiceArgs) -> Result<()> {
    let (config, model) = args.load()?;
    let client = config.client()?;
    let batches = requests(&config, &model)?;

    info!(
        batches = batches.len(),
        pause = ?config.pause(),
        "Fetching {}",
        config.base_url
    );

    for (index, result) in client.get_batches(batches).enumerate() {
        let value = result.with_context(|| format!("Batch {} failed", index))?;
        println!("{}", serde_json::to_string_pretty(&value)?);
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(if cli.verbose { "debug" } else { "info" });

    match &cli.command {
        Command::Urls(args) => print_urls(args),
        Command::Fetch(args) => fetch(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SERVICE: &str = r#"{
        "base_url": "https://example.org/api",
        "params": [
            {"name": "q", "kind": "simple"},
            {"name": "id", "kind": "multi", "delimiter": ","}
        ],
        "batch": {"field": "id", "size": 10}
    }"#;

    fn strings(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_split_assignment() {
        assert_eq!(split_assignment("q=cats").unwrap(), ("q", "cats"));
        assert_eq!(split_assignment("q=a=b").unwrap(), ("q", "a=b"));
        assert_eq!(split_assignment("q=").unwrap(), ("q", ""));
        assert!(split_assignment("=v").is_err());
        assert!(split_assignment("novalue").is_err());
    }

    #[test]
    fn test_list_items_drop_empty() {
        assert_eq!(list_items("1,,2,"), vec!["1", "2"]);
        assert!(list_items("").is_empty());
    }

    #[test]
    fn test_apply_fields() {
        let config = ServiceConfig::from_json(SERVICE).unwrap();
        let mut model = config.request_model().unwrap();

        apply_fields(&mut model, &strings(&["q=big cats"]), &strings(&["id=3,,4"])).unwrap();
        assert_eq!(
            model.url().unwrap(),
            "https://example.org/api?q=big+cats&id=3%2C4"
        );

        let err = apply_fields(&mut model, &strings(&["nope=1"]), &[]).unwrap_err();
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn test_apply_batch_size() {
        let mut config = ServiceConfig::from_json(SERVICE).unwrap();
        apply_batch_size(&mut config, Some(3)).unwrap();
        assert_eq!(config.batch.as_ref().unwrap().size, 3);

        apply_batch_size(&mut config, None).unwrap();
        assert_eq!(config.batch.as_ref().unwrap().size, 3);
    }

    #[test]
    fn test_batch_size_without_batch_section() {
        let mut config =
            ServiceConfig::from_json(r#"{"base_url": "https://example.org", "params": []}"#)
                .unwrap();
        let err = apply_batch_size(&mut config, Some(5)).unwrap_err();
        assert!(err.to_string().contains("no batch field"));
    }
}
