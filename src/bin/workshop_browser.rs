//! Headless workshop catalog browser.
//!
//! Builds a store (seeded unless `WORKSHOP_CATALOG_SEED=0`), applies any
//! drafts given with `--add-json`/`--add-file` in order, sets the search term
//! and category filter, then prints the query, the ids added, the visible
//! workshops (cards, or full records with `--full`), and the summary counts as
//! one JSON object on stdout.

use anyhow::{Context, Result, anyhow, bail};
use serde_json::{Value, json};
use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;
use workshop_catalog::logging::init_tracing;
use workshop_catalog::{CatalogConfig, CatalogStore, CatalogSummary, DraftSchema, visible_cards};

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = CatalogConfig::from_env();
    init_tracing(&config.log_filter);

    let args = CliArgs::parse(env::args_os().skip(1))?;
    let output = browse(&config, &args)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn browse(config: &CatalogConfig, args: &CliArgs) -> Result<Value> {
    let mut store = CatalogStore::from_config(config);

    let mut added = Vec::new();
    if !args.drafts.is_empty() {
        let schema = DraftSchema::bundled()?;
        for source in &args.drafts {
            let raw = source.read()?;
            let draft = schema
                .parse_draft(&raw)
                .with_context(|| format!("invalid draft from {}", source.describe()))?;
            let record = store
                .add_record(draft)
                .with_context(|| format!("rejected draft from {}", source.describe()))?;
            added.push(record.id);
        }
    }

    if let Some(term) = &args.search {
        store.set_search_term(term.as_str());
    }
    if let Some(category) = &args.category {
        store.set_category(category)?;
    }

    let visible = if args.full {
        serde_json::to_value(store.visible_records())?
    } else {
        serde_json::to_value(visible_cards(&store))?
    };

    Ok(json!({
        "query": store.query(),
        "added": added,
        "visible": visible,
        "summary": CatalogSummary::of(&store),
    }))
}

enum DraftSource {
    Inline(String),
    File(PathBuf),
}

impl DraftSource {
    fn read(&self) -> Result<String> {
        match self {
            DraftSource::Inline(raw) => Ok(raw.clone()),
            DraftSource::File(path) => {
                if !path.is_file() {
                    bail!("draft file not found: {}", path.display());
                }
                fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
            }
        }
    }

    fn describe(&self) -> String {
        match self {
            DraftSource::Inline(_) => "--add-json".to_string(),
            DraftSource::File(path) => path.display().to_string(),
        }
    }
}

#[derive(Default)]
struct CliArgs {
    search: Option<String>,
    category: Option<String>,
    drafts: Vec<DraftSource>,
    full: bool,
}

impl CliArgs {
    fn parse(mut args: impl Iterator<Item = OsString>) -> Result<Self> {
        let mut parsed = CliArgs::default();

        while let Some(arg_os) = args.next() {
            let arg = arg_os
                .into_string()
                .map_err(|_| anyhow!("argument is not valid UTF-8"))?;
            match arg.as_str() {
                "--search" => {
                    if parsed.search.is_some() {
                        bail!("--search may only be provided once");
                    }
                    parsed.search = Some(next_value(&mut args, "--search")?);
                }
                "--category" => {
                    if parsed.category.is_some() {
                        bail!("--category may only be provided once");
                    }
                    parsed.category = Some(next_value(&mut args, "--category")?);
                }
                "--add-json" => {
                    let raw = next_value(&mut args, "--add-json")?;
                    parsed.drafts.push(DraftSource::Inline(raw));
                }
                "--add-file" => {
                    let path = next_value(&mut args, "--add-file")?;
                    parsed.drafts.push(DraftSource::File(PathBuf::from(path)));
                }
                "--full" => parsed.full = true,
                "--help" | "-h" => {
                    print!("{}", usage());
                    std::process::exit(0);
                }
                other => bail!("unknown flag: {other}\n{}", usage()),
            }
        }

        Ok(parsed)
    }
}

fn next_value(args: &mut impl Iterator<Item = OsString>, flag: &str) -> Result<String> {
    args.next()
        .map(|os| {
            os.into_string()
                .map_err(|_| anyhow!("value for {flag} is not valid UTF-8"))
        })
        .transpose()?
        .ok_or_else(|| anyhow!("missing value for {flag}"))
}

fn usage() -> &'static str {
    "Usage: workshop-browser [--search TERM] [--category all|process-improvement|innovation|team-building|strategy]\n\
                        [--add-json JSON]... [--add-file PATH]... [--full]\n\
Drafts are added in order before the query is applied. Prints the visible workshops and summary counts as JSON.\n\
Environment: WORKSHOP_CATALOG_SEED=0 starts empty; WORKSHOP_CATALOG_STRICT_CATEGORIES=1 rejects unknown categories;\n\
WORKSHOP_CATALOG_LOG sets the log filter (logs go to stderr).\n"
}
