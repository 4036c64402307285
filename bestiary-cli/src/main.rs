use std::{
    fs::{self, File},
    path::{Path, PathBuf},
    sync::Mutex,
};

use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr, eyre};
use serde_json::json;
use tracing_subscriber::EnvFilter;

use bestiary::{
    Bestiary, CatalogStore, Entry, EntryId, FileSettings, FileSource, UiOptions,
    domain::{GuideNode, labels},
    io::{DocumentFormat, OutputDestination, write_document},
    parse_guide,
    settings::default_settings_path,
};

const DEFAULT_DATA_FILE: &str = "data.json";

#[derive(Debug, Parser)]
#[command(
    name = "bestiary",
    version,
    about = "Browse a monster catalog in the terminal"
)]
struct Cli {
    /// Catalog document (JSON, or YAML/TOML when enabled)
    #[arg(short = 'd', long = "data", value_name = "PATH", default_value = DEFAULT_DATA_FILE)]
    data: PathBuf,

    /// Where display preferences are stored
    #[arg(long = "settings", value_name = "PATH", conflicts_with = "no_persist")]
    settings: Option<PathBuf>,

    /// Keep preferences in memory for this session only
    #[arg(long = "no-persist")]
    no_persist: bool,

    /// Replace the default key bindings with a JSON keymap
    #[arg(long = "keymap", value_name = "PATH")]
    keymap: Option<PathBuf>,

    /// Title shown in the tab bar
    #[arg(long = "title", value_name = "TEXT")]
    title: Option<String>,

    /// Write logs to this file while the browser is open
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print every entry in catalog order
    List,
    /// Print one entry with its parsed guide
    Show {
        /// Entry id
        id: i64,
        /// Emit JSON instead of text
        #[arg(long = "json")]
        json: bool,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    match cli.command {
        None => {
            init_logging(cli.verbose, LogTarget::for_tui(cli.log_file.as_deref())?);
            run_browser(&cli)
        }
        Some(ref command) => {
            init_logging(cli.verbose, LogTarget::Stderr);
            let store = load_catalog(&cli.data)?;
            match command {
                Command::List => print_list(&store),
                Command::Show { id, json } => print_entry(&store, EntryId(*id), *json),
            }
        }
    }
}

enum LogTarget {
    Stderr,
    File(File),
    Discard,
}

impl LogTarget {
    fn for_tui(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(LogTarget::Discard);
        };
        let file = File::create(path)
            .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;
        Ok(LogTarget::File(file))
    }
}

fn init_logging(verbose: u8, target: LogTarget) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    match target {
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init(),
        LogTarget::File(file) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init(),
        LogTarget::Discard => {}
    }
}

fn run_browser(cli: &Cli) -> Result<()> {
    let mut options = UiOptions::default();
    if let Some(path) = cli.keymap.as_deref() {
        let source = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read keymap {}", path.display()))?;
        options = options
            .with_keymap_json(&source)
            .map_err(|err| eyre!("invalid keymap {}: {err:#}", path.display()))?;
    }

    let mut browser = Bestiary::new(FileSource::new(&cli.data)).with_options(options);
    if let Some(title) = cli.title.as_ref() {
        browser = browser.with_title(title.clone());
    }
    if !cli.no_persist {
        match cli.settings.clone().or_else(default_settings_path) {
            Some(path) => {
                let store = FileSettings::open(path);
                tracing::debug!(path = %store.path().display(), "persisting preferences");
                browser = browser.with_settings(Box::new(store));
            }
            None => tracing::warn!("no settings location available; preferences stay in memory"),
        }
    }

    browser.run().map_err(|err| eyre!("{err:#}"))
}

fn load_catalog(path: &Path) -> Result<CatalogStore> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .wrap_err("failed to start runtime")?;
    let source = FileSource::new(path);
    tracing::debug!(path = %source.path().display(), "loading catalog");
    runtime
        .block_on(CatalogStore::load(&source))
        .map_err(|err| eyre!(labels::load_failed(&err.message())))
}

fn print_list(store: &CatalogStore) -> Result<()> {
    if store.is_empty() {
        println!("{}", labels::NO_ENTRIES);
        return Ok(());
    }
    for entry in store.entries() {
        println!("{} {}", entry.list_label(), entry.star);
    }
    Ok(())
}

fn print_entry(store: &CatalogStore, id: EntryId, as_json: bool) -> Result<()> {
    let entry = store
        .find_by_id(id)
        .ok_or_else(|| eyre!("no entry with id {id}"))?;
    let guide = parse_guide(&entry.detail.guide_lines);

    if as_json {
        let document = json!({
            "entry": entry,
            "basic": entry.basic_rows(),
            "guide": guide,
        });
        return write_document(&document, DocumentFormat::Json, true, &OutputDestination::Stdout)
            .map_err(|err| eyre!("{err:#}"));
    }

    print_text(entry, &guide.nodes);
    Ok(())
}

fn print_text(entry: &Entry, nodes: &[GuideNode]) {
    println!("{}", entry.list_label());
    println!();
    println!("[{}]", labels::BASIC_INFO_TITLE);
    for (key, value) in entry.basic_rows() {
        println!("  {key}: {value}");
    }
    println!();
    println!("[{}]", entry.detail_title());
    for node in nodes {
        match node {
            GuideNode::Block(block) => {
                println!("  {}", block.title);
                for item in &block.items {
                    println!("    - {}", item.plain());
                }
            }
            GuideNode::Paragraph { text } => println!("  {}", text.plain()),
            GuideNode::Pending => println!("  {}", GuideNode::pending_text()),
        }
    }
}
