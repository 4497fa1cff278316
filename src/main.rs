//! Leadbook CLI
//!
//! Command-line interface over a file-backed lead store:
//! - Add, update, delete and inspect leads
//! - Print and resolve the route table
//! - Generate a default config file

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use leadbook::config::{generate_default_config, Config};
use leadbook::routes::RouteTable;
use leadbook::{FileStorage, Lead, LeadId, LeadStore};
use serde_json::Value;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "leadbook")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Track sales leads in a local store")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Data directory, overrides the config file
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Output format (table, json)
    #[arg(long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a lead (duplicates are allowed)
    Add {
        /// Lead id (integers are stored as numbers)
        id: String,
        /// Fields in key=value format; values are parsed as JSON when valid
        #[arg(short = 'f', long = "field")]
        fields: Vec<String>,
    },

    /// List all leads
    List,

    /// Show one lead
    Get {
        id: String,
    },

    /// Merge fields into an existing lead
    Update {
        id: String,
        #[arg(short = 'f', long = "field")]
        fields: Vec<String>,
    },

    /// Delete every lead with this id
    Delete {
        id: String,
    },

    /// Print the route table
    Routes,

    /// Resolve a URL path against the route table
    Resolve {
        path: String,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(data_dir) = &cli.data_dir {
        config.storage.data_dir = data_dir.clone();
    }

    leadbook::logging::init(&config.logging);
    tracing::debug!("Leadbook v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Add { id, fields } => {
            let lead = build_lead(&id, &fields)?;
            let mut store = open_store(&config)?;
            store.add_lead(lead)?;
            println!("Added lead {} ({} total)", id, store.len());
        }

        Commands::List => {
            let store = open_store(&config)?;
            print_leads(store.leads(), &cli.format)?;
        }

        Commands::Get { id } => {
            let store = open_store(&config)?;
            let lead_id = LeadId::from_input(&id);
            match store.get_lead_by_id(&lead_id) {
                Some(lead) => print_leads(std::slice::from_ref(lead), &cli.format)?,
                None => bail!("No lead with id {}", id),
            }
        }

        Commands::Update { id, fields } => {
            let update = build_lead(&id, &fields)?;
            let mut store = open_store(&config)?;
            if !store.update_lead(update)? {
                bail!("No lead with id {}", id);
            }
            println!("Updated lead {}", id);
        }

        Commands::Delete { id } => {
            let mut store = open_store(&config)?;
            let removed = store.delete_lead(&LeadId::from_input(&id))?;
            println!("Deleted {} lead(s) with id {}", removed, id);
        }

        Commands::Routes => {
            let table = RouteTable::standard()?;
            for entry in table.entries() {
                let indent = "  ".repeat(entry.depth);
                let path = format!("{}{}", indent, entry.path);
                println!("{:<24} {}", path, entry.page);
            }
        }

        Commands::Resolve { path } => {
            let table = RouteTable::standard()?;
            let Some(found) = table.resolve(&path) else {
                bail!("No route matches {}", path);
            };

            if cli.format == "json" {
                let pages: Vec<&str> = found.pages.iter().map(|p| p.name()).collect();
                let body = serde_json::json!({ "pages": pages, "params": found.params });
                println!("{}", serde_json::to_string_pretty(&body)?);
            } else {
                let chain: Vec<&str> = found.pages.iter().map(|p| p.name()).collect();
                println!("{}", chain.join(" > "));
                for (name, value) in &found.params {
                    println!("  {} = {}", name, value);
                }
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn open_store(config: &Config) -> anyhow::Result<LeadStore<FileStorage>> {
    let dir = expand_home(&config.storage.data_dir);
    let storage = FileStorage::open(&dir)
        .with_context(|| format!("Failed to open data directory {:?}", dir))?;
    let store = LeadStore::open(storage, config.storage.store_options())?;
    Ok(store)
}

fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}

fn build_lead(id: &str, fields: &[String]) -> anyhow::Result<Lead> {
    let mut lead = Lead::new(LeadId::from_input(id));
    for field in fields {
        let Some((key, raw)) = field.split_once('=') else {
            bail!("Invalid field {:?}, expected key=value", field);
        };
        if key == "id" {
            bail!("The id is given as the first argument, not as a field");
        }
        let value = serde_json::from_str::<Value>(raw).unwrap_or_else(|_| Value::from(raw));
        lead.set(key, value);
    }
    Ok(lead)
}

fn print_leads(leads: &[Lead], format: &str) -> anyhow::Result<()> {
    if format == "json" {
        println!("{}", serde_json::to_string_pretty(leads)?);
        return Ok(());
    }

    if leads.is_empty() {
        println!("No leads");
        return Ok(());
    }

    println!("{:<12} FIELDS", "ID");
    for lead in leads {
        let fields: Vec<String> = lead
            .fields
            .iter()
            .map(|(k, v)| match v {
                Value::String(s) => format!("{}={}", k, s),
                other => format!("{}={}", k, other),
            })
            .collect();
        println!("{:<12} {}", lead.id.to_string(), fields.join(" "));
    }
    Ok(())
}
