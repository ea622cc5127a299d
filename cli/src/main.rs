mod app;
mod config;
mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pokedex_client::PokeApiClient;
use pokedex_core::EffectivenessProfile;
use pokedex_core::UpsertOutcome;
use pokedex_store::DataDir;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use app::{Pokedex, TypeSource, lookup_creature, sync_types};
use config::Config;

#[derive(Parser)]
#[command(author, version, about = "Personal Pokedex backed by PokeAPI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// PokeAPI base URL (overrides POKEDEX_API_URL).
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Directory holding the CSV tables (overrides POKEDEX_DATA_DIR).
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Resolve types with the built-in chart instead of PokeAPI.
    #[arg(long, global = true)]
    offline: bool,

    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a Pokémon's types, weaknesses, resistances and advantages.
    Info {
        name: String,
        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Resolve one or two types directly.
    Matchup {
        #[arg(required = true, num_args = 1..=2)]
        types: Vec<String>,
    },
    /// Save Pokémon to the Pokedex and record their stats.
    Add {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// List every saved Pokémon.
    List,
    /// Show a Pokémon's base stats.
    Stats { name: String },
    /// Rank recorded Pokémon by total base stats.
    Ranking,
    /// Download the type table into types.csv.
    SyncTypes {
        /// Re-download even if types.csv exists.
        #[arg(long)]
        force: bool,
    },
    /// Delete all saved tables.
    Clear,
}

#[derive(Serialize)]
struct InfoJson<'a> {
    name: &'a str,
    sprite: Option<&'a str>,
    #[serde(flatten)]
    profile: &'a EffectivenessProfile,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::from_env()?.with_overrides(cli.api_url, cli.data_dir)?;
    tracing::debug!(?config, "configuration loaded");

    let data = DataDir::new(&config.data_dir);
    let client = PokeApiClient::with_timeout(&config.api_url, config.timeout)?;

    match cli.command {
        Commands::List => {
            let entries = data.open_entries()?;
            print!("{}", render::entries(&entries.list_all()));
        }
        Commands::Ranking => {
            let stats = data.open_stats()?;
            print!("{}", render::ranking(&stats.ranked_totals()));
        }
        Commands::Clear => {
            let removed = data.clear()?;
            if removed.is_empty() {
                println!("There were no saved tables to clear.");
            } else {
                for path in removed {
                    println!("Removed {}", path.display());
                }
            }
        }
        Commands::SyncTypes { force } => {
            let table = sync_types(&client, &data, force).await?;
            println!("{} types in {}", table.len(), data.types_file().path().display());
        }
        Commands::Stats { name } => {
            let creature = lookup_creature(&client, &name).await?;
            print!("{}", render::base_stats(&creature.name, &creature.stats));
        }
        Commands::Info { name, json } => {
            let pokedex = open_pokedex(client, &data, cli.offline).await?;
            let info = match pokedex.info(&name).await {
                Err(err) if err.is_not_found() => {
                    println!("{}", not_found_message(&name, &err));
                    return Ok(());
                }
                other => other?,
            };
            if json {
                let out = InfoJson {
                    name: &info.creature.name,
                    sprite: info.creature.sprite.as_deref(),
                    profile: &info.profile,
                };
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                print!("{}", render::info(&info));
            }
        }
        Commands::Matchup { types } => {
            let pokedex = open_pokedex(client, &data, cli.offline).await?;
            let profile = pokedex.matchup(&types).await?;
            print!("{}", render::profile(&profile));
        }
        Commands::Add { names } => {
            let pokedex = open_pokedex(client, &data, cli.offline).await?;
            let mut failed = 0;
            for name in &names {
                match pokedex.add(name).await {
                    Ok(report) => {
                        let verb = match report.outcome {
                            UpsertOutcome::Inserted => "Saved",
                            UpsertOutcome::Skipped => "Already saved",
                        };
                        println!(
                            "{} {} (total stats {})",
                            verb,
                            render::display_name(&report.name),
                            report.total
                        );
                    }
                    Err(err) if err.is_not_found() => {
                        failed += 1;
                        println!("{}", not_found_message(name, &err));
                    }
                    Err(err) => {
                        return Err(err).with_context(|| format!("Failed to save {}", name));
                    }
                }
            }
            println!(
                "{} Pokémon saved, {} stat records",
                pokedex.entries().len(),
                pokedex.stats().len()
            );
            if failed > 0 {
                anyhow::bail!("{} of {} Pokémon could not be saved", failed, names.len());
            }
        }
    }

    Ok(())
}

async fn open_pokedex(client: PokeApiClient, data: &DataDir, offline: bool) -> Result<Pokedex> {
    let source = TypeSource::prepare(&client, data, offline).await?;
    Ok(Pokedex::new(client, source, data)?)
}

fn not_found_message(name: &str, err: &pokedex_core::Error) -> String {
    match err {
        pokedex_core::Error::TypeNotFound(t) => format!(
            "{} has a type ({}) missing from the type table; try sync-types --force.",
            render::display_name(name),
            t
        ),
        _ => format!(
            "No information was found for the Pokémon {}.",
            render::display_name(name)
        ),
    }
}
