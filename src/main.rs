//! Boothbook CLI - serve and inspect the conference companies database

use boothbook::config::{self, ServerSettings, SettingsOverrides};
use boothbook::storage::CompanyStore;
use boothbook::ui::{self, Icons};
use boothbook::{Company, CompanyFilter, Error, Rarity};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "boothbook")]
#[command(version)]
#[command(about = "Conference exhibitor notebook - JSON API over a SQLite companies table")]
#[command(long_about = r#"
Boothbook serves the companies table of a conference notebook as a JSON API,
together with the bundled front-end.

The database file is looked up in the working directory unless given:
  sqlite, sqlite.db, sqlite.sqlite, sqlite.sqlite3, conference.db, companies.db,
  database.db, db.sqlite3, database.sqlite, then any *.db / *.sqlite / *.sqlite3.

Example usage:
  boothbook serve --port 3000
  boothbook check
  boothbook list --search robo --priority tak
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,

        /// Directory with index.html and static assets
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },

    /// Check the database file and the companies table
    Check {
        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },

    /// Show company statistics
    Stats {
        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },

    /// List companies
    List {
        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,

        /// Text to search for
        #[arg(short, long)]
        search: Option<String>,

        /// Field to search in (company, stand)
        #[arg(long)]
        search_by: Option<String>,

        /// Priority filter (tak/yes/1/true/warto, nie/no/0/false, or an exact value)
        #[arg(long)]
        priority: Option<String>,
    },

    /// Create an empty database file with the companies table
    Init {
        /// Path to the database file
        #[arg(short, long, default_value = "companies.db")]
        database: PathBuf,
    },
}

/// Settings for commands that only need the database path.
fn settings_for(cli_config: Option<&Path>, database: Option<PathBuf>) -> anyhow::Result<ServerSettings> {
    let file_config = config::load_config(cli_config)?;
    let cwd = std::env::current_dir()?;
    Ok(ServerSettings::resolve(
        SettingsOverrides {
            database,
            ..Default::default()
        },
        file_config,
        &cwd,
    ))
}

fn rarity_counts(companies: &[Company]) -> Vec<(Rarity, usize)> {
    [Rarity::High, Rarity::Medium, Rarity::Low]
        .into_iter()
        .map(|rarity| (rarity, companies.iter().filter(|c| c.rarity == rarity).count()))
        .collect()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Serve { host, port, database, static_dir } => {
            let file_config = config::load_config(config_path)?;
            let cwd = std::env::current_dir()?;
            let settings = ServerSettings::resolve(
                SettingsOverrides { host, port, database, static_dir },
                file_config,
                &cwd,
            );
            boothbook::server::start_server(&settings).await?;
        }

        Commands::Check { database } => {
            let settings = settings_for(config_path, database)?;
            let store = CompanyStore::new(&settings.database);

            ui::header("Database check");
            ui::info("Database", &store.path().display().to_string());

            match boothbook::server::startup_check(&store) {
                Ok(probe) => {
                    ui::section("Columns");
                    for column in &probe.columns {
                        ui::summary_row(&column.name, &ui::dim(&column.column_type));
                    }
                    println!();
                    ui::success(&format!("{} companies in database", probe.count));
                }
                Err(Error::SchemaMismatch { table, available }) => {
                    ui::warn(&format!("Table '{}' does not exist", table));
                    ui::section("Tables present");
                    for name in &available {
                        ui::summary_row("-", name);
                    }
                    anyhow::bail!("database has no '{}' table", table);
                }
                Err(e) => {
                    ui::error(&e.to_string());
                    ui::info("Hint", "place a file named 'sqlite' or ending in .db/.sqlite/.sqlite3 here");
                    return Err(e.into());
                }
            }
        }

        Commands::Stats { database } => {
            let settings = settings_for(config_path, database)?;
            let store = CompanyStore::new(&settings.database);
            let stats = store.stats()?;

            println!("{} Company Statistics ({})", Icons::STATS, store.path().display());
            println!("{}", ui::stats_table(&stats));
        }

        Commands::List { database, search, search_by, priority } => {
            let settings = settings_for(config_path, database)?;
            let store = CompanyStore::new(&settings.database);
            let filter = CompanyFilter::new(search.as_deref(), search_by.as_deref(), priority.as_deref());

            let companies: Vec<Company> = store.list(&filter)?.iter().map(Company::from).collect();
            if companies.is_empty() {
                println!("{} No companies found.", Icons::CROSS);
            } else {
                println!("{}", ui::companies_table(&companies));
                ui::rarity_summary(&rarity_counts(&companies));
            }
        }

        Commands::Init { database } => {
            config::ensure_db_dir(&database)?;
            let store = CompanyStore::new(&database);
            store.create_schema()?;
            println!("{} Database ready: {}", Icons::DATABASE, database.display());
        }
    }

    Ok(())
}
