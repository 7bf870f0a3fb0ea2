//! `musician-api` CLI entry-point.
//!
//! Available sub-commands:
//! - `serve`    — start the API server.
//! - `migrate`  — apply the embedded database migrations.
//! - `seed`     — reset the database to the seed data.
//! - `validate` — validate a JSON file of musician candidates.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "musician-api",
    about = "REST API for musicians and bands",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct DatabaseArgs {
    /// SQLite connection URL, e.g. `sqlite://musicians.db` or `sqlite::memory:`.
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://musicians.db")]
    database_url: String,
    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = 5)]
    max_connections: u32,
}

#[derive(Subcommand)]
enum Command {
    /// Start the REST API server.
    Serve {
        #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:3000")]
        bind: String,
        #[command(flatten)]
        database: DatabaseArgs,
    },
    /// Apply pending database migrations.
    Migrate {
        #[command(flatten)]
        database: DatabaseArgs,
    },
    /// Wipe the database and load the seed musicians and bands.
    Seed {
        #[command(flatten)]
        database: DatabaseArgs,
    },
    /// Validate a JSON array of `{name, instrument}` objects.
    Validate {
        /// Path to the JSON file.
        path: std::path::PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { bind, database } => {
            let pool = open(&database).await?;
            info!("Starting API server on {bind}");
            let served = api::serve(&bind, pool.clone()).await;
            db::pool::close_pool(pool).await;
            served.with_context(|| format!("server on {bind} failed"))?;
        }
        Command::Migrate { database } => {
            let pool = open(&database).await?;
            info!("Migrations applied successfully");
            db::pool::close_pool(pool).await;
        }
        Command::Seed { database } => {
            let pool = open(&database).await?;
            let report = db::seed::seed(&pool).await.context("seeding failed")?;
            println!(
                "Seeded {} musicians, {} bands, {} memberships",
                report.musicians, report.bands, report.memberships
            );
            db::pool::close_pool(pool).await;
        }
        Command::Validate { path } => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("cannot read file {}", path.display()))?;

            let candidates: Vec<catalog::MusicianInput> =
                serde_json::from_str(&content).context("invalid JSON")?;

            let mut failed = 0;
            for (index, candidate) in candidates.iter().enumerate() {
                match catalog::validate_musician(candidate) {
                    Ok(draft) => println!("✅ #{index}: {} ({})", draft.name, draft.instrument),
                    Err(err) => {
                        failed += 1;
                        eprintln!("❌ #{index}: invalid {}", err.paths().join(", "));
                        for violation in &err.violations {
                            eprintln!("   {}", violation.msg);
                        }
                    }
                }
            }

            if failed > 0 {
                eprintln!("{failed} of {} entries failed validation", candidates.len());
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

/// Connect and bring the schema up to date.
async fn open(args: &DatabaseArgs) -> anyhow::Result<db::DbPool> {
    let pool = db::pool::create_pool(&args.database_url, args.max_connections)
        .await
        .with_context(|| format!("failed to connect to {}", args.database_url))?;
    db::pool::run_migrations(&pool)
        .await
        .context("migration failed")?;
    Ok(pool)
}
