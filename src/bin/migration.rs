use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dogfood_api::{config, db, migrator::Migrator};
use sea_orm_migration::MigratorTrait;
use tracing::info;

#[derive(Parser)]
#[command(name = "migration", about = "Manage the dog food inventory schema", version)]
struct Cli {
    /// Overrides the configured database URL
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending migrations (default)
    Up {
        /// Number of migrations to apply
        #[arg(short = 'n', long)]
        steps: Option<u32>,
    },
    /// Roll back applied migrations
    Down {
        /// Number of migrations to roll back
        #[arg(short = 'n', long, default_value_t = 1)]
        steps: u32,
    },
    /// Show which migrations have been applied
    Status,
    /// Drop every table and reapply all migrations
    Fresh,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut cfg = config::load_config().context("failed to load configuration")?;
    config::init_tracing(cfg.log_level(), cfg.log_json);
    if let Some(url) = cli.database_url {
        cfg.database_url = url;
    }

    let pool = db::establish_connection_from_app_config(&cfg)
        .await
        .context("failed to connect to database")?;

    match cli.command.unwrap_or(Commands::Up { steps: None }) {
        Commands::Up { steps } => {
            info!("Applying migrations");
            Migrator::up(&pool, steps).await?;
        }
        Commands::Down { steps } => {
            info!("Rolling back {} migration(s)", steps);
            Migrator::down(&pool, Some(steps)).await?;
        }
        Commands::Status => {
            Migrator::status(&pool).await?;
        }
        Commands::Fresh => {
            info!("Dropping all tables and reapplying migrations");
            Migrator::fresh(&pool).await?;
        }
    }

    db::close_pool(pool).await?;
    info!("Migration command completed successfully");
    Ok(())
}
