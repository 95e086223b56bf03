use bookshelf::config::db::{DbOwner, DbProfile};
use bookshelf::infra::db::connect_db;
use clap::{Parser, ValueEnum};
use migration::{migrate, MigrationCommand};

#[derive(Clone, ValueEnum)]
enum Env {
    Prod,
    Test,
}

#[derive(Parser)]
#[command(name = "migration-cli")]
#[command(about = "Bookshelf database migration tool")]
struct Args {
    /// Migration command to run: up | down | fresh | reset | refresh | status
    command: String,

    /// Runtime environment
    #[arg(short, long, value_enum, default_value = "test")]
    env: Env,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .without_time()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_line_number(false)
        .with_file(false)
        .with_env_filter("migration=info,sqlx=warn")
        .init();

    let args = Args::parse();

    let command = match args.command.parse::<MigrationCommand>() {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    // In-memory databases vanish when the process exits, so only Postgres
    // profiles are reachable from the CLI.
    let profile = match args.env {
        Env::Prod => DbProfile::Prod,
        Env::Test => DbProfile::Test,
    };

    // Owner privileges: migrations create and drop tables
    let db = match connect_db(profile.clone(), DbOwner::Owner).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("❌ Failed to connect to database ({profile:?}): {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = migrate(&db, command).await {
        eprintln!("Migration failed: {e}");
        std::process::exit(1);
    }
}
