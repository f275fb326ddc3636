use std::path::PathBuf;

use clap::{Args, Subcommand};
use paperbloom_app::{
    context::{AppContext, AppOptions},
    database, seed,
};
use zeroize::Zeroizing;

use crate::cli::JwtArgs;

#[derive(Debug, Args)]
pub(crate) struct DbCommand {
    #[command(subcommand)]
    command: DbSubcommand,
}

#[derive(Debug, Subcommand)]
enum DbSubcommand {
    /// Run pending database migrations
    Migrate(MigrateArgs),

    /// Seed the admin user and starter catalog when the tables are empty
    Seed(SeedArgs),
}

#[derive(Debug, Args)]
struct MigrateArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,
}

#[derive(Debug, Args)]
struct SeedArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    /// Username for the seeded admin account
    #[arg(long, env = "ADMIN_USERNAME", default_value = "admin")]
    admin_username: String,

    /// Password for the seeded admin account
    #[arg(long, env = "ADMIN_PASSWORD")]
    admin_password: String,

    /// Directory where uploaded product images are stored
    #[arg(long, env = "UPLOADS_DIR", default_value = "uploads")]
    uploads_dir: PathBuf,

    #[command(flatten)]
    jwt: JwtArgs,
}

pub(crate) async fn run(command: DbCommand) -> Result<(), String> {
    match command.command {
        DbSubcommand::Migrate(args) => migrate(args).await,
        DbSubcommand::Seed(args) => run_seed(args).await,
    }
}

async fn migrate(args: MigrateArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    database::migrate(&pool)
        .await
        .map_err(|error| format!("failed to run migrations: {error}"))?;

    println!("migrations applied");

    Ok(())
}

async fn run_seed(args: SeedArgs) -> Result<(), String> {
    let admin_password = Zeroizing::new(args.admin_password);

    let ctx = AppContext::from_database_url(
        &args.database_url,
        AppOptions {
            jwt: args.jwt.into(),
            uploads_dir: args.uploads_dir,
        },
    )
    .await
    .map_err(|error| format!("failed to initialise application: {error}"))?;

    seed::seed(&ctx, &args.admin_username, &admin_password)
        .await
        .map_err(|error| format!("failed to seed database: {error}"))?;

    println!("seed complete");

    Ok(())
}
