use std::path::PathBuf;

use clap::{Args, Subcommand};
use paperbloom_app::{
    context::{AppContext, AppOptions},
    domain::users::models::Role,
};
use zeroize::Zeroizing;

use crate::cli::JwtArgs;

#[derive(Debug, Args)]
pub(crate) struct UserCommand {
    #[command(subcommand)]
    command: UserSubcommand,
}

#[derive(Debug, Subcommand)]
enum UserSubcommand {
    /// Create an admin user
    Create(CreateUserArgs),
}

#[derive(Debug, Args)]
struct CreateUserArgs {
    /// Username for the new account
    #[arg(long)]
    username: String,

    /// Password for the new account
    #[arg(long, env = "ADMIN_PASSWORD")]
    password: String,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    /// Directory where uploaded product images are stored
    #[arg(long, env = "UPLOADS_DIR", default_value = "uploads")]
    uploads_dir: PathBuf,

    #[command(flatten)]
    jwt: JwtArgs,
}

pub(crate) async fn run(command: UserCommand) -> Result<(), String> {
    match command.command {
        UserSubcommand::Create(args) => create_user(args).await,
    }
}

async fn create_user(args: CreateUserArgs) -> Result<(), String> {
    let password = Zeroizing::new(args.password);

    let ctx = AppContext::from_database_url(
        &args.database_url,
        AppOptions {
            jwt: args.jwt.into(),
            uploads_dir: args.uploads_dir,
        },
    )
    .await
    .map_err(|error| format!("failed to initialise application: {error}"))?;

    let uuid = ctx
        .auth
        .create_user(&args.username, &password, Role::Admin)
        .await
        .map_err(|error| format!("failed to create user: {error}"))?;

    println!("user_uuid: {uuid}");
    println!("username: {}", args.username);

    Ok(())
}
