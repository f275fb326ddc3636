use clap::{Args, Parser, Subcommand};
use paperbloom_app::auth::JwtConfig;

mod db;
mod user;

#[derive(Debug, Parser)]
#[command(name = "paperbloom-app", about = "Paperbloom CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    User(user::UserCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::User(command) => user::run(command).await,
        }
    }
}

/// Token signing settings shared by subcommands that build the full
/// application context.
#[derive(Debug, Args)]
pub(crate) struct JwtArgs {
    /// Secret used to sign admin tokens
    #[arg(long, env = "JWT_SECRET")]
    jwt_secret: String,

    /// Issuer claim written into tokens
    #[arg(long, env = "JWT_ISSUER", default_value = "paperbloom")]
    jwt_issuer: String,

    /// Audience claim written into tokens
    #[arg(long, env = "JWT_AUDIENCE", default_value = "paperbloom-storefront")]
    jwt_audience: String,

    /// Token lifetime in seconds
    #[arg(long, env = "JWT_TTL_SECONDS", default_value_t = 3600)]
    jwt_ttl_seconds: i64,
}

impl From<JwtArgs> for JwtConfig {
    fn from(args: JwtArgs) -> Self {
        Self {
            secret: args.jwt_secret,
            issuer: args.jwt_issuer,
            audience: args.jwt_audience,
            ttl_seconds: args.jwt_ttl_seconds,
        }
    }
}
