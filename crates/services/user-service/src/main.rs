//! User Service - command-line entry point for account management.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use domain::{LoginRequest, RegisterRequest, UpdatePasswordRequest, UpdateProfileRequest};
use user_service_lib::{AccountCommand, MigrateAction};

#[derive(Parser)]
#[command(name = "user-service")]
#[command(about = "User account management")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Database migration commands
    Migrate {
        #[command(subcommand)]
        action: MigrateCommands,
    },
    /// Register a new user
    Register {
        #[arg(long)]
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        password: String,
    },
    /// Check a user's credentials
    Login {
        #[arg(long)]
        id: String,
        #[arg(long)]
        password: String,
    },
    /// Change a user's name
    UpdateProfile {
        #[arg(long)]
        id: String,
        #[arg(long)]
        name: String,
    },
    /// Change a user's password
    UpdatePassword {
        #[arg(long)]
        id: String,
        #[arg(long)]
        old_password: String,
        #[arg(long)]
        new_password: String,
    },
}

#[derive(Subcommand)]
enum MigrateCommands {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset database and run all migrations
    Fresh,
}

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose);

    let command = match cli.command {
        Commands::Migrate { action } => {
            let migrate_action = match action {
                MigrateCommands::Up => MigrateAction::Up,
                MigrateCommands::Down => MigrateAction::Down,
                MigrateCommands::Status => MigrateAction::Status,
                MigrateCommands::Fresh => MigrateAction::Fresh,
            };
            if let Err(e) = user_service_lib::run_migrations(migrate_action).await {
                tracing::error!("Migration failed: {}", e);
                std::process::exit(1);
            }
            return;
        }
        Commands::Register { id, name, password } => {
            AccountCommand::Register(RegisterRequest::new(id, name, password))
        }
        Commands::Login { id, password } => AccountCommand::Login(LoginRequest::new(id, password)),
        Commands::UpdateProfile { id, name } => {
            AccountCommand::UpdateProfile(UpdateProfileRequest::new(id, name))
        }
        Commands::UpdatePassword {
            id,
            old_password,
            new_password,
        } => AccountCommand::UpdatePassword(UpdatePasswordRequest::new(
            id,
            old_password,
            new_password,
        )),
    };

    match user_service_lib::run_account_command(command).await {
        Ok(profile) => match serde_json::to_string_pretty(&profile) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                tracing::error!("Failed to render result: {}", e);
                std::process::exit(1);
            }
        },
        Err(e) => {
            tracing::error!(code = e.code(), "Command failed: {}", e.user_message());
            std::process::exit(1);
        }
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
