// StudyPalz - CLI Command Handlers
//
// Each function handles one subcommand. They build a credential store from
// the resolved config and report results on stdout.

use std::io;
use std::path::Path;

use zeroize::Zeroizing;

use crate::config::Config;
use crate::error::AppError;
use crate::store::{ClassLabel, CredentialStore, SqliteCredentialStore};
use crate::ui::{self, App, ABOUT_TEXT};

use super::{Cli, Commands};

/// Execute the parsed CLI command.
pub fn execute(cli: Cli, mut config: Config) -> Result<(), AppError> {
    if let Some(db) = cli.db {
        config.database.path = Some(db);
    }

    match cli.command {
        Commands::Init => cmd_init(&config),
        Commands::Register {
            username,
            email,
            password,
            class,
        } => cmd_register(&config, username, email, Zeroizing::new(password), class),
        Commands::Login { username, password } => {
            cmd_login(&config, username, Zeroizing::new(password))
        }
        Commands::Whoami { username, json } => cmd_whoami(&config, username, json),
        Commands::Status => cmd_status(&config),
        Commands::App => cmd_app(&config),
        Commands::About => {
            println!("About StudyPalz\n");
            println!("{}", ABOUT_TEXT);
            Ok(())
        }
    }
}

// ─── Init ────────────────────────────────────────────────────────────────────

fn cmd_init(config: &Config) -> Result<(), AppError> {
    let store = create_store(config)?;

    println!("✓ StudyPalz initialized");
    println!("  Database: {}", store.path().display());
    println!();
    println!("Next: create an account with `studypalz register` or run `studypalz app`");

    Ok(())
}

// ─── Register / Login ────────────────────────────────────────────────────────

fn cmd_register(
    config: &Config,
    username: String,
    email: String,
    password: Zeroizing<String>,
    class: String,
) -> Result<(), AppError> {
    // An empty class is left for the store to reject, like any other empty field.
    let class = match class.as_str() {
        "" => "",
        other => other.parse::<ClassLabel>().map_err(AppError::Other)?.as_str(),
    };

    let store = open_store(config)?;
    store.register(&username, &email, &password, class)?;

    println!("✓ Account created!");
    println!("  Username: {}", username);
    println!("  Class:    {}", class);

    Ok(())
}

fn cmd_login(
    config: &Config,
    username: String,
    password: Zeroizing<String>,
) -> Result<(), AppError> {
    let store = open_store(config)?;
    store.login(&username, &password)?;

    println!("✓ Welcome, {}!", username);
    Ok(())
}

// ─── Whoami / Status ─────────────────────────────────────────────────────────

fn cmd_whoami(config: &Config, username: String, json: bool) -> Result<(), AppError> {
    let store = open_store(config)?;

    match store.profile(&username)? {
        Some(profile) if json => println!("{}", serde_json::to_string_pretty(&profile)?),
        Some(profile) => {
            println!("User details:\n");
            println!("  ID:       {}", profile.id);
            println!("  Username: {}", profile.username);
            println!("  Email:    {}", profile.email);
            println!("  Class:    {}", profile.class_label);
        }
        None => println!("User not found: {}", username),
    }

    Ok(())
}

fn cmd_status(config: &Config) -> Result<(), AppError> {
    let store = open_store(config)?;
    let users = store.count()?;

    println!("Database: {}", store.path().display());
    println!("Users:    {}", users);
    Ok(())
}

// ─── App ─────────────────────────────────────────────────────────────────────

fn cmd_app(config: &Config) -> Result<(), AppError> {
    let store = create_store(config)?;
    let mut app = App::new(store);

    let stdin = io::stdin();
    ui::run(&mut app, stdin.lock(), io::stdout())?;
    Ok(())
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// Open the store, creating the database directory and table if needed.
fn create_store(config: &Config) -> Result<SqliteCredentialStore, AppError> {
    let store_config = config.store_config();
    if let Some(parent) = store_config.path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let store = SqliteCredentialStore::new(store_config);
    store.initialize()?;
    Ok(store)
}

/// Open an existing store. Fails if `init` has never been run.
fn open_store(config: &Config) -> Result<SqliteCredentialStore, AppError> {
    let store_config = config.store_config();
    ensure_exists(&store_config.path)?;
    Ok(SqliteCredentialStore::new(store_config))
}

fn ensure_exists(path: &Path) -> Result<(), AppError> {
    if path.exists() {
        return Ok(());
    }
    Err(AppError::Other(format!(
        "Database not found at {}. Run `studypalz init` first.",
        path.display()
    )))
}
