// StudyPalz - CLI Module
//
// Command-line interface using clap derive macros.
// Subcommands: init, register, login, whoami, status, app, about.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::execute;

/// StudyPalz - register, log in, and keep track of your studies.
#[derive(Parser, Debug)]
#[command(name = "studypalz")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to a TOML config file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Database file (overrides the config file).
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the database and the users table.
    Init,

    /// Register a new account.
    Register {
        #[arg(long)]
        username: String,

        #[arg(long)]
        email: String,

        /// Prefer the interactive `app` to keep passwords out of shell history.
        #[arg(long)]
        password: String,

        /// One of "11th Grade", "12th Grade", "1st Year".
        #[arg(long)]
        class: String,
    },

    /// Check a username and password.
    Login {
        #[arg(long)]
        username: String,

        #[arg(long)]
        password: String,
    },

    /// Show a user's profile.
    Whoami {
        username: String,

        /// Print the profile as JSON.
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Show the database location and number of users.
    Status,

    /// Start the interactive terminal app.
    App,

    /// About StudyPalz.
    About,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_register() {
        let cli = Cli::try_parse_from([
            "studypalz",
            "--db",
            "/tmp/x.db",
            "register",
            "--username",
            "alice",
            "--email",
            "alice@example.com",
            "--password",
            "pw123",
            "--class",
            "11th Grade",
        ])
        .unwrap();

        assert_eq!(cli.db, Some(PathBuf::from("/tmp/x.db")));
        match cli.command {
            Commands::Register { username, class, .. } => {
                assert_eq!(username, "alice");
                assert_eq!(class, "11th Grade");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["studypalz", "status", "--config", "sp.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("sp.toml")));
        assert!(matches!(cli.command, Commands::Status));
    }

    #[test]
    fn test_login_requires_password() {
        assert!(Cli::try_parse_from(["studypalz", "login", "--username", "alice"]).is_err());
    }
}
