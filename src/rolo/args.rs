use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.4.1" for releases, "0.4.1@abc1234 2024-01-15" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    // Use a static to compute the version string once
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING
        .get_or_init(|| version_string(VERSION, GIT_HASH, GIT_COMMIT_DATE, IS_RELEASE == "true"))
}

/// Bare version for release builds and builds outside git, otherwise the
/// version tagged with commit hash and date.
fn version_string(version: &str, hash: &str, date: &str, is_release: bool) -> String {
    if is_release || hash.is_empty() {
        version.to_string()
    } else {
        format!("{}@{} {}", version, hash, date)
    }
}

#[derive(Parser, Debug)]
#[command(name = "rolo", bin_name = "rolo", version = get_version())]
#[command(about = "Plain-text phonebooks for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new phonebook
    Create {
        /// File to create (defaults to the configured phonebook)
        file: Option<PathBuf>,
    },

    /// List every contact
    #[command(alias = "ls")]
    List {
        /// Phonebook to list
        file: Option<PathBuf>,
    },

    /// Look up contacts by name
    #[command(alias = "find")]
    Lookup {
        /// Name (or part of one) to look for
        name: String,

        /// Phonebook to look up in
        file: Option<PathBuf>,
    },

    /// Look up contacts by number
    #[command(alias = "rev")]
    ReverseLookup {
        /// Number to look for
        number: String,

        /// Phonebook to look up in
        file: Option<PathBuf>,
    },

    /// Add a new contact
    Add {
        /// Name of the contact
        name: String,
        /// Their number
        number: String,
        /// Phonebook to add to
        file: Option<PathBuf>,
    },

    /// Change an existing contact's number
    Change {
        /// Name of the contact
        name: String,
        /// The new number
        number: String,
        /// Phonebook to change
        file: Option<PathBuf>,
    },

    /// Remove a contact
    #[command(alias = "rm")]
    Remove {
        /// Name of the contact
        name: String,
        /// Phonebook to remove from
        file: Option<PathBuf>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., default-book)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_builds_print_the_bare_version() {
        assert_eq!(version_string("0.4.1", "abc1234", "2024-01-15", true), "0.4.1");
    }

    #[test]
    fn dev_builds_append_hash_and_date() {
        assert_eq!(
            version_string("0.4.1", "abc1234", "2024-01-15", false),
            "0.4.1@abc1234 2024-01-15"
        );
    }

    #[test]
    fn builds_without_git_print_the_bare_version() {
        assert_eq!(version_string("0.4.1", "", "", false), "0.4.1");
    }
}
