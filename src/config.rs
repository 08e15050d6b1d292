// ⚙️ Configuration - command line flags with environment fallbacks
//
// Nothing is read from or written to disk; every value comes from argv or the
// process environment.

use clap::{Parser, Subcommand};

use crate::ids::SequentialIds;

pub const DEFAULT_CURRENCY: &str = "RS";

#[derive(Debug, Parser)]
#[command(
    name = "student-registry",
    version,
    about = "Track students, course enrollments and tuition balances for one session"
)]
pub struct Cli {
    /// First student id to issue (random five-digit start when unset)
    #[arg(long, env = "STUDENT_REGISTRY_ID_SEED")]
    pub seed: Option<u64>,

    /// Label shown in front of amounts
    #[arg(long, env = "STUDENT_REGISTRY_CURRENCY", default_value = DEFAULT_CURRENCY)]
    pub currency: String,

    /// Print the catalog or the end-of-session summary as JSON
    #[arg(long)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print brackets, grade levels, courses and fees, then exit
    Catalog,
}

/// Resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub id_seed: Option<u64>,
    pub currency: String,
    pub json: bool,
}

impl AppConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        let currency = cli.currency.trim();
        AppConfig {
            id_seed: cli.seed,
            currency: if currency.is_empty() {
                DEFAULT_CURRENCY.to_string()
            } else {
                currency.to_string()
            },
            json: cli.json,
        }
    }

    /// Id generator for the session registry
    pub fn id_source(&self) -> SequentialIds {
        match self.id_seed {
            Some(seed) => SequentialIds::starting_at(seed),
            None => SequentialIds::random(),
        }
    }

    /// "RS 15000"
    pub fn money(&self, amount: i64) -> String {
        format!("{} {}", self.currency, amount)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            id_seed: None,
            currency: DEFAULT_CURRENCY.to_string(),
            json: false,
        }
    }
}
