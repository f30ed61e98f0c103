use std::path::PathBuf;

use clap::{Parser, Subcommand};

use refute::config::{Config, ResolutionRule};

/// Proves clauses from a knowledge base of clauses, by refutation.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub mode: Mode,

    /// The rule used to derive a resolvent.
    #[arg(long, value_enum, global = true, default_value_t = ResolutionRule::Cancelling)]
    pub rule: ResolutionRule,

    /// The maximum number of iterations of the resolution loop for each goal, with 0 for no limit.
    #[arg(long, global = true, default_value_t = 0)]
    pub step_limit: usize,

    /// The time limit in seconds for each goal, with 0 for no limit.
    #[arg(long, global = true, default_value_t = 0)]
    pub time_limit: u64,

    /// Write counts from each proof attempt.
    #[arg(long, global = true)]
    pub stats: bool,

    /// Write the derivation of each proof as a graph, in DOT.
    #[arg(long, global = true)]
    pub dot: bool,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
    /// Prove the last clause of a knowledge base from the clauses before it.
    Resolution {
        /// The knowledge base, one clause to a line.
        path: PathBuf,
    },

    /// Apply a file of commands to a knowledge base.
    ///
    /// Each line of the command file is a clause followed by '?' to query, '+' to assert, or '-' to retract.
    #[command(alias = "session")]
    Cooking {
        /// The knowledge base, one clause to a line.
        knowledge: PathBuf,

        /// The commands.
        commands: PathBuf,
    },
}

/// A collection of configuration options relevant only to the CLI.
#[derive(Default)]
pub struct CliConfig {
    /// Whether to write counts from each proof attempt.
    pub stats: bool,

    /// Whether to write the derivation of each proof as a graph.
    pub dot: bool,
}

/// Errors from arguments the configuration does not accept.
pub enum ConfigError {
    NonSpecific(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            ConfigError::NonSpecific(s) => write!(f, "{s}"),
        }
    }
}

/// A [Config] and a [CliConfig] from parsed arguments.
pub fn config_from_args(args: &Args) -> Result<(Config, CliConfig), ConfigError> {
    let mut cfg = Config::default();

    if !cfg.resolution_rule.set(args.rule) {
        let (min, max) = cfg.resolution_rule.min_max();
        return Err(ConfigError::NonSpecific(format!(
            "{} requires a value between {min} and {max}",
            cfg.resolution_rule.name
        )));
    }

    if !cfg.step_limit.set(args.step_limit) {
        let (min, max) = cfg.step_limit.min_max();
        return Err(ConfigError::NonSpecific(format!(
            "{} requires a value between {min} and {max}",
            cfg.step_limit.name
        )));
    }

    if !cfg.time_limit.set(std::time::Duration::from_secs(args.time_limit)) {
        let (min, max) = cfg.time_limit.min_max();
        return Err(ConfigError::NonSpecific(format!(
            "{} requires a value between {min:?} and {max:?}",
            cfg.time_limit.name
        )));
    }

    let cli_options = CliConfig {
        stats: args.stats,
        dot: args.dot,
    };

    Ok((cfg, cli_options))
}
