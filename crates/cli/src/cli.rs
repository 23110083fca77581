use clap::{ArgAction, Parser, ValueEnum};
use thiserror::Error;
use tracing::Level;
use tsha_api::Algorithm;

/// Exit status for malformed invocations (`EINVAL`)
pub const EXIT_USAGE: u8 = 22;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmArg {
    #[value(name = "sha256", alias = "sha-256")]
    #[default]
    Sha256,
    #[value(name = "sha512-256", alias = "sha512/256")]
    Sha512_256,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Sha256 => Algorithm::Sha256,
            AlgorithmArg::Sha512_256 => Algorithm::Sha512_256,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "tsha",
    about = "Hash a message with the finite-state-machine SHA-256 / SHA-512/256 engines",
    version
)]
pub struct TshaCli {
    /// Hash algorithm (default: sha256)
    #[arg(short = 'a', long = "algorithm", value_name = "ALG")]
    pub algorithm: Option<AlgorithmArg>,

    /// Run the built-in known-answer vectors instead of hashing a message
    #[arg(long = "self-test", action = ArgAction::SetTrue)]
    pub self_test: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Message to hash; its UTF-8 bytes are the input
    #[arg(value_name = "MESSAGE", required_unless_present = "self_test")]
    pub message: Option<String>,
}

impl TshaCli {
    /// Algorithm for hashing a message
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm.unwrap_or_default().into()
    }

    /// Algorithms covered by `--self-test`: the chosen one, or all
    pub fn self_test_algorithms(&self) -> Vec<Algorithm> {
        match self.algorithm {
            Some(arg) => vec![arg.into()],
            None => Algorithm::ALL.to_vec(),
        }
    }

    /// Max log level for the `-v` count
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Usage(#[from] clap::Error),

    #[error("hashing failed: {0}")]
    Hash(#[from] tsha_api::Error),

    #[error("{failed} of {total} known-answer vectors failed")]
    SelfTest { failed: usize, total: usize },
}

impl CliError {
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Usage(_) => EXIT_USAGE,
            CliError::Hash(_) | CliError::SelfTest { .. } => 1,
        }
    }
}
