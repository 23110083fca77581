//! tsha: hash a message, or run the known-answer self test
mod cli;

use std::process::ExitCode;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use tracing::{debug, info};

use tsha_algorithms::error::to_core_result;
use tsha_algorithms::hash_with;
use tsha_algorithms::vectors::{self, known_answers};

use crate::cli::{CliError, TshaCli};

fn init_logging(cli: &TshaCli) {
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn hash_message(cli: &TshaCli, message: &str) -> anyhow::Result<()> {
    let algorithm = cli.algorithm();
    debug!(%algorithm, "hashing message");

    let digest = to_core_result(hash_with(algorithm, message.as_bytes()), "hash_message")
        .map_err(CliError::from)?;
    println!("{}", digest);
    Ok(())
}

fn self_test(cli: &TshaCli) -> anyhow::Result<()> {
    let mut total = 0;
    let mut failed = 0;

    for algorithm in cli.self_test_algorithms() {
        for vector in known_answers(algorithm) {
            total += 1;
            let ok = to_core_result(vectors::check(vector), "self_test")
                .map_err(CliError::from)
                .with_context(|| format!("{} {}", algorithm, vector.description))?;
            if ok {
                println!("pass  {:<12} {}", algorithm, vector.description);
            } else {
                failed += 1;
                println!("FAIL  {:<12} {}", algorithm, vector.description);
            }
        }
    }

    info!(total, failed, "self test finished");
    if failed > 0 {
        return Err(CliError::SelfTest { failed, total }.into());
    }
    Ok(())
}

fn run(cli: &TshaCli) -> anyhow::Result<()> {
    if cli.self_test {
        return self_test(cli);
    }
    match cli.message.as_deref() {
        Some(message) => hash_message(cli, message),
        // clap enforces MESSAGE unless --self-test
        None => Err(CliError::Usage(clap::Error::new(ErrorKind::MissingRequiredArgument)).into()),
    }
}

fn exit_code(err: &anyhow::Error) -> u8 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<CliError>())
        .map_or(1, CliError::exit_code)
}

fn main() -> ExitCode {
    let cli = match TshaCli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                let _ = err.print();
                return ExitCode::from(CliError::from(err).exit_code());
            }
        },
    };

    init_logging(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("tsha: {:#}", err);
            ExitCode::from(exit_code(&err))
        }
    }
}
