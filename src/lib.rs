pub mod cli;
pub mod core;

use crate::core::{ConversionRequest, InterestRequest};
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppCommand {
    /// Interactive currency converter
    Converter,
    /// One conversion, no prompts
    Convert { request: ConversionRequest, json: bool },
    /// Table of fixed rates
    Rates,
    /// Interactive interest calculator
    Interest,
    /// One interest calculation, no prompts
    InterestOnce { request: InterestRequest, json: bool },
}

/// Runs `command`, reading answers from `input` and writing to `output`.
pub fn run_command<R: BufRead, W: Write>(command: AppCommand, input: R, output: W) -> Result<()> {
    debug!(?command, "Running command");
    match command {
        AppCommand::Converter => cli::converter::run(input, output),
        AppCommand::Convert { request, json } => cli::converter::run_once(output, request, json),
        AppCommand::Rates => cli::converter::run_rates(output),
        AppCommand::Interest => cli::interest::run(input, output),
        AppCommand::InterestOnce { request, json } => {
            cli::interest::run_once(output, request, json)
        }
    }
}
