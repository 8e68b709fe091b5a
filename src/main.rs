use anyhow::{Result, bail};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use fincalc::cli::prompt::parse_amount;
use fincalc::core::log::init_logging;
use fincalc::core::{ConversionRequest, Currency, InterestKind, InterestRequest};
use std::str::FromStr;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
enum KindArg {
    Simple,
    Compound,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive INR currency converter
    Converter,
    /// Convert an INR amount without prompting
    Convert {
        /// Amount in INR
        #[arg(allow_negative_numbers = true, value_parser = parse_amount)]
        amount: f64,
        /// Target currency (usd, eur or jpy)
        #[arg(long, value_parser = Currency::from_str)]
        to: Currency,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Display the fixed conversion rates
    Rates,
    /// Simple or compound interest calculator; prompts unless all values are given
    Interest {
        /// Principal amount
        #[arg(long, allow_negative_numbers = true, value_parser = parse_amount)]
        principal: Option<f64>,
        /// Rate of interest in percent
        #[arg(long, allow_negative_numbers = true, value_parser = parse_amount)]
        rate: Option<f64>,
        /// Time period in years
        #[arg(long, allow_negative_numbers = true, value_parser = parse_amount)]
        time: Option<f64>,
        /// Interest type
        #[arg(long, value_enum)]
        kind: Option<KindArg>,
        /// Times interest is compounded per year [default: 1]
        #[arg(long)]
        per_year: Option<u32>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

impl TryFrom<Commands> for fincalc::AppCommand {
    type Error = anyhow::Error;

    fn try_from(cmd: Commands) -> Result<fincalc::AppCommand> {
        let command = match cmd {
            Commands::Converter => fincalc::AppCommand::Converter,
            Commands::Convert { amount, to, json } => fincalc::AppCommand::Convert {
                request: ConversionRequest {
                    target: to,
                    amount_inr: amount,
                },
                json,
            },
            Commands::Rates => fincalc::AppCommand::Rates,
            Commands::Interest {
                principal,
                rate,
                time,
                kind,
                per_year,
                json,
            } => match (principal, rate, time, kind) {
                (None, None, None, None) => {
                    if per_year.is_some() || json {
                        bail!("--per-year and --json need --principal, --rate, --time and --kind");
                    }
                    fincalc::AppCommand::Interest
                }
                (Some(principal), Some(rate_percent), Some(time_years), Some(kind)) => {
                    let kind = match (kind, per_year) {
                        (KindArg::Simple, None) => InterestKind::Simple,
                        (KindArg::Simple, Some(_)) => {
                            bail!("--per-year only applies to compound interest")
                        }
                        (KindArg::Compound, per_year) => InterestKind::Compound {
                            per_year: per_year.unwrap_or(1),
                        },
                    };
                    fincalc::AppCommand::InterestOnce {
                        request: InterestRequest {
                            principal,
                            rate_percent,
                            time_years,
                            kind,
                        },
                        json,
                    }
                }
                _ => bail!("--principal, --rate, --time and --kind must be given together"),
            },
        };
        Ok(command)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(cmd) => fincalc::AppCommand::try_from(cmd).and_then(|command| {
            fincalc::run_command(command, std::io::stdin().lock(), std::io::stdout().lock())
        }),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %format!("{e:#}"), "Application failed");
    }
    result
}
