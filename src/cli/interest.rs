use super::prompt::Prompter;
use super::ui;
use crate::core::{InterestFlag, InterestKind, InterestRequest, InterestResult};
use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};
use tracing::{debug, info};

pub const INVALID_TYPE_MESSAGE: &str = "Invalid interest type selected.";

fn result_line(result: &InterestResult) -> String {
    let label = match result.kind {
        InterestKind::Simple => "Simple Interest",
        InterestKind::Compound { .. } => "Compound Interest",
    };
    format!(
        "{label}: {}",
        ui::style_text(&result.formatted(), ui::StyleType::Value)
    )
}

fn validate_per_year(per_year: i64) -> Result<u32> {
    if per_year < 1 {
        bail!("Compounding frequency must be at least 1, got {per_year}");
    }
    u32::try_from(per_year).with_context(|| format!("Compounding frequency {per_year} is too large"))
}

/// Interactive calculator: one pass, no retry on an invalid type.
pub fn run<R: BufRead, W: Write>(input: R, output: W) -> Result<()> {
    let mut prompter = Prompter::new(input, output);

    let principal = prompter.ask_amount("Enter the principal amount: ", "principal")?;
    let rate_percent =
        prompter.ask_amount("Enter the rate of interest (in %):", "rate of interest")?;
    let time_years = prompter.ask_amount("Enter the time period (in years): ", "time period")?;
    let flag = prompter.ask_char(
        "Choose interest type (S for Simple Interest,C for Compound Interest): ",
        "interest type",
    )?;

    let kind = match InterestFlag::from_char(flag) {
        Some(InterestFlag::Simple) => InterestKind::Simple,
        Some(InterestFlag::Compound) => {
            let per_year: i64 = prompter.ask_number(
                "Enter the number of times interest is compounded per year: ",
                "compounding frequency",
            )?;
            InterestKind::Compound {
                per_year: validate_per_year(per_year)?,
            }
        }
        None => {
            debug!(%flag, "Unknown interest type");
            return prompter.say_line(INVALID_TYPE_MESSAGE);
        }
    };

    let result = InterestRequest {
        principal,
        rate_percent,
        time_years,
        kind,
    }
    .calculate();
    info!(?result, "Calculated interest");
    prompter.say_line(&result_line(&result))
}

/// Single non-interactive calculation.
pub fn run_once<W: Write>(mut output: W, request: InterestRequest, json: bool) -> Result<()> {
    if let InterestKind::Compound { per_year } = request.kind {
        validate_per_year(i64::from(per_year))?;
    }
    let result = request.calculate();
    if json {
        writeln!(output, "{}", serde_json::to_string(&result)?)?;
    } else {
        writeln!(output, "{}", result_line(&result))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_with(input: &str) -> Result<String> {
        let mut out = Vec::new();
        run(Cursor::new(input.as_bytes()), &mut out)?;
        Ok(console::strip_ansi_codes(&String::from_utf8(out)?).to_string())
    }

    #[test]
    fn test_simple_interest_flow() -> Result<()> {
        for flag in ["S", "s"] {
            let out = run_with(&format!("1000\n5\n2\n{flag}\n"))?;
            assert!(out.starts_with("Enter the principal amount: "));
            assert!(out.contains("Enter the rate of interest (in %):"));
            assert!(out.contains("Enter the time period (in years): "));
            assert!(out.ends_with("Simple Interest: 100.00\n"));
            assert!(!out.contains("compounded per year"));
        }
        Ok(())
    }

    #[test]
    fn test_compound_interest_flow() -> Result<()> {
        for flag in ["C", "c"] {
            let out = run_with(&format!("1000 5 2 {flag} 1\n"))?;
            assert!(out.contains("Enter the number of times interest is compounded per year: "));
            assert!(out.ends_with("Compound Interest: 102.50\n"));
        }
        Ok(())
    }

    #[test]
    fn test_invalid_type_prints_message_only() -> Result<()> {
        for flag in ["x", "1", "?"] {
            let out = run_with(&format!("1000 5 2 {flag}\n"))?;
            assert!(out.ends_with("Invalid interest type selected.\n"));
            assert!(!out.contains("Interest:"));
            assert!(!out.contains("compounded per year"));
        }
        Ok(())
    }

    #[test]
    fn test_malformed_principal_fails() {
        let err = run_with("ten\n").unwrap_err();
        assert!(format!("{err:#}").contains("Invalid number: 'ten'"));
    }

    #[test]
    fn test_non_finite_values_fail() {
        for input in ["nan 5 2 s", "1000 inf 2 s", "1000 5 -infinity c 1"] {
            let err = run_with(input).unwrap_err();
            assert!(format!("{err:#}").contains("Invalid number"), "accepted {input}");
        }
    }

    #[test]
    fn test_compounding_frequency_below_one_is_rejected() {
        for per_year in ["0", "-1"] {
            let err = run_with(&format!("1000 5 2 c {per_year}\n")).unwrap_err();
            assert!(err.to_string().contains("must be at least 1"));
            assert!(!err.to_string().contains("Invalid number"));
        }
    }

    #[test]
    fn test_run_once_rejects_zero_frequency() {
        let request = InterestRequest {
            principal: 1000.0,
            rate_percent: 5.0,
            time_years: 2.0,
            kind: InterestKind::Compound { per_year: 0 },
        };
        assert!(run_once(Vec::new(), request, false).is_err());
    }

    #[test]
    fn test_run_once_text() -> Result<()> {
        let mut out = Vec::new();
        run_once(
            &mut out,
            InterestRequest {
                principal: 1000.0,
                rate_percent: 5.0,
                time_years: 2.0,
                kind: InterestKind::Simple,
            },
            false,
        )?;
        let out = console::strip_ansi_codes(&String::from_utf8(out)?).to_string();
        assert_eq!(out, "Simple Interest: 100.00\n");
        Ok(())
    }
}
