//! Simple and compound interest formulas.
use serde::Serialize;
use tracing::debug;

/// Interest calculation method. Compound interest carries its
/// compounding frequency per year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum InterestKind {
    Simple,
    Compound { per_year: u32 },
}

/// Interest type selected by a single-character flag, before the compounding
/// frequency is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterestFlag {
    Simple,
    Compound,
}

impl InterestFlag {
    /// `S`/`s` selects simple interest, `C`/`c` compound. Anything else is `None`.
    pub fn from_char(flag: char) -> Option<Self> {
        match flag.to_ascii_uppercase() {
            'S' => Some(InterestFlag::Simple),
            'C' => Some(InterestFlag::Compound),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterestRequest {
    pub principal: f64,
    pub rate_percent: f64,
    pub time_years: f64,
    pub kind: InterestKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InterestResult {
    #[serde(flatten)]
    pub kind: InterestKind,
    pub interest: f64,
    pub amount: f64,
}

impl InterestResult {
    /// Interest rounded to two decimals in fixed notation.
    pub fn formatted(&self) -> String {
        format!("{:.2}", self.interest)
    }
}

pub fn calculate_simple_interest(principal: f64, rate: f64, time: f64) -> InterestResult {
    let interest = principal * rate * time / 100.0;
    debug!(principal, rate, time, interest, "Computed simple interest");
    InterestResult {
        kind: InterestKind::Simple,
        interest,
        amount: principal + interest,
    }
}

/// Compounds `per_year` times a year over `time` years.
pub fn calculate_compound_interest(
    principal: f64,
    rate: f64,
    time: f64,
    per_year: u32,
) -> InterestResult {
    let n = f64::from(per_year);
    let amount = principal * (1.0 + rate / (n * 100.0)).powf(n * time);
    let interest = amount - principal;
    debug!(principal, rate, time, per_year, amount, "Computed compound interest");
    InterestResult {
        kind: InterestKind::Compound { per_year },
        interest,
        amount,
    }
}

impl InterestRequest {
    pub fn calculate(&self) -> InterestResult {
        match self.kind {
            InterestKind::Simple => {
                calculate_simple_interest(self.principal, self.rate_percent, self.time_years)
            }
            InterestKind::Compound { per_year } => calculate_compound_interest(
                self.principal,
                self.rate_percent,
                self.time_years,
                per_year,
            ),
        }
    }
}
