//! Fixed-rate currency conversion from INR

use anyhow::{Result, anyhow};
use serde::Serialize;
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Eur,
    Jpy,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Usd, Currency::Eur, Currency::Jpy];

    /// Multiplier applied to an INR amount.
    pub fn rate(&self) -> f64 {
        match self {
            Currency::Usd => 0.012,
            Currency::Eur => 0.011,
            Currency::Jpy => 1.61,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Jpy => "JPY",
        }
    }

    /// Label used in the converter menu.
    pub fn name(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "Euro",
            Currency::Jpy => "Japanese Yen",
        }
    }

    pub fn menu_number(&self) -> u32 {
        match self {
            Currency::Usd => 1,
            Currency::Eur => 2,
            Currency::Jpy => 3,
        }
    }

    pub fn from_menu(option: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.menu_number() == option)
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            "JPY" => Ok(Currency::Jpy),
            _ => Err(anyhow!("Unsupported currency: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionRequest {
    pub target: Currency,
    pub amount_inr: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConversionResult {
    pub converted_amount: f64,
    pub currency: Currency,
}

/// Converts an INR amount into `target`. Negative amounts are not rejected.
pub fn convert(amount: f64, target: Currency) -> f64 {
    amount * target.rate()
}

impl ConversionRequest {
    pub fn execute(&self) -> ConversionResult {
        ConversionResult {
            converted_amount: convert(self.amount_inr, self.target),
            currency: self.target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-6;

    #[test]
    fn test_convert_usd_is_linear() {
        for amount in [0.0, 1.0, 42.5, 100.0, 12345.67, 1_000_000.0] {
            let converted = convert(amount, Currency::Usd);
            assert!((converted - amount * 0.012).abs() < TOLERANCE);
        }
    }

    #[test]
    fn test_convert_eur_and_jpy() {
        assert!((convert(100.0, Currency::Eur) - 1.1).abs() < TOLERANCE);
        assert!((convert(100.0, Currency::Jpy) - 161.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_convert_accepts_negative_amounts() {
        assert!((convert(-100.0, Currency::Usd) + 1.2).abs() < TOLERANCE);
    }

    #[test]
    fn test_from_menu() {
        assert_eq!(Currency::from_menu(1), Some(Currency::Usd));
        assert_eq!(Currency::from_menu(2), Some(Currency::Eur));
        assert_eq!(Currency::from_menu(3), Some(Currency::Jpy));
        assert_eq!(Currency::from_menu(0), None);
        assert_eq!(Currency::from_menu(4), None);
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("usd".parse::<Currency>().unwrap(), Currency::Usd);
        assert_eq!("Eur".parse::<Currency>().unwrap(), Currency::Eur);
        assert_eq!("JPY".parse::<Currency>().unwrap(), Currency::Jpy);
        assert!("GBP".parse::<Currency>().is_err());
    }

    #[test]
    fn test_request_execute_carries_currency() {
        let result = ConversionRequest {
            target: Currency::Jpy,
            amount_inr: 10.0,
        }
        .execute();
        assert_eq!(result.currency, Currency::Jpy);
        assert!((result.converted_amount - 16.1).abs() < TOLERANCE);
    }

    #[test]
    fn test_result_serializes_with_currency_code() {
        let result = ConversionRequest {
            target: Currency::Eur,
            amount_inr: 0.0,
        }
        .execute();
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["currency"], "EUR");
        assert_eq!(json["converted_amount"], 0.0);
    }
}
