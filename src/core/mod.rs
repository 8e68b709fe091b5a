//! Core business logic, free of console I/O

pub mod currency;
pub mod interest;
pub mod log;

// Re-export main types for cleaner imports
pub use currency::{ConversionRequest, ConversionResult, Currency, convert};
pub use interest::{
    InterestFlag, InterestKind, InterestRequest, InterestResult, calculate_compound_interest,
    calculate_simple_interest,
};
