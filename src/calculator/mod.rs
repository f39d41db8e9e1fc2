//! String calculator kata.
//!
//! Sums the integers of a delimiter-separated string:
//!
//! - empty input sums to `0`
//! - `,` and `\n` split by default; a `//<spec>\n` header replaces them
//! - negative numbers are rejected, all of them listed in the error
//! - numbers above the upper bound (1000 by default) are skipped
//!
//! Tokens that are not integers are dropped without an error, as are positive
//! values above `i64::MAX`. Negatives below `i64::MIN` are still rejected.

mod delimiter;

pub use delimiter::{escape_literal, literal_pattern, DelimiterSpec, CUSTOM_PREFIX};

use crate::config::{Config, DEFAULT_UPPER_BOUND};
use crate::error::{CalculatorError, CalculatorResult};
use std::num::IntErrorKind;

/// Sum `input` with the default upper bound of 1000.
///
/// # Example
///
/// ```
/// use kata_lab::calculator::add;
///
/// assert_eq!(add("1\n2,3").unwrap(), 6);
/// assert_eq!(add("//[*][%]\n1*2%3").unwrap(), 6);
/// assert!(add("1,-2").is_err());
/// ```
pub fn add(input: &str) -> CalculatorResult<i64> {
    Calculator::default().add(input)
}

/// A string calculator with a configurable upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calculator {
    upper_bound: i64,
}

impl Calculator {
    /// Create a calculator that sums numbers up to and including `upper_bound`.
    pub fn new(upper_bound: i64) -> Self {
        Self { upper_bound }
    }

    /// Create a calculator from the loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.upper_bound)
    }

    /// Largest number this calculator still sums.
    pub fn upper_bound(&self) -> i64 {
        self.upper_bound
    }

    /// Sum the numbers in `input`.
    ///
    /// # Errors
    ///
    /// Returns `CalculatorError::NegativeNumbers` listing every negative number,
    /// in input order, when at least one is present.
    pub fn add(&self, input: &str) -> CalculatorResult<i64> {
        if input.is_empty() {
            return Ok(0);
        }

        let (spec, payload) = DelimiterSpec::resolve(input);
        let tokens = parse_tokens(&spec, payload)?;

        tracing::debug!(spec = ?spec, count = tokens.len(), "Parsed calculator input");

        validate_tokens(&tokens)?;

        Ok(tokens
            .iter()
            .filter_map(|token| match token {
                Token::Number(n) if *n <= self.upper_bound => Some(*n),
                _ => None,
            })
            .fold(0i64, |sum, n| sum.saturating_add(n)))
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(DEFAULT_UPPER_BOUND)
    }
}

/// One integer token of the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Number(i64),
    /// A negative integer below `i64::MIN`, kept as written.
    NegativeOverflow(String),
}

/// Split `payload` on the spec's delimiters and parse every integer token.
///
/// Positive values beyond `i64::MAX` are dropped: they could never be summed
/// under any bound.
fn parse_tokens(spec: &DelimiterSpec, payload: &str) -> CalculatorResult<Vec<Token>> {
    let pattern = spec
        .pattern()
        .map_err(|e| CalculatorError::InvalidDelimiter(e.to_string()))?;

    let tokens = pattern
        .split(payload)
        .filter_map(|raw| {
            let token = raw.trim();
            match token.parse::<i64>() {
                Ok(n) => Some(Token::Number(n)),
                Err(e) if *e.kind() == IntErrorKind::NegOverflow => {
                    Some(Token::NegativeOverflow(token.to_string()))
                }
                Err(_) => {
                    tracing::trace!(token = %raw, "Dropping non-numeric token");
                    None
                }
            }
        })
        .collect();

    Ok(tokens)
}

fn validate_tokens(tokens: &[Token]) -> CalculatorResult<()> {
    let negatives: Vec<String> = tokens
        .iter()
        .filter_map(|token| match token {
            Token::Number(n) if *n < 0 => Some(n.to_string()),
            Token::Number(_) => None,
            Token::NegativeOverflow(text) => Some(text.clone()),
        })
        .collect();

    if negatives.is_empty() {
        Ok(())
    } else {
        Err(CalculatorError::NegativeNumbers { negatives })
    }
}
