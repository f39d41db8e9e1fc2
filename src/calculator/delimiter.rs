//! Delimiter resolution for the string calculator.
//!
//! An input may open with a header of the form `//<spec>\n` that replaces the
//! default `,`/`\n` delimiters. The header is resolved once into a
//! [`DelimiterSpec`], which then compiles into the split pattern.
//!
//! The multi-bracket form only applies when the header is nothing but
//! `[...]` groups. Any other header wrapped in one outer pair of brackets is a
//! single literal, brackets inside included: `//[a]b]\n` splits on `a]b`, and
//! `//[*]x[%]\n` splits on `*]x[%` rather than on `*` and `%`.

use once_cell::sync::Lazy;
use regex::Regex;

/// Marker that opens a custom delimiter header.
pub const CUSTOM_PREFIX: &str = "//";

static DEFAULT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",|\n").expect("Failed to compile default delimiter regex"));

// A header made only of non-empty `[...]` groups, e.g. `[*][%]`
static BRACKET_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\[[^\]]+\])+$").expect("Failed to compile bracket header regex")
});

static BRACKET_GROUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]").expect("Failed to compile bracket group regex"));

/// The delimiters that split one calculator input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DelimiterSpec {
    /// Comma or newline.
    Default,
    /// One literal delimiter, e.g. `;` or `***`.
    Single(String),
    /// Several literal delimiters, any of which splits.
    Multiple(Vec<String>),
}

impl DelimiterSpec {
    /// Resolve the delimiter spec of `input` and return it with the numeric payload.
    ///
    /// Header forms are tried in this order:
    ///
    /// 1. one or more bracket groups, `//[*][%]\n`
    /// 2. a single bracketed literal that may itself contain brackets, `//[a]b]\n`
    /// 3. a single character, `//;\n`
    ///
    /// A `//` prefix that matches none of them (or has no newline) leaves the
    /// whole input to be split on the default delimiters.
    ///
    /// # Example
    ///
    /// ```
    /// use kata_lab::calculator::DelimiterSpec;
    ///
    /// let (spec, payload) = DelimiterSpec::resolve("//;\n1;2");
    /// assert_eq!(spec, DelimiterSpec::Single(";".to_string()));
    /// assert_eq!(payload, "1;2");
    /// ```
    pub fn resolve(input: &str) -> (DelimiterSpec, &str) {
        let Some(rest) = input.strip_prefix(CUSTOM_PREFIX) else {
            return (DelimiterSpec::Default, input);
        };

        let Some((header, payload)) = rest.split_once('\n') else {
            return (DelimiterSpec::Default, input);
        };

        match Self::from_header(header) {
            Some(spec) => (spec, payload),
            None => (DelimiterSpec::Default, input),
        }
    }

    /// Parse the text between `//` and the first newline.
    fn from_header(header: &str) -> Option<DelimiterSpec> {
        if BRACKET_HEADER.is_match(header) {
            let mut delimiters: Vec<String> = BRACKET_GROUP
                .captures_iter(header)
                .map(|caps| caps[1].to_string())
                .collect();

            return Some(if delimiters.len() == 1 {
                DelimiterSpec::Single(delimiters.remove(0))
            } else {
                DelimiterSpec::Multiple(delimiters)
            });
        }

        if let Some(inner) = header
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
        {
            if !inner.is_empty() {
                return Some(DelimiterSpec::Single(inner.to_string()));
            }
        }

        let mut chars = header.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(DelimiterSpec::Single(c.to_string())),
            _ => None,
        }
    }

    /// The literal delimiters of this spec.
    pub fn delimiters(&self) -> Vec<&str> {
        match self {
            DelimiterSpec::Default => vec![",", "\n"],
            DelimiterSpec::Single(delimiter) => vec![delimiter.as_str()],
            DelimiterSpec::Multiple(delimiters) => delimiters.iter().map(String::as_str).collect(),
        }
    }

    /// Compile the split pattern for this spec.
    ///
    /// # Errors
    ///
    /// Fails only when an escaped delimiter exceeds the regex size limit.
    pub fn pattern(&self) -> Result<Regex, regex::Error> {
        match self {
            DelimiterSpec::Default => Ok(DEFAULT_PATTERN.clone()),
            _ => literal_pattern(&self.delimiters()),
        }
    }
}

/// Escape `literal` so that it matches only its own text inside a regex.
pub fn escape_literal(literal: &str) -> String {
    regex::escape(literal)
}

/// Build a regex matching any one of `literals` verbatim.
pub fn literal_pattern(literals: &[&str]) -> Result<Regex, regex::Error> {
    let alternatives: Vec<String> = literals.iter().map(|l| escape_literal(l)).collect();
    Regex::new(&alternatives.join("|"))
}
