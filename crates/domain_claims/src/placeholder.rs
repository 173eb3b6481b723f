//! Placeholder and name classification
//!
//! Extraction models often echo what is printed on a blank intake form
//! instead of what was filled in: field labels, "N/A", or instructions
//! such as "Click to enter a date". These checks tell such artifacts apart
//! from real values.
//!
//! # Rules
//!
//! A text value is a placeholder when, after trimming, it:
//! - is empty
//! - exactly matches a generic placeholder token (case-sensitive)
//! - matches a known intake form label (case-insensitive)
//! - contains an instructional verb and is longer than 8 characters
//! - contains a bracketed span that itself holds an example marker such
//!   as "e.g."
//!
//! Policyholder names get their own, looser check ([`is_valid_name`]) since
//! legal and business names legitimately contain punctuation.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extracted::FieldValue;

/// Generic placeholder tokens, matched exactly
pub const PLACEHOLDER_TOKENS: &[&str] = &[
    "",
    "N/A",
    "NA",
    "None",
    "Null",
    "TBD",
    "To be determined",
    "Enter text here",
    "Click to enter",
    "Select...",
    "Choose...",
    "Type here",
    "Please enter",
    "Not applicable",
    "Unknown",
];

/// Labels printed on standard claims-intake forms, matched ignoring case
pub const FORM_LABELS: &[&str] = &[
    "NAME OF INSURED",
    "POLICY NUMBER",
    "LOCATION OF LOSS",
    "DESCRIPTION OF ACCIDENT",
    "ESTIMATE AMOUNT",
    "E-MAIL ADDRESS",
    "PHONE #",
    "VEH #",
    "V.I.N.",
    "MAKE:",
    "MODEL:",
    "BODY TYPE",
    "PLATE NUMBER",
    "DATE OF LOSS",
    "AGENCY CUSTOMER ID",
    "CONTACT NAME:",
];

/// Labels of the name fields on intake forms, matched ignoring case
pub const NAME_FIELD_LABELS: &[&str] = &[
    "NAME OF INSURED",
    "NAME OF INSURED (FIRST, MIDDLE, LAST)",
    "NAME OF CONTACT (FIRST, MIDDLE, LAST)",
    "CONTACT NAME",
    "CONTACT NAME:",
];

/// Verbs that mark form instructions
pub const INSTRUCTIONAL_WORDS: &[&str] = &["ENTER", "SELECT", "CHOOSE", "CLICK", "TYPE", "PLEASE"];

/// Instructional verbs only count in values longer than this
pub const INSTRUCTIONAL_MIN_LEN: usize = 8;

/// Markers of example text inside brackets
pub const EXAMPLE_MARKERS: &[&str] = &["EXAMPLE", "E.G.", "I.E.", "SUCH AS"];

/// Punctuation allowed in a name besides ASCII letters
const NAME_PUNCTUATION: &[char] = &[' ', ',', '.', '-', '\'', '&'];

const NAME_MIN_LEN: usize = 2;
const NAME_MAX_LEN: usize = 100;

static BRACKETED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[.*\]|\(.*\)").expect("bracket pattern is valid")
});

/// Returns true if the value should be treated as missing.
///
/// Non-string values are always placeholders.
pub fn classify_placeholder(value: FieldValue<'_>) -> bool {
    match value {
        FieldValue::Text(text) => is_placeholder_text(text),
        FieldValue::NonText(_) | FieldValue::Contact(_) => true,
    }
}

/// Returns true if the value is a valid person or business name.
///
/// Non-string values are never names.
pub fn classify_name(value: FieldValue<'_>) -> bool {
    match value {
        FieldValue::Text(text) => is_valid_name(text),
        FieldValue::NonText(_) | FieldValue::Contact(_) => false,
    }
}

/// Returns true if the text is template boilerplate rather than data
pub fn is_placeholder_text(text: &str) -> bool {
    let text = text.trim();

    if text.is_empty() || PLACEHOLDER_TOKENS.contains(&text) {
        return true;
    }

    let upper = text.to_uppercase();
    if FORM_LABELS.iter().any(|label| upper == *label) {
        return true;
    }

    if text.chars().count() > INSTRUCTIONAL_MIN_LEN
        && INSTRUCTIONAL_WORDS.iter().any(|word| upper.contains(word))
    {
        return true;
    }

    BRACKETED.find_iter(text).any(|span| {
        let span = span.as_str().to_uppercase();
        EXAMPLE_MARKERS.iter().any(|marker| span.contains(marker))
    })
}

/// Returns true if the text looks like a person or business name
///
/// # Examples
///
/// ```rust
/// use domain_claims::is_valid_name;
///
/// assert!(is_valid_name("QUICK DELIVERY SERVICES LLC"));
/// assert!(is_valid_name("O'Brien, Mary-Kate"));
/// assert!(!is_valid_name("NAME OF INSURED"));
/// assert!(!is_valid_name("John Smith 3rd"));
/// ```
pub fn is_valid_name(text: &str) -> bool {
    let text = text.trim();

    let upper = text.to_uppercase();
    if NAME_FIELD_LABELS.iter().any(|label| upper == *label) {
        return false;
    }

    let len = text.chars().count();
    if !(NAME_MIN_LEN..=NAME_MAX_LEN).contains(&len) {
        return false;
    }

    if !text.chars().any(char::is_alphabetic) {
        return false;
    }

    if !text
        .chars()
        .all(|c| c.is_ascii_alphabetic() || NAME_PUNCTUATION.contains(&c))
    {
        return false;
    }

    // One word with a letter is enough: "Smith & Sons" has a bare "&".
    text.split_whitespace()
        .any(|word| word.chars().any(char::is_alphabetic))
}
