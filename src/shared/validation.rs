use lazy_static::lazy_static;
use regex::Regex;

use crate::shared::constants::RUC_LENGTH;

lazy_static! {
    /// Anything that is not an ASCII digit
    /// - "12a3!4" -> matches "a" and "!"
    pub static ref NON_DIGIT_REGEX: Regex = Regex::new(r"[^0-9]").unwrap();

    /// A complete RUC: exactly 11 ASCII digits
    pub static ref RUC_REGEX: Regex = Regex::new(r"^[0-9]{11}$").unwrap();
}

/// Strip non-digits from user input and keep at most 11 characters.
pub fn sanitize_ruc_input(raw: &str) -> String {
    let digits = NON_DIGIT_REGEX.replace_all(raw, "");
    digits.chars().take(RUC_LENGTH).collect()
}

/// True when `candidate` is a submittable RUC
pub fn is_complete_ruc(candidate: &str) -> bool {
    RUC_REGEX.is_match(candidate)
}
