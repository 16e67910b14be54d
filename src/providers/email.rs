use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}$").unwrap());

pub trait EmailFormatChecker {
    fn is_valid_format(&self, candidate: &str) -> bool;
}

#[derive(Debug, Default)]
pub struct RegexEmailChecker;

impl EmailFormatChecker for RegexEmailChecker {
    fn is_valid_format(&self, candidate: &str) -> bool {
        EMAIL_RE.is_match(candidate)
    }
}
