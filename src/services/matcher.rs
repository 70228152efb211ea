//! Start-anchored regex evaluation.
//!
//! A pattern "matches" when the engine finds a match beginning at byte
//! offset 0 of the input. The match does not have to consume the whole
//! input; use `$` in the pattern for that.

use regex::Regex;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    #[error("{0}")]
    InvalidPattern(String),
}

/// A compiled pattern that only matches at the start of its input.
struct StartMatcher {
    anchored: Option<Regex>,
    fallback: Regex,
}

impl StartMatcher {
    fn compile(pattern: &str) -> Result<Self, MatchError> {
        // The unwrapped pattern decides validity and supplies the engine message.
        let fallback =
            Regex::new(pattern).map_err(|e| MatchError::InvalidPattern(e.to_string()))?;
        // `(?x)` patterns ending in a comment swallow the closing group; those use the fallback.
        let anchored = Regex::new(&format!(r"\A(?:{pattern})")).ok();
        Ok(Self { anchored, fallback })
    }

    fn is_match(&self, text: &str) -> bool {
        match &self.anchored {
            Some(re) => re.is_match(text),
            // Leftmost-first semantics: if any match starts at 0, the leftmost one does.
            None => self.fallback.find(text).is_some_and(|m| m.start() == 0),
        }
    }
}

/// Compile `pattern` and test whether it matches at the start of `text`.
pub fn evaluate(pattern: &str, text: &str) -> Result<bool, MatchError> {
    let matcher = StartMatcher::compile(pattern)?;
    Ok(matcher.is_match(text))
}

/// Return the candidates `pattern` matches at their start, in input order.
pub fn filter<'a, S: AsRef<str>>(
    pattern: &str,
    candidates: &'a [S],
) -> Result<Vec<&'a str>, MatchError> {
    let matcher = StartMatcher::compile(pattern)?;
    Ok(candidates
        .iter()
        .map(AsRef::as_ref)
        .filter(|c| matcher.is_match(c))
        .collect())
}
