use std::fmt;

use serde::Serialize;

/// Judgement over one attempt's worth of probe responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Every response carried the fingerprint field.
    Official,
    /// No response carried the fingerprint field.
    Reversed,
    /// Some responses carried it and some did not.
    Mixed,
}

impl Verdict {
    /// Classify the per-probe fingerprint presence flags, in issue order.
    ///
    /// Pure function of the flags; order is irrelevant to the outcome. Callers
    /// always supply at least one flag.
    pub fn classify(fingerprints: &[bool]) -> Self {
        let present = fingerprints.iter().filter(|&&found| found).count();
        if present == fingerprints.len() {
            Verdict::Official
        } else if present == 0 {
            Verdict::Reversed
        } else {
            Verdict::Mixed
        }
    }

    /// Only an official deployment counts as a valid API.
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Official)
    }

    /// Human-readable explanation shown alongside the verdict.
    pub fn reason(&self) -> &'static str {
        match self {
            Verdict::Official => "official API",
            Verdict::Reversed => "reverse-engineered API",
            Verdict::Mixed => "adulterated/inconsistent API",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Verdict::Official => "official",
            Verdict::Reversed => "reversed",
            Verdict::Mixed => "mixed",
        };
        f.write_str(tag)
    }
}
