//! Match status derived from computed and expected checksums.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// No expected value was available.
    NotChecked,
    Match,
    Mismatch,
}

impl Status {
    /// Short tag for terminal output.
    pub fn label(self) -> &'static str {
        match self {
            Status::NotChecked => "--",
            Status::Match => "OK",
            Status::Mismatch => "BAD",
        }
    }
}

pub fn classify(computed: u32, expected: Option<u32>) -> Status {
    match expected {
        None => Status::NotChecked,
        Some(e) if e == computed => Status::Match,
        Some(_) => Status::Mismatch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_same_value_is_match() {
        for c in [0, 1, 0xABCD_EF12, u32::MAX] {
            assert_eq!(classify(c, Some(c)), Status::Match);
        }
    }

    #[test]
    fn classify_different_value_is_mismatch() {
        assert_eq!(classify(0xAAAA_AAAA, Some(0xCCCC_CCCC)), Status::Mismatch);
    }

    #[test]
    fn classify_absent_is_not_checked() {
        assert_eq!(classify(7, None), Status::NotChecked);
    }
}
