use serde::{Serialize, Serializer};
use std::fmt;

/// Cause code attached to a delay event.
///
/// The four literals are the wire/storage contract and are kept exactly as
/// they were first published, including the uneven "1-dot" / "of 2 dot" wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DelayReason {
    OutBody,
    OutOneDotBattery,
    OutTwoDotBattery,
    OutThreeDotBattery,
}

impl DelayReason {
    pub const ALL: [DelayReason; 4] = [
        DelayReason::OutBody,
        DelayReason::OutOneDotBattery,
        DelayReason::OutTwoDotBattery,
        DelayReason::OutThreeDotBattery,
    ];

    /// Convert enum → DB / JSON string
    pub fn as_str(&self) -> &'static str {
        match self {
            DelayReason::OutBody => "out body",
            DelayReason::OutOneDotBattery => "out 1-dot battery",
            DelayReason::OutTwoDotBattery => "out of 2 dot battery",
            DelayReason::OutThreeDotBattery => "out of 3 dot battery",
        }
    }

    /// Convert DB / request string → enum. Matching is exact: no trimming,
    /// no case folding.
    pub fn from_db_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == s)
    }
}

impl fmt::Display for DelayReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for DelayReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_exactly_the_four_literals() {
        for r in DelayReason::ALL {
            assert_eq!(DelayReason::from_db_str(r.as_str()), Some(r));
        }
        assert_eq!(DelayReason::ALL.len(), 4);
    }

    #[test]
    fn rejects_near_misses() {
        for bad in [
            "",
            "Out body",
            "out body ",
            "out 2-dot battery",
            "out of 1 dot battery",
            "other",
        ] {
            assert_eq!(DelayReason::from_db_str(bad), None, "accepted {bad:?}");
        }
    }

    #[test]
    fn serializes_as_literal() {
        let json = serde_json::to_string(&DelayReason::OutTwoDotBattery).unwrap();
        assert_eq!(json, "\"out of 2 dot battery\"");
    }
}
