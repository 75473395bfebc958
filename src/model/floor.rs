use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three leasable floors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Floor {
    #[serde(alias = "Ground Floor", alias = "ground floor", alias = "1st")]
    Ground,
    #[serde(alias = "Second Floor", alias = "second floor", alias = "2nd")]
    Second,
    #[serde(alias = "Third Floor", alias = "third floor", alias = "3rd")]
    Third,
}

impl Floor {
    pub const ALL: [Floor; 3] = [Floor::Ground, Floor::Second, Floor::Third];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Floor::Ground => "Ground Floor",
            Floor::Second => "Second Floor",
            Floor::Third => "Third Floor",
        }
    }

    /// Tab order, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Floor::Ground => Floor::Second,
            Floor::Second => Floor::Third,
            Floor::Third => Floor::Ground,
        }
    }

    #[must_use]
    pub fn position(self) -> usize {
        match self {
            Floor::Ground => 0,
            Floor::Second => 1,
            Floor::Third => 2,
        }
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Floor::Ground => "ground",
            Floor::Second => "second",
            Floor::Third => "third",
        };
        f.write_str(name)
    }
}

impl FromStr for Floor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ground" | "ground floor" | "1st" | "1" => Ok(Floor::Ground),
            "second" | "second floor" | "2nd" | "2" => Ok(Floor::Second),
            "third" | "third floor" | "3rd" | "3" => Ok(Floor::Third),
            other => Err(format!("unknown floor '{other}'")),
        }
    }
}
