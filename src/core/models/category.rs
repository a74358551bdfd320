//! Issue categories
//!
//! Closed set of civic categories a citizen can file under.

use serde::{Deserialize, Serialize};

/// Category of a reported issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Roads, bridges, traffic
    Road,
    /// Water supply, pipes, drainage
    Water,
    /// Power supply, wiring, outages
    Electricity,
    /// Garbage, waste, public hygiene
    Sanitation,
    /// Crime, public safety
    Law,
}

impl Category {
    /// All categories, in display order
    pub const ALL: [Self; 5] =
        [Self::Road, Self::Water, Self::Electricity, Self::Sanitation, Self::Law];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Road => "Road",
            Self::Water => "Water",
            Self::Electricity => "Electricity",
            Self::Sanitation => "Sanitation",
            Self::Law => "Law",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "road" => Ok(Self::Road),
            "water" => Ok(Self::Water),
            "electricity" => Ok(Self::Electricity),
            "sanitation" => Ok(Self::Sanitation),
            "law" => Ok(Self::Law),
            _ => Err(format!(
                "Invalid category: {s}. Use: Road, Water, Electricity, Sanitation, Law"
            )),
        }
    }
}
