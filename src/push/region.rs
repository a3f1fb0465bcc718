use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Hosting region of the push service
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    /// US South (Dallas)
    #[default]
    UsSouth,
    /// United Kingdom (London)
    UnitedKingdom,
    /// Sydney
    Sydney,
}

impl Region {
    /// Host suffix appended to `imfpush`
    pub fn suffix(&self) -> &'static str {
        match self {
            Region::UsSouth => ".ng.bluemix.net",
            Region::UnitedKingdom => ".eu-gb.bluemix.net",
            Region::Sydney => ".au-syd.bluemix.net",
        }
    }

    /// `https://imfpush<suffix>:443`
    pub fn base_url(&self) -> String {
        format!("https://imfpush{}:443", self.suffix())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::UsSouth => "us-south",
            Region::UnitedKingdom => "united-kingdom",
            Region::Sydney => "sydney",
        }
    }
}

impl FromStr for Region {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_start_matches('.').to_lowercase().as_str() {
            "us-south" | "us_south" | "ng" | "ng.bluemix.net" => Ok(Region::UsSouth),
            "united-kingdom" | "uk" | "eu-gb" | "eu-gb.bluemix.net" => Ok(Region::UnitedKingdom),
            "sydney" | "au-syd" | "au-syd.bluemix.net" => Ok(Region::Sydney),
            _ => Err(AppError::validation(
                "region",
                format!(
                    "Invalid region '{}'. Valid values are: us-south, united-kingdom, sydney",
                    s
                ),
            )),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
