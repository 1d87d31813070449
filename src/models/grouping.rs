use crate::errors::AppError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Dimension used to bucket totals and chart series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Grouping {
    #[default]
    Category,
    Occupation,
}

impl Grouping {
    pub fn as_str(&self) -> &'static str {
        match self {
            Grouping::Category => "Category",
            Grouping::Occupation => "Occupation",
        }
    }
}

impl fmt::Display for Grouping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Grouping {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "category" => Ok(Grouping::Category),
            "occupation" => Ok(Grouping::Occupation),
            _ => Err(AppError::InvalidGrouping(s.to_string())),
        }
    }
}
