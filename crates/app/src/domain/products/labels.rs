//! Product Labels

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Closed set of product categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Drink,
    Food,
    Clothes,
    Limited,
}

impl Label {
    pub const ALL: [Self; 4] = [Self::Drink, Self::Food, Self::Clothes, Self::Limited];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Drink => "drink",
            Self::Food => "food",
            Self::Clothes => "clothes",
            Self::Limited => "limited",
        }
    }
}

impl Display for Label {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown product label: {0}")]
pub struct UnknownLabel(pub String);

impl FromStr for Label {
    type Err = UnknownLabel;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|label| label.as_str() == value)
            .ok_or_else(|| UnknownLabel(value.to_string()))
    }
}
