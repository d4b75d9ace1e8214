use serde::{Deserialize, Serialize};

/// A listed car with its rates in minor units (cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: i64,
    pub price_per_day: i64,
    pub price_per_km: i64,
}

/// Parties across which a rental's money is reconciled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Party {
    Driver,
    Owner,
    Insurance,
    Assistance,
    /// The marketplace itself. Serialized as `drivy`, the wire name the
    /// output contract has always used.
    #[serde(rename = "drivy")]
    Platform,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Debit,
    Credit,
}

impl Direction {
    pub const fn inverted(self) -> Self {
        match self {
            Self::Debit => Self::Credit,
            Self::Credit => Self::Debit,
        }
    }
}

/// A single debit or credit attributed to one party. Serializes in the
/// output document shape: `{who, type, amount}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Action {
    #[serde(rename = "who")]
    pub party: Party,
    #[serde(rename = "type")]
    pub direction: Direction,
    pub amount: i64,
}

impl Action {
    pub const fn debit(party: Party, amount: i64) -> Self {
        Self {
            party,
            direction: Direction::Debit,
            amount,
        }
    }

    pub const fn credit(party: Party, amount: i64) -> Self {
        Self {
            party,
            direction: Direction::Credit,
            amount,
        }
    }
}
