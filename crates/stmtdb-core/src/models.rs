use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use thiserror::Error;

/// The (year, month) identity of a statement.
///
/// Ordering exists only so backends can key ordered maps; scan order is
/// store-defined and carries no recency meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Period {
    pub year: i32,
    pub month: i32,
}

impl Period {
    pub fn new(year: i32, month: i32) -> Self {
        Self { year, month }
    }
}

impl Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.year, self.month)
    }
}

#[derive(Debug, Error)]
#[error("invalid statement identifier: {0}")]
pub struct InvalidIdentifier(pub String);

/// A resolved textual statement identifier: either an explicit period, or the
/// reserved "0-0" sentinel meaning "whichever statement the store surfaces
/// last".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementId {
    Period(Period),
    Latest,
}

impl FromStr for StatementId {
    type Err = InvalidIdentifier;

    /// Splits on the first `-` into at most two tokens and parses both as
    /// integers. No range checking on year or month happens here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.splitn(2, '-');
        let year = tokens
            .next()
            .and_then(|t| t.parse::<i32>().ok())
            .ok_or_else(|| InvalidIdentifier(s.to_string()))?;
        let month = tokens
            .next()
            .and_then(|t| t.parse::<i32>().ok())
            .ok_or_else(|| InvalidIdentifier(s.to_string()))?;

        if year == 0 && month == 0 {
            return Ok(StatementId::Latest);
        }
        Ok(StatementId::Period(Period::new(year, month)))
    }
}

/// A full statement record. The payload is supplied wholesale by the caller
/// and treated as opaque beyond the embedded `year` and `month` key fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Statement(pub Map<String, Value>);

impl Statement {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The identity key embedded in the payload, if both fields are present,
    /// integral, and representable.
    pub fn period(&self) -> Option<Period> {
        let year = i32::try_from(self.0.get("year")?.as_i64()?).ok()?;
        let month = i32::try_from(self.0.get("month")?.as_i64()?).ok()?;
        Some(Period::new(year, month))
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }
}

/// The fixed projection returned by listing: the period fields plus the
/// caller-supplied creation timestamp when the record carries one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementSummary {
    pub year: i32,
    pub month: i32,
    #[serde(rename = "createDateTime", skip_serializing_if = "Option::is_none")]
    pub create_date_time: Option<Value>,
}

impl StatementSummary {
    pub fn period(&self) -> Period {
        Period::new(self.year, self.month)
    }
}
