use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Roster identifier ("Card No" column, or the row index when missing).
///
/// Spreadsheet ids can be numbers or text; both are kept as text so that
/// `17` read from a number cell and `"17"` read from a JSON key match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(String);

impl EmployeeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fallback id for rows without a card number.
    pub fn from_row_index(index: usize) -> Self {
        Self(index.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EmployeeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for EmployeeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub duty: String,
    /// Monthly base salary, never negative.
    pub salary: Decimal,
}

impl Employee {
    pub fn new(
        id: impl Into<EmployeeId>,
        name: impl Into<String>,
        duty: impl Into<String>,
        salary: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            duty: duty.into(),
            salary: salary.max(Decimal::ZERO),
        }
    }
}
