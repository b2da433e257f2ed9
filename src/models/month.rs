use crate::errors::{AppError, AppResult};
use crate::utils::date::{all_days_of_month, has_iso_shape, month_name};
use chrono::{Datelike, NaiveDate};
use std::fmt;

/// A calendar month, parsed from `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    pub fn parse(s: &str) -> AppResult<Self> {
        if !has_iso_shape(s, 7, &[4]) {
            return Err(AppError::InvalidMonth(s.to_string()));
        }

        let d = NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d")
            .map_err(|_| AppError::InvalidMonth(s.to_string()))?;
        Ok(Self {
            year: d.year(),
            month: d.month(),
        })
    }

    /// `YYYY-MM`, the prefix shared by every date key of the month.
    pub fn prefix(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        all_days_of_month(self.year, self.month)
    }

    /// e.g. "February 2024"
    pub fn label(&self) -> String {
        format!("{} {}", month_name(self.month), self.year)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.prefix())
    }
}
