use crate::error::RangeError;
use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// First year covered by the reanalysis archive behind the analytics service.
pub const ARCHIVE_FIRST_YEAR: i32 = 1940;

/// Default form values on first load.
pub const DEFAULT_START_YEAR: i32 = 2000;
pub const DEFAULT_END_YEAR: i32 = 2020;

/// An inclusive, validated range of calendar years.
#[derive(Clone, Eq, PartialEq, Copy, Debug, Serialize, Deserialize)]
pub struct YearRange {
    pub start_year: i32,
    pub end_year: i32,
}

impl YearRange {
    /// Every year in the range, oldest first.
    pub fn years(&self) -> RangeInclusive<i32> {
        self.start_year..=self.end_year
    }
}

/// The inclusive window of years the form accepts.
#[derive(Clone, Eq, PartialEq, Copy, Debug)]
pub struct YearBounds {
    pub min: i32,
    pub max: i32,
}

impl YearBounds {
    /// Archive start through the current calendar year.
    pub fn archive() -> Self {
        Self {
            min: ARCHIVE_FIRST_YEAR,
            max: Utc::now().year(),
        }
    }

    fn check(&self, year: i32) -> Result<i32, RangeError> {
        if year < self.min || year > self.max {
            Err(RangeError::OutOfBounds {
                year,
                min: self.min,
                max: self.max,
            })
        } else {
            Ok(year)
        }
    }
}

fn parse_year(raw: &str) -> Option<i32> {
    raw.trim().parse::<i32>().ok()
}

/// Validate the raw text of the start/end inputs.
///
/// Runs before any request is built. Blank, non-numeric and fractional input
/// is rejected, as is a start year after the end year.
pub fn validate_year_inputs(
    start: &str,
    end: &str,
    bounds: YearBounds,
) -> Result<YearRange, RangeError> {
    let start_year =
        parse_year(start).ok_or_else(|| RangeError::StartNotANumber(start.to_string()))?;
    let end_year = parse_year(end).ok_or_else(|| RangeError::EndNotANumber(end.to_string()))?;

    if start_year > end_year {
        return Err(RangeError::StartAfterEnd {
            start: start_year,
            end: end_year,
        });
    }

    bounds.check(start_year)?;
    bounds.check(end_year)?;

    Ok(YearRange {
        start_year,
        end_year,
    })
}
