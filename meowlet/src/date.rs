use crate::essentials::*;

use std::ops::Range;

use chrono::{Datelike, Days, Months, NaiveDate};

pub enum Month {
    Calendar { year: i32, month: i32 },
    Until(NaiveDate),
}

impl Month {
    pub fn calendar(year: i32, month: i32) -> Self {
        Self::Calendar { year, month }
    }

    pub fn until(date: NaiveDate) -> Self {
        Self::Until(date)
    }

    pub fn as_date_range(&self) -> Result<Range<NaiveDate>> {
        Ok(match *self {
            Self::Calendar { year, month } => {
                let from = u32::try_from(month)
                    .ok()
                    .and_then(|m| NaiveDate::from_ymd_opt(year, m, 1))
                    .ok_or(Error::InvalidMonth(year, month))?;
                let to = from
                    .checked_add_months(Months::new(1))
                    .ok_or(Error::InvalidMonth(year, month))?;

                from..to
            }
            Self::Until(date) => {
                let invalid = || Error::InvalidMonth(date.year(), date.month() as i32);
                let to = date.checked_add_days(Days::new(1)).ok_or_else(invalid)?;
                let from = to.checked_sub_months(Months::new(1)).ok_or_else(invalid)?;
                from..to
            }
        })
    }
}

/// Time span a report or a query covers
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    #[default]
    All,
    Year(i32),
    Month { year: i32, month: i32 },
    /// Both bounds are included
    Between(NaiveDate, NaiveDate),
}

impl Period {
    pub fn as_date_range(&self) -> Result<Range<NaiveDate>> {
        match *self {
            Self::All => Ok(all_time()),
            Self::Year(year) => {
                let from = NaiveDate::from_ymd_opt(year, 1, 1)
                    .ok_or(Error::InvalidMonth(year, 1))?;
                let to = from
                    .checked_add_months(Months::new(12))
                    .ok_or(Error::InvalidMonth(year, 12))?;
                Ok(from..to)
            }
            Self::Month { year, month } => Month::calendar(year, month).as_date_range(),
            Self::Between(from, to) => {
                if to < from {
                    return Err(Error::InvalidRange(from, to));
                }
                let end = to
                    .checked_add_days(Days::new(1))
                    .ok_or(Error::InvalidRange(from, to))?;
                Ok(from..end)
            }
        }
    }

    /// The calendar month containing the given date
    pub fn month_of(date: NaiveDate) -> Self {
        Self::Month {
            year: date.year(),
            month: date.month() as i32,
        }
    }
}

/// Range covering every date a record can hold
///
/// Dates are stored as ISO 8601 text, so records stay within 4-digit years to keep the
/// lexicographic order
pub fn all_time() -> Range<NaiveDate> {
    let from = NaiveDate::from_ymd_opt(1, 1, 1).unwrap_or(NaiveDate::MIN);
    let to = NaiveDate::from_ymd_opt(10000, 1, 1).unwrap_or(NaiveDate::MAX);
    from..to
}

pub(crate) fn validate_date(date: NaiveDate) -> Result<()> {
    if !all_time().contains(&date) {
        return Err(Error::Invalid(format!(
            "record.date should be between 0001-01-01 and 9999-12-31, got {}",
            date
        )));
    }
    Ok(())
}
