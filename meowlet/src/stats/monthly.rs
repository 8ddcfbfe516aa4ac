use crate::{
    essentials::*,
    record::Kind,
    schema::records,
    stats::{month_key, Totals},
};

use std::collections::BTreeMap;
use std::ops::Range;

use chrono::NaiveDate;
use diesel::prelude::*;

#[derive(Debug, PartialEq, Eq)]
pub struct MonthStats {
    pub year: i32,
    pub month: u32,
    pub totals: Totals,
}

/// Totals of each calendar month holding records, oldest first
#[derive(Debug, Default)]
pub struct MonthlyStats(pub Vec<MonthStats>);

impl MonthlyStats {
    pub fn for_user(conn: &mut Conn, user: &str, range: Range<NaiveDate>) -> Result<Self> {
        let rows = records::table
            .filter(records::user.eq(user))
            .filter(records::date.ge(range.start))
            .filter(records::date.lt(range.end))
            .select((records::date, records::kind, records::amount))
            .load::<(NaiveDate, Kind, db::Decimal)>(conn)?;

        Ok(rows.into_iter().collect())
    }

    /// Largest income or outflow of a single month, used to scale charts
    pub fn peak(&self) -> Decimal {
        self.0
            .iter()
            .map(|m| m.totals.income.max(m.totals.outflow()))
            .max()
            .unwrap_or(Decimal::ZERO)
    }
}

impl FromIterator<(NaiveDate, Kind, db::Decimal)> for MonthlyStats {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, Kind, db::Decimal)>>(iter: I) -> Self {
        let mut months = BTreeMap::<(i32, u32), Totals>::new();
        for (date, kind, amount) in iter {
            months.entry(month_key(date)).or_default().add(kind, amount.into());
        }

        Self(
            months
                .into_iter()
                .map(|((year, month), totals)| MonthStats {
                    year,
                    month,
                    totals,
                })
                .collect(),
        )
    }
}
