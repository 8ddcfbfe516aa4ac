use crate::{essentials::*, record::Kind, schema::records};

use std::ops::Range;

use chrono::NaiveDate;
use diesel::prelude::*;

/// Amount per category for one kind of record, largest first
#[derive(Debug)]
pub struct CategoriesStats {
    pub kind: Kind,
    pub stats: Vec<CategoryStats>,
    pub amount: Decimal,
}

impl CategoriesStats {
    pub fn for_user(
        conn: &mut Conn,
        user: &str,
        range: Range<NaiveDate>,
        kind: Kind,
    ) -> Result<Self> {
        let stats = records::table
            .filter(records::user.eq(user))
            .filter(records::kind.eq(kind))
            .filter(records::date.ge(range.start))
            .filter(records::date.lt(range.end))
            .group_by(records::category)
            .select(CategoryStats::as_select())
            .load::<CategoryStats>(conn)?;

        Ok(Self::new(kind, stats))
    }

    fn new(kind: Kind, mut stats: Vec<CategoryStats>) -> Self {
        stats.sort_by(|a, b| b.amount.cmp(&a.amount).then_with(|| a.category.cmp(&b.category)));
        let amount = stats.iter().fold(Decimal::ZERO, |acc, e| acc + e.amount);

        Self {
            kind,
            stats,
            amount,
        }
    }

    /// Share of the category in the kind total, in percent
    pub fn share(&self, stats: &CategoryStats) -> Decimal {
        if self.amount.is_zero() {
            return Decimal::ZERO;
        }
        (stats.amount * Decimal::from(100) / self.amount).round_dp(1)
    }

    pub fn find(&self, category: &str) -> Option<&CategoryStats> {
        self.stats.iter().find(|e| e.category == category)
    }
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CategoryStats {
    #[diesel(select_expression = records::category)]
    pub category: String,
    #[diesel(
        select_expression = db::total(records::amount),
        deserialize_as = db::Decimal
    )]
    pub amount: Decimal,
}
