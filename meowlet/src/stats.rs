use crate::{
    essentials::*,
    record::{Kind, Wallet},
    schema::records,
};

use std::collections::BTreeMap;
use std::ops::Range;

use chrono::{Datelike, NaiveDate};
use diesel::prelude::*;

mod categories;
pub use categories::{CategoriesStats, CategoryStats};

mod monthly;
pub use monthly::{MonthStats, MonthlyStats};

/// Sum of the amounts of each kind
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub income: Decimal,
    pub expense: Decimal,
    pub saving: Decimal,
}

impl Totals {
    pub fn add(&mut self, kind: Kind, amount: Decimal) {
        match kind {
            Kind::Income => self.income += amount,
            Kind::Expense => self.expense += amount,
            Kind::Saving => self.saving += amount,
        }
    }

    pub fn get(&self, kind: Kind) -> Decimal {
        match kind {
            Kind::Income => self.income,
            Kind::Expense => self.expense,
            Kind::Saving => self.saving,
        }
    }

    /// What is left to spend: income minus expenses and savings
    pub fn balance(&self) -> Decimal {
        self.income - self.expense - self.saving
    }

    pub fn outflow(&self) -> Decimal {
        self.expense + self.saving
    }

    pub fn is_empty(&self) -> bool {
        self.income.is_zero() && self.expense.is_zero() && self.saving.is_zero()
    }

    pub fn for_user(conn: &mut Conn, user: &str, range: Range<NaiveDate>) -> Result<Self> {
        let totals = records::table
            .filter(records::user.eq(user))
            .filter(records::date.ge(range.start))
            .filter(records::date.lt(range.end))
            .group_by(records::kind)
            .select(KindTotal::as_select())
            .load::<KindTotal>(conn)?;

        Ok(totals.into_iter().collect())
    }
}

impl FromIterator<KindTotal> for Totals {
    fn from_iter<I: IntoIterator<Item = KindTotal>>(iter: I) -> Self {
        let mut totals = Totals::default();
        for KindTotal { kind, amount } in iter {
            totals.add(kind, amount);
        }
        totals
    }
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct KindTotal {
    #[diesel(select_expression = records::kind)]
    pub kind: Kind,
    #[diesel(
        select_expression = db::total(records::amount),
        deserialize_as = db::Decimal
    )]
    pub amount: Decimal,
}

/// Totals split by wallet
#[derive(Debug, Default)]
pub struct WalletBalances(pub BTreeMap<Wallet, Totals>);

impl WalletBalances {
    pub fn for_user(conn: &mut Conn, user: &str, range: Range<NaiveDate>) -> Result<Self> {
        let rows = records::table
            .filter(records::user.eq(user))
            .filter(records::date.ge(range.start))
            .filter(records::date.lt(range.end))
            .group_by((records::wallet, records::kind))
            .select(WalletKindTotal::as_select())
            .load::<WalletKindTotal>(conn)?;

        let mut balances = BTreeMap::<Wallet, Totals>::new();
        for row in rows {
            balances.entry(row.wallet).or_default().add(row.kind, row.amount);
        }

        Ok(Self(balances))
    }

    pub fn balance(&self, wallet: Wallet) -> Decimal {
        self.0
            .get(&wallet)
            .map(Totals::balance)
            .unwrap_or(Decimal::ZERO)
    }

    /// Sum of every wallet balance
    pub fn total(&self) -> Decimal {
        self.0.values().map(Totals::balance).sum()
    }
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct WalletKindTotal {
    #[diesel(select_expression = records::wallet)]
    pub wallet: Wallet,
    #[diesel(select_expression = records::kind)]
    pub kind: Kind,
    #[diesel(
        select_expression = db::total(records::amount),
        deserialize_as = db::Decimal
    )]
    pub amount: Decimal,
}

/// Year and month of a date, as a sortable key
pub(crate) fn month_key(date: NaiveDate) -> (i32, u32) {
    (date.year(), date.month())
}
