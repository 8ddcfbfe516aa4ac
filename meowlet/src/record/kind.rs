use std::fmt::{Display, Error, Formatter};
use std::str::FromStr;

use crate::result::ParseTypeError;

use diesel::{
    backend::Backend,
    deserialize::{self, FromSql, FromSqlRow},
    expression::AsExpression,
    serialize::{self, IsNull, Output, ToSql},
    sql_types::Text,
    sqlite::Sqlite,
};
use oxydized_money::Decimal;

/// What a record does to the money of its user
#[derive(
    Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, FromSqlRow, AsExpression,
)]
#[diesel(sql_type = Text)]
pub enum Kind {
    Income,
    #[default]
    Expense,
    Saving,
}

use Kind::*;

impl Kind {
    pub const ALL: [Kind; 3] = [Income, Expense, Saving];

    pub fn is_income(&self) -> bool {
        self == &Income
    }

    /// Money leaving the spendable balance, either spent or put aside
    pub fn is_outflow(&self) -> bool {
        !self.is_income()
    }

    /// Apply the sign of the kind to an amount
    pub fn signed(&self, amount: Decimal) -> Decimal {
        if self.is_outflow() {
            -amount
        } else {
            amount
        }
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            Income => f.write_str("Income"),
            Expense => f.write_str("Expense"),
            Saving => f.write_str("Saving"),
        }
    }
}

impl FromStr for Kind {
    type Err = ParseTypeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "income" | "in" => Ok(Income),
            "expense" | "out" => Ok(Expense),
            "saving" | "savings" => Ok(Saving),
            _ => Err(ParseTypeError("Kind", value.to_string())),
        }
    }
}

impl ToSql<Text, Sqlite> for Kind {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Sqlite>) -> serialize::Result {
        out.set_value(self.to_string());
        Ok(IsNull::No)
    }
}

impl FromSql<Text, Sqlite> for Kind {
    fn from_sql(bytes: <Sqlite as Backend>::RawValue<'_>) -> deserialize::Result<Self> {
        Ok(<String as FromSql<Text, Sqlite>>::from_sql(bytes)?.parse()?)
    }
}
