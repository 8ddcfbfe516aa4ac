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

/// Where the money of a record sits
///
/// Only used to group records, wallets have no balance of their own in the database
#[derive(
    Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, FromSqlRow, AsExpression,
)]
#[diesel(sql_type = Text)]
pub enum Wallet {
    #[default]
    Cash,
    Bank,
    Credit,
}

use Wallet::*;

impl Wallet {
    pub const ALL: [Wallet; 3] = [Cash, Bank, Credit];
}

impl Display for Wallet {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            Cash => f.write_str("Cash"),
            Bank => f.write_str("Bank"),
            Credit => f.write_str("Credit"),
        }
    }
}

impl FromStr for Wallet {
    type Err = ParseTypeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "cash" => Ok(Cash),
            "bank" | "account" => Ok(Bank),
            "credit" | "card" | "credit card" => Ok(Credit),
            _ => Err(ParseTypeError("Wallet", value.to_string())),
        }
    }
}

impl ToSql<Text, Sqlite> for Wallet {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Sqlite>) -> serialize::Result {
        out.set_value(self.to_string());
        Ok(IsNull::No)
    }
}

impl FromSql<Text, Sqlite> for Wallet {
    fn from_sql(bytes: <Sqlite as Backend>::RawValue<'_>) -> deserialize::Result<Self> {
        Ok(<String as FromSql<Text, Sqlite>>::from_sql(bytes)?.parse()?)
    }
}
