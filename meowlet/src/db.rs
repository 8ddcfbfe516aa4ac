use std::path::Path;

use crate::result::{Error, Result};

use diesel::{
    backend::Backend,
    deserialize::{self, FromSql, FromSqlRow},
    expression::AsExpression,
    prelude::*,
    serialize::{self, IsNull, Output, ToSql},
    sql_types::BigInt,
    sqlite::{Sqlite, SqliteConnection},
};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub type Conn = SqliteConnection;

/// Owned connection to a meowlet database
#[derive(derive_more::Deref, derive_more::DerefMut, derive_more::From, derive_more::Into)]
pub struct Database(Conn);

impl Database {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let url = path
            .to_str()
            .ok_or_else(|| Error::Invalid(format!("Non UTF-8 database path {}", path.display())))?;

        log::debug!("Opening database {}", url);
        Ok(Self(Conn::establish(url)?))
    }

    pub fn memory() -> Result<Self> {
        Ok(Self(Conn::establish(":memory:")?))
    }

    /// Run the pending migrations
    pub fn setup(&mut self) -> Result<()> {
        for version in self.0.run_pending_migrations(MIGRATIONS)? {
            log::info!("Applied migration {}", version);
        }

        Ok(())
    }
}

define_sql_function! {
    /// Like sum, but returns 0 instead of NULL
    ///
    /// Additionally, the type constraint makes sum (and total) return an integer instead of a
    /// double
    #[aggregate]
    #[sql_name = "TOTAL"]
    fn total(x: BigInt) -> BigInt;
}

/// Fixed point storage of amounts, with 3 decimals
#[derive(Copy, Clone, Debug, derive_more::From, derive_more::Into, FromSqlRow, AsExpression)]
#[diesel(sql_type = BigInt)]
pub struct Decimal(pub oxydized_money::Decimal);

pub const SCALE: u32 = 3;

impl Decimal {
    /// Rounds the value to the precision it will be stored with
    pub fn stored(value: oxydized_money::Decimal) -> oxydized_money::Decimal {
        let mut value = value;
        value.rescale(SCALE);
        value
    }
}

impl ToSql<BigInt, Sqlite> for Decimal {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Sqlite>) -> serialize::Result {
        match TryInto::<i64>::try_into(Self::stored(self.0).mantissa()) {
            Ok(value) => {
                out.set_value(value);
                Ok(IsNull::No)
            }
            Err(e) => Err(Box::new(e)),
        }
    }
}

impl FromSql<BigInt, Sqlite> for Decimal {
    fn from_sql(bytes: <Sqlite as Backend>::RawValue<'_>) -> deserialize::Result<Self> {
        Ok(oxydized_money::Decimal::new(i64::from_sql(bytes)?, SCALE).into())
    }
}
