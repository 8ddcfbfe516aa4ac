pub use crate::schema::records;
use crate::{essentials::*, Amount};

use chrono::NaiveDate;
use diesel::prelude::*;

mod kind;
pub use kind::Kind;

mod wallet;
pub use wallet::Wallet;

pub mod change;
pub mod new;
pub mod query;

pub use change::ChangeRecord;
pub use new::NewRecord;
pub use query::QueryRecord;

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = records)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Record {
    pub id: i64,
    pub user: String,
    pub date: NaiveDate,
    pub wallet: Wallet,
    pub kind: Kind,
    #[diesel(deserialize_as = crate::db::Decimal)]
    pub amount: Decimal,
    pub category: String,
    pub description: String,
}

impl Record {
    pub fn amount(&self, currency: Currency) -> Amount {
        Amount(self.amount, currency)
    }

    /// Amount with the sign of the record kind
    pub fn signed_amount(&self) -> Decimal {
        self.kind.signed(self.amount)
    }

    pub fn find(conn: &mut Conn, id: i64) -> Result<Self> {
        records::table
            .find(id)
            .select(Record::as_select())
            .first(conn)
            .map_err(|e| Error::from_diesel_error(e, "Record", None))
    }

    pub fn delete(&mut self, conn: &mut Conn) -> Result<()> {
        log::debug!("Deleting record {}", self.id);
        diesel::delete(&*self).execute(conn)?;

        Ok(())
    }
}

pub(crate) fn delete_by_user(conn: &mut Conn, user: &str) -> Result<usize> {
    Ok(diesel::delete(records::table)
        .filter(records::user.eq(user))
        .execute(conn)?)
}
