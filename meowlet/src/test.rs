#![cfg(test)]

use crate::{
    goal::Goal,
    prelude::*,
    record::{NewRecord, Record},
};
use anyhow::Result;
use chrono::NaiveDate;

pub mod prelude {
    pub use crate::prelude::*;
    pub use crate::test::{self, Reload};
    pub use anyhow::Result;
    pub use pretty_assertions::{assert_eq, assert_ne};
}

pub trait Reload: Sized {
    fn reload(&mut self, conn: &mut Conn) -> Result<&mut Self>;
}

impl Reload for Record {
    fn reload(&mut self, conn: &mut Conn) -> Result<&mut Self> {
        *self = Record::find(conn, self.id)?;
        Ok(self)
    }
}

impl Reload for Goal {
    fn reload(&mut self, conn: &mut Conn) -> Result<&mut Self> {
        *self = Goal::find(conn, self.id)?;
        Ok(self)
    }
}

pub fn db() -> Result<Database> {
    let mut db = Database::memory()?;
    db.setup()?;
    Ok(db)
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn record(conn: &mut Conn, user: &str, kind: Kind, amount: i64) -> Result<Record> {
    Ok(NewRecord {
        kind,
        amount: Decimal::from(amount),
        ..NewRecord::new(user)
    }
    .save(conn)?)
}
