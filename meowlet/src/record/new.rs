use crate::{
    category,
    date::validate_date,
    essentials::*,
    record::{Kind, Record, Wallet},
    schema::records,
};

use chrono::{NaiveDate, Utc};
use diesel::prelude::*;

pub struct NewRecord<'a> {
    pub user: &'a str,
    pub date: NaiveDate,
    pub wallet: Wallet,
    pub kind: Kind,
    pub amount: Decimal,
    pub category: &'a str,
    pub description: &'a str,
}

impl<'a> NewRecord<'a> {
    pub fn new(user: &'a str) -> Self {
        Self {
            user,
            date: Utc::now().date_naive(),
            wallet: Wallet::default(),
            kind: Kind::default(),
            amount: Decimal::ZERO,
            category: category::DEFAULT,
            description: "",
        }
    }

    pub fn save(self, conn: &mut Conn) -> Result<Record> {
        self.validate()?.save(conn)
    }

    pub fn validate(self) -> Result<ValidatedNewRecord<'a>> {
        if self.user.trim().is_empty() {
            return Err(Error::Invalid("record.user should not be empty".to_owned()));
        }
        if self.category.trim().is_empty() {
            return Err(Error::Invalid(
                "record.category should not be empty".to_owned(),
            ));
        }
        validate_amount(self.amount)?;
        validate_date(self.date)?;

        Ok(ValidatedNewRecord(self.as_insertable()))
    }

    pub fn as_insertable(&self) -> InsertableRecord<'a> {
        InsertableRecord {
            user: self.user,
            date: self.date,
            wallet: self.wallet,
            kind: self.kind,
            amount: self.amount,
            category: category::normalize(self.kind, self.category),
            description: self.description,
        }
    }
}

/// Amounts are strictly positive once rounded to the stored precision
pub(crate) fn validate_amount(amount: Decimal) -> Result<()> {
    if db::Decimal::stored(amount) <= Decimal::ZERO {
        return Err(Error::Invalid(format!(
            "record.amount should be greater than 0, got {}",
            amount
        )));
    }
    Ok(())
}

pub struct ValidatedNewRecord<'a>(InsertableRecord<'a>);

impl ValidatedNewRecord<'_> {
    pub fn save(self, conn: &mut Conn) -> Result<Record> {
        let record = diesel::insert_into(records::table)
            .values(self.0)
            .returning(Record::as_returning())
            .get_result(conn)?;
        log::debug!("Created record {:?}", record);

        Ok(record)
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = records)]
pub struct InsertableRecord<'a> {
    pub user: &'a str,
    pub date: NaiveDate,
    pub wallet: Wallet,
    pub kind: Kind,
    #[diesel(serialize_as = crate::db::Decimal)]
    pub amount: Decimal,
    pub category: &'a str,
    pub description: &'a str,
}
