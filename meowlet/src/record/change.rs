use crate::{
    category,
    date::validate_date,
    essentials::*,
    record::{new::validate_amount, Kind, Record, Wallet},
    schema::records,
};

use chrono::NaiveDate;
use diesel::prelude::*;

/// Edit of a single record, addressed by its id
#[derive(Default, Clone)]
pub struct ChangeRecord<'a> {
    pub date: Option<NaiveDate>,
    pub wallet: Option<Wallet>,
    pub kind: Option<Kind>,
    pub amount: Option<Decimal>,
    pub category: Option<&'a str>,
    pub description: Option<&'a str>,
}

impl<'a> ChangeRecord<'a> {
    pub fn save(self, conn: &mut Conn, record: &Record) -> Result<()> {
        self.validate(record)?.save(conn)
    }

    pub fn apply(self, conn: &mut Conn, record: &mut Record) -> Result<()> {
        let changeset = self.validate(record)?.save_changeset(conn)?;

        if let Some(value) = changeset.date {
            record.date = value;
        }
        if let Some(value) = changeset.wallet {
            record.wallet = value;
        }
        if let Some(value) = changeset.kind {
            record.kind = value;
        }
        if let Some(value) = changeset.amount {
            record.amount = crate::db::Decimal::stored(value);
        }
        if let Some(value) = changeset.category {
            record.category = value.to_string();
        }
        if let Some(value) = changeset.description {
            record.description = value.to_string();
        }

        Ok(())
    }

    pub fn validate(self, record: &Record) -> Result<ValidatedChangeRecord<'a>> {
        if let Some(amount) = self.amount {
            validate_amount(amount)?;
        }
        if let Some(date) = self.date {
            validate_date(date)?;
        }
        if let Some(category) = self.category {
            if category.trim().is_empty() {
                return Err(Error::Invalid(
                    "record.category should not be empty".to_owned(),
                ));
            }
        }

        Ok(ValidatedChangeRecord(
            record.id,
            self.as_changeset(self.kind.unwrap_or(record.kind)),
        ))
    }

    /// Changeset with the category in the preset spelling of the resulting kind
    pub fn as_changeset(&self, kind: Kind) -> RecordChangeset<'a> {
        RecordChangeset {
            date: self.date,
            wallet: self.wallet,
            kind: self.kind,
            amount: self.amount,
            category: self.category.map(|name| category::normalize(kind, name)),
            description: self.description,
        }
    }
}

pub struct ValidatedChangeRecord<'a>(i64, RecordChangeset<'a>);

impl<'a> ValidatedChangeRecord<'a> {
    pub fn save(self, conn: &mut Conn) -> Result<()> {
        self.save_changeset(conn)?;
        Ok(())
    }

    fn save_changeset(self, conn: &mut Conn) -> Result<RecordChangeset<'a>> {
        let ValidatedChangeRecord(id, changeset) = self;

        let updated = diesel::update(records::table.find(id))
            .set(changeset.clone())
            .execute(conn)?;
        if updated == 0 {
            return Err(Error::ModelNotFound("Record"));
        }
        log::debug!("Updated record {}", id);

        Ok(changeset)
    }
}

#[derive(Default, Clone, AsChangeset)]
#[diesel(table_name = records)]
pub struct RecordChangeset<'a> {
    pub date: Option<NaiveDate>,
    pub wallet: Option<Wallet>,
    pub kind: Option<Kind>,
    #[diesel(serialize_as = crate::db::Decimal)]
    pub amount: Option<Decimal>,
    pub category: Option<&'a str>,
    pub description: Option<&'a str>,
}
