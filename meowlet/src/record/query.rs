use crate::{
    essentials::*,
    record::{Kind, Record, Wallet},
    schema::records,
};

use chrono::NaiveDate;
use diesel::prelude::*;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OrderField {
    #[default]
    Date,
    Amount,
    Category,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OrderDirection {
    Asc,
    #[default]
    Desc,
}

#[derive(Default)]
pub struct QueryRecord<'a> {
    pub user: Option<&'a str>,
    /// Inclusive lower bound on the date
    pub from: Option<NaiveDate>,
    /// Inclusive upper bound on the date
    pub to: Option<NaiveDate>,
    pub greater_than: Option<Decimal>,
    pub less_than: Option<Decimal>,
    pub kind: Option<Kind>,
    pub wallet: Option<Wallet>,
    pub category: Option<&'a str>,
    pub description: Option<&'a str>,
    pub count: Option<i64>,
    pub order: Vec<(OrderField, OrderDirection)>,
}

impl QueryRecord<'_> {
    pub fn run(&self, conn: &mut Conn) -> Result<Vec<Record>> {
        let Some(user) = self.user else {
            return Err(Error::Invalid("Missing user".to_owned()));
        };

        let mut query = records::table
            .into_boxed()
            .filter(records::user.eq(user));

        if let Some(date) = self.from {
            query = query.filter(records::date.ge(date));
        }
        if let Some(date) = self.to {
            query = query.filter(records::date.le(date));
        }
        if let Some(amount) = self.greater_than {
            query = query.filter(records::amount.ge(crate::db::Decimal(amount)));
        }
        if let Some(amount) = self.less_than {
            query = query.filter(records::amount.lt(crate::db::Decimal(amount)));
        }
        if let Some(kind) = self.kind {
            query = query.filter(records::kind.eq(kind));
        }
        if let Some(wallet) = self.wallet {
            query = query.filter(records::wallet.eq(wallet));
        }
        if let Some(category) = self.category {
            query = query.filter(records::category.eq(category));
        }
        if let Some(description) = self.description {
            query = query.filter(records::description.like(description));
        }

        let order = if self.order.is_empty() {
            &[(OrderField::Date, OrderDirection::Desc)][..]
        } else {
            &self.order[..]
        };
        for (field, direction) in order {
            query = match (field, direction) {
                (OrderField::Date, OrderDirection::Asc) => query.then_order_by(records::date.asc()),
                (OrderField::Date, OrderDirection::Desc) => {
                    query.then_order_by(records::date.desc())
                }
                (OrderField::Amount, OrderDirection::Asc) => {
                    query.then_order_by(records::amount.asc())
                }
                (OrderField::Amount, OrderDirection::Desc) => {
                    query.then_order_by(records::amount.desc())
                }
                (OrderField::Category, OrderDirection::Asc) => {
                    query.then_order_by(records::category.asc())
                }
                (OrderField::Category, OrderDirection::Desc) => {
                    query.then_order_by(records::category.desc())
                }
            };
        }
        // Newest entry first among equals
        query = query.then_order_by(records::id.desc());

        if let Some(count) = self.count {
            query = query.limit(count);
        }

        Ok(query.select(Record::as_select()).load::<Record>(conn)?)
    }
}
