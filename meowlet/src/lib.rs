pub mod category;
pub mod date;
pub mod db;
pub mod goal;
pub mod mood;
pub mod record;
pub mod result;
pub mod schema;
pub mod stats;
pub mod user;

#[cfg(test)]
pub mod test;

pub use oxydized_money::{Amount, Currency, Decimal};

pub use db::{Conn, Database};
pub use result::{Error, OptionalExtension, Result};

mod essentials {
    pub use crate::{
        db::{self, Conn},
        result::{Error, Result},
        Currency, Decimal,
    };
}

pub mod prelude {
    pub use crate::{
        db::{Conn, Database},
        goal::{Goal, Progress},
        mood::Mood,
        record::{Kind, Record, Wallet},
        result::{Error, OptionalExtension, Result},
        stats::Totals,
        Amount, Currency, Decimal,
    };
    pub use diesel::Connection;
}
