use std::borrow::Cow;

use meowlet::prelude::*;

use tabled::Tabled;

#[derive(derive_more::From)]
pub struct RecordToDisplay(Record, Currency);

impl Tabled for RecordToDisplay {
    const LENGTH: usize = 7;

    fn fields(&self) -> Vec<Cow<'_, str>> {
        let record = &self.0;

        vec![
            record.id.to_string().into(),
            record.date.to_string().into(),
            self.amount(),
            record.kind.to_string().into(),
            record.wallet.to_string().into(),
            record.category.as_str().into(),
            record.description.as_str().into(),
        ]
    }

    fn headers() -> Vec<Cow<'static, str>> {
        vec![
            "id".into(),
            "date".into(),
            "amount".into(),
            "kind".into(),
            "wallet".into(),
            "category".into(),
            "description".into(),
        ]
    }
}

impl RecordToDisplay {
    fn amount(&self) -> Cow<'_, str> {
        Amount(self.0.signed_amount(), self.1).to_string().into()
    }
}
