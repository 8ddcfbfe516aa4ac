use meowlet::prelude::*;

macro_rules! push_record {
    ( $builder:ident, $($col:expr),* $(,)? ) => {
        {
            use crate::utils::table_display::ColumnDisplay;
            $builder.push_record([$(ColumnDisplay::to_column(&$col),)*])
        }
    }
}

pub trait ColumnDisplay {
    fn to_column(&self) -> String;
}

impl ColumnDisplay for String {
    fn to_column(&self) -> String {
        self.clone()
    }
}

impl ColumnDisplay for &str {
    fn to_column(&self) -> String {
        self.to_string()
    }
}

impl ColumnDisplay for i64 {
    fn to_column(&self) -> String {
        self.to_string()
    }
}

impl ColumnDisplay for Amount {
    fn to_column(&self) -> String {
        self.to_string()
    }
}

impl ColumnDisplay for Kind {
    fn to_column(&self) -> String {
        self.to_string()
    }
}

impl ColumnDisplay for Wallet {
    fn to_column(&self) -> String {
        self.to_string()
    }
}
