use std::path::PathBuf;

use meowlet::{
    prelude::*,
    record::query::{OrderDirection, OrderField},
};

use anyhow::Result;
use chrono::{offset::Local, NaiveDate};
use clap::{builder::PossibleValue, Args, Subcommand, ValueEnum};

use crate::cli::PeriodArgs;

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List records
    List(List),
    /// Show details about a record
    Show(Show),
    /// Create a new record
    Create(Create),
    /// Update a record
    Update(Update),
    /// Export records as CSV
    Export(Export),
}

#[derive(Args, Clone, Debug)]
pub struct Show {
    #[command(subcommand)]
    pub action: Option<Action>,

    /// Id of the record to show
    id: u32,
}

impl Show {
    pub fn id(&self) -> i64 {
        self.id as i64
    }
}

#[derive(Args, Clone, Debug)]
pub struct Create {
    /// Amount of the record, always positive
    ///
    /// Whether it adds to or takes from the balance depends on the kind
    #[arg(help_heading = "Record")]
    pub amount: Decimal,

    /// Describe the record
    #[arg(help_heading = "Record")]
    pub description: String,

    /// Kind of record
    ///
    /// Possible values are income, expense, saving
    #[arg(short = 'k', long, default_value_t, help_heading = "Record")]
    pub kind: Kind,

    /// Where the money is kept
    ///
    /// Possible values are cash, bank, credit
    #[arg(short = 'w', long, default_value_t, help_heading = "Record")]
    pub wallet: Wallet,

    /// Date of the record, today by default
    #[arg(long, value_name = "DATE", help_heading = "Record")]
    date: Option<NaiveDate>,

    /// Category of the record
    #[arg(long, value_name = "NAME", help_heading = "Record")]
    pub category: Option<String>,
}

impl Create {
    pub fn date(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| Local::now().date_naive())
    }
}

#[derive(Args, Clone, Debug)]
pub struct Update {
    /// Id of the record to update
    id: u32,

    #[command(flatten)]
    pub args: UpdateArgs,
}

impl Update {
    pub fn id(&self) -> i64 {
        self.id as i64
    }
}

#[derive(Debug, Clone, Copy, derive_more::Into)]
pub struct Sort(OrderField, OrderDirection);

impl Sort {
    pub fn try_from(value: &str) -> Result<Self> {
        Self::from_str(value, true).map_err(|e| anyhow::anyhow!("Cannot construct sort with {}", e))
    }
}

impl ValueEnum for Sort {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            Sort(OrderField::Date, OrderDirection::Asc),
            Sort(OrderField::Amount, OrderDirection::Asc),
            Sort(OrderField::Category, OrderDirection::Asc),
            Sort(OrderField::Date, OrderDirection::Desc),
            Sort(OrderField::Amount, OrderDirection::Desc),
            Sort(OrderField::Category, OrderDirection::Desc),
        ]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(PossibleValue::new(self.to_string()))
    }
}

impl core::fmt::Display for Sort {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let field = match self.0 {
            OrderField::Date => "date",
            OrderField::Amount => "amount",
            OrderField::Category => "category",
        };
        match self.1 {
            OrderDirection::Asc => write!(f, "{field}"),
            OrderDirection::Desc => write!(f, "{field}.desc"),
        }
    }
}

#[derive(Args, Clone, Debug, Default)]
pub struct Filters {
    #[command(flatten)]
    pub period: PeriodArgs,

    /// Show only records with an amount greater than this one
    #[arg(
        short = 'g',
        long,
        alias = "gt",
        value_name = "AMOUNT",
        help_heading = "Filter records"
    )]
    pub greater_than: Option<Decimal>,

    /// Show only records with an amount less than this one
    #[arg(
        short = 'l',
        long,
        alias = "lt",
        value_name = "AMOUNT",
        help_heading = "Filter records"
    )]
    pub less_than: Option<Decimal>,

    /// Show only records of this kind
    #[arg(short = 'k', long, help_heading = "Filter records")]
    pub kind: Option<Kind>,

    /// Show only records of this wallet
    #[arg(short = 'w', long, help_heading = "Filter records")]
    pub wallet: Option<Wallet>,

    /// Show only records of this category
    #[arg(long, value_name = "NAME", help_heading = "Filter records")]
    pub category: Option<String>,

    /// Show only records with this text in the description
    #[arg(long, value_name = "TEXT", help_heading = "Filter records")]
    description: Option<String>,

    /// Maximum number of records to show
    #[arg(short = 'c', long, help_heading = "Filter records")]
    pub count: Option<i64>,

    #[arg(long, help_heading = "Sort records")]
    pub sort: Vec<Sort>,
}

impl Filters {
    pub fn description(&self) -> Option<String> {
        self.description.clone().map(|mut n| {
            if !n.starts_with('%') {
                n = format!("%{n}");
            }
            if !n.ends_with('%') {
                n.push('%');
            }
            n
        })
    }

    pub fn order(&self) -> Vec<(OrderField, OrderDirection)> {
        self.sort.iter().map(|&sort| sort.into()).collect()
    }
}

#[derive(Args, Clone, Debug)]
pub struct List {
    #[command(subcommand)]
    pub action: Option<Action>,

    #[command(flatten)]
    pub filters: Filters,
}

#[derive(Args, Clone, Debug)]
pub struct Export {
    /// Write to this file instead of the standard output
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub filters: Filters,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Action {
    /// Update the listed record(s)
    Update(UpdateArgs),

    /// Delete the listed record(s)
    Delete {
        /// Confirm the deletion
        #[arg(long)]
        confirm: bool,
    },
}

#[derive(Args, Clone, Debug, Default)]
pub struct UpdateArgs {
    /// Change the amount
    #[arg(long, help_heading = "Record")]
    pub amount: Option<Decimal>,

    /// Change the kind
    #[arg(short = 'k', long, help_heading = "Record")]
    pub kind: Option<Kind>,

    /// Change the wallet
    #[arg(short = 'w', long, help_heading = "Record")]
    pub wallet: Option<Wallet>,

    /// Change the date
    #[arg(long, value_name = "DATE", help_heading = "Record")]
    pub date: Option<NaiveDate>,

    /// Change the category
    #[arg(long, value_name = "NAME", help_heading = "Record")]
    pub category: Option<String>,

    /// Change the description
    #[arg(long, value_name = "TEXT", help_heading = "Record")]
    pub description: Option<String>,
}

impl UpdateArgs {
    pub fn changes(&self) -> meowlet::record::ChangeRecord<'_> {
        meowlet::record::ChangeRecord {
            date: self.date,
            wallet: self.wallet,
            kind: self.kind,
            amount: self.amount,
            category: self.category.as_deref(),
            description: self.description.as_deref(),
        }
    }
}
