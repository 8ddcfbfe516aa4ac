use meowlet::record::Kind;

use clap::{Args, Subcommand};

use crate::cli::PeriodArgs;

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Totals per kind, balance and mood
    Summary(Summary),
    /// Balance of each wallet
    Wallets(Wallets),
    /// Share of each category for one kind of record
    Categories(Categories),
    /// Totals per month
    Monthly(Monthly),
}

#[derive(Args, Clone, Debug)]
pub struct Summary {
    #[command(flatten)]
    pub period: PeriodArgs,
}

#[derive(Args, Clone, Debug)]
pub struct Wallets {
    #[command(flatten)]
    pub period: PeriodArgs,
}

#[derive(Args, Clone, Debug)]
pub struct Categories {
    #[command(flatten)]
    pub period: PeriodArgs,

    /// Kind of records to break down
    #[arg(short = 'k', long, default_value_t)]
    pub kind: Kind,
}

#[derive(Args, Clone, Debug)]
pub struct Monthly {
    #[command(flatten)]
    pub period: PeriodArgs,
}
