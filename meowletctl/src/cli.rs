use std::ops::Range;
use std::path::PathBuf;

use anyhow::Result;
use chrono::{offset::Local, Days, NaiveDate};
use clap::{Args, Parser, Subcommand};

use meowlet::date::{all_time, Period};

pub mod category;
pub mod goal;
pub mod record;
pub mod report;
pub mod user;

/// Meowlet control
#[derive(Default, Clone, Debug, Parser)]
#[command(version, infer_subcommands = true)]
pub struct Cli {
    #[clap(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity,

    /// Sets a custom config directory
    ///
    /// The default value is $MEOWLET_CONFIG if it is set, or
    /// $XDG_CONFIG_HOME/meowlet otherwise
    #[arg(
        short = 'C',
        long,
        value_name = "DIR",
        global = true,
        help_heading = "Global options"
    )]
    pub config: Option<PathBuf>,

    /// Sets a custom data directory
    ///
    /// The default value is $MEOWLET_DATA if it is set, or
    /// $XDG_DATA_HOME/meowlet otherwise
    #[arg(
        short = 'D',
        long,
        value_name = "DIR",
        global = true,
        help_heading = "Global options"
    )]
    pub data: Option<PathBuf>,

    /// Sets the user to consider for the following command
    ///
    /// A default value can be configured
    #[arg(
        short = 'U',
        long,
        value_name = "NAME",
        global = true,
        help_heading = "Global options"
    )]
    pub user: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Record related commands
    #[command(subcommand)]
    Record(record::Command),
    /// Saving goal related commands
    #[command(subcommand)]
    Goal(goal::Command),
    /// Summaries and charts
    #[command(subcommand)]
    Report(report::Command),
    /// Category related commands
    #[command(subcommand)]
    Category(category::Command),
    /// User related commands
    #[command(subcommand)]
    User(user::Command),
    /// Reset the database
    #[command(hide = true)]
    Reset {
        #[arg(long, required = true)]
        confirm: bool,
    },
}

#[derive(Args, Clone, Debug, Default)]
pub struct PeriodArgs {
    /// Restrict to a calendar year
    #[arg(
        long,
        value_name = "YEAR",
        conflicts_with_all = ["month", "this_month", "from", "to"],
        help_heading = "Period"
    )]
    pub year: Option<i32>,

    /// Restrict to a calendar month
    #[arg(
        long,
        value_name = "YYYY-MM",
        value_parser = parse_month,
        conflicts_with_all = ["this_month", "from", "to"],
        help_heading = "Period"
    )]
    pub month: Option<(i32, i32)>,

    /// Restrict to the current month
    #[arg(long, conflicts_with_all = ["from", "to"], help_heading = "Period")]
    pub this_month: bool,

    /// Start from this date, included
    #[arg(long, value_name = "DATE", help_heading = "Period")]
    pub from: Option<NaiveDate>,

    /// Stop at this date, included
    #[arg(long, value_name = "DATE", help_heading = "Period")]
    pub to: Option<NaiveDate>,
}

impl PeriodArgs {
    pub fn is_set(&self) -> bool {
        self.year.is_some()
            || self.month.is_some()
            || self.this_month
            || self.from.is_some()
            || self.to.is_some()
    }

    pub fn period(&self) -> Option<Period> {
        if let Some(year) = self.year {
            Some(Period::Year(year))
        } else if let Some((year, month)) = self.month {
            Some(Period::Month { year, month })
        } else if self.this_month {
            Some(Period::month_of(Local::now().date_naive()))
        } else {
            None
        }
    }

    pub fn range(&self) -> Result<Range<NaiveDate>> {
        if let Some(period) = self.period() {
            return Ok(period.as_date_range()?);
        }

        let all = all_time();
        let start = self.from.unwrap_or(all.start);
        let end = match self.to {
            Some(to) => to
                .checked_add_days(Days::new(1))
                .ok_or_else(|| anyhow::anyhow!("Invalid period, --to {to} is out of range"))?,
            None => all.end,
        };

        if end <= start {
            anyhow::bail!("Invalid period, --to is before --from");
        }
        Ok(start..end)
    }

    /// Inclusive bounds, as record queries expect them
    pub fn bounds(&self) -> Result<(Option<NaiveDate>, Option<NaiveDate>)> {
        if !self.is_set() {
            return Ok((None, None));
        }
        if self.period().is_none() {
            self.range()?;
            return Ok((self.from, self.to));
        }

        let range = self.range()?;
        Ok((Some(range.start), range.end.pred_opt()))
    }
}

fn parse_month(value: &str) -> Result<(i32, i32), String> {
    let error = || format!("expected YYYY-MM, got {value}");

    let (year, month) = value.split_once('-').ok_or_else(error)?;
    let year = year.parse::<i32>().map_err(|_| error())?;
    let month = month.parse::<i32>().map_err(|_| error())?;

    if !(1..=12).contains(&month) {
        return Err(error());
    }
    Ok((year, month))
}
