use anyhow::Result;

use meowlet::{
    goal::QueryGoal,
    prelude::*,
    stats::{CategoriesStats, MonthlyStats, WalletBalances},
};

use crate::cli::report::*;
use crate::config::Config;
use crate::utils::bar;

use tabled::builder::Builder as TableBuilder;

const BAR_WIDTH: usize = 30;

struct CommandContext<'a> {
    currency: Currency,
    conn: &'a mut Database,
    user: String,
}

pub fn run(config: &Config, command: &Command) -> Result<()> {
    let conn = &mut config.database()?;
    let mut cmd = CommandContext {
        currency: config.currency(),
        user: config.user()?,
        conn,
    };

    match &command {
        Command::Summary(args) => cmd.summary(args),
        Command::Wallets(args) => cmd.wallets(args),
        Command::Categories(args) => cmd.categories(args),
        Command::Monthly(args) => cmd.monthly(args),
    }
}

impl CommandContext<'_> {
    fn amount(&self, amount: Decimal) -> Amount {
        Amount(amount, self.currency)
    }

    fn summary(&mut self, args: &Summary) -> Result<()> {
        let totals = Totals::for_user(self.conn, &self.user, args.period.range()?)?;

        let mut builder = TableBuilder::new();
        push_record!(builder, "kind", "amount");
        for kind in Kind::ALL {
            push_record!(builder, kind, self.amount(totals.get(kind)));
        }
        println!("{}", builder.build());

        println!("Balance: {}", self.amount(totals.balance()));

        let mood = Mood::from_totals(&totals);
        if mood.is_warning() {
            println!("Warning! {}", mood);
        } else {
            println!("{}", mood);
        }

        let goals = QueryGoal {
            user: Some(self.user.as_str()),
            ..Default::default()
        }
        .run(self.conn)?;

        for goal in goals {
            let progress = goal.progress(self.conn)?;
            println!(
                "Goal {}: {}% of {}",
                goal.name,
                progress.percent().round_dp(0),
                goal.target(self.currency)
            );
        }

        Ok(())
    }

    fn wallets(&mut self, args: &Wallets) -> Result<()> {
        let balances = WalletBalances::for_user(self.conn, &self.user, args.period.range()?)?;

        let mut builder = TableBuilder::new();
        push_record!(builder, "wallet", "income", "expense", "saving", "balance");
        for (wallet, totals) in &balances.0 {
            push_record!(
                builder,
                *wallet,
                self.amount(totals.income),
                self.amount(totals.expense),
                self.amount(totals.saving),
                self.amount(totals.balance()),
            );
        }
        println!("{}", builder.build());

        println!("Total: {}", self.amount(balances.total()));
        Ok(())
    }

    fn categories(&mut self, args: &Categories) -> Result<()> {
        let stats =
            CategoriesStats::for_user(self.conn, &self.user, args.period.range()?, args.kind)?;

        if stats.stats.is_empty() {
            return Ok(());
        }

        let peak = stats.stats.first().map(|s| s.amount).unwrap_or_default();
        let mut builder = TableBuilder::new();
        push_record!(builder, "category", "amount", "share", "");
        for category in &stats.stats {
            push_record!(
                builder,
                category.category,
                self.amount(category.amount),
                format!("{}%", stats.share(category)),
                bar(category.amount, peak, BAR_WIDTH),
            );
        }
        println!("{}", builder.build());

        println!("Total {}: {}", stats.kind, self.amount(stats.amount));
        Ok(())
    }

    fn monthly(&mut self, args: &Monthly) -> Result<()> {
        let stats = MonthlyStats::for_user(self.conn, &self.user, args.period.range()?)?;

        if stats.0.is_empty() {
            return Ok(());
        }

        let peak = stats.peak();
        let mut builder = TableBuilder::new();
        push_record!(builder, "month", "income", "outflow", "balance", "");
        for month in &stats.0 {
            let totals = &month.totals;
            push_record!(
                builder,
                format!("{}-{:02}", month.year, month.month),
                self.amount(totals.income),
                self.amount(totals.outflow()),
                self.amount(totals.balance()),
                format!(
                    "+{}\n-{}",
                    bar(totals.income, peak, BAR_WIDTH),
                    bar(totals.outflow(), peak, BAR_WIDTH)
                ),
            );
        }
        println!("{}", builder.build());

        Ok(())
    }
}
