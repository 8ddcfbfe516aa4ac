use anyhow::Result;
use std::io::Write;

use crate::cli::record::*;
use crate::config::Config;
use crate::record::display::RecordToDisplay;

use meowlet::{
    category,
    prelude::*,
    record::{NewRecord, QueryRecord},
};

use tabled::Table;

pub mod display;

struct CommandContext<'a> {
    config: &'a Config,
    conn: &'a mut Database,
    user: String,
}

pub fn run(config: &Config, command: &Command) -> Result<()> {
    let conn = &mut config.database()?;
    let mut cmd = CommandContext {
        user: config.user()?,
        conn,
        config,
    };

    match &command {
        Command::List(args) => cmd.list(args),
        Command::Show(args) => cmd.show(args),
        Command::Create(args) => cmd.create(args),
        Command::Update(args) => cmd.update(args),
        Command::Export(args) => cmd.export(args),
    }
}

fn query<'a>(
    user: &'a str,
    filters: &'a Filters,
    description: Option<&'a str>,
) -> Result<QueryRecord<'a>> {
    let (from, to) = filters.period.bounds()?;

    Ok(QueryRecord {
        user: Some(user),
        from,
        to,
        greater_than: filters.greater_than,
        less_than: filters.less_than,
        kind: filters.kind,
        wallet: filters.wallet,
        category: filters.category.as_deref(),
        description,
        count: filters.count,
        order: filters.order(),
    })
}

impl CommandContext<'_> {
    /// Records of other users are reported as missing
    fn find(&mut self, id: i64) -> Result<Record> {
        let record = Record::find(self.conn, id)?;

        if record.user != self.user {
            anyhow::bail!(Error::ModelNotFound("Record"));
        }
        Ok(record)
    }

    fn list(&mut self, args: &List) -> Result<()> {
        let description = args.filters.description();
        let records =
            query(&self.user, &args.filters, description.as_deref())?.run(self.conn)?;

        match &args.action {
            Some(Action::Update(args)) => {
                self.conn.transaction(|conn| {
                    for record in &records {
                        args.changes()
                            .save(conn, record)
                            .optional_empty_changeset()?;
                    }
                    Result::<()>::Ok(())
                })?;
            }
            Some(Action::Delete { confirm }) => {
                if !confirm || !crate::utils::confirm()? {
                    anyhow::bail!("operation requires confirmation");
                }
                self.conn.transaction(|conn| {
                    for mut record in records {
                        record.delete(conn)?;
                    }
                    Result::<()>::Ok(())
                })?;
            }
            None => {
                if records.is_empty() {
                    return Ok(());
                }

                let currency = self.config.currency();
                let records = records
                    .into_iter()
                    .map(|record| RecordToDisplay::from((record, currency)))
                    .collect::<Vec<_>>();

                println!("{}", Table::new(records));
            }
        }

        Ok(())
    }

    fn show(&mut self, args: &Show) -> Result<()> {
        let mut record = self.find(args.id())?;

        match &args.action {
            Some(Action::Update(args)) => {
                args.changes()
                    .save(self.conn, &record)
                    .optional_empty_changeset()?;
            }
            Some(Action::Delete { confirm }) => {
                if !confirm || !crate::utils::confirm()? {
                    anyhow::bail!("operation requires confirmation");
                }
                record.delete(self.conn)?;
            }
            None => {
                let currency = self.config.currency();
                println!(
                    "{}",
                    Table::new(vec![RecordToDisplay::from((record, currency))])
                );
            }
        }
        Ok(())
    }

    fn create(&mut self, args: &Create) -> Result<()> {
        let Create {
            amount,
            description,
            kind,
            wallet,
            category,
            ..
        } = args;

        let record = NewRecord {
            date: args.date(),
            wallet: *wallet,
            kind: *kind,
            amount: *amount,
            category: category.as_deref().unwrap_or(category::DEFAULT),
            description: description.as_str(),
            ..NewRecord::new(&self.user)
        }
        .save(self.conn)?;

        log::info!("Created record {} for {}", record.id, record.user);
        Ok(())
    }

    fn update(&mut self, args: &Update) -> Result<()> {
        let record = self.find(args.id())?;

        args.args
            .changes()
            .save(self.conn, &record)
            .optional_empty_changeset()?;

        Ok(())
    }

    fn export(&mut self, args: &Export) -> Result<()> {
        let description = args.filters.description();
        let records =
            query(&self.user, &args.filters, description.as_deref())?.run(self.conn)?;

        let output: Box<dyn Write> = match &args.output {
            Some(path) => Box::new(std::fs::File::create(path)?),
            None => Box::new(std::io::stdout()),
        };

        let mut writer = csv::Writer::from_writer(output);
        writer.write_record([
            "id",
            "date",
            "kind",
            "wallet",
            "category",
            "amount",
            "description",
        ])?;

        for record in &records {
            writer.write_record([
                record.id.to_string(),
                record.date.to_string(),
                record.kind.to_string(),
                record.wallet.to_string(),
                record.category.clone(),
                record.amount.normalize().to_string(),
                record.description.clone(),
            ])?;
        }
        writer.flush()?;

        log::debug!("Exported {} records", records.len());
        Ok(())
    }
}
