use anyhow::Result;

use meowlet::{
    goal::{ChangeGoal, NewGoal, QueryGoal},
    prelude::*,
};

use crate::cli::goal::*;
use crate::config::Config;

use tabled::builder::Builder as TableBuilder;

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
        Command::Delete(args) => cmd.delete(args),
    }
}

impl CommandContext<'_> {
    fn find(&mut self, id: i64) -> Result<Goal> {
        let goal = Goal::find(self.conn, id)?;

        if goal.user != self.user {
            anyhow::bail!(Error::ModelNotFound("Goal"));
        }
        Ok(goal)
    }

    fn list(&mut self, args: &List) -> Result<()> {
        let goals = QueryGoal {
            user: Some(self.user.as_str()),
            count: args.count,
        }
        .run(self.conn)?;

        if goals.is_empty() {
            return Ok(());
        }

        let currency = self.config.currency();
        let mut builder = TableBuilder::new();
        push_record!(builder, "id", "name", "target", "saved", "progress");

        for goal in goals {
            let progress = goal.progress(self.conn)?;
            push_record!(
                builder,
                goal.id,
                goal.name,
                goal.target(currency),
                Amount(progress.saved, currency),
                format!("{}%", progress.percent().round_dp(0)),
            );
        }

        println!("{}", builder.build());
        Ok(())
    }

    fn show(&mut self, args: &Show) -> Result<()> {
        let goal = self.find(args.id())?;
        let progress = goal.progress(self.conn)?;
        let currency = self.config.currency();

        println!("{} | {}", goal.id, goal.name);
        println!("Target: {}", goal.target(currency));
        println!("Saved: {}", Amount(progress.saved, currency));
        if progress.is_reached() {
            println!("Goal reached!");
        } else {
            println!("Remaining: {}", Amount(progress.remaining(), currency));
        }
        println!(
            "{} {}%",
            crate::utils::bar(progress.percent(), 100.into(), 20),
            progress.percent().round_dp(0)
        );

        Ok(())
    }

    fn create(&mut self, args: &Create) -> Result<()> {
        let goal = NewGoal::new(&self.user, &args.name, args.target).save(self.conn)?;

        log::info!("Created goal {} for {}", goal.id, goal.user);
        Ok(())
    }

    fn update(&mut self, args: &Update) -> Result<()> {
        let goal = self.find(args.id())?;

        ChangeGoal {
            name: args.name.as_deref(),
            target: args.target,
        }
        .save(self.conn, &goal)
        .optional_empty_changeset()?;

        Ok(())
    }

    fn delete(&mut self, args: &Delete) -> Result<()> {
        let mut goal = self.find(args.id())?;

        if args.confirm && crate::utils::confirm()? {
            goal.delete(self.conn)?;
        } else {
            anyhow::bail!("operation requires confirmation");
        }
        Ok(())
    }
}
