use anyhow::Result;

use meowlet::user;

use crate::cli::user::*;
use crate::config::Config;

pub fn run(config: &Config, command: &Command) -> Result<()> {
    match &command {
        Command::List {} => list(config),
        Command::Default(args) => command_default(config, args),
        Command::Delete(args) => delete(config, args),
    }
}

fn list(config: &Config) -> Result<()> {
    let conn = &mut config.database()?;

    for name in user::all(conn)? {
        println!("{}", name);
    }

    Ok(())
}

fn command_default(config: &Config, args: &DefaultUser) -> Result<()> {
    if let Some(name) = config.user_name() {
        if name.is_empty() {
            anyhow::bail!("User name cannot be empty");
        }
        config.set("default_user", name)
    } else if args.reset {
        config.reset("default_user")
    } else {
        let name = config
            .default_user()?
            .unwrap_or("<not set>".to_string());
        println!("{}", name);
        Ok(())
    }
}

fn delete(config: &Config, args: &Delete) -> Result<()> {
    let name = config.user()?;
    let conn = &mut config.database()?;

    if !args.confirm || !crate::utils::confirm()? {
        anyhow::bail!("operation requires confirmation");
    }

    let (records, goals) = user::delete(conn, &name)?;
    println!("Deleted {} records and {} goals of {}", records, goals, name);

    if config.default_user()?.as_deref() == Some(name.as_str()) {
        config.reset("default_user")?;
    }
    Ok(())
}
