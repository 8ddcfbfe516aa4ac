use anyhow::Result;

#[macro_use]
mod utils;

mod category;
mod cli;
mod config;
mod goal;
mod record;
mod report;
mod user;


use cli::Commands;
use config::Config;

fn main() -> Result<()> {
    let config = Config::try_parse()?;

    env_logger::Builder::new()
        .filter_level(config.log_level_filter())
        .init();

    match config.command() {
        Some(Commands::Record(command)) => record::run(&config, command),
        Some(Commands::Goal(command)) => goal::run(&config, command),
        Some(Commands::Report(command)) => report::run(&config, command),
        Some(Commands::Category(command)) => category::run(command),
        Some(Commands::User(command)) => user::run(&config, command),
        Some(Commands::Reset { confirm }) => {
            if !confirm || !utils::confirm()? {
                anyhow::bail!("operation requires confirmation");
            }
            let path = config.database_path();
            if path.exists() {
                std::fs::remove_file(&path)?;
                log::info!("Removed {}", path.display());
            }
            Ok(())
        }
        None => anyhow::bail!("No command provided"),
    }
}
