pub mod args;
pub mod config;
pub mod global;
pub mod handlers;
pub mod output;

use args::{Cli, Command};
use handlers::transform::Action;

pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cli.global.log_level()),
    )
    .format_timestamp(None)
    .init();

    let settings = config::load_settings(&cli.global)?;
    log::debug!("default algorithm: {}", settings.default_algorithm);

    match cli.command {
        Command::List(args) => handlers::list::handle(args, &cli.global),
        Command::Show { algorithm } => handlers::show::handle(&algorithm, &settings),
        Command::Encode(args) => {
            handlers::transform::handle(Action::Encode, args, &cli.global, &settings)
        }
        Command::Decode(args) => {
            handlers::transform::handle(Action::Decode, args, &cli.global, &settings)
        }
        Command::Hash(args) => handlers::transform::handle(Action::Hash, args, &cli.global, &settings),
    }
}
