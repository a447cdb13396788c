use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::config::Config;
use crate::handlers;

pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Fields { result, format } => handlers::fields::run(&result, format),
        Commands::Classify { result, route } => handlers::classify::run(&result, route, &config),
        Commands::Usage { result } => handlers::usage::run(&result, &config),
        Commands::Annotate {
            result,
            pages,
            out,
            field,
        } => handlers::annotate::run(&result, &pages, &out, field.as_deref()),
        Commands::Inspect { result, json } => handlers::inspect::run(&result, json, &config),
        Commands::Config => handlers::config::run(&config),
    }
}
