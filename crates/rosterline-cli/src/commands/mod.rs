//! Command implementations.
//!
//! Each command is a pure function from a parsed payload to a serializable
//! view; [`dispatch`] wires them to the parsed arguments.

pub mod assignments;
pub mod contacts;
pub mod phone;
pub mod projects;

use serde::Serialize;

use crate::cli::{Args, Command};
use crate::config::RosterlineConfig;
use crate::config_handlers::handle_config_command;
use crate::error::Result;
use crate::input::read_payload;

/// Serialize command output as JSON.
pub fn render<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(text)
}

/// Run the command named by `args` and return what should be printed.
pub async fn dispatch(args: &Args, config: &RosterlineConfig) -> Result<String> {
    let pretty = config.output.pretty;
    match &args.command {
        Command::Assignments {
            input,
            sorted,
            lanes,
        } => {
            let payload = read_payload(input).await?;
            let options = assignments::AssignmentOptions {
                sorted: *sorted || config.timeline.sort_by_start,
                lanes: *lanes,
            };
            render(&assignments::run(&payload, options), pretty)
        }
        Command::ProjectKeys { input, summary } => {
            let payload = read_payload(input).await?;
            render(&projects::run(&payload, *summary), pretty)
        }
        Command::Phone { raw } => render(&phone::run(raw), pretty),
        Command::Contacts { input } => {
            let payload = read_payload(input).await?;
            render(&contacts::run(&payload), pretty)
        }
        Command::Config { action } => handle_config_command(args.config.as_deref(), action),
    }
}
