//! Help text rendering for registered commands.
//!
//! Pure formatting: these functions build strings and leave printing to
//! the caller, which owns the transport (serial port, stdout, ...).

use super::registry::{CmdOption, Command, CommandRegistry};

/// Renders the command table for a whole registry: one line per command
/// with its name and description, in registration order.
pub fn registry_help(registry: &CommandRegistry) -> String {
    let mut out = String::from("Available commands:\n");

    if registry.is_empty() {
        out.push_str("  (none)\n");
        return out;
    }

    let width = name_column_width(registry.commands().iter().map(|c| c.name()));
    for cmd in registry.commands() {
        out.push_str(&format!("  {:width$}  {}\n", cmd.name(), cmd.description()));
    }
    out
}

/// Renders the command table for one group.
pub fn group_help(registry: &CommandRegistry, group: &str) -> String {
    let mut out = format!("Commands in group '{group}':\n");

    let members: Vec<&Command> = registry.commands_in_group(group).collect();
    if members.is_empty() {
        out.push_str("  (none)\n");
        return out;
    }

    let width = name_column_width(members.iter().map(|c| c.name()));
    for cmd in members {
        out.push_str(&format!("  {:width$}  {}\n", cmd.name(), cmd.description()));
    }
    out
}

/// Renders detailed help for one command: description, declared options
/// with their names and value expectations, and positional parameters by
/// index.
pub fn command_help(cmd: &Command) -> String {
    let mut out = format!("{} - {}\n", cmd.name(), cmd.description());

    out.push_str("Options:\n");
    if cmd.options().is_empty() {
        out.push_str("  (none)\n");
    } else {
        let columns: Vec<String> = cmd.options().iter().map(option_names).collect();
        let width = name_column_width(columns.iter().map(String::as_str));
        for (column, option) in columns.iter().zip(cmd.options()) {
            out.push_str(&format!("  {column:width$}  {}\n", option.description()));
        }
    }

    out.push_str("Parameters:\n");
    if cmd.params().is_empty() {
        out.push_str("  (none)\n");
    } else {
        for (index, param) in cmd.params().iter().enumerate() {
            out.push_str(&format!("  {index}  {}\n", param.description()));
        }
    }

    out
}

/// Formats an option's names for the help column: `-s, --long <value>`,
/// with whichever names the option declares.
fn option_names(option: &CmdOption) -> String {
    let mut names = match (option.short_name(), option.long_name()) {
        (Some(short), Some(long)) => format!("-{short}, --{long}"),
        (Some(short), None) => format!("-{short}"),
        (None, Some(long)) => format!("--{long}"),
        (None, None) => String::new(),
    };
    if option.expects_value() {
        names.push_str(" <value>");
    }
    names
}

fn name_column_width<'a>(names: impl Iterator<Item = &'a str>) -> usize {
    names.map(str::len).max().unwrap_or(0)
}
