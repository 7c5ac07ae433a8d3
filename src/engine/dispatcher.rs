//! The dispatcher: one pass per input line, in a fixed order.
//!
//! A pass runs: reset stale state, tokenize, resolve the command by its
//! first token, match options, bind parameters, then invoke callbacks —
//! detected options in registration order, bound parameters in positional
//! order, the command callback last. Every line produces exactly one
//! [`Outcome`]; nothing in here panics or aborts the process.
//!
//! `dispatch` takes `&mut self`, so a callback cannot re-enter the same
//! dispatcher mid-pass: the nested-dispatch hazard of shared detected
//! state is unrepresentable rather than merely documented.

use tracing::debug;

use super::binder::bind_params;
use super::matcher::match_options;
use super::registry::{Command, CommandRegistry, RegistryError};
use super::tokenizer::tokenize;

/// Notification invoked when the first token names no registered command.
pub type UnrecognizedCallback = Box<dyn FnMut(&str)>;

/// Outcome of one dispatch pass. Exactly one per input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The line tokenized to nothing; no callbacks ran.
    NoInput,

    /// The first token named no registered command. The unrecognized
    /// notification has already fired with that token; nothing else ran.
    Unrecognized {
        /// The raw first token of the line.
        token: String,
    },

    /// A command matched; its callbacks ran to completion.
    Executed {
        /// Name of the matched command.
        command: String,
        /// How many callbacks reported failure. A failing callback never
        /// aborts its siblings, so this is a count, not a short-circuit.
        failed_callbacks: usize,
    },
}

impl Outcome {
    /// True when the pass matched a command and every callback succeeded.
    pub fn all_ok(&self) -> bool {
        matches!(
            self,
            Outcome::Executed {
                failed_callbacks: 0,
                ..
            }
        )
    }
}

/// Owns the registry and runs dispatch passes over it.
#[derive(Default)]
pub struct Dispatcher {
    registry: CommandRegistry,
    on_unrecognized: Option<UnrecognizedCallback>,
}

impl Dispatcher {
    /// Creates a dispatcher with an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a command. Registration happens between passes, never
    /// during one; `&mut self` enforces that.
    pub fn register(&mut self, command: Command) -> Result<(), RegistryError> {
        self.registry.register(command)
    }

    /// Sets the notification invoked with the raw first token when no
    /// registered command matches it.
    pub fn on_unrecognized(&mut self, callback: impl FnMut(&str) + 'static) {
        self.on_unrecognized = Some(Box::new(callback));
    }

    /// Read access to the registry, e.g. for inspecting detected state
    /// after a pass or rendering help.
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Resolves a registered command by exact name.
    pub fn command(&self, name: &str) -> Option<&Command> {
        self.registry.command(name)
    }

    /// Runs one dispatch pass over a single input line.
    ///
    /// The line must already be stripped of its end-of-line marker (the
    /// [`LineBuffer`](crate::buffer::LineBuffer)'s job).
    pub fn dispatch(&mut self, line: &str) -> Outcome {
        self.registry.reset_detected();

        let tokens = tokenize(line);
        let Some((first, rest)) = tokens.split_first() else {
            debug!("empty line, nothing to dispatch");
            return Outcome::NoInput;
        };

        let name = first.raw();
        let Some(index) = self.registry.command_index(&name) else {
            debug!(token = %name, "command not recognized");
            if let Some(callback) = self.on_unrecognized.as_mut() {
                callback(&name);
            }
            return Outcome::Unrecognized { token: name };
        };

        let cmd = &mut self.registry.commands[index];
        cmd.detected = true;

        let leftovers = match_options(cmd, rest);
        bind_params(cmd, &leftovers);

        let failed_callbacks = run_callbacks(cmd);
        debug!(command = %name, failed_callbacks, "dispatch pass complete");

        Outcome::Executed {
            command: name,
            failed_callbacks,
        }
    }
}

/// Invokes callbacks for one matched command, in the contract order:
/// detected options first (registration order), then bound parameters
/// (positional order), then the command's own callback.
///
/// Callbacks are taken out of their slot for the duration of the call and
/// put back afterwards, so a callback sees the command without itself.
fn run_callbacks(cmd: &mut Command) -> usize {
    let mut failed = 0;

    for index in 0..cmd.options.len() {
        if !cmd.options[index].detected {
            continue;
        }
        if let Some(mut callback) = cmd.options[index].callback.take() {
            let value = cmd.options[index].value.clone();
            if !callback(value.as_deref()) {
                debug!(command = %cmd.name(), option = index, "option callback failed");
                failed += 1;
            }
            cmd.options[index].callback = Some(callback);
        }
    }

    for index in 0..cmd.params.len() {
        let Some(value) = cmd.params[index].value.clone() else {
            continue;
        };
        if let Some(mut callback) = cmd.params[index].callback.take() {
            if !callback(&value) {
                debug!(command = %cmd.name(), param = index, "parameter callback failed");
                failed += 1;
            }
            cmd.params[index].callback = Some(callback);
        }
    }

    if let Some(mut callback) = cmd.callback.take() {
        if !callback(cmd) {
            debug!(command = %cmd.name(), "command callback failed");
            failed += 1;
        }
        cmd.callback = Some(callback);
    }

    failed
}
