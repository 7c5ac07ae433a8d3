//! The command registry: commands, their options, and their positional
//! parameters.
//!
//! All three entity types are built at configuration time, registered into
//! exactly one [`CommandRegistry`], and then live for the session. The only
//! state that changes afterwards is the per-pass bookkeeping (`detected`
//! flags and bound values), which the dispatcher resets at the start of
//! every pass.
//!
//! Callbacks are boxed closures accepted at registration time; `None` means
//! "no callback", there is no sentinel value.

use std::fmt;

use thiserror::Error;
use tracing::debug;

/// Callback invoked once per successful command match, after all option and
/// parameter callbacks. Receives the command itself so the handler can
/// inspect every option's and parameter's detected state and bound value.
pub type CommandCallback = Box<dyn FnMut(&Command) -> bool>;

/// Callback invoked for a detected option, with its bound value (`None`
/// when the option carried no value).
pub type OptionCallback = Box<dyn FnMut(Option<&str>) -> bool>;

/// Callback invoked for a bound positional parameter, with the raw token
/// text assigned to it.
pub type ParamCallback = Box<dyn FnMut(&str) -> bool>;

/// Errors rejected at registration time.
///
/// Dispatch itself never fails; everything that would make dispatch
/// ambiguous is refused here instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A command name must be non-empty.
    #[error("command name must not be empty")]
    EmptyCommandName,

    /// Command names are matched against whitespace-split tokens, so a name
    /// containing whitespace could never match.
    #[error("command name '{0}' contains whitespace")]
    WhitespaceInName(String),

    /// Each name may be registered once per registry.
    #[error("command '{0}' is already registered")]
    DuplicateCommand(String),

    /// An option needs at least one of a short or a long name.
    #[error("option must have a short or a long name")]
    NamelessOption,

    /// Within one command, non-empty short names must be unique.
    #[error("duplicate short option '-{0}'")]
    DuplicateShortName(char),

    /// Within one command, non-empty long names must be unique.
    #[error("duplicate long option '--{0}'")]
    DuplicateLongName(String),
}

/// An optional, named flag belonging to a command, optionally carrying a
/// value.
pub struct CmdOption {
    short: Option<char>,
    long: Option<String>,
    description: String,
    takes_value: bool,
    pub(crate) callback: Option<OptionCallback>,
    pub(crate) detected: bool,
    pub(crate) value: Option<String>,
}

impl CmdOption {
    /// Creates an option with both a short and a long name.
    pub fn new(short: char, long: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            short: Some(short),
            long: Some(long.into()),
            description: description.into(),
            takes_value: false,
            callback: None,
            detected: false,
            value: None,
        }
    }

    /// Creates an option with only a long name.
    pub fn long(long: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            short: None,
            long: Some(long.into()),
            description: description.into(),
            takes_value: false,
            callback: None,
            detected: false,
            value: None,
        }
    }

    /// Creates an option with only a short name.
    pub fn short(short: char, description: impl Into<String>) -> Self {
        Self {
            short: Some(short),
            long: None,
            description: description.into(),
            takes_value: false,
            callback: None,
            detected: false,
            value: None,
        }
    }

    /// Declares whether this option expects an associated value
    /// (`-o <value>` / `--output <value>` / `--output=<value>`).
    pub fn takes_value(mut self, takes_value: bool) -> Self {
        self.takes_value = takes_value;
        self
    }

    /// Attaches a callback invoked when the option is detected.
    pub fn with_callback(mut self, callback: impl FnMut(Option<&str>) -> bool + 'static) -> Self {
        self.callback = Some(Box::new(callback));
        self
    }

    /// The short name, if any.
    pub fn short_name(&self) -> Option<char> {
        self.short
    }

    /// The long name, if any.
    pub fn long_name(&self) -> Option<&str> {
        self.long.as_deref()
    }

    /// Human-readable description, used by help rendering.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether this option expects an associated value.
    pub fn expects_value(&self) -> bool {
        self.takes_value
    }

    /// True if the option was present in the most recent dispatch pass.
    pub fn is_detected(&self) -> bool {
        self.detected
    }

    /// The value bound in the most recent pass.
    ///
    /// `Some("")` means the peer sent `--name=` with an explicitly empty
    /// value; `None` means no value was bound at all.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    fn has_name(&self) -> bool {
        self.short.is_some() || self.long.as_deref().is_some_and(|l| !l.is_empty())
    }
}

impl fmt::Debug for CmdOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CmdOption")
            .field("short", &self.short)
            .field("long", &self.long)
            .field("takes_value", &self.takes_value)
            .field("detected", &self.detected)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

/// A positional argument slot belonging to a command.
///
/// Parameters have no name on the wire; their identity is their
/// registration order, and the *k*-th leftover token binds to the *k*-th
/// parameter.
pub struct Param {
    description: String,
    pub(crate) callback: Option<ParamCallback>,
    pub(crate) value: Option<String>,
}

impl Param {
    /// Creates a parameter with a description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            callback: None,
            value: None,
        }
    }

    /// Attaches a callback invoked when a token binds to this parameter.
    pub fn with_callback(mut self, callback: impl FnMut(&str) -> bool + 'static) -> Self {
        self.callback = Some(Box::new(callback));
        self
    }

    /// Human-readable description, used by help rendering.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The token bound to this parameter in the most recent pass, if any.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl fmt::Debug for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Param")
            .field("description", &self.description)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

/// A named, registrable unit with its own options, parameters, and
/// callback, matched against the first token of an input line.
pub struct Command {
    name: String,
    description: String,
    pub(crate) options: Vec<CmdOption>,
    pub(crate) params: Vec<Param>,
    pub(crate) callback: Option<CommandCallback>,
    groups: Vec<String>,
    pub(crate) detected: bool,
}

impl Command {
    /// Creates a command. Name validity is checked when the command is
    /// registered into a [`CommandRegistry`].
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            options: Vec::new(),
            params: Vec::new(),
            callback: None,
            groups: Vec::new(),
            detected: false,
        }
    }

    /// Attaches the command callback, invoked after all option and
    /// parameter callbacks once the command matches a line.
    pub fn with_callback(mut self, callback: impl FnMut(&Command) -> bool + 'static) -> Self {
        self.callback = Some(Box::new(callback));
        self
    }

    /// Registers an option with this command.
    ///
    /// Rejects nameless options and short/long names already taken by a
    /// previously registered option of this command.
    pub fn register_option(&mut self, option: CmdOption) -> Result<(), RegistryError> {
        if !option.has_name() {
            return Err(RegistryError::NamelessOption);
        }
        if let Some(short) = option.short {
            if self.options.iter().any(|o| o.short == Some(short)) {
                return Err(RegistryError::DuplicateShortName(short));
            }
        }
        if let Some(long) = option.long.as_deref().filter(|l| !l.is_empty()) {
            if self.options.iter().any(|o| o.long.as_deref() == Some(long)) {
                return Err(RegistryError::DuplicateLongName(long.to_string()));
            }
        }

        debug!(
            command = %self.name,
            short = ?option.short,
            long = ?option.long,
            "registered option"
        );
        self.options.push(option);
        Ok(())
    }

    /// Registers a positional parameter. Binding order is registration
    /// order.
    pub fn register_param(&mut self, param: Param) {
        debug!(command = %self.name, index = self.params.len(), "registered parameter");
        self.params.push(param);
    }

    /// Adds this command to a named group. Groups are pure bookkeeping for
    /// help rendering and have no effect on dispatch.
    pub fn add_to_group(&mut self, group: impl Into<String>) {
        let group = group.into();
        if !self.groups.contains(&group) {
            self.groups.push(group);
        }
    }

    /// The command name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable description, used by help rendering.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The declared options, in registration order.
    pub fn options(&self) -> &[CmdOption] {
        &self.options
    }

    /// The declared positional parameters, in registration order.
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// The groups this command belongs to.
    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    /// True if this command belongs to the named group.
    pub fn in_group(&self, group: &str) -> bool {
        self.groups.iter().any(|g| g == group)
    }

    /// True if this command matched the most recent dispatch pass.
    ///
    /// Usable for basic received-or-not checks without a callback.
    pub fn is_detected(&self) -> bool {
        self.detected
    }

    /// Finds a declared option by its short name.
    pub fn option_by_short(&self, short: char) -> Option<&CmdOption> {
        self.options.iter().find(|o| o.short == Some(short))
    }

    /// Finds a declared option by its long name.
    pub fn option_by_long(&self, long: &str) -> Option<&CmdOption> {
        self.options.iter().find(|o| o.long.as_deref() == Some(long))
    }

    pub(crate) fn option_index_by_short(&self, short: char) -> Option<usize> {
        self.options.iter().position(|o| o.short == Some(short))
    }

    pub(crate) fn option_index_by_long(&self, long: &str) -> Option<usize> {
        self.options.iter().position(|o| o.long.as_deref() == Some(long))
    }

    /// Clears per-pass state on the command and everything it owns.
    pub(crate) fn reset_detected(&mut self) {
        self.detected = false;
        for option in &mut self.options {
            option.detected = false;
            option.value = None;
        }
        for param in &mut self.params {
            param.value = None;
        }
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("options", &self.options)
            .field("params", &self.params)
            .field("groups", &self.groups)
            .field("detected", &self.detected)
            .finish_non_exhaustive()
    }
}

/// An owned, insertion-ordered collection of commands visible to one
/// dispatcher.
#[derive(Debug, Default)]
pub struct CommandRegistry {
    pub(crate) commands: Vec<Command>,
}

impl CommandRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a command.
    ///
    /// Rejects empty names, names containing whitespace (they could never
    /// match a whitespace-split token), and names already registered.
    pub fn register(&mut self, command: Command) -> Result<(), RegistryError> {
        if command.name.is_empty() {
            return Err(RegistryError::EmptyCommandName);
        }
        if command.name.chars().any(char::is_whitespace) {
            return Err(RegistryError::WhitespaceInName(command.name.clone()));
        }
        if self.commands.iter().any(|c| c.name == command.name) {
            return Err(RegistryError::DuplicateCommand(command.name.clone()));
        }

        debug!(command = %command.name, "registered command");
        self.commands.push(command);
        Ok(())
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// True when no commands are registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// The registered commands, in registration order.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Resolves a command by exact, case-sensitive name.
    ///
    /// Linear scan; registries are small and this is not a hot path.
    pub fn command(&self, name: &str) -> Option<&Command> {
        self.commands.iter().find(|c| c.name == name)
    }

    /// The commands belonging to the named group, in registration order.
    pub fn commands_in_group<'a>(&'a self, group: &'a str) -> impl Iterator<Item = &'a Command> {
        self.commands.iter().filter(move |c| c.in_group(group))
    }

    pub(crate) fn command_index(&self, name: &str) -> Option<usize> {
        self.commands.iter().position(|c| c.name == name)
    }

    /// Phase 1 of every dispatch pass: stale detected state from the
    /// previous pass must not leak into this one.
    pub(crate) fn reset_detected(&mut self) {
        for command in &mut self.commands {
            command.reset_detected();
        }
    }
}
