use anyhow::Result;
use indexmap::IndexMap;
use qub_streams::{CharacterWriteStream, CharacterWriteStreamList, StreamError};

use crate::Process;

/// One runnable action of a command-line application: a name, optional
/// aliases, a description for the action listing, and the function that
/// does the work.
pub struct CommandLineAction {
    name: String,
    aliases: Vec<String>,
    description: String,
    default: bool,
    run: Box<dyn Fn(&mut Process) -> Result<()>>,
}

impl CommandLineAction {
    /// # Panics
    ///
    /// Panics if `name` is empty.
    pub fn new(name: &str, run: impl Fn(&mut Process) -> Result<()> + 'static) -> Self {
        assert!(!name.is_empty(), "action name must not be empty");
        Self {
            name: name.to_string(),
            aliases: Vec::new(),
            description: String::new(),
            default: false,
            run: Box::new(run),
        }
    }

    /// # Panics
    ///
    /// Panics if `alias` is empty.
    pub fn with_alias(mut self, alias: &str) -> Self {
        assert!(!alias.is_empty(), "action alias must not be empty");
        self.aliases.push(alias.to_string());
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Mark this action as the one that runs when no action is named.
    pub fn default_action(mut self) -> Self {
        self.default = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether `token` names this action or one of its aliases (ASCII
    /// case-insensitive).
    pub fn matches(&self, token: &str) -> bool {
        self.name.eq_ignore_ascii_case(token)
            || self.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(token))
    }

    fn tokens(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }
}

/// The action registry of one application, dispatched against a
/// [`Process`].
///
/// Registration order is the order actions list in help output.
pub struct CommandLineActions {
    application_name: String,
    application_description: String,
    actions: IndexMap<String, CommandLineAction>,
}

impl CommandLineActions {
    /// # Panics
    ///
    /// Panics if `application_name` is empty.
    pub fn create(application_name: &str, application_description: &str) -> Self {
        assert!(
            !application_name.is_empty(),
            "application name must not be empty"
        );
        Self {
            application_name: application_name.to_string(),
            application_description: application_description.to_string(),
            actions: IndexMap::new(),
        }
    }

    pub fn application_name(&self) -> &str {
        &self.application_name
    }

    /// Register an action.
    ///
    /// # Panics
    ///
    /// Panics if the action's name or any alias collides with an already
    /// registered name or alias (ASCII case-insensitive), or if a second
    /// action is marked default.
    pub fn add_action(&mut self, action: CommandLineAction) {
        for token in action.tokens() {
            assert!(
                !self.contains(token),
                "action name or alias \"{token}\" is already registered"
            );
        }
        if action.default {
            assert!(
                self.default_action().is_none(),
                "only one action may be the default"
            );
        }
        self.actions.insert(action.name.clone(), action);
    }

    pub fn contains(&self, token: &str) -> bool {
        self.find(token).is_some()
    }

    fn find(&self, token: &str) -> Option<&CommandLineAction> {
        self.actions.values().find(|action| action.matches(token))
    }

    fn default_action(&self) -> Option<&CommandLineAction> {
        self.actions.values().find(|action| action.default)
    }

    /// Dispatch the process's first anonymous argument as an action name.
    ///
    /// The action-name argument is consumed before the action runs, so the
    /// action sees only its own arguments. `--help` or a leading `help`
    /// token writes the action listing to the output stream; an unknown
    /// action writes it to the error stream and sets exit code 1; an
    /// action error writes the error chain and sets exit code 1.
    ///
    /// The returned error is only ever a failure of the process's own
    /// streams.
    pub fn run(&self, process: &mut Process) -> Result<()> {
        if process.arguments().named_value("help").is_ok() {
            self.write_help(process.output())?;
            return Ok(());
        }

        let requested = process.arguments_mut().remove_anonymous_value(0);
        let name = match requested {
            Ok(name) if name.eq_ignore_ascii_case("help") => {
                self.write_help(process.output())?;
                return Ok(());
            }
            Ok(name) => name,
            Err(_) => match self.default_action() {
                Some(action) => action.name.clone(),
                None => {
                    self.write_help(process.output())?;
                    return Ok(());
                }
            },
        };

        let Some(action) = self.find(&name) else {
            process.error().write_line(&format!("Unknown action: {name}"))?;
            self.write_help(process.error())?;
            process.set_exit_code(1);
            return Ok(());
        };

        tracing::debug!(action = action.name.as_str(), "running action");
        if let Err(error) = (action.run)(process) {
            process.error().write_line(&format!("{error:#}"))?;
            process.set_exit_code(1);
        }
        Ok(())
    }

    /// Write the application banner and the action listing to `stream`.
    pub fn write_help(&self, stream: &mut CharacterWriteStreamList) -> Result<(), StreamError> {
        if self.application_description.is_empty() {
            stream.write_line(&self.application_name)?;
        } else {
            stream.write_line(&format!(
                "{} - {}",
                self.application_name, self.application_description
            ))?;
        }
        stream.write_line("")?;
        stream.write_line("Actions:")?;
        for action in self.actions.values() {
            let mut left = action.name.clone();
            if !action.aliases.is_empty() {
                left.push_str(&format!("({})", action.aliases.join(",")));
            }
            if action.description.is_empty() {
                stream.write_line(&format!("  {left}"))?;
            } else {
                stream.write_line(&format!("  {left:<16} {}", action.description))?;
            }
        }
        Ok(())
    }
}
