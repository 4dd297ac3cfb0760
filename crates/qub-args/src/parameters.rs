use crate::{CommandLineParameter, CommandLineParameterList};

/// The CLI surface of one application: every parameter it understands,
/// in registration order, plus the application's name and description.
///
/// Parameters register as they are built (the typed parameter is handed
/// back to the caller for value access); the registry keeps only the
/// display metadata it needs to render the usage line and the `--help`
/// body.
#[derive(Debug, Clone)]
pub struct CommandLineParameters {
    application_name: String,
    application_description: String,
    parameters: Vec<ParameterDisplay>,
}

#[derive(Debug, Clone)]
struct ParameterDisplay {
    usage: String,
    help: String,
}

impl CommandLineParameters {
    /// # Panics
    ///
    /// Panics if `application_name` is empty.
    pub fn create(application_name: &str) -> Self {
        assert!(
            !application_name.is_empty(),
            "application name must not be empty"
        );
        Self {
            application_name: application_name.to_string(),
            application_description: String::new(),
            parameters: Vec::new(),
        }
    }

    pub fn application_name(&self) -> &str {
        &self.application_name
    }

    pub fn set_application_description(&mut self, description: &str) {
        self.application_description = description.to_string();
    }

    pub fn application_description(&self) -> &str {
        &self.application_description
    }

    /// Register a single-valued parameter and hand it back for value
    /// access.
    pub fn add<T>(&mut self, parameter: CommandLineParameter<T>) -> CommandLineParameter<T> {
        self.parameters.push(ParameterDisplay {
            usage: parameter.usage_string(),
            help: parameter.help_line(),
        });
        parameter
    }

    /// Register a list parameter and hand it back for value access.
    pub fn add_list<T>(
        &mut self,
        parameter: CommandLineParameterList<T>,
    ) -> CommandLineParameterList<T> {
        self.parameters.push(ParameterDisplay {
            usage: parameter.usage_string(),
            help: parameter.help_line(),
        });
        parameter
    }

    pub fn add_string(&mut self, name: &str) -> CommandLineParameter<String> {
        self.add(CommandLineParameter::new(name))
    }

    pub fn add_boolean(&mut self, name: &str) -> CommandLineParameter<bool> {
        self.add(CommandLineParameter::new(name))
    }

    pub fn add_positional_string(
        &mut self,
        name: &str,
        index: usize,
    ) -> CommandLineParameter<String> {
        self.add(CommandLineParameter::positional(name, index))
    }

    pub fn add_string_list(&mut self, name: &str) -> CommandLineParameterList<String> {
        self.add_list(CommandLineParameterList::new(name))
    }

    /// `application-name` followed by each parameter's usage fragment.
    pub fn usage_string(&self) -> String {
        let mut usage = self.application_name.clone();
        for parameter in &self.parameters {
            usage.push(' ');
            usage.push_str(&parameter.usage);
        }
        usage
    }

    /// One help line per registered parameter, in registration order.
    pub fn help_lines(&self) -> Vec<String> {
        self.parameters
            .iter()
            .map(|parameter| parameter.help.clone())
            .collect()
    }
}
