use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use crate::{ArgumentError, CommandLineArgument, CommandLineArguments};

/// The display and matching metadata shared by single and list parameters.
#[derive(Debug, Clone)]
pub(crate) struct ParameterMeta {
    name: String,
    aliases: Vec<String>,
    index: Option<usize>,
    required: bool,
    value_required: bool,
    value_name: String,
    description: String,
}

impl ParameterMeta {
    fn new(name: &str, index: Option<usize>) -> Self {
        assert!(!name.is_empty(), "parameter name must not be empty");
        Self {
            name: name.to_string(),
            aliases: Vec::new(),
            index,
            required: false,
            value_required: false,
            // A positional parameter always displays a value name; default
            // it from the parameter name.
            value_name: if index.is_some() {
                name.to_string()
            } else {
                String::new()
            },
            description: String::new(),
        }
    }

    fn add_alias(&mut self, alias: &str) {
        assert!(!alias.is_empty(), "parameter alias must not be empty");
        self.aliases.push(alias.to_string());
    }

    fn set_value_name(&mut self, value_name: &str) {
        assert!(
            self.index.is_none() || !value_name.is_empty(),
            "a positional parameter must keep a non-empty value name"
        );
        self.value_name = value_name.to_string();
    }

    fn matches(&self, argument: &CommandLineArgument) -> bool {
        argument.matches_name(&self.name)
            || self.aliases.iter().any(|alias| argument.matches_name(alias))
    }

    /// Bracket-wrapped syntax reflecting the (required x value-required)
    /// matrix: `--name`, `[--name]`, `--name=<value>`, `[--name[=<value>]]`.
    fn usage_string(&self) -> String {
        let mut usage = format!("--{}", self.name);
        if !self.value_name.is_empty() {
            if self.value_required {
                usage.push_str(&format!("=<{}>", self.value_name));
            } else {
                usage.push_str(&format!("[=<{}>]", self.value_name));
            }
        }
        if self.required {
            usage
        } else {
            format!("[{usage}]")
        }
    }

    /// `--name(alias1,alias2): description`
    fn help_line(&self) -> String {
        let mut line = format!("--{}", self.name);
        if !self.aliases.is_empty() {
            line.push_str(&format!("({})", self.aliases.join(",")));
        }
        line.push_str(": ");
        if self.description.is_empty() {
            line.push_str("(No description provided)");
        } else {
            line.push_str(&self.description);
        }
        line
    }

    /// The raw string for a single-valued parameter: the positional slot
    /// first (when an index is set), then the first named match.
    fn raw_value<'a>(&self, arguments: &'a CommandLineArguments) -> Option<&'a str> {
        if let Some(index) = self.index {
            if let Ok(value) = arguments.anonymous_value(index) {
                return Some(value);
            }
        }
        arguments
            .iter()
            .find(|argument| self.matches(argument))
            .map(|argument| argument.value().unwrap_or(""))
    }

    /// Every raw string for a list parameter: the positional tail first
    /// (when an index is set), then every named match in insertion order.
    fn raw_values<'a>(&self, arguments: &'a CommandLineArguments) -> Vec<&'a str> {
        let mut values = Vec::new();
        if let Some(index) = self.index {
            if let Ok(tail) = arguments.anonymous_values(index) {
                values.extend(tail);
            }
        }
        values.extend(
            arguments
                .iter()
                .filter(|argument| self.matches(argument))
                .map(|argument| argument.value().unwrap_or("")),
        );
        values
    }

    fn remove_raw_value(&self, arguments: &mut CommandLineArguments) -> Option<String> {
        if let Some(index) = self.index {
            if let Ok(value) = arguments.remove_anonymous_value(index) {
                return Some(value);
            }
        }
        let mut removed = false;
        arguments
            .remove_where(|argument| {
                let matched = !removed && self.matches(argument);
                removed |= matched;
                matched
            })
            .into_iter()
            .next()
            .map(|argument| argument.value().unwrap_or("").to_string())
    }

    fn remove_raw_values(&self, arguments: &mut CommandLineArguments) -> Vec<String> {
        let mut ordinal = 0;
        let removed = arguments.remove_where(|argument| {
            if argument.is_anonymous() {
                let matched = self.index.is_some_and(|index| ordinal >= index);
                ordinal += 1;
                matched
            } else {
                self.matches(argument)
            }
        });
        // Present the removals the same way raw_values orders reads: the
        // positional tail first, then the named matches.
        let (anonymous, named): (Vec<_>, Vec<_>) =
            removed.into_iter().partition(CommandLineArgument::is_anonymous);
        anonymous
            .into_iter()
            .chain(named)
            .map(|argument| argument.value().unwrap_or("").to_string())
            .collect()
    }
}

fn parse<T>(parameter: &str, raw: &str) -> Result<T, ArgumentError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    raw.parse().map_err(|error: T::Err| ArgumentError::InvalidValue {
        parameter: format!("--{parameter}"),
        value: raw.to_string(),
        message: error.to_string(),
    })
}

/// A typed, single-valued binding over a [`CommandLineArguments`] store.
///
/// Matching is by name or alias (ASCII case-insensitive) and, when a
/// positional index is set, by the anonymous slot at that index (the slot
/// wins). Values parse through [`FromStr`]; absence is `Ok(None)`, an
/// unparseable value is the recoverable `InvalidValue` error.
#[derive(Debug, Clone)]
pub struct CommandLineParameter<T> {
    meta: ParameterMeta,
    _values: PhantomData<fn() -> T>,
}

impl<T> CommandLineParameter<T> {
    /// # Panics
    ///
    /// Panics if `name` is empty.
    pub fn new(name: &str) -> Self {
        Self {
            meta: ParameterMeta::new(name, None),
            _values: PhantomData,
        }
    }

    /// A parameter that also binds the anonymous slot at `index`. The value
    /// name defaults to the parameter name.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty.
    pub fn positional(name: &str, index: usize) -> Self {
        Self {
            meta: ParameterMeta::new(name, Some(index)),
            _values: PhantomData,
        }
    }

    pub fn with_alias(mut self, alias: &str) -> Self {
        self.meta.add_alias(alias);
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.meta.description = description.to_string();
        self
    }

    pub fn with_value_name(mut self, value_name: &str) -> Self {
        self.set_value_name(value_name);
        self
    }

    pub fn required(mut self) -> Self {
        self.meta.required = true;
        self
    }

    pub fn value_required(mut self) -> Self {
        self.meta.value_required = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.meta.name
    }

    pub fn aliases(&self) -> &[String] {
        &self.meta.aliases
    }

    pub fn index(&self) -> Option<usize> {
        self.meta.index
    }

    pub fn is_required(&self) -> bool {
        self.meta.required
    }

    pub fn is_value_required(&self) -> bool {
        self.meta.value_required
    }

    pub fn value_name(&self) -> &str {
        &self.meta.value_name
    }

    pub fn description(&self) -> &str {
        &self.meta.description
    }

    /// Change the value-name label used in usage strings.
    ///
    /// # Panics
    ///
    /// Panics when clearing the value name of a positional parameter.
    pub fn set_value_name(&mut self, value_name: &str) {
        self.meta.set_value_name(value_name);
    }

    pub fn set_required(&mut self, required: bool) {
        self.meta.required = required;
    }

    pub fn set_value_required(&mut self, value_required: bool) {
        self.meta.value_required = value_required;
    }

    pub fn usage_string(&self) -> String {
        self.meta.usage_string()
    }

    pub fn help_line(&self) -> String {
        self.meta.help_line()
    }
}

impl<T> CommandLineParameter<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    /// The parsed first match, or `Ok(None)` when absent.
    pub fn value(&self, arguments: &CommandLineArguments) -> Result<Option<T>, ArgumentError> {
        match self.meta.raw_value(arguments) {
            Some(raw) => Ok(Some(parse(&self.meta.name, raw)?)),
            None => Ok(None),
        }
    }

    /// Like [`value`](Self::value), but also deletes the matched entry from
    /// the store. Repeated calls drain matches one at a time and end at
    /// `Ok(None)`.
    pub fn remove_value(
        &self,
        arguments: &mut CommandLineArguments,
    ) -> Result<Option<T>, ArgumentError> {
        match self.meta.remove_raw_value(arguments) {
            Some(raw) => Ok(Some(parse(&self.meta.name, &raw)?)),
            None => Ok(None),
        }
    }
}

impl CommandLineParameter<bool> {
    /// Flag semantics: absent is `false`, present without a value is
    /// `true`, otherwise the value parses as a boolean.
    pub fn flag_value(&self, arguments: &CommandLineArguments) -> Result<bool, ArgumentError> {
        match self.meta.raw_value(arguments) {
            None => Ok(false),
            Some("") => Ok(true),
            Some(raw) => parse(&self.meta.name, raw),
        }
    }
}

/// A typed, zero-or-more-valued binding over a [`CommandLineArguments`]
/// store.
///
/// Gathers the anonymous tail from the positional index (when set) followed
/// by every named match, in insertion order.
#[derive(Debug, Clone)]
pub struct CommandLineParameterList<T> {
    meta: ParameterMeta,
    _values: PhantomData<fn() -> T>,
}

impl<T> CommandLineParameterList<T> {
    /// # Panics
    ///
    /// Panics if `name` is empty.
    pub fn new(name: &str) -> Self {
        Self {
            meta: ParameterMeta::new(name, None),
            _values: PhantomData,
        }
    }

    /// A list that also gathers every anonymous entry from `index` onward.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty.
    pub fn positional(name: &str, index: usize) -> Self {
        Self {
            meta: ParameterMeta::new(name, Some(index)),
            _values: PhantomData,
        }
    }

    pub fn with_alias(mut self, alias: &str) -> Self {
        self.meta.add_alias(alias);
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.meta.description = description.to_string();
        self
    }

    pub fn with_value_name(mut self, value_name: &str) -> Self {
        self.set_value_name(value_name);
        self
    }

    pub fn required(mut self) -> Self {
        self.meta.required = true;
        self
    }

    pub fn value_required(mut self) -> Self {
        self.meta.value_required = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.meta.name
    }

    pub fn index(&self) -> Option<usize> {
        self.meta.index
    }

    pub fn value_name(&self) -> &str {
        &self.meta.value_name
    }

    /// Change the value-name label used in usage strings.
    ///
    /// # Panics
    ///
    /// Panics when clearing the value name of a positional parameter.
    pub fn set_value_name(&mut self, value_name: &str) {
        self.meta.set_value_name(value_name);
    }

    pub fn set_required(&mut self, required: bool) {
        self.meta.required = required;
    }

    pub fn set_value_required(&mut self, value_required: bool) {
        self.meta.value_required = value_required;
    }

    pub fn usage_string(&self) -> String {
        self.meta.usage_string()
    }

    pub fn help_line(&self) -> String {
        self.meta.help_line()
    }
}

impl<T> CommandLineParameterList<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    /// Every parsed match, in order. Possibly empty.
    pub fn values(&self, arguments: &CommandLineArguments) -> Result<Vec<T>, ArgumentError> {
        self.meta
            .raw_values(arguments)
            .into_iter()
            .map(|raw| parse(&self.meta.name, raw))
            .collect()
    }

    /// Like [`values`](Self::values), but also deletes the matched entries
    /// from the store. Repeated calls drain progressively, eventually
    /// returning an empty sequence.
    pub fn remove_values(
        &self,
        arguments: &mut CommandLineArguments,
    ) -> Result<Vec<T>, ArgumentError> {
        self.meta
            .remove_raw_values(arguments)
            .into_iter()
            .map(|raw| parse(&self.meta.name, &raw))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_string_covers_the_display_matrix() {
        let mut flag = CommandLineParameter::<bool>::new("verbose");
        assert_eq!(flag.usage_string(), "[--verbose]");
        flag.set_required(true);
        assert_eq!(flag.usage_string(), "--verbose");

        let mut valued = CommandLineParameter::<String>::new("output").with_value_name("value");
        assert_eq!(valued.usage_string(), "[--output[=<value>]]");
        valued.set_value_required(true);
        assert_eq!(valued.usage_string(), "[--output=<value>]");
        valued.set_required(true);
        assert_eq!(valued.usage_string(), "--output=<value>");
    }

    #[test]
    fn help_line_lists_aliases_and_defaults_description() {
        let parameter = CommandLineParameter::<String>::new("output")
            .with_alias("o")
            .with_alias("out");
        assert_eq!(parameter.help_line(), "--output(o,out): (No description provided)");

        let described = CommandLineParameter::<String>::new("output")
            .with_description("Where to write the result");
        assert_eq!(described.help_line(), "--output: Where to write the result");
    }

    #[test]
    fn positional_parameter_defaults_its_value_name() {
        let parameter = CommandLineParameter::<String>::positional("file", 0);
        assert_eq!(parameter.value_name(), "file");
    }

    #[test]
    #[should_panic(expected = "positional parameter")]
    fn positional_parameter_rejects_clearing_value_name() {
        let mut parameter = CommandLineParameter::<String>::positional("file", 0);
        parameter.set_value_name("");
    }

    #[test]
    fn positional_list_keeps_a_value_name_too() {
        let list = CommandLineParameterList::<String>::positional("files", 0);
        assert_eq!(list.value_name(), "files");
    }

    #[test]
    fn named_parameter_may_clear_its_value_name() {
        let mut parameter = CommandLineParameter::<String>::new("output").with_value_name("value");
        parameter.set_value_name("");
        assert_eq!(parameter.usage_string(), "[--output]");
    }

    #[test]
    fn value_prefers_the_positional_slot() {
        let arguments = CommandLineArguments::create(["first", "--file=named"]);
        let parameter = CommandLineParameter::<String>::positional("file", 0);
        assert_eq!(parameter.value(&arguments).unwrap().as_deref(), Some("first"));
    }

    #[test]
    fn value_falls_back_to_named_matches_and_aliases() {
        let arguments = CommandLineArguments::create(["--o=named"]);
        let parameter = CommandLineParameter::<String>::positional("file", 0).with_alias("o");
        assert_eq!(parameter.value(&arguments).unwrap().as_deref(), Some("named"));
    }

    #[test]
    fn absent_value_is_none_not_an_error() {
        let arguments = CommandLineArguments::create(["--other=1"]);
        let parameter = CommandLineParameter::<String>::new("file");
        assert_eq!(parameter.value(&arguments).unwrap(), None);
    }

    #[test]
    fn values_parse_through_from_str() {
        let arguments = CommandLineArguments::create(["--count=1", "--count=2"]);
        let list = CommandLineParameterList::<u32>::new("count");
        assert_eq!(list.values(&arguments).unwrap(), vec![1, 2]);
    }

    #[test]
    fn unparseable_value_is_a_recoverable_error() {
        let arguments = CommandLineArguments::create(["--count=many"]);
        let count = CommandLineParameter::<u32>::new("count");
        match count.value(&arguments) {
            Err(ArgumentError::InvalidValue { parameter, value, .. }) => {
                assert_eq!(parameter, "--count");
                assert_eq!(value, "many");
            }
            other => panic!("expected InvalidValue, got: {other:?}"),
        }
    }

    #[test]
    fn list_values_gather_positional_tail_then_named() {
        let arguments = CommandLineArguments::create(["skip", "a", "b", "--file=c"]);
        let list = CommandLineParameterList::<String>::positional("file", 1);
        assert_eq!(list.values(&arguments).unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn remove_values_drains_progressively() {
        let mut arguments = CommandLineArguments::create(["--file=a", "--file=b", "--other=1"]);
        let list = CommandLineParameterList::<String>::new("file");

        assert_eq!(list.remove_values(&mut arguments).unwrap(), vec!["a", "b"]);
        assert_eq!(arguments.to_string(), "[--other=1]");

        // Drained: further calls return empty, not an error.
        assert_eq!(list.remove_values(&mut arguments).unwrap(), Vec::<String>::new());
        assert_eq!(list.remove_values(&mut arguments).unwrap(), Vec::<String>::new());
    }

    #[test]
    fn remove_value_consumes_one_match_at_a_time() {
        let mut arguments = CommandLineArguments::create(["--file=a", "--file=b"]);
        let parameter = CommandLineParameter::<String>::new("file");

        assert_eq!(parameter.remove_value(&mut arguments).unwrap().as_deref(), Some("a"));
        assert_eq!(parameter.remove_value(&mut arguments).unwrap().as_deref(), Some("b"));
        assert_eq!(parameter.remove_value(&mut arguments).unwrap(), None);
    }

    #[test]
    fn flag_semantics() {
        let parameter = CommandLineParameter::<bool>::new("verbose");

        let absent = CommandLineArguments::create(["--other"]);
        assert!(!parameter.flag_value(&absent).unwrap());

        let present = CommandLineArguments::create(["--verbose"]);
        assert!(parameter.flag_value(&present).unwrap());

        let explicit = CommandLineArguments::create(["--verbose=false"]);
        assert!(!parameter.flag_value(&explicit).unwrap());

        let invalid = CommandLineArguments::create(["--verbose=yes"]);
        assert!(parameter.flag_value(&invalid).is_err());
    }
}
