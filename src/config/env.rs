use alloc::string::String;
use std::sync::OnceLock;

use super::{ConfigError, ConfigurationBuilder};

const MAX_LINE_LENGTH: &str = "SHOULDBE_MAX_LINE_LENGTH";
const MAX_ELEMENTS: &str = "SHOULDBE_MAX_ELEMENTS";
const MAX_STACK_TRACE: &str = "SHOULDBE_MAX_STACK_TRACE";
const STACK_TRACE: &str = "SHOULDBE_STACK_TRACE";

/// How captured stack traces are filtered.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StackTraceMode {
    /// Keep every frame.
    Full,
    /// Drop the frames inside this crate and the standard library.
    Filtered,
}

/// Settings read from the environment.
///
/// | Variable                    | Setting                                  |
/// |-----------------------------|------------------------------------------|
/// | `SHOULDBE_MAX_LINE_LENGTH`  | `max_length_for_single_line_description` |
/// | `SHOULDBE_MAX_ELEMENTS`     | `max_elements_for_printing`              |
/// | `SHOULDBE_MAX_STACK_TRACE`  | `max_stack_trace_elements_displayed`     |
/// | `SHOULDBE_STACK_TRACE`      | comma-separated flags: `full`, `filtered`|
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct EnvOptions {
    /// `SHOULDBE_MAX_LINE_LENGTH`.
    pub max_line_length: Option<usize>,
    /// `SHOULDBE_MAX_ELEMENTS`.
    pub max_elements: Option<usize>,
    /// `SHOULDBE_MAX_STACK_TRACE`.
    pub max_stack_trace: Option<usize>,
    /// `SHOULDBE_STACK_TRACE`.
    pub stack_trace: Option<StackTraceMode>,
}

/// The options of the process environment, read once.
pub(super) fn env_options() -> &'static EnvOptions {
    static OPTIONS: OnceLock<EnvOptions> = OnceLock::new();
    OPTIONS.get_or_init(|| EnvOptions::parse(|key| std::env::var(key).ok()))
}

impl EnvOptions {
    /// Reads the options through `lookup`, skipping invalid values with a
    /// warning.
    ///
    /// ```rust
    /// use shouldbe::config::{EnvOptions, StackTraceMode};
    ///
    /// let options = EnvOptions::parse(|key| match key {
    ///     "SHOULDBE_MAX_ELEMENTS" => Some("10".to_string()),
    ///     "SHOULDBE_STACK_TRACE" => Some("full".to_string()),
    ///     _ => None,
    /// });
    /// assert_eq!(options.max_elements, Some(10));
    /// assert_eq!(options.stack_trace, Some(StackTraceMode::Full));
    /// ```
    pub fn parse(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut options = Self::default();
        for (key, slot) in [
            (MAX_LINE_LENGTH, &mut options.max_line_length),
            (MAX_ELEMENTS, &mut options.max_elements),
            (MAX_STACK_TRACE, &mut options.max_stack_trace),
        ] {
            if let Some(raw) = lookup(key) {
                match parse_limit(key, &raw) {
                    Ok(value) => *slot = Some(value),
                    Err(error) => tracing::warn!(%error, "ignoring environment variable"),
                }
            }
        }
        if let Some(raw) = lookup(STACK_TRACE) {
            match parse_stack_trace(&raw) {
                Ok(mode) => options.stack_trace = mode,
                Err(error) => tracing::warn!(%error, "ignoring environment variable"),
            }
        }
        options
    }

    pub(super) fn apply(&self, mut builder: ConfigurationBuilder) -> ConfigurationBuilder {
        if let Some(value) = self.max_line_length {
            builder = builder.max_length_for_single_line_description(value);
        }
        if let Some(value) = self.max_elements {
            builder = builder.max_elements_for_printing(value);
        }
        if let Some(value) = self.max_stack_trace {
            builder = builder.max_stack_trace_elements_displayed(value);
        }
        if let Some(mode) = self.stack_trace {
            builder = builder.remove_internal_stack_frames(mode == StackTraceMode::Filtered);
        }
        builder
    }
}

fn parse_limit(key: &'static str, raw: &str) -> Result<usize, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: String::from(raw),
    })
}

/// The last recognised flag wins; unknown flags reject the variable.
fn parse_stack_trace(raw: &str) -> Result<Option<StackTraceMode>, ConfigError> {
    let mut mode = None;
    for flag in raw.split(',').map(str::trim).filter(|flag| !flag.is_empty()) {
        mode = Some(match flag {
            "full" => StackTraceMode::Full,
            "filtered" => StackTraceMode::Filtered,
            _ => {
                return Err(ConfigError::InvalidValue {
                    key: STACK_TRACE,
                    value: String::from(raw),
                });
            }
        });
    }
    Ok(mode)
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    fn parse(vars: &[(&str, &str)]) -> EnvOptions {
        EnvOptions::parse(|key| {
            vars.iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| value.to_string())
        })
    }

    #[test]
    fn test_valid_values() {
        let options = parse(&[
            ("SHOULDBE_MAX_LINE_LENGTH", "120"),
            ("SHOULDBE_MAX_STACK_TRACE", " 5 "),
            ("SHOULDBE_STACK_TRACE", "full, filtered"),
        ]);
        assert_eq!(
            options,
            EnvOptions {
                max_line_length: Some(120),
                max_elements: None,
                max_stack_trace: Some(5),
                stack_trace: Some(StackTraceMode::Filtered),
            }
        );
    }

    #[test]
    fn test_invalid_values_are_skipped() {
        let options = parse(&[
            ("SHOULDBE_MAX_ELEMENTS", "many"),
            ("SHOULDBE_STACK_TRACE", "full,verbose"),
        ]);
        assert_eq!(options, EnvOptions::default());
    }

    #[test]
    fn test_apply_overrides_builder() {
        let options = EnvOptions {
            max_elements: Some(2),
            stack_trace: Some(StackTraceMode::Full),
            ..EnvOptions::default()
        };
        let configuration = options.apply(ConfigurationBuilder::new()).build().unwrap();
        assert_eq!(configuration.limits().max_elements_for_printing, 2);
        assert!(!configuration.remove_internal_stack_frames());
    }

    #[test]
    fn test_zero_from_environment_fails_on_build() {
        let options = parse(&[("SHOULDBE_MAX_ELEMENTS", "0")]);
        assert_eq!(
            options.apply(ConfigurationBuilder::new()).build().unwrap_err(),
            ConfigError::NonPositiveLimit {
                name: "max_elements_for_printing"
            }
        );
    }
}
