//! Settings shared by every assertion: how values are represented, the
//! rendering limits, stack-trace filtering and the error provider.
//!
//! A [`Configuration`] is an ordinary value passed to whatever needs it.
//! One configuration can also be installed as the process-wide default,
//! once, typically at the start of a test binary:
//!
//! ```rust
//! use shouldbe::{config::Configuration, prelude::*};
//!
//! let configuration = Configuration::builder()
//!     .representation(HexadecimalRepresentation::new())
//!     .max_elements_for_printing(100)
//!     .build()
//!     .expect("limits are positive");
//! configuration.install().expect("no configuration installed yet");
//!
//! assert_eq!(
//!     Configuration::current().representation().to_string_of(&10u8.into()),
//!     "0x0A"
//! );
//! ```

#[cfg(feature = "std")]
mod env;
mod lock;

use alloc::{format, string::String, sync::Arc};
use core::fmt::{self, Write as _};

#[cfg(feature = "std")]
pub use self::env::{EnvOptions, StackTraceMode};
use self::lock::InstallOnce;
use crate::{
    creator::{AssertionErrorCreator, ErrorProvider},
    representation::{Representation, RepresentationLimits, StandardRepresentation},
};

/// Maximum number of index differences listed by
/// [`should_contain_exactly_with_indexes`](crate::message::contain_exactly::should_contain_exactly_with_indexes).
pub const MAX_INDICES_FOR_PRINTING: usize = 50;

static INSTALLED: InstallOnce<Configuration> = InstallOnce::new();

/// An invalid configuration setting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A limit that must be positive was zero.
    NonPositiveLimit {
        /// Name of the limit.
        name: &'static str,
    },
    /// A setting could not be parsed.
    InvalidValue {
        /// Name of the setting.
        key: &'static str,
        /// The rejected value.
        value: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositiveLimit { name } => write!(f, "{name} must be positive"),
            ConfigError::InvalidValue { key, value } => {
                write!(f, "invalid value for {key}: {value:?}")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

/// Error returned when a default configuration is already installed.
///
/// Contains the configuration that was rejected.
pub struct ConfigurationAlreadyInstalledError(pub Configuration);

impl fmt::Debug for ConfigurationAlreadyInstalledError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigurationAlreadyInstalledError").finish()
    }
}

impl fmt::Display for ConfigurationAlreadyInstalledError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a default configuration is already installed")
    }
}

impl core::error::Error for ConfigurationAlreadyInstalledError {}

/// Settings used to render messages and build assertion errors.
#[derive(Clone)]
pub struct Configuration {
    representation: Arc<dyn Representation>,
    limits: RepresentationLimits,
    remove_internal_stack_frames: bool,
    error_provider: Option<Arc<dyn ErrorProvider>>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            representation: Arc::new(StandardRepresentation::new()),
            limits: RepresentationLimits::DEFAULT,
            remove_internal_stack_frames: true,
            error_provider: None,
        }
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("representation", &self.representation.name())
            .field("limits", &self.limits)
            .field(
                "remove_internal_stack_frames",
                &self.remove_internal_stack_frames,
            )
            .field("error_provider", &self.error_provider.is_some())
            .finish()
    }
}

impl Configuration {
    /// Starts a configuration from the default settings.
    pub fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder::new()
    }

    /// The default settings overlaid with the `SHOULDBE_*` environment
    /// variables. Invalid variables are ignored with a warning.
    #[cfg(feature = "std")]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::builder().with_env().build()
    }

    /// The installed default configuration, or the built-in defaults.
    pub fn current() -> Self {
        INSTALLED.get().cloned().unwrap_or_default()
    }

    /// Whether a default configuration has been installed.
    pub fn is_installed() -> bool {
        INSTALLED.get().is_some()
    }

    /// Installs this configuration as the process-wide default.
    ///
    /// # Errors
    ///
    /// Fails, handing the configuration back, if one is already installed.
    pub fn install(self) -> Result<(), ConfigurationAlreadyInstalledError> {
        let description = self.describe();
        match INSTALLED.install(self) {
            Ok(()) => {
                tracing::debug!(configuration = %description, "installed default configuration");
                Ok(())
            }
            Err(rejected) => Err(ConfigurationAlreadyInstalledError(rejected)),
        }
    }

    /// The representation used to render values.
    pub fn representation(&self) -> &dyn Representation {
        &*self.representation
    }

    /// A shared handle on the representation.
    pub fn shared_representation(&self) -> Arc<dyn Representation> {
        Arc::clone(&self.representation)
    }

    /// The rendering limits.
    pub fn limits(&self) -> RepresentationLimits {
        self.limits
    }

    /// Whether frames inside this crate are removed from captured stack
    /// traces.
    pub fn remove_internal_stack_frames(&self) -> bool {
        self.remove_internal_stack_frames
    }

    /// The registered error provider, if any.
    pub fn error_provider(&self) -> Option<&Arc<dyn ErrorProvider>> {
        self.error_provider.as_ref()
    }

    /// An error creator using this configuration's provider.
    pub fn error_creator(&self) -> AssertionErrorCreator {
        AssertionErrorCreator::from_configuration(self)
    }

    /// Lists every setting on its own line.
    ///
    /// ```rust
    /// use shouldbe::config::Configuration;
    ///
    /// let description = Configuration::default().describe();
    /// assert!(description.contains("- representation ......................... = StandardRepresentation\n"));
    /// ```
    pub fn describe(&self) -> String {
        let provider = if self.error_provider.is_some() {
            "registered"
        } else {
            "none"
        };
        let settings: [(&str, String); 7] = [
            ("representation", String::from(self.representation.name())),
            (
                "max_length_for_single_line_description",
                format!("{}", self.limits.max_length_for_single_line_description),
            ),
            (
                "max_elements_for_printing",
                format!("{}", self.limits.max_elements_for_printing),
            ),
            (
                "max_stack_trace_elements_displayed",
                format!("{}", self.limits.max_stack_trace_elements_displayed),
            ),
            (
                "max_indices_for_printing",
                format!("{MAX_INDICES_FOR_PRINTING}"),
            ),
            (
                "remove_internal_stack_frames",
                format!("{}", self.remove_internal_stack_frames),
            ),
            ("error_provider", String::from(provider)),
        ];

        let mut out = String::from("Configuration:\n");
        for (name, value) in settings {
            let _ = write!(out, "- {name} ");
            for _ in name.len()..DESCRIBE_NAME_WIDTH {
                out.push('.');
            }
            let _ = writeln!(out, " = {value}");
        }
        out
    }
}

const DESCRIBE_NAME_WIDTH: usize = 39;

/// Builder for [`Configuration`].
#[derive(Clone)]
pub struct ConfigurationBuilder {
    representation: Option<Arc<dyn Representation>>,
    limits: RepresentationLimits,
    remove_internal_stack_frames: bool,
    error_provider: Option<Arc<dyn ErrorProvider>>,
}

impl Default for ConfigurationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ConfigurationBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigurationBuilder")
            .field(
                "representation",
                &self.representation.as_ref().map(|r| r.name()),
            )
            .field("limits", &self.limits)
            .field(
                "remove_internal_stack_frames",
                &self.remove_internal_stack_frames,
            )
            .field("error_provider", &self.error_provider.is_some())
            .finish()
    }
}

impl ConfigurationBuilder {
    /// The default settings.
    pub fn new() -> Self {
        Self {
            representation: None,
            limits: RepresentationLimits::DEFAULT,
            remove_internal_stack_frames: true,
            error_provider: None,
        }
    }

    /// Renders values with `representation`.
    ///
    /// Without one, a [`StandardRepresentation`] honouring the configured
    /// limits is used.
    pub fn representation<R: Representation>(mut self, representation: R) -> Self {
        self.representation = Some(Arc::new(representation));
        self
    }

    /// Sets the line length above which collections are rendered one element
    /// per line.
    pub fn max_length_for_single_line_description(mut self, value: usize) -> Self {
        self.limits.max_length_for_single_line_description = value;
        self
    }

    /// Sets the number of elements above which collections are truncated.
    pub fn max_elements_for_printing(mut self, value: usize) -> Self {
        self.limits.max_elements_for_printing = value;
        self
    }

    /// Sets the number of stack frames shown for rendered errors.
    pub fn max_stack_trace_elements_displayed(mut self, value: usize) -> Self {
        self.limits.max_stack_trace_elements_displayed = value;
        self
    }

    /// Removes frames inside this crate from captured stack traces.
    pub fn remove_internal_stack_frames(mut self, value: bool) -> Self {
        self.remove_internal_stack_frames = value;
        self
    }

    /// Registers the provider of enhanced assertion errors.
    pub fn error_provider<P: ErrorProvider>(mut self, provider: P) -> Self {
        self.error_provider = Some(Arc::new(provider));
        self
    }

    /// Overlays the settings read from the `SHOULDBE_*` environment
    /// variables.
    #[cfg(feature = "std")]
    pub fn with_env(self) -> Self {
        env::env_options().apply(self)
    }

    /// Validates the limits and builds the configuration.
    pub fn build(self) -> Result<Configuration, ConfigError> {
        let limits = self.limits.validate()?;
        let representation = match self.representation {
            Some(representation) => representation,
            None => Arc::new(StandardRepresentation::with_limits(limits)?),
        };
        Ok(Configuration {
            representation,
            limits,
            remove_internal_stack_frames: self.remove_internal_stack_frames,
            error_provider: self.error_provider,
        })
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;
    use crate::{creator::StructuredErrorProvider, representation::BinaryRepresentation};

    #[test]
    fn test_limits_reach_the_standard_representation() {
        let configuration = Configuration::builder()
            .max_elements_for_printing(2)
            .build()
            .unwrap();
        assert_eq!(
            configuration
                .representation()
                .to_string_of(&alloc::vec![1, 2, 3].into()),
            "[1, ..., 3]"
        );
    }

    #[test]
    fn test_zero_limit_is_rejected() {
        let error = Configuration::builder()
            .max_length_for_single_line_description(0)
            .build()
            .unwrap_err();
        assert_eq!(
            error,
            ConfigError::NonPositiveLimit {
                name: "max_length_for_single_line_description"
            }
        );
        assert_eq!(
            error.to_string(),
            "max_length_for_single_line_description must be positive"
        );
    }

    #[test]
    fn test_describe_lists_every_setting() {
        let configuration = Configuration::builder()
            .representation(BinaryRepresentation::new())
            .error_provider(StructuredErrorProvider)
            .build()
            .unwrap();
        let description = configuration.describe();
        assert_eq!(
            description,
            "Configuration:\n\
             - representation ......................... = BinaryRepresentation\n\
             - max_length_for_single_line_description . = 80\n\
             - max_elements_for_printing .............. = 1000\n\
             - max_stack_trace_elements_displayed ..... = 3\n\
             - max_indices_for_printing ............... = 50\n\
             - remove_internal_stack_frames ........... = true\n\
             - error_provider ......................... = registered\n"
        );
    }

    static_assertions::assert_impl_all!(Configuration: Send, Sync, Clone);
    static_assertions::assert_impl_all!(ConfigError: core::error::Error);
    static_assertions::assert_impl_all!(ConfigurationAlreadyInstalledError: core::error::Error);
}
