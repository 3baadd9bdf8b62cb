//! Turning a failed check into its error.
//!
//! [`Failures`] renders the message of a failure, unless the user replaced
//! it with an overriding message, and wraps it in an [`AssertionError`]
//! located at the caller.

use alloc::{string::String, sync::Arc};
use core::fmt;

use crate::{
    config::Configuration,
    creator::{AssertionErrorCreator, BoxedError},
    description::{Description, DescriptionFormatter},
    error::AssertionError,
    formatter::MessageFormatter,
    message::{AssertionErrorFactory, ErrorMessageFactory, errors},
    representation::Representation,
};
#[cfg(feature = "backtrace")]
use crate::stack_trace::{StackTrace, StackTraceFilter};

/// A message replacing the catalog message of a failure.
#[derive(Clone)]
pub enum OverridingErrorMessage {
    /// A message known upfront.
    Fixed(String),
    /// A message computed only when the assertion fails.
    Supplier(Arc<dyn Fn() -> String + Send + Sync>),
}

impl OverridingErrorMessage {
    /// Produces the message.
    pub fn get(&self) -> String {
        match self {
            OverridingErrorMessage::Fixed(message) => message.clone(),
            OverridingErrorMessage::Supplier(supplier) => supplier(),
        }
    }
}

impl fmt::Debug for OverridingErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverridingErrorMessage::Fixed(message) => f.debug_tuple("Fixed").field(message).finish(),
            OverridingErrorMessage::Supplier(_) => f.write_str("Supplier(..)"),
        }
    }
}

/// What is known about the assertion being checked.
#[derive(Clone)]
pub struct AssertionInfo {
    description: Description,
    representation: Arc<dyn Representation>,
    overriding_error_message: Option<OverridingErrorMessage>,
}

impl fmt::Debug for AssertionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssertionInfo")
            .field("description", &self.description)
            .field("representation", &self.representation.name())
            .field("overriding_error_message", &self.overriding_error_message)
            .finish()
    }
}

impl AssertionInfo {
    /// An assertion described by `description`, rendering values with
    /// the representation of `configuration`.
    pub fn new(description: Description, configuration: &Configuration) -> Self {
        Self {
            description,
            representation: configuration.shared_representation(),
            overriding_error_message: None,
        }
    }

    /// Renders values with `representation` instead.
    pub fn with_representation(mut self, representation: Arc<dyn Representation>) -> Self {
        self.representation = representation;
        self
    }

    /// Replaces the catalog message with `message`.
    pub fn overriding_error_message(mut self, message: impl Into<String>) -> Self {
        self.overriding_error_message = Some(OverridingErrorMessage::Fixed(message.into()));
        self
    }

    /// Replaces the catalog message with the one `supplier` computes when
    /// the assertion fails.
    pub fn overriding_error_message_with<F>(mut self, supplier: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.overriding_error_message = Some(OverridingErrorMessage::Supplier(Arc::new(supplier)));
        self
    }

    /// The assertion description.
    pub fn description(&self) -> &Description {
        &self.description
    }

    /// The representation used to render values.
    pub fn representation(&self) -> &dyn Representation {
        &*self.representation
    }

    /// The overriding message, computed now; `None` when absent or empty.
    pub fn overriding_message(&self) -> Option<String> {
        self.overriding_error_message
            .as_ref()
            .map(OverridingErrorMessage::get)
            .filter(|message| !message.is_empty())
    }
}

/// Builds the errors of failed assertions.
#[derive(Clone, Debug)]
pub struct Failures {
    creator: AssertionErrorCreator,
    remove_internal_stack_frames: bool,
}

impl Default for Failures {
    fn default() -> Self {
        Self::new(&Configuration::current())
    }
}

impl Failures {
    /// Failures built according to `configuration`.
    pub fn new(configuration: &Configuration) -> Self {
        Self {
            creator: configuration.error_creator(),
            remove_internal_stack_frames: configuration.remove_internal_stack_frames(),
        }
    }

    /// Whether captured stack traces leave out internal frames.
    pub fn remove_internal_stack_frames(&self) -> bool {
        self.remove_internal_stack_frames
    }

    /// The creator used for errors going through the bridge.
    pub fn creator(&self) -> &AssertionErrorCreator {
        &self.creator
    }

    /// The error for a failed assertion: the overriding message if there
    /// is one, otherwise the message of `factory`, prefixed by the
    /// description.
    ///
    /// ```rust
    /// use shouldbe::{
    ///     config::Configuration,
    ///     failures::{AssertionInfo, Failures},
    ///     message::collections::should_be_empty,
    /// };
    ///
    /// let configuration = Configuration::default();
    /// let info = AssertionInfo::new("names".into(), &configuration);
    /// let error = Failures::new(&configuration).failure(&info, &should_be_empty(vec!["Leia"]));
    /// assert_eq!(error.to_string(), "[names] \nExpecting empty but was: [\"Leia\"]");
    ///
    /// let info = info.overriding_error_message("no names expected");
    /// let error = Failures::new(&configuration).failure(&info, &should_be_empty(vec!["Leia"]));
    /// assert_eq!(error.to_string(), "[names] no names expected");
    /// ```
    #[track_caller]
    pub fn failure(&self, info: &AssertionInfo, factory: &dyn ErrorMessageFactory) -> AssertionError {
        let message = match self.overridden_message(info) {
            Some(message) => message,
            None => factory.create(info.description(), info.representation()),
        };
        self.failure_message(message)
    }

    /// The error for a failed assertion whose error is built through the
    /// bridge, such as a failed equality.
    #[track_caller]
    pub fn failure_with_error_factory(
        &self,
        info: &AssertionInfo,
        factory: &dyn AssertionErrorFactory,
    ) -> BoxedError {
        match self.overridden_message(info) {
            Some(message) => alloc::boxed::Box::new(self.failure_message(message)),
            None => factory.new_assertion_error(info.description(), info.representation(), &self.creator),
        }
    }

    /// The error carrying `message` as is.
    #[track_caller]
    pub fn failure_message(&self, message: impl Into<String>) -> AssertionError {
        let error = AssertionError::here(message);
        #[cfg(feature = "backtrace")]
        let error = error.with_stack_trace(StackTrace::capture(
            StackTraceFilter::removing_internal_frames(self.remove_internal_stack_frames),
        ));
        error
    }

    /// The error of an expected error of type `E` that was not raised.
    #[track_caller]
    pub fn expected_error_not_raised<E: ?Sized>(&self) -> AssertionError {
        self.failure_message(
            errors::expected_error_not_raised::<E>()
                .create(&Description::EMPTY, &crate::representation::StandardRepresentation::new()),
        )
    }

    /// The error of an expected error, named `type_name`, that was not
    /// raised.
    #[track_caller]
    pub fn expected_error_named_not_raised(&self, type_name: &str) -> AssertionError {
        self.failure_message(
            errors::expected_error_named_not_raised(type_name)
                .create(&Description::EMPTY, &crate::representation::StandardRepresentation::new()),
        )
    }

    /// The overriding message formatted like a template without arguments,
    /// or taken verbatim when it is not a valid template.
    fn overridden_message(&self, info: &AssertionInfo) -> Option<String> {
        let message = info.overriding_message()?;
        Some(
            MessageFormatter
                .format(info.description(), info.representation(), &message, &[])
                .unwrap_or_else(|_| {
                    let mut prefixed = DescriptionFormatter.format(info.description());
                    prefixed.push_str(&message);
                    prefixed
                }),
        )
    }
}

#[cfg(test)]
mod tests {
    use alloc::{string::ToString, vec};
    use core::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::{
        creator::StructuredErrorProvider,
        error::AssertionFailedError,
        message::{collections::should_be_empty, should_be_equal::should_be_equal},
    };

    fn info(description: &'static str) -> AssertionInfo {
        AssertionInfo::new(description.into(), &Configuration::default())
    }

    #[test]
    fn test_factory_message_with_description() {
        let error = Failures::new(&Configuration::default())
            .failure(&info("Test"), &should_be_empty(vec![1]));
        assert_eq!(error.message(), "[Test] \nExpecting empty but was: [1]");
        assert!(error.location().unwrap().file().ends_with("failures.rs"));
    }

    #[test]
    fn test_overriding_message_is_formatted() {
        let failures = Failures::new(&Configuration::default());
        let info = info("Test").overriding_error_message("100%% wrong%nreally");
        assert_eq!(
            failures.failure(&info, &should_be_empty(vec![1])).message(),
            "[Test] 100% wrong\nreally"
        );

        let info = info.overriding_error_message("50% %s");
        assert_eq!(
            failures.failure(&info, &should_be_empty(vec![1])).message(),
            "[Test] 50% %s"
        );
    }

    #[test]
    fn test_supplier_is_called_on_failure_only() {
        static CALLS: AtomicUsize = AtomicUsize::new(0);
        let info = info("").overriding_error_message_with(|| {
            CALLS.fetch_add(1, Ordering::SeqCst);
            "lazy".to_string()
        });
        assert_eq!(CALLS.load(Ordering::SeqCst), 0);
        let error = Failures::new(&Configuration::default()).failure(&info, &should_be_empty(vec![1]));
        assert_eq!(error.message(), "lazy");
        assert_eq!(CALLS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_empty_overriding_message_is_ignored() {
        let info = info("").overriding_error_message("");
        let error = Failures::new(&Configuration::default()).failure(&info, &should_be_empty(vec![1]));
        assert_eq!(error.message(), "\nExpecting empty but was: [1]");
    }

    #[test]
    fn test_equality_goes_through_the_bridge() {
        let configuration = Configuration::builder()
            .error_provider(StructuredErrorProvider)
            .build()
            .unwrap();
        let failures = Failures::new(&configuration);
        let info = AssertionInfo::new(Description::EMPTY, &configuration);
        let error = failures.failure_with_error_factory(&info, &should_be_equal("Luke", "Yoda"));
        let failed = error.downcast_ref::<AssertionFailedError>().unwrap();
        assert_eq!(failed.actual(), Some("\"Luke\""));
        assert_eq!(failed.to_string(), "\nexpected: \"Yoda\"\n but was: \"Luke\"");

        let info = info.overriding_error_message("custom");
        let error = failures.failure_with_error_factory(&info, &should_be_equal("Luke", "Yoda"));
        assert!(error.is::<AssertionError>());
    }

    #[test]
    fn test_expected_error_not_raised() {
        let failures = Failures::new(&Configuration::default());
        assert_eq!(
            failures.expected_error_not_raised::<core::fmt::Error>().message(),
            "Error should have been thrown"
        );
        assert_eq!(
            failures.expected_error_named_not_raised("IoError").message(),
            "IoError should have been thrown"
        );
    }
}
