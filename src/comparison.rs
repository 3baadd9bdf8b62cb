//! How an assertion compared its values.

use alloc::{borrow::Cow, format, string::String};

/// The strategy an assertion used to compare values.
///
/// Messages mention a non-standard strategy so the reader knows that
/// equality was not the default one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ComparisonStrategy {
    /// Plain equality.
    #[default]
    Standard,
    /// A user-provided comparator.
    Comparator {
        /// Name of the comparator, usually its type name.
        name: Cow<'static, str>,
        /// Optional human description of the comparator.
        description: Option<Cow<'static, str>>,
    },
}

impl ComparisonStrategy {
    /// A comparator identified by its name.
    pub fn comparator(name: impl Into<Cow<'static, str>>) -> Self {
        ComparisonStrategy::Comparator {
            name: name.into(),
            description: None,
        }
    }

    /// A comparator identified by the short name of the type `C`.
    pub fn comparator_of<C: ?Sized>() -> Self {
        Self::comparator(crate::value::short_type_name(core::any::type_name::<C>()))
    }

    /// A comparator with a human description, shown instead of its name.
    pub fn described_comparator(
        name: impl Into<Cow<'static, str>>,
        description: impl Into<Cow<'static, str>>,
    ) -> Self {
        ComparisonStrategy::Comparator {
            name: name.into(),
            description: Some(description.into()),
        }
    }

    /// Whether this is plain equality.
    pub fn is_standard(&self) -> bool {
        matches!(self, ComparisonStrategy::Standard)
    }

    /// How the comparator is named in messages: its quoted description when
    /// it has one, its name otherwise. Empty for the standard strategy.
    pub fn comparator_description(&self) -> String {
        match self {
            ComparisonStrategy::Standard => String::new(),
            ComparisonStrategy::Comparator {
                description: Some(description),
                ..
            } => format!("\"{description}\""),
            ComparisonStrategy::Comparator { name, .. } => String::from(&**name),
        }
    }

    /// The sentence appended to messages: empty for the standard strategy,
    /// `when comparing values using X` otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shouldbe::comparison::ComparisonStrategy;
    ///
    /// assert_eq!(ComparisonStrategy::Standard.as_text(), "");
    /// assert_eq!(
    ///     ComparisonStrategy::comparator("CaseInsensitiveComparator").as_text(),
    ///     "when comparing values using CaseInsensitiveComparator"
    /// );
    /// ```
    pub fn as_text(&self) -> String {
        if self.is_standard() {
            String::new()
        } else {
            format!("when comparing values using {}", self.comparator_description())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AbsValueComparator;

    #[test]
    fn test_described_comparator_is_quoted() {
        let strategy = ComparisonStrategy::described_comparator("Abs", "absolute value");
        assert_eq!(
            strategy.as_text(),
            "when comparing values using \"absolute value\""
        );
    }

    #[test]
    fn test_comparator_of_uses_short_name() {
        assert_eq!(
            ComparisonStrategy::comparator_of::<AbsValueComparator>().comparator_description(),
            "AbsValueComparator"
        );
        assert!(!ComparisonStrategy::comparator("x").is_standard());
    }
}
