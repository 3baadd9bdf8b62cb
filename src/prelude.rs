//! Commonly used items for convenient importing.
//!
//! ```rust
//! use shouldbe::prelude::*;
//!
//! let message = should_be_equal("Luke", "Yoda").create(&Description::EMPTY, &StandardRepresentation::new());
//! assert_eq!(message, "\nexpected: \"Yoda\"\n but was: \"Luke\"");
//! ```
//!
//! The prelude brings in the message traits, the description and value
//! types, the built-in representations, the error types and the most used
//! catalog functions. Less common catalog entries are imported from their
//! [`message`](crate::message) submodule.

pub use crate::{
    comparison::ComparisonStrategy,
    config::Configuration,
    creator::{AssertionErrorCreator, BoxedError, ErrorProvider},
    description::Description,
    error::{AssertionError, MultipleFailuresError},
    failures::{AssertionInfo, Failures},
    message,
    message::{
        AssertionErrorFactory, BasicErrorMessage, ErrorMessageFactory,
        collections::{should_be_empty, should_contain_elements, should_contain_only},
        should_be_equal::{should_be_equal, should_be_equal_using},
    },
    representation::{
        BinaryRepresentation, HexadecimalRepresentation, Representation, StandardRepresentation,
    },
    soft::ErrorCollector,
    value::{Value, unquoted},
};
