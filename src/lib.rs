#![cfg_attr(not(doc), no_std)]
#![deny(
    missing_docs,
    clippy::alloc_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    clippy::missing_safety_doc,
    clippy::undocumented_unsafe_blocks,
    clippy::as_ptr_cast_mut,
    clippy::ptr_as_ptr,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]
// Make docs.rs generate better docs
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Readable, deterministic error messages for fluent assertion libraries.
//!
//! ## Overview
//!
//! When an assertion fails, the interesting part is the message: what was
//! expected, what was found instead, and how the two differ. This crate
//! builds those messages and the errors that carry them. It does not decide
//! whether an assertion holds; an assertion library does that and calls
//! into this crate once it knows the check failed.
//!
//! ## Quick Example
//!
//! ```
//! use shouldbe::prelude::*;
//!
//! let message = should_contain_elements(
//!     vec!["Luke", "Yoda"],
//!     vec!["Han"],
//!     vec!["Han"],
//!     ComparisonStrategy::Standard,
//! )
//! .create(&"jedi".into(), &StandardRepresentation::new());
//! assert_eq!(
//!     message,
//!     "[jedi] \nExpecting Vec:\n  [\"Luke\", \"Yoda\"]\nto contain:\n  [\"Han\"]\nbut could not find the following element(s):\n  [\"Han\"]\n"
//! );
//! ```
//!
//! ## Core Concepts
//!
//! - A **[`Value`](value::Value)** is anything that can appear in a
//!   message: text, numbers, collections, maps, errors or any Rust object
//!   rendered through a handler.
//! - A **[`Representation`](representation::Representation)** turns values
//!   into text. The [`StandardRepresentation`](representation::StandardRepresentation)
//!   quotes text, spreads long collections over several lines and truncates
//!   huge ones. Values wrapped with [`unquoted`](value::unquoted) bypass it.
//! - A **message** is data: a template with `%s` placeholders and the values
//!   to put in them ([`BasicErrorMessage`](message::BasicErrorMessage)). The
//!   [`message`] module holds the catalog of ready-made failure messages.
//! - The **[`creator`]** turns a message into an error, either the built-in
//!   [`AssertionError`](error::AssertionError) or a richer error built by a
//!   registered [`ErrorProvider`](creator::ErrorProvider).
//! - **Soft assertions** collect failures in an
//!   [`ErrorCollector`](soft::ErrorCollector) and report them all at once
//!   in a [`MultipleFailuresError`](error::MultipleFailuresError).
//!
//! ## Configuration
//!
//! Everything that can be tuned lives in a
//! [`Configuration`](config::Configuration): the representation, the
//! rendering limits, stack-trace filtering and the error provider. It is
//! passed explicitly, and one configuration can be installed once as the
//! process-wide default.
//!
//! ## Features
//!
//! - `std` (default): the standard library lock for the default
//!   configuration and the `SHOULDBE_*` environment variables. Without it
//!   the crate is `no_std` and relies on `alloc` and [`spin`].
//! - `backtrace`: assertion errors capture a stack trace, with the frames
//!   of this crate and of the standard library filtered out.
//!
//! ## Logging
//!
//! Notable events are emitted with [`tracing`]: a provider declining a
//! request, a configuration being installed, invalid environment values
//! and collected soft failures. No subscriber is installed by this crate.

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod macros;

pub mod comparison;
pub mod config;
pub mod creator;
pub mod description;
pub mod error;
pub mod failures;
pub mod formatter;
pub mod handlers;
pub mod message;
pub mod prelude;
pub mod representation;
pub mod soft;
#[cfg(feature = "backtrace")]
#[cfg_attr(docsrs, doc(cfg(feature = "backtrace")))]
pub mod stack_trace;
pub mod value;

#[doc(hidden)]
pub mod __private {
    pub use alloc::{vec, vec::Vec};
    pub use core::convert::Into;
}
