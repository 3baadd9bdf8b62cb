//! Stack traces captured when an assertion fails.
//!
//! Capturing walks the current thread's stack with [`backtrace`] and, when
//! filtering is enabled, drops the frames at the top that belong to this
//! crate, the standard library or the capturing machinery itself, so the
//! first frame shown is the caller's assertion. Frames of the test harness
//! at the bottom of the stack are dropped too.

use alloc::{format, string::String, vec::Vec};
use core::fmt;
use std::sync::OnceLock;

const INTERNAL_CRATES: &[&str] = &["backtrace", "shouldbe", "std", "core", "alloc"];

/// Markers of the test harness or thread entry frames ending a capture.
const ENTRY_SYMBOLS: &[&str] = &[
    "std::sys::backtrace::__rust_begin_short_backtrace",
    "std::sys::backtrace__rust_begin_short_backtrace",
    "__rust_begin_short_backtrace",
];

/// Controls which frames [`StackTrace::capture`] keeps.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StackTraceFilter {
    /// Drop the leading frames of internal crates and the trailing frames
    /// of the standard library.
    pub skip_internal_frames: bool,
    /// Maximum number of frames kept.
    pub max_frame_count: usize,
}

impl StackTraceFilter {
    /// Internal frames removed, at most 100 frames.
    pub const DEFAULT: Self = Self {
        skip_internal_frames: true,
        max_frame_count: 100,
    };

    /// Every frame, at most 100 frames.
    pub const UNFILTERED: Self = Self {
        skip_internal_frames: false,
        max_frame_count: 100,
    };

    /// [`DEFAULT`](Self::DEFAULT) when `remove_internal_frames` is set,
    /// otherwise [`UNFILTERED`](Self::UNFILTERED).
    pub const fn removing_internal_frames(remove_internal_frames: bool) -> Self {
        if remove_internal_frames {
            Self::DEFAULT
        } else {
            Self::UNFILTERED
        }
    }
}

impl Default for StackTraceFilter {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// One resolved frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StackFrame {
    /// Demangled symbol name.
    pub symbol: String,
    /// Source file, when debug info is available.
    pub file: Option<String>,
    /// Source line, when debug info is available.
    pub line: Option<u32>,
}

impl fmt::Display for StackFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)?;
        match (&self.file, self.line) {
            (Some(file), Some(line)) => write!(f, " ({file}:{line})"),
            (Some(file), None) => write!(f, " ({file})"),
            (None, _) => Ok(()),
        }
    }
}

impl StackFrame {
    /// The crate this frame's symbol belongs to, if it can be told.
    pub fn crate_name(&self) -> Option<&str> {
        static CRATE_REGEX: OnceLock<regex::Regex> = OnceLock::new();
        let regex = CRATE_REGEX.get_or_init(|| {
            // `krate::f`, or the implementing type of `<krate::T as Trait>::f`.
            regex::Regex::new(r"^<?&?(?:mut )?([A-Za-z_][A-Za-z0-9_]*)::")
                .unwrap()
        });
        regex
            .captures(&self.symbol)
            .and_then(|captures| captures.get(1))
            .map(|name| name.as_str())
    }

    fn is_internal(&self) -> bool {
        if self
            .crate_name()
            .is_some_and(|name| INTERNAL_CRATES.contains(&name))
        {
            return true;
        }
        self.file.as_deref().is_some_and(is_internal_path)
    }

    fn is_std(&self) -> bool {
        self.crate_name()
            .is_some_and(|name| matches!(name, "std" | "core" | "alloc"))
            || self.file.as_deref().is_some_and(is_std_path)
            || matches!(
                self.symbol.as_str(),
                "__rust_try" | "__GI___clone3" | "start_thread" | "__libc_start_main"
            )
    }
}

fn path_regexes() -> &'static [regex::Regex; 2] {
    static REGEXES: OnceLock<[regex::Regex; 2]> = OnceLock::new();
    REGEXES.get_or_init(|| {
        [
            regex::Regex::new(
                r"(?:/lib/rustlib/src/rust|^/rustc/[0-9a-f]{40})/library/(std|core|alloc)/src/",
            )
            .unwrap(),
            regex::Regex::new(r"/\.cargo/registry/src/[^/]+-[0-9a-f]{16}/([^./]+)-[0-9]+\.[^/]*/src/")
                .unwrap(),
        ]
    })
}

fn is_std_path(path: &str) -> bool {
    path_regexes()[0].is_match(path)
}

fn is_internal_path(path: &str) -> bool {
    let [std_regex, registry_regex] = path_regexes();
    std_regex.is_match(path)
        || registry_regex
            .captures(path)
            .and_then(|captures| captures.get(1))
            .is_some_and(|name| INTERNAL_CRATES.contains(&name.as_str()))
}

/// The frames of a captured stack, most recent first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StackTrace {
    frames: Vec<StackFrame>,
}

impl StackTrace {
    /// Captures the current stack.
    #[inline(never)]
    pub fn capture(filter: StackTraceFilter) -> Self {
        let mut frames = Vec::new();
        let mut done = false;
        backtrace::trace(|frame| {
            backtrace::resolve_frame(frame, |symbol| {
                if done || frames.len() >= filter.max_frame_count {
                    return;
                }
                let Some(name) = symbol.name() else {
                    return;
                };
                let symbol_name = format!("{name:#}");
                if filter.skip_internal_frames
                    && ENTRY_SYMBOLS.contains(&symbol_name.as_str())
                {
                    done = true;
                    return;
                }
                frames.push(StackFrame {
                    symbol: symbol_name,
                    file: symbol
                        .filename()
                        .map(|path| path.to_string_lossy().into_owned()),
                    line: symbol.lineno(),
                });
            });
            !done && frames.len() < filter.max_frame_count
        });

        let trace = Self { frames };
        if filter.skip_internal_frames {
            trace.without_internal_frames()
        } else {
            trace
        }
    }

    /// Builds a trace from already resolved frames.
    pub fn from_frames(frames: Vec<StackFrame>) -> Self {
        Self { frames }
    }

    /// Drops the leading frames of internal crates and the trailing
    /// frames of the standard library.
    pub fn without_internal_frames(mut self) -> Self {
        let first_external = self
            .frames
            .iter()
            .position(|frame| !frame.is_internal())
            .unwrap_or(self.frames.len());
        self.frames.drain(..first_external);
        while let Some(last) = self.frames.last()
            && last.is_std()
        {
            self.frames.pop();
        }
        self
    }

    /// The captured frames.
    pub fn frames(&self) -> &[StackFrame] {
        &self.frames
    }

    /// Whether no frame was captured.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Each frame rendered as `symbol (file:line)`.
    pub fn to_strings(&self) -> Vec<String> {
        self.frames.iter().map(|frame| format!("{frame}")).collect()
    }
}
