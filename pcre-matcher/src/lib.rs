//! Capture-aware pattern matching on top of the PCRE2 backtracking engine.
//!
//! A pattern is compiled once into a [`CompiledPattern`], then matched any number of times
//! through a reusable [`Matcher`]. The matcher keeps its capture buffer between attempts and
//! borrows the subject, so group views are slices of the caller's data.
//!
//! # Usage
//!
//! This crate can be used by adding `pcre-matcher` to your dependencies in your project's Cargo.toml.
//!
//! ```toml
//! [dependencies]
//! pcre-matcher = "0.1"
//! ```
//!
//! # Examples
//!
//! ```
//! use pcre_matcher::prelude::*;
//!
//! let re = compile(r"^(X)*ab(?<last>c)$", Flags::empty()).unwrap();
//! let m = re.matcher("abc", MatchFlags::empty()).unwrap();
//!
//! assert!(m.matches());
//! assert_eq!(m.groups(), 2);
//! assert_eq!(m.group_str(0).unwrap(), Some("abc"));
//! assert!(!m.present(1));
//! assert_eq!(m.named_str("last").unwrap(), Some("c"));
//!
//! assert_eq!(
//!     must_compile("foo", Flags::empty())
//!         .replace_all("I like foods.", "car", MatchFlags::empty())
//!         .unwrap(),
//!     "I like cards."
//! );
//! ```
#![deny(missing_docs, rust_2018_compatibility, rust_2018_idioms)]

#[macro_use]
extern crate log;

mod ffi {
    pub use pcre2_sys::*;
}

mod common;
mod error;
#[macro_use]
mod compile;
mod finder;
mod runtime;

pub use crate::common::{version, version_str, CompiledPattern, NamedGroupTable};
pub use crate::compile::{compile, must_compile, Bsr, Builder, CompileError, Flags, Newline, Pattern};
pub use crate::error::{Error, NotFound, Result};
pub use crate::runtime::{Captures, Match, MatchFlags, Matcher, Outcome, SubCaptures, Subject};

/// The `pcre-matcher` Prelude
pub mod prelude {
    pub use crate::{
        compile, must_compile, pattern, Builder, CompiledPattern, Flags, MatchFlags, Matcher, Outcome, Pattern,
    };
}
