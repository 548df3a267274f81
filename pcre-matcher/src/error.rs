use std::fmt;
use std::result::Result as StdResult;

use thiserror::Error;

use crate::{compile::CompileError, ffi};

/// The type returned by pcre-matcher methods.
pub type Result<T> = StdResult<T, Error>;

/// pcre-matcher Error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The pattern failed to compile.
    #[error(transparent)]
    Compile(#[from] CompileError),

    /// The engine returned a code outside of the success, no match and partial match set.
    ///
    /// This covers exhausted match or depth limits as well as options the engine rejected.
    #[error("unexpected return code from pcre2_match: {code} ({message})")]
    Engine {
        /// The raw return code.
        code: i32,
        /// The engine's description of the code.
        message: String,
    },

    /// A memory allocation failed.
    #[error("A memory allocation failed.")]
    NoMem,

    /// No capture group has the given name.
    #[error(transparent)]
    NotFound(#[from] NotFound),

    /// Invalid UTF-8 string
    #[error(transparent)]
    Utf8(#[from] std::str::Utf8Error),

    /// Invalid flag
    #[error("invalid pattern flag: {0}")]
    InvalidFlag(char),
}

/// A capture group name that the pattern does not define.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("no capture group named `{0}`")]
pub struct NotFound(pub String);

/// Returns the engine's description of an error code.
pub(crate) fn error_message(code: i32) -> String {
    let mut buf = [0u8; 256];

    let n = unsafe { ffi::pcre2_get_error_message_8(code, buf.as_mut_ptr(), buf.len()) };

    if n < 0 {
        format!("unknown error code {}", code)
    } else {
        String::from_utf8_lossy(&buf[..n as usize]).into_owned()
    }
}

/// The classified return code of a single `pcre2_match` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Exec {
    /// Number of offset pairs written by the engine.
    Matched(usize),
    NotMatched,
    Partial,
}

pub(crate) trait AsResult
where
    Self: Sized,
{
    type Output;
    type Error: fmt::Debug;

    fn ok(self) -> StdResult<Self::Output, Self::Error>;
}

impl AsResult for libc::c_int {
    type Output = Exec;
    type Error = Error;

    fn ok(self) -> StdResult<Self::Output, Self::Error> {
        match self {
            rc if rc >= 0 => Ok(Exec::Matched(rc as usize)),
            ffi::PCRE2_ERROR_NOMATCH => Ok(Exec::NotMatched),
            ffi::PCRE2_ERROR_PARTIAL => Ok(Exec::Partial),
            code => Err(Error::Engine {
                code,
                message: error_message(code),
            }),
        }
    }
}
