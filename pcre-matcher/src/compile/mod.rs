#[macro_use]
mod pattern;
mod builder;
mod error;
mod flags;

pub use self::builder::{compile, must_compile, Builder};
pub use self::error::CompileError;
pub use self::flags::{Bsr, Flags, Newline};
pub use self::pattern::Pattern;
