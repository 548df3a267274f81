mod captures;
mod flags;
mod match_data;
mod matcher;

pub use self::captures::{Captures, Match, SubCaptures, Subject};
pub use self::flags::MatchFlags;
pub use self::matcher::{Matcher, Outcome};
