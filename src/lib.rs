mod agent;
mod error;
mod names;
mod os;
mod parser;
mod tokenizer;
mod tokens;
mod types;
mod version;

pub use error::{Error, Result};
pub use names::*;
pub use parser::{parse, Parser};
pub use types::UserAgent;
pub use version::VersionNo;
