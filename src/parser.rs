use std::sync::OnceLock;

use regex::Regex;

use crate::agent::classify_agent;
use crate::error::Result;
use crate::names;
use crate::os::classify_os;
use crate::tokenizer::scan;
use crate::tokens::TokenList;
use crate::types::UserAgent;
use crate::version::VersionNo;

/// Pre-compiled patterns shared by all parse calls. Compiling once at
/// construction keeps the per-call path regex-compilation-free.
pub(crate) struct Patterns {
    /// Runs of digits, dots and underscores — composite version discovery
    /// in tokens like "CPU iPhone OS 14_2 like Mac OS X".
    pub version_run: Regex,
}

impl Patterns {
    fn compile() -> Result<Self> {
        Ok(Patterns {
            version_run: Regex::new(r"[_\d.]+")?,
        })
    }
}

/// Classifies raw User-Agent strings. One instance may serve any number of
/// threads concurrently; every call owns its token store and result.
pub struct Parser {
    patterns: Patterns,
}

impl Parser {
    pub fn new() -> Result<Self> {
        Ok(Parser {
            patterns: Patterns::compile()?,
        })
    }

    /// Classify one raw User-Agent string. Total over all inputs: malformed
    /// or unknown agents degrade to a generic classification, never an
    /// error.
    pub fn parse(&self, input: &str) -> UserAgent {
        let mut ua = UserAgent {
            raw: input.to_string(),
            ..UserAgent::default()
        };

        let mut tokens = TokenList::with_capacity(8);
        scan(input, &mut tokens);

        // A bare URL literal among the tokens is a bot self-link; lift it
        // out before classification so it cannot match as an agent name.
        let url_index = tokens
            .iter()
            .position(|t| t.key.starts_with("http://") || t.key.starts_with("https://"));
        if let Some(i) = url_index {
            ua.url = tokens.remove(i).key;
        }

        classify_os(&mut tokens, &mut ua, &self.patterns);
        classify_agent(&mut tokens, &mut ua, &self.patterns);

        // Post-classification corrections, in this order.
        if ua.is_android() {
            ua.mobile = true;
        }
        if ua.tablet {
            ua.mobile = false;
        }
        if !ua.bot {
            ua.bot = !ua.url.is_empty();
        }
        if !ua.bot {
            ua.bot = matches!(
                ua.name.as_str(),
                names::TWITTERBOT | names::FACEBOOK_EXTERNAL_HIT
            );
        }

        ua.version_no = VersionNo::parse(&ua.version);
        ua.os_version_no = VersionNo::parse(&ua.os_version);

        ua
    }
}

/// Classify using a process-wide shared parser.
pub fn parse(input: &str) -> UserAgent {
    default_parser().parse(input)
}

fn default_parser() -> &'static Parser {
    static PARSER: OnceLock<Parser> = OnceLock::new();
    PARSER.get_or_init(|| Parser::new().expect("builtin patterns compile"))
}
