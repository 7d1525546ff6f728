use std::cell::RefCell;

use crate::names::{CROS_ARCH_KEYS, FILLER, VERSIONED_KEYS};
use crate::tokens::TokenList;

/// Key/value accumulation buffers, reused across calls on the same thread.
/// Cleared on acquisition so reuse is unobservable; the borrow is scoped to
/// one `scan` call and released on every exit path, including unwinding.
#[derive(Default)]
struct Scratch {
    key: Vec<u8>,
    val: Vec<u8>,
}

thread_local! {
    static SCRATCH: RefCell<Scratch> = RefCell::new(Scratch::default());
}

/// Single left-to-right pass over the raw bytes, appending tokens to
/// `tokens`. Never fails: malformed input degrades to poorly segmented
/// tokens that downstream rules simply won't match.
pub(crate) fn scan(input: &str, tokens: &mut TokenList) {
    SCRATCH.with(|cell| {
        let mut scratch = cell.borrow_mut();
        let scratch = &mut *scratch;
        scratch.key.clear();
        scratch.val.clear();
        let mut scanner = Scanner {
            tokens,
            key: &mut scratch.key,
            val: &mut scratch.val,
            slash: false,
            is_url: false,
        };
        scanner.run(input.as_bytes());
    });
}

struct Scanner<'a> {
    tokens: &'a mut TokenList,
    key: &'a mut Vec<u8>,
    val: &'a mut Vec<u8>,
    /// Set once a `/` switched accumulation to the value buffer.
    slash: bool,
    /// Set once a `http://`-style literal was recognized; suppresses slash
    /// segmentation for the remainder of the token.
    is_url: bool,
}

impl Scanner<'_> {
    fn run(&mut self, bytes: &[u8]) {
        let mut i = 0;
        while i < bytes.len() {
            let c = bytes[i];
            match c {
                // Parens, brackets and semicolons all segment; a semicolon
                // does so regardless of any surrounding () or [] context.
                b')' | b';' | b'(' | b'[' | b']' => self.flush(),
                b':' => {
                    if self.key.ends_with(b"http") || self.key.ends_with(b"https") {
                        // URL scheme marker: keep the colon literal.
                        self.key.push(b':');
                    } else if i + 1 < bytes.len() && bytes[i + 1] != b' ' {
                        // Soft separator: a space stands in for the colon.
                        self.key.push(b' ');
                    }
                    // Colon directly before a space (or at end of input) is
                    // a malformed key/value separator; drop it.
                }
                b' ' if self.slash => self.flush(),
                _ if self.slash => self.val.push(c),
                b'/' if !self.is_url => {
                    if i + 1 < bytes.len()
                        && bytes[i + 1] == b'/'
                        && (self.key.ends_with(b"http:") || self.key.ends_with(b"https:"))
                    {
                        self.key.push(c);
                        self.is_url = true;
                    } else if is_filler(self.key) {
                        // "Mozilla/..." and friends: drop the filler and
                        // start a fresh key instead of entering value mode.
                        self.key.clear();
                    } else {
                        self.slash = true;
                    }
                }
                _ => self.key.push(c),
            }
            i += 1;
        }
        self.flush();
    }

    /// Emit the accumulated key/value as one token and reset all
    /// per-token state. Keys trimming to empty emit nothing, as do
    /// filler tokens.
    fn flush(&mut self) {
        if !self.key.is_empty() {
            let key = String::from_utf8_lossy(self.key);
            let key = key.trim();
            if !key.is_empty() && !is_filler(key.as_bytes()) {
                let key = if self.is_url {
                    key.strip_prefix('+').unwrap_or(key)
                } else {
                    key
                };
                if self.val.is_empty() {
                    let (key, value) = split_versioned_key(key);
                    self.tokens.add(key.to_string(), value.to_string());
                } else {
                    let val = String::from_utf8_lossy(self.val);
                    self.tokens
                        .add(key.to_string(), val.trim().to_string());
                }
            }
        }
        self.key.clear();
        self.val.clear();
        self.slash = false;
        self.is_url = false;
    }
}

fn is_filler(key: &[u8]) -> bool {
    FILLER.iter().any(|f| f.as_bytes() == key)
}

/// For keys whose prefix is a known OS-version-bearing label, split the
/// trailing whitespace-delimited suffix off as the value. The ChromeOS
/// variants additionally strip the architecture token, keeping the trailing
/// version: "CrOS x86_64 14541.0.0" → ("CrOS", "14541.0.0").
fn split_versioned_key(key: &str) -> (&str, &str) {
    let Some(i) = key.rfind(' ') else {
        return (key, "");
    };
    let (head, tail) = (&key[..i], &key[i + 1..]);
    if VERSIONED_KEYS.contains(&head) {
        return (head, tail);
    }
    if CROS_ARCH_KEYS.contains(&head) {
        if let Some(j) = head.rfind(' ') {
            return (&head[..j], tail);
        }
    }
    (key, "")
}
