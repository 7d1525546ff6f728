use regex::Regex;

use crate::names::{DEVICE_SKIP, GENERIC_SKIP};

/// One key/value pair extracted from the raw string. An empty `value` means
/// the token carried no version or descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token {
    pub key: String,
    pub value: String,
}

/// Ordered token store for one parse call. Order equals first-seen order in
/// the input; duplicates are allowed and lookups are first-match-wins.
/// Classification may remove or rewrite entries (device extraction).
#[derive(Debug, Default)]
pub(crate) struct TokenList {
    list: Vec<Token>,
}

impl TokenList {
    pub fn with_capacity(cap: usize) -> Self {
        TokenList {
            list: Vec::with_capacity(cap),
        }
    }

    pub fn add(&mut self, key: String, value: String) {
        self.list.push(Token { key, value });
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.list.iter()
    }

    pub fn remove(&mut self, index: usize) -> Token {
        self.list.remove(index)
    }

    /// Value of the first token whose key equals `key`; empty if absent.
    pub fn get(&self, key: &str) -> &str {
        self.list
            .iter()
            .find(|t| t.key == key)
            .map(|t| t.value.as_str())
            .unwrap_or("")
    }

    /// First matching token's position and value, for neighbor lookups.
    pub fn get_with_index(&self, key: &str) -> Option<(usize, &str)> {
        self.list
            .iter()
            .position(|t| t.key == key)
            .map(|i| (i, self.list[i].value.as_str()))
    }

    pub fn exists(&self, key: &str) -> bool {
        self.list.iter().any(|t| t.key == key)
    }

    pub fn exists_any(&self, keys: &[&str]) -> bool {
        keys.iter().any(|k| self.exists(k))
    }

    /// True if any key starts with `prefix` (app-identifier families).
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.list.iter().any(|t| t.key.starts_with(prefix))
    }

    /// Composite version discovery: scan for a token whose key satisfies
    /// `pred` and pull a digits/dots/underscores run out of its value,
    /// falling back to its key. Underscores normalize to dots. Used for
    /// versions buried in composite tokens like "CPU iPhone OS 14_2 like
    /// Mac OS X" or "Instagram 97.0.0.32.91".
    pub fn find_version_where<F>(&self, version_run: &Regex, pred: F) -> String
    where
        F: Fn(&str) -> bool,
    {
        for t in &self.list {
            if !pred(&t.key) {
                continue;
            }
            if let Some(v) = extract_version(version_run, &t.value) {
                return v;
            }
            if let Some(v) = extract_version(version_run, &t.key) {
                return v;
            }
        }
        String::new()
    }

    /// Device name extraction: inspect the token immediately after `start`
    /// (the OS token). Locale-looking keys ("en", "en-us") and known
    /// non-device vocabulary yield nothing. A key containing "tablet" is
    /// rewritten to the canonical "Tablet" marker and kept for form-factor
    /// detection; any other hit is consumed (removed) so the generic match
    /// cannot pick it up again. A trailing "Build" suffix is trimmed.
    pub fn find_device_name(&mut self, start: usize) -> String {
        let next = start + 1;
        if next >= self.list.len() {
            return String::new();
        }
        let dev = self.list[next].key.clone();
        if dev.len() == 2 || (dev.len() == 5 && dev.as_bytes()[2] == b'-') {
            return String::new();
        }
        if DEVICE_SKIP.contains(&dev.as_str()) {
            return String::new();
        }
        let name = dev.strip_suffix("Build").unwrap_or(&dev).trim().to_string();
        if dev.to_lowercase().contains("tablet") {
            self.list[next].key = "Tablet".to_string();
        } else {
            self.list.remove(next);
        }
        name
    }

    /// Last-resort agent name: the first key outside the structural/engine
    /// vocabulary that does not start with a digit. The first pass only
    /// accepts keys carrying a value; when `with_version_only` is false a
    /// second pass accepts any remaining key.
    pub fn find_best_match(&self, with_version_only: bool) -> Option<&str> {
        let passes = if with_version_only { 1 } else { 2 };
        for pass in 0..passes {
            for t in &self.list {
                if GENERIC_SKIP.contains(&t.key.as_str()) {
                    continue;
                }
                if t.key.as_bytes().first().is_some_and(|b| b.is_ascii_digit()) {
                    continue;
                }
                if pass == 0 && t.value.is_empty() {
                    continue;
                }
                return Some(&t.key);
            }
        }
        None
    }
}

/// First digits/dots/underscores run in `s`, with underscores normalized to
/// dots; `None` when `s` carries no such run.
fn extract_version(version_run: &Regex, s: &str) -> Option<String> {
    version_run.find(s).map(|m| m.as_str().replace('_', "."))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn version_run() -> Regex {
        Regex::new(r"[_\d.]+").unwrap()
    }

    fn store(entries: &[(&str, &str)]) -> TokenList {
        let mut t = TokenList::with_capacity(entries.len());
        for (k, v) in entries {
            t.add(k.to_string(), v.to_string());
        }
        t
    }

    #[test]
    fn get_is_first_match_wins() {
        let t = store(&[("Chrome", "1.0"), ("Chrome", "2.0")]);
        assert_eq!(t.get("Chrome"), "1.0");
        assert_eq!(t.get("Missing"), "");
    }

    #[test]
    fn composite_version_from_key_when_value_empty() {
        let t = store(&[("CPU iPhone OS 14_2 like Mac OS X", "")]);
        let v = t.find_version_where(&version_run(), |k| k.contains("OS"));
        assert_eq!(v, "14.2");
    }

    #[test]
    fn composite_version_prefers_value() {
        let t = store(&[("Mac OS X", "10_15_7")]);
        let v = t.find_version_where(&version_run(), |k| k.contains("OS"));
        assert_eq!(v, "10.15.7");
    }

    #[test]
    fn device_name_trims_build_suffix_and_consumes_token() {
        let mut t = store(&[("Android", "10"), ("SM-G960F Build", "R16NW")]);
        assert_eq!(t.find_device_name(0), "SM-G960F");
        assert!(!t.exists("SM-G960F Build"));
        assert!(t.find_best_match(false).is_none());
    }

    #[test]
    fn device_name_skips_locale_tags() {
        let mut t = store(&[("Android", "10"), ("en-us", "")]);
        assert_eq!(t.find_device_name(0), "");
        assert!(t.exists("en-us"));
    }

    #[test]
    fn device_name_skips_engine_vocabulary() {
        let mut t = store(&[("Android", "11"), ("Mobile", "")]);
        assert_eq!(t.find_device_name(0), "");
        assert!(t.exists("Mobile"));
    }

    #[test]
    fn tablet_device_is_rewritten_not_removed() {
        let mut t = store(&[("Android", "4.4.2"), ("MediaPad Tablet", "")]);
        assert_eq!(t.find_device_name(0), "MediaPad Tablet");
        assert!(t.exists("Tablet"));
    }

    #[test]
    fn best_match_first_pass_requires_value() {
        let t = store(&[("Win64", ""), ("YaBrowser", "22.11.0.2500")]);
        assert_eq!(t.find_best_match(true), Some("YaBrowser"));
        // Without a valued candidate the single-pass search yields nothing.
        let t = store(&[("Win64", ""), ("x64", "")]);
        assert_eq!(t.find_best_match(true), None);
        assert_eq!(t.find_best_match(false), Some("Win64"));
    }

    #[test]
    fn best_match_skips_digit_keys_and_vocabulary() {
        let t = store(&[("5.0", ""), ("Chrome", "91.0"), ("curl", "7.64.1")]);
        assert_eq!(t.find_best_match(true), Some("curl"));
    }
}
