use serde::Deserialize;
use useragent::{parse, Parser, UserAgent};

/// One expected classification. Omitted fields assert their empty/false
/// defaults; the numeric version fields are only asserted when present.
#[derive(Debug, Deserialize)]
struct Fixture {
    user_agent: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    version: String,
    #[serde(default)]
    os: String,
    #[serde(default)]
    os_version: String,
    #[serde(default)]
    device: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    mobile: bool,
    #[serde(default)]
    tablet: bool,
    #[serde(default)]
    desktop: bool,
    #[serde(default)]
    bot: bool,
    #[serde(default)]
    version_no: Option<Vec<u32>>,
    #[serde(default)]
    os_version_no: Option<Vec<u32>>,
}

fn load_fixtures() -> Vec<Fixture> {
    let content = include_str!("agents.yml");
    serde_yaml::from_str(content).expect("agents.yml parses")
}

fn assert_fixture(f: &Fixture, ua: &UserAgent) {
    let raw = &f.user_agent;
    assert_eq!(ua.raw, *raw, "raw mismatch for {raw:?}");
    assert_eq!(ua.name, f.name, "name mismatch for {raw:?}");
    assert_eq!(ua.version, f.version, "version mismatch for {raw:?}");
    assert_eq!(ua.os, f.os, "os mismatch for {raw:?}");
    assert_eq!(ua.os_version, f.os_version, "os_version mismatch for {raw:?}");
    assert_eq!(ua.device, f.device, "device mismatch for {raw:?}");
    assert_eq!(ua.url, f.url, "url mismatch for {raw:?}");
    assert_eq!(ua.mobile, f.mobile, "mobile mismatch for {raw:?}");
    assert_eq!(ua.tablet, f.tablet, "tablet mismatch for {raw:?}");
    assert_eq!(ua.desktop, f.desktop, "desktop mismatch for {raw:?}");
    assert_eq!(ua.bot, f.bot, "bot mismatch for {raw:?}");
    if let Some(expected) = &f.version_no {
        assert_eq!(
            ua.version_no.components(),
            expected.as_slice(),
            "version_no mismatch for {raw:?}"
        );
    }
    if let Some(expected) = &f.os_version_no {
        assert_eq!(
            ua.os_version_no.components(),
            expected.as_slice(),
            "os_version_no mismatch for {raw:?}"
        );
    }
}

#[test]
fn fixtures_classify_as_expected() {
    for f in &load_fixtures() {
        let ua = parse(&f.user_agent);
        assert_fixture(f, &ua);
    }
}

#[test]
fn dedicated_parser_matches_shared_parser() {
    let parser = Parser::new().unwrap();
    for f in &load_fixtures() {
        assert_eq!(parser.parse(&f.user_agent), parse(&f.user_agent));
    }
}

/// Tablet never coexists with mobile in the final record.
#[test]
fn tablet_and_mobile_are_mutually_exclusive() {
    for f in &load_fixtures() {
        let ua = parse(&f.user_agent);
        assert!(
            !(ua.tablet && ua.mobile),
            "tablet and mobile both set for {:?}",
            f.user_agent
        );
    }
}

/// Same input parsed twice on one thread (through the reused scratch
/// buffers) yields identical results.
#[test]
fn parsing_is_idempotent() {
    for f in &load_fixtures() {
        assert_eq!(parse(&f.user_agent), parse(&f.user_agent));
    }
}

/// The shared parser is safe to hit from many threads at once, with no
/// cross-call leakage through pooled buffers.
#[test]
fn concurrent_calls_are_independent() {
    let fixtures: Vec<String> = load_fixtures().iter().map(|f| f.user_agent.clone()).collect();
    let baseline: Vec<UserAgent> = fixtures.iter().map(|s| parse(s)).collect();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let fixtures = fixtures.clone();
            let baseline = baseline.clone();
            std::thread::spawn(move || {
                for _ in 0..50 {
                    for (input, expected) in fixtures.iter().zip(&baseline) {
                        assert_eq!(&parse(input), expected);
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn predicate_helpers_reflect_classification() {
    let ua = parse(
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
         (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
    );
    assert!(ua.is_windows());
    assert!(ua.is_chrome());
    assert!(!ua.is_safari());

    let ua = parse("Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)");
    assert!(ua.is_googlebot());
    assert!(ua.bot);
}

#[test]
fn version_ordering_uses_numeric_components() {
    let old = parse("Mozilla/5.0 (Windows NT 10.0) AppleWebKit/537.36 Chrome/9.0.597.0 Safari/537.36");
    let new = parse("Mozilla/5.0 (Windows NT 10.0) AppleWebKit/537.36 Chrome/91.0.4472.124 Safari/537.36");
    assert!(old.version_no < new.version_no);
}
