//! Canonical names and fixed vocabularies used by the tokenizer and the
//! rule tables. All of this is compiled-in data; there is no configuration
//! surface.

// Operating systems.
pub const WINDOWS: &str = "Windows";
pub const WINDOWS_PHONE: &str = "Windows Phone";
pub const ANDROID: &str = "Android";
pub const MACOS: &str = "macOS";
pub const IOS: &str = "iOS";
pub const LINUX: &str = "Linux";
pub const FREEBSD: &str = "FreeBSD";
pub const CHROME_OS: &str = "ChromeOS";
pub const BLACKBERRY: &str = "BlackBerry";

// Browsers.
pub const OPERA: &str = "Opera";
pub const OPERA_MINI: &str = "Opera Mini";
pub const OPERA_TOUCH: &str = "Opera Touch";
pub const CHROME: &str = "Chrome";
pub const HEADLESS_CHROME: &str = "Headless Chrome";
pub const FIREFOX: &str = "Firefox";
pub const INTERNET_EXPLORER: &str = "Internet Explorer";
pub const SAFARI: &str = "Safari";
pub const EDGE: &str = "Edge";
pub const VIVALDI: &str = "Vivaldi";

// Bots and crawlers.
pub const GOOGLE_ADS_BOT: &str = "Google Ads Bot";
pub const GOOGLEBOT: &str = "Googlebot";
pub const TWITTERBOT: &str = "Twitterbot";
pub const FACEBOOK_EXTERNAL_HIT: &str = "facebookexternalhit";
pub const APPLEBOT: &str = "Applebot";
pub const BINGBOT: &str = "Bingbot";

// In-app browsers.
pub const FACEBOOK_APP: &str = "Facebook App";
pub const INSTAGRAM_APP: &str = "Instagram App";
pub const TIKTOK_APP: &str = "TikTok App";

/// Tokens carrying no information; the tokenizer discards them outright.
pub(crate) const FILLER: &[&str] = &[
    "KHTML, like Gecko",
    "U",
    "compatible",
    "Mozilla",
    "WOW64",
    "en",
    "en-us",
    "en-gb",
    "ru-ru",
    "Browser",
];

/// Keys whose trailing whitespace-delimited suffix is an OS version; the
/// tokenizer splits these into key + value.
pub(crate) const VERSIONED_KEYS: &[&str] =
    &["Linux", "Windows NT", "Windows Phone OS", "MSIE", "Android"];

/// ChromeOS keys carrying an architecture between the name and the version;
/// the architecture is stripped and the trailing version kept as the value.
pub(crate) const CROS_ARCH_KEYS: &[&str] = &["CrOS x86_64", "CrOS aarch64", "CrOS armv7l"];

/// Structural/engine keys never usable as a last-resort agent name.
pub(crate) const GENERIC_SKIP: &[&str] = &[
    CHROME,
    FIREFOX,
    SAFARI,
    "Version",
    "Mobile",
    "Mobile Safari",
    "Mozilla",
    "AppleWebKit",
    "Windows NT",
    "Windows Phone OS",
    ANDROID,
    "Macintosh",
    LINUX,
    "GSA",
    "CrOS",
    "Tablet",
];

/// Keys that follow an OS token but are never device names.
pub(crate) const DEVICE_SKIP: &[&str] = &[
    CHROME,
    FIREFOX,
    SAFARI,
    OPERA_MINI,
    "Presto",
    "Version",
    "Mobile",
    "Mobile Safari",
    "Mozilla",
    "AppleWebKit",
    "Windows NT",
    "Windows Phone OS",
    ANDROID,
    "Macintosh",
    LINUX,
    "CrOS",
];
