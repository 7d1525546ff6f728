use serde::{Deserialize, Serialize};

use crate::names;
use crate::version::VersionNo;

/// Everything derived from one User-Agent string. String fields hold the
/// empty string when the corresponding fact could not be determined; the
/// record is fully owned by the caller and shares nothing with the parser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAgent {
    /// Browser, bot or application name; falls back to the raw input when
    /// nothing at all matched.
    pub name: String,
    pub version: String,
    pub os: String,
    pub os_version: String,
    /// Device label ("iPhone", "SM-G960F", …) when one could be extracted.
    pub device: String,
    /// Embedded URL literal, if the input carried one (bot self-links).
    pub url: String,
    /// The raw input string, verbatim.
    pub raw: String,
    pub mobile: bool,
    pub tablet: bool,
    pub desktop: bool,
    pub bot: bool,
    /// Numeric decomposition of `version`.
    pub version_no: VersionNo,
    /// Numeric decomposition of `os_version`.
    pub os_version_no: VersionNo,
}

impl UserAgent {
    pub fn is_windows(&self) -> bool {
        self.os == names::WINDOWS
    }

    pub fn is_android(&self) -> bool {
        self.os == names::ANDROID
    }

    pub fn is_macos(&self) -> bool {
        self.os == names::MACOS
    }

    pub fn is_ios(&self) -> bool {
        self.os == names::IOS
    }

    pub fn is_linux(&self) -> bool {
        self.os == names::LINUX
    }

    pub fn is_chrome(&self) -> bool {
        self.name == names::CHROME
    }

    pub fn is_firefox(&self) -> bool {
        self.name == names::FIREFOX
    }

    pub fn is_safari(&self) -> bool {
        self.name == names::SAFARI
    }

    pub fn is_edge(&self) -> bool {
        self.name == names::EDGE
    }

    pub fn is_opera(&self) -> bool {
        self.name == names::OPERA
    }

    pub fn is_internet_explorer(&self) -> bool {
        self.name == names::INTERNET_EXPLORER
    }

    pub fn is_googlebot(&self) -> bool {
        self.name == names::GOOGLEBOT
    }

    pub fn is_twitterbot(&self) -> bool {
        self.name == names::TWITTERBOT
    }

    pub fn is_facebookbot(&self) -> bool {
        self.name == names::FACEBOOK_EXTERNAL_HIT
    }
}
