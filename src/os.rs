use crate::names;
use crate::parser::Patterns;
use crate::tokens::TokenList;
use crate::types::UserAgent;

/// One OS rule: returns true when it fired, in which case no further rule
/// runs. Rules may consume tokens (device extraction).
type OsRule = fn(&mut TokenList, &mut UserAgent, &Patterns) -> bool;

/// Ordered, mutually exclusive OS rules. First match wins; when none fires
/// the OS fields stay empty, which is not an error.
const OS_RULES: &[OsRule] = &[
    android, iphone, ipad, windows_nt, windows_phone, macintosh, linux, freebsd, chrome_os,
    blackberry,
];

pub(crate) fn classify_os(tokens: &mut TokenList, ua: &mut UserAgent, patterns: &Patterns) {
    for rule in OS_RULES {
        if rule(tokens, ua, patterns) {
            return;
        }
    }
}

fn android(tokens: &mut TokenList, ua: &mut UserAgent, _patterns: &Patterns) -> bool {
    let Some((index, version)) = tokens.get_with_index(names::ANDROID) else {
        return false;
    };
    ua.os = names::ANDROID.to_string();
    ua.os_version = version.to_string();
    ua.tablet = ua.raw.to_lowercase().contains("tablet");
    ua.device = tokens.find_device_name(index);
    true
}

fn iphone(tokens: &mut TokenList, ua: &mut UserAgent, patterns: &Patterns) -> bool {
    if !tokens.exists("iPhone") {
        return false;
    }
    ua.os = names::IOS.to_string();
    ua.os_version = tokens.find_version_where(&patterns.version_run, |k| k.contains("OS"));
    ua.device = "iPhone".to_string();
    ua.mobile = true;
    true
}

fn ipad(tokens: &mut TokenList, ua: &mut UserAgent, patterns: &Patterns) -> bool {
    if !tokens.exists("iPad") {
        return false;
    }
    ua.os = names::IOS.to_string();
    ua.os_version = tokens.find_version_where(&patterns.version_run, |k| k.contains("OS"));
    ua.device = "iPad".to_string();
    ua.tablet = true;
    true
}

fn windows_nt(tokens: &mut TokenList, ua: &mut UserAgent, _patterns: &Patterns) -> bool {
    if !tokens.exists("Windows NT") {
        return false;
    }
    ua.os = names::WINDOWS.to_string();
    ua.os_version = tokens.get("Windows NT").to_string();
    ua.desktop = true;
    true
}

fn windows_phone(tokens: &mut TokenList, ua: &mut UserAgent, _patterns: &Patterns) -> bool {
    if !tokens.exists("Windows Phone OS") {
        return false;
    }
    ua.os = names::WINDOWS_PHONE.to_string();
    ua.os_version = tokens.get("Windows Phone OS").to_string();
    ua.mobile = true;
    true
}

fn macintosh(tokens: &mut TokenList, ua: &mut UserAgent, patterns: &Patterns) -> bool {
    if !tokens.exists("Macintosh") {
        return false;
    }
    ua.os = names::MACOS.to_string();
    ua.os_version = tokens.find_version_where(&patterns.version_run, |k| k.contains("OS"));
    ua.desktop = true;
    true
}

fn linux(tokens: &mut TokenList, ua: &mut UserAgent, _patterns: &Patterns) -> bool {
    if !tokens.exists(names::LINUX) {
        return false;
    }
    ua.os = names::LINUX.to_string();
    ua.os_version = tokens.get(names::LINUX).to_string();
    ua.desktop = true;
    true
}

fn freebsd(tokens: &mut TokenList, ua: &mut UserAgent, _patterns: &Patterns) -> bool {
    if !tokens.exists(names::FREEBSD) {
        return false;
    }
    ua.os = names::FREEBSD.to_string();
    ua.os_version = tokens.get(names::FREEBSD).to_string();
    ua.desktop = true;
    true
}

fn chrome_os(tokens: &mut TokenList, ua: &mut UserAgent, _patterns: &Patterns) -> bool {
    if !tokens.exists("CrOS") {
        return false;
    }
    ua.os = names::CHROME_OS.to_string();
    ua.os_version = tokens.get("CrOS").to_string();
    ua.desktop = true;
    true
}

fn blackberry(tokens: &mut TokenList, ua: &mut UserAgent, _patterns: &Patterns) -> bool {
    if !tokens.exists(names::BLACKBERRY) {
        return false;
    }
    ua.os = names::BLACKBERRY.to_string();
    ua.os_version = tokens.get(names::BLACKBERRY).to_string();
    ua.mobile = true;
    true
}
