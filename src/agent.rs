use crate::names;
use crate::parser::Patterns;
use crate::tokens::TokenList;
use crate::types::UserAgent;

/// One browser/bot rule: returns true when it fired. Evaluated after OS
/// classification, so rules may read (and in one case clear) the OS fields.
type AgentRule = fn(&mut TokenList, &mut UserAgent, &Patterns) -> bool;

/// Strict priority order; first match wins. The only intentional
/// fallthrough is `branded_chromium` delegating to `chrome` when its
/// generic search comes up empty.
const AGENT_RULES: &[AgentRule] = &[
    googlebot,
    google_prober,
    applebot,
    opera_mini,
    opera,
    opera_touch,
    opera_ios,
    chrome_ios,
    firefox_ios,
    firefox,
    vivaldi,
    internet_explorer,
    edge_ios,
    edge,
    edge_chromium,
    edge_android,
    bingbot,
    yandexbot,
    samsung_browser,
    headless_chrome,
    google_ads_bot,
    yahoo_ad_monitoring,
    miui_browser,
    facebook_app,
    facebook_in_app,
    instagram_app,
    tiktok_webview,
    huawei_browser,
    blackberry,
    netfront,
    branded_chromium,
    chrome,
    brave_chrome,
    safari,
];

pub(crate) fn classify_agent(tokens: &mut TokenList, ua: &mut UserAgent, patterns: &Patterns) {
    for rule in AGENT_RULES {
        if rule(tokens, ua, patterns) {
            return;
        }
    }
    fallback(tokens, ua);
}

fn mobile_token_present(tokens: &TokenList) -> bool {
    tokens.exists_any(&["Mobile", "Mobile Safari"])
}

fn googlebot(tokens: &mut TokenList, ua: &mut UserAgent, _patterns: &Patterns) -> bool {
    if !tokens.exists(names::GOOGLEBOT) {
        return false;
    }
    ua.name = names::GOOGLEBOT.to_string();
    ua.version = tokens.get(names::GOOGLEBOT).to_string();
    ua.bot = true;
    ua.mobile = mobile_token_present(tokens);
    true
}

fn google_prober(tokens: &mut TokenList, ua: &mut UserAgent, _patterns: &Patterns) -> bool {
    if !tokens.exists_any(&["GoogleProber", "GoogleProducer"]) {
        return false;
    }
    if let Some(name) = tokens.find_best_match(false) {
        ua.name = name.to_string();
    }
    ua.bot = true;
    true
}

/// The one rule allowed to clear an OS assignment: Applebot runs on Apple
/// infrastructure, not on the OS its user-agent imitates.
fn applebot(tokens: &mut TokenList, ua: &mut UserAgent, _patterns: &Patterns) -> bool {
    if !tokens.exists(names::APPLEBOT) {
        return false;
    }
    ua.name = names::APPLEBOT.to_string();
    ua.version = tokens.get(names::APPLEBOT).to_string();
    ua.bot = true;
    ua.mobile = mobile_token_present(tokens);
    ua.os = String::new();
    true
}

fn opera_mini(tokens: &mut TokenList, ua: &mut UserAgent, _patterns: &Patterns) -> bool {
    let version = tokens.get(names::OPERA_MINI);
    if version.is_empty() {
        return false;
    }
    ua.name = names::OPERA_MINI.to_string();
    ua.version = version.to_string();
    ua.mobile = true;
    true
}

fn opera(tokens: &mut TokenList, ua: &mut UserAgent, _patterns: &Patterns) -> bool {
    versioned_browser(tokens, ua, "OPR", names::OPERA)
}

fn opera_touch(tokens: &mut TokenList, ua: &mut UserAgent, _patterns: &Patterns) -> bool {
    versioned_browser(tokens, ua, "OPT", names::OPERA_TOUCH)
}

fn opera_ios(tokens: &mut TokenList, ua: &mut UserAgent, _patterns: &Patterns) -> bool {
    versioned_browser(tokens, ua, "OPiOS", names::OPERA)
}

fn chrome_ios(tokens: &mut TokenList, ua: &mut UserAgent, _patterns: &Patterns) -> bool {
    versioned_browser(tokens, ua, "CriOS", names::CHROME)
}

fn firefox_ios(tokens: &mut TokenList, ua: &mut UserAgent, _patterns: &Patterns) -> bool {
    versioned_browser(tokens, ua, "FxiOS", names::FIREFOX)
}

fn firefox(tokens: &mut TokenList, ua: &mut UserAgent, _patterns: &Patterns) -> bool {
    let version = tokens.get(names::FIREFOX);
    if version.is_empty() {
        return false;
    }
    ua.name = names::FIREFOX.to_string();
    ua.version = version.to_string();
    ua.mobile = tokens.exists("Mobile");
    ua.tablet = tokens.exists("Tablet");
    true
}

fn vivaldi(tokens: &mut TokenList, ua: &mut UserAgent, _patterns: &Patterns) -> bool {
    let version = tokens.get(names::VIVALDI);
    if version.is_empty() {
        return false;
    }
    ua.name = names::VIVALDI.to_string();
    ua.version = version.to_string();
    true
}

fn internet_explorer(tokens: &mut TokenList, ua: &mut UserAgent, _patterns: &Patterns) -> bool {
    if !tokens.exists("MSIE") {
        return false;
    }
    ua.name = names::INTERNET_EXPLORER.to_string();
    ua.version = tokens.get("MSIE").to_string();
    true
}

fn edge_ios(tokens: &mut TokenList, ua: &mut UserAgent, _patterns: &Patterns) -> bool {
    versioned_browser(tokens, ua, "EdgiOS", names::EDGE)
}

fn edge(tokens: &mut TokenList, ua: &mut UserAgent, _patterns: &Patterns) -> bool {
    versioned_browser(tokens, ua, "Edge", names::EDGE)
}

fn edge_chromium(tokens: &mut TokenList, ua: &mut UserAgent, _patterns: &Patterns) -> bool {
    versioned_browser(tokens, ua, "Edg", names::EDGE)
}

fn edge_android(tokens: &mut TokenList, ua: &mut UserAgent, _patterns: &Patterns) -> bool {
    versioned_browser(tokens, ua, "EdgA", names::EDGE)
}

fn bingbot(tokens: &mut TokenList, ua: &mut UserAgent, _patterns: &Patterns) -> bool {
    let version = tokens.get("bingbot");
    if version.is_empty() {
        return false;
    }
    ua.name = names::BINGBOT.to_string();
    ua.version = version.to_string();
    ua.bot = true;
    ua.mobile = mobile_token_present(tokens);
    true
}

fn yandexbot(tokens: &mut TokenList, ua: &mut UserAgent, _patterns: &Patterns) -> bool {
    let version = tokens.get("YandexBot");
    if version.is_empty() {
        return false;
    }
    ua.name = "YandexBot".to_string();
    ua.version = version.to_string();
    ua.bot = true;
    ua.mobile = mobile_token_present(tokens);
    true
}

fn samsung_browser(tokens: &mut TokenList, ua: &mut UserAgent, _patterns: &Patterns) -> bool {
    versioned_browser(tokens, ua, "SamsungBrowser", "Samsung Browser")
}

fn headless_chrome(tokens: &mut TokenList, ua: &mut UserAgent, _patterns: &Patterns) -> bool {
    let version = tokens.get("HeadlessChrome");
    if version.is_empty() {
        return false;
    }
    ua.name = names::HEADLESS_CHROME.to_string();
    ua.version = version.to_string();
    ua.mobile = mobile_token_present(tokens);
    ua.bot = true;
    true
}

fn google_ads_bot(tokens: &mut TokenList, ua: &mut UserAgent, _patterns: &Patterns) -> bool {
    if !tokens.exists_any(&["AdsBot-Google-Mobile", "Mediapartners-Google", "AdsBot-Google"]) {
        return false;
    }
    ua.name = names::GOOGLE_ADS_BOT.to_string();
    ua.bot = true;
    ua.mobile = ua.is_android() || ua.is_ios();
    true
}

fn yahoo_ad_monitoring(tokens: &mut TokenList, ua: &mut UserAgent, _patterns: &Patterns) -> bool {
    if !tokens.exists("Yahoo Ad monitoring") {
        return false;
    }
    ua.name = "Yahoo Ad monitoring".to_string();
    ua.bot = true;
    ua.mobile = ua.is_android() || ua.is_ios();
    true
}

/// Fires on any XiaoMi token; only a MiuiBrowser-tagged value yields a
/// name, but the branch is consumed either way.
fn miui_browser(tokens: &mut TokenList, ua: &mut UserAgent, _patterns: &Patterns) -> bool {
    if !tokens.exists("XiaoMi") {
        return false;
    }
    let miui = tokens.get("XiaoMi");
    if let Some(version) = miui.strip_prefix("MiuiBrowser/") {
        ua.version = version.to_string();
        ua.name = "Miui Browser".to_string();
        ua.mobile = true;
    }
    true
}

fn facebook_app(tokens: &mut TokenList, ua: &mut UserAgent, _patterns: &Patterns) -> bool {
    if !tokens.exists("FBAN") {
        return false;
    }
    ua.name = names::FACEBOOK_APP.to_string();
    ua.version = tokens.get("FBAN").to_string();
    true
}

/// Facebook's in-app browser carries its version under a different key
/// (FBAV) than the one matched on (FB_IAB).
fn facebook_in_app(tokens: &mut TokenList, ua: &mut UserAgent, _patterns: &Patterns) -> bool {
    if !tokens.exists("FB_IAB") {
        return false;
    }
    ua.name = names::FACEBOOK_APP.to_string();
    ua.version = tokens.get("FBAV").to_string();
    true
}

fn instagram_app(tokens: &mut TokenList, ua: &mut UserAgent, patterns: &Patterns) -> bool {
    if !tokens.starts_with("Instagram") {
        return false;
    }
    ua.name = names::INSTAGRAM_APP.to_string();
    ua.version = tokens.find_version_where(&patterns.version_run, |k| k.starts_with("Instagram"));
    true
}

fn tiktok_webview(tokens: &mut TokenList, ua: &mut UserAgent, _patterns: &Patterns) -> bool {
    if !tokens.exists("BytedanceWebview") {
        return false;
    }
    ua.name = names::TIKTOK_APP.to_string();
    ua.version = tokens.get("app_version").to_string();
    true
}

fn huawei_browser(tokens: &mut TokenList, ua: &mut UserAgent, _patterns: &Patterns) -> bool {
    versioned_browser(tokens, ua, "HuaweiBrowser", "Huawei Browser")
}

fn blackberry(tokens: &mut TokenList, ua: &mut UserAgent, _patterns: &Patterns) -> bool {
    if !tokens.exists(names::BLACKBERRY) {
        return false;
    }
    ua.name = names::BLACKBERRY.to_string();
    ua.version = tokens.get("Version").to_string();
    true
}

fn netfront(tokens: &mut TokenList, ua: &mut UserAgent, _patterns: &Patterns) -> bool {
    if !tokens.exists("NetFront") {
        return false;
    }
    ua.name = "NetFront".to_string();
    ua.version = tokens.get("NetFront").to_string();
    ua.mobile = true;
    true
}

/// Chromium derivatives inject their own brand token alongside Chrome and
/// Safari compatibility tokens; when both are present, prefer that brand.
/// If no branded token is found this falls through to the generic Chrome
/// rule — the single intentional fallthrough in the chain.
fn branded_chromium(tokens: &mut TokenList, ua: &mut UserAgent, patterns: &Patterns) -> bool {
    if !(tokens.exists(names::CHROME) && tokens.exists(names::SAFARI)) {
        return false;
    }
    if let Some(name) = tokens.find_best_match(true) {
        let version = tokens.get(name).to_string();
        ua.name = name.to_string();
        ua.version = version;
        return true;
    }
    chrome(tokens, ua, patterns)
}

fn chrome(tokens: &mut TokenList, ua: &mut UserAgent, _patterns: &Patterns) -> bool {
    if !tokens.exists(names::CHROME) {
        return false;
    }
    ua.name = names::CHROME.to_string();
    ua.version = tokens.get(names::CHROME).to_string();
    ua.mobile = mobile_token_present(tokens);
    true
}

fn brave_chrome(tokens: &mut TokenList, ua: &mut UserAgent, _patterns: &Patterns) -> bool {
    if !tokens.exists("Brave Chrome") {
        return false;
    }
    ua.name = names::CHROME.to_string();
    ua.version = tokens.get("Brave Chrome").to_string();
    ua.mobile = mobile_token_present(tokens);
    true
}

fn safari(tokens: &mut TokenList, ua: &mut UserAgent, _patterns: &Patterns) -> bool {
    if !tokens.exists(names::SAFARI) {
        return false;
    }
    ua.name = names::SAFARI.to_string();
    let version = tokens.get("Version");
    ua.version = if version.is_empty() {
        tokens.get(names::SAFARI).to_string()
    } else {
        version.to_string()
    };
    ua.mobile = mobile_token_present(tokens);
    true
}

/// Default branch: Android's stock browser, then the generic match, then
/// the raw string itself. Only here is bot inferred from the name and
/// mobile inferred without a matching browser rule.
fn fallback(tokens: &mut TokenList, ua: &mut UserAgent) {
    if ua.is_android() && !tokens.get("Version").is_empty() {
        ua.name = "Android browser".to_string();
        ua.version = tokens.get("Version").to_string();
        ua.mobile = true;
        return;
    }
    if let Some(name) = tokens.find_best_match(false) {
        let version = tokens.get(name).to_string();
        ua.name = name.to_string();
        ua.version = version;
    } else {
        ua.name = ua.raw.clone();
    }
    ua.bot = ua.name.to_lowercase().contains("bot");
    if !ua.mobile {
        ua.mobile = mobile_token_present(tokens);
    }
}

/// Shared shape for the vendor-token rules: match on a non-empty value
/// under `token`, report it under the canonical `display` name, and infer
/// mobile from the Mobile/Mobile Safari tokens.
fn versioned_browser(
    tokens: &mut TokenList,
    ua: &mut UserAgent,
    token: &str,
    display: &str,
) -> bool {
    let version = tokens.get(token);
    if version.is_empty() {
        return false;
    }
    ua.version = version.to_string();
    ua.name = display.to_string();
    ua.mobile = mobile_token_present(tokens);
    true
}
