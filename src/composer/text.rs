//! Labels, help text and markup for the settings page

use crate::config::ModuleConfig;

pub const WILDCARD_CLEANING: &str = "Wildcard Cleaning";
pub const WILDCARD_CLEANING_DESCRIPTION: &str = "When set to 'Full Clean', each wildcard in a destination path will be automatically cleaned, or 'slugged', so that it is lower-case, and uses hyphens as word separators.";
pub const FULL_CLEAN: &str = "Full Clean (default, recommended)";
pub const SEMI_CLEAN: &str = "Clean, but don't change case";
pub const NO_CLEAN: &str = "Don't clean at all (not recommended)";

pub const ENHANCED_CLEANING: &str = "Enhanced Wildcard Cleaning";
pub const ENHANCED_CLEANING_DESCRIPTION: &str = "When enabled, wildcard cleaning goes a step further by means of breaking and hyphenating TitleCase wildcards, as well as those that contain abbreviations (ex: NASALaunch). Examples below.";
pub const ENHANCED_CLEANING_LABEL2: &str = "Use Enhanced Wildcard Cleaning";
pub const ENHANCED_CLEANING_NOTES: &str = "**Examples:** 'EnvironmentStudy' would become 'environment-study' and 'NASALaunch' would become 'nasa-launch'.\n**Note:** This feature only works when Wildcard Cleaning is enabled.";

pub const LEGACY_DOMAIN: &str = "Legacy Domain";
pub const LEGACY_DOMAIN_FIELD_DESCRIPTION: &str =
    "Attempt any requested, unresolved Source paths on a legacy domain/URL.";
pub const LEGACY_DOMAIN_NOTES: &str =
    "Enter a *full*, valid domain/URL. **Source Path won't be cleaned upon redirect**.";
pub const LEGACY_DOMAIN_PLACEHOLDER: &str =
    "Examples: \"http://legacy.domain.com/\" or \"http://domain.com/old/\"";

pub const STATUS_CODES_DESCRIPTION: &str =
    "Only redirect if a request to it yields one of these HTTP status codes:";
/// Anchor the page script intercepts to restore the default codes
pub const RESET_STATUS_CODES_ANCHOR: &str = "#resetLegacyStatusCodes";

pub const MONITOR_404: &str = "404 Monitor";
pub const MONITOR_404_DESCRIPTION: &str = "If you'd like to monitor and log 404 hits so that you can later create jumplinks for them, check the box below.";
pub const MONITOR_404_LABEL2: &str = "Log 404 hits to the database";
pub const MONITOR_404_NOTES: &str = "This log will be displayed on the Jumplinks setup page in a separate tab (limited to the last 100).\n**Note:** Turning this off will not delete any existing records from the database.";

pub const INDEX_PHP: &str = "Disable index.php matching";
pub const INDEX_PHP_DESCRIPTION: &str = "Jumplinks supports the matching and redirecting `/index.php/oldpage` requests. When requests like these are made, Jumplinks automatically redirects them to `/index.php.pwpj/oldpage` - this is part of the 'magic sauce' that allows Jumplinks to handle these requests. However, the feature isn't very helpful when you don't need it, as those automatic redirects remain when jumplinks have not been defined for them.\n\nIf you don't need this feature, then you can safely disable it entirely by checking the box below:";
pub const INDEX_PHP_LABEL2: &str = "Don't match these requests";
pub const INDEX_PHP_NOTES: &str =
    "Note that any registered jumplinks that start with `index.php/` will not be matched.";

pub const INFO_SUPPORT: &str = "Info & Support";

pub const DEBUG_MODE: &str = "Debug Mode";
pub const DEBUG_MODE_DESCRIPTION: &str = "If you run into any problems with your jumplinks, you can turn on debug mode. Once turned on, you'll be shown a scan log when a 404 Page Not Found is hit. That will give you an indication of what may be going wrong. If it doesn't, and you can't figure it out, then paste your log into the support thread on the forums.";
pub const DEBUG_MODE_LABEL2: &str = "Turn debug mode on";
pub const DEBUG_MODE_NOTES: &str = "**Notes:** Hits won't be affected when debug mode is turned on. Also, only those that have permission to manage jumplinks will be shown the debug logs.";

pub const DOCS_SUPPORT: &str = "Documentation & Support";
pub const MODULE_RECOMMENDATIONS: &str = "Module Recommendations";
pub const SUPPORT_DEVELOPMENT: &str = "Support Jumplinks Development";

/// Companion modules recommended alongside Jumplinks
pub const RECOMMENDED_MODULES: [(&str, &str); 6] = [
    ("All In One Minify (AIOM+)", "http://mods.pw/5q"),
    ("Page Path History (core)", "http://mods.pw/2J"),
    ("XML Sitemap", "http://mods.pw/1V"),
    ("Markup SEO", "http://mods.pw/8D"),
    ("ProFields: AutoLinks", "http://mods.pw/6d"),
    ("ProFields: ProCache", "http://mods.pw/58"),
];

pub fn wildcard_cleaning_notes(config: &ModuleConfig) -> String {
    format!(
        "**Note:** It's recommended that you keep this set to 'Full Clean', unless you have a module installed that uses different path formats (such as TitleCase with underscores or hyphens). **[Learn more about Wildcard Cleaning]({})**",
        config.docs_section("wildcard-cleaning")
    )
}

pub fn legacy_domain_description(config: &ModuleConfig) -> String {
    format!(
        "Only use this if you are performing a slow migration to ProcessWire, and would still like your visitors to access old content moved to a new location, like a subdomain or folder, for example. [Learn more about how this feature works]({}).",
        config.docs_section("legacy-domain")
    )
}

pub fn status_codes_notes() -> String {
    format!("Separate each code with a space. **[Use Default]({RESET_STATUS_CODES_ANCHOR})**")
}

fn link(href: &str, text: &str) -> String {
    format!("<a target=\"_blank\" href=\"{href}\">{text}</a>")
}

pub fn docs_support_markup(config: &ModuleConfig) -> String {
    format!(
        "<p>Be sure to read the documentation, as it contains all the information you need to get started with Jumplinks. If you're having problems and unable to determine the cause(s) thereof, feel free to ask for help in the official support thread.</p>\
         <div id=\"pjInputFieldLinks\">{}{}</div>",
        link(&config.docs_href, "Read the Documentation"),
        link(&config.support_href, "Official Support Thread"),
    )
}

pub fn module_recommendations_markup() -> String {
    let links: String = RECOMMENDED_MODULES
        .iter()
        .map(|(name, href)| link(href, name))
        .collect();
    format!(
        "<p>Jumplinks complements your SEO-toolkit, which should comprise of the following modules as well:</p>\
         <div id=\"pjInputFieldLinks\">{links}</div>"
    )
}

pub fn support_development_markup(config: &ModuleConfig) -> String {
    format!(
        "<p><a href=\"{donate}\"><img src=\"{assets}/DonateButton.png\" alt=\"PayPal\" style=\"float:right;margin-left: 22px;\"></a>\
         Jumplinks is an open-source project, and is free to use. In fact, Jumplinks will always be open-source, and will always remain free to use. Forever. If you would like to support the development of Jumplinks, please make a small donation via PayPal using the button to the right.</p>\
         <div id=\"pjInputFieldLinks\"><span class=\"prefix\">Learn more about:</span>{}{}</div>",
        link("http://opensource.com/resources/what-open-source", "Open Source Software"),
        link("https://en.wikipedia.org/wiki/Free_software", "Free Software"),
        donate = config.donate_href,
        assets = config.assets_url,
    )
}
