//! Template registry and per-template completeness rules.
//!
//! One concrete template ships today. The rule table is the hook for
//! adding more: each entry names the relations a template's view cannot
//! render without.

/// Relations `template-1` requires before its view renders cleanly.
const TEMPLATE_1_REQUIRES: [&str; 10] = [
    "couple",
    "people",
    "event_section",
    "events",
    "gallery_items",
    "map",
    "rsvp",
    "gift_section",
    "gift_accounts",
    "music",
];

/// View identifiers with a shipped template view.
const KNOWN_VIEWS: [&str; 1] = ["templates.template-1"];

/// Map a template code to its view identifier.
pub fn view_name(code: &str) -> String {
    format!("templates.{code}")
}

/// Whether a view identifier has a shipped template view behind it.
pub fn view_exists(view: &str) -> bool {
    KNOWN_VIEWS.contains(&view)
}

/// The completeness rule set for a template code, if one is registered.
pub fn required_relations(code: &str) -> Option<&'static [&'static str]> {
    match code {
        "template-1" => Some(&TEMPLATE_1_REQUIRES),
        _ => None,
    }
}
