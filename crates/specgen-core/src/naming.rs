//! Pure text transformations used for file names and for the identifiers
//! that appear inside the illustrative code blocks.

use regex::Regex;
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Slugs
// ---------------------------------------------------------------------------

static SEPARATOR_RE: OnceLock<Regex> = OnceLock::new();

fn separator_re() -> &'static Regex {
    SEPARATOR_RE.get_or_init(|| Regex::new(r"[^a-z0-9]+").unwrap())
}

/// Derive the file/URL slug from a title.
///
/// Lower-cases the title, spells out `&` as `and` and collapses every other
/// run of characters outside `[a-z0-9]` into one hyphen:
/// `"Mail & Courier Tracking System"` becomes
/// `"mail-and-courier-tracking-system"`.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase().replace('&', "and");
    separator_re()
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

// ---------------------------------------------------------------------------
// Identifier casing
// ---------------------------------------------------------------------------

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn split_words(s: &str) -> impl Iterator<Item = &str> {
    s.split(['-', '_', ' ']).filter(|w| !w.is_empty())
}

/// `student-dashboard-and-overview` → `StudentDashboardAndOverview`
pub fn pascal_case(s: &str) -> String {
    split_words(s).map(capitalize).collect()
}

/// `student-dashboard-and-overview` → `studentDashboardAndOverview`
pub fn camel_case(s: &str) -> String {
    let pascal = pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `student-dashboard-and-overview` → `student_dashboard_and_overview`
pub fn snake_case(s: &str) -> String {
    split_words(s)
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

/// `github_workflows` → `Github Workflows`
pub fn title_case(s: &str) -> String {
    split_words(s).map(capitalize).collect::<Vec<_>>().join(" ")
}

// ---------------------------------------------------------------------------
// Groups
// ---------------------------------------------------------------------------

/// Display name for a group key when the catalog does not set one.
///
/// Drops the leading ordering prefix and title-cases the rest:
/// `01-LAB-STAFF-PORTAL` → `Lab Staff Portal`.
pub fn group_display_name(key: &str) -> String {
    let trimmed = key.trim_start_matches(|c: char| c.is_ascii_digit());
    let trimmed = if trimmed.len() < key.len() {
        trimmed.trim_start_matches(['-', '_', ' '])
    } else {
        key
    };
    title_case(trimmed)
}

/// Short label for a dashboard record used in dependency anchors:
/// `Student Dashboard & Overview` → `Student Dashboard`.
pub fn dashboard_label(title: &str) -> &str {
    title.split(" & ").next().unwrap_or(title).trim()
}
