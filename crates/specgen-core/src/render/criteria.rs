use crate::record::SpecRecord;

/// Which boilerplate checklist a title falls into when the record carries
/// no feature list. Checked in declaration order; first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    Dashboard,
    Management,
    Tracking,
    Communication,
    General,
}

impl Flavor {
    pub fn for_title(title: &str) -> Self {
        let t = title.to_lowercase();
        if t.contains("dashboard") {
            Flavor::Dashboard
        } else if t.contains("management") {
            Flavor::Management
        } else if t.contains("tracking") || t.contains("monitoring") {
            Flavor::Tracking
        } else if t.contains("communication") || t.contains("hub") {
            Flavor::Communication
        } else {
            Flavor::General
        }
    }

    pub fn lines(self) -> &'static [&'static str] {
        match self {
            Flavor::Dashboard => &[
                "Dashboard displays all key metrics accurately",
                "Real-time data updates working",
                "All widgets functional and customizable",
                "Quick actions work correctly",
                "Navigation to detailed views functional",
                "Performance metrics load efficiently",
            ],
            Flavor::Management => &[
                "All CRUD operations functional",
                "Data validation working correctly",
                "Search and filtering operational",
                "Workflows and approvals functional",
                "Notifications sending properly",
                "Reports generating accurately",
            ],
            Flavor::Tracking => &[
                "Real-time tracking operational",
                "Status updates reflecting correctly",
                "History and audit trail complete",
                "Alerts and notifications working",
                "Reports and analytics functional",
                "Data integrity maintained",
            ],
            Flavor::Communication => &[
                "Messaging system functional",
                "Notifications working properly",
                "Document sharing operational",
                "Search functionality working",
                "Communication history maintained",
                "User interface intuitive",
            ],
            Flavor::General => &[
                "Core functionality operational",
                "All CRUD operations working",
                "Search and filter functional",
                "Real-time updates operational",
                "Data validation working",
                "Export functionality working",
                "Mobile responsive design",
                "Performance optimized (<2s load time)",
                "Security implemented (RLS policies)",
                "All tests passing (85%+ coverage)",
            ],
        }
    }
}

fn checklist<'a>(lines: impl Iterator<Item = &'a str>, suffix: &str) -> String {
    lines
        .map(|l| format!("- [ ] {l}{suffix}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Checklist built from the record's features (each followed by `suffix`),
/// or the keyword checklist for its title when it has none.
pub fn success_criteria(record: &SpecRecord, suffix: &str) -> String {
    if record.features.is_empty() {
        keyword_criteria(&record.title)
    } else {
        checklist(record.features.iter().map(String::as_str), suffix)
    }
}

/// Like [`success_criteria`] but caps the feature list at `limit` entries.
pub fn success_criteria_capped(record: &SpecRecord, limit: usize) -> String {
    if record.features.is_empty() {
        keyword_criteria(&record.title)
    } else {
        checklist(record.features.iter().take(limit).map(String::as_str), "")
    }
}

/// Boilerplate checklist chosen by keyword-matching the title.
pub fn keyword_criteria(title: &str) -> String {
    flavor_criteria(Flavor::for_title(title))
}

pub fn flavor_criteria(flavor: Flavor) -> String {
    checklist(flavor.lines().iter().copied(), "")
}

const STAKEHOLDER_GENERAL: &[&str] = &[
    "All core features implemented",
    "Data operations working correctly",
    "User interface complete and responsive",
    "Validation and error handling functional",
    "Security measures in place",
    "Performance requirements met",
];

/// Keyword checklist for external-stakeholder documents, which carry a
/// shorter general list than the other layouts.
pub fn stakeholder_criteria(title: &str) -> String {
    match Flavor::for_title(title) {
        Flavor::General => checklist(STAKEHOLDER_GENERAL.iter().copied(), ""),
        flavor => flavor_criteria(flavor),
    }
}

/// Plain bullet list, or a note when there is nothing to list.
pub fn bullet_list(items: &[String]) -> String {
    if items.is_empty() {
        return "- Core functionality as described above".to_string();
    }
    items
        .iter()
        .map(|i| format!("- {i}"))
        .collect::<Vec<_>>()
        .join("\n")
}
