use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// TemplateKind
// ---------------------------------------------------------------------------

/// Layout used to render every record of a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    /// Portal + category metadata, generic schema skeleton, footer with next spec.
    #[default]
    Classic,
    /// Tenant/branch scoped tables, `SPEC<id>API` client, searchable list UI.
    Portal,
    /// Keyword success criteria, owner RLS policies, `<Name>API` client.
    Stakeholder,
    /// Operational specs: components, metrics, alerts, runbooks.
    Deployment,
}

impl TemplateKind {
    pub fn all() -> &'static [TemplateKind] {
        &[
            TemplateKind::Classic,
            TemplateKind::Portal,
            TemplateKind::Stakeholder,
            TemplateKind::Deployment,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TemplateKind::Classic => "classic",
            TemplateKind::Portal => "portal",
            TemplateKind::Stakeholder => "stakeholder",
            TemplateKind::Deployment => "deployment",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// WriteMode
// ---------------------------------------------------------------------------

/// What to do when a target file already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteMode {
    #[default]
    Overwrite,
    SkipExisting,
}

impl WriteMode {
    pub fn as_str(self) -> &'static str {
        match self {
            WriteMode::Overwrite => "overwrite",
            WriteMode::SkipExisting => "skip_existing",
        }
    }
}

impl fmt::Display for WriteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for WriteMode {
    type Err = crate::error::SpecgenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "overwrite" => Ok(WriteMode::Overwrite),
            "skip_existing" | "skip-existing" | "skip" => Ok(WriteMode::SkipExisting),
            _ => Err(crate::error::SpecgenError::InvalidWriteMode(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// RowScope
// ---------------------------------------------------------------------------

/// Row visibility written into the illustrative schemas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowScope {
    /// Rows belong to a tenant and branch; staff see the whole branch.
    #[default]
    TenantBranch,
    /// Branch rows further restricted to the owning user (`user_id = auth.uid()`).
    User,
}

impl RowScope {
    pub fn is_user(self) -> bool {
        self == RowScope::User
    }
}

// ---------------------------------------------------------------------------
// WriteAction
// ---------------------------------------------------------------------------

/// Outcome of emitting one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteAction {
    Created,
    #[serde(rename = "updated")]
    Overwritten,
    Skipped,
}

impl WriteAction {
    pub fn as_str(self) -> &'static str {
        match self {
            WriteAction::Created => "created",
            WriteAction::Overwritten => "updated",
            WriteAction::Skipped => "skipped",
        }
    }
}

impl fmt::Display for WriteAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
