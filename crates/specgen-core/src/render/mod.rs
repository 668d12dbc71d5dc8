//! Turns one record into one Markdown document.
//!
//! Each template kind lives in its own module and exposes a `render`
//! function over a [`SpecContext`]. Output depends only on the catalog and
//! the record, never on the clock, so re-rendering is byte-identical.

mod classic;
pub mod criteria;
mod deployment;
pub mod index;
mod portal;
pub mod schema;
mod stakeholder;

use crate::catalog::{Catalog, Group};
use crate::error::Result;
use crate::naming;
use crate::record::SpecRecord;
use crate::template::Vars;
use crate::types::TemplateKind;

/// Everything a template can see while rendering one record.
#[derive(Debug, Clone, Copy)]
pub struct SpecContext<'a> {
    pub catalog: &'a Catalog,
    pub group: &'a Group,
    pub record: &'a SpecRecord,
}

impl<'a> SpecContext<'a> {
    pub fn new(catalog: &'a Catalog, group: &'a Group, record: &'a SpecRecord) -> Self {
        Self {
            catalog,
            group,
            record,
        }
    }

    /// Record label, then catalog default, then the group name.
    pub fn category(&self) -> String {
        self.record
            .category
            .clone()
            .or_else(|| self.catalog.category.clone())
            .unwrap_or_else(|| self.group.display_name())
    }

    /// The metadata "Dependencies" line.
    ///
    /// A record's own list replaces the catalog default. When the catalog
    /// links group dashboards, non-dashboard records also point at the first
    /// dashboard of their group.
    pub fn dependencies(&self) -> String {
        if !self.record.dependencies.is_empty() {
            return self.record.dependencies.join(", ");
        }

        let mut parts: Vec<String> = self.catalog.dependencies.clone();
        if self.catalog.link_group_dashboard && !self.record.is_dashboard() {
            if let Some(dash) = self.group.dashboard() {
                parts.push(format!(
                    "SPEC-{} ({})",
                    dash.id,
                    naming::dashboard_label(&dash.title)
                ));
            }
        }

        if parts.is_empty() {
            "None".to_string()
        } else {
            parts.join(", ")
        }
    }

    /// Closing lines: status, optional last-updated date, optional next spec.
    pub fn footer(&self, status: &str) -> String {
        let mut lines = vec![format!("**Status**: {status}  ")];
        if let Some(date) = &self.catalog.last_updated {
            lines.push(format!("**Last Updated**: {date}  "));
        }
        if let Some(next) = self.record.next_id() {
            lines.push(format!("**Next Spec**: SPEC-{next}"));
        }
        lines.join("\n")
    }

    /// Values shared by every template.
    pub fn base_vars(&self) -> Vars {
        let r = self.record;
        let slug = r.slug();
        let mut vars = Vars::new();
        vars.set("id", r.id.clone())
            .set("title", r.title.clone())
            .set("slug", slug.clone())
            .set("phase", self.catalog.phase.label())
            .set("portal_name", self.group.display_name())
            .set("portal_folder", self.group.key.to_lowercase())
            .set("category", self.category())
            .set("priority", r.priority.clone())
            .set("time", r.time.clone())
            .set("description", r.description.clone())
            .set("dependencies", self.dependencies())
            .set("component_name", naming::pascal_case(&slug))
            .set("camel_name", naming::camel_case(&slug))
            .set("snake_name", naming::snake_case(&slug));
        vars
    }
}

/// Render one record with the catalog's template kind.
pub fn render_spec(catalog: &Catalog, group: &Group, record: &SpecRecord) -> Result<String> {
    let ctx = SpecContext::new(catalog, group, record);
    match catalog.template {
        TemplateKind::Classic => classic::render(&ctx),
        TemplateKind::Portal => portal::render(&ctx),
        TemplateKind::Stakeholder => stakeholder::render(&ctx),
        TemplateKind::Deployment => deployment::render(&ctx),
    }
}
