//! `{{name}}` placeholder substitution for the fixed document templates.

use crate::error::{Result, SpecgenError};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

static VAR_RE: OnceLock<Regex> = OnceLock::new();

fn var_re() -> &'static Regex {
    // {{name}} or {{ name }}
    VAR_RE.get_or_init(|| Regex::new(r"\{\{\s*(\w+)\s*\}\}").unwrap())
}

/// Values available to a template.
#[derive(Debug, Clone, Default)]
pub struct Vars {
    values: BTreeMap<&'static str, String>,
}

impl Vars {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: &'static str, value: impl Into<String>) -> &mut Self {
        self.values.insert(name, value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

/// Fill every placeholder in `template`. Substituted values are not scanned
/// again, so record text containing `{{` is emitted verbatim.
///
/// `name` identifies the template in the error when a placeholder has no value.
pub fn fill(name: &str, template: &str, vars: &Vars) -> Result<String> {
    let mut out = String::with_capacity(template.len() * 2);
    let mut last = 0;

    for cap in var_re().captures_iter(template) {
        let whole = cap.get(0).expect("capture 0 is the full match");
        let key = &cap[1];
        let value = vars
            .get(key)
            .ok_or_else(|| SpecgenError::MissingTemplateVariable {
                template: name.to_string(),
                name: key.to_string(),
            })?;
        out.push_str(&template[last..whole.start()]);
        out.push_str(value);
        last = whole.end();
    }
    out.push_str(&template[last..]);
    Ok(out)
}

/// Placeholder names a template expects, in order of first use.
pub fn placeholders(template: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for cap in var_re().captures_iter(template) {
        let key = cap[1].to_string();
        if !names.contains(&key) {
            names.push(key);
        }
    }
    names
}
