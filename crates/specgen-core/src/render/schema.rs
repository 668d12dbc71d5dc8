//! Illustrative SQL fragments. None of this is executed; it is document text.

use crate::naming;
use crate::record::SpecRecord;
use crate::types::RowScope;

/// The record's tables, or one table named after the slug when it lists none.
pub fn table_names(record: &SpecRecord) -> Vec<String> {
    if record.tables.is_empty() {
        vec![naming::snake_case(&record.slug())]
    } else {
        record.tables.clone()
    }
}

/// `purchase_orders` → `PurchaseOrders`
pub fn interface_name(table: &str) -> String {
    naming::pascal_case(table)
}

// ---------------------------------------------------------------------------
// Tenant / branch scoped (classic + portal)
// ---------------------------------------------------------------------------

pub fn scoped_table(table: &str, scope: RowScope) -> String {
    let owner_columns = if scope.is_user() {
        "  student_id UUID REFERENCES students(id),\n  user_id UUID REFERENCES auth.users(id),\n"
    } else {
        ""
    };
    format!(
        "CREATE TABLE IF NOT EXISTS {table} (
  id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
  tenant_id UUID NOT NULL REFERENCES tenants(id),
  branch_id UUID NOT NULL REFERENCES branches(id),
{owner_columns}  name VARCHAR(255),
  description TEXT,
  status VARCHAR(50) DEFAULT 'active',
  metadata JSONB DEFAULT {{}},
  created_by UUID REFERENCES auth.users(id),
  updated_by UUID REFERENCES auth.users(id),
  created_at TIMESTAMP WITH TIME ZONE DEFAULT NOW(),
  updated_at TIMESTAMP WITH TIME ZONE DEFAULT NOW()
);"
    )
}

pub fn scoped_indexes(table: &str, scope: RowScope) -> String {
    let mut lines = vec![format!(
        "CREATE INDEX idx_{table}_tenant_branch ON {table}(tenant_id, branch_id);"
    )];
    if scope.is_user() {
        lines.push(format!("CREATE INDEX idx_{table}_user ON {table}(user_id);"));
    }
    lines.push(format!("CREATE INDEX idx_{table}_status ON {table}(status);"));
    lines.push(format!(
        "CREATE INDEX idx_{table}_created_at ON {table}(created_at DESC);"
    ));
    lines.join("\n")
}

pub fn rls_enable(table: &str) -> String {
    format!("ALTER TABLE {table} ENABLE ROW LEVEL SECURITY;")
}

pub fn isolation_policy(table: &str, scope: RowScope) -> String {
    match scope {
        RowScope::TenantBranch => format!(
            "CREATE POLICY {table}_isolation ON {table}
  FOR ALL USING (
    tenant_id = current_setting('app.current_tenant_id')::UUID
    AND branch_id = current_setting('app.current_branch_id')::UUID
  );"
        ),
        RowScope::User => format!(
            "CREATE POLICY {table}_user_isolation ON {table}
  FOR ALL USING (
    tenant_id = current_setting('app.current_tenant_id')::UUID
    AND branch_id = current_setting('app.current_branch_id')::UUID
    AND user_id = auth.uid()
  );"
        ),
    }
}

/// Full SQL body for a scoped schema: tables, indexes, RLS enable, policies.
pub fn scoped_schema(tables: &[String], scope: RowScope) -> String {
    let each = |f: &dyn Fn(&str) -> String, sep: &str| {
        tables
            .iter()
            .map(|t| f(t))
            .collect::<Vec<_>>()
            .join(sep)
    };
    format!(
        "{}\n\n-- Indexes\n{}\n\n-- Enable RLS\n{}\n\n-- RLS Policies\n{}",
        each(&|t: &str| scoped_table(t, scope), "\n\n"),
        each(&|t: &str| scoped_indexes(t, scope), "\n"),
        each(&rls_enable, "\n"),
        each(&|t: &str| isolation_policy(t, scope), "\n\n"),
    )
}

/// Skeleton used when a classic record names no tables.
pub fn placeholder_schema(title: &str, table: &str) -> String {
    format!(
        "-- Main table for {}
-- Detailed schema implementation here with:
-- - Multi-tenant structure
-- - Branch isolation
-- - Proper indexes
-- - Foreign key relationships
-- - RLS policies
-- - Audit fields
-- - JSONB for flexible metadata

-- Enable Row Level Security
{}

-- RLS Policy
{}",
        title.to_lowercase(),
        rls_enable(table),
        isolation_policy(table, RowScope::TenantBranch),
    )
}

// ---------------------------------------------------------------------------
// Owner scoped (stakeholder)
// ---------------------------------------------------------------------------

pub fn owned_table_section(table: &str) -> String {
    format!(
        "#### `{table}`
```sql
CREATE TABLE {table} (
  id UUID PRIMARY KEY DEFAULT uuid_generate_v4(),
  -- Add relevant columns based on table purpose
  created_at TIMESTAMP WITH TIME ZONE DEFAULT NOW(),
  updated_at TIMESTAMP WITH TIME ZONE DEFAULT NOW(),
  created_by UUID REFERENCES auth.users(id),
  updated_by UUID REFERENCES auth.users(id)
);
```"
    )
}

pub fn owned_index_line(table: &str) -> String {
    format!("- `{table}`: Index on `created_at`, `created_by`, frequently queried fields")
}

pub fn owner_policies(table: &str) -> String {
    format!(
        "```sql
-- {table} policies
CREATE POLICY \"Users can view own {table}\"
  ON {table} FOR SELECT
  USING (auth.uid() = created_by OR auth.uid() IN (
    SELECT user_id FROM user_roles WHERE role IN ('admin', 'super_admin')
  ));

CREATE POLICY \"Users can insert own {table}\"
  ON {table} FOR INSERT
  WITH CHECK (auth.uid() = created_by);

CREATE POLICY \"Users can update own {table}\"
  ON {table} FOR UPDATE
  USING (auth.uid() = created_by)
  WITH CHECK (auth.uid() = created_by);
```"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_table_when_none_listed() {
        let r = SpecRecord::new("231", "Question Paper Creator");
        assert_eq!(table_names(&r), ["question_paper_creator"]);
    }

    #[test]
    fn listed_tables_are_kept_in_order() {
        let mut r = SpecRecord::new("402", "Purchase Orders");
        r.tables = vec!["purchase_orders".into(), "purchase_order_items".into()];
        assert_eq!(table_names(&r), ["purchase_orders", "purchase_order_items"]);
        assert_eq!(interface_name(&r.tables[1]), "PurchaseOrderItems");
    }

    #[test]
    fn scoped_schema_covers_every_table() {
        let tables = vec!["a_items".to_string(), "b_items".to_string()];
        let sql = scoped_schema(&tables, RowScope::TenantBranch);
        for t in &tables {
            assert!(sql.contains(&format!("CREATE TABLE IF NOT EXISTS {t} (")));
            assert!(sql.contains(&format!("ALTER TABLE {t} ENABLE ROW LEVEL SECURITY;")));
            assert!(sql.contains(&format!("CREATE POLICY {t}_isolation ON {t}")));
        }
        assert!(sql.contains("  metadata JSONB DEFAULT {},\n"));
    }

    #[test]
    fn branch_scope_has_no_owner_columns() {
        let table = scoped_table("mail_tracking", RowScope::TenantBranch);
        assert!(table.contains("  branch_id UUID NOT NULL REFERENCES branches(id),\n  name VARCHAR(255),"));
        assert!(!table.contains("user_id"));
        let indexes = scoped_indexes("mail_tracking", RowScope::TenantBranch);
        assert_eq!(indexes.lines().count(), 3);
        assert!(!indexes.contains("idx_mail_tracking_user"));
        let policy = isolation_policy("mail_tracking", RowScope::TenantBranch);
        assert!(policy.starts_with("CREATE POLICY mail_tracking_isolation ON mail_tracking"));
        assert!(!policy.contains("auth.uid()"));
    }

    #[test]
    fn user_scope_restricts_rows_to_owner() {
        let table = scoped_table("student_profiles", RowScope::User);
        assert!(table.contains(
            "  branch_id UUID NOT NULL REFERENCES branches(id),\n  student_id UUID REFERENCES students(id),\n  user_id UUID REFERENCES auth.users(id),\n  name VARCHAR(255),"
        ));
        assert_eq!(
            scoped_indexes("student_profiles", RowScope::User),
            "CREATE INDEX idx_student_profiles_tenant_branch ON student_profiles(tenant_id, branch_id);
CREATE INDEX idx_student_profiles_user ON student_profiles(user_id);
CREATE INDEX idx_student_profiles_status ON student_profiles(status);
CREATE INDEX idx_student_profiles_created_at ON student_profiles(created_at DESC);"
        );
        assert_eq!(
            isolation_policy("student_profiles", RowScope::User),
            "CREATE POLICY student_profiles_user_isolation ON student_profiles
  FOR ALL USING (
    tenant_id = current_setting('app.current_tenant_id')::UUID
    AND branch_id = current_setting('app.current_branch_id')::UUID
    AND user_id = auth.uid()
  );"
        );
    }

    #[test]
    fn placeholder_mentions_lowercased_title() {
        let sql = placeholder_schema("Lesson Planning System", "lesson_planning_system");
        assert!(sql.starts_with("-- Main table for lesson planning system"));
        assert!(sql.contains("ALTER TABLE lesson_planning_system ENABLE ROW LEVEL SECURITY;"));
    }

    #[test]
    fn owner_policies_are_fenced() {
        let out = owner_policies("vendor_notifications");
        assert!(out.starts_with("```sql"));
        assert!(out.ends_with("```"));
        assert_eq!(out.matches("CREATE POLICY").count(), 3);
    }
}
