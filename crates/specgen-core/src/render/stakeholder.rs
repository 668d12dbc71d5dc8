//! External-stakeholder style: blockquote header, owner-scoped policies and
//! an API class typed from the first table.

use super::criteria;
use super::schema;
use super::SpecContext;
use crate::error::Result;
use crate::template;

fn join_each(tables: &[String], f: fn(&str) -> String, sep: &str) -> String {
    tables.iter().map(|t| f(t)).collect::<Vec<_>>().join(sep)
}

fn fenced_rls_enable(table: &str) -> String {
    format!("```sql\n{}\n```", schema::rls_enable(table))
}

pub(super) fn render(ctx: &SpecContext<'_>) -> Result<String> {
    let r = ctx.record;
    let tables = schema::table_names(r);
    let main_table = tables[0].clone();

    let mut vars = ctx.base_vars();
    vars.set("success_criteria", criteria::stakeholder_criteria(&r.title))
        .set("key_features", criteria::bullet_list(&r.features))
        .set("tables_section", join_each(&tables, schema::owned_table_section, "\n\n"))
        .set("index_lines", join_each(&tables, schema::owned_index_line, "\n"))
        .set("rls_enable", join_each(&tables, fenced_rls_enable, "\n"))
        .set("rls_policies", join_each(&tables, schema::owner_policies, "\n\n"))
        .set("table", main_table.clone())
        .set("entity", schema::interface_name(&main_table));

    template::fill("stakeholder", TEMPLATE, &vars)
}

const TEMPLATE: &str = r#"# SPEC-{{id}}: {{title}}

> **Portal**: {{portal_name}}  
> **Category**: {{category}}  
> **Priority**: {{priority}}  
> **Estimated Time**: {{time}}  
> **Status**: 📝 READY FOR DEVELOPMENT

---

## 📋 OVERVIEW

{{description}}

### Key Features

{{key_features}}

---

## 🎯 SUCCESS CRITERIA

{{success_criteria}}

---

## 📊 DATABASE SCHEMA

### Tables Required

{{tables_section}}

### Indexes

{{index_lines}}

### Row Level Security (RLS)

{{rls_enable}}

**RLS Policies**:

{{rls_policies}}

---

## 🔌 API LAYER (Supabase)

### API Class: `{{component_name}}API`

**Location**: `src/lib/api/{{slug}}-api.ts`

```typescript
export interface {{entity}} {
  id: string;
  // Add relevant fields based on table structure
  created_at: string;
  updated_at: string;
  created_by: string;
  updated_by: string;
}

export interface {{entity}}Create {
  // Add relevant fields for creation
}

export interface {{entity}}Update {
  // Add relevant fields for update
}

export class {{component_name}}API {
  constructor(private supabase: SupabaseClient) {}

  async getAll(): Promise<{{entity}}[]> {
    const { data, error } = await this.supabase
      .from('{{table}}')
      .select('*')
      .order('created_at', { ascending: false });

    if (error) throw error;
    return data as {{entity}}[];
  }

  async getById(id: string): Promise<{{entity}}> {
    const { data, error } = await this.supabase
      .from('{{table}}')
      .select('*')
      .eq('id', id)
      .single();

    if (error) throw error;
    return data as {{entity}};
  }

  async create(data: {{entity}}Create): Promise<{{entity}}> {
    const { data: { user } } = await this.supabase.auth.getUser();
    if (!user) throw new Error('Not authenticated');

    const { data: created, error } = await this.supabase
      .from('{{table}}')
      .insert({
        ...data,
        created_by: user.id,
        updated_by: user.id
      })
      .select()
      .single();

    if (error) throw error;
    return created as {{entity}};
  }

  async update(id: string, data: {{entity}}Update): Promise<{{entity}}> {
    const { data: { user } } = await this.supabase.auth.getUser();
    if (!user) throw new Error('Not authenticated');

    const { data: updated, error } = await this.supabase
      .from('{{table}}')
      .update({
        ...data,
        updated_by: user.id,
        updated_at: new Date().toISOString()
      })
      .eq('id', id)
      .select()
      .single();

    if (error) throw error;
    return updated as {{entity}};
  }

  async delete(id: string): Promise<void> {
    const { error } = await this.supabase
      .from('{{table}}')
      .delete()
      .eq('id', id);

    if (error) throw error;
  }
}

// Export singleton instance
export const {{snake_name}}_api = new {{component_name}}API(supabase);
```

---

## 🎨 FRONTEND COMPONENTS

### Main Component: `{{component_name}}`

**Location**: `src/pages/{{portal_folder}}/{{slug}}.tsx`

**Features**:
- Clean, modern interface
- Real-time data updates
- Responsive design
- Error handling
- Loading states
- Form validation
- Success notifications

---

## 🔗 INTEGRATION POINTS

- **Dependencies**: {{dependencies}}
- **Related Specs**: Cross-portal integration where applicable
- **External Systems**: Email/SMS notifications, File storage

---

## 📱 USER INTERFACE REQUIREMENTS

### Layout
- Consistent with portal design system
- Responsive grid layout
- Mobile-friendly interface

### Components Needed
- Data tables with sorting/filtering
- Forms with validation
- Modal dialogs
- Status indicators
- Action buttons
- Search functionality

---

## ✅ VALIDATION RULES

- Required field validation
- Data type validation
- Business rule validation
- Permission checks
- Duplicate prevention
- Date range validation

---

## 🔒 SECURITY & PERMISSIONS

- Role-based access control
- RLS policies enforced
- Audit trail logging
- Secure data handling
- Session management

---

## 📈 PERFORMANCE REQUIREMENTS

- Page load < 2 seconds
- API response < 500ms
- Real-time updates
- Optimized queries
- Efficient pagination

---

## 🧪 TESTING REQUIREMENTS

### Unit Tests
- API method testing
- Validation logic
- Business rules

### Integration Tests
- Database operations
- API endpoints
- Authentication flow

### UI Tests
- Component rendering
- User interactions
- Form submissions

---

## 📝 ACCEPTANCE CRITERIA

- [ ] Database schema created
- [ ] RLS policies active
- [ ] API layer functional
- [ ] UI components complete
- [ ] All features working
- [ ] Tests passing
- [ ] Documentation complete
- [ ] Security audit passed

---

**Ready for autonomous AI agent development** ✅
"#;
