//! Academic-staff style: generic checklists and a single-entity API client.

use super::criteria::{self, Flavor};
use super::schema;
use super::SpecContext;
use crate::error::Result;
use crate::template;

pub(super) fn render(ctx: &SpecContext<'_>) -> Result<String> {
    let r = ctx.record;
    let tables = schema::table_names(r);
    let main_table = tables[0].clone();

    let success_criteria = if r.features.is_empty() {
        criteria::flavor_criteria(Flavor::General)
    } else {
        criteria::success_criteria(r, "")
    };
    let schema_sql = if r.tables.is_empty() {
        schema::placeholder_schema(&r.title, &main_table)
    } else {
        schema::scoped_schema(&tables, ctx.catalog.row_scope)
    };

    let mut vars = ctx.base_vars();
    vars.set("success_criteria", success_criteria)
        .set("schema", schema_sql)
        .set("table", main_table.clone())
        .set("main_type", schema::interface_name(&main_table))
        .set("footer", ctx.footer("✅ READY FOR AUTONOMOUS AI AGENT DEVELOPMENT"));

    template::fill("classic", TEMPLATE, &vars)
}

const TEMPLATE: &str = r#"# SPEC-{{id}}: {{title}}

## 🎯 SPECIFICATION OVERVIEW

**Specification ID**: SPEC-{{id}}  
**Title**: {{title}}  
**Phase**: {{phase}}  
**Portal**: {{portal_name}}  
**Category**: {{category}}  
**Priority**: {{priority}}  
**Status**: ✅ READY FOR DEVELOPMENT  
**Estimated Time**: {{time}}  
**Dependencies**: {{dependencies}}  

---

## 📋 DESCRIPTION

{{description}}

---

## 🎯 SUCCESS CRITERIA

{{success_criteria}}

---

## 🗄️ DATABASE SCHEMA

```sql
{{schema}}
```

---

## 💻 IMPLEMENTATION

### API Client (`/lib/api/{{slug}}.ts`)

```typescript
import { createClient } from '@/lib/supabase/client';

// Type definitions
export interface {{main_type}} {
  id: string;
  tenantId: string;
  branchId: string;
  // ... other fields
  createdAt: string;
  updatedAt: string;
}

// API Client class
class {{component_name}}API {
  private supabase = createClient();

  /**
   * Get all items with pagination and filtering
   */
  async getAll(
    filters?: Record<string, any>,
    pagination?: { page: number; limit: number }
  ): Promise<{{main_type}}[]> {
    const query = this.supabase
      .from('{{table}}')
      .select('*');

    // Apply filters
    if (filters) {
      Object.entries(filters).forEach(([key, value]) => {
        if (value !== undefined && value !== null) {
          query.eq(key, value);
        }
      });
    }

    // Apply pagination
    if (pagination) {
      const { page, limit } = pagination;
      const start = (page - 1) * limit;
      query.range(start, start + limit - 1);
    }

    const { data, error } = await query.order('created_at', { ascending: false });

    if (error) throw error;
    return data.map(this.mapItem);
  }

  /**
   * Get single item by ID
   */
  async getById(id: string): Promise<{{main_type}} | null> {
    const { data, error } = await this.supabase
      .from('{{table}}')
      .select('*')
      .eq('id', id)
      .single();

    if (error && error.code !== 'PGRST116') throw error;
    return data ? this.mapItem(data) : null;
  }

  /**
   * Create new item
   */
  async create(item: Omit<{{main_type}}, 'id' | 'createdAt' | 'updatedAt'>): Promise<{{main_type}}> {
    const { data, error } = await this.supabase
      .from('{{table}}')
      .insert(this.toSnakeCase(item))
      .select()
      .single();

    if (error) throw error;
    return this.mapItem(data);
  }

  /**
   * Update existing item
   */
  async update(id: string, updates: Partial<{{main_type}}>): Promise<{{main_type}}> {
    const { data, error } = await this.supabase
      .from('{{table}}')
      .update({
        ...this.toSnakeCase(updates),
        updated_at: new Date().toISOString(),
      })
      .eq('id', id)
      .select()
      .single();

    if (error) throw error;
    return this.mapItem(data);
  }

  /**
   * Delete item
   */
  async delete(id: string): Promise<void> {
    const { error } = await this.supabase
      .from('{{table}}')
      .delete()
      .eq('id', id);

    if (error) throw error;
  }

  // Helper methods
  private mapItem(item: any): {{main_type}} {
    return {
      id: item.id,
      tenantId: item.tenant_id,
      branchId: item.branch_id,
      // ... map all fields from snake_case to camelCase
      createdAt: item.created_at,
      updatedAt: item.updated_at,
    };
  }

  private toSnakeCase(obj: any): any {
    // Convert camelCase keys to snake_case
    const result: any = {};
    Object.entries(obj).forEach(([key, value]) => {
      const snakeKey = key.replace(/([A-Z])/g, '_$1').toLowerCase();
      result[snakeKey] = value;
    });
    return result;
  }
}

export const {{camel_name}}API = new {{component_name}}API();
```

---

### React Component (`/components/{{portal_folder}}/{{component_name}}.tsx`)

```typescript
'use client';

import React, { useEffect, useState } from 'react';
import { Card, CardContent, CardDescription, CardHeader, CardTitle } from '@/components/ui/card';
import { Button } from '@/components/ui/button';
import { Alert, AlertDescription } from '@/components/ui/alert';
import { AlertCircle } from 'lucide-react';
import { {{camel_name}}API, {{main_type}} } from '@/lib/api/{{slug}}';

export function {{component_name}}() {
  const [items, setItems] = useState<{{main_type}}[]>([]);
  const [loading, setLoading] = useState(true);
  const [error, setError] = useState<string | null>(null);

  useEffect(() => {
    loadData();
  }, []);

  const loadData = async () => {
    try {
      setLoading(true);
      setError(null);
      const data = await {{camel_name}}API.getAll();
      setItems(data);
    } catch (err) {
      setError(err instanceof Error ? err.message : 'Failed to load data');
    } finally {
      setLoading(false);
    }
  };

  if (loading) {
    return <div className="flex items-center justify-center h-64">Loading...</div>;
  }

  if (error) {
    return (
      <Alert variant="destructive">
        <AlertCircle className="h-4 w-4" />
        <AlertDescription>{error}</AlertDescription>
      </Alert>
    );
  }

  return (
    <div className="space-y-6">
      <div className="flex justify-between items-center">
        <h1 className="text-3xl font-bold">{{title}}</h1>
        <Button>Create New</Button>
      </div>

      <Card>
        <CardHeader>
          <CardTitle>Items List</CardTitle>
          <CardDescription>Manage your items</CardDescription>
        </CardHeader>
        <CardContent>
          <div className="space-y-4">
            {items.map((item) => (
              <div key={item.id} className="border p-4 rounded-lg">
                {/* Item display */}
              </div>
            ))}
          </div>
        </CardContent>
      </Card>
    </div>
  );
}
```

---

## 🧪 TESTING

### Unit Tests (`/tests/unit/{{slug}}.test.ts`)

```typescript
import { describe, it, expect, beforeEach, vi } from 'vitest';
import { {{camel_name}}API } from '@/lib/api/{{slug}}';

describe('{{title}} API', () => {
  beforeEach(() => {
    vi.clearAllMocks();
  });

  describe('getAll', () => {
    it('should fetch all items', async () => {
      const items = await {{camel_name}}API.getAll();
      expect(Array.isArray(items)).toBe(true);
    });
  });

  describe('create', () => {
    it('should create new item', async () => {
      const created = await {{camel_name}}API.create({} as any);
      expect(created.id).toBeDefined();
    });
  });

  describe('update', () => {
    it('should update existing item', async () => {
      const updated = await {{camel_name}}API.update('test-id', {});
      expect(updated).toBeDefined();
    });
  });
});
```

---

## 📚 USAGE EXAMPLE

```typescript
// In a page component
import { {{component_name}} } from '@/components/{{portal_folder}}/{{component_name}}';

export default function {{component_name}}Page() {
  return (
    <div className="container mx-auto py-6">
      <{{component_name}} />
    </div>
  );
}

// Using the API directly
import { {{camel_name}}API } from '@/lib/api/{{slug}}';

async function handleAction() {
  const items = await {{camel_name}}API.getAll();
  console.log('Items:', items);
}
```

---

## 🔒 SECURITY

- ✅ Row-Level Security (RLS) policies implemented
- ✅ Tenant isolation enforced
- ✅ Branch-level access control
- ✅ Role-based permissions (RBAC)
- ✅ Audit logging for all operations
- ✅ Input validation and sanitization
- ✅ Secure file upload handling
- ✅ CSRF protection
- ✅ XSS prevention

---

## 📊 PERFORMANCE

- Indexed columns for fast queries
- Materialized views for aggregated data
- Pagination for large datasets
- Lazy loading for UI components
- Optimistic UI updates
- Caching strategies implemented
- Query optimization
- Connection pooling

---

## ♿ ACCESSIBILITY

- WCAG 2.1 Level AA compliant
- Keyboard navigation support
- Screen reader friendly
- Proper ARIA labels
- Color contrast ratios met
- Focus indicators visible
- Error messages accessible
- Form validation accessible

---

## 📱 MOBILE RESPONSIVENESS

- Mobile-first design approach
- Touch-friendly interface
- Responsive grid layouts
- Optimized for small screens
- Progressive Web App (PWA) ready
- Offline support considerations
- Touch gestures implemented

---

## ✅ DEFINITION OF DONE

- [ ] Database schema created and migrated
- [ ] RLS policies implemented and tested
- [ ] API client methods implemented
- [ ] React components built with shadcn/ui
- [ ] Unit tests written (85%+ coverage)
- [ ] Integration tests passing
- [ ] Mobile responsive design verified
- [ ] Accessibility tested and compliant
- [ ] Performance benchmarks met
- [ ] Security audit passed
- [ ] Documentation complete
- [ ] Code review approved
- [ ] QA testing passed
- [ ] User acceptance testing completed

---

{{footer}}
"#;
