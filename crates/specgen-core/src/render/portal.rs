//! Portal style: per-table scoped schema and a paginated `SPEC<id>API` client.

use super::criteria;
use super::schema;
use super::SpecContext;
use crate::error::Result;
use crate::template;
use crate::types::RowScope;

pub(super) fn render(ctx: &SpecContext<'_>) -> Result<String> {
    let r = ctx.record;
    let scope = ctx.catalog.row_scope;
    let tables = schema::table_names(r);

    let mut vars = ctx.base_vars();
    vars.set("success_criteria", criteria::success_criteria(r, " functional"))
        .set("schema", schema::scoped_schema(&tables, scope))
        .set("table", tables[0].clone())
        .set("api_class", format!("SPEC{}API", r.id))
        .set("api_instance", format!("spec{}API", r.id))
        .set("owner_field", if scope.is_user() { "\n  userId: string;" } else { "" })
        .set("owner_insert", if scope.is_user() { "\n        user_id: user.id," } else { "" });

    match scope {
        RowScope::TenantBranch => vars
            .set("security", BRANCH_SECURITY)
            .set("performance", BRANCH_PERFORMANCE)
            .set("done", BRANCH_DONE),
        RowScope::User => vars
            .set("security", USER_SECURITY)
            .set("performance", USER_PERFORMANCE)
            .set("done", USER_DONE),
    };

    template::fill("portal", TEMPLATE, &vars)
}

const BRANCH_SECURITY: &str = "- **Row Level Security (RLS)** enforced on all tables
- Tenant and branch isolation via session variables
- User-specific data access based on roles
- Activity logging for audit trail
- Input validation on all operations
- Sensitive data encryption at rest";

const USER_SECURITY: &str = "- **Row Level Security (RLS)** enforced on all tables
- User-specific data access (student/parent/alumni only sees their data)
- Parent can only access their children's data
- Secure authentication required
- Input validation on all operations
- Activity logging for audit trail";

const BRANCH_PERFORMANCE: &str = "- **Page Load**: < 2 seconds
- **Search**: < 500ms
- **Create/Update**: < 1 second
- **Database Queries**: Indexed and optimized
- **Pagination**: Server-side for large datasets";

const USER_PERFORMANCE: &str = "- **Page Load**: < 2 seconds
- **Search**: < 500ms
- **Create/Update**: < 1 second
- **Database Queries**: Indexed and optimized
- **Pagination**: Server-side for large datasets
- **Caching**: For frequently accessed data";

const BRANCH_DONE: &str = "- [ ] All database tables and indexes created
- [ ] RLS policies implemented and tested
- [ ] API client fully implemented with TypeScript types
- [ ] React component with full CRUD operations
- [ ] Search and filter functionality working
- [ ] Unit tests passing (85%+ coverage)
- [ ] Mobile responsive design verified
- [ ] Performance benchmarks met
- [ ] Security audit completed
- [ ] Documentation complete";

const USER_DONE: &str = "- [ ] All database tables and indexes created
- [ ] RLS policies implemented and tested
- [ ] API client fully implemented with TypeScript types
- [ ] React component with full functionality
- [ ] Search and filter working
- [ ] Unit tests passing (85%+ coverage)
- [ ] Mobile responsive design verified
- [ ] Performance benchmarks met
- [ ] Security audit completed
- [ ] Documentation complete
- [ ] User acceptance testing passed";

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
- [ ] Mobile responsive layout verified
- [ ] Performance optimized (<2s load time)
- [ ] All tests passing (85%+ coverage)
- [ ] Security audit completed
- [ ] Documentation complete

---

## 🗄️ DATABASE SCHEMA

```sql
{{schema}}
```

---

## 💻 IMPLEMENTATION

### API Client (`/lib/api/spec-{{id}}-{{slug}}.ts`)

```typescript
import { createClient } from '@/lib/supabase/client';

export interface MainEntity {
  id: string;
  tenantId: string;
  branchId: string;{{owner_field}}
  name: string;
  description: string;
  status: string;
  metadata?: Record<string, any>;
  createdAt: string;
  updatedAt: string;
}

export class {{api_class}} {
  private supabase = createClient();

  async getAll(page: number = 1, limit: number = 20): Promise<{
    data: MainEntity[];
    total: number;
  }> {
    const start = (page - 1) * limit;
    const end = start + limit - 1;

    const { data, error, count } = await this.supabase
      .from('{{table}}')
      .select('*', { count: 'exact' })
      .order('created_at', { ascending: false })
      .range(start, end);

    if (error) throw error;
    
    return {
      data: data as MainEntity[],
      total: count || 0
    };
  }

  async getById(id: string): Promise<MainEntity> {
    const { data, error } = await this.supabase
      .from('{{table}}')
      .select('*')
      .eq('id', id)
      .single();

    if (error) throw error;
    return data as MainEntity;
  }

  async create(data: Partial<MainEntity>): Promise<MainEntity> {
    const { data: { user } } = await this.supabase.auth.getUser();
    if (!user) throw new Error('Not authenticated');

    const { data: created, error } = await this.supabase
      .from('{{table}}')
      .insert({
        ...data,{{owner_insert}}
        created_by: user.id,
        updated_by: user.id
      })
      .select()
      .single();

    if (error) throw error;
    return created as MainEntity;
  }

  async update(id: string, data: Partial<MainEntity>): Promise<MainEntity> {
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
    return updated as MainEntity;
  }

  async delete(id: string): Promise<void> {
    const { error } = await this.supabase
      .from('{{table}}')
      .delete()
      .eq('id', id);

    if (error) throw error;
  }
}

export const {{api_instance}} = new {{api_class}}();
```

### React Component (`/components/{{portal_folder}}/{{component_name}}.tsx`)

```typescript
'use client';

import React, { useState, useEffect } from 'react';
import { Card, CardContent, CardHeader, CardTitle } from '@/components/ui/card';
import { Button } from '@/components/ui/button';
import { Input } from '@/components/ui/input';
import { useToast } from '@/components/ui/use-toast';
import { Search, Plus, Edit, Trash2 } from 'lucide-react';

export function {{component_name}}() {
  const [items, setItems] = useState<any[]>([]);
  const [loading, setLoading] = useState(true);
  const [searchQuery, setSearchQuery] = useState('');
  const { toast } = useToast();

  useEffect(() => {
    loadData();
  }, []);

  const loadData = async () => {
    try {
      setLoading(true);
      // Load data using API
      setItems([]);
    } catch (error: any) {
      toast({
        title: 'Error',
        description: error.message,
        variant: 'destructive'
      });
    } finally {
      setLoading(false);
    }
  };

  return (
    <div className="space-y-6 p-6">
      <div className="flex justify-between items-center">
        <div>
          <h1 className="text-3xl font-bold">{{title}}</h1>
          <p className="text-muted-foreground">Manage and track operations</p>
        </div>
        <Button>
          <Plus className="h-4 w-4 mr-2" />
          Add New
        </Button>
      </div>

      <Card>
        <CardHeader>
          <div className="flex items-center gap-4">
            <div className="flex-1">
              <div className="relative">
                <Search className="absolute left-3 top-3 h-4 w-4 text-muted-foreground" />
                <Input
                  placeholder="Search..."
                  value={searchQuery}
                  onChange={(e) => setSearchQuery(e.target.value)}
                  className="pl-10"
                />
              </div>
            </div>
          </div>
        </CardHeader>
        <CardContent>
          {loading ? (
            <div className="text-center py-8">Loading...</div>
          ) : items.length === 0 ? (
            <div className="text-center py-8 text-muted-foreground">
              No records found
            </div>
          ) : (
            <div className="space-y-2">
              {items.map((item) => (
                <div key={item.id} className="flex items-center justify-between p-4 border rounded-lg">
                  <div>
                    <p className="font-medium">{item.name}</p>
                    <p className="text-sm text-muted-foreground">{item.description}</p>
                  </div>
                  <div className="flex gap-2">
                    <Button size="sm" variant="outline">
                      <Edit className="h-4 w-4" />
                    </Button>
                    <Button size="sm" variant="outline">
                      <Trash2 className="h-4 w-4" />
                    </Button>
                  </div>
                </div>
              ))}
            </div>
          )}
        </CardContent>
      </Card>
    </div>
  );
}
```

---

## 🧪 TESTING

### Unit Tests (`/tests/unit/spec-{{id}}-{{slug}}.test.ts`)

```typescript
import { describe, it, expect, beforeEach, vi } from 'vitest';
import { {{api_instance}} } from '@/lib/api/spec-{{id}}-{{slug}}';

describe('SPEC-{{id}}: {{title}} API', () => {
  beforeEach(() => {
    vi.clearAllMocks();
  });

  describe('CRUD Operations', () => {
    it('should fetch all records', async () => {
      const result = await {{api_instance}}.getAll();
      expect(result).toHaveProperty('data');
      expect(result).toHaveProperty('total');
    });

    it('should create new record', async () => {
      const newItem = {
        name: 'Test Item',
        description: 'Test Description'
      };
      const created = await {{api_instance}}.create(newItem);
      expect(created).toHaveProperty('id');
    });

    it('should update existing record', async () => {
      const updated = await {{api_instance}}.update('test-id', {
        name: 'Updated Name'
      });
      expect(updated.name).toBe('Updated Name');
    });

    it('should delete record', async () => {
      await expect({{api_instance}}.delete('test-id')).resolves.not.toThrow();
    });
  });
});
```

---

## 📚 USAGE EXAMPLE

```typescript
import { {{component_name}} } from '@/components/{{portal_folder}}/{{component_name}}';

export default function Page() {
  return (
    <div className="container mx-auto">
      <{{component_name}} />
    </div>
  );
}
```

---

## 🔒 SECURITY

{{security}}

---

## 📊 PERFORMANCE

{{performance}}

---

## ✅ DEFINITION OF DONE

{{done}}
"#;
