//! Deployment style: component breakdown plus sections chosen by the
//! operational area the group covers.

use super::criteria;
use super::SpecContext;
use crate::error::Result;
use crate::naming;
use crate::template;

/// Features shown in the success criteria before the fixed quality lines.
const MAX_CRITERIA: usize = 8;
const FEATURES_PER_COMPONENT: usize = 3;

/// Operational area, detected from the group key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentArea {
    Cicd,
    Monitoring,
    Security,
    Documentation,
}

impl DeploymentArea {
    pub fn from_group_key(key: &str) -> Self {
        let key = key.to_uppercase();
        if key.contains("CICD") {
            DeploymentArea::Cicd
        } else if key.contains("MONITORING") {
            DeploymentArea::Monitoring
        } else if key.contains("SECURITY") {
            DeploymentArea::Security
        } else {
            DeploymentArea::Documentation
        }
    }

    fn implementation(self) -> &'static str {
        match self {
            DeploymentArea::Cicd => CICD_IMPLEMENTATION,
            DeploymentArea::Monitoring => MONITORING_IMPLEMENTATION,
            DeploymentArea::Security => SECURITY_IMPLEMENTATION,
            DeploymentArea::Documentation => DOCUMENTATION_IMPLEMENTATION,
        }
    }

    fn metrics(self) -> &'static str {
        match self {
            DeploymentArea::Cicd => {
                "- **Deployment Frequency**: Daily
- **Lead Time for Changes**: < 1 hour
- **Mean Time to Recovery (MTTR)**: < 30 minutes
- **Change Failure Rate**: < 5%
- **Build Success Rate**: > 95%
- **Test Coverage**: > 85%
- **Build Time**: < 5 minutes"
            }
            DeploymentArea::Monitoring => {
                "- **Error Rate**: < 0.1%
- **Response Time (p95)**: < 200ms
- **Uptime**: 99.9%
- **User Sessions Tracked**: 100%
- **Alert Response Time**: < 5 minutes
- **Mean Time to Detect (MTTD)**: < 10 minutes"
            }
            DeploymentArea::Security => {
                "- **Security Scan Frequency**: Daily
- **Vulnerability Resolution Time**: < 24 hours (critical)
- **Failed Login Attempts**: Monitored
- **API Rate Limit Hits**: < 1% of requests
- **SSL/TLS Score**: A+
- **Security Header Score**: A+"
            }
            DeploymentArea::Documentation => {
                "- **Documentation Coverage**: 100% of features
- **Doc Update Frequency**: Weekly
- **Search Success Rate**: > 80%
- **User Satisfaction**: > 4.5/5
- **Video Tutorial Views**: Tracked
- **FAQ Coverage**: > 90% of support tickets"
            }
        }
    }

    fn alerts(self) -> &'static str {
        match self {
            DeploymentArea::Cicd => {
                "- Deployment failure (Slack, Email)
- Build failure (Slack, Email)
- Test failure (Slack)
- Coverage drop below 85% (Slack)
- Long build time (> 10 min) (Slack)"
            }
            DeploymentArea::Monitoring => {
                "- Error rate spike (> 1%) (PagerDuty, Slack)
- Response time degradation (> 1s p95) (Slack)
- Server downtime (PagerDuty, SMS, Email)
- High memory usage (> 80%) (Slack)
- Database connection issues (PagerDuty)"
            }
            DeploymentArea::Security => {
                "- Security vulnerability detected (PagerDuty, Email)
- Unusual login patterns (Email, Slack)
- Rate limit exceeded (Slack)
- Failed authentication attempts (> 10) (Email)
- SSL certificate expiry (< 30 days) (Email)"
            }
            DeploymentArea::Documentation => {
                "- Documentation build failure (Slack)
- Broken links detected (Email)
- Search index update failure (Slack)
- Doc deployment failure (Email)"
            }
        }
    }
}

fn component_priority(position: usize) -> &'static str {
    match position {
        1 | 2 => "Critical",
        3 | 4 => "High",
        _ => "Medium",
    }
}

/// One numbered block per component. With more than three features each
/// component takes its own run of three; otherwise all share the first three.
pub fn component_details(components: &[String], features: &[String]) -> String {
    components
        .iter()
        .enumerate()
        .map(|(i, component)| {
            let position = i + 1;
            let purpose = features
                .get(i)
                .map(String::as_str)
                .unwrap_or("Core component implementation");
            let key_features: &[String] = if features.len() > FEATURES_PER_COMPONENT {
                let start = (i * FEATURES_PER_COMPONENT).min(features.len());
                let end = ((i + 1) * FEATURES_PER_COMPONENT).min(features.len());
                &features[start..end]
            } else {
                features
            };
            format!(
                "#### {position}. {}\n\n**Purpose**: {purpose}\n\n**Key Features**:\n{}\n\n**Implementation Priority**: {}\n",
                naming::title_case(component),
                criteria::bullet_list(key_features),
                component_priority(position),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub(super) fn render(ctx: &SpecContext<'_>) -> Result<String> {
    let r = ctx.record;
    let area = DeploymentArea::from_group_key(&ctx.group.key);
    let components = if r.components.is_empty() {
        vec![naming::snake_case(&r.slug())]
    } else {
        r.components.clone()
    };

    let mut vars = ctx.base_vars();
    vars.set("success_criteria", criteria::success_criteria_capped(r, MAX_CRITERIA))
        .set("component_details", component_details(&components, &r.features))
        .set("implementation", area.implementation())
        .set("metrics", area.metrics())
        .set("alerts", area.alerts());

    template::fill("deployment", TEMPLATE, &vars)
}

const TEMPLATE: &str = r#"# SPEC-{{id}}: {{title}}

## 🎯 SPECIFICATION OVERVIEW

**Specification ID**: SPEC-{{id}}  
**Title**: {{title}}  
**Phase**: {{phase}}  
**Category**: {{category}}  
**Priority**: {{priority}}  
**Status**: ✅ READY FOR IMPLEMENTATION  
**Estimated Time**: {{time}}  
**Dependencies**: {{dependencies}}  

---

## 📋 DESCRIPTION

{{description}}

---

## 🎯 SUCCESS CRITERIA

{{success_criteria}}
- [ ] Production-ready implementation verified
- [ ] Performance benchmarks met
- [ ] Security audit completed
- [ ] Documentation complete and accessible
- [ ] Team training completed
- [ ] Monitoring and alerts active

---

## 🏗️ IMPLEMENTATION COMPONENTS

### Core Components

{{component_details}}

---

## 💻 IMPLEMENTATION DETAILS

{{implementation}}

---

## 📊 MONITORING & METRICS

### Key Metrics

{{metrics}}

### Alerts

{{alerts}}

---

## 🧪 TESTING & VALIDATION

### Testing Strategy

1. **Unit Testing**: Test individual components and functions
2. **Integration Testing**: Test component interactions
3. **E2E Testing**: Test complete user workflows
4. **Performance Testing**: Load and stress testing
5. **Security Testing**: Vulnerability scanning and penetration testing
6. **Acceptance Testing**: User acceptance criteria validation

### Validation Checklist

- [ ] All features implemented
- [ ] All tests passing
- [ ] Performance benchmarks met
- [ ] Security scan passed
- [ ] Documentation complete
- [ ] Code review approved
- [ ] Staging environment verified
- [ ] Production deployment successful

---

## 📚 DOCUMENTATION REQUIREMENTS

1. **Technical Documentation**
   - Architecture diagrams
   - Component documentation
   - API documentation
   - Configuration guide

2. **User Documentation**
   - Feature guides
   - Video tutorials
   - FAQ sections
   - Troubleshooting guides

3. **Operations Documentation**
   - Deployment procedures
   - Monitoring setup
   - Incident response
   - Runbooks

---

## 🔒 SECURITY CONSIDERATIONS

1. **Authentication & Authorization**
   - Secure session management
   - Role-based access control
   - JWT token validation

2. **Data Protection**
   - Encryption at rest and in transit
   - Secure data handling
   - PII protection

3. **Security Monitoring**
   - Real-time threat detection
   - Security event logging
   - Incident response procedures

---

## 📊 PERFORMANCE TARGETS

- **Page Load Time**: < 2 seconds
- **API Response Time**: < 200ms (p95)
- **Database Query Time**: < 50ms (p95)
- **Time to Interactive**: < 3 seconds
- **First Contentful Paint**: < 1.5 seconds
- **Lighthouse Score**: 90+
- **Core Web Vitals**: All green

---

## 🚀 DEPLOYMENT CHECKLIST

- [ ] Code review completed
- [ ] All tests passing
- [ ] Security scan passed
- [ ] Performance benchmarks met
- [ ] Documentation updated
- [ ] Staging environment tested
- [ ] Rollback procedure ready
- [ ] Monitoring configured
- [ ] Team notified
- [ ] Deploy to production
- [ ] Post-deployment verification
- [ ] Announcement sent

---

## ✅ DEFINITION OF DONE

- [ ] All components implemented and tested
- [ ] Integration testing completed
- [ ] Performance benchmarks met
- [ ] Security review passed
- [ ] Documentation complete
- [ ] Team training completed
- [ ] Monitoring active
- [ ] Rollback procedure tested
- [ ] Production deployment successful
- [ ] Post-deployment verification complete

---

## 📞 SUPPORT & ESCALATION

### Support Tiers

**Tier 1 (Critical - 24/7)**
- System down
- Security breach
- Data loss

**Tier 2 (High - Business Hours)**
- Performance degradation
- Feature not working
- Integration issues

**Tier 3 (Normal - Business Hours)**
- Documentation updates
- Feature requests
- Enhancement suggestions

### Escalation Path

1. **L1 Support**: Initial triage (< 5 minutes)
2. **L2 Support**: Technical investigation (< 30 minutes)
3. **L3 Support**: Engineering team (< 1 hour)
4. **On-Call Engineer**: Critical issues (immediate)
5. **Engineering Manager**: Escalation (< 2 hours)

---

## 📈 SUCCESS METRICS

- **System Uptime**: 99.9%
- **User Satisfaction**: 4.5+/5
- **Support Ticket Volume**: < 5% of users
- **Feature Adoption**: 70%+
- **Performance Score**: 90+
- **Security Score**: A+
- **Documentation Coverage**: 100%

---

**Status**: Ready for Production Deployment 🚀  
**Priority**: {{priority}}  
**Timeline**: {{time}}  

---

**END OF SPECIFICATION**
"#;

// ---------------------------------------------------------------------------
// Implementation snippets
// ---------------------------------------------------------------------------

const CICD_IMPLEMENTATION: &str = r#"### GitHub Actions Workflow

```yaml
name: CI/CD Pipeline

on:
  push:
    branches: [main, develop]
  pull_request:
    branches: [main, develop]

jobs:
  test:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v3
      - name: Setup Node.js
        uses: actions/setup-node@v3
        with:
          node-version: '18'
          cache: 'npm'
      - name: Install dependencies
        run: npm ci
      - name: Run tests
        run: npm test
      - name: Upload coverage
        uses: codecov/codecov-action@v3

  build:
    needs: test
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v3
      - name: Build application
        run: npm run build
      - name: Upload artifacts
        uses: actions/upload-artifact@v3

  deploy:
    needs: build
    runs-on: ubuntu-latest
    if: github.ref == 'refs/heads/main'
    steps:
      - name: Deploy to Vercel
        uses: amondnet/vercel-action@v20
        with:
          vercel-token: ${{ secrets.VERCEL_TOKEN }}
          vercel-org-id: ${{ secrets.ORG_ID }}
          vercel-project-id: ${{ secrets.PROJECT_ID }}
```

### Configuration Management

```typescript
// config/deployment.config.ts
export const deploymentConfig = {
  environments: {
    development: {
      url: 'https://dev.yourschool.com',
      apiUrl: 'https://api-dev.yourschool.com',
      features: { /* dev feature flags */ }
    },
    staging: {
      url: 'https://staging.yourschool.com',
      apiUrl: 'https://api-staging.yourschool.com',
      features: { /* staging feature flags */ }
    },
    production: {
      url: 'https://app.yourschool.com',
      apiUrl: 'https://api.yourschool.com',
      features: { /* production feature flags */ }
    }
  }
};
```"#;

const MONITORING_IMPLEMENTATION: &str = r#"### Monitoring Integration

```typescript
// lib/monitoring/setup.ts
import * as Sentry from '@sentry/nextjs';
import LogRocket from 'logrocket';
import Plausible from 'plausible-tracker';

// Sentry Configuration
Sentry.init({
  dsn: process.env.NEXT_PUBLIC_SENTRY_DSN,
  environment: process.env.NEXT_PUBLIC_ENVIRONMENT,
  tracesSampleRate: 1.0,
  beforeSend(event) {
    // Filter sensitive data
    return event;
  }
});

// LogRocket Configuration
if (typeof window !== 'undefined' && process.env.NODE_ENV === 'production') {
  LogRocket.init(process.env.NEXT_PUBLIC_LOGROCKET_APP_ID);
  LogRocket.getSessionURL(sessionURL => {
    Sentry.configureScope(scope => {
      scope.setExtra('sessionURL', sessionURL);
    });
  });
}

// Plausible Configuration
const plausible = Plausible({
  domain: 'yourschool.com',
  apiHost: 'https://plausible.io'
});

export { plausible };
```

### Error Tracking

```typescript
// lib/monitoring/error-tracking.ts
export class ErrorTracker {
  static captureError(error: Error, context?: Record<string, any>) {
    Sentry.captureException(error, {
      contexts: { custom: context }
    });
  }

  static captureMessage(message: string, level: 'info' | 'warning' | 'error') {
    Sentry.captureMessage(message, level);
  }

  static setUser(user: { id: string; email: string; role: string }) {
    Sentry.setUser(user);
    LogRocket.identify(user.id, {
      email: user.email,
      role: user.role
    });
  }
}
```"#;

const SECURITY_IMPLEMENTATION: &str = r#"### Security Configuration

```typescript
// middleware.ts
import { NextResponse } from 'next/server';
import type { NextRequest } from 'next/server';

export function middleware(request: NextRequest) {
  const response = NextResponse.next();

  // Security Headers
  response.headers.set('X-DNS-Prefetch-Control', 'on');
  response.headers.set('Strict-Transport-Security', 'max-age=31536000; includeSubDomains');
  response.headers.set('X-Frame-Options', 'SAMEORIGIN');
  response.headers.set('X-Content-Type-Options', 'nosniff');
  response.headers.set('Referrer-Policy', 'origin-when-cross-origin');
  response.headers.set('Permissions-Policy', 'camera=(), microphone=(), geolocation=()');

  // CSP Header
  response.headers.set(
    'Content-Security-Policy',
    "default-src 'self'; script-src 'self' 'unsafe-eval' 'unsafe-inline'; style-src 'self' 'unsafe-inline';"
  );

  return response;
}

export const config = {
  matcher: [
    '/((?!api|_next/static|_next/image|favicon.ico).*)',
  ],
};
```

### Rate Limiting

```typescript
// lib/security/rate-limit.ts
import { Ratelimit } from '@upstash/ratelimit';
import { Redis } from '@upstash/redis';

const redis = new Redis({
  url: process.env.UPSTASH_REDIS_URL!,
  token: process.env.UPSTASH_REDIS_TOKEN!,
});

export const rateLimiter = new Ratelimit({
  redis,
  limiter: Ratelimit.slidingWindow(10, '10 s'),
  analytics: true,
});

export async function checkRateLimit(identifier: string) {
  const { success, limit, reset, remaining } = await rateLimiter.limit(identifier);

  return {
    success,
    limit,
    remaining,
    reset: new Date(reset)
  };
}
```"#;

const DOCUMENTATION_IMPLEMENTATION: &str = r#"### Documentation Structure

```markdown
# Documentation Hierarchy

## 1. User Documentation
   ├── Getting Started
   │   ├── Quick Start Guide
   │   ├── Video Tutorials
   │   └── FAQ
   ├── Portal Guides (25+ Portals)
   │   ├── Super Admin
   │   ├── Platform Finance
   │   ├── Platform Support
   │   ├── Tenant Admin
   │   └── ... (all 25+ portals)
   ├── Features Documentation
   │   └── 400+ Feature Guides
   └── Troubleshooting

## 2. Developer Documentation
   ├── Architecture Overview
   ├── Setup Guide
   ├── API Documentation
   ├── Component Library
   ├── Database Schema
   └── Contribution Guide

## 3. Operations Documentation
   ├── Deployment Procedures
   ├── Monitoring Setup
   ├── Incident Response
   ├── Backup & Recovery
   └── Troubleshooting Runbooks
```

### Documentation Tools

```typescript
// docusaurus.config.js
module.exports = {
  title: 'School Management System',
  tagline: 'Complete Documentation',
  url: 'https://docs.yourschool.com',
  baseUrl: '/',
  onBrokenLinks: 'throw',
  onBrokenMarkdownLinks: 'warn',
  favicon: 'img/favicon.ico',

  themeConfig: {
    navbar: {
      title: 'SMS Docs',
      items: [
        {
          type: 'doc',
          docId: 'intro',
          position: 'left',
          label: 'User Guide',
        },
        {
          type: 'doc',
          docId: 'api/intro',
          position: 'left',
          label: 'API',
        },
        {
          href: 'https://github.com/yourorg/sms',
          label: 'GitHub',
          position: 'right',
        },
      ],
    },
  },
};
```"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Group};
    use crate::record::SpecRecord;

    fn fixture(group_key: &str) -> (Catalog, Group) {
        let mut cat = Catalog::new("Deployment & Maintenance");
        cat.phase.number = Some(11);
        cat.dependencies = vec!["All Previous Phases (1-10)".into()];
        let mut group = Group::new(group_key);
        let mut r = SpecRecord::new("501", "GitHub Actions CI/CD Pipeline");
        r.priority = "CRITICAL".into();
        r.time = "12 hours".into();
        r.description = "Automated build, test and deploy.".into();
        r.features = (1..=10).map(|i| format!("Feature {i}")).collect();
        r.components = vec![
            "github_workflows".into(),
            "environment_configs".into(),
            "deployment_scripts".into(),
            "rollback_procedures".into(),
            "notification_hooks".into(),
        ];
        group.specs.push(r);
        (cat, group)
    }

    #[test]
    fn area_from_group_key() {
        assert_eq!(DeploymentArea::from_group_key("01-CICD-PIPELINE"), DeploymentArea::Cicd);
        assert_eq!(DeploymentArea::from_group_key("02-MONITORING"), DeploymentArea::Monitoring);
        assert_eq!(DeploymentArea::from_group_key("03-security"), DeploymentArea::Security);
        assert_eq!(DeploymentArea::from_group_key("04-DOCUMENTATION"), DeploymentArea::Documentation);
    }

    #[test]
    fn components_take_runs_of_three_features() {
        let (_, group) = fixture("01-CICD-PIPELINE");
        let r = &group.specs[0];
        let out = component_details(&r.components, &r.features);
        assert!(out.starts_with("#### 1. Github Workflows\n\n**Purpose**: Feature 1"));
        assert!(out.contains("#### 2. Environment Configs\n\n**Purpose**: Feature 2\n\n**Key Features**:\n- Feature 4\n- Feature 5\n- Feature 6"));
        assert!(out.contains("#### 3. Deployment Scripts"));
        assert_eq!(out.matches("**Implementation Priority**: Critical").count(), 2);
        assert_eq!(out.matches("**Implementation Priority**: High").count(), 2);
        assert_eq!(out.matches("**Implementation Priority**: Medium").count(), 1);
        // fifth component runs past the feature list
        assert!(out.contains("#### 5. Notification Hooks\n\n**Purpose**: Feature 5\n\n**Key Features**:\n- Core functionality as described above"));
    }

    #[test]
    fn few_features_are_shared() {
        let features = vec!["A".to_string(), "B".to_string()];
        let components = vec!["one".to_string(), "two".to_string(), "three".to_string()];
        let out = component_details(&components, &features);
        assert_eq!(out.matches("- A\n- B").count(), 3);
        assert!(out.contains("**Purpose**: Core component implementation"));
    }

    #[test]
    fn cicd_document() {
        let (cat, group) = fixture("01-CICD-PIPELINE");
        let doc = render(&SpecContext::new(&cat, &group, &group.specs[0])).unwrap();
        assert!(doc.starts_with("# SPEC-501: GitHub Actions CI/CD Pipeline\n"));
        assert!(doc.contains("**Category**: Cicd Pipeline  "));
        assert!(doc.contains("**Dependencies**: All Previous Phases (1-10)  "));
        assert!(doc.contains("- [ ] Feature 8\n- [ ] Production-ready implementation verified"));
        assert!(!doc.contains("- [ ] Feature 9"));
        assert!(doc.contains("vercel-token: ${{ secrets.VERCEL_TOKEN }}"));
        assert!(doc.contains("- **Build Time**: < 5 minutes"));
        assert!(doc.ends_with("**END OF SPECIFICATION**\n"));
    }

    #[test]
    fn missing_components_derive_one_from_slug() {
        let (cat, mut group) = fixture("04-DOCUMENTATION");
        group.specs[0].components.clear();
        let doc = render(&SpecContext::new(&cat, &group, &group.specs[0])).unwrap();
        assert!(doc.contains("#### 1. Github Actions Ci Cd Pipeline\n"));
        assert!(!doc.contains("#### 2."));
    }

    #[test]
    fn documentation_is_the_fallback_area() {
        let (cat, group) = fixture("04-DOCUMENTATION");
        let doc = render(&SpecContext::new(&cat, &group, &group.specs[0])).unwrap();
        assert!(doc.contains("# Documentation Hierarchy"));
        assert!(doc.contains("- Broken links detected (Email)"));
    }
}
