//! Report rendering for inventories and audit summaries.

use figaudit_inventory::{AuditSummary, Category, Inventory, Tier, TokenSystem};

use crate::templates::{
    AuditContext, CountRow, ItemRow, KeyComponentsContext, Section, SummaryContext,
    TemplateEngine, RULE_WIDTH,
};

/// Renders text reports.
#[derive(Default)]
pub struct Reporter {
    templates: TemplateEngine,
}

impl Reporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Per-category counts and the grand total.
    pub fn summary(&self, inventory: &Inventory) -> Result<String, ReportError> {
        let context = SummaryContext {
            rule: rule(),
            rows: Category::REPORT_ORDER
                .into_iter()
                .map(|c| count_row(c.label(), inventory.total(c)))
                .collect(),
            total: inventory.grand_total(),
        };

        self.render("summary.txt", &context)
    }

    /// Item listing for the key categories.
    pub fn key_components(&self, inventory: &Inventory) -> Result<String, ReportError> {
        let sections = Category::KEY
            .into_iter()
            .map(|category| {
                let items = inventory.bucket(category);
                Section {
                    label: category.label().to_string(),
                    count: items.len(),
                    items: items
                        .iter()
                        .map(|item| ItemRow {
                            id: format!("{:>20}", item.id),
                            name: item.name.clone(),
                            variants: if item.variants > 0 {
                                format!(" [{}v]", item.variants)
                            } else {
                                String::new()
                            },
                        })
                        .collect(),
                }
            })
            .collect();

        let context = KeyComponentsContext {
            rule: rule(),
            sections,
        };

        self.render("key_components.txt", &context)
    }

    /// Tier, token system and canonical coverage figures.
    pub fn audit(&self, summary: &AuditSummary) -> Result<String, ReportError> {
        let context = AuditContext {
            rule: rule(),
            elements: summary.elements,
            frames: summary.frames,
            symbols: summary.symbols,
            variants: summary.variants,
            tiers: Tier::ALL
                .into_iter()
                .map(|t| count_row(&format!("Tier {}", t.number()), summary.tier_count(t)))
                .collect(),
            token_systems: TokenSystem::ALL
                .into_iter()
                .map(|s| count_row(s.label(), summary.token_system_count(s)))
                .collect(),
            canonical: summary
                .canonical
                .iter()
                .map(|(c, count)| count_row(c.label(), *count))
                .collect(),
        };

        self.render("audit.txt", &context)
    }

    fn render<C: serde::Serialize>(
        &self,
        template: &str,
        context: &C,
    ) -> Result<String, ReportError> {
        self.templates
            .render(template, context)
            .map_err(|e| ReportError::TemplateError(e.to_string()))
    }
}

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

fn count_row(label: &str, count: usize) -> CountRow {
    CountRow {
        label: label.to_string(),
        count,
    }
}

/// Errors that can occur when rendering a report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Failed to render report: {0}")]
    TemplateError(String),
}
