//! Template engine for rendering text reports.

use minijinja::Environment;
use serde::Serialize;

/// Width of the `=` rule under report headings.
pub const RULE_WIDTH: usize = 60;

/// A labelled count.
#[derive(Debug, Clone, Serialize)]
pub struct CountRow {
    /// Row label
    pub label: String,
    /// Count
    pub count: usize,
}

/// One item line in the key component listing.
#[derive(Debug, Clone, Serialize)]
pub struct ItemRow {
    /// Identifier right-aligned to 20 columns
    pub id: String,
    /// Display name
    pub name: String,
    /// Variant marker such as ` [12v]`, empty without variants
    pub variants: String,
}

/// A category section of the key component listing.
#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub label: String,
    pub count: usize,
    pub items: Vec<ItemRow>,
}

/// Context for `summary.txt`.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryContext {
    pub rule: String,
    pub rows: Vec<CountRow>,
    pub total: usize,
}

/// Context for `key_components.txt`.
#[derive(Debug, Clone, Serialize)]
pub struct KeyComponentsContext {
    pub rule: String,
    pub sections: Vec<Section>,
}

/// Context for `audit.txt`.
#[derive(Debug, Clone, Serialize)]
pub struct AuditContext {
    pub rule: String,
    pub elements: usize,
    pub frames: usize,
    pub symbols: usize,
    pub variants: u64,
    pub tiers: Vec<CountRow>,
    pub token_systems: Vec<CountRow>,
    pub canonical: Vec<CountRow>,
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the report templates.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);

        env.add_template("summary.txt", SUMMARY_TEMPLATE)
            .expect("Failed to add summary template");

        env.add_template("key_components.txt", KEY_COMPONENTS_TEMPLATE)
            .expect("Failed to add key components template");

        env.add_template("audit.txt", AUDIT_TEMPLATE)
            .expect("Failed to add audit template");

        Self { env }
    }

    /// Render a report using the specified template.
    pub fn render<C: Serialize>(
        &self,
        template: &str,
        context: &C,
    ) -> Result<String, minijinja::Error> {
        self.env.get_template(template)?.render(context)
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const SUMMARY_TEMPLATE: &str = r#"COMPONENT INVENTORY SUMMARY
{{ rule }}
{% for row in rows %}
  {{ row.label }}: {{ row.count }}
{% endfor %}
  TOTAL: {{ total }}
"#;

const KEY_COMPONENTS_TEMPLATE: &str = r#"KEY COMPONENTS (Form Controls + Navigation + Data Display + Feedback)
{{ rule }}
{% for section in sections %}

--- {{ section.label }} ({{ section.count }}) ---
{% for item in section.items %}
  {{ item.id }}  {{ item.name }}{{ item.variants }}
{% endfor %}
{% endfor %}
"#;

const AUDIT_TEMPLATE: &str = r#"AUDIT SUMMARY
{{ rule }}
  Elements: {{ elements }} ({{ frames }} frames + {{ symbols }} symbols)
  Variants: {{ variants }}

  Tiers
{% for row in tiers %}
    {{ row.label }}: {{ row.count }}
{% endfor %}

  Token systems
{% for row in token_systems %}
    {{ row.label }}: {{ row.count }}
{% endfor %}

  Canonical components
{% for row in canonical %}
    {{ row.label }}: {{ row.count }}
{% endfor %}
"#;
