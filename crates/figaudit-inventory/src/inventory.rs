//! Categorized component inventory and its JSON artifact.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use figaudit_meta::{Element, ElementKind};

use crate::category::{categorize, Category};

/// An inventory record for one element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Display name
    pub name: String,

    /// Node identifier
    pub id: String,

    /// Frame or symbol
    #[serde(rename = "type")]
    pub kind: ElementKind,

    /// Number of variants found under the element
    pub variants: u32,
}

impl From<&Element> for InventoryItem {
    fn from(element: &Element) -> Self {
        Self {
            name: element.name.clone(),
            id: element.id.clone(),
            kind: element.kind,
            variants: element.variants,
        }
    }
}

/// Elements grouped by category.
///
/// Built once from parsed elements or loaded from an artifact; it exposes no
/// way to change its contents afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    /// One bucket per category, indexed by precedence order
    buckets: [Vec<InventoryItem>; 9],
}

impl Inventory {
    /// Categorize and group elements, keeping source order within a bucket.
    pub fn from_elements(elements: &[Element]) -> Self {
        let mut inventory = Self::default();

        for element in elements {
            let category = categorize(&element.name);
            inventory.buckets[category.index()].push(InventoryItem::from(element));
        }

        inventory
    }

    /// Items assigned to a category.
    pub fn bucket(&self, category: Category) -> &[InventoryItem] {
        &self.buckets[category.index()]
    }

    /// Number of items in a category.
    pub fn total(&self, category: Category) -> usize {
        self.bucket(category).len()
    }

    /// Number of items across all categories.
    pub fn grand_total(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// Iterate over categories and their items in precedence order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[InventoryItem])> {
        Category::ALL.into_iter().map(|c| (c, self.bucket(c)))
    }

    /// Iterate over every item with its category.
    pub fn items(&self) -> impl Iterator<Item = (Category, &InventoryItem)> {
        self.iter()
            .flat_map(|(category, items)| items.iter().map(move |item| (category, item)))
    }

    /// Serialize to the pretty-printed artifact format.
    pub fn to_json(&self) -> Result<String, InventoryError> {
        serde_json::to_string_pretty(self).map_err(|e| InventoryError::Serialize(e.to_string()))
    }

    /// Decode an artifact, checking totals against bucket sizes.
    ///
    /// Empty or absent categories may omit their total, but every
    /// non-empty bucket must declare one.
    pub fn from_json(source: &str) -> Result<Self, InventoryError> {
        let raw: RawInventory =
            serde_json::from_str(source).map_err(|e| InventoryError::InvalidJson(e.to_string()))?;

        let mut inventory = Self::default();
        for (label, items) in raw.categories {
            let category = Category::from_label(&label)
                .ok_or_else(|| InventoryError::UnknownCategory(label.clone()))?;
            inventory.buckets[category.index()] = items;
        }

        for (label, &declared) in &raw.totals {
            let category = Category::from_label(label)
                .ok_or_else(|| InventoryError::UnknownCategory(label.clone()))?;
            let actual = inventory.total(category);
            if declared != actual {
                return Err(InventoryError::TotalsMismatch {
                    category: label.clone(),
                    declared,
                    actual,
                });
            }
        }

        if let Some(category) = Category::ALL
            .into_iter()
            .find(|c| inventory.total(*c) > 0 && !raw.totals.contains_key(c.label()))
        {
            return Err(InventoryError::MissingTotal(category.label().to_string()));
        }

        Ok(inventory)
    }

    /// Write the artifact, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), InventoryError> {
        let json = self.to_json()?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| InventoryError::WriteError(e.to_string()))?;
        }

        fs::write(path, json).map_err(|e| InventoryError::WriteError(e.to_string()))?;
        tracing::debug!(
            "Wrote inventory of {} items to {}",
            self.grand_total(),
            path.display()
        );

        Ok(())
    }

    /// Read an artifact from disk.
    pub fn load(path: &Path) -> Result<Self, InventoryError> {
        let source = fs::read_to_string(path)
            .map_err(|e| InventoryError::ReadError(format!("{}: {}", path.display(), e)))?;

        Self::from_json(&source)
    }
}

impl Serialize for Inventory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("categories", &Buckets(self))?;
        map.serialize_entry("totals", &Totals(self))?;
        map.end()
    }
}

/// `categories` object, keyed by label in precedence order.
struct Buckets<'a>(&'a Inventory);

impl Serialize for Buckets<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(c, items)| (c.label(), items)))
    }
}

/// `totals` object, keyed by label in precedence order.
struct Totals<'a>(&'a Inventory);

impl Serialize for Totals<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(c, items)| (c.label(), items.len())))
    }
}

#[derive(Debug, Deserialize)]
struct RawInventory {
    #[serde(default)]
    categories: HashMap<String, Vec<InventoryItem>>,
    #[serde(default)]
    totals: HashMap<String, usize>,
}

/// Errors that can occur when reading or writing an inventory.
#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("Failed to read inventory: {0}")]
    ReadError(String),

    #[error("Failed to write inventory: {0}")]
    WriteError(String),

    #[error("Failed to serialize inventory: {0}")]
    Serialize(String),

    #[error("Invalid inventory JSON: {0}")]
    InvalidJson(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("No total declared for non-empty category {0}")]
    MissingTotal(String),

    #[error("Total for {category} is {declared} but the bucket holds {actual} items")]
    TotalsMismatch {
        category: String,
        declared: usize,
        actual: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use figaudit_meta::{parse_elements, ParseOptions};
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn element(name: &str, id: &str, kind: ElementKind, variants: u32) -> Element {
        Element {
            name: name.to_string(),
            id: id.to_string(),
            kind,
            self_closing: variants == 0,
            variants,
        }
    }

    fn sample() -> Inventory {
        Inventory::from_elements(&[
            element("Button", "1:1", ElementKind::Frame, 12),
            element("Arrow Left", "1:2", ElementKind::Symbol, 0),
            element("Footer", "1:3", ElementKind::Frame, 2),
            element("Text Input", "1:4", ElementKind::Frame, 6),
            element("Frame 42", "1:5", ElementKind::Frame, 0),
        ])
    }

    #[test]
    fn groups_elements_by_category_in_source_order() {
        let inventory = sample();

        let names: Vec<&str> = inventory
            .bucket(Category::FormControls)
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(names, vec!["Button", "Text Input"]);
        assert_eq!(inventory.total(Category::Icons), 1);
        assert_eq!(inventory.total(Category::Navigation), 1);
        assert_eq!(inventory.total(Category::Other), 1);
        assert_eq!(inventory.total(Category::Media), 0);
    }

    #[test]
    fn totals_sum_to_element_count() {
        let inventory = sample();

        let sum: usize = Category::ALL.iter().map(|c| inventory.total(*c)).sum();

        assert_eq!(sum, 5);
        assert_eq!(inventory.grand_total(), 5);
        assert_eq!(inventory.items().count(), 5);
    }

    #[test]
    fn every_element_lands_in_exactly_one_bucket() {
        let inventory = sample();

        let mut ids: Vec<&str> = inventory.items().map(|(_, i)| i.id.as_str()).collect();
        ids.sort();

        assert_eq!(ids, vec!["1:1", "1:2", "1:3", "1:4", "1:5"]);
    }

    #[test]
    fn empty_input_produces_empty_buckets() {
        let inventory = Inventory::from_elements(&[]);
        let json: serde_json::Value = serde_json::from_str(&inventory.to_json().unwrap()).unwrap();

        assert_eq!(inventory.grand_total(), 0);
        assert_eq!(json["categories"].as_object().unwrap().len(), 9);
        assert_eq!(json["totals"]["Other"], 0);
        assert!(json["categories"]["Icons"].as_array().unwrap().is_empty());
    }

    #[test]
    fn serializes_artifact_shape() {
        let json: serde_json::Value = serde_json::from_str(&sample().to_json().unwrap()).unwrap();

        assert_eq!(
            json["categories"]["Form Controls"][0],
            serde_json::json!({"name": "Button", "id": "1:1", "type": "frame", "variants": 12})
        );
        assert_eq!(json["categories"]["Icons"][0]["type"], "symbol");
        assert_eq!(json["totals"]["Form Controls"], 2);
        assert_eq!(json["totals"]["Brand / Logos"], 0);
    }

    #[test]
    fn reload_reproduces_buckets_and_totals() {
        let inventory = sample();

        let reloaded = Inventory::from_json(&inventory.to_json().unwrap()).unwrap();

        assert_eq!(reloaded, inventory);
        for category in Category::ALL {
            assert_eq!(reloaded.total(category), inventory.total(category));
        }
    }

    #[test]
    fn loads_artifact_with_missing_categories() {
        let source = r#"{
  "categories": {"Navigation": [{"name": "Tabs", "id": "2:1", "type": "frame", "variants": 3}]},
  "totals": {"Navigation": 1}
}"#;

        let inventory = Inventory::from_json(source).unwrap();

        assert_eq!(inventory.total(Category::Navigation), 1);
        assert_eq!(inventory.grand_total(), 1);
    }

    #[test]
    fn rejects_mismatched_totals() {
        let source = r#"{"categories": {"Media": []}, "totals": {"Media": 4}}"#;

        let result = Inventory::from_json(source);

        assert!(matches!(
            result,
            Err(InventoryError::TotalsMismatch { declared: 4, actual: 0, .. })
        ));
    }

    #[test]
    fn rejects_non_empty_bucket_without_total() {
        let source = r#"{
  "categories": {
    "Icons": [{"name": "Plus", "id": "3:1", "type": "symbol", "variants": 0}],
    "Media": []
  },
  "totals": {}
}"#;

        let result = Inventory::from_json(source);

        assert!(matches!(
            result,
            Err(InventoryError::MissingTotal(ref label)) if label == "Icons"
        ));
    }

    #[test]
    fn rejects_unknown_category() {
        let source = r#"{"categories": {"Widgets": []}, "totals": {}}"#;

        let result = Inventory::from_json(source);

        assert!(matches!(result, Err(InventoryError::UnknownCategory(_))));
    }

    #[test]
    fn saves_and_loads_from_disk() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("out").join("inventory.json");
        let inventory = sample();

        inventory.save(&path).unwrap();
        let loaded = Inventory::load(&path).unwrap();

        assert_eq!(loaded, inventory);
    }

    #[test]
    fn parsed_button_frame_is_a_form_control() {
        let text = "  <frame name=\"Button\" id=\"1:1\">\n    <symbol name=\"Icon\" id=\"1:2\"/>\n    <symbol name=\"Icon2\" id=\"1:3\"/>\n";
        let parsed = parse_elements(text, &ParseOptions::default());

        let inventory = Inventory::from_elements(&parsed.elements);

        assert_eq!(
            inventory.bucket(Category::FormControls),
            &[InventoryItem {
                name: "Button".to_string(),
                id: "1:1".to_string(),
                kind: ElementKind::Frame,
                variants: 2,
            }]
        );
        assert_eq!(inventory.grand_total(), 1);
    }
}
