//! Audit classifications layered on top of the inventory.
//!
//! Each item gets a documentation tier and the token system its styles are
//! expected to use. Both are derived from the item alone plus the configured
//! set of canonical component ids.

use std::collections::HashSet;

use figaudit_meta::ElementKind;

use crate::category::Category;
use crate::inventory::{Inventory, InventoryItem};

/// Documentation depth of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    /// Canonical component, fully documented
    One,
    /// Component set with variants, summarized
    Two,
    /// Everything else, listed only
    Three,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::One, Tier::Two, Tier::Three];

    /// Classify an item.
    pub fn of(item: &InventoryItem, canonical_ids: &HashSet<String>) -> Self {
        if canonical_ids.contains(&item.id) {
            Self::One
        } else if item.variants > 0 {
            Self::Two
        } else {
            Self::Three
        }
    }

    pub fn number(&self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }
}

/// Design-token generation a component is built on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenSystem {
    New,
    Mixed,
    Legacy,
    Unknown,
}

const TOKEN_RULES: &[(TokenSystem, &[&str])] = &[
    (
        TokenSystem::New,
        &[
            "button",
            "text input",
            "accordion",
            "select",
            "badge",
            "action list",
            "link -",
            "checkbox",
            "profile menu",
        ],
    ),
    (
        TokenSystem::Mixed,
        &[
            "tab",
            "chip",
            "modal",
            "navigation",
            "card",
            "training",
            "progress",
            "brand container",
        ],
    ),
    (
        TokenSystem::Legacy,
        &["side nav", "footer", "tabs selector", "live event", "yellow"],
    ),
];

impl TokenSystem {
    pub const ALL: [TokenSystem; 4] = [
        TokenSystem::New,
        TokenSystem::Mixed,
        TokenSystem::Legacy,
        TokenSystem::Unknown,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Mixed => "Mixed",
            Self::Legacy => "Legacy",
            Self::Unknown => "Unknown",
        }
    }
}

/// Classify a component name by token system. First matching rule wins.
pub fn classify_token_system(name: &str) -> TokenSystem {
    let name = name.to_lowercase();

    TOKEN_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| name.contains(*kw)))
        .map(|(system, _)| *system)
        .unwrap_or(TokenSystem::Unknown)
}

/// Aggregate audit figures for an inventory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditSummary {
    /// Number of items
    pub elements: usize,

    /// Items parsed from frames
    pub frames: usize,

    /// Items parsed from symbols
    pub symbols: usize,

    /// Sum of variant counts
    pub variants: u64,

    /// Item counts indexed by tier
    pub tiers: [usize; 3],

    /// Item counts indexed by token system
    pub token_systems: [usize; 4],

    /// Canonical items per key category
    pub canonical: Vec<(Category, usize)>,
}

impl AuditSummary {
    /// Compute the summary for an inventory.
    pub fn from_inventory(inventory: &Inventory, canonical_ids: &HashSet<String>) -> Self {
        let mut summary = Self::default();
        let mut canonical = [0usize; 9];

        for (category, item) in inventory.items() {
            summary.elements += 1;
            match item.kind {
                ElementKind::Frame => summary.frames += 1,
                ElementKind::Symbol => summary.symbols += 1,
            }
            summary.variants += u64::from(item.variants);

            let tier = Tier::of(item, canonical_ids);
            summary.tiers[tier as usize] += 1;
            summary.token_systems[classify_token_system(&item.name) as usize] += 1;

            if tier == Tier::One {
                canonical[category.index()] += 1;
            }
        }

        summary.canonical = Category::KEY
            .into_iter()
            .map(|c| (c, canonical[c.index()]))
            .collect();

        summary
    }

    /// Items in a tier.
    pub fn tier_count(&self, tier: Tier) -> usize {
        self.tiers[tier as usize]
    }

    /// Items on a token system.
    pub fn token_system_count(&self, system: TokenSystem) -> usize {
        self.token_systems[system as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figaudit_meta::Element;
    use pretty_assertions::assert_eq;

    fn item(name: &str, id: &str, variants: u32) -> InventoryItem {
        InventoryItem {
            name: name.to_string(),
            id: id.to_string(),
            kind: ElementKind::Frame,
            variants,
        }
    }

    #[test]
    fn canonical_ids_are_tier_one() {
        let canonical = HashSet::from(["40006598:72259".to_string()]);

        assert_eq!(Tier::of(&item("Button", "40006598:72259", 0), &canonical), Tier::One);
        assert_eq!(Tier::of(&item("Button", "1:1", 4), &canonical), Tier::Two);
        assert_eq!(Tier::of(&item("Divider", "1:2", 0), &canonical), Tier::Three);
        assert_eq!(Tier::Three.number(), 3);
    }

    #[test]
    fn token_system_rules_are_ordered() {
        assert_eq!(classify_token_system("Button"), TokenSystem::New);
        assert_eq!(classify_token_system("Link - Standalone"), TokenSystem::New);
        // "tab" is checked before "side nav"
        assert_eq!(classify_token_system("Side Nav Tabs"), TokenSystem::Mixed);
        assert_eq!(classify_token_system("Side Nav"), TokenSystem::Legacy);
        assert_eq!(classify_token_system("Footer"), TokenSystem::Legacy);
        assert_eq!(classify_token_system("Spacer"), TokenSystem::Unknown);
    }

    #[test]
    fn summarizes_inventory() {
        let elements = vec![
            Element {
                name: "Button".to_string(),
                id: "40006598:72259".to_string(),
                kind: ElementKind::Frame,
                self_closing: false,
                variants: 308,
            },
            Element {
                name: "Card".to_string(),
                id: "2:1".to_string(),
                kind: ElementKind::Frame,
                self_closing: false,
                variants: 5,
            },
            Element {
                name: "Logo".to_string(),
                id: "3:1".to_string(),
                kind: ElementKind::Symbol,
                self_closing: true,
                variants: 0,
            },
        ];
        let inventory = Inventory::from_elements(&elements);
        let canonical = HashSet::from(["40006598:72259".to_string()]);

        let summary = AuditSummary::from_inventory(&inventory, &canonical);

        assert_eq!(summary.elements, 3);
        assert_eq!(summary.frames, 2);
        assert_eq!(summary.symbols, 1);
        assert_eq!(summary.variants, 313);
        assert_eq!(summary.tier_count(Tier::One), 1);
        assert_eq!(summary.tier_count(Tier::Two), 1);
        assert_eq!(summary.tier_count(Tier::Three), 1);
        assert_eq!(summary.token_system_count(TokenSystem::New), 1);
        assert_eq!(summary.token_system_count(TokenSystem::Mixed), 1);
        assert_eq!(summary.token_system_count(TokenSystem::Unknown), 1);
        assert_eq!(
            summary.canonical,
            vec![
                (Category::FormControls, 1),
                (Category::Navigation, 0),
                (Category::DataDisplay, 0),
                (Category::Feedback, 0),
            ]
        );
    }
}
