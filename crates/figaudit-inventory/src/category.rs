//! Keyword-based component categorization.

/// Functional category of a component.
///
/// Variants are declared in matching precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Icons,
    BrandLogos,
    Navigation,
    Feedback,
    FormControls,
    DataDisplay,
    Media,
    Layout,
    Other,
}

/// Ordered decision list. The first rule with a keyword contained in the
/// lower-cased name wins; `Other` is the fallback.
const RULES: &[(Category, &[&str])] = &[
    (
        Category::Icons,
        &[
            ".↪️ icon",
            "icon/",
            "icon ",
            "direction/",
            "system/",
            "action/",
            "objects/",
            "maps/",
            "preference/",
            "education/",
            "like/",
            "calendar/",
            "syringe/",
            "clock/",
            "team/",
            "location/",
            "check /",
            "remix-icons",
            "arrow",
            "caret",
            "pencil",
            "download",
            "confetti",
            "mappin",
            "warningcircle",
            "plus",
        ],
    ),
    (
        Category::BrandLogos,
        &[
            "logo",
            "brand",
            "product logo",
            "alle ",
            "_primary options",
            "_secondary options",
            "_seal options",
            "_logo options",
            "_logotype options",
            "_emblem options",
            "_monogram options",
            "_brand options",
            "_indication options",
            "_default options",
            "latisse",
        ],
    ),
    (
        Category::Navigation,
        &[
            "nav",
            "tab",
            "link",
            "menu",
            "breadcrumb",
            "pagination",
            "header button",
            "footer",
            "sidebar",
            "drawer",
            "top bar",
            "bottom sheet",
        ],
    ),
    (
        Category::Feedback,
        &[
            "alert",
            "tooltip",
            "snackbar",
            "modal",
            "dialog",
            "toast",
            "banner",
            "annotation",
        ],
    ),
    (
        Category::FormControls,
        &[
            "button",
            "input",
            "select",
            "checkbox",
            "toggle",
            "chip",
            "accordion",
            "dropdown",
            "radio",
            "counter badge",
            "counter filter",
            "search",
            "filter",
            "validate",
            "text input",
            "text button",
            "header button",
            "button group",
            "cta",
        ],
    ),
    (
        Category::DataDisplay,
        &[
            "card",
            "badge",
            "tag",
            "avatar",
            "progress",
            "medal",
            "stamp",
            "status",
            "indicator",
            "count",
            "title",
        ],
    ),
    (
        Category::Media,
        &["image", "video", "placeholder", "carousel"],
    ),
    (
        Category::Layout,
        &[
            "container",
            "spacer",
            "slot",
            "view port",
            "section",
            "responsive",
            "grid",
            "xlarge",
            "small",
            "medium",
            "large",
            "marketing",
            "isi",
            "training center",
            "training portal",
            "live events",
        ],
    ),
];

impl Category {
    /// All categories in matching precedence order.
    pub const ALL: [Category; 9] = [
        Category::Icons,
        Category::BrandLogos,
        Category::Navigation,
        Category::Feedback,
        Category::FormControls,
        Category::DataDisplay,
        Category::Media,
        Category::Layout,
        Category::Other,
    ];

    /// Order used by the summary table.
    pub const REPORT_ORDER: [Category; 9] = [
        Category::FormControls,
        Category::Navigation,
        Category::DataDisplay,
        Category::Feedback,
        Category::Layout,
        Category::Media,
        Category::Icons,
        Category::BrandLogos,
        Category::Other,
    ];

    /// Categories listed item by item in the key components report.
    pub const KEY: [Category; 4] = [
        Category::FormControls,
        Category::Navigation,
        Category::DataDisplay,
        Category::Feedback,
    ];

    /// Human-readable label, also used as the JSON key.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Icons => "Icons",
            Self::BrandLogos => "Brand / Logos",
            Self::Navigation => "Navigation",
            Self::Feedback => "Feedback",
            Self::FormControls => "Form Controls",
            Self::DataDisplay => "Data Display",
            Self::Media => "Media",
            Self::Layout => "Layout",
            Self::Other => "Other",
        }
    }

    /// Look up a category by its label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }

    /// Position in precedence order.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Assign a component name to its category.
pub fn categorize(name: &str) -> Category {
    let name = name.to_lowercase();

    RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| name.contains(*kw)))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Other)
}
