//! Tool descriptors and categories.

use serde::{Serialize, Serializer};
use std::fmt;

use crate::identifiers::ToolSlug;

/// Site name appended to every tool page title.
pub const SITE_NAME: &str = "Toolbox Online";

/// Category labels shown on the home page.
///
/// `Ord` follows the display label so a `BTreeMap<Category, _>` iterates
/// categories alphabetically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    AiSeo,
    Calculators,
    Converters,
    DesignTools,
    DeveloperTools,
    Generators,
    MarketingTools,
    MediaTools,
    NetworkTools,
    Productivity,
    Security,
    SeoTools,
    TextUtilities,
    ValidationTools,
}

impl Category {
    /// Every category, in label order
    pub const ALL: [Category; 14] = [
        Category::AiSeo,
        Category::Calculators,
        Category::Converters,
        Category::DesignTools,
        Category::DeveloperTools,
        Category::Generators,
        Category::MarketingTools,
        Category::MediaTools,
        Category::NetworkTools,
        Category::Productivity,
        Category::Security,
        Category::SeoTools,
        Category::TextUtilities,
        Category::ValidationTools,
    ];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Category::AiSeo => "AI & SEO",
            Category::Calculators => "Calculators",
            Category::Converters => "Converters",
            Category::DesignTools => "Design Tools",
            Category::DeveloperTools => "Developer Tools",
            Category::Generators => "Generators",
            Category::MarketingTools => "Marketing Tools",
            Category::MediaTools => "Media Tools",
            Category::NetworkTools => "Network Tools",
            Category::Productivity => "Productivity",
            Category::Security => "Security",
            Category::SeoTools => "SEO Tools",
            Category::TextUtilities => "Text Utilities",
            Category::ValidationTools => "Validation Tools",
        }
    }

    /// Look a category up by label, ignoring ASCII case
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(label))
    }

    fn sort_key(&self) -> String {
        self.label().to_lowercase()
    }
}

impl PartialOrd for Category {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Category {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Static metadata describing one tool.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDescriptor {
    pub slug: ToolSlug,
    pub name: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_description: Option<&'static str>,
    pub keywords: &'static [&'static str],
    pub category: Category,
    pub icon: &'static str,
}

impl ToolDescriptor {
    /// `<title>` of the tool page
    pub fn page_title(&self) -> String {
        format!("{} - {}", self.name, SITE_NAME)
    }

    /// Meta description of the tool page
    pub fn page_description(&self) -> &'static str {
        self.long_description.unwrap_or(self.description)
    }

    /// Case-insensitive match against name, descriptions and keywords.
    ///
    /// `needle` must already be lowercased; an empty needle matches.
    pub fn matches(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        let hit = |text: &str| text.to_lowercase().contains(needle);
        hit(self.name)
            || hit(self.description)
            || self.long_description.is_some_and(hit)
            || self.keywords.iter().any(|k| hit(k))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor() -> ToolDescriptor {
        ToolDescriptor {
            slug: ToolSlug::new_unchecked("word-counter"),
            name: "Word Counter",
            description: "Count words.",
            long_description: Some("Count words, characters and paragraphs."),
            keywords: &["text analysis"],
            category: Category::TextUtilities,
            icon: "sigma-square",
        }
    }

    #[test]
    fn categories_sort_by_label() {
        let mut sorted = Category::ALL.to_vec();
        sorted.sort();
        let labels: Vec<_> = sorted.iter().map(Category::label).collect();
        let mut expected = labels.clone();
        expected.sort_by_key(|l| l.to_lowercase());
        assert_eq!(labels, expected);
        assert_eq!(sorted.first(), Some(&Category::AiSeo));
        assert_eq!(sorted.last(), Some(&Category::ValidationTools));
    }

    #[test]
    fn category_from_label() {
        assert_eq!(Category::from_label("seo tools"), Some(Category::SeoTools));
        assert_eq!(Category::from_label(" AI & SEO "), Some(Category::AiSeo));
        assert_eq!(Category::from_label("Games"), None);
    }

    #[test]
    fn page_metadata() {
        let mut d = descriptor();
        assert_eq!(d.page_title(), "Word Counter - Toolbox Online");
        assert_eq!(d.page_description(), "Count words, characters and paragraphs.");
        d.long_description = None;
        assert_eq!(d.page_description(), "Count words.");
    }

    #[test]
    fn search_matching() {
        let d = descriptor();
        assert!(d.matches(""));
        assert!(d.matches("word"));
        assert!(d.matches("paragraphs"));
        assert!(d.matches("analysis"));
        assert!(!d.matches("hash"));
    }

    #[test]
    fn descriptor_serializes_category_label() {
        let json = serde_json::to_value(descriptor()).unwrap();
        assert_eq!(json["category"], "Text Utilities");
        assert_eq!(json["slug"], "word-counter");
    }
}
