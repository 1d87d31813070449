use super::category::Category;
use serde::{Deserialize, Serialize};

pub const UNKNOWN_CATEGORY: &str = "Unknown Category";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupation {
    pub id: String,
    pub name: String,
    /// Raw reference as stored (⇔ `occupations.category_id`).
    #[serde(default)]
    pub category_id: Option<String>,
    /// Resolved join; `None` when the reference dangles.
    #[serde(default, rename = "categories")]
    pub category: Option<Category>,
}

impl Occupation {
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: Option<Category>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category_id: category.as_ref().map(|c| c.id.clone()),
            category,
        }
    }

    /// Id of the category only when the join actually resolved it.
    pub fn resolved_category_id(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.id.as_str())
    }

    /// An empty category name counts as unresolved.
    pub fn category_label(&self) -> &str {
        self.category
            .as_ref()
            .map(|c| c.name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or(UNKNOWN_CATEGORY)
    }
}
