//! Category types for the navigation menus.

use crate::ids::{CategoryId, SubcategoryId};
use serde::{Deserialize, Serialize};

/// A top-level category with its ordered subcategories.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Category name.
    pub name: String,
    /// Subcategories, in menu order.
    #[serde(default)]
    pub subcategories: Vec<Subcategory>,
}

/// A leaf entry inside a category menu.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Subcategory {
    pub id: SubcategoryId,
    pub name: String,
}

impl Category {
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            subcategories: Vec::new(),
        }
    }

    /// Append a subcategory (builder style).
    pub fn with_subcategory(
        mut self,
        id: impl Into<SubcategoryId>,
        name: impl Into<String>,
    ) -> Self {
        self.subcategories.push(Subcategory {
            id: id.into(),
            name: name.into(),
        });
        self
    }

    /// DOM id for the menu button, used to label the dropdown.
    pub fn button_id(&self) -> String {
        format!("{}-button", self.name.to_lowercase().replace(' ', "-"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_builder() {
        let cat = Category::new("1", "Electronics")
            .with_subcategory("11", "Smartphones")
            .with_subcategory("12", "Laptops");

        assert_eq!(cat.subcategories.len(), 2);
        assert_eq!(cat.subcategories[1].name, "Laptops");
        assert_eq!(cat.subcategories[0].id, SubcategoryId::new("11"));
    }

    #[test]
    fn test_button_id() {
        let cat = Category::new("3", "Home & Living");
        assert_eq!(cat.button_id(), "home-&-living-button");
    }
}
