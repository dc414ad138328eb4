//! Product records and their specification tables.

use crate::ids::ProductId;
use crate::money::{self, Money};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A product in the mock catalog.
///
/// Records are read-only: nothing in the storefront mutates a product after
/// the fixture is parsed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price.
    #[serde(with = "money::decimal")]
    pub price: Money,
    /// Long-form description.
    pub description: String,
    /// Top-level category label.
    pub category: String,
    /// Subcategory label.
    pub subcategory: String,
    /// Units on hand. Zero means unavailable.
    pub stock: u32,
    /// Gallery image references, in display order.
    #[serde(default)]
    pub images: Vec<String>,
    /// Attribute table shown on the specifications tab.
    #[serde(default)]
    pub specifications: Specifications,
}

impl Product {
    /// Format the price as a dollar string.
    pub fn price_display(&self) -> String {
        self.price.display()
    }

    /// Check if the product can be bought.
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Stock line shown on the overview tab.
    pub fn stock_label(&self) -> String {
        if self.is_in_stock() {
            format!("In Stock ({} units)", self.stock)
        } else {
            "Out of Stock".to_string()
        }
    }

    /// Breadcrumb-style category line.
    pub fn category_label(&self) -> String {
        format!("Category: {} > {}", self.category, self.subcategory)
    }

}

/// A scalar specification value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpecScalar {
    Bool(bool),
    Integer(i64),
    Number(f64),
    Text(String),
}

impl fmt::Display for SpecScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecScalar::Bool(b) => write!(f, "{}", b),
            SpecScalar::Integer(n) => write!(f, "{}", n),
            SpecScalar::Number(n) => write!(f, "{}", n),
            SpecScalar::Text(s) => f.write_str(s),
        }
    }
}

/// A specification value: one scalar or an ordered list of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpecValue {
    List(Vec<SpecScalar>),
    Scalar(SpecScalar),
}

impl SpecValue {
    pub fn text(value: impl Into<String>) -> Self {
        SpecValue::Scalar(SpecScalar::Text(value.into()))
    }
}

/// Lists render comma-joined; scalars render in their natural text form.
impl fmt::Display for SpecValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecValue::Scalar(s) => s.fmt(f),
            SpecValue::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    item.fmt(f)?;
                }
                Ok(())
            }
        }
    }
}

/// One row of a specification table.
#[derive(Debug, Clone, PartialEq)]
pub struct Specification {
    /// Raw attribute key (e.g. `battery_life`).
    pub key: String,
    pub value: SpecValue,
}

impl Specification {
    /// Attribute key as shown to shoppers: underscores become spaces, upper-cased.
    pub fn label(&self) -> String {
        self.key.replace('_', " ").to_uppercase()
    }

    /// Value as shown to shoppers.
    pub fn display_value(&self) -> String {
        self.value.to_string()
    }
}

/// Ordered specification table.
///
/// Serialized as a JSON object; rows keep the order they appear in the fixture.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Specifications(Vec<Specification>);

impl Specifications {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row, replacing any existing row with the same key in place.
    pub fn insert(&mut self, key: impl Into<String>, value: SpecValue) {
        let key = key.into();
        match self.0.iter_mut().find(|s| s.key == key) {
            Some(existing) => existing.value = value,
            None => self.0.push(Specification { key, value }),
        }
    }

    pub fn get(&self, key: &str) -> Option<&SpecValue> {
        self.0.iter().find(|s| s.key == key).map(|s| &s.value)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Specification> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a Specifications {
    type Item = &'a Specification;
    type IntoIter = std::slice::Iter<'a, Specification>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K: Into<String>> FromIterator<(K, SpecValue)> for Specifications {
    fn from_iter<T: IntoIterator<Item = (K, SpecValue)>>(iter: T) -> Self {
        let mut specs = Specifications::new();
        for (key, value) in iter {
            specs.insert(key, value);
        }
        specs
    }
}

impl Serialize for Specifications {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for spec in &self.0 {
            map.serialize_entry(&spec.key, &spec.value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Specifications {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SpecificationsVisitor;

        impl<'de> Visitor<'de> for SpecificationsVisitor {
            type Value = Specifications;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of specification names to values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut specs = Specifications::new();
                while let Some((key, value)) = access.next_entry::<String, SpecValue>()? {
                    specs.insert(key, value);
                }
                Ok(specs)
            }
        }

        deserializer.deserialize_map(SpecificationsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laptop() -> Product {
        serde_json::from_str(
            r#"{
                "id": "P001",
                "name": "UltraBook Pro 14",
                "price": 1299.99,
                "description": "Thin and light.",
                "category": "Electronics",
                "subcategory": "Laptops",
                "stock": 15,
                "images": ["a.jpg", "b.jpg", "c.jpg"],
                "specifications": {
                    "screen_size": "14 inches",
                    "battery_life": "10h",
                    "ports": ["USB-C", "HDMI"],
                    "weight_kg": 1.2,
                    "cores": 8,
                    "backlit_keyboard": true
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_product_from_fixture_json() {
        let p = laptop();
        assert_eq!(p.id.as_str(), "P001");
        assert_eq!(p.price.amount_cents, 129999);
        assert_eq!(p.price_display(), "$1299.99");
        assert_eq!(p.images.len(), 3);
        assert_eq!(p.specifications.len(), 6);
    }

    #[test]
    fn test_specifications_keep_fixture_order() {
        let p = laptop();
        let keys: Vec<&str> = p.specifications.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(
            keys,
            vec!["screen_size", "battery_life", "ports", "weight_kg", "cores", "backlit_keyboard"]
        );
    }

    #[test]
    fn test_specification_labels_and_values() {
        let specs: Specifications = vec![
            ("battery_life", SpecValue::text("10h")),
            (
                "ports",
                SpecValue::List(vec![
                    SpecScalar::Text("USB-C".to_string()),
                    SpecScalar::Text("HDMI".to_string()),
                ]),
            ),
        ]
        .into_iter()
        .collect();

        let rows: Vec<(String, String)> = specs
            .iter()
            .map(|s| (s.label(), s.display_value()))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("BATTERY LIFE".to_string(), "10h".to_string()),
                ("PORTS".to_string(), "USB-C, HDMI".to_string()),
            ]
        );
    }

    #[test]
    fn test_scalar_natural_text_form() {
        let p = laptop();
        assert_eq!(p.specifications.get("weight_kg").unwrap().to_string(), "1.2");
        assert_eq!(p.specifications.get("cores").unwrap().to_string(), "8");
        assert_eq!(p.specifications.get("backlit_keyboard").unwrap().to_string(), "true");
    }

    #[test]
    fn test_stock_and_category_labels() {
        let mut p = laptop();
        assert_eq!(p.stock_label(), "In Stock (15 units)");
        assert_eq!(p.category_label(), "Category: Electronics > Laptops");

        p.stock = 0;
        assert!(!p.is_in_stock());
        assert_eq!(p.stock_label(), "Out of Stock");
    }

    #[test]
    fn test_specifications_serialize_as_object() {
        let p = laptop();
        let value = serde_json::to_value(&p.specifications).unwrap();
        assert_eq!(value["ports"], serde_json::json!(["USB-C", "HDMI"]));
        assert_eq!(value["battery_life"], serde_json::json!("10h"));
    }

    #[test]
    fn test_missing_optional_collections_default_to_empty() {
        let p: Product = serde_json::from_str(
            r#"{"id": "X", "name": "n", "price": 1, "description": "d",
                "category": "c", "subcategory": "s", "stock": 0}"#,
        )
        .unwrap();
        assert!(p.images.is_empty());
        assert!(p.specifications.is_empty());
    }
}
