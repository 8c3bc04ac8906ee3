use serde::{Deserialize, Serialize};

/// Nominal-typing tag carried by primitive and literal schemas.
///
/// Brands are metadata for downstream typing. The engine never looks at them;
/// they only have to survive construction and inspection unchanged. The literal
/// form is a two-element array: `["category", "subcategory"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Brand(String, String);

impl Brand {
    pub fn new(category: impl Into<String>, subcategory: impl Into<String>) -> Self {
        Self(category.into(), subcategory.into())
    }

    pub fn category(&self) -> &str {
        &self.0
    }

    pub fn subcategory(&self) -> &str {
        &self.1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_form_is_a_pair() {
        let brand = Brand::new("id", "user");
        let json = serde_json::to_value(&brand).unwrap();
        assert_eq!(json, serde_json::json!(["id", "user"]));

        let back: Brand = serde_json::from_value(json).unwrap();
        assert_eq!(back.category(), "id");
        assert_eq!(back.subcategory(), "user");
    }
}
