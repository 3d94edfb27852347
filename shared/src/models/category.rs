//! Category Model

use serde::{Deserialize, Serialize};

/// Category entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    pub is_active: bool,
    pub is_featured: bool,
    #[serde(default)]
    pub product_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_wire_names() {
        let json = r#"{
            "id": "1",
            "name": "Smartphones",
            "slug": "smartphones",
            "description": "Latest smartphones and mobile devices",
            "sortOrder": 1,
            "isActive": true,
            "isFeatured": true,
            "productCount": 12
        }"#;

        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.slug, "smartphones");
        assert_eq!(category.sort_order, 1);
        assert!(category.is_featured);
        assert_eq!(category.product_count, 12);
    }
}
