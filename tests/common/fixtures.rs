//! Reusable test content.

/// Mens -> {Jeans, Shoes}, plus a few weighted top-level categories.
#[allow(dead_code)]
pub const CATEGORY_TREE: &str = r#"[
    {
        "id": 9, "name": "Uncategorised", "slug": "uncategorised", "productCount": 4
    },
    {
        "id": 1, "name": "Mens", "slug": "mens", "productCount": 12,
        "description": "Menswear",
        "children": [
            { "id": 2, "name": "Jeans", "slug": "mens-jeans", "parentId": 1, "productCount": 7,
              "description": "Straight and slim denim" },
            { "id": 3, "name": "Shoes", "slug": "mens-shoes", "parentId": 1, "productCount": 5 }
        ]
    },
    { "id": 20, "name": "Retro Finds", "slug": "unknown-slug" },
    { "id": 4, "name": "Womens", "slug": "womens", "productCount": 3 }
]"#;

/// Two vendors, a merge, an update and a no-op removal.
#[allow(dead_code)]
pub const BASKET_SCRIPT: &str = r#"{
    "actions": [
        { "action": "add", "productId": 1, "vendorId": 100, "name": "Denim jacket",
          "price": "45.00", "vendorName": "Thrift Lane" },
        { "action": "add", "productId": 1, "vendorId": 100, "name": "Denim jacket",
          "price": "45.00", "vendorName": "Thrift Lane" },
        { "action": "add", "productId": 2, "vendorId": 200, "name": "Chelsea boots",
          "price": "120.00", "vendorName": "Boot Room", "protectionFeePercentage": "0" },
        { "action": "remove", "productId": 9, "vendorId": 9 },
        { "action": "update", "productId": 2, "vendorId": 200, "quantity": 1 }
    ]
}"#;
