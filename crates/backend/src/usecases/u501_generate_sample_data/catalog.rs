/// A catalog entry before it gets an id and a status.
#[derive(Debug, Clone, Copy)]
pub struct CatalogItem {
    pub name: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub price: f64,
    pub stock: u32,
}

/// Products the dashboard starts with, in id order.
pub const SAMPLE_CATALOG: &[CatalogItem] = &[
    CatalogItem {
        name: "MacBook Pro 16\"",
        category: "Electronics",
        description: "Apple M2 Pro chip, 16GB RAM, 512GB SSD",
        price: 2499.99,
        stock: 15,
    },
    CatalogItem {
        name: "Nike Air Max",
        category: "Clothing",
        description: "Premium comfort and style for everyday wear",
        price: 129.99,
        stock: 45,
    },
    CatalogItem {
        name: "The Psychology of Money",
        category: "Books",
        description: "Timeless lessons on wealth, greed, and happiness",
        price: 19.99,
        stock: 8,
    },
    CatalogItem {
        name: "Smart LED TV 65\"",
        category: "Electronics",
        description: "4K Ultra HD Smart LED TV with HDR",
        price: 899.99,
        stock: 12,
    },
    CatalogItem {
        name: "Levi's 501 Original",
        category: "Clothing",
        description: "Classic straight fit jeans",
        price: 69.99,
        stock: 60,
    },
    CatalogItem {
        name: "Garden Tool Set",
        category: "Home & Garden",
        description: "12-piece gardening tools with storage bag",
        price: 49.99,
        stock: 25,
    },
    CatalogItem {
        name: "Basketball",
        category: "Sports & Outdoors",
        description: "Official size and weight basketball",
        price: 29.99,
        stock: 35,
    },
    CatalogItem {
        name: "LEGO Star Wars Set",
        category: "Toys & Games",
        description: "Millennium Falcon building set, 1000+ pieces",
        price: 159.99,
        stock: 5,
    },
    CatalogItem {
        name: "Wireless Earbuds",
        category: "Electronics",
        description: "True wireless earbuds with noise cancellation",
        price: 199.99,
        stock: 30,
    },
    CatalogItem {
        name: "Yoga Mat",
        category: "Sports & Outdoors",
        description: "Non-slip exercise yoga mat with carrying strap",
        price: 39.99,
        stock: 40,
    },
];
