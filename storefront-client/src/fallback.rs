//! Built-in fallback catalog
//!
//! Served when the catalog backend is unreachable so the storefront
//! stays browsable. Filtering, sorting, and pagination mirror what the
//! backend would have done, applied locally over the static set.

use crate::catalog::ProductFilters;
use shared::models::{parse_display_price, Category, Product};
use shared::response::PaginatedResponse;

const DEFAULT_PAGE_LIMIT: i64 = 20;

fn product(
    id: i64,
    name: &str,
    price: &str,
    original_price: Option<&str>,
    image: &str,
    category: &str,
    rating: f64,
    reviews: i64,
    is_new: bool,
) -> Product {
    Product {
        id: id.into(),
        name: name.to_string(),
        price: price.to_string(),
        original_price: original_price.map(str::to_string),
        image: Some(image.to_string()),
        category: category.to_string(),
        rating,
        reviews,
        is_new: is_new.then_some(true),
        description: None,
        short_description: None,
        sku: None,
        inventory_count: None,
        tags: None,
        specifications: None,
        is_active: None,
        is_featured: None,
        slug: None,
    }
}

/// The static product set.
pub fn sample_products() -> Vec<Product> {
    vec![
        product(
            101,
            "Apple iPhone 15 Pro Max (256GB)",
            "KSh 215,000",
            Some("KSh 230,000"),
            "/images/products/apple-iphone-15-pro-max-(256gb).png",
            "Smartphones",
            4.9,
            342,
            true,
        ),
        product(
            102,
            "Samsung Galaxy S24 Ultra",
            "KSh 198,000",
            None,
            "/images/products/samsung-galaxy-s24-ultra.png",
            "Smartphones",
            4.8,
            156,
            false,
        ),
        product(
            201,
            "MacBook Air 15\" M3 Chip",
            "KSh 185,000",
            None,
            "/images/products/macbook-air-15_-m3-chip.png",
            "Computers",
            4.9,
            89,
            false,
        ),
        product(
            202,
            "HP Spectre x360 Laptop",
            "KSh 145,000",
            Some("KSh 165,000"),
            "/images/products/hp-spectre-x360-laptop.png",
            "Computers",
            4.6,
            45,
            false,
        ),
        product(
            301,
            "PlayStation 5 Console (Slim)",
            "KSh 75,000",
            None,
            "/images/products/playstation-5-console-(slim).png",
            "Gaming",
            4.9,
            1250,
            false,
        ),
        product(
            11,
            "Wireless Gaming Mouse Pro",
            "KSh 5,900",
            Some("KSh 7,500"),
            "/images/products/wireless-gaming-mouse-pro.png",
            "Gaming",
            4.6,
            201,
            false,
        ),
        product(
            401,
            "LG C3 55\" OLED evo 4K TV",
            "KSh 189,000",
            Some("KSh 210,000"),
            "/images/products/lg-c3-55_-oled-evo-4k-tv.png",
            "Televisions",
            4.8,
            67,
            false,
        ),
        product(
            402,
            "Samsung 65\" Neo QLED 4K",
            "KSh 245,000",
            None,
            "/images/products/samsung-65_-neo-qled-4k.png",
            "Televisions",
            4.7,
            42,
            false,
        ),
        product(
            501,
            "TP-Link Archer AX55 Wi-Fi 6 Router",
            "KSh 12,500",
            None,
            "/images/products/tp-link-archer-ax55-wi-fi-6-router.png",
            "Networking",
            4.5,
            112,
            false,
        ),
        product(
            601,
            "Anker 737 Power Bank",
            "KSh 18,500",
            None,
            "/images/products/anker-737-power-bank.png",
            "Accessories",
            4.8,
            230,
            false,
        ),
        product(
            1,
            "Sony WH-1000XM5 Wireless Headphones",
            "KSh 42,500",
            Some("KSh 48,000"),
            "/images/products/sony-wh-1000xm5-wireless-headphones.png",
            "Accessories",
            4.8,
            124,
            true,
        ),
        product(
            3,
            "Genuine Leather Crossbody Bag",
            "KSh 6,200",
            Some("KSh 8,500"),
            "https://images.unsplash.com/photo-1548036328-c9fa89d128fa?w=800&q=80",
            "Fashion",
            4.5,
            45,
            false,
        ),
        product(
            5,
            "Hydro Flask Wide Mouth",
            "KSh 4,500",
            None,
            "https://images.unsplash.com/photo-1602143407151-7111542de6e8?w=800&q=80",
            "Home",
            4.8,
            567,
            false,
        ),
        product(
            6,
            "Lululemon Yoga Mat 5mm",
            "KSh 8,200",
            None,
            "https://images.unsplash.com/photo-1601925260368-ae2f83cf8b7f?w=800&q=80",
            "Sports",
            4.6,
            78,
            false,
        ),
    ]
}

/// The static category set.
pub fn sample_categories() -> Vec<Category> {
    let category = |id: &str, name: &str, slug: &str, description: &str, sort_order, featured| Category {
        id: id.to_string(),
        name: name.to_string(),
        slug: slug.to_string(),
        description: Some(description.to_string()),
        parent_id: None,
        image_url: None,
        icon: None,
        sort_order,
        is_active: true,
        is_featured: featured,
        product_count: 0,
    };

    vec![
        category(
            "1",
            "Smartphones",
            "smartphones",
            "Latest smartphones and mobile devices",
            1,
            true,
        ),
        category(
            "2",
            "Computers",
            "computers",
            "Laptops, desktops, and computing devices",
            2,
            true,
        ),
        category(
            "3",
            "Gaming",
            "gaming",
            "Gaming consoles, accessories, and equipment",
            3,
            false,
        ),
        category(
            "4",
            "Accessories",
            "accessories",
            "Various tech accessories and gadgets",
            4,
            false,
        ),
    ]
}

/// Fallback product listing: the static set with the request's
/// filtering, price sorting, and pagination applied locally.
pub fn product_page(filters: &ProductFilters) -> PaginatedResponse<Product> {
    let mut filtered = sample_products();

    if let Some(category) = filters.category.as_deref() {
        if category != "All" {
            filtered.retain(|p| p.category == category);
        }
    }

    if let Some(search) = filters.search.as_deref() {
        let query = search.to_lowercase();
        filtered.retain(|p| {
            p.name.to_lowercase().contains(&query) || p.category.to_lowercase().contains(&query)
        });
    }

    if filters.featured {
        // The static set has no featured flag; "new" stands in for it
        filtered.retain(|p| p.is_new == Some(true));
    }

    match filters.sort.as_deref() {
        Some("price_asc") => filtered.sort_by(|a, b| {
            parse_display_price(&a.price).total_cmp(&parse_display_price(&b.price))
        }),
        Some("price_desc") => filtered.sort_by(|a, b| {
            parse_display_price(&b.price).total_cmp(&parse_display_price(&a.price))
        }),
        _ => {}
    }

    let page = filters.page.unwrap_or(1).max(1);
    let limit = filters.limit.unwrap_or(DEFAULT_PAGE_LIMIT).max(1);
    let total_docs = filtered.len() as i64;

    let start = ((page - 1) * limit) as usize;
    let docs: Vec<Product> = filtered
        .into_iter()
        .skip(start)
        .take(limit as usize)
        .collect();

    PaginatedResponse::single_page(docs, page, limit, total_docs)
}

/// Fallback category listing.
pub fn category_list(featured_only: bool) -> Vec<Category> {
    let mut categories = sample_categories();
    if featured_only {
        categories.retain(|c| c.is_featured);
    }
    categories
}
