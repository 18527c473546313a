//! The demonstration catalog seeded at startup.
//!
//! The store is volatile, so every process start begins from this fixed set
//! of categories, products, and reviews. Disable with
//! `PEPPERCORN_SEED_DEMO=false` to start empty.

use rust_decimal_macros::dec;

use peppercorn_core::types::{Badge, ProductId, ReviewRating};
use peppercorn_core::{Seed, SeedCategory, SeedProduct, SeedReview};

/// Build the demonstration catalog.
#[must_use]
pub fn demo_catalog() -> Seed {
    // Review scores are literals in range; construction cannot fail.
    let five = ReviewRating::new(5).expect("5 is a valid score");
    let four = ReviewRating::new(4).expect("4 is a valid score");

    Seed {
        categories: vec![
            category("Electronics"),
            category("Clothing"),
            category("Home"),
            category("Books"),
        ],
        products: vec![
            SeedProduct {
                name: "Premium Wireless Headphones".to_string(),
                description: "High-quality wireless headphones with noise cancellation and premium sound quality.".to_string(),
                price: dec!(299.00),
                original_price: Some(dec!(399.00)),
                category: "Electronics".to_string(),
                image_url: "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?auto=format&fit=crop&w=800&h=800".to_string(),
                rating: dec!(4.0),
                review_count: 127,
                badge: Some(Badge::BestSeller),
                is_favorite: false,
            },
            SeedProduct {
                name: "Smart Watch Pro".to_string(),
                description: "Advanced fitness tracking with heart rate monitoring and GPS functionality.".to_string(),
                price: dec!(459.00),
                original_price: None,
                category: "Electronics".to_string(),
                image_url: "https://images.unsplash.com/photo-1523275335684-37898b6baf30?auto=format&fit=crop&w=800&h=800".to_string(),
                rating: dec!(5.0),
                review_count: 89,
                badge: Some(Badge::New),
                is_favorite: false,
            },
            SeedProduct {
                name: "Ultra-thin Laptop".to_string(),
                description: "Powerful performance in an ultra-portable design. Perfect for professionals on the go.".to_string(),
                price: dec!(1299.00),
                original_price: Some(dec!(1499.00)),
                category: "Electronics".to_string(),
                image_url: "https://images.unsplash.com/photo-1496181133206-80ce9b88a853?auto=format&fit=crop&w=800&h=800".to_string(),
                rating: dec!(4.2),
                review_count: 203,
                badge: Some(Badge::Limited),
                is_favorite: false,
            },
            SeedProduct {
                name: "Smartphone X".to_string(),
                description: "Latest flagship smartphone with advanced camera system and lightning-fast performance.".to_string(),
                price: dec!(899.00),
                original_price: None,
                category: "Electronics".to_string(),
                image_url: "https://images.unsplash.com/photo-1511707171634-5f897ff02aa9?auto=format&fit=crop&w=800&h=800".to_string(),
                rating: dec!(4.8),
                review_count: 456,
                badge: None,
                is_favorite: true,
            },
            SeedProduct {
                name: "Leather Handbag".to_string(),
                description: "Handcrafted genuine leather handbag with premium quality and timeless design.".to_string(),
                price: dec!(189.00),
                original_price: None,
                category: "Clothing".to_string(),
                image_url: "https://images.unsplash.com/photo-1553062407-98eeb64c6a62?auto=format&fit=crop&w=800&h=800".to_string(),
                rating: dec!(4.3),
                review_count: 76,
                badge: None,
                is_favorite: false,
            },
            SeedProduct {
                name: "Vintage Camera".to_string(),
                description: "Classic vintage camera perfect for film photography enthusiasts and collectors.".to_string(),
                price: dec!(349.00),
                original_price: None,
                category: "Electronics".to_string(),
                image_url: "https://images.unsplash.com/photo-1606983340126-99ab4feaa64a?auto=format&fit=crop&w=800&h=800".to_string(),
                rating: dec!(4.9),
                review_count: 34,
                badge: Some(Badge::Vintage),
                is_favorite: false,
            },
        ],
        reviews: vec![
            SeedReview {
                product_id: ProductId::new(1),
                user_name: "John Doe".to_string(),
                rating: five,
                comment: "Great product! Really satisfied with the quality and performance.".to_string(),
            },
            SeedReview {
                product_id: ProductId::new(1),
                user_name: "Jane Smith".to_string(),
                rating: four,
                comment: "Good headphones, but could be more comfortable for long sessions.".to_string(),
            },
        ],
    }
}

fn category(name: &str) -> SeedCategory {
    SeedCategory {
        name: name.to_string(),
        is_active: true,
    }
}
