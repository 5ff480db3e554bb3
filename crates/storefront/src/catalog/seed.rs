//! Built-in demo catalog data.

use rust_decimal::Decimal;

use shelf_core::{CategoryId, ProductId};

use crate::models::{Category, Product};

struct SeedCategory {
    id: u32,
    name: &'static str,
    description: &'static str,
    image: &'static str,
}

struct SeedProduct {
    id: u32,
    name: &'static str,
    description: &'static str,
    /// Whole riyals.
    price: i64,
    old_price: Option<i64>,
    stock: u32,
    rating: f32,
    category: u32,
    is_new: bool,
    is_featured: bool,
}

const CATEGORIES: &[SeedCategory] = &[
    SeedCategory {
        id: 1,
        name: "Electronics",
        description: "Latest electronic gadgets and devices",
        image: "/images/categories/electronics.jpg",
    },
    SeedCategory {
        id: 2,
        name: "Mobile Phones",
        description: "Smartphones and mobile accessories",
        image: "/images/categories/mobile-phones.jpg",
    },
    SeedCategory {
        id: 3,
        name: "Laptops",
        description: "Powerful laptops for work and play",
        image: "/images/categories/laptops.jpg",
    },
    SeedCategory {
        id: 4,
        name: "Home Appliances",
        description: "Modern appliances for your home",
        image: "/images/categories/home-appliances.jpg",
    },
    SeedCategory {
        id: 5,
        name: "Fashion",
        description: "Trendy clothes and apparel",
        image: "/images/categories/fashion.jpg",
    },
    SeedCategory {
        id: 6,
        name: "Shoes",
        description: "Comfortable and stylish footwear",
        image: "/images/categories/shoes.jpg",
    },
    SeedCategory {
        id: 7,
        name: "Accessories",
        description: "Fashion accessories and jewelry",
        image: "/images/categories/accessories.jpg",
    },
    SeedCategory {
        id: 8,
        name: "Books",
        description: "Books for every reader",
        image: "/images/categories/books.jpg",
    },
    SeedCategory {
        id: 9,
        name: "Gaming",
        description: "Gaming consoles and accessories",
        image: "/images/categories/gaming.jpg",
    },
    SeedCategory {
        id: 10,
        name: "Sports",
        description: "Sports equipment and gear",
        image: "/images/categories/sports.jpg",
    },
    SeedCategory {
        id: 11,
        name: "Beauty",
        description: "Beauty and personal care products",
        image: "/images/categories/beauty.jpg",
    },
    SeedCategory {
        id: 12,
        name: "Grocery",
        description: "Fresh groceries and essentials",
        image: "/images/categories/grocery.jpg",
    },
];

const PRODUCTS: &[SeedProduct] = &[
    SeedProduct {
        id: 1,
        name: "Wireless Noise-Cancelling Headphones",
        description: "Over-ear headphones with 30-hour battery and adaptive noise cancelling",
        price: 899,
        old_price: Some(1099),
        stock: 25,
        rating: 4.7,
        category: 1,
        is_new: false,
        is_featured: true,
    },
    SeedProduct {
        id: 2,
        name: "Smart Watch Series 5",
        description: "Fitness tracking, heart-rate monitoring, and notifications on your wrist",
        price: 1299,
        old_price: None,
        stock: 15,
        rating: 4.5,
        category: 1,
        is_new: true,
        is_featured: true,
    },
    SeedProduct {
        id: 3,
        name: "Portable Bluetooth Speaker",
        description: "Waterproof speaker with deep bass and 12-hour playback",
        price: 249,
        old_price: Some(299),
        stock: 40,
        rating: 4.3,
        category: 1,
        is_new: false,
        is_featured: false,
    },
    SeedProduct {
        id: 4,
        name: "Galaxy Ultra Smartphone",
        description: "6.8-inch display, 200MP camera, and all-day battery",
        price: 4499,
        old_price: Some(4999),
        stock: 12,
        rating: 4.8,
        category: 2,
        is_new: true,
        is_featured: true,
    },
    SeedProduct {
        id: 5,
        name: "Budget Android Phone",
        description: "Dependable everyday smartphone with dual SIM",
        price: 699,
        old_price: None,
        stock: 60,
        rating: 4.0,
        category: 2,
        is_new: false,
        is_featured: false,
    },
    SeedProduct {
        id: 6,
        name: "Fast Charging Power Bank",
        description: "20000mAh power bank for phones and tablets",
        price: 149,
        old_price: None,
        stock: 100,
        rating: 4.4,
        category: 2,
        is_new: false,
        is_featured: false,
    },
    SeedProduct {
        id: 7,
        name: "UltraBook Pro 14",
        description: "Thin and light laptop with 16GB RAM and 1TB SSD",
        price: 5999,
        old_price: Some(6499),
        stock: 8,
        rating: 4.6,
        category: 3,
        is_new: true,
        is_featured: true,
    },
    SeedProduct {
        id: 8,
        name: "Student Laptop 15",
        description: "Affordable 15-inch laptop for study and browsing",
        price: 2299,
        old_price: None,
        stock: 20,
        rating: 4.1,
        category: 3,
        is_new: false,
        is_featured: false,
    },
    SeedProduct {
        id: 9,
        name: "Gaming Laptop RTX",
        description: "High refresh display and dedicated graphics for gaming",
        price: 7499,
        old_price: None,
        stock: 5,
        rating: 4.7,
        category: 3,
        is_new: false,
        is_featured: true,
    },
    SeedProduct {
        id: 10,
        name: "Espresso Machine",
        description: "15-bar pump espresso maker with milk frother",
        price: 1199,
        old_price: Some(1399),
        stock: 10,
        rating: 4.4,
        category: 4,
        is_new: false,
        is_featured: false,
    },
    SeedProduct {
        id: 11,
        name: "Robot Vacuum Cleaner",
        description: "Self-charging vacuum with app control and mapping",
        price: 1599,
        old_price: None,
        stock: 7,
        rating: 4.2,
        category: 4,
        is_new: true,
        is_featured: false,
    },
    SeedProduct {
        id: 12,
        name: "Cotton Crew T-Shirt",
        description: "Breathable everyday tee in organic cotton",
        price: 59,
        old_price: None,
        stock: 200,
        rating: 4.0,
        category: 5,
        is_new: false,
        is_featured: false,
    },
    SeedProduct {
        id: 13,
        name: "Denim Jacket",
        description: "Classic fit denim jacket with button front",
        price: 229,
        old_price: Some(279),
        stock: 30,
        rating: 4.3,
        category: 5,
        is_new: true,
        is_featured: false,
    },
    SeedProduct {
        id: 14,
        name: "Running Shoes",
        description: "Lightweight cushioned running shoes for daily training",
        price: 399,
        old_price: Some(459),
        stock: 35,
        rating: 4.6,
        category: 6,
        is_new: false,
        is_featured: true,
    },
    SeedProduct {
        id: 15,
        name: "Leather Loafers",
        description: "Hand-stitched leather loafers",
        price: 349,
        old_price: None,
        stock: 3,
        rating: 4.1,
        category: 6,
        is_new: false,
        is_featured: false,
    },
    SeedProduct {
        id: 16,
        name: "Stainless Steel Watch",
        description: "Analog watch with sapphire glass and steel bracelet",
        price: 799,
        old_price: None,
        stock: 9,
        rating: 4.5,
        category: 7,
        is_new: false,
        is_featured: false,
    },
    SeedProduct {
        id: 17,
        name: "Leather Wallet",
        description: "Slim bifold wallet with RFID blocking",
        price: 119,
        old_price: Some(149),
        stock: 0,
        rating: 3.9,
        category: 7,
        is_new: false,
        is_featured: false,
    },
    SeedProduct {
        id: 18,
        name: "The Pragmatic Programmer",
        description: "Classic book on the craft of software development",
        price: 159,
        old_price: None,
        stock: 50,
        rating: 4.9,
        category: 8,
        is_new: false,
        is_featured: true,
    },
    SeedProduct {
        id: 19,
        name: "Illustrated Cookbook",
        description: "One hundred home recipes with step-by-step photos",
        price: 89,
        old_price: None,
        stock: 22,
        rating: 4.2,
        category: 8,
        is_new: true,
        is_featured: false,
    },
    SeedProduct {
        id: 20,
        name: "Game Console",
        description: "Next-generation console with 1TB storage",
        price: 2099,
        old_price: Some(2299),
        stock: 6,
        rating: 4.8,
        category: 9,
        is_new: false,
        is_featured: true,
    },
    SeedProduct {
        id: 21,
        name: "Wireless Controller",
        description: "Ergonomic controller with haptic feedback",
        price: 279,
        old_price: None,
        stock: 45,
        rating: 4.5,
        category: 9,
        is_new: false,
        is_featured: false,
    },
    SeedProduct {
        id: 22,
        name: "Yoga Mat",
        description: "Non-slip 6mm yoga mat with carry strap",
        price: 99,
        old_price: None,
        stock: 80,
        rating: 4.3,
        category: 10,
        is_new: false,
        is_featured: false,
    },
    SeedProduct {
        id: 23,
        name: "Adjustable Dumbbells",
        description: "Pair of dumbbells adjustable from 2 to 24 kg",
        price: 899,
        old_price: Some(999),
        stock: 4,
        rating: 4.6,
        category: 10,
        is_new: true,
        is_featured: false,
    },
    SeedProduct {
        id: 24,
        name: "Vitamin C Serum",
        description: "Brightening face serum for daily use",
        price: 129,
        old_price: None,
        stock: 70,
        rating: 4.2,
        category: 11,
        is_new: true,
        is_featured: false,
    },
    SeedProduct {
        id: 25,
        name: "Premium Arabic Coffee",
        description: "Lightly roasted beans with cardamom, 500g",
        price: 65,
        old_price: None,
        stock: 150,
        rating: 4.7,
        category: 12,
        is_new: false,
        is_featured: true,
    },
    SeedProduct {
        id: 26,
        name: "Medjool Dates Box",
        description: "Premium large dates, 1kg gift box",
        price: 85,
        old_price: Some(99),
        stock: 90,
        rating: 4.8,
        category: 12,
        is_new: false,
        is_featured: false,
    },
];

pub(super) fn categories() -> Vec<Category> {
    CATEGORIES
        .iter()
        .map(|c| Category {
            id: CategoryId::new(c.id),
            name: c.name.to_owned(),
            description: c.description.to_owned(),
            image: c.image.to_owned(),
        })
        .collect()
}

pub(super) fn products() -> Vec<Product> {
    PRODUCTS
        .iter()
        .map(|p| Product {
            id: ProductId::new(p.id),
            name: p.name.to_owned(),
            description: p.description.to_owned(),
            price: Decimal::from(p.price),
            old_price: p.old_price.map(Decimal::from),
            stock: p.stock,
            rating: p.rating,
            category_id: CategoryId::new(p.category),
            is_new: p.is_new,
            is_featured: p.is_featured,
            image: format!("/images/products/{}.jpg", p.id),
        })
        .collect()
}
