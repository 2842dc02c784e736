//! The built-in product catalog.

use atelier_core::{CategoryId, Price, ProductId};

use crate::models::{Category, Product};

struct Seed {
    id: &'static str,
    name: &'static str,
    cents: i64,
    description: &'static str,
    image: &'static str,
    category: &'static str,
    featured: bool,
    is_new: bool,
    sizes: &'static [&'static str],
}

const CATEGORIES: &[(&str, &str, &str)] = &[
    ("1", "Men", "Men's clothing collection"),
    ("2", "Women", "Women's clothing collection"),
    ("3", "Accessories", "Accessories collection"),
];

const IMAGE_PARAMS: &str = "?ixlib=rb-4.0.3&auto=format&fit=crop&q=80";

const PRODUCTS: &[Seed] = &[
    Seed {
        id: "1",
        name: "Minimal Wool Coat",
        cents: 28_999,
        description: "A premium wool coat with a minimal design. Perfect for layering in colder weather while maintaining a sophisticated look.",
        image: "https://images.unsplash.com/photo-1591047139829-d91aecb6caea",
        category: "Men",
        featured: true,
        is_new: false,
        sizes: &["S", "M", "L", "XL"],
    },
    Seed {
        id: "2",
        name: "Relaxed Linen Shirt",
        cents: 8_999,
        description: "A lightweight, breathable linen shirt with a relaxed fit. Ideal for warm days and casual occasions.",
        image: "https://images.unsplash.com/photo-1598033129183-c4f50c736f10",
        category: "Men",
        featured: false,
        is_new: false,
        sizes: &["S", "M", "L", "XL", "XXL"],
    },
    Seed {
        id: "3",
        name: "Structured Blazer",
        cents: 19_999,
        description: "A tailored blazer with structured shoulders and a sleek fit. Versatile enough for both formal and smart-casual settings.",
        image: "https://images.unsplash.com/photo-1611312449408-fcece27cdbb7",
        category: "Women",
        featured: true,
        is_new: false,
        sizes: &["XS", "S", "M", "L"],
    },
    Seed {
        id: "4",
        name: "Cashmere Sweater",
        cents: 14_999,
        description: "A luxurious cashmere sweater with a soft, comfortable feel. Provides warmth without bulk.",
        image: "https://images.unsplash.com/photo-1576566588028-4147f3842f27",
        category: "Women",
        featured: false,
        is_new: true,
        sizes: &["XS", "S", "M", "L", "XL"],
    },
    Seed {
        id: "5",
        name: "Slim Fit Jeans",
        cents: 7_999,
        description: "Modern slim fit jeans with a slight stretch for comfort. A versatile addition to any wardrobe.",
        image: "https://images.unsplash.com/photo-1541099649105-f69ad21f3246",
        category: "Men",
        featured: false,
        is_new: false,
        sizes: &["30", "32", "34", "36", "38"],
    },
    Seed {
        id: "6",
        name: "Silk Scarf",
        cents: 5_999,
        description: "A luxurious silk scarf with a beautiful print. Adds elegance to any outfit.",
        image: "https://images.unsplash.com/photo-1584030373081-f37b7bb4fa8e",
        category: "Accessories",
        featured: true,
        is_new: false,
        sizes: &["One Size"],
    },
    Seed {
        id: "7",
        name: "Leather Tote Bag",
        cents: 12_999,
        description: "A high-quality leather tote bag with ample space for everyday essentials. Designed to be both functional and stylish.",
        image: "https://images.unsplash.com/photo-1594223274512-ad4803739b7c",
        category: "Accessories",
        featured: false,
        is_new: false,
        sizes: &["One Size"],
    },
    Seed {
        id: "8",
        name: "Pleated Midi Skirt",
        cents: 8_999,
        description: "An elegant pleated midi skirt with a fluid, flattering silhouette. A versatile piece for any wardrobe.",
        image: "https://images.unsplash.com/photo-1573908763425-ff9dd1f69ca3",
        category: "Women",
        featured: false,
        is_new: true,
        sizes: &["XS", "S", "M", "L"],
    },
];

pub(super) fn categories() -> Vec<Category> {
    CATEGORIES
        .iter()
        .map(|(id, name, description)| Category {
            id: CategoryId::new(*id),
            name: (*name).to_string(),
            description: Some((*description).to_string()),
        })
        .collect()
}

pub(super) fn products() -> Vec<Product> {
    PRODUCTS
        .iter()
        .map(|seed| Product {
            id: ProductId::new(seed.id),
            name: seed.name.to_string(),
            price: Price::from_cents(seed.cents),
            description: seed.description.to_string(),
            image: format!("{}{IMAGE_PARAMS}", seed.image),
            category: seed.category.to_string(),
            featured: seed.featured,
            is_new: seed.is_new,
            sizes: seed.sizes.iter().map(|s| (*s).to_string()).collect(),
            colors: None,
        })
        .collect()
}
