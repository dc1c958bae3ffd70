//! Catalog chain factories: category, subcategory, product.
//!
//! Names and descriptions are theme-keyed: a "Smartphones Electronics"
//! subcategory yields phone-like product names, a "Snacks Food" subcategory
//! yields food names, and descriptions get a matching closing line.

use crate::corpus::{self, paragraph, sentence};
use crate::dirty::{corrupt, invalid_label};
use crate::generator::GenContext;
use crate::ids;
use mart_types::{Category, Product, Subcategory};

/// Generate one top-level category.
pub fn category(ctx: &mut GenContext) -> Category {
    let (created_at, deleted_at) = super::deleted_window(ctx);
    let id = ids::entity_id("category", ctx.rng.uuid());

    let clean_name = (*ctx.rng.pick(corpus::CATEGORY_NAMES)).to_string();
    let name = corrupt(&mut ctx.rng, &ctx.dirty, clean_name, |rng| {
        invalid_label(rng, "Category")
    });

    // A broken name never gets a coherent description
    let description = if name.starts_with("Invalid") {
        invalid_label(&mut ctx.rng, "description")
    } else {
        let clean = format!("{} {}", sentence(&mut ctx.rng, 5), category_tail(&name));
        corrupt(&mut ctx.rng, &ctx.dirty, clean, |rng| {
            invalid_label(rng, "description")
        })
    };

    Category {
        id,
        name,
        description,
        created_at,
        deleted_at,
    }
}

/// Generate one subcategory under `category`.
pub fn subcategory(ctx: &mut GenContext, category: &Category) -> Subcategory {
    let (created_at, deleted_at) = super::deleted_window(ctx);
    let id = ids::entity_id("subcategory", ctx.rng.uuid());

    let prefix = *ctx.rng.pick(subcategory_prefixes(&category.name));
    let base = category.name.split(" & ").next().unwrap_or(&category.name);
    let clean_name = format!("{prefix} {base}");
    let name = corrupt(&mut ctx.rng, &ctx.dirty, clean_name, |rng| {
        invalid_label(rng, "Subcategory")
    });

    let description = if name.starts_with("Invalid") {
        invalid_label(&mut ctx.rng, "description")
    } else {
        let clean = format!(
            "{} {}",
            sentence(&mut ctx.rng, 6),
            subcategory_tail(&category.name)
        );
        corrupt(&mut ctx.rng, &ctx.dirty, clean, |rng| {
            invalid_label(rng, "description")
        })
    };

    Subcategory {
        id,
        parent_id: category.id.clone(),
        name,
        description,
        created_at,
        deleted_at,
    }
}

/// Generate one product under `subcategory`.
pub fn product(ctx: &mut GenContext, subcategory: &Subcategory) -> Product {
    let (created_at, deleted_at) = super::deleted_window(ctx);
    let id = ids::entity_id("product", ctx.rng.uuid());

    let clean_name = product_name(ctx, &subcategory.name);
    let name = corrupt(&mut ctx.rng, &ctx.dirty, clean_name, |rng| {
        invalid_label(rng, "Product")
    });

    let description = if name.starts_with("Invalid") {
        invalid_label(&mut ctx.rng, "description")
    } else {
        let clean = format!(
            "{} {}",
            paragraph(&mut ctx.rng, 2),
            product_tail(&subcategory.name)
        );
        corrupt(&mut ctx.rng, &ctx.dirty, clean, |rng| {
            invalid_label(rng, "description")
        })
    };

    Product {
        id,
        name,
        description,
        // Field carries the subcategory id; the column name is wire contract
        category_id: subcategory.id.clone(),
        created_at,
        deleted_at,
    }
}

fn category_tail(name: &str) -> String {
    if name.contains("Electronics") {
        "Perfect for tech enthusiasts.".to_string()
    } else if name.contains("Clothing") {
        "Stylish and comfortable wear.".to_string()
    } else if name.contains("Home") {
        "Essential for modern living.".to_string()
    } else if name.contains("Books") {
        "Expand your knowledge.".to_string()
    } else if name.contains("Sports") {
        "For active lifestyles.".to_string()
    } else if name.contains("Beauty") {
        "Enhance your natural beauty.".to_string()
    } else if name.contains("Toys") {
        "Fun for all ages.".to_string()
    } else if name.contains("Automotive") {
        "Keep your vehicle running smoothly.".to_string()
    } else if name.contains("Garden") {
        "Beautify your outdoor space.".to_string()
    } else if name.contains("Food") {
        "Delicious and nutritious options.".to_string()
    } else {
        format!("High-quality {} products.", name.to_lowercase())
    }
}

fn subcategory_prefixes(category_name: &str) -> &'static [&'static str] {
    if category_name.contains("Electronics") {
        &["Smartphones", "Laptops", "Tablets", "Accessories", "Audio", "Gaming", "Wearables", "Cameras"]
    } else if category_name.contains("Clothing") {
        &["Men's Wear", "Women's Wear", "Kids' Clothing", "Shoes", "Accessories", "Sportswear", "Formal", "Casual"]
    } else if category_name.contains("Home") {
        &["Furniture", "Decor", "Kitchen", "Bathroom", "Bedding", "Lighting", "Storage", "Appliances"]
    } else if category_name.contains("Books") {
        &["Fiction", "Non-Fiction", "Textbooks", "Children's Books", "Biographies", "Science", "History", "Self-Help"]
    } else if category_name.contains("Sports") {
        &["Fitness", "Outdoor", "Team Sports", "Water Sports", "Winter Sports", "Equipment", "Apparel", "Footwear"]
    } else if category_name.contains("Beauty") {
        &["Skincare", "Makeup", "Hair Care", "Fragrance", "Nails", "Tools", "Men's Grooming", "Wellness"]
    } else if category_name.contains("Toys") {
        &["Action Figures", "Dolls", "Educational", "Outdoor", "Building", "Puzzles", "Board Games", "Ride-On"]
    } else if category_name.contains("Automotive") {
        &["Parts", "Accessories", "Tools", "Electronics", "Interior", "Exterior", "Maintenance", "Safety"]
    } else if category_name.contains("Garden") {
        &["Plants", "Tools", "Furniture", "Decor", "Pots", "Seeds", "Irrigation", "Pest Control"]
    } else if category_name.contains("Food") {
        &["Snacks", "Beverages", "Organic", "Bakery", "Dairy", "Meat", "Produce", "Pantry"]
    } else {
        &["Basic", "Advanced", "Premium", "Essential", "Specialty", "Standard", "Deluxe", "Compact"]
    }
}

fn subcategory_tail(category_name: &str) -> String {
    if category_name.contains("Electronics") {
        "Cutting-edge technology for modern needs.".to_string()
    } else if category_name.contains("Clothing") {
        "Stylish and comfortable fashion choices.".to_string()
    } else if category_name.contains("Home") {
        "Enhance your living space.".to_string()
    } else if category_name.contains("Books") {
        "Expand your knowledge and imagination.".to_string()
    } else if category_name.contains("Sports") {
        "Gear up for an active lifestyle.".to_string()
    } else if category_name.contains("Beauty") {
        "Pamper yourself with quality products.".to_string()
    } else if category_name.contains("Toys") {
        "Fun and educational entertainment.".to_string()
    } else if category_name.contains("Automotive") {
        "Keep your vehicle in top condition.".to_string()
    } else if category_name.contains("Garden") {
        "Cultivate a beautiful outdoor environment.".to_string()
    } else if category_name.contains("Food") {
        "Delicious and nutritious options.".to_string()
    } else {
        format!("Quality {} products.", category_name.to_lowercase())
    }
}

fn product_name(ctx: &mut GenContext, subcategory_name: &str) -> String {
    if subcategory_name.contains("Smartphones") {
        let brand = *ctx.rng.pick(&[
            "iPhone", "Samsung Galaxy", "Google Pixel", "OnePlus", "Xiaomi", "Sony Xperia",
            "Motorola", "Nokia",
        ]);
        // Numeric models outnumber the word models two to one
        let model = if ctx.rng.chance(2.0 / 3.0) {
            ctx.rng.int_range(10, 25).to_string()
        } else {
            (*ctx.rng.pick(&["Pro", "Ultra", "Plus", "Max", "Mini"])).to_string()
        };
        let color = *ctx.rng.pick(&[
            "Black", "White", "Blue", "Red", "Green", "Gold", "Silver", "Purple",
        ]);
        format!("{brand} {model} {color}")
    } else if subcategory_name.contains("Laptops") {
        let brand = *ctx.rng.pick(&[
            "MacBook", "Dell XPS", "HP Spectre", "Lenovo ThinkPad", "Asus ROG",
            "Microsoft Surface", "Acer", "Razer",
        ]);
        let size = *ctx.rng.pick(&["13\"", "14\"", "15\"", "16\"", "17\""]);
        let kind = *ctx.rng.pick(&["Pro", "Air", "Book", "Laptop", "Notebook"]);
        format!("{brand} {size} {kind}")
    } else if subcategory_name.contains("Clothing") || subcategory_name.contains("Wear") {
        let style = *ctx.rng.pick(&["Slim", "Regular", "Oversized", "Vintage", "Modern", "Classic"]);
        let material = *ctx.rng.pick(&[
            "Cotton", "Denim", "Wool", "Silk", "Polyester", "Linen", "Leather", "Nylon",
        ]);
        let kind = *ctx.rng.pick(&[
            "T-Shirt", "Jeans", "Dress", "Jacket", "Sweater", "Pants", "Shirt", "Skirt",
            "Hoodie", "Shorts",
        ]);
        format!("{style} {material} {kind}")
    } else if subcategory_name.contains("Books") {
        let topic = *ctx.rng.pick(&[
            "Programming", "History", "Science", "Fiction", "Biography", "Cooking", "Travel",
            "Health", "Business", "Art",
        ]);
        let format = *ctx.rng.pick(&["Hardcover", "Paperback", "eBook", "Audiobook"]);
        format!("The Art of {topic} {format}")
    } else if subcategory_name.contains("Sports") || subcategory_name.contains("Fitness") {
        let brand = *ctx.rng.pick(&[
            "Nike", "Adidas", "Puma", "Under Armour", "Reebok", "New Balance", "Asics", "Wilson",
        ]);
        let item = *ctx.rng.pick(&[
            "Running Shoes", "Yoga Mat", "Dumbbells", "Treadmill", "Basketball", "Tennis Racket",
            "Soccer Ball", "Swim Goggles",
        ]);
        format!("{brand} {item}")
    } else if subcategory_name.contains("Home") || subcategory_name.contains("Furniture") {
        let style = *ctx.rng.pick(&[
            "Modern", "Classic", "Rustic", "Industrial", "Minimalist", "Scandinavian",
        ]);
        let material = *ctx.rng.pick(&["Wood", "Metal", "Fabric", "Leather", "Glass"]);
        let item = *ctx.rng.pick(&[
            "Sofa", "Dining Table", "Chair", "Bed Frame", "Lamp", "Rug", "Cabinet", "Bookshelf",
            "Desk",
        ]);
        format!("{style} {material} {item}")
    } else if subcategory_name.contains("Beauty") || subcategory_name.contains("Skincare") {
        let brand = *ctx.rng.pick(&[
            "MAC", "Maybelline", "L'Oreal", "Clinique", "NARS", "The Ordinary", "Kiehl's",
        ]);
        let item = *ctx.rng.pick(&[
            "Lipstick", "Foundation", "Shampoo", "Moisturizer", "Perfume", "Mascara", "Serum",
        ]);
        format!("{brand} {item}")
    } else if subcategory_name.contains("Toys") {
        let theme = *ctx.rng.pick(&[
            "Superhero", "Princess", "Animal", "Space", "Educational", "Adventure", "Fantasy",
            "Science",
        ]);
        let toy = *ctx.rng.pick(&[
            "Action Figure", "Building Blocks", "Puzzle", "Stuffed Animal", "Board Game",
            "Remote Car", "Doll", "Art Supplies",
        ]);
        format!("{theme} {toy}")
    } else if subcategory_name.contains("Automotive") || subcategory_name.contains("Parts") {
        let brand = *ctx.rng.pick(&[
            "Bosch", "Michelin", "ACDelco", "Denso", "NGK", "Castrol", "Goodyear", "Continental",
        ]);
        let part = *ctx.rng.pick(&[
            "Brake Pads", "Oil Filter", "Tires", "Battery", "Spark Plugs", "Air Filter", "Wipers",
            "Lights",
        ]);
        format!("{brand} {part}")
    } else if subcategory_name.contains("Garden") || subcategory_name.contains("Plants") {
        let brand = *ctx.rng.pick(&[
            "Weber", "Toro", "Black & Decker", "Greenworks", "Miracle-Gro", "Burpee",
        ]);
        let item = *ctx.rng.pick(&[
            "Garden Hose", "Lawn Mower", "Flower Pot", "Garden Tools Set", "Bird Feeder", "Grill",
            "Seeds", "Fertilizer",
        ]);
        format!("{brand} {item}")
    } else if subcategory_name.contains("Food") || subcategory_name.contains("Snacks") {
        let origin = *ctx.rng.pick(&[
            "Italian", "French", "Mexican", "Japanese", "Indian", "Greek", "Spanish", "Thai",
        ]);
        let food = *ctx.rng.pick(&[
            "Organic Apples", "Artisan Bread", "Gourmet Cheese", "Premium Coffee", "Fresh Pasta",
            "Chocolate Bar", "Tea Set", "Spice Mix", "Honey",
        ]);
        format!("{origin} {food}")
    } else {
        let adjective = *ctx.rng.pick(&[
            "Advanced", "Premium", "Deluxe", "Essential", "Professional", "Compact", "Heavy-Duty",
            "Lightweight", "Durable",
        ]);
        let noun = *ctx.rng.pick(&[
            "Tool", "Device", "System", "Kit", "Set", "Unit", "Module", "Component", "Gadget",
        ]);
        format!("{adjective} {noun} {}", ctx.rng.int_range(1000, 9999))
    }
}

fn product_tail(subcategory_name: &str) -> String {
    if subcategory_name.contains("Electronics") {
        "Featuring cutting-edge technology and sleek design.".to_string()
    } else if subcategory_name.contains("Clothing") || subcategory_name.contains("Wear") {
        "Made with high-quality materials for comfort and style.".to_string()
    } else if subcategory_name.contains("Books") {
        "An engaging read that expands your knowledge.".to_string()
    } else if subcategory_name.contains("Sports") {
        "Perfect for athletes and fitness enthusiasts.".to_string()
    } else if subcategory_name.contains("Home") {
        "Enhance your living space with this quality item.".to_string()
    } else if subcategory_name.contains("Beauty") {
        "Professional-grade products for your beauty routine.".to_string()
    } else if subcategory_name.contains("Toys") {
        "Fun and educational entertainment for children.".to_string()
    } else if subcategory_name.contains("Automotive") {
        "Reliable parts for optimal vehicle performance.".to_string()
    } else if subcategory_name.contains("Garden") {
        "Create a beautiful outdoor environment.".to_string()
    } else if subcategory_name.contains("Food") {
        "Delicious and nutritious culinary delights.".to_string()
    } else {
        format!("A premium {} product.", subcategory_name.to_lowercase())
    }
}
