use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

// ---------------------------------------------------------------------------
// Sample dataset generator
// ---------------------------------------------------------------------------
//
// Writes the three dashboard CSVs into a target directory (first CLI
// argument, default `.`) so the app is demoable out of the box:
//   guinea_pig_breeds.csv
//   guinea_pig_diet.csv
//   guinea_pig_health.csv

const BREEDS_HEADER: [&str; 5] = [
    "Breed",
    "Average Weight (g)",
    "Coat Type",
    "Grooming Needs",
    "Origin",
];

const BREEDS: [(&str, u32, &str, &str, &str); 8] = [
    ("American", 900, "Smooth", "Low", "South America"),
    ("Abyssinian", 850, "Rosetted", "Medium", "South America"),
    ("Peruvian", 1000, "Long-haired", "High", "South America"),
    ("Silkie", 950, "Long-haired", "High", "United Kingdom"),
    ("Teddy", 900, "Dense & Springy", "Medium", "Canada"),
    ("Texel", 950, "Curly", "High", "United Kingdom"),
    ("Skinny Pig", 800, "Hairless", "Low", "Canada"),
    ("Rex", 850, "Short & Coarse", "Medium", "United Kingdom"),
];

const DIET_HEADER: [&str; 5] = [
    "Food Item",
    "Category",
    "Serving Size (g)",
    "Calcium (mg)",
    "Phosphorus (mg)",
];

const DIET: [(&str, &str, u32, u32, u32); 10] = [
    ("Timothy Hay", "Hay", 100, 400, 200),
    ("Kale", "Vegetable", 30, 45, 28),
    ("Romaine Lettuce", "Vegetable", 50, 17, 15),
    ("Bell Pepper", "Vegetable", 40, 3, 10),
    ("Carrot", "Vegetable", 30, 10, 11),
    ("Cucumber", "Vegetable", 50, 8, 12),
    ("Apple", "Fruit", 40, 2, 4),
    ("Strawberry", "Fruit", 25, 4, 6),
    ("Blueberry", "Fruit", 20, 1, 2),
    ("Guinea Pig Pellets", "Pellets", 30, 240, 150),
];

const HEALTH_HEADER: [&str; 7] = [
    "Breed",
    "Avg_Lifespan_Years",
    "Most_Common_Issue",
    "Dental_Risk",
    "Respiratory_Risk",
    "Skin_Risk",
    "Obesity_Risk",
];

const HEALTH: [(&str, u32, &str, u32, u32, u32, u32); 8] = [
    ("American", 6, "Obesity", 2, 2, 1, 4),
    ("Abyssinian", 6, "Dental disease", 4, 2, 2, 2),
    ("Peruvian", 5, "Skin infections", 2, 2, 5, 2),
    ("Silkie", 6, "Skin infections", 2, 3, 4, 2),
    ("Teddy", 6, "Mites", 3, 2, 4, 3),
    ("Texel", 5, "Respiratory infections", 2, 4, 4, 2),
    ("Skinny Pig", 7, "Skin injuries", 2, 3, 5, 3),
    ("Rex", 6, "Dental disease", 4, 2, 2, 3),
];

fn write_breeds(dir: &Path) -> Result<()> {
    let path = dir.join("guinea_pig_breeds.csv");
    let mut writer = csv::Writer::from_path(&path)
        .with_context(|| format!("creating {}", path.display()))?;
    writer.write_record(BREEDS_HEADER)?;
    for (breed, weight, coat, grooming, origin) in BREEDS {
        writer.write_record([breed, &weight.to_string(), coat, grooming, origin])?;
    }
    writer.flush().context("flushing breeds CSV")?;
    Ok(())
}

fn write_diet(dir: &Path) -> Result<()> {
    let path = dir.join("guinea_pig_diet.csv");
    let mut writer = csv::Writer::from_path(&path)
        .with_context(|| format!("creating {}", path.display()))?;
    writer.write_record(DIET_HEADER)?;
    for (food, category, serving, calcium, phosphorus) in DIET {
        writer.write_record([
            food,
            category,
            &serving.to_string(),
            &calcium.to_string(),
            &phosphorus.to_string(),
        ])?;
    }
    writer.flush().context("flushing diet CSV")?;
    Ok(())
}

fn write_health(dir: &Path) -> Result<()> {
    let path = dir.join("guinea_pig_health.csv");
    let mut writer = csv::Writer::from_path(&path)
        .with_context(|| format!("creating {}", path.display()))?;
    writer.write_record(HEALTH_HEADER)?;
    for (breed, lifespan, issue, dental, respiratory, skin, obesity) in HEALTH {
        writer.write_record([
            breed,
            &lifespan.to_string(),
            issue,
            &dental.to_string(),
            &respiratory.to_string(),
            &skin.to_string(),
            &obesity.to_string(),
        ])?;
    }
    writer.flush().context("flushing health CSV")?;
    Ok(())
}

fn main() -> Result<()> {
    let dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("creating directory {}", dir.display()))?;

    write_breeds(&dir)?;
    write_diet(&dir)?;
    write_health(&dir)?;

    println!(
        "Wrote {} breeds, {} foods, {} health rows to {}",
        BREEDS.len(),
        DIET.len(),
        HEALTH.len(),
        dir.display()
    );
    Ok(())
}
