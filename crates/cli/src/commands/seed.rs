//! Seed the catalog with sample products.
//!
//! The API never seeds on startup; this command is the explicit way to get
//! a populated catalog for local development. Every record goes through
//! `ProductStore::add`, so id assignment and code uniqueness are enforced
//! the same way as for API writes.

use std::path::Path;

use rust_decimal::Decimal;
use tracing::info;

use verdura_api::store::{ProductDraft, ProductStore, StoreError};
use verdura_core::Price;

struct SampleProduct {
    title: &'static str,
    description: &'static str,
    code: &'static str,
    price: i64,
    stock: u32,
    category: &'static str,
}

const SAMPLE_PRODUCTS: &[SampleProduct] = &[
    SampleProduct {
        title: "Roma Tomatoes",
        description: "Firm plum tomatoes, sold per kilo",
        code: "abc123",
        price: 200,
        stock: 25,
        category: "vegetables",
    },
    SampleProduct {
        title: "Baby Spinach",
        description: "Washed baby spinach leaves, 250g bag",
        code: "cbd3211",
        price: 100,
        stock: 50,
        category: "greens",
    },
    SampleProduct {
        title: "Extra Virgin Olive Oil",
        description: "Cold-pressed olive oil, 1L bottle",
        code: "cbd3212",
        price: 1000,
        stock: 20,
        category: "pantry",
    },
    SampleProduct {
        title: "Red Bell Peppers",
        description: "Sweet red peppers, pack of three",
        code: "cbd3213",
        price: 300,
        stock: 10,
        category: "vegetables",
    },
    SampleProduct {
        title: "Sourdough Loaf",
        description: "Stone-baked sourdough, 800g",
        code: "cbd3214",
        price: 500,
        stock: 40,
        category: "bakery",
    },
    SampleProduct {
        title: "Manchego Wedge",
        description: "Aged sheep's milk cheese, 300g",
        code: "cbd3215",
        price: 1100,
        stock: 30,
        category: "dairy",
    },
    SampleProduct {
        title: "Wildflower Honey",
        description: "Raw unfiltered honey, 500g jar",
        code: "cbd3216",
        price: 900,
        stock: 55,
        category: "pantry",
    },
    SampleProduct {
        title: "Arborio Rice",
        description: "Risotto rice, 1kg bag",
        code: "cbd3217",
        price: 700,
        stock: 75,
        category: "pantry",
    },
    SampleProduct {
        title: "Lemons",
        description: "Unwaxed lemons, net of six",
        code: "cbd3218",
        price: 200,
        stock: 60,
        category: "fruit",
    },
    SampleProduct {
        title: "Chickpeas",
        description: "Dried chickpeas, 1kg bag",
        code: "cbd3219",
        price: 800,
        stock: 80,
        category: "pantry",
    },
];

impl SampleProduct {
    fn draft(&self) -> Result<ProductDraft, Box<dyn std::error::Error>> {
        let price = Price::parse(Decimal::new(self.price, 0))?;
        Ok(ProductDraft {
            title: Some(self.title.to_string()),
            description: Some(self.description.to_string()),
            code: Some(self.code.to_string()),
            price: Some(price),
            stock: Some(self.stock),
            category: Some(self.category.to_string()),
            status: None,
            thumbnails: None,
        })
    }
}

/// Seed sample products into the catalog under `data_dir`.
///
/// Refuses to touch a non-empty catalog unless `force` is set. With
/// `force`, samples whose code is already present are skipped rather than
/// duplicated.
///
/// # Errors
///
/// Returns an error if the catalog is non-empty without `force`, or if a
/// store operation fails for any reason other than a duplicate code.
pub fn run(data_dir: &Path, force: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = ProductStore::open(data_dir.join("products.json"));

    let existing = store.list(None).len();
    if existing > 0 && !force {
        return Err(format!(
            "catalog already has {existing} products (use --force to seed anyway)"
        )
        .into());
    }

    let mut created = 0_usize;
    for sample in SAMPLE_PRODUCTS {
        match store.add(sample.draft()?) {
            Ok(product) => {
                info!(id = %product.id, code = %product.code, "created sample product");
                created += 1;
            }
            Err(StoreError::DuplicateCode(code)) => {
                info!(%code, "sample code already present, skipping");
            }
            Err(err) => return Err(err.into()),
        }
    }

    info!("seeded {created} products into {}", data_dir.display());
    Ok(())
}
