//! Fractalis catalog walker — builds the model catalog and prints one line
//! per model, walking it with the cursor the way a viewer would.
//!
//! Usage:
//! ```text
//! cargo run --example catalog            # full catalog (deep, slow)
//! cargo run --example catalog -- 4       # every family up to depth 4
//! ```

use fractalis::catalog::{CatalogConfig, ModelCatalog};
use fractalis::operations::{BoundingBox, MakePointCloud};

fn main() -> fractalis::Result<()> {
    // Default: WARN for everything, INFO for fractalis.
    // Override with RUST_LOG env var (e.g. RUST_LOG=fractalis=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("catalog=info".parse().unwrap_or_default())
        .add_directive("fractalis=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .map_or_else(CatalogConfig::default, CatalogConfig::shallow);

    let mut catalog = ModelCatalog::from_config(&config)?;

    for _ in 0..catalog.len() {
        if let Some(model) = catalog.current() {
            let aabb = BoundingBox::new(model).execute()?;
            let cloud = MakePointCloud::new(model, 1).execute();
            tracing::info!(
                points = cloud.points().len(),
                width = aabb.extent().x,
                height = aabb.extent().y,
                "{model}"
            );
        }
        catalog.advance();
    }
    Ok(())
}
