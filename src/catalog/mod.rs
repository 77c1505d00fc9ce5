mod config;

pub use config::CatalogConfig;

use slotmap::SlotMap;

use crate::error::{CatalogError, Result};
use crate::fractals::{
    BoxFractal, CCurve, Canopy, Fractal, HTree, KochCurve, PythagorasTree, SierpinskiTriangle,
};
use crate::model::Model;

slotmap::new_key_type! {
    /// Unique identifier for a model in the catalog.
    pub struct ModelId;
}

/// An ordered collection of pre-built models with a cursor selecting the
/// active one.
///
/// Models are never edited in place: changing depth or family means moving
/// the cursor to a different, already built model.
#[derive(Debug, Default)]
pub struct ModelCatalog {
    models: SlotMap<ModelId, Model>,
    order: Vec<ModelId>,
    cursor: usize,
}

impl ModelCatalog {
    /// Creates a new, empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds every model described by `config`, in catalog order.
    ///
    /// # Errors
    ///
    /// Returns an error if a shape parameter in `config` is invalid.
    pub fn from_config(config: &CatalogConfig) -> Result<Self> {
        let mut fractals: Vec<Fractal> = Vec::with_capacity(config.model_count());

        for n in config.canopy_depths.clone() {
            let spread = config.canopy_base_spread + f64::from(n);
            fractals.push(Canopy::new(spread, n)?.into());
        }
        for n in config.koch_depths.clone() {
            fractals.push(KochCurve::new(n).into());
        }
        for n in config.h_tree_depths.clone() {
            fractals.push(HTree::new(n).into());
        }
        for n in config.sierpinski_depths.clone() {
            fractals.push(SierpinskiTriangle::new(n).into());
        }
        for n in config.box_depths.clone() {
            fractals.push(BoxFractal::new(n).into());
        }
        for n in config.c_curve_depths.clone() {
            fractals.push(CCurve::new(n).into());
        }
        let (along, height) = config.pythagoras_ratios;
        for n in config.pythagoras_depths.clone() {
            fractals.push(PythagorasTree::new(along, height, n)?.into());
        }

        let mut catalog = Self::new();
        for fractal in &fractals {
            catalog.insert(fractal.execute());
        }
        tracing::info!(models = catalog.len(), "model catalog built");
        Ok(catalog)
    }

    /// Appends a model to the end of the catalog and returns its ID.
    pub fn insert(&mut self, model: Model) -> ModelId {
        let id = self.models.insert(model);
        self.order.push(id);
        id
    }

    /// Returns a reference to the model, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the model is not in the catalog.
    pub fn get(&self, id: ModelId) -> Result<&Model> {
        self.models
            .get(id)
            .ok_or_else(|| CatalogError::ModelNotFound.into())
    }

    /// Returns the number of models.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the catalog holds no models.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns the ID of the model under the cursor.
    #[must_use]
    pub fn current_id(&self) -> Option<ModelId> {
        self.order.get(self.cursor).copied()
    }

    /// Returns the model under the cursor.
    #[must_use]
    pub fn current(&self) -> Option<&Model> {
        self.current_id().and_then(|id| self.models.get(id))
    }

    /// Moves the cursor to the next model, wrapping to the first, and returns it.
    pub fn advance(&mut self) -> Option<&Model> {
        if self.order.is_empty() {
            return None;
        }
        self.cursor = (self.cursor + 1) % self.order.len();
        tracing::trace!(cursor = self.cursor, "catalog cursor advanced");
        self.current()
    }

    /// Moves the cursor to the previous model, wrapping to the last, and returns it.
    pub fn retreat(&mut self) -> Option<&Model> {
        if self.order.is_empty() {
            return None;
        }
        self.cursor = self.cursor.checked_sub(1).unwrap_or(self.order.len() - 1);
        tracing::trace!(cursor = self.cursor, "catalog cursor retreated");
        self.current()
    }

    /// Iterates over the models in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (ModelId, &Model)> {
        self.order
            .iter()
            .filter_map(|&id| self.models.get(id).map(|m| (id, m)))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::ModelBuilder;

    fn names(catalog: &ModelCatalog) -> Vec<String> {
        catalog.iter().map(|(_, m)| m.name().to_owned()).collect()
    }

    #[test]
    fn empty_catalog_has_no_current() {
        let mut catalog = ModelCatalog::new();
        assert!(catalog.is_empty());
        assert!(catalog.current().is_none());
        assert!(catalog.advance().is_none());
        assert!(catalog.retreat().is_none());
    }

    #[test]
    fn shallow_config_builds_in_catalog_order() {
        let catalog = ModelCatalog::from_config(&CatalogConfig::shallow(1)).unwrap();
        assert_eq!(catalog.len(), 14);
        assert_eq!(
            names(&catalog),
            vec![
                "Canopy (n = 0)",
                "Canopy (n = 1)",
                "Koch Curve (n = 0)",
                "Koch Curve (n = 1)",
                "H-Tree (n = 0)",
                "H-Tree (n = 1)",
                "Sierpinski Triangle (n = 0)",
                "Sierpinski Triangle (n = 1)",
                "Box Fractal (n = 0)",
                "Box Fractal (n = 1)",
                "C-Curve (n = 0)",
                "C-Curve (n = 1)",
                "Pythagoras Tree (n = 0)",
                "Pythagoras Tree (n = 1)",
            ]
        );
    }

    #[test]
    fn cursor_wraps_both_ways() {
        let catalog_config = CatalogConfig::shallow(0);
        let mut catalog = ModelCatalog::from_config(&catalog_config).unwrap();
        assert_eq!(catalog.current().unwrap().name(), "Canopy (n = 0)");

        assert_eq!(catalog.retreat().unwrap().name(), "Pythagoras Tree (n = 0)");
        assert_eq!(catalog.advance().unwrap().name(), "Canopy (n = 0)");
        assert_eq!(catalog.advance().unwrap().name(), "Koch Curve (n = 0)");

        for _ in 0..catalog.len() {
            catalog.advance();
        }
        assert_eq!(catalog.current().unwrap().name(), "Koch Curve (n = 0)");
    }

    #[test]
    fn get_by_id() {
        let mut catalog = ModelCatalog::new();
        let id = catalog.insert(ModelBuilder::new("custom").build());
        assert_eq!(catalog.get(id).unwrap().name(), "custom");
        assert_eq!(catalog.current_id(), Some(id));
    }

    #[test]
    fn unknown_id_is_an_error() {
        let mut other = ModelCatalog::new();
        let foreign = other.insert(ModelBuilder::new("elsewhere").build());
        let catalog = ModelCatalog::new();
        assert!(catalog.get(foreign).is_err());
    }

    #[test]
    fn canopy_spread_grows_with_depth() {
        let config = CatalogConfig {
            canopy_depths: 1..=1,
            ..CatalogConfig::shallow(-1)
        };
        let catalog = ModelCatalog::from_config(&config).unwrap();
        assert_eq!(catalog.len(), 1);
        let expected = Canopy::new(31.0, 1).unwrap().execute();
        assert_eq!(catalog.current().unwrap(), &expected);
    }

    #[test]
    fn invalid_ratios_fail_the_build() {
        let config = CatalogConfig {
            pythagoras_ratios: (f64::NAN, 0.45),
            ..CatalogConfig::shallow(0)
        };
        assert!(ModelCatalog::from_config(&config).is_err());
    }
}
