//! The lunch catalog
//!
//! A fixed table keyed by `(DietaryPreference, FoodType)`. Every pair maps to a
//! non-empty, ordered list of menu items. A catalog is validated once at
//! construction and never mutated afterwards.

use crate::error::CatalogError;
use crate::types::{DietaryPreference, FoodType};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// A single lunch suggestion
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub cuisine: String,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, cuisine: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cuisine: cuisine.into(),
        }
    }
}

/// Nested on-disk shape: diet -> food type -> items
pub type CatalogSections = BTreeMap<DietaryPreference, BTreeMap<FoodType, Vec<MenuItem>>>;

/// Validated, immutable lunch catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CatalogSections", into = "CatalogSections")]
pub struct Catalog {
    sections: CatalogSections,
}

impl TryFrom<CatalogSections> for Catalog {
    type Error = CatalogError;

    fn try_from(sections: CatalogSections) -> std::result::Result<Self, Self::Error> {
        Self::new(sections)
    }
}

impl From<Catalog> for CatalogSections {
    fn from(catalog: Catalog) -> Self {
        catalog.sections
    }
}

impl Catalog {
    /// Build a catalog, checking that every diet/food-type pair is present,
    /// non-empty and free of blank names or cuisines.
    pub fn new(sections: CatalogSections) -> std::result::Result<Self, CatalogError> {
        for &diet in DietaryPreference::all() {
            for &food_type in FoodType::all() {
                let items = sections
                    .get(&diet)
                    .and_then(|by_type| by_type.get(&food_type))
                    .ok_or(CatalogError::MissingSection { diet, food_type })?;

                if items.is_empty() {
                    return Err(CatalogError::EmptySection { diet, food_type });
                }
                for item in items {
                    if item.name.trim().is_empty() {
                        return Err(CatalogError::BlankField {
                            diet,
                            food_type,
                            what: "name",
                        });
                    }
                    if item.cuisine.trim().is_empty() {
                        return Err(CatalogError::BlankField {
                            diet,
                            food_type,
                            what: "cuisine",
                        });
                    }
                }
            }
        }
        Ok(Self { sections })
    }

    /// The built-in catalog, constructed on first use and shared for the
    /// lifetime of the process.
    pub fn builtin() -> &'static Catalog {
        static BUILTIN: OnceLock<Catalog> = OnceLock::new();
        BUILTIN.get_or_init(builtin_catalog)
    }

    /// Load a catalog from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog from {:?}", path.as_ref()))?;

        let catalog: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse catalog JSON in {:?}", path.as_ref()))?;

        tracing::info!(
            path = %path.as_ref().display(),
            items = catalog.len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    /// Save the catalog to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json =
            serde_json::to_string_pretty(self).context("Failed to serialize catalog to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write catalog to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Items for one diet/food-type pair, in catalog order
    pub fn items(&self, diet: DietaryPreference, food_type: FoodType) -> &[MenuItem] {
        self.sections
            .get(&diet)
            .and_then(|by_type| by_type.get(&food_type))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Iterate every section in canonical order
    pub fn sections(&self) -> impl Iterator<Item = (DietaryPreference, FoodType, &[MenuItem])> {
        DietaryPreference::all().iter().flat_map(move |&diet| {
            FoodType::all()
                .iter()
                .map(move |&food_type| (diet, food_type, self.items(diet, food_type)))
        })
    }

    /// Every item in canonical order
    pub fn iter(&self) -> impl Iterator<Item = &MenuItem> {
        self.sections().flat_map(|(_, _, items)| items.iter())
    }

    /// Total number of items
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Distinct cuisines in first-appearance order.
    ///
    /// Recomputed from the table on every call; the order depends only on the
    /// catalog contents, so repeated calls agree.
    pub fn cuisines(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for item in self.iter() {
            if !seen.contains(&item.cuisine.as_str()) {
                seen.push(item.cuisine.as_str());
            }
        }
        seen
    }

    /// Exact membership test against the cuisine set
    pub fn has_cuisine(&self, cuisine: &str) -> bool {
        self.iter().any(|item| item.cuisine == cuisine)
    }

    /// Resolve user input to the catalog spelling of a cuisine (case-insensitive)
    pub fn canonical_cuisine(&self, input: &str) -> Option<&str> {
        let wanted = input.trim();
        self.iter()
            .map(|item| item.cuisine.as_str())
            .find(|cuisine| cuisine.eq_ignore_ascii_case(wanted))
    }
}

fn section(items: &[(&str, &str)]) -> Vec<MenuItem> {
    items
        .iter()
        .map(|(name, cuisine)| MenuItem::new(*name, *cuisine))
        .collect()
}

fn builtin_catalog() -> Catalog {
    use DietaryPreference::{NonVegetarian, Vegan, Vegetarian};
    use FoodType::{Comfort, Healthy};

    let mut sections = CatalogSections::new();

    sections.insert(
        Vegetarian,
        BTreeMap::from([
            (
                Healthy,
                section(&[
                    ("Greek Salad", "Mediterranean"),
                    ("Quinoa Buddha Bowl", "International"),
                    ("Roasted Vegetable Wrap", "International"),
                    ("Lentil Soup", "Mediterranean"),
                    ("Steamed Vegetable Dumplings", "Asian"),
                ]),
            ),
            (
                Comfort,
                section(&[
                    ("Margherita Pizza", "Italian"),
                    ("Mac and Cheese", "American"),
                    ("Paneer Tikka Masala", "Indian"),
                    ("Mushroom Risotto", "Italian"),
                    ("Vegetable Biryani", "Indian"),
                ]),
            ),
        ]),
    );

    sections.insert(
        NonVegetarian,
        BTreeMap::from([
            (
                Healthy,
                section(&[
                    ("Grilled Chicken Salad", "International"),
                    ("Baked Salmon", "International"),
                    ("Turkey Lettuce Wraps", "Asian"),
                    ("Chicken Quinoa Bowl", "International"),
                    ("Tuna Poke Bowl", "Japanese"),
                ]),
            ),
            (
                Comfort,
                section(&[
                    ("Beef Burger", "American"),
                    ("Butter Chicken", "Indian"),
                    ("BBQ Ribs", "American"),
                    ("Chicken Alfredo", "Italian"),
                    ("Fish & Chips", "British"),
                ]),
            ),
        ]),
    );

    sections.insert(
        Vegan,
        BTreeMap::from([
            (
                Healthy,
                section(&[
                    ("Acai Bowl", "International"),
                    ("Chickpea Buddha Bowl", "International"),
                    ("Kale and Quinoa Salad", "International"),
                    ("Raw Veggie Sushi Rolls", "Japanese"),
                    ("Mediterranean Falafel Bowl", "Mediterranean"),
                ]),
            ),
            (
                Comfort,
                section(&[
                    ("Beyond Meat Burger", "American"),
                    ("Vegan Mac and Cheese", "American"),
                    ("Chickpea Curry", "Indian"),
                    ("Vegan Pizza", "Italian"),
                    ("Black Bean Tacos", "Mexican"),
                ]),
            ),
        ]),
    );

    // The table above covers every pair, so validation cannot fail.
    match Catalog::new(sections) {
        Ok(catalog) => catalog,
        Err(e) => unreachable!("built-in catalog is invalid: {e}"),
    }
}
