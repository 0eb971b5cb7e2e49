//! Catalog categories.
//!
//! Categories are a fixed enumeration resolved from the first path segment of
//! a category page (e.g. `/puertas`). Each one carries a display title and a
//! short description; unknown slugs resolve to generic text instead of failing.

use serde::{Deserialize, Serialize};

/// Top-level catalog partition.
///
/// Serialized as its lowercase slug, which is also the value stored in the
/// `category` field of product documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Puertas,
    Portones,
    Gondolas,
    Estanterias,
    Rejas,
    Escaleras,
    Muebles,
    Accesorios,
}

/// Error returned when a slug is not one of the known categories.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct ParseCategoryError(pub String);

impl Category {
    /// Every category, in navigation order.
    pub const ALL: [Self; 8] = [
        Self::Puertas,
        Self::Portones,
        Self::Gondolas,
        Self::Estanterias,
        Self::Rejas,
        Self::Escaleras,
        Self::Muebles,
        Self::Accesorios,
    ];

    /// The slug used in URLs and in stored documents.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Puertas => "puertas",
            Self::Portones => "portones",
            Self::Gondolas => "gondolas",
            Self::Estanterias => "estanterias",
            Self::Rejas => "rejas",
            Self::Escaleras => "escaleras",
            Self::Muebles => "muebles",
            Self::Accesorios => "accesorios",
        }
    }

    /// Display title for the category page heading.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Puertas => "Puertas",
            Self::Portones => "Portones",
            Self::Gondolas => "Góndolas",
            Self::Estanterias => "Estanterías",
            Self::Rejas => "Rejas",
            Self::Escaleras => "Escaleras",
            Self::Muebles => "Muebles",
            Self::Accesorios => "Accesorios",
        }
    }

    /// Marketing description shown under the heading.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Puertas => {
                "Descubre nuestra amplia selección de puertas de hierro forjado, diseñadas para brindar seguridad y elegancia a tu hogar."
            }
            Self::Portones => {
                "Portones automáticos y manuales de alta calidad, perfectos para proteger tu propiedad con estilo y funcionalidad."
            }
            Self::Gondolas => {
                "Soluciones de exhibición profesionales para comercios, diseñadas para maximizar el espacio y la presentación de productos."
            }
            Self::Estanterias => {
                "Estanterías resistentes y versátiles para organizar espacios industriales, comerciales y residenciales."
            }
            Self::Rejas => {
                "Rejas de seguridad personalizadas que combinan protección efectiva con diseños atractivos."
            }
            Self::Escaleras => {
                "Escaleras de hierro forjado y acero, desde diseños clásicos hasta modernos, adaptadas a cualquier espacio."
            }
            Self::Muebles => {
                "Muebles de hierro únicos y duraderos que aportan carácter y funcionalidad a cualquier ambiente."
            }
            Self::Accesorios => {
                "Complementos y accesorios de herrería para completar y personalizar tus proyectos."
            }
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

impl std::str::FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.slug() == s)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

/// Resolved heading data for a category page.
///
/// Built from the raw path segment. `category` is `None` when the segment is
/// not a known category, in which case title and description fall back to
/// generic text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryInfo {
    pub slug: String,
    pub category: Option<Category>,
    pub title: String,
    pub description: String,
}

impl CategoryInfo {
    /// Generic title for slugs outside the enumeration.
    pub const FALLBACK_TITLE: &'static str = "Categoría";

    /// Generic description for slugs outside the enumeration.
    pub const FALLBACK_DESCRIPTION: &'static str =
        "Explora nuestra selección de productos de alta calidad.";

    /// Resolve a path segment (leading slash allowed) into page heading data.
    #[must_use]
    pub fn resolve(segment: &str) -> Self {
        let slug = segment.trim_start_matches('/').to_string();
        match slug.parse::<Category>() {
            Ok(category) => Self {
                slug,
                category: Some(category),
                title: category.title().to_string(),
                description: category.description().to_string(),
            },
            Err(_) => Self {
                slug,
                category: None,
                title: Self::FALLBACK_TITLE.to_string(),
                description: Self::FALLBACK_DESCRIPTION.to_string(),
            },
        }
    }
}

impl From<Category> for CategoryInfo {
    fn from(category: Category) -> Self {
        Self {
            slug: category.slug().to_string(),
            category: Some(category),
            title: category.title().to_string(),
            description: category.description().to_string(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_round_trips_through_from_str() {
        for category in Category::ALL {
            assert_eq!(category.slug().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn test_unknown_slug_is_rejected() {
        let err = "ventanas".parse::<Category>().unwrap_err();
        assert_eq!(err.to_string(), "unknown category: ventanas");
    }

    #[test]
    fn test_serde_uses_slug() {
        let json = serde_json::to_string(&Category::Gondolas).unwrap();
        assert_eq!(json, "\"gondolas\"");
        let parsed: Category = serde_json::from_str("\"estanterias\"").unwrap();
        assert_eq!(parsed, Category::Estanterias);
    }

    #[test]
    fn test_resolve_known_category() {
        let info = CategoryInfo::resolve("/gondolas");
        assert_eq!(info.category, Some(Category::Gondolas));
        assert_eq!(info.title, "Góndolas");
        assert_eq!(info.slug, "gondolas");
    }

    #[test]
    fn test_resolve_unknown_category_falls_back() {
        let info = CategoryInfo::resolve("ventanas");
        assert_eq!(info.category, None);
        assert_eq!(info.slug, "ventanas");
        assert_eq!(info.title, "Categoría");
        assert_eq!(
            info.description,
            "Explora nuestra selección de productos de alta calidad."
        );
    }
}
