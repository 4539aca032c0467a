//! The default service catalog.
//!
//! The salon's menu of services. Pages render this list directly and the
//! CLI seeder writes it into the store so the admin dashboard can count it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Broad grouping used by the services page filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceCategory {
    Hair,
    Beard,
    Spa,
}

/// A bookable service on the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    /// Position in the catalog (stable, human-assigned).
    pub id: u32,
    /// Display name; copied into cart line items verbatim.
    pub name: String,
    /// Price in rupees.
    pub price: Decimal,
    /// Expected duration in minutes.
    pub duration_minutes: u32,
    pub category: ServiceCategory,
    pub description: String,
    /// Selling points listed on the service card.
    pub features: Vec<String>,
}

/// The services offered by default.
#[must_use]
pub fn default_services() -> Vec<Service> {
    fn service(
        id: u32,
        name: &str,
        price: i64,
        duration_minutes: u32,
        category: ServiceCategory,
        description: &str,
        features: [&str; 4],
    ) -> Service {
        Service {
            id,
            name: name.to_owned(),
            price: Decimal::from(price),
            duration_minutes,
            category,
            description: description.to_owned(),
            features: features.iter().map(|&f| f.to_owned()).collect(),
        }
    }

    vec![
        service(
            1,
            "Classic Haircut",
            199,
            30,
            ServiceCategory::Hair,
            "Professional haircut with modern styling and finishing",
            ["Modern styling", "Hair wash", "Professional finish", "Style consultation"],
        ),
        service(
            2,
            "Premium Haircut",
            299,
            45,
            ServiceCategory::Hair,
            "Premium haircut with extra care and styling",
            ["Premium products", "Scalp massage", "Style consultation", "Hair care tips"],
        ),
        service(
            3,
            "Beard Trim",
            149,
            20,
            ServiceCategory::Beard,
            "Precision beard shaping and trimming",
            ["Precision trim", "Shape design", "Hot towel", "Beard oil"],
        ),
        service(
            4,
            "Royal Beard Styling",
            249,
            30,
            ServiceCategory::Beard,
            "Luxurious beard styling with premium products",
            ["Design consultation", "Premium products", "Hot towel", "Beard massage"],
        ),
        service(
            5,
            "Straight Razor Shave",
            299,
            25,
            ServiceCategory::Beard,
            "Traditional straight razor shave with hot towel",
            ["Hot towel", "Straight razor", "After shave", "Skin care"],
        ),
        service(
            6,
            "Men's Facial",
            599,
            45,
            ServiceCategory::Spa,
            "Deep cleansing facial for men's skin",
            ["Deep cleansing", "Exfoliation", "Moisturizing", "Relaxation"],
        ),
        service(
            7,
            "Head Massage",
            349,
            30,
            ServiceCategory::Spa,
            "Relaxing head and shoulder massage",
            ["Stress relief", "Improved circulation", "Relaxation", "Aromatherapy"],
        ),
        service(
            8,
            "Hair Coloring",
            799,
            60,
            ServiceCategory::Hair,
            "Professional hair coloring services",
            ["Color consultation", "Premium color", "Damage protection", "Style finish"],
        ),
    ]
}

/// Services in a category, catalog order preserved.
#[must_use]
pub fn services_in(category: ServiceCategory) -> Vec<Service> {
    default_services()
        .into_iter()
        .filter(|s| s.category == category)
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_eight_services() {
        assert_eq!(default_services().len(), 8);
    }

    #[test]
    fn test_catalog_ids_unique() {
        let services = default_services();
        let mut ids: Vec<u32> = services.iter().map(|s| s.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), services.len());
    }

    #[test]
    fn test_category_filter() {
        let beard = services_in(ServiceCategory::Beard);
        assert_eq!(beard.len(), 3);
        assert!(beard.iter().all(|s| s.category == ServiceCategory::Beard));
    }

    #[test]
    fn test_classic_haircut_price() {
        let services = default_services();
        let haircut = services.iter().find(|s| s.name == "Classic Haircut").unwrap();
        assert_eq!(haircut.price, Decimal::from(199));
    }
}
