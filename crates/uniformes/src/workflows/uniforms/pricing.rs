use super::catalog::{Catalog, LocationGroup, SizeBucket};
use super::domain::ResolvedGarment;
use tracing::{debug, warn};

/// Total price of a garment list for an occupation at a location.
///
/// Degradations are additive zeros: an occupation the catalog does not
/// know prices the whole list at 0, a garment the occupation does not
/// carry prices that line at 0. Both are logged, neither fails. A
/// configured price of exactly 0.0 is a real price (free garment).
pub fn price_total(
    catalog: &Catalog,
    occupation: &str,
    location: &str,
    garments: &[ResolvedGarment],
) -> f64 {
    let Some(spec_source) = catalog.find(occupation) else {
        warn!(
            occupation,
            "occupation not in catalog; pricing entire list at 0"
        );
        return 0.0;
    };

    let location_group = LocationGroup::from_label(location);
    let mut total = 0.0;

    for garment in garments {
        if garment.quantity == 0 {
            continue;
        }

        let Some(spec) = spec_source.garment(&garment.garment_type) else {
            warn!(
                occupation = %spec_source.name,
                garment = %garment.garment_type,
                "no garment spec for occupation; line priced at 0"
            );
            continue;
        };

        let size_bucket = SizeBucket::from_size(&garment.size);
        let unit = spec.price(size_bucket, location_group);
        debug!(
            occupation = %spec_source.name,
            garment = %garment.garment_type,
            size = size_bucket.label(),
            location = location_group.label(),
            unit,
            quantity = garment.quantity,
            "priced line"
        );
        total += unit * f64::from(garment.quantity);
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::uniforms::catalog::GarmentClass;

    fn garment(garment_type: &str, quantity: u32, size: &str) -> ResolvedGarment {
        ResolvedGarment {
            garment_type: garment_type.to_string(),
            quantity,
            size: size.to_string(),
            garment_class: GarmentClass::Upper,
            label: String::new(),
        }
    }

    #[test]
    fn prices_line_totals_across_sizes() {
        let catalog = Catalog::standard();
        let garments = vec![garment("CAMISA", 2, "M")];
        assert_eq!(price_total(&catalog, "MOZO", "OTHER", &garments), 37.0);

        let garments = vec![garment("CAMISA", 1, "XXL")];
        assert_eq!(price_total(&catalog, "MOZO", "LIMA E ICA PROVINCIA", &garments), 20.0);
    }

    #[test]
    fn location_axis_changes_the_unit_price() {
        let catalog = Catalog::standard();
        let garments = vec![garment("CAMISA", 1, "M")];
        assert_eq!(price_total(&catalog, "MOZO", "SAN ISIDRO", &garments), 20.0);
        assert_eq!(price_total(&catalog, "MOZO", "VILLA STEAKHOUSE", &garments), 20.0);
        assert_eq!(price_total(&catalog, "MOZO", "TARAPOTO", &garments), 18.5);
        assert_eq!(price_total(&catalog, "MOZO", "HUANCAYO", &garments), 18.5);
    }

    #[test]
    fn unknown_occupation_prices_at_zero() {
        let catalog = Catalog::standard();
        let garments = vec![garment("CAMISA", 2, "M")];
        assert_eq!(price_total(&catalog, "ASTRONAUTA", "OTHER", &garments), 0.0);
    }

    #[test]
    fn garment_without_spec_contributes_zero() {
        let catalog = Catalog::standard();
        let garments = vec![garment("CAMISA", 1, "M"), garment("CHALECO", 3, "M")];
        assert_eq!(price_total(&catalog, "MOZO", "OTHER", &garments), 18.5);
    }

    #[test]
    fn zero_price_is_a_valid_price() {
        let catalog = Catalog::standard();
        // Tarapoto prices for MANDILON were never set and default to 0.
        let garments = vec![garment("MANDILON", 2, "")];
        assert_eq!(price_total(&catalog, "MOZO", "TARAPOTO", &garments), 0.0);
    }
}
