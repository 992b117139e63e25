use super::catalog::Catalog;
use super::domain::ResolvedGarment;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Number of complete uniform sets for the authorization document.
///
/// The quantity of the occupation's primary garment is the answer when
/// it is present and positive. Otherwise the statistical mode of the
/// remaining positive quantities stands in, with ties broken toward the
/// highest quantity. No primary configured, or nothing positive, means 0.
pub fn uniform_sets(catalog: &Catalog, occupation: &str, garments: &[ResolvedGarment]) -> u32 {
    let Some(occupation_cfg) = catalog.find(occupation) else {
        warn!(occupation, "occupation not in catalog; sets count is 0");
        return 0;
    };
    let Some(primary) = occupation_cfg.primary_garment() else {
        warn!(
            occupation = %occupation_cfg.name,
            "no primary garment configured; sets count is 0"
        );
        return 0;
    };

    let primary_type = primary.garment_type.to_ascii_uppercase();
    let matches_primary = |garment: &ResolvedGarment| {
        garment.garment_type.eq_ignore_ascii_case(&primary_type)
    };

    if let Some(found) = garments.iter().find(|garment| matches_primary(garment)) {
        if found.quantity > 0 {
            debug!(
                occupation = %occupation_cfg.name,
                primary = %primary_type,
                sets = found.quantity,
                "sets taken from primary garment"
            );
            return found.quantity;
        }
    }

    let other_quantities: Vec<u32> = garments
        .iter()
        .filter(|garment| !matches_primary(garment) && garment.quantity > 0)
        .map(|garment| garment.quantity)
        .collect();

    if other_quantities.is_empty() {
        return 0;
    }

    let mut counts: HashMap<u32, usize> = HashMap::new();
    for quantity in &other_quantities {
        *counts.entry(*quantity).or_insert(0) += 1;
    }

    let sets = counts
        .into_iter()
        .max_by(|(qty_a, count_a), (qty_b, count_b)| {
            count_a.cmp(count_b).then(qty_a.cmp(qty_b))
        })
        .map(|(quantity, _)| quantity)
        .unwrap_or(0);

    debug!(
        occupation = %occupation_cfg.name,
        primary = %primary_type,
        sets,
        "sets taken from mode of other garments"
    );
    sets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::uniforms::catalog::GarmentClass;

    fn garment(garment_type: &str, quantity: u32) -> ResolvedGarment {
        ResolvedGarment {
            garment_type: garment_type.to_string(),
            quantity,
            size: "M".to_string(),
            garment_class: GarmentClass::Upper,
            label: String::new(),
        }
    }

    #[test]
    fn primary_quantity_wins_when_positive() {
        let catalog = Catalog::standard();
        let garments = vec![garment("POLO", 3), garment("GORRA", 1)];
        assert_eq!(uniform_sets(&catalog, "PACKER", &garments), 3);
    }

    #[test]
    fn absent_primary_falls_back_to_the_mode() {
        let catalog = Catalog::standard();
        // MOTORIZADO's primary is POLO; qty 0 forces the mode of the rest.
        let garments = vec![
            garment("POLO", 0),
            garment("CASACA", 2),
            garment("GORRA", 2),
            garment("PANTALON", 3),
        ];
        assert_eq!(uniform_sets(&catalog, "MOTORIZADO", &garments), 2);
    }

    #[test]
    fn mode_ties_break_toward_the_highest_quantity() {
        let catalog = Catalog::standard();
        let garments = vec![garment("POLO", 0), garment("CASACA", 2), garment("GORRA", 3)];
        assert_eq!(uniform_sets(&catalog, "MOTORIZADO", &garments), 3);
    }

    #[test]
    fn no_positive_quantities_means_zero_sets() {
        let catalog = Catalog::standard();
        assert_eq!(uniform_sets(&catalog, "MOTORIZADO", &[]), 0);

        let garments = vec![garment("POLO", 0)];
        assert_eq!(uniform_sets(&catalog, "MOTORIZADO", &garments), 0);
    }

    #[test]
    fn unknown_occupation_or_missing_primary_means_zero_sets() {
        let mut catalog = Catalog::standard();
        assert_eq!(uniform_sets(&catalog, "ASTRONAUTA", &[garment("POLO", 2)]), 0);

        // Strip the primary flag and the count falls back to 0 with no list.
        for occupation in &mut catalog.occupations {
            if occupation.name == "PACKER" {
                for spec in &mut occupation.garments {
                    spec.is_primary = false;
                }
            }
        }
        assert_eq!(uniform_sets(&catalog, "PACKER", &[]), 0);
    }
}
