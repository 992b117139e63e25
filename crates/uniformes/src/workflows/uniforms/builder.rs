use super::catalog::GarmentClass;
use super::columns::{relevant_columns, ColumnDescriptor};
use super::domain::{is_malformed_quantity, parse_quantity, EmployeeGarmentInput, ResolvedGarment};
use tracing::{info, warn};

/// One-size garments whose labels never carry a TALLA suffix.
const ONE_SIZE_GARMENTS: &[&str] = &[
    "ANDARIN",
    "MANDILON",
    "GORRA",
    "GORRO",
    "PECHERA",
    "GARIBALDI",
    "CORBATA",
];

/// Canonical male administrative titles; a title containing ADMIN with
/// no female marker also counts.
const MALE_ADMIN_TITLES: &[&str] = &[
    "STAFF ADMINISTRATIVO (HOMBRE)",
    "STAFF ADMINISTRATIVO (H)",
    "ADMINISTRADOR (HOMBRE)",
    "ADMINISTRADOR (H)",
];

const FEMALE_MARKERS: &[&str] = &["(M)", "(F)", "MUJER"];

/// Body class of a garment type. Trousers dress the lower body, the
/// necktie is an accessory, everything else defaults to upper.
pub fn garment_class_for(garment_type: &str) -> GarmentClass {
    let upper = garment_type.to_ascii_uppercase();
    if upper.contains("PANTALON") {
        GarmentClass::Lower
    } else if upper == "CORBATA" {
        GarmentClass::Accessory
    } else {
        GarmentClass::Upper
    }
}

fn size_for(class: GarmentClass, garment_type: &str, size_upper: &str, size_lower: &str) -> String {
    if ONE_SIZE_GARMENTS.contains(&garment_type) {
        return String::new();
    }
    match class {
        GarmentClass::Lower if !size_lower.trim().is_empty() => {
            size_lower.trim().to_uppercase()
        }
        GarmentClass::Accessory => String::new(),
        _ => size_upper.trim().to_uppercase(),
    }
}

fn display_name(garment_type: &str) -> String {
    let mut label = String::with_capacity(garment_type.len());
    for (index, ch) in garment_type.replace('_', " ").chars().enumerate() {
        if index == 0 {
            label.extend(ch.to_uppercase());
        } else {
            label.extend(ch.to_lowercase());
        }
    }
    label
}

fn format_label(garment_type: &str, size: &str) -> String {
    let display = display_name(garment_type);
    if size.is_empty() {
        display
    } else {
        format!("{} TALLA {}", display, size)
    }
}

fn resolved(garment_type: String, quantity: u32, size_upper: &str, size_lower: &str) -> ResolvedGarment {
    let garment_class = garment_class_for(&garment_type);
    let size = size_for(garment_class, &garment_type, size_upper, size_lower);
    let label = format_label(&garment_type, &size);
    ResolvedGarment {
        garment_type,
        quantity,
        size,
        garment_class,
        label,
    }
}

/// Builds the garment list for one employee from the columns relevant to
/// their occupation. Distinct columns that normalize to the same garment
/// type stay separate entries (different style variants are billed
/// separately).
pub fn build_garments(
    occupation: &str,
    input: &EmployeeGarmentInput,
    size_upper: &str,
    size_lower: &str,
) -> Vec<ResolvedGarment> {
    let columns: Vec<ColumnDescriptor> = input
        .iter()
        .filter_map(|(column_id, _)| ColumnDescriptor::parse(column_id))
        .collect();

    let mut garments = Vec::new();
    for column in relevant_columns(occupation, &columns) {
        let Some(raw_value) = input.get(&column.column_id) else {
            continue;
        };

        match parse_quantity(raw_value) {
            Some(quantity) => {
                garments.push(resolved(
                    column.garment_type(),
                    quantity,
                    size_upper,
                    size_lower,
                ));
            }
            None if is_malformed_quantity(raw_value) => {
                warn!(
                    column = %column.column_id,
                    value = raw_value,
                    "ignoring unparseable quantity cell"
                );
            }
            None => {}
        }
    }

    apply_business_rules(&mut garments, occupation);
    garments
}

fn is_male_admin(occupation: &str) -> bool {
    let upper = occupation.trim().to_ascii_uppercase();
    if MALE_ADMIN_TITLES.iter().any(|title| upper.contains(title)) {
        return true;
    }
    upper.contains("ADMIN") && !FEMALE_MARKERS.iter().any(|marker| upper.contains(marker))
}

/// Fixed overlays applied after the raw list is built. Idempotent:
/// running it twice changes nothing.
fn apply_business_rules(garments: &mut Vec<ResolvedGarment>, occupation: &str) {
    // Male administrative staff receive exactly two neckties.
    if is_male_admin(occupation) {
        let mut corbata_indices = garments
            .iter()
            .enumerate()
            .filter(|(_, garment)| garment.garment_type.eq_ignore_ascii_case("CORBATA"))
            .map(|(index, _)| index);

        match corbata_indices.next() {
            None => {
                info!(occupation, "adding 2 CORBATA for male administrative role");
                garments.push(resolved("CORBATA".to_string(), 2, "", ""));
            }
            Some(first) => {
                let duplicates: Vec<usize> = corbata_indices.collect();
                if garments[first].quantity != 2 {
                    info!(
                        occupation,
                        from = garments[first].quantity,
                        "forcing CORBATA quantity to 2"
                    );
                    garments[first].quantity = 2;
                }
                for index in duplicates.into_iter().rev() {
                    garments.remove(index);
                }
            }
        }
    }

    // A blazer is never handed out more than once.
    for garment in garments.iter_mut() {
        if garment.garment_type.eq_ignore_ascii_case("SACO") && garment.quantity > 1 {
            info!(
                occupation,
                from = garment.quantity,
                "capping SACO quantity at 1"
            );
            garment.quantity = 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(cells: &[(&str, &str)]) -> EmployeeGarmentInput {
        cells.iter().copied().collect()
    }

    #[test]
    fn builds_typed_entries_from_relevant_columns_only() {
        let input = input(&[
            ("LIMA_ICA_SALON_CAMISA", "2"),
            ("LIMA_ICA_SALON_MANDILON", "1"),
            ("LIMA_ICA_DELIVERY_POLO", "3"),
        ]);

        let garments = build_garments("MOZO", &input, "M", "");
        assert_eq!(garments.len(), 2);
        assert_eq!(garments[0].garment_type, "CAMISA");
        assert_eq!(garments[0].quantity, 2);
        assert_eq!(garments[0].size, "M");
        assert_eq!(garments[0].label, "Camisa TALLA M");
        assert_eq!(garments[1].garment_type, "MANDILON");
        assert_eq!(garments[1].size, "");
        assert_eq!(garments[1].label, "Mandilon");
    }

    #[test]
    fn lower_garments_take_the_lower_size_with_upper_fallback() {
        let cells = input(&[
            ("LIMA_ICA_PRODUCCION_CHAQUETA", "2"),
            ("LIMA_ICA_PRODUCCION_PANTALON", "2"),
        ]);

        let garments = build_garments("PRODUCCION", &cells, "M", "L");
        let pantalon = garments
            .iter()
            .find(|garment| garment.garment_type == "PANTALON")
            .expect("pantalon present");
        assert_eq!(pantalon.garment_class, GarmentClass::Lower);
        assert_eq!(pantalon.size, "L");

        let garments = build_garments("PRODUCCION", &cells, "M", "  ");
        let pantalon = garments
            .iter()
            .find(|garment| garment.garment_type == "PANTALON")
            .expect("pantalon present");
        assert_eq!(pantalon.size, "M");
    }

    #[test]
    fn duplicate_types_from_distinct_columns_stay_separate() {
        let cells = input(&[
            ("LIMA_ICA_BAR_CAMISA", "1"),
            ("LIMA_ICA_BAR_POLO", "2"),
            ("LIMA_ICA_BAR_PECHERA", "1"),
        ]);
        let garments = build_garments("BARMAN", &cells, "M", "");
        assert_eq!(garments.len(), 3);

        // Two polo variants from different columns are both billed.
        let cells = input(&[
            ("LIMA_ICA_DELIVERY_POLO", "2"),
            ("LIMA_ICA_DELIVERY_CASACA", "1"),
        ]);
        let garments = build_garments("MOTORIZADO", &cells, "M", "");
        assert_eq!(garments.len(), 2);
    }

    #[test]
    fn malformed_cells_are_skipped_and_blank_cells_ignored() {
        let cells = input(&[
            ("LIMA_ICA_SALON_CAMISA", "dos"),
            ("LIMA_ICA_SALON_MANDILON", ""),
            ("LIMA_ICA_SALON_ANDARIN", "nan"),
            ("LIMA_ICA_SALON_BLUSA", "0"),
        ]);
        let garments = build_garments("MOZO", &cells, "M", "");
        assert!(garments.is_empty());
    }

    #[test]
    fn male_admin_always_gets_two_neckties() {
        // No corbata column requested: one is added.
        let cells = input(&[("LIMA_ICA_ADMINISTRACION_CAMISA", "2")]);
        let garments = build_garments("STAFF ADMINISTRATIVO (HOMBRE)", &cells, "M", "");
        let corbatas: Vec<_> = garments
            .iter()
            .filter(|garment| garment.garment_type == "CORBATA")
            .collect();
        assert_eq!(corbatas.len(), 1);
        assert_eq!(corbatas[0].quantity, 2);
        assert_eq!(corbatas[0].garment_class, GarmentClass::Accessory);

        // A requested corbata with the wrong quantity is corrected.
        let cells = input(&[
            ("LIMA_ICA_ADMINISTRACION_CAMISA", "2"),
            ("LIMA_ICA_ADMINISTRACION_CORBATA", "5"),
        ]);
        let garments = build_garments("STAFF ADMINISTRATIVO (HOMBRE)", &cells, "M", "");
        let corbatas: Vec<_> = garments
            .iter()
            .filter(|garment| garment.garment_type == "CORBATA")
            .collect();
        assert_eq!(corbatas.len(), 1);
        assert_eq!(corbatas[0].quantity, 2);
    }

    #[test]
    fn female_admin_is_not_subject_to_the_necktie_rule() {
        let cells = input(&[("LIMA_ICA_ADMINISTRACION_BLUSA", "2")]);
        let garments = build_garments("STAFF ADMINISTRATIVO (MUJER)", &cells, "M", "");
        assert!(garments
            .iter()
            .all(|garment| garment.garment_type != "CORBATA"));
    }

    #[test]
    fn saco_quantity_is_capped_at_one() {
        let cells = input(&[
            ("LIMA_ICA_SEGURIDAD_CAMISA", "2"),
            ("LIMA_ICA_SEGURIDAD_SACO", "4"),
        ]);
        let garments = build_garments("SEGURIDAD", &cells, "XL", "");
        let saco = garments
            .iter()
            .find(|garment| garment.garment_type == "SACO")
            .expect("saco present");
        assert_eq!(saco.quantity, 1);
    }

    #[test]
    fn overlay_is_idempotent() {
        let cells = input(&[
            ("LIMA_ICA_ADMINISTRACION_CAMISA", "2"),
            ("LIMA_ICA_ADMINISTRACION_SACO_H", "3"),
        ]);
        let mut garments = build_garments("STAFF ADMINISTRATIVO (HOMBRE)", &cells, "M", "");
        let snapshot = garments.clone();
        apply_business_rules(&mut garments, "STAFF ADMINISTRATIVO (HOMBRE)");
        assert_eq!(garments, snapshot);
    }
}
