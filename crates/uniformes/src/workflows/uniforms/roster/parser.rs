use crate::workflows::uniforms::columns::ColumnDescriptor;
use crate::workflows::uniforms::domain::{EmployeeGarmentInput, EmployeeRow};
use std::io::Read;

/// Positions of the fixed roster fields within a header row, found by
/// containment the way the spreadsheets actually label them
/// ("APELLIDOS Y NOMBRES", "Talla prenda superior", ...).
#[derive(Debug, Default)]
struct HeaderMap {
    name: Option<usize>,
    document_id: Option<usize>,
    occupation: Option<usize>,
    size_upper: Option<usize>,
    size_lower: Option<usize>,
    garments: Vec<(usize, String)>,
}

impl HeaderMap {
    fn from_headers(headers: &csv::StringRecord) -> Self {
        let mut map = Self::default();

        for (index, header) in headers.iter().enumerate() {
            let upper = header.trim().to_ascii_uppercase();
            if upper.is_empty() {
                continue;
            }

            if map.name.is_none() && upper.contains("NOMBRE") && upper.contains("APELLIDO") {
                map.name = Some(index);
            } else if map.document_id.is_none() && upper.contains("DNI") {
                map.document_id = Some(index);
            } else if map.occupation.is_none() && upper.contains("CARGO") {
                map.occupation = Some(index);
            } else if map.size_upper.is_none()
                && upper.contains("TALLA")
                && upper.contains("SUPERIOR")
            {
                map.size_upper = Some(index);
            } else if map.size_lower.is_none()
                && upper.contains("TALLA")
                && upper.contains("INFERIOR")
            {
                map.size_lower = Some(index);
            } else if let Some(column) = ColumnDescriptor::parse(&upper) {
                map.garments.push((index, column.column_id));
            }
        }

        // A sheet may label the name column with only one of the words.
        if map.name.is_none() {
            map.name = headers.iter().position(|header| {
                let upper = header.trim().to_ascii_uppercase();
                upper.contains("NOMBRE") || upper.contains("APELLIDO")
            });
        }

        map
    }
}

fn field<'a>(record: &'a csv::StringRecord, index: Option<usize>) -> &'a str {
    index
        .and_then(|index| record.get(index))
        .map(str::trim)
        .unwrap_or_default()
}

/// Parses roster rows out of a CSV export. Rows without an employee name
/// are dropped, matching how empty spreadsheet lines are cleaned.
pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<EmployeeRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let header_map = HeaderMap::from_headers(csv_reader.headers()?);
    let mut rows = Vec::new();

    for record in csv_reader.records() {
        let record = record?;
        let name = field(&record, header_map.name);
        if name.is_empty() {
            continue;
        }

        let mut garments = EmployeeGarmentInput::new();
        for (index, column_id) in &header_map.garments {
            if let Some(value) = record.get(*index) {
                garments.insert(column_id.clone(), value.trim());
            }
        }

        rows.push(EmployeeRow {
            name: name.to_string(),
            document_id: field(&record, header_map.document_id).to_string(),
            raw_occupation: field(&record, header_map.occupation).to_string(),
            size_upper: field(&record, header_map.size_upper).to_uppercase(),
            size_lower: field(&record, header_map.size_lower).to_uppercase(),
            garments,
        });
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const ROSTER: &str = "\
APELLIDOS Y NOMBRES,DNI,CARGO,TALLA PRENDA SUPERIOR,TALLA PRENDA INFERIOR,LIMA_ICA_SALON_CAMISA,LIMA_ICA_SALON_MANDILON,LIMA_ICA_DELIVERY_POLO
PEREZ JUAN,44556677,MOZO,M,32,2,1,
,,,,,,,
DIAZ ANA,11223344,AZAFATA,s,,3,,dos
";

    #[test]
    fn parses_rows_and_drops_nameless_lines() {
        let rows = parse_rows(Cursor::new(ROSTER)).expect("parses");
        assert_eq!(rows.len(), 2);

        let juan = &rows[0];
        assert_eq!(juan.name, "PEREZ JUAN");
        assert_eq!(juan.document_id, "44556677");
        assert_eq!(juan.raw_occupation, "MOZO");
        assert_eq!(juan.size_upper, "M");
        assert_eq!(juan.size_lower, "32");
        assert_eq!(juan.garments.quantity("LIMA_ICA_SALON_CAMISA"), Some(2));
        assert_eq!(juan.garments.quantity("LIMA_ICA_DELIVERY_POLO"), None);
    }

    #[test]
    fn sizes_are_uppercased_and_bad_cells_kept_raw() {
        let rows = parse_rows(Cursor::new(ROSTER)).expect("parses");
        let ana = &rows[1];
        assert_eq!(ana.size_upper, "S");
        assert_eq!(ana.garments.get("LIMA_ICA_DELIVERY_POLO"), Some("dos"));
        assert_eq!(ana.garments.quantity("LIMA_ICA_DELIVERY_POLO"), None);
    }

    #[test]
    fn metadata_columns_never_become_garment_cells() {
        let rows = parse_rows(Cursor::new(ROSTER)).expect("parses");
        assert!(rows[0].garments.get("DNI").is_none());
        assert!(rows[0].garments.get("CARGO").is_none());
    }
}
