use super::catalog::GarmentClass;
use serde::{Deserialize, Serialize};

/// Outcome of a gender prompt or detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "HOMBRE",
            Self::Female => "MUJER",
        }
    }
}

/// Raw quantity cells of one employee row, keyed by column identifier.
/// Values are kept as the spreadsheet produced them; parsing happens at
/// the point of use so malformed cells degrade per cell, not per row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeGarmentInput {
    cells: Vec<(String, String)>,
}

impl EmployeeGarmentInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column_id: impl Into<String>, raw_value: impl Into<String>) {
        self.cells.push((column_id.into(), raw_value.into()));
    }

    pub fn get(&self, column_id: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(id, _)| id.eq_ignore_ascii_case(column_id))
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cells
            .iter()
            .map(|(id, value)| (id.as_str(), value.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Quantity of a cell, when the cell holds a usable number. Blank and
    /// NaN-like cells are `None`; so are zero and negative values.
    pub fn quantity(&self, column_id: &str) -> Option<u32> {
        self.get(column_id).and_then(parse_quantity)
    }
}

impl<I, V> FromIterator<(I, V)> for EmployeeGarmentInput
where
    I: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (I, V)>>(iter: T) -> Self {
        let mut input = Self::new();
        for (id, value) in iter {
            input.insert(id, value);
        }
        input
    }
}

/// Parses a raw quantity cell. Spreadsheets deliver integers as "2",
/// "2.0", or stray text; only strictly positive values count as a
/// request.
pub fn parse_quantity(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") {
        return None;
    }

    let value = trimmed.parse::<f64>().ok()?;
    if !value.is_finite() || value < 1.0 {
        return None;
    }
    Some(value as u32)
}

/// True when the cell is non-blank yet unusable, which deserves a log
/// line (blank cells are skipped silently).
pub fn is_malformed_quantity(raw: &str) -> bool {
    let trimmed = raw.trim();
    !trimmed.is_empty()
        && !trimmed.eq_ignore_ascii_case("nan")
        && trimmed.parse::<f64>().is_err()
}

/// One garment the employee receives: the unit the price resolver and
/// sets calculator consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedGarment {
    pub garment_type: String,
    pub quantity: u32,
    pub size: String,
    pub garment_class: GarmentClass,
    /// Display label for authorization documents ("Camisa TALLA M").
    pub label: String,
}

/// One employee as delivered by the row source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeRow {
    pub name: String,
    pub document_id: String,
    pub raw_occupation: String,
    pub size_upper: String,
    pub size_lower: String,
    pub garments: EmployeeGarmentInput,
}

/// Everything the engine derives for one employee.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UniformAssessment {
    pub employee: String,
    pub document_id: String,
    pub occupation: String,
    pub garments: Vec<ResolvedGarment>,
    pub total: f64,
    pub sets: u32,
}
