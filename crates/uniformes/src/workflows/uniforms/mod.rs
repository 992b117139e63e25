//! Uniform assignment engine: occupation resolution, garment list
//! construction, pricing, and the "juegos" (sets) count that goes on
//! authorization paperwork.
//!
//! Every operation works on a catalog snapshot and degrades instead of
//! failing: unknown occupations and unpriced garments contribute zeros
//! and a warning, never an error. One bad row must never abort a batch.

pub mod builder;
pub mod catalog;
pub mod columns;
pub mod domain;
pub mod pricing;
pub mod resolver;
pub mod roster;
mod sets;

pub use builder::build_garments;
pub use catalog::store::{CatalogHandle, CatalogStore, CatalogStoreError};
pub use catalog::{
    Catalog, CatalogError, GarmentClass, GarmentSpec, LocationGroup, Occupation, PriceTable,
    SizeBucket,
};
pub use columns::{relevant_columns, ColumnDescriptor, ColumnLocation};
pub use domain::{
    EmployeeGarmentInput, EmployeeRow, Gender, ResolvedGarment, UniformAssessment,
};
pub use pricing::price_total;
pub use resolver::{GenderPrompt, OccupationResolver};
pub use roster::{RosterImporter, RosterImportError};
pub use sets::uniform_sets;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

/// Assessment of a whole roster sheet at one location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterAssessment {
    pub location: String,
    pub assessed_on: NaiveDate,
    pub assessments: Vec<UniformAssessment>,
    pub grand_total: f64,
}

/// Front door of the engine. Owns the gender-selection cache so repeated
/// rows for the same person are asked at most once per batch.
#[derive(Default)]
pub struct UniformEngine {
    resolver: OccupationResolver,
}

impl UniformEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives occupation, garment list, total price, and sets count for
    /// one employee row.
    pub fn assess(
        &self,
        catalog: &Catalog,
        row: &EmployeeRow,
        location: &str,
        prompt: Option<&dyn GenderPrompt>,
    ) -> UniformAssessment {
        let occupation = self.resolver.resolve(
            catalog,
            &row.name,
            &row.raw_occupation,
            &row.garments,
            prompt,
        );
        let garments = build_garments(&occupation, &row.garments, &row.size_upper, &row.size_lower);
        let total = price_total(catalog, &occupation, location, &garments);
        let sets = uniform_sets(catalog, &occupation, &garments);

        debug!(
            employee = %row.name,
            %occupation,
            garments = garments.len(),
            total,
            sets,
            "assessed employee"
        );

        UniformAssessment {
            employee: row.name.clone(),
            document_id: row.document_id.clone(),
            occupation,
            garments,
            total,
            sets,
        }
    }

    /// Assesses every row of a sheet against one catalog snapshot. The
    /// gender cache is cleared first so answers never leak across
    /// batches.
    pub fn assess_roster(
        &self,
        catalog: &Catalog,
        rows: &[EmployeeRow],
        location: &str,
        assessed_on: NaiveDate,
        prompt: Option<&dyn GenderPrompt>,
    ) -> RosterAssessment {
        self.resolver.clear_gender_cache();

        let assessments: Vec<UniformAssessment> = rows
            .iter()
            .map(|row| self.assess(catalog, row, location, prompt))
            .collect();
        let grand_total = assessments.iter().map(|assessment| assessment.total).sum();

        RosterAssessment {
            location: location.to_string(),
            assessed_on,
            assessments,
            grand_total,
        }
    }
}
