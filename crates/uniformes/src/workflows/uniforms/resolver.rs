use super::catalog::Catalog;
use super::domain::{EmployeeGarmentInput, Gender};
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::{debug, info, warn};

/// Answers the gender question for an ambiguous occupation when the
/// quantities cannot. Implementations are typically interactive; the
/// resolver caches every answer per (employee, raw occupation).
pub trait GenderPrompt {
    fn choose(&self, employee: &str, raw_occupation: &str, male: &str, female: &str) -> Gender;
}

/// Gendered raw titles and the canonical variant for each gender.
/// Most specific pattern first; matched by containment on the
/// uppercased title.
const GENDERED_PATTERNS: &[(&str, &str, &str)] = &[
    (
        "ADMINISTRADOR (A)",
        "STAFF ADMINISTRATIVO (HOMBRE)",
        "STAFF ADMINISTRATIVO (MUJER)",
    ),
    (
        "ADMINISTRADOR(A)",
        "STAFF ADMINISTRATIVO (HOMBRE)",
        "STAFF ADMINISTRATIVO (MUJER)",
    ),
    ("CAJERO (A)", "CAJA (HOMBRE)", "CAJA (MUJER)"),
    ("CAJERO(A)", "CAJA (HOMBRE)", "CAJA (MUJER)"),
    ("ANFITRION (A)", "ANFITRIONAJE (HOMBRE)", "ANFITRIONAJE (MUJER)"),
    ("ANFITRION(A)", "ANFITRIONAJE (HOMBRE)", "ANFITRIONAJE (MUJER)"),
    ("MOZO (A)", "MOZO", "MOZA"),
    ("MOZO(A)", "MOZO", "MOZA"),
];

/// Markers that make a raw title ambiguous even without a known pattern.
const AMBIGUITY_MARKERS: &[&str] = &[
    "(O/A)",
    "(A/O)",
    "(HOMBRE/MUJER)",
    "(MUJER/HOMBRE)",
    "(A)",
    "(O)",
];

/// Garment indicators used to infer gender from the quantity grid.
/// Checked in order; a column counts once, male indicators first.
const MALE_INDICATORS: &[&str] = &["CAMISA", "SACO_H", "SACO H"];
const FEMALE_INDICATORS: &[&str] = &["BLUSA", "SACO_M", "SACO M"];

pub fn is_gendered_occupation(raw: &str) -> bool {
    let upper = raw.trim().to_ascii_uppercase();
    AMBIGUITY_MARKERS.iter().any(|marker| upper.contains(marker))
}

/// Infers gender from which indicator columns carry a positive quantity.
/// Returns `None` when both sides or neither side is present.
pub fn detect_gender(input: &EmployeeGarmentInput) -> Option<Gender> {
    let mut has_male = false;
    let mut has_female = false;

    for (column_id, raw_value) in input.iter() {
        if super::domain::parse_quantity(raw_value).is_none() {
            continue;
        }
        let upper = column_id.to_ascii_uppercase();
        if MALE_INDICATORS.iter().any(|token| upper.contains(token)) {
            has_male = true;
        } else if FEMALE_INDICATORS.iter().any(|token| upper.contains(token)) {
            has_female = true;
        }
    }

    match (has_male, has_female) {
        (true, false) => Some(Gender::Male),
        (false, true) => Some(Gender::Female),
        _ => None,
    }
}

/// Maps raw occupation strings onto canonical catalog names, resolving
/// gendered titles along the way. Resolution never fails: unknown titles
/// come back uppercased and price as zero downstream.
#[derive(Default)]
pub struct OccupationResolver {
    selections: Mutex<HashMap<(String, String), Gender>>,
}

impl OccupationResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops all cached gender selections. Called at the start of every
    /// batch so stale answers never leak between rosters.
    pub fn clear_gender_cache(&self) {
        self.selections
            .lock()
            .expect("gender cache mutex poisoned")
            .clear();
    }

    pub fn resolve(
        &self,
        catalog: &Catalog,
        employee: &str,
        raw_occupation: &str,
        input: &EmployeeGarmentInput,
        prompt: Option<&dyn GenderPrompt>,
    ) -> String {
        let trimmed = raw_occupation.trim().to_uppercase();
        if trimmed.is_empty() {
            warn!(employee, "row has no occupation; using catalog default");
            return catalog.default_occupation.clone();
        }

        if let Some(occupation) = catalog.find(&trimmed) {
            return occupation.name.clone();
        }

        if let Some((pattern, male, female)) = GENDERED_PATTERNS
            .iter()
            .find(|(pattern, _, _)| trimmed.contains(pattern))
        {
            let resolved = self.resolve_gendered(employee, &trimmed, male, female, input, prompt);
            info!(employee, raw = %trimmed, pattern, resolved = %resolved, "resolved gendered occupation");
            return catalog.normalize(&resolved);
        }

        if is_gendered_occupation(&trimmed) {
            debug!(employee, raw = %trimmed, "gendered marker without a known pattern");
        }

        debug!(employee, raw = %trimmed, "occupation not in catalog; passing through");
        trimmed
    }

    fn resolve_gendered(
        &self,
        employee: &str,
        raw: &str,
        male: &str,
        female: &str,
        input: &EmployeeGarmentInput,
        prompt: Option<&dyn GenderPrompt>,
    ) -> String {
        let gender = detect_gender(input)
            .or_else(|| self.cached_selection(employee, raw))
            .or_else(|| self.prompt_selection(employee, raw, male, female, prompt))
            .unwrap_or_else(|| {
                warn!(
                    employee,
                    raw, "gender undetermined and no prompt available; defaulting to male variant"
                );
                Gender::Male
            });

        match gender {
            Gender::Male => male.to_string(),
            Gender::Female => female.to_string(),
        }
    }

    fn cached_selection(&self, employee: &str, raw: &str) -> Option<Gender> {
        self.selections
            .lock()
            .expect("gender cache mutex poisoned")
            .get(&(employee.to_string(), raw.to_string()))
            .copied()
    }

    fn prompt_selection(
        &self,
        employee: &str,
        raw: &str,
        male: &str,
        female: &str,
        prompt: Option<&dyn GenderPrompt>,
    ) -> Option<Gender> {
        let prompt = prompt?;
        let selected = prompt.choose(employee, raw, male, female);
        self.selections
            .lock()
            .expect("gender cache mutex poisoned")
            .insert((employee.to_string(), raw.to_string()), selected);
        Some(selected)
    }
}
