pub mod store;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Pricing axis for garment sizes. S, M and L share one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeBucket {
    Sml,
    Xl,
    Xxl,
}

impl SizeBucket {
    pub const fn ordered() -> [Self; 3] {
        [Self::Sml, Self::Xl, Self::Xxl]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Sml => "S/M/L",
            Self::Xl => "XL",
            Self::Xxl => "XXL",
        }
    }

    /// Collapses a declared size into its pricing bucket. Anything that is
    /// not S/M/L/SML or XL (including 2XL, 3XL and typos) lands in XXL.
    pub fn from_size(size: &str) -> Self {
        match size.trim().to_ascii_uppercase().as_str() {
            "S" | "M" | "L" | "SML" => Self::Sml,
            "XL" => Self::Xl,
            _ => Self::Xxl,
        }
    }
}

/// Pricing axis for store locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocationGroup {
    Other,
    Tarapoto,
    SanIsidro,
}

impl LocationGroup {
    pub const fn ordered() -> [Self; 3] {
        [Self::Other, Self::Tarapoto, Self::SanIsidro]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Other => "OTHER",
            Self::Tarapoto => "TARAPOTO",
            Self::SanIsidro => "SAN ISIDRO",
        }
    }

    /// Normalizes a free-text location name ("LIMA E ICA PROVINCIA",
    /// "VILLA STEAKHOUSE", ...). Patterns are checked in order; anything
    /// unrecognized prices as OTHER.
    pub fn from_label(location: &str) -> Self {
        const PATTERNS: &[(&str, LocationGroup)] = &[
            ("SAN ISIDRO", LocationGroup::SanIsidro),
            ("VILLA", LocationGroup::SanIsidro),
            ("TARAPOTO", LocationGroup::Tarapoto),
        ];

        let upper = location.trim().to_ascii_uppercase();
        for (pattern, group) in PATTERNS {
            if upper.contains(pattern) {
                return *group;
            }
        }
        LocationGroup::Other
    }
}

/// Whether a garment dresses the upper body, the lower body, or is an
/// accessory. Drives which declared size applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GarmentClass {
    Upper,
    Lower,
    Accessory,
}

impl GarmentClass {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Upper => "UPPER",
            Self::Lower => "LOWER",
            Self::Accessory => "ACCESSORY",
        }
    }
}

impl Default for GarmentClass {
    fn default() -> Self {
        Self::Upper
    }
}

/// Size-by-location price matrix for one garment. A cell of 0.0 means
/// "no charge at this combination", not "missing".
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PriceTable {
    #[serde(default)]
    pub price_sml_other: f64,
    #[serde(default)]
    pub price_xl_other: f64,
    #[serde(default)]
    pub price_xxl_other: f64,
    #[serde(default)]
    pub price_sml_tarapoto: f64,
    #[serde(default)]
    pub price_xl_tarapoto: f64,
    #[serde(default)]
    pub price_xxl_tarapoto: f64,
    #[serde(default)]
    pub price_sml_san_isidro: f64,
    #[serde(default)]
    pub price_xl_san_isidro: f64,
    #[serde(default)]
    pub price_xxl_san_isidro: f64,
}

impl PriceTable {
    /// Same price for every size at the OTHER location group.
    pub fn flat(price: f64) -> Self {
        Self::by_size(price, price, price)
    }

    /// Per-size prices applied to the OTHER location group.
    pub fn by_size(sml: f64, xl: f64, xxl: f64) -> Self {
        Self {
            price_sml_other: sml,
            price_xl_other: xl,
            price_xxl_other: xxl,
            ..Self::default()
        }
    }

    pub fn get(&self, size: SizeBucket, location: LocationGroup) -> f64 {
        match (size, location) {
            (SizeBucket::Sml, LocationGroup::Other) => self.price_sml_other,
            (SizeBucket::Xl, LocationGroup::Other) => self.price_xl_other,
            (SizeBucket::Xxl, LocationGroup::Other) => self.price_xxl_other,
            (SizeBucket::Sml, LocationGroup::Tarapoto) => self.price_sml_tarapoto,
            (SizeBucket::Xl, LocationGroup::Tarapoto) => self.price_xl_tarapoto,
            (SizeBucket::Xxl, LocationGroup::Tarapoto) => self.price_xxl_tarapoto,
            (SizeBucket::Sml, LocationGroup::SanIsidro) => self.price_sml_san_isidro,
            (SizeBucket::Xl, LocationGroup::SanIsidro) => self.price_xl_san_isidro,
            (SizeBucket::Xxl, LocationGroup::SanIsidro) => self.price_xxl_san_isidro,
        }
    }

    pub fn set(&mut self, size: SizeBucket, location: LocationGroup, price: f64) {
        let cell = match (size, location) {
            (SizeBucket::Sml, LocationGroup::Other) => &mut self.price_sml_other,
            (SizeBucket::Xl, LocationGroup::Other) => &mut self.price_xl_other,
            (SizeBucket::Xxl, LocationGroup::Other) => &mut self.price_xxl_other,
            (SizeBucket::Sml, LocationGroup::Tarapoto) => &mut self.price_sml_tarapoto,
            (SizeBucket::Xl, LocationGroup::Tarapoto) => &mut self.price_xl_tarapoto,
            (SizeBucket::Xxl, LocationGroup::Tarapoto) => &mut self.price_xxl_tarapoto,
            (SizeBucket::Sml, LocationGroup::SanIsidro) => &mut self.price_sml_san_isidro,
            (SizeBucket::Xl, LocationGroup::SanIsidro) => &mut self.price_xl_san_isidro,
            (SizeBucket::Xxl, LocationGroup::SanIsidro) => &mut self.price_xxl_san_isidro,
        };
        *cell = price;
    }

    fn negative_cells(&self) -> Vec<String> {
        let mut errors = Vec::new();
        for size in SizeBucket::ordered() {
            for location in LocationGroup::ordered() {
                if self.get(size, location) < 0.0 {
                    errors.push(format!(
                        "price for {} at {} cannot be negative",
                        size.label(),
                        location.label()
                    ));
                }
            }
        }
        errors
    }
}

/// One uniform garment an occupation can receive, with its price matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GarmentSpec {
    pub garment_type: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub garment_class: GarmentClass,
    #[serde(default = "default_true")]
    pub has_sizes: bool,
    #[serde(default)]
    pub is_primary: bool,
    #[serde(default)]
    pub is_required: bool,
    #[serde(default)]
    pub default_quantity: u32,
    #[serde(flatten)]
    pub prices: PriceTable,
    #[serde(flatten, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

impl GarmentSpec {
    pub fn price(&self, size: SizeBucket, location: LocationGroup) -> f64 {
        self.prices.get(size, location)
    }
}

fn default_true() -> bool {
    true
}

/// Canonical occupation: unique name, synonym set, ordered garment list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Occupation {
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub synonyms: Vec<String>,
    pub garments: Vec<GarmentSpec>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub description: String,
    #[serde(flatten, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

impl Occupation {
    pub fn garment(&self, garment_type: &str) -> Option<&GarmentSpec> {
        self.garments
            .iter()
            .find(|spec| spec.garment_type.eq_ignore_ascii_case(garment_type.trim()))
    }

    /// The garment designated as representative for the sets count.
    /// At most one garment should carry the flag; the first wins.
    pub fn primary_garment(&self) -> Option<&GarmentSpec> {
        self.garments.iter().find(|spec| spec.is_primary)
    }

    pub fn matches(&self, raw: &str) -> bool {
        let needle = raw.trim();
        self.name.eq_ignore_ascii_case(needle)
            || self
                .synonyms
                .iter()
                .any(|synonym| synonym.eq_ignore_ascii_case(needle))
    }
}

#[derive(Debug, PartialEq)]
pub enum CatalogError {
    DuplicateOccupation(String),
    OccupationNotFound(String),
    DuplicateGarment { occupation: String, garment: String },
    GarmentNotFound { occupation: String, garment: String },
    DuplicateSynonym { occupation: String, synonym: String },
    SynonymNotFound { occupation: String, synonym: String },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::DuplicateOccupation(name) => {
                write!(f, "occupation {} already exists", name)
            }
            CatalogError::OccupationNotFound(name) => {
                write!(f, "occupation {} not found", name)
            }
            CatalogError::DuplicateGarment { occupation, garment } => {
                write!(f, "garment {} already exists in {}", garment, occupation)
            }
            CatalogError::GarmentNotFound { occupation, garment } => {
                write!(f, "garment {} not found in {}", garment, occupation)
            }
            CatalogError::DuplicateSynonym { occupation, synonym } => {
                write!(f, "synonym {} already exists in {}", synonym, occupation)
            }
            CatalogError::SynonymNotFound { occupation, synonym } => {
                write!(f, "synonym {} not found in {}", synonym, occupation)
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// The full occupation table plus the defaults applied when a roster row
/// carries no usable occupation or location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub occupations: Vec<Occupation>,
    #[serde(default = "default_occupation_name")]
    pub default_occupation: String,
    #[serde(default = "default_local_group")]
    pub default_local_group: String,
    #[serde(flatten, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

fn default_occupation_name() -> String {
    "MOZO".to_string()
}

fn default_local_group() -> String {
    "OTHER".to_string()
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            occupations: Vec::new(),
            default_occupation: default_occupation_name(),
            default_local_group: default_local_group(),
            extra: Map::new(),
        }
    }
}

impl Catalog {
    /// Case-insensitive lookup by canonical name first, then synonyms.
    pub fn find(&self, raw: &str) -> Option<&Occupation> {
        self.occupations
            .iter()
            .find(|occupation| occupation.matches(raw))
    }

    /// Canonical name for a raw occupation string, or the uppercased
    /// input when nothing matches (callers treat that as unresolved).
    pub fn normalize(&self, raw: &str) -> String {
        match self.find(raw) {
            Some(occupation) => occupation.name.clone(),
            None => raw.trim().to_uppercase(),
        }
    }

    pub fn add_occupation(&mut self, occupation: Occupation) -> Result<(), CatalogError> {
        if self
            .occupations
            .iter()
            .any(|existing| existing.name.eq_ignore_ascii_case(&occupation.name))
        {
            return Err(CatalogError::DuplicateOccupation(occupation.name));
        }
        self.occupations.push(occupation);
        Ok(())
    }

    pub fn update_occupation(&mut self, occupation: Occupation) -> Result<(), CatalogError> {
        match self
            .occupations
            .iter_mut()
            .find(|existing| existing.name.eq_ignore_ascii_case(&occupation.name))
        {
            Some(slot) => {
                *slot = occupation;
                Ok(())
            }
            None => Err(CatalogError::OccupationNotFound(occupation.name)),
        }
    }

    /// Removes the occupation and, with it, every garment it owns.
    pub fn delete_occupation(&mut self, name: &str) -> Result<(), CatalogError> {
        let before = self.occupations.len();
        self.occupations
            .retain(|occupation| !occupation.name.eq_ignore_ascii_case(name));
        if self.occupations.len() == before {
            return Err(CatalogError::OccupationNotFound(name.to_string()));
        }
        Ok(())
    }

    pub fn add_garment(
        &mut self,
        occupation_name: &str,
        garment: GarmentSpec,
    ) -> Result<(), CatalogError> {
        let occupation = self.occupation_mut(occupation_name)?;
        if occupation.garment(&garment.garment_type).is_some() {
            return Err(CatalogError::DuplicateGarment {
                occupation: occupation.name.clone(),
                garment: garment.garment_type,
            });
        }
        occupation.garments.push(garment);
        Ok(())
    }

    pub fn update_garment(
        &mut self,
        occupation_name: &str,
        garment: GarmentSpec,
    ) -> Result<(), CatalogError> {
        let occupation = self.occupation_mut(occupation_name)?;
        match occupation
            .garments
            .iter_mut()
            .find(|spec| spec.garment_type.eq_ignore_ascii_case(&garment.garment_type))
        {
            Some(slot) => {
                *slot = garment;
                Ok(())
            }
            None => Err(CatalogError::GarmentNotFound {
                occupation: occupation.name.clone(),
                garment: garment.garment_type,
            }),
        }
    }

    pub fn delete_garment(
        &mut self,
        occupation_name: &str,
        garment_type: &str,
    ) -> Result<(), CatalogError> {
        let occupation = self.occupation_mut(occupation_name)?;
        let before = occupation.garments.len();
        occupation
            .garments
            .retain(|spec| !spec.garment_type.eq_ignore_ascii_case(garment_type));
        if occupation.garments.len() == before {
            return Err(CatalogError::GarmentNotFound {
                occupation: occupation.name.clone(),
                garment: garment_type.to_string(),
            });
        }
        Ok(())
    }

    pub fn add_synonym(
        &mut self,
        occupation_name: &str,
        synonym: &str,
    ) -> Result<(), CatalogError> {
        let normalized = synonym.trim().to_uppercase();
        let occupation = self.occupation_mut(occupation_name)?;
        if occupation
            .synonyms
            .iter()
            .any(|existing| existing.eq_ignore_ascii_case(&normalized))
        {
            return Err(CatalogError::DuplicateSynonym {
                occupation: occupation.name.clone(),
                synonym: normalized,
            });
        }
        occupation.synonyms.push(normalized);
        Ok(())
    }

    pub fn remove_synonym(
        &mut self,
        occupation_name: &str,
        synonym: &str,
    ) -> Result<(), CatalogError> {
        let occupation = self.occupation_mut(occupation_name)?;
        let before = occupation.synonyms.len();
        occupation
            .synonyms
            .retain(|existing| !existing.eq_ignore_ascii_case(synonym.trim()));
        if occupation.synonyms.len() == before {
            return Err(CatalogError::SynonymNotFound {
                occupation: occupation.name.clone(),
                synonym: synonym.to_string(),
            });
        }
        Ok(())
    }

    /// Configuration problems an administrator should fix before saving.
    pub fn validate_occupation(occupation: &Occupation) -> Vec<String> {
        let mut errors = Vec::new();

        if occupation.name.trim().is_empty() {
            errors.push("occupation name is required".to_string());
        }
        if occupation.synonyms.is_empty() {
            errors.push("at least one synonym is required".to_string());
        }
        if occupation.garments.is_empty() {
            errors.push("at least one garment is required".to_string());
        }
        if occupation
            .garments
            .iter()
            .filter(|spec| spec.is_primary)
            .count()
            > 1
        {
            errors.push("only one garment may be marked primary".to_string());
        }
        for (index, spec) in occupation.garments.iter().enumerate() {
            if spec.garment_type.trim().is_empty() {
                errors.push(format!("garment {} has no type", index + 1));
            }
            for problem in spec.prices.negative_cells() {
                errors.push(format!("garment {}: {}", spec.garment_type, problem));
            }
        }

        errors
    }

    fn occupation_mut(&mut self, name: &str) -> Result<&mut Occupation, CatalogError> {
        self.occupations
            .iter_mut()
            .find(|occupation| occupation.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| CatalogError::OccupationNotFound(name.to_string()))
    }

    /// Built-in seed catalog with the standard occupations and list
    /// prices. Serves demos and acts as the starting point for a fresh
    /// install before an administrator edits anything.
    pub fn standard() -> Self {
        fn garment(
            garment_type: &str,
            display_name: &str,
            class: GarmentClass,
            is_primary: bool,
            prices: PriceTable,
        ) -> GarmentSpec {
            let has_sizes = !matches!(
                garment_type,
                "GORRA" | "GORRO" | "MANDILON" | "ANDARIN" | "PECHERA" | "GARIBALDI" | "CORBATA"
            );
            GarmentSpec {
                garment_type: garment_type.to_string(),
                display_name: display_name.to_string(),
                garment_class: class,
                has_sizes,
                is_primary,
                is_required: false,
                default_quantity: 0,
                prices,
                extra: Map::new(),
            }
        }

        fn occupation(
            name: &str,
            display_name: &str,
            synonyms: &[&str],
            garments: Vec<GarmentSpec>,
        ) -> Occupation {
            Occupation {
                name: name.to_string(),
                display_name: display_name.to_string(),
                synonyms: synonyms.iter().map(|synonym| synonym.to_string()).collect(),
                garments,
                is_active: true,
                description: String::new(),
                extra: Map::new(),
            }
        }

        use GarmentClass::{Accessory, Lower, Upper};

        let camisa = || PriceTable {
            price_sml_tarapoto: 18.5,
            price_xl_tarapoto: 18.5,
            price_xxl_tarapoto: 20.0,
            price_sml_san_isidro: 20.0,
            price_xl_san_isidro: 20.0,
            price_xxl_san_isidro: 22.0,
            ..PriceTable::by_size(18.5, 18.5, 20.0)
        };
        let blusa = || PriceTable::by_size(18.5, 18.5, 20.0);
        let polo = || PriceTable::by_size(13.5, 13.5, 15.0);
        let saco = || PriceTable::by_size(35.0, 35.0, 38.0);

        let occupations = vec![
            occupation(
                "MOZO",
                "Mozo",
                &["MOZO", "MESERO"],
                vec![
                    garment("CAMISA", "Camisa", Upper, true, camisa()),
                    garment("MANDILON", "Mandilón", Upper, false, PriceTable::flat(12.0)),
                    garment("ANDARIN", "Andarín", Upper, false, PriceTable::flat(10.0)),
                ],
            ),
            occupation(
                "MOZA",
                "Moza",
                &["MOZA", "MESERA"],
                vec![
                    garment("BLUSA", "Blusa", Upper, true, blusa()),
                    garment("MANDILON", "Mandilón", Upper, false, PriceTable::flat(12.0)),
                    garment("ANDARIN", "Andarín", Upper, false, PriceTable::flat(10.0)),
                ],
            ),
            occupation(
                "AZAFATA",
                "Azafata",
                &["AZAFATA", "AZAFATA DE SALON"],
                vec![
                    garment("BLUSA", "Blusa", Upper, true, blusa()),
                    garment("MANDILON", "Mandilón", Upper, false, PriceTable::flat(12.0)),
                    garment("ANDARIN", "Andarín", Upper, false, PriceTable::flat(10.0)),
                ],
            ),
            occupation(
                "MOTORIZADO",
                "Motorizado",
                &["MOTORIZADO", "DELIVERY", "REPARTIDOR"],
                vec![
                    garment("POLO", "Polo", Upper, true, polo()),
                    garment("CASACA", "Casaca", Upper, false, PriceTable::by_size(25.0, 25.0, 27.0)),
                    garment("GORRA", "Gorra", Upper, false, PriceTable::flat(5.0)),
                ],
            ),
            occupation(
                "PACKER",
                "Packer",
                &["PACKER", "EMPACADOR"],
                vec![
                    garment("POLO", "Polo", Upper, true, polo()),
                    garment("GORRA", "Gorra", Upper, false, PriceTable::flat(5.0)),
                ],
            ),
            occupation(
                "BARMAN",
                "Barman",
                &["BARMAN", "BARTENDER", "BAR"],
                vec![
                    garment("CAMISA", "Camisa", Upper, true, camisa()),
                    garment("POLO", "Polo", Upper, false, polo()),
                    garment("PECHERA", "Pechera", Upper, false, PriceTable::flat(8.0)),
                ],
            ),
            occupation(
                "CAJA (HOMBRE)",
                "Caja (hombre)",
                &["CAJA", "CAJERO"],
                vec![
                    garment("CAMISA", "Camisa", Upper, true, camisa()),
                    garment("SACO", "Saco", Upper, false, saco()),
                ],
            ),
            occupation(
                "CAJA (MUJER)",
                "Caja (mujer)",
                &["CAJERA"],
                vec![
                    garment("BLUSA", "Blusa", Upper, true, blusa()),
                    garment("SACO", "Saco", Upper, false, saco()),
                ],
            ),
            occupation(
                "SEGURIDAD",
                "Seguridad",
                &["SEGURIDAD", "AGENTE DE SEGURIDAD", "VIGILANTE"],
                vec![
                    garment("CAMISA", "Camisa", Upper, true, camisa()),
                    garment("SACO", "Saco", Upper, false, saco()),
                ],
            ),
            occupation(
                "PRODUCCION",
                "Producción",
                &[
                    "PRODUCCION",
                    "PRODUCCIÓN / COCINA",
                    "PRODUCCION / COCINA",
                    "COCINA",
                    "HORNERO",
                    "PARRILLERO",
                ],
                vec![
                    garment("CHAQUETA", "Chaqueta", Upper, true, PriceTable::by_size(22.0, 22.0, 24.0)),
                    garment("POLO", "Polo", Upper, false, polo()),
                    garment("PANTALON", "Pantalón", Lower, false, PriceTable::by_size(16.0, 16.0, 18.0)),
                    garment("PECHERA", "Pechera", Upper, false, PriceTable::flat(8.0)),
                    garment("GARIBALDI", "Garibaldi", Upper, false, PriceTable::flat(9.0)),
                    garment("GORRO", "Gorro", Upper, false, PriceTable::flat(5.0)),
                ],
            ),
            occupation(
                "ANFITRIONAJE (HOMBRE)",
                "Anfitrionaje (hombre)",
                &["ANFITRION"],
                vec![
                    garment("CAMISA", "Camisa", Upper, true, camisa()),
                    garment("CASACA", "Casaca", Upper, false, PriceTable::by_size(25.0, 25.0, 27.0)),
                ],
            ),
            occupation(
                "ANFITRIONAJE (MUJER)",
                "Anfitrionaje (mujer)",
                &["ANFITRIONAJE", "ANFITRIONA"],
                vec![
                    garment("BLUSA", "Blusa", Upper, true, blusa()),
                    garment("CASACA", "Casaca", Upper, false, PriceTable::by_size(25.0, 25.0, 27.0)),
                ],
            ),
            occupation(
                "MANTENIMIENTO",
                "Mantenimiento",
                &["MANTENIMIENTO", "TECNICO DE MANTENIMIENTO"],
                vec![
                    garment("CHAQUETA", "Chaqueta", Upper, true, PriceTable::by_size(22.0, 22.0, 24.0)),
                    garment("POLO", "Polo", Upper, false, polo()),
                    garment("PANTALON", "Pantalón", Lower, false, PriceTable::by_size(16.0, 16.0, 18.0)),
                ],
            ),
            occupation(
                "STAFF ADMINISTRATIVO (HOMBRE)",
                "Staff administrativo (hombre)",
                &["STAFF ADMINISTRATIVO", "ADMINISTRATIVO", "ADMIN", "ADMINISTRADOR"],
                vec![
                    garment("CAMISA", "Camisa", Upper, true, camisa()),
                    garment("SACO", "Saco", Upper, false, saco()),
                    {
                        let mut corbata =
                            garment("CORBATA", "Corbata", Accessory, false, PriceTable::flat(10.0));
                        corbata.is_required = true;
                        corbata.default_quantity = 2;
                        corbata
                    },
                ],
            ),
            occupation(
                "STAFF ADMINISTRATIVO (MUJER)",
                "Staff administrativo (mujer)",
                &["ADMINISTRATIVA"],
                vec![
                    garment("BLUSA", "Blusa", Upper, true, blusa()),
                    garment("SACO", "Saco", Upper, false, saco()),
                ],
            ),
            occupation(
                "AUDITORIA",
                "Auditoría",
                &["AUDITORIA", "AUDITOR", "AUDITORA"],
                vec![garment("POLO", "Polo", Upper, true, polo())],
            ),
            occupation(
                "COUNTER",
                "Counter",
                &["COUNTER", "COUNTER F/T", "COUNTER P/T"],
                vec![
                    garment("POLO", "Polo", Upper, true, polo()),
                    garment("GORRA", "Gorra", Upper, false, PriceTable::flat(5.0)),
                ],
            ),
        ];

        Self {
            occupations,
            default_occupation: default_occupation_name(),
            default_local_group: default_local_group(),
            extra: Map::new(),
        }
    }
}
