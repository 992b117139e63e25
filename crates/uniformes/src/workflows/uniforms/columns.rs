use std::sync::OnceLock;
use tracing::{debug, warn};

/// Spreadsheet region a quantity column belongs to. Column identifiers
/// carry the region as a prefix in the new format
/// (`LIMA_ICA_SALON_CAMISA`); old-format identifiers have none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnLocation {
    LimaIca,
    PatiosComida,
    VillaSteakhouse,
}

impl ColumnLocation {
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::LimaIca => "LIMA_ICA",
            Self::PatiosComida => "PATIOS_COMIDA",
            Self::VillaSteakhouse => "VILLA_STEAKHOUSE",
        }
    }

    fn strip(column_id: &str) -> (Option<Self>, String) {
        for location in [Self::LimaIca, Self::PatiosComida, Self::VillaSteakhouse] {
            if let Some(rest) = column_id.strip_prefix(location.prefix()) {
                return (Some(location), rest.trim_start_matches('_').to_string());
            }
        }
        (None, column_id.to_string())
    }
}

/// Occupation-group tokens the column table uses. Free tokens, not an
/// enum: administrators introduce new groups by adding columns.
const GROUPS: &[&str] = &[
    "SALON",
    "DELIVERY",
    "PACKER",
    "BAR",
    "CAJA",
    "SEGURIDAD",
    "ANFITRIONAJE",
    "PRODUCCION",
    "MANTENIMIENTO",
    "ADMINISTRACION",
    "AUDITORIA",
    "COUNTER",
    "CORREDOR",
];

/// Garment tokens recognized inside column identifiers, most specific
/// first. Matched on whole `_`-separated parts so GORRA never shadows
/// GORRO.
const KNOWN_GARMENTS: &[&str] = &[
    "PANTALON",
    "GARIBALDI",
    "MANDILON",
    "CHAQUETA",
    "CHALECO",
    "PECHERA",
    "ANDARIN",
    "CASACA",
    "CAMISA",
    "CORBATA",
    "BLUSA",
    "GORRA",
    "GORRO",
    "SACO",
    "POLO",
];

/// Suffix parts that disambiguate column variants but are not garments
/// themselves (`SACO_H`, `POLO_MANGA_CORTA`, `CAMISA_2`).
const SKIP_SUFFIXES: &[&str] = &["H", "M", "MANGA", "CORTA"];

/// Base garment type for a raw column segment: first known garment token
/// among its parts, otherwise the last part that is not a variant suffix.
pub fn garment_base_type(segment: &str) -> String {
    let upper = segment.trim().to_ascii_uppercase();
    let parts: Vec<&str> = upper.split('_').filter(|part| !part.is_empty()).collect();

    for known in KNOWN_GARMENTS {
        if parts.iter().any(|part| part == known) {
            return (*known).to_string();
        }
    }

    for part in parts.iter().rev() {
        let is_suffix =
            SKIP_SUFFIXES.contains(part) || part.chars().all(|ch| ch.is_ascii_digit());
        if !is_suffix {
            return (*part).to_string();
        }
    }

    upper.replace(' ', "_")
}

/// One quantity column of the uniform grid.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDescriptor {
    pub column_id: String,
    pub location: Option<ColumnLocation>,
    pub group: String,
    pub garment: String,
}

impl ColumnDescriptor {
    /// Interprets a column identifier. Returns `None` for columns that
    /// carry neither an occupation group nor a recognizable garment
    /// (those are roster metadata, not uniform cells).
    pub fn parse(column_id: &str) -> Option<Self> {
        let upper = column_id.trim().to_ascii_uppercase().replace(' ', "_");
        if upper.is_empty() {
            return None;
        }

        let (location, rest) = ColumnLocation::strip(&upper);
        let mut parts = rest.splitn(2, '_');
        let head = parts.next().unwrap_or_default();
        let tail = parts.next().unwrap_or_default();

        let (group, garment) = if GROUPS.contains(&head) {
            (head.to_string(), tail.to_string())
        } else {
            (String::new(), rest.clone())
        };

        let has_garment = garment
            .split('_')
            .any(|part| KNOWN_GARMENTS.contains(&part));
        if group.is_empty() && !has_garment {
            return None;
        }

        Some(Self {
            column_id: upper,
            location,
            group,
            garment,
        })
    }

    pub fn garment_type(&self) -> String {
        garment_base_type(&self.garment)
    }
}

/// Identifiers of the fixed uniform grid, in spreadsheet order.
const STANDARD_COLUMN_IDS: &[&str] = &[
    // Lima e Ica
    "LIMA_ICA_SALON_CAMISA",
    "LIMA_ICA_SALON_BLUSA",
    "LIMA_ICA_SALON_MANDILON",
    "LIMA_ICA_SALON_ANDARIN",
    "LIMA_ICA_DELIVERY_POLO",
    "LIMA_ICA_DELIVERY_CASACA",
    "LIMA_ICA_DELIVERY_GORRA",
    "LIMA_ICA_PACKER_POLO",
    "LIMA_ICA_PACKER_GORRA",
    "LIMA_ICA_BAR_CAMISA",
    "LIMA_ICA_BAR_BLUSA",
    "LIMA_ICA_BAR_POLO",
    "LIMA_ICA_BAR_PECHERA",
    "LIMA_ICA_CAJA_CAMISA",
    "LIMA_ICA_CAJA_SACO_H",
    "LIMA_ICA_CAJA_BLUSA",
    "LIMA_ICA_CAJA_SACO_M",
    "LIMA_ICA_SEGURIDAD_CAMISA",
    "LIMA_ICA_SEGURIDAD_BLUSA",
    "LIMA_ICA_SEGURIDAD_SACO",
    "LIMA_ICA_ANFITRIONAJE_CAMISA",
    "LIMA_ICA_ANFITRIONAJE_BLUSA",
    "LIMA_ICA_ANFITRIONAJE_CASACA",
    "LIMA_ICA_PRODUCCION_CHAQUETA",
    "LIMA_ICA_PRODUCCION_POLO",
    "LIMA_ICA_PRODUCCION_PANTALON",
    "LIMA_ICA_PRODUCCION_PECHERA",
    "LIMA_ICA_PRODUCCION_GARIBALDI",
    "LIMA_ICA_PRODUCCION_GORRO",
    "LIMA_ICA_MANTENIMIENTO_CHAQUETA",
    "LIMA_ICA_MANTENIMIENTO_POLO",
    "LIMA_ICA_MANTENIMIENTO_PANTALON",
    "LIMA_ICA_ADMINISTRACION_CAMISA",
    "LIMA_ICA_ADMINISTRACION_SACO_H",
    "LIMA_ICA_ADMINISTRACION_BLUSA",
    "LIMA_ICA_ADMINISTRACION_SACO_M",
    "LIMA_ICA_ADMINISTRACION_CORBATA",
    "LIMA_ICA_AUDITORIA_POLO",
    // Patios de comida
    "PATIOS_COMIDA_PRODUCCION_POLO_MANGA_CORTA",
    "PATIOS_COMIDA_PRODUCCION_GORRO",
    "PATIOS_COMIDA_PRODUCCION_PANTALON",
    "PATIOS_COMIDA_PRODUCCION_PECHERA",
    "PATIOS_COMIDA_COUNTER_POLO",
    "PATIOS_COMIDA_COUNTER_GORRA",
    "PATIOS_COMIDA_CAJA_CAMISA",
    "PATIOS_COMIDA_CAJA_BLUSA",
    "PATIOS_COMIDA_DELIVERY_POLO",
    "PATIOS_COMIDA_DELIVERY_GORRA",
    // Villa Steakhouse / San Isidro
    "VILLA_STEAKHOUSE_SALON_CAMISA",
    "VILLA_STEAKHOUSE_SALON_BLUSA",
    "VILLA_STEAKHOUSE_SALON_MANDILON",
    "VILLA_STEAKHOUSE_CORREDOR_POLO",
    "VILLA_STEAKHOUSE_CORREDOR_PECHERA",
    "VILLA_STEAKHOUSE_BAR_CAMISA",
    "VILLA_STEAKHOUSE_BAR_CHALECO",
    "VILLA_STEAKHOUSE_PRODUCCION_CHAQUETA",
    "VILLA_STEAKHOUSE_PRODUCCION_PANTALON",
    "VILLA_STEAKHOUSE_PRODUCCION_GORRO",
    "VILLA_STEAKHOUSE_CAJA_CAMISA",
    "VILLA_STEAKHOUSE_CAJA_SACO_H",
    "VILLA_STEAKHOUSE_CAJA_BLUSA",
    "VILLA_STEAKHOUSE_CAJA_SACO_M",
    "VILLA_STEAKHOUSE_ANFITRIONAJE_CAMISA",
    "VILLA_STEAKHOUSE_ANFITRIONAJE_BLUSA",
];

static STANDARD_COLUMNS: OnceLock<Vec<ColumnDescriptor>> = OnceLock::new();

/// The fixed column table, parsed once for the process lifetime.
pub fn standard_columns() -> &'static [ColumnDescriptor] {
    STANDARD_COLUMNS.get_or_init(|| {
        STANDARD_COLUMN_IDS
            .iter()
            .map(|id| ColumnDescriptor::parse(id).expect("standard column id parses"))
            .collect()
    })
}

/// Occupation-to-group pattern table: exact matches first, then
/// containment so suffixed titles ("MOZO (EVENTUAL)") still map.
/// Most specific pattern first.
const GROUP_PATTERNS: &[(&str, &str)] = &[
    ("STAFF ADMINISTRATIVO", "ADMINISTRACION"),
    ("ADMINISTRATIVO", "ADMINISTRACION"),
    ("ADMINISTRATIVA", "ADMINISTRACION"),
    ("ADMINISTRADOR", "ADMINISTRACION"),
    ("ADMIN", "ADMINISTRACION"),
    ("AGENTE DE SEGURIDAD", "SEGURIDAD"),
    ("SEGURIDAD", "SEGURIDAD"),
    ("VIGILANTE", "SEGURIDAD"),
    ("MANTENIMIENTO", "MANTENIMIENTO"),
    ("ANFITRIONAJE", "ANFITRIONAJE"),
    ("ANFITRION", "ANFITRIONAJE"),
    ("PRODUCCION", "PRODUCCION"),
    ("COCINA", "PRODUCCION"),
    ("HORNERO", "PRODUCCION"),
    ("PARRILLERO", "PRODUCCION"),
    ("MOTORIZADO", "DELIVERY"),
    ("DELIVERY", "DELIVERY"),
    ("REPARTIDOR", "DELIVERY"),
    ("PACKER", "PACKER"),
    ("EMPACADOR", "PACKER"),
    ("BARTENDER", "BAR"),
    ("BARMAN", "BAR"),
    ("CAJERO", "CAJA"),
    ("CAJERA", "CAJA"),
    ("CAJA", "CAJA"),
    ("AUDITOR", "AUDITORIA"),
    ("COUNTER", "COUNTER"),
    ("CORREDOR", "CORREDOR"),
    ("AZAFATA", "SALON"),
    ("MOZO", "SALON"),
    ("MOZA", "SALON"),
    ("MESERO", "SALON"),
    ("MESERA", "SALON"),
    ("SALON", "SALON"),
    ("BAR", "BAR"),
];

/// Column group an occupation draws its garments from.
pub fn occupation_group(occupation: &str) -> Option<&'static str> {
    let upper = occupation.trim().to_ascii_uppercase();
    if upper.is_empty() {
        return None;
    }

    for (pattern, group) in GROUP_PATTERNS {
        if upper == *pattern {
            return Some(group);
        }
    }
    for (pattern, group) in GROUP_PATTERNS {
        if upper.contains(pattern) {
            return Some(group);
        }
    }
    None
}

/// Selects the columns relevant to an occupation out of the columns
/// present in a row. Villa Steakhouse salon staff also cover the
/// corredor, so their selection includes CORREDOR columns. A selection
/// that comes out empty falls back to every column rather than silently
/// dropping the whole uniform.
pub fn relevant_columns<'a>(
    occupation: &str,
    columns: &'a [ColumnDescriptor],
) -> Vec<&'a ColumnDescriptor> {
    let Some(target) = occupation_group(occupation) else {
        debug!(occupation, "no column group for occupation; keeping all columns");
        return columns.iter().collect();
    };

    let mut selected: Vec<&ColumnDescriptor> = columns
        .iter()
        .filter(|column| column.group == target)
        .collect();

    let villa_row = columns
        .iter()
        .any(|column| column.location == Some(ColumnLocation::VillaSteakhouse));
    if villa_row && target == "SALON" {
        selected.extend(
            columns
                .iter()
                .filter(|column| column.group == "CORREDOR"),
        );
    }

    if selected.is_empty() {
        warn!(
            occupation,
            group = target,
            "column filter selected nothing; falling back to all columns"
        );
        return columns.iter().collect();
    }

    selected
}
