mod parser;

use crate::workflows::uniforms::domain::EmployeeRow;
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum RosterImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for RosterImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterImportError::Io(err) => write!(f, "failed to read roster export: {}", err),
            RosterImportError::Csv(err) => write!(f, "invalid roster CSV data: {}", err),
        }
    }
}

impl std::error::Error for RosterImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RosterImportError::Io(err) => Some(err),
            RosterImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for RosterImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for RosterImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Reads employee rows out of a roster CSV export. Structure validation
/// stays with the spreadsheet tooling; this importer only skips lines it
/// cannot use.
pub struct RosterImporter;

impl RosterImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<EmployeeRow>, RosterImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<EmployeeRow>, RosterImportError> {
        Ok(parser::parse_rows(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn from_reader_parses_employee_rows() {
        let csv = "APELLIDOS Y NOMBRES,DNI,CARGO,TALLA PRENDA SUPERIOR,LIMA_ICA_PACKER_POLO\n\
SOTO LUIS,99887766,PACKER,L,2\n";
        let rows = RosterImporter::from_reader(Cursor::new(csv)).expect("import succeeds");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].raw_occupation, "PACKER");
        assert_eq!(rows[0].garments.quantity("LIMA_ICA_PACKER_POLO"), Some(2));
    }

    #[test]
    fn from_path_propagates_io_errors() {
        let error =
            RosterImporter::from_path("./does-not-exist.csv").expect_err("expected io error");
        match error {
            RosterImportError::Io(_) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
