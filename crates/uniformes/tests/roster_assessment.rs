use chrono::NaiveDate;
use uniformes::workflows::uniforms::{
    Catalog, EmployeeRow, Gender, GenderPrompt, RosterImporter, UniformEngine,
};

fn assessment_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 6).expect("valid assessment date")
}

#[test]
fn full_roster_assesses_every_employee() {
    let data = include_bytes!("../Roster_Miraflores.csv");
    let rows = RosterImporter::from_reader(&data[..]).expect("roster imports");
    assert_eq!(rows.len(), 7);

    let catalog = Catalog::standard();
    let engine = UniformEngine::new();
    let batch = engine.assess_roster(
        &catalog,
        &rows,
        "LIMA E ICA PROVINCIA",
        assessment_date(),
        None,
    );

    assert_eq!(batch.assessments.len(), 7);
    assert!(batch
        .assessments
        .iter()
        .all(|assessment| assessment.total > 0.0 && assessment.sets > 0));
    assert_eq!(batch.grand_total, 549.5);
}

#[test]
fn gendered_titles_resolve_from_the_quantity_grid() {
    let data = include_bytes!("../Roster_Miraflores.csv");
    let rows = RosterImporter::from_reader(&data[..]).expect("roster imports");

    let catalog = Catalog::standard();
    let engine = UniformEngine::new();
    let batch = engine.assess_roster(
        &catalog,
        &rows,
        "LIMA E ICA PROVINCIA",
        assessment_date(),
        None,
    );

    let maria = batch
        .assessments
        .iter()
        .find(|assessment| assessment.employee == "CASTRO VEGA MARIA")
        .expect("maria assessed");
    assert_eq!(maria.occupation, "CAJA (MUJER)");

    let carla = batch
        .assessments
        .iter()
        .find(|assessment| assessment.employee == "FLORES RIOS CARLA")
        .expect("carla assessed");
    assert_eq!(carla.occupation, "STAFF ADMINISTRATIVO (MUJER)");
    assert!(carla
        .garments
        .iter()
        .all(|garment| garment.garment_type != "CORBATA"));
}

#[test]
fn male_admin_gets_his_neckties_priced() {
    let data = include_bytes!("../Roster_Miraflores.csv");
    let rows = RosterImporter::from_reader(&data[..]).expect("roster imports");

    let catalog = Catalog::standard();
    let engine = UniformEngine::new();
    let batch = engine.assess_roster(
        &catalog,
        &rows,
        "LIMA E ICA PROVINCIA",
        assessment_date(),
        None,
    );

    let diego = batch
        .assessments
        .iter()
        .find(|assessment| assessment.employee == "SOTO PAREDES DIEGO")
        .expect("diego assessed");
    assert_eq!(diego.occupation, "STAFF ADMINISTRATIVO (HOMBRE)");

    let corbata = diego
        .garments
        .iter()
        .find(|garment| garment.garment_type == "CORBATA")
        .expect("corbata added by overlay");
    assert_eq!(corbata.quantity, 2);

    // CAMISA 2 x 18.50 (XL) + SACO 35.00 + CORBATA 2 x 10.00
    assert_eq!(diego.total, 92.0);
    assert_eq!(diego.sets, 2);
}

struct AlwaysFemale;

impl GenderPrompt for AlwaysFemale {
    fn choose(&self, _employee: &str, _raw: &str, _male: &str, _female: &str) -> Gender {
        Gender::Female
    }
}

#[test]
fn prompt_decides_when_the_grid_is_silent() {
    let mut row = EmployeeRow {
        name: "VARGAS PAZ ROSA".to_string(),
        raw_occupation: "CAJERO(A)".to_string(),
        size_upper: "M".to_string(),
        ..EmployeeRow::default()
    };
    row.garments.insert("LIMA_ICA_CAJA_SACO_M", "");

    let catalog = Catalog::standard();
    let engine = UniformEngine::new();

    let assessment = engine.assess(&catalog, &row, "OTHER", Some(&AlwaysFemale));
    assert_eq!(assessment.occupation, "CAJA (MUJER)");

    let defaulted = engine.assess(&catalog, &row, "OTHER", None);
    // The earlier prompt answer is still cached for this employee.
    assert_eq!(defaulted.occupation, "CAJA (MUJER)");
}
