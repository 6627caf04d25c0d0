//! End-to-end import tests through the public API
//!
//! Each test writes real files to a temporary directory, imports them into a
//! store persisted as a JSON snapshot and reopens the snapshot to check what
//! was committed.

use rust_decimal::Decimal;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tempfile::TempDir;
use typed_import::app::services::importer::{
    MemoryStore, ProductImporter, StoreSnapshot, TimesheetImporter,
};
use typed_import::app::services::timesheet_parser::EmployeeResolution;
use typed_import::{Error, FileParseError, TimesheetParseError};

const TIMESHEET_WEEK_ONE: &str = r#"EMP-ID: 0815
EMP-NAME: Max Mustermann
TIMESHEETS: 2025-10-06
08:00;09:30;"Sprint Planning";CRM
09:30;12:00;"Customer Portal Login";CRM
13:00;17:00;"Database Migration";INFRA
TIMESHEETS: 2025-10-07
08:00;08:15;"Daily Standup Meeting";ADMIN
08:15;12:00;"Customer Portal Login";CRM
"#;

// Replaces 2025-10-07, adds 2025-10-08, leaves 2025-10-06 alone
const TIMESHEET_CORRECTION: &str = "EMP-ID: 0815\r\n\
EMP-NAME: Max Mustermann-Meier\r\n\
TIMESHEETS: 2025-10-07\r\n\
08:00;12:00;\"Code Review\";CRM\r\n\
TIMESHEETS: 2025-10-08\r\n\
08:00;10:00;\"Backup Strategy\";INFRA\r\n";

const PRODUCT_CATALOG: &str = r#"ProductCode: STRING(10), MANDATORY
ProductName: STRING(100), MANDATORY
ProductDescription: STRING(255), OPTIONAL
Category: STRING(50), OPTIONAL
PricePerUnit: DECIMAL, MANDATORY
---
"BKE0001","Trailblazer X200","Lightweight trail bike, 21 gears","Mountain Bikes",699.99
"BKE0002","Urban Cruiser",,"City Bikes",499.50
"BKE0003","Speedster Pro","Carbon road bike",,1899.00
"#;

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    fn store_path(&self) -> PathBuf {
        self.dir.path().join("store.json")
    }

    fn store(&self) -> MemoryStore {
        MemoryStore::open(self.store_path()).unwrap()
    }

    fn committed(&self) -> StoreSnapshot {
        self.store().snapshot().clone()
    }
}

async fn import_timesheet(workspace: &Workspace, path: &Path) -> typed_import::Result<()> {
    let mut importer = TimesheetImporter::new(workspace.store());
    importer.import(path, false).await.map(|_| ())
}

#[tokio::test]
async fn test_timesheet_import_and_correction() {
    let workspace = Workspace::new();
    let week_one = workspace.write("week1.txt", TIMESHEET_WEEK_ONE);
    let correction = workspace.write("correction.txt", TIMESHEET_CORRECTION);

    let mut importer = TimesheetImporter::new(workspace.store());
    let summary = importer.import(&week_one, false).await.unwrap();

    assert_eq!(summary.records_written, 5);
    assert_eq!(summary.employee_resolution, Some(EmployeeResolution::Created));
    assert_eq!(summary.new_projects, vec!["CRM", "INFRA", "ADMIN"]);

    let mut importer = TimesheetImporter::new(workspace.store());
    let summary = importer.import(&correction, false).await.unwrap();

    assert_eq!(summary.records_written, 2);
    assert_eq!(summary.records_cleared, 2);
    assert_eq!(
        summary.employee_resolution,
        Some(EmployeeResolution::Renamed {
            previous_name: "Max Mustermann".to_string()
        })
    );
    assert!(summary.new_projects.is_empty());

    let snapshot = workspace.committed();
    assert_eq!(snapshot.employees.len(), 1);
    assert_eq!(snapshot.employees[0].name, "Max Mustermann-Meier");
    assert_eq!(snapshot.projects.len(), 3);

    let descriptions: Vec<&str> = snapshot
        .time_entries
        .iter()
        .map(|entry| entry.description.as_str())
        .collect();
    assert_eq!(
        descriptions,
        vec![
            "Sprint Planning",
            "Customer Portal Login",
            "Database Migration",
            "Code Review",
            "Backup Strategy",
        ]
    );
}

#[tokio::test]
async fn test_invalid_timesheet_leaves_store_unchanged() {
    let workspace = Workspace::new();
    let week_one = workspace.write("week1.txt", TIMESHEET_WEEK_ONE);
    import_timesheet(&workspace, &week_one).await.unwrap();
    let before = std::fs::read_to_string(workspace.store_path()).unwrap();

    // Valid first section, then an entry whose end precedes its start
    let broken = workspace.write(
        "broken.txt",
        "EMP-ID: 0815\nEMP-NAME: Someone Else\nTIMESHEETS: 2025-10-06\n\
         08:00;09:00;\"Fine\";NEWPROJ\n\
         TIMESHEETS: 2025-10-07\n\
         12:00;11:00;\"Backwards\";ADMIN\n",
    );
    let error = import_timesheet(&workspace, &broken).await.unwrap_err();

    assert!(matches!(
        error,
        Error::TimesheetParse(TimesheetParseError::EndTimeBeforeStartTime)
    ));
    assert!(error.is_parse_error());
    assert_eq!(std::fs::read_to_string(workspace.store_path()).unwrap(), before);
}

#[tokio::test]
async fn test_timesheet_dry_run_persists_nothing() {
    let workspace = Workspace::new();
    let week_one = workspace.write("week1.txt", TIMESHEET_WEEK_ONE);

    let mut importer = TimesheetImporter::new(workspace.store());
    let summary = importer.import(&week_one, true).await.unwrap();

    assert!(summary.dry_run);
    assert_eq!(summary.records_written, 5);
    assert!(!workspace.store_path().exists());
}

#[tokio::test]
async fn test_product_catalog_replaced_on_reimport() {
    let workspace = Workspace::new();
    let catalog = workspace.write("products.txt", PRODUCT_CATALOG);

    let mut importer = ProductImporter::new(workspace.store());
    let summary = importer.import(&catalog, false).await.unwrap();
    assert_eq!(summary.records_written, 3);
    assert_eq!(summary.records_cleared, 0);

    let smaller = workspace.write(
        "products-v2.txt",
        "ProductCode: STRING(10), MANDATORY\n\
         ProductName: STRING(100), MANDATORY\n\
         PricePerUnit: DECIMAL, MANDATORY\n\
         ---\n\
         \"BKE0004\",\"Kids Bike\",-.5\n",
    );
    let mut importer = ProductImporter::new(workspace.store());
    let summary = importer.import(&smaller, false).await.unwrap();
    assert_eq!(summary.records_written, 1);
    assert_eq!(summary.records_cleared, 3);

    let products = workspace.committed().products;
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].code, "BKE0004");
    assert_eq!(products[0].description, None);
    assert_eq!(products[0].price_per_unit, Decimal::from_str("-0.5").unwrap());
}

#[tokio::test]
async fn test_product_values_survive_snapshot() {
    let workspace = Workspace::new();
    let catalog = workspace.write("products.txt", PRODUCT_CATALOG);

    let mut importer = ProductImporter::new(workspace.store());
    importer.import(&catalog, false).await.unwrap();

    let products = workspace.committed().products;
    assert_eq!(
        products[0].description.as_deref(),
        Some("Lightweight trail bike, 21 gears")
    );
    assert_eq!(products[1].description, None);
    assert_eq!(products[1].price_per_unit, Decimal::from_str("499.50").unwrap());
    assert_eq!(products[2].category, None);
}

#[tokio::test]
async fn test_invalid_catalog_leaves_store_unchanged() {
    let workspace = Workspace::new();
    let catalog = workspace.write("products.txt", PRODUCT_CATALOG);
    let mut importer = ProductImporter::new(workspace.store());
    importer.import(&catalog, false).await.unwrap();

    let unquoted = workspace.write(
        "unquoted.txt",
        "ProductCode: STRING(10), MANDATORY\n---\nBKE0009\n",
    );
    let mut importer = ProductImporter::new(workspace.store());
    let error = importer.import(&unquoted, false).await.unwrap_err();

    assert!(matches!(
        error,
        Error::FileParse(FileParseError::MissingQuotes)
    ));
    assert_eq!(workspace.committed().products.len(), 3);
}

#[tokio::test]
async fn test_missing_file_is_reported() {
    let workspace = Workspace::new();
    let missing = workspace.dir.path().join("nope.txt");

    let mut importer = ProductImporter::new(workspace.store());
    let error = importer.import(&missing, false).await.unwrap_err();

    assert!(matches!(error, Error::FileNotFound { .. }));
    assert_eq!(
        error.to_string(),
        format!("File '{}' not found.", missing.display())
    );
}
