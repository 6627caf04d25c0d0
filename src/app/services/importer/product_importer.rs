//! Product import from typed-CSV files
//!
//! Read → parse → (nothing parsed: stop without touching the store) →
//! begin → convert → clear all products → write → commit, or roll back on
//! dry run or any failure.

use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::store::ProductStore;
use super::summary::{ImportKind, ImportSummary};
use crate::Result;
use crate::app::adapters::filesystem::FileReader;
use crate::app::models::{FieldValue, ParsedRecord, Product};
use crate::app::services::typed_csv_parser::TypedCsvParser;
use crate::constants::product_columns::{
    CATEGORY, PRICE_PER_UNIT, PRODUCT_CODE, PRODUCT_DESCRIPTION, PRODUCT_NAME, REQUIRED,
};

/// Failures turning a parsed record into a [`Product`]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductConversionError {
    #[error("Required field is missing in the parsed data.")]
    MissingRequiredField,

    #[error("Field has wrong data type in the parsed data.")]
    WrongDataType,
}

/// Build a product from one typed-CSV record
///
/// All required columns are checked for presence before any type check.
pub fn convert_to_product(
    record: &ParsedRecord,
) -> std::result::Result<Product, ProductConversionError> {
    if REQUIRED.iter().any(|column| !record.contains_column(column)) {
        return Err(ProductConversionError::MissingRequiredField);
    }

    Ok(Product {
        code: required_string(record, PRODUCT_CODE)?,
        name: required_string(record, PRODUCT_NAME)?,
        description: optional_string(record, PRODUCT_DESCRIPTION)?,
        category: optional_string(record, CATEGORY)?,
        price_per_unit: record
            .get(PRICE_PER_UNIT)
            .and_then(FieldValue::as_decimal)
            .ok_or(ProductConversionError::WrongDataType)?,
    })
}

fn required_string(
    record: &ParsedRecord,
    column: &str,
) -> std::result::Result<String, ProductConversionError> {
    record
        .get(column)
        .and_then(FieldValue::as_str)
        .map(str::to_string)
        .ok_or(ProductConversionError::WrongDataType)
}

fn optional_string(
    record: &ParsedRecord,
    column: &str,
) -> std::result::Result<Option<String>, ProductConversionError> {
    match record.get(column) {
        None | Some(FieldValue::Null) => Ok(None),
        Some(FieldValue::String(value)) => Ok(Some(value.clone())),
        Some(FieldValue::Decimal(_)) => Err(ProductConversionError::WrongDataType),
    }
}

/// Imports typed-CSV product catalogs, replacing all stored products
#[derive(Debug)]
pub struct ProductImporter<S> {
    reader: FileReader,
    parser: TypedCsvParser,
    store: S,
}

impl<S: ProductStore> ProductImporter<S> {
    pub fn new(store: S) -> Self {
        Self {
            reader: FileReader::new(),
            parser: TypedCsvParser::new(),
            store,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Import one product file
    pub async fn import(&mut self, path: &Path, dry_run: bool) -> Result<ImportSummary> {
        let text = self.reader.read_all_text(path).await?;
        let records = self.parser.parse(&text)?;
        debug!("Parsed {} product records from {}", records.len(), path.display());

        let mut summary = ImportSummary::new(ImportKind::Products, dry_run);
        if records.is_empty() {
            info!("No product records in {}, store left untouched", path.display());
            return Ok(summary);
        }

        self.store.begin_transaction()?;

        match self.write_products(&records, &mut summary) {
            Ok(()) if dry_run => {
                self.store.rollback_transaction()?;
                info!(
                    "Dry run: {} products validated, transaction rolled back",
                    summary.records_written
                );
                Ok(summary)
            }
            Ok(()) => {
                if let Err(e) = self.store.commit_transaction() {
                    self.rollback_after_failure();
                    return Err(e);
                }
                info!(
                    "Imported {} products (replaced {})",
                    summary.records_written, summary.records_cleared
                );
                Ok(summary)
            }
            Err(e) => {
                self.rollback_after_failure();
                Err(e)
            }
        }
    }

    fn write_products(&mut self, records: &[ParsedRecord], summary: &mut ImportSummary) -> Result<()> {
        let products = records
            .iter()
            .map(convert_to_product)
            .collect::<std::result::Result<Vec<_>, _>>()?;

        summary.records_cleared = self.store.clear_products()?;
        self.store.write_products(&products)?;
        summary.records_written = products.len();
        Ok(())
    }

    fn rollback_after_failure(&mut self) {
        if let Err(e) = self.store.rollback_transaction() {
            warn!("Rollback after failed product import also failed: {}", e);
        }
    }
}
