use crate::domain::model::NutritionRecord;
use crate::utils::error::{NutriError, Result};
use std::io::Read;
use std::path::Path;

/// Reads the nutrition CSV. Extra columns are ignored; rows keep file order.
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<NutritionRecord>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => NutriError::MissingArtifact {
            kind: "Data".to_string(),
            path: path.display().to_string(),
        },
        _ => NutriError::IoError(e),
    })?;

    let records = read_records(file)?;
    tracing::debug!("Read {} nutrition records from {}", records.len(), path.display());
    Ok(records)
}

pub fn read_records<R: Read>(reader: R) -> Result<Vec<NutritionRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    for required in ["Food Item", "Calories", "Protein", "Carbs", "Fat"] {
        if !headers.iter().any(|h| h == required) {
            return Err(NutriError::DatasetError {
                message: format!("missing column '{}'", required),
            });
        }
    }

    let mut records = Vec::new();
    for row in csv_reader.deserialize() {
        let record: NutritionRecord = row?;
        records.push(record);
    }
    Ok(records)
}
