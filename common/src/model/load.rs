use serde::{Deserialize, Serialize};

/// Outcome of a CSV bulk import (`POST /api/load_file`).
///
/// The backend splits the rows it saw into imported (new), updated (contact
/// already existed) and rejected (collected in `errors` as human-readable
/// "Row N: ..." strings). `rows_processed` counts every data row in the
/// file, so `rows_imported + rows_updated + errors.len()` never exceeds it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadResult {
    pub filename: String,
    pub rows_processed: u32,
    pub rows_imported: u32,
    pub rows_updated: u32,
    pub duplicates_found: u32,
    #[serde(default)]
    pub errors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_result_decodes_backend_shape() {
        let json = r#"{
            "filename": "leads.csv",
            "rows_processed": 10,
            "rows_imported": 7,
            "rows_updated": 2,
            "duplicates_found": 2,
            "errors": ["Row 5: Invalid enum value - 'Maybe' is not a valid Interest"]
        }"#;
        let result: LoadResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.rows_processed, 10);
        assert_eq!(result.rows_imported, 7);
        assert_eq!(result.rows_updated, 2);
        assert_eq!(result.duplicates_found, 2);
        assert_eq!(result.errors.len(), 1);
    }
}
