// src/storage/mod.rs
use crate::tables::Table;
use crate::utils::error::StorageError;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes the table as a UTF-8 CSV file with a header row and returns its absolute path.
pub fn save_table_csv<P: AsRef<Path>>(table: &Table, path: P) -> Result<PathBuf, StorageError> {
    let path = path.as_ref();

    // Rows that drifted from the header width are written as they are.
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(path)?;

    writer.write_record(&table.header)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;

    let absolute = fs::canonicalize(path).map_err(StorageError::IoError)?;
    tracing::info!("Saved {} rows to {}", table.rows.len(), absolute.display());

    Ok(absolute)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_table_csv() {
        let dir = tempfile::tempdir().unwrap();
        let table = Table::new(
            vec!["Číslo obce".into(), "Obec".into(), "Volební účast v %".into()],
            vec![
                vec!["589268".into(), "Alojzov".into(), "70,73".into()],
                vec!["".into(), "Bedihošť".into(), "".into()],
            ],
        );

        let saved = save_table_csv(&table, dir.path().join("vysledky_prostejov.csv")).unwrap();

        assert!(saved.is_absolute());
        let content = fs::read_to_string(&saved).unwrap();
        assert_eq!(
            content,
            "Číslo obce,Obec,Volební účast v %\n589268,Alojzov,\"70,73\"\n,Bedihošť,\n"
        );
    }

    #[test]
    fn test_drifted_row_is_written_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let table = Table::new(
            vec!["Obec".into(), "a".into()],
            vec![vec!["Alojzov".into(), "1".into(), "2".into()]],
        );

        let saved = save_table_csv(&table, dir.path().join("out.csv")).unwrap();
        assert_eq!(fs::read_to_string(saved).unwrap(), "Obec,a\nAlojzov,1,2\n");
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let table = Table::new(vec!["Obec".into()], vec![]);
        let result = save_table_csv(&table, dir.path().join("missing").join("out.csv"));
        assert!(result.is_err());
    }
}
