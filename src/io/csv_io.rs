use std::io::Read;
use std::path::Path;

use crate::error::InventoryError;
use crate::models::{Edibility, SpeciesKey, TranslationEntry, TranslationTable};

/// CSV row structure of the translation table.
#[derive(Debug, serde::Deserialize)]
struct TranslationRow {
    #[serde(rename = "Genre")]
    genus: String,
    #[serde(rename = "espèce")]
    species: String,
    #[serde(rename = "Nom français")]
    french_name: String,
    #[serde(rename = "Comestible", default)]
    edible: Option<String>,
}

/// Decode ISO-8859-1 bytes. Every byte maps to the code point of the same value.
fn decode_latin1(data: &[u8]) -> String {
    data.iter().map(|&b| char::from(b)).collect()
}

/// Build the table from the reader's records. Also returns the line number
/// of every row that overwrote an earlier one.
fn parse_translation_records<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> Result<(TranslationTable, Vec<u64>), InventoryError> {
    let headers = rdr.headers()?.clone();
    let mut table = TranslationTable::new();
    let mut duplicates = Vec::new();

    for result in rdr.records() {
        let record = result?;
        let row: TranslationRow = record.deserialize(Some(&headers))?;
        let key = SpeciesKey::new(row.genus, row.species);
        let entry = TranslationEntry {
            french_name: row.french_name,
            edibility: Edibility::from_cell(row.edible.as_deref()),
        };

        if let Some(previous) = table.insert(key.clone(), entry) {
            let line = record.position().map_or(0, |p| p.line());
            tracing::warn!(
                line,
                species = %key,
                replaced = %previous.french_name,
                "duplicate translation row, keeping the last one"
            );
            duplicates.push(line);
        }
    }

    Ok((table, duplicates))
}

fn translation_reader(content: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes())
}

/// Read the translation table from a Latin-1 encoded, `;`-delimited CSV file.
pub fn read_translations(path: impl AsRef<Path>) -> Result<TranslationTable, InventoryError> {
    let path = path.as_ref();
    let data = std::fs::read(path)?;
    let table = read_translations_from_bytes(&data)?;
    let (edible, not_edible, unknown) = table.edibility_counts();
    tracing::info!(
        path = %path.display(),
        entries = table.len(),
        edible,
        not_edible,
        unknown,
        "loaded translation table"
    );
    Ok(table)
}

/// Read the translation table from Latin-1 CSV bytes.
pub fn read_translations_from_bytes(data: &[u8]) -> Result<TranslationTable, InventoryError> {
    let content = decode_latin1(data);
    let mut rdr = translation_reader(&content);
    let (table, _) = parse_translation_records(&mut rdr)?;
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Encode a test fixture as Latin-1.
    fn latin1(text: &str) -> Vec<u8> {
        text.chars().map(|c| c as u32 as u8).collect()
    }

    #[test]
    fn test_decode_latin1() {
        assert_eq!(decode_latin1(&[0x43, 0x68, 0xea, 0x6e, 0x65]), "Chêne");
    }

    #[test]
    fn test_read_basic_table() {
        let data = latin1(
            "Genre;espèce;Nom français;Comestible\n\
             Quercus;robur;Chêne pédonculé;true\n\
             Taxus;baccata;If commun;false\n\
             Acer;campestre;Érable champêtre;\n",
        );
        let table = read_translations_from_bytes(&data).unwrap();
        assert_eq!(table.len(), 3);

        let oak = table.lookup("Quercus", "robur").unwrap();
        assert_eq!(oak.french_name, "Chêne pédonculé");
        assert_eq!(oak.edibility, Edibility::Edible);
        assert_eq!(
            table.lookup("Taxus", "baccata").unwrap().edibility,
            Edibility::NotEdible
        );
        assert_eq!(
            table.lookup("Acer", "campestre").unwrap().edibility,
            Edibility::Unknown
        );
    }

    #[test]
    fn test_values_are_trimmed_and_lowercased() {
        let data = latin1(
            "Genre;espèce;Nom français;Comestible\n\
             \x20Malus ; domestica ;  Pommier ; TRUE \n",
        );
        let table = read_translations_from_bytes(&data).unwrap();
        let entry = table.lookup("Malus", "domestica").unwrap();
        assert_eq!(entry.french_name, "Pommier");
        assert_eq!(entry.edibility, Edibility::Edible);
    }

    #[test]
    fn test_missing_edibility_column_is_unknown() {
        let data = latin1("Genre;espèce;Nom français\nQuercus;robur;Chêne pédonculé\n");
        let table = read_translations_from_bytes(&data).unwrap();
        assert_eq!(
            table.lookup("Quercus", "robur").unwrap().edibility,
            Edibility::Unknown
        );
    }

    #[test]
    fn test_genus_only_row() {
        let data = latin1("Genre;espèce;Nom français;Comestible\nFicus;;Figuier;true\n");
        let table = read_translations_from_bytes(&data).unwrap();
        assert_eq!(table.lookup("Ficus", "").unwrap().french_name, "Figuier");
    }

    #[test]
    fn test_duplicate_rows_last_wins() {
        let data = latin1(
            "Genre;espèce;Nom français;Comestible\n\
             Prunus;avium;Cerisier;false\n\
             Prunus;avium;Merisier;true\n",
        );
        let table = read_translations_from_bytes(&data).unwrap();
        assert_eq!(table.len(), 1);
        let entry = table.lookup("Prunus", "avium").unwrap();
        assert_eq!(entry.french_name, "Merisier");
        assert_eq!(entry.edibility, Edibility::Edible);
    }

    #[test]
    fn test_duplicate_rows_report_their_file_line() {
        let content = decode_latin1(&latin1(
            "Genre;espèce;Nom français;Comestible\n\
             Prunus;avium;Cerisier;false\n\
             Malus;domestica;\"Pommier\ncommun\";true\n\
             Prunus;avium;Merisier;true\n\
             Malus;domestica;Pommier;true\n",
        ));
        let (table, duplicates) =
            parse_translation_records(&mut translation_reader(&content)).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(duplicates, vec![5, 6]);
        assert_eq!(table.lookup("Malus", "domestica").unwrap().french_name, "Pommier");
    }

    #[test]
    fn test_missing_required_column_fails() {
        let data = latin1("Genre;Nom français;Comestible\nQuercus;Chêne;true\n");
        let err = read_translations_from_bytes(&data).unwrap_err();
        assert!(matches!(err, InventoryError::Csv(_)));
    }

    #[test]
    fn test_read_translations_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("traduction.csv");
        std::fs::write(
            &path,
            latin1("Genre;espèce;Nom français;Comestible\nCorylus;avellana;Noisetier;true\n"),
        )
        .unwrap();
        let table = read_translations(&path).unwrap();
        assert_eq!(table.lookup("Corylus", "avellana").unwrap().french_name, "Noisetier");
    }

    #[test]
    fn test_read_translations_missing_file() {
        let err = read_translations("/nonexistent/traduction.csv").unwrap_err();
        assert!(matches!(err, InventoryError::Io(_)));
    }
}
