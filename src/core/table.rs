use crate::domain::ports::Storage;
use crate::utils::error::Result;

/// Encodes rows as comma-delimited, newline-terminated CSV. Fields are quoted
/// only when they contain delimiters, quotes or line breaks.
pub fn rows_to_csv(rows: &[Vec<String>]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    {
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(&mut buf);
        for row in rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
    }
    Ok(buf)
}

/// Decodes CSV bytes back into rows of strings. No header handling; every
/// cell comes back as a `String`.
pub fn csv_to_rows(data: &[u8]) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(data);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

pub async fn write_csv<S: Storage>(storage: &S, path: &str, rows: &[Vec<String>]) -> Result<()> {
    let data = rows_to_csv(rows)?;
    tracing::debug!("Writing {} CSV rows to {}", rows.len(), path);
    storage.write_file(path, &data).await
}

pub async fn read_csv<S: Storage>(storage: &S, path: &str) -> Result<Vec<Vec<String>>> {
    let data = storage.read_file(path).await?;
    csv_to_rows(&data)
}
