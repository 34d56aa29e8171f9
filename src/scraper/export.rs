//! CSV export for scraped shop records

use std::path::Path;

use csv::Writer;
use tracing::info;

use crate::core::Result;
use crate::scraper::detail::ShopRecord;

/// Write all records to a CSV file with a header row
pub fn write_csv(path: &Path, records: &[ShopRecord]) -> Result<()> {
    let mut writer = Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    info!(count = records.len(), file = %path.display(), "Wrote shop records");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_writes_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shops.csv");

        let record = ShopRecord {
            title: "Alpha Shop".to_string(),
            url: "https://www.billiger.de/shops/alpha".to_string(),
            city: "Musterstadt".to_string(),
            ..ShopRecord::default()
        };
        write_csv(&path, &[record]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("title,url,address,house_number,zip,city,country"));
        let row = lines.next().unwrap();
        assert!(row.contains("Alpha Shop"));
        assert!(row.contains("Musterstadt"));
    }

    #[test]
    fn test_empty_input_still_produces_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shops.csv");
        write_csv(&path, &[]).unwrap();
        assert!(path.exists());
    }
}
