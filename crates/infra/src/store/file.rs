//! Flat-file stores.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use stockroom_inventory::Inventory;
use stockroom_sales::SaleRecord;

use super::codec::{self, LineError};
use super::{ItemStore, SalesLog, StoreError};

/// Read a whole file, treating a missing file as empty.
fn read_or_empty(path: &Path) -> Result<String, StoreError> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(contents),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(String::new()),
        Err(e) => Err(StoreError::io(path, e)),
    }
}

/// A line that failed to decode, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SkippedLine {
    /// 1-based.
    line: usize,
    raw: String,
}

struct Decoded<T> {
    values: Vec<T>,
    skipped: Vec<SkippedLine>,
}

/// Decode every non-blank line, skipping (and logging) the ones that fail.
///
/// Skipped lines are gone after the next save, so the warning carries the raw
/// text for recovery.
fn decode_lines<T>(
    path: &Path,
    contents: &str,
    decode: impl Fn(&str) -> Result<T, LineError>,
) -> Decoded<T> {
    let mut out = Decoded {
        values: Vec::new(),
        skipped: Vec::new(),
    };
    for (idx, raw) in contents.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        match decode(line) {
            Ok(value) => out.values.push(value),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    line = idx + 1,
                    raw = line,
                    error = %e,
                    "skipping malformed record"
                );
                out.skipped.push(SkippedLine {
                    line: idx + 1,
                    raw: raw.to_string(),
                });
            }
        }
    }
    out
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    }
}

/// Items persisted one per line; saves replace the file atomically.
#[derive(Debug, Clone)]
pub struct FileItemStore {
    path: PathBuf,
}

impl FileItemStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ItemStore for FileItemStore {
    fn load(&self) -> Result<Inventory, StoreError> {
        let contents = read_or_empty(&self.path)?;
        let decoded = decode_lines(&self.path, &contents, codec::decode_item);
        tracing::debug!(
            path = %self.path.display(),
            count = decoded.values.len(),
            skipped = decoded.skipped.len(),
            "loaded items"
        );
        Ok(Inventory::new(decoded.values))
    }

    /// Write to a temp file next to the target, then rename over it.
    fn save(&self, inventory: &Inventory) -> Result<(), StoreError> {
        let dir = parent_dir(&self.path);
        fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, e))?;

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| StoreError::io(dir, e))?;
        for item in inventory.items() {
            writeln!(tmp, "{}", codec::encode_item(item))
                .map_err(|e| StoreError::io(tmp.path(), e))?;
        }
        tmp.as_file()
            .sync_all()
            .map_err(|e| StoreError::io(tmp.path(), e))?;
        tmp.persist(&self.path)
            .map_err(|e| StoreError::io(&self.path, e.error))?;

        tracing::debug!(path = %self.path.display(), count = inventory.len(), "saved items");
        Ok(())
    }
}

/// Sales appended one per line, never rewritten.
#[derive(Debug, Clone)]
pub struct FileSalesLog {
    path: PathBuf,
}

impl FileSalesLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SalesLog for FileSalesLog {
    fn append(&self, record: &SaleRecord) -> Result<(), StoreError> {
        let dir = parent_dir(&self.path);
        fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, e))?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| StoreError::io(&self.path, e))?;
        writeln!(file, "{}", codec::encode_sale(record))
            .map_err(|e| StoreError::io(&self.path, e))?;
        Ok(())
    }

    fn load(&self) -> Result<Vec<SaleRecord>, StoreError> {
        let contents = read_or_empty(&self.path)?;
        let decoded = decode_lines(&self.path, &contents, codec::decode_sale);
        tracing::debug!(
            path = %self.path.display(),
            count = decoded.values.len(),
            skipped = decoded.skipped.len(),
            "loaded sales"
        );
        Ok(decoded.values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use stockroom_inventory::{Item, ItemDraft};
    use tempfile::TempDir;

    fn item(name: &str, stock: i64, expiry: Option<&str>) -> Item {
        Item::from_draft(ItemDraft {
            name: name.to_string(),
            stock,
            original_price: Decimal::new(125, 2),
            sale_price: Decimal::new(3, 0),
            expiry: expiry.map(str::to_string),
        })
        .unwrap()
    }

    #[test]
    fn missing_files_load_empty() {
        let dir = TempDir::new().unwrap();
        let items = FileItemStore::new(dir.path().join("items.txt"));
        let sales = FileSalesLog::new(dir.path().join("sales.txt"));
        assert!(items.load().unwrap().is_empty());
        assert!(sales.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_preserves_items_and_order() {
        let dir = TempDir::new().unwrap();
        let store = FileItemStore::new(dir.path().join("items.txt"));
        let inventory = Inventory::new(vec![
            item("Zinc", 4, Some("2026-02-01")),
            item("Aspirin", 12, None),
        ]);

        store.save(&inventory).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded, inventory);
        let first = &loaded.items()[0];
        assert_eq!(first.name().as_str(), "Zinc");
        assert_eq!(first.stock(), 4);
        assert_eq!(first.original_price().amount(), Decimal::new(125, 2));
        assert_eq!(first.expiry(), "2026-02-01");
        assert_eq!(loaded.items()[1].expiry(), "");
    }

    #[test]
    fn save_replaces_whole_file_and_leaves_no_temp_files() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("items.txt");
        let store = FileItemStore::new(&path);

        store
            .save(&Inventory::new(vec![item("A", 1, None), item("B", 2, None)]))
            .unwrap();
        store.save(&Inventory::new(vec![item("C", 3, None)])).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "C,3,1.25,3,\n");
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn save_creates_missing_data_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("items.txt");
        FileItemStore::new(&path)
            .save(&Inventory::new(vec![item("A", 1, None)]))
            .unwrap();
        assert!(path.exists());
    }

    #[test]
    fn legacy_lines_load_and_normalize_on_save() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("items.txt");
        fs::write(&path, "Gauze,3,1.0,2.5\nTape,9,0.5,1.0,2027-01-01\n").unwrap();
        let store = FileItemStore::new(&path);

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.items()[0].expiry(), "");

        store.save(&loaded).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Gauze,3,1.0,2.5,\nTape,9,0.5,1.0,2027-01-01\n"
        );
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("items.txt");
        fs::write(&path, "Good,1,1,2,\nbroken line\n\n  \nBad,x,1,2,\nAlso Good,2,1,2\n").unwrap();

        let loaded = FileItemStore::new(&path).load().unwrap();
        let names: Vec<_> = loaded.items().iter().map(|i| i.name().as_str()).collect();
        assert_eq!(names, vec!["Good", "Also Good"]);
    }

    #[test]
    fn skipped_lines_keep_number_and_raw_text() {
        let contents = "Good,1,1,2,\n\nTape, cloth,1,1,2,\nBad,x,1,2,\n";
        let decoded = decode_lines(Path::new("items.txt"), contents, codec::decode_item);

        assert_eq!(decoded.values.len(), 1);
        assert_eq!(
            decoded.skipped,
            vec![
                SkippedLine {
                    line: 3,
                    raw: "Tape, cloth,1,1,2,".to_string()
                },
                SkippedLine {
                    line: 4,
                    raw: "Bad,x,1,2,".to_string()
                },
            ]
        );
    }

    #[test]
    fn sales_append_in_order_and_tolerate_blank_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sales.txt");
        fs::write(&path, "2025-06-01,Gauze,1,0.5\n\n").unwrap();
        let log = FileSalesLog::new(&path);

        let day = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        log.append(&SaleRecord::new(day, "Bandage", 3, Decimal::new(15, 0)))
            .unwrap();
        log.append(&SaleRecord::new(day, "Tape", 1, Decimal::new(-2, 1)))
            .unwrap();

        let records = log.load().unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].name, "Gauze");
        assert_eq!(records[1], SaleRecord::new(day, "Bandage", 3, Decimal::new(15, 0)));
        assert_eq!(records[2].profit, Decimal::new(-2, 1));
    }
}
