//! Startup seeding: reads a JSON fixture of item records and populates
//! the store before the shell starts its loop. Prices in the fixture
//! are strings, validated by the same parser as user input.
//!
//! Fixture shape:
//!
//! ```json
//! { "items": [ { "name": "iced_tea", "price": "1.99", "stock": 100 } ] }
//! ```

use crate::error::{Result, ShopError};
use crate::model::Price;
use crate::store::Inventory;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct SeedFile {
    items: Vec<SeedItem>,
}

#[derive(Debug, Deserialize)]
struct SeedItem {
    name: String,
    price: String,
    stock: u32,
}

/// Loads the fixture at `path` into `store`, returning how many rows
/// were created. Fails without partial inserts if any record is
/// malformed.
pub fn populate<P: AsRef<Path>>(store: &mut Inventory, path: P) -> Result<usize> {
    let content = fs::read_to_string(path).map_err(ShopError::Io)?;
    let seed: SeedFile = serde_json::from_str(&content).map_err(ShopError::Serialization)?;

    let mut rows = Vec::with_capacity(seed.items.len());
    for record in seed.items {
        if record.name.is_empty() {
            return Err(ShopError::FieldType {
                field: "name",
                reason: "must not be empty".to_string(),
            });
        }
        let price: Price = record.price.parse().map_err(|reason| ShopError::FieldType {
            field: "price",
            reason,
        })?;
        rows.push((record.name, price, record.stock));
    }

    let count = rows.len();
    for (name, price, stock) in rows {
        store.create(name, price, stock);
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Table;
    use crate::store::Rows;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn seed_file(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn populates_the_store_in_fixture_order() {
        let file = seed_file(
            r#"{ "items": [
                { "name": "iced_tea", "price": "1.99", "stock": 100 },
                { "name": "chowder", "price": "7.50", "stock": 3 }
            ] }"#,
        );

        let mut store = Inventory::new();
        let count = populate(&mut store, file.path()).unwrap();
        assert_eq!(count, 2);
        assert_eq!(store.size_of(Table::Items), 2);

        let rows = match store.read(Table::Items) {
            Rows::Items(items) => items.to_vec(),
            Rows::Deleted(_) => unreachable!(),
        };
        assert_eq!(rows[0].name, "iced_tea");
        assert_eq!(rows[0].price.to_string(), "1.99");
        assert_eq!(rows[1].name, "chowder");
    }

    #[test]
    fn rejects_malformed_prices_without_partial_inserts() {
        let file = seed_file(
            r#"{ "items": [
                { "name": "ok", "price": "1.00", "stock": 1 },
                { "name": "bad", "price": "1.005", "stock": 1 }
            ] }"#,
        );

        let mut store = Inventory::new();
        let err = populate(&mut store, file.path()).unwrap_err();
        assert!(matches!(err, ShopError::FieldType { field: "price", .. }));
        assert_eq!(store.size_of(Table::Items), 0);
    }

    #[test]
    fn rejects_invalid_json() {
        let file = seed_file("not json");
        let mut store = Inventory::new();
        assert!(matches!(
            populate(&mut store, file.path()).unwrap_err(),
            ShopError::Serialization(_)
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let mut store = Inventory::new();
        assert!(matches!(
            populate(&mut store, "no/such/fixture.json").unwrap_err(),
            ShopError::Io(_)
        ));
    }
}
