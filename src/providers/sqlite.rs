use rusqlite::{params, Connection};
use std::sync::{Arc, Mutex, MutexGuard};
use async_trait::async_trait;

use crate::core::{validate_listings, Category, Listing, ListingDetails};
use crate::error::{FilterEngineError, Result};
use crate::providers::ListingProvider;

/// SQLite-backed listing store
///
/// Schema:
/// ```sql
/// CREATE TABLE listings (
///     category TEXT NOT NULL,
///     listing_id TEXT NOT NULL,
///     owner_id TEXT NOT NULL DEFAULT '',
///     title TEXT NOT NULL,
///     description TEXT NOT NULL DEFAULT '',
///     base_price REAL NOT NULL,
///     location TEXT NOT NULL,
///     average_rating REAL NOT NULL,
///     details TEXT NOT NULL,
///     PRIMARY KEY (category, listing_id)
/// );
/// ```
///
/// `details` holds the category-specific fields as JSON. Rows are read back
/// in insertion order.
pub struct SqliteProvider {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteProvider {
    /// Open (or create) the store at `db_path`
    pub async fn new(db_path: &str) -> Result<Self> {
        let conn = Connection::open(db_path)?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS listings (
                category TEXT NOT NULL,
                listing_id TEXT NOT NULL,
                owner_id TEXT NOT NULL DEFAULT '',
                title TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                base_price REAL NOT NULL,
                location TEXT NOT NULL,
                average_rating REAL NOT NULL,
                details TEXT NOT NULL,
                PRIMARY KEY (category, listing_id)
            )",
            [],
        )?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_listings_category ON listings(category)",
            [],
        )?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| FilterEngineError::Other("listing store lock poisoned".to_string()))
    }

    /// Load a dataset into the store, replacing listings with the same id.
    ///
    /// Returns the number of rows written.
    pub async fn seed(&self, listings: &[Listing]) -> Result<usize> {
        validate_listings(listings)?;

        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        let mut written = 0;

        for listing in listings {
            let details = serde_json::to_string(&listing.details)?;
            // Delete first so a replaced listing moves to the end of the order
            tx.execute(
                "DELETE FROM listings WHERE category = ?1 AND listing_id = ?2",
                params![listing.category().as_str(), listing.listing_id],
            )?;
            written += tx.execute(
                "INSERT INTO listings
                 (category, listing_id, owner_id, title, description, base_price, location, average_rating, details)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                params![
                    listing.category().as_str(),
                    listing.listing_id,
                    listing.owner_id,
                    listing.title,
                    listing.description,
                    listing.base_price,
                    listing.location,
                    listing.average_rating,
                    details,
                ],
            )?;
        }

        tx.commit()?;
        tracing::debug!("Seeded {} listings", written);

        Ok(written)
    }

    /// Number of stored listings per category
    pub async fn count(&self, category: Category) -> Result<u64> {
        let conn = self.lock()?;
        let count: u64 = conn.query_row(
            "SELECT COUNT(*) FROM listings WHERE category = ?",
            params![category.as_str()],
            |row| row.get(0),
        )?;
        Ok(count)
    }
}

#[async_trait]
impl ListingProvider for SqliteProvider {
    async fn listings(&self, category: Category) -> Result<Vec<Listing>> {
        let conn = self.lock()?;

        let mut stmt = conn.prepare(
            "SELECT listing_id, owner_id, title, description, base_price, location, average_rating, details
             FROM listings
             WHERE category = ?
             ORDER BY rowid",
        )?;

        let rows = stmt.query_map(params![category.as_str()], |row| {
            let details_json: String = row.get(7)?;
            let details: ListingDetails = serde_json::from_str(&details_json)
                .map_err(|e| rusqlite::Error::FromSqlConversionFailure(7, rusqlite::types::Type::Text, Box::new(e)))?;

            Ok(Listing {
                listing_id: row.get(0)?,
                owner_id: row.get(1)?,
                title: row.get(2)?,
                description: row.get(3)?,
                base_price: row.get(4)?,
                location: row.get(5)?,
                average_rating: row.get(6)?,
                details,
            })
        })?;

        let listings = rows.collect::<std::result::Result<Vec<_>, _>>()?;
        validate_listings(&listings)?;
        Ok(listings)
    }

    fn name(&self) -> &str {
        "sqlite"
    }

    async fn is_available(&self) -> bool {
        match self.lock() {
            Ok(conn) => conn.query_row("SELECT 1", [], |_| Ok(())).is_ok(),
            Err(_) => false,
        }
    }
}
