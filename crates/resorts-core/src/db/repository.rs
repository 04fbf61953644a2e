//! Resort repository implementation

use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{Error, Result};
use crate::models::{Difficulty, Resort, ResortFields, ResortId};

/// Trait for resort storage operations
pub trait ResortRepository {
    /// All resorts, in insertion order
    fn list(&self) -> Result<Vec<Resort>>;

    /// Get a resort by ID
    fn get(&self, id: &ResortId) -> Result<Option<Resort>>;

    /// Insert a resort under a freshly minted ID
    fn create(&self, fields: &ResortFields) -> Result<Resort>;

    /// Overwrite a resort's fields
    fn update(&self, id: &ResortId, fields: &ResortFields) -> Result<Resort>;

    /// Remove a resort
    fn delete(&self, id: &ResortId) -> Result<()>;
}

/// `SQLite` implementation of `ResortRepository`
pub struct SqliteResortRepository<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteResortRepository<'a> {
    /// Create a new repository with the given connection
    pub const fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Parse a resort from a database row
    fn parse_resort(row: &rusqlite::Row<'_>) -> rusqlite::Result<Resort> {
        let difficulty: String = row.get(4)?;
        let difficulty = difficulty.parse::<Difficulty>().map_err(|error| {
            rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(error))
        })?;
        Ok(Resort {
            id: ResortId::from(row.get::<_, String>(0)?),
            name: row.get(1)?,
            location: row.get(2)?,
            slopes: row.get(3)?,
            difficulty,
        })
    }
}

impl ResortRepository for SqliteResortRepository<'_> {
    fn list(&self) -> Result<Vec<Resort>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, location, slopes, difficulty
             FROM resorts
             ORDER BY rowid ASC",
        )?;

        let resorts = stmt
            .query_map([], Self::parse_resort)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(resorts)
    }

    fn get(&self, id: &ResortId) -> Result<Option<Resort>> {
        let resort = self
            .conn
            .query_row(
                "SELECT id, name, location, slopes, difficulty FROM resorts WHERE id = ?",
                params![id.as_str()],
                Self::parse_resort,
            )
            .optional()?;
        Ok(resort)
    }

    fn create(&self, fields: &ResortFields) -> Result<Resort> {
        fields.validate()?;
        let resort = Resort::from_fields(ResortId::generate(), fields.clone());
        let now = chrono::Utc::now().timestamp_millis();

        self.conn.execute(
            "INSERT INTO resorts (id, name, location, slopes, difficulty, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
            params![
                resort.id.as_str(),
                resort.name,
                resort.location,
                resort.slopes,
                resort.difficulty.as_str(),
                now,
                now
            ],
        )?;

        Ok(resort)
    }

    fn update(&self, id: &ResortId, fields: &ResortFields) -> Result<Resort> {
        fields.validate()?;
        let now = chrono::Utc::now().timestamp_millis();

        let rows = self.conn.execute(
            "UPDATE resorts
             SET name = ?, location = ?, slopes = ?, difficulty = ?, updated_at = ?
             WHERE id = ?",
            params![
                fields.name,
                fields.location,
                fields.slopes,
                fields.difficulty.as_str(),
                now,
                id.as_str()
            ],
        )?;

        if rows == 0 {
            return Err(Error::NotFound(id.to_string()));
        }

        self.get(id)?.ok_or_else(|| Error::NotFound(id.to_string()))
    }

    fn delete(&self, id: &ResortId) -> Result<()> {
        let rows = self
            .conn
            .execute("DELETE FROM resorts WHERE id = ?", params![id.as_str()])?;

        if rows == 0 {
            return Err(Error::NotFound(id.to_string()));
        }

        Ok(())
    }
}
