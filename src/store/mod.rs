//! SQLite-backed contact store.
//!
//! This module provides a synchronous store that can be used from async contexts
//! via `tokio::task::spawn_blocking` (see [`crate::repositories::SqliteContactRepository`]).
//! A single connection is shared behind a mutex, so every call is serialized.

use crate::domain::ContactId;
use crate::error::{StoreError, StoreResult};
use crate::models::Contact;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS contacts (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    name          TEXT,
    phone_number  TEXT,
    date_of_birth TEXT
);
CREATE INDEX IF NOT EXISTS idx_contacts_phone_number ON contacts (phone_number);
"#;

const SELECT_COLUMNS: &str = "SELECT id, name, phone_number, date_of_birth FROM contacts";

/// Synchronous store over the `contacts` table.
pub struct ContactStore {
    conn: Mutex<Connection>,
}

impl ContactStore {
    /// Open (or create) the database at `path` and ensure the schema exists.
    ///
    /// `":memory:"` opens a private in-memory database.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let conn = Connection::open(path.as_ref())?;
        debug!("Opened contact store at {}", path.as_ref().display());
        Self::with_connection(conn)
    }

    /// Open a private in-memory database.
    pub fn open_in_memory() -> StoreResult<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> StoreResult<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> StoreResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| StoreError::Other("connection mutex poisoned".to_string()))
    }

    /// Every stored contact in insertion order.
    pub fn find_all(&self) -> StoreResult<Vec<Contact>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!("{SELECT_COLUMNS} ORDER BY id"))?;
        let contacts = stmt
            .query_map([], row_to_contact)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(contacts)
    }

    /// The contact with `id`, if present.
    pub fn find_by_id(&self, id: ContactId) -> StoreResult<Option<Contact>> {
        let conn = self.conn()?;
        select_by_id(&conn, id)
    }

    /// Exact-match lookup on the phone number.
    pub fn find_by_phone_number(&self, phone_number: &str) -> StoreResult<Option<Contact>> {
        let conn = self.conn()?;
        let contact = conn
            .query_row(
                &format!("{SELECT_COLUMNS} WHERE phone_number = ?1 ORDER BY id LIMIT 1"),
                [phone_number],
                row_to_contact,
            )
            .optional()?;
        Ok(contact)
    }

    /// Insert when `id` is unset, otherwise overwrite the row with that id.
    pub fn save(&self, contact: Contact) -> StoreResult<Contact> {
        let conn = self.conn()?;
        persist(&conn, contact)
    }

    /// Save several contacts in one transaction.
    pub fn save_all(&self, contacts: Vec<Contact>) -> StoreResult<Vec<Contact>> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;
        let saved = contacts
            .into_iter()
            .map(|contact| persist(&tx, contact))
            .collect::<StoreResult<Vec<_>>>()?;
        tx.commit()?;
        Ok(saved)
    }

    /// Whether a row with `id` exists.
    pub fn exists_by_id(&self, id: ContactId) -> StoreResult<bool> {
        let conn = self.conn()?;
        let exists = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM contacts WHERE id = ?1)",
            [id.get()],
            |row| row.get::<_, bool>(0),
        )?;
        Ok(exists)
    }

    /// Remove the row with `id`. Deleting a missing id is a no-op.
    pub fn delete_by_id(&self, id: ContactId) -> StoreResult<()> {
        let conn = self.conn()?;
        let removed = conn.execute("DELETE FROM contacts WHERE id = ?1", [id.get()])?;
        debug!(%id, removed, "Deleted contact row");
        Ok(())
    }

    /// Number of stored contacts.
    pub fn count(&self) -> StoreResult<usize> {
        let conn = self.conn()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM contacts", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Load, mutate, and write back one contact inside a single transaction.
    ///
    /// Returns `None` (and writes nothing) when no contact has `id`.
    pub fn update_with<F>(&self, id: ContactId, mutate: F) -> StoreResult<Option<Contact>>
    where
        F: FnOnce(&mut Contact),
    {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;

        let Some(mut contact) = select_by_id(&tx, id)? else {
            return Ok(None);
        };
        mutate(&mut contact);
        let saved = persist(&tx, contact)?;

        tx.commit()?;
        Ok(Some(saved))
    }
}

fn select_by_id(conn: &Connection, id: ContactId) -> StoreResult<Option<Contact>> {
    let contact = conn
        .query_row(
            &format!("{SELECT_COLUMNS} WHERE id = ?1"),
            [id.get()],
            row_to_contact,
        )
        .optional()?;
    Ok(contact)
}

/// Write `contact`, assigning a fresh id when it has none.
///
/// An id that no longer matches a row is treated like an unsaved contact.
fn persist(conn: &Connection, mut contact: Contact) -> StoreResult<Contact> {
    if let Some(id) = contact.id {
        let updated = conn.execute(
            "UPDATE contacts SET name = ?1, phone_number = ?2, date_of_birth = ?3 WHERE id = ?4",
            params![
                contact.name,
                contact.phone_number,
                contact.date_of_birth,
                id.get()
            ],
        )?;
        if updated > 0 {
            debug!(%id, "Updated contact row");
            return Ok(contact);
        }
    }

    conn.execute(
        "INSERT INTO contacts (name, phone_number, date_of_birth) VALUES (?1, ?2, ?3)",
        params![contact.name, contact.phone_number, contact.date_of_birth],
    )?;
    let id = ContactId::new(conn.last_insert_rowid());
    debug!(%id, "Inserted contact row");
    contact.id = Some(id);
    Ok(contact)
}

fn row_to_contact(row: &Row<'_>) -> rusqlite::Result<Contact> {
    Ok(Contact {
        id: Some(ContactId::new(row.get(0)?)),
        name: row.get(1)?,
        phone_number: row.get(2)?,
        date_of_birth: row.get(3)?,
    })
}
