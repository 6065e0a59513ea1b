use crate::domain::ContactId;
use crate::error::StoreResult;
use crate::models::Contact;
use async_trait::async_trait;

/// In-place mutation applied by [`ContactRepository::update_with`].
pub type ContactMutation = Box<dyn FnOnce(&mut Contact) + Send>;

/// Repository for managing contacts.
///
/// Provides abstraction over contact storage and retrieval,
/// enabling different implementations (SQLite, in-memory mock).
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Retrieve every stored contact.
    async fn find_all(&self) -> StoreResult<Vec<Contact>>;

    /// Retrieve a single contact by ID.
    async fn find_by_id(&self, id: ContactId) -> StoreResult<Option<Contact>>;

    /// Retrieve the contact whose phone number matches exactly.
    async fn find_by_phone_number(&self, phone_number: &str) -> StoreResult<Option<Contact>>;

    /// Insert a contact without an ID, or overwrite the one matching its ID.
    async fn save(&self, contact: Contact) -> StoreResult<Contact>;

    /// Save several contacts at once.
    async fn save_all(&self, contacts: Vec<Contact>) -> StoreResult<Vec<Contact>>;

    /// Check whether a contact with this ID exists.
    async fn exists_by_id(&self, id: ContactId) -> StoreResult<bool>;

    /// Delete a contact.
    async fn delete_by_id(&self, id: ContactId) -> StoreResult<()>;

    /// Number of stored contacts.
    async fn count(&self) -> StoreResult<usize>;

    /// Load, mutate, and persist one contact as a single atomic unit.
    ///
    /// Returns `None` when the contact does not exist.
    async fn update_with(
        &self,
        id: ContactId,
        mutation: ContactMutation,
    ) -> StoreResult<Option<Contact>>;
}
