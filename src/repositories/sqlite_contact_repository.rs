use crate::domain::ContactId;
use crate::error::{StoreError, StoreResult};
use crate::models::Contact;
use crate::repositories::traits::{ContactMutation, ContactRepository};
use crate::store::ContactStore;
use async_trait::async_trait;
use std::sync::Arc;

/// Contact repository backed by the SQLite [`ContactStore`].
///
/// Uses `tokio::task::spawn_blocking` to run the synchronous SQLite
/// calls on the blocking thread pool, keeping the async runtime free.
#[derive(Clone)]
pub struct SqliteContactRepository {
    store: Arc<ContactStore>,
}

impl SqliteContactRepository {
    /// Create a new SqliteContactRepository over the given store.
    pub fn new(store: ContactStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    async fn run<T, F>(&self, op: F) -> StoreResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&ContactStore) -> StoreResult<T> + Send + 'static,
    {
        let store = self.store.clone();

        tokio::task::spawn_blocking(move || op(store.as_ref()))
            .await
            .map_err(|e| StoreError::TaskJoin(e.to_string()))?
    }
}

#[async_trait]
impl ContactRepository for SqliteContactRepository {
    async fn find_all(&self) -> StoreResult<Vec<Contact>> {
        self.run(|store| store.find_all()).await
    }

    async fn find_by_id(&self, id: ContactId) -> StoreResult<Option<Contact>> {
        self.run(move |store| store.find_by_id(id)).await
    }

    async fn find_by_phone_number(&self, phone_number: &str) -> StoreResult<Option<Contact>> {
        let phone_number = phone_number.to_string();
        self.run(move |store| store.find_by_phone_number(&phone_number))
            .await
    }

    async fn save(&self, contact: Contact) -> StoreResult<Contact> {
        self.run(move |store| store.save(contact)).await
    }

    async fn save_all(&self, contacts: Vec<Contact>) -> StoreResult<Vec<Contact>> {
        self.run(move |store| store.save_all(contacts)).await
    }

    async fn exists_by_id(&self, id: ContactId) -> StoreResult<bool> {
        self.run(move |store| store.exists_by_id(id)).await
    }

    async fn delete_by_id(&self, id: ContactId) -> StoreResult<()> {
        self.run(move |store| store.delete_by_id(id)).await
    }

    async fn count(&self) -> StoreResult<usize> {
        self.run(|store| store.count()).await
    }

    async fn update_with(
        &self,
        id: ContactId,
        mutation: ContactMutation,
    ) -> StoreResult<Option<Contact>> {
        self.run(move |store| store.update_with(id, mutation)).await
    }
}
