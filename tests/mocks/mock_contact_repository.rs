use async_trait::async_trait;
use phonebook_service::domain::ContactId;
use phonebook_service::error::{StoreError, StoreResult};
use phonebook_service::models::Contact;
use phonebook_service::repositories::{ContactMutation, ContactRepository};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Provides an in-memory implementation of ContactRepository that can be
/// easily configured with test data and tracks method calls for verification.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactRepository {
    contacts: Arc<Mutex<BTreeMap<ContactId, Contact>>>,
    next_id: Arc<Mutex<i64>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail_with: Arc<Mutex<Option<String>>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self {
            contacts: Arc::new(Mutex::new(BTreeMap::new())),
            next_id: Arc::new(Mutex::new(1)),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            fail_with: Arc::new(Mutex::new(None)),
        }
    }

    /// Add a contact directly, assigning an ID. Not counted as a call.
    pub fn add_contact(&self, contact: Contact) -> Contact {
        self.insert(contact)
    }

    /// Snapshot of the stored contacts in ID order.
    pub fn contacts(&self) -> Vec<Contact> {
        self.contacts.lock().unwrap().values().cloned().collect()
    }

    /// Make every subsequent call fail with a store error.
    pub fn fail_all_calls(&self, message: &str) {
        *self.fail_with.lock().unwrap() = Some(message.to_string());
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Total number of mutating calls (save, save_all, delete_by_id, update_with).
    pub fn write_count(&self) -> usize {
        ["save", "save_all", "delete_by_id", "update_with"]
            .iter()
            .map(|m| self.get_call_count(m))
            .sum()
    }

    fn track_call(&self, method: &str) -> StoreResult<()> {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;

        match self.fail_with.lock().unwrap().as_ref() {
            Some(message) => Err(StoreError::Other(message.clone())),
            None => Ok(()),
        }
    }

    fn insert(&self, mut contact: Contact) -> Contact {
        let mut contacts = self.contacts.lock().unwrap();

        if let Some(id) = contact.id {
            if contacts.contains_key(&id) {
                contacts.insert(id, contact.clone());
                return contact;
            }
        }

        let mut next_id = self.next_id.lock().unwrap();
        let id = ContactId::new(*next_id);
        *next_id += 1;

        contact.id = Some(id);
        contacts.insert(id, contact.clone());
        contact
    }
}

impl Default for MockContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactRepository for MockContactRepository {
    async fn find_all(&self) -> StoreResult<Vec<Contact>> {
        self.track_call("find_all")?;
        Ok(self.contacts())
    }

    async fn find_by_id(&self, id: ContactId) -> StoreResult<Option<Contact>> {
        self.track_call("find_by_id")?;
        Ok(self.contacts.lock().unwrap().get(&id).cloned())
    }

    async fn find_by_phone_number(&self, phone_number: &str) -> StoreResult<Option<Contact>> {
        self.track_call("find_by_phone_number")?;

        let contacts = self.contacts.lock().unwrap();
        Ok(contacts
            .values()
            .find(|c| c.phone_number.as_deref() == Some(phone_number))
            .cloned())
    }

    async fn save(&self, contact: Contact) -> StoreResult<Contact> {
        self.track_call("save")?;
        Ok(self.insert(contact))
    }

    async fn save_all(&self, contacts: Vec<Contact>) -> StoreResult<Vec<Contact>> {
        self.track_call("save_all")?;
        Ok(contacts.into_iter().map(|c| self.insert(c)).collect())
    }

    async fn exists_by_id(&self, id: ContactId) -> StoreResult<bool> {
        self.track_call("exists_by_id")?;
        Ok(self.contacts.lock().unwrap().contains_key(&id))
    }

    async fn delete_by_id(&self, id: ContactId) -> StoreResult<()> {
        self.track_call("delete_by_id")?;
        self.contacts.lock().unwrap().remove(&id);
        Ok(())
    }

    async fn count(&self) -> StoreResult<usize> {
        self.track_call("count")?;
        Ok(self.contacts.lock().unwrap().len())
    }

    async fn update_with(
        &self,
        id: ContactId,
        mutation: ContactMutation,
    ) -> StoreResult<Option<Contact>> {
        self.track_call("update_with")?;

        let mut contacts = self.contacts.lock().unwrap();
        Ok(contacts.get_mut(&id).map(|contact| {
            mutation(contact);
            contact.clone()
        }))
    }
}
