//! Contact service layer.
//!
//! Business rules the table cannot express on its own: phone numbers are
//! unique on creation, updates and deletes require an existing contact, and
//! updates only touch fields that carry a new non-empty value.

use crate::domain::ContactId;
use crate::error::{PhonebookError, PhonebookResult};
use crate::models::{Contact, ContactUpdate};
use crate::repositories::ContactRepository;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

/// Contact service trait for business operations.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// List every contact.
    async fn list(&self) -> PhonebookResult<Vec<Contact>>;

    /// Add a new contact, rejecting a phone number that is already taken.
    async fn add(&self, candidate: Contact) -> PhonebookResult<Contact>;

    /// Delete an existing contact.
    async fn delete(&self, id: ContactId) -> PhonebookResult<()>;

    /// Apply a selective update to an existing contact and persist it.
    ///
    /// The phone number is not re-checked for uniqueness here.
    async fn update(&self, id: ContactId, update: ContactUpdate) -> PhonebookResult<Contact>;
}

/// Default implementation of ContactService.
pub struct ContactServiceImpl {
    repository: Arc<dyn ContactRepository>,
}

impl ContactServiceImpl {
    /// Create a new contact service.
    pub fn new(repository: Arc<dyn ContactRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    async fn list(&self) -> PhonebookResult<Vec<Contact>> {
        Ok(self.repository.find_all().await?)
    }

    async fn add(&self, mut candidate: Contact) -> PhonebookResult<Contact> {
        // Check-then-insert; concurrent adds of the same number can both pass.
        if let Some(phone_number) = candidate.phone_number.as_deref() {
            if self
                .repository
                .find_by_phone_number(phone_number)
                .await?
                .is_some()
            {
                warn!(phone_number, "Rejected contact with duplicate phone number");
                return Err(PhonebookError::Conflict("phone number taken".to_string()));
            }
        }

        candidate.id = None;
        let saved = self.repository.save(candidate).await?;
        info!(id = ?saved.id, name = ?saved.name, "Saved new contact");
        Ok(saved)
    }

    async fn delete(&self, id: ContactId) -> PhonebookResult<()> {
        if !self.repository.exists_by_id(id).await? {
            return Err(PhonebookError::NotFound(id));
        }

        self.repository.delete_by_id(id).await?;
        info!(%id, "Deleted contact");
        Ok(())
    }

    async fn update(&self, id: ContactId, update: ContactUpdate) -> PhonebookResult<Contact> {
        let updated = self
            .repository
            .update_with(
                id,
                Box::new(move |contact: &mut Contact| {
                    update.apply_to(contact);
                }),
            )
            .await?
            .ok_or(PhonebookError::NotFound(id))?;

        info!(%id, "Updated contact");
        Ok(updated)
    }
}
