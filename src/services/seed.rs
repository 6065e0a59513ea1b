//! Startup sample data.

use crate::error::StoreResult;
use crate::models::Contact;
use crate::repositories::ContactRepository;
use chrono::NaiveDate;
use tracing::info;

/// The two demonstration contacts inserted on first start.
pub fn sample_contacts() -> Vec<Contact> {
    let dates = [(1990, 1, 1), (1995, 2, 15)];
    let [john_dob, jane_dob] =
        dates.map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default());

    vec![
        Contact::new("John Doe", "1234567890", john_dob),
        Contact::new("Jane Doe", "0987654321", jane_dob),
    ]
}

/// Insert [`sample_contacts`] when the table is empty.
///
/// Returns the number of contacts inserted.
pub async fn seed_sample_contacts(repository: &dyn ContactRepository) -> StoreResult<usize> {
    if repository.count().await? > 0 {
        info!("Contact table already populated, skipping sample data");
        return Ok(0);
    }

    let saved = repository.save_all(sample_contacts()).await?;
    info!("Seeded {} sample contacts", saved.len());
    Ok(saved.len())
}
