//! In-process `DocumentStore` used by the test suites.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::models::contact::ContactSubmission;
use crate::models::status::StatusCheck;
use crate::store::{DocumentStore, StoreError};

#[derive(Default)]
pub struct MemoryStore {
    portfolio: Mutex<Option<Value>>,
    contacts: Mutex<Vec<ContactSubmission>>,
    status_checks: Mutex<Vec<StatusCheck>>,
    unavailable: AtomicBool,
    portfolio_reads: AtomicUsize,
    portfolio_writes: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent operation fail as if the database were down.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of portfolio reads performed so far.
    pub fn portfolio_reads(&self) -> usize {
        self.portfolio_reads.load(Ordering::SeqCst)
    }

    /// Number of portfolio upserts performed so far.
    pub fn portfolio_writes(&self) -> usize {
        self.portfolio_writes.load(Ordering::SeqCst)
    }

    pub fn contacts(&self) -> Vec<ContactSubmission> {
        self.contacts.lock().unwrap().clone()
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find_portfolio(&self) -> Result<Option<Value>, StoreError> {
        self.check_available()?;
        self.portfolio_reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.portfolio.lock().unwrap().clone())
    }

    async fn replace_portfolio(&self, document: &Value) -> Result<(), StoreError> {
        self.check_available()?;
        *self.portfolio.lock().unwrap() = Some(document.clone());
        self.portfolio_writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn insert_contact(&self, submission: &ContactSubmission) -> Result<(), StoreError> {
        self.check_available()?;
        self.contacts.lock().unwrap().push(submission.clone());
        Ok(())
    }

    async fn recent_contacts(&self, limit: i64) -> Result<Vec<ContactSubmission>, StoreError> {
        self.check_available()?;
        // Reverse first so equal timestamps still come back newest-inserted first.
        let mut contacts: Vec<_> = self.contacts.lock().unwrap().iter().rev().cloned().collect();
        contacts.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        contacts.truncate(limit.max(0) as usize);
        Ok(contacts)
    }

    async fn insert_status_check(&self, check: &StatusCheck) -> Result<(), StoreError> {
        self.check_available()?;
        self.status_checks.lock().unwrap().push(check.clone());
        Ok(())
    }

    async fn list_status_checks(&self, limit: i64) -> Result<Vec<StatusCheck>, StoreError> {
        self.check_available()?;
        let mut checks = self.status_checks.lock().unwrap().clone();
        checks.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
        checks.truncate(limit.max(0) as usize);
        Ok(checks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_recent_contacts_equal_timestamps_newest_inserted_first() {
        let store = MemoryStore::new();
        let first = ContactSubmission::new(
            "First".to_string(),
            "a@example.com".to_string(),
            "long enough message".to_string(),
        );
        let mut second = ContactSubmission::new(
            "Second".to_string(),
            "b@example.com".to_string(),
            "long enough message".to_string(),
        );
        second.submitted_at = first.submitted_at;
        store.insert_contact(&first).await.unwrap();
        store.insert_contact(&second).await.unwrap();

        let listed = store.recent_contacts(10).await.unwrap();
        let names: Vec<_> = listed.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Second", "First"]);
    }
}
