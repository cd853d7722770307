//! In-memory data store for lab records.
//!
//! The store is the single owner of every [`Lab`] for the lifetime of the
//! process. It hands out copies, never references, so the only way to change
//! a record is through the operations below.

mod seed;

use std::collections::BTreeMap;

use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::model::{Lab, LabStatus, NewLab};

pub use seed::demo_labs;

/// Repository of lab records.
///
/// Provides:
/// - Snapshot listing in insertion order
/// - Insertion with store-assigned unique ids
/// - Whole-record replacement and status-only updates
/// - Idempotent removal
#[derive(Debug, Default, Clone)]
pub struct LabStore {
    labs: Vec<Lab>,
}

impl LabStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given labs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateLabId`] if two labs share an id.
    pub fn with_labs(labs: Vec<Lab>) -> Result<Self> {
        for (i, lab) in labs.iter().enumerate() {
            if labs[..i].iter().any(|other| other.id == lab.id) {
                return Err(Error::DuplicateLabId { id: lab.id.clone() });
            }
        }
        debug!("Store created with {} labs", labs.len());
        Ok(Self { labs })
    }

    /// Create a store loaded with the demo labs.
    #[must_use]
    pub fn seeded() -> Self {
        let labs = demo_labs();
        info!("Store seeded with {} demo labs", labs.len());
        Self { labs }
    }

    /// Copy of every lab, in insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<Lab> {
        self.labs.clone()
    }

    /// Copy of the lab with the given id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<Lab> {
        self.labs.iter().find(|lab| lab.id == id).cloned()
    }

    /// Number of stored labs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labs.len()
    }

    /// Check whether the store holds no labs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labs.is_empty()
    }

    /// Store a new lab under a fresh id and return the created record.
    ///
    /// The stored record always starts with an empty report list.
    pub fn insert(&mut self, new: NewLab) -> Lab {
        let id = self.fresh_id();
        let lab = Lab::from_new(id, new);
        self.labs.push(lab.clone());
        debug!("Inserted lab {} ({})", lab.id, lab.name);
        lab
    }

    /// Overwrite the stored record that has the same id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LabNotFound`] if no lab has that id; the store is left
    /// untouched.
    pub fn replace(&mut self, lab: Lab) -> Result<Lab> {
        let slot = self
            .labs
            .iter_mut()
            .find(|stored| stored.id == lab.id)
            .ok_or_else(|| Error::lab_not_found(&lab.id))?;
        *slot = lab.clone();
        debug!("Replaced lab {}", lab.id);
        Ok(lab)
    }

    /// Remove the lab with the given id.
    ///
    /// Returns `true` if a record was removed. Removing an absent id is not
    /// an error.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.labs.len();
        self.labs.retain(|lab| lab.id != id);
        let removed = self.labs.len() != before;
        debug!("Remove lab {}: removed={}", id, removed);
        removed
    }

    /// Change only the status of the lab with the given id.
    ///
    /// Returns `true` if a record was updated. An absent id leaves the store
    /// unchanged.
    pub fn set_status(&mut self, id: &str, status: LabStatus) -> bool {
        match self.labs.iter_mut().find(|lab| lab.id == id) {
            Some(lab) => {
                lab.status = status;
                debug!("Lab {} status set to {}", id, status);
                true
            }
            None => false,
        }
    }

    /// Summary counts over the stored labs.
    #[must_use]
    pub fn stats(&self) -> StoreStats {
        let mut by_status = BTreeMap::new();
        for lab in &self.labs {
            *by_status.entry(lab.status).or_insert(0) += 1;
        }
        StoreStats {
            total_labs: self.labs.len(),
            total_reports: self.labs.iter().map(|lab| lab.reports.len()).sum(),
            by_status,
        }
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = format!("lab-{}", Uuid::new_v4().simple());
            if !self.labs.iter().any(|lab| lab.id == id) {
                return id;
            }
        }
    }
}

/// Summary counts returned by [`LabStore::stats`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreStats {
    /// Number of labs.
    pub total_labs: usize,
    /// Number of reports across all labs.
    pub total_reports: usize,
    /// Lab count per status; statuses with no labs are absent.
    pub by_status: BTreeMap<LabStatus, usize>,
}

impl StoreStats {
    /// Number of labs with the given status.
    #[must_use]
    pub fn count(&self, status: LabStatus) -> usize {
        self.by_status.get(&status).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Region;

    fn create_test_store() -> LabStore {
        LabStore::seeded()
    }

    fn create_new_lab(name: &str) -> NewLab {
        NewLab {
            name: name.to_string(),
            region: Region::Goa,
            district: "Panaji".to_string(),
            status: LabStatus::Pending,
            address: "1 Beach Road".to_string(),
            contact_person: "Ms. Naik".to_string(),
            contact_number: "+91 9000000000".to_string(),
            email: "lab@example.com".to_string(),
            last_visit: None,
            notes: None,
        }
    }

    #[test]
    fn test_new_is_empty() {
        let store = LabStore::new();
        assert!(store.is_empty());
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_seeded() {
        let store = create_test_store();
        assert_eq!(store.len(), 5);
        assert_eq!(store.list()[0].name, "City Pathology Lab");
    }

    #[test]
    fn test_with_labs_rejects_duplicate_ids() {
        let mut labs = demo_labs();
        labs[1].id = labs[0].id.clone();
        let err = LabStore::with_labs(labs).unwrap_err();
        assert!(matches!(err, Error::DuplicateLabId { id } if id == "l1"));
    }

    #[test]
    fn test_list_is_a_snapshot() {
        let store = create_test_store();
        let mut snapshot = store.list();
        snapshot[0].name = "Changed".to_string();
        snapshot.clear();
        assert_eq!(store.len(), 5);
        assert_eq!(store.get("l1").unwrap().name, "City Pathology Lab");
    }

    #[test]
    fn test_insert_assigns_fresh_id() {
        let mut store = create_test_store();
        let first = store.insert(create_new_lab("Test Lab"));
        let second = store.insert(create_new_lab("Test Lab"));

        assert!(first.id.starts_with("lab-"));
        assert_ne!(first.id, second.id);
        assert_eq!(store.len(), 7);
        assert_eq!(store.list().last().unwrap().id, second.id);
    }

    #[test]
    fn test_insert_starts_with_empty_reports() {
        let mut store = LabStore::new();
        let lab = store.insert(create_new_lab("Test Lab"));
        assert!(lab.reports.is_empty());
        assert_eq!(store.get(&lab.id).unwrap(), lab);
    }

    #[test]
    fn test_replace_overwrites_whole_record() {
        let mut store = create_test_store();
        let mut lab = store.get("l3").unwrap();
        lab.name = "TechHealth Labs II".to_string();
        lab.notes = Some("Moved".to_string());

        let replaced = store.replace(lab.clone()).unwrap();
        assert_eq!(replaced, lab);
        assert_eq!(store.get("l3").unwrap(), lab);
    }

    #[test]
    fn test_replace_missing_id_fails_without_change() {
        let mut store = create_test_store();
        let before = store.list();
        let mut ghost = store.get("l1").unwrap();
        ghost.id = "missing".to_string();

        let err = store.replace(ghost).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(store.list(), before);
    }

    #[test]
    fn test_remove() {
        let mut store = create_test_store();
        assert!(store.remove("l2"));
        assert!(store.get("l2").is_none());
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut store = create_test_store();
        assert!(store.remove("l2"));
        assert!(!store.remove("l2"));
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_set_status_touches_only_status() {
        let mut store = create_test_store();
        let before = store.get("l4").unwrap();

        assert!(store.set_status("l4", LabStatus::Completed));

        let after = store.get("l4").unwrap();
        assert_eq!(after.status, LabStatus::Completed);
        assert_eq!(
            Lab {
                status: before.status,
                ..after
            },
            before
        );
    }

    #[test]
    fn test_set_status_missing_id() {
        let mut store = create_test_store();
        let before = store.list();
        assert!(!store.set_status("nope", LabStatus::Completed));
        assert_eq!(store.list(), before);
    }

    #[test]
    fn test_reports_keep_order() {
        let mut store = LabStore::new();
        let mut lab = store.insert(create_new_lab("Ordered"));
        for (i, summary) in ["first", "second", "third"].iter().enumerate() {
            lab.reports.push(crate::model::Report {
                id: format!("r{i}"),
                date: chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                summary: (*summary).to_string(),
                url: "#".to_string(),
            });
        }
        store.replace(lab.clone()).unwrap();

        let summaries: Vec<_> = store
            .get(&lab.id)
            .unwrap()
            .reports
            .into_iter()
            .map(|r| r.summary)
            .collect();
        assert_eq!(summaries, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_stats() {
        let store = create_test_store();
        let stats = store.stats();
        assert_eq!(stats.total_labs, 5);
        assert_eq!(stats.total_reports, 2);
        assert_eq!(stats.count(LabStatus::Completed), 2);
        assert_eq!(stats.count(LabStatus::InProgress), 1);
        assert_eq!(stats.count(LabStatus::Pending), 1);
        assert_eq!(stats.count(LabStatus::IssueReported), 1);
    }

    #[test]
    fn test_stats_empty() {
        let stats = LabStore::new().stats();
        assert_eq!(stats.total_labs, 0);
        assert_eq!(stats.count(LabStatus::Pending), 0);
    }
}
