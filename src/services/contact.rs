//! Contact service
//!
//! Business logic for the record store: add, list, search and delete by
//! position. Every mutation rewrites the whole contacts file before it
//! returns; a failed write rolls the in-memory sequence back.

use crate::access::AdminSession;
use crate::audit::AuditEntry;
use crate::error::DirectoryResult;
use crate::models::Contact;
use crate::storage::Storage;

/// A contact together with its 1-based display index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListedContact<'a> {
    pub index: usize,
    pub contact: &'a Contact,
}

/// Result of listing the directory
#[derive(Debug, PartialEq, Eq)]
pub enum Listing<'a> {
    /// The directory has no contacts
    Empty,
    /// Contacts in directory order
    Populated(Vec<ListedContact<'a>>),
}

impl Listing<'_> {
    /// Whether this is the empty signal
    pub fn is_empty(&self) -> bool {
        matches!(self, Listing::Empty)
    }
}

/// Result of a delete request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Index 0 was entered
    Cancelled,
    /// Index outside `1..=size`
    OutOfRange { index: i64, size: usize },
    /// The confirmation step was declined
    Declined,
    /// The contact was removed and the file rewritten
    Deleted(Contact),
}

/// Read-only access to the directory, available to every role
pub struct DirectoryView<'a> {
    storage: &'a Storage,
}

impl<'a> DirectoryView<'a> {
    /// Create a read-only view over the storage
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// List every contact with its 1-based index
    pub fn list(&self) -> Listing<'a> {
        let contacts = self.storage.contacts.all();
        if contacts.is_empty() {
            return Listing::Empty;
        }

        Listing::Populated(
            contacts
                .iter()
                .enumerate()
                .map(|(position, contact)| ListedContact {
                    index: position + 1,
                    contact,
                })
                .collect(),
        )
    }

    /// First contact whose name or phone number contains `term`
    ///
    /// Scanning stops at the first hit; later matches are not reported.
    pub fn search(&self, term: &str) -> Option<ListedContact<'a>> {
        self.storage
            .contacts
            .find_first(term)
            .map(|(position, contact)| ListedContact {
                index: position + 1,
                contact,
            })
    }

    /// Count contacts
    pub fn count(&self) -> usize {
        self.storage.contacts.len()
    }
}

/// Service for contact management
pub struct ContactService<'a> {
    storage: &'a mut Storage,
}

impl<'a> ContactService<'a> {
    /// Create a new contact service
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Append a contact and persist the directory
    ///
    /// No validation: empty fields are accepted.
    pub fn add(
        &mut self,
        _session: &AdminSession,
        name: &str,
        phone_number: &str,
    ) -> DirectoryResult<Contact> {
        let contact = Contact::new(name, phone_number);

        self.storage.contacts.push(contact.clone());
        if let Err(e) = self.storage.contacts.save() {
            self.storage.contacts.pop();
            return Err(e);
        }

        let position = self.storage.contacts.len();
        self.storage.record(AuditEntry::contact_added(position, &contact));

        Ok(contact)
    }

    /// List every contact with its 1-based index
    pub fn list(&self) -> Listing<'_> {
        DirectoryView::new(self.storage).list()
    }

    /// First contact whose name or phone number contains `term`
    pub fn search(&self, term: &str) -> Option<ListedContact<'_>> {
        DirectoryView::new(self.storage).search(term)
    }

    /// Delete the contact at a 1-based index after confirmation
    ///
    /// `confirm` is only called for an in-range index and receives the
    /// contact about to be removed. Index 0 cancels.
    pub fn delete<F>(
        &mut self,
        _session: &AdminSession,
        index: i64,
        confirm: F,
    ) -> DirectoryResult<DeleteOutcome>
    where
        F: FnOnce(&Contact) -> DirectoryResult<bool>,
    {
        if index == 0 {
            return Ok(DeleteOutcome::Cancelled);
        }

        let size = self.storage.contacts.len();
        let position = match usize::try_from(index) {
            Ok(i) if i <= size => i - 1,
            _ => return Ok(DeleteOutcome::OutOfRange { index, size }),
        };

        let Some(target) = self.storage.contacts.get(position) else {
            return Ok(DeleteOutcome::OutOfRange { index, size });
        };

        if !confirm(target)? {
            return Ok(DeleteOutcome::Declined);
        }

        let Some(removed) = self.storage.contacts.remove(position) else {
            return Ok(DeleteOutcome::OutOfRange { index, size });
        };
        if let Err(e) = self.storage.contacts.save() {
            self.storage.contacts.insert(position, removed);
            return Err(e);
        }

        self.storage.record(AuditEntry::contact_deleted(position + 1, &removed));

        Ok(DeleteOutcome::Deleted(removed))
    }

    /// Count contacts
    pub fn count(&self) -> usize {
        self.storage.contacts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::AccessController;
    use crate::audit::{AuditSubject, Operation};
    use crate::config::{paths::DirectoryPaths, settings::Settings};
    use crate::crypto::SecureString;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage, AdminSession) {
        let temp_dir = TempDir::new().unwrap();
        let paths = DirectoryPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths, &Settings::default()).unwrap();
        storage.load_all().unwrap();
        storage
            .credentials
            .store("admin", &SecureString::new("pw"))
            .unwrap();
        let session = AccessController::new()
            .login(&storage.credentials, "admin", "pw")
            .unwrap();
        (temp_dir, storage, session)
    }

    fn reload(temp_dir: &TempDir) -> Vec<Contact> {
        let paths = DirectoryPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths, &Settings::default()).unwrap();
        storage.load_all().unwrap();
        storage.contacts.all().to_vec()
    }

    #[test]
    fn test_add_persists_in_order() {
        let (temp_dir, mut storage, session) = create_test_storage();
        let mut service = ContactService::new(&mut storage);

        service.add(&session, "Ann", "111").unwrap();
        service.add(&session, "Bob", "222").unwrap();
        service.add(&session, "Ann", "111").unwrap();

        assert_eq!(
            reload(&temp_dir),
            vec![
                Contact::new("Ann", "111"),
                Contact::new("Bob", "222"),
                Contact::new("Ann", "111"),
            ]
        );
    }

    #[test]
    fn test_add_accepts_empty_fields() {
        let (temp_dir, mut storage, session) = create_test_storage();
        let mut service = ContactService::new(&mut storage);

        service.add(&session, "", "").unwrap();

        assert_eq!(service.count(), 1);
        assert_eq!(reload(&temp_dir), vec![Contact::new("", "")]);
    }

    #[test]
    fn test_add_is_audited() {
        let (_temp_dir, mut storage, session) = create_test_storage();
        ContactService::new(&mut storage)
            .add(&session, "Ann", "111")
            .unwrap();

        let entries = storage.audit().unwrap().read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[0].subject, AuditSubject::Contact { position: 1 });
    }

    #[test]
    fn test_add_survives_audit_failure() {
        let (temp_dir, mut storage, session) = create_test_storage();
        std::fs::create_dir(temp_dir.path().join("contact_audit.log")).unwrap();

        let added = ContactService::new(&mut storage)
            .add(&session, "Ann", "111")
            .unwrap();

        assert_eq!(added, Contact::new("Ann", "111"));
        assert_eq!(storage.contacts.len(), 1);
        assert_eq!(reload(&temp_dir), vec![Contact::new("Ann", "111")]);
        assert_eq!(storage.take_audit_failures().len(), 1);
    }

    #[test]
    fn test_add_rolls_back_on_write_failure() {
        let (temp_dir, mut storage, session) = create_test_storage();
        // A directory where the file should be makes the rename fail
        std::fs::create_dir(temp_dir.path().join("contacts.txt")).unwrap();

        let mut service = ContactService::new(&mut storage);
        assert!(service.add(&session, "Ann", "111").is_err());
        assert_eq!(service.count(), 0);
    }

    #[test]
    fn test_list_empty_signal() {
        let (_temp_dir, mut storage, _session) = create_test_storage();
        let service = ContactService::new(&mut storage);

        assert_eq!(service.list(), Listing::Empty);
        assert!(service.list().is_empty());
    }

    #[test]
    fn test_list_indices_are_one_based() {
        let (_temp_dir, mut storage, session) = create_test_storage();
        let mut service = ContactService::new(&mut storage);
        service.add(&session, "Ann", "111").unwrap();
        service.add(&session, "Bob", "222").unwrap();

        let Listing::Populated(rows) = service.list() else {
            panic!("expected populated listing");
        };
        let indices: Vec<_> = rows.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![1, 2]);
        assert_eq!(rows[1].contact.name, "Bob");
    }

    #[test]
    fn test_search_returns_first_match_only() {
        let (_temp_dir, mut storage, session) = create_test_storage();
        let mut service = ContactService::new(&mut storage);
        service.add(&session, "Ann", "111").unwrap();
        service.add(&session, "Anna", "222").unwrap();

        let found = service.search("Ann").unwrap();
        assert_eq!(found.index, 1);
        assert_eq!(found.contact, &Contact::new("Ann", "111"));
    }

    #[test]
    fn test_search_by_phone_and_case_sensitivity() {
        let (_temp_dir, mut storage, session) = create_test_storage();
        let mut service = ContactService::new(&mut storage);
        service.add(&session, "Ann", "111").unwrap();
        service.add(&session, "Bob", "555-0199").unwrap();

        assert_eq!(service.search("0199").unwrap().contact.name, "Bob");
        assert!(service.search("ann").is_none());
        assert!(service.search("Zed").is_none());
    }

    #[test]
    fn test_delete_zero_cancels_without_confirming() {
        let (_temp_dir, mut storage, session) = create_test_storage();
        let mut service = ContactService::new(&mut storage);
        service.add(&session, "Ann", "111").unwrap();

        let outcome = service
            .delete(&session, 0, |_| panic!("confirmation must not be requested"))
            .unwrap();

        assert_eq!(outcome, DeleteOutcome::Cancelled);
        assert_eq!(service.count(), 1);
    }

    #[test]
    fn test_delete_zero_on_empty_store() {
        let (_temp_dir, mut storage, session) = create_test_storage();
        let mut service = ContactService::new(&mut storage);

        let outcome = service.delete(&session, 0, |_| Ok(true)).unwrap();
        assert_eq!(outcome, DeleteOutcome::Cancelled);
    }

    #[test]
    fn test_delete_out_of_range() {
        let (temp_dir, mut storage, session) = create_test_storage();
        let mut service = ContactService::new(&mut storage);
        service.add(&session, "Ann", "111").unwrap();
        service.add(&session, "Bob", "222").unwrap();

        for index in [-1, 3, 100, i64::MIN, i64::MAX] {
            let outcome = service
                .delete(&session, index, |_| panic!("confirmation must not be requested"))
                .unwrap();
            assert_eq!(outcome, DeleteOutcome::OutOfRange { index, size: 2 });
        }

        assert_eq!(service.count(), 2);
        assert_eq!(reload(&temp_dir).len(), 2);
    }

    #[test]
    fn test_delete_declined_leaves_store() {
        let (temp_dir, mut storage, session) = create_test_storage();
        let mut service = ContactService::new(&mut storage);
        service.add(&session, "Ann", "111").unwrap();

        let mut shown = None;
        let outcome = service
            .delete(&session, 1, |c| {
                shown = Some(c.name.clone());
                Ok(false)
            })
            .unwrap();

        assert_eq!(outcome, DeleteOutcome::Declined);
        assert_eq!(shown.as_deref(), Some("Ann"));
        assert_eq!(reload(&temp_dir), vec![Contact::new("Ann", "111")]);
    }

    #[test]
    fn test_confirmed_delete_reindexes_and_persists() {
        let (temp_dir, mut storage, session) = create_test_storage();
        let mut service = ContactService::new(&mut storage);
        service.add(&session, "Ann", "111").unwrap();
        service.add(&session, "Bob", "222").unwrap();
        service.add(&session, "Cy", "333").unwrap();

        let outcome = service.delete(&session, 2, |_| Ok(true)).unwrap();
        assert_eq!(outcome, DeleteOutcome::Deleted(Contact::new("Bob", "222")));

        let Listing::Populated(rows) = service.list() else {
            panic!("expected populated listing");
        };
        assert_eq!(rows[1].index, 2);
        assert_eq!(rows[1].contact.name, "Cy");

        assert_eq!(
            reload(&temp_dir),
            vec![Contact::new("Ann", "111"), Contact::new("Cy", "333")]
        );
    }

    #[test]
    fn test_delete_is_audited() {
        let (_temp_dir, mut storage, session) = create_test_storage();
        {
            let mut service = ContactService::new(&mut storage);
            service.add(&session, "Ann", "111").unwrap();
            service.delete(&session, 1, |_| Ok(true)).unwrap();
        }

        let entries = storage.audit().unwrap().read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].operation, Operation::Delete);
        assert_eq!(entries[1].summary, "Ann - 111");
        assert_eq!(entries[1].record, Some(Contact::new("Ann", "111")));
    }

    #[test]
    fn test_delete_restores_position_on_write_failure() {
        let (temp_dir, mut storage, session) = create_test_storage();
        {
            let mut service = ContactService::new(&mut storage);
            service.add(&session, "Ann", "111").unwrap();
            service.add(&session, "Bob", "222").unwrap();
            service.add(&session, "Cy", "333").unwrap();
        }
        let contacts_path = temp_dir.path().join("contacts.txt");
        std::fs::remove_file(&contacts_path).unwrap();
        std::fs::create_dir(&contacts_path).unwrap();

        let mut service = ContactService::new(&mut storage);
        assert!(service.delete(&session, 2, |_| Ok(true)).is_err());

        let Listing::Populated(rows) = service.list() else {
            panic!("expected populated listing");
        };
        let names: Vec<_> = rows.iter().map(|r| r.contact.name.as_str()).collect();
        assert_eq!(names, vec!["Ann", "Bob", "Cy"]);
        assert_eq!(rows[1].index, 2);

        let entries = storage.audit().unwrap().read_all().unwrap();
        assert!(entries.iter().all(|e| e.operation == Operation::Create));
    }

    #[test]
    fn test_confirmation_error_propagates() {
        let (_temp_dir, mut storage, session) = create_test_storage();
        let mut service = ContactService::new(&mut storage);
        service.add(&session, "Ann", "111").unwrap();

        let err = service
            .delete(&session, 1, |_| Err(crate::error::DirectoryError::EndOfInput))
            .unwrap_err();

        assert!(err.is_end_of_input());
        assert_eq!(service.count(), 1);
    }
}
