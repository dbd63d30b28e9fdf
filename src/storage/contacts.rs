//! Contact repository for text storage
//!
//! Manages loading and saving contacts to contacts.txt, one
//! `name,phoneNumber` record per line, in directory order.

use std::path::{Path, PathBuf};

use crate::error::DirectoryError;
use crate::models::Contact;

use super::file_io::{read_lines, write_text_atomic};

/// Repository for contact persistence
///
/// Holds the ordered in-memory sequence; positions are 0-based here and
/// converted to 1-based display indices by the service layer.
pub struct ContactRepository {
    path: PathBuf,
    contacts: Vec<Contact>,
}

impl ContactRepository {
    /// Create a new, empty contact repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            contacts: Vec::new(),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load contacts from disk, replacing the in-memory sequence
    ///
    /// A missing file loads as an empty directory. Lines without a delimiter
    /// are skipped.
    pub fn load(&mut self) -> Result<(), DirectoryError> {
        self.contacts = match read_lines(&self.path)? {
            Some(lines) => parse_contacts(&lines),
            None => Vec::new(),
        };
        Ok(())
    }

    /// Rewrite the whole file from the in-memory sequence
    pub fn save(&self) -> Result<(), DirectoryError> {
        write_text_atomic(&self.path, &serialize_contacts(&self.contacts))
    }

    /// Append a contact at the end of the sequence
    pub fn push(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }

    /// Remove the most recently appended contact
    pub fn pop(&mut self) -> Option<Contact> {
        self.contacts.pop()
    }

    /// Insert a contact at a 0-based position, shifting later contacts
    pub fn insert(&mut self, position: usize, contact: Contact) {
        let position = position.min(self.contacts.len());
        self.contacts.insert(position, contact);
    }

    /// Remove the contact at a 0-based position
    pub fn remove(&mut self, position: usize) -> Option<Contact> {
        if position < self.contacts.len() {
            Some(self.contacts.remove(position))
        } else {
            None
        }
    }

    /// Get the contact at a 0-based position
    pub fn get(&self, position: usize) -> Option<&Contact> {
        self.contacts.get(position)
    }

    /// All contacts in directory order
    pub fn all(&self) -> &[Contact] {
        &self.contacts
    }

    /// First contact matching `term`, scanning in directory order
    pub fn find_first(&self, term: &str) -> Option<(usize, &Contact)> {
        self.contacts
            .iter()
            .enumerate()
            .find(|(_, contact)| contact.matches(term))
    }

    /// Count contacts
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Whether the directory has no contacts
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

/// Parse record lines, skipping malformed ones
fn parse_contacts(lines: &[String]) -> Vec<Contact> {
    lines
        .iter()
        .filter_map(|line| Contact::parse_record_line(line))
        .collect()
}

/// One record per line, each terminated by `\n`
fn serialize_contacts(contacts: &[Contact]) -> String {
    let mut out = String::new();
    for contact in contacts {
        out.push_str(&contact.to_record_line());
        out.push('\n');
    }
    out
}
