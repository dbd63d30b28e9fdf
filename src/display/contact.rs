//! Contact display formatting
//!
//! Formats directory listings and search results for terminal output.

use tabled::{settings::Style, Table, Tabled};

use crate::models::Contact;
use crate::services::{ListedContact, Listing};

/// Message shown instead of a table when the directory is empty
pub const EMPTY_DIRECTORY_MESSAGE: &str = "No contacts found. Your contact list is empty.";

/// Message shown when a search finds nothing
pub const NO_MATCH_MESSAGE: &str = "No matching contacts found.";

#[derive(Tabled)]
struct ContactRow<'a> {
    #[tabled(rename = "Index")]
    index: usize,
    #[tabled(rename = "Name")]
    name: &'a str,
    #[tabled(rename = "Phone Number")]
    phone_number: &'a str,
}

/// Format the directory listing as a table
pub fn format_contact_list(listing: &Listing<'_>) -> String {
    let rows = match listing {
        Listing::Empty => return EMPTY_DIRECTORY_MESSAGE.to_string(),
        Listing::Populated(rows) => rows,
    };

    let rows = rows.iter().map(|row| ContactRow {
        index: row.index,
        name: &row.contact.name,
        phone_number: &row.contact.phone_number,
    });

    Table::new(rows).with(Style::psql()).to_string()
}

/// Format a search result block
pub fn format_search_result(result: Option<ListedContact<'_>>) -> String {
    let mut output = String::from("--- Search Results ---\n");
    match result {
        Some(found) => output.push_str(&found.contact.to_string()),
        None => output.push_str(NO_MATCH_MESSAGE),
    }
    output
}

/// One-line summary used in confirmations
pub fn format_contact_summary(contact: &Contact) -> String {
    if contact.name.is_empty() {
        format!("(unnamed) - {}", contact.phone_number)
    } else {
        contact.to_string()
    }
}
