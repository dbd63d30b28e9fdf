//! Administrator panel
//!
//! A fresh [`AccessController`] guards each visit. Mutations take the
//! [`AdminSession`] returned by the login, so none of them can run before it
//! succeeds.

use std::io::{BufRead, Write};

use crate::access::{AccessController, AdminSession};
use crate::display::{format_contact_list, format_contact_summary};
use crate::error::{DirectoryError, DirectoryResult};
use crate::models::FIELD_DELIMITER;
use crate::services::{ContactService, CredentialService, DeleteOutcome, DirectoryView};
use crate::storage::Storage;

use super::console::Console;
use super::menu::AdminCommand;
use super::{read_menu_choice, report_audit_failures, search_contacts, show_contacts};

/// Log in, then run the admin menu until Logout
///
/// A rejected login prints the denial and returns to the caller.
pub fn run_admin_panel<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    storage: &mut Storage,
) -> DirectoryResult<()> {
    let mut controller = AccessController::new();

    console.header("Admin Login")?;
    let username = console.read_line("Enter username: ")?;
    let password = console.read_secret("Enter password: ")?;

    let session = match controller.login(&storage.credentials, &username, &password) {
        Ok(session) => session,
        Err(e) if e.is_access_denied() => return console.say(e),
        Err(e) => return report_error(console, e),
    };
    console.say("Login successful!")?;

    loop {
        let Some(command) = read_menu_choice::<AdminCommand, _, _>(console)? else {
            continue;
        };

        let result = match command {
            AdminCommand::AddContact => add_contact(console, storage, &session),
            AdminCommand::ViewContacts => show_contacts(console, storage),
            AdminCommand::DeleteContact => delete_contact(console, storage, &session),
            AdminCommand::SearchContact => search_contacts(console, storage),
            AdminCommand::ChangeCredentials => change_credentials(console, storage, &session),
            AdminCommand::Logout => {
                let started = session.started_at().format("%H:%M:%S UTC").to_string();
                controller.logout(session);
                return console.say(format!("Logged out. Session started at {}.", started));
            }
        };

        if let Err(e) = result {
            report_error(console, e)?;
        }
    }
}

/// Print an operation failure and carry on; a closed input still ends the run
fn report_error<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    error: DirectoryError,
) -> DirectoryResult<()> {
    if error.is_end_of_input() {
        return Err(error);
    }
    console.say(format!("Error: {}", error))
}

fn add_contact<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    storage: &mut Storage,
    session: &AdminSession,
) -> DirectoryResult<()> {
    console.header("Add New Contact")?;
    let name = console.read_line("Enter name: ")?;
    let phone_number = console.read_line("Enter phone number: ")?;

    let contact = ContactService::new(storage).add(session, &name, &phone_number)?;
    console.say("Contact added successfully.")?;

    if contact.name_contains_delimiter() {
        console.say(format!(
            "Warning: the name contains '{}'; it will be split there when the directory is reloaded.",
            FIELD_DELIMITER
        ))?;
    }
    report_audit_failures(console, storage)
}

fn delete_contact<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    storage: &mut Storage,
    session: &AdminSession,
) -> DirectoryResult<()> {
    console.header("Delete Contact")?;
    let listing = DirectoryView::new(storage).list();
    let empty = listing.is_empty();
    console.say(format_contact_list(&listing))?;
    if empty {
        return Ok(());
    }

    // Anything that is not a number counts as 0
    let index = console
        .read_number("Enter the index number of the contact to delete (0 to cancel): ")?
        .unwrap_or(0);

    let outcome = ContactService::new(storage).delete(session, index, |contact| {
        console.read_confirmation(&format!(
            "Are you sure you want to delete {}? (y/n): ",
            format_contact_summary(contact)
        ))
    })?;

    match outcome {
        DeleteOutcome::Cancelled | DeleteOutcome::Declined => console.say("Deletion cancelled."),
        DeleteOutcome::OutOfRange { .. } => console.say("Invalid contact number."),
        DeleteOutcome::Deleted(_) => {
            console.say("Contact deleted successfully.")?;
            report_audit_failures(console, storage)
        }
    }
}

fn change_credentials<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    storage: &mut Storage,
    session: &AdminSession,
) -> DirectoryResult<()> {
    console.header("Change Admin Credentials")?;
    let username = console.read_line("Enter new username: ")?;
    let password = console.read_secret("Enter new password: ")?;

    CredentialService::new(storage).change(session, &username, &password)?;
    console.say("Admin credentials changed successfully.")?;
    report_audit_failures(console, storage)
}
