//! Customer panel
//!
//! Customers get a read-only view of the storage; nothing reachable from
//! here can mutate the directory or the credentials.

use std::io::{BufRead, Write};

use crate::error::DirectoryResult;
use crate::storage::Storage;

use super::console::Console;
use super::menu::CustomerCommand;
use super::{read_menu_choice, search_contacts, show_contacts};

/// Run the customer menu until the customer chooses Exit
pub fn run_customer_panel<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    storage: &Storage,
) -> DirectoryResult<()> {
    loop {
        let Some(command) = read_menu_choice::<CustomerCommand, _, _>(console)? else {
            continue;
        };

        match command {
            CustomerCommand::ViewContacts => show_contacts(console, storage)?,
            CustomerCommand::SearchContact => search_contacts(console, storage)?,
            CustomerCommand::Exit => return Ok(()),
        }
    }
}
