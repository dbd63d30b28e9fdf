//! Interactive menu shell
//!
//! The top-level loop dispatches to the administrator and customer panels.
//! All terminal interaction goes through [`Console`], so the whole session
//! can be scripted in tests.

pub mod admin;
pub mod console;
pub mod customer;
pub mod menu;

pub use console::Console;
pub use menu::{AdminCommand, CustomerCommand, MainMenuChoice, MenuOption};

use std::io::{BufRead, Write};

use crate::config::settings::Settings;
use crate::display::{format_contact_list, format_search_result};
use crate::error::DirectoryResult;
use crate::services::DirectoryView;
use crate::setup::SetupWizard;
use crate::storage::Storage;

/// Run a full session until the user picks Exit
///
/// Missing credentials are bootstrapped first. Closing the input stream ends
/// the session the same way Exit does.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    storage: &mut Storage,
    settings: &mut Settings,
) -> DirectoryResult<()> {
    match run_session(console, storage, settings) {
        Err(e) if e.is_end_of_input() => Ok(()),
        result => result,
    }
}

fn run_session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    storage: &mut Storage,
    settings: &mut Settings,
) -> DirectoryResult<()> {
    let wizard = SetupWizard::new(storage.paths().clone());
    if wizard.needs_setup(storage) {
        wizard.run(console, storage, settings)?;
    }

    loop {
        let Some(choice) = read_menu_choice::<MainMenuChoice, _, _>(console)? else {
            continue;
        };

        match choice {
            MainMenuChoice::Admin => admin::run_admin_panel(console, storage)?,
            MainMenuChoice::Customer => customer::run_customer_panel(console, storage)?,
            MainMenuChoice::Exit => {
                console.say("Exiting program. Goodbye!")?;
                return Ok(());
            }
        }
    }
}

/// Show a menu and read one choice
///
/// Prints the retry message and returns `None` for anything that is not a
/// listed option.
pub(crate) fn read_menu_choice<M: MenuOption, R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> DirectoryResult<Option<M>> {
    console.prompt(&menu::render_menu::<M>())?;
    let Some(number) = console.read_number(&menu::choice_prompt::<M>())? else {
        console.say("Invalid input. Please enter a number.")?;
        return Ok(None);
    };

    let choice = M::from_number(number);
    if choice.is_none() {
        console.say("Invalid choice. Please try again.")?;
    }
    Ok(choice)
}

/// Print a warning for each audit entry that could not be written
pub(crate) fn report_audit_failures<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    storage: &mut Storage,
) -> DirectoryResult<()> {
    for error in storage.take_audit_failures() {
        console.say(format!("Warning: audit log not updated: {}", error))?;
    }
    Ok(())
}

/// Print the full listing
pub(crate) fn show_contacts<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    storage: &Storage,
) -> DirectoryResult<()> {
    console.header("Contact List")?;
    console.say(format_contact_list(&DirectoryView::new(storage).list()))
}

/// Prompt for a term and print the first match
pub(crate) fn search_contacts<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    storage: &Storage,
) -> DirectoryResult<()> {
    console.header("Search Contact")?;
    let term = console.read_line("Enter name or phone number to search: ")?;
    console.say(format_search_result(DirectoryView::new(storage).search(&term)))
}
