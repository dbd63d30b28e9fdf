//! Numbered menus for each role

/// A numbered menu entry
pub trait MenuOption: Sized + Copy + PartialEq + 'static {
    /// Heading printed above the options
    const TITLE: &'static str;

    /// Every option, in display order
    fn all() -> &'static [Self];

    /// Text shown next to the option number
    fn label(self) -> &'static str;

    /// 1-based number shown in the menu
    fn number(self) -> usize {
        Self::all()
            .iter()
            .position(|option| *option == self)
            .map_or(0, |position| position + 1)
    }

    /// Option selected by a typed number
    fn from_number(number: i64) -> Option<Self> {
        let position = usize::try_from(number).ok()?.checked_sub(1)?;
        Self::all().get(position).copied()
    }
}

/// Render a menu with its choice prompt
pub fn render_menu<M: MenuOption>() -> String {
    let mut output = format!("\n{}\n", M::TITLE);
    for option in M::all() {
        output.push_str(&format!("{}. {}\n", option.number(), option.label()));
    }
    output
}

/// Prompt shown after a menu
pub fn choice_prompt<M: MenuOption>() -> String {
    format!("Enter your choice (1-{}): ", M::all().len())
}

/// Top-level role selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuChoice {
    Admin,
    Customer,
    Exit,
}

impl MenuOption for MainMenuChoice {
    const TITLE: &'static str = "===== Contact Management System =====";

    fn all() -> &'static [Self] {
        &[Self::Admin, Self::Customer, Self::Exit]
    }

    fn label(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Customer => "Customer",
            Self::Exit => "Exit",
        }
    }
}

/// Operations available after an administrator login
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminCommand {
    AddContact,
    ViewContacts,
    DeleteContact,
    SearchContact,
    ChangeCredentials,
    Logout,
}

impl MenuOption for AdminCommand {
    const TITLE: &'static str = "===== Admin Menu =====";

    fn all() -> &'static [Self] {
        &[
            Self::AddContact,
            Self::ViewContacts,
            Self::DeleteContact,
            Self::SearchContact,
            Self::ChangeCredentials,
            Self::Logout,
        ]
    }

    fn label(self) -> &'static str {
        match self {
            Self::AddContact => "Add Contact",
            Self::ViewContacts => "View Contacts",
            Self::DeleteContact => "Delete Contact",
            Self::SearchContact => "Search Contact",
            Self::ChangeCredentials => "Change Admin Credentials",
            Self::Logout => "Logout",
        }
    }
}

/// Read-only operations offered to customers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerCommand {
    ViewContacts,
    SearchContact,
    Exit,
}

impl MenuOption for CustomerCommand {
    const TITLE: &'static str = "===== Customer Menu =====";

    fn all() -> &'static [Self] {
        &[Self::ViewContacts, Self::SearchContact, Self::Exit]
    }

    fn label(self) -> &'static str {
        match self {
            Self::ViewContacts => "View Contacts",
            Self::SearchContact => "Search Contact",
            Self::Exit => "Exit",
        }
    }
}
