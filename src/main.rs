use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use contact_desk::config::{paths::DirectoryPaths, settings::Settings};
use contact_desk::shell::{self, Console};
use contact_desk::storage::Storage;

#[derive(Parser)]
#[command(
    name = "contact-desk",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based contact directory",
    long_about = "Contact Desk keeps a small contact directory in contacts.txt. \
                  Administrators log in to add, delete and search contacts; \
                  customers can view and search without logging in."
)]
struct Cli {
    /// Directory holding contacts.txt and admin_credentials.txt
    #[arg(long, global = true, env = "CONTACT_DESK_DIR", value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show current configuration and paths
    Config,

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value_t = 20)]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => DirectoryPaths::with_base_dir(dir),
        None => DirectoryPaths::new(),
    };
    let mut settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Config) => {
            println!("Contact Desk Configuration");
            println!("==========================");
            println!("Data directory:    {}", paths.base_dir().display());
            println!("Contacts file:     {}", paths.contacts_file().display());
            println!("Credentials file:  {}", paths.credentials_file().display());
            println!("Audit log:         {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Password scheme:   {:?}", settings.password_scheme);
            println!("  Audit log enabled: {}", settings.audit_log_enabled);
            println!("  Setup completed:   {}", settings.setup_completed);
        }
        Some(Commands::Audit { count }) => {
            let storage = Storage::new(paths, &settings)?;
            let entries = match storage.audit() {
                Some(logger) => logger.read_recent(count)?,
                None => {
                    println!("Audit logging is disabled.");
                    return Ok(());
                }
            };

            if entries.is_empty() {
                println!("No audit entries.");
            }
            for entry in entries {
                println!("{}", entry.format_human_readable());
            }
        }
        None => {
            let mut storage = Storage::new(paths, &settings)?;
            storage.load_all()?;

            let mut console = Console::stdio();
            shell::run(&mut console, &mut storage, &mut settings)?;
        }
    }

    Ok(())
}
