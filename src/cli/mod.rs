//! CLI command handlers
//!
//! One handler per demonstration, bridging the clap argument parsing with
//! the library types.

pub mod backup;
pub mod dates;
pub mod email;

pub use backup::handle_backup_command;
pub use dates::handle_dates_command;
pub use email::handle_email_command;
