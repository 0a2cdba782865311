//! Backup demonstration
//!
//! Runs the same stop/dump/start bracket through all three forms in turn.

use crate::backup::{bracketed, with_service_stopped, MaintenanceGuard, SystemdService};
use crate::error::PrimerResult;

/// Run the scoped-bracket demonstration
pub fn handle_backup_command() -> PrimerResult<()> {
    let mut db = SystemdService::new("postgresql.service");

    println!("Guard form:");
    {
        let _window = MaintenanceGuard::begin(&mut db);
        dump_database();
    }

    println!();
    println!("Closure form:");
    with_service_stopped(&mut db, || {
        dump_database();
        Ok(())
    })?;

    println!();
    println!("Wrapped-task form:");
    let mut backup = bracketed(db, dump_database);
    backup();

    Ok(())
}

/// The unit of work being bracketed
fn dump_database() {
    println!("pg_dump database");
}
