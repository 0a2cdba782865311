//! Scoped service bracketing for backups
//!
//! Taking a backup of a live database means stopping the service first and
//! restarting it afterwards, no matter how the backup itself went. This
//! module provides three equivalent ways to express that bracket:
//!
//! # Architecture
//!
//! - [`MaintenanceGuard`]: a guard value that stops the service when
//!   created and restarts it when dropped, including during unwinding
//! - [`with_service_stopped`]: a function that runs a fallible closure
//!   between the stop and the restart
//! - [`bracketed`]: wraps a task so that every call of the wrapped task is
//!   preceded by the stop and followed by the restart
//!
//! All three produce the same observable ordering: stop, task, start. The
//! restart runs on every exit path; a failing task's error reaches the
//! caller only after the service is back up. None of the forms suppresses
//! or transforms task failures.
//!
//! The service itself sits behind the [`DatabaseControl`] trait; the
//! bracket forms never name what is actually being stopped.
//!
//! # Example
//!
//! ```rust,ignore
//! use primer::backup::{with_service_stopped, SystemdService};
//!
//! let mut db = SystemdService::new("postgresql.service");
//! with_service_stopped(&mut db, || {
//!     println!("pg_dump database");
//!     Ok(())
//! })?;
//! ```

mod bracket;
mod guard;
mod service;

pub use bracket::{bracketed, with_service_stopped};
pub use guard::MaintenanceGuard;
pub use service::{DatabaseControl, SystemdService};
