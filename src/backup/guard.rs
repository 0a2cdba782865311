//! Guard form of the backup bracket
//!
//! The guard stops the service when created and restarts it when dropped.
//! Because drops also run during unwinding, the restart is guaranteed on
//! every exit path: normal scope exit, early `?` returns, and panics.

use super::service::DatabaseControl;

/// Stops a service for the guard's lifetime, restarting it on drop
///
/// The body of the maintenance window runs while the guard is alive:
///
/// ```rust,ignore
/// let _window = MaintenanceGuard::begin(&mut db);
/// println!("pg_dump database");
/// // db restarts when _window goes out of scope
/// ```
///
/// Panics from the body are not suppressed; the restart runs and the
/// unwind continues.
#[derive(Debug)]
pub struct MaintenanceGuard<'a, S: DatabaseControl> {
    service: &'a mut S,
}

impl<'a, S: DatabaseControl> MaintenanceGuard<'a, S> {
    /// Stop the service and open the maintenance window
    pub fn begin(service: &'a mut S) -> Self {
        service.stop();
        Self { service }
    }
}

impl<S: DatabaseControl> Drop for MaintenanceGuard<'_, S> {
    fn drop(&mut self) {
        self.service.start();
    }
}
