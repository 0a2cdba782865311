//! Closure forms of the backup bracket
//!
//! Both forms reuse [`MaintenanceGuard`] internally, so they share its
//! guarantee: the restart runs before anything else reaches the caller.

use super::guard::MaintenanceGuard;
use super::service::DatabaseControl;
use crate::error::PrimerResult;

/// Run a fallible body with the service stopped
///
/// Stops the service, runs the body, and restarts the service before the
/// body's result is returned. A body error propagates unchanged; the
/// restart has already run by the time the caller sees it.
pub fn with_service_stopped<S, T, F>(service: &mut S, body: F) -> PrimerResult<T>
where
    S: DatabaseControl,
    F: FnOnce() -> PrimerResult<T>,
{
    let _window = MaintenanceGuard::begin(service);
    body()
}

/// Wrap a task so every call runs with the service stopped
///
/// Takes ownership of the service and the task and returns a closure.
/// Each invocation of the closure stops the service, runs the task, and
/// restarts the service. Unlike [`with_service_stopped`], the task gets no
/// handle to anything; it is a plain unit of work.
pub fn bracketed<S, F>(mut service: S, mut task: F) -> impl FnMut()
where
    S: DatabaseControl,
    F: FnMut(),
{
    move || {
        let _window = MaintenanceGuard::begin(&mut service);
        task();
    }
}
