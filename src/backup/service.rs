//! The controlled service seam
//!
//! The bracket forms only need two actions from the thing they protect:
//! stop and start. [`SystemdService`] is the concrete service used by the
//! demonstrations; tests substitute a recording double.

/// A service that can be stopped and restarted around a unit of work
pub trait DatabaseControl {
    /// Stop the service
    fn stop(&mut self);

    /// Start the service
    fn start(&mut self);
}

/// A systemd-managed service, controlled by printing the systemctl calls
///
/// The demonstrations do not talk to a real service manager; the printed
/// lines stand in for the side effects.
#[derive(Debug, Clone)]
pub struct SystemdService {
    /// Unit name, e.g. "postgresql.service"
    unit: String,
}

impl SystemdService {
    /// Create a handle for the given unit
    pub fn new(unit: impl Into<String>) -> Self {
        Self { unit: unit.into() }
    }

    /// The unit this handle controls
    pub fn unit(&self) -> &str {
        &self.unit
    }
}

impl DatabaseControl for SystemdService {
    fn stop(&mut self) {
        println!("systemctl stop {}", self.unit);
    }

    fn start(&mut self) {
        println!("systemctl start {}", self.unit);
    }
}
