//! Capability-gated alert effects.
//!
//! Sound and notifications may be missing on a given host. Rather than
//! probing ad hoc at every call site, each effect is wrapped in an
//! [`Alerting`] value that is either `Enabled` with the capability or
//! `Disabled`, in which case every effect is a silent no-op.

use log::{debug, info};
use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alerting<T> {
    Enabled(T),
    Disabled,
}

impl<T> Alerting<T> {
    pub fn from_option(capability: Option<T>) -> Self {
        match capability {
            Some(c) => Alerting::Enabled(c),
            None => Alerting::Disabled,
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, Alerting::Enabled(_))
    }

    /// Run `effect` against the capability, or do nothing when disabled.
    pub fn fire(&self, effect: impl FnOnce(&T)) {
        if let Alerting::Enabled(capability) = self {
            effect(capability);
        }
    }
}

/// Notification permission as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Default,
    Granted,
    Denied,
}

impl Permission {
    /// Map the host's permission string; unknown values read as `Default`.
    pub fn from_host(value: &str) -> Self {
        match value {
            "granted" => Permission::Granted,
            "denied" => Permission::Denied,
            _ => Permission::Default,
        }
    }
}

/// Callback handed to the permission prompt; invoked once with the answer.
pub type PermissionReply = Box<dyn FnOnce(Permission)>;

/// Tracks whether notifications may be shown.
///
/// The flag is shared so an asynchronous permission answer can enable it
/// after the check returns. Once enabled it stays enabled for the session.
#[derive(Debug, Clone, Default)]
pub struct NotificationGate {
    enabled: Rc<Cell<bool>>,
}

impl NotificationGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    /// Resolve the gate against the host's current permission.
    ///
    /// `current` is `None` when the host has no notification capability.
    /// `request` is only called while permission is still undecided; it
    /// must eventually pass the user's answer to the reply it receives.
    pub fn check(&self, current: Option<Permission>, request: impl FnOnce(PermissionReply)) {
        match current {
            None => debug!("notifications unsupported, leaving them disabled"),
            Some(Permission::Denied) => debug!("notification permission denied"),
            Some(Permission::Granted) => self.enabled.set(true),
            Some(Permission::Default) => {
                let enabled = self.enabled.clone();
                request(Box::new(move |answer| {
                    if answer == Permission::Granted {
                        info!("notification permission granted");
                        enabled.set(true);
                    }
                }));
            }
        }
    }

    /// `Enabled(())` when notifications may be sent.
    pub fn alerting(&self) -> Alerting<()> {
        if self.is_enabled() {
            Alerting::Enabled(())
        } else {
            Alerting::Disabled
        }
    }
}
