//! Guarded view-level navigation state machine.
//!
//! `Navigator` owns the current view identifier and the optional payload the
//! active flow operates on. It is mutated only through [`Navigator::navigate`]
//! and [`Navigator::enforce_guard`]; views never touch it directly.
use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::domain::application::Application;
use crate::domain::session::{Role, Session};

/// View identifiers the client can render. The machine has no terminal
/// state; it runs for the life of the process.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum View {
    Home,
    Signup,
    Login,
    AdminLogin,
    Profile,
    Apply,
    Payment,
    Dashboard,
    AdminDashboard,
    Feedback,
}

impl Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            View::Home => "home",
            View::Signup => "signup",
            View::Login => "login",
            View::AdminLogin => "adminLogin",
            View::Profile => "profile",
            View::Apply => "apply",
            View::Payment => "payment",
            View::Dashboard => "dashboard",
            View::AdminDashboard => "adminDashboard",
            View::Feedback => "feedback",
        };
        write!(f, "{name}")
    }
}

impl View {
    /// Views reachable only with a citizen session.
    fn is_protected_citizen(self) -> bool {
        matches!(
            self,
            View::Dashboard | View::Profile | View::Apply | View::Payment | View::Feedback
        )
    }

    /// Views reachable only with an administrator session.
    fn is_protected_admin(self) -> bool {
        matches!(self, View::AdminDashboard)
    }
}

/// Context payload carried by the `apply` and `payment` views.
#[derive(Clone, Debug, PartialEq)]
pub enum NavPayload {
    /// Service selected for a new application.
    Service { service_id: i64 },
    /// Application a payment is being submitted for.
    Application(Application),
}

impl Default for View {
    fn default() -> Self {
        View::Home
    }
}

/// Navigation controller state. Initial state is `home` with no payload.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Navigator {
    current: View,
    payload: Option<NavPayload>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> View {
        self.current
    }

    pub fn payload(&self) -> Option<&NavPayload> {
        self.payload.as_ref()
    }

    /// Transitions to `view`. The payload is stored only when the target is
    /// `apply` or `payment`; for every other target the prior payload carries
    /// over, so a payment flow can still reference the application that
    /// triggered it.
    pub fn navigate(&mut self, view: View, payload: Option<NavPayload>) {
        if matches!(view, View::Apply | View::Payment) {
            self.payload = payload;
        }
        self.current = view;
    }

    /// Applies the access guard until it reaches its fixed point, returning
    /// the view that was forced, if any. Re-running with unchanged inputs
    /// produces no further transition.
    pub fn enforce_guard(&mut self, session: Option<&Session>) -> Option<View> {
        let mut forced = None;
        while let Some(target) = self.guard_target(session) {
            self.current = target;
            forced = Some(target);
        }
        forced
    }

    fn guard_target(&self, session: Option<&Session>) -> Option<View> {
        let view = self.current;
        match session {
            None if view.is_protected_citizen() || view.is_protected_admin() => Some(View::Login),
            Some(session)
                if session.role == Role::Administrator && view.is_protected_citizen() =>
            {
                Some(View::AdminDashboard)
            }
            Some(session) if session.role == Role::Citizen && view.is_protected_admin() => {
                Some(View::Dashboard)
            }
            _ => None,
        }
    }
}
