/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Mutex;
use tracing::{info, warn};

/// Named navigation targets the client can ask the host application to show
///
/// Route parameters are kept as raw JSON values since the backend decides
/// whether an identifier is a number or a string.
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(tag = "name", content = "params")]
pub enum Route {
    /// Login view, shown after any `401` response
    Login,
    /// Home view, shown after a successful login
    Home,
    /// Landing page, shown after logout
    LandingPage,
    /// Project designer for a freshly created project
    #[serde(rename = "Design Project")]
    DesignProject {
        /// Project identifier
        id: Value,
    },
    /// League registration step following user registration
    LeagueRegistration {
        /// User identifier
        id: Value,
        /// User sex as returned by the backend
        sex: Value,
        /// User age as returned by the backend
        age: Value,
    },
    /// Invite friends step following league registration
    InviteFriends {
        /// User returned by the league registration
        id: Value,
    },
    /// Wait list confirmation
    WaitList,
    /// Sign and draft step following a friend invitation
    SignAndDraft {
        /// User returned by the invitation
        id: Value,
    },
}

impl Route {
    /// Route name as understood by the host router
    pub fn name(&self) -> &'static str {
        match self {
            Route::Login => "Login",
            Route::Home => "Home",
            Route::LandingPage => "LandingPage",
            Route::DesignProject { .. } => "Design Project",
            Route::LeagueRegistration { .. } => "LeagueRegistration",
            Route::InviteFriends { .. } => "InviteFriends",
            Route::WaitList => "WaitList",
            Route::SignAndDraft { .. } => "SignAndDraft",
        }
    }
}

/// Host router
pub trait Navigator: Send + Sync {
    /// Pushes `route` onto the host's navigation stack
    fn push(&self, route: Route);
}

/// Shared store receiving the `errors` field of API responses for display
pub trait ErrorSink: Send + Sync {
    /// Commits the errors payload
    fn commit(&self, errors: Value);
}

/// Navigator that only logs, used when the host does not provide one
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn push(&self, route: Route) {
        info!("Navigate to {}: {}", route.name(), route);
    }
}

/// Error sink that only logs, used when the host does not provide one
#[derive(Debug, Default, Clone, Copy)]
pub struct LogErrorSink;

impl ErrorSink for LogErrorSink {
    fn commit(&self, errors: Value) {
        warn!("API reported errors: {}", errors);
    }
}

/// Navigator that remembers every pushed route
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    /// Creates an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes pushed so far, oldest first
    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().map(|r| r.clone()).unwrap_or_default()
    }

    /// Most recently pushed route
    pub fn last(&self) -> Option<Route> {
        self.routes.lock().ok().and_then(|r| r.last().cloned())
    }
}

impl Navigator for RecordingNavigator {
    fn push(&self, route: Route) {
        if let Ok(mut routes) = self.routes.lock() {
            routes.push(route);
        }
    }
}

/// Error sink that keeps every committed payload
#[derive(Debug, Default)]
pub struct RecordingErrorSink {
    errors: Mutex<Vec<Value>>,
}

impl RecordingErrorSink {
    /// Creates an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Payloads committed so far, oldest first
    pub fn errors(&self) -> Vec<Value> {
        self.errors.lock().map(|e| e.clone()).unwrap_or_default()
    }
}

impl ErrorSink for RecordingErrorSink {
    fn commit(&self, errors: Value) {
        if let Ok(mut committed) = self.errors.lock() {
            committed.push(errors);
        }
    }
}
