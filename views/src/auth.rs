//! Demo login and the console's fixed route table.
//!
//! DESIGN
//! ======
//! Two hardcoded identities exist: a super admin who sees every tenant and a
//! restaurant admin pinned to a single restaurant. Authentication only decides
//! which landing route a successful login navigates to; it grants nothing else.

use serde::Serialize;

use crate::model::UserRole;

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Shared password of both demo identities.
const DEMO_PASSWORD: &str = "password";
pub const DEMO_ADMIN_EMAIL: &str = "admin@nebula.ai";
pub const DEMO_RESTAURANT_EMAIL: &str = "restaurant@nebula.ai";
/// Tenant the demo restaurant admin manages.
pub const DEMO_RESTAURANT_ID: &str = "1";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid email or password")]
    InvalidCredentials,
}

/// Who is signed in, and over which tenants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    RestaurantAdmin { restaurant_id: String },
}

impl Role {
    /// Where a successful login navigates.
    #[must_use]
    pub fn home(&self) -> Route {
        match self {
            Self::SuperAdmin => Route::Dashboard,
            Self::RestaurantAdmin { .. } => Route::RestaurantDashboard,
        }
    }

    /// The tenant this role is confined to, if any.
    #[must_use]
    pub fn tenant(&self) -> Option<&str> {
        match self {
            Self::SuperAdmin => None,
            Self::RestaurantAdmin { restaurant_id } => Some(restaurant_id.as_str()),
        }
    }

    /// Account role this login corresponds to.
    #[must_use]
    pub fn user_role(&self) -> UserRole {
        match self {
            Self::SuperAdmin => UserRole::SuperAdmin,
            Self::RestaurantAdmin { .. } => UserRole::RestaurantAdmin,
        }
    }

    #[must_use]
    pub fn is_super_admin(&self) -> bool {
        matches!(self, Self::SuperAdmin)
    }

    /// Whether this role may open `route`.
    #[must_use]
    pub fn can_open(&self, route: Route) -> bool {
        match route.area() {
            Area::Public => true,
            Area::Admin => self.is_super_admin(),
            Area::Restaurant => !self.is_super_admin(),
        }
    }
}

/// Check submitted credentials against the demo identities.
///
/// # Errors
///
/// Returns [`LoginError::InvalidCredentials`] for any other combination.
pub fn authenticate(email: &str, password: &str) -> Result<Role, LoginError> {
    match (email, password) {
        (DEMO_ADMIN_EMAIL, DEMO_PASSWORD) => Ok(Role::SuperAdmin),
        (DEMO_RESTAURANT_EMAIL, DEMO_PASSWORD) => {
            Ok(Role::RestaurantAdmin { restaurant_id: DEMO_RESTAURANT_ID.to_owned() })
        }
        _ => Err(LoginError::InvalidCredentials),
    }
}

// =============================================================================
// ROUTES
// =============================================================================

/// Section of the console a route belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Area {
    Public,
    Admin,
    Restaurant,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Login,
    Dashboard,
    Restaurants,
    AgentConfig,
    AutomationFlows,
    ReservationSync,
    Metrics,
    NotificationCenter,
    RestaurantDashboard,
    AgentSettings,
    Menu,
    Reservations,
    Conversations,
    Users,
    RestaurantNotifications,
}

impl Route {
    pub const ALL: &'static [Self] = &[
        Self::Login,
        Self::Dashboard,
        Self::Restaurants,
        Self::AgentConfig,
        Self::AutomationFlows,
        Self::ReservationSync,
        Self::Metrics,
        Self::NotificationCenter,
        Self::RestaurantDashboard,
        Self::AgentSettings,
        Self::Menu,
        Self::Reservations,
        Self::Conversations,
        Self::Users,
        Self::RestaurantNotifications,
    ];

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Dashboard => "/dashboard",
            Self::Restaurants => "/restaurants",
            Self::AgentConfig => "/agent-config",
            Self::AutomationFlows => "/n8n-flows",
            Self::ReservationSync => "/apparta",
            Self::Metrics => "/metrics",
            Self::NotificationCenter => "/notification-center",
            Self::RestaurantDashboard => "/restaurant-dashboard",
            Self::AgentSettings => "/agent-settings",
            Self::Menu => "/menu",
            Self::Reservations => "/reservations",
            Self::Conversations => "/conversations",
            Self::Users => "/users",
            Self::RestaurantNotifications => "/restaurant-notifications",
        }
    }

    #[must_use]
    pub fn area(self) -> Area {
        match self {
            Self::Login => Area::Public,
            Self::Dashboard
            | Self::Restaurants
            | Self::AgentConfig
            | Self::AutomationFlows
            | Self::ReservationSync
            | Self::Metrics
            | Self::NotificationCenter => Area::Admin,
            Self::RestaurantDashboard
            | Self::AgentSettings
            | Self::Menu
            | Self::Reservations
            | Self::Conversations
            | Self::Users
            | Self::RestaurantNotifications => Area::Restaurant,
        }
    }

    /// Exact path lookup; there are no parameterized routes.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|r| r.path() == path)
    }
}

/// Where the root path sends a visitor.
#[must_use]
pub fn root_redirect(role: Option<&Role>) -> Route {
    role.map_or(Route::Login, Role::home)
}
