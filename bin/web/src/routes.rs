//! Route paths and the role-to-dashboard mapping.

use ecocycle_access::Role;

/// Landing page.
pub const HOME: &str = "/";

/// Login form.
pub const LOGIN: &str = "/login";

/// Account registration form.
pub const REGISTER: &str = "/register";

/// Shown when an authenticated user is denied a role-restricted view.
pub const UNAUTHORIZED: &str = "/unauthorized";

/// Dashboard for individual and household accounts.
pub const USER_DASHBOARD: &str = "/user-dashboard";

/// Dashboard for recycling center accounts.
pub const CENTER_DASHBOARD: &str = "/center-dashboard";

/// Dashboard for staff accounts.
pub const STAFF_DASHBOARD: &str = "/staff-dashboard";

/// Returns the home dashboard for a role, used after login.
///
/// Household accounts share the individual dashboard; they differ in
/// account shape, not in the views they may reach.
#[must_use]
pub fn dashboard_route(role: Role) -> &'static str {
    match role {
        Role::Individual | Role::Household => USER_DASHBOARD,
        Role::RecyclingCenter => CENTER_DASHBOARD,
        Role::Staff => STAFF_DASHBOARD,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_role_lands_on_its_dashboard() {
        assert_eq!(dashboard_route(Role::Individual), "/user-dashboard");
        assert_eq!(dashboard_route(Role::RecyclingCenter), "/center-dashboard");
        assert_eq!(dashboard_route(Role::Staff), "/staff-dashboard");
    }

    #[test]
    fn household_shares_the_individual_dashboard() {
        assert_eq!(dashboard_route(Role::Household), USER_DASHBOARD);
    }
}
