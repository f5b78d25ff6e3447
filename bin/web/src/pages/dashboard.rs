//! Role-scoped dashboard pages.
//!
//! Each dashboard wraps its content in [`RequireRole`](crate::guard::RequireRole)
//! with the roles the route admits. Individual and household accounts
//! share one dashboard; centers and staff each have their own.

pub mod center;
pub mod individual;
pub mod staff;

pub use center::CenterDashboardPage;
pub use individual::UserDashboardPage;
pub use staff::StaffDashboardPage;
