//! Page components for the application.
//!
//! Each page is a Leptos component that renders a specific route. The
//! dashboard pages wrap their content in the access guard; everything
//! else is public.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod register;
pub mod unauthorized;

// Re-export all page components for convenient access
pub use dashboard::{CenterDashboardPage, StaffDashboardPage, UserDashboardPage};
pub use home::HomePage;
pub use login::LoginPage;
pub use register::RegisterPage;
pub use unauthorized::UnauthorizedPage;
