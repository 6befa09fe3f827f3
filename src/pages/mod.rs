//! Pages
//!
//! Top-level page components for each route.

pub mod dashboard;
pub mod landing;

pub use dashboard::Dashboard;
pub use landing::Landing;
