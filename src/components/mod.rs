//! UI Components
//!
//! Reusable Leptos components shared by the landing page and dashboard.

pub mod counter;
pub mod marquee;
pub mod sign_in_modal;

pub use counter::StatCounter;
pub use marquee::LogoMarquee;
pub use sign_in_modal::SignInModal;
