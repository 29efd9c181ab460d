//! Page modules for top-level screens.
//!
//! ARCHITECTURE
//! ============
//! The app is a single page; `home` owns both controllers' orchestration
//! and delegates rendering details to `components`.

pub mod home;
