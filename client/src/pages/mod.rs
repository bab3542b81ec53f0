//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each list page picks a collection and supplies its row or card template;
//! loading, errors and the count label come from `CollectionFrame`.

pub mod activities;
pub mod home;
pub mod leaderboard;
pub mod teams;
pub mod users;
pub mod workouts;
