//! Page-local client state.
//!
//! DESIGN
//! ======
//! Plain data types with transition methods; pages wrap them in `RwSignal`s.
//! No state is shared between pages.

pub mod collection;
pub mod user_edit;
