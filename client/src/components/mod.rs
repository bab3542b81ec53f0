//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and shared surfaces; pages own the
//! state they are handed.

pub mod collection_frame;
pub mod navbar;
pub mod user_edit_modal;
