//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and display
//! formatting from page and component logic to keep both testable.

pub mod badges;
pub mod browser;
pub mod fetch;
pub mod format;
