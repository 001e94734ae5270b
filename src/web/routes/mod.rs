//! Route handlers

pub mod chat;
pub mod copy;
pub mod health;
pub mod page;
pub mod sidebar;
pub mod upload;
