//! Core library for Vitrine: configuration, session store, and the shop
//! API client. No UI dependencies live here.

pub mod api;
pub mod config;
pub mod session;
