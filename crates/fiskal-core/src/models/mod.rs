//! Data models for fiscal receipts and configuration.

pub mod config;
pub mod invoice;
