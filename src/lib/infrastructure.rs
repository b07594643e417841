//! Infrastructure concerns around the mail domain

pub mod config;
