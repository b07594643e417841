//! Domain types

pub mod mail;
