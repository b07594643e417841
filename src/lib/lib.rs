#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Request payload builder for the SendGrid v3 `mail/send` endpoint.
//!
//! A [`Message`](domain::mail::Message) collects senders, recipients, content
//! and delivery options, then serializes them into the JSON document the
//! endpoint expects.

pub mod domain;
pub mod infrastructure;
