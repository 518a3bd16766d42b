//! Aircraft turnaround server.
//!
//! Reads SSIM type-3 schedule records, expands them into dated flights and
//! works out which departure each arriving aircraft operates next, and how
//! long it spends on the ground in between.

pub mod config;
pub mod connect;
pub mod decoder;
pub mod domain;
pub mod expand;
pub mod ingest;
pub mod materialize;
pub mod names;
pub mod pipeline;
pub mod web;
