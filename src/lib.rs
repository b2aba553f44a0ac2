//! A client for the BusinessObjects BI platform REST API.
//!
//! This crate provides a stateful client that logs on to the platform, walks
//! the folder hierarchy, resolves universes and their dependent reports, and
//! maintains Web Intelligence documents and their data providers. A small
//! command-line front end drives it for batch use.
//!
//! # Modules
//!
//! - `transport`: endpoint roots, base headers and the HTTP connection
//! - `client`: the [`BoClient`] session type
//! - `auth`: enterprise and trusted logon, logoff
//! - `navigator`: recursive folder and document discovery
//! - `query`: CMS query templates
//! - `universe`: universe details and related reports
//! - `documents`: document and data provider operations
//! - `model`: data models for platform entities
//! - `configuration`: configuration management
//! - `format`: JSON and CSV output
//! - `commands` / `actions`: CLI command definitions and handlers

pub mod actions;
pub mod auth;
pub mod client;
pub mod commands;
pub mod configuration;
pub mod documents;
pub mod error;
pub mod exit_codes;
pub mod format;
pub mod model;
pub mod navigator;
pub mod query;
pub mod transport;
pub mod universe;

pub use client::BoClient;
pub use error::ClientError;
pub use model::{DocumentStatus, ObjectId};
