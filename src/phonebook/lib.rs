//! # Phonebook Architecture
//!
//! Phonebook is a small contact list kept in a plain text file, one contact
//! per line. The crate is a library with a thin CLI on top: nothing from
//! `api.rs` inward writes to stdout or decides exit codes.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, runs the menu, prints results          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the Phonebook and the DataStore                     │
//! │  - load / save / ensure_seeded, dispatches to commands      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Operations on the in-memory Phonebook                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/) + Codec (codec.rs)                  │
//! │  - DataStore trait: FileStore, InMemoryStore                │
//! │  - Line format <-> Vec<Contact>                             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## File Format
//!
//! ```text
//! Alan, +7 903, ID:907
//! Alex, +7 345, ID:907
//! ```
//!
//! See [`codec`] for the parsing rules.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation
//! - [`phonebook`]: The in-memory contact collection
//! - [`model`]: `Contact` and identifier normalization
//! - [`codec`]: Text format
//! - [`store`]: Persistence gateway and implementations
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod phonebook;
pub mod store;
