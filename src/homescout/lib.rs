//! # Homescout Architecture
//!
//! Homescout is a **UI-agnostic listing-browsing library**. This is not a CLI
//! application that happens to have some library code; it's a library that
//! happens to have a CLI client.
//!
//! ## The Layered Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the gateway and the two stateful services           │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic                                      │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                     │                    │
//!                     ▼                    ▼
//! ┌──────────────────────────┐  ┌──────────────────────────────┐
//! │  Core (query, filters,   │  │  Gateway Layer (gateway/)    │
//! │  favorites)              │  │  - ListingGateway trait      │
//! │  - Pure evaluation and   │  │  - Backend record mapping    │
//! │    session state         │  │  - DemoGateway (embedded)    │
//! └──────────────────────────┘  └──────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract SessionStore trait                              │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, core, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! This means the same core could serve a web UI, a TUI, or any other client.
//!
//! ## State and Persistence
//!
//! Two independent concerns live behind the [`store::SessionStore`] trait:
//! the favorite-listing id set (durable across sessions) and the last-used
//! filter/sort configuration (session-scoped). The [`favorites::Favorites`]
//! and [`filters::FilterState`] services wrap them with write-through
//! persistence: every mutation is saved before the call returns, so memory
//! and storage never diverge after a completed operation. Both services
//! expose an explicit `subscribe` callback contract instead of any implicit
//! re-render mechanism.
//!
//! ## Testing Strategy
//!
//! 1. **Core and commands**: Thorough unit tests of the evaluation pipeline
//!    and state services. This is where the lion's share of testing lives.
//! 2. **Storage/gateway**: FileStore round-trips on temp dirs; record
//!    mapping against raw backend payloads.
//! 3. **CLI** (`tests/`): end-to-end runs of the binary against a temp
//!    data dir.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`query`]: The filter/sort/search evaluation pipeline
//! - [`filters`]: Filter/sort configuration and its state service
//! - [`favorites`]: Favorite-set state service
//! - [`store`]: Session storage abstraction and implementations
//! - [`gateway`]: Listing data source abstraction and record mapping
//! - [`model`]: Core data types (`Listing`, `PropertyType`)
//! - [`format`]: Display formatting helpers for clients
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod error;
pub mod favorites;
pub mod filters;
pub mod format;
pub mod gateway;
pub mod model;
pub mod query;
pub mod store;
