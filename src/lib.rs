//! # Slate Rust Backend
//!
//! Weekly teaching timetable generation engine.
//!
//! This crate provides a Rust backend for the Slate timetable system: it assigns
//! weekly teaching sessions to (period x day) slots across class sections, keeping
//! the shared teacher conflict-free, and exposes the result over a REST API via Axum
//! for the web frontend.
//!
//! ## Features
//!
//! - **Slot Allocation**: Greedy first-fit placement of theory and lab sessions with
//!   half-day preference and a rotating cursor
//! - **Teacher Grid**: A derived week view of the shared teacher across all sections
//! - **Persistence**: Saved timetable records behind a repository abstraction
//! - **CSV Export**: Row-oriented tabulation of a generated timetable
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Identifier newtypes and the DTO surface for API consumers
//! - [`models`]: Domain types (subjects, sections, timetable results)
//! - [`allocator`]: The slot-assignment core
//! - [`services`]: Business logic above the core (CSV export)
//! - [`db`]: Repository pattern and persistence layer
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod api;

pub mod allocator;
pub mod models;

pub mod services;

pub mod db;

#[cfg(feature = "http-server")]
pub mod http;
