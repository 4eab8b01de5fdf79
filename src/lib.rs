//! # Rollbook API
//!
//! A REST API built with Rust and Axum that manages students, teachers, and
//! course classes entirely in process memory, with bidirectional enrollment
//! between students and course classes.
//!
//! ## Architecture
//!
//! The codebase follows a modular, per-feature layout:
//!
//! ```text
//! src/
//! ├── config/           # Configuration (CORS, server bind address)
//! ├── modules/          # Feature modules
//! │   ├── students/        # Student CRUD + enrolled-classes view
//! │   ├── teachers/        # Teacher CRUD + classes-taught / students views
//! │   └── course_classes/  # Course class CRUD + enrollment
//! ├── store/            # In-memory entity store (the source of truth)
//! └── utils/            # Shared utilities (errors, dates, responses)
//! ```
//!
//! Each feature module follows a consistent structure:
//!
//! - `mod.rs`: Module exports
//! - `controller.rs`: HTTP handlers (routes)
//! - `service.rs`: Business logic
//! - `model.rs`: Domain structs and DTOs
//! - `router.rs`: Axum router configuration
//!
//! ## Storage
//!
//! There is no database. All entities live in a [`store::Store`] guarded by
//! one `RwLock` and shared through axum state; every relationship-mutating
//! operation (enroll, unenroll, reassign, cascade delete) runs under the
//! single write lock, so both sides of a relationship always move together.
//! Identifiers come from one monotonic generator and are unique across all
//! entity types for the lifetime of the process. All state is lost on
//! restart.
//!
//! ## API Documentation
//!
//! When the server is running, interactive API documentation is available
//! at:
//!
//! - Swagger UI: `http://localhost:3000/swagger-ui`
//! - Scalar: `http://localhost:3000/scalar`

pub mod config;
pub mod docs;
pub mod logging;
pub mod modules;
pub mod router;
pub mod state;
pub mod store;
pub mod utils;
pub mod validator;
