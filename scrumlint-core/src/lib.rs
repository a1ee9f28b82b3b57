// scrumlint-core/src/lib.rs

// 1. Mandatory documentation for production code
#![allow(missing_docs)] // Doc coverage is still in progress

// 2. Memory safety
#![deny(unsafe_code)]
// 3. Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// 4. Performance
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// 1. Ports (Interfaces / Traits)
// Defines the contracts the application needs (DatasetSource...)
pub mod ports;

// 2. Domain (Business core)
// Dataset model, rule catalog, evaluation engine.
// Depends on NOTHING else (no infra, no app).
pub mod domain;

// 3. Infrastructure (Adapters)
// Technical implementation (catalog files, CSV source, CSV export)
// Depends on the Domain and the Ports.
pub mod infrastructure;

// 4. Application (Use Cases)
// Orchestration (analysis run, report summary, sample fixture)
// Depends on the Domain, the Infra and the Ports.
pub mod application;

// --- GLOBAL ERROR HANDLING ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
// Lets callers import the main error easily: use scrumlint_core::ScrumlintError;
pub use error::ScrumlintError;
