//! Version compatibility layer
//!
//! This module decides whether the version a server reports satisfies the
//! range the client was configured with.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Provider   │────▶│   Checker   │────▶│ CheckResult │
//! │  (fetch)    │     │  (classify) │     │  (report)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                        │       │
//!                        ▼       ▼
//!              ┌─────────────┐ ┌─────────────┐
//!              │   Semver    │ │    Range    │
//!              │   (parse)   │ │   (check)   │
//!              └─────────────┘ └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`checker`]: Classifies a fetch result into a compatibility status
//! - [`error`]: Error types for parsing, fetching and configuration
//! - [`provider`]: Trait for fetching version info from a server
//! - [`range`]: Range constraint parsing and evaluation
//! - [`semver`]: Reported version parsing
//! - [`types`]: Wire types like `ServerInfo`

pub mod checker;
pub mod error;
pub mod provider;
pub mod range;
pub mod semver;
pub mod types;
