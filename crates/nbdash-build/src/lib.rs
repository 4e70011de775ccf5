//! Dockerfile generation, notebook grooming, and build-context staging
//! for nbdash.
//!
//! # Staging pipeline
//!
//! ```text
//! nbdash --name report --file report.ipynb
//!   1. Context    ── destroy + recreate nbdash-report/
//!   2. Resolve    ── notebook source → cells + filename
//!   3. Groom      ── drop ignored cells, extract ipydeps install,
//!                    promote the parameters cell (nbparameterise only)
//!   4. Metadata   ── origin + caller keys → LABEL / ENV directives
//!   5. Dockerfile ── Dockerfile::render() → nbdash-report/Dockerfile
//!   6. Build      ── docker build -t nbdash-report nbdash-report/  (--build)
//! ```
//!
//! # Grooming order
//!
//! The three passes always run in the order above: ignore removal first so
//! later passes never resurrect a dropped cell, dependency extraction
//! before promotion so an extracted install cell can never serve as the
//! promotion anchor, and promotion last because only nbparameterise needs
//! the parameters cell in front.

pub mod dockerfile;
pub mod groom;
pub mod metadata;
pub mod stage;

pub use dockerfile::Dockerfile;
pub use metadata::{CallerMetadata, MetadataSet};
pub use stage::Stager;
