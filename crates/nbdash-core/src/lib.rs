//! Core types and configuration for nbdash.
//!
//! This crate defines the notebook data model and JSON codec
//! ([`Notebook`], [`Cell`]), the `nbdash.toml` schema ([`NbdashConfig`]),
//! the dashboard launch mode ([`DashboardMode`]), and shared error types.

pub mod config;
pub mod error;
pub mod notebook;

pub use config::{DashboardMode, DockerConfig, ImageConfig, MetadataConfig, NbdashConfig};
pub use error::{Error, Result};
pub use notebook::{Cell, GalleryMetadata, Notebook, SourceText};
