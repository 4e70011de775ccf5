//! Notebook source resolution for nbdash.
//!
//! A notebook comes from exactly one origin per run: a local file, a
//! direct URL, or an nbgallery instance. [`SourceClient`] resolves the
//! origin to parsed notebook content, a suggested filename, and origin
//! metadata, fetching over an [`HttpFetcher`] so tests can substitute a
//! mock for the network.

pub mod fetcher;
pub mod resolver;

pub use fetcher::{FetchError, HttpFetcher, HttpResponse, ReqwestFetcher};
pub use resolver::{NotebookSource, ResolvedNotebook, SourceClient, SourceError};
