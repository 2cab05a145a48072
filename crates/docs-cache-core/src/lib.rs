//! # docs-cache-core
//!
//! Core functionality for warming a cache of rendered, versioned documentation.
//!
//! Content lives in a store laid out as `version/page.md`. Warming discovers the versions,
//! resolves which ones to process, and forces every page (plus a per-version index) into the
//! rendered cache while timing each call.
//!
//! ## Architecture
//!
//! - **Store**: [`ContentStore`] lists versions and files; [`FsContentStore`] reads a directory
//! - **Cache**: [`CacheService`] ensures artifacts exist; [`DocsCache`] renders markdown to JSON
//! - **Resolver**: [`resolve`] turns an optional requested version into the target set
//! - **Warm loop**: [`Warmer`] drives the store and cache and streams progress to a [`Reporter`]
//! - **Configuration**: [`Config`] with TOML storage and platform default paths
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use docs_cache_core::{Config, DocsCache, FsContentStore, ContentStore, Warmer, resolve};
//! # use docs_cache_core::Reporter;
//! # struct Stdout;
//! # impl Reporter for Stdout {
//! #     fn write(&mut self, t: &str) -> std::io::Result<()> { print!("{t}"); Ok(()) }
//! #     fn info(&mut self, l: &str) -> std::io::Result<()> { println!("{l}"); Ok(()) }
//! #     fn error(&mut self, l: &str) -> std::io::Result<()> { eprintln!("{l}"); Ok(()) }
//! # }
//!
//! let config = Config::load(None)?;
//! let store = FsContentStore::new(&config.paths.content_root);
//! let targets = resolve(Some("11.x"), &store.list_versions()?).expect("version exists");
//!
//! let mut cache = DocsCache::new(store.clone(), &config.paths.cache_root, config.pages.clone())?;
//! let mut out = Stdout;
//! let report = Warmer::new(&store, &mut cache, &mut out, &config.pages.extension).run(&targets)?;
//! println!("warmed {} pages", report.page_count());
//! # Ok::<(), docs_cache_core::Error>(())
//! ```

/// Rendered artifact cache
pub mod cache;
/// Configuration loading and defaults
pub mod config;
/// Error types and result aliases
pub mod error;
/// Page identifier derivation
pub mod pages;
/// Tree-sitter based markdown parser
pub mod parser;
/// Progress output primitives
pub mod report;
/// Version resolution
pub mod resolver;
/// Content store access
pub mod store;
/// Core data types
pub mod types;
/// The warm loop
pub mod warm;

pub use cache::{CacheService, DocsCache};
pub use config::{Config, PagesConfig, PathsConfig};
pub use error::{Error, Result};
pub use parser::{MarkdownParser, ParsedDocument};
pub use report::{Reporter, pad_left};
pub use resolver::{ResolveError, resolve};
pub use store::{ContentStore, FsContentStore};
pub use types::*;
pub use warm::{Warmer, warm};
