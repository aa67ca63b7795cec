//! # Configuration Module
//!
//! This module provides configuration structures for all dep-carousel
//! commands. Each command has its own config module with builder patterns
//! for construction and validation.
//!
//! ## Command Configurations
//!
//! - **TreeOptions**: Configuration for the `tree` command
//! - **GraphOptions**: Configuration for the `graph` command
//! - **OrderOptions**: Configuration for the `order` command
//! - **CompareOptions**: Configuration for the `compare` command
//!
//! Validation happens in the builders: a zero depth bound, a conflicting or
//! missing source selection, a malformed registry URL, or a missing fixture
//! file is rejected before any traversal begins.
//!
//! ## Example
//!
//! ```
//! use dep_carousel::cli::ExpansionMode;
//! use dep_carousel::common::ConfigBuilder;
//! use dep_carousel::config::{SourceSelection, TreeOptions};
//!
//! let options = TreeOptions::builder()
//!     .with_packages(vec!["left-pad".to_string()])
//!     .with_source(SourceSelection::Registry {
//!         url: "https://registry.npmjs.org".to_string(),
//!     })
//!     .with_max_depth(3)
//!     .with_mode(ExpansionMode::Tree)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(options.max_depth, 3);
//! ```

pub mod common;
pub mod compare;
pub mod graph;
pub mod order;
pub mod tree;

pub use common::SourceSelection;
pub use compare::CompareOptions;
pub use graph::GraphOptions;
pub use order::OrderOptions;
pub use tree::TreeOptions;
