//! geospace-cli
//! ============
//!
//! Command-line driver for the `geospace-core` library.
//!
//! This crate primarily provides a binary (`geospace`). The small library
//! target only exists so the overview renders as a documentation page.
//!
//! Quick start
//! -----------
//!
//! ```text
//! geospace --help
//! geospace stats
//! geospace nn --from "Rome, It" --distance-to 30
//! geospace dist --from Krasnodar --where Moscow
//! ```
//!
//! For programmatic access, use [`geospace-core`] directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
