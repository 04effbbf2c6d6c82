//! Utility functions for PageMove Core
//!
//! This module provides common utility functions used across the codebase.

mod ident;

pub use ident::{canonicalize, ID_SEPARATOR};
