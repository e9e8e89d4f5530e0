//! Test module for folio-core
//!
//! This module contains tests for:
//! - Catalog construction, validation and file loading
//! - Gallery filtering and modal transitions
//! - Configuration loading and catalog source selection

mod catalog_tests;
