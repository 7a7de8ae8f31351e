//! Common test utilities for cmapio.
//!
//! This module provides shared fixtures and assertions for the integration tests.

#![allow(dead_code)]

pub mod assertions;
pub mod fixtures;
