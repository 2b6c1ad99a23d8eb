//! Testing utilities for code built on linkrel.
//!
//! This module provides:
//! - Sample representations and a representation builder
//! - A recording transport for exercising [`LinkClient`] without a network
//! - Assertions over resolved link lists
//!
//! [`LinkClient`]: crate::transport::LinkClient

mod assertions;
mod fixtures;
#[cfg(feature = "http")]
mod mocks;

pub use assertions::{assert_hrefs, assert_no_match, assert_resolves_to};
pub use fixtures::{sample_order, RepresentationBuilder};
#[cfg(feature = "http")]
pub use mocks::{FailingTransport, RecordingTransport};
