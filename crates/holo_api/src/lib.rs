//! Client for the holomap location data service.
//!
//! The service is a set of static JSON documents served under one base url:
//! `locations.json` with the full location list, and `polygons/{id}.json`
//! with an optional detail outline per location. All requests are
//! single-attempt; the location list is cached for the session after the
//! first successful response.

mod client;
mod error;
mod location;

pub use client::LocationClient;
pub use error::ApiError;
pub use location::{Dms, Location, Polygon};
