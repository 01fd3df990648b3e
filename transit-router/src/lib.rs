//! Transit routing engine.
//!
//! Holds a catalogue of bus stops and lines, answers statistics queries
//! about them, and finds the fastest itinerary between two stops with a
//! fixed boarding wait and a constant bus velocity.

pub mod catalogue;
pub mod config;
pub mod domain;
pub mod graph;
pub mod requests;
pub mod routing;
pub mod web;
