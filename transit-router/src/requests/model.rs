//! Input document model.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use super::RequestError;
use crate::routing::RoutingSettings;

/// A complete request document.
///
/// Keys this service does not use (such as `render_settings`) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Document {
    /// Stops and buses making up the network
    #[serde(default)]
    pub base_requests: Vec<BaseRequest>,

    /// Wait time and bus velocity for routing
    #[serde(default)]
    pub routing_settings: Option<RoutingSettingsInput>,

    /// Queries to answer
    #[serde(default)]
    pub stat_requests: Vec<StatRequest>,
}

impl Document {
    /// Parses a document from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, RequestError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Parses a document from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RequestError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}

/// One element of the network description.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum BaseRequest {
    /// A stop, with road distances to its neighbours in metres
    Stop {
        name: String,
        latitude: f64,
        longitude: f64,
        #[serde(default)]
        road_distances: BTreeMap<String, u32>,
    },

    /// A bus line through named stops
    Bus {
        name: String,
        stops: Vec<String>,
        is_roundtrip: bool,
    },
}

/// Routing settings as they appear in the document.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RoutingSettingsInput {
    /// Minutes
    pub bus_wait_time: f64,
    /// km/h
    pub bus_velocity: f64,
}

impl From<RoutingSettingsInput> for RoutingSettings {
    fn from(input: RoutingSettingsInput) -> Self {
        RoutingSettings::new(input.bus_wait_time, input.bus_velocity)
    }
}

/// A statistics query.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum StatRequest {
    /// Statistics of one bus line
    Bus { id: i64, name: String },

    /// Buses calling at one stop
    Stop { id: i64, name: String },

    /// Fastest itinerary between two stops
    Route { id: i64, from: String, to: String },

    /// Rendered network map
    Map { id: i64 },
}

impl StatRequest {
    /// Id echoed back as `request_id` in the response.
    pub fn id(&self) -> i64 {
        match self {
            StatRequest::Bus { id, .. }
            | StatRequest::Stop { id, .. }
            | StatRequest::Route { id, .. }
            | StatRequest::Map { id } => *id,
        }
    }
}
