//! Routing settings.

use super::RouterError;

const METRES_PER_KM: f64 = 1000.0;
const MINUTES_PER_HOUR: f64 = 60.0;

/// Parameters fixed for the lifetime of one graph build.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoutingSettings {
    /// Minutes spent waiting at a stop before boarding any bus.
    pub bus_wait_time: f64,

    /// Bus speed in km/h, the same for every bus.
    pub bus_velocity: f64,
}

impl RoutingSettings {
    /// Create settings with the given wait time (minutes) and velocity (km/h).
    pub fn new(bus_wait_time: f64, bus_velocity: f64) -> Self {
        Self {
            bus_wait_time,
            bus_velocity,
        }
    }

    /// Checks that the settings describe a usable network.
    pub fn validate(&self) -> Result<(), RouterError> {
        if !(self.bus_velocity.is_finite() && self.bus_velocity > 0.0) {
            return Err(RouterError::InvalidVelocity(self.bus_velocity));
        }
        if !(self.bus_wait_time.is_finite() && self.bus_wait_time >= 0.0) {
            return Err(RouterError::InvalidWaitTime(self.bus_wait_time));
        }
        Ok(())
    }

    /// Minutes a bus needs to cover `metres` of road.
    pub fn ride_time(&self, metres: u64) -> f64 {
        (metres as f64 / METRES_PER_KM) / self.bus_velocity * MINUTES_PER_HOUR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ride_time_in_minutes() {
        let settings = RoutingSettings::new(6.0, 40.0);
        assert_eq!(settings.ride_time(1000), 1.5);
        assert_eq!(settings.ride_time(2000), 3.0);
        assert_eq!(settings.ride_time(0), 0.0);
    }

    #[test]
    fn valid_settings() {
        assert!(RoutingSettings::new(6.0, 40.0).validate().is_ok());
        assert!(RoutingSettings::new(0.0, 0.5).validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_velocity() {
        assert_eq!(
            RoutingSettings::new(6.0, 0.0).validate(),
            Err(RouterError::InvalidVelocity(0.0))
        );
        assert_eq!(
            RoutingSettings::new(6.0, -40.0).validate(),
            Err(RouterError::InvalidVelocity(-40.0))
        );
        assert!(RoutingSettings::new(6.0, f64::INFINITY).validate().is_err());
        assert!(RoutingSettings::new(6.0, f64::NAN).validate().is_err());
    }

    #[test]
    fn rejects_negative_wait_time() {
        assert_eq!(
            RoutingSettings::new(-1.0, 40.0).validate(),
            Err(RouterError::InvalidWaitTime(-1.0))
        );
        assert!(RoutingSettings::new(f64::NAN, 40.0).validate().is_err());
    }
}
