//! Travel-mode derivation for location-kind events.
//!
//! Location snapshots and carrier jumps report a handful of independent
//! flags. The mode is chosen by a fixed precedence over those flags:
//!
//! ```text
//! docked > SRV > taxi > on foot > landed > multicrew > normal space
//! ```

use starlog_types::{LocationDetails, LocationRef, StarSystem, StationRef, StationType, TravelMode};

/// The independent signals a location-kind event reports.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationSignals {
    /// Docked at a station.
    pub docked: bool,
    /// Driving an SRV.
    pub in_srv: bool,
    /// Riding as a passenger.
    pub taxi: bool,
    /// Walking.
    pub on_foot: bool,
    /// Surface coordinates are present.
    pub landed: bool,
    /// Crewing another commander's ship.
    pub multicrew: bool,
    /// Reported station type.
    pub station_type: StationType,
    /// A station name was reported.
    pub at_station: bool,
    /// The passenger transport is a drop ship rather than a taxi.
    pub dropship: bool,
}

impl LocationSignals {
    /// Read the signals from a location payload.
    pub const fn from_details(details: &LocationDetails, dropship: bool) -> Self {
        Self {
            docked: details.docked,
            in_srv: details.in_srv,
            taxi: details.taxi,
            on_foot: details.on_foot,
            landed: details.has_surface_coordinates(),
            multicrew: details.multicrew,
            station_type: details.station_type,
            at_station: details.station_name.is_some(),
            dropship,
        }
    }
}

/// Whether a location payload is the known inconsistent fleet-carrier
/// report: on foot, not docked, yet at a fleet carrier.
///
/// The game emits this while walking around a carrier; the flags
/// contradict each other and must not override the current state.
pub const fn is_inconsistent_carrier_report(details: &LocationDetails) -> bool {
    details.on_foot && !details.docked && details.station_type.is_fleet_carrier()
}

/// Pick the travel mode for a set of location signals.
pub const fn mode_from_signals(signals: &LocationSignals) -> TravelMode {
    let planetary = signals.station_type.is_planetary();
    if signals.docked {
        if signals.taxi {
            if signals.dropship {
                TravelMode::DropShipDocked
            } else if planetary {
                TravelMode::TaxiDockedPlanet
            } else {
                TravelMode::TaxiDocked
            }
        } else if signals.multicrew {
            if planetary {
                TravelMode::MulticrewDockedPlanet
            } else {
                TravelMode::MulticrewDocked
            }
        } else if planetary {
            TravelMode::DockedPlanet
        } else {
            TravelMode::Docked
        }
    } else if signals.in_srv {
        if signals.multicrew {
            TravelMode::MulticrewSrv
        } else {
            TravelMode::Srv
        }
    } else if signals.taxi {
        if signals.dropship {
            TravelMode::DropShipNormalSpace
        } else {
            TravelMode::TaxiNormalSpace
        }
    } else if signals.on_foot {
        on_foot_mode(signals.station_type, signals.at_station)
    } else if signals.landed {
        if signals.multicrew {
            TravelMode::MulticrewLanded
        } else {
            TravelMode::Landed
        }
    } else if signals.multicrew {
        TravelMode::MulticrewNormalSpace
    } else {
        TravelMode::NormalSpace
    }
}

/// The on-foot variant for a station type.
pub const fn on_foot_mode(station_type: StationType, at_station: bool) -> TravelMode {
    match station_type {
        StationType::FleetCarrier => TravelMode::OnFootFleetCarrier,
        StationType::OnFootSettlement => TravelMode::OnFootInstallation,
        StationType::CraterPort | StationType::CraterOutpost | StationType::SurfaceStation => {
            TravelMode::OnFootPlanetaryPort
        }
        StationType::Unknown if !at_station => TravelMode::OnFootPlanet,
        _ => TravelMode::OnFootStarPort,
    }
}

/// Build the location reference a location payload describes.
pub fn location_from_details(details: &LocationDetails) -> LocationRef {
    let station = details.station_name.as_ref().map(|name| StationRef {
        name: name.clone(),
        station_type: details.station_type,
        market_id: details.market_id,
    });
    LocationRef {
        system: StarSystem {
            name: details.star_system.clone(),
            address: details.system_address,
            position: details.star_pos,
        },
        body: details.body.clone(),
        body_id: details.body_id,
        body_type: details.body_type.clone(),
        station,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signals() -> LocationSignals {
        LocationSignals {
            docked: false,
            in_srv: false,
            taxi: false,
            on_foot: false,
            landed: false,
            multicrew: false,
            station_type: StationType::Unknown,
            at_station: false,
            dropship: false,
        }
    }

    #[test]
    fn docked_beats_everything() {
        let s = LocationSignals {
            docked: true,
            in_srv: true,
            on_foot: true,
            landed: true,
            ..signals()
        };
        assert_eq!(mode_from_signals(&s), TravelMode::Docked);
    }

    #[test]
    fn docked_variants_follow_flags() {
        let planetary = LocationSignals {
            docked: true,
            station_type: StationType::CraterPort,
            ..signals()
        };
        assert_eq!(mode_from_signals(&planetary), TravelMode::DockedPlanet);

        let taxi = LocationSignals {
            docked: true,
            taxi: true,
            ..signals()
        };
        assert_eq!(mode_from_signals(&taxi), TravelMode::TaxiDocked);

        let dropship = LocationSignals {
            dropship: true,
            ..taxi
        };
        assert_eq!(mode_from_signals(&dropship), TravelMode::DropShipDocked);

        let crew = LocationSignals {
            docked: true,
            multicrew: true,
            ..signals()
        };
        assert_eq!(mode_from_signals(&crew), TravelMode::MulticrewDocked);
    }

    #[test]
    fn srv_beats_taxi_and_foot() {
        let s = LocationSignals {
            in_srv: true,
            taxi: true,
            on_foot: true,
            ..signals()
        };
        assert_eq!(mode_from_signals(&s), TravelMode::Srv);
        let crew = LocationSignals {
            multicrew: true,
            ..s
        };
        assert_eq!(mode_from_signals(&crew), TravelMode::MulticrewSrv);
    }

    #[test]
    fn taxi_beats_foot() {
        let s = LocationSignals {
            taxi: true,
            on_foot: true,
            ..signals()
        };
        assert_eq!(mode_from_signals(&s), TravelMode::TaxiNormalSpace);
    }

    #[test]
    fn on_foot_beats_landed() {
        let s = LocationSignals {
            on_foot: true,
            landed: true,
            ..signals()
        };
        assert_eq!(mode_from_signals(&s), TravelMode::OnFootPlanet);
    }

    #[test]
    fn landed_beats_multicrew() {
        let s = LocationSignals {
            landed: true,
            multicrew: true,
            ..signals()
        };
        assert_eq!(mode_from_signals(&s), TravelMode::MulticrewLanded);
        let crew_only = LocationSignals {
            multicrew: true,
            ..signals()
        };
        assert_eq!(mode_from_signals(&crew_only), TravelMode::MulticrewNormalSpace);
        assert_eq!(mode_from_signals(&signals()), TravelMode::NormalSpace);
    }

    #[test]
    fn on_foot_station_variants() {
        assert_eq!(
            on_foot_mode(StationType::Coriolis, true),
            TravelMode::OnFootStarPort
        );
        assert_eq!(
            on_foot_mode(StationType::CraterOutpost, true),
            TravelMode::OnFootPlanetaryPort
        );
        assert_eq!(
            on_foot_mode(StationType::OnFootSettlement, true),
            TravelMode::OnFootInstallation
        );
        assert_eq!(
            on_foot_mode(StationType::FleetCarrier, true),
            TravelMode::OnFootFleetCarrier
        );
        assert_eq!(
            on_foot_mode(StationType::Unknown, false),
            TravelMode::OnFootPlanet
        );
    }

    #[test]
    fn carrier_report_detection() {
        let report = LocationDetails {
            on_foot: true,
            docked: false,
            station_type: StationType::FleetCarrier,
            ..LocationDetails::default()
        };
        assert!(is_inconsistent_carrier_report(&report));

        let docked = LocationDetails {
            docked: true,
            ..report.clone()
        };
        assert!(!is_inconsistent_carrier_report(&docked));

        let starport = LocationDetails {
            station_type: StationType::Orbis,
            ..report
        };
        assert!(!is_inconsistent_carrier_report(&starport));
    }
}
