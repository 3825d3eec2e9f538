//! The travel-state transition function.
//!
//! [`update`] is total and pure: it takes the previous snapshot by reference
//! and returns a fresh one. Every event kind is matched exhaustively, so a
//! new kind cannot be added to [`EventKind`] without deciding how it moves
//! the player.

use rust_decimal::Decimal;
use starlog_types::{
    Booking, BookingDetails, BookingKind, DockingGrant, Event, EventKind, FsdJump, GameSession,
    JumpStart, JumpType, LoadGame, LocationDetails, LocationRef, ShipRef, StarSystem,
    StationRef, StationType, Transfer, TravelMode,
};
use tracing::trace;

use crate::location::{
    is_inconsistent_carrier_report, location_from_details, mode_from_signals, on_foot_mode,
    LocationSignals,
};
use crate::state::TravelState;
use crate::vehicle::vehicle_mode;

/// Apply one event to the previous snapshot.
///
/// `None` means no event has been processed yet; the result is then derived
/// from [`TravelState::default`]. Events that do not concern travel return
/// the previous snapshot unchanged.
pub fn update(previous: Option<&TravelState>, event: &Event) -> TravelState {
    let base = previous.cloned().unwrap_or_default();

    if let Some(mode) = vehicle_mode(base.mode, &event.kind) {
        return TravelState { mode, ..base };
    }

    match &event.kind {
        EventKind::LoadGame(load) => load_game(base, load, event),
        EventKind::Died => died(base),
        EventKind::Location(details) => {
            if is_inconsistent_carrier_report(details) {
                trace!(id = %event.id, "ignoring on-foot carrier location report");
                base
            } else {
                located(base, details)
            }
        }
        EventKind::CarrierJump(details) => located(base, details),
        EventKind::FsdJump(jump) => jumped(base, jump),
        EventKind::StartJump(start) => {
            if start.jump_type == JumpType::Hyperspace {
                TravelState {
                    jump_start: Some(JumpStart {
                        destination: start.star_system.clone(),
                        star_class: start.star_class.clone(),
                        started_at: event.timestamp,
                    }),
                    ..base
                }
            } else {
                base
            }
        }
        EventKind::SupercruiseEntry(entry) => {
            let mode = supercruise_mode(entry.taxi, base.is_dropship_passenger(), entry.multicrew);
            let location = base.location.clone().map(|l| LocationRef {
                station: None,
                ..l
            });
            TravelState {
                mode,
                location,
                ..base
            }
        }
        EventKind::SupercruiseExit(exit) => {
            let mode = normal_space_mode(exit.taxi, base.is_dropship_passenger(), exit.multicrew);
            let mut location = relocated(base.location.as_ref(), &exit.star_system, None);
            location.body.clone_from(&exit.body);
            location.body_id = exit.body_id;
            location.body_type.clone_from(&exit.body_type);
            TravelState {
                mode,
                location: Some(location),
                ..base
            }
        }
        EventKind::Docked(docked) => {
            let signals = LocationSignals {
                docked: true,
                in_srv: false,
                taxi: docked.taxi,
                on_foot: false,
                landed: false,
                multicrew: docked.multicrew,
                station_type: docked.station_type,
                at_station: true,
                dropship: base.is_dropship_passenger(),
            };
            let mut location =
                relocated(base.location.as_ref(), &docked.star_system, docked.system_address);
            location.station = Some(StationRef {
                name: docked.station_name.clone(),
                station_type: docked.station_type,
                market_id: docked.market_id,
            });
            TravelState {
                mode: mode_from_signals(&signals),
                location: Some(location),
                docking_grant: None,
                wanted: docked.wanted,
                ..base
            }
        }
        EventKind::Undocked(undocked) => {
            let mode =
                normal_space_mode(undocked.taxi, base.is_dropship_passenger(), undocked.multicrew);
            let location = base.location.clone().map(|l| LocationRef {
                station: None,
                ..l
            });
            TravelState {
                mode,
                location,
                ..base
            }
        }
        EventKind::DockingGranted(grant) => TravelState {
            docking_grant: Some(DockingGrant {
                station_name: grant.station_name.clone(),
                landing_pad: grant.landing_pad,
                market_id: grant.market_id,
                granted_at: event.timestamp,
            }),
            ..base
        },
        EventKind::DockingCancelled | EventKind::DockingTimeout => TravelState {
            docking_grant: None,
            ..base
        },
        EventKind::Touchdown(contact) => {
            if !contact.is_player_controlled() || contact.taxi {
                return base;
            }
            let crewed = contact.multicrew || base.mode.is_multicrew();
            let mut location = base.location.clone().unwrap_or_default();
            if contact.body.is_some() {
                location.body.clone_from(&contact.body);
                location.body_id = contact.body_id;
            }
            TravelState {
                mode: if crewed {
                    TravelMode::MulticrewLanded
                } else {
                    TravelMode::Landed
                },
                location: Some(location),
                ..base
            }
        }
        EventKind::Liftoff(contact) => {
            if !contact.is_player_controlled() || contact.taxi {
                return base;
            }
            let crewed = contact.multicrew || base.mode.is_multicrew();
            TravelState {
                mode: if crewed {
                    TravelMode::MulticrewNormalSpace
                } else {
                    TravelMode::NormalSpace
                },
                ..base
            }
        }
        EventKind::Embark(transfer) => embarked(base, transfer),
        EventKind::Disembark(transfer) => disembarked(base, transfer),
        EventKind::BookTaxi(details) => booked(base, BookingKind::Taxi, details, event),
        EventKind::BookDropship(details) => booked(base, BookingKind::DropShip, details, event),
        EventKind::CancelTaxi | EventKind::CancelDropship => TravelState {
            booking: None,
            ..base
        },
        EventKind::ApproachBody(body) => {
            let mut location = relocated(base.location.as_ref(), &body.star_system, None);
            location.body = Some(body.body.clone());
            location.body_id = body.body_id;
            TravelState {
                approach_body: Some(body.body.clone()),
                location: Some(location),
                ..base
            }
        }
        EventKind::LeaveBody(_) => TravelState {
            approach_body: None,
            ..base
        },
        EventKind::JoinACrew(crew) => TravelState {
            mode: base.mode.to_multicrew(),
            crew_captain: Some(crew.captain.clone()),
            ..base
        },
        EventKind::QuitACrew(_) | EventKind::EndCrewSession => TravelState {
            mode: base.mode.to_solo(),
            crew_captain: None,
            ..base
        },
        EventKind::Loadout(ship) => {
            if base.mode.is_multicrew() || ship.ship.is_empty() {
                return base;
            }
            TravelState {
                ship: Some(ShipRef {
                    ship_type: ship.ship.clone(),
                    ship_id: ship.ship_id,
                    name: ship.ship_name.clone(),
                    ident: ship.ship_ident.clone(),
                }),
                ..base
            }
        }
        EventKind::ShipyardSwap(swap) => TravelState {
            ship: Some(ShipRef {
                ship_type: swap.ship_type.clone(),
                ship_id: swap.ship_id,
                name: None,
                ident: None,
            }),
            ..base
        },
        EventKind::JetConeBoost(boost) => {
            if boost.boost_value > Decimal::ZERO {
                TravelState {
                    boost: boost.boost_value,
                    ..base
                }
            } else {
                base
            }
        }
        EventKind::Shutdown
        | EventKind::Resurrect
        | EventKind::SupercruiseDestinationDrop(_)
        | EventKind::LaunchSrv(_)
        | EventKind::DockSrv
        | EventKind::SrvDestroyed
        | EventKind::LaunchFighter(_)
        | EventKind::DockFighter
        | EventKind::FighterDestroyed
        | EventKind::VehicleSwitch(_)
        | EventKind::SuitLoadout(_)
        | EventKind::SwitchSuitLoadout(_)
        | EventKind::CollectItems(_)
        | EventKind::DropItems(_)
        | EventKind::UseConsumable(_)
        | EventKind::Resupply
        | EventKind::BuyMicroResources
        | EventKind::SellMicroResources
        | EventKind::TradeMicroResources
        | EventKind::BackpackChange
        | EventKind::ShipLocker(_)
        | EventKind::Backpack(_)
        | EventKind::Outfitting(_)
        | EventKind::Market(_)
        | EventKind::Shipyard(_)
        | EventKind::Scan(_)
        | EventKind::SaaScanComplete(_)
        | EventKind::FssDiscoveryScan(_)
        | EventKind::StartMarker
        | EventKind::StopMarker
        | EventKind::Music
        | EventKind::ReservoirReplenished
        | EventKind::Unknown => base,
    }
}

// ---------------------------------------------------------------------------
// Per-kind transitions
// ---------------------------------------------------------------------------

fn load_game(base: TravelState, load: &LoadGame, event: &Event) -> TravelState {
    let mode = if load.start_dead {
        TravelMode::Unknown
    } else if load.start_landed {
        TravelMode::Landed
    } else {
        base.mode.to_solo()
    };
    let ship = if load.ship.is_empty() {
        base.ship.clone()
    } else {
        Some(ShipRef {
            ship_type: load.ship.clone(),
            ship_id: load.ship_id,
            name: load.ship_name.clone(),
            ident: load.ship_ident.clone(),
        })
    };
    TravelState {
        mode,
        ship,
        session: Some(GameSession {
            commander: load.commander.clone(),
            game_mode: load.game_mode,
            group: load.group.clone(),
            loaded_at: event.timestamp,
        }),
        crew_captain: None,
        boost: Decimal::ONE,
        ..base
    }
}

fn died(base: TravelState) -> TravelState {
    TravelState {
        mode: TravelMode::Unknown,
        crew_captain: None,
        approach_body: None,
        docking_grant: None,
        booking: None,
        ..base
    }
}

fn located(base: TravelState, details: &LocationDetails) -> TravelState {
    let signals = LocationSignals::from_details(details, base.is_dropship_passenger());
    TravelState {
        mode: mode_from_signals(&signals),
        location: Some(location_from_details(details)),
        wanted: details.wanted,
        ..base
    }
}

fn jumped(base: TravelState, jump: &FsdJump) -> TravelState {
    let mode = supercruise_mode(jump.taxi, base.is_dropship_passenger(), jump.multicrew);
    let location = LocationRef {
        system: StarSystem {
            name: jump.star_system.clone(),
            address: jump.system_address,
            position: jump.star_pos,
        },
        body: jump.body.clone(),
        body_id: jump.body_id,
        body_type: jump.body_type.clone(),
        station: None,
    };
    TravelState {
        mode,
        location: Some(location),
        docking_grant: None,
        jump_start: None,
        approach_body: None,
        wanted: jump.wanted,
        boost: Decimal::ONE,
        ..base
    }
}

fn embarked(base: TravelState, transfer: &Transfer) -> TravelState {
    let mode = if transfer.srv {
        if transfer.multicrew {
            TravelMode::MulticrewSrv
        } else {
            TravelMode::Srv
        }
    } else if transfer.taxi {
        if transfer.on_planet {
            TravelMode::TaxiDockedPlanet
        } else if base.is_dropship_passenger() {
            TravelMode::DropShipDocked
        } else {
            TravelMode::TaxiDocked
        }
    } else if transfer.multicrew {
        if transfer.on_station {
            TravelMode::MulticrewDocked
        } else {
            TravelMode::MulticrewLanded
        }
    } else if transfer.on_station {
        if transfer.on_planet {
            TravelMode::DockedPlanet
        } else {
            TravelMode::Docked
        }
    } else if transfer.on_planet {
        TravelMode::Landed
    } else {
        TravelMode::Docked
    };
    TravelState {
        mode,
        location: Some(transferred_location(base.location.as_ref(), transfer)),
        ..base
    }
}

fn disembarked(base: TravelState, transfer: &Transfer) -> TravelState {
    let mode = if transfer.station_type != StationType::Unknown {
        on_foot_mode(transfer.station_type, true)
    } else if transfer.on_station {
        TravelMode::OnFootStarPort
    } else {
        TravelMode::OnFootPlanet
    };
    let booking = if transfer.taxi {
        None
    } else {
        base.booking.clone()
    };
    TravelState {
        mode,
        booking,
        location: Some(transferred_location(base.location.as_ref(), transfer)),
        ..base
    }
}

fn booked(base: TravelState, kind: BookingKind, details: &BookingDetails, event: &Event) -> TravelState {
    TravelState {
        booking: Some(Booking {
            kind,
            destination_system: details.destination_system.clone(),
            destination_location: details.destination_location.clone(),
            booked_at: event.timestamp,
        }),
        ..base
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const fn supercruise_mode(taxi: bool, dropship: bool, multicrew: bool) -> TravelMode {
    if taxi {
        if dropship {
            TravelMode::DropShipSupercruise
        } else {
            TravelMode::TaxiSupercruise
        }
    } else if multicrew {
        TravelMode::MulticrewSupercruise
    } else {
        TravelMode::Supercruise
    }
}

const fn normal_space_mode(taxi: bool, dropship: bool, multicrew: bool) -> TravelMode {
    if taxi {
        if dropship {
            TravelMode::DropShipNormalSpace
        } else {
            TravelMode::TaxiNormalSpace
        }
    } else if multicrew {
        TravelMode::MulticrewNormalSpace
    } else {
        TravelMode::NormalSpace
    }
}

/// The previous location if it is in `system`, otherwise a fresh location
/// in `system`. An empty system name keeps the previous location.
fn relocated(previous: Option<&LocationRef>, system: &str, address: Option<u64>) -> LocationRef {
    let incoming = StarSystem {
        name: system.to_owned(),
        address,
        position: None,
    };
    match previous {
        Some(prev) if system.is_empty() || prev.system.same_system(&incoming) => prev.clone(),
        _ => LocationRef::in_system(incoming),
    }
}

fn transferred_location(previous: Option<&LocationRef>, transfer: &Transfer) -> LocationRef {
    let system = transfer.star_system.as_deref().unwrap_or_default();
    let mut location = relocated(previous, system, None);
    if transfer.body.is_some() {
        location.body.clone_from(&transfer.body);
        location.body_id = transfer.body_id;
    }
    if let Some(name) = &transfer.station_name {
        location.station = Some(StationRef {
            name: name.clone(),
            station_type: transfer.station_type,
            market_id: location.station.as_ref().and_then(|s| s.market_id),
        });
    } else if !transfer.on_station {
        location.station = None;
    }
    location
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use rust_decimal_macros::dec;
    use starlog_types::{
        CrewDetails, Docked, DockingGranted, EventId, JetConeBoost, StartJump, SurfaceContact,
        VehicleLaunch,
    };

    use super::*;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_650_000_000_i64.saturating_add(secs), 0)
            .single()
            .unwrap_or_default()
    }

    fn ev(secs: i64, kind: EventKind) -> Event {
        Event::new(EventId::new(1), at(secs), kind)
    }

    fn apply(events: &[Event]) -> TravelState {
        events
            .iter()
            .fold(None, |state: Option<TravelState>, e| Some(update(state.as_ref(), e)))
            .unwrap_or_default()
    }

    fn loaded_state() -> TravelState {
        TravelState {
            mode: TravelMode::Docked,
            crew_captain: Some("Cmdr Jameson".to_owned()),
            approach_body: Some("Earth".to_owned()),
            docking_grant: Some(DockingGrant {
                station_name: "Abraham Lincoln".to_owned(),
                landing_pad: 7,
                market_id: None,
                granted_at: at(0),
            }),
            booking: Some(Booking {
                kind: BookingKind::Taxi,
                destination_system: None,
                destination_location: None,
                booked_at: at(0),
            }),
            ship: Some(ShipRef {
                ship_type: "python".to_owned(),
                ..ShipRef::default()
            }),
            ..TravelState::default()
        }
    }

    #[test]
    fn first_event_starts_from_default() {
        let state = update(None, &ev(0, EventKind::Music));
        assert_eq!(state, TravelState::default());
    }

    #[test]
    fn died_resets_from_every_mode() {
        for mode in TravelMode::ALL {
            let previous = TravelState {
                mode,
                ..loaded_state()
            };
            let next = update(Some(&previous), &ev(1, EventKind::Died));
            assert_eq!(next.mode, TravelMode::Unknown, "from {mode:?}");
            assert!(next.crew_captain.is_none());
            assert!(next.approach_body.is_none());
            assert!(next.docking_grant.is_none());
            assert!(next.booking.is_none());
            assert_eq!(next.ship, previous.ship);
        }
    }

    #[test]
    fn carrier_on_foot_report_is_rejected() {
        let previous = TravelState {
            mode: TravelMode::OnFootFleetCarrier,
            ..loaded_state()
        };
        let report = ev(
            1,
            EventKind::Location(LocationDetails {
                star_system: "Colonia".to_owned(),
                on_foot: true,
                docked: false,
                station_type: StationType::FleetCarrier,
                station_name: Some("K7Q-1HT".to_owned()),
                ..LocationDetails::default()
            }),
        );
        assert_eq!(update(Some(&previous), &report), previous);
    }

    #[test]
    fn carrier_jump_is_not_rejected() {
        let jump = ev(
            1,
            EventKind::CarrierJump(LocationDetails {
                star_system: "Colonia".to_owned(),
                docked: true,
                station_type: StationType::FleetCarrier,
                station_name: Some("K7Q-1HT".to_owned()),
                ..LocationDetails::default()
            }),
        );
        let next = update(None, &jump);
        assert_eq!(next.mode, TravelMode::Docked);
        assert_eq!(next.system_name(), Some("Colonia"));
        assert_eq!(next.station_name(), Some("K7Q-1HT"));
    }

    #[test]
    fn location_precedence_flows_through_update() {
        let landed = ev(
            0,
            EventKind::Location(LocationDetails {
                star_system: "HIP 1".to_owned(),
                latitude: Some(10.0),
                longitude: Some(-4.5),
                multicrew: true,
                ..LocationDetails::default()
            }),
        );
        assert_eq!(update(None, &landed).mode, TravelMode::MulticrewLanded);

        let in_srv = ev(
            0,
            EventKind::Location(LocationDetails {
                in_srv: true,
                latitude: Some(10.0),
                longitude: Some(-4.5),
                ..LocationDetails::default()
            }),
        );
        assert_eq!(update(None, &in_srv).mode, TravelMode::Srv);
    }

    #[test]
    fn jump_enters_supercruise_and_clears_transients() {
        let previous = TravelState {
            mode: TravelMode::NormalSpace,
            boost: dec!(4),
            jump_start: Some(JumpStart {
                destination: Some("Sol".to_owned()),
                star_class: Some("G".to_owned()),
                started_at: at(0),
            }),
            ..loaded_state()
        };
        let jump = ev(
            20,
            EventKind::FsdJump(FsdJump {
                star_system: "Sol".to_owned(),
                jump_dist: dec!(12.3),
                ..FsdJump::default()
            }),
        );
        let next = update(Some(&previous), &jump);
        assert_eq!(next.mode, TravelMode::Supercruise);
        assert_eq!(next.boost, Decimal::ONE);
        assert!(next.docking_grant.is_none());
        assert!(next.jump_start.is_none());
        assert!(next.approach_body.is_none());
        assert_eq!(next.system_name(), Some("Sol"));
        assert_eq!(next.ship, previous.ship);
    }

    #[test]
    fn jump_variants_follow_flags() {
        let taxi = ev(
            0,
            EventKind::FsdJump(FsdJump {
                taxi: true,
                ..FsdJump::default()
            }),
        );
        assert_eq!(update(None, &taxi).mode, TravelMode::TaxiSupercruise);

        let dropship_booked = TravelState {
            booking: Some(Booking {
                kind: BookingKind::DropShip,
                destination_system: None,
                destination_location: None,
                booked_at: at(0),
            }),
            ..TravelState::default()
        };
        assert_eq!(
            update(Some(&dropship_booked), &taxi).mode,
            TravelMode::DropShipSupercruise
        );

        let crew = ev(
            0,
            EventKind::FsdJump(FsdJump {
                multicrew: true,
                ..FsdJump::default()
            }),
        );
        assert_eq!(update(None, &crew).mode, TravelMode::MulticrewSupercruise);
    }

    #[test]
    fn only_hyperspace_charges_record_jump_start() {
        let local = ev(
            0,
            EventKind::StartJump(StartJump {
                jump_type: JumpType::Supercruise,
                ..StartJump::default()
            }),
        );
        assert!(update(None, &local).jump_start.is_none());

        let hyper = ev(
            5,
            EventKind::StartJump(StartJump {
                jump_type: JumpType::Hyperspace,
                star_system: Some("Achenar".to_owned()),
                star_class: Some("B".to_owned()),
            }),
        );
        let state = update(None, &hyper);
        assert_eq!(state.jump_start.map(|j| j.started_at), Some(at(5)));
    }

    #[test]
    fn docking_cycle() {
        let granted = ev(
            0,
            EventKind::DockingGranted(DockingGranted {
                station_name: "Jameson Memorial".to_owned(),
                landing_pad: 12,
                ..DockingGranted::default()
            }),
        );
        let docked = ev(
            30,
            EventKind::Docked(Docked {
                station_name: "Jameson Memorial".to_owned(),
                station_type: StationType::Orbis,
                star_system: "Shinrarta Dezhra".to_owned(),
                ..Docked::default()
            }),
        );
        let undocked = ev(60, EventKind::Undocked(starlog_types::Undocked::default()));

        let after_grant = apply(&[granted.clone()]);
        assert_eq!(after_grant.docking_grant.map(|g| g.landing_pad), Some(12));

        let after_dock = apply(&[granted.clone(), docked.clone()]);
        assert_eq!(after_dock.mode, TravelMode::Docked);
        assert!(after_dock.docking_grant.is_none());
        assert_eq!(after_dock.station_name(), Some("Jameson Memorial"));

        let after_undock = apply(&[granted, docked, undocked]);
        assert_eq!(after_undock.mode, TravelMode::NormalSpace);
        assert!(after_undock.station_name().is_none());
        assert_eq!(after_undock.system_name(), Some("Shinrarta Dezhra"));
    }

    #[test]
    fn planetary_dock_and_touchdown() {
        let docked = ev(
            0,
            EventKind::Docked(Docked {
                station_type: StationType::CraterOutpost,
                star_system: "Ross 128".to_owned(),
                ..Docked::default()
            }),
        );
        assert_eq!(update(None, &docked).mode, TravelMode::DockedPlanet);

        let touchdown = ev(0, EventKind::Touchdown(SurfaceContact::default()));
        assert_eq!(update(None, &touchdown).mode, TravelMode::Landed);

        let remote = ev(
            0,
            EventKind::Touchdown(SurfaceContact {
                player_controlled: Some(false),
                ..SurfaceContact::default()
            }),
        );
        assert_eq!(update(None, &remote).mode, TravelMode::Unknown);
    }

    #[test]
    fn multicrew_survives_srv_trip() {
        let join = ev(
            0,
            EventKind::JoinACrew(CrewDetails {
                captain: "Cmdr Ohm".to_owned(),
            }),
        );
        let landed = ev(1, EventKind::Touchdown(SurfaceContact::default()));
        let launch = ev(2, EventKind::LaunchSrv(VehicleLaunch::default()));
        let dock = ev(3, EventKind::DockSrv);
        let quit = ev(
            4,
            EventKind::QuitACrew(CrewDetails {
                captain: "Cmdr Ohm".to_owned(),
            }),
        );

        let start = TravelState {
            mode: TravelMode::NormalSpace,
            ..TravelState::default()
        };
        let s1 = update(Some(&start), &join);
        assert_eq!(s1.mode, TravelMode::MulticrewNormalSpace);
        assert_eq!(s1.crew_captain.as_deref(), Some("Cmdr Ohm"));
        let s2 = update(Some(&s1), &landed);
        assert_eq!(s2.mode, TravelMode::MulticrewLanded);
        let s3 = update(Some(&s2), &launch);
        assert_eq!(s3.mode, TravelMode::MulticrewSrv);
        let s4 = update(Some(&s3), &dock);
        assert_eq!(s4.mode, TravelMode::MulticrewLanded);
        let s5 = update(Some(&s4), &quit);
        assert_eq!(s5.mode, TravelMode::Landed);
        assert!(s5.crew_captain.is_none());
    }

    #[test]
    fn taxi_booking_ride_and_disembark() {
        let book = ev(0, EventKind::BookTaxi(BookingDetails::default()));
        let embark = ev(
            1,
            EventKind::Embark(Transfer {
                taxi: true,
                on_station: true,
                ..Transfer::default()
            }),
        );
        let disembark = ev(
            2,
            EventKind::Disembark(Transfer {
                taxi: true,
                on_station: true,
                station_name: Some("Darwin Horizons".to_owned()),
                station_type: StationType::CraterPort,
                ..Transfer::default()
            }),
        );
        let s1 = update(None, &book);
        assert!(s1.booking.is_some());
        let s2 = update(Some(&s1), &embark);
        assert_eq!(s2.mode, TravelMode::TaxiDocked);
        let s3 = update(Some(&s2), &disembark);
        assert_eq!(s3.mode, TravelMode::OnFootPlanetaryPort);
        assert!(s3.booking.is_none());
        assert_eq!(s3.station_name(), Some("Darwin Horizons"));
    }

    #[test]
    fn cancel_clears_booking() {
        let book = ev(0, EventKind::BookDropship(BookingDetails::default()));
        let s1 = update(None, &book);
        assert_eq!(s1.booking.as_ref().map(|b| b.kind), Some(BookingKind::DropShip));
        let s2 = update(Some(&s1), &ev(1, EventKind::CancelDropship));
        assert!(s2.booking.is_none());
    }

    #[test]
    fn embark_variants() {
        let srv = ev(
            0,
            EventKind::Embark(Transfer {
                srv: true,
                on_planet: true,
                ..Transfer::default()
            }),
        );
        assert_eq!(update(None, &srv).mode, TravelMode::Srv);

        let ship_on_surface = ev(
            0,
            EventKind::Embark(Transfer {
                on_planet: true,
                ..Transfer::default()
            }),
        );
        assert_eq!(update(None, &ship_on_surface).mode, TravelMode::Landed);

        let ship_in_port = ev(
            0,
            EventKind::Embark(Transfer {
                on_planet: true,
                on_station: true,
                ..Transfer::default()
            }),
        );
        assert_eq!(update(None, &ship_in_port).mode, TravelMode::DockedPlanet);
    }

    #[test]
    fn load_game_resets_session_fields() {
        let previous = TravelState {
            mode: TravelMode::MulticrewSupercruise,
            boost: dec!(4),
            ..loaded_state()
        };
        let load = ev(
            0,
            EventKind::LoadGame(LoadGame {
                commander: "Jameson".to_owned(),
                ship: "anaconda".to_owned(),
                ship_id: Some(9),
                ..LoadGame::default()
            }),
        );
        let next = update(Some(&previous), &load);
        assert_eq!(next.mode, TravelMode::Supercruise);
        assert_eq!(next.boost, Decimal::ONE);
        assert!(next.crew_captain.is_none());
        assert_eq!(next.ship.map(|s| s.ship_type), Some("anaconda".to_owned()));
        assert_eq!(next.session.map(|s| s.loaded_at), Some(at(0)));

        let landed = ev(
            0,
            EventKind::LoadGame(LoadGame {
                start_landed: true,
                ..LoadGame::default()
            }),
        );
        assert_eq!(update(Some(&previous), &landed).mode, TravelMode::Landed);
    }

    #[test]
    fn jet_cone_boost_ignores_non_positive_values() {
        let boost = ev(
            0,
            EventKind::JetConeBoost(JetConeBoost {
                boost_value: dec!(4),
            }),
        );
        let zero = ev(
            1,
            EventKind::JetConeBoost(JetConeBoost {
                boost_value: Decimal::ZERO,
            }),
        );
        let s1 = update(None, &boost);
        assert_eq!(s1.boost, dec!(4));
        assert_eq!(update(Some(&s1), &zero).boost, dec!(4));
    }

    #[test]
    fn unhandled_kinds_keep_previous() {
        let previous = loaded_state();
        for kind in [
            EventKind::Shutdown,
            EventKind::Resurrect,
            EventKind::Music,
            EventKind::StopMarker,
            EventKind::Unknown,
        ] {
            assert_eq!(update(Some(&previous), &ev(0, kind)), previous);
        }
    }
}
