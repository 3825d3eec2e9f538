//! Vehicle transitions: SRVs and ship-launched fighters.
//!
//! Each vehicle event maps to a solo target mode through a small lookup
//! table. When the player was crewing another commander's ship, the target
//! is lifted to its multicrew counterpart.

use starlog_types::{EventKind, TravelMode, VehicleTarget};

/// Outcome of a vehicle event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VehicleRule {
    /// Switch to this solo mode (lifted to multicrew when applicable).
    To(TravelMode),
    /// Switch to this solo mode only if the player was in a fighter.
    FromFighter(TravelMode),
    /// The event does not change the mode.
    Keep,
}

/// Look up the rule for a vehicle event. `None` when the event is not a
/// vehicle event at all.
const fn rule_for(kind: &EventKind) -> Option<VehicleRule> {
    let rule = match kind {
        EventKind::LaunchSrv(launch) => {
            if matches!(launch.player_controlled, Some(false)) {
                VehicleRule::Keep
            } else {
                VehicleRule::To(TravelMode::Srv)
            }
        }
        EventKind::DockSrv | EventKind::SrvDestroyed => VehicleRule::To(TravelMode::Landed),
        EventKind::LaunchFighter(launch) => {
            if matches!(launch.player_controlled, Some(false)) {
                VehicleRule::Keep
            } else {
                VehicleRule::To(TravelMode::Fighter)
            }
        }
        EventKind::DockFighter => VehicleRule::To(TravelMode::NormalSpace),
        EventKind::FighterDestroyed => VehicleRule::FromFighter(TravelMode::NormalSpace),
        EventKind::VehicleSwitch(switch) => match switch.to {
            VehicleTarget::Fighter => VehicleRule::To(TravelMode::Fighter),
            VehicleTarget::Mothership => VehicleRule::To(TravelMode::NormalSpace),
            VehicleTarget::Unknown => VehicleRule::Keep,
        },
        _ => return None,
    };
    Some(rule)
}

/// The mode after a vehicle event, or `None` if `kind` is not a vehicle
/// event.
pub fn vehicle_mode(previous: TravelMode, kind: &EventKind) -> Option<TravelMode> {
    let target = match rule_for(kind)? {
        VehicleRule::To(mode) => mode,
        VehicleRule::FromFighter(mode) if previous.to_solo() == TravelMode::Fighter => mode,
        VehicleRule::FromFighter(_) | VehicleRule::Keep => return Some(previous),
    };
    if previous.is_multicrew() {
        Some(target.to_multicrew())
    } else {
        Some(target)
    }
}

#[cfg(test)]
mod tests {
    use starlog_types::{VehicleLaunch, VehicleSwitch};

    use super::*;

    fn launch(player_controlled: Option<bool>) -> VehicleLaunch {
        VehicleLaunch {
            loadout: None,
            player_controlled,
        }
    }

    #[test]
    fn srv_round_trip() {
        let out = vehicle_mode(TravelMode::Landed, &EventKind::LaunchSrv(launch(None)));
        assert_eq!(out, Some(TravelMode::Srv));
        let back = vehicle_mode(TravelMode::Srv, &EventKind::DockSrv);
        assert_eq!(back, Some(TravelMode::Landed));
        let wrecked = vehicle_mode(TravelMode::Srv, &EventKind::SrvDestroyed);
        assert_eq!(wrecked, Some(TravelMode::Landed));
    }

    #[test]
    fn multicrew_is_preserved() {
        assert_eq!(
            vehicle_mode(TravelMode::MulticrewLanded, &EventKind::LaunchSrv(launch(None))),
            Some(TravelMode::MulticrewSrv)
        );
        assert_eq!(
            vehicle_mode(TravelMode::MulticrewSrv, &EventKind::DockSrv),
            Some(TravelMode::MulticrewLanded)
        );
        assert_eq!(
            vehicle_mode(
                TravelMode::MulticrewNormalSpace,
                &EventKind::LaunchFighter(launch(Some(true)))
            ),
            Some(TravelMode::MulticrewFighter)
        );
        assert_eq!(
            vehicle_mode(TravelMode::MulticrewFighter, &EventKind::DockFighter),
            Some(TravelMode::MulticrewNormalSpace)
        );
    }

    #[test]
    fn npc_fighter_launch_keeps_mode() {
        assert_eq!(
            vehicle_mode(
                TravelMode::NormalSpace,
                &EventKind::LaunchFighter(launch(Some(false)))
            ),
            Some(TravelMode::NormalSpace)
        );
    }

    #[test]
    fn fighter_destroyed_only_matters_in_fighter() {
        assert_eq!(
            vehicle_mode(TravelMode::Fighter, &EventKind::FighterDestroyed),
            Some(TravelMode::NormalSpace)
        );
        assert_eq!(
            vehicle_mode(TravelMode::Supercruise, &EventKind::FighterDestroyed),
            Some(TravelMode::Supercruise)
        );
        assert_eq!(
            vehicle_mode(TravelMode::MulticrewFighter, &EventKind::FighterDestroyed),
            Some(TravelMode::MulticrewNormalSpace)
        );
    }

    #[test]
    fn vehicle_switch_targets() {
        let to_fighter = EventKind::VehicleSwitch(VehicleSwitch {
            to: VehicleTarget::Fighter,
        });
        let to_ship = EventKind::VehicleSwitch(VehicleSwitch {
            to: VehicleTarget::Mothership,
        });
        assert_eq!(
            vehicle_mode(TravelMode::NormalSpace, &to_fighter),
            Some(TravelMode::Fighter)
        );
        assert_eq!(
            vehicle_mode(TravelMode::Fighter, &to_ship),
            Some(TravelMode::NormalSpace)
        );
    }

    #[test]
    fn non_vehicle_events_are_not_handled() {
        assert_eq!(vehicle_mode(TravelMode::Docked, &EventKind::Music), None);
    }
}
