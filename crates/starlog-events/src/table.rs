//! The sequence transition table.
//!
//! An open sequence is identified by its [`SequenceKind`]. For every
//! incoming event type the table answers one question: what happens to the
//! open sequence? The answer is a [`Step`].
//!
//! | Open sequence      | Absorbed                                         | Closes on        | Close   |
//! |--------------------|--------------------------------------------------|------------------|---------|
//! | `Transfer`         | suit loadouts, ship loadout, backpack, locker    | locker after backpack | merge |
//! | `SuitChange`       | ship loadout, backpack                           | ship locker      | merge   |
//! | `ItemUse`          | backpack change, ship locker                     | backpack         | merge   |
//! | `MicroResources`   | backpack                                         | ship locker      | merge   |
//! | `DestinationDrop`  | ship locker, backpack                            | supercruise exit | reorder |

use starlog_types::EventType;

/// A multi-event action the game reports unreliably.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SequenceKind {
    /// Embarking or disembarking: followed by suit, loadout and inventory
    /// snapshots in no fixed order.
    Transfer,
    /// Changing suit loadout.
    SuitChange,
    /// Picking up, dropping or using on-foot items.
    ItemUse,
    /// Buying, selling or trading microresources.
    MicroResources,
    /// Dropping out of supercruise at a destination. The game writes the
    /// drop before the exit it belongs to.
    DestinationDrop,
}

/// How a closed sequence is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseMode {
    /// The starter absorbs every buffered event and the terminator.
    Merge,
    /// The terminator is emitted first, then the buffered events in order.
    Reorder,
}

/// What an incoming event does to the open sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Buffer the event as part of the open sequence.
    Absorb,
    /// The event terminates the open sequence.
    Close,
    /// The event starts a different sequence: flush the open one unmerged.
    Restart(SequenceKind),
    /// A session boundary: flush the open sequence, then emit the event.
    Flush,
    /// Unrelated: hold the event behind the open sequence and age it.
    Pass,
}

impl SequenceKind {
    /// The sequence a starter event opens, if it is a starter.
    pub const fn started_by(event_type: EventType) -> Option<Self> {
        match event_type {
            EventType::Embark | EventType::Disembark => Some(Self::Transfer),
            EventType::SuitLoadout | EventType::SwitchSuitLoadout => Some(Self::SuitChange),
            EventType::CollectItems
            | EventType::DropItems
            | EventType::UseConsumable
            | EventType::BackpackChange
            | EventType::Resupply => Some(Self::ItemUse),
            EventType::BuyMicroResources
            | EventType::SellMicroResources
            | EventType::TradeMicroResources => Some(Self::MicroResources),
            EventType::SupercruiseDestinationDrop => Some(Self::DestinationDrop),
            _ => None,
        }
    }

    /// How this sequence is emitted once closed.
    pub const fn close_mode(self) -> CloseMode {
        match self {
            Self::DestinationDrop => CloseMode::Reorder,
            Self::Transfer | Self::SuitChange | Self::ItemUse | Self::MicroResources => {
                CloseMode::Merge
            }
        }
    }

    /// Whether `event_type` belongs to this sequence without closing it.
    const fn follows(self, event_type: EventType) -> bool {
        match self {
            Self::Transfer => matches!(
                event_type,
                EventType::SuitLoadout
                    | EventType::SwitchSuitLoadout
                    | EventType::Loadout
                    | EventType::Backpack
            ),
            Self::SuitChange => matches!(event_type, EventType::Loadout),
            Self::ItemUse => matches!(event_type, EventType::BackpackChange),
            Self::MicroResources | Self::DestinationDrop => false,
        }
    }

    /// Whether `event_type` terminates this sequence. `saw_backpack` tells
    /// whether a backpack snapshot has already been absorbed.
    const fn closed_by(self, event_type: EventType, saw_backpack: bool) -> bool {
        match self {
            Self::Transfer => matches!(event_type, EventType::ShipLocker) && saw_backpack,
            Self::SuitChange | Self::MicroResources => matches!(event_type, EventType::ShipLocker),
            Self::ItemUse => matches!(event_type, EventType::Backpack),
            Self::DestinationDrop => matches!(event_type, EventType::SupercruiseExit),
        }
    }
}

/// Whether an event type marks a session boundary.
pub const fn is_session_boundary(event_type: EventType) -> bool {
    matches!(
        event_type,
        EventType::LoadGame | EventType::Shutdown | EventType::Died
    )
}

/// Whether an event type is an inventory snapshot that can terminate some
/// sequence.
pub const fn is_inventory_snapshot(event_type: EventType) -> bool {
    matches!(event_type, EventType::ShipLocker | EventType::Backpack)
}

/// Look up the step for an incoming event while `open` is in progress.
pub const fn step(open: SequenceKind, saw_backpack: bool, incoming: EventType) -> Step {
    if is_session_boundary(incoming) {
        return Step::Flush;
    }
    if open.closed_by(incoming, saw_backpack) {
        return Step::Close;
    }
    if open.follows(incoming) || is_inventory_snapshot(incoming) {
        return Step::Absorb;
    }
    match SequenceKind::started_by(incoming) {
        Some(next) => Step::Restart(next),
        None => Step::Pass,
    }
}
