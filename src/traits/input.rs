use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Logical action a fly controller reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum LogicalAction {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    MoveForward,
    MoveBack,
    PitchUp,
    PitchDown,
    YawLeft,
    YawRight,
    RollLeft,
    RollRight,
}

impl LogicalAction {
    pub const COUNT: usize = 12;

    pub const ALL: [LogicalAction; Self::COUNT] = [
        LogicalAction::MoveUp,
        LogicalAction::MoveDown,
        LogicalAction::MoveLeft,
        LogicalAction::MoveRight,
        LogicalAction::MoveForward,
        LogicalAction::MoveBack,
        LogicalAction::PitchUp,
        LogicalAction::PitchDown,
        LogicalAction::YawLeft,
        LogicalAction::YawRight,
        LogicalAction::RollLeft,
        LogicalAction::RollRight,
    ];

    /// Position of this action in `ALL`
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Input state - answers whether a logical action is currently held
///
/// Queried once per action per tick, so implementations must be cheap
/// and free of side effects.
pub trait InputState {
    fn is_active(&self, action: LogicalAction) -> bool;
}

impl<T: InputState + ?Sized> InputState for &T {
    fn is_active(&self, action: LogicalAction) -> bool {
        (**self).is_active(action)
    }
}

impl InputState for HashSet<LogicalAction> {
    fn is_active(&self, action: LogicalAction) -> bool {
        self.contains(&action)
    }
}

impl InputState for [LogicalAction] {
    fn is_active(&self, action: LogicalAction) -> bool {
        self.contains(&action)
    }
}

impl<const N: usize> InputState for [LogicalAction; N] {
    fn is_active(&self, action: LogicalAction) -> bool {
        self.contains(&action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_index_matches_all() {
        for (i, action) in LogicalAction::ALL.iter().enumerate() {
            assert_eq!(action.index(), i);
        }
    }

    #[test]
    fn test_all_actions_unique() {
        let set: HashSet<_> = LogicalAction::ALL.iter().collect();
        assert_eq!(set.len(), LogicalAction::COUNT);
    }

    #[test]
    fn test_action_debug() {
        assert_eq!(format!("{:?}", LogicalAction::MoveForward), "MoveForward");
        assert_eq!(format!("{:?}", LogicalAction::RollRight), "RollRight");
    }

    #[test]
    fn test_action_serde_name() {
        let json = serde_json::to_string(&LogicalAction::PitchUp).unwrap();
        assert_eq!(json, "\"pitch_up\"");

        let back: LogicalAction = serde_json::from_str("\"yaw_left\"").unwrap();
        assert_eq!(back, LogicalAction::YawLeft);
    }

    #[test]
    fn test_hash_set_input() {
        let mut held = HashSet::new();
        held.insert(LogicalAction::MoveForward);
        held.insert(LogicalAction::RollLeft);

        assert!(held.is_active(LogicalAction::MoveForward));
        assert!(held.is_active(LogicalAction::RollLeft));
        assert!(!held.is_active(LogicalAction::MoveBack));
    }

    #[test]
    fn test_slice_input() {
        let held = [LogicalAction::YawRight];
        assert!(held.is_active(LogicalAction::YawRight));
        assert!(!held.is_active(LogicalAction::YawLeft));

        let empty: &[LogicalAction] = &[];
        for action in LogicalAction::ALL {
            assert!(!empty.is_active(action));
        }
    }

    // Test mock input implementation
    struct MockInput {
        pressed: Vec<LogicalAction>,
    }

    impl InputState for MockInput {
        fn is_active(&self, action: LogicalAction) -> bool {
            self.pressed.contains(&action)
        }
    }

    #[test]
    fn test_input_through_reference() {
        let input = MockInput {
            pressed: vec![LogicalAction::MoveUp],
        };
        let by_ref = &input;

        assert!(by_ref.is_active(LogicalAction::MoveUp));
        assert!(!by_ref.is_active(LogicalAction::MoveDown));
    }

    #[test]
    fn test_input_all_actions_pressed() {
        let input = MockInput {
            pressed: LogicalAction::ALL.to_vec(),
        };

        for action in LogicalAction::ALL {
            assert!(input.is_active(action));
        }
    }
}
