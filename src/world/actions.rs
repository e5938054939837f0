use crate::model::{Action, ActionKind, CompassBearing};

/// What the hero can do in one tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleAction {
    Move {
        bearing: CompassBearing,
        label: String,
    },
    /// Pick up the thing at this index in the world's thing list
    Take { item: usize, label: String },
    Wait,
}

impl SampleAction {
    pub fn go(bearing: CompassBearing) -> Self {
        SampleAction::Move {
            bearing,
            label: format!("Move {}", bearing.name()),
        }
    }

    pub fn take(item: usize, description: &str) -> Self {
        SampleAction::Take {
            item,
            label: format!("Take {description}"),
        }
    }
}

impl Action for SampleAction {
    fn description(&self) -> &str {
        match self {
            SampleAction::Move { label, .. } | SampleAction::Take { label, .. } => label,
            SampleAction::Wait => "Wait",
        }
    }

    fn kind(&self) -> ActionKind {
        match self {
            SampleAction::Move { bearing, .. } => ActionKind::Move {
                bearing: Some(*bearing),
            },
            _ => ActionKind::Other,
        }
    }
}
