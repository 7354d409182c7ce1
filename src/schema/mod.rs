//! Drill diagram domain model.
//!
//! A [`DrillSchema`] is the renderer-ready description of one animated drill
//! or set-piece. Values are only ever built by the normalizer in
//! [`crate::extract`], which guarantees that `players` and `sequence` are
//! non-empty, that every element carries an id, and that every number is
//! finite.
//!
//! Coordinates are percentages of the pitch (0-100); pitch dimensions are
//! metres; durations and delays are milliseconds.

pub mod enums;

use serde::{Deserialize, Serialize};

pub use enums::{
    ActionType, ConeColor, DrillCategory, DrillType, Easing, PitchShape, SetPieceType, Sport,
    TeamColor,
};

/// One coaching drill or set-piece.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrillSchema {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub sport: Sport,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<DrillCategory>,
    #[serde(rename = "type", default)]
    pub drill_type: DrillType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_piece_type: Option<SetPieceType>,
    pub pitch: Pitch,
    #[serde(default)]
    pub cones: Vec<Cone>,
    #[serde(default)]
    pub goals: Vec<Goal>,
    #[serde(default)]
    pub zones: Vec<Zone>,
    pub players: Vec<Player>,
    #[serde(default)]
    pub balls: Vec<Ball>,
    pub sequence: Vec<AnimationStep>,
    pub cycles: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<Rotation>,
}

impl DrillSchema {
    /// Total length of one animation cycle in milliseconds.
    pub fn cycle_duration(&self) -> f64 {
        self.sequence.iter().map(|step| step.duration).sum()
    }

    /// Look up a player by id.
    pub fn player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Whether this diagram describes a dead-ball routine.
    pub fn is_set_piece(&self) -> bool {
        self.drill_type == DrillType::SetPiece
    }
}

/// Playing area dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pitch {
    pub shape: PitchShape,
    pub width: f64,
    pub height: f64,
}

impl Default for Pitch {
    fn default() -> Self {
        Self {
            shape: PitchShape::Rectangle,
            width: 30.0,
            height: 20.0,
        }
    }
}

/// A position on the pitch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cone {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub color: ConeColor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    /// Degrees clockwise.
    pub rotation: f64,
}

/// A shaded area of the pitch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub opacity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub team: TeamColor,
    pub has_ball: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ball {
    pub id: String,
    pub x: f64,
    pub y: f64,
    /// Id of the player in possession at the start of the drill.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub held_by: Option<String>,
}

/// How players rotate between cycles.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Rotation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Player ids in rotation order.
    #[serde(default)]
    pub order: Vec<String>,
}

/// A timed unit of the animation. Actions within a step run concurrently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationStep {
    pub id: String,
    /// Milliseconds.
    pub duration: f64,
    pub actions: Vec<DrillAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One movement or ball event inside a step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrillAction {
    /// Player or ball id.
    pub subject: String,
    #[serde(flatten)]
    pub kind: ActionKind,
    /// Offset from the start of the step, in milliseconds.
    #[serde(default)]
    pub delay: f64,
    /// Overrides the step duration when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub easing: Option<Easing>,
}

impl DrillAction {
    pub fn action_type(&self) -> ActionType {
        self.kind.action_type()
    }
}

/// Kind-specific payload of a [`DrillAction`].
///
/// Movement kinds always carry a destination. `ball` names the ball being
/// played; `receiver` is the player the ball is transferred to by a pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ActionKind {
    Run {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        from: Option<Point>,
        to: Point,
    },
    Dribble {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        from: Option<Point>,
        to: Point,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        ball: Option<String>,
    },
    Pass {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        from: Option<Point>,
        to: Point,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        ball: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        receiver: Option<String>,
    },
    Shoot {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        from: Option<Point>,
        to: Point,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        ball: Option<String>,
    },
    Move {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        from: Option<Point>,
        to: Point,
    },
    Wait,
}

impl ActionKind {
    pub fn action_type(&self) -> ActionType {
        match self {
            ActionKind::Run { .. } => ActionType::Run,
            ActionKind::Dribble { .. } => ActionType::Dribble,
            ActionKind::Pass { .. } => ActionType::Pass,
            ActionKind::Shoot { .. } => ActionType::Shoot,
            ActionKind::Move { .. } => ActionType::Move,
            ActionKind::Wait => ActionType::Wait,
        }
    }

    /// Destination of the action, if it moves anything.
    pub fn destination(&self) -> Option<Point> {
        match self {
            ActionKind::Run { to, .. }
            | ActionKind::Dribble { to, .. }
            | ActionKind::Pass { to, .. }
            | ActionKind::Shoot { to, .. }
            | ActionKind::Move { to, .. } => Some(*to),
            ActionKind::Wait => None,
        }
    }

    /// Whether the ball changes hands or leaves its holder.
    pub fn transfers_ball(&self) -> bool {
        matches!(self, ActionKind::Pass { .. } | ActionKind::Shoot { .. })
    }
}
