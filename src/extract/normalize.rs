//! Turning an untrusted JSON value into a [`DrillSchema`].
//!
//! Normalization has two phases:
//!
//! 1. [`check_structure`] is the hard gate. It rejects values that are not
//!    drill-shaped at all (no name, no pitch, no players, no sequence) and
//!    never repairs anything.
//! 2. [`coerce`] is total. Once the gate has passed, every soft field is
//!    repaired with a fallback constant or an alias table; nothing in this
//!    phase can reject the drill.

use serde_json::{Map, Value};
use tracing::trace;

use crate::error::GateFailure;
use crate::schema::{
    ActionKind, ActionType, AnimationStep, Ball, Cone, ConeColor, DrillAction, DrillCategory,
    DrillSchema, DrillType, Easing, Goal, Pitch, PitchShape, Player, Point, Rotation,
    SetPieceType, Sport, TeamColor, Zone,
};

const DEFAULT_PITCH_WIDTH: f64 = 30.0;
const DEFAULT_PITCH_HEIGHT: f64 = 20.0;
/// Player, ball, cone and action coordinates default to the pitch centre.
const DEFAULT_COORDINATE: f64 = 50.0;
const DEFAULT_STEP_DURATION_MS: f64 = 1500.0;
const DEFAULT_ACTION_DELAY_MS: f64 = 0.0;
const DEFAULT_CYCLES: u32 = 2;

const DEFAULT_GOAL_X: f64 = 50.0;
const DEFAULT_GOAL_Y: f64 = 0.0;
const DEFAULT_GOAL_WIDTH: f64 = 12.0;
const DEFAULT_GOAL_ROTATION: f64 = 0.0;

const DEFAULT_ZONE_X: f64 = 0.0;
const DEFAULT_ZONE_Y: f64 = 0.0;
const DEFAULT_ZONE_WIDTH: f64 = 50.0;
const DEFAULT_ZONE_HEIGHT: f64 = 50.0;
const DEFAULT_ZONE_OPACITY: f64 = 0.3;

/// A value that passed the structural gate, with its required parts
/// already located.
#[derive(Debug, Clone, Copy)]
pub struct Gated<'a> {
    root: &'a Map<String, Value>,
    name: &'a str,
    pitch: &'a Map<String, Value>,
    players: &'a [Value],
    sequence: &'a [Value],
}

/// Players and balls an action may name as its destination.
#[derive(Debug, Clone, Copy)]
struct Targets<'a> {
    players: &'a [Player],
    balls: &'a [Ball],
}

enum Target {
    Player(Point),
    Ball(Point),
}

impl Targets<'_> {
    fn resolve(&self, id: &str) -> Option<Target> {
        if let Some(p) = self.players.iter().find(|p| p.id == id) {
            return Some(Target::Player(Point::new(p.x, p.y)));
        }
        self.balls
            .iter()
            .find(|b| b.id == id)
            .map(|b| Target::Ball(Point::new(b.x, b.y)))
    }
}

/// Phase A: reject anything that is not drill-shaped.
pub fn check_structure(value: &Value) -> Result<Gated<'_>, GateFailure> {
    let root = value.as_object().ok_or(GateFailure::NotAnObject)?;

    let name = root
        .get("name")
        .and_then(Value::as_str)
        .or_else(|| root.get("title").and_then(Value::as_str))
        .ok_or(GateFailure::MissingName)?;

    let pitch = root
        .get("pitch")
        .and_then(Value::as_object)
        .ok_or(GateFailure::MissingPitch)?;

    let players = root
        .get("players")
        .and_then(Value::as_array)
        .ok_or(GateFailure::MissingPlayers)?;
    if players.is_empty() {
        return Err(GateFailure::EmptyPlayers);
    }

    let sequence = root
        .get("sequence")
        .and_then(Value::as_array)
        .ok_or(GateFailure::MissingSequence)?;
    if sequence.is_empty() {
        return Err(GateFailure::EmptySequence);
    }

    Ok(Gated {
        root,
        name,
        pitch,
        players,
        sequence,
    })
}

/// Phase B: repair every soft field. Never fails.
pub fn coerce(gated: Gated<'_>) -> DrillSchema {
    let root = gated.root;

    let drill_type = root
        .get("type")
        .and_then(Value::as_str)
        .and_then(DrillType::parse_token)
        .unwrap_or_default();

    let category = root
        .get("category")
        .and_then(Value::as_str)
        .and_then(DrillCategory::parse_token)
        .or((drill_type == DrillType::SetPiece).then_some(DrillCategory::SetPiece));

    let players: Vec<Player> = gated
        .players
        .iter()
        .enumerate()
        .map(|(i, value)| coerce_player(i, value))
        .collect();

    let balls: Vec<Ball> = objects(root.get("balls"))
        .map(|(i, obj)| coerce_ball(i, obj))
        .collect();

    let targets = Targets {
        players: &players,
        balls: &balls,
    };
    let sequence = gated
        .sequence
        .iter()
        .enumerate()
        .map(|(i, value)| coerce_step(i, value, targets))
        .collect();

    DrillSchema {
        id: string_field(root, "id").unwrap_or_else(|| slugify(gated.name)),
        name: gated.name.to_string(),
        description: string_field(root, "description"),
        sport: root
            .get("sport")
            .and_then(Value::as_str)
            .and_then(Sport::parse_token)
            .unwrap_or_default(),
        category,
        drill_type,
        set_piece_type: root
            .get("setPieceType")
            .and_then(Value::as_str)
            .and_then(SetPieceType::parse_token),
        pitch: coerce_pitch(gated.pitch),
        cones: objects(root.get("cones"))
            .map(|(i, obj)| coerce_cone(i, obj))
            .collect(),
        goals: objects(root.get("goals"))
            .map(|(i, obj)| coerce_goal(i, obj))
            .collect(),
        zones: objects(root.get("zones"))
            .map(|(i, obj)| coerce_zone(i, obj))
            .collect(),
        players,
        balls,
        sequence,
        cycles: coerce_cycles(root.get("cycles")),
        rotation: root
            .get("rotation")
            .and_then(Value::as_object)
            .map(coerce_rotation),
    }
}

/// Normalize a value, reporting why it was rejected.
pub fn try_normalize_drill(value: &Value) -> Result<DrillSchema, GateFailure> {
    check_structure(value).map(coerce)
}

/// Normalize a value, or `None` if it is not drill-shaped.
pub fn normalize_drill(value: &Value) -> Option<DrillSchema> {
    try_normalize_drill(value).ok()
}

// ============================================================================
// Field coercion
// ============================================================================

fn coerce_pitch(obj: &Map<String, Value>) -> Pitch {
    Pitch {
        shape: obj
            .get("shape")
            .and_then(Value::as_str)
            .and_then(PitchShape::parse_token)
            .unwrap_or_default(),
        width: number_or(obj.get("width"), DEFAULT_PITCH_WIDTH),
        height: number_or(obj.get("height"), DEFAULT_PITCH_HEIGHT),
    }
}

fn coerce_player(index: usize, value: &Value) -> Player {
    let empty = Map::new();
    let obj = value.as_object().unwrap_or(&empty);

    Player {
        id: id_field(obj, "p", index),
        x: number_or(obj.get("x"), DEFAULT_COORDINATE),
        y: number_or(obj.get("y"), DEFAULT_COORDINATE),
        team: obj
            .get("team")
            .and_then(Value::as_str)
            .map(TeamColor::canonicalize)
            .unwrap_or_default(),
        has_ball: obj.get("hasBall").and_then(Value::as_bool).unwrap_or(false),
        label: string_field(obj, "label"),
        role: string_field(obj, "role"),
    }
}

fn coerce_ball(index: usize, obj: &Map<String, Value>) -> Ball {
    Ball {
        id: id_field(obj, "b", index),
        x: number_or(obj.get("x"), DEFAULT_COORDINATE),
        y: number_or(obj.get("y"), DEFAULT_COORDINATE),
        held_by: string_field(obj, "heldBy"),
    }
}

fn coerce_cone(index: usize, obj: &Map<String, Value>) -> Cone {
    Cone {
        id: id_field(obj, "c", index),
        x: number_or(obj.get("x"), DEFAULT_COORDINATE),
        y: number_or(obj.get("y"), DEFAULT_COORDINATE),
        color: obj
            .get("color")
            .and_then(Value::as_str)
            .map(ConeColor::canonicalize)
            .unwrap_or_default(),
    }
}

fn coerce_goal(index: usize, obj: &Map<String, Value>) -> Goal {
    Goal {
        id: id_field(obj, "g", index),
        x: number_or(obj.get("x"), DEFAULT_GOAL_X),
        y: number_or(obj.get("y"), DEFAULT_GOAL_Y),
        width: number_or(obj.get("width"), DEFAULT_GOAL_WIDTH),
        rotation: number_or(obj.get("rotation"), DEFAULT_GOAL_ROTATION),
    }
}

fn coerce_zone(index: usize, obj: &Map<String, Value>) -> Zone {
    Zone {
        id: id_field(obj, "z", index),
        x: number_or(obj.get("x"), DEFAULT_ZONE_X),
        y: number_or(obj.get("y"), DEFAULT_ZONE_Y),
        width: number_or(obj.get("width"), DEFAULT_ZONE_WIDTH),
        height: number_or(obj.get("height"), DEFAULT_ZONE_HEIGHT),
        opacity: number_or(obj.get("opacity"), DEFAULT_ZONE_OPACITY),
        color: string_field(obj, "color"),
        label: string_field(obj, "label"),
    }
}

fn coerce_rotation(obj: &Map<String, Value>) -> Rotation {
    let order = obj
        .get("order")
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Rotation {
        description: string_field(obj, "description"),
        order,
    }
}

fn coerce_step(index: usize, value: &Value, targets: Targets<'_>) -> AnimationStep {
    let empty = Map::new();
    let obj = value.as_object().unwrap_or(&empty);

    let actions = match obj.get("actions") {
        Some(Value::Array(actions)) => actions
            .iter()
            .filter_map(|action| coerce_action(action, targets))
            .collect(),
        _ => Vec::new(),
    };

    AnimationStep {
        id: id_field(obj, "step", index),
        duration: number_or(obj.get("duration"), DEFAULT_STEP_DURATION_MS),
        actions,
        label: string_field(obj, "label"),
        description: string_field(obj, "description"),
    }
}

/// Build one action. Actions without a subject cannot be animated and are
/// dropped; everything else is repaired.
fn coerce_action(value: &Value, targets: Targets<'_>) -> Option<DrillAction> {
    let obj = value.as_object()?;
    let Some(subject) = string_field(obj, "subject") else {
        trace!("dropping action without subject");
        return None;
    };

    let action_type = obj
        .get("type")
        .and_then(Value::as_str)
        .and_then(ActionType::parse_token);

    let from = obj.get("from").and_then(Value::as_object).map(coerce_point);
    let mut receiver = string_field(obj, "receiver").or_else(|| string_field(obj, "target"));
    let to = match obj.get("to") {
        Some(Value::Object(point)) => Some(coerce_point(point)),
        // `"to": "p2"` names a player or ball instead of a position.
        Some(Value::String(target_id)) => Some(match targets.resolve(target_id) {
            Some(Target::Ball(position)) => position,
            Some(Target::Player(position)) => {
                receiver.get_or_insert_with(|| target_id.clone());
                position
            }
            None => {
                trace!(id = %target_id, "unresolved target id, using pitch centre");
                receiver.get_or_insert_with(|| target_id.clone());
                Point::new(DEFAULT_COORDINATE, DEFAULT_COORDINATE)
            }
        }),
        _ => None,
    };
    let ball = string_field(obj, "ball");

    let kind = match (action_type, to) {
        (Some(ActionType::Wait), _) | (None, None) => ActionKind::Wait,
        (Some(_), None) => {
            trace!(subject = %subject, "movement action without destination becomes wait");
            ActionKind::Wait
        }
        (None, Some(to)) => ActionKind::Move { from, to },
        (Some(ActionType::Run), Some(to)) => ActionKind::Run { from, to },
        (Some(ActionType::Move), Some(to)) => ActionKind::Move { from, to },
        (Some(ActionType::Dribble), Some(to)) => ActionKind::Dribble { from, to, ball },
        (Some(ActionType::Shoot), Some(to)) => ActionKind::Shoot { from, to, ball },
        (Some(ActionType::Pass), Some(to)) => ActionKind::Pass {
            from,
            to,
            ball,
            receiver,
        },
    };

    Some(DrillAction {
        subject,
        kind,
        delay: number_or(obj.get("delay"), DEFAULT_ACTION_DELAY_MS),
        duration: finite_number(obj.get("duration")),
        easing: obj
            .get("easing")
            .and_then(Value::as_str)
            .and_then(Easing::parse_token),
    })
}

fn coerce_point(obj: &Map<String, Value>) -> Point {
    Point::new(
        number_or(obj.get("x"), DEFAULT_COORDINATE),
        number_or(obj.get("y"), DEFAULT_COORDINATE),
    )
}

fn coerce_cycles(value: Option<&Value>) -> u32 {
    match finite_number(value) {
        Some(n) if n >= 0.0 => n.trunc().min(u32::MAX as f64) as u32,
        _ => DEFAULT_CYCLES,
    }
}

// ============================================================================
// Primitive helpers
// ============================================================================

/// A finite number, accepting numeric strings such as `"20"`.
fn finite_number(value: Option<&Value>) -> Option<f64> {
    let n = match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    n.is_finite().then_some(n)
}

fn number_or(value: Option<&Value>, fallback: f64) -> f64 {
    finite_number(value).unwrap_or_else(|| {
        if value.is_some() {
            trace!(?value, fallback, "non-numeric value replaced");
        }
        fallback
    })
}

fn string_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// The element's own id, or `{prefix}{index + 1}`.
fn id_field(obj: &Map<String, Value>, prefix: &str, index: usize) -> String {
    string_field(obj, "id").unwrap_or_else(|| format!("{}{}", prefix, index + 1))
}

/// Iterate the object entries of an optional array, keeping original indices.
fn objects(value: Option<&Value>) -> impl Iterator<Item = (usize, &Map<String, Value>)> {
    value
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .enumerate()
        .filter_map(|(i, v)| v.as_object().map(|obj| (i, obj)))
}

/// Derive a drill id from its name.
fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }

    if slug.is_empty() {
        "drill".to_string()
    } else {
        slug
    }
}
