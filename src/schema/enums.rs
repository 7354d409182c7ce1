//! Closed vocabularies used by drill diagrams.
//!
//! Every enumerated token an LLM writes passes through one of the
//! `canonicalize`/`parse_token` functions here. Colors never fail: unknown
//! values resolve through an alias table to a fallback. The remaining
//! vocabularies return `None` and let the normalizer pick the default.

use deunicode::deunicode;
use serde::{Deserialize, Serialize};

/// Fold an enum token to its comparison form.
///
/// Transliterates to ASCII (so `set‑piece` with a non-breaking hyphen still
/// matches), lowercases, trims, and joins words with single hyphens.
pub(crate) fn fold_token(raw: &str) -> String {
    let ascii = deunicode(raw).to_lowercase();
    let mut folded = String::with_capacity(ascii.len());
    let mut last_was_hyphen = false;

    for c in ascii.trim().chars() {
        if c == ' ' || c == '_' || c == '-' || c == '\t' {
            if !last_was_hyphen && !folded.is_empty() {
                folded.push('-');
                last_was_hyphen = true;
            }
        } else {
            folded.push(c);
            last_was_hyphen = false;
        }
    }

    while folded.ends_with('-') {
        folded.pop();
    }
    folded
}

/// Supported sports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sport {
    #[default]
    Football,
    Basketball,
    Rugby,
    Hockey,
    AmericanFootball,
    Tennis,
    Volleyball,
    Cricket,
}

impl Sport {
    pub const ALL: [Sport; 8] = [
        Sport::Football,
        Sport::Basketball,
        Sport::Rugby,
        Sport::Hockey,
        Sport::AmericanFootball,
        Sport::Tennis,
        Sport::Volleyball,
        Sport::Cricket,
    ];

    pub fn parse_token(raw: &str) -> Option<Self> {
        match fold_token(raw).as_str() {
            "football" | "soccer" => Some(Sport::Football),
            "basketball" => Some(Sport::Basketball),
            "rugby" => Some(Sport::Rugby),
            "hockey" => Some(Sport::Hockey),
            "american-football" | "gridiron" => Some(Sport::AmericanFootball),
            "tennis" => Some(Sport::Tennis),
            "volleyball" => Some(Sport::Volleyball),
            "cricket" => Some(Sport::Cricket),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sport::Football => "football",
            Sport::Basketball => "basketball",
            Sport::Rugby => "rugby",
            Sport::Hockey => "hockey",
            Sport::AmericanFootball => "american-football",
            Sport::Tennis => "tennis",
            Sport::Volleyball => "volleyball",
            Sport::Cricket => "cricket",
        }
    }
}

/// Coaching category of a drill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DrillCategory {
    Technical,
    Tactical,
    Physical,
    Psychological,
    SmallSidedGame,
    SetPiece,
}

impl DrillCategory {
    pub fn parse_token(raw: &str) -> Option<Self> {
        match fold_token(raw).as_str() {
            "technical" => Some(DrillCategory::Technical),
            "tactical" => Some(DrillCategory::Tactical),
            "physical" => Some(DrillCategory::Physical),
            "psychological" => Some(DrillCategory::Psychological),
            "small-sided-game" => Some(DrillCategory::SmallSidedGame),
            "set-piece" => Some(DrillCategory::SetPiece),
            _ => None,
        }
    }
}

/// Whether the diagram is an open-play drill or a dead-ball routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DrillType {
    #[default]
    Drill,
    SetPiece,
}

impl DrillType {
    pub fn parse_token(raw: &str) -> Option<Self> {
        match fold_token(raw).as_str() {
            "drill" => Some(DrillType::Drill),
            "set-piece" => Some(DrillType::SetPiece),
            _ => None,
        }
    }
}

/// Dead-ball situations across all supported sports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SetPieceType {
    // football
    Corner,
    FreeKick,
    ThrowIn,
    GoalKick,
    Penalty,
    // basketball
    TipOff,
    Inbound,
    FreeThrow,
    // rugby
    Scrum,
    Lineout,
    PenaltyKick,
    Conversion,
    DropGoal,
    // hockey
    PenaltyCorner,
    FreeHit,
    PenaltyStroke,
    // american football
    Kickoff,
    FieldGoal,
    ExtraPoint,
    Punt,
    // tennis
    Serve,
    Return,
    // volleyball
    ServeReceive,
    Rotation,
    // cricket
    Powerplay,
    DeathOvers,
}

impl SetPieceType {
    pub fn parse_token(raw: &str) -> Option<Self> {
        use SetPieceType::*;

        let token = match fold_token(raw).as_str() {
            "corner" => Corner,
            "free-kick" => FreeKick,
            "throw-in" => ThrowIn,
            "goal-kick" => GoalKick,
            "penalty" => Penalty,
            "tip-off" => TipOff,
            "inbound" => Inbound,
            "free-throw" => FreeThrow,
            "scrum" => Scrum,
            "lineout" => Lineout,
            "penalty-kick" => PenaltyKick,
            "conversion" => Conversion,
            "drop-goal" => DropGoal,
            "penalty-corner" => PenaltyCorner,
            "free-hit" => FreeHit,
            "penalty-stroke" => PenaltyStroke,
            "kickoff" => Kickoff,
            "field-goal" => FieldGoal,
            "extra-point" => ExtraPoint,
            "punt" => Punt,
            "serve" => Serve,
            "return" => Return,
            "serve-receive" => ServeReceive,
            "rotation" => Rotation,
            "powerplay" => Powerplay,
            "death-overs" => DeathOvers,
            _ => return None,
        };
        Some(token)
    }
}

/// Outline of the playing area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PitchShape {
    #[default]
    Rectangle,
    Square,
    HalfPitch,
    FullPitch,
    Circle,
}

impl PitchShape {
    pub fn parse_token(raw: &str) -> Option<Self> {
        match fold_token(raw).as_str() {
            "rectangle" => Some(PitchShape::Rectangle),
            "square" => Some(PitchShape::Square),
            "half-pitch" | "half" => Some(PitchShape::HalfPitch),
            "full-pitch" | "full" => Some(PitchShape::FullPitch),
            "circle" => Some(PitchShape::Circle),
            _ => None,
        }
    }
}

/// Bib color of a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamColor {
    #[default]
    Blue,
    Red,
    Yellow,
    Green,
    White,
    Black,
}

impl TeamColor {
    /// Resolve any team token to a bib color. Unknown tokens become blue.
    pub fn canonicalize(raw: &str) -> Self {
        match fold_token(raw).as_str() {
            "blue" | "purple" | "cyan" | "navy" => TeamColor::Blue,
            "red" | "orange" | "pink" | "maroon" => TeamColor::Red,
            "yellow" | "gold" | "neutral" | "neutrals" => TeamColor::Yellow,
            "green" | "lime" => TeamColor::Green,
            "white" => TeamColor::White,
            "black" | "grey" | "gray" => TeamColor::Black,
            // role labels instead of colors
            "team-a" | "a" | "attackers" | "attack" | "offense" | "home" => TeamColor::Blue,
            "team-b" | "b" | "defenders" | "defence" | "defense" | "away" => TeamColor::Red,
            _ => TeamColor::Blue,
        }
    }
}

/// Color of a training cone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConeColor {
    #[default]
    Yellow,
    Orange,
    Red,
    Blue,
    Green,
    White,
}

impl ConeColor {
    /// Resolve any cone color token. Unknown tokens become yellow.
    pub fn canonicalize(raw: &str) -> Self {
        match fold_token(raw).as_str() {
            "yellow" | "gold" => ConeColor::Yellow,
            "orange" => ConeColor::Orange,
            "red" | "pink" => ConeColor::Red,
            "blue" | "purple" | "cyan" | "black" => ConeColor::Blue,
            "green" => ConeColor::Green,
            "white" | "grey" | "gray" => ConeColor::White,
            _ => ConeColor::Yellow,
        }
    }
}

/// Animation easing curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub fn parse_token(raw: &str) -> Option<Self> {
        match fold_token(raw).as_str() {
            "linear" => Some(Easing::Linear),
            "ease-in" | "easein" => Some(Easing::EaseIn),
            "ease-out" | "easeout" => Some(Easing::EaseOut),
            "ease-in-out" | "easeinout" | "ease" => Some(Easing::EaseInOut),
            _ => None,
        }
    }
}

/// The verb of an animation action, before its geometry is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionType {
    Run,
    Dribble,
    Pass,
    Shoot,
    Move,
    Wait,
}

impl ActionType {
    pub fn parse_token(raw: &str) -> Option<Self> {
        match fold_token(raw).as_str() {
            "run" | "sprint" | "jog" => Some(ActionType::Run),
            "dribble" | "carry" => Some(ActionType::Dribble),
            "pass" => Some(ActionType::Pass),
            "shoot" | "shot" => Some(ActionType::Shoot),
            "move" | "reposition" => Some(ActionType::Move),
            "wait" | "hold" | "pause" => Some(ActionType::Wait),
            _ => None,
        }
    }
}
