//! End-to-end extraction over realistic assistant messages.

use drillcraft::schema::{
    ActionKind, ConeColor, DrillCategory, DrillType, PitchShape, Point, SetPieceType, Sport,
    TeamColor,
};
use drillcraft::{extract_drill_from_content, DrillExtractor, ExtractionConfig};

use crate::helpers::load_fixture;

// ============================================================================
// Session plan with two drill blocks
// ============================================================================

#[test]
fn session_plan_yields_both_drills_in_order() {
    let result = extract_drill_from_content(&load_fixture("session_plan.md"));

    assert_eq!(result.drills.len(), 2);
    assert_eq!(result.drills[0].name, "4v1 Rondo");
    assert_eq!(result.drills[1].name, "Near-post corner");
    assert_eq!(result.drill(), Some(&result.drills[0]));
}

#[test]
fn session_plan_clean_content_keeps_prose_only() {
    let result = extract_drill_from_content(&load_fixture("session_plan.md"));

    assert!(!result.clean_content.contains("```"));
    assert!(result.clean_content.starts_with("Here is a two-part session"));
    assert!(result.clean_content.contains("## Part 2: Corner routine"));
    assert!(result.clean_content.ends_with("Let me know how the players get on!"));
}

#[test]
fn rondo_is_repaired() {
    let result = extract_drill_from_content(&load_fixture("session_plan.md"));
    let rondo = &result.drills[0];

    assert_eq!(rondo.id, "4v1-rondo");
    assert_eq!(rondo.sport, Sport::Football);
    assert_eq!(rondo.category, Some(DrillCategory::Technical));
    assert_eq!(rondo.pitch.width, 12.0);
    assert_eq!(rondo.cycles, 3);

    let cone_colors: Vec<_> = rondo.cones.iter().map(|c| c.color).collect();
    assert_eq!(
        cone_colors,
        [
            ConeColor::White,
            ConeColor::Yellow,
            ConeColor::Red,
            ConeColor::Yellow
        ]
    );

    let ids: Vec<_> = rondo.players.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["p1", "p2", "p3", "p4", "p5"]);
    assert!(rondo.players[..4].iter().all(|p| p.team == TeamColor::Blue));
    assert_eq!(rondo.players[4].team, TeamColor::Red);
    assert_eq!(rondo.players[4].role.as_deref(), Some("defender"));

    assert_eq!(rondo.balls[0].id, "b1");
    assert_eq!(rondo.balls[0].held_by.as_deref(), Some("p1"));
}

#[test]
fn rondo_sequence_resolves_pass_targets() {
    let result = extract_drill_from_content(&load_fixture("session_plan.md"));
    let rondo = &result.drills[0];

    assert_eq!(rondo.sequence[0].id, "step1");
    assert_eq!(rondo.sequence[0].duration, 1200.0);
    assert_eq!(rondo.sequence[1].id, "step2");
    assert_eq!(rondo.sequence[1].duration, 1500.0);
    assert_eq!(rondo.cycle_duration(), 2700.0);

    let first_pass = &rondo.sequence[0].actions[0];
    assert_eq!(
        first_pass.kind,
        ActionKind::Pass {
            from: None,
            to: Point::new(50.0, 0.0),
            ball: None,
            receiver: Some("p2".to_string()),
        }
    );

    let press = &rondo.sequence[0].actions[1];
    assert_eq!(press.subject, "p5");
    assert!(matches!(press.kind, ActionKind::Run { .. }));
}

#[test]
fn corner_is_a_set_piece() {
    let result = extract_drill_from_content(&load_fixture("session_plan.md"));
    let corner = &result.drills[1];

    assert_eq!(corner.drill_type, DrillType::SetPiece);
    assert_eq!(corner.set_piece_type, Some(SetPieceType::Corner));
    assert_eq!(corner.category, Some(DrillCategory::SetPiece));
    assert_eq!(corner.pitch.shape, PitchShape::HalfPitch);
    assert_eq!(corner.pitch.height, 52.5);

    assert_eq!(corner.goals[0].id, "g1");
    assert_eq!(corner.goals[0].width, 12.0);
    assert_eq!(corner.zones[0].label.as_deref(), Some("six-yard box"));
    assert_eq!(corner.zones[0].opacity, 0.3);

    assert_eq!(corner.player("taker").map(|p| p.team), Some(TeamColor::Blue));
    assert_eq!(corner.player("gk").map(|p| p.team), Some(TeamColor::Yellow));

    let actions = &corner.sequence[0].actions;
    assert!(matches!(actions[0].kind, ActionKind::Shoot { .. }));
    assert!(matches!(actions[1].kind, ActionKind::Run { .. }));
}

// ============================================================================
// Failure handling
// ============================================================================

#[test]
fn broken_blocks_never_fail_extraction() {
    let text = load_fixture("broken_blocks.md");
    let result = extract_drill_from_content(&text);

    assert!(result.drills.is_empty());
    assert!(result.drill().is_none());
    assert!(!result.clean_content.contains("Broken"));
    assert!(result.clean_content.contains("```json\n{ \"theme\": \"dark\", \"animate\": true }\n```"));
}

#[test]
fn untagged_fence_is_found_by_last_pass() {
    let result = extract_drill_from_content(&load_fixture("untagged_drill.md"));

    assert_eq!(result.drills.len(), 1);
    assert_eq!(result.drills[0].players[1].team, TeamColor::Red);
    assert_eq!(result.clean_content, "Quick passing warm-up:");
}

#[test]
fn untagged_fence_ignored_when_fallback_disabled() {
    let text = load_fixture("untagged_drill.md");
    let extractor = DrillExtractor::new(ExtractionConfig {
        any_fence_fallback: false,
        ..ExtractionConfig::default()
    });

    let result = extractor.extract(&text);
    assert!(result.drills.is_empty());
    assert_eq!(result.clean_content, text);
}

#[test]
fn second_pass_over_clean_content_finds_nothing() {
    let first = extract_drill_from_content(&load_fixture("session_plan.md"));
    let second = extract_drill_from_content(&first.clean_content);

    assert!(second.drills.is_empty());
    assert_eq!(second.clean_content, first.clean_content);
}

#[test]
fn extraction_is_safe_across_threads() {
    let text = load_fixture("session_plan.md");
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let text = text.clone();
            std::thread::spawn(move || extract_drill_from_content(&text).drills.len())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 2);
    }
}
