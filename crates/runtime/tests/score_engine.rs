use kicker_runtime::{
    GameConfig, GameEngine, GameError, ManualGoals, RuntimeConfig, Score, Team, TeamIds,
};

const WHITE: i64 = TeamIds::DEFAULT_WHITE;
const BLUE: i64 = TeamIds::DEFAULT_BLUE;

fn engine_with_score(white: u32, blue: u32) -> GameEngine {
    let engine = GameEngine::default();
    for _ in 0..white {
        engine.add_goal_for(Team::White);
    }
    for _ in 0..blue {
        engine.add_goal_for(Team::Blue);
    }
    engine
}

#[test]
fn starts_at_zero() {
    let engine = GameEngine::default();
    assert_eq!(engine.score(), Score::ZERO);
    assert_eq!(engine.manual_goals(), ManualGoals::ZERO);
}

#[test]
fn add_goal_increments_only_named_team() {
    let engine = GameEngine::default();

    assert_eq!(engine.add_goal(WHITE), Ok(Score::new(1, 0)));
    assert_eq!(engine.add_goal(BLUE), Ok(Score::new(1, 1)));

    for _ in 0..5 {
        engine.add_goal(BLUE).unwrap();
    }
    assert_eq!(engine.score(), Score::new(1, 6));
}

#[test]
fn sub_goal_decrements_and_floors_at_zero() {
    let engine = engine_with_score(1, 2);

    assert_eq!(engine.sub_goal(WHITE), Ok(Score::new(0, 2)));
    assert_eq!(engine.sub_goal(BLUE), Ok(Score::new(0, 1)));
    // already zero: succeeds, stays zero
    assert_eq!(engine.sub_goal(WHITE), Ok(Score::new(0, 1)));
    assert_eq!(engine.sub_goal(WHITE), Ok(Score::new(0, 1)));
}

#[test]
fn invalid_team_is_rejected_without_mutation() {
    let engine = engine_with_score(3, 1);

    for raw in [-10, -1, 2, 7] {
        assert_eq!(engine.add_goal(raw), Err(GameError::InvalidTeam(raw)));
        assert_eq!(engine.sub_goal(raw), Err(GameError::InvalidTeam(raw)));
    }
    assert_eq!(engine.score(), Score::new(3, 1));
}

#[test]
fn reset_zeroes_any_score() {
    let engine = engine_with_score(3, 1);
    assert_eq!(engine.reset_score(), Score::ZERO);
    assert_eq!(engine.score(), Score::ZERO);

    assert_eq!(engine.reset_score(), Score::ZERO);
}

#[test]
fn goal_sequence_scenario() {
    let engine = GameEngine::default();

    assert_eq!(engine.add_goal(WHITE), Ok(Score::new(1, 0)));
    assert_eq!(engine.add_goal(WHITE), Ok(Score::new(2, 0)));
    assert_eq!(engine.sub_goal(BLUE), Ok(Score::new(2, 0)));
    assert_eq!(engine.reset_score(), Score::ZERO);
}

#[test]
fn manual_goals_select_one_counter() {
    let cases = [
        (BLUE, "add", ManualGoals { added_blue: 1, ..ManualGoals::ZERO }),
        (BLUE, "sub", ManualGoals { subtracted_blue: 1, ..ManualGoals::ZERO }),
        (WHITE, "add", ManualGoals { added_white: 1, ..ManualGoals::ZERO }),
        (WHITE, "sub", ManualGoals { subtracted_white: 1, ..ManualGoals::ZERO }),
    ];

    for (team_id, action, expected) in cases {
        let engine = GameEngine::default();
        assert_eq!(engine.update_manual_goals(team_id, action), Ok(expected));
        assert_eq!(engine.manual_goals(), expected, "team {team_id} action {action}");
    }
}

#[test]
fn manual_goals_accumulate() {
    let engine = GameEngine::default();

    engine.update_manual_goals(BLUE, "add").unwrap();
    let goals = engine.update_manual_goals(BLUE, "sub").unwrap();

    assert_eq!(
        goals,
        ManualGoals {
            added_blue: 1,
            subtracted_blue: 1,
            ..ManualGoals::ZERO
        }
    );
}

#[test]
fn manual_goals_validate_team_before_action() {
    let engine = GameEngine::default();

    assert_eq!(
        engine.update_manual_goals(0x7f, "add"),
        Err(GameError::InvalidTeam(0x7f))
    );
    assert_eq!(
        engine.update_manual_goals(-10, "sub"),
        Err(GameError::InvalidTeam(-10))
    );
    assert_eq!(
        engine.update_manual_goals(-10, "addd"),
        Err(GameError::InvalidTeam(-10))
    );
    assert_eq!(
        engine.update_manual_goals(BLUE, "xyz"),
        Err(GameError::InvalidAction("xyz".into()))
    );
    assert_eq!(
        engine.update_manual_goals(WHITE, "addd"),
        Err(GameError::InvalidAction("addd".into()))
    );

    assert_eq!(engine.manual_goals(), ManualGoals::ZERO);
}

#[test]
fn manual_goals_leave_score_alone() {
    let engine = engine_with_score(2, 2);

    engine.update_manual_goals(WHITE, "sub").unwrap();
    engine.update_manual_goals(BLUE, "add").unwrap();

    assert_eq!(engine.score(), Score::new(2, 2));

    engine.reset_score();
    assert_eq!(engine.manual_goals().added_blue, 1);
}

#[test]
fn reset_manual_goals_keeps_score() {
    let engine = engine_with_score(1, 0);
    engine.update_manual_goals(WHITE, "add").unwrap();

    assert_eq!(engine.reset_manual_goals(), ManualGoals::ZERO);
    assert_eq!(engine.snapshot().score, Score::new(1, 0));
}

#[test]
fn custom_team_aliases() {
    let config = RuntimeConfig::new(GameConfig::default().with_team_ids(TeamIds::new(1, 2)));
    let engine = GameEngine::new(config);

    assert_eq!(engine.add_goal(1), Ok(Score::new(1, 0)));
    assert_eq!(engine.add_goal(2), Ok(Score::new(1, 1)));
    assert_eq!(engine.add_goal(0), Err(GameError::InvalidTeam(0)));
}

#[test]
fn config_is_exposed_for_heatmap_consumers() {
    let engine = GameEngine::default();
    let config = engine.config();

    assert_eq!(config.layout.side_of(22), Some(Team::Blue));
    assert_eq!(config.layout.side_of(21), Some(Team::White));
    assert_eq!(config.heatmap_accuracy, GameConfig::DEFAULT_HEATMAP_ACCURACY);
    assert_eq!(engine.event_bus().subscriber_count(kicker_runtime::Topic::Score), 0);
}

#[test]
fn clones_share_state() {
    let engine = GameEngine::default();
    let api_handle = engine.clone();

    api_handle.add_goal(WHITE).unwrap();
    assert_eq!(engine.score(), Score::new(1, 0));
}

#[test]
fn concurrent_mutations_are_not_lost() {
    const THREADS: usize = 8;
    const GOALS: u32 = 500;

    let engine = GameEngine::default();

    std::thread::scope(|scope| {
        for i in 0..THREADS {
            let engine = engine.clone();
            scope.spawn(move || {
                let team = if i % 2 == 0 { WHITE } else { BLUE };
                for _ in 0..GOALS {
                    engine.add_goal(team).unwrap();
                    engine.update_manual_goals(team, "add").unwrap();
                }
            });
        }
    });

    let per_team = GOALS * (THREADS as u32 / 2);
    let snapshot = engine.snapshot();
    assert_eq!(snapshot.score, Score::new(per_team, per_team));
    assert_eq!(snapshot.manual_goals.added_white, per_team);
    assert_eq!(snapshot.manual_goals.added_blue, per_team);
}
