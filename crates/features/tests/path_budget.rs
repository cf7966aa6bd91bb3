mod support;

use ant_core::{Direction, FeatureEnv, FeatureRules, Position};
use ant_features::{EvaluationContext, FeatureExtractor, HeuristicMovement, MovementFeature};

use support::{CountingPaths, open_world};

fn food_path_extractor() -> FeatureExtractor {
    FeatureExtractor::HeuristicMovement(
        HeuristicMovement::with_features(vec![MovementFeature::TowardFoodOnPath]).unwrap(),
    )
}

fn locations() -> impl Iterator<Item = Position> {
    (0..10).flat_map(|x| (0..10).map(move |y| Position::new(x, y)))
}

#[test]
fn searches_never_exceed_the_budget() {
    let world = open_world().with_food((20, 20));
    let paths = CountingPaths::new(&world);
    let env = FeatureEnv::uniform(&world).with_paths(&paths);
    let extractor = food_path_extractor();

    let mut ctx = EvaluationContext::new();
    for location in locations() {
        for action in Direction::ALL {
            let values = extractor.evaluate(&env, &mut ctx, location, action);
            assert_eq!(values.len(), 1);
        }
    }

    assert_eq!(paths.calls(), FeatureRules::DEFAULT_PATH_SEARCH_BUDGET);
    let stats = ctx.finish_cycle();
    assert_eq!(stats.searches, 60);
    assert_eq!(stats.failed_searches, 0);
    // 40 locations arrive after the budget is spent, each asked five times.
    assert_eq!(stats.refused_searches, 40 * 5);
    // The 60 searched locations answer their remaining four actions from cache.
    assert_eq!(stats.cache_hits, 60 * 4);
}

#[test]
fn exhausted_budget_makes_no_provider_call() {
    let world = open_world().with_food((20, 20));
    let paths = CountingPaths::new(&world);
    let env = FeatureEnv::uniform(&world).with_paths(&paths);
    let extractor = food_path_extractor();

    let mut ctx = EvaluationContext::with_budget(3);
    for location in locations().take(3) {
        extractor.evaluate(&env, &mut ctx, location, Direction::North);
    }
    assert!(ctx.is_exhausted());
    let before = paths.calls();

    let values = extractor.evaluate(&env, &mut ctx, Position::new(30, 30), Direction::North);
    assert_eq!(values, vec![false]);
    assert_eq!(paths.calls(), before);
}

#[test]
fn reset_restores_the_budget_for_the_next_cycle() {
    let world = open_world().with_food((20, 20));
    let paths = CountingPaths::new(&world);
    let env = FeatureEnv::uniform(&world).with_paths(&paths);
    let extractor = food_path_extractor();

    let mut ctx = EvaluationContext::with_budget(1);
    extractor.evaluate(&env, &mut ctx, Position::new(19, 20), Direction::East);
    assert!(ctx.is_exhausted());

    ctx.reset();
    let values = extractor.evaluate(&env, &mut ctx, Position::new(21, 20), Direction::West);
    assert_eq!(values, vec![true]);
    assert_eq!(paths.calls(), 2);
}

#[test]
fn unreachable_food_is_retried_on_later_calls() {
    let world = open_world()
        .with_food((20, 20))
        .with_water((20, 21))
        .with_water((20, 19))
        .with_water((21, 20))
        .with_water((19, 20));
    let paths = CountingPaths::new(&world);
    let env = FeatureEnv::uniform(&world).with_paths(&paths);
    let extractor = food_path_extractor();

    let mut ctx = EvaluationContext::new();
    let location = Position::new(18, 20);
    for action in Direction::ALL {
        assert_eq!(extractor.evaluate(&env, &mut ctx, location, action), vec![false]);
    }
    assert_eq!(paths.calls(), 5);
    assert_eq!(ctx.stats().failed_searches, 5);
    assert_eq!(ctx.cached_path(location), None);
}
