mod support;

use ant_core::{Direction, FeatureEnv, Position};
use ant_features::{
    EvaluationContext, FeatureExtractor, HeuristicMovement, MovementFeature, Qualifier,
    QualifierFeature,
};

use support::{CountingPaths, open_world};

fn composite() -> FeatureExtractor {
    FeatureExtractor::compositing(
        FeatureExtractor::moving_towards(),
        FeatureExtractor::qualifying(),
    )
    .unwrap()
}

#[test]
fn approaching_enemy_from_origin() {
    let world = open_world().with_ant((0, 0)).with_enemy((5, 0));
    let extractor = FeatureExtractor::moving_towards();
    let mut ctx = EvaluationContext::new();
    let values = extractor.evaluate(
        &FeatureEnv::uniform(&world),
        &mut ctx,
        Position::ORIGIN,
        Direction::East,
    );
    let index = extractor
        .feature_index("Moving Towards Closest Enemy")
        .unwrap();
    assert!(values[index]);
}

#[test]
fn composite_products_are_and_of_children() {
    let world = open_world()
        .with_ant((10, 10))
        .with_ant((12, 10))
        .with_enemy((14, 11))
        .with_food((8, 10))
        .with_food((10, 16))
        .with_visits((11, 10), 3)
        .with_visits((10, 11), 1);
    let env = FeatureEnv::uniform(&world);

    let extractor = composite();
    let FeatureExtractor::Compositing(inner) = &extractor else {
        panic!("expected a compositing extractor");
    };
    let n = inner.base().num_features();
    let m = inner.qualifier().num_features();
    assert_eq!(extractor.num_features(), n + n * m);

    for location in [Position::new(10, 10), Position::new(12, 10)] {
        for action in Direction::ALL {
            let mut ctx = EvaluationContext::new();
            let values = extractor.evaluate(&env, &mut ctx, location, action);
            let base = inner
                .base()
                .evaluate(&env, &mut EvaluationContext::new(), location, action);
            let qualifier =
                inner
                    .qualifier()
                    .evaluate(&env, &mut EvaluationContext::new(), location, action);

            assert_eq!(values.len(), extractor.num_features());
            assert_eq!(&values[..n], &base[..]);
            for b in 0..n {
                for q in 0..m {
                    assert_eq!(
                        values[n + b * m + q],
                        base[b] && qualifier[q],
                        "{location} {action} base {b} qualifier {q}"
                    );
                }
            }
        }
    }
}

#[test]
fn composite_names_follow_the_value_layout() {
    let extractor = composite();
    let names = extractor.feature_names();
    assert_eq!(names[0], "Moving Towards Closest Enemy");
    assert_eq!(
        names[5 + 5 + 2],
        "Moving Towards Closest Food AND Friend close"
    );
    assert_eq!(
        extractor.feature_index("Moving Towards Friendly AND More than 100 ants"),
        Ok(5 + 2 * 5 + 3)
    );
    assert!(extractor.feature_name(extractor.num_features()).is_err());
    assert!(extractor.feature_index("Moving Sideways").is_err());
}

#[test]
fn composite_searches_once_and_reuses_the_cached_path() {
    let world = open_world().with_ant((0, 0)).with_food((4, 0));
    let paths = CountingPaths::new(&world);
    let env = FeatureEnv::uniform(&world).with_paths(&paths);
    let extractor = FeatureExtractor::compositing(
        FeatureExtractor::HeuristicMovement(
            HeuristicMovement::with_features(vec![MovementFeature::TowardFoodOnPath]).unwrap(),
        ),
        FeatureExtractor::Qualifier(
            Qualifier::with_features(vec![QualifierFeature::FriendNearby]).unwrap(),
        ),
    )
    .unwrap();

    let mut ctx = EvaluationContext::new();
    let values = extractor.evaluate(&env, &mut ctx, Position::ORIGIN, Direction::East);
    assert_eq!(values, vec![true, false]);
    assert_eq!(paths.calls(), 1);
    assert_eq!(ctx.stats().cache_hits, 1);
}

#[test]
fn nested_composition_with_distinct_qualifiers() {
    let friendly = FeatureExtractor::Qualifier(
        Qualifier::with_features(vec![QualifierFeature::FriendNearby]).unwrap(),
    );
    let hill = FeatureExtractor::Qualifier(
        Qualifier::with_features(vec![QualifierFeature::FoodAtHill(0)]).unwrap(),
    );
    let inner =
        FeatureExtractor::compositing(FeatureExtractor::moving_towards(), friendly).unwrap();
    let outer = FeatureExtractor::compositing(inner, hill).unwrap();
    assert_eq!(outer.num_features(), 10 + 10);
    assert_eq!(
        outer.feature_name(19),
        Ok("Moving Towards Least Visited AND Friend Nearby AND No food in Hill")
    );

    let world = open_world()
        .with_ant((3, 3))
        .with_ant((5, 3))
        .with_food((3, 1))
        .with_enemy((9, 3))
        .with_hill((12, 12));
    let env = FeatureEnv::uniform(&world);
    let FeatureExtractor::Compositing(layers) = &outer else {
        panic!("expected a compositing extractor");
    };
    let n = layers.base().num_features();
    let m = layers.qualifier().num_features();

    for action in Direction::ALL {
        let location = Position::new(3, 3);
        let values = outer.evaluate(&env, &mut EvaluationContext::new(), location, action);
        let base = layers
            .base()
            .evaluate(&env, &mut EvaluationContext::new(), location, action);
        let qualifier =
            layers
                .qualifier()
                .evaluate(&env, &mut EvaluationContext::new(), location, action);

        assert_eq!(values.len(), outer.num_features());
        assert_eq!(&values[..n], &base[..]);
        for b in 0..n {
            for q in 0..m {
                assert_eq!(
                    values[n + b * m + q],
                    base[b] && qualifier[q],
                    "{action} base {b} qualifier {q}"
                );
            }
        }
    }
}

#[test]
fn unreachable_target_is_searched_by_both_base_passes() {
    let world = open_world()
        .with_ant((18, 20))
        .with_food((20, 20))
        .with_water((20, 21))
        .with_water((20, 19))
        .with_water((21, 20))
        .with_water((19, 20));
    let paths = CountingPaths::new(&world);
    let env = FeatureEnv::uniform(&world).with_paths(&paths);

    let mut ctx = EvaluationContext::new();
    let values = composite().evaluate(&env, &mut ctx, Position::new(18, 20), Direction::East);
    assert_eq!(values.len(), 30);
    // A failed search caches nothing, so the second base pass searches again.
    assert_eq!(paths.calls(), 2);
    assert_eq!(ctx.stats().failed_searches, 2);
    assert_eq!(ctx.stats().cache_hits, 0);
}
