use std::path::PathBuf;

use ant_core::{Direction, FeatureEnv, WorldSnapshot};
use ant_features::{EvaluationContext, load_extractor};

fn sample(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../configs")
        .join(name)
}

#[test]
fn shipped_descriptors_decode() {
    let default = load_extractor(&sample("moving_towards_qualified.json")).unwrap();
    assert_eq!(default.num_features(), 30);

    let hill = load_extractor(&sample("hill_watch.json")).unwrap();
    assert_eq!(hill.num_features(), 4 + 4 * 5);
}

#[test]
fn shipped_world_evaluates_every_ant() {
    let content = std::fs::read_to_string(sample("sample_world.json")).unwrap();
    let world: WorldSnapshot = serde_json::from_str(&content).unwrap();
    world.validate().unwrap();

    let extractor = load_extractor(&sample("hill_watch.json")).unwrap();
    let env = FeatureEnv::uniform(&world);
    let mut ctx = EvaluationContext::new();
    for &ant in &world.my_ants {
        for action in Direction::ALL {
            let values = extractor.evaluate(&env, &mut ctx, ant, action);
            assert_eq!(values.len(), extractor.num_features());
        }
    }
    assert!(ctx.searches_used() <= ctx.budget());
}
