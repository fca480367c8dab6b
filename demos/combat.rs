mod combat_ai;

use behavior_tree_action::BehaviorTree;
use combat_ai::{build_tree, ScenarioFile};
use std::fs;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let source = match std::env::args().nth(1) {
        Some(path) => fs::read_to_string(path)?,
        None => include_str!("combat.yaml").to_owned(),
    };
    let file: ScenarioFile = serde_yaml::from_str(&source)?;

    let tree = BehaviorTree::new(build_tree());

    for scenario in &file.scenarios {
        println!("=== {} ===", scenario.name);
        let result = tree.tick(&scenario.observation)?;
        print!("{}", serde_yaml::to_string(&result)?);
        if result.status != scenario.status || result.action != scenario.expect {
            eprintln!(
                "expected {:?} with {:?}",
                scenario.status, scenario.expect
            );
        }
        println!();
    }

    Ok(())
}
