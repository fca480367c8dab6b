//! A small combat AI: attack when healthy and armed, defend when armed but hurt,
//! go find a weapon otherwise. Only reacts to enemies within reach.

use behavior_tree_action::{
    builder::{action, condition, selector, sequence, BoxedNode},
    ActionResult, Status,
};
use serde::{Deserialize, Serialize};
use tracing::info;

pub const ENEMY_CLOSE_DISTANCE: f64 = 10.;
pub const HEALTHY_THRESHOLD: f64 = 50.;

#[derive(Debug, Clone, Deserialize)]
pub struct GameObservation {
    pub player_health: f64,
    pub enemy_distance: f64,
    pub has_weapon: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameAction {
    Attack,
    Defend,
    Flee,
    FindWeapon,
    Idle,
}

#[derive(Debug, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub observation: GameObservation,
    pub status: Status,
    pub expect: Option<GameAction>,
}

#[derive(Debug, Deserialize)]
pub struct ScenarioFile {
    pub scenarios: Vec<Scenario>,
}

fn is_enemy_close() -> BoxedNode<GameObservation, GameAction> {
    condition(|obs: &GameObservation| obs.enemy_distance < ENEMY_CLOSE_DISTANCE)
}

fn has_weapon() -> BoxedNode<GameObservation, GameAction> {
    condition(|obs: &GameObservation| obs.has_weapon)
}

fn is_healthy() -> BoxedNode<GameObservation, GameAction> {
    condition(|obs: &GameObservation| HEALTHY_THRESHOLD < obs.player_health)
}

pub fn build_tree() -> BoxedNode<GameObservation, GameAction> {
    let attack = action(|obs: &GameObservation| {
        info!(distance = obs.enemy_distance, "attacking enemy");
        ActionResult::success_with(GameAction::Attack)
    });
    let defend = action(|obs: &GameObservation| {
        info!(health = obs.player_health, "defending with low health");
        ActionResult::success_with(GameAction::Defend)
    });
    let find_weapon = action(|_: &GameObservation| {
        info!("looking for a weapon");
        ActionResult::success_with(GameAction::FindWeapon)
    });

    selector(vec![sequence(vec![
        is_enemy_close(),
        selector(vec![
            sequence(vec![has_weapon(), is_healthy(), attack]),
            sequence(vec![has_weapon(), defend]),
            find_weapon,
        ]),
    ])])
}
