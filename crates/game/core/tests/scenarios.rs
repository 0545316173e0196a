use hexwarden_core::{
    Action, Archetype, EntityId, GameConfig, GameState, Intent, IntentKind, ItemLocation,
    Position, RunStatus, SkillId, reduce,
};

const SPAWN: Position = GameConfig::PLAYER_SPAWN;

/// Floor 1 with every obstacle, feature and enemy cleared away.
fn cleared(seed: &str) -> GameState {
    let mut state = GameState::new_run(seed, GameConfig::default());
    state.enemies.clear();
    state.walls.clear();
    state.hazards.clear();
    state.shrine = None;
    state
}

fn spawn_with_hp(state: &mut GameState, archetype: Archetype, at: Position, hp: i32) -> EntityId {
    let id = state.spawn_enemy(archetype, at);
    if let Some(enemy) = state.actor_mut(id) {
        enemy.max_hp = hp;
        enemy.hp = hp;
    }
    id
}

#[test]
fn spear_throw_kills_then_drops_on_empty_ground() {
    let mut state = cleared("test-seed");
    state.spawn_enemy(Archetype::Footman, Position::new(2, 8));

    let state = reduce(&state, &Action::Throw(Position::new(2, 8)));
    assert!(state.enemies.is_empty());
    assert!(state.messages.iter().any(|m| m.contains("killed")));
    assert!(state.has_spear());

    let state = reduce(&state, &Action::Throw(Position::new(2, 8)));
    assert!(!state.has_spear());
    assert_eq!(state.spear, ItemLocation::Ground(Position::new(2, 8)));

    let state = reduce(&state, &Action::Throw(Position::new(2, 8)));
    assert_eq!(state.turn, 2);
    assert!(
        state
            .last_message()
            .is_some_and(|m| m.starts_with("Cannot use spear_throw"))
    );
}

#[test]
fn walking_onto_spear_picks_it_up() {
    let mut state = cleared("pickup");
    state.spear = ItemLocation::Ground(Position::new(2, 9));

    let state = reduce(&state, &Action::Move(Position::new(2, 9)));

    assert!(state.has_spear());
}

#[test]
fn auto_attack_hits_only_persistent_neighbours() {
    let mut state = cleared("persistence");
    let a = spawn_with_hp(&mut state, Archetype::Footman, Position::new(2, 9), 2);
    let b = spawn_with_hp(&mut state, Archetype::Footman, Position::new(4, 8), 2);

    let state = reduce(&state, &Action::Move(Position::new(3, 9)));

    assert_eq!(state.player.position, Position::new(3, 9));
    assert_eq!(state.actor(a).map(|e| e.hp), Some(1));
    assert_eq!(state.actor(b).map(|e| e.hp), Some(2));
}

#[test]
fn auto_attack_needs_a_move() {
    let mut state = cleared("standing");
    let a = spawn_with_hp(&mut state, Archetype::Footman, Position::new(2, 9), 2);

    let state = reduce(&state, &Action::Wait);

    assert_eq!(state.actor(a).map(|e| e.hp), Some(2));
}

fn telegraphed_footman(seed: &str) -> GameState {
    let mut state = cleared(seed);
    let id = state.spawn_enemy(Archetype::Footman, Position::new(2, 9));
    if let Some(enemy) = state.actor_mut(id) {
        enemy.intent = Intent::Telegraphing {
            kind: IntentKind::Strike,
            target: SPAWN,
        };
    }
    state
}

#[test]
fn telegraph_lands_on_a_player_who_stays() {
    let state = telegraphed_footman("telegraph-stay");

    let state = reduce(&state, &Action::Wait);

    assert_eq!(state.player.hp, 2);
}

#[test]
fn telegraph_misses_a_player_who_leaves() {
    let state = telegraphed_footman("telegraph-leave");

    let state = reduce(&state, &Action::Jump(Position::new(4, 9)));

    assert_eq!(state.player.position, Position::new(4, 9));
    assert_eq!(state.player.hp, 3);
}

#[test]
fn enemy_telegraphs_are_visible_before_they_land() {
    let mut state = cleared("visible");
    state.spawn_enemy(Archetype::Footman, Position::new(2, 9));

    let state = reduce(&state, &Action::Wait);

    assert_eq!(state.player.hp, 3);
    assert!(state.enemies.iter().any(|e| e.intent
        == Intent::Telegraphing {
            kind: IntentKind::Strike,
            target: SPAWN,
        }));
}

#[test]
fn out_of_range_jump_is_rejected_without_side_effects() {
    let state = cleared("range");

    let next = reduce(&state, &Action::Jump(Position::new(2, 6)));

    assert_eq!(next.player.position, state.player.position);
    assert_eq!(next.player.hp, state.player.hp);
    assert_eq!(next.turn, state.turn);
    assert_eq!(next.rng, state.rng);
    assert_eq!(next.messages.len(), state.messages.len() + 1);
    assert!(next.action_log.is_empty());
}

#[test]
fn jump_on_cooldown_is_rejected() {
    let state = cleared("cooldown");
    let state = reduce(&state, &Action::Jump(Position::new(2, 8)));
    assert_eq!(state.player.position, Position::new(2, 8));

    let next = reduce(&state, &Action::Jump(Position::new(2, 6)));

    assert_eq!(next.player.position, Position::new(2, 8));
    assert_eq!(next.turn, state.turn);
    assert!(
        next.last_message()
            .is_some_and(|m| m.contains("recharging"))
    );
}

#[test]
fn shield_bash_guards_the_player_against_the_strike() {
    let mut state = cleared("bash-guard");
    let id = state.spawn_enemy(Archetype::Footman, Position::new(2, 9));
    state.walls.insert(Position::new(2, 8));
    if let Some(enemy) = state.actor_mut(id) {
        enemy.hp = 3;
        enemy.max_hp = 3;
        enemy.intent = Intent::Telegraphing {
            kind: IntentKind::Strike,
            target: SPAWN,
        };
    }

    // The wall behind the footman turns the push into a slam.
    let state = reduce(
        &state,
        &Action::UseSkill {
            skill: SkillId::ShieldBash,
            target: Some(Position::new(2, 9)),
        },
    );
    assert_eq!(state.actor(id).map(|e| e.hp), Some(2));
    assert_eq!(state.player.hp, 3);

    let state = reduce(&state, &Action::Wait);
    assert_eq!(state.player.hp, 3);
    assert!(state.messages.iter().any(|m| m == "Your shield holds."));
}

#[test]
fn dying_player_ends_the_run() {
    let mut state = telegraphed_footman("fatal");
    state.player.hp = 1;

    let state = reduce(&state, &Action::Wait);
    assert_eq!(state.status, RunStatus::Lost);

    let next = reduce(&state, &Action::Wait);
    assert_eq!(next.turn, state.turn);
    assert_eq!(next.last_message(), Some("The run is over."));
}

#[test]
fn undo_rewinds_the_action_log() {
    let state = cleared("logging");
    let state = reduce(&state, &Action::Wait);
    let state = reduce(&state, &Action::Wait);
    let state = reduce(&state, &Action::Undo);

    assert_eq!(state.action_log, vec![Action::Wait]);
    assert_eq!(state.turn, 1);
}

#[test]
fn load_state_replaces_the_snapshot() {
    let saved = cleared("saved");
    let other = GameState::new_run("other", GameConfig::default());

    let loaded = reduce(&other, &Action::LoadState(Box::new(saved.clone())));

    assert_eq!(loaded, saved);
}

#[test]
fn far_off_coordinates_are_rejected_not_panicked_on() {
    let state = cleared("far-off");

    for action in [
        Action::Move(Position::new(i32::MAX, 0)),
        Action::Jump(Position::new(i32::MIN, 0)),
        Action::Throw(Position::new(i32::MIN, i32::MAX)),
        Action::UseSkill {
            skill: SkillId::ShieldBash,
            target: Some(Position::new(i32::MAX, i32::MAX)),
        },
    ] {
        let next = reduce(&state, &action);
        assert_eq!(next.turn, state.turn, "{action:?}");
        assert_eq!(next.player.position, state.player.position);
        assert_eq!(next.messages.len(), state.messages.len() + 1);
    }
}

#[test]
fn later_enemies_see_earlier_moves_in_the_same_turn() {
    let mut state = cleared("ordering");
    let first = state.spawn_enemy(Archetype::Footman, Position::new(2, 8));
    let second = state.spawn_enemy(Archetype::Footman, Position::new(1, 9));
    // Leaves (2, 9) as the only cell next to the player either footman can reach.
    state.walls.insert(Position::new(1, 10));

    let state = reduce(&state, &Action::Wait);

    let first = state.actor(first).map(|e| e.position);
    let second = state.actor(second).map(|e| e.position);
    assert_eq!(first, Some(Position::new(2, 9)));
    assert!(
        second.is_some_and(|cell| cell == Position::new(2, 8) || cell == Position::new(0, 10)),
        "second footman ended on {second:?}"
    );
}

#[test]
fn lava_wounds_the_player_each_turn() {
    let mut state = cleared("lava-player");
    state.hazards.insert(Position::new(2, 9));

    let state = reduce(&state, &Action::Move(Position::new(2, 9)));
    assert_eq!(state.player.hp, 3 - GameConfig::HAZARD_PLAYER_DAMAGE);
    assert!(state.messages.iter().any(|m| m == "The lava scorches you."));

    let state = reduce(&state, &Action::Wait);
    assert_eq!(state.player.hp, 3 - 2 * GameConfig::HAZARD_PLAYER_DAMAGE);
}

#[test]
fn enemy_bashed_into_lava_burns_and_counts_as_a_kill() {
    let mut state = cleared("lava-bash");
    let id = spawn_with_hp(&mut state, Archetype::Footman, Position::new(2, 9), 2);
    state.hazards.insert(Position::new(2, 8));

    let state = reduce(
        &state,
        &Action::UseSkill {
            skill: SkillId::ShieldBash,
            target: Some(Position::new(2, 9)),
        },
    );

    assert!(state.actor(id).is_none());
    assert_eq!(state.kills.total, 1);
    assert_eq!(state.player.hp, 3);
}

#[test]
fn assassins_enter_a_floor_hidden() {
    let mut state = GameState::new_run("hidden", GameConfig::default());
    state.enemies.clear();
    let id = state.spawn_enemy(Archetype::Assassin, Position::new(2, 5));
    assert_eq!(state.actor(id).map(|e| e.visible), Some(false));

    let footman = state.spawn_enemy(Archetype::Footman, Position::new(4, 5));
    assert_eq!(state.actor(footman).map(|e| e.visible), Some(true));
}
