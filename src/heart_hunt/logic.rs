//! Game logic for Heart Hunt.
//!
//! Pure state transitions over [`HeartHuntGame`]. Nothing here touches the
//! store or the notification bus; every function reports what happened as
//! [`HeartHuntEvent`]s and [`HeartHuntSession`](super::HeartHuntSession)
//! applies the side effects.

use super::types::{
    pick_kind, spawn_period_ms, total_spawn_weight, ElementKind, GameElement, GameOverSummary,
    GamePhase, GameStats, HeartHuntEvent, HeartHuntGame, HeartHuntTimer,
};
use crate::core::constants::{
    BASE_FALL_SPEED, COMBO_POINTS_PER_STREAK, COMBO_STREAK_THRESHOLD, ELEMENT_SIZE,
    FALL_SPEED_PER_LEVEL, POINTS_PER_LEVEL, SPAWN_Y,
};
use crate::core::timers::Epoch;
use rand::Rng;

/// Begin a new session. Allowed from `Idle` or `Ended`.
pub fn start_game(game: &mut HeartHuntGame) -> bool {
    if !matches!(game.phase, GamePhase::Idle | GamePhase::Ended) {
        return false;
    }

    game.stats.reset_session();
    game.elements.clear();
    game.elapsed_secs = 0;
    game.timers
        .set_period(HeartHuntTimer::Spawn, spawn_period_ms(game.stats.level));
    game.timers.start();
    game.phase = GamePhase::Playing;
    log::info!("Heart Hunt started");
    true
}

pub fn pause_game(game: &mut HeartHuntGame) -> bool {
    if game.phase != GamePhase::Playing {
        return false;
    }
    game.timers.stop();
    game.phase = GamePhase::Paused;
    true
}

pub fn resume_game(game: &mut HeartHuntGame) -> bool {
    if game.phase != GamePhase::Paused {
        return false;
    }
    game.timers.resume();
    game.phase = GamePhase::Playing;
    true
}

/// Finish the session and fold it into the lifetime stats.
///
/// Returns `None` if no session was running.
pub fn end_game(game: &mut HeartHuntGame) -> Option<GameOverSummary> {
    if !matches!(game.phase, GamePhase::Playing | GamePhase::Paused) {
        return None;
    }

    game.timers.stop();
    game.phase = GamePhase::Ended;

    let stats = &mut game.stats;
    let previous_high_score = stats.high_score;
    stats.games_played = stats.games_played.saturating_add(1);
    stats.high_score = stats.high_score.max(stats.score);

    let summary = GameOverSummary {
        score: stats.score,
        hearts_collected: stats.hearts_collected,
        level: stats.level,
        elapsed_secs: game.elapsed_secs,
        previous_high_score,
        new_high_score: stats.score > previous_high_score,
    };
    log::info!(
        "Heart Hunt over: score {} (best {}), level {}",
        summary.score,
        stats.high_score,
        summary.level
    );
    Some(summary)
}

/// Leave the game-over screen.
pub fn dismiss_game(game: &mut HeartHuntGame) -> bool {
    if game.phase != GamePhase::Ended {
        return false;
    }
    game.elements.clear();
    game.phase = GamePhase::Idle;
    true
}

/// Raise the level once if the score has reached the next threshold.
pub fn check_level_up(stats: &mut GameStats) -> bool {
    if stats.score >= stats.level.saturating_mul(POINTS_PER_LEVEL) {
        stats.level = stats.level.saturating_add(1);
        true
    } else {
        false
    }
}

/// Collect an element the player clicked.
///
/// Unknown ids (already collected, or fallen out on the same frame) and
/// clicks outside `Playing` are ignored.
pub fn collect_element(game: &mut HeartHuntGame, id: u64) -> Vec<HeartHuntEvent> {
    let mut events = Vec::new();
    if game.phase != GamePhase::Playing {
        return events;
    }
    let Some(index) = game.elements.iter().position(|e| e.id == id) else {
        return events;
    };
    let element = game.elements.remove(index);

    if element.kind.is_hazard() {
        lose_life(&mut game.stats);
        events.push(HeartHuntEvent::BombHit { id });
    } else {
        let stats = &mut game.stats;
        stats.score = stats.score.saturating_add_signed(element.points);
        stats.streak = stats.streak.saturating_add(1);
        if element.kind == ElementKind::Heart {
            stats.hearts_collected = stats.hearts_collected.saturating_add(1);
            stats.total_hearts_collected = stats.total_hearts_collected.saturating_add(1);
        }
        events.push(HeartHuntEvent::Collected {
            id,
            kind: element.kind,
            points: element.points,
        });

        // Re-awarded on every collection while the streak holds
        if stats.streak >= COMBO_STREAK_THRESHOLD {
            let bonus = stats.streak.saturating_mul(COMBO_POINTS_PER_STREAK);
            stats.score = stats.score.saturating_add(bonus);
            events.push(HeartHuntEvent::ComboBonus {
                streak: stats.streak,
                bonus,
            });
        }

        if check_level_up(stats) {
            let level = stats.level;
            game.timers
                .set_period(HeartHuntTimer::Spawn, spawn_period_ms(level));
            log::debug!("Heart Hunt level {}", level);
            events.push(HeartHuntEvent::LevelUp { level });
        }
    }

    finish_if_out_of_lives(game, &mut events);
    events
}

/// Move every element down one tick and drop those past the bottom.
///
/// Each non-bomb element that falls out costs a life and resets the streak.
pub fn advance_elements(game: &mut HeartHuntGame) -> Vec<HeartHuntEvent> {
    let mut events = Vec::new();
    if game.phase != GamePhase::Playing {
        return events;
    }

    let bottom = game.playfield.height;
    for element in &mut game.elements {
        element.y += element.fall_speed;
    }

    let (fallen, remaining): (Vec<GameElement>, Vec<GameElement>) = game
        .elements
        .drain(..)
        .partition(|e| e.y > bottom);
    game.elements = remaining;

    for element in fallen {
        if element.kind.is_hazard() {
            continue;
        }
        lose_life(&mut game.stats);
        events.push(HeartHuntEvent::ElementMissed {
            id: element.id,
            kind: element.kind,
        });
    }

    finish_if_out_of_lives(game, &mut events);
    events
}

/// Drop a specific kind of element in at horizontal position `x`.
///
/// Returns the new element's id, or `None` outside `Playing`.
pub fn place_element(game: &mut HeartHuntGame, kind: ElementKind, x: f64) -> Option<u64> {
    if game.phase != GamePhase::Playing {
        return None;
    }

    let id = game.next_element_id;
    game.next_element_id += 1;
    game.elements.push(GameElement {
        id,
        kind,
        x,
        y: SPAWN_Y,
        points: kind.points(),
        fall_speed: BASE_FALL_SPEED + game.stats.level as f64 * FALL_SPEED_PER_LEVEL,
    });
    Some(id)
}

/// Spawn one randomly chosen element at a random horizontal position.
pub fn spawn_element<R: Rng>(game: &mut HeartHuntGame, rng: &mut R) -> Option<HeartHuntEvent> {
    let roll = rng.gen::<f64>() * total_spawn_weight() as f64;
    let kind = pick_kind(roll);
    let span = (game.playfield.width - ELEMENT_SIZE).max(0.0);
    let x = rng.gen::<f64>() * span;

    let id = place_element(game, kind, x)?;
    Some(HeartHuntEvent::ElementSpawned { id, kind })
}

pub fn tick_clock(game: &mut HeartHuntGame) {
    if game.phase == GamePhase::Playing {
        game.elapsed_secs += 1;
    }
}

/// Run one periodic process, if `epoch` is still the armed one.
///
/// Returns `None` for a stale fire (the session was paused, ended or
/// restarted after the timer was armed).
pub fn fire_timer<R: Rng>(
    game: &mut HeartHuntGame,
    timer: HeartHuntTimer,
    epoch: Epoch,
    rng: &mut R,
) -> Option<Vec<HeartHuntEvent>> {
    if !game.timers.is_current(epoch) {
        log::debug!("Dropping stale {:?} tick", timer);
        return None;
    }

    let events = match timer {
        HeartHuntTimer::Advance => advance_elements(game),
        HeartHuntTimer::Spawn => spawn_element(game, rng).into_iter().collect(),
        HeartHuntTimer::Clock => {
            tick_clock(game);
            Vec::new()
        }
    };
    Some(events)
}

/// Advance wall time by `elapsed_ms`, firing every due process in order.
pub fn update<R: Rng>(
    game: &mut HeartHuntGame,
    elapsed_ms: u64,
    rng: &mut R,
) -> Vec<HeartHuntEvent> {
    let mut events = Vec::new();
    let mut budget = elapsed_ms;
    while let Some(timer) = game.timers.next_due(&mut budget) {
        let epoch = game.timers.epoch();
        if let Some(fired) = fire_timer(game, timer, epoch, rng) {
            events.extend(fired);
        }
    }
    events
}

fn lose_life(stats: &mut GameStats) {
    stats.lives = stats.lives.saturating_sub(1);
    stats.streak = 0;
}

fn finish_if_out_of_lives(game: &mut HeartHuntGame, events: &mut Vec<HeartHuntEvent>) {
    if game.stats.lives == 0 {
        if let Some(summary) = end_game(game) {
            events.push(HeartHuntEvent::GameOver(summary));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heart_hunt::types::Playfield;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn playing_game() -> HeartHuntGame {
        let mut game = HeartHuntGame::new(GameStats::default(), Playfield::new(480.0, 640.0));
        assert!(start_game(&mut game));
        game
    }

    #[test]
    fn test_start_resets_session_fields() {
        let mut game = HeartHuntGame::new(
            GameStats {
                score: 90,
                lives: 1,
                level: 3,
                streak: 4,
                hearts_collected: 2,
                high_score: 500,
                ..GameStats::default()
            },
            Playfield::new(480.0, 640.0),
        );
        assert!(start_game(&mut game));
        assert_eq!(game.phase, GamePhase::Playing);
        assert_eq!(game.stats.score, 0);
        assert_eq!(game.stats.lives, 3);
        assert_eq!(game.stats.level, 1);
        assert_eq!(game.stats.streak, 0);
        assert_eq!(game.stats.hearts_collected, 0);
        assert_eq!(game.stats.high_score, 500);
    }

    #[test]
    fn test_start_rejected_while_playing() {
        let mut game = playing_game();
        assert!(!start_game(&mut game));
    }

    #[test]
    fn test_pause_and_resume() {
        let mut game = playing_game();
        assert!(!resume_game(&mut game));
        assert!(pause_game(&mut game));
        assert_eq!(game.phase, GamePhase::Paused);
        assert!(!pause_game(&mut game));
        assert!(resume_game(&mut game));
        assert_eq!(game.phase, GamePhase::Playing);
    }

    #[test]
    fn test_collect_heart_scores() {
        let mut game = playing_game();
        let id = place_element(&mut game, ElementKind::Heart, 10.0).unwrap();

        let events = collect_element(&mut game, id);
        assert_eq!(
            events,
            vec![HeartHuntEvent::Collected {
                id,
                kind: ElementKind::Heart,
                points: 10
            }]
        );
        assert_eq!(game.stats.score, 10);
        assert_eq!(game.stats.streak, 1);
        assert_eq!(game.stats.hearts_collected, 1);
        assert_eq!(game.stats.total_hearts_collected, 1);
        assert!(game.elements.is_empty());
    }

    #[test]
    fn test_collect_star_does_not_count_heart() {
        let mut game = playing_game();
        let id = place_element(&mut game, ElementKind::Star, 10.0).unwrap();
        collect_element(&mut game, id);
        assert_eq!(game.stats.score, 25);
        assert_eq!(game.stats.hearts_collected, 0);
    }

    #[test]
    fn test_collect_bomb_costs_life_and_streak() {
        let mut game = playing_game();
        for _ in 0..2 {
            let id = place_element(&mut game, ElementKind::Flower, 0.0).unwrap();
            collect_element(&mut game, id);
        }
        assert_eq!(game.stats.streak, 2);

        let bomb = place_element(&mut game, ElementKind::Bomb, 0.0).unwrap();
        let events = collect_element(&mut game, bomb);
        assert_eq!(events, vec![HeartHuntEvent::BombHit { id: bomb }]);
        assert_eq!(game.stats.lives, 2);
        assert_eq!(game.stats.streak, 0);
        assert_eq!(game.stats.score, 30);
    }

    #[test]
    fn test_collect_unknown_id_is_noop() {
        let mut game = playing_game();
        let id = place_element(&mut game, ElementKind::Heart, 0.0).unwrap();
        collect_element(&mut game, id);
        let before = game.stats.clone();

        assert!(collect_element(&mut game, id).is_empty());
        assert!(collect_element(&mut game, 9999).is_empty());
        assert_eq!(game.stats, before);
    }

    #[test]
    fn test_collect_ignored_while_paused() {
        let mut game = playing_game();
        let id = place_element(&mut game, ElementKind::Heart, 0.0).unwrap();
        pause_game(&mut game);
        assert!(collect_element(&mut game, id).is_empty());
        assert_eq!(game.elements.len(), 1);
    }

    #[test]
    fn test_five_hearts_earn_combo() {
        let mut game = playing_game();
        let mut last_events = Vec::new();
        for _ in 0..5 {
            let id = place_element(&mut game, ElementKind::Heart, 0.0).unwrap();
            last_events = collect_element(&mut game, id);
        }
        assert_eq!(game.stats.score, 60);
        assert_eq!(game.stats.hearts_collected, 5);
        assert!(last_events.contains(&HeartHuntEvent::ComboBonus {
            streak: 5,
            bonus: 10
        }));
    }

    #[test]
    fn test_combo_reawarded_each_collection() {
        let mut game = playing_game();
        for _ in 0..6 {
            let id = place_element(&mut game, ElementKind::Heart, 0.0).unwrap();
            collect_element(&mut game, id);
        }
        // 60 after five, then +10 heart +12 combo
        assert_eq!(game.stats.score, 82);
    }

    #[test]
    fn test_level_up_at_threshold() {
        let mut game = playing_game();
        game.stats.score = 90;
        let id = place_element(&mut game, ElementKind::Heart, 0.0).unwrap();
        let events = collect_element(&mut game, id);
        assert!(events.contains(&HeartHuntEvent::LevelUp { level: 2 }));
        assert_eq!(game.stats.level, 2);
        assert_eq!(game.timer_period_ms(HeartHuntTimer::Spawn), 540);
    }

    #[test]
    fn test_level_check_is_idempotent() {
        let mut stats = GameStats {
            score: 150,
            ..GameStats::default()
        };
        assert!(check_level_up(&mut stats));
        assert!(!check_level_up(&mut stats));
        assert!(!check_level_up(&mut stats));
        assert_eq!(stats.level, 2);
    }

    #[test]
    fn test_new_elements_fall_faster_at_higher_levels() {
        let mut game = playing_game();
        let slow = place_element(&mut game, ElementKind::Heart, 0.0).unwrap();
        game.stats.level = 3;
        let fast = place_element(&mut game, ElementKind::Heart, 0.0).unwrap();
        let slow_speed = game.element(slow).unwrap().fall_speed;
        let fast_speed = game.element(fast).unwrap().fall_speed;
        assert!((slow_speed - 4.8).abs() < 1e-9);
        assert!((fast_speed - 6.4).abs() < 1e-9);
    }

    #[test]
    fn test_advance_moves_elements() {
        let mut game = playing_game();
        let id = place_element(&mut game, ElementKind::Heart, 0.0).unwrap();
        advance_elements(&mut game);
        let y = game.element(id).unwrap().y;
        assert!((y - (-50.0 + 4.8)).abs() < 1e-9);
    }

    #[test]
    fn test_miss_costs_exactly_one_life() {
        let mut game = playing_game();
        let id = place_element(&mut game, ElementKind::Flower, 0.0).unwrap();
        game.stats.streak = 3;
        game.elements[0].y = 639.0;

        let events = advance_elements(&mut game);
        assert_eq!(
            events,
            vec![HeartHuntEvent::ElementMissed {
                id,
                kind: ElementKind::Flower
            }]
        );
        assert_eq!(game.stats.lives, 2);
        assert_eq!(game.stats.streak, 0);
        assert!(game.element(id).is_none());

        // Nothing left to miss on the next tick
        assert!(advance_elements(&mut game).is_empty());
        assert_eq!(game.stats.lives, 2);
    }

    #[test]
    fn test_fallen_bomb_is_harmless() {
        let mut game = playing_game();
        place_element(&mut game, ElementKind::Bomb, 0.0).unwrap();
        game.stats.streak = 3;
        game.elements[0].y = 700.0;

        assert!(advance_elements(&mut game).is_empty());
        assert!(game.elements.is_empty());
        assert_eq!(game.stats.lives, 3);
        assert_eq!(game.stats.streak, 3);
    }

    #[test]
    fn test_element_at_bottom_edge_is_not_yet_missed() {
        let mut game = playing_game();
        place_element(&mut game, ElementKind::Heart, 0.0).unwrap();
        game.elements[0].y = 635.0;
        assert!(advance_elements(&mut game).is_empty());
        assert_eq!(game.elements.len(), 1);
    }

    #[test]
    fn test_three_misses_end_the_game() {
        let mut game = playing_game();
        let mut events = Vec::new();
        for _ in 0..3 {
            place_element(&mut game, ElementKind::Heart, 0.0).unwrap();
            game.elements.last_mut().unwrap().y = 700.0;
            events = advance_elements(&mut game);
        }
        assert_eq!(game.stats.lives, 0);
        assert_eq!(game.phase, GamePhase::Ended);
        assert_eq!(game.stats.games_played, 1);
        assert!(matches!(events.last(), Some(HeartHuntEvent::GameOver(_))));
    }

    #[test]
    fn test_simultaneous_misses_end_once() {
        let mut game = playing_game();
        for _ in 0..4 {
            place_element(&mut game, ElementKind::Heart, 0.0).unwrap();
        }
        for element in &mut game.elements {
            element.y = 700.0;
        }
        let events = advance_elements(&mut game);
        let game_overs = events
            .iter()
            .filter(|e| matches!(e, HeartHuntEvent::GameOver(_)))
            .count();
        assert_eq!(game_overs, 1);
        assert_eq!(game.stats.lives, 0);
        assert_eq!(game.stats.games_played, 1);
    }

    #[test]
    fn test_bomb_on_last_life_ends_game() {
        let mut game = playing_game();
        game.stats.lives = 1;
        let bomb = place_element(&mut game, ElementKind::Bomb, 0.0).unwrap();
        let events = collect_element(&mut game, bomb);
        assert_eq!(game.phase, GamePhase::Ended);
        assert!(matches!(events.last(), Some(HeartHuntEvent::GameOver(_))));
    }

    #[test]
    fn test_end_game_updates_high_score() {
        let mut game = playing_game();
        game.stats.high_score = 50;
        game.stats.score = 80;
        let summary = end_game(&mut game).unwrap();
        assert!(summary.new_high_score);
        assert_eq!(summary.previous_high_score, 50);
        assert_eq!(game.stats.high_score, 80);
        assert_eq!(game.stats.games_played, 1);

        assert!(end_game(&mut game).is_none());
        assert_eq!(game.stats.games_played, 1);
    }

    #[test]
    fn test_end_game_without_record() {
        let mut game = playing_game();
        game.stats.high_score = 500;
        game.stats.score = 80;
        let summary = end_game(&mut game).unwrap();
        assert!(!summary.new_high_score);
        assert_eq!(game.stats.high_score, 500);
    }

    #[test]
    fn test_end_from_paused() {
        let mut game = playing_game();
        pause_game(&mut game);
        assert!(end_game(&mut game).is_some());
        assert_eq!(game.phase, GamePhase::Ended);
    }

    #[test]
    fn test_end_from_idle_is_noop() {
        let mut game = HeartHuntGame::new(GameStats::default(), Playfield::new(480.0, 640.0));
        assert!(end_game(&mut game).is_none());
        assert_eq!(game.stats.games_played, 0);
    }

    #[test]
    fn test_dismiss_returns_to_idle() {
        let mut game = playing_game();
        place_element(&mut game, ElementKind::Heart, 0.0).unwrap();
        assert!(!dismiss_game(&mut game));
        end_game(&mut game);
        assert!(dismiss_game(&mut game));
        assert_eq!(game.phase, GamePhase::Idle);
        assert!(game.elements.is_empty());
    }

    #[test]
    fn test_spawn_element_within_playfield() {
        let mut game = playing_game();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..50 {
            spawn_element(&mut game, &mut rng).unwrap();
        }
        assert_eq!(game.elements.len(), 50);
        for element in &game.elements {
            assert!(element.x >= 0.0 && element.x < 480.0 - 60.0);
            assert_eq!(element.y, -50.0);
            assert_eq!(element.points, element.kind.points());
        }
    }

    #[test]
    fn test_spawn_ids_are_unique() {
        let mut game = playing_game();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..20 {
            spawn_element(&mut game, &mut rng);
        }
        let mut ids: Vec<u64> = game.elements.iter().map(|e| e.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn test_no_spawn_when_not_playing() {
        let mut game = HeartHuntGame::new(GameStats::default(), Playfield::new(480.0, 640.0));
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(spawn_element(&mut game, &mut rng).is_none());
        assert!(game.elements.is_empty());
    }

    #[test]
    fn test_update_runs_all_three_processes() {
        let mut game = playing_game();
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let events = update(&mut game, 1000, &mut rng);
        // One spawn at 570ms, one clock tick at 1000ms
        let spawns = events
            .iter()
            .filter(|e| matches!(e, HeartHuntEvent::ElementSpawned { .. }))
            .count();
        assert_eq!(spawns, 1);
        assert_eq!(game.elapsed_secs, 1);
        assert_eq!(game.elements.len(), 1);
        // Spawned at 570ms, advanced on ticks at 600..=990ms: 14 ticks
        let expected = -50.0 + 14.0 * 4.8;
        assert!((game.elements[0].y - expected).abs() < 1e-9);
    }

    #[test]
    fn test_update_does_nothing_while_paused() {
        let mut game = playing_game();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        pause_game(&mut game);
        assert!(update(&mut game, 10_000, &mut rng).is_empty());
        assert_eq!(game.elapsed_secs, 0);
        assert!(game.elements.is_empty());
    }

    #[test]
    fn test_stale_epoch_is_dropped() {
        let mut game = playing_game();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let old = game.epoch();

        pause_game(&mut game);
        resume_game(&mut game);

        assert!(fire_timer(&mut game, HeartHuntTimer::Clock, old, &mut rng).is_none());
        assert_eq!(game.elapsed_secs, 0);

        let current = game.epoch();
        assert!(fire_timer(&mut game, HeartHuntTimer::Clock, current, &mut rng).is_some());
        assert_eq!(game.elapsed_secs, 1);
    }

    #[test]
    fn test_update_stops_at_game_over() {
        let mut game = playing_game();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let events = update(&mut game, 10 * 60 * 1000, &mut rng);
        assert_eq!(game.phase, GamePhase::Ended);
        assert_eq!(game.stats.lives, 0);
        let game_overs = events
            .iter()
            .filter(|e| matches!(e, HeartHuntEvent::GameOver(_)))
            .count();
        assert_eq!(game_overs, 1);
        let frozen_clock = game.elapsed_secs;
        update(&mut game, 5000, &mut rng);
        assert_eq!(game.elapsed_secs, frozen_clock);
    }
}
