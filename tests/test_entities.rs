use wave_shooter::entities::*;
use wave_shooter::error::GameError;

fn ship() -> Spaceship {
    Spaceship::new("Player", 375.0, 540.0, 50.0, 50.0).unwrap()
}

fn shot(x: f32, y: f32, direction: Direction) -> Projectile {
    Projectile {
        x,
        y,
        width: 10.0,
        height: 20.0,
        speed: 8.0,
        length: 20.0,
        direction,
    }
}

// ── Projectile ────────────────────────────────────────────────────────────────

#[test]
fn projectile_moves_by_speed_in_its_direction() {
    let mut up = shot(100.0, 300.0, Direction::Up);
    let mut down = shot(100.0, 300.0, Direction::Down);
    up.step();
    down.step();
    assert_eq!(up.y, 292.0);
    assert_eq!(down.y, 308.0);
    assert_eq!(up.x, 100.0); // never drifts sideways
}

#[test]
fn projectile_off_screen_only_when_fully_outside() {
    assert!(!shot(0.0, -19.0, Direction::Up).is_off_screen(600.0)); // tail still visible
    assert!(shot(0.0, -20.0, Direction::Up).is_off_screen(600.0));
    assert!(!shot(0.0, 599.0, Direction::Down).is_off_screen(600.0));
    assert!(shot(0.0, 600.0, Direction::Down).is_off_screen(600.0));
}

// ── Enemy movement ───────────────────────────────────────────────────────────

#[test]
fn enemy_new_uses_fixed_size_and_starts_alive() {
    let e = Enemy::new(1, 60.0, 60.0, -2.0, 2000);
    assert_eq!((e.width, e.height), (50.0, 50.0));
    assert!(e.is_alive);
    assert_eq!(e.destroyed_time, None);
    assert_eq!(e.move_direction, -1.0);
}

#[test]
fn enemy_with_negative_speed_first_moves_right() {
    let mut e = Enemy::new(1, 60.0, 60.0, -2.0, 2000);
    e.step(800.0);
    assert_eq!(e.x, 62.0);
}

#[test]
fn enemy_bounces_and_clamps_at_both_edges() {
    let mut e = Enemy::new(1, 60.0, 60.0, -2.0, 2000);
    let mut bounced_right = false;
    let mut bounced_left = false;
    for _ in 0..1000 {
        let before = e.move_direction;
        e.step(800.0);
        assert!(e.x >= 0.0 && e.x <= 750.0, "x escaped the screen: {}", e.x);
        if e.move_direction != before {
            if e.x == 750.0 {
                bounced_right = true;
            } else {
                assert_eq!(e.x, 0.0); // clamped, not wrapped to the right edge
                bounced_left = true;
            }
        }
    }
    assert!(bounced_right && bounced_left);
}

#[test]
fn enemy_y_is_floored_at_zero() {
    let mut e = Enemy::new(1, 60.0, -30.0, -2.0, 2000);
    e.step(800.0);
    assert_eq!(e.y, 0.0);
}

#[test]
fn dead_enemy_does_not_move() {
    let mut e = Enemy::new(1, 60.0, 60.0, -2.0, 2000);
    e.is_alive = false;
    e.step(800.0);
    assert_eq!(e.x, 60.0);
}

// ── Enemy shooting ───────────────────────────────────────────────────────────

#[test]
fn enemy_shot_spawns_above_centre_heading_down() {
    let mut e = Enemy::new(1, 60.0, 60.0, -2.0, 2000);
    let p = e.shoot_projectile(0).unwrap();
    assert_eq!((p.x, p.y), (80.0, 40.0));
    assert_eq!((p.width, p.height, p.length, p.speed), (10.0, 20.0, 20.0, 8.0));
    assert_eq!(p.direction, Direction::Down);
    assert_eq!(e.last_shot_time, Some(0));
}

#[test]
fn enemy_shot_is_cooldown_gated() {
    let mut e = Enemy::new(1, 60.0, 60.0, -2.0, 2000);
    assert!(e.shoot_projectile(0).is_some());
    assert!(e.shoot_projectile(10).is_none());
    assert!(e.shoot_projectile(2000).is_none()); // strictly greater than the rate
    assert!(e.shoot_projectile(2001).is_some());
    assert!(e.shoot_projectile(2500).is_none());
}

#[test]
fn dead_enemy_never_shoots() {
    let mut e = Enemy::new(1, 60.0, 60.0, -2.0, 2000);
    e.is_alive = false;
    assert!(e.shoot_projectile(5000).is_none());
}

// ── Enemy hit detection ──────────────────────────────────────────────────────

#[test]
fn enemy_hit_kills_once() {
    let mut e = Enemy::new(1, 60.0, 60.0, -2.0, 2000);
    let p = shot(80.0, 90.0, Direction::Up);
    assert!(e.is_hit_by_player(&p, 1234));
    assert!(!e.is_alive);
    assert_eq!(e.destroyed_time, Some(1234));
    assert!(!e.is_hit_by_player(&p, 1300));
    assert_eq!(e.destroyed_time, Some(1234));
}

#[test]
fn enemy_hit_test_is_strict_on_edges() {
    let mut e = Enemy::new(1, 60.0, 60.0, -2.0, 2000);
    assert!(!e.is_hit_by_player(&shot(60.0, 90.0, Direction::Up), 0));
    assert!(!e.is_hit_by_player(&shot(110.0, 90.0, Direction::Up), 0));
    assert!(!e.is_hit_by_player(&shot(80.0, 110.0, Direction::Up), 0));
    assert!(e.is_alive);
}

#[test]
fn enemy_hit_uses_projectile_origin_only() {
    // The body overlaps the enemy, but the origin corner sits just left of it.
    let mut e = Enemy::new(1, 60.0, 60.0, -2.0, 2000);
    let p = shot(55.0, 90.0, Direction::Up);
    assert!(!e.is_hit_by_player(&p, 0));
}

#[test]
fn enemy_expires_a_second_after_death() {
    let mut e = Enemy::new(1, 60.0, 60.0, -2.0, 2000);
    assert!(!e.is_expired(10_000));
    e.is_hit_by_player(&shot(80.0, 90.0, Direction::Up), 100);
    assert!(!e.is_expired(1099));
    assert!(e.is_expired(1100));
}

// ── Spaceship validation ─────────────────────────────────────────────────────

#[test]
fn ship_starts_with_five_lives() {
    let s = ship();
    assert_eq!(s.lives(), 5);
    assert_eq!(s.name(), "Player");
}

#[test]
fn ship_rejects_blank_or_oversized_name() {
    assert_eq!(
        Spaceship::new("", 0.0, 0.0, 50.0, 50.0).unwrap_err(),
        GameError::BlankName
    );
    assert_eq!(
        Spaceship::new("   ", 0.0, 0.0, 50.0, 50.0).unwrap_err(),
        GameError::BlankName
    );
    let long = "x".repeat(33);
    assert_eq!(
        Spaceship::new(&long, 0.0, 0.0, 50.0, 50.0).unwrap_err(),
        GameError::NameTooLong { len: 33, max: 32 }
    );
    assert!(Spaceship::new(&"x".repeat(32), 0.0, 0.0, 50.0, 50.0).is_ok());
}

#[test]
fn ship_rename_keeps_old_name_on_failure() {
    let mut s = ship();
    assert!(s.set_name(" ").is_err());
    assert_eq!(s.name(), "Player");
    s.set_name("Ace").unwrap();
    assert_eq!(s.name(), "Ace");
}

#[test]
fn ship_negative_lives_is_rejected() {
    let mut s = ship();
    assert_eq!(
        s.set_lives(-1),
        Err(GameError::NegativeLives { requested: -1 })
    );
    assert_eq!(s.lives(), 5);
    s.set_lives(0).unwrap();
    assert_eq!(s.lives(), 0);
}

#[test]
fn ship_decrement_saturates_at_zero() {
    let mut s = ship();
    for _ in 0..10 {
        s.decrement_lives();
    }
    assert_eq!(s.lives(), 0);
}

#[test]
fn error_messages_name_the_problem() {
    assert!(GameError::NegativeLives { requested: -3 }
        .to_string()
        .contains("-3"));
    assert!(GameError::NameTooLong { len: 40, max: 32 }
        .to_string()
        .contains("40"));
    assert!(GameError::BlankName.to_string().contains("blank"));
}

// ── Spaceship movement ───────────────────────────────────────────────────────

#[test]
fn ship_left_clamps_at_zero() {
    let mut s = ship();
    for _ in 0..100 {
        s.move_by(-5.0, 0.0, 800.0);
        assert!(s.x >= 0.0);
    }
    assert_eq!(s.x, 0.0);
}

#[test]
fn ship_right_clamps_at_screen_edge() {
    let mut s = ship();
    for _ in 0..100 {
        s.move_by(5.0, 0.0, 800.0);
    }
    assert_eq!(s.x, 750.0);
}

#[test]
fn ship_vertical_move_is_unclamped() {
    let mut s = ship();
    s.move_by(0.0, -1000.0, 800.0);
    assert_eq!(s.y, -460.0);
}

// ── Spaceship hits & blinking ────────────────────────────────────────────────

#[test]
fn ship_hit_is_debounced_then_cooled_down() {
    let mut s = ship();
    let p = shot(400.0, 560.0, Direction::Down);
    assert!(s.is_hit_by_enemy(&p, 0));
    assert!(!s.is_hit_by_enemy(&p, 0)); // same tick, flag still set
    s.reset_hit_status();
    assert!(!s.is_hit_by_enemy(&p, 500)); // cooldown running
    assert!(!s.is_hit_by_enemy(&p, 999));
    assert!(s.is_hit_by_enemy(&p, 1000));
}

#[test]
fn ship_miss_does_not_start_cooldown() {
    let mut s = ship();
    assert!(!s.is_hit_by_enemy(&shot(10.0, 10.0, Direction::Down), 0));
    assert!(s.is_hit_by_enemy(&shot(400.0, 560.0, Direction::Down), 1));
}

#[test]
fn ship_blinks_for_the_hit_cooldown() {
    let mut s = ship();
    assert!(s.is_visible(0));
    s.is_hit_by_enemy(&shot(400.0, 560.0, Direction::Down), 0);
    assert!(s.is_blinking());
    assert!(!s.is_visible(50));
    assert!(s.is_visible(150));
    assert!(!s.is_visible(250));
    s.update_blinking(999);
    assert!(s.is_blinking());
    s.update_blinking(1000);
    assert!(!s.is_blinking());
    assert!(s.is_visible(1050));
}

#[test]
fn ship_respawn_restores_lives_and_clears_hit_state() {
    let mut s = ship();
    s.is_hit_by_enemy(&shot(400.0, 560.0, Direction::Down), 0);
    s.set_lives(0).unwrap();
    s.move_by(-100.0, 0.0, 800.0);
    s.respawn(375.0, 540.0);
    assert_eq!(s.lives(), 5);
    assert_eq!(s.x, 375.0);
    assert!(!s.is_blinking());
    assert!(s.is_hit_by_enemy(&shot(400.0, 560.0, Direction::Down), 10));
}
