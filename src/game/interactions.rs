// Player-versus-world interactions, run after the physics step
//
// Every check first collects the indices of everything the player touches
// and only then removes or mutates entities.

use crate::collectible::PowerUpKind;
use crate::collision::{aabb_intersect, check_collisions_with_collection, Collidable};
use crate::config::GameConfig;
use crate::effect::EffectKind;
use crate::player::Player;

use super::types::EnemyContact;
use super::world::{take_indices, GameWorld};

/// Picks up every coin the player overlaps. Returns how many were taken.
pub fn collect_coins(player: &mut Player, world: &mut GameWorld) -> usize {
    let hits = check_collisions_with_collection(&*player, &world.coins);
    let taken = take_indices(&mut world.coins, &hits);

    for coin in &taken {
        player.add_score(coin.value);
        let bounds = coin.get_bounds();
        world.spawn_effect(EffectKind::CoinCollect, bounds.center_x(), bounds.center_y());
    }
    taken.len()
}

/// Picks up every power-up the player overlaps and applies its effect.
pub fn collect_power_ups(player: &mut Player, world: &mut GameWorld, config: &GameConfig) -> usize {
    let hits = check_collisions_with_collection(&*player, &world.power_ups);
    let taken = take_indices(&mut world.power_ups, &hits);

    for power_up in &taken {
        player.add_score(power_up.value);
        match power_up.kind {
            PowerUpKind::Mushroom => player.power_up = true,
            PowerUpKind::Flower => player.grant_invincibility(config.timers.invincibility_frames),
        }
        log::debug!("Picked up {:?}", power_up.kind);
    }
    taken.len()
}

/// Stomp or damage against the first live goomba the player touches.
///
/// A stomp needs the player falling with their feet no lower than the
/// goomba's middle. The stomped goomba moves to the dead collection. Any
/// other touch costs one life; respawning is left to the caller.
pub fn resolve_enemy_contact(player: &mut Player, world: &mut GameWorld, config: &GameConfig) -> EnemyContact {
    if player.invincible {
        return EnemyContact::None;
    }

    let player_bounds = player.get_bounds();
    let Some(index) = world
        .goombas
        .iter()
        .position(|goomba| aabb_intersect(&player_bounds, &goomba.get_bounds()))
    else {
        return EnemyContact::None;
    };

    let enemy = world.goombas[index].get_bounds();
    let stomp = player.body.vy > 0.0
        && player_bounds.bottom() <= enemy.center_y()
        && player_bounds.right() > enemy.left()
        && player_bounds.left() < enemy.right();

    if stomp {
        let mut goomba = world.goombas.remove(index);
        goomba.stomp();
        world.dead_goombas.push(goomba);
        player.bounce();
        player.add_score(config.scoring.stomp);
        EnemyContact::Stomped(index)
    } else {
        let lives_left = player.lose_life();
        log::info!("Player hit by goomba, {} lives left", lives_left);
        EnemyContact::Damaged { lives_left }
    }
}

/// Next level id if the player touches the checkpoint.
///
/// The checkpoint is tested shifted left by the camera offset, so it
/// triggers `camera.x` pixels before its authored position.
pub fn reached_checkpoint(player: &Player, world: &GameWorld) -> Option<String> {
    let checkpoint = world.checkpoint.translated(-world.camera.x, 0.0);
    if aabb_intersect(&player.get_bounds(), &checkpoint) {
        Some(world.next_level.clone())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::Aabb;
    use crate::goomba::Goomba;
    use crate::test_support;

    fn setup() -> (Player, GameWorld, GameConfig) {
        let config = GameConfig::default();
        let world = GameWorld::load("TEST_1", &test_support::levels(), &test_support::atlas(), &config).unwrap();
        let player = Player::new(0.0, 0.0, 32.0, 32.0, &config.physics, config.starting_lives);
        (player, world, config)
    }

    #[test]
    fn test_coin_adds_hundred_and_sparkles() {
        let (mut player, mut world, _) = setup();
        // First coin of TEST_1 is at (300, 450)
        player.place_at(290.0, 440.0);

        assert_eq!(collect_coins(&mut player, &mut world), 1);
        assert_eq!(player.score, 100);
        assert_eq!(world.coins.len(), 1);
        assert_eq!(world.effects.len(), 1);
        assert_eq!(world.effects[0].kind, EffectKind::CoinCollect);
        assert_eq!((world.effects[0].x, world.effects[0].y), (316.0, 466.0));

        // Gone for good
        assert_eq!(collect_coins(&mut player, &mut world), 0);
        assert_eq!(player.score, 100);
    }

    #[test]
    fn test_mushroom_and_flower() {
        let (mut player, mut world, config) = setup();
        // Mushroom at (500, 518), flower at (700, 518)
        player.place_at(490.0, 510.0);
        assert_eq!(collect_power_ups(&mut player, &mut world, &config), 1);
        assert_eq!(player.score, 1000);
        assert!(player.power_up);
        assert!(!player.invincible);

        player.place_at(690.0, 510.0);
        assert_eq!(collect_power_ups(&mut player, &mut world, &config), 1);
        assert_eq!(player.score, 3000);
        assert!(player.invincible);
        assert_eq!(player.invincible_timer, 300);
        assert!(world.power_ups.is_empty());
    }

    #[test]
    fn test_falling_onto_goomba_stomps_it() {
        let (mut player, mut world, config) = setup();
        world.goombas[0].body.bounds = Aabb::new(400.0, 518.0, 32.0, 32.0);
        // Feet at 530, goomba middle at 534
        player.place_at(400.0, 498.0);
        player.body.vy = 4.0;

        let contact = resolve_enemy_contact(&mut player, &mut world, &config);

        assert_eq!(contact, EnemyContact::Stomped(0));
        assert!(world.goombas.is_empty());
        assert_eq!(world.dead_goombas.len(), 1);
        assert!(world.dead_goombas[0].dead);
        assert_eq!(player.body.vy, -7.5);
        assert_eq!(player.score, 500);
        assert_eq!(player.lives, 3);
    }

    #[test]
    fn test_walking_into_goomba_costs_a_life() {
        let (mut player, mut world, config) = setup();
        world.goombas[0].body.bounds = Aabb::new(400.0, 518.0, 32.0, 32.0);
        player.place_at(380.0, 518.0);

        let contact = resolve_enemy_contact(&mut player, &mut world, &config);

        assert_eq!(contact, EnemyContact::Damaged { lives_left: 2 });
        assert_eq!(world.goombas.len(), 1);
        assert!(!world.goombas[0].dead);
    }

    fn two_goombas_in_a_row(world: &mut GameWorld, config: &GameConfig) {
        world.goombas[0].body.bounds = Aabb::new(400.0, 518.0, 32.0, 32.0);
        world.goombas.push(Goomba::new(
            410.0,
            518.0,
            32.0,
            32.0,
            config.physics.goomba_speed,
            config.physics.gravity,
            config.timers.goomba_death_frames,
        ));
    }

    #[test]
    fn test_touching_two_goombas_costs_one_life() {
        let (mut player, mut world, config) = setup();
        two_goombas_in_a_row(&mut world, &config);
        player.place_at(390.0, 518.0);

        let contact = resolve_enemy_contact(&mut player, &mut world, &config);

        assert_eq!(contact, EnemyContact::Damaged { lives_left: 2 });
        assert_eq!(player.lives, 2);
        assert_eq!(world.goombas.len(), 2);
        assert!(world.goombas.iter().all(|goomba| !goomba.dead));
    }

    #[test]
    fn test_stomp_takes_only_the_first_goomba() {
        let (mut player, mut world, config) = setup();
        two_goombas_in_a_row(&mut world, &config);
        player.place_at(400.0, 498.0);
        player.body.vy = 4.0;

        let contact = resolve_enemy_contact(&mut player, &mut world, &config);

        assert_eq!(contact, EnemyContact::Stomped(0));
        assert_eq!(world.goombas.len(), 1);
        assert_eq!(world.goombas[0].body.bounds.x, 410.0);
        assert_eq!(world.dead_goombas.len(), 1);
        assert_eq!(world.dead_goombas[0].body.bounds.x, 400.0);
        assert_eq!(player.lives, 3);
        assert_eq!(player.score, 500);
    }

    #[test]
    fn test_invincible_player_ignores_goombas() {
        let (mut player, mut world, config) = setup();
        world.goombas[0].body.bounds = Aabb::new(400.0, 518.0, 32.0, 32.0);
        player.place_at(380.0, 518.0);
        player.grant_invincibility(10);

        assert_eq!(resolve_enemy_contact(&mut player, &mut world, &config), EnemyContact::None);
        assert_eq!(player.lives, 3);
    }

    #[test]
    fn test_checkpoint_shifted_by_camera() {
        let (mut player, mut world, _) = setup();
        // TEST_1 checkpoint is at x = 1500
        player.place_at(1100.0, 450.0);
        assert_eq!(reached_checkpoint(&player, &world), None);

        world.camera.x = 400.0;
        assert_eq!(reached_checkpoint(&player, &world), Some("TEST_2".to_string()));
    }
}
