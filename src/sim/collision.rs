//! Collision checks between the player and the level
//!
//! Platforms are one-way: the player only lands while falling and only when
//! its bottom edge is inside the platform's vertical band. Coins are circles
//! tested against the player's center.

use super::geometry::{Circle, circle_contains};
use super::player::Player;
use super::world::{Coin, Platform};

/// Whether the player should land on this platform this tick
pub fn lands_on(player: &Player, platform: &Platform) -> bool {
    if player.velocity_y <= 0.0 || player.is_dropping {
        return false;
    }
    let body = player.bounds();
    let ledge = platform.bounds();
    let bottom = body.bottom();

    body.overlaps_x(&ledge) && bottom > ledge.top() && bottom < ledge.bottom()
}

/// Snap the player onto the first qualifying platform. Returns its index.
pub fn resolve_platforms(player: &mut Player, platforms: &[Platform]) -> Option<usize> {
    let index = platforms.iter().position(|p| lands_on(player, p))?;
    player.land_on(platforms[index].y);
    Some(index)
}

/// Whether the player is close enough to pick up an uncollected coin
pub fn touches_coin(player: &Player, coin: &Coin) -> bool {
    if coin.collected {
        return false;
    }
    // Pickup radius grows by half the player's width
    let reach = Circle::new(coin.circle().center, player.width / 2.0 + coin.radius);
    circle_contains(player.center(), &reach)
}
