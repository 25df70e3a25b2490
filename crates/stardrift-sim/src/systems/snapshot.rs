//! Builds the renderer-facing [`FieldSnapshot`] from the arena.

use stardrift_core::components::ShipSection;
use stardrift_core::enums::GamePhase;
use stardrift_core::events::FieldEvent;
use stardrift_core::state::*;
use stardrift_core::types::Point;

use crate::arena::Arena;
use crate::hull;

pub fn build(arena: &Arena, phase: GamePhase, tick: u64, events: Vec<FieldEvent>) -> FieldSnapshot {
    let ship = (phase != GamePhase::Title && !arena.is_respawning()).then(|| ship_view(arena));

    let photons = arena
        .photons
        .iter_active()
        .map(|(_, p)| Point::from(p.position))
        .collect();

    let asteroids = arena
        .asteroids
        .iter_active()
        .map(|(slot, a)| AsteroidView {
            slot,
            size: a.size,
            position: a.position.into(),
            vertices: hull::asteroid_edges(a).map(|(_, v)| v.into()).collect(),
        })
        .collect();

    let debris = arena
        .debris
        .iter_active()
        .map(|(_, d)| DebrisView {
            kind: d.kind,
            position: d.position.into(),
            heading: d.heading,
            lifetime: d.lifetime,
            vertices: hull::debris_vertices(d).map(Point::from),
        })
        .collect();

    let dust = arena
        .dust
        .iter_active()
        .map(|(_, d)| DustView {
            position: d.position.into(),
            lifetime: d.lifetime,
        })
        .collect();

    let points = arena
        .points
        .iter_active()
        .map(|(_, p)| PointsView {
            amount: p.amount,
            position: p.position.into(),
            lifetime: p.lifetime,
        })
        .collect();

    let stars = arena
        .stars
        .iter_active()
        .map(|(_, s)| StarView {
            position: s.position.into(),
            flicker: s.flicker,
        })
        .collect();

    let upgrade_text = arena.upgrade_text.active.then(|| TextView {
        message: arena.upgrade_text.message.clone(),
        lifetime: arena.upgrade_text.lifetime,
    });

    FieldSnapshot {
        tick,
        phase,
        bounds: arena.bounds,
        level: arena.level,
        max_level: arena.max_level,
        level_timer: arena.level_timer,
        respawn: arena.respawn,
        oscillation: arena.oscillation,
        ship,
        photons,
        asteroids,
        debris,
        dust,
        points,
        stars,
        upgrade_text,
        score: score_view(arena),
        events,
    }
}

fn ship_view(arena: &Arena) -> ShipView {
    let ship = &arena.ship;
    let section = |s: &ShipSection| SectionView {
        hp: s.hp,
        state: s.state,
    };
    ShipView {
        kind: ship.kind,
        position: ship.position.into(),
        heading: ship.heading,
        size: ship.size,
        hull: hull::ship_outline(ship).into_iter().map(Point::from).collect(),
        left: section(&ship.left),
        right: section(&ship.right),
        back: section(&ship.back),
        photon_size: arena.weapon.photon_size,
    }
}

fn score_view(arena: &Arena) -> ScoreView {
    let tally = &arena.score;
    ScoreView {
        session_score: tally.session_score(),
        high_score: arena.player.high_score,
        large_destroyed: tally.large_destroyed,
        medium_destroyed: tally.medium_destroyed,
        small_destroyed: tally.small_destroyed,
        common_collected: tally.common_collected,
        upgrades_collected: tally.upgrades_collected,
        metal: tally.metal,
        alloy: tally.alloy,
        photon_upgrades: arena.weapon.upgrades,
        ship_upgrades: arena.ship.upgrades,
    }
}
