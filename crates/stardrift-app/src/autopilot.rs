//! Scripted pilot used by headless runs.
//!
//! Reads the latest snapshot and answers with held keys plus any discrete
//! commands. It never looks inside the simulation, so it works the same
//! against a direct loop or the loop thread.

use std::f64::consts::{PI, TAU};

use glam::DVec2;

use stardrift_core::commands::PlayerCommand;
use stardrift_core::enums::{GamePhase, ShipKind};
use stardrift_core::geometry::{heading_of, heading_vector};
use stardrift_core::input::InputState;
use stardrift_core::state::{AsteroidView, FieldSnapshot, ShipView};

/// Keys and commands for one tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Decision {
    pub input: InputState,
    pub commands: Vec<PlayerCommand>,
}

#[derive(Debug, Clone)]
pub struct Autopilot {
    ship: ShipKind,
    /// Ticks between fire attempts.
    fire_interval: u64,
    /// Targets farther than this are approached instead of shot at.
    engage_range: f64,
    /// The cube backs away from anything closer than this.
    evade_range: f64,
    /// Heading error below which the pilot stops turning.
    aim_tolerance: f64,
}

impl Autopilot {
    pub fn new(ship: ShipKind) -> Self {
        Self {
            ship,
            fire_interval: 6,
            engage_range: 60.0,
            evade_range: 18.0,
            aim_tolerance: TAU / 60.0,
        }
    }

    pub fn decide(&self, snapshot: &FieldSnapshot) -> Decision {
        match snapshot.phase {
            GamePhase::Title => Decision {
                input: InputState::default(),
                commands: vec![PlayerCommand::StartSession { ship: self.ship }],
            },
            GamePhase::Paused => Decision {
                input: InputState::default(),
                commands: vec![PlayerCommand::Resume],
            },
            GamePhase::Playing => self.fly(snapshot),
        }
    }

    fn fly(&self, snapshot: &FieldSnapshot) -> Decision {
        let mut decision = Decision::default();

        if area_complete(snapshot) {
            decision.commands.push(PlayerCommand::JumpOut);
            return decision;
        }

        // Down and waiting for the respawn countdown.
        let Some(ship) = &snapshot.ship else {
            return decision;
        };
        let Some(target) = nearest_asteroid(ship, &snapshot.asteroids) else {
            return decision;
        };

        let ship_pos = DVec2::from(ship.position);
        let offset = DVec2::from(target.position) - ship_pos;
        let distance = offset.length();

        match self.ship {
            ShipKind::Delta | ShipKind::Cruiser => {
                let error = heading_error(ship.heading, heading_of(offset));
                if error > self.aim_tolerance {
                    decision.input.right = true;
                } else if error < -self.aim_tolerance {
                    decision.input.left = true;
                }
                let aligned = error.abs() < PI / 4.0;
                decision.input.up = aligned && distance > self.engage_range;
            }
            ShipKind::Cube => {
                if distance < self.evade_range {
                    let away = -offset;
                    decision.input.left = away.x < 0.0;
                    decision.input.right = away.x > 0.0;
                    decision.input.down = away.y < 0.0;
                    decision.input.up = away.y > 0.0;
                }
            }
        }

        let on_beat = snapshot.tick % self.fire_interval == 0;
        let in_range = distance <= self.engage_range || self.ship == ShipKind::Cube;
        if on_beat && in_range && facing(ship, offset, self.ship) {
            decision.commands.push(PlayerCommand::Fire);
        }

        decision
    }
}

/// The final level is clear and the field is waiting on the player.
fn area_complete(snapshot: &FieldSnapshot) -> bool {
    snapshot.level >= snapshot.max_level
        && snapshot.level_timer.is_some()
        && snapshot.asteroids.is_empty()
}

fn nearest_asteroid<'a>(ship: &ShipView, asteroids: &'a [AsteroidView]) -> Option<&'a AsteroidView> {
    let origin = DVec2::from(ship.position);
    asteroids.iter().min_by(|a, b| {
        let da = origin.distance_squared(DVec2::from(a.position));
        let db = origin.distance_squared(DVec2::from(b.position));
        da.total_cmp(&db)
    })
}

/// Signed turn from `current` to `target` in `(-π, π]`. Positive means turn right.
fn heading_error(current: f64, target: f64) -> f64 {
    let diff = (target - current).rem_euclid(TAU);
    if diff > PI {
        diff - TAU
    } else {
        diff
    }
}

/// The cube fires in four directions, so any target counts.
fn facing(ship: &ShipView, offset: DVec2, kind: ShipKind) -> bool {
    match kind {
        ShipKind::Cube => true,
        ShipKind::Delta | ShipKind::Cruiser => {
            offset.length_squared() == 0.0
                || heading_vector(ship.heading).dot(offset.normalize_or_zero()) > 0.9
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stardrift_core::enums::{AsteroidSize, SideState};
    use stardrift_core::state::SectionView;
    use stardrift_core::types::Point;

    fn ship_at(kind: ShipKind, x: f64, y: f64, heading: f64) -> ShipView {
        let section = SectionView {
            hp: 100.0,
            state: SideState::Vulnerable,
        };
        ShipView {
            kind,
            position: Point::new(x, y),
            heading,
            size: kind.size(),
            hull: Vec::new(),
            left: section,
            right: section,
            back: section,
            photon_size: 0.6,
        }
    }

    fn asteroid_at(x: f64, y: f64) -> AsteroidView {
        AsteroidView {
            slot: 0,
            size: AsteroidSize::Large,
            position: Point::new(x, y),
            vertices: Vec::new(),
        }
    }

    fn playing(ship: ShipView, asteroids: Vec<AsteroidView>, tick: u64) -> FieldSnapshot {
        FieldSnapshot {
            tick,
            phase: GamePhase::Playing,
            level: 1,
            max_level: 3,
            ship: Some(ship),
            asteroids,
            ..FieldSnapshot::default()
        }
    }

    #[test]
    fn test_title_starts_a_session() {
        let pilot = Autopilot::new(ShipKind::Cruiser);
        let decision = pilot.decide(&FieldSnapshot::default());
        assert_eq!(
            decision.commands,
            vec![PlayerCommand::StartSession {
                ship: ShipKind::Cruiser
            }]
        );
        assert_eq!(decision.input, InputState::default());
    }

    #[test]
    fn test_paused_resumes() {
        let pilot = Autopilot::new(ShipKind::Delta);
        let snapshot = FieldSnapshot {
            phase: GamePhase::Paused,
            ..FieldSnapshot::default()
        };
        assert_eq!(pilot.decide(&snapshot).commands, vec![PlayerCommand::Resume]);
    }

    #[test]
    fn test_turns_toward_target() {
        let pilot = Autopilot::new(ShipKind::Delta);

        // Heading 0 points along +y; a target on +x needs a right turn.
        let right = pilot.decide(&playing(ship_at(ShipKind::Delta, 50.0, 50.0, 0.0), vec![asteroid_at(90.0, 50.0)], 1));
        assert!(right.input.right && !right.input.left);

        let left = pilot.decide(&playing(ship_at(ShipKind::Delta, 50.0, 50.0, 0.0), vec![asteroid_at(10.0, 50.0)], 1));
        assert!(left.input.left && !left.input.right);
    }

    #[test]
    fn test_fires_on_beat_when_aligned() {
        let pilot = Autopilot::new(ShipKind::Delta);
        let ship = ship_at(ShipKind::Delta, 50.0, 50.0, 0.0);
        let target = vec![asteroid_at(50.0, 80.0)];

        let on_beat = pilot.decide(&playing(ship.clone(), target.clone(), 12));
        assert_eq!(on_beat.commands, vec![PlayerCommand::Fire]);
        assert!(!on_beat.input.left && !on_beat.input.right);
        assert!(!on_beat.input.up, "already within range");

        let off_beat = pilot.decide(&playing(ship, target, 13));
        assert!(off_beat.commands.is_empty());
    }

    #[test]
    fn test_approaches_distant_target() {
        let pilot = Autopilot::new(ShipKind::Cruiser);
        let decision = pilot.decide(&playing(ship_at(ShipKind::Cruiser, 10.0, 10.0, 0.0), vec![asteroid_at(10.0, 100.0)], 12));
        assert!(decision.input.up);
        assert!(decision.commands.is_empty(), "out of range");
    }

    #[test]
    fn test_cube_backs_away() {
        let pilot = Autopilot::new(ShipKind::Cube);
        let decision = pilot.decide(&playing(ship_at(ShipKind::Cube, 50.0, 50.0, 0.0), vec![asteroid_at(55.0, 55.0)], 1));
        assert!(decision.input.left && decision.input.down);
        assert!(!decision.input.right && !decision.input.up);
    }

    #[test]
    fn test_idle_while_respawning() {
        let pilot = Autopilot::new(ShipKind::Delta);
        let mut snapshot = playing(ship_at(ShipKind::Delta, 0.0, 0.0, 0.0), vec![asteroid_at(1.0, 1.0)], 6);
        snapshot.ship = None;
        snapshot.respawn = Some(120);
        assert_eq!(pilot.decide(&snapshot), Decision::default());
    }

    #[test]
    fn test_jumps_out_after_final_level() {
        let pilot = Autopilot::new(ShipKind::Delta);
        let mut snapshot = playing(ship_at(ShipKind::Delta, 0.0, 0.0, 0.0), Vec::new(), 6);
        snapshot.level = 3;
        snapshot.level_timer = Some(1);
        assert_eq!(pilot.decide(&snapshot).commands, vec![PlayerCommand::JumpOut]);
    }

    #[test]
    fn test_heading_error_wraps() {
        assert!((heading_error(0.1, TAU - 0.1) + 0.2).abs() < 1e-9);
        assert!((heading_error(TAU - 0.1, 0.1) - 0.2).abs() < 1e-9);
        assert!(heading_error(1.0, 1.0).abs() < 1e-12);
    }
}
