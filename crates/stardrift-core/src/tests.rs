#[cfg(test)]
mod tests {
    use glam::DVec2;

    use crate::commands::PlayerCommand;
    use crate::components::{Asteroid, Dust, Photon};
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::FieldEvent;
    use crate::geometry::*;
    use crate::player::PlayerRecord;
    use crate::pool::Pool;
    use crate::random::SimRng;
    use crate::types::Bounds;

    fn photon_at(x: f64, y: f64) -> Photon {
        Photon {
            active: true,
            position: DVec2::new(x, y),
            velocity: DVec2::ZERO,
        }
    }

    // ---- Pools ----

    #[test]
    fn test_pool_spawn_uses_first_free_slot() {
        let mut pool: Pool<Photon, MAX_PHOTONS> = Pool::new();
        assert_eq!(pool.spawn(photon_at(1.0, 1.0)), Some(0));
        assert_eq!(pool.spawn(photon_at(2.0, 2.0)), Some(1));
        assert_eq!(pool.spawn(photon_at(3.0, 3.0)), Some(2));

        pool.release(1);
        assert!(!pool.is_active(1));
        assert_eq!(pool.allocate(), Some(1));
        assert_eq!(pool.spawn(photon_at(9.0, 9.0)), Some(1));
        assert_eq!(pool[1].position, DVec2::new(9.0, 9.0));
        assert_eq!(pool.active_count(), 3);
    }

    #[test]
    fn test_pool_spawn_when_full_is_noop() {
        let mut pool: Pool<Photon, MAX_PHOTONS> = Pool::new();
        for i in 0..MAX_PHOTONS {
            assert_eq!(pool.spawn(photon_at(i as f64, 0.0)), Some(i));
        }
        assert!(pool.is_full());
        let before = pool.clone();

        assert_eq!(pool.spawn(photon_at(99.0, 99.0)), None);
        assert_eq!(pool.active_count(), MAX_PHOTONS);
        for i in 0..MAX_PHOTONS {
            assert_eq!(pool[i], before[i], "slot {} changed on a full-pool spawn", i);
        }
    }

    #[test]
    fn test_pool_release_keeps_stale_fields() {
        let mut pool: Pool<Dust, MAX_DUST> = Pool::new();
        let idx = pool
            .spawn(Dust {
                lifetime: 12,
                position: DVec2::new(4.0, 5.0),
                ..Default::default()
            })
            .unwrap();
        pool.release(idx);
        assert!(pool.is_empty());
        assert_eq!(pool[idx].lifetime, 12);
        assert_eq!(pool[idx].position, DVec2::new(4.0, 5.0));

        // Out-of-range release is ignored.
        pool.release(MAX_DUST + 5);
    }

    #[test]
    fn test_pool_iter_active_skips_inactive() {
        let mut pool: Pool<Asteroid, MAX_ASTEROIDS> = Pool::new();
        for _ in 0..4 {
            pool.spawn(Asteroid::default());
        }
        pool.release(0);
        pool.release(2);
        let indices: Vec<usize> = pool.iter_active().map(|(i, _)| i).collect();
        assert_eq!(indices, vec![1, 3]);
        assert_eq!(pool.free_count(), MAX_ASTEROIDS - 2);

        pool.clear();
        assert!(pool.is_empty());
    }

    // ---- Geometry ----

    #[test]
    fn test_segments_crossing() {
        assert!(segments_intersect(
            DVec2::new(0.0, 0.0),
            DVec2::new(2.0, 2.0),
            DVec2::new(0.0, 2.0),
            DVec2::new(2.0, 0.0),
        ));
    }

    #[test]
    fn test_segments_disjoint() {
        assert!(!segments_intersect(
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(2.0, 0.0),
            DVec2::new(3.0, -1.0),
        ));
        // Parallel, offset.
        assert!(!segments_intersect(
            DVec2::new(0.0, 0.0),
            DVec2::new(4.0, 0.0),
            DVec2::new(0.0, 1.0),
            DVec2::new(4.0, 1.0),
        ));
    }

    #[test]
    fn test_segments_collinear_overlap_and_gap() {
        assert!(segments_intersect(
            DVec2::new(0.0, 0.0),
            DVec2::new(4.0, 0.0),
            DVec2::new(2.0, 0.0),
            DVec2::new(6.0, 0.0),
        ));
        assert!(!segments_intersect(
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(2.0, 0.0),
            DVec2::new(3.0, 0.0),
        ));
    }

    #[test]
    fn test_segments_touching_endpoint() {
        assert!(segments_intersect(
            DVec2::new(0.0, 0.0),
            DVec2::new(2.0, 0.0),
            DVec2::new(2.0, 0.0),
            DVec2::new(2.0, 5.0),
        ));
    }

    #[test]
    fn test_orientation_signs() {
        let a = DVec2::new(0.0, 0.0);
        let b = DVec2::new(1.0, 0.0);
        assert_eq!(orientation(a, b, DVec2::new(2.0, 0.0)), Orientation::Collinear);
        assert_ne!(
            orientation(a, b, DVec2::new(1.0, 1.0)),
            orientation(a, b, DVec2::new(1.0, -1.0))
        );
    }

    #[test]
    fn test_point_near_segment() {
        let a = DVec2::new(0.0, 0.0);
        let b = DVec2::new(10.0, 0.0);
        assert!(point_near_segment(DVec2::new(5.0, 0.5), a, b, 1.0));
        assert!(!point_near_segment(DVec2::new(5.0, 1.5), a, b, 1.0));
        // Projection beyond the segment end.
        assert!(!point_near_segment(DVec2::new(10.5, 0.0), a, b, 1.0));
        // Degenerate segment.
        assert!(!point_near_segment(a, a, a, 1.0));
    }

    #[test]
    fn test_heading_convention() {
        let up = heading_vector(0.0);
        assert!((up - DVec2::new(0.0, 1.0)).length() < 1e-12);
        let right = heading_vector(std::f64::consts::FRAC_PI_2);
        assert!((right - DVec2::new(1.0, 0.0)).length() < 1e-12);

        let rotated = rotate_by_heading(DVec2::new(0.0, 3.0), std::f64::consts::FRAC_PI_2);
        assert!((rotated - DVec2::new(3.0, 0.0)).length() < 1e-12);
        assert!((heading_of(DVec2::new(1.0, 0.0)) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_wrap_angle_range() {
        let tau = std::f64::consts::TAU;
        assert!((wrap_angle(tau + 0.5) - 0.5).abs() < 1e-12);
        assert!((wrap_angle(-0.5) - (tau - 0.5)).abs() < 1e-12);
    }

    // ---- Bounds ----

    #[test]
    fn test_bounds_wrap_same_call() {
        let bounds = Bounds::new(100.0, 75.0);
        let wrapped = bounds.wrap(DVec2::new(110.5, 30.0), 10.0);
        assert_eq!(wrapped, DVec2::new(-10.0, 30.0));
        let wrapped = bounds.wrap(DVec2::new(30.0, -10.5), 10.0);
        assert_eq!(wrapped, DVec2::new(30.0, 85.0));
        let inside = bounds.wrap(DVec2::new(50.0, 40.0), 10.0);
        assert_eq!(inside, DVec2::new(50.0, 40.0));
    }

    // ---- Random ----

    #[test]
    fn test_rng_deterministic() {
        let mut a = SimRng::seed_from_u64(7);
        let mut b = SimRng::seed_from_u64(7);
        for _ in 0..100 {
            assert_eq!(a.uniform(-3.0, 3.0), b.uniform(-3.0, 3.0));
        }
    }

    #[test]
    fn test_rng_bounded_precision() {
        let mut rng = SimRng::seed_from_u64(99);
        for _ in 0..1000 {
            let v = rng.uniform(0.2, 0.8);
            assert!((0.2..0.8).contains(&v), "draw {} out of range", v);
            let scaled = v * 1_000_000.0;
            assert!((scaled - scaled.round()).abs() < 1e-6, "draw {} exceeds six decimals", v);
        }
    }

    #[test]
    fn test_rng_below() {
        let mut rng = SimRng::seed_from_u64(3);
        for _ in 0..200 {
            assert!(rng.below(10) < 10);
        }
        assert_eq!(rng.below(0), 0);
    }

    // ---- Enums ----

    #[test]
    fn test_side_state_decay() {
        assert_eq!(SideState::Invulnerable(2).decayed(), SideState::Invulnerable(1));
        assert_eq!(SideState::Invulnerable(1).decayed(), SideState::Vulnerable);
        assert_eq!(SideState::Vulnerable.decayed(), SideState::Vulnerable);
        assert_eq!(SideState::Destroyed.decayed(), SideState::Destroyed);
    }

    #[test]
    fn test_ship_kind_from_index() {
        for (key, kind) in (0u8..).zip(ShipKind::ALL) {
            assert_eq!(ShipKind::try_from(key), Ok(kind));
        }
        let err = ShipKind::try_from(7).unwrap_err();
        assert_eq!(err.to_string(), "unknown ship kind 7");
    }

    #[test]
    fn test_asteroid_size_shrink_chain() {
        assert_eq!(AsteroidSize::Large.shrink(), Some(AsteroidSize::Medium));
        assert_eq!(AsteroidSize::Medium.shrink(), Some(AsteroidSize::Small));
        assert_eq!(AsteroidSize::Small.shrink(), None);
        assert_eq!(AsteroidSize::Large.units(), 5);
    }

    // ---- Serialization ----

    #[test]
    fn test_command_tagged_json() {
        let cmd = PlayerCommand::ChangeShip {
            ship: ShipKind::Cruiser,
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"type\":\"ChangeShip\""), "got {}", json);
        let back: PlayerCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cmd);
    }

    #[test]
    fn test_event_tagged_json() {
        let json = serde_json::to_string(&FieldEvent::LevelAdvanced {
            level: 2,
            asteroids: 2,
        })
        .unwrap();
        assert!(json.contains("\"type\":\"LevelAdvanced\""));
    }

    #[test]
    fn test_player_record_defaults_and_offer() {
        let mut record: PlayerRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record.high_score, DEFAULT_HIGH_SCORE);
        assert!(!record.offer_score(50));
        assert!(record.offer_score(150));
        assert_eq!(record.high_score, 150);
    }
}
