//! Run summary built from the snapshots a run produced.

use serde::{Deserialize, Serialize};

use stardrift_core::enums::GamePhase;
use stardrift_core::events::FieldEvent;
use stardrift_core::player::PlayerRecord;
use stardrift_core::state::FieldSnapshot;

/// What happened during a run, written out as JSON when the run ends.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub seed: u64,
    /// Snapshots observed, including title and paused ticks.
    pub snapshots: u64,
    /// Simulation tick count at the last snapshot.
    pub final_tick: u64,
    pub final_phase: GamePhase,
    /// Sessions started from the title screen.
    pub sessions: u32,
    pub ship_losses: u32,
    pub pieces_lost: u32,
    pub asteroids_destroyed: u32,
    pub pickups: u32,
    pub upgrades: u32,
    pub levels_cleared: u32,
    pub areas_completed: u32,
    pub banked_sessions: u32,
    pub highest_level: u32,
    pub best_session_score: u32,
    pub player: PlayerRecord,
}

/// Folds snapshots into a [`SessionSummary`].
#[derive(Debug)]
pub struct SummaryRecorder {
    summary: SessionSummary,
    last_phase: GamePhase,
}

impl SummaryRecorder {
    pub fn new(seed: u64) -> Self {
        Self {
            summary: SessionSummary {
                seed,
                ..SessionSummary::default()
            },
            last_phase: GamePhase::Title,
        }
    }

    pub fn observe(&mut self, snapshot: &FieldSnapshot) {
        let s = &mut self.summary;
        s.snapshots += 1;
        s.final_tick = snapshot.tick;
        s.final_phase = snapshot.phase;

        if self.last_phase == GamePhase::Title && snapshot.phase == GamePhase::Playing {
            s.sessions += 1;
        }
        self.last_phase = snapshot.phase;

        if snapshot.phase != GamePhase::Title {
            s.highest_level = s.highest_level.max(snapshot.level);
            s.best_session_score = s.best_session_score.max(snapshot.score.session_score);
        }

        for event in &snapshot.events {
            match event {
                FieldEvent::ShipDestroyed { .. } => s.ship_losses += 1,
                FieldEvent::ShipPieceLost { .. } => s.pieces_lost += 1,
                FieldEvent::AsteroidDestroyed { .. } => s.asteroids_destroyed += 1,
                FieldEvent::DebrisCollected { .. } => s.pickups += 1,
                FieldEvent::UpgradeApplied { .. } => s.upgrades += 1,
                FieldEvent::LevelCleared { .. } => s.levels_cleared += 1,
                FieldEvent::AreaComplete { .. } => s.areas_completed += 1,
                FieldEvent::SessionBanked { .. } => s.banked_sessions += 1,
                FieldEvent::LevelAdvanced { .. }
                | FieldEvent::ReturnToTitle
                | FieldEvent::ShieldDepleted => {}
            }
        }
    }

    pub fn summary(&self) -> &SessionSummary {
        &self.summary
    }

    /// Closes the run with the player record the simulation ended on.
    pub fn finish(mut self, player: &PlayerRecord) -> SessionSummary {
        self.summary.player = player.clone();
        self.summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stardrift_core::enums::{AsteroidSize, DebrisKind, ShipKind};

    fn snapshot(tick: u64, phase: GamePhase, events: Vec<FieldEvent>) -> FieldSnapshot {
        FieldSnapshot {
            tick,
            phase,
            events,
            ..FieldSnapshot::default()
        }
    }

    #[test]
    fn test_counts_sessions_on_title_exit() {
        let mut recorder = SummaryRecorder::new(7);
        recorder.observe(&snapshot(1, GamePhase::Title, vec![]));
        recorder.observe(&snapshot(1, GamePhase::Playing, vec![]));
        recorder.observe(&snapshot(2, GamePhase::Paused, vec![]));
        recorder.observe(&snapshot(2, GamePhase::Playing, vec![]));
        recorder.observe(&snapshot(3, GamePhase::Title, vec![]));
        recorder.observe(&snapshot(4, GamePhase::Playing, vec![]));

        let summary = recorder.finish(&PlayerRecord::default());
        assert_eq!(summary.sessions, 2, "resuming from pause is not a new session");
        assert_eq!(summary.snapshots, 6);
        assert_eq!(summary.final_tick, 4);
        assert_eq!(summary.seed, 7);
    }

    #[test]
    fn test_tallies_events() {
        let mut recorder = SummaryRecorder::new(1);
        recorder.observe(&snapshot(
            5,
            GamePhase::Playing,
            vec![
                FieldEvent::AsteroidDestroyed {
                    size: AsteroidSize::Large,
                    x: 1.0,
                    y: 2.0,
                },
                FieldEvent::AsteroidDestroyed {
                    size: AsteroidSize::Small,
                    x: 1.0,
                    y: 2.0,
                },
                FieldEvent::DebrisCollected {
                    kind: DebrisKind::Common,
                },
                FieldEvent::ShipDestroyed {
                    kind: ShipKind::Cube,
                },
                FieldEvent::SessionBanked {
                    metal: 3.0,
                    alloy: 0.0,
                },
            ],
        ));

        let summary = recorder.summary();
        assert_eq!(summary.asteroids_destroyed, 2);
        assert_eq!(summary.pickups, 1);
        assert_eq!(summary.ship_losses, 1);
        assert_eq!(summary.banked_sessions, 1);
        assert_eq!(summary.upgrades, 0);
    }

    #[test]
    fn test_title_scores_are_ignored() {
        let mut recorder = SummaryRecorder::new(1);
        let mut title = snapshot(1, GamePhase::Title, vec![]);
        title.level = 9;
        title.score.session_score = 500;
        recorder.observe(&title);

        let mut playing = snapshot(2, GamePhase::Playing, vec![]);
        playing.level = 2;
        playing.score.session_score = 40;
        recorder.observe(&playing);

        assert_eq!(recorder.summary().highest_level, 2);
        assert_eq!(recorder.summary().best_session_score, 40);
    }

    #[test]
    fn test_finish_copies_player() {
        let recorder = SummaryRecorder::new(1);
        let player = PlayerRecord {
            high_score: 900,
            metal: 12.0,
            alloy: 3.0,
        };
        assert_eq!(recorder.finish(&player).player, player);
    }
}
