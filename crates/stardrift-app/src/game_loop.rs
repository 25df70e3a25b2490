//! Game loop thread: runs the simulation at 30Hz and publishes snapshots.
//!
//! The simulation is created inside this thread so it never crosses a
//! thread boundary. Commands and held keys arrive via an `mpsc` channel.
//! Snapshots are stored in shared state for polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use tracing::{debug, info};

use stardrift_core::constants::TICK_RATE;
use stardrift_core::enums::ShipKind;
use stardrift_core::input::InputState;
use stardrift_core::state::FieldSnapshot;
use stardrift_sim::{SimConfig, Simulation};

use crate::autopilot::Autopilot;
use crate::control;
use crate::session::{SessionSummary, SummaryRecorder};
use crate::state::{AppState, GameLoopCommand};

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Whether the loop thread sleeps between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// One tick per [`TICK_DURATION`].
    Realtime,
    /// As fast as the thread can go.
    Unpaced,
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and a handle that yields the run summary once
/// the loop exits.
pub fn spawn_game_loop(
    config: SimConfig,
    latest_snapshot: Arc<Mutex<Option<FieldSnapshot>>>,
    pacing: Pacing,
) -> Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<SessionSummary>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("stardrift-game-loop".into())
        .spawn(move || run_game_loop(config, cmd_rx, &latest_snapshot, pacing))
        .context("failed to spawn game loop thread")?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<FieldSnapshot>>,
    pacing: Pacing,
) -> SessionSummary {
    let mut recorder = SummaryRecorder::new(config.seed);
    let mut sim = Simulation::new(config);
    let mut input = InputState::default();
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => sim.queue_command(cmd),
                Ok(GameLoopCommand::Input(held)) => input = held,
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    debug!(tick = sim.tick_count(), "game loop stopping");
                    return recorder.finish(sim.player());
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance one tick (the simulation handles pause itself)
        let snapshot = sim.tick(&input);
        recorder.observe(&snapshot);

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until the next tick
        if pacing == Pacing::Unpaced {
            continue;
        }
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind: reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }
}

/// Fly `ticks` ticks with the autopilot on the calling thread, no sleeping.
///
/// Fully deterministic for a given config and ship.
pub fn run_headless(config: SimConfig, ship: ShipKind, ticks: u64) -> SessionSummary {
    let mut recorder = SummaryRecorder::new(config.seed);
    let mut sim = Simulation::new(config);
    let pilot = Autopilot::new(ship);
    let mut snapshot = sim.snapshot();

    for _ in 0..ticks {
        let decision = pilot.decide(&snapshot);
        sim.queue_commands(decision.commands);
        snapshot = sim.tick(&decision.input);
        recorder.observe(&snapshot);
    }

    info!(ticks, tick = sim.tick_count(), "headless run finished");
    recorder.finish(sim.player())
}

/// Fly on the paced loop thread until the simulation reaches `ticks`.
///
/// The autopilot polls the shared snapshot once per tick period, so the
/// outcome depends on thread timing and is not reproducible.
pub fn run_realtime(config: SimConfig, ship: ShipKind, ticks: u64) -> Result<SessionSummary> {
    let state = AppState::new();
    let handle = control::start_simulation(&state, config, Pacing::Realtime)?;
    let pilot = Autopilot::new(ship);
    let mut last_seen = None;

    loop {
        std::thread::sleep(TICK_DURATION);
        let Some(snapshot) = control::get_snapshot(&state)? else {
            continue;
        };
        if snapshot.tick >= ticks {
            break;
        }
        if last_seen == Some(snapshot.tick) {
            continue;
        }
        last_seen = Some(snapshot.tick);

        let decision = pilot.decide(&snapshot);
        control::set_input(&state, decision.input)?;
        for command in decision.commands {
            control::send_command(&state, command)?;
        }
    }

    control::stop_simulation(&state)?;
    let summary = handle
        .join()
        .map_err(|_| anyhow!("game loop thread panicked"))?;
    info!(ticks, "realtime run finished");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stardrift_core::commands::PlayerCommand;
    use stardrift_core::enums::GamePhase;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartSession {
            ship: ShipKind::Delta,
        }))
        .unwrap();
        tx.send(GameLoopCommand::Input(InputState {
            left: true,
            ..InputState::default()
        }))
        .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::PlayerCommand(PlayerCommand::StartSession { ship: ShipKind::Delta })
        ));
        assert!(matches!(commands[1], GameLoopCommand::Input(InputState { left: true, .. })));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_snapshot_serialization_under_5ms() {
        let mut sim = Simulation::new(SimConfig::default());
        sim.queue_command(PlayerCommand::StartSession { ship: ShipKind::Cruiser });

        // Past the first level transition so the field is populated
        for _ in 0..150 {
            sim.tick(&InputState::default());
        }

        let snapshot = sim.tick(&InputState::default());
        assert!(!snapshot.asteroids.is_empty());
        let start = Instant::now();
        let json = serde_json::to_string(&snapshot).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(5),
            "Snapshot serialization took {:?}, should be <5ms",
            elapsed
        );
        assert!(!json.is_empty());
    }

    #[test]
    fn test_pause_resume_via_commands() {
        let mut sim = Simulation::new(SimConfig::default());
        let idle = InputState::default();

        sim.queue_command(PlayerCommand::StartSession { ship: ShipKind::Delta });
        let snap = sim.tick(&idle);
        assert_eq!(snap.phase, GamePhase::Playing);

        sim.queue_command(PlayerCommand::Pause);
        let snap = sim.tick(&idle);
        assert_eq!(snap.phase, GamePhase::Paused);
        let paused_tick = snap.tick;

        // Tick while paused: time should not advance
        let snap = sim.tick(&idle);
        assert_eq!(snap.tick, paused_tick);

        sim.queue_command(PlayerCommand::Resume);
        let snap = sim.tick(&idle);
        assert_eq!(snap.phase, GamePhase::Playing);
        assert!(snap.tick > paused_tick);
    }

    #[test]
    fn test_tick_duration_constant() {
        // 30Hz = 33.333ms per tick
        let expected_nanos = 1_000_000_000u64 / 30;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }

    #[test]
    fn test_held_input_survives_between_ticks() {
        let latest = Arc::new(Mutex::new(None));
        let (tx, handle) = spawn_game_loop(SimConfig::default(), latest.clone(), Pacing::Unpaced).unwrap();

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartSession {
            ship: ShipKind::Delta,
        }))
        .unwrap();
        tx.send(GameLoopCommand::Input(InputState {
            right: true,
            ..InputState::default()
        }))
        .unwrap();

        let deadline = Instant::now() + Duration::from_secs(10);
        let heading = loop {
            let turned = latest
                .lock()
                .unwrap()
                .as_ref()
                .and_then(|s: &FieldSnapshot| s.ship.as_ref().map(|ship| ship.heading))
                .filter(|h| *h > 1.0);
            if let Some(h) = turned {
                break h;
            }
            assert!(Instant::now() < deadline, "ship never turned");
            std::thread::sleep(Duration::from_millis(1));
        };
        assert!(heading > 1.0);

        tx.send(GameLoopCommand::Shutdown).unwrap();
        let summary = handle.join().unwrap();
        assert_eq!(summary.sessions, 1);
    }

    #[test]
    fn test_headless_runs_are_reproducible() {
        let config = SimConfig {
            seed: 11,
            ..SimConfig::default()
        };
        let a = run_headless(config.clone(), ShipKind::Delta, 900);
        let b = run_headless(config, ShipKind::Delta, 900);

        assert_eq!(a, b);
        assert_eq!(a.snapshots, 900);
        assert!(a.sessions >= 1);
        assert!(a.highest_level >= 1);
    }

    #[test]
    fn test_headless_every_ship_flies() {
        for ship in ShipKind::ALL {
            let summary = run_headless(SimConfig::default(), ship, 400);
            assert!(summary.sessions >= 1, "{ship:?} never left the title");
            assert_eq!(summary.snapshots, 400);
        }
    }
}
