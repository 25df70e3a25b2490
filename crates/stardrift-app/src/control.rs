//! Control surface over the game loop thread.
//!
//! Any front end (the CLI runner today) talks to the simulation through
//! these functions: start it, push commands and held keys, poll the latest
//! snapshot, stop it.

use std::thread::JoinHandle;

use anyhow::{anyhow, bail, Result};

use stardrift_core::commands::PlayerCommand;
use stardrift_core::input::InputState;
use stardrift_core::state::FieldSnapshot;
use stardrift_sim::SimConfig;

use crate::game_loop::{self, Pacing};
use crate::session::SessionSummary;
use crate::state::{AppState, GameLoopCommand};

/// Start the simulation. Spawns the game loop thread if not already running.
pub fn start_simulation(
    state: &AppState,
    config: SimConfig,
    pacing: Pacing,
) -> Result<JoinHandle<SessionSummary>> {
    let mut running = state.running.lock().map_err(|e| anyhow!("{e}"))?;
    if *running {
        bail!("simulation already running");
    }

    let (cmd_tx, handle) = game_loop::spawn_game_loop(config, state.latest_snapshot.clone(), pacing)?;

    let mut tx_lock = state.command_tx.lock().map_err(|e| anyhow!("{e}"))?;
    *tx_lock = Some(cmd_tx);
    *running = true;

    Ok(handle)
}

fn send(state: &AppState, command: GameLoopCommand) -> Result<()> {
    let tx_lock = state.command_tx.lock().map_err(|e| anyhow!("{e}"))?;
    match tx_lock.as_ref() {
        Some(tx) => tx
            .send(command)
            .map_err(|e| anyhow!("failed to send command: {e}")),
        None => bail!("simulation not started"),
    }
}

/// Send a player command to the simulation.
pub fn send_command(state: &AppState, command: PlayerCommand) -> Result<()> {
    send(state, GameLoopCommand::PlayerCommand(command))
}

/// Replace the held keys used for the following ticks.
pub fn set_input(state: &AppState, input: InputState) -> Result<()> {
    send(state, GameLoopCommand::Input(input))
}

/// Get the latest snapshot (for polling / initial state).
pub fn get_snapshot(state: &AppState) -> Result<Option<FieldSnapshot>> {
    let lock = state.latest_snapshot.lock().map_err(|e| anyhow!("{e}"))?;
    Ok(lock.clone())
}

/// Ask the loop thread to exit. The caller joins the handle for the summary.
pub fn stop_simulation(state: &AppState) -> Result<()> {
    send(state, GameLoopCommand::Shutdown)?;
    let mut tx_lock = state.command_tx.lock().map_err(|e| anyhow!("{e}"))?;
    *tx_lock = None;
    let mut running = state.running.lock().map_err(|e| anyhow!("{e}"))?;
    *running = false;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use stardrift_core::enums::{GamePhase, ShipKind};
    use std::time::{Duration, Instant};

    fn wait_for(state: &AppState, what: impl Fn(&FieldSnapshot) -> bool) -> FieldSnapshot {
        let deadline = Instant::now() + Duration::from_secs(10);
        loop {
            if let Some(snapshot) = get_snapshot(state).unwrap() {
                if what(&snapshot) {
                    return snapshot;
                }
            }
            assert!(Instant::now() < deadline, "timed out waiting for snapshot");
            std::thread::sleep(Duration::from_millis(1));
        }
    }

    #[test]
    fn test_send_before_start_fails() {
        let state = AppState::new();
        assert!(send_command(&state, PlayerCommand::Pause).is_err());
        assert!(get_snapshot(&state).unwrap().is_none());
    }

    #[test]
    fn test_start_twice_fails() {
        let state = AppState::new();
        let handle = start_simulation(&state, SimConfig::default(), Pacing::Unpaced).unwrap();
        assert!(start_simulation(&state, SimConfig::default(), Pacing::Unpaced).is_err());

        stop_simulation(&state).unwrap();
        handle.join().unwrap();
    }

    #[test]
    fn test_session_through_loop_thread() {
        let state = AppState::new();
        let handle = start_simulation(&state, SimConfig::default(), Pacing::Unpaced).unwrap();

        wait_for(&state, |s| s.phase == GamePhase::Title);
        send_command(&state, PlayerCommand::StartSession { ship: ShipKind::Cube }).unwrap();
        let playing = wait_for(&state, |s| s.phase == GamePhase::Playing);
        assert_eq!(playing.ship.as_ref().map(|s| s.kind), Some(ShipKind::Cube));

        send_command(&state, PlayerCommand::JumpOut).unwrap();
        wait_for(&state, |s| s.phase == GamePhase::Title);

        stop_simulation(&state).unwrap();
        let summary = handle.join().unwrap();
        assert_eq!(summary.sessions, 1);
        assert_eq!(summary.banked_sessions, 1);
        assert!(send_command(&state, PlayerCommand::Pause).is_err());
    }
}
