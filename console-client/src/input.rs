use std::thread::{self, JoinHandle};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use duel_engine::game::ControlCommand;
use tokio::sync::mpsc::UnboundedSender;

use crate::controls::ControlMap;

/// Blocking keyboard loop on its own thread, bound once for the whole
/// process. Esc or Ctrl+C signals `quit` instead of producing a command.
pub fn spawn_input_thread(
    map: ControlMap,
    commands: UnboundedSender<ControlCommand>,
    quit: UnboundedSender<()>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        loop {
            let event = match event::read() {
                Ok(event) => event,
                Err(_) => break,
            };
            let Event::Key(key) = event else { continue };
            if key.kind == KeyEventKind::Release {
                continue;
            }

            let ctrl_c =
                key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
            if key.code == KeyCode::Esc || ctrl_c {
                let _ = quit.send(());
                break;
            }

            if let Some(control) = map.lookup(key.code)
                && commands.send(control).is_err()
            {
                break;
            }
        }
    })
}
