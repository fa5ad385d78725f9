use crossterm::event::KeyCode;
use duel_engine::game::{Command, ControlCommand, Direction, PlayerSlot};

use crate::config::{ClientConfig, KeyBindings};

/// Config key name to the key code crossterm reports.
pub fn parse_key(name: &str) -> Result<KeyCode, String> {
    let lower = name.to_lowercase();
    match lower.as_str() {
        "up" => Ok(KeyCode::Up),
        "down" => Ok(KeyCode::Down),
        "left" => Ok(KeyCode::Left),
        "right" => Ok(KeyCode::Right),
        "space" => Ok(KeyCode::Char(' ')),
        "enter" => Ok(KeyCode::Enter),
        _ => {
            let mut chars = lower.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(KeyCode::Char(c)),
                _ => Err(format!("Unknown key name: {}", name)),
            }
        }
    }
}

/// Both players' bindings flattened into one lookup table, built once at
/// startup. Respawns never rebind anything.
pub struct ControlMap {
    entries: Vec<(KeyCode, ControlCommand)>,
}

impl ControlMap {
    pub fn from_config(config: &ClientConfig) -> Result<Self, String> {
        let mut entries = Vec::new();
        for (slot, bindings) in [
            (PlayerSlot::One, &config.player_one.controls),
            (PlayerSlot::Two, &config.player_two.controls),
        ] {
            Self::add_bindings(&mut entries, slot, bindings)?;
        }

        for (index, (code, _)) in entries.iter().enumerate() {
            if entries[index + 1..].iter().any(|(other, _)| other == code) {
                return Err(format!("Key bound twice: {:?}", code));
            }
        }

        Ok(Self { entries })
    }

    fn add_bindings(
        entries: &mut Vec<(KeyCode, ControlCommand)>,
        slot: PlayerSlot,
        bindings: &KeyBindings,
    ) -> Result<(), String> {
        let mapping = [
            (&bindings.up, Command::Turn(Direction::North)),
            (&bindings.down, Command::Turn(Direction::South)),
            (&bindings.left, Command::Turn(Direction::West)),
            (&bindings.right, Command::Turn(Direction::East)),
            (&bindings.fire, Command::Fire),
        ];
        for (name, command) in mapping {
            entries.push((parse_key(name)?, ControlCommand { slot, command }));
        }
        Ok(())
    }

    pub fn lookup(&self, code: KeyCode) -> Option<ControlCommand> {
        let normalized = match code {
            KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
            other => other,
        };
        self.entries
            .iter()
            .find(|(bound, _)| *bound == normalized)
            .map(|(_, control)| *control)
    }
}
