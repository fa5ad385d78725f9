use duel_engine::config::Validate;
use duel_engine::game::CompetitionSettings;
use serde::{Deserialize, Serialize};

use crate::controls::parse_key;

const CONFIG_FILE_NAME: &str = "snake_duel_config.yaml";

pub fn default_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

/// Key names accepted: single characters ("w"), "up", "down", "left",
/// "right", "space", "enter".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub up: String,
    pub down: String,
    pub left: String,
    pub right: String,
    pub fire: String,
}

impl KeyBindings {
    pub fn all(&self) -> [&str; 5] {
        [&self.up, &self.down, &self.left, &self.right, &self.fire]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub name: String,
    pub controls: KeyBindings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub competition: CompetitionSettings,
    pub player_one: PlayerProfile,
    pub player_two: PlayerProfile,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            competition: CompetitionSettings::default(),
            player_one: PlayerProfile {
                name: "Player One".to_string(),
                controls: KeyBindings {
                    up: "w".to_string(),
                    down: "s".to_string(),
                    left: "a".to_string(),
                    right: "d".to_string(),
                    fire: "e".to_string(),
                },
            },
            player_two: PlayerProfile {
                name: "Player Two".to_string(),
                controls: KeyBindings {
                    up: "up".to_string(),
                    down: "down".to_string(),
                    left: "left".to_string(),
                    right: "right".to_string(),
                    fire: "space".to_string(),
                },
            },
        }
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<(), String> {
        self.competition.validate()?;
        for profile in [&self.player_one, &self.player_two] {
            if profile.name.trim().is_empty() {
                return Err("Player name must not be empty".to_string());
            }
            for key in profile.controls.all() {
                parse_key(key)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duel_engine::config::ConfigFile;

    fn temp_config_path() -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        let unique: u32 = rand::random();
        path.push(format!("snake_duel_config_test_{}.yaml", unique));
        path
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(ClientConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_config_round_trips_through_file() {
        let path = temp_config_path();
        let file = ConfigFile::new(&path);
        let config = ClientConfig::default();

        file.save(&config).unwrap();
        let loaded: ClientConfig = file.load_or_default().unwrap();
        assert_eq!(config, loaded);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let file = ConfigFile::new("no_such_snake_duel_config.yaml");
        let loaded: ClientConfig = file.load_or_default().unwrap();
        assert_eq!(loaded, ClientConfig::default());
    }

    #[test]
    fn test_unknown_key_name_is_rejected() {
        let mut config = ClientConfig::default();
        config.player_one.controls.fire = "super".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_player_name_is_rejected() {
        let mut config = ClientConfig::default();
        config.player_two.name = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_competition_settings_are_rejected() {
        let mut config = ClientConfig::default();
        config.competition.grid_cells = 3;
        assert!(config.validate().is_err());
    }
}
