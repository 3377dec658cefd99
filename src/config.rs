//! Runtime configuration from environment variables.
//!
//! - `HOST` (default `0.0.0.0`) and `PORT` (default `8080`) for the web server.
//! - `SWISS_ALLOW_BYES` (`true`/`false`, default `false`) enables byes for odd player counts.
//! - `SWISS_TIE_BREAK` (`solkoff` or `player_id`, default `solkoff`).
//! - `SWISS_PLAYERS_CSV` / `SWISS_MATCHES_CSV` (optional) seed the store at startup.
//!
//! Unparseable values fall back to the default with a warning.

use crate::logic::PairingOptions;
use crate::models::TieBreak;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub allow_byes: bool,
    #[serde(default)]
    pub tie_break: TieBreak,
    #[serde(default)]
    pub players_csv: Option<PathBuf>,
    #[serde(default)]
    pub matches_csv: Option<PathBuf>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            allow_byes: false,
            tie_break: TieBreak::default(),
            players_csv: None,
            matches_csv: None,
        }
    }
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup (used by `from_env` and tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(host) = lookup("HOST").filter(|h| !h.trim().is_empty()) {
            config.host = host;
        }
        if let Some(port) = lookup("PORT") {
            match port.parse() {
                Ok(p) => config.port = p,
                Err(_) => log::warn!("Ignoring invalid PORT '{}'", port),
            }
        }
        if let Some(flag) = lookup("SWISS_ALLOW_BYES") {
            match parse_flag(&flag) {
                Some(b) => config.allow_byes = b,
                None => log::warn!("Ignoring invalid SWISS_ALLOW_BYES '{}'", flag),
            }
        }
        if let Some(tb) = lookup("SWISS_TIE_BREAK") {
            match tb.parse() {
                Ok(t) => config.tie_break = t,
                Err(e) => log::warn!("Ignoring SWISS_TIE_BREAK: {}", e),
            }
        }
        config.players_csv = lookup("SWISS_PLAYERS_CSV").map(PathBuf::from);
        config.matches_csv = lookup("SWISS_MATCHES_CSV").map(PathBuf::from);
        config
    }

    pub fn pairing_options(&self) -> PairingOptions {
        PairingOptions {
            allow_bye: self.allow_byes,
        }
    }
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config, Config::default());
        assert_eq!(config.port, 8080);
        assert!(!config.pairing_options().allow_bye);
        assert_eq!(config.tie_break, TieBreak::Solkoff);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "9000"),
            ("SWISS_ALLOW_BYES", "yes"),
            ("SWISS_TIE_BREAK", "player_id"),
            ("SWISS_PLAYERS_CSV", "data/players.csv"),
        ]));
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9000);
        assert!(config.allow_byes);
        assert_eq!(config.tie_break, TieBreak::PlayerId);
        assert_eq!(config.players_csv, Some(PathBuf::from("data/players.csv")));
        assert_eq!(config.matches_csv, None);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = Config::from_lookup(lookup(&[
            ("PORT", "eighty"),
            ("SWISS_ALLOW_BYES", "maybe"),
            ("SWISS_TIE_BREAK", "coin_flip"),
        ]));
        assert_eq!(config, Config::default());
    }
}
