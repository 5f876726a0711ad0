use serde::Deserialize;
use std::env;
use std::time::Duration;

use crate::field::FieldParams;

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

fn parse_env_opt<T: std::str::FromStr>(var: &str) -> Option<T>
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Ignoring.", val, var, e);
                None
            }
        },
        Err(_) => None,
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub chat: ChatConfig,
    pub field: FieldConfig,
    pub contact: ContactConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Chat widget behaviour
#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    /// Simulated latency between a question and its canned answer
    pub composing_delay_ms: u64,
    pub max_sessions: usize,
    pub max_message_chars: usize,
    /// Questions a single session may have waiting for an answer
    pub max_pending_replies: usize,
    /// Transcript length at which a session stops accepting questions
    pub max_transcript_messages: usize,
}

impl ChatConfig {
    pub fn composing_delay(&self) -> Duration {
        Duration::from_millis(self.composing_delay_ms)
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            composing_delay_ms: 800,
            max_sessions: 1000,
            max_message_chars: 2000,
            max_pending_replies: 5,
            max_transcript_messages: 200,
        }
    }
}

/// Particle background generation and animation
#[derive(Debug, Clone, Deserialize)]
pub struct FieldConfig {
    pub count: usize,
    pub bounds: f32,
    pub connection_distance: f32,
    pub max_connections: usize,
    pub max_source_nodes: usize,
    pub max_per_source: usize,
    /// Fixed seed for reproducible backgrounds; entropy when unset.
    pub seed: Option<u64>,
    pub tick_ms: u64,
    pub rotation_x_divisor: f64,
    pub rotation_y_divisor: f64,
}

impl FieldConfig {
    pub fn params(&self) -> FieldParams {
        FieldParams {
            count: self.count,
            bounds: self.bounds,
            connection_distance: self.connection_distance,
            max_connections: self.max_connections,
            max_source_nodes: self.max_source_nodes,
            max_per_source: self.max_per_source,
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        let params = FieldParams::default();
        Self {
            count: params.count,
            bounds: params.bounds,
            connection_distance: params.connection_distance,
            max_connections: params.max_connections,
            max_source_nodes: params.max_source_nodes,
            max_per_source: params.max_per_source,
            seed: None,
            tick_ms: 16,
            rotation_x_divisor: 20.0,
            rotation_y_divisor: 25.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactConfig {
    /// Simulated delivery latency before a submission is acknowledged
    pub ack_delay_ms: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self { ack_delay_ms: 2000 }
    }
}

impl Default for Config {
    fn default() -> Self {
        let chat = ChatConfig::default();
        let field = FieldConfig::default();
        let contact = ContactConfig::default();

        Self {
            server: ServerConfig {
                host: env::var("FOLIO_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env_or("FOLIO_PORT", 3000),
            },
            chat: ChatConfig {
                composing_delay_ms: parse_env_or("CHAT_COMPOSING_DELAY_MS", chat.composing_delay_ms),
                max_sessions: parse_env_or("CHAT_MAX_SESSIONS", chat.max_sessions),
                max_message_chars: parse_env_or("CHAT_MAX_MESSAGE_CHARS", chat.max_message_chars),
                max_pending_replies: parse_env_or(
                    "CHAT_MAX_PENDING_REPLIES",
                    chat.max_pending_replies,
                ),
                max_transcript_messages: parse_env_or(
                    "CHAT_MAX_TRANSCRIPT_MESSAGES",
                    chat.max_transcript_messages,
                ),
            },
            field: FieldConfig {
                count: parse_env_or("FIELD_COUNT", field.count),
                bounds: parse_env_or("FIELD_BOUNDS", field.bounds),
                connection_distance: parse_env_or(
                    "FIELD_CONNECTION_DISTANCE",
                    field.connection_distance,
                ),
                max_connections: parse_env_or("FIELD_MAX_CONNECTIONS", field.max_connections),
                max_source_nodes: parse_env_or("FIELD_MAX_SOURCE_NODES", field.max_source_nodes),
                max_per_source: parse_env_or("FIELD_MAX_PER_SOURCE", field.max_per_source),
                seed: parse_env_opt("FIELD_SEED"),
                tick_ms: parse_env_or("FIELD_TICK_MS", field.tick_ms),
                rotation_x_divisor: parse_env_or(
                    "FIELD_ROTATION_X_DIVISOR",
                    field.rotation_x_divisor,
                ),
                rotation_y_divisor: parse_env_or(
                    "FIELD_ROTATION_Y_DIVISOR",
                    field.rotation_y_divisor,
                ),
            },
            contact: ContactConfig {
                ack_delay_ms: parse_env_or("CONTACT_ACK_DELAY_MS", contact.ack_delay_ms),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_chat_config_defaults() {
        std::env::remove_var("CHAT_COMPOSING_DELAY_MS");
        std::env::remove_var("CHAT_MAX_PENDING_REPLIES");
        std::env::remove_var("CHAT_MAX_TRANSCRIPT_MESSAGES");
        let config = Config::default();
        assert_eq!(config.chat.composing_delay_ms, 800);
        assert_eq!(config.chat.max_pending_replies, 5);
        assert_eq!(config.chat.max_transcript_messages, 200);
        assert_eq!(config.chat.composing_delay(), Duration::from_millis(800));
    }

    #[test]
    #[serial]
    fn test_field_config_defaults_match_reference_field() {
        for var in [
            "FIELD_COUNT",
            "FIELD_BOUNDS",
            "FIELD_CONNECTION_DISTANCE",
            "FIELD_MAX_CONNECTIONS",
            "FIELD_MAX_SOURCE_NODES",
            "FIELD_MAX_PER_SOURCE",
            "FIELD_SEED",
        ] {
            std::env::remove_var(var);
        }

        let config = Config::default();
        let params = config.field.params();
        assert_eq!(params.count, 3000);
        assert_eq!(params.bounds, 15.0);
        assert_eq!(params.connection_distance, 2.0);
        assert_eq!(params.max_connections, 800);
        assert_eq!(params.max_source_nodes, 150);
        assert_eq!(params.max_per_source, 5);
        assert!(config.field.seed.is_none());
        assert_eq!(config.field.rotation_x_divisor, 20.0);
        assert_eq!(config.field.rotation_y_divisor, 25.0);
    }

    #[test]
    #[serial]
    fn test_field_config_from_env() {
        std::env::set_var("FIELD_COUNT", "500");
        std::env::set_var("FIELD_SEED", "42");

        let config = Config::default();
        assert_eq!(config.field.count, 500);
        assert_eq!(config.field.seed, Some(42));

        std::env::remove_var("FIELD_COUNT");
        std::env::remove_var("FIELD_SEED");
    }

    #[test]
    #[serial]
    fn test_invalid_seed_is_ignored() {
        std::env::set_var("FIELD_SEED", "not-a-number");
        let config = Config::default();
        assert!(config.field.seed.is_none());
        std::env::remove_var("FIELD_SEED");
    }

    #[test]
    #[serial]
    fn test_parse_env_or_valid_value() {
        std::env::set_var("__TEST_PARSE_PORT", "8080");
        let result: u16 = parse_env_or("__TEST_PARSE_PORT", 3000);
        assert_eq!(result, 8080);
        std::env::remove_var("__TEST_PARSE_PORT");
    }

    #[test]
    fn test_tick_interval_never_zero() {
        let config = FieldConfig {
            tick_ms: 0,
            ..FieldConfig::default()
        };
        assert_eq!(config.tick_interval(), Duration::from_millis(1));
    }
}
