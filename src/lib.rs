pub mod config;
pub mod error;
pub mod game;
pub mod runtime;

pub use config::SimConfig;
pub use error::ConfigError;
pub use game::session::GameSession;
pub use game::snake::SnakeBody;
pub use game::types::Point;
