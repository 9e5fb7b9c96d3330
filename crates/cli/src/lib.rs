pub mod config;
pub mod handler;
pub mod http;

pub use config::SkillConfig;
pub use handler::SkillHandler;
