// Public API
pub use random_strategy::RandomBotStrategy;
pub use types::BotStrategy;

// Internal modules
mod random_strategy;
mod types;
