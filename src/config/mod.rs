pub mod traits;
pub mod search;
pub mod evolution;
pub mod manager;

pub use manager::{ConfigManager, AppConfig};
pub use search::SearchConfig;
pub use evolution::{EvolutionConfig, SelectionMethod};
pub use traits::ConfigSection;
