pub mod clubs;
pub mod engine;
pub mod storage;
pub mod types;
pub mod window;

pub use clubs::{ClubSet, STANDARD_CLUBS};
pub use engine::{record_distances, remove_distances};
pub use storage::{get_data_path, StatsStore, DATA_FILE_NAME};
pub use types::{round2, ClubStats, StatsSummary};
pub use window::RollingWindow;
