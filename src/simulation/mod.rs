//! Simulation lifecycle built from independent pieces: seeding, centering,
//! pacing and rendering

pub mod centering;
pub mod driver;
pub mod pacer;
pub mod seed;

pub use centering::center_on_live_cells;
pub use driver::Simulation;
pub use pacer::{Control, KeyboardPacer, Pacer, SleepPacer};
pub use seed::SeedSource;
