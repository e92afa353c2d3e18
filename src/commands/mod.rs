mod config;
mod assistant;
mod records;
mod profile;
mod vitals;
mod transcription;

pub use config::*;
pub use assistant::*;
pub use records::*;
pub use profile::*;
pub use vitals::*;
pub use transcription::*;
