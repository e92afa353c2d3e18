mod chat;
mod record;
mod profile;
mod vitals;
mod transcription;

pub use chat::*;
pub use record::*;
pub use profile::*;
pub use vitals::*;
pub use transcription::*;
