pub mod error;
pub mod settings;
pub mod traits;

pub use error::{CurveError, Result};
pub use settings::TrackSettings;
pub use traits::Validate;
