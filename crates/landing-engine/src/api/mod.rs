pub mod config;
pub mod error;
pub mod landing;
pub mod stage;

pub use config::{ChoreographyConfig, IdleConfig, IdleTiming, LandingConfig, SceneConfig};
pub use error::{LandingError, Result};
pub use landing::Landing;
pub use stage::Stage;
