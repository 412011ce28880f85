//! Settings construction from configuration.
//!
//! The configuration source is a generic string-keyed mapping (a TOML table);
//! how that mapping was produced is the caller's business. Both required keys
//! must be present:
//!
//! ```
//! use device_comms::config::SerialSettings;
//!
//! let config = r#"
//!     port = "/dev/ttyUSB0"
//!     baud_rate = 115200
//! "#
//! .parse()
//! .unwrap();
//!
//! let settings = SerialSettings::from_config(&config).unwrap();
//! assert_eq!(settings.baud_rate, 115200);
//! ```

mod error;
mod settings;

pub use error::{ConfigError, ConfigResult};
pub use settings::{SerialSettings, DEFAULT_BAUD_RATE};
