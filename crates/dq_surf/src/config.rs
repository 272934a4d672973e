use alloc::string::String;

use dq_reflect::access::Resolver;

/// Settings for a [`Surfer`](crate::Surfer).
///
/// With the `serde` feature this can be read from any configuration format;
/// missing keys take their defaults.
///
/// ```
/// # #[cfg(feature = "serde")] {
/// use dq_surf::{Surfer, SurferConfig};
///
/// let config: SurferConfig = serde_json::from_str(r#"{ "separator": "_" }"#).unwrap();
/// assert_eq!(Surfer::from_config(&config).separator(), "_");
///
/// let config: SurferConfig = serde_json::from_str("{}").unwrap();
/// assert_eq!(config.separator, ".");
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct SurferConfig {
    /// Splits path text into segments. An empty separator keeps the whole
    /// text as one segment.
    pub separator: String,
}

impl Default for SurferConfig {
    fn default() -> Self {
        Self {
            separator: String::from(Resolver::DEFAULT_SEPARATOR),
        }
    }
}
