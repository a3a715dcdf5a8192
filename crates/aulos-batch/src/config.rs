#![forbid(unsafe_code)]

use std::time::Duration;

use aulos_consumer::Track;

/// Configuration for [`BatchProcessor`](crate::BatchProcessor).
#[derive(Clone, Debug)]
pub struct BatchConfig {
    /// Prefix prepended verbatim to the `YYYY/MM/DD/` date path.
    pub base_path: String,
    /// Content type attached to stored artifacts.
    pub content_type: String,
    /// Attribute holding the processing flag (`"1"` process, `"0"` done).
    pub flag_attribute: String,
    /// Attribute key prefix selecting provenance tags.
    pub tag_prefix: String,
    /// Which track's artifact is stored. The other track is still produced
    /// and packaged, just not stored.
    pub stored_track: Track,
    /// Per-record consumption deadline. `None` (the default) waits
    /// indefinitely, which on a live stream whose producer never emits the
    /// end fragment means waiting forever.
    pub record_timeout: Option<Duration>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            base_path: String::new(),
            content_type: "audio/x-wav".to_string(),
            flag_attribute: "vm_flag".to_string(),
            tag_prefix: "vm_".to_string(),
            stored_track: Track::FromCaller,
            record_timeout: None,
        }
    }
}

impl BatchConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    #[must_use]
    pub fn with_flag_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.flag_attribute = attribute.into();
        self
    }

    #[must_use]
    pub fn with_tag_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.tag_prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_stored_track(mut self, track: Track) -> Self {
        self.stored_track = track;
        self
    }

    #[must_use]
    pub fn with_record_timeout(mut self, timeout: Duration) -> Self {
        self.record_timeout = Some(timeout);
        self
    }
}
