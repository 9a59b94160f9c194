//! Round-trip codec for CloudWatch Logs Insights console URLs.
//!
//! The console packs the whole query state into the URL fragment as a
//! tilde-delimited pseudo-map behind a custom percent-style escape layer.
//! [`parse_insights_url`] unpacks that into a [`QueryDescriptor`];
//! [`build_insights_url`] packs a descriptor back into a URL the console
//! accepts. Both are pure: a caller decodes an existing URL, edits fields,
//! and re-encodes.

mod decode;
mod encode;
mod error;
mod escape;

pub use decode::parse_insights_url;
pub use encode::build_insights_url;
pub use error::MalformedUrlError;
pub use escape::{decode_component, encode_component};

use serde::{Deserialize, Serialize};

/// Query state carried by a Logs Insights console URL.
///
/// `region` is the only field the format guarantees. Everything else is
/// optional and omitted from the URL (and from JSON) when absent.
/// `source_groups` keeps the log groups in the order the URL lists them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryDescriptor {
    pub region: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor_string: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_groups: Option<Vec<String>>,
}
