//! Descriptor → URL building.

use super::escape::encode_component;
use super::QueryDescriptor;

/// Builds a Logs Insights console URL from a descriptor.
///
/// Never fails and never validates: an empty region yields a URL the console
/// will reject, not an error here. Scalars go out in the fixed order the
/// console's reader expects; absent and empty fields are skipped without
/// leaving a placeholder behind.
pub fn build_insights_url(descriptor: &QueryDescriptor) -> String {
    let mut url = format!(
        "https://{}.console.aws.amazon.com/cloudwatch/home?region={}#logsV2:logs-insights",
        descriptor.region,
        encode_component(&descriptor.region)
    );

    // `?queryDetail=` pre-escaped the way the console writes it.
    url.push_str("$3FqueryDetail$3D~(");

    push_scalar(&mut url, "end", descriptor.end.as_deref());
    push_scalar(&mut url, "start", descriptor.start.as_deref());
    push_scalar(&mut url, "timeType", descriptor.time_type.as_deref());
    push_scalar(&mut url, "tz", descriptor.time_zone.as_deref());
    push_scalar(&mut url, "editorString", descriptor.editor_string.as_deref());
    push_scalar(&mut url, "queryId", descriptor.query_id.as_deref());

    if let Some(groups) = descriptor.source_groups.as_deref() {
        if !groups.is_empty() {
            url.push_str("source~(");
            for group in groups {
                url.push_str("~'");
                url.push_str(&encode_component(group));
            }
            url.push(')');
        }
    }

    url.push(')');
    url
}

/// `key~'value~`, skipped entirely when the value is absent or empty.
fn push_scalar(url: &mut String, key: &str, value: Option<&str>) {
    let value = match value {
        Some(v) if !v.is_empty() => v,
        _ => return,
    };
    url.push_str(key);
    url.push_str("~'");
    url.push_str(&encode_component(value));
    url.push('~');
}
