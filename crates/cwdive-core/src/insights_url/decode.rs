//! URL → descriptor parsing.
//!
//! Field extraction walks the decoded pseudo-map with plain substring
//! tokenization. A candidate match mirrors what the console's reader
//! accepts: a scalar capture must be non-empty and closed by `~`, otherwise
//! the scan moves on to the next occurrence of the key.

use super::escape::decode_component;
use super::{MalformedUrlError, QueryDescriptor};

/// Parses a Logs Insights console URL into a [`QueryDescriptor`].
///
/// Fails only when a structural marker is missing; optional fields that are
/// absent or empty decode to `None`, never to an empty string.
pub fn parse_insights_url(url: &str) -> Result<QueryDescriptor, MalformedUrlError> {
    let region = extract_region(url).ok_or(MalformedUrlError::MissingRegion)?;

    let fragment = url
        .splitn(3, '#')
        .nth(1)
        .ok_or(MalformedUrlError::MissingFragment)?;
    let fragment = decode_component(fragment);

    let detail = query_detail(&fragment).ok_or(MalformedUrlError::MissingQueryDetail)?;

    Ok(QueryDescriptor {
        region: region.to_string(),
        end: scalar_field(detail, "end"),
        start: scalar_field(detail, "start"),
        time_type: scalar_field(detail, "timeType"),
        time_zone: scalar_field(detail, "tz"),
        editor_string: scalar_field(detail, "editorString"),
        query_id: scalar_field(detail, "queryId"),
        source_groups: source_groups(detail),
    })
}

/// Region value: the non-`&` run after `region=`, up to its last `#`.
fn extract_region(url: &str) -> Option<&str> {
    for (idx, _) in url.match_indices("region=") {
        let run = &url[idx + "region=".len()..];
        let run = &run[..run.find('&').unwrap_or(run.len())];
        if let Some(hash) = run.rfind('#') {
            if hash > 0 {
                return Some(&run[..hash]);
            }
        }
    }
    None
}

/// Payload after `queryDetail=`, cut at the first `)`.
///
/// A field value containing a literal `)` is truncated there; the format
/// reserves the character and the console never escapes around it.
fn query_detail(fragment: &str) -> Option<&str> {
    for (idx, _) in fragment.match_indices("queryDetail=") {
        let rest = &fragment[idx + "queryDetail=".len()..];
        let end = rest.find(')').unwrap_or(rest.len());
        if end > 0 {
            return Some(&rest[..end]);
        }
    }
    None
}

/// First `<key>~'<value>~` entry with a non-empty value.
///
/// The captured value is escape-decoded a second time: the console
/// double-encodes scalars relative to the fragment.
fn scalar_field(detail: &str, key: &str) -> Option<String> {
    let marker = format!("{key}~'");
    for (idx, _) in detail.match_indices(&marker) {
        let rest = &detail[idx + marker.len()..];
        match rest.find('~') {
            Some(0) | None => continue,
            Some(tilde) => return Some(decode_component(&rest[..tilde])),
        }
    }
    None
}

/// Ordered log-group list from `source~(...)`.
///
/// An absent marker, or a body with no `~'entry` items, decodes to `None`.
fn source_groups(detail: &str) -> Option<Vec<String>> {
    for (idx, _) in detail.match_indices("source~(") {
        let rest = &detail[idx + "source~(".len()..];
        let body = &rest[..rest.find(')').unwrap_or(rest.len())];
        if body.is_empty() {
            continue;
        }
        let entries = source_entries(body);
        return if entries.is_empty() {
            None
        } else {
            Some(entries)
        };
    }
    None
}

/// Entries are `~'<value>` runs packed back to back; a value stops at the
/// next `~` or `'`.
fn source_entries(body: &str) -> Vec<String> {
    let mut entries = Vec::new();
    let mut rest = body;
    while let Some(idx) = rest.find("~'") {
        let after = &rest[idx + 2..];
        let len = after.find(['~', '\'']).unwrap_or(after.len());
        if len > 0 {
            entries.push(decode_component(&after[..len]));
        }
        rest = &after[len..];
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_URL: &str = "https://us-west-2.console.aws.amazon.com/cloudwatch/home?region=us-west-2#logsV2:logs-insights$3FqueryDetail$3D~(end~'2021-11-27T04*3a59*3a59.000Z~start~'2021-11-26T05*3a00*3a00.000Z~timeType~'ABSOLUTE~tz~'LOCAL~editorString~'fields*20*40timestamp~queryId~'abc123~source~(~'*2faws*2flambda*2fFn1~'*2faws*2flambda*2fFn2))";

    #[test]
    fn decode_example_url() {
        let d = parse_insights_url(EXAMPLE_URL).unwrap();
        assert_eq!(d.region, "us-west-2");
        assert_eq!(d.end.as_deref(), Some("2021-11-27T04:59:59.000Z"));
        assert_eq!(d.start.as_deref(), Some("2021-11-26T05:00:00.000Z"));
        assert_eq!(d.time_type.as_deref(), Some("ABSOLUTE"));
        assert_eq!(d.time_zone.as_deref(), Some("LOCAL"));
        assert_eq!(d.editor_string.as_deref(), Some("fields @timestamp"));
        assert_eq!(d.query_id.as_deref(), Some("abc123"));
        assert_eq!(
            d.source_groups,
            Some(vec![
                "/aws/lambda/Fn1".to_string(),
                "/aws/lambda/Fn2".to_string()
            ])
        );
    }

    #[test]
    fn decode_dollar_and_star_lead_ins_agree() {
        let star = parse_insights_url(EXAMPLE_URL).unwrap();
        let dollar = parse_insights_url(&EXAMPLE_URL.replace('*', "$")).unwrap();
        assert_eq!(star, dollar);
    }

    #[test]
    fn missing_region_is_fatal() {
        let err = parse_insights_url("https://example.com/cloudwatch/home#logsV2:logs-insights")
            .unwrap_err();
        assert_eq!(err, MalformedUrlError::MissingRegion);
    }

    #[test]
    fn region_without_fragment_is_fatal() {
        let err = parse_insights_url("https://example.com/cloudwatch/home?region=us-east-1")
            .unwrap_err();
        assert_eq!(err, MalformedUrlError::MissingRegion);
    }

    #[test]
    fn missing_query_detail_is_fatal() {
        let err = parse_insights_url(
            "https://example.com/cloudwatch/home?region=us-east-1#logsV2:logs-insights",
        )
        .unwrap_err();
        assert_eq!(err, MalformedUrlError::MissingQueryDetail);
    }

    #[test]
    fn empty_scalar_decodes_as_absent() {
        let url = "https://example.com/home?region=us-east-1#x$3FqueryDetail$3D~(end~'~start~'2024-01-01T00*3a00*3a00.000Z~)";
        let d = parse_insights_url(url).unwrap();
        assert_eq!(d.end, None);
        assert_eq!(d.start.as_deref(), Some("2024-01-01T00:00:00.000Z"));
    }

    #[test]
    fn missing_source_marker_is_absent() {
        let url = "https://example.com/home?region=us-east-1#x$3FqueryDetail$3D~(queryId~'q1~)";
        let d = parse_insights_url(url).unwrap();
        assert_eq!(d.query_id.as_deref(), Some("q1"));
        assert_eq!(d.source_groups, None);
    }

    #[test]
    fn source_order_is_preserved() {
        let url = "https://example.com/home?region=us-east-1#x$3FqueryDetail$3D~(source~(~'C~'A~'B))";
        let d = parse_insights_url(url).unwrap();
        assert_eq!(
            d.source_groups,
            Some(vec!["C".to_string(), "A".to_string(), "B".to_string()])
        );
    }
}
