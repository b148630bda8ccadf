use rulebridge_core::Locator;

/// Percent-encodes one path segment.
pub(crate) fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Escapes the characters that would end a query value early. Everything else, `/` included,
/// is left for the URL parser to normalize.
pub(crate) fn query_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '%' => out.push_str("%25"),
            '&' => out.push_str("%26"),
            '#' => out.push_str("%23"),
            '+' => out.push_str("%2B"),
            '=' => out.push_str("%3D"),
            c => out.push(c),
        }
    }
    out
}

/// Builds the URL of a rule or folder addressed by ID or path.
///
/// - by ID: `{host}/{types}/{id}/{version}`; the version segment is left empty when absent,
///   so the URL ends with a slash after the ID.
/// - by path: `{host}/{types}/?path={path}[&version={version}]`.
/// - neither: `{host}/{types}/`.
pub fn locator_url(host: &str, types: &[&str], locator: &Locator, version: Option<&str>) -> String {
    let mut url = format!("{host}/{}/", types.join("/"));
    match locator {
        Locator::Id(id) => {
            url.push_str(&segment(id));
            url.push('/');
            if let Some(v) = version {
                url.push_str(&segment(v));
            }
        }
        Locator::Path(path) => {
            url.push_str("?path=");
            url.push_str(&query_value(path));
            if let Some(v) = version {
                url.push_str("&version=");
                url.push_str(&query_value(v));
            }
        }
        Locator::Root => {}
    }
    url
}

/// Appends `/{version}` only when a version was supplied.
pub(crate) fn with_optional_version(base: String, version: Option<&str>) -> String {
    match version {
        Some(v) => format!("{base}/{}", segment(v)),
        None => base,
    }
}

/// `?tags=a,b` for a non-empty tag list, nothing otherwise.
pub(crate) fn tags_query(tags: &[String]) -> String {
    if tags.is_empty() {
        return String::new();
    }
    let joined = tags
        .iter()
        .map(|t| query_value(t))
        .collect::<Vec<_>>()
        .join(",");
    format!("?tags={joined}")
}

#[cfg(test)]
mod tests {
    use super::*;

    const MGMT: &str = "https://api.example.com/api";

    #[test]
    fn id_with_and_without_version() {
        let id = Locator::Id("abc".into());
        assert_eq!(locator_url(MGMT, &["rule"], &id, Some("2")), format!("{MGMT}/rule/abc/2"));
        assert_eq!(locator_url(MGMT, &["rule"], &id, None), format!("{MGMT}/rule/abc/"));
    }

    #[test]
    fn path_with_version_and_root() {
        let path = Locator::Path("/Folder/Rule".into());
        assert_eq!(
            locator_url(MGMT, &["rule"], &path, Some("3")),
            format!("{MGMT}/rule/?path=/Folder/Rule&version=3")
        );
        assert_eq!(
            locator_url(MGMT, &["folder", "export"], &Locator::Root, None),
            format!("{MGMT}/folder/export/")
        );
    }

    #[test]
    fn query_values_keep_slashes_but_escape_separators() {
        assert_eq!(query_value("/a b/c&d"), "/a b/c%26d");
        assert_eq!(tags_query(&[]), "");
        assert_eq!(tags_query(&["x".into(), "y".into()]), "?tags=x,y");
    }

    #[test]
    fn segments_are_encoded() {
        assert_eq!(segment("my rule"), "my%20rule");
        assert_eq!(with_optional_version("u".into(), Some("1")), "u/1");
        assert_eq!(with_optional_version("u".into(), None), "u");
    }
}
