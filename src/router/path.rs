use crate::error::RouteError;

/// Strips at most one leading and one trailing `/`.
fn trim(path: &str) -> &str {
    let path = path.strip_prefix('/').unwrap_or(path);
    path.strip_suffix('/').unwrap_or(path)
}

/// Splits a route path into its segments for registration.
///
/// The bare root `/` never reaches this function; the router handles it before
/// segmentation. An empty path or any empty segment is rejected.
pub(crate) fn split_path(path: &str) -> Result<Vec<&str>, RouteError> {
    if path.is_empty() {
        return Err(RouteError::EmptyPath);
    }

    let segments: Vec<&str> = trim(path).split('/').collect();
    if segments.iter().any(|s| s.is_empty()) {
        return Err(RouteError::EmptySegment {
            path: path.to_string(),
        });
    }

    Ok(segments)
}

/// Same split as `split_path`, without validation.
///
/// Empty segments are yielded as-is; no child is ever keyed by `""` so they
/// simply fail to match.
pub(crate) fn segments(path: &str) -> impl Iterator<Item = &str> {
    trim(path).split('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_slash() {
        assert_eq!(split_path("/user/home").unwrap(), vec!["user", "home"]);
        assert_eq!(split_path("/user").unwrap(), vec!["user"]);
    }

    #[test]
    fn leading_slash_is_optional() {
        assert_eq!(split_path("user").unwrap(), vec!["user"]);
        assert_eq!(split_path("order/detail").unwrap(), vec!["order", "detail"]);
    }

    #[test]
    fn single_trailing_slash_is_dropped() {
        assert_eq!(split_path("order/").unwrap(), vec!["order"]);
        assert_eq!(split_path("/user/home/").unwrap(), vec!["user", "home"]);
    }

    #[test]
    fn rejects_empty_path() {
        assert_eq!(split_path(""), Err(RouteError::EmptyPath));
    }

    #[test]
    fn rejects_empty_segments() {
        for path in &["/a//b", "/a//", "//", "///", "a//b"] {
            assert_eq!(
                split_path(path),
                Err(RouteError::EmptySegment {
                    path: path.to_string()
                }),
                "{}",
                path
            );
        }
    }

    #[test]
    fn lenient_split_keeps_empty_segments() {
        let got: Vec<&str> = segments("/a//b").collect();
        assert_eq!(got, vec!["a", "", "b"]);
        let got: Vec<&str> = segments("").collect();
        assert_eq!(got, vec![""]);
    }

    #[test]
    fn lenient_split_drops_single_trailing_slash() {
        let got: Vec<&str> = segments("/user/home/").collect();
        assert_eq!(got, vec!["user", "home"]);
        let got: Vec<&str> = segments("/user//").collect();
        assert_eq!(got, vec!["user", ""]);
    }

    #[test]
    fn segmentation_is_case_sensitive() {
        assert_eq!(split_path("/User").unwrap(), vec!["User"]);
    }
}
