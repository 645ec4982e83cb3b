//! Route paths and URL path helpers.

use regex::Regex;
use std::sync::LazyLock;

pub const LOGIN: &str = "/login";
pub const ROOT: &str = "/";
pub const WORK_ONE: &str = "/works/workOne";
pub const WORK_TWO: &str = "/works/workTwo";
pub const USER_AVATAR: &str = "/user/avatar";
pub const USER_PASSWORD: &str = "/user/password";
pub const USER_PROFILE: &str = "/user/profile";

/// Where `/` lands.
pub const HOME: &str = WORK_ONE;

// Unreserved, sub-delims, ':' '@' and percent escapes (RFC 3986 path characters).
static PATH_SYNTAX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/[A-Za-z0-9\-._~!$&'()*+,;=:@%/]*$").expect("path pattern is valid")
});

/// Drops the query string and fragment from a location.
pub fn strip_query(location: &str) -> &str {
    location
        .find(['?', '#'])
        .map_or(location, |end| &location[..end])
}

/// Removes trailing slashes, keeping `/` itself.
pub fn trim_trailing(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() && path.starts_with('/') {
        ROOT
    } else {
        trimmed
    }
}

/// Canonical form used for matching: no query, no fragment, no trailing slash.
pub fn normalize(location: &str) -> &str {
    trim_trailing(strip_query(location))
}

pub fn is_well_formed(path: &str) -> bool {
    PATH_SYNTAX.is_match(path)
}

/// Normalizes a history base such as `app` or `/app` into `/app/`.
pub fn normalize_base(base: &str) -> String {
    let inner = base.trim().trim_matches('/');
    if inner.is_empty() {
        ROOT.to_string()
    } else {
        format!("/{inner}/")
    }
}

/// Removes a normalized `base` prefix from `location`.
///
/// Locations outside the base are returned unchanged.
pub fn strip_base(location: &str, base: &str) -> String {
    if base == ROOT {
        return location.to_string();
    }
    if let Some(rest) = location.strip_prefix(base) {
        return format!("/{rest}");
    }
    let bare = base.trim_end_matches('/');
    match location.strip_prefix(bare) {
        Some(rest) if rest.is_empty() || rest.starts_with(['?', '#']) => format!("/{rest}"),
        _ => location.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/user/avatar", "/user/avatar")]
    #[case("/user/avatar/", "/user/avatar")]
    #[case("/user/avatar?tab=1", "/user/avatar")]
    #[case("/user/avatar#top", "/user/avatar")]
    #[case("/", "/")]
    #[case("//", "/")]
    #[case("/?next=/login", "/")]
    fn normalizes_locations(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize(input), expected);
    }

    #[rstest]
    #[case("/works/workOne", true)]
    #[case("/user/%E2%9C%93", true)]
    #[case("works/workOne", false)]
    #[case("", false)]
    #[case("/with space", false)]
    #[case("/back\\slash", false)]
    fn checks_path_syntax(#[case] path: &str, #[case] ok: bool) {
        assert_eq!(is_well_formed(path), ok);
    }

    #[rstest]
    #[case("", "/")]
    #[case("/", "/")]
    #[case("app", "/app/")]
    #[case("/app", "/app/")]
    #[case("/nested/app/", "/nested/app/")]
    fn normalizes_bases(#[case] base: &str, #[case] expected: &str) {
        assert_eq!(normalize_base(base), expected);
    }

    #[rstest]
    #[case("/app/user/profile", "/app/", "/user/profile")]
    #[case("/app", "/app/", "/")]
    #[case("/app?x=1", "/app/", "/?x=1")]
    #[case("/application", "/app/", "/application")]
    #[case("/user/profile", "/app/", "/user/profile")]
    #[case("/user/profile", "/", "/user/profile")]
    fn strips_base(#[case] location: &str, #[case] base: &str, #[case] expected: &str) {
        assert_eq!(strip_base(location, base), expected);
    }
}
