//! Route names for request spans and metric labels.

/// Request path with numeric segments replaced by `{id}`.
pub(super) fn normalise_route(path: &str) -> String {
    let trimmed = path.trim_matches('/');

    if trimmed.is_empty() {
        return "/".to_owned();
    }

    trimmed
        .split('/')
        .map(|segment| {
            if !segment.is_empty() && segment.bytes().all(|byte| byte.is_ascii_digit()) {
                "{id}"
            } else {
                segment
            }
        })
        .fold(String::new(), |mut route, segment| {
            route.push('/');
            route.push_str(segment);
            route
        })
}

pub(super) fn span_name(method: &str, route: &str) -> String {
    format!("{method} {route}")
}

#[cfg(test)]
mod tests {
    use super::{normalise_route, span_name};

    #[test]
    fn numeric_segments_become_ids() {
        assert_eq!(normalise_route("/carts/12/checkout"), "/carts/{id}/checkout");
        assert_eq!(normalise_route("/products/9001"), "/products/{id}");
    }

    #[test]
    fn other_segments_are_kept() {
        assert_eq!(normalise_route("/products"), "/products");
        assert_eq!(normalise_route("/carts/abc"), "/carts/abc");
        assert_eq!(normalise_route("/carts/12/"), "/carts/{id}");
    }

    #[test]
    fn root_stays_root() {
        assert_eq!(normalise_route("/"), "/");
        assert_eq!(normalise_route(""), "/");
    }

    #[test]
    fn span_name_prefixes_method() {
        assert_eq!(span_name("POST", "/carts/{id}/checkout"), "POST /carts/{id}/checkout");
    }
}
