use crate::press::types::TableSpec;

/// Resolve the ordered list of column headers for a spec.
///
/// An explicit non-empty `order` wins and is returned verbatim, without
/// deduplication or validation against the actual row keys. Otherwise the
/// headers are the union of all row keys, each at the position of its first
/// occurrence, seeded by the first row's own key order. A spec with neither
/// yields an empty list.
pub fn resolve_headers(spec: &TableSpec) -> Vec<String> {
    if let Some(order) = &spec.order {
        if !order.is_empty() {
            return order.clone();
        }
    }

    let mut headers: Vec<String> = Vec::new();
    for row in spec.rows() {
        for key in row.keys() {
            if !headers.iter().any(|h| h == key) {
                headers.push(key.clone());
            }
        }
    }
    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_order_wins() {
        let spec = TableSpec::from_json(
            r#"{"order":["b","a"],"rows":[{"a":1,"b":2,"c":3}]}"#,
        )
        .unwrap();
        assert_eq!(resolve_headers(&spec), ["b", "a"]);
    }

    #[test]
    fn test_explicit_order_not_deduplicated() {
        let spec = TableSpec::from_json(r#"{"order":["a","a","missing"],"rows":[{"a":1}]}"#)
            .unwrap();
        assert_eq!(resolve_headers(&spec), ["a", "a", "missing"]);
    }

    #[test]
    fn test_empty_order_falls_back_to_rows() {
        let spec = TableSpec::from_json(r#"{"order":[],"rows":[{"a":1,"b":2}]}"#).unwrap();
        assert_eq!(resolve_headers(&spec), ["a", "b"]);
    }

    #[test]
    fn test_union_preserves_first_seen_order() {
        let spec = TableSpec::from_json(
            r#"{"rows":[{"a":1,"b":2},{"a":3,"c":4},{"d":5,"b":6}]}"#,
        )
        .unwrap();
        assert_eq!(resolve_headers(&spec), ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_no_rows_no_order() {
        let spec = TableSpec::from_json("{}").unwrap();
        assert!(resolve_headers(&spec).is_empty());
    }
}
