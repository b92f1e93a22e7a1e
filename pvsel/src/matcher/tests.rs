//! Tests for selector evaluation.

use std::borrow::Cow;

use super::*;
use crate::selector::Predicate;

/// Minimal record type so these tests don't depend on the shipped resources.
#[derive(Debug, Clone, Default, PartialEq)]
struct Host {
    name: Option<String>,
    status: Option<String>,
    labels: Option<String>,
}

impl FieldResolver for Host {
    const KIND: &'static str = "host";
    const FIELDS: &'static [&'static str] = &["name", "status", "labels"];
    const COMPARISONS: &'static [(&'static str, Comparison)] = &[("labels", Comparison::TagList)];

    fn resolve(&self, field: &str) -> Option<Resolved<'_>> {
        let value = match field {
            "name" => self.name.as_deref(),
            "status" => self.status.as_deref(),
            "labels" => self.labels.as_deref(),
            _ => return None,
        };
        Some(value.map(Cow::Borrowed))
    }
}

fn host(name: &str, status: &str, labels: Option<&str>) -> Host {
    Host {
        name: Some(name.to_string()),
        status: Some(status.to_string()),
        labels: labels.map(str::to_string),
    }
}

fn sel(input: &str) -> Selector {
    Selector::parse(input).unwrap()
}

fn names(hosts: &[&Host]) -> Vec<String> {
    hosts.iter().map(|h| h.name.clone().unwrap_or_default()).collect()
}

fn fleet() -> Vec<Host> {
    vec![
        host("web-01", "running", Some("prod;web")),
        host("web-02", "stopped", Some("dev")),
        host("db-01", "running", None),
        host("mid-web-01", "paused", Some("")),
    ]
}

#[test]
fn test_empty_selector_keeps_everything() {
    let hosts = fleet();
    let selected = sel("").apply(&hosts).unwrap();
    assert_eq!(selected.len(), hosts.len());
    assert!(selected.iter().zip(&hosts).all(|(a, b)| *a == b));
}

#[test]
fn test_eq_and_not_eq() {
    let hosts = fleet();
    assert_eq!(names(&sel("status=running").apply(&hosts).unwrap()), ["web-01", "db-01"]);
    assert_eq!(
        names(&sel("status!=running").apply(&hosts).unwrap()),
        ["web-02", "mid-web-01"]
    );
}

#[test]
fn test_eq_is_inverse_of_not_eq() {
    for h in fleet() {
        for value in ["running", "stopped", "", "web-01"] {
            for field in ["name", "status", "labels"] {
                let eq = sel(&format!("{field}={value}")).matches(&h).unwrap();
                let neq = sel(&format!("{field}!={value}")).matches(&h).unwrap();
                assert_eq!(eq, !neq, "{field}={value} on {h:?}");
            }
        }
    }
}

#[test]
fn test_wildcard_is_anchored() {
    let hosts = fleet();
    assert_eq!(names(&sel("name=~web-*").apply(&hosts).unwrap()), ["web-01", "web-02"]);
    assert_eq!(names(&sel("name=~*-01").apply(&hosts).unwrap()), ["web-01", "db-01", "mid-web-01"]);
    assert!(sel("name=~web").apply(&hosts).unwrap().is_empty());
}

#[test]
fn test_in_is_exact() {
    let hosts = fleet();
    assert_eq!(
        names(&sel("status in (running,paused)").apply(&hosts).unwrap()),
        ["web-01", "db-01", "mid-web-01"]
    );
    // No wildcarding inside `in`
    assert!(sel("name in (web-*)").apply(&hosts).unwrap().is_empty());
}

#[test]
fn test_absent_scalar_compares_as_empty() {
    let h = Host {
        name: Some("bare".into()),
        ..Default::default()
    };
    assert!(sel("status=").matches(&h).unwrap());
    assert!(sel("status!=running").matches(&h).unwrap());
    assert!(sel("status in (,stopped)").matches(&h).unwrap());
    assert!(sel("status=~*").matches(&h).unwrap());
}

#[test]
fn test_and_composition() {
    let conditions = ["status=running", "labels=prod", "name=~web-*"];
    let combined = sel(&conditions.join(","));
    for h in fleet() {
        let each = conditions.iter().all(|c| sel(c).matches(&h).unwrap());
        assert_eq!(combined.matches(&h).unwrap(), each);
    }
}

#[test]
fn test_tag_list_semantics() {
    let h = host("web-01", "running", Some("prod;web"));
    assert!(sel("labels=prod").matches(&h).unwrap());
    assert!(sel("labels=web").matches(&h).unwrap());
    assert!(!sel("labels=dev").matches(&h).unwrap());
    assert!(sel("labels!=dev").matches(&h).unwrap());
    assert!(!sel("labels!=prod").matches(&h).unwrap());
    assert!(sel("labels=~pr*").matches(&h).unwrap());
    assert!(!sel("labels=~prod;*").matches(&h).unwrap());
    assert!(sel("labels in (dev,web)").matches(&h).unwrap());
    assert!(!sel("labels in (dev,qa)").matches(&h).unwrap());
}

#[test]
fn test_tag_list_trims_elements() {
    let h = host("web-01", "running", Some(" prod ; web "));
    assert!(sel("labels=prod").matches(&h).unwrap());
    assert!(sel("labels in (web)").matches(&h).unwrap());
}

#[test]
fn test_missing_tags_are_empty_list() {
    for labels in [None, Some("")] {
        let h = host("db-01", "running", labels);
        for value in ["prod", "anything", ""] {
            assert!(sel(&format!("labels!={value}")).matches(&h).unwrap());
            assert!(!sel(&format!("labels={value}")).matches(&h).unwrap());
            assert!(!sel(&format!("labels in ({value})")).matches(&h).unwrap());
        }
        assert!(!sel("labels=~*").matches(&h).unwrap());
    }
}

#[test]
fn test_unsupported_field_fails_fast() {
    let err = sel("bogus=1").filter::<Host>().apply(&[]).unwrap_err();
    match &err {
        Error::UnsupportedField {
            field,
            kind,
            supported,
        } => {
            assert_eq!(field, "bogus");
            assert_eq!(*kind, "host");
            assert_eq!(*supported, Host::FIELDS);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(
        err.to_string(),
        "unsupported field \"bogus\" for host; supported fields: name, status, labels"
    );
}

#[test]
fn test_unsupported_field_not_hidden_by_short_circuit() {
    let h = host("web-01", "running", None);
    // The first condition is false, yet the bad field is still reported
    assert!(sel("status=stopped,bogus=1").matches(&h).is_err());
}

#[test]
fn test_apply_owned_preserves_order() {
    let kept = sel("status=running").filter::<Host>().apply_owned(fleet()).unwrap();
    let kept: Vec<_> = kept.into_iter().filter_map(|h| h.name).collect();
    assert_eq!(kept, ["web-01", "db-01"]);
}

#[test]
fn test_apply_does_not_touch_input() {
    let hosts = fleet();
    let before = hosts.clone();
    let selector = sel("labels=prod");
    let _ = selector.apply(&hosts).unwrap();
    assert_eq!(hosts, before);
    assert_eq!(selector, sel("labels=prod"));
}

#[test]
fn test_shared_across_threads() {
    let hosts = fleet();
    let selector = sel("status=running");
    let filter = selector.filter::<Host>();

    let counts: Vec<usize> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| filter.apply(&hosts).map(|s| s.len())))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap().unwrap()).collect()
    });
    assert_eq!(counts, [2, 2, 2, 2]);
}

#[test]
fn test_split_tags() {
    let tags: Vec<&str> = split_tags("a; b;;c ;").collect();
    assert_eq!(tags, ["a", "b", "", "c", ""]);
    assert_eq!(split_tags("").count(), 0);
    assert_eq!(split_tags("  ").count(), 0);
}

#[test]
fn test_empty_tag_elements_are_tags() {
    let h = host("web-01", "running", Some("prod;;web"));
    assert!(sel("labels=").matches(&h).unwrap());
    assert!(!sel("labels!=").matches(&h).unwrap());

    let h = host("web-02", "running", Some("prod; "));
    assert!(sel("labels in (,x)").matches(&h).unwrap());
    assert!(sel("labels=prod").matches(&h).unwrap());
}

#[test]
fn test_scalar_comparison_ignores_delimiter() {
    let p = Predicate::Eq("prod".into());
    assert!(!Comparison::Scalar.matches(Some("prod;web"), &p));
    assert!(Comparison::TagList.matches(Some("prod;web"), &p));
}
