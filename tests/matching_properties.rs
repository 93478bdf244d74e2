//! Property tests for multi-valued matching.
//!
//! Field values are drawn from small pools so that generated requests hit
//! and miss the generated patterns in roughly equal measure.

use partial_url_rs::{
    FieldValues, Host, MultiPattern, PartialUrl, Path, Port, RequestDescriptor, SinglePattern,
};
use proptest::prelude::*;
use std::cmp::Ordering;

const SCHEMES: &[&str] = &["http", "https", "ftp"];
const HOSTS: &[&str] = &["a.example", "b.example", "www.a.example", "192.0.2.1"];
const PORTS: &[u32] = &[80, 443, 8080];
const CONTEXT_PATHS: &[&str] = &["/", "/app", "/app/sub"];
const PREFIXES: &[&str] = &["/", "/a/", "/a/b/", "/c/"];
const REQUEST_PATHS: &[&str] = &["/", "/a", "/a/", "/a/b/c", "/a/bc/", "/c/d", "/x/"];

fn host(s: &str) -> Host {
    Host::parse(s).expect("host should parse")
}

fn path(s: &str) -> Path {
    Path::parse(s).expect("path should parse")
}

fn tcp(number: u32) -> Port {
    Port::tcp(number).expect("port should be in range")
}

fn subset<T: Clone + std::fmt::Debug + 'static>(pool: &'static [T]) -> impl Strategy<Value = Vec<T>> {
    prop::sample::subsequence(pool.to_vec(), 0..=pool.len()).prop_shuffle()
}

fn pattern_strategy() -> impl Strategy<Value = PartialUrl> {
    (
        subset(SCHEMES),
        subset(HOSTS),
        subset(PORTS),
        subset(CONTEXT_PATHS),
        subset(PREFIXES),
    )
        .prop_map(|(schemes, hosts, ports, context_paths, prefixes)| {
            let hosts: Vec<Host> = hosts.into_iter().map(host).collect();
            let ports: Vec<Port> = ports.into_iter().map(tcp).collect();
            let context_paths: Vec<Path> = context_paths.into_iter().map(path).collect();
            let prefixes: Vec<Path> = prefixes.into_iter().map(path).collect();
            MultiPattern::new(&schemes, &hosts, &ports, &context_paths, &prefixes)
                .expect("pooled values are valid")
        })
}

fn request_strategy() -> impl Strategy<Value = FieldValues> {
    (
        prop::sample::select(vec!["http", "HTTPS", "ftp", "gopher"]),
        prop::option::of(prop::sample::select(vec![
            "a.example",
            "b.example",
            "www.a.example",
            "192.0.2.1",
            "other.example",
        ])),
        prop::option::of(prop::sample::select(vec![80u32, 443, 8080, 9000])),
        prop::sample::select(CONTEXT_PATHS.to_vec()),
        prop::option::of(prop::sample::select(REQUEST_PATHS.to_vec())),
    )
        .prop_map(|(scheme, host_name, port, context_path, request_path)| {
            let mut request = FieldValues::new(scheme).with_context_path(path(context_path));
            if let Some(host_name) = host_name {
                request = request.with_host(host(host_name));
            }
            if let Some(port) = port {
                request = request.with_port(tcp(port));
            }
            if let Some(request_path) = request_path {
                request = request.with_path(path(request_path));
            }
            request
        })
}

/// A request carrying exactly the fields `single` specifies.
fn request_for(single: &SinglePattern) -> FieldValues {
    let mut request = FieldValues::new(single.scheme().unwrap_or("http"));
    if let Some(host) = single.host() {
        request = request.with_host(host.clone());
    }
    if let Some(port) = single.port() {
        request = request.with_port(port);
    }
    if let Some(context_path) = single.context_path() {
        request = request.with_context_path(context_path.clone());
    }
    if let Some(prefix) = single.prefix() {
        request = request.with_path(prefix.clone());
    }
    request
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        ..ProptestConfig::default()
    })]

    #[test]
    fn prop_indexed_match_equals_exhaustive_match(
        pattern in pattern_strategy(),
        request in request_strategy(),
    ) {
        let descriptor: &dyn RequestDescriptor = &request;
        let indexed = pattern.matches(Some(descriptor)).map(|single| single.into_owned());
        let exhaustive = pattern
            .combinations()
            .find(|single| single.matches(Some(descriptor)).is_some());
        prop_assert_eq!(indexed, exhaustive);

        if let PartialUrl::Multi(multi) = &pattern {
            prop_assert_eq!(
                multi.matches(Some(descriptor)),
                multi.matches_exhaustive(Some(descriptor))
            );
        }
    }

    #[test]
    fn prop_every_combination_matches_its_own_request(pattern in pattern_strategy()) {
        let combinations = pattern.get_combinations().expect("pooled patterns are small");
        prop_assert_eq!(combinations.len(), pattern.combination_count());
        prop_assert_eq!(&combinations[0], pattern.primary());

        for single in &combinations {
            let request = request_for(single);
            let matched = pattern.matches(Some(&request));
            prop_assert_eq!(matched.as_deref(), Some(single));
        }
    }

    #[test]
    fn prop_combination_order_agrees_with_equality(
        a in pattern_strategy(),
        b in pattern_strategy(),
    ) {
        let a = a.primary();
        let b = b.primary();
        prop_assert_eq!(a.cmp(b) == Ordering::Equal, a == b);
        prop_assert_eq!(a.cmp(b), b.cmp(a).reverse());
    }
}
