use partial_url_rs::pattern::PatternError;
use partial_url_rs::{
    DEFAULT, FieldValues, Host, Path, Port, Protocol, RequestDescriptor, SinglePattern,
    UrlDescriptor,
};
use url::Url;

fn host(s: &str) -> Host {
    Host::parse(s).expect("host should parse")
}

fn path(s: &str) -> Path {
    Path::parse(s).expect("path should parse")
}

fn tcp(number: u32) -> Port {
    Port::tcp(number).expect("port should be in range")
}

fn udp(number: u32) -> Port {
    Port::new(number, Protocol::Udp).expect("port should be in range")
}

fn single(
    scheme: Option<&str>,
    host: Option<Host>,
    port: Option<Port>,
    context_path: Option<Path>,
    prefix: Option<Path>,
) -> SinglePattern {
    SinglePattern::new(scheme, host, port, context_path, prefix).expect("pattern should build")
}

/// `https://aoindustries.com/contact` dispatched under the `/context` context.
fn hostname_source() -> UrlDescriptor {
    let url = Url::parse("HTTPS://aoindustries.com:443/contact").expect("url should parse");
    UrlDescriptor::new(&url, path("/context")).expect("descriptor should build")
}

fn ipv4_source() -> UrlDescriptor {
    let url = Url::parse("HTTPS://192.0.2.38:443/contact/").expect("url should parse");
    UrlDescriptor::at_root(&url).expect("descriptor should build")
}

fn ipv6_source() -> UrlDescriptor {
    let url = Url::parse("HTTPS://[2001:DB8::D0]:443/contact/other").expect("url should parse");
    UrlDescriptor::at_root(&url).expect("descriptor should build")
}

fn matches_itself(pattern: &SinglePattern, descriptor: &dyn RequestDescriptor) -> bool {
    pattern
        .matches(Some(descriptor))
        .is_some_and(|matched| std::ptr::eq(matched, pattern))
}

#[test]
fn single_when_built_without_fields_then_equals_default() {
    assert_eq!(single(None, None, None, None, None), DEFAULT);
    assert!(std::ptr::eq(SinglePattern::default_pattern(), &DEFAULT));
}

#[test]
fn single_when_scheme_has_upper_case_then_lower_cases_it() {
    let pattern = single(Some("HTTPS"), None, None, None, None);
    assert_eq!(pattern.scheme(), Some("https"));
}

#[test]
fn single_when_prefix_only_then_equals_full_constructor() {
    assert_eq!(
        SinglePattern::prefix_only(path("/path/")).expect("prefix should be valid"),
        single(None, None, None, None, Some(path("/path/")))
    );
}

#[test]
fn single_when_prefix_lacks_trailing_separator_then_returns_error() {
    let err = SinglePattern::prefix_only(path("/path")).expect_err("expected prefix error");
    match err {
        PatternError::PrefixMissingTrailingSeparator { prefix } => assert_eq!(prefix, "/path"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn single_when_context_path_is_root_then_keeps_root() {
    let pattern = single(None, None, None, Some(Path::root()), None);
    assert_eq!(pattern.context_path(), Some(&Path::root()));
}

#[test]
fn single_when_context_path_has_trailing_separator_then_returns_error() {
    let err = SinglePattern::new(None, None, None, Some(path("/context/")), None)
        .expect_err("expected context path error");
    match err {
        PatternError::ContextPathTrailingSeparator { context_path } => {
            assert_eq!(context_path, "/context/");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(SinglePattern::new(None, None, None, Some(path("/path")), None).is_ok());
}

#[test]
fn single_when_displayed_then_uses_wildcards_for_missing_fields() {
    let cases = [
        (DEFAULT.clone(), "//*:*/*/**"),
        (single(Some("hTtPS"), None, None, None, None), "https://*:*/*/**"),
        (
            single(None, Some(host("aoindustries.com")), None, None, None),
            "//aoindustries.com:*/*/**",
        ),
        (
            single(None, Some(host("192.0.2.45")), None, None, None),
            "//192.0.2.45:*/*/**",
        ),
        (
            single(None, Some(host("2001:DB8::D0")), None, None, None),
            "//[2001:db8::d0]:*/*/**",
        ),
        (
            single(None, Some(host("[2001:DB8::D0]")), None, None, None),
            "//[2001:db8::d0]:*/*/**",
        ),
        (single(None, None, Some(tcp(443)), None, None), "//*:443/*/**"),
        (
            single(None, None, None, Some(path("/context")), None),
            "//*:*/context/**",
        ),
        (single(None, None, None, Some(Path::root()), None), "//*:*/**"),
        (
            single(None, None, None, None, Some(path("/prefix/"))),
            "//*:*/*/prefix/",
        ),
        (single(None, None, None, None, Some(Path::root())), "//*:*/*/"),
    ];

    for (pattern, expected) in cases {
        assert_eq!(pattern.to_string(), expected);
    }
}

#[test]
fn single_when_port_is_scheme_default_then_display_hides_it() {
    let complete = |scheme: &str, port: u32| {
        single(
            Some(scheme),
            Some(host("aoindustries.com")),
            Some(tcp(port)),
            Some(Path::root()),
            Some(Path::root()),
        )
        .to_string()
    };

    assert_eq!(complete("http", 80), "http://aoindustries.com/");
    assert_eq!(complete("HTtp", 443), "http://aoindustries.com:443/");
    assert_eq!(complete("httpS", 443), "https://aoindustries.com/");
    assert_eq!(complete("HTtps", 80), "https://aoindustries.com:80/");
}

#[test]
fn single_when_one_field_specified_then_sorts_before_default() {
    let specified = [
        single(None, Some(host("aoindustries.com")), None, None, None),
        single(None, None, None, Some(Path::root()), None),
        single(None, None, None, None, Some(Path::root())),
        single(None, None, Some(tcp(45)), None, None),
        single(Some("other"), None, None, None, None),
    ];

    for pattern in specified {
        assert!(pattern < DEFAULT, "{pattern} should sort before default");
    }
}

#[test]
fn single_when_compared_then_orders_within_each_field() {
    let by_host = |name: &str| single(None, Some(host(name)), None, None, None);
    assert!(by_host("xyz.com") < by_host("abc.org"));
    assert!(by_host("aoindustries.com") < by_host("www.aoindustries.com"));

    let by_context = |p: &str| single(None, None, None, Some(path(p)), None);
    assert!(by_context("/context") < by_context("/context/deeper"));

    let by_prefix = |p: &str| single(None, None, None, None, Some(path(p)));
    assert!(by_prefix("/abc/deeper/") < by_prefix("/xyz/deeper/"));
    assert!(by_prefix("/path/deeper/") < by_prefix("/path/"));

    let by_port = |n: u32| single(None, None, Some(tcp(n)), None, None);
    assert!(by_port(80) < by_port(443));

    let by_scheme = |s: &str| single(Some(s), None, None, None, None);
    assert!(by_scheme("http") < by_scheme("HTTPS"));
}

#[test]
fn single_when_compared_then_host_outranks_context_outranks_prefix() {
    assert!(
        single(None, Some(host("aoindustries.com")), None, Some(path("/xyz")), None)
            < single(None, Some(host("semanticcms.com")), None, Some(path("/abc")), None)
    );
    assert!(
        single(None, None, None, Some(path("/abc")), Some(path("/xyz/")))
            < single(None, None, None, Some(path("/xyz")), Some(path("/abc/")))
    );
    assert!(
        single(None, None, Some(tcp(443)), None, Some(path("/abc/")))
            < single(None, None, Some(tcp(80)), None, Some(path("/xyz/")))
    );
    assert!(
        single(Some("https"), None, Some(tcp(80)), None, None)
            < single(Some("http"), None, Some(tcp(443)), None, None)
    );
}

#[test]
fn single_when_descriptor_missing_then_only_default_matches() {
    assert_eq!(DEFAULT.matches(None), Some(&DEFAULT));
    assert_eq!(single(Some("https"), None, None, None, None).matches(None), None);
}

#[test]
fn single_when_scheme_differs_only_in_case_then_matches() {
    let source = hostname_source();
    assert!(matches_itself(&single(Some("https"), None, None, None, None), &source));
    assert!(
        single(Some("http"), None, None, None, None)
            .matches(Some(&source))
            .is_none()
    );

    let upper = FieldValues::new("HTTPS");
    assert!(matches_itself(&single(Some("https"), None, None, None, None), &upper));
}

#[test]
fn single_when_host_compared_then_uses_canonical_form() {
    let by_host = |name: &str| single(None, Some(host(name)), None, None, None);

    assert!(matches_itself(&by_host("AOIndustries.COM"), &hostname_source()));
    assert!(by_host("WWW.AOIndustries.COM").matches(Some(&hostname_source())).is_none());

    assert!(matches_itself(&by_host("192.0.2.38"), &ipv4_source()));
    assert!(by_host("192.0.2.39").matches(Some(&ipv4_source())).is_none());

    assert!(matches_itself(&by_host("2001:db8::d0"), &ipv6_source()));
    assert!(by_host("2001:db8::d1").matches(Some(&ipv6_source())).is_none());
    assert!(matches_itself(&by_host("[2001:db8::d0]"), &ipv6_source()));
    assert!(by_host("[2001:db8::d1]").matches(Some(&ipv6_source())).is_none());
}

#[test]
fn single_when_port_compared_then_checks_number_and_protocol() {
    let source = hostname_source();
    assert!(matches_itself(&single(None, None, Some(tcp(443)), None, None), &source));
    assert!(single(None, None, Some(tcp(80)), None, None).matches(Some(&source)).is_none());
    assert!(single(None, None, Some(udp(443)), None, None).matches(Some(&source)).is_none());
}

#[test]
fn single_when_context_path_compared_then_requires_exact_match() {
    let source = hostname_source();
    assert!(matches_itself(
        &single(None, None, None, Some(path("/context")), None),
        &source
    ));
    assert!(
        single(None, None, None, Some(Path::root()), None)
            .matches(Some(&source))
            .is_none()
    );
    assert!(
        single(None, None, None, Some(path("/context/sub")), None)
            .matches(Some(&source))
            .is_none()
    );
}

#[test]
fn single_when_prefix_compared_then_requires_path_below_context() {
    let root = SinglePattern::prefix_only(Path::root()).expect("root prefix");
    assert!(matches_itself(&root, &ipv4_source()));
    assert!(matches_itself(&root, &ipv6_source()));
    // "/contact" lies outside the "/context" context
    assert!(root.matches(Some(&hostname_source())).is_none());

    let contact = SinglePattern::prefix_only(path("/contact/")).expect("prefix");
    assert!(matches_itself(&contact, &ipv4_source()));
    assert!(matches_itself(&contact, &ipv6_source()));

    let contact_other = SinglePattern::prefix_only(path("/contact/other/")).expect("prefix");
    assert!(contact_other.matches(Some(&ipv4_source())).is_none());
    assert!(contact_other.matches(Some(&ipv6_source())).is_none());

    let anything = FieldValues::new("http").with_path(path("/contact/anything"));
    assert!(matches_itself(&contact, &anything));
}

#[test]
fn single_when_four_connection_fields_set_then_is_complete() {
    let full = |scheme: Option<&str>,
                host_name: Option<&str>,
                port: Option<Port>,
                context_path: Option<Path>,
                prefix: Option<Path>| {
        single(scheme, host_name.map(host), port, context_path, prefix)
    };

    assert!(full(Some("https"), Some("aoindustries.com"), Some(udp(443)), Some(Path::root()), Some(Path::root())).is_complete());
    assert!(full(Some("https"), Some("aoindustries.com"), Some(udp(443)), Some(Path::root()), None).is_complete());
    assert!(!full(None, Some("aoindustries.com"), Some(udp(443)), Some(Path::root()), Some(Path::root())).is_complete());
    assert!(!full(Some("https"), None, Some(udp(443)), Some(Path::root()), Some(Path::root())).is_complete());
    assert!(!full(Some("https"), Some("aoindustries.com"), None, Some(Path::root()), Some(Path::root())).is_complete());
    assert!(!full(Some("https"), Some("aoindustries.com"), Some(udp(443)), None, Some(Path::root())).is_complete());
}

#[test]
fn single_when_combinations_requested_then_yields_only_itself() {
    assert_eq!(DEFAULT.primary(), &DEFAULT);
    assert_eq!(DEFAULT.get_combinations(), vec![DEFAULT.clone()]);

    let complete = single(
        Some("https"),
        Some(host("aoindustries.com")),
        Some(udp(443)),
        Some(Path::root()),
        Some(Path::root()),
    );
    assert_eq!(complete.primary(), &complete);
    assert_eq!(complete.get_combinations(), vec![complete.clone()]);
}

#[test]
fn single_when_default_resolved_then_takes_every_field_from_descriptor() {
    let url = DEFAULT
        .to_url(Some(&hostname_source()))
        .expect("url should resolve");
    assert_eq!(url.as_str(), "https://aoindustries.com/context");

    let url = DEFAULT.to_url(Some(&ipv4_source())).expect("url should resolve");
    assert_eq!(url.as_str(), "https://192.0.2.38/contact/");

    let url = DEFAULT.to_url(Some(&ipv6_source())).expect("url should resolve");
    assert_eq!(url.as_str(), "https://[2001:db8::d0]/contact/other");
}

#[test]
fn single_when_fields_missing_then_fills_them_from_descriptor() {
    let source = hostname_source();
    let resolve = |pattern: SinglePattern| {
        pattern
            .to_url(Some(&source))
            .expect("url should resolve")
            .to_string()
    };

    assert_eq!(
        resolve(single(
            None,
            Some(host("aorepo.org")),
            Some(tcp(80)),
            Some(path("/otherContext")),
            Some(path("/otherPath/"))
        )),
        "https://aorepo.org:80/otherContext/otherPath/"
    );
    assert_eq!(
        resolve(single(
            Some("https"),
            None,
            Some(tcp(80)),
            Some(path("/otherContext")),
            Some(path("/otherPath/"))
        )),
        "https://aoindustries.com:80/otherContext/otherPath/"
    );
    assert_eq!(
        resolve(single(
            Some("https"),
            Some(host("aorepo.org")),
            None,
            Some(path("/otherContext")),
            Some(path("/otherPath/"))
        )),
        "https://aorepo.org/otherContext/otherPath/"
    );
    assert_eq!(
        resolve(single(
            Some("https"),
            Some(host("aorepo.org")),
            Some(tcp(80)),
            None,
            Some(path("/otherPath/"))
        )),
        "https://aorepo.org:80/context/otherPath/"
    );
}

#[test]
fn single_when_descriptor_missing_then_resolves_from_own_fields() {
    let url = single(
        Some("https"),
        Some(host("aorepo.org")),
        Some(tcp(80)),
        Some(path("/otherContext")),
        None,
    )
    .to_url(None)
    .expect("url should resolve");
    assert_eq!(url.as_str(), "https://aorepo.org:80/otherContext");

    let url = single(
        Some("https"),
        Some(host("aorepo.org")),
        Some(tcp(80)),
        Some(path("/otherContext")),
        Some(path("/otherPath/")),
    )
    .to_url(None)
    .expect("url should resolve");
    assert_eq!(url.as_str(), "https://aorepo.org:80/otherContext/otherPath/");
}

#[test]
fn single_when_descriptor_missing_and_host_unset_then_returns_missing_field() {
    let err = single(Some("https"), None, None, Some(Path::root()), None)
        .to_url(None)
        .expect_err("expected missing host");
    assert_eq!(err, PatternError::MissingField { field: "host" });
}

#[test]
fn single_when_port_unknown_then_falls_back_to_scheme_default() {
    let descriptor = FieldValues::new("https").with_host(host("aorepo.org"));
    let url = DEFAULT.to_url(Some(&descriptor)).expect("url should resolve");
    assert_eq!(url.port_or_known_default(), Some(443));
    assert_eq!(url.as_str(), "https://aorepo.org/");
}
