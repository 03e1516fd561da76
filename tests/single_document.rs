use indoc::indoc;
use launch_config::{
    AddonConfiguration, ConfigParser, Configuration, Error, ExtraArgs, parse_configuration,
};

#[test]
fn full_document_decodes_every_field() {
    let yaml = indoc! {r#"
        version: 0.1.0
        addons:
          - name: dns
            args: [10.152.183.10, cluster.local]
          - name: ingress
            disable: true
          - name: dashboard
        extraKubeletArgs:
          --max-pods: "200"
          --cluster-domain: null
        extraKubeAPIServerArgs:
          --event-ttl: 5m
        extraSANs:
          - 10.0.0.1
          - cluster.example.com
          - 10.0.0.1
    "#};

    let cfg = parse_configuration(yaml.as_bytes()).expect("valid configuration");

    let expected = Configuration {
        version: "0.1.0".to_owned(),
        addons: vec![
            AddonConfiguration {
                name: "dns".to_owned(),
                disable: false,
                arguments: vec!["10.152.183.10".to_owned(), "cluster.local".to_owned()],
            },
            AddonConfiguration {
                name: "ingress".to_owned(),
                disable: true,
                arguments: vec![],
            },
            AddonConfiguration {
                name: "dashboard".to_owned(),
                ..AddonConfiguration::default()
            },
        ],
        extra_kubelet_args: ExtraArgs::from([
            ("--max-pods".to_owned(), Some("200".to_owned())),
            ("--cluster-domain".to_owned(), None),
        ]),
        extra_kube_api_server_args: ExtraArgs::from([(
            "--event-ttl".to_owned(),
            Some("5m".to_owned()),
        )]),
        extra_sans: vec![
            "10.0.0.1".to_owned(),
            "cluster.example.com".to_owned(),
            "10.0.0.1".to_owned(),
        ],
    };
    assert_eq!(cfg, expected);
}

#[test]
fn null_argument_is_distinct_from_absent_argument() {
    let yaml = indoc! {"
        version: 0.1.0
        extraKubeletArgs:
          foo: null
          bar:
          baz: ''
    "};
    let cfg = parse_configuration(yaml.as_bytes()).unwrap();
    let args = &cfg.extra_kubelet_args;

    assert_eq!(args.get("foo"), Some(&None));
    assert_eq!(args.get("bar"), Some(&None));
    assert_eq!(args.get("baz"), Some(&Some(String::new())));
    assert_eq!(args.get("qux"), None);
}

#[test]
fn numeric_argument_values_are_kept_as_text() {
    let yaml = "version: 0.1.0\nextraKubeletArgs:\n  --v: 4\n";
    let cfg = parse_configuration(yaml.as_bytes()).unwrap();
    assert_eq!(cfg.extra_kubelet_args["--v"].as_deref(), Some("4"));
}

#[test]
fn unknown_keys_are_dropped() {
    let yaml = indoc! {"
        version: 0.1.0
        someFutureSetting:
          nested: true
        addons:
          - name: dns
            timeout: 30s
    "};
    let cfg = parse_configuration(yaml.as_bytes()).expect("lenient fallback");
    assert_eq!(cfg.version, "0.1.0");
    assert_eq!(
        cfg.addons,
        vec![AddonConfiguration {
            name: "dns".to_owned(),
            ..AddonConfiguration::default()
        }]
    );
}

#[test]
fn unknown_keys_do_not_hide_version_errors() {
    let yaml = "version: 0.2.0\nsomeFutureSetting: 1\n";
    let err = parse_configuration(yaml.as_bytes()).expect_err("too new");
    assert!(matches!(err, Error::VersionTooNew { .. }), "{err:?}");
}

#[test]
fn too_new_version() {
    let err = parse_configuration(b"version: 0.2.0\n").expect_err("too new");
    match err {
        Error::VersionTooNew { version, maximum } => {
            assert_eq!(version, "0.2.0");
            assert_eq!(maximum.to_string(), "0.1.0");
        }
        other => panic!("expected VersionTooNew, got {other:?}"),
    }
}

#[test]
fn too_old_version() {
    let err = parse_configuration(b"version: 0.0.9\naddons: [{name: dns}]\n").expect_err("too old");
    match err {
        Error::VersionTooOld { version, minimum } => {
            assert_eq!(version, "0.0.9");
            assert_eq!(minimum.to_string(), "0.1.0");
        }
        other => panic!("expected VersionTooOld, got {other:?}"),
    }
}

#[test]
fn unparseable_version() {
    for version in ["abc", "\"0.1\"", "1.x.0"] {
        let yaml = format!("version: {version}\n");
        let err = parse_configuration(yaml.as_bytes()).expect_err(version);
        match &err {
            Error::VersionParse { version: raw, .. } => {
                assert_eq!(raw.as_str(), version.trim_matches('"'));
                assert!(err.to_string().starts_with("could not parse config file version"));
            }
            other => panic!("expected VersionParse for {version}, got {other:?}"),
        }
    }
}

#[test]
fn empty_documents_signal_empty_config() {
    for yaml in ["", "   \n", "# only a comment\n", "null\n", "{}\n"] {
        let err = parse_configuration(yaml.as_bytes()).expect_err(yaml);
        assert!(err.is_empty_config(), "{yaml:?}: {err:?}");
        assert_eq!(err.to_string(), "empty configuration object");
    }
}

#[test]
fn malformed_yaml_is_a_decode_error() {
    let err = parse_configuration(b"version: [0.1.0\n").expect_err("unterminated flow");
    assert!(matches!(err, Error::Decode(_)), "{err:?}");
}

#[test]
fn parsed_configuration_round_trips_through_yaml() {
    let yaml = indoc! {"
        version: 0.1.0
        addons:
          - name: dns
        extraKubeAPIServerArgs:
          --profiling: null
    "};
    let parser = ConfigParser::new();
    let cfg = parser.parse(yaml.as_bytes()).unwrap();

    let written = serde_saphyr::to_string(&cfg).expect("serialize");
    let reread = parser.parse(written.as_bytes()).expect("reparse");
    assert_eq!(reread, cfg);
    assert_eq!(reread.extra_kube_api_server_args.get("--profiling"), Some(&None));
}
