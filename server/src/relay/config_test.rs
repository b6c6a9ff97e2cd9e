use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

const FULL: &[(&str, &str)] = &[
    (SERVICE_ID_VAR, "service_abc"),
    (TEMPLATE_ID_VAR, "template_xyz"),
    (PUBLIC_KEY_VAR, "pk_123"),
];

#[test]
fn from_lookup_reads_required_values() {
    let cfg = RelayConfig::from_lookup(lookup_from(FULL)).unwrap();
    assert_eq!(cfg.service_id, "service_abc");
    assert_eq!(cfg.template_id, "template_xyz");
    assert_eq!(cfg.public_key, "pk_123");
    assert_eq!(cfg.private_key, None);
    assert_eq!(cfg.api_url, DEFAULT_EMAILJS_API_URL);
}

#[test]
fn from_lookup_parses_optional_overrides() {
    let mut pairs = FULL.to_vec();
    pairs.push((PRIVATE_KEY_VAR, "secret"));
    pairs.push((API_URL_VAR, "https://relay.example.test/"));

    let cfg = RelayConfig::from_lookup(lookup_from(&pairs)).unwrap();
    assert_eq!(cfg.private_key.as_deref(), Some("secret"));
    assert_eq!(cfg.api_url, "https://relay.example.test");
}

#[test]
fn from_lookup_all_missing_names_every_var() {
    let err = RelayConfig::from_lookup(lookup_from(&[])).unwrap_err();
    match err {
        RelayError::MissingConfig { vars } => {
            assert_eq!(vars, vec![SERVICE_ID_VAR, TEMPLATE_ID_VAR, PUBLIC_KEY_VAR]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn from_lookup_blank_value_counts_as_missing() {
    let pairs = [(SERVICE_ID_VAR, "service_abc"), (TEMPLATE_ID_VAR, "   "), (PUBLIC_KEY_VAR, "pk_123")];
    let err = RelayConfig::from_lookup(lookup_from(&pairs)).unwrap_err();
    assert!(err.to_string().contains(TEMPLATE_ID_VAR));
    assert!(!err.to_string().contains(SERVICE_ID_VAR));
}

#[test]
fn from_lookup_trims_values() {
    let pairs = [(SERVICE_ID_VAR, " service_abc "), (TEMPLATE_ID_VAR, "template_xyz"), (PUBLIC_KEY_VAR, "pk_123\n")];
    let cfg = RelayConfig::from_lookup(lookup_from(&pairs)).unwrap();
    assert_eq!(cfg.service_id, "service_abc");
    assert_eq!(cfg.public_key, "pk_123");
}

#[test]
fn timeouts_default_and_override() {
    assert_eq!(RelayTimeouts::from_lookup(lookup_from(&[])), RelayTimeouts::default());

    let timeouts = RelayTimeouts::from_lookup(lookup_from(&[
        ("EMAILJS_REQUEST_TIMEOUT_SECS", "30"),
        ("EMAILJS_CONNECT_TIMEOUT_SECS", "bad"),
    ]));
    assert_eq!(timeouts, RelayTimeouts { request_secs: 30, connect_secs: DEFAULT_RELAY_CONNECT_TIMEOUT_SECS });
}
