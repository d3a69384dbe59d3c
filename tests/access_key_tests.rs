#![cfg(feature = "sri")]

use chrono::NaiveDate;
use sricore::sri::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn key(sequential: &str) -> AccessKey {
    AccessKey {
        date: date(2020, 2, 20),
        voucher_type: VoucherType::Invoice,
        ruc: "1791251237001".into(),
        environment: Environment::Production,
        establishment: "001".into(),
        emission_point: "001".into(),
        sequential: sequential.into(),
        code: "12345678".into(),
    }
}

// ---------------------------------------------------------------------------
// Generate
// ---------------------------------------------------------------------------

#[test]
fn generate_reference_key() {
    let ak = key("005814917");
    let base = ak.base().unwrap();
    assert_eq!(base, "200220200117912512370012001001005814917123456781");
    assert_eq!(base.len(), ACCESS_KEY_BASE_LEN);

    let full = ak.generate().unwrap();
    assert_eq!(full, "2002202001179125123700120010010058149171234567817");
    assert_eq!(full.len(), ACCESS_KEY_LEN);
}

#[test]
fn generate_other_sequentials() {
    assert_eq!(
        key("005814918").generate().unwrap(),
        "2002202001179125123700120010010058149181234567812"
    );
    assert_eq!(
        key("005814912").generate().unwrap(),
        "2002202001179125123700120010010058149121234567811"
    );
}

#[test]
fn generate_natural_person_key() {
    let mut ak = key("000183747");
    ak.ruc = "1714045984001".into();
    assert_eq!(
        ak.generate().unwrap(),
        "2002202001171404598400120010010001837471234567812"
    );
}

#[test]
fn generate_does_not_validate_ruc() {
    let mut ak = key("000000001");
    ak.ruc = "1234567890001".into();
    let full = ak.generate().unwrap();
    assert_eq!(full.len(), 49);
    assert!(full.bytes().all(|b| b.is_ascii_digit()));
}

#[test]
fn generate_rejects_bad_widths() {
    let cases: Vec<fn(&mut AccessKey)> = vec![
        |ak: &mut AccessKey| ak.code = "123456789".into(),
        |ak: &mut AccessKey| ak.code = "1234567".into(),
        |ak: &mut AccessKey| ak.ruc = "179125123700".into(),
        |ak: &mut AccessKey| ak.establishment = "00A".into(),
        |ak: &mut AccessKey| ak.emission_point = "1".into(),
        |ak: &mut AccessKey| ak.sequential = "5814917".into(),
        |ak: &mut AccessKey| ak.date = date(10000, 1, 1),
    ];
    for mutate in cases {
        let mut ak = key("005814917");
        mutate(&mut ak);
        assert!(
            matches!(ak.generate(), Err(SriError::AccessKeyFormat(_))),
            "{ak:?}"
        );
    }
}

#[test]
fn validator_digit_of_reference_base() {
    assert_eq!(
        validator_digit("200220200117912512370012001001005814917123456781"),
        7
    );
}

// ---------------------------------------------------------------------------
// Decode
// ---------------------------------------------------------------------------

#[test]
fn from_key_reference_vectors() {
    let cases = [
        ("2002202001179125123700120010010058149171234567817", key("005814917")),
        ("2002202001179125123700120010010058149181234567812", key("005814918")),
        ("2002202001179125123700120010010058149121234567811", key("005814912")),
    ];
    for (text, expected) in cases {
        assert_eq!(AccessKey::from_key(text).unwrap(), expected, "for {text}");
    }

    let ak: AccessKey = "2002202001171404598400120010010001837471234567812"
        .parse()
        .unwrap();
    assert_eq!(ak.ruc, "1714045984001");
    assert_eq!(ak.sequential, "000183747");
}

#[test]
fn from_key_format_errors() {
    for text in [
        "20022020011791251237001200100100581491712345678171",
        "200220200117912512370012001001005814918123456781",
        "2002202001179125123A00120010010058149121234567811",
        "",
    ] {
        assert_eq!(
            AccessKey::from_key(text),
            Err(SriError::AccessKeyFormat(text.into())),
            "for {text:?}"
        );
    }
}

#[test]
fn from_key_date_error() {
    assert_eq!(
        AccessKey::from_key("3002202001171404598400120010010001837471234567812"),
        Err(SriError::AccessKeyDate("30022020".into()))
    );
}

#[test]
fn from_key_keeps_uncatalogued_codes() {
    // Environment 3 is not a known code; the key still decodes.
    let text = "2002202001179125123700130010010058149171234567817";
    let ak = AccessKey::from_key(text).unwrap();
    assert_eq!(ak.environment, Environment::Other("3".into()));
    assert_eq!(ak.ruc, "1791251237001");
    assert_eq!(ak.base().unwrap(), text[..ACCESS_KEY_BASE_LEN]);

    // Voucher type 02 (nota de venta) is outside the catalogue too.
    let ak = AccessKey::from_key("2002202002179125123700120010010058149171234567817").unwrap();
    assert_eq!(ak.voucher_type, VoucherType::Other("02".into()));
    assert_eq!(ak.voucher_type.code(), "02");
}

#[test]
fn uncatalogued_codes_roundtrip_through_generate() {
    let mut ak = key("005814917");
    ak.voucher_type = VoucherType::Other("02".into());
    let text = ak.generate().unwrap();
    assert_eq!(&text[8..10], "02");
    assert_eq!(AccessKey::from_key(&text).unwrap(), ak);
}

#[test]
fn from_key_does_not_check_trailing_digits() {
    // Issue type 9 and validator digit 0 are both wrong, decode still succeeds.
    let ak = AccessKey::from_key("2002202001179125123700120010010058149171234567890").unwrap();
    assert_eq!(ak, key("005814917"));
}

#[test]
fn decode_into_preallocated_key() {
    let mut ak = AccessKey::default();
    ak.decode("2002202001179125123700120010010058149171234567817")
        .unwrap();
    assert_eq!(ak, key("005814917"));
    assert_eq!(ak.encode().unwrap(), "2002202001179125123700120010010058149171234567817");
}

#[test]
fn derived_number_and_series() {
    let ak = key("005814917");
    assert_eq!(ak.number(), "001-001-005814917");
    assert_eq!(ak.series(), "001001");
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

#[test]
fn builder_matches_reference_key() {
    let ak = AccessKeyBuilder::new(date(2020, 2, 20), VoucherType::Invoice, "1791251237001")
        .environment(Environment::Production)
        .series(1, 1)
        .sequential(5_814_917)
        .code("12345678")
        .build()
        .unwrap();
    assert_eq!(
        ak.generate().unwrap(),
        "2002202001179125123700120010010058149171234567817"
    );
}

#[test]
fn builder_rejects_wide_series() {
    let result = AccessKeyBuilder::new(date(2020, 2, 20), VoucherType::Invoice, "1791251237001")
        .series(1000, 1)
        .build();
    assert!(matches!(result, Err(SriError::AccessKeyFormat(_))));
}

// ---------------------------------------------------------------------------
// Serde
// ---------------------------------------------------------------------------

#[test]
fn access_key_json_is_the_key_string() {
    let json = serde_json::to_string(&key("005814917")).unwrap();
    assert_eq!(json, "\"2002202001179125123700120010010058149171234567817\"");

    let back: AccessKey = serde_json::from_str(&json).unwrap();
    assert_eq!(back, key("005814917"));
}

#[test]
fn access_key_json_rejects_short_key() {
    let result: Result<AccessKey, _> = serde_json::from_str("\"123\"");
    let err = result.unwrap_err().to_string();
    assert!(err.contains("invalid access key format"), "{err}");
}

#[test]
fn access_key_json_serialize_fails_on_bad_fields() {
    let mut ak = key("005814917");
    ak.code = "x".into();
    assert!(serde_json::to_string(&ak).is_err());
}
