#![cfg(feature = "xml")]

use chrono::NaiveDate;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use sricore::sri::xml::*;
use sricore::sri::*;
use std::io::Cursor;

const KEY: &str = "2002202001179125123700120010010058149171234567817";

fn reference_key() -> AccessKey {
    AccessKey {
        date: NaiveDate::from_ymd_opt(2020, 2, 20).unwrap(),
        voucher_type: VoucherType::Invoice,
        ruc: "1791251237001".into(),
        environment: Environment::Production,
        establishment: "001".into(),
        emission_point: "001".into(),
        sequential: "005814917".into(),
        code: "12345678".into(),
    }
}

#[test]
fn access_key_to_xml() {
    let xml = to_xml_element("AccessKey", &reference_key()).unwrap();
    insta::assert_snapshot!(xml, @"<AccessKey>2002202001179125123700120010010058149171234567817</AccessKey>");
}

#[test]
fn access_key_from_xml() {
    let xml = format!("<AccessKey>{KEY}</AccessKey>");
    let ak: AccessKey = from_xml_element(&xml).unwrap();
    assert_eq!(ak, reference_key());
}

#[test]
fn access_key_from_xml_after_declaration() {
    let xml = format!("<?xml version=\"1.0\"?>\n<claveAcceso>{KEY}</claveAcceso>\n");
    let ak: AccessKey = from_xml_element(&xml).unwrap();
    assert_eq!(ak, reference_key());
}

#[test]
fn padded_access_key_text_is_rejected() {
    let xml = format!("<claveAcceso> {KEY} </claveAcceso>");
    assert_eq!(
        from_xml_element::<AccessKey>(&xml),
        Err(SriError::AccessKeyFormat(format!(" {KEY} ")))
    );
}

#[test]
fn decode_into_preallocated() {
    let mut ak = AccessKey::default();
    decode_xml_element(&format!("<AccessKey>{KEY}</AccessKey>"), &mut ak).unwrap();
    assert_eq!(ak, reference_key());
}

#[test]
fn invalid_key_in_xml() {
    let result: Result<AccessKey, _> = from_xml_element("<AccessKey>123</AccessKey>");
    assert_eq!(result, Err(SriError::AccessKeyFormat("123".into())));
}

#[test]
fn writing_unencodable_key_fails() {
    let mut ak = reference_key();
    ak.sequential = "1".into();
    assert!(matches!(
        to_xml_element("AccessKey", &ak),
        Err(SriError::AccessKeyFormat(_))
    ));
}

#[test]
fn bool_and_date_elements() {
    assert_eq!(
        to_xml_element("Bool", &SriBool(true)).unwrap(),
        "<Bool>SI</Bool>"
    );
    assert_eq!(
        to_xml_element("Bool", &SriBool(false)).unwrap(),
        "<Bool>NO</Bool>"
    );
    assert!(from_xml_element::<SriBool>("<Bool>INVALID</Bool>").is_err());

    let d = VoucherDate(NaiveDate::from_ymd_opt(2020, 2, 20).unwrap());
    assert_eq!(
        to_xml_element("Date", &d).unwrap(),
        "<Date>20/02/2020</Date>"
    );
    assert_eq!(from_xml_element::<VoucherDate>("<Date>20/02/2020</Date>"), Ok(d));
    assert!(from_xml_element::<VoucherDate>("<Date>2020-02-20</Date>").is_err());
}

#[test]
fn write_inside_larger_document() {
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    writer
        .write_event(Event::Start(BytesStart::new("infoTributaria")))
        .unwrap();
    write_element(&mut writer, "claveAcceso", &reference_key()).unwrap();
    write_element(&mut writer, "obligadoContabilidad", &SriBool(false)).unwrap();
    writer
        .write_event(Event::End(BytesEnd::new("infoTributaria")))
        .unwrap();
    let xml = String::from_utf8(writer.into_inner().into_inner()).unwrap();
    assert_eq!(
        xml,
        format!(
            "<infoTributaria><claveAcceso>{KEY}</claveAcceso><obligadoContabilidad>NO</obligadoContabilidad></infoTributaria>"
        )
    );
}
