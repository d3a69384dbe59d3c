#![no_main]

use libfuzzer_sys::fuzz_target;
use sricore::sri::xml::from_xml_element;
use sricore::sri::{AccessKey, SriBool, VoucherDate};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = from_xml_element::<AccessKey>(s);
        let _ = from_xml_element::<SriBool>(s);
        let _ = from_xml_element::<VoucherDate>(s);
    }
});
