#![no_main]

use libfuzzer_sys::fuzz_target;
use sricore::id;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = id::validate_cedula(s);
        let auto = id::validate_ruc(s).is_ok();
        let fixed = id::validate_natural_ruc(s).is_ok()
            || id::validate_private_ruc(s).is_ok()
            || id::validate_public_ruc(s).is_ok();
        assert_eq!(auto, fixed, "pipelines disagree on {s:?}");
    }
});
