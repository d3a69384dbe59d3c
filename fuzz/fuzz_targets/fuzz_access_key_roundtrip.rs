#![no_main]

use libfuzzer_sys::fuzz_target;
use sricore::sri::AccessKey;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(ak) = AccessKey::from_key(s) else {
        return;
    };
    // Every stored field re-encodes to the digits it was read from.
    let key = ak.generate().expect("decoded key must encode");
    assert_eq!(key[..47], s[..47]);
});
