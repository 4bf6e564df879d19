#![no_main]
use asn1_object::ber::BerObject;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // DER input is canonical: re-encoding gives back the same bytes
    if let Ok(obj) = BerObject::from_der_bytes(data) {
        assert_eq!(obj.to_der_vec().as_deref(), Ok(data));
    }
});
