#![no_main]
use asn1_object::ber::BerObject;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // re-encoding is stable: the DER form decodes to an equal object
    if let Ok(obj) = BerObject::from_bytes(data) {
        if let Ok(der) = obj.to_der_vec() {
            let again = BerObject::from_bytes(&der).expect("DER re-encoding cannot be decoded");
            assert_eq!(again, obj);
            assert_eq!(again.to_der_vec().as_ref(), Ok(&der));
        }
    }
});
