use asn1_object::ber::BerObject;
use std::env;
use std::io;

pub fn main() -> io::Result<()> {
    let mut parse_as_ber = false;
    for file_name in env::args().skip(1) {
        match file_name.as_ref() {
            "--ber" => {
                parse_as_ber = true;
                continue;
            }
            "--der" => {
                parse_as_ber = false;
                continue;
            }
            _ => (),
        }
        let data = std::fs::read(&file_name)?;
        let res = if parse_as_ber {
            BerObject::from_bytes(&data)
        } else {
            BerObject::from_der_bytes(&data)
        };
        match res {
            Ok(obj) => println!("{:?}", obj.as_pretty(0, 2)),
            Err(e) => eprintln!("{}: could not decode object: {}", file_name, e),
        }
    }
    Ok(())
}
