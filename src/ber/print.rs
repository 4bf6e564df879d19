use crate::ber::{BerObject, BerObjectContent};
use std::fmt;
use std::str;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PrettyPrinterFlag {
    ShowHeader,
}

/// Indented, human-readable view of an object tree
pub struct PrettyBer<'a> {
    obj: &'a BerObject,
    indent: usize,
    inc: usize,

    flags: Vec<PrettyPrinterFlag>,
}

impl BerObject {
    pub fn as_pretty(&self, indent: usize, increment: usize) -> PrettyBer<'_> {
        PrettyBer {
            obj: self,
            indent,
            inc: increment,

            flags: Vec::new(),
        }
    }
}

impl<'a> PrettyBer<'a> {
    pub fn set_flag(&mut self, flag: PrettyPrinterFlag) {
        if !self.flags.contains(&flag) {
            self.flags.push(flag);
        }
    }

    pub fn next_indent<'b>(&self, obj: &'b BerObject) -> PrettyBer<'b> {
        PrettyBer {
            obj,
            indent: self.indent + self.inc,
            inc: self.inc,
            flags: self.flags.to_vec(),
        }
    }

    fn write_indent(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.indent > 0 {
            write!(f, "{:1$}", " ", self.indent)?;
        }
        Ok(())
    }
}

struct Hex<'a>(&'a [u8]);

impl<'a> fmt::Debug for Hex<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("[")?;
        for (i, b) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "0x{:02x}", b)?;
        }
        f.write_str("]")
    }
}

fn print_time(f: &mut fmt::Formatter, s: &[u8], ty: &str) -> fmt::Result {
    match str::from_utf8(s) {
        Ok(b) => writeln!(f, "{}(\"{}\")", ty, b),
        Err(e) => writeln!(f, "{}({:?}) <error decoding utf8 string: {:?}>", ty, Hex(s), e),
    }
}

impl<'a> fmt::Debug for PrettyBer<'a> {
    #[rustfmt::skip]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.write_indent(f)?;
        if self.flags.contains(&PrettyPrinterFlag::ShowHeader) {
            let hdr = &self.obj.header;
            write!(f, "[c:{}, s:{}, t:{}] ", hdr.class, self.obj.is_constructed(), hdr.tag)?;
        };
        match self.obj.content {
            BerObjectContent::Boolean(b)             => writeln!(f, "Boolean({:?})", b),
            BerObjectContent::Integer(ref i)         => writeln!(f, "Integer({:?})", Hex(i)),
            BerObjectContent::OID(ref v)             => writeln!(f, "OID({})", v),
            BerObjectContent::Null                   => writeln!(f, "Null"),
            BerObjectContent::OctetString(ref v)     => writeln!(f, "OctetString({:?})", Hex(v)),
            BerObjectContent::BitString(u,ref v)     => writeln!(f, "BitString({},{:?})", u, Hex(&v.data)),
            BerObjectContent::GeneralizedTime(ref s) => print_time(f, s, "GeneralizedTime"),
            BerObjectContent::UTCTime(ref s)         => print_time(f, s, "UTCTime"),
            BerObjectContent::PrintableString(ref s) => writeln!(f, "PrintableString(\"{}\")", s),
            BerObjectContent::NumericString(ref s)   => writeln!(f, "NumericString(\"{}\")", s),
            BerObjectContent::UTF8String(ref s)      => writeln!(f, "UTF8String(\"{}\")", s),
            BerObjectContent::IA5String(ref s)       => writeln!(f, "IA5String(\"{}\")", s),
            BerObjectContent::Tagged(class, tag, ref obj) => {
                writeln!(f, "{} [{}] {{", class, tag.0)?;
                write!(f, "{:?}", self.next_indent(obj))?;
                self.write_indent(f)?;
                writeln!(f, "}}")
            },
            BerObjectContent::Set(ref v) |
            BerObjectContent::Sequence(ref v)        => {
                let ty = if let BerObjectContent::Set(_) = self.obj.content { "Set" } else { "Sequence" };
                writeln!(f, "{}[", ty)?;
                for o in v {
                    write!(f, "{:?}", self.next_indent(o))?;
                };
                self.write_indent(f)?;
                writeln!(f, "]")
            },
            BerObjectContent::Unknown(class, tag, ref o) => {
                writeln!(f, "Unknown({} [{}], {:?})", class, tag.0, Hex(o))
            },
        }
    }
}
