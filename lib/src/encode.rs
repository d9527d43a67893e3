//! Consensus wire encoding: little-endian integers and CompactSize length
//! prefixes. Everything that gets hashed goes through [`Encodable`].

use crate::compact::CompactTarget;
use crate::sha256::Hash;

pub trait Encodable {
    fn consensus_encode(&self, writer: &mut Vec<u8>);

    fn consensus_bytes(&self) -> Vec<u8> {
        let mut buffer = Vec::new();
        self.consensus_encode(&mut buffer);
        buffer
    }
}

/// CompactSize length prefix.
pub fn write_compact_size(writer: &mut Vec<u8>, n: u64) {
    match n {
        0..=0xfc => writer.push(n as u8),
        0xfd..=0xffff => {
            writer.push(0xfd);
            writer.extend_from_slice(&(n as u16).to_le_bytes());
        }
        0x1_0000..=0xffff_ffff => {
            writer.push(0xfe);
            writer.extend_from_slice(&(n as u32).to_le_bytes());
        }
        _ => {
            writer.push(0xff);
            writer.extend_from_slice(&n.to_le_bytes());
        }
    }
}

/// Length-prefixed byte string.
pub fn write_var_bytes(writer: &mut Vec<u8>, bytes: &[u8]) {
    write_compact_size(writer, bytes.len() as u64);
    writer.extend_from_slice(bytes);
}

macro_rules! impl_int_encodable {
    ($($ty:ty),*) => {
        $(
            impl Encodable for $ty {
                fn consensus_encode(&self, writer: &mut Vec<u8>) {
                    writer.extend_from_slice(&self.to_le_bytes());
                }
            }
        )*
    };
}

impl_int_encodable!(u16, u32, u64, i32, i64);

impl Encodable for Hash {
    fn consensus_encode(&self, writer: &mut Vec<u8>) {
        writer.extend_from_slice(&self.as_bytes());
    }
}

impl Encodable for CompactTarget {
    fn consensus_encode(&self, writer: &mut Vec<u8>) {
        self.to_consensus().consensus_encode(writer);
    }
}

impl<T: Encodable> Encodable for Vec<T> {
    fn consensus_encode(&self, writer: &mut Vec<u8>) {
        write_compact_size(writer, self.len() as u64);
        for item in self {
            item.consensus_encode(writer);
        }
    }
}
