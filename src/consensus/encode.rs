// SPDX-License-Identifier: CC0-1.0

//! Consensus-encodable types
//!
//! This is basically a replacement of the `Encodable` trait which does
//! normalization for endianness, etc., to ensure that data is always
//! encoded the same way consensus code hashes it.
//!
//! Only encoding is provided: this library builds genesis blocks and hashes
//! them, it never reads blocks off the wire.
//!

use std::io;

use hashes::hex::ToHex;

/// Data which can be encoded in a consensus-consistent way
pub trait Encodable {
    /// Encode an object with a well-defined format.
    /// Returns the number of bytes written on success.
    fn consensus_encode<S: io::Write>(&self, s: S) -> Result<usize, io::Error>;
}

/// Encode an object into a vector
pub fn serialize<T: Encodable + ?Sized>(data: &T) -> Vec<u8> {
    let mut encoder = Vec::new();
    let len = data.consensus_encode(&mut encoder).expect("in-memory writers don't error");
    debug_assert_eq!(len, encoder.len());
    encoder
}

/// Encode an object into a hex-encoded string
pub fn serialize_hex<T: Encodable + ?Sized>(data: &T) -> String {
    serialize(data)[..].to_hex()
}

/// A variable-length unsigned integer
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub struct VarInt(pub u64);

impl VarInt {
    /// Gets the length of this VarInt when encoded.
    /// Returns 1 for 0..=0xFC, 3 for 0xFD..=(2^16-1), 5 for 0x10000..=(2^32-1),
    /// and 9 otherwise.
    #[inline]
    pub fn len(&self) -> usize {
        match self.0 {
            0..=0xFC => 1,
            0xFD..=0xFFFF => 3,
            0x10000..=0xFFFFFFFF => 5,
            _ => 9,
        }
    }
}

macro_rules! impl_int_encodable {
    ($ty:ident) => {
        impl Encodable for $ty {
            #[inline]
            fn consensus_encode<S: io::Write>(&self, mut s: S) -> Result<usize, io::Error> {
                let bytes = self.to_le_bytes();
                s.write_all(&bytes)?;
                Ok(bytes.len())
            }
        }
    }
}

impl_int_encodable!(u8);
impl_int_encodable!(u16);
impl_int_encodable!(u32);
impl_int_encodable!(u64);
impl_int_encodable!(i32);
impl_int_encodable!(i64);

impl Encodable for VarInt {
    #[inline]
    fn consensus_encode<S: io::Write>(&self, mut s: S) -> Result<usize, io::Error> {
        match self.0 {
            0..=0xFC => {
                (self.0 as u8).consensus_encode(s)?;
                Ok(1)
            }
            0xFD..=0xFFFF => {
                s.write_all(&[0xFD])?;
                (self.0 as u16).consensus_encode(s)?;
                Ok(3)
            }
            0x10000..=0xFFFFFFFF => {
                s.write_all(&[0xFE])?;
                (self.0 as u32).consensus_encode(s)?;
                Ok(5)
            }
            _ => {
                s.write_all(&[0xFF])?;
                (self.0 as u64).consensus_encode(s)?;
                Ok(9)
            }
        }
    }
}

macro_rules! impl_array {
    ($size:expr) => {
        impl Encodable for [u8; $size] {
            #[inline]
            fn consensus_encode<S: io::Write>(&self, mut s: S) -> Result<usize, io::Error> {
                s.write_all(&self[..])?;
                Ok(self.len())
            }
        }
    }
}

impl_array!(4);
impl_array!(16);
impl_array!(32);

/// Byte vectors are length-prefixed with a [`VarInt`].
impl Encodable for [u8] {
    #[inline]
    fn consensus_encode<S: io::Write>(&self, mut s: S) -> Result<usize, io::Error> {
        let vi_len = VarInt(self.len() as u64).consensus_encode(&mut s)?;
        s.write_all(self)?;
        Ok(vi_len + self.len())
    }
}

impl<T: Encodable> Encodable for Vec<T> {
    #[inline]
    fn consensus_encode<S: io::Write>(&self, mut s: S) -> Result<usize, io::Error> {
        let mut len = VarInt(self.len() as u64).consensus_encode(&mut s)?;
        for c in self.iter() {
            len += c.consensus_encode(&mut s)?;
        }
        Ok(len)
    }
}

#[cfg(test)]
mod tests {
    use super::{serialize, serialize_hex, VarInt};

    #[test]
    fn serialize_int_test() {
        assert_eq!(serialize(&1u8), vec![1u8]);
        assert_eq!(serialize(&256u16), vec![0u8, 1]);
        assert_eq!(serialize(&1457456114u32), vec![0xf2, 0x03, 0xdf, 0x56]);
        assert_eq!(serialize(&-1i32), vec![255u8, 255, 255, 255]);
        assert_eq!(serialize(&0i64), vec![0u8; 8]);
        assert_eq!(serialize(&0x1e0fffffu32), vec![0xff, 0xff, 0x0f, 0x1e]);
    }

    #[test]
    fn serialize_varint_test() {
        assert_eq!(serialize(&VarInt(10)), vec![10u8]);
        assert_eq!(serialize(&VarInt(0xFC)), vec![0xFCu8]);
        assert_eq!(serialize(&VarInt(0xFD)), vec![0xFDu8, 0xFD, 0]);
        assert_eq!(serialize(&VarInt(0xFFF)), vec![0xFDu8, 0xFF, 0xF]);
        assert_eq!(serialize(&VarInt(0xF0F0F0F)), vec![0xFEu8, 0xF, 0xF, 0xF, 0xF]);
        assert_eq!(
            serialize(&VarInt(0xF0F0F0F0F0E0)),
            vec![0xFFu8, 0xE0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0, 0]
        );
        assert_eq!(VarInt(0xFD).len(), 3);
        assert_eq!(VarInt(0x10000).len(), 5);
    }

    #[test]
    fn serialize_bytes_test() {
        assert_eq!(serialize(&b"BTC"[..]), vec![3u8, b'B', b'T', b'C']);
        assert_eq!(serialize_hex(&[0xd4u8, 0xf5, 0xc3, 0x34]), "d4f5c334");
        assert_eq!(serialize(&Vec::<u32>::new()), vec![0u8]);
        assert_eq!(serialize(&vec![1u32, 2]), vec![2u8, 1, 0, 0, 0, 2, 0, 0, 0]);
    }
}
