//! Common types used throughout the protocol

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Protocol errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ZclError {
    #[error("Invalid frame: {0}")]
    InvalidFrame(String),

    #[error("Frame too short: {0} bytes")]
    FrameTooShort(usize),

    #[error("Unsupported data type: {0:#04X}")]
    UnsupportedDataType(u8),

    #[error("Unknown command ID: {0:#04X}")]
    UnknownCommand(u8),
}

/// ZCL data types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum DataType {
    NoData = 0x00,
    Data8 = 0x08,
    Data16 = 0x09,
    Bool = 0x10,
    Bitmap8 = 0x18,
    Bitmap16 = 0x19,
    Uint8 = 0x20,
    Uint16 = 0x21,
    Uint24 = 0x22,
    Uint32 = 0x23,
    Int8 = 0x28,
    Int16 = 0x29,
    Enum8 = 0x30,
    Enum16 = 0x31,
    OctetString = 0x41,
    CharString = 0x42,
}

impl DataType {
    #[must_use]
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0x00 => Some(DataType::NoData),
            0x08 => Some(DataType::Data8),
            0x09 => Some(DataType::Data16),
            0x10 => Some(DataType::Bool),
            0x18 => Some(DataType::Bitmap8),
            0x19 => Some(DataType::Bitmap16),
            0x20 => Some(DataType::Uint8),
            0x21 => Some(DataType::Uint16),
            0x22 => Some(DataType::Uint24),
            0x23 => Some(DataType::Uint32),
            0x28 => Some(DataType::Int8),
            0x29 => Some(DataType::Int16),
            0x30 => Some(DataType::Enum8),
            0x31 => Some(DataType::Enum16),
            0x41 => Some(DataType::OctetString),
            0x42 => Some(DataType::CharString),
            _ => None,
        }
    }

    /// Fixed encoded width in bytes, `None` for length-prefixed types
    #[must_use]
    pub fn fixed_size(&self) -> Option<usize> {
        match self {
            DataType::NoData => Some(0),
            DataType::Data8
            | DataType::Bool
            | DataType::Bitmap8
            | DataType::Uint8
            | DataType::Int8
            | DataType::Enum8 => Some(1),
            DataType::Data16
            | DataType::Bitmap16
            | DataType::Uint16
            | DataType::Int16
            | DataType::Enum16 => Some(2),
            DataType::Uint24 => Some(3),
            DataType::Uint32 => Some(4),
            DataType::OctetString | DataType::CharString => None,
        }
    }
}

/// A typed ZCL value, as carried in command arguments and attribute records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Value {
    Bool(bool),
    Data8(u8),
    Data16(u16),
    Bitmap8(u8),
    Bitmap16(u16),
    Uint8(u8),
    Uint16(u16),
    Uint24(u32),
    Uint32(u32),
    Int8(i8),
    Int16(i16),
    Enum8(u8),
    Enum16(u16),
    OctetString(Vec<u8>),
    CharString(String),
}

impl Value {
    /// Decode one value of `data_type` from the start of `data`.
    ///
    /// Returns the value and the number of bytes consumed.
    #[allow(clippy::missing_errors_doc)]
    pub fn decode(data_type: DataType, data: &[u8]) -> Result<(Self, usize), ZclError> {
        if let Some(size) = data_type.fixed_size() {
            if data.len() < size {
                return Err(ZclError::FrameTooShort(data.len()));
            }
        }

        let value = match data_type {
            DataType::NoData => return Err(ZclError::UnsupportedDataType(data_type as u8)),
            DataType::Bool => Value::Bool(data[0] != 0),
            DataType::Data8 => Value::Data8(data[0]),
            DataType::Bitmap8 => Value::Bitmap8(data[0]),
            DataType::Uint8 => Value::Uint8(data[0]),
            DataType::Int8 => Value::Int8(data[0] as i8),
            DataType::Enum8 => Value::Enum8(data[0]),
            DataType::Data16 => Value::Data16(u16::from_le_bytes([data[0], data[1]])),
            DataType::Bitmap16 => Value::Bitmap16(u16::from_le_bytes([data[0], data[1]])),
            DataType::Uint16 => Value::Uint16(u16::from_le_bytes([data[0], data[1]])),
            DataType::Int16 => Value::Int16(i16::from_le_bytes([data[0], data[1]])),
            DataType::Enum16 => Value::Enum16(u16::from_le_bytes([data[0], data[1]])),
            DataType::Uint24 => Value::Uint24(u32::from_le_bytes([data[0], data[1], data[2], 0])),
            DataType::Uint32 => {
                Value::Uint32(u32::from_le_bytes([data[0], data[1], data[2], data[3]]))
            }
            DataType::OctetString | DataType::CharString => {
                let Some(&len) = data.first() else {
                    return Err(ZclError::FrameTooShort(0));
                };
                let len = len as usize;
                if data.len() < 1 + len {
                    return Err(ZclError::FrameTooShort(data.len()));
                }
                let bytes = data[1..=len].to_vec();
                let value = if data_type == DataType::CharString {
                    let s = String::from_utf8(bytes).map_err(|e| {
                        ZclError::InvalidFrame(format!("Invalid character string: {e}"))
                    })?;
                    Value::CharString(s)
                } else {
                    Value::OctetString(bytes)
                };
                return Ok((value, 1 + len));
            }
        };

        // Fixed-size types were length-checked above
        Ok((value, data_type.fixed_size().unwrap_or(0)))
    }

    /// ZCL data type of this value
    #[must_use]
    pub fn data_type(&self) -> DataType {
        match self {
            Value::Bool(_) => DataType::Bool,
            Value::Data8(_) => DataType::Data8,
            Value::Data16(_) => DataType::Data16,
            Value::Bitmap8(_) => DataType::Bitmap8,
            Value::Bitmap16(_) => DataType::Bitmap16,
            Value::Uint8(_) => DataType::Uint8,
            Value::Uint16(_) => DataType::Uint16,
            Value::Uint24(_) => DataType::Uint24,
            Value::Uint32(_) => DataType::Uint32,
            Value::Int8(_) => DataType::Int8,
            Value::Int16(_) => DataType::Int16,
            Value::Enum8(_) => DataType::Enum8,
            Value::Enum16(_) => DataType::Enum16,
            Value::OctetString(_) => DataType::OctetString,
            Value::CharString(_) => DataType::CharString,
        }
    }

    /// Encode to little-endian bytes (strings are length prefixed)
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Value::Bool(b) => vec![u8::from(*b)],
            Value::Data8(v) | Value::Bitmap8(v) | Value::Uint8(v) | Value::Enum8(v) => vec![*v],
            Value::Int8(v) => v.to_le_bytes().to_vec(),
            Value::Data16(v) | Value::Bitmap16(v) | Value::Uint16(v) | Value::Enum16(v) => {
                v.to_le_bytes().to_vec()
            }
            Value::Int16(v) => v.to_le_bytes().to_vec(),
            Value::Uint24(v) => v.to_le_bytes()[..3].to_vec(),
            Value::Uint32(v) => v.to_le_bytes().to_vec(),
            Value::OctetString(bytes) => encode_string(bytes),
            Value::CharString(s) => encode_string(s.as_bytes()),
        }
    }

    /// Numeric view of integer-like values
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Bool(b) => Some(u64::from(*b)),
            Value::Data8(v) | Value::Bitmap8(v) | Value::Uint8(v) | Value::Enum8(v) => {
                Some(u64::from(*v))
            }
            Value::Data16(v) | Value::Bitmap16(v) | Value::Uint16(v) | Value::Enum16(v) => {
                Some(u64::from(*v))
            }
            Value::Uint24(v) | Value::Uint32(v) => Some(u64::from(*v)),
            Value::Int8(v) => u64::try_from(*v).ok(),
            Value::Int16(v) => u64::try_from(*v).ok(),
            Value::OctetString(_) | Value::CharString(_) => None,
        }
    }
}

/// Longest string payload; a length byte of 0xFF marks an invalid string
pub const MAX_STRING_LEN: usize = 0xFE;

fn encode_string(bytes: &[u8]) -> Vec<u8> {
    let len = bytes.len().min(MAX_STRING_LEN);
    if len < bytes.len() {
        tracing::trace!(
            "Truncating {} byte string to {} bytes",
            bytes.len(),
            MAX_STRING_LEN
        );
    }
    let mut data = Vec::with_capacity(len + 1);
    // len <= MAX_STRING_LEN
    data.push(len as u8);
    data.extend_from_slice(&bytes[..len]);
    data
}

/// Decode an ordered argument sequence against a command schema
#[allow(clippy::missing_errors_doc)]
pub fn decode_args(schema: &[DataType], payload: &[u8]) -> Result<Vec<Value>, ZclError> {
    let mut args = Vec::with_capacity(schema.len());
    let mut idx = 0;

    for data_type in schema {
        let (value, used) = Value::decode(*data_type, &payload[idx..])?;
        args.push(value);
        idx += used;
    }

    if idx < payload.len() {
        tracing::trace!(
            "Ignoring {} trailing bytes after arguments: {:02x?}",
            payload.len() - idx,
            &payload[idx..]
        );
    }

    Ok(args)
}

/// Address mode for APS frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum AddressMode {
    Group = 0x01,
    Nwk = 0x02,
    Ieee = 0x03,
    NwkAndIeee = 0x04,
}

impl TryFrom<u8> for AddressMode {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, u8> {
        match value {
            0x01 => Ok(AddressMode::Group),
            0x02 => Ok(AddressMode::Nwk),
            0x03 => Ok(AddressMode::Ieee),
            0x04 => Ok(AddressMode::NwkAndIeee),
            _ => Err(value),
        }
    }
}

/// Destination addressing of an incoming frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "address", rename_all = "snake_case")]
pub enum Addressing {
    Group(u16),
    Nwk(u16),
    Ieee([u8; 8]),
    Broadcast(u16),
}

impl Addressing {
    /// Lowest NWK address reserved for broadcasts
    pub const BROADCAST_MIN: u16 = 0xFFF8;

    #[must_use]
    pub fn is_group(&self) -> bool {
        matches!(self, Addressing::Group(_))
    }

    #[must_use]
    pub fn is_broadcast(&self) -> bool {
        match self {
            Addressing::Broadcast(_) => true,
            Addressing::Nwk(addr) => *addr >= Self::BROADCAST_MIN,
            Addressing::Group(_) | Addressing::Ieee(_) => false,
        }
    }

    /// Address mode this addressing is carried with
    #[must_use]
    pub fn mode(&self) -> AddressMode {
        match self {
            Addressing::Group(_) => AddressMode::Group,
            Addressing::Nwk(_) | Addressing::Broadcast(_) => AddressMode::Nwk,
            Addressing::Ieee(_) => AddressMode::Ieee,
        }
    }
}

impl std::fmt::Display for Addressing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Addressing::Group(id) => write!(f, "group {id:#06x}"),
            Addressing::Nwk(addr) => write!(f, "nwk {addr:#06x}"),
            Addressing::Ieee(ieee) => write!(f, "ieee {}", format_ieee(ieee)),
            Addressing::Broadcast(addr) => write!(f, "broadcast {addr:#06x}"),
        }
    }
}

/// Format IEEE address as string (colon-separated hex)
#[must_use]
pub fn format_ieee(ieee: &[u8; 8]) -> String {
    // IEEE is stored little-endian, display big-endian
    ieee.iter()
        .rev()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(":")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_preset_args() {
        let args = decode_args(&[DataType::Uint8, DataType::Uint8], &[0x0A, 0x01]).unwrap();
        assert_eq!(args, vec![Value::Uint8(10), Value::Uint8(1)]);
    }

    #[test]
    fn test_decode_truncated() {
        let result = decode_args(&[DataType::Uint8, DataType::Uint16], &[0x0A, 0x01]);
        assert!(matches!(result, Err(ZclError::FrameTooShort(1))));
    }

    #[test]
    fn test_decode_trailing_bytes_ignored() {
        let args = decode_args(&[DataType::Bool], &[0x01, 0xFF, 0xFF]).unwrap();
        assert_eq!(args, vec![Value::Bool(true)]);
    }

    #[test]
    fn test_decode_char_string() {
        let (value, used) = Value::decode(DataType::CharString, b"\x07Legrand").unwrap();
        assert_eq!(value, Value::CharString("Legrand".to_string()));
        assert_eq!(used, 8);
    }

    #[test]
    fn test_decode_invalid_utf8() {
        let result = Value::decode(DataType::CharString, &[0x02, 0xC3, 0x28]);
        assert!(matches!(result, Err(ZclError::InvalidFrame(_))));
    }

    #[test]
    fn test_uint24_encoding() {
        let value = Value::Uint24(0x0012_3456);
        assert_eq!(value.encode(), vec![0x56, 0x34, 0x12]);
        assert_eq!(Value::decode(DataType::Uint24, &value.encode()).unwrap().0, value);
    }

    #[test]
    fn test_long_string_encoding() {
        let encoded = Value::OctetString(vec![0xAB; 300]).encode();
        assert_eq!(encoded.len(), 1 + MAX_STRING_LEN);
        assert_eq!(encoded[0], 0xFE);

        let encoded = Value::CharString("x".repeat(255)).encode();
        assert_eq!(encoded[0], 0xFE);
        let (value, used) = Value::decode(DataType::CharString, &encoded).unwrap();
        assert_eq!(value, Value::CharString("x".repeat(254)));
        assert_eq!(used, 255);

        assert_eq!(Value::CharString("ab".into()).encode(), b"\x02ab".to_vec());
    }

    #[test]
    fn test_as_u64() {
        assert_eq!(Value::Data16(370).as_u64(), Some(370));
        assert_eq!(Value::Int8(-1).as_u64(), None);
        assert_eq!(Value::CharString("x".into()).as_u64(), None);
    }

    #[test]
    fn test_broadcast_addressing() {
        assert!(Addressing::Nwk(0xFFFD).is_broadcast());
        assert!(!Addressing::Nwk(0x1234).is_broadcast());
        assert!(Addressing::Group(0x0001).is_group());
        assert_eq!(Addressing::Broadcast(0xFFFF).mode(), AddressMode::Nwk);
    }

    #[test]
    fn test_format_ieee() {
        let ieee = [0x77, 0x66, 0x55, 0x44, 0x33, 0x22, 0x11, 0x00];
        assert_eq!(format_ieee(&ieee), "00:11:22:33:44:55:66:77");
    }

    #[test]
    fn test_value_json_shape() {
        let json = serde_json::to_value(Value::Uint8(10)).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "uint8", "value": 10 }));
    }
}
