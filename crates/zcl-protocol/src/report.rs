//! Attribute report records

use crate::types::{DataType, Value, ZclError};
use serde::Serialize;

/// A single `attribute id | type | value` record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeReport {
    pub attribute_id: u16,
    pub value: Value,
}

/// Decode the payload of a Report Attributes command
///
/// Payload format (repeated):
/// ```text
/// [Attribute ID: 2 bytes LE]
/// [Data Type: 1 byte]
/// [Value: variable]
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn decode_report_attributes(payload: &[u8]) -> Result<Vec<AttributeReport>, ZclError> {
    let mut reports = Vec::new();
    let mut idx = 0;

    while idx < payload.len() {
        if payload.len() < idx + 3 {
            return Err(ZclError::FrameTooShort(payload.len()));
        }

        let attribute_id = u16::from_le_bytes([payload[idx], payload[idx + 1]]);
        let type_code = payload[idx + 2];
        idx += 3;

        let data_type =
            DataType::from_u8(type_code).ok_or(ZclError::UnsupportedDataType(type_code))?;
        let (value, used) = Value::decode(data_type, &payload[idx..])?;
        idx += used;

        reports.push(AttributeReport {
            attribute_id,
            value,
        });
    }

    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_two_records() {
        // dimmer (data16) = 0x0101, led_on (bool) = true
        let payload = [0x00, 0x00, 0x09, 0x01, 0x01, 0x02, 0x00, 0x10, 0x01];
        let reports = decode_report_attributes(&payload).unwrap();
        assert_eq!(
            reports,
            vec![
                AttributeReport {
                    attribute_id: 0x0000,
                    value: Value::Data16(0x0101),
                },
                AttributeReport {
                    attribute_id: 0x0002,
                    value: Value::Bool(true),
                },
            ]
        );
    }

    #[test]
    fn test_unknown_type_code() {
        let result = decode_report_attributes(&[0x00, 0x00, 0xE2, 0x00]);
        assert!(matches!(result, Err(ZclError::UnsupportedDataType(0xE2))));
    }

    #[test]
    fn test_truncated_record() {
        let result = decode_report_attributes(&[0x00, 0x00]);
        assert!(matches!(result, Err(ZclError::FrameTooShort(2))));
    }
}
