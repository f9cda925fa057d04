//! ZCL frame header and frame control handling

use crate::types::ZclError;
use serde::Serialize;

/// Minimum header size: `frame_control(1)` + tsn(1) + `command_id(1)` = 3
pub const MIN_HEADER_SIZE: usize = 3;

/// ZCL frame types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum FrameType {
    Global = 0x00,
    ClusterSpecific = 0x01,
}

/// ZCL direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Direction {
    ClientToServer = 0x00,
    ServerToClient = 0x01,
}

/// Frame control byte
///
/// ```text
/// bit 0-1  frame type
/// bit 2    manufacturer specific
/// bit 3    direction
/// bit 4    disable default response
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FrameControl {
    pub frame_type: FrameType,
    pub is_manufacturer_specific: bool,
    pub direction: Direction,
    pub disable_default_response: bool,
}

impl FrameControl {
    #[allow(clippy::missing_errors_doc)]
    pub fn from_byte(byte: u8) -> Result<Self, ZclError> {
        let frame_type = match byte & 0x03 {
            0x00 => FrameType::Global,
            0x01 => FrameType::ClusterSpecific,
            other => {
                return Err(ZclError::InvalidFrame(format!(
                    "Reserved frame type: {other}"
                )))
            }
        };

        Ok(Self {
            frame_type,
            is_manufacturer_specific: (byte & 0x04) != 0,
            direction: if (byte & 0x08) != 0 {
                Direction::ServerToClient
            } else {
                Direction::ClientToServer
            },
            disable_default_response: (byte & 0x10) != 0,
        })
    }

    #[must_use]
    pub fn to_byte(&self) -> u8 {
        let mut byte = self.frame_type as u8;
        if self.is_manufacturer_specific {
            byte |= 0x04;
        }
        if self.direction == Direction::ServerToClient {
            byte |= 0x08;
        }
        if self.disable_default_response {
            byte |= 0x10;
        }
        byte
    }

    /// Cluster-specific, client-to-server, default response enabled
    #[must_use]
    pub fn cluster_command() -> Self {
        Self {
            frame_type: FrameType::ClusterSpecific,
            is_manufacturer_specific: false,
            direction: Direction::ClientToServer,
            disable_default_response: false,
        }
    }
}

/// ZCL frame header (Zigbee Cluster Library)
///
/// Frame format:
/// ```text
/// [Frame Control: 1 byte]
/// [Manufacturer Code: 2 bytes LE] (only if manufacturer-specific bit set)
/// [Transaction Sequence: 1 byte]
/// [Command ID: 1 byte]
/// [Payload: variable]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ZclHeader {
    pub frame_control: FrameControl,
    pub manufacturer_code: Option<u16>,
    pub tsn: u8,
    pub command_id: u8,
}

impl ZclHeader {
    /// Header for a cluster-specific command (client to server)
    #[must_use]
    pub fn cluster_command(tsn: u8, command_id: u8) -> Self {
        Self {
            frame_control: FrameControl::cluster_command(),
            manufacturer_code: None,
            tsn,
            command_id,
        }
    }

    /// Header for a manufacturer-specific cluster command
    #[must_use]
    pub fn manufacturer_command(manufacturer_code: u16, tsn: u8, command_id: u8) -> Self {
        Self {
            frame_control: FrameControl {
                is_manufacturer_specific: true,
                ..FrameControl::cluster_command()
            },
            manufacturer_code: Some(manufacturer_code),
            tsn,
            command_id,
        }
    }

    /// Parse a ZCL header from raw ASDU bytes, returning the remaining payload
    #[allow(clippy::missing_errors_doc)]
    pub fn parse(data: &[u8]) -> Result<(Self, &[u8]), ZclError> {
        if data.len() < MIN_HEADER_SIZE {
            return Err(ZclError::FrameTooShort(data.len()));
        }

        let frame_control = FrameControl::from_byte(data[0])?;
        let mut idx = 1;

        let manufacturer_code = if frame_control.is_manufacturer_specific {
            if data.len() < idx + 2 + 2 {
                return Err(ZclError::FrameTooShort(data.len()));
            }
            let code = u16::from_le_bytes([data[idx], data[idx + 1]]);
            idx += 2;
            Some(code)
        } else {
            None
        };

        let tsn = data[idx];
        idx += 1;
        let command_id = data[idx];
        idx += 1;

        Ok((
            Self {
                frame_control,
                manufacturer_code,
                tsn,
                command_id,
            },
            &data[idx..],
        ))
    }

    #[must_use]
    pub fn is_cluster_specific(&self) -> bool {
        self.frame_control.frame_type == FrameType::ClusterSpecific
    }

    /// Serialize header followed by `payload`
    #[must_use]
    pub fn serialize(&self, payload: &[u8]) -> Vec<u8> {
        let mut data = Vec::with_capacity(5 + payload.len());
        let mut frame_control = self.frame_control;
        frame_control.is_manufacturer_specific = self.manufacturer_code.is_some();
        data.push(frame_control.to_byte());
        if let Some(mfr) = self.manufacturer_code {
            data.extend_from_slice(&mfr.to_le_bytes());
        }
        data.push(self.tsn);
        data.push(self.command_id);
        data.extend_from_slice(payload);
        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cluster_command() {
        let (hdr, payload) = ZclHeader::parse(&[0x01, 0x2A, 0x00, 0x0A, 0x01]).unwrap();
        assert!(hdr.is_cluster_specific());
        assert_eq!(hdr.manufacturer_code, None);
        assert_eq!(hdr.tsn, 0x2A);
        assert_eq!(hdr.command_id, 0x00);
        assert_eq!(payload, &[0x0A, 0x01]);
    }

    #[test]
    fn test_parse_manufacturer_specific() {
        let data = [0x0D, 0x2B, 0x12, 0x07, 0x00];
        let (hdr, payload) = ZclHeader::parse(&data).unwrap();
        assert_eq!(hdr.manufacturer_code, Some(0x122B));
        assert_eq!(hdr.frame_control.direction, Direction::ServerToClient);
        assert_eq!(hdr.tsn, 0x07);
        assert!(payload.is_empty());
        assert_eq!(hdr.serialize(payload), data.to_vec());
    }

    #[test]
    fn test_header_too_short() {
        assert!(matches!(
            ZclHeader::parse(&[0x01, 0x02]),
            Err(ZclError::FrameTooShort(2))
        ));
        // Manufacturer bit set but code truncated
        assert!(matches!(
            ZclHeader::parse(&[0x05, 0x2B, 0x12]),
            Err(ZclError::FrameTooShort(3))
        ));
    }

    #[test]
    fn test_reserved_frame_type() {
        assert!(matches!(
            ZclHeader::parse(&[0x03, 0x00, 0x00]),
            Err(ZclError::InvalidFrame(_))
        ));
    }
}
