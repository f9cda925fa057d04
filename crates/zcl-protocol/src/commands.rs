//! ZCL global command definitions

/// ZCL global (profile-wide) commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum GlobalCommand {
    ReadAttributes = 0x00,
    ReadAttributesResponse = 0x01,
    WriteAttributes = 0x02,
    WriteAttributesUndivided = 0x03,
    WriteAttributesResponse = 0x04,
    WriteAttributesNoResponse = 0x05,
    ConfigureReporting = 0x06,
    ConfigureReportingResponse = 0x07,
    ReadReportingConfig = 0x08,
    ReadReportingConfigResponse = 0x09,
    ReportAttributes = 0x0A,
    DefaultResponse = 0x0B,
    DiscoverAttributes = 0x0C,
    DiscoverAttributesResponse = 0x0D,
}

impl GlobalCommand {
    #[must_use]
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0x00 => Some(GlobalCommand::ReadAttributes),
            0x01 => Some(GlobalCommand::ReadAttributesResponse),
            0x02 => Some(GlobalCommand::WriteAttributes),
            0x03 => Some(GlobalCommand::WriteAttributesUndivided),
            0x04 => Some(GlobalCommand::WriteAttributesResponse),
            0x05 => Some(GlobalCommand::WriteAttributesNoResponse),
            0x06 => Some(GlobalCommand::ConfigureReporting),
            0x07 => Some(GlobalCommand::ConfigureReportingResponse),
            0x08 => Some(GlobalCommand::ReadReportingConfig),
            0x09 => Some(GlobalCommand::ReadReportingConfigResponse),
            0x0A => Some(GlobalCommand::ReportAttributes),
            0x0B => Some(GlobalCommand::DefaultResponse),
            0x0C => Some(GlobalCommand::DiscoverAttributes),
            0x0D => Some(GlobalCommand::DiscoverAttributesResponse),
            _ => None,
        }
    }
}

/// ZCL status codes carried in default responses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Status {
    Success = 0x00,
    Failure = 0x01,
    UnsupClusterCommand = 0x81,
    UnsupGeneralCommand = 0x82,
    UnsupManufClusterCommand = 0x83,
    UnsupManufGeneralCommand = 0x84,
    InvalidField = 0x85,
    UnsupportedAttribute = 0x86,
    InvalidValue = 0x87,
}
