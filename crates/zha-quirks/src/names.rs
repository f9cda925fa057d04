//! Names shared by quirk trigger tables and the events they fire

// Gesture types
pub const SHORT_PRESS: &str = "remote_button_short_press";
pub const LONG_PRESS: &str = "remote_button_long_press";
pub const DOUBLE_PRESS: &str = "remote_button_double_press";
pub const LONG_RELEASE: &str = "remote_button_long_release";

// Subtypes
pub const TURN_ON: &str = "turn_on";
pub const TURN_OFF: &str = "turn_off";
pub const DIM_UP: &str = "dim_up";
pub const DIM_DOWN: &str = "dim_down";
pub const BUTTON_1: &str = "button_1";
pub const BUTTON_2: &str = "button_2";
pub const BUTTON_3: &str = "button_3";
pub const BUTTON_4: &str = "button_4";

// Commands, as named by the cluster that carries them
pub const COMMAND_ON: &str = "on";
pub const COMMAND_OFF: &str = "off";
pub const COMMAND_STEP: &str = "step";
pub const COMMAND_STEP_COLOR_TEMP: &str = "step_color_temp";
pub const COMMAND_STEP_HUE: &str = "step_hue";
pub const COMMAND_STEP_SATURATION: &str = "step_saturation";

/// Event kind tag translated device actions are sent with
pub const ZHA_SEND_EVENT: &str = "zha_send_event";
