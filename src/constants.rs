//! Application-wide constants.

/// The display name of the application (also used for the config directory).
pub const APP_NAME: &str = "DesignForge";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "designforge";
