use std::fmt;

// === AddressError ===

/// Errors produced while validating or normalizing a web address.
#[derive(Debug)]
pub enum AddressError {
    /// The input was empty or contained only whitespace.
    Empty,
    /// The input could not be parsed as an address, with or without the
    /// default scheme prepended.
    Malformed(String),
}

impl fmt::Display for AddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressError::Empty => write!(f, "Address is empty"),
            AddressError::Malformed(raw) => write!(f, "Malformed address: {}", raw),
        }
    }
}

impl std::error::Error for AddressError {}

// === FetchError ===

/// Errors produced while retrieving the source text of an address.
#[derive(Debug)]
pub enum FetchError {
    /// Connection or transfer failure.
    Network(String),
    /// The response body could not be decoded as text.
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "Fetch network error: {}", msg),
            FetchError::Decode(msg) => write!(f, "Fetch decode error: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

// === PageError ===

/// User-facing failures of a page navigation, naming the failing stage.
#[derive(Debug)]
pub enum PageError {
    /// Address resolution failed on every attempted form.
    InvalidAddress(AddressError),
    /// The address resolved but its content could not be loaded
    /// (I/O failure or empty body).
    LoadFailed(String),
}

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageError::InvalidAddress(err) => write!(f, "Invalid address: {}", err),
            PageError::LoadFailed(address) => {
                write!(f, "Failed to load item at address: {}", address)
            }
        }
    }
}

impl std::error::Error for PageError {}

// === RegistryError ===

/// Errors related to tab registry operations.
#[derive(Debug)]
pub enum RegistryError {
    /// The provided slot index addresses no open tab.
    OutOfRange(usize),
    /// The rendering collaborator could not attach the new tab's visuals.
    AttachFailed(String),
    /// A navigation on one of the registry's pages failed.
    Navigation(PageError),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::OutOfRange(slot) => write!(f, "Tab slot out of range: {}", slot),
            RegistryError::AttachFailed(msg) => write!(f, "Tab attach failed: {}", msg),
            RegistryError::Navigation(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for RegistryError {}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
    /// The provided settings key is invalid.
    InvalidKey(String),
    /// The provided settings value is invalid.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}
