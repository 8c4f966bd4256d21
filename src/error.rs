/// Error type for gda-rs operations.
#[derive(Debug, PartialEq)]
pub enum GdaError {
    /// Latitude or longitude is NaN or infinite.
    NonFiniteCoordinate,
    /// The requested number of levels is outside the valid range (minimum 1).
    InvalidLevels(u8),
    /// The code contains no symbols after removing separators.
    EmptyCode,
    /// A character in the code is not part of the symbol grid.
    InvalidSymbol(char),
}

impl std::fmt::Display for GdaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GdaError::NonFiniteCoordinate => {
                write!(f, "Latitude and longitude must be finite numbers")
            }
            GdaError::InvalidLevels(n) => write!(f, "Invalid levels: {}", n),
            GdaError::EmptyCode => write!(f, "Code contains no symbols"),
            GdaError::InvalidSymbol(c) => write!(f, "Invalid symbol '{}' in code", c),
        }
    }
}

impl std::error::Error for GdaError {}
