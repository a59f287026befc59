/// Convenience result type used across pngshape.
pub type ShapeResult<T> = Result<T, ShapeError>;

/// Failure categories, each with a stable process exit code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum ErrorKind {
    InvalidCoordinateFormat,
    InvalidColorFormat,
    SameInputOutputPath,
    InvalidHexagonArgs,
    MissingInputFile,
    MultipleActionsRequested,
    UnknownOption,
    InvalidThickness,
    IoFailure,
    UnsupportedChannelLayout,
}

impl ErrorKind {
    /// Process exit code reported by the CLI for this kind.
    pub fn exit_code(self) -> u8 {
        match self {
            Self::InvalidCoordinateFormat => 40,
            Self::InvalidColorFormat => 41,
            Self::SameInputOutputPath => 42,
            Self::InvalidHexagonArgs => 43,
            Self::MissingInputFile => 44,
            Self::MultipleActionsRequested => 45,
            Self::UnknownOption => 46,
            Self::InvalidThickness => 47,
            Self::IoFailure => 48,
            Self::UnsupportedChannelLayout => 49,
        }
    }
}

/// Top-level error taxonomy used by the rasterizer, codec and CLI.
#[derive(thiserror::Error, Debug)]
pub enum ShapeError {
    /// Malformed, missing or out-of-canvas coordinates.
    #[error("coordinate error: {0}")]
    Coordinate(String),

    /// Malformed color token or component outside 0..=255.
    #[error("color error: {0}")]
    Color(String),

    /// Output would overwrite the input file.
    #[error("input and output must differ: {0}")]
    SamePath(String),

    /// Malformed hexagon center or radius.
    #[error("hexagon error: {0}")]
    Hexagon(String),

    /// No `--input` was given.
    #[error("missing input: {0}")]
    MissingInput(String),

    /// Zero or several actions were selected.
    #[error("action error: {0}")]
    Actions(String),

    /// Unrecognized option or stray argument.
    #[error("unknown option: {0}")]
    UnknownOption(String),

    /// Line thickness that is not a positive integer.
    #[error("thickness error: {0}")]
    Thickness(String),

    /// Pixel data with a channel count other than 3 or 4.
    #[error("unsupported channel layout: {0}")]
    Channels(String),

    /// Reading or writing image data failed.
    #[error("io error: {0}")]
    Io(String),

    /// Wrapped lower-level error from the codec or the filesystem.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ShapeError {
    /// Build a [`ShapeError::Coordinate`] value.
    pub fn coordinate(msg: impl Into<String>) -> Self {
        Self::Coordinate(msg.into())
    }

    /// Build a [`ShapeError::Color`] value.
    pub fn color(msg: impl Into<String>) -> Self {
        Self::Color(msg.into())
    }

    /// Build a [`ShapeError::SamePath`] value.
    pub fn same_path(msg: impl Into<String>) -> Self {
        Self::SamePath(msg.into())
    }

    /// Build a [`ShapeError::Hexagon`] value.
    pub fn hexagon(msg: impl Into<String>) -> Self {
        Self::Hexagon(msg.into())
    }

    /// Build a [`ShapeError::MissingInput`] value.
    pub fn missing_input(msg: impl Into<String>) -> Self {
        Self::MissingInput(msg.into())
    }

    /// Build a [`ShapeError::Actions`] value.
    pub fn actions(msg: impl Into<String>) -> Self {
        Self::Actions(msg.into())
    }

    /// Build a [`ShapeError::UnknownOption`] value.
    pub fn unknown_option(msg: impl Into<String>) -> Self {
        Self::UnknownOption(msg.into())
    }

    /// Build a [`ShapeError::Thickness`] value.
    pub fn thickness(msg: impl Into<String>) -> Self {
        Self::Thickness(msg.into())
    }

    /// Build a [`ShapeError::Channels`] value.
    pub fn channels(msg: impl Into<String>) -> Self {
        Self::Channels(msg.into())
    }

    /// Build a [`ShapeError::Io`] value.
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Coordinate(_) => ErrorKind::InvalidCoordinateFormat,
            Self::Color(_) => ErrorKind::InvalidColorFormat,
            Self::SamePath(_) => ErrorKind::SameInputOutputPath,
            Self::Hexagon(_) => ErrorKind::InvalidHexagonArgs,
            Self::MissingInput(_) => ErrorKind::MissingInputFile,
            Self::Actions(_) => ErrorKind::MultipleActionsRequested,
            Self::UnknownOption(_) => ErrorKind::UnknownOption,
            Self::Thickness(_) => ErrorKind::InvalidThickness,
            Self::Channels(_) => ErrorKind::UnsupportedChannelLayout,
            Self::Io(_) | Self::Other(_) => ErrorKind::IoFailure,
        }
    }

    /// Shorthand for `self.kind().exit_code()`.
    pub fn exit_code(&self) -> u8 {
        self.kind().exit_code()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
