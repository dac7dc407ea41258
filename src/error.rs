// MIT/Apache2 License

use std::fmt;

/// An error raised while checking a set of [`StrokeOptions`](crate::StrokeOptions).
///
/// The geometry pipeline never fails; it treats bad input as "draw nothing". This error only comes out of the
/// explicit validation entry points.
pub struct Error {
    kind: Kind,
}

enum Kind {
    InvalidInput(InvalidInput),
}

/// The option that failed validation, along with the value it was given.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InvalidInput {
    /// The stroke size must be finite and greater than zero.
    Size(f64),
    /// Thinning must lie within `-1..=1`.
    Thinning(f64),
    /// Smoothing must lie within `0..=1`.
    Smoothing(f64),
    /// Streamline must lie within `0..=1`.
    Streamline(f64),
    /// The start taper must be finite and non-negative.
    StartTaper(f64),
    /// The end taper must be finite and non-negative.
    EndTaper(f64),
}

impl Error {
    /// Create a new error describing an invalid option.
    pub fn invalid_input(input: InvalidInput) -> Self {
        Error {
            kind: Kind::InvalidInput(input),
        }
    }

    /// Is this error an invalid input error?
    pub fn is_invalid_input(&self) -> bool {
        matches!(self.kind, Kind::InvalidInput(_))
    }

    /// Get the invalid input that caused this error, if any.
    pub fn as_invalid_input(&self) -> Option<InvalidInput> {
        match self.kind {
            Kind::InvalidInput(i) => Some(i),
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct KindFmt<'a>(&'a Kind);

        impl<'a> fmt::Debug for KindFmt<'a> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self.0 {
                    Kind::InvalidInput(i) => fmt::Debug::fmt(i, f),
                }
            }
        }

        f.debug_tuple("Error").field(&KindFmt(&self.kind)).finish()
    }
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Size(v) => write!(f, "stroke size must be positive and finite, got {}", v),
            Self::Thinning(v) => write!(f, "thinning must be within -1..=1, got {}", v),
            Self::Smoothing(v) => write!(f, "smoothing must be within 0..=1, got {}", v),
            Self::Streamline(v) => write!(f, "streamline must be within 0..=1, got {}", v),
            Self::StartTaper(v) => write!(f, "start taper must be non-negative, got {}", v),
            Self::EndTaper(v) => write!(f, "end taper must be non-negative, got {}", v),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            Kind::InvalidInput(ref i) => write!(f, "Invalid stroke options: {}", i),
        }
    }
}

impl std::error::Error for Error {}

impl From<InvalidInput> for Error {
    #[inline]
    fn from(i: InvalidInput) -> Self {
        Self::invalid_input(i)
    }
}

/// Convenience result type.
pub type Result<T = ()> = std::result::Result<T, Error>;
