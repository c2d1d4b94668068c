pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    IoError(std::io::Error),
    ZipError(zip::result::ZipError),
    PatternError(regex::Error),
    ProgressUnavailable(String),
    DeadlineExceeded,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Error::IoError(ref err) => write!(f, "{err}"),
            Error::ZipError(ref err) => write!(f, "{err}"),
            Error::PatternError(ref err) => write!(f, "{err}"),
            Error::ProgressUnavailable(ref path) => {
                write!(f, "Progress file not found: {path}")
            }
            Error::DeadlineExceeded => {
                write!(f, "Deadline exceeded waiting for forensic processing")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Error::IoError(ref err) => Some(err),
            Error::ZipError(ref err) => Some(err),
            Error::PatternError(ref err) => Some(err),
            _ => None,
        }
    }
}

impl std::convert::From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Error {
        Error::IoError(error)
    }
}

impl std::convert::From<zip::result::ZipError> for Error {
    fn from(error: zip::result::ZipError) -> Error {
        Error::ZipError(error)
    }
}

impl std::convert::From<regex::Error> for Error {
    fn from(error: regex::Error) -> Error {
        Error::PatternError(error)
    }
}
