use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

// LibraryError covers the failures the gateway and configuration loading can raise.
// Business rule violations are reported through CatalogStatus instead.
#[derive(Debug)]
pub enum LibraryError {
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    Serialization {
        message: String,
    },
}

impl LibraryError {
    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::DuplicateKey { message } => write!(f, "duplicate key: {}", message),
            LibraryError::NotFound { message } => write!(f, "not found: {}", message),
            LibraryError::Serialization { message } => write!(f, "serialization: {}", message),
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for the catalog and its repositories.
pub type LibraryResult<T> = Result<T, LibraryError>;

// CatalogStatus is the outcome of a catalog mutation. Callers branch on the numeric code,
// so it is serialized as a plain number. Code 6 is not assigned.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum CatalogStatus {
    Success,
    IdRequired,
    DuplicateId,
    TitleRequired,
    AuthorRequired,
    ReferencedByOrder,
    PriceOutOfRange,
    QuantityOutOfRange,
    NotFound,
}

impl CatalogStatus {
    pub fn code(&self) -> u8 {
        match self {
            CatalogStatus::Success => 0,
            CatalogStatus::IdRequired => 1,
            CatalogStatus::DuplicateId => 2,
            CatalogStatus::TitleRequired => 3,
            CatalogStatus::AuthorRequired => 4,
            CatalogStatus::ReferencedByOrder => 5,
            CatalogStatus::PriceOutOfRange => 7,
            CatalogStatus::QuantityOutOfRange => 8,
            CatalogStatus::NotFound => 9,
        }
    }

    pub fn is_success(&self) -> bool {
        *self == CatalogStatus::Success
    }
}

impl From<CatalogStatus> for u8 {
    fn from(status: CatalogStatus) -> Self {
        status.code()
    }
}

impl TryFrom<u8> for CatalogStatus {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(CatalogStatus::Success),
            1 => Ok(CatalogStatus::IdRequired),
            2 => Ok(CatalogStatus::DuplicateId),
            3 => Ok(CatalogStatus::TitleRequired),
            4 => Ok(CatalogStatus::AuthorRequired),
            5 => Ok(CatalogStatus::ReferencedByOrder),
            7 => Ok(CatalogStatus::PriceOutOfRange),
            8 => Ok(CatalogStatus::QuantityOutOfRange),
            9 => Ok(CatalogStatus::NotFound),
            other => Err(format!("unknown catalog status code {}", other)),
        }
    }
}

impl Display for CatalogStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            CatalogStatus::Success => write!(f, "Success"),
            CatalogStatus::IdRequired => write!(f, "IdRequired"),
            CatalogStatus::DuplicateId => write!(f, "DuplicateId"),
            CatalogStatus::TitleRequired => write!(f, "TitleRequired"),
            CatalogStatus::AuthorRequired => write!(f, "AuthorRequired"),
            CatalogStatus::ReferencedByOrder => write!(f, "ReferencedByOrder"),
            CatalogStatus::PriceOutOfRange => write!(f, "PriceOutOfRange"),
            CatalogStatus::QuantityOutOfRange => write!(f, "QuantityOutOfRange"),
            CatalogStatus::NotFound => write!(f, "NotFound"),
        }
    }
}
