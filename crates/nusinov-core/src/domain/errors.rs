use std::error::Error;
use std::fmt::{Display, Formatter};

pub type NusinovResult<T> = Result<T, NusinovError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NusinovErrorCategory {
    InvalidInputType,
    ResourceNotFound,
    ShapeMismatch,
}

impl NusinovErrorCategory {
    pub const fn exit_placeholder(self) -> ExitPlaceholder {
        match self {
            Self::InvalidInputType => ExitPlaceholder {
                exit_code: 2,
                rust_category: "InvalidInputTypeError",
                legacy_class: "INPUT_FATAL",
            },
            Self::ResourceNotFound => ExitPlaceholder {
                exit_code: 3,
                rust_category: "ResourceNotFoundError",
                legacy_class: "IO_FATAL",
            },
            Self::ShapeMismatch => ExitPlaceholder {
                exit_code: 5,
                rust_category: "ShapeMismatchError",
                legacy_class: "SYS_FATAL",
            },
        }
    }

    pub const fn exit_code(self) -> i32 {
        self.exit_placeholder().exit_code
    }

    pub const fn rust_category(self) -> &'static str {
        self.exit_placeholder().rust_category
    }

    pub const fn legacy_class(self) -> &'static str {
        self.exit_placeholder().legacy_class
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitPlaceholder {
    pub exit_code: i32,
    pub rust_category: &'static str,
    pub legacy_class: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NusinovError {
    category: NusinovErrorCategory,
    placeholder: &'static str,
    message: String,
}

impl NusinovError {
    pub fn new(
        category: NusinovErrorCategory,
        placeholder: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            placeholder,
            message: message.into(),
        }
    }

    pub fn invalid_input_type(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(NusinovErrorCategory::InvalidInputType, placeholder, message)
    }

    pub fn resource_not_found(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(NusinovErrorCategory::ResourceNotFound, placeholder, message)
    }

    pub fn shape_mismatch(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(NusinovErrorCategory::ShapeMismatch, placeholder, message)
    }

    pub const fn category(&self) -> NusinovErrorCategory {
        self.category
    }

    pub const fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn exit_code(&self) -> i32 {
        self.category.exit_code()
    }

    pub fn diagnostic_line(&self) -> String {
        format!("ERROR: [{}] {}", self.placeholder, self.message)
    }

    pub fn fatal_exit_line(&self) -> String {
        format!("FATAL EXIT CODE: {}", self.exit_code())
    }
}

impl Display for NusinovError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}",
            self.category.rust_category(),
            self.placeholder,
            self.message
        )
    }
}

impl Error for NusinovError {}
