use thiserror::Error;

/// Result type alias using OrderDeskError
pub type Result<T> = std::result::Result<T, OrderDeskError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every failure in the order data layer is classified into one of these
/// kinds. Each kind maps to a stable error code usable by callers, tests and
/// log assertions. The kinds group into the three families callers care
/// about: ingestion, schema and repository (see [`ExError::is_ingestion`] and
/// friends).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Ingestion
    Ingestion,
    UnsupportedFormat,
    EmptyInput,

    // Schema management
    Schema,

    // Repository
    Repository,
    MissingKeyColumn,

    // Caller input
    InvalidField,
    InvalidDispatch,

    // Environment
    Config,
    Io,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::Ingestion => "ERR_INGESTION",
            ExErrorKind::UnsupportedFormat => "ERR_UNSUPPORTED_FORMAT",
            ExErrorKind::EmptyInput => "ERR_EMPTY_INPUT",
            ExErrorKind::Schema => "ERR_SCHEMA",
            ExErrorKind::Repository => "ERR_REPOSITORY",
            ExErrorKind::MissingKeyColumn => "ERR_MISSING_KEY_COLUMN",
            ExErrorKind::InvalidField => "ERR_INVALID_FIELD",
            ExErrorKind::InvalidDispatch => "ERR_INVALID_DISPATCH",
            ExErrorKind::Config => "ERR_CONFIG",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries the classification (`kind`) plus optional context: the operation
/// that failed, the entity involved (a key value, column or file path) and
/// the underlying cause rendered into `message`.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity context (key value, column name or file path)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }

    /// True for malformed, unsupported or empty input files
    pub fn is_ingestion(&self) -> bool {
        matches!(
            self.kind,
            ExErrorKind::Ingestion | ExErrorKind::UnsupportedFormat | ExErrorKind::EmptyInput
        )
    }

    /// True for failures while reconciling or rebuilding the table schema
    pub fn is_schema(&self) -> bool {
        self.kind == ExErrorKind::Schema
    }

    /// True for failures of reads, updates and deletes against the order table
    pub fn is_repository(&self) -> bool {
        matches!(
            self.kind,
            ExErrorKind::Repository | ExErrorKind::MissingKeyColumn
        )
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {:?}", self.code(), self.kind)?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain error taxonomy for the storage-independent order layer
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrderDeskError {
    // ===== Ingestion Errors =====
    /// Format tag or file extension is not one of the supported formats
    #[error("Unsupported file format: {tag}")]
    UnsupportedFormat { tag: String },

    /// Input has no bytes or no header row
    #[error("Empty {format} input: no header row")]
    EmptyInput { format: String },

    /// Input could not be parsed as the declared format
    #[error("Malformed {format} input: {reason}")]
    MalformedInput { format: String, reason: String },

    /// Header row contains an unusable column name
    #[error("Invalid header column '{column}': {reason}")]
    InvalidHeader { column: String, reason: String },

    /// Input file could not be read
    #[error("Failed to read {path}: {reason}")]
    Io { path: String, reason: String },

    // ===== Caller Input Errors =====
    /// Update targets a column other than the operational columns
    #[error("Invalid field: {field} (expected note or dispatch)")]
    InvalidField { field: String },

    /// Dispatch value outside the allowed set
    #[error("Invalid dispatch status: {value} (expected shipped or unshipped)")]
    InvalidDispatch { value: String },
}

impl From<OrderDeskError> for ExError {
    fn from(err: OrderDeskError) -> Self {
        match err {
            OrderDeskError::UnsupportedFormat { tag } => {
                ExError::new(ExErrorKind::UnsupportedFormat)
                    .with_entity_id(tag)
                    .with_message("Unsupported file format")
            }

            OrderDeskError::EmptyInput { format } => ExError::new(ExErrorKind::EmptyInput)
                .with_message(format!("Empty {} input: no header row", format)),

            OrderDeskError::MalformedInput { format, reason } => {
                ExError::new(ExErrorKind::Ingestion)
                    .with_message(format!("Malformed {} input: {}", format, reason))
            }

            OrderDeskError::InvalidHeader { column, reason } => {
                ExError::new(ExErrorKind::Ingestion)
                    .with_entity_id(column)
                    .with_message(format!("Invalid header column: {}", reason))
            }

            OrderDeskError::Io { path, reason } => ExError::new(ExErrorKind::Io)
                .with_entity_id(path)
                .with_message(reason),

            OrderDeskError::InvalidField { field } => ExError::new(ExErrorKind::InvalidField)
                .with_entity_id(field)
                .with_message("Field must be note or dispatch"),

            OrderDeskError::InvalidDispatch { value } => {
                ExError::new(ExErrorKind::InvalidDispatch)
                    .with_entity_id(value)
                    .with_message("Dispatch must be shipped or unshipped")
            }
        }
    }
}
