//! Validation context and report types.
//!
//! These are shared by the validation engine and its callers (the CLI, or
//! anything else presenting the results).

/// Options for a validation run.
#[derive(Debug, Default, Clone)]
pub struct ValidationContext {
    /// Treat schema warnings as errors
    pub strict: bool,

    /// Validate only the first N records
    pub sample_size: Option<usize>,
}

impl ValidationContext {
    /// Creates a new validation context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets strict validation mode.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Sets the number of records to validate.
    pub fn with_sample_size(mut self, size: usize) -> Self {
        self.sample_size = Some(size);
        self
    }
}

/// Report of validation results.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    /// Whether validation passed overall
    pub passed: bool,

    /// List of errors encountered
    pub errors: Vec<String>,

    /// List of warnings
    pub warnings: Vec<String>,

    /// Validation statistics
    pub stats: ValidationStats,
}

/// Statistics about validation execution.
#[derive(Debug, Clone, Default)]
pub struct ValidationStats {
    /// Number of records validated
    pub records_validated: usize,

    /// Number of schema fields visited, nested ones included
    pub fields_checked: usize,

    /// Number of declared rules evaluated
    pub rules_evaluated: usize,

    /// Validation duration in milliseconds
    pub duration_ms: u64,
}

impl ValidationReport {
    /// Creates a new successful validation report.
    pub fn success() -> Self {
        Self {
            passed: true,
            errors: Vec::new(),
            warnings: Vec::new(),
            stats: ValidationStats::default(),
        }
    }

    /// Adds an error to the report.
    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
        self.passed = false;
    }

    /// Adds a warning to the report.
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }
}
