use rowan::TextRange;

/// Diagnostic kinds ordered by priority (highest priority first).
///
/// When two diagnostics have overlapping spans, the higher-priority one
/// suppresses the lower-priority one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // Cascade through the rest of the file
    UnclosedParen,
    UnclosedBrace,

    // Something required is missing
    ExpectedModuleHeader,
    ExpectedModuleName,
    ExpectedEquals,
    ExpectedType,
    ExpectedTypeName,
    ExpectedParamName,
    ExpectedEntryName,
    ExpectedColon,
    ExpectedBraceOpen,

    // Something present does not belong
    DuplicateModuleHeader,
    EmptyList,
    UnexpectedToken,
}

impl DiagnosticKind {
    pub fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Lower discriminant wins.
    pub fn suppresses(&self, other: &DiagnosticKind) -> bool {
        self < other
    }

    pub fn is_structural_error(&self) -> bool {
        matches!(self, Self::UnclosedParen | Self::UnclosedBrace)
    }

    pub fn is_root_cause_error(&self) -> bool {
        matches!(
            self,
            Self::ExpectedModuleHeader
                | Self::ExpectedModuleName
                | Self::ExpectedEquals
                | Self::ExpectedType
                | Self::ExpectedTypeName
                | Self::ExpectedParamName
                | Self::ExpectedEntryName
                | Self::ExpectedColon
                | Self::ExpectedBraceOpen
        )
    }

    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::UnclosedParen => "missing closing `)`",
            Self::UnclosedBrace => "missing closing `}`",

            Self::ExpectedModuleHeader => "expected `module` header",
            Self::ExpectedModuleName => "expected module name",
            Self::ExpectedEquals => "expected `=`",
            Self::ExpectedType => "expected a type",
            Self::ExpectedTypeName => "expected type name",
            Self::ExpectedParamName => "expected parameter name",
            Self::ExpectedEntryName => "expected entry name",
            Self::ExpectedColon => "expected `:`",
            Self::ExpectedBraceOpen => "expected `{`",

            Self::DuplicateModuleHeader => "only one `module` header is allowed",
            Self::EmptyList => "empty list",
            Self::UnexpectedToken => "unexpected token",
        }
    }

    /// Template for custom messages; `{}` is replaced by the caller's detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::UnclosedParen | Self::UnclosedBrace => {
                format!("{}; {{}}", self.fallback_message())
            }
            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    pub fn message(&self, msg: Option<&str>) -> String {
        match msg {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    pub(crate) range: TextRange,
    pub(crate) message: String,
}

impl RelatedInfo {
    pub fn new(range: TextRange, message: impl Into<String>) -> Self {
        Self {
            range,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    /// Underlined in output.
    pub(crate) range: TextRange,
    /// Used for suppression; widened to the enclosing delimiter when inside one.
    pub(crate) suppression_range: TextRange,
    pub(crate) message: String,
    pub(crate) related: Vec<RelatedInfo>,
}

impl DiagnosticMessage {
    pub(crate) fn new(kind: DiagnosticKind, range: TextRange, message: impl Into<String>) -> Self {
        Self {
            kind,
            range,
            suppression_range: range,
            message: message.into(),
            related: Vec::new(),
        }
    }

    pub(crate) fn with_default_message(kind: DiagnosticKind, range: TextRange) -> Self {
        Self::new(kind, range, kind.fallback_message())
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.kind.default_severity()
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}..{}: {}",
            self.severity(),
            u32::from(self.range.start()),
            u32::from(self.range.end()),
            self.message
        )?;
        for related in &self.related {
            write!(
                f,
                " (related: {} at {}..{})",
                related.message,
                u32::from(related.range.start()),
                u32::from(related.range.end())
            )?;
        }
        Ok(())
    }
}
