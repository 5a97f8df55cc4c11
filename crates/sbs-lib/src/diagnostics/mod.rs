mod message;
mod printer;


use rowan::TextRange;

pub use message::{DiagnosticKind, DiagnosticMessage, RelatedInfo, Severity};
pub use printer::DiagnosticsPrinter;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    messages: Vec<DiagnosticMessage>,
}

#[must_use = "diagnostic not emitted, call .emit()"]
pub struct DiagnosticBuilder<'a> {
    diagnostics: &'a mut Diagnostics,
    message: DiagnosticMessage,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// Starts a diagnostic with the kind's default message.
    pub fn report(&mut self, kind: DiagnosticKind, range: TextRange) -> DiagnosticBuilder<'_> {
        DiagnosticBuilder {
            diagnostics: self,
            message: DiagnosticMessage::with_default_message(kind, range),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticMessage> {
        self.messages.iter()
    }

    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(|d| d.is_error())
    }

    pub fn error_count(&self) -> usize {
        self.messages.iter().filter(|d| d.is_error()).count()
    }

    /// Returns diagnostics with cascading errors suppressed.
    ///
    /// 1. Containment: a higher-priority span strictly containing another suppresses it
    /// 2. Same start: root-cause errors suppress structural ones, otherwise priority decides
    pub fn filtered(&self) -> Diagnostics {
        let mut suppressed = vec![false; self.messages.len()];

        for (i, a) in self.messages.iter().enumerate() {
            for (j, b) in self.messages.iter().enumerate() {
                if i == j || suppressed[i] || suppressed[j] {
                    continue;
                }

                if span_strictly_contains(a.suppression_range, b.range) && a.kind.suppresses(&b.kind)
                {
                    suppressed[j] = true;
                    continue;
                }

                if a.range.start() == b.range.start() {
                    if a.kind.is_root_cause_error() && b.kind.is_structural_error() {
                        suppressed[j] = true;
                        continue;
                    }
                    if a.kind.is_structural_error() && b.kind.is_root_cause_error() {
                        continue;
                    }
                    if a.kind.suppresses(&b.kind) {
                        suppressed[j] = true;
                    }
                }
            }
        }

        let messages = self
            .messages
            .iter()
            .zip(suppressed)
            .filter(|(_, hidden)| !hidden)
            .map(|(m, _)| m.clone())
            .collect();
        Diagnostics { messages }
    }

    pub fn printer<'d, 's>(&'d self) -> DiagnosticsPrinter<'d, 's> {
        DiagnosticsPrinter::new(self)
    }

    /// Plain rendering against `source`.
    pub fn render(&self, source: &str) -> String {
        self.printer().source(source).render()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a DiagnosticMessage;
    type IntoIter = std::slice::Iter<'a, DiagnosticMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

impl DiagnosticBuilder<'_> {
    /// Custom detail, rendered through the kind's template.
    pub fn message(mut self, msg: impl Into<String>) -> Self {
        let detail = msg.into();
        self.message.message = self.message.kind.message(Some(&detail));
        self
    }

    pub fn related_to(mut self, msg: impl Into<String>, range: TextRange) -> Self {
        self.message.related.push(RelatedInfo::new(range, msg));
        self
    }

    pub fn suppression_range(mut self, range: TextRange) -> Self {
        self.message.suppression_range = range;
        self
    }

    pub fn emit(self) {
        self.diagnostics.messages.push(self.message);
    }
}

fn span_strictly_contains(outer: TextRange, inner: TextRange) -> bool {
    outer.start() < inner.start() && inner.end() <= outer.end()
}
