use crate::analysis::{AnalysisKind, TextAnalysis};

/// Runs whichever analysis is currently selected.
pub struct TextAnalyzer {
    method: Box<dyn TextAnalysis>,
}

impl TextAnalyzer {
    pub fn new(method: impl TextAnalysis + 'static) -> Self {
        Self {
            method: Box::new(method),
        }
    }

    pub fn set_method(&mut self, method: impl TextAnalysis + 'static) {
        self.method = Box::new(method);
    }

    pub fn method_name(&self) -> &'static str {
        self.method.name()
    }

    pub fn process(&self, text: &str) -> String {
        self.method.analyze(text)
    }
}

impl From<AnalysisKind> for TextAnalyzer {
    fn from(kind: AnalysisKind) -> Self {
        Self {
            method: kind.strategy(),
        }
    }
}

impl std::fmt::Debug for TextAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextAnalyzer")
            .field("method", &self.method.name())
            .finish()
    }
}
