use crate::{AppState, AuditEvent, Effect, Msg, Status, TextAnalyzer};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::AppStarted => vec![Effect::Audit(AuditEvent::AppStarted)],
        Msg::EditorChanged(text) => {
            state.set_editor(text);
            Vec::new()
        }
        Msg::OpenRequested(path) => vec![Effect::LoadDocument { path }],
        Msg::DocumentLoaded {
            path,
            text,
            encoding,
        } => {
            state.load_document(path.clone(), text, encoding);
            vec![Effect::Audit(AuditEvent::DocumentOpened { path })]
        }
        Msg::SaveRequested(target) => {
            let target = target.or_else(|| state.document_path().map(ToOwned::to_owned));
            match target {
                Some(path) => vec![Effect::SaveDocument {
                    path,
                    contents: state.editor_text().to_string(),
                }],
                None => {
                    state.set_status(Status::Failed("no file to save to".to_string()));
                    Vec::new()
                }
            }
        }
        Msg::DocumentSaved { path, bytes: _ } => {
            state.document_saved(path.clone());
            vec![Effect::Audit(AuditEvent::DocumentSaved { path })]
        }
        Msg::IoFailed { path, message } => {
            state.set_status(Status::Failed(format!("{}: {message}", path.display())));
            vec![Effect::Audit(AuditEvent::IoFailed { path, message })]
        }
        Msg::AnalysisRequested(kind) => {
            // Snapshot first: the report belongs to the text as it was when asked for.
            let snapshot = state.editor_text().to_string();
            let analyzer = TextAnalyzer::from(kind);
            let report = analyzer.process(&snapshot);
            state.show_report(kind, report.clone());
            vec![
                Effect::Audit(AuditEvent::OperationPerformed {
                    method: analyzer.method_name(),
                }),
                Effect::Audit(AuditEvent::ReportProduced { report }),
            ]
        }
        Msg::CloseRequested => vec![Effect::Audit(AuditEvent::AppClosing), Effect::Quit],
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
