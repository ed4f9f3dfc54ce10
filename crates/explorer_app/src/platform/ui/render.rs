use explorer_core::{AppViewModel, Status};

/// What the terminal shows for one view: the output panel and a status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub output: String,
    pub status_line: String,
}

pub fn render(view: &AppViewModel) -> Frame {
    Frame {
        output: view.output_text.clone(),
        status_line: status_line(view),
    }
}

fn status_line(view: &AppViewModel) -> String {
    let document = match &view.document_path {
        Some(path) => {
            let marker = if view.modified { " *" } else { "" };
            match &view.encoding {
                Some(encoding) => format!("{}{marker} ({encoding})", path.display()),
                None => format!("{}{marker}", path.display()),
            }
        }
        None if view.editor_text.is_empty() => "(empty)".to_string(),
        None => "(unsaved buffer)".to_string(),
    };
    format!("Document: {document} | {}", status_label(&view.status))
}

fn status_label(status: &Status) -> String {
    match status {
        Status::Ready => "Ready".to_string(),
        Status::Opened(path) => format!("Opened {}", path.display()),
        Status::Saved(path) => format!("Saved {}", path.display()),
        Status::Analyzed(kind) => format!("Done: {}", kind.label()),
        Status::Failed(message) => format!("Error: {message}"),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use explorer_core::AnalysisKind;

    use super::*;

    #[test]
    fn empty_view() {
        let frame = render(&AppViewModel::default());
        assert_eq!(frame.output, "");
        assert_eq!(frame.status_line, "Document: (empty) | Ready");
    }

    #[test]
    fn analysed_document_shows_encoding_and_method() {
        let view = AppViewModel {
            output_text: "report".to_string(),
            document_path: Some(PathBuf::from("doc.txt")),
            encoding: Some("UTF-8".to_string()),
            status: Status::Analyzed(AnalysisKind::UniqueWords),
            ..AppViewModel::default()
        };
        let frame = render(&view);
        assert_eq!(frame.output, "report");
        assert_eq!(
            frame.status_line,
            "Document: doc.txt (UTF-8) | Done: Count of unique words"
        );
    }

    #[test]
    fn modified_and_failed() {
        let view = AppViewModel {
            editor_text: "x".to_string(),
            document_path: Some(PathBuf::from("doc.txt")),
            modified: true,
            status: Status::Failed("disk full".to_string()),
            ..AppViewModel::default()
        };
        assert_eq!(
            render(&view).status_line,
            "Document: doc.txt * | Error: disk full"
        );
    }

    #[test]
    fn unsaved_buffer() {
        let view = AppViewModel {
            editor_text: "typed".to_string(),
            ..AppViewModel::default()
        };
        assert_eq!(render(&view).status_line, "Document: (unsaved buffer) | Ready");
    }
}
