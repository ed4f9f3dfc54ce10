use explorer_core::{Effect, Msg};
use explorer_engine::DocumentStore;
use explorer_logging::{explorer_error, explorer_info, AuditSink, Level};

/// Messages produced by carrying out effects, to be fed back into `update`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Feedback {
    pub messages: Vec<Msg>,
    pub quit: bool,
}

/// Carries out effects against the document store and the audit sink it was
/// handed at startup.
pub struct EffectRunner<'a> {
    store: &'a dyn DocumentStore,
    audit: &'a dyn AuditSink,
}

impl<'a> EffectRunner<'a> {
    pub fn new(store: &'a dyn DocumentStore, audit: &'a dyn AuditSink) -> Self {
        Self { store, audit }
    }

    pub fn run(&self, effects: Vec<Effect>) -> Feedback {
        let mut feedback = Feedback::default();
        for effect in effects {
            match effect {
                Effect::LoadDocument { path } => match self.store.load(&path) {
                    Ok(doc) => {
                        explorer_info!(
                            "Loaded {:?}: {} bytes, {}",
                            doc.path,
                            doc.byte_len,
                            doc.encoding_label
                        );
                        feedback.messages.push(Msg::DocumentLoaded {
                            path: doc.path,
                            text: doc.text,
                            encoding: doc.encoding_label,
                        });
                    }
                    Err(err) => {
                        explorer_error!("Open failed for {:?}: {}", path, err);
                        feedback.messages.push(Msg::IoFailed {
                            path,
                            message: err.to_string(),
                        });
                    }
                },
                Effect::SaveDocument { path, contents } => {
                    match self.store.save(&path, &contents) {
                        Ok(bytes) => feedback.messages.push(Msg::DocumentSaved { path, bytes }),
                        Err(err) => {
                            explorer_error!("Save failed for {:?}: {}", path, err);
                            feedback.messages.push(Msg::IoFailed {
                                path,
                                message: err.to_string(),
                            });
                        }
                    }
                }
                Effect::Audit(event) => {
                    let level = if event.is_failure() {
                        Level::Error
                    } else {
                        Level::Info
                    };
                    self.audit.record(level, &event.to_string());
                }
                Effect::Quit => feedback.quit = true,
            }
        }
        feedback
    }
}
