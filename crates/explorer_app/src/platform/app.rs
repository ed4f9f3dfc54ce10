use std::collections::VecDeque;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context};
use explorer_core::{update, AnalysisKind, AppState, AppViewModel, Msg, Status};
use explorer_engine::FsDocumentStore;
use explorer_logging::{explorer_debug, LogAuditSink};

use super::effects::EffectRunner;
use super::{logging, persistence, ui};
use crate::cli::{Cli, STDIN_ARG};

pub fn run_app(cli: Cli) -> anyhow::Result<()> {
    logging::initialize(cli.log.into(), &cli.log_file, cli.verbose);

    let mut settings = persistence::load_settings(&cli.settings);
    let method = match cli.method {
        Some(arg) => AnalysisKind::from(arg),
        None => settings.last_method().ok_or_else(|| {
            anyhow!("no analysis method given; pass --method frequency, transliterate or unique")
        })?,
    };
    let source = resolve_source(cli.file.as_deref(), settings.last_document.as_deref());

    // The single audit handle for this process.
    let audit = LogAuditSink;
    let store = FsDocumentStore;
    let mut session = Session::new(EffectRunner::new(&store, &audit));

    session.dispatch(Msg::AppStarted);
    let outcome = run_session(&mut session, source, method, cli.save_as.clone());
    session.dispatch(Msg::CloseRequested);
    debug_assert!(session.is_closed());
    outcome?;

    if !cli.no_remember {
        settings.remember(session.state().document_path(), method);
        persistence::save_settings(&cli.settings, &settings)
            .with_context(|| format!("cannot update settings file {:?}", cli.settings))?;
    }
    Ok(())
}

/// Picks the document to open. `-` selects stdin explicitly. With no
/// argument the remembered document wins, and stdin is the last resort.
fn resolve_source(file: Option<&Path>, remembered: Option<&Path>) -> Option<PathBuf> {
    match file {
        Some(path) if path == Path::new(STDIN_ARG) => None,
        Some(path) => Some(path.to_path_buf()),
        None => {
            let path = remembered?;
            eprintln!("Using last document: {}", path.display());
            Some(path.to_path_buf())
        }
    }
}

fn run_session(
    session: &mut Session<'_>,
    source: Option<PathBuf>,
    method: AnalysisKind,
    save_as: Option<PathBuf>,
) -> anyhow::Result<()> {
    match source {
        Some(path) => session.dispatch(Msg::OpenRequested(path)),
        None => {
            let text =
                io::read_to_string(io::stdin()).context("failed to read document from stdin")?;
            session.dispatch(Msg::EditorChanged(text));
        }
    }
    session.fail_on_error()?;

    session.dispatch(Msg::AnalysisRequested(method));
    if let Some(view) = session.take_view() {
        let frame = ui::render::render(&view);
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", frame.output).context("failed to write report")?;
    }

    if let Some(path) = save_as {
        session.dispatch(Msg::SaveRequested(Some(path)));
    }

    let frame = ui::render::render(&session.state().view());
    eprintln!("{}", frame.status_line);
    session.fail_on_error()
}

/// Owns the session state and feeds effect results back into `update`.
pub(crate) struct Session<'a> {
    state: AppState,
    runner: EffectRunner<'a>,
    closed: bool,
}

impl<'a> Session<'a> {
    pub(crate) fn new(runner: EffectRunner<'a>) -> Self {
        Self {
            state: AppState::new(),
            runner,
            closed: false,
        }
    }

    pub(crate) fn state(&self) -> &AppState {
        &self.state
    }

    pub(crate) fn is_closed(&self) -> bool {
        self.closed
    }

    /// Applies `msg` and every message its effects produce, in order.
    pub(crate) fn dispatch(&mut self, msg: Msg) {
        let mut inbox = VecDeque::from([msg]);
        while let Some(msg) = inbox.pop_front() {
            let state = std::mem::take(&mut self.state);
            let (state, effects) = update(state, msg);
            self.state = state;
            explorer_debug!("update produced {} effect(s)", effects.len());

            let feedback = self.runner.run(effects);
            self.closed |= feedback.quit;
            inbox.extend(feedback.messages);
        }
    }

    /// The current view if anything changed since the last call.
    pub(crate) fn take_view(&mut self) -> Option<AppViewModel> {
        if self.state.consume_dirty() {
            Some(self.state.view())
        } else {
            None
        }
    }

    fn fail_on_error(&self) -> anyhow::Result<()> {
        if let Status::Failed(message) = self.state.status() {
            bail!("{message}");
        }
        Ok(())
    }
}
