use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::Path;
use std::process::ExitCode;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

use anyhow::Context;
use pathup_core::{update, Msg, ResumeFile, SubmissionController, SubmissionState};
use pathup_engine::{load_resume, parse_endpoint};
use pathup_logging::{level_for, pathup_error, pathup_info, pathup_warn};

use super::cli::Cli;
use super::config::load_settings;
use super::effects::{resume_file_from_upload, EffectRunner};
use super::input::{spawn_stdin_reader, Command, HELP};
use super::logging;
use super::ui;
use super::ui::render::RenderOptions;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub fn run_app(cli: Cli) -> anyhow::Result<ExitCode> {
    let loaded = load_settings(&cli.config);
    let mut settings = loaded.settings;
    if let Some(endpoint) = &cli.endpoint {
        settings.endpoint = endpoint.clone();
    }

    logging::initialize(settings.log_destination, level_for(cli.verbose));
    if let Some(warning) = loaded.warning {
        pathup_warn!("{}", warning);
    }

    parse_endpoint(&settings.endpoint)
        .with_context(|| format!("invalid analysis endpoint {:?}", settings.endpoint))?;
    let runner = EffectRunner::new(settings.client_settings())
        .context("failed to start analysis engine")?;

    let options = RenderOptions {
        plain_links: cli.plain || !io::stdout().is_terminal(),
        show_form: cli.interactive,
    };
    let mut app = App::new(runner, options);

    if let Some(path) = &cli.resume {
        let file = read_resume(path)?;
        app.dispatch(Msg::ResumeSelected(Some(file)));
    }
    if let Some(text) = initial_job_description(&cli)? {
        app.dispatch(Msg::JobDescriptionChanged(text));
    }

    app.print(ui::render::banner());
    if cli.interactive {
        app.run_interactive();
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(app.run_once())
    }
}

fn read_resume(path: &Path) -> anyhow::Result<ResumeFile> {
    let upload = load_resume(path)?;
    Ok(resume_file_from_upload(upload))
}

fn initial_job_description(cli: &Cli) -> anyhow::Result<Option<String>> {
    if let Some(text) = &cli.jd {
        return Ok(Some(text.clone()));
    }
    match &cli.jd_file {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read job description {}", path.display()))?;
            Ok(Some(text))
        }
        None => Ok(None),
    }
}

struct App {
    state: SubmissionController,
    runner: EffectRunner,
    options: RenderOptions,
}

impl App {
    fn new(runner: EffectRunner, options: RenderOptions) -> Self {
        Self {
            state: SubmissionController::new(),
            runner,
            options,
        }
    }

    /// Applies one message and runs its effects. Returns whether the view changed.
    fn dispatch(&mut self, msg: Msg) -> bool {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;
        self.runner.enqueue(effects);
        was_dirty
    }

    fn render(&self) {
        let view = self.state.view();
        self.print(ui::render::render(&view, self.options));
    }

    fn print<I: IntoIterator<Item = S>, S: AsRef<str>>(&self, lines: I) {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        for line in lines {
            let _ = writeln!(out, "{}", line.as_ref());
        }
        let _ = out.flush();
    }

    /// Submits once and blocks until the attempt settles.
    fn run_once(&mut self) -> ExitCode {
        self.dispatch(Msg::SubmitClicked);
        self.render();

        if self.state.is_in_flight() {
            self.wait_for_completion();
            self.render();
        }

        match self.state.state() {
            SubmissionState::Success => ExitCode::SUCCESS,
            _ => ExitCode::from(1),
        }
    }

    fn wait_for_completion(&mut self) {
        while self.state.is_in_flight() {
            if let Some(msg) = self.runner.next_msg(POLL_INTERVAL) {
                self.dispatch(msg);
            }
        }
    }

    fn run_interactive(&mut self) {
        self.print(HELP);
        self.print([""]);
        self.render();

        let commands = spawn_stdin_reader();
        loop {
            match commands.recv_timeout(POLL_INTERVAL) {
                Ok(Command::Quit) => break,
                Ok(command) => self.handle_command(command),
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => {
                    // End of input: let a pending analysis finish before exiting.
                    if self.state.is_in_flight() {
                        self.wait_for_completion();
                        self.render();
                    }
                    break;
                }
            }

            if let Some(msg) = self.runner.next_msg(Duration::ZERO) {
                if self.dispatch(msg) {
                    self.render();
                }
            }
        }
        pathup_info!("interactive session closed");
    }

    fn handle_command(&mut self, command: Command) {
        match command {
            Command::Resume(Some(path)) => match read_resume(&path) {
                Ok(file) => {
                    let name = file.file_name.clone();
                    self.dispatch(Msg::ResumeSelected(Some(file)));
                    self.print([format!("Resume selected: {name}")]);
                }
                Err(err) => {
                    pathup_error!("{:#}", err);
                    self.print([format!("Could not load resume: {err:#}")]);
                }
            },
            Command::Resume(None) => {
                self.dispatch(Msg::ResumeSelected(None));
                self.print(["Resume cleared."]);
            }
            Command::Jd(text) => self.set_job_description(text),
            Command::JdFile(path) => match fs::read_to_string(&path) {
                Ok(text) => self.set_job_description(text),
                Err(err) => {
                    pathup_error!("failed to read {}: {}", path.display(), err);
                    self.print([format!(
                        "Could not read job description {}: {err}",
                        path.display()
                    )]);
                }
            },
            Command::Submit => {
                if self.state.is_in_flight() {
                    self.print([ui::constants::BUSY_TEXT]);
                } else {
                    self.dispatch(Msg::SubmitClicked);
                    self.render();
                }
            }
            Command::Show => self.render(),
            Command::Help => self.print(HELP),
            Command::Unknown(text) => {
                self.print([format!("Unknown command: {text} (type `help`)")]);
            }
            Command::Quit => {}
        }
    }

    fn set_job_description(&mut self, text: String) {
        let chars = text.chars().count();
        self.dispatch(Msg::JobDescriptionChanged(text));
        self.print([format!("Job description updated ({chars} characters).")]);
    }
}
