//! Speech synthesis backend for the museum.
//!
//! Drives an external command-line synthesizer (espeak-ng by default) on a
//! dedicated worker thread. The application submits utterances through the
//! [`museum_core::SpeechEngine`] trait and drains [`SpeechEvent`]s from the
//! receiver returned by [`CommandSpeechEngine::spawn`].
//!
//! When no synthesizer is available, [`NullSpeechEngine`] stands in and
//! narration controls become inert no-ops.

use std::io;
use std::process::{Child, Command, Stdio};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use museum_core::{SpeechEngine, SpeechError, SpeechEvent, Utterance, Voice};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Synthesizer invoked when `MUSEUM_TTS` is not set.
pub const DEFAULT_TTS_PROGRAM: &str = "espeak-ng";

/// Flag passed to the synthesizer to enumerate its voices.
pub const DEFAULT_VOICES_ARG: &str = "--voices";

/// espeak's default speaking rate, in words per minute. Utterance rates
/// are expressed as multipliers of this.
const BASE_WORDS_PER_MINUTE: f32 = 175.0;

/// How often the worker polls a running synthesizer process.
const CHILD_POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Errors from the speech backend itself. Playback failures are not
/// reported here; they surface as [`SpeechEvent::Errored`] events.
#[derive(Debug, Error)]
pub enum SpeechBackendError {
    #[error("failed to launch synthesizer `{program}`: {source}")]
    Probe {
        program: String,
        #[source]
        source: io::Error,
    },
}

/// Configuration of the command-line synthesizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// Synthesizer executable.
    pub program: String,
    /// Extra arguments prepended to every invocation.
    pub args: Vec<String>,
    /// Flag that makes the synthesizer print its voice listing.
    pub voices_arg: String,
    /// When false, narration is disabled outright.
    pub enabled: bool,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_TTS_PROGRAM.to_string(),
            args: Vec::new(),
            voices_arg: DEFAULT_VOICES_ARG.to_string(),
            enabled: true,
        }
    }
}

impl SpeechConfig {
    /// Read configuration from the environment:
    /// - `MUSEUM_TTS`: synthesizer program, or `off` to disable narration
    /// - `MUSEUM_TTS_ARGS`: whitespace-separated extra arguments
    /// - `MUSEUM_TTS_VOICES_ARG`: voice-listing flag (default `--voices`)
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(program) = std::env::var("MUSEUM_TTS") {
            if program.is_empty() || program == "off" {
                config.enabled = false;
            } else {
                config.program = program;
            }
        }
        if let Ok(args) = std::env::var("MUSEUM_TTS_ARGS") {
            config.args = args.split_whitespace().map(str::to_string).collect();
        }
        if let Ok(arg) = std::env::var("MUSEUM_TTS_VOICES_ARG") {
            if !arg.is_empty() {
                config.voices_arg = arg;
            }
        }
        config
    }

    /// Check that the synthesizer can be launched at all.
    pub fn probe(&self) -> Result<(), SpeechBackendError> {
        Command::new(&self.program)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|source| SpeechBackendError::Probe {
                program: self.program.clone(),
                source,
            })?;
        Ok(())
    }
}

/// Requests handled by the synthesizer worker thread. Speak requests carry
/// the generation current at submission time.
enum WorkerCommand {
    Speak(Utterance, u64),
    Shutdown,
}

/// State shared between the engine handle and its worker thread.
///
/// `generation` advances on every speak and cancel; a queued utterance
/// whose generation is no longer current has been superseded and must not
/// spawn a process.
struct WorkerShared {
    current: Mutex<Option<Child>>,
    generation: AtomicU64,
}

impl WorkerShared {
    fn new() -> Self {
        Self {
            current: Mutex::new(None),
            generation: AtomicU64::new(0),
        }
    }

    /// Advance to a new generation, invalidating anything still queued.
    fn bump(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn current_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }
}

/// Speech engine backed by a command-line synthesizer.
///
/// One worker thread owns the synthesizer process. Submitting a new
/// utterance preempts the running one: the previous process is killed, and
/// a previous utterance still sitting in the queue is invalidated by its
/// generation so it never plays. This matches the platform semantics the
/// narration controller expects.
pub struct CommandSpeechEngine {
    config: SpeechConfig,
    commands: Mutex<Sender<WorkerCommand>>,
    shared: Arc<WorkerShared>,
}

impl CommandSpeechEngine {
    /// Start the worker thread. The returned receiver delivers playback
    /// lifecycle events for the application to drain.
    pub fn spawn(config: SpeechConfig) -> (Self, Receiver<SpeechEvent>) {
        let (command_tx, command_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let shared = Arc::new(WorkerShared::new());

        let worker_config = config.clone();
        let worker_shared = Arc::clone(&shared);
        thread::spawn(move || {
            worker_loop(worker_config, command_rx, event_tx, worker_shared);
        });

        (
            Self {
                config,
                commands: Mutex::new(command_tx),
                shared,
            },
            event_rx,
        )
    }
}

impl SpeechEngine for CommandSpeechEngine {
    fn list_voices(&self) -> Vec<Voice> {
        match Command::new(&self.config.program)
            .arg(&self.config.voices_arg)
            .output()
        {
            Ok(output) if output.status.success() => {
                parse_voice_listing(&String::from_utf8_lossy(&output.stdout))
            }
            Ok(output) => {
                log::warn!(
                    "voice listing failed; program={} status={}",
                    self.config.program,
                    output.status
                );
                Vec::new()
            }
            Err(err) => {
                log::warn!(
                    "voice listing failed; program={} error={err}",
                    self.config.program
                );
                Vec::new()
            }
        }
    }

    fn speak(&self, utterance: &Utterance) {
        // The engine is a single exclusive resource: a new request
        // supersedes whatever is playing or still queued.
        let generation = self.shared.bump();
        kill_current(&self.shared.current);
        let _ = self
            .commands
            .lock()
            .unwrap()
            .send(WorkerCommand::Speak(utterance.clone(), generation));
    }

    fn cancel_all(&self) {
        self.shared.bump();
        kill_current(&self.shared.current);
    }
}

impl Drop for CommandSpeechEngine {
    fn drop(&mut self) {
        self.shared.bump();
        let _ = self.commands.lock().unwrap().send(WorkerCommand::Shutdown);
        kill_current(&self.shared.current);
    }
}

/// Engine used when no synthesizer is configured or the probe failed.
/// Reports itself unavailable, which makes narration controls inert.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSpeechEngine;

impl SpeechEngine for NullSpeechEngine {
    fn list_voices(&self) -> Vec<Voice> {
        Vec::new()
    }

    fn speak(&self, _utterance: &Utterance) {}

    fn cancel_all(&self) {}

    fn is_available(&self) -> bool {
        false
    }
}

/// Build the best available engine for the given configuration, falling
/// back to the inert engine when the synthesizer cannot be launched.
pub fn engine_from_config(
    config: SpeechConfig,
) -> (Arc<dyn SpeechEngine>, Option<Receiver<SpeechEvent>>) {
    if !config.enabled {
        log::info!("narration disabled by configuration");
        return (Arc::new(NullSpeechEngine), None);
    }
    match config.probe() {
        Ok(()) => {
            let (engine, events) = CommandSpeechEngine::spawn(config);
            (Arc::new(engine), Some(events))
        }
        Err(err) => {
            log::warn!("speech synthesizer unavailable, narration disabled: {err}");
            (Arc::new(NullSpeechEngine), None)
        }
    }
}

fn kill_current(current: &Mutex<Option<Child>>) {
    if let Some(child) = current.lock().unwrap().as_mut() {
        if let Err(err) = child.kill() {
            log::debug!("failed to stop synthesizer process: {err}");
        }
    }
}

fn worker_loop(
    config: SpeechConfig,
    command_rx: Receiver<WorkerCommand>,
    event_tx: Sender<SpeechEvent>,
    shared: Arc<WorkerShared>,
) {
    // The voice list is ready to be queried once the worker is up; this
    // nudges the narration controller to refresh its cache.
    let _ = event_tx.send(SpeechEvent::VoicesChanged);

    loop {
        match command_rx.recv() {
            Ok(WorkerCommand::Speak(utterance, generation)) => {
                run_utterance(&config, &utterance, generation, &event_tx, &shared);
            }
            Ok(WorkerCommand::Shutdown) | Err(_) => break,
        }
    }
}

fn run_utterance(
    config: &SpeechConfig,
    utterance: &Utterance,
    generation: u64,
    event_tx: &Sender<SpeechEvent>,
    shared: &WorkerShared,
) {
    // A later request may have superseded this one while it sat queued.
    if shared.current_generation() != generation {
        return;
    }

    let mut cmd = Command::new(&config.program);
    cmd.args(&config.args);
    cmd.arg("-s")
        .arg(words_per_minute(utterance.rate).to_string());
    if let Some(voice) = &utterance.voice {
        cmd.arg("-v").arg(&voice.lang);
    }
    cmd.arg("--").arg(&utterance.text);
    cmd.stdout(Stdio::null()).stderr(Stdio::null());

    let child = match cmd.spawn() {
        Ok(child) => child,
        Err(err) => {
            log::warn!("failed to launch synthesizer: {err}");
            let _ = event_tx.send(SpeechEvent::Errored(
                utterance.token,
                SpeechError::Synthesis(err.to_string()),
            ));
            return;
        }
    };

    {
        let mut slot = shared.current.lock().unwrap();
        *slot = Some(child);
        // A cancel that raced the spawn could not see the child yet; honor
        // it here, under the lock, before the slot is released.
        if shared.current_generation() != generation {
            if let Some(child) = slot.as_mut() {
                let _ = child.kill();
            }
        }
    }
    let _ = event_tx.send(SpeechEvent::Started(utterance.token));

    // Poll rather than block on wait() so that `cancel_all` can kill the
    // process from another thread while it is running.
    loop {
        let status = {
            let mut slot = shared.current.lock().unwrap();
            match slot.as_mut() {
                Some(child) => child.try_wait(),
                None => return,
            }
        };
        match status {
            Ok(Some(status)) => {
                shared.current.lock().unwrap().take();
                let event = if status.success() {
                    SpeechEvent::Finished(utterance.token)
                } else {
                    // Includes preemption kills; the narration controller
                    // discards events carrying a superseded token.
                    SpeechEvent::Errored(
                        utterance.token,
                        SpeechError::Synthesis(format!("synthesizer exited with {status}")),
                    )
                };
                let _ = event_tx.send(event);
                return;
            }
            Ok(None) => thread::sleep(CHILD_POLL_INTERVAL),
            Err(err) => {
                shared.current.lock().unwrap().take();
                let _ = event_tx.send(SpeechEvent::Errored(
                    utterance.token,
                    SpeechError::Synthesis(err.to_string()),
                ));
                return;
            }
        }
    }
}

/// Scale the utterance's relative rate to espeak's words-per-minute flag.
fn words_per_minute(rate: f32) -> u32 {
    (BASE_WORDS_PER_MINUTE * rate).round() as u32
}

/// Parse `espeak-ng --voices` output into voices.
///
/// Lines look like:
/// ```text
/// Pty Language       Age/Gender VoiceName          File          Other Languages
///  5  ar             --/M      Arabic             roa/ar
/// ```
fn parse_voice_listing(output: &str) -> Vec<Voice> {
    output
        .lines()
        .filter_map(|line| {
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() < 4 || fields[0].parse::<u32>().is_err() {
                return None;
            }
            Some(Voice::new(fields[3], fields[1]))
        })
        .collect()
}
