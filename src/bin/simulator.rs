use log::{debug, info, warn};
use std::fs::OpenOptions;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use style_core::config::{default_config_path, default_store_path};
use style_core::dictation::TranscriptSegment;
use style_core::persistence::JsonFileStore;
use style_core::scheduler::{ClockScheduler, ObserverEvent, RecordingObserver};
use style_core::{EngineConfig, Registries, Session};

type HostSession = Session<JsonFileStore>;

fn get_log_path() -> PathBuf {
    let mut path = PathBuf::from("target");
    path.push("style_simulator.log");
    path
}

fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) => std::fs::create_dir_all(parent),
        None => Ok(()),
    }
}

/// stdout carries the protocol only, so logs go to a file.
fn init_logging() {
    let path = get_log_path();
    let dir_error = ensure_parent_dir(&path).err();
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    match OpenOptions::new().create(true).write(true).truncate(true).open(&path) {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(_) => {
            builder.target(env_logger::Target::Stderr);
        }
    }
    builder.format_timestamp_micros().init();
    if let Some(e) = dir_error {
        warn!("Error creating log dir: {}", e);
    }
}

fn main() -> io::Result<()> {
    init_logging();
    info!("--- Style simulator starting ---");

    let config = EngineConfig::load_or_default(&default_config_path());
    let observer = RecordingObserver::new();
    let mut session = Session::open_with(
        Arc::new(Registries::standard()),
        config,
        JsonFileStore::open(&default_store_path()),
        Box::new(ClockScheduler::new()),
        Some(Box::new(observer.clone())),
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    show_all(&session, &observer, &mut stdout)?;

    for line in stdin.lock().lines() {
        let input = line?;
        debug!("<- {:?}", input);
        let (command, rest) = input.split_once(' ').unwrap_or((input.as_str(), ""));

        match command {
            "INPUT" => session.edit_input(rest),
            "TICK" => {
                if let Some(rendered) = session.tick() {
                    // Re-show in list order; the map itself is unordered.
                    for style in session.loaded_styles() {
                        let id = style.id();
                        if let Some(text) = rendered.get(&id) {
                            send(&mut stdout, &format!("SHOW {} {}", id, text))?;
                        }
                    }
                }
            }
            "CATEGORY" => {
                session.select_category(rest.trim());
                show_all(&session, &observer, &mut stdout)?;
            }
            "NEAR_EDGE" => {
                let epoch = rest.trim().parse().unwrap_or(0);
                let before = session.loaded_styles().len();
                session.near_edge(epoch);
                show_from(&session, before, &mut stdout)?;
                report_observer(&observer, &mut stdout)?;
            }
            "LIKE" => {
                let id = rest.trim();
                let liked = session.toggle_like(id);
                send(&mut stdout, &format!("LIKED {} {}", id, u8::from(liked)))?;
                if session.active_category() == "fav" {
                    show_all(&session, &observer, &mut stdout)?;
                }
            }
            "DICTATE" => handle_dictation(&mut session, rest),
            "EXIT" => {
                info!("Received EXIT");
                break;
            }
            _ => debug!("Unknown command {:?}", command),
        }
        stdout.flush()?;
    }
    info!("Shutting down");
    Ok(())
}

/// `DICTATE <0|1> <text>`: 1 marks a final result. `DICTATE START` and
/// `DICTATE STOP` bracket a run.
fn handle_dictation(session: &mut HostSession, rest: &str) {
    let (flag, text) = rest.split_once(' ').unwrap_or((rest, ""));
    match flag {
        "START" => session.start_dictation(),
        "STOP" => session.stop_dictation(),
        "0" | "1" => {
            if !session.is_dictating() {
                session.start_dictation();
            }
            let segment = if flag == "1" {
                TranscriptSegment::confirmed(text)
            } else {
                TranscriptSegment::interim(text)
            };
            session.dictation_result(&[segment]);
        }
        _ => debug!("Bad DICTATE flag {:?}", flag),
    }
}

fn send(stdout: &mut io::Stdout, cmd: &str) -> io::Result<()> {
    debug!("-> {:?}", cmd);
    writeln!(stdout, "{}", cmd)
}

fn show_all(session: &HostSession, observer: &RecordingObserver, stdout: &mut io::Stdout) -> io::Result<()> {
    send(stdout, "CLEAR")?;
    show_from(session, 0, stdout)?;
    report_observer(observer, stdout)?;
    stdout.flush()
}

fn show_from(session: &HostSession, start: usize, stdout: &mut io::Stdout) -> io::Result<()> {
    for (id, text) in session.rendered().into_iter().skip(start) {
        send(stdout, &format!("SHOW {} {}", id, text))?;
    }
    Ok(())
}

fn report_observer(observer: &RecordingObserver, stdout: &mut io::Stdout) -> io::Result<()> {
    for event in observer.drain() {
        match event {
            ObserverEvent::Observe(epoch) => send(stdout, &format!("OBSERVE {}", epoch))?,
            ObserverEvent::Stop => send(stdout, "STOP_OBSERVER")?,
        }
    }
    Ok(())
}
