use crossterm::{
    cursor, execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use log::info;
use std::io::{self, stdin, stdout, Write};
use std::sync::Arc;
use style_core::builder::{base_strip, variant_labels, wrapper_sources, BuilderSelection};
use style_core::config::{default_config_path, default_store_path};
use style_core::core::catalog::chip_labels;
use style_core::persistence::JsonFileStore;
use style_core::scheduler::{ClockScheduler, RecordingObserver};
use style_core::{EngineConfig, Registries, Session};

type AppSession = Session<JsonFileStore>;

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = EngineConfig::load_or_default(&default_config_path());
    let store = JsonFileStore::open(&default_store_path());
    info!("Using store at {:?}", store.path());

    // Paging is driven by `:more`, which plays the part of the viewport edge.
    let mut session = Session::open_with(
        Arc::new(Registries::standard()),
        config,
        store,
        Box::new(ClockScheduler::new()),
        Some(Box::new(RecordingObserver::new())),
    );
    let mut selection = BuilderSelection::default();
    let mut status = String::new();

    loop {
        print_ui(&session, &selection, &status)?;
        status.clear();

        let mut line = String::new();
        if stdin().read_line(&mut line)? == 0 {
            break;
        }
        let cmd = line.trim_end_matches(['\r', '\n']);

        match cmd {
            "exit" => break,
            ":more" => {
                let added = session.near_edge(session.observer_epoch());
                status = format!("Loaded {} more", added);
            }
            ":cats" => {
                let chips: Vec<String> = chip_labels(session.registries())
                    .into_iter()
                    .map(|(key, label)| format!("{} [{}]", label, key))
                    .collect();
                status = chips.join("  ");
            }
            ":bases" => {
                let strip = base_strip(session.registries(), session.input(), &session.config().placeholder);
                status = strip
                    .iter()
                    .enumerate()
                    .map(|(i, (name, text))| format!("{:>2} {:<14} {}", i, name, text))
                    .collect::<Vec<_>>()
                    .join("\n");
            }
            ":wraps" => {
                status = wrapper_sources(session.registries())
                    .iter()
                    .map(|source| {
                        let variants = variant_labels(source);
                        format!("{} ({}): {}", source.key, source.label, variants.join(" "))
                    })
                    .collect::<Vec<_>>()
                    .join("\n");
            }
            ":save" => {
                let saved = session.toggle_save_custom(&selection);
                status = format!(
                    "{} '{}'",
                    if saved { "Saved" } else { "Removed" },
                    selection.name(session.registries())
                );
            }
            s if s.starts_with(":cat ") => {
                session.select_category(s[5..].trim());
            }
            s if s.starts_with(":like ") => {
                status = like_nth(&mut session, s[6..].trim());
            }
            s if s.starts_with(":build ") => {
                status = build(&session, &mut selection, &s[7..]);
            }
            s => {
                session.set_input_now(s);
            }
        }
    }

    info!("Bye");
    Ok(())
}

fn like_nth(session: &mut AppSession, arg: &str) -> String {
    let Ok(n) = arg.parse::<usize>() else {
        return format!("Not a number: '{}'", arg);
    };
    let Some(id) = n
        .checked_sub(1)
        .and_then(|i| session.loaded_styles().get(i))
        .map(|style| style.id())
    else {
        return format!("No style #{}", n);
    };
    let liked = session.toggle_like(&id);
    format!("{} {}", if liked { "Liked" } else { "Unliked" }, id)
}

/// `:build <base index> <wrapper key> <variant>`, all optional from the right.
fn build(session: &AppSession, selection: &mut BuilderSelection, args: &str) -> String {
    let mut parts = args.split_whitespace();
    let registries = session.registries();
    if let Some(base) = parts.next().and_then(|p| p.parse::<usize>().ok()) {
        selection.select_base(base, registries);
    }
    if let Some(key) = parts.next() {
        selection.select_wrapper(&key.to_uppercase());
    }
    if let Some(variant) = parts.next().and_then(|p| p.parse::<usize>().ok()) {
        selection.select_variant(variant);
    }
    let saved = if session.is_custom_saved(selection) { " (saved)" } else { "" };
    format!("{}{} -> {}", selection.name(registries), saved, session.builder_preview(selection))
}

fn print_ui(session: &AppSession, selection: &BuilderSelection, status: &str) -> io::Result<()> {
    let mut out = stdout();
    execute!(
        out,
        Clear(ClearType::All),
        cursor::MoveTo(0, 0),
        SetForegroundColor(Color::Cyan),
        Print("Stylized Text\n"),
        ResetColor
    )?;
    println!("---------------------------------------------------------------");
    println!("Type text to restyle it. ':cat <key>', ':cats', ':more', ':like <n>',");
    println!("':bases', ':wraps', ':build <base> <wrapKey> <variant>', ':save', 'exit'.\n");
    println!(
        "Category: {}  ({} of {} shown)   Input: [{}]",
        session.active_category(),
        session.loaded_styles().len(),
        session.active_styles().len(),
        session.input()
    );
    println!("Builder: {}\n", selection.name(session.registries()));

    for (i, (id, text)) in session.rendered().iter().enumerate() {
        let heart = if session.is_liked(id) { "♥" } else { " " };
        println!(" {:>4} {} {}", i + 1, heart, text);
    }

    if !status.is_empty() {
        execute!(out, SetForegroundColor(Color::Yellow), Print(format!("\n{}\n", status)), ResetColor)?;
    }
    print!("\n> ");
    out.flush()
}
