mod app;
mod ui;

use app::{GardenAction, GardenApp};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use garden::config::GardenConfig;
use garden::profile::{
    current_user, register_profile, registered_profiles, set_current_user, sign_out,
    PasscodeGate,
};
use garden::store::{garden_dir, FileStore, KeyValueStore};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};
use ui::passcode_screen::PasscodeScreen;
use ui::profile_screens::{ProfileSelectScreen, RegisterScreen};

enum Screen {
    Passcode,
    ProfileSelect,
    Register,
    Garden,
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("garden {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Garden - Heart Hunt and Koala Care\n");
                println!("Usage: garden [command]\n");
                println!("Commands:");
                println!("  --reset    Forget the remembered passcode and user");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                std::process::exit(0);
            }
            "--reset" => {
                let (store, _) = open_store()?;
                PasscodeGate::lock(store.as_ref());
                sign_out(store.as_ref())?;
                println!("Remembered login cleared.");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Run 'garden --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    init_logging()?;
    let (store, config) = open_store()?;
    let gate = PasscodeGate::new(config.passcode_sha256.clone());

    let mut current_screen = if !PasscodeGate::is_unlocked(store.as_ref()) {
        Screen::Passcode
    } else if current_user(store.as_ref()).is_some() {
        Screen::Garden
    } else {
        Screen::ProfileSelect
    };

    let mut passcode_screen = PasscodeScreen::new();
    let mut select_screen = ProfileSelectScreen::new();
    let mut register_screen = RegisterScreen::new();
    let frame_interval = Duration::from_millis(config.frame_ms);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    'screens: loop {
        match current_screen {
            Screen::Passcode => {
                terminal.draw(|f| {
                    let area = f.size();
                    passcode_screen.draw(f, area);
                })?;

                if event::poll(frame_interval)? {
                    if let Event::Key(key_event) = event::read()? {
                        if key_event.kind != KeyEventKind::Press {
                            continue;
                        }
                        match key_event.code {
                            KeyCode::Char(c) => passcode_screen.handle_char_input(c),
                            KeyCode::Backspace => passcode_screen.handle_backspace(),
                            KeyCode::Enter => {
                                if gate.unlock(store.as_ref(), &passcode_screen.input) {
                                    passcode_screen = PasscodeScreen::new();
                                    current_screen = if current_user(store.as_ref()).is_some() {
                                        Screen::Garden
                                    } else {
                                        Screen::ProfileSelect
                                    };
                                } else {
                                    passcode_screen.reject();
                                }
                            }
                            KeyCode::Esc => break 'screens,
                            _ => {}
                        }
                    }
                }
            }

            Screen::ProfileSelect => {
                let profiles = registered_profiles(store.as_ref());
                if profiles.is_empty() {
                    current_screen = Screen::Register;
                    continue;
                }

                terminal.draw(|f| {
                    let area = f.size();
                    select_screen.draw(f, area, &profiles);
                })?;

                if event::poll(frame_interval)? {
                    if let Event::Key(key_event) = event::read()? {
                        if key_event.kind != KeyEventKind::Press {
                            continue;
                        }
                        match key_event.code {
                            KeyCode::Up => select_screen.move_up(),
                            KeyCode::Down => select_screen.move_down(&profiles),
                            KeyCode::Enter => {
                                if select_screen.is_register_row(&profiles) {
                                    register_screen = RegisterScreen::new();
                                    current_screen = Screen::Register;
                                } else {
                                    let chosen = &profiles[select_screen.selected_index];
                                    set_current_user(store.as_ref(), chosen)?;
                                    current_screen = Screen::Garden;
                                }
                            }
                            KeyCode::Esc | KeyCode::Char('q') => break 'screens,
                            _ => {}
                        }
                    }
                }
            }

            Screen::Register => {
                terminal.draw(|f| {
                    let area = f.size();
                    register_screen.draw(f, area);
                })?;

                if event::poll(frame_interval)? {
                    if let Event::Key(key_event) = event::read()? {
                        if key_event.kind != KeyEventKind::Press {
                            continue;
                        }
                        match key_event.code {
                            KeyCode::Char(c) => register_screen.handle_char_input(c),
                            KeyCode::Backspace => register_screen.handle_backspace(),
                            KeyCode::Tab | KeyCode::Down => register_screen.focus_next(),
                            KeyCode::BackTab | KeyCode::Up => register_screen.focus_prev(),
                            KeyCode::Left => register_screen.cycle(false),
                            KeyCode::Right => register_screen.cycle(true),
                            KeyCode::Enter => match register_profile(
                                store.as_ref(),
                                &register_screen.name_input,
                                &register_screen.email_input,
                                register_screen.avatar(),
                                register_screen.theme,
                            ) {
                                Ok(profile) => {
                                    set_current_user(store.as_ref(), &profile)?;
                                    register_screen = RegisterScreen::new();
                                    current_screen = Screen::Garden;
                                }
                                Err(e) => register_screen.validation_error = Some(e.to_string()),
                            },
                            KeyCode::Esc => {
                                if registered_profiles(store.as_ref()).is_empty() {
                                    break 'screens;
                                }
                                register_screen = RegisterScreen::new();
                                current_screen = Screen::ProfileSelect;
                            }
                            _ => {}
                        }
                    }
                }
            }

            Screen::Garden => {
                let Some(user) = current_user(store.as_ref()) else {
                    current_screen = Screen::ProfileSelect;
                    continue;
                };
                let mut garden = GardenApp::new(store.clone(), &config, user);
                let mut last_frame = Instant::now();

                loop {
                    terminal.draw(|frame| garden.draw(frame))?;

                    if event::poll(frame_interval)? {
                        if let Event::Key(key_event) = event::read()? {
                            if key_event.kind == KeyEventKind::Press {
                                match garden.handle_key(key_event) {
                                    GardenAction::Continue => {}
                                    GardenAction::SignOut => {
                                        sign_out(store.as_ref())?;
                                        select_screen = ProfileSelectScreen::new();
                                        current_screen = Screen::ProfileSelect;
                                        break;
                                    }
                                    GardenAction::Quit => break 'screens,
                                }
                            }
                        }
                    }

                    // Whole milliseconds only; the remainder carries into the next frame.
                    let elapsed_ms = last_frame.elapsed().as_millis() as u64;
                    if elapsed_ms > 0 {
                        last_frame += Duration::from_millis(elapsed_ms);
                        garden.tick(elapsed_ms);
                    }
                }
            }
        }
    }

    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    println!("See you soon in the garden 🌸");

    Ok(())
}

/// Open the store under `~/.garden/`, honouring a `data_dir` override.
fn open_store() -> io::Result<(Arc<dyn KeyValueStore>, GardenConfig)> {
    let home = FileStore::open(garden_dir()?)?;
    let config = GardenConfig::load(&home);
    let store: Arc<dyn KeyValueStore> = match &config.data_dir {
        Some(dir) => Arc::new(FileStore::open(dir)?),
        None => Arc::new(home),
    };
    Ok((store, config))
}

/// Log to `~/.garden/garden.log`; the terminal belongs to the UI.
fn init_logging() -> io::Result<()> {
    let dir = garden_dir()?;
    std::fs::create_dir_all(&dir)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("garden.log"))?;

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init();
    Ok(())
}
