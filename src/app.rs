use crate::config::Config;
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::logger::{self, CustomLogger, LogSink};
use crate::state::State;
use crate::ui::Theme;
use anyhow::{anyhow, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::sync::{Arc, Mutex as SyncMutex};
use tokio::sync::Mutex;

pub type ConfigSaveSender = std::sync::mpsc::Sender<()>;
type ConfigSaveReceiver = std::sync::mpsc::Receiver<()>;

/// Run-time choices made on the command line.
///
#[derive(Debug, Default, Clone)]
pub struct LaunchOptions {
    pub start_section: Option<String>,
    pub theme: Option<String>,
}

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: Arc<Mutex<State>>,
    config: Config,
    log_sink: LogSink,
}

impl App {
    /// Start a new application according to the given configuration. Returns
    /// the result of the application execution.
    ///
    pub async fn start(config: Config, options: LaunchOptions) -> Result<()> {
        let log_sink: LogSink = Arc::new(SyncMutex::new(Vec::new()));
        log::set_boxed_logger(Box::new(CustomLogger::into_sink(
            LevelFilter::Debug,
            Arc::clone(&log_sink),
        )))
        .map_err(|e| anyhow!("Failed to initialize logger: {}", e))?;
        log::set_max_level(LevelFilter::Debug);

        info!("Starting application...");
        let (config_save_tx, config_save_rx) = std::sync::mpsc::channel::<()>();
        let theme = resolve_theme(&config, options.theme.as_deref());
        let start_section = options
            .start_section
            .unwrap_or_else(|| crate::state::navigation::DEFAULT_SECTION.to_string());
        let state = State::new(
            config_save_tx,
            &start_section,
            theme,
            config.hotkeys_or_default(),
        );
        let mut app = App {
            state: Arc::new(Mutex::new(state)),
            config,
            log_sink,
        };
        app.start_config_saver(config_save_rx);
        app.start_ui().await?;

        // Save config on exit
        {
            let state = app.state.lock().await;
            app.config.theme_name = state.get_theme().name.clone();
            if let Err(e) = app.config.save() {
                error!("Failed to save config on exit: {}", e);
            }
        }

        info!("Exiting application...");
        Ok(())
    }

    /// Start a thread to handle config save requests.
    ///
    fn start_config_saver(&self, receiver: ConfigSaveReceiver) {
        let state = Arc::clone(&self.state);
        let mut config = self.config.clone();
        std::thread::spawn(move || {
            while receiver.recv().is_ok() {
                // The UI loop holds the lock while it handles the key that
                // requested the save, so wait for it instead of trying once.
                config.theme_name = state.blocking_lock().get_theme().name.clone();
                match config.save() {
                    Ok(()) => debug!("Saved theme '{}'", config.theme_name),
                    Err(e) => error!("Failed to save config: {}", e),
                }
            }
        });
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. Return the result following an exit
    /// request or unrecoverable error.
    ///
    async fn start_ui(&mut self) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        let terminal_event_handler = TerminalEventHandler::new();
        let result = loop {
            let mut state = self.state.lock().await;
            for entry in logger::drain(&self.log_sink) {
                state.add_log_entry(entry);
            }
            if let Ok(size) = terminal.size() {
                state.set_terminal_size(size);
            };
            if let Err(e) = terminal.draw(|frame| crate::ui::render(frame, &mut state)) {
                break Err(e.into());
            }
            match terminal_event_handler.handle_next(&mut state) {
                Ok(true) => {}
                Ok(false) => {
                    debug!("Received application exit request.");
                    break Ok(());
                }
                Err(e) => break Err(e),
            }
        };

        disable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }
}

/// Pick the theme for this run: the command line override, then the config
/// file, then the default. Unknown names are logged and skipped.
///
fn resolve_theme(config: &Config, override_name: Option<&str>) -> Theme {
    override_name
        .into_iter()
        .chain(std::iter::once(config.theme_name.as_str()))
        .find_map(|name| {
            let theme = Theme::from_name(name);
            if theme.is_none() {
                warn!("Unknown theme '{}'", name);
            }
            theme
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_override_wins() {
        let mut config = Config::new();
        config.theme_name = "forest".to_string();
        assert_eq!(resolve_theme(&config, Some("dracula")).name, "dracula");
        assert_eq!(resolve_theme(&config, None).name, "forest");
    }

    #[test]
    fn unknown_themes_fall_through() {
        let mut config = Config::new();
        config.theme_name = "forest".to_string();
        assert_eq!(resolve_theme(&config, Some("neon")).name, "forest");
        config.theme_name = "neon".to_string();
        assert_eq!(resolve_theme(&config, None).name, "midnight");
    }
}
