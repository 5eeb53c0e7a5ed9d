use super::{dialogs, footer, log, modal, sidebar, PanelContext, Frame};
use super::{catalogue, cms, finance, jobs, overview, people, settings, support, system};
use crate::state::{Focus, Panel, State};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

const SIDEBAR_WIDTH: u16 = 30;
const LOG_HEIGHT: u16 = 7;

/// Render the whole screen: sidebar, active panel, log pane and footer,
/// followed by any open overlay.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let size = frame.size();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),
            Constraint::Length(if state.is_debug_mode() { LOG_HEIGHT * 2 } else { LOG_HEIGHT }),
            Constraint::Length(1),
        ])
        .split(size);
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(rows[0]);

    sidebar::sidebar(frame, body[0], state);
    panel(frame, body[1], state);
    log::log(frame, rows[1], state);
    footer::footer(frame, rows[2], state);

    dialogs::dialogs(frame, size, state);
    if state.has_theme_selector() {
        modal::theme_selector(frame, size, state);
    }
    if let Some(notice) = state.get_notice() {
        modal::notice(frame, size, state.get_theme(), notice);
    }
}

fn panel(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme().clone();
    let ctx = PanelContext {
        theme: &theme,
        focused: *state.current_focus() == Focus::Panel,
        searching: state.is_search_mode(),
    };
    match state.panel() {
        Panel::Overview(p) => overview::overview(frame, size, &ctx, p),
        Panel::Users(p) => people::users(frame, size, &ctx, p),
        Panel::Earnings(p) => people::earnings(frame, size, &ctx, p),
        Panel::Jobs(p) => jobs::jobs(frame, size, &ctx, p),
        Panel::Transactions(p) => finance::transactions(frame, size, &ctx, p),
        Panel::Escrow(p) => finance::escrow(frame, size, &ctx, p),
        Panel::Commissions(p) => finance::commissions(frame, size, &ctx, p),
        Panel::Tax(p) => finance::tax(frame, size, &ctx, p),
        Panel::Categories(p) => catalogue::categories(frame, size, &ctx, p),
        Panel::Support(p) => support::support(frame, size, &ctx, p),
        Panel::Cms(p) => cms::cms(frame, size, &ctx, p),
        Panel::System(p) => system::system(frame, size, &ctx, p),
        Panel::Settings(p) => settings::settings(frame, size, &ctx, p),
    }
}
