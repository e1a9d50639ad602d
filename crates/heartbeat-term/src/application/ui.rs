use std::io;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableBracketedPaste;
use crossterm::event::DisableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::layout::Alignment;
use ratatui::layout::Constraint;
use ratatui::layout::Layout;
use ratatui::prelude::Backend;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use ratatui::Terminal;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::services::events::EventsService;
use crate::domain::services::AppState;
use crate::domain::services::AppStateProps;

pub fn destruct_terminal_for_panic() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    );
    let _ = crossterm::execute!(io::stdout(), cursor::Show);
}

fn header() -> Paragraph<'static> {
    let line = Line::from(vec![
        Span::styled("● ", Style::default().fg(Color::Red)),
        Span::styled("● ", Style::default().fg(Color::Yellow)),
        Span::styled("●", Style::default().fg(Color::Green)),
        Span::raw("   📁 APIHeartbeat"),
    ]);

    return Paragraph::new(line).style(Style::default().bg(Color::DarkGray));
}

fn welcome() -> Paragraph<'static> {
    let line = Line::from(vec![
        Span::raw("Welcome to "),
        Span::styled(
            "APIHeartbeat",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" - Keep your APIs alive with automated pings"),
    ]);

    return Paragraph::new(line).alignment(Alignment::Center);
}

pub fn render(frame: &mut Frame, app_state: &AppState) {
    let [header_area, welcome_area, body_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Min(1),
    ])
    .areas(frame.area());

    frame.render_widget(header(), header_area);
    frame.render_widget(welcome(), welcome_area);

    let mut lines: Vec<Line> = app_state
        .display_lines()
        .into_iter()
        .map(|line| Line::from(line.to_string()))
        .collect();

    let cursor = if app_state.waiting_for_backend { "…" } else { "|" };
    lines.push(Line::from(vec![
        Span::styled(
            app_state.prompt.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::raw(app_state.input.as_str().to_string()),
        Span::styled(cursor, Style::default().add_modifier(Modifier::SLOW_BLINK)),
    ]));

    // Pin the newest line to the bottom unless the user scrolled back.
    let height = body_area.height as usize;
    let bottom = lines.len().saturating_sub(height);
    let offset = bottom.saturating_sub(app_state.scroll_back);
    let offset = u16::try_from(offset).unwrap_or(u16::MAX);

    frame.render_widget(Paragraph::new(lines).scroll((offset, 0)), body_area);
}

pub async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state_props: AppStateProps,
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut app_state = AppState::new(app_state_props);
    let mut events = EventsService::new(rx);

    loop {
        terminal.draw(|frame| render(frame, &app_state))?;

        let event = events.next().await?;
        if app_state.handle_event(event, &tx)? {
            break;
        }
    }

    return Ok(());
}
