use crate::app::{App, Focus};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
    Frame,
};
use timelog::{ListView, TrackerStatus};

mod list_view;
pub(super) mod utils;

pub fn render(frame: &mut Frame, app: &mut App) {
    // Full redraw from a fresh projection every frame.
    let view = app.view();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Title + status
            Constraint::Length(3), // New task input
            Constraint::Min(5),    // Item list
            Constraint::Length(1), // Status message
            Constraint::Length(2), // Controls
        ])
        .split(frame.area());

    render_title(frame, chunks[0], app, &view);
    render_input(frame, chunks[1], app);
    list_view::render_item_list(frame, chunks[2], app, &view);
    render_status_message(frame, chunks[3], app);
    render_controls(frame, chunks[4], app);

    if app.confirm_clear {
        render_confirm_clear(frame);
    }
}

fn status_color(status: TrackerStatus) -> Color {
    match status {
        TrackerStatus::Running => Color::Green,
        TrackerStatus::Paused => Color::Yellow,
        TrackerStatus::Idle => Color::DarkGray,
    }
}

fn render_title(frame: &mut Frame, area: Rect, app: &mut App, view: &ListView) {
    let throbber_area = Rect {
        x: area.x,
        y: area.y,
        width: 1,
        height: 1,
    };
    let label_area = Rect {
        x: area.x + 2,
        y: area.y,
        width: area.width.saturating_sub(2),
        height: 1,
    };

    let color = status_color(view.status);
    let throbber = throbber_widgets_tui::Throbber::default()
        .style(Style::default().fg(color))
        .throbber_style(Style::default().fg(color))
        .throbber_set(throbber_widgets_tui::BRAILLE_SIX)
        .use_type(if view.status == TrackerStatus::Running {
            throbber_widgets_tui::WhichUse::Spin
        } else {
            throbber_widgets_tui::WhichUse::Full
        });
    frame.render_stateful_widget(throbber, throbber_area, &mut app.throbber_state);

    let line = Line::from(vec![
        Span::styled("timelog", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(" | Status: ", Style::default().fg(Color::DarkGray)),
        Span::styled(view.status.label(), Style::default().fg(color)),
    ]);
    frame.render_widget(Paragraph::new(line), label_area);
}

fn render_input(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus == Focus::Input && !app.is_editing_text();
    let border_style = if is_focused {
        Style::default().fg(Color::Magenta)
    } else {
        Style::default()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" New task ")
        .border_style(border_style)
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);

    let widget = Paragraph::new(app.input.value.as_str())
        .style(Style::default().fg(Color::White))
        .block(block);
    frame.render_widget(widget, area);

    if is_focused && !app.confirm_clear {
        let (before, _) = app.input.split_at_cursor();
        frame.set_cursor_position((inner.x + utils::cursor_offset(before), inner.y));
    }
}

fn render_status_message(frame: &mut Frame, area: Rect, app: &App) {
    if let Some(message) = &app.status_message {
        frame.render_widget(
            Paragraph::new(Span::styled(
                message.as_str(),
                Style::default().fg(Color::Cyan),
            )),
            area,
        );
    }
}

fn render_controls(frame: &mut Frame, area: Rect, app: &App) {
    let key = Style::default().fg(Color::Yellow);
    let timer_line = Line::from(vec![
        Span::styled("^P", key),
        Span::raw(": Pause  "),
        Span::styled("^S", key),
        Span::raw(": Start  "),
        Span::styled("^F", key),
        Span::raw(": Finish  "),
        Span::styled("^W", key),
        Span::raw(": Save  "),
        Span::styled("^X", key),
        Span::raw(": Clear data  "),
        Span::styled("^C", key),
        Span::raw(": Quit"),
    ]);
    let focus_line = if app.is_editing_text() {
        Line::from(vec![
            Span::styled("Enter/Esc", key),
            Span::raw(": Done editing"),
        ])
    } else {
        match app.focus {
            Focus::Input => Line::from(vec![
                Span::styled("Enter", key),
                Span::raw(": Start new task  "),
                Span::styled("Tab", key),
                Span::raw(": List"),
            ]),
            Focus::List => Line::from(vec![
                Span::styled("j/k", key),
                Span::raw(": Move  "),
                Span::styled("Space", key),
                Span::raw(": Select  "),
                Span::styled("Enter", key),
                Span::raw(": Edit text  "),
                Span::styled("Tab", key),
                Span::raw(": Input  "),
                Span::styled("q", key),
                Span::raw(": Quit"),
            ]),
        }
    };
    frame.render_widget(
        Paragraph::new(vec![timer_line, focus_line]).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

fn render_confirm_clear(frame: &mut Frame) {
    let area = utils::centered_rect(44, 7, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from("Delete all tasks and saved data?"),
        Line::from(""),
        Line::from(vec![
            Span::styled("y", Style::default().fg(Color::Yellow)),
            Span::raw(": Delete  "),
            Span::styled("n", Style::default().fg(Color::Yellow)),
            Span::raw(": Cancel"),
        ]),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(Span::styled(" Clear data ", Style::default().fg(Color::Red))),
    );
    frame.render_widget(paragraph, area);
}
