use super::*;
use crate::app::TextInput;
use ratatui::widgets::{List, ListItem, ListState};
use timelog::RowView;

pub fn render_item_list(frame: &mut Frame, area: Rect, app: &App, view: &ListView) {
    let is_focused = app.focus == Focus::List || app.is_editing_text();
    let border_style = if is_focused {
        Style::default().fg(Color::Magenta)
    } else {
        Style::default()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Tasks ({}) ", view.rows.len()))
        .border_style(border_style)
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(1),    // Rows
            Constraint::Length(1), // Selected total
        ])
        .split(inner);

    let header = Line::from(Span::styled(
        format!("  {}", view.header.join(" | ")),
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(header), sections[0]);

    let items: Vec<ListItem> = view
        .rows
        .iter()
        .map(|row| {
            let editing = app
                .text_edit
                .as_ref()
                .filter(|edit| edit.item_id == row.id)
                .map(|edit| &edit.input);
            ListItem::new(build_row_line(row, editing))
        })
        .collect();

    let mut state = ListState::default();
    if is_focused {
        state.select(app.list_index);
    }
    let list = List::new(items)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, sections[1], &mut state);

    let total = Line::from(vec![
        Span::styled("  Selected total: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            view.selected_total.clone(),
            Style::default().fg(Color::Magenta),
        ),
    ]);
    frame.render_widget(Paragraph::new(total), sections[2]);
}

pub fn build_row_line<'a>(row: &'a RowView, editing: Option<&'a TextInput>) -> Line<'a> {
    let marker = if row.selected { "● " } else { "  " };
    let marker_color = if row.selected {
        Color::Green
    } else {
        Color::DarkGray
    };
    let text_color = if row.is_current {
        Color::White
    } else {
        Color::Gray
    };

    let mut spans = vec![
        Span::styled(marker, Style::default().fg(marker_color)),
        Span::styled(row.ranges.join(" "), Style::default().fg(Color::Yellow)),
        Span::raw(" | "),
        Span::styled(row.duration.as_str(), Style::default().fg(Color::Magenta)),
        Span::raw(" | "),
    ];

    match editing {
        Some(input) => {
            let (before, after) = input.split_at_cursor();
            spans.push(Span::styled(before, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                "█",
                Style::default().fg(Color::White),
            ));
            spans.push(Span::styled(after, Style::default().fg(Color::White)));
        }
        None => {
            spans.push(Span::styled(row.text.as_str(), Style::default().fg(text_color)));
            if row.is_current {
                spans.push(Span::styled(
                    " (current)",
                    Style::default().fg(Color::DarkGray),
                ));
            }
        }
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(selected: bool, is_current: bool) -> RowView {
        RowView {
            id: "id".to_string(),
            ranges: vec!["09:00~09:30".to_string(), "10:00~".to_string()],
            text: "write report".to_string(),
            duration: "30m".to_string(),
            selected,
            is_current,
        }
    }

    fn plain(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn row_line_contains_ranges_duration_and_text() {
        let row = row(true, false);
        let line = build_row_line(&row, None);
        assert_eq!(plain(&line), "● 09:00~09:30 10:00~ | 30m | write report");
    }

    #[test]
    fn current_row_is_labelled() {
        let row = row(false, true);
        let line = build_row_line(&row, None);
        assert_eq!(plain(&line), "  09:00~09:30 10:00~ | 30m | write report (current)");
    }

    #[test]
    fn editing_row_shows_input_with_cursor() {
        let row = row(false, false);
        let mut input = TextInput::from_str("new text");
        input.home();
        let line = build_row_line(&row, Some(&input));
        assert_eq!(plain(&line), "  09:00~09:30 10:00~ | 30m | █new text");
    }
}
