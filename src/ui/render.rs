use crate::ui::app::App;
use crate::ui::layout::layout_regions;
use crate::ui::selection::AggregateState;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, SELECTED_MARK,
};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (header, body, footer) = layout_regions(frame.area());
    frame.render_widget(header_widget(app), header);
    frame.render_widget(Clear, body);
    frame.render_widget(body_widget(app), body);
    frame.render_widget(footer_widget(footer.width), footer);
}

fn header_widget(app: &App) -> Paragraph<'static> {
    let selected = app
        .selection()
        .items()
        .iter()
        .filter(|item| item.selected)
        .count();
    let total = app.selection().items().len();

    let line = Line::from(vec![
        Span::styled("  checkall", Style::default().fg(ACCENT)),
        Span::styled("  │  ", Style::default().fg(HEADER_SEPARATOR)),
        Span::styled(
            format!("{selected} of {total} selected"),
            Style::default().fg(HEADER_TEXT),
        ),
    ]);

    Paragraph::new(line).block(
        Block::default()
            .borders(Borders::TOP | Borders::BOTTOM)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

/// Checkbox glyph for an individual item.
fn checkbox(selected: bool) -> &'static str {
    if selected {
        "[x]"
    } else {
        "[ ]"
    }
}

/// Checkbox glyph for the tri-state "select all" control.
fn aggregate_checkbox(aggregate: AggregateState) -> &'static str {
    match aggregate {
        AggregateState::All => "[x]",
        AggregateState::None => "[ ]",
        AggregateState::Mixed => "[-]",
    }
}

fn body_widget(app: &App) -> Paragraph<'static> {
    let selection = app.selection();
    let mark_style = Style::default().fg(SELECTED_MARK);
    let text_style = Style::default().fg(HEADER_TEXT);
    let highlight = Style::default().bg(ACTIVE_HIGHLIGHT);

    let mut lines = Vec::with_capacity(selection.items().len() + 1);

    let aggregate = selection.aggregate();
    let glyph_style = if aggregate == AggregateState::None {
        text_style
    } else {
        mark_style
    };
    let mut all_line = Line::from(vec![
        Span::styled(" ", text_style),
        Span::styled(aggregate_checkbox(aggregate), glyph_style),
        Span::styled(" Select all", text_style.add_modifier(Modifier::BOLD)),
    ]);
    if app.cursor() == 0 {
        all_line = all_line.style(highlight);
    }
    lines.push(all_line);

    for (index, item) in selection.items().iter().enumerate() {
        let glyph_style = if item.selected { mark_style } else { text_style };
        let mut line = Line::from(vec![
            Span::styled("   ", text_style),
            Span::styled(checkbox(item.selected), glyph_style),
            Span::styled(format!(" {}", item.label), text_style),
        ]);
        if app.cursor() == index + 1 {
            line = line.style(highlight);
        }
        lines.push(line);
    }

    Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

fn footer_widget(width: u16) -> Paragraph<'static> {
    let hints = " ↑/↓: Move │ Space: Toggle │ a: Toggle all │ q: Quit";
    let version = format!("v{VERSION} ");

    // Pad using char count, not byte count (the hints contain Unicode).
    let hints_width = hints.chars().count();
    let version_width = version.chars().count();
    let content_width = width.saturating_sub(2) as usize;
    let padding = content_width
        .saturating_sub(hints_width)
        .saturating_sub(version_width);

    let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
    let line = Line::from(vec![
        Span::styled(hints, text_style),
        Span::styled(" ".repeat(padding), text_style),
        Span::styled(version, text_style),
    ]);

    Paragraph::new(line)
        .style(text_style)
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
}
