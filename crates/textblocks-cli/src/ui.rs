use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use textblocks_engine::{Block as TextBlock, Document, models::collapse_marker};

use crate::app::{App, Mode, PromptKind, StatusLevel};

pub fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1), Constraint::Length(1)].as_ref())
        .split(f.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)].as_ref())
        .split(rows[0]);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(7)].as_ref())
        .split(columns[1]);

    match &app.mode {
        Mode::Compose { buffer } => render_compose(f, buffer, columns[0]),
        _ => render_blocks(f, app, columns[0]),
    }
    render_outline(f, app, side[0]);
    render_stats(f, app, side[1]);
    render_input_line(f, app, rows[1]);
    render_help(f, rows[2]);
}

fn render_blocks(f: &mut Frame, app: &mut App, area: Rect) {
    let items: Vec<ListItem> = app
        .document
        .visible_blocks()
        .map(|block| {
            if block.is_title() {
                ListItem::new(Line::from(vec![
                    Span::raw(title_label(&app.document, block)),
                    Span::styled(
                        block.text().to_string(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                ]))
            } else {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("    {:>4} ", block.display_number()),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::raw(block.text().to_string()),
                ]))
            }
        })
        .collect();

    let title = match &app.current_path {
        Some(path) => format!("Blocks - {}", path.display()),
        None => "Blocks".to_string(),
    };

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    let selected = app.selected_visible_index();
    app.list_state.select(selected);
    f.render_stateful_widget(list, area, &mut app.list_state);
}

/// Fold marker and number shown before a title's text
fn title_label(document: &Document, block: &TextBlock) -> String {
    let marker = collapse_marker(document.is_collapsed(block.id()));
    format!("{marker} {}  ", block.display_number())
}

fn render_compose(f: &mut Frame, buffer: &str, area: Rect) {
    let text = format!("{buffer}_");
    let lines: Vec<Line> = text.split('\n').map(Line::from).collect();

    let editor = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Original Text - Ctrl+D: Create Paragraphs | Esc: Cancel"),
    );
    f.render_widget(editor, area);
}

fn render_outline(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .document
        .outline_with_preview(app.config.outline_preview_chars)
        .iter()
        .map(|entry| ListItem::new(entry.to_string()))
        .collect();

    let outline = List::new(items).block(Block::default().borders(Borders::ALL).title("Outline"));
    f.render_widget(outline, area);
}

fn render_stats(f: &mut Frame, app: &App, area: Rect) {
    let stats = app.document.stats();
    let lines = vec![
        Line::from(format!("Total Blocks: {}", stats.total_blocks)),
        Line::from(format!("Visible Blocks: {}", stats.visible_blocks)),
        Line::from(format!("Titles (visible): {}", stats.titles)),
        Line::from(format!("Paragraphs (visible): {}", stats.paragraphs)),
        Line::from(format!("Words (visible): {}", stats.words)),
    ];

    let panel = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Statistics"));
    f.render_widget(panel, area);
}

/// Shows whatever is being typed, or the latest status message
fn render_input_line(f: &mut Frame, app: &App, area: Rect) {
    let line = match &app.mode {
        Mode::EditBlock { buffer, .. } => Line::from(format!("Edit: {buffer}_")),
        Mode::Prompt { kind, buffer } => {
            let label = match kind {
                PromptKind::Open => "Open file",
                PromptKind::Save => "Save as",
            };
            Line::from(format!("{label}: {buffer}_"))
        }
        Mode::Compose { .. } => Line::from("Type or paste text, Enter for a new line"),
        Mode::ConfirmClear => Line::from(Span::styled(
            "Clear all content? This cannot be undone. (y/n)",
            Style::default().fg(Color::Yellow),
        )),
        Mode::Normal => match &app.status {
            Some(status) => {
                let color = match status.level {
                    StatusLevel::Info => Color::Green,
                    StatusLevel::Warning => Color::Yellow,
                    StatusLevel::Error => Color::Red,
                };
                Line::from(Span::styled(status.message.clone(), Style::default().fg(color)))
            }
            None => Line::from(""),
        },
    };

    f.render_widget(Paragraph::new(line), area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let help = Line::from(vec![
        Span::raw("q: Quit | ↑/k ↓/j: Move | Enter: Edit | t: Title | Space: Fold | "),
        Span::raw("a: Add | d: Delete | K/J: Reorder | E/C: Expand/Collapse all | "),
        Span::raw("i: Input text | o: Open | s: Save | r: Recreate | X: Clear"),
    ]);

    f.render_widget(Paragraph::new(help), area);
}
