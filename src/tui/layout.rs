use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::QuizApp;

pub fn render(frame: &mut Frame, app: &QuizApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(6),    // Revealed ayaat
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_passage(frame, app, chunks[1]);
    render_status_bar(frame, app, chunks[2]);
}

fn render_header(frame: &mut Frame, app: &QuizApp, area: Rect) {
    let t = &app.translations;
    let session = &app.session;

    // Arrows show which reveal keys still do something
    let progress = match session.ruku() {
        Some(ruku) => format!(
            "{}{}/{}{}",
            if session.can_show_less() { "▲ " } else { "" },
            session.index() + 1,
            ruku.ayaat.len(),
            if session.can_show_more() { " ▼" } else { "" },
        ),
        None => "-".to_string(),
    };

    let line = Line::from(vec![
        Span::styled(
            app.hint_label(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::raw(format!("{} {}", t.text("report.mistakes"), session.mistakes())),
        Span::raw("   "),
        Span::styled(progress, Style::default().fg(Color::DarkGray)),
    ]);

    let block = Block::default()
        .title(format!(" {} ", t.text("report.title")))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_passage(frame: &mut Frame, app: &QuizApp, area: Rect) {
    let t = &app.translations;

    let (content, alignment) = if app.is_loading {
        (Text::from(t.text("status.loading")), Alignment::Center)
    } else if app.session.ruku().is_some() {
        // Ayah text is always Arabic
        (Text::from(app.session.text()), Alignment::Right)
    } else {
        let help = t.paragraphs("help.quiz", "\n\n");
        let alignment = if t.language().is_rtl() {
            Alignment::Right
        } else {
            Alignment::Left
        };
        (Text::from(help), alignment)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = Paragraph::new(content)
        .block(block)
        .alignment(alignment)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, app: &QuizApp, area: Rect) {
    let status = match &app.status_message {
        Some(msg) => msg.clone(),
        None => app.translations.text("status.keys"),
    };

    let paragraph =
        Paragraph::new(status).style(Style::default().fg(Color::White).bg(Color::DarkGray));

    frame.render_widget(paragraph, area);
}
