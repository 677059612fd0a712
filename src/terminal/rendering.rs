//! Rendering functions for the form screen.
//!
//! Pure drawing logic separated from terminal lifecycle management. All
//! functions operate on ratatui Frame objects without managing terminal state.

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::StatusBar;
use crate::view::{FieldBorder, FormView, GENERATING_MESSAGE};

const TITLE: &str = "QR Code Generator";
const SUBTITLE: &str = "Generate QR codes with 12-character alphanumeric codes";
const FIELD_LABEL: &str = " Code (12 characters, letters and numbers only) ";
const FIELD_HINT: &str = "Only uppercase letters (A-Z) and numbers (0-9)";
const FIELD_PLACEHOLDER: &str = "T2020000PPPP";

fn border_color(border: FieldBorder) -> Color {
    match border {
        FieldBorder::Neutral => Color::DarkGray,
        FieldBorder::Valid => Color::Green,
        FieldBorder::Error => Color::Red,
    }
}

/// Render the header, input field, counter and banners.
pub fn render_form(frame: &mut ratatui::Frame, view: &FormView, area: Rect) {
    let rows = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(area);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(TITLE, Style::default().add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(SUBTITLE, Style::default().fg(Color::Gray))),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(header, rows[0]);

    let field_block = Block::default()
        .borders(Borders::ALL)
        .title(FIELD_LABEL)
        .border_style(Style::default().fg(border_color(view.border)));
    let field_text = if view.code.is_empty() {
        Span::styled(FIELD_PLACEHOLDER, Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(view.code.as_str(), Style::default().add_modifier(Modifier::BOLD))
    };
    frame.render_widget(Paragraph::new(Line::from(field_text)).block(field_block), rows[1]);

    let counter_style = if view.counter_complete {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Gray)
    };
    let hint_width = rows[2].width.saturating_sub(view.counter.len() as u16) as usize;
    let counter_line = Line::from(vec![
        Span::styled(
            format!("{:<width$}", FIELD_HINT, width = hint_width),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(view.counter.as_str(), counter_style),
    ]);
    frame.render_widget(Paragraph::new(counter_line), rows[2]);

    if let Some(ref error) = view.error {
        let banner = Paragraph::new(format!("⚠ {}", error)).style(Style::default().fg(Color::Red));
        frame.render_widget(banner, rows[3]);
    }

    if let Some(success) = view.success {
        let banner =
            Paragraph::new(format!("✔ {}", success)).style(Style::default().fg(Color::Green));
        frame.render_widget(banner, rows[4]);
    } else if view.generating {
        let banner = Paragraph::new(GENERATING_MESSAGE).style(Style::default().fg(Color::Yellow));
        frame.render_widget(banner, rows[4]);
    }
}

/// Render the QR preview, or the placeholder when there is none.
pub fn render_qr_area(frame: &mut ratatui::Frame, view: &FormView, area: Rect) {
    if let Some(ref qr_lines) = view.qr_lines {
        let mut lines: Vec<Line> = qr_lines.iter().map(|l| Line::from(l.as_str())).collect();
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "When scanned, this QR code will display:",
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(Span::styled(
            view.code.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )));

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Generated QR Code ")
            .border_style(Style::default().fg(Color::DarkGray));
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center).block(block),
            area,
        );
    } else if let Some(placeholder) = view.placeholder {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        frame.render_widget(
            Paragraph::new(placeholder)
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Center)
                .block(block),
            area,
        );
    }
}

/// Render a status bar on the last line of `area`.
pub fn render_status_bar(frame: &mut ratatui::Frame, status_bar: &StatusBar, area: Rect) {
    let status_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };
    let status_paragraph = Paragraph::new(status_bar.format())
        .style(Style::default().fg(Color::Black).bg(Color::White));
    frame.render_widget(status_paragraph, status_area);
}

/// Render the complete screen.
///
/// Layers, top to bottom:
/// 1. Form (header, field, counter, banners)
/// 2. QR preview or placeholder
/// 3. Status bar (bottom, if visible)
pub fn render_screen(
    frame: &mut ratatui::Frame,
    view: &FormView,
    status_bar: Option<&StatusBar>,
    area: Rect,
) {
    let show_status = status_bar.is_some_and(|sb| sb.visible);
    let main_area = if show_status {
        Rect {
            height: area.height.saturating_sub(1),
            ..area
        }
    } else {
        area
    };

    let sections = Layout::vertical([Constraint::Length(8), Constraint::Min(0)]).split(main_area);
    render_form(frame, view, sections[0]);
    render_qr_area(frame, view, sections[1]);

    if let Some(sb) = status_bar.filter(|sb| sb.visible) {
        render_status_bar(frame, sb, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::{QrEncoder, RenderOptions};
    use crate::form::CodeForm;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render_to_string(view: &FormView, status_bar: Option<&StatusBar>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_screen(frame, view, status_bar, area);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_empty_screen_shows_placeholder_code_and_counter() {
        let view = FormView::from_form(&CodeForm::new());
        let screen = render_to_string(&view, None);
        assert!(screen.contains(TITLE));
        assert!(screen.contains(FIELD_PLACEHOLDER));
        assert!(screen.contains("0/12"));
        assert!(!screen.contains("QR code will appear here"));
    }

    #[test]
    fn test_partial_screen_shows_error_banner() {
        let mut form = CodeForm::new();
        form.set_input("AB3");
        let screen = render_to_string(&FormView::from_form(&form), None);
        assert!(screen.contains("AB3"));
        assert!(screen.contains("3/12"));
        assert!(screen.contains("Enter exactly 12 characters (current: 3)"));
        assert!(screen.contains("QR code will appear here"));
    }

    #[test]
    fn test_generated_screen_shows_code_and_success() {
        let mut form = CodeForm::new();
        let ticket = form.set_input("T2020000PPPP").unwrap();
        let artifact = QrEncoder::new()
            .render(&ticket.code, &RenderOptions::STANDARD)
            .unwrap();
        form.resolve(&ticket, Ok(artifact));

        let screen = render_to_string(&FormView::from_form(&form), None);
        assert!(screen.contains("12/12"));
        assert!(screen.contains("Code is valid! QR code generated successfully."));
        assert!(screen.contains("When scanned, this QR code will display:"));
        assert!(screen.contains("▀") || screen.contains("▄"));
    }

    #[test]
    fn test_status_bar_rendered_when_visible() {
        let view = FormView::from_form(&CodeForm::new());
        let mut bar = StatusBar::new();
        bar.set_notice("hello there");
        assert!(render_to_string(&view, Some(&bar)).contains("hello there"));

        bar.visible = false;
        assert!(!render_to_string(&view, Some(&bar)).contains("hello there"));
    }
}
