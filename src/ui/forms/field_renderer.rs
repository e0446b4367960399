//! Field rendering utilities for forms

use crate::state::{FieldKind, FormField};
use crate::validation::ValidationPattern;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows taken by a field's inline error message
pub const ERROR_LINE_HEIGHT: u16 = 1;

/// Box height for a field, without its error line
pub fn field_height(field: &FormField) -> u16 {
    if field.is_multiline() {
        5
    } else {
        3
    }
}

/// Horizontal offset for a shaking field at this redraw
pub fn shake_offset(field: &FormField, frame_no: usize) -> u16 {
    match field.annotation.as_ref() {
        Some(annotation) if annotation.shaking => [0, 2, 0, 1][frame_no % 4],
        _ => 0,
    }
}

/// Draw a form field using FormField from the domain layer
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let border_style = if field.has_error_class() {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let value = field.value();
    let display_str = if value.is_empty() && !is_active {
        "(empty)"
    } else {
        value
    };
    let value_style = if value.is_empty() {
        Style::default().fg(Color::DarkGray)
    } else {
        style
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = if field.is_multiline() {
        let mut lines: Vec<Line> = display_str
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), value_style)))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_str, value_style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let required = if field.required { " *" } else { "" };
    let invalid = field.aria_invalid().map_or("", |_| " !");
    let mut block = Block::default()
        .title(format!(" {}{}{} ", field.label, required, invalid))
        .borders(Borders::ALL)
        .border_style(border_style);
    if let Some(hint) = field_hint(field) {
        block = block.title_bottom(hint);
    }

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Bottom-border hint: the phone shape check or the bookable date range
fn field_hint(field: &FormField) -> Option<Line<'static>> {
    match field.kind {
        FieldKind::Tel if !field.value().is_empty() => {
            let hint = if ValidationPattern::AustralianPhone.matches(field.value()) {
                Span::styled(" ✓ looks valid ", Style::default().fg(Color::Green))
            } else {
                Span::styled(" 04XX XXX XXX ", Style::default().fg(Color::DarkGray))
            };
            Some(Line::from(hint).right_aligned())
        }
        FieldKind::Date => field.range_hint.map(|(min, max)| {
            Line::from(Span::styled(
                format!(" {} .. {} ", min.format("%Y-%m-%d"), max.format("%Y-%m-%d")),
                Style::default().fg(Color::DarkGray),
            ))
            .right_aligned()
        }),
        _ => None,
    }
}

/// Draw the alert line under an invalid field
pub fn draw_error_line(frame: &mut Frame, area: Rect, message: &str) {
    let line = Line::from(Span::styled(
        format!(" ⚠ {message}"),
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

/// Draw help text at the bottom of a form
pub fn draw_help_text(frame: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ErrorAnnotation, FieldSpec};

    fn phone() -> FormField {
        FormField::from_spec(&FieldSpec::new("phone", "Phone", FieldKind::Tel, true))
    }

    #[test]
    fn test_shake_offset_only_while_shaking() {
        let mut field = phone();
        assert_eq!(shake_offset(&field, 1), 0);

        field.annotation = Some(ErrorAnnotation {
            message: "bad".to_string(),
            shaking: true,
            shake_timer: None,
        });
        assert_eq!(shake_offset(&field, 1), 2);

        field.annotation.as_mut().unwrap().shaking = false;
        assert_eq!(shake_offset(&field, 1), 0);
    }

    #[test]
    fn test_phone_hint_follows_pattern() {
        let mut field = phone();
        assert!(field_hint(&field).is_none());
        field.set_value("0412 345 678");
        let hint = field_hint(&field).unwrap();
        assert!(hint.to_string().contains("looks valid"));
        field.set_value("0412");
        assert!(!field_hint(&field).unwrap().to_string().contains("looks valid"));
    }

    #[test]
    fn test_field_heights() {
        let notes = FormField::from_spec(&FieldSpec::new(
            "notes",
            "Notes",
            FieldKind::TextArea,
            false,
        ));
        assert_eq!(field_height(&phone()), 3);
        assert_eq!(field_height(&notes), 5);
    }
}
