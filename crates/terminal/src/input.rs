use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use vtop_core::Message;

/// Map a raw terminal event to a dashboard message.  Events the dashboard
/// does not care about map to `None`.
pub fn translate(event: &Event) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Message::Quit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Message::Quit)
            }
            _ => None,
        },
        Event::Resize(width, height) => Some(Message::Resize {
            width:  *width,
            height: *height,
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn quit_keys() {
        assert_eq!(translate(&key(KeyCode::Char('q'), KeyModifiers::NONE)), Some(Message::Quit));
        assert_eq!(translate(&key(KeyCode::Esc, KeyModifiers::NONE)), Some(Message::Quit));
        assert_eq!(translate(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)), Some(Message::Quit));
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(translate(&key(KeyCode::Char('c'), KeyModifiers::NONE)), None);
        assert_eq!(translate(&key(KeyCode::Enter, KeyModifiers::NONE)), None);
        assert_eq!(translate(&Event::FocusGained), None);
    }

    #[test]
    fn resize_carries_new_size() {
        assert_eq!(
            translate(&Event::Resize(120, 40)),
            Some(Message::Resize { width: 120, height: 40 })
        );
    }
}
