use anyhow::{bail, ensure, Context, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

/// Parses a single key mapping: a bare char like `q`, or a diamond like
/// `<ESC>`, `<F5>` or `<C-c>`.
pub fn parse_key(mapping: &str) -> Result<KeyEvent> {
    let inner = mapping
        .strip_prefix('<')
        .and_then(|rest| rest.strip_suffix('>'));

    if let Some(inner) = inner {
        return parse_diamond(inner);
    }

    let mut chars = mapping.chars();
    let ch = chars.next().context("empty mapping")?;

    ensure!(chars.next().is_none(), "expected a single key: {mapping:?}");
    ensure!(is_char_valid(ch), "{ch:?} is not a valid char");

    let modifiers = if ch.is_ascii_uppercase() {
        KeyModifiers::SHIFT
    } else {
        KeyModifiers::NONE
    };

    Ok(KeyEvent::new(KeyCode::Char(ch), modifiers))
}

const fn is_char_valid(ch: char) -> bool {
    // reserve '^' for future
    ch != '^' && ch.is_ascii_graphic()
}

fn parse_diamond(string: &str) -> Result<KeyEvent> {
    let mut chars = string.chars();
    let first_char = chars.next().context("no start")?;

    if first_char.to_ascii_uppercase() == 'F' && string.len() > 1 {
        if let Ok(num) = string[1..].parse() {
            return Ok(KeyEvent::new(KeyCode::F(num), KeyModifiers::empty()));
        }
    }

    if let Some(event) = to_known_special_keyevent(string) {
        return Ok(event);
    }

    let modifier = match first_char.to_ascii_uppercase() {
        'C' => KeyModifiers::CONTROL,
        'M' => KeyModifiers::ALT,
        _ => bail!("Unknown modifier: {first_char}"),
    };

    let next = chars.next();
    ensure!(next == Some('-'), "Expected -, got {next:?}");

    let code = chars
        .next()
        .context("Unexpected end of input between diamond brackets")?;

    ensure!(is_char_valid(code));
    ensure!(chars.next().is_none(), "trailing input");

    Ok(KeyEvent::new(KeyCode::Char(code), modifier))
}

fn to_known_special_keyevent(string: &str) -> Option<KeyEvent> {
    let mut modifiers = KeyModifiers::empty();
    let code = match &*string.to_uppercase() {
        "ESC" => KeyCode::Esc,
        "BS" => KeyCode::Backspace,
        "DEL" => KeyCode::Delete,
        "CR" => KeyCode::Enter,
        "TAB" => KeyCode::Tab,
        "S-TAB" => {
            modifiers = KeyModifiers::SHIFT;
            KeyCode::BackTab
        }
        "LEFT" => KeyCode::Left,
        "DOWN" => KeyCode::Down,
        "UP" => KeyCode::Up,
        "RIGHT" => KeyCode::Right,
        _ => return None,
    };

    Some(KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    })
}
