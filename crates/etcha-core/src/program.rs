use ropey::Rope;

use crate::command::Command;
use crate::SmartString;

/// Parses one script line. Blank lines and unrecognized words are dropped,
/// never errors; a program runs whatever subset of its lines makes sense.
pub fn parse_line(line: &str) -> Option<Command> {
    let line = line.trim();

    if line.is_empty() {
        return None;
    }

    match line.parse() {
        Ok(cmd) => Some(cmd),
        Err(err) => {
            log::trace!("skipping script line: {err}");
            None
        }
    }
}

/// Parses a whole script into the command sequence it encodes.
pub fn parse(text: &str) -> Vec<Command> {
    text.lines().filter_map(parse_line).collect()
}

/// [`parse`] over a rope, without flattening it into one allocation.
pub fn parse_rope(text: &Rope) -> Vec<Command> {
    let mut line_buf = SmartString::new();

    text.lines()
        .filter_map(|line| {
            line_buf.clear();
            line_buf.extend(line.chunks());
            parse_line(&line_buf)
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn whitespace_and_case_do_not_matter() {
        assert_eq!(parse(" Up\n"), parse("up"));
        assert_eq!(parse("  DOWN  "), vec![Command::Down]);
    }

    #[test]
    fn unknown_and_blank_lines_are_dropped() {
        assert_eq!(
            parse("up\nfly\ndown"),
            vec![Command::Up, Command::Down]
        );
        assert_eq!(parse("up\n\n\nleft\n"), vec![Command::Up, Command::Left]);
        assert_eq!(parse(""), Vec::<Command>::new());
        assert_eq!(parse("\n\n \n"), Vec::<Command>::new());
    }

    #[test]
    fn order_is_preserved() {
        assert_eq!(
            parse("right\nright\ndown"),
            vec![Command::Right, Command::Right, Command::Down]
        );
    }

    #[test]
    fn rope_parse_matches_str_parse() {
        let text = "up\nnope\n RESET \n\nleft";
        let rope = Rope::from_str(text);

        assert_eq!(parse_rope(&rope), parse(text));
        assert_eq!(
            parse_rope(&rope),
            vec![Command::Up, Command::Reset, Command::Left]
        );
    }
}
