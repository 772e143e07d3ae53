//! Interaction script parsing.
//!
//! One command per line; `#` starts a comment.
//!
//! ```text
//! front tile-a     # click: bring to front
//! remove tile-b    # tile discarded
//! rank tile-a
//! key tile-z
//! list             # front to back
//! paint            # back to front
//! count
//! reset
//! ```

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Front(String),
    Remove(String),
    Rank(String),
    Key(String),
    List,
    Paint,
    Count,
    Reset,
}

/// A script line that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptError {
    pub message: String,
    /// 1-based line number.
    pub line: usize,
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "script error on line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for ScriptError {}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let verb = words.next().ok_or_else(|| "empty command".to_owned())?;
        let arg = words.next();
        if let Some(extra) = words.next() {
            return Err(format!("unexpected `{extra}` after `{verb}`"));
        }

        let id = || arg.map(str::to_owned).ok_or_else(|| format!("`{verb}` needs an id"));
        let bare = |cmd: Command| match arg {
            None => Ok(cmd),
            Some(a) => Err(format!("`{verb}` takes no argument, got `{a}`")),
        };

        match verb {
            "front" => Ok(Command::Front(id()?)),
            "remove" => Ok(Command::Remove(id()?)),
            "rank" => Ok(Command::Rank(id()?)),
            "key" => Ok(Command::Key(id()?)),
            "list" => bare(Command::List),
            "paint" => bare(Command::Paint),
            "count" => bare(Command::Count),
            "reset" => bare(Command::Reset),
            other => Err(format!("unknown command `{other}`")),
        }
    }
}

/// Parses a whole script, skipping blank lines and comments.
pub fn parse_script(src: &str) -> Result<Vec<Command>, ScriptError> {
    let mut out = Vec::new();
    for (i, raw) in src.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        let cmd = line
            .parse()
            .map_err(|message| ScriptError { message, line: i + 1 })?;
        out.push(cmd);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_command() {
        let src = "front a\nremove b\nrank a\nkey z\nlist\npaint\ncount\nreset\n";
        assert_eq!(
            parse_script(src).unwrap(),
            vec![
                Command::Front("a".into()),
                Command::Remove("b".into()),
                Command::Rank("a".into()),
                Command::Key("z".into()),
                Command::List,
                Command::Paint,
                Command::Count,
                Command::Reset,
            ]
        );
    }

    #[test]
    fn skips_comments_and_blanks() {
        let src = "# header\n\n  front a   # click\n   \n";
        assert_eq!(parse_script(src).unwrap(), vec![Command::Front("a".into())]);
    }

    #[test]
    fn reports_line_of_unknown_command() {
        let err = parse_script("front a\nfly b\n").unwrap_err();
        assert_eq!(err.line, 2);
        assert_eq!(err.message, "unknown command `fly`");
    }

    #[test]
    fn missing_id() {
        let err = parse_script("front").unwrap_err();
        assert_eq!(err.message, "`front` needs an id");
    }

    #[test]
    fn extra_argument() {
        assert!(parse_script("list now").is_err());
        assert!(parse_script("front a b").is_err());
    }
}
