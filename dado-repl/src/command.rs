/// One line typed at the prompt
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Command<'a> {
    Empty,
    Help,
    Quit,
    /// Attribute level, rolled when followed by `roll`
    Attribute(i64, bool),
    /// `attr` with something that is not a level
    BadAttribute(&'a str),
    Roll(&'a str),
}

/// Words asking `attr` to also roll the die
const ROLL_WORDS: [&str; 2] = ["roll", "rolar"];

fn parse_attribute(rest: &str) -> Command<'_> {
    let mut words = rest.split_whitespace();
    let level = words.next().and_then(|word| word.parse::<i64>().ok());
    let wants_roll = match words.next() {
        None => Some(false),
        Some(word) if ROLL_WORDS.contains(&word.to_lowercase().as_str()) => Some(true),
        Some(_) => None,
    };
    match (level, wants_roll, words.next()) {
        (Some(level), Some(wants_roll), None) => Command::Attribute(level, wants_roll),
        _ => Command::BadAttribute(rest),
    }
}

impl Command<'_> {
    pub(crate) const KEYWORDS: [&'static str; 4] = ["attr", "help", "quit", "exit"];

    pub(crate) const HELP: &'static str = "\
**dado** *repl*\n\
`NdF+M` roll `N` dice of `F` faces plus `M`, e.g. `2d20+3, 1d6`\n\
`attr <level> [roll]` show the die of an attribute level, `roll` also rolls it\n\
`help` this text\n\
`quit` leave";
}

impl<'a> From<&'a str> for Command<'a> {
    fn from(line: &'a str) -> Self {
        let line = line.trim();
        let (keyword, rest) = line
            .split_once(char::is_whitespace)
            .map(|(k, r)| (k, r.trim()))
            .unwrap_or((line, ""));
        match keyword {
            "" => Command::Empty,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            "attr" => parse_attribute(rest),
            _ => Command::Roll(line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Command;

    #[test]
    fn command_from_line_test() {
        assert_eq!(Command::Empty, Command::from("   "));
        assert_eq!(Command::Help, Command::from("help"));
        assert_eq!(Command::Quit, Command::from(" exit "));
        assert_eq!(Command::Attribute(12, false), Command::from("attr   12"));
        assert_eq!(Command::BadAttribute(""), Command::from("attr"));
        assert_eq!(Command::Roll("2d20 + 3"), Command::from(" 2d20 + 3 "));
    }

    #[test]
    fn attribute_roll_word_test() {
        assert_eq!(Command::Attribute(12, true), Command::from("attr 12 roll"));
        assert_eq!(Command::Attribute(3, true), Command::from("attr 3 ROLAR"));
        assert_eq!(Command::Attribute(-1, false), Command::from("attr -1"));
        assert_eq!(Command::BadAttribute("12 twice"), Command::from("attr 12 twice"));
        assert_eq!(Command::BadAttribute("12 roll now"), Command::from("attr 12 roll now"));
        assert_eq!(Command::BadAttribute("doze"), Command::from("attr doze"));
    }
}
