#[cfg(test)]
#[path = "command_test.rs"]
mod tests;

use std::str::FromStr;

use strum_macros::Display;
use strum_macros::EnumIter;
use strum_macros::EnumString;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Verb {
    Start,
    Clear,
    AddApi,
    RemoveApi,
    ListApis,
    Google,
    Logout,
}

impl Verb {
    pub fn takes_argument(&self) -> bool {
        return matches!(self, Verb::AddApi | Verb::RemoveApi);
    }
}

/// A parsed input line. Verbs are case-insensitive, arguments are kept as typed
/// and separated from the verb by a space.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    Clear,
    AddApi(String),
    RemoveApi(String),
    ListApis,
    Google,
    Logout,
    Unknown,
}

impl Command {
    pub fn parse(input: &str) -> Command {
        let line = input.trim();
        let (head, rest) = match line.split_once(' ') {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };

        let verb = match Verb::from_str(head) {
            Ok(verb) => verb,
            Err(_) => return Command::Unknown,
        };

        if !verb.takes_argument() && !rest.is_empty() {
            return Command::Unknown;
        }

        return match verb {
            Verb::Start => Command::Start,
            Verb::Clear => Command::Clear,
            Verb::AddApi => Command::AddApi(rest.to_string()),
            Verb::RemoveApi => Command::RemoveApi(rest.to_string()),
            Verb::ListApis => Command::ListApis,
            Verb::Google => Command::Google,
            Verb::Logout => Command::Logout,
        };
    }

    pub fn verb(&self) -> Option<Verb> {
        return match self {
            Command::Start => Some(Verb::Start),
            Command::Clear => Some(Verb::Clear),
            Command::AddApi(_) => Some(Verb::AddApi),
            Command::RemoveApi(_) => Some(Verb::RemoveApi),
            Command::ListApis => Some(Verb::ListApis),
            Command::Google => Some(Verb::Google),
            Command::Logout => Some(Verb::Logout),
            Command::Unknown => None,
        };
    }
}

/// Parses an entry id the way a lenient integer reader would: optional sign,
/// then the leading run of digits. Trailing garbage is ignored.
pub fn parse_entry_id(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let mut end = 0;
    for (idx, c) in text.char_indices() {
        if c.is_ascii_digit() || (idx == 0 && (c == '-' || c == '+')) {
            end = idx + c.len_utf8();
        } else {
            break;
        }
    }

    return text[..end].parse::<i64>().ok();
}
