use super::ApiEntry;

/// Login state plus the cached entry list for the signed-in user. Rebuilt
/// wholesale on every auth transition.
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct SessionState {
    pub is_logged_in: bool,
    pub user_email: String,
    pub apis: Vec<ApiEntry>,
}

impl SessionState {
    pub fn logged_in(email: &str, apis: Vec<ApiEntry>) -> SessionState {
        return SessionState {
            is_logged_in: true,
            user_email: email.to_string(),
            apis,
        };
    }

    pub fn logged_out() -> SessionState {
        return SessionState::default();
    }
}

/// Ordered display lines. Only `clear` and auth transitions ever drop lines.
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new(lines: Vec<String>) -> Transcript {
        return Transcript { lines };
    }

    pub fn push(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    pub fn extend<I>(&mut self, lines: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.lines.extend(lines);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[String] {
        return &self.lines;
    }

    pub fn last(&self) -> Option<&String> {
        return self.lines.last();
    }

    pub fn len(&self) -> usize {
        return self.lines.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.lines.is_empty();
    }

    pub fn contains(&self, line: &str) -> bool {
        return self.lines.iter().any(|e| e == line);
    }
}
