/// Pending command line being typed at the prompt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputBuffer {
    text: String,
}

impl InputBuffer {
    pub fn push(&mut self, c: char) {
        self.text.push(c);
    }

    pub fn paste(&mut self, text: &str) {
        self.text.push_str(text);
    }

    pub fn backspace(&mut self) {
        self.text.pop();
    }

    /// Hands back the typed line and resets the buffer.
    pub fn take(&mut self) -> String {
        return std::mem::take(&mut self.text);
    }

    pub fn as_str(&self) -> &str {
        return &self.text;
    }
}
