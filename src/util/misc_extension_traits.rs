pub trait PopChar {
    fn pop_char(&mut self) -> Option<char>;
}

impl PopChar for &str {
    /// Pops the first char from the string and returns it. returns None if the string is empty.
    fn pop_char(&mut self) -> Option<char> {
        let top = self.chars().next()?;
        *self = &self[top.len_utf8()..];
        Some(top)
    }
}
