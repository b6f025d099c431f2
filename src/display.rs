/// Shows the current buffer to the user. Nothing flows back from the
/// display into calculator state.
pub trait DisplaySurface {
    fn set_text(&mut self, text: &str);
}

/// A display that just holds the last text shown
impl DisplaySurface for String {
    fn set_text(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}
