use bevy::prelude::*;

/// Text shown in the message area of the control column.
///
/// Messages accumulate in `buffer` during a tick and are shown as they
/// arrive. `clear` ends the tick: the buffer empties, and whatever it held
/// stays on screen while the player chooses. A tick that produced nothing
/// shows an empty pane.
#[derive(Resource, Debug, Default)]
pub struct MessagePane {
    buffer: String,
    shown: String,
}

impl MessagePane {
    /// Add one message followed by a line break
    pub fn append(&mut self, text: &str) {
        self.buffer.push_str(text);
        self.buffer.push('\n');
        self.shown.clone_from(&self.buffer);
    }

    /// Start a new tick's log
    pub fn clear(&mut self) {
        if self.buffer.is_empty() {
            self.shown.clear();
        }
        self.buffer.clear();
    }

    /// Visible lines, top to bottom
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.shown.lines()
    }

    #[cfg(test)]
    pub fn text(&self) -> &str {
        &self.shown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_accumulate_on_separate_lines() {
        let mut pane = MessagePane::default();
        pane.append("a");
        pane.append("b");
        pane.append("c");

        assert_eq!(pane.text(), "a\nb\nc\n");
        assert_eq!(pane.lines().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_tick_messages_stay_visible_while_choosing() {
        let mut pane = MessagePane::default();
        pane.append("a");
        pane.append("b");
        pane.append("c");

        // get_selection clears at its start; the player still sees the tick's log
        pane.clear();
        assert_eq!(pane.lines().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_next_tick_starts_empty() {
        let mut pane = MessagePane::default();
        pane.append("a");
        pane.clear();

        // Next tick with no messages
        pane.clear();
        assert_eq!(pane.lines().count(), 0);

        // Next tick's messages do not carry old ones along
        pane.append("d");
        assert_eq!(pane.lines().collect::<Vec<_>>(), vec!["d"]);
    }

    #[test]
    fn test_new_messages_replace_previous_tick() {
        let mut pane = MessagePane::default();
        pane.append("a");
        pane.clear();
        pane.append("b");
        pane.clear();

        assert_eq!(pane.lines().collect::<Vec<_>>(), vec!["b"]);
    }
}
