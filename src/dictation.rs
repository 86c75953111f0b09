// File: src/dictation.rs

/// One recognition result as delivered by a speech engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptSegment {
    pub text: String,
    pub is_final: bool,
}

impl TranscriptSegment {
    pub fn interim(text: &str) -> Self {
        Self { text: text.to_string(), is_final: false }
    }

    pub fn confirmed(text: &str) -> Self {
        Self { text: text.to_string(), is_final: true }
    }
}

/// Accumulates final transcripts across a dictation run. Interim text is
/// shown but never kept.
#[derive(Debug, Clone, Default)]
pub struct Dictation {
    final_transcript: String,
    listening: bool,
}

impl Dictation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a run. Existing input is kept and dictated text is appended
    /// after a space.
    pub fn start(&mut self, current_input: &str) {
        self.final_transcript = if current_input.is_empty() {
            String::new()
        } else {
            format!("{} ", current_input)
        };
        self.listening = true;
    }

    pub fn stop(&mut self) {
        self.listening = false;
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Folds a batch of results in and returns the new input text.
    pub fn on_results(&mut self, segments: &[TranscriptSegment]) -> String {
        let mut interim = String::new();
        for segment in segments {
            if segment.is_final {
                self.final_transcript.push_str(&segment.text);
            } else {
                interim.push_str(&segment.text);
            }
        }
        format!("{}{}", self.final_transcript, interim).trim_start().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finals_accumulate_and_interims_do_not() {
        let mut d = Dictation::new();
        d.start("");
        assert_eq!(d.on_results(&[TranscriptSegment::interim("hel")]), "hel");
        assert_eq!(d.on_results(&[TranscriptSegment::confirmed("hello")]), "hello");
        assert_eq!(
            d.on_results(&[TranscriptSegment::confirmed(" world"), TranscriptSegment::interim(" aga")]),
            "hello world aga"
        );
        assert_eq!(d.on_results(&[]), "hello world");
    }

    #[test]
    fn existing_input_is_seeded_with_a_space() {
        let mut d = Dictation::new();
        d.start("Hi");
        assert!(d.is_listening());
        assert_eq!(d.on_results(&[TranscriptSegment::confirmed("there")]), "Hi there");
        d.stop();
        assert!(!d.is_listening());
    }

    #[test]
    fn leading_whitespace_is_trimmed() {
        let mut d = Dictation::new();
        d.start("");
        assert_eq!(d.on_results(&[TranscriptSegment::confirmed("  spaced")]), "spaced");
    }

    #[test]
    fn restarting_discards_the_previous_run() {
        let mut d = Dictation::new();
        d.start("");
        d.on_results(&[TranscriptSegment::confirmed("old")]);
        d.start("");
        assert_eq!(d.on_results(&[TranscriptSegment::interim("new")]), "new");
    }
}
