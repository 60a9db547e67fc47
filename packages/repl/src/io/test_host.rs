//! Test host implementation for in-memory I/O testing.
//!
//! This module provides a test implementation of the `IoHost` trait that uses
//! in-memory buffers instead of a real terminal. This enables testing the shell
//! loop without requiring terminal interaction.

use std::collections::VecDeque;

use super::{InputLine, IoError, IoHost, Output, OutputStyle, PromptConfig, Signal};

/// Test host with in-memory I/O buffers.
///
/// Input lines and signals are queued and consumed in order. Output is
/// buffered for later inspection; `clear()` empties it, like a real screen.
/// The host reports itself closed once both queues are drained.
#[derive(Debug, Default)]
pub struct TestHost {
    /// Queue of input lines to be returned by `read_input()`.
    input_queue: VecDeque<String>,
    /// Queue of signals to be returned by `read_signal()`.
    signal_queue: VecDeque<Signal>,
    /// Buffer of output written since the last clear.
    output_buffer: Vec<Output>,
    /// Every prompt configuration, in order.
    prompts: Vec<PromptConfig>,
    /// Number of times `clear()` was called.
    clear_count: usize,
    /// Number of times `flush()` was called.
    flush_count: usize,
}

impl TestHost {
    /// Create a new empty test host.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an input line to be returned by `read_input()`.
    pub fn queue_input(&mut self, line: impl Into<String>) {
        self.input_queue.push_back(line.into());
    }

    /// Queue multiple input lines.
    pub fn queue_inputs(&mut self, lines: impl IntoIterator<Item = impl Into<String>>) {
        for line in lines {
            self.queue_input(line);
        }
    }

    /// Queue a signal to be returned by `read_signal()`.
    pub fn queue_signal(&mut self, signal: Signal) {
        self.signal_queue.push_back(signal);
    }

    /// Get all output written since the last clear.
    pub fn output(&self) -> &[Output] {
        &self.output_buffer
    }

    /// Get output text only, concatenated.
    pub fn output_text(&self) -> String {
        self.output_buffer
            .iter()
            .map(|o| o.text.as_str())
            .collect::<Vec<_>>()
            .join("")
    }

    /// Get output of a specific style.
    pub fn output_with_style(&self, style: OutputStyle) -> Vec<&str> {
        self.output_buffer
            .iter()
            .filter(|o| o.style == style)
            .map(|o| o.text.as_str())
            .collect()
    }

    /// Get all error output.
    pub fn errors(&self) -> Vec<&str> {
        self.output_with_style(OutputStyle::Error)
    }

    /// Get the last prompt configuration, if any.
    pub fn last_prompt(&self) -> Option<&PromptConfig> {
        self.prompts.last()
    }

    /// Get every prompt configuration written so far.
    pub fn prompts(&self) -> &[PromptConfig] {
        &self.prompts
    }

    /// Get the number of times `clear()` was called.
    pub fn clear_count(&self) -> usize {
        self.clear_count
    }

    /// Get the number of times `flush()` was called.
    pub fn flush_count(&self) -> usize {
        self.flush_count
    }

    /// Check if there are pending inputs.
    pub fn has_pending_input(&self) -> bool {
        !self.input_queue.is_empty()
    }

    /// Check if there are pending signals.
    pub fn has_pending_signal(&self) -> bool {
        !self.signal_queue.is_empty()
    }
}

impl IoHost for TestHost {
    fn wait_for_input(&mut self) -> Result<(), IoError> {
        // In test mode, we don't actually wait - just return immediately.
        // The caller should have queued inputs before calling.
        Ok(())
    }

    fn read_input(&mut self) -> Result<Option<InputLine>, IoError> {
        Ok(self.input_queue.pop_front().map(|line| InputLine { line }))
    }

    fn read_signal(&mut self) -> Result<Option<Signal>, IoError> {
        Ok(self.signal_queue.pop_front())
    }

    fn write_output(&mut self, output: Output) -> Result<(), IoError> {
        self.output_buffer.push(output);
        Ok(())
    }

    fn write_prompt(&mut self, config: PromptConfig) -> Result<(), IoError> {
        self.prompts.push(config);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), IoError> {
        self.output_buffer.clear();
        self.clear_count += 1;
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.has_pending_input() || self.has_pending_signal()
    }

    fn flush(&mut self) -> Result<(), IoError> {
        self.flush_count += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_creates_empty_host() {
        let host = TestHost::new();
        assert!(host.input_queue.is_empty());
        assert!(host.signal_queue.is_empty());
        assert!(host.output_buffer.is_empty());
        assert!(host.last_prompt().is_none());
        assert_eq!(host.flush_count, 0);
        assert!(!host.is_open());
    }

    #[test]
    fn queue_inputs_adds_multiple() {
        let mut host = TestHost::new();
        host.queue_inputs(["ls", "cd ./resume", "ls"]);
        assert_eq!(host.input_queue.len(), 3);
        assert!(host.is_open());
    }

    #[test]
    fn read_input_returns_queued_in_order() {
        let mut host = TestHost::new();
        host.queue_input("first");
        host.queue_input("second");

        let first = host.read_input().unwrap();
        assert_eq!(first.unwrap().line, "first");

        let second = host.read_input().unwrap();
        assert_eq!(second.unwrap().line, "second");

        let third = host.read_input().unwrap();
        assert!(third.is_none());
        assert!(!host.is_open());
    }

    #[test]
    fn read_signal_returns_queued_in_order() {
        let mut host = TestHost::new();
        host.queue_signal(Signal::Interrupt);
        host.queue_signal(Signal::Eof);

        assert!(matches!(host.read_signal().unwrap(), Some(Signal::Interrupt)));
        assert!(matches!(host.read_signal().unwrap(), Some(Signal::Eof)));
        assert!(host.read_signal().unwrap().is_none());
    }

    #[test]
    fn output_with_style_filters() {
        let mut host = TestHost::new();
        host.write_output(Output::normal("normal")).unwrap();
        host.write_output(Output::error("error")).unwrap();
        host.write_output(Output::info("info")).unwrap();

        assert_eq!(host.errors(), vec!["error"]);
        assert_eq!(host.output_with_style(OutputStyle::Info), vec!["info"]);
        assert_eq!(host.output_text(), "normalerrorinfo");
    }

    #[test]
    fn clear_empties_buffer_and_counts() {
        let mut host = TestHost::new();
        host.write_output(Output::normal("text")).unwrap();

        host.clear().unwrap();

        assert!(host.output().is_empty());
        assert_eq!(host.clear_count(), 1);
    }

    #[test]
    fn write_prompt_records_history() {
        let mut host = TestHost::new();
        host.write_prompt(PromptConfig {
            prompt: "PS C:\\Terminal>".to_string(),
            current_path: String::new(),
        })
        .unwrap();
        host.write_prompt(PromptConfig {
            prompt: "PS C:\\Terminal\\resume>".to_string(),
            current_path: "resume".to_string(),
        })
        .unwrap();

        assert_eq!(host.prompts().len(), 2);
        assert_eq!(host.last_prompt().unwrap().current_path, "resume");
    }

    #[test]
    fn flush_increments_counter() {
        let mut host = TestHost::new();
        host.flush().unwrap();
        host.flush().unwrap();
        assert_eq!(host.flush_count(), 2);
    }
}
