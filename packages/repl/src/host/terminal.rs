//! Terminal host implementation using Reedline.
//!
//! This host provides interactive terminal I/O with:
//! - Readline-style line editing (Vi and Emacs modes)
//! - Verb highlighting
//! - A PowerShell-style prompt that occasionally glitches
//!
//! There is deliberately no history file and no completion menu.

use std::borrow::Cow;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use nu_ansi_term::Color;
use reedline::{
    default_emacs_keybindings, default_vi_insert_keybindings, default_vi_normal_keybindings,
    EditCommand, EditMode as ReedlineEditMode, Emacs, KeyCode, KeyModifiers, Prompt,
    PromptEditMode, PromptHistorySearch, Reedline, ReedlineEvent, Signal as ReedlineSignal, Vi,
};
use tracing::{debug, warn};

use crate::config::{EditMode, ReplConfig};
use crate::glitch::{scramble, GlitchTimer};
use crate::highlighter::ReplHighlighter;
use crate::io::{InputLine, IoError, IoHost, Output, OutputStyle, PromptConfig, Signal};

/// Terminal host using Reedline for interactive I/O.
pub struct TerminalHost {
    line_editor: Reedline,
    pending_input: Option<InputLine>,
    pending_signal: Option<Signal>,
    current_prompt: PromptConfig,
    glitch_flag: Arc<AtomicBool>,
    // Held so the timer thread stops when the host goes away.
    _glitch_timer: Option<GlitchTimer>,
}

impl TerminalHost {
    /// Create a new terminal host.
    pub fn new(config: &ReplConfig) -> io::Result<Self> {
        let highlighter = Box::new(ReplHighlighter::new());

        let edit_mode: Box<dyn ReedlineEditMode> = match config.resolved_edit_mode() {
            EditMode::Vi => Box::new(Vi::new(
                default_vi_insert_keybindings(),
                default_vi_normal_keybindings(),
            )),
            EditMode::Emacs => {
                let mut keybindings = default_emacs_keybindings();
                keybindings.add_binding(
                    KeyModifiers::CONTROL,
                    KeyCode::Char('l'),
                    ReedlineEvent::ClearScreen,
                );
                keybindings.add_binding(
                    KeyModifiers::CONTROL,
                    KeyCode::Char('u'),
                    ReedlineEvent::Edit(vec![EditCommand::Clear]),
                );
                Box::new(Emacs::new(keybindings))
            }
        };
        debug!(edit_mode = ?config.resolved_edit_mode(), "configured line editor");

        let line_editor = Reedline::create()
            .with_highlighter(highlighter)
            .with_edit_mode(edit_mode);

        let glitch_flag = Arc::new(AtomicBool::new(false));
        let glitch_timer = match config.glitch {
            Some(schedule) => match GlitchTimer::spawn(Arc::clone(&glitch_flag), schedule) {
                Ok(timer) => Some(timer),
                Err(e) => {
                    warn!("Glitch timer unavailable: {}", e);
                    None
                }
            },
            None => None,
        };

        Ok(Self {
            line_editor,
            pending_input: None,
            pending_signal: None,
            current_prompt: PromptConfig::default(),
            glitch_flag,
            _glitch_timer: glitch_timer,
        })
    }
}

impl IoHost for TerminalHost {
    fn wait_for_input(&mut self) -> Result<(), IoError> {
        let prompt = TerminalPrompt::new(&self.current_prompt, Arc::clone(&self.glitch_flag));

        match self.line_editor.read_line(&prompt) {
            Ok(ReedlineSignal::Success(line)) => {
                self.pending_input = Some(InputLine { line });
            }
            Ok(ReedlineSignal::CtrlC) => {
                self.pending_signal = Some(Signal::Interrupt);
            }
            Ok(ReedlineSignal::CtrlD) => {
                self.pending_signal = Some(Signal::Eof);
            }
            Err(e) => {
                return Err(IoError::Io(format!("Reedline error: {}", e)));
            }
        }

        Ok(())
    }

    fn read_input(&mut self) -> Result<Option<InputLine>, IoError> {
        Ok(self.pending_input.take())
    }

    fn read_signal(&mut self) -> Result<Option<Signal>, IoError> {
        Ok(self.pending_signal.take())
    }

    fn write_output(&mut self, output: Output) -> Result<(), IoError> {
        let styled = match output.style {
            OutputStyle::Normal => output.text,
            OutputStyle::Error => Color::LightRed.paint(&output.text).to_string(),
            OutputStyle::Info => Color::Cyan.paint(&output.text).to_string(),
            OutputStyle::Banner => Color::Green.bold().paint(&output.text).to_string(),
        };
        println!("{}", styled);
        Ok(())
    }

    fn write_prompt(&mut self, config: PromptConfig) -> Result<(), IoError> {
        self.current_prompt = config;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), IoError> {
        self.line_editor.clear_screen()?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), IoError> {
        io::stdout().flush().map_err(|e| IoError::Io(e.to_string()))
    }
}

/// Prompt implementation for the terminal.
struct TerminalPrompt {
    prompt: String,
    glitch_flag: Arc<AtomicBool>,
}

impl TerminalPrompt {
    fn new(config: &PromptConfig, glitch_flag: Arc<AtomicBool>) -> Self {
        Self {
            prompt: config.prompt.clone(),
            glitch_flag,
        }
    }
}

impl Prompt for TerminalPrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        // One scrambled frame per raised flag; the flag stays up until a redraw
        if self.glitch_flag.swap(false, Ordering::Relaxed) {
            let scrambled = scramble(&self.prompt, &mut rand::thread_rng());
            return Cow::Owned(Color::Magenta.bold().paint(scrambled).to_string());
        }
        Cow::Owned(Color::Green.bold().paint(&self.prompt).to_string())
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_indicator(&self, edit_mode: PromptEditMode) -> Cow<'_, str> {
        match edit_mode {
            PromptEditMode::Vi(reedline::PromptViMode::Normal) => Cow::Borrowed(" [N] "),
            _ => Cow::Borrowed(" "),
        }
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed(">> ")
    }

    fn render_prompt_history_search_indicator(
        &self,
        _history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        Cow::Borrowed("")
    }
}
