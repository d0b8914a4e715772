use std::io::stdout;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{
    self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use learngoal_core::session::BUSY_MESSAGE;
use learngoal_core::{
    AnthropicClient, CompletionError, CompletionResult, GeneratorSession, LlmClient, OutputArea,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Terminal;
use tokio::runtime::Handle;
use tokio::sync::oneshot::{self, error::TryRecvError};

use super::load_config;
use crate::cli::args::TuiArgs;
use crate::exit_codes::SUCCESS;

const TITLE: &str = "Learning Goal and Narrative Generator";
const SUBTITLE: &str =
    "Generate structured learning goals and section narratives from learning targets.";
const INPUT_LABEL: &str = " Enter the learning targets: ";
const OUTPUT_LABEL: &str = " Generated Output ";
const INPUT_HEIGHT: u16 = 8;
const INPUT_MAX_CHARS: usize = 20_000;
const SCROLL_PAGE: u16 = 10;
const SPINNER: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Input,
    Output,
}

#[derive(Debug, PartialEq, Eq)]
enum Action {
    None,
    Submit,
    Quit,
}

struct AppState {
    input: String,
    focus: Focus,
    session: GeneratorSession,
    pending: Option<oneshot::Receiver<CompletionResult<String>>>,
    output_scroll: u16,
    /// Inner area of the output pane as last drawn; bounds scrolling.
    output_view: Rect,
    tick: usize,
}

impl AppState {
    fn new() -> Self {
        Self {
            input: String::new(),
            focus: Focus::Input,
            session: GeneratorSession::new(),
            pending: None,
            output_scroll: 0,
            output_view: Rect::default(),
            tick: 0,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Action {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => return Action::Quit,
            KeyCode::Esc => return Action::Quit,
            KeyCode::Char('s') if ctrl => return Action::Submit,
            KeyCode::F(5) => return Action::Submit,
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Input => Focus::Output,
                    Focus::Output => Focus::Input,
                };
                return Action::None;
            }
            _ => {}
        }

        match self.focus {
            Focus::Input => match key.code {
                KeyCode::Enter => self.push_input('\n'),
                KeyCode::Backspace => {
                    self.input.pop();
                }
                KeyCode::Char(c) if !ctrl && !c.is_control() => self.push_input(c),
                _ => {}
            },
            Focus::Output => match key.code {
                KeyCode::Char('j') | KeyCode::Down => self.scroll(1),
                KeyCode::Char('k') | KeyCode::Up => self.scroll(-1),
                KeyCode::PageDown => self.scroll(SCROLL_PAGE as i32),
                KeyCode::PageUp => self.scroll(-(SCROLL_PAGE as i32)),
                KeyCode::Home => self.output_scroll = 0,
                KeyCode::End => self.output_scroll = self.max_output_scroll(),
                _ => {}
            },
        }
        Action::None
    }

    fn push_input(&mut self, c: char) {
        if self.input.chars().count() < INPUT_MAX_CHARS {
            self.input.push(c);
        }
    }

    /// Pasted text goes to the input verbatim; tabs and newlines included.
    fn paste(&mut self, text: &str) {
        self.focus = Focus::Input;
        let text = text.replace("\r\n", "\n").replace('\r', "\n");
        for c in text.chars() {
            if c == '\n' || c == '\t' || !c.is_control() {
                self.push_input(c);
            }
        }
    }

    /// Wrapped rows of the output that do not fit in the pane.
    fn max_output_scroll(&self) -> u16 {
        let rows = output_paragraph(self).line_count(self.output_view.width);
        u16::try_from(rows)
            .unwrap_or(u16::MAX)
            .saturating_sub(self.output_view.height)
    }

    fn scroll(&mut self, delta: i32) {
        let max = i32::from(self.max_output_scroll());
        let next = (i32::from(self.output_scroll) + delta).clamp(0, max);
        self.output_scroll = u16::try_from(next).unwrap_or(0);
    }

    /// Begin a submission and run the call on the runtime.
    ///
    /// The session refuses blank input and re-entrant submits, so at most
    /// one request is ever in flight.
    fn submit<C>(&mut self, client: &Arc<C>, runtime: &Handle)
    where
        C: LlmClient + 'static,
    {
        let prompt = match self.session.begin(&self.input) {
            Ok(prompt) => prompt,
            Err(rejected) => {
                tracing::debug!(reason = %rejected, "submission rejected");
                return;
            }
        };

        let (tx, rx) = oneshot::channel();
        let client = Arc::clone(client);
        runtime.spawn(async move {
            let result = client.complete(&prompt).await;
            let _ = tx.send(result);
        });
        self.pending = Some(rx);
        self.output_scroll = 0;
    }

    /// Hand a finished call back to the session.
    fn poll_pending(&mut self) {
        let Some(rx) = self.pending.as_mut() else {
            return;
        };
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Closed) => Err(CompletionError::Network {
                message: "generation task ended without a result".to_string(),
            }),
        };
        self.pending = None;
        self.session.finish(result);
        self.output_scroll = 0;
    }
}

pub async fn run(args: TuiArgs) -> Result<i32> {
    if let Some(path) = &args.log_file {
        crate::logging::init_file(path)?;
    }

    let config = match load_config() {
        Ok(config) => config,
        Err(code) => return Ok(code),
    };
    let client = match AnthropicClient::new(&config) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            eprintln!("error: {e}");
            return Ok(e.exit_code());
        }
    };

    let runtime = Handle::current();
    tokio::task::spawn_blocking(move || run_tui(&client, &runtime))
        .await
        .context("terminal task panicked")??;
    Ok(SUCCESS)
}

fn run_tui<C>(client: &Arc<C>, runtime: &Handle) -> Result<()>
where
    C: LlmClient + 'static,
{
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableBracketedPaste)?;

    let mut state = AppState::new();
    let result = run_tui_inner(&mut state, client, runtime);

    // Always restore terminal state, even if the event loop errored.
    let _ = stdout().execute(DisableBracketedPaste);
    let _ = disable_raw_mode();
    let _ = stdout().execute(LeaveAlternateScreen);

    result
}

fn run_tui_inner<C>(state: &mut AppState, client: &Arc<C>, runtime: &Handle) -> Result<()>
where
    C: LlmClient + 'static,
{
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    loop {
        state.poll_pending();
        state.tick = state.tick.wrapping_add(1);
        terminal.draw(|f| draw_ui(f, state))?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    match state.handle_key(key) {
                        Action::Quit => break,
                        Action::Submit => state.submit(client, runtime),
                        Action::None => {}
                    }
                }
                Event::Paste(text) => state.paste(&text),
                _ => {}
            }
        }
    }

    Ok(())
}

fn draw_ui(f: &mut ratatui::Frame<'_>, state: &mut AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),            // Title
            Constraint::Length(2),            // Subtitle
            Constraint::Length(INPUT_HEIGHT), // Input
            Constraint::Length(1),            // Status line
            Constraint::Min(10),              // Output
            Constraint::Length(1),            // Key help
        ])
        .split(f.area());

    let title = Paragraph::new(TITLE).style(Style::default().add_modifier(Modifier::BOLD));
    f.render_widget(title, chunks[0]);
    f.render_widget(
        Paragraph::new(SUBTITLE).style(Style::default().fg(Color::Gray)),
        chunks[1],
    );

    // Input, scrolled so the cursor row stays visible
    let mut input_text = state.input.clone();
    if state.focus == Focus::Input && !state.session.is_busy() {
        input_text.push('▏');
    }
    let input_block = Block::default()
        .title(INPUT_LABEL)
        .borders(Borders::ALL)
        .border_style(focus_style(state.focus == Focus::Input));
    let input_inner = input_block.inner(chunks[2]);
    let input = Paragraph::new(input_text).wrap(Wrap { trim: false });
    let input_rows = u16::try_from(input.line_count(input_inner.width)).unwrap_or(u16::MAX);
    let input = input
        .scroll((input_rows.saturating_sub(input_inner.height), 0))
        .block(input_block);
    f.render_widget(input, chunks[2]);

    // Status line
    f.render_widget(Paragraph::new(status_line(state)), chunks[3]);

    // Output
    let output_block = Block::default()
        .title(OUTPUT_LABEL)
        .borders(Borders::ALL)
        .border_style(focus_style(state.focus == Focus::Output));
    state.output_view = output_block.inner(chunks[4]);
    state.output_scroll = state.output_scroll.min(state.max_output_scroll());
    let output = output_paragraph(state)
        .scroll((state.output_scroll, 0))
        .block(output_block);
    f.render_widget(output, chunks[4]);

    let help = Paragraph::new(
        " Ctrl+S/F5: generate | Tab: switch focus | ↑/↓ PgUp/PgDn Home/End: scroll output | Esc: quit ",
    )
    .style(Style::default().fg(Color::Black).bg(Color::Cyan));
    f.render_widget(help, chunks[5]);
}

fn output_paragraph(state: &AppState) -> Paragraph<'_> {
    Paragraph::new(state.session.display().output().unwrap_or_default()).wrap(Wrap { trim: false })
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

fn status_line(state: &AppState) -> Line<'static> {
    if state.session.is_busy() {
        let frame = SPINNER[state.tick % SPINNER.len()];
        return Line::from(Span::styled(
            format!(" {} {}", frame, BUSY_MESSAGE),
            Style::default().fg(Color::Yellow),
        ));
    }

    let display = state.session.display();
    let color = match display {
        OutputArea::Empty => return Line::from(""),
        OutputArea::Warning(_) => Color::Yellow,
        OutputArea::Generated(_) => Color::Green,
        OutputArea::Failed(_) => Color::Red,
    };
    Line::from(Span::styled(
        format!(" {}", display.status().unwrap_or_default()),
        Style::default().fg(color),
    ))
}
