//! Interactive recipe browser.
//!
//! [`TuiRenderer::run`] owns the terminal and the event loop; all state
//! lives in [`BrowseApp`], which can be driven without a terminal.

mod app;
mod measure;
mod ui;

pub use app::{BrowseApp, BrowseDeps, Focus};
pub use measure::{CardItem, TextMeasure};

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

const TICK: Duration = Duration::from_millis(100);

type Term = Terminal<CrosstermBackend<io::Stdout>>;

pub struct TuiRenderer;

impl TuiRenderer {
    /// Run the browser until the user quits
    pub fn run(mut app: BrowseApp) -> Result<()> {
        let mut terminal = Self::setup()?;

        let size = terminal.size()?;
        let (width, height) = ui::recipes_viewport(Rect::new(0, 0, size.width, size.height));
        app.set_viewport(width, height);

        let result = Self::event_loop(&mut terminal, &mut app);
        Self::restore(&mut terminal)?;
        result
    }

    /// Full-screen error for failures before the browser exists; waits for
    /// a key press
    pub fn show_error(message: &str) -> Result<()> {
        let mut terminal = Self::setup()?;

        let result = (|| -> Result<()> {
            terminal.draw(|f| {
                let text = vec![
                    Line::from(Span::styled(message, Style::default().fg(Color::Red))),
                    Line::default(),
                    Line::from("Press any key to exit."),
                ];
                let error = Paragraph::new(text)
                    .wrap(Wrap { trim: false })
                    .block(Block::default().title("Error").borders(Borders::ALL));
                f.render_widget(error, f.area());
            })?;

            loop {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        return Ok(());
                    }
                }
            }
        })();

        Self::restore(&mut terminal)?;
        result
    }

    fn setup() -> Result<Term> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        if let Err(e) = ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            std::process::exit(0);
        }) {
            tracing::debug!("ctrl-c handler not installed: {}", e);
        }

        Ok(terminal)
    }

    fn restore(terminal: &mut Term) -> Result<()> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn event_loop(terminal: &mut Term, app: &mut BrowseApp) -> Result<()> {
        loop {
            app.tick();
            terminal.draw(|f| ui::draw(f, app))?;

            if event::poll(TICK)? {
                if let Event::Key(key) = event::read()? {
                    app.handle_key(key);
                }
            }

            if app.should_quit() {
                break;
            }
        }

        Ok(())
    }
}
