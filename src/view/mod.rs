//! Terminal host for the virtual list (impure shell)
//!
//! Owns the terminal, the list engine and the item data. Every scroll input
//! goes straight to the engine's scroll handler and is followed by a redraw,
//! so the painted window never lags the scroll position. In dynamic mode each
//! draw measures the wrapped height of every realized paragraph and settles
//! the layout before anything reaches the screen.

mod list_view;
pub mod lorem;
pub mod paragraph;

pub use list_view::VirtualListView;
pub use paragraph::{ParagraphRenderer, wrap};

use crate::config::{ConfigError, KeyAction, KeyBindings, ListMode, ResolvedConfig};
use crate::window::render::MAX_SETTLE_PASSES;
use crate::window::{
    DynamicSizeList, FixedSizeList, Frame, ListConfig, MeasuredSizes, Overscan, ScrollPosition,
    VirtualList, render_frame,
};
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Layout},
    style::{Modifier, Style},
    widgets::Paragraph,
};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// The resolved configuration can't drive a list
    #[error("Invalid list configuration: {0}")]
    Config(#[from] ConfigError),
}

/// The list engine behind the view, chosen by [`ListMode`].
#[derive(Debug)]
pub enum ListEngine {
    /// Every item is the same height.
    Fixed(FixedSizeList),
    /// Items start from an estimate and are corrected by measurement.
    Dynamic(DynamicSizeList),
}

impl ListEngine {
    /// Build the engine described by `config` for a viewport of `container_height` rows.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the relevant height is not positive.
    pub fn from_config(config: &ResolvedConfig, container_height: f64) -> Result<Self, ConfigError> {
        let list_config = ListConfig::new(container_height, config.item_count)
            .with_overscan(Overscan::new(config.overscan));

        Ok(match config.mode {
            ListMode::Fixed => Self::Fixed(FixedSizeList::new(list_config, config.item_height()?)),
            ListMode::Dynamic => Self::Dynamic(DynamicSizeList::new(
                list_config,
                MeasuredSizes::new(config.item_count, config.estimated_height()?),
            )),
        })
    }

    /// Which kind of engine this is.
    pub fn mode(&self) -> ListMode {
        match self {
            Self::Fixed(_) => ListMode::Fixed,
            Self::Dynamic(_) => ListMode::Dynamic,
        }
    }

    /// The engine as a [`VirtualList`].
    pub fn list(&self) -> &dyn VirtualList {
        match self {
            Self::Fixed(list) => list,
            Self::Dynamic(list) => list,
        }
    }

    /// The engine as a mutable [`VirtualList`].
    pub fn list_mut(&mut self) -> &mut dyn VirtualList {
        match self {
            Self::Fixed(list) => list,
            Self::Dynamic(list) => list,
        }
    }

    /// Drop every measured height and rebuild positions from estimates.
    pub fn forget_heights(&mut self) {
        match self {
            Self::Fixed(list) => list.reset_heights(),
            Self::Dynamic(list) => {
                list.sizes_mut().clear_measurements();
                list.reset_heights();
            }
        }
    }

    /// Paragraph renderer matching this engine: measuring for dynamic
    /// heights, clipping for fixed ones.
    pub fn renderer(&self, width: usize) -> ParagraphRenderer {
        match self {
            Self::Fixed(_) => ParagraphRenderer::clipping(width),
            Self::Dynamic(_) => ParagraphRenderer::measuring(width),
        }
    }
}

/// Rows available to the list: everything but the status line.
fn list_rows(terminal_height: u16) -> f64 {
    f64::from(terminal_height.saturating_sub(1))
}

/// Columns available to text: everything but the scrollbar.
fn text_columns(terminal_width: u16) -> usize {
    usize::from(terminal_width.saturating_sub(1).max(1))
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    engine: ListEngine,
    items: Vec<String>,
    renderer: ParagraphRenderer,
    position: ScrollPosition,
    scroll_step: f64,
    key_bindings: KeyBindings,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(config: &ResolvedConfig, items: Vec<String>) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(crossterm::event::EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Self::with_terminal(terminal, config, items)
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits. Redraws only in response to input.
    pub fn run(&mut self) -> Result<(), TuiError> {
        const POLL_INTERVAL: Duration = Duration::from_millis(250);

        self.draw()?;

        loop {
            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                    self.draw()?;
                }
                Event::Mouse(mouse) => {
                    if self.handle_mouse(mouse) {
                        self.draw()?;
                    }
                }
                Event::Resize(width, height) => {
                    self.handle_resize(width, height);
                    self.draw()?;
                }
                _ => {}
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: Backend,
{
    /// Create an app drawing into an already set-up terminal.
    ///
    /// # Errors
    ///
    /// Fails if `config` doesn't validate or the terminal size can't be read.
    pub fn with_terminal(
        terminal: Terminal<B>,
        config: &ResolvedConfig,
        items: Vec<String>,
    ) -> Result<Self, TuiError> {
        config.validate()?;
        let size = terminal.size()?;
        let engine = ListEngine::from_config(config, list_rows(size.height))?;
        let renderer = engine.renderer(text_columns(size.width));

        Ok(Self {
            terminal,
            engine,
            items,
            renderer,
            position: ScrollPosition::Top,
            scroll_step: config.scroll_step,
            key_bindings: KeyBindings::default(),
        })
    }

    /// The list engine.
    pub fn engine(&self) -> &ListEngine {
        &self.engine
    }

    /// Where the viewport is meant to be.
    pub fn position(&self) -> ScrollPosition {
        self.position
    }

    /// The terminal, for inspecting what was drawn.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Handle a single keyboard event
    ///
    /// Scrolling takes effect on the engine before this returns. Returns true
    /// if the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, even if not in bindings
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        let page = self.engine.list().config().container_height.max(1.0);
        match action {
            KeyAction::Quit => return true,
            KeyAction::ScrollDown => self.scroll_by(self.scroll_step),
            KeyAction::ScrollUp => self.scroll_by(-self.scroll_step),
            KeyAction::PageDown => self.scroll_by(page),
            KeyAction::PageUp => self.scroll_by(-page),
            KeyAction::ScrollToTop => self.scroll_to(ScrollPosition::Top),
            KeyAction::ScrollToBottom => self.scroll_to(ScrollPosition::Bottom),
            KeyAction::ResetHeights => {
                self.engine.forget_heights();
                self.sync_scroll();
            }
        }
        false
    }

    /// Handle a mouse event. Returns true if it changed anything.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        match mouse.kind {
            MouseEventKind::ScrollDown => self.scroll_by(self.scroll_step),
            MouseEventKind::ScrollUp => self.scroll_by(-self.scroll_step),
            _ => return false,
        }
        true
    }

    /// Handle a terminal resize event
    ///
    /// A new width rewraps every paragraph, so measured heights are dropped.
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        debug!("Handling resize to {}x{}", width, height);
        self.engine.list_mut().set_container_height(list_rows(height));
        if self.renderer.set_width(text_columns(width)) {
            self.engine.forget_heights();
        }
        self.sync_scroll();
    }

    /// Render the current frame
    ///
    /// Measurements taken while rendering can change the content height, so
    /// the scroll position is re-clamped and the frame re-rendered until both
    /// agree.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let mut frame = render_frame(self.engine.list_mut(), &mut self.renderer, self.items.as_slice());
        for _ in 0..MAX_SETTLE_PASSES {
            if !self.sync_scroll() {
                break;
            }
            frame = render_frame(self.engine.list_mut(), &mut self.renderer, self.items.as_slice());
        }

        let list = self.engine.list();
        let scroll_offset = list.scroll_offset();
        let content_height = list.content_height();
        let status = self.status_line(&frame);

        self.terminal.draw(|f| {
            let [list_area, status_area] =
                Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(f.area());
            f.render_widget(VirtualListView::new(&frame, scroll_offset, content_height), list_area);
            f.render_widget(
                Paragraph::new(status).style(Style::default().add_modifier(Modifier::REVERSED)),
                status_area,
            );
        })?;

        Ok(())
    }

    fn status_line(&self, frame: &Frame<Vec<String>>) -> String {
        let list = self.engine.list();
        let mode = match self.engine.mode() {
            ListMode::Fixed => "fixed",
            ListMode::Dynamic => "dynamic",
        };
        let count = list.config().item_count;
        let range = match (list.window().unpadded.first(), list.window().unpadded.last()) {
            (Some(first), Some(last)) => format!("items {}-{} of {}", first.get(), last.get(), count),
            _ => "no items".to_string(),
        };
        format!(
            " {} | {} | offset {:.0}/{:.0} | passes {}",
            mode,
            range,
            list.scroll_offset(),
            list.content_height(),
            frame.passes
        )
    }

    fn scroll_by(&mut self, delta: f64) {
        let list = self.engine.list();
        self.position = self.position.scrolled_by(
            delta,
            list.content_height(),
            list.config().container_height,
            |index| list.item_top(index),
        );
        self.sync_scroll();
    }

    fn scroll_to(&mut self, position: ScrollPosition) {
        self.position = position;
        self.sync_scroll();
    }

    /// Push the resolved position into the engine. Returns true if the
    /// offset moved.
    fn sync_scroll(&mut self) -> bool {
        let list = self.engine.list_mut();
        let offset = self.position.resolve(
            list.content_height(),
            list.config().container_height,
            |index| list.item_top(index),
        );
        if let ScrollPosition::AtOffset(_) = self.position {
            self.position = ScrollPosition::AtOffset(offset);
        }
        if offset == list.scroll_offset() {
            return false;
        }
        list.on_scroll(offset);
        true
    }
}

/// Initialize and run the TUI application with generated paragraphs
///
/// Handles terminal setup, runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_config(config: &ResolvedConfig) -> Result<(), TuiError> {
    let items = lorem::paragraphs(config.item_count, lorem::DEFAULT_SEED);
    info!(items = items.len(), mode = ?config.mode, "starting list view");

    let mut app = match TuiApp::new(config, items) {
        Ok(app) => app,
        Err(err) => {
            restore_terminal()?;
            return Err(err);
        }
    };

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
