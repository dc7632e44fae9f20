/// Rendering for the token field.
///
/// [`TokenField`] is a pure function of the view configuration, the
/// committed items, and the widget state: it draws one removable token
/// per item followed by an auto-growing text entry, and returns a
/// [`ViewLayout`] recording where everything landed so the host can
/// translate raw input coordinates back into widget events.
use crate::event::Event;
use crate::state::State;
use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Glyph used for the per-token delete affordance.
const DELETE_MARK: &str = "×";

/// Style hooks for the token field.
#[derive(Debug, Clone)]
pub struct TokenStyles {
    /// Tokens whose value passes the validity check.
    pub valid: Style,
    /// Tokens whose value fails the validity check.
    pub invalid: Style,
    /// The delete affordance at the end of each token.
    pub delete: Style,
    /// The text entry while it holds pending text.
    pub entry: Style,
    /// The text entry while it shows the placeholder.
    pub placeholder: Style,
}

impl Default for TokenStyles {
    fn default() -> Self {
        Self {
            valid: Style::default().fg(Color::Black).bg(Color::Cyan),
            invalid: Style::default().fg(Color::White).bg(Color::Red),
            delete: Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD),
            entry: Style::default(),
            placeholder: Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        }
    }
}

/// Per-render view configuration. Supplied fresh on every draw and not
/// persisted anywhere.
pub struct ViewConfig<'a> {
    /// Text shown in the entry while no pending text exists.
    pub placeholder: &'a str,
    /// Validity check deciding each token's visual flag.
    pub is_valid: &'a dyn Fn(&str) -> bool,
    pub styles: TokenStyles,
}

/// The token field widget.
pub struct TokenField<'a> {
    config: &'a ViewConfig<'a>,
    items: &'a [String],
    state: &'a State,
}

impl<'a> TokenField<'a> {
    pub fn new(config: &'a ViewConfig<'a>, items: &'a [String], state: &'a State) -> Self {
        Self {
            config,
            items,
            state,
        }
    }

    /// Render the widget into the given area and return the hit-testing
    /// surface for this frame.
    pub fn render(&self, frame: &mut Frame, area: Rect) -> ViewLayout {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let layout = self.layout(area, inner);

        for region in &layout.tokens {
            let style = if (self.config.is_valid)(&region.value) {
                self.config.styles.valid
            } else {
                self.config.styles.invalid
            };
            let token = Line::from(vec![
                Span::styled(format!(" {} ", region.value), style),
                Span::styled(DELETE_MARK, self.config.styles.delete),
            ]);
            frame.render_widget(Paragraph::new(token), region.rect);
        }

        if layout.entry.width > 0 {
            let (text, style) = self.entry_text();
            frame.render_widget(
                Paragraph::new(Span::styled(text, style)),
                layout.entry,
            );
        }

        layout
    }

    /// Lay out tokens left to right, wrapping within the inner area, and
    /// place the entry after the last token.
    ///
    /// The entry grows to fit whatever it will display, pending text or
    /// placeholder, measured with the same metrics used to render it.
    /// That is the terminal analogue of mirroring the input text into a
    /// hidden measurement element.
    fn layout(&self, container: Rect, inner: Rect) -> ViewLayout {
        let mut layout = ViewLayout {
            container,
            tokens: Vec::with_capacity(self.items.len()),
            entry: Rect::new(inner.x, inner.y, 0, 0),
        };
        if inner.width == 0 || inner.height == 0 {
            return layout;
        }

        let mut x = inner.x;
        let mut y = inner.y;

        for item in self.items {
            // Leading pad + text + trailing pad + delete glyph.
            let full_width = display_width(item).saturating_add(3);
            let width = full_width.min(inner.width);
            if x + width > inner.right() && x > inner.x {
                x = inner.x;
                y += 1;
            }
            if y >= inner.bottom() {
                // Out of vertical room; remaining tokens are clipped.
                return layout;
            }

            let rect = Rect::new(x, y, width, 1);
            // A horizontally truncated token loses its delete glyph, so
            // it gets no delete hit-cell either.
            let delete = (width == full_width).then(|| Rect::new(rect.right() - 1, y, 1, 1));
            layout.tokens.push(TokenRegion {
                value: item.clone(),
                rect,
                delete,
            });
            x = rect.right() + 1;
        }

        let (entry_text, _) = self.entry_text();
        let entry_width = display_width(entry_text).saturating_add(1).clamp(1, inner.width);
        if x + entry_width > inner.right() && x > inner.x {
            x = inner.x;
            y += 1;
        }
        if y < inner.bottom() {
            layout.entry = Rect::new(x, y, entry_width.min(inner.right() - x), 1);
        }

        layout
    }

    fn entry_text(&self) -> (&str, Style) {
        if self.state.pending_text.is_empty() {
            (self.config.placeholder, self.config.styles.placeholder)
        } else {
            (self.state.pending_text.as_str(), self.config.styles.entry)
        }
    }
}

fn display_width(text: &str) -> u16 {
    u16::try_from(Line::from(text).width()).unwrap_or(u16::MAX)
}

/// Geometry recorded while rendering one frame.
///
/// Translates raw input coordinates into widget events: the delete
/// affordance of a token raises [`Event::RemoveItem`], and a click
/// anywhere else inside the container, tokens included but the text
/// entry excluded, raises [`Event::RequestFocus`] so clicking the
/// widget returns focus to the entry. Clicks on the entry itself are
/// the entry's own business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewLayout {
    container: Rect,
    tokens: Vec<TokenRegion>,
    entry: Rect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct TokenRegion {
    value: String,
    rect: Rect,
    delete: Option<Rect>,
}

impl ViewLayout {
    /// Map a click position to a widget event.
    pub fn event_at(&self, column: u16, row: u16) -> Option<Event> {
        for token in &self.tokens {
            if let Some(delete) = token.delete {
                if contains(delete, column, row) {
                    return Some(Event::RemoveItem(token.value.clone()));
                }
            }
        }

        if contains(self.entry, column, row) {
            return None;
        }

        if contains(self.container, column, row) {
            return Some(Event::RequestFocus);
        }

        None
    }

    /// Map a click position to a host message through the supplied
    /// event mapper.
    pub fn map_at<M>(&self, column: u16, row: u16, mapper: impl Fn(Event) -> M) -> Option<M> {
        self.event_at(column, row).map(mapper)
    }

    /// Classify a key that went down while the entry was focused, so
    /// the host feeds pointer, key, and blur input through one surface.
    pub fn event_for_key(&self, code: KeyCode) -> Event {
        Event::from_key(code)
    }

    /// Event for the text entry losing focus with the given contents.
    pub fn blur_event(&self, text: impl Into<String>) -> Event {
        Event::Blurred(text.into())
    }

    /// Area of the auto-growing text entry in this frame.
    pub fn entry_area(&self) -> Rect {
        self.entry
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height
}
