//! Page composition: where every component goes, and how the page is drawn
//! into the scrolling viewport.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Widget;
use tui_scrollview::{ScrollView, ScrollbarVisibility};

use crate::core::content::{CORE_CONCEPTS, ExampleKey};
use crate::core::state::{App, Selection};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    ConceptCard, ExamplePanel, Header, StatusBar, TabButton, TabMenu, TabMenuState,
};

/// Narrowest a card may get before the grid drops a column.
const MIN_CARD_WIDTH: u16 = 28;
const MAX_CARD_COLUMNS: u16 = 4;
/// Blank rows between sections.
const SECTION_GAP: u16 = 1;

pub const CONCEPTS_HEADING: &str = "Core Concepts";
pub const EXAMPLES_HEADING: &str = "Examples";

/// Positions of every part of the page in content coordinates
/// (origin at the top-left of the page, not of the screen).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    pub header: Rect,
    pub concepts_heading: Rect,
    /// One rect per entry of `CORE_CONCEPTS`, same order.
    pub cards: Vec<Rect>,
    pub examples_heading: Rect,
    pub menu: Rect,
    pub panel: Rect,
    pub total_height: u16,
}

impl PageLayout {
    pub fn compute(width: u16, selection: Selection) -> Self {
        let mut y = 0;
        let mut take = |height: u16, gap_after: u16| {
            let rect = Rect::new(0, y, width, height);
            y += height + gap_after;
            rect
        };

        let header = take(Header::calculate_height(width), SECTION_GAP);
        let concepts_heading = take(1, 0);

        let (cards, grid_height) = card_grid(width, concepts_heading.bottom());
        take(grid_height, SECTION_GAP);

        let examples_heading = take(1, 0);
        let menu = take(TabButton::HEIGHT, SECTION_GAP);
        let panel = take(ExamplePanel::calculate_height(selection, width), 0);

        Self {
            header,
            concepts_heading,
            cards,
            examples_heading,
            menu,
            panel,
            total_height: panel.bottom(),
        }
    }
}

/// Lay the concept cards out row-major, as many columns as fit.
fn card_grid(width: u16, top: u16) -> (Vec<Rect>, u16) {
    let columns = (width / MIN_CARD_WIDTH).clamp(1, MAX_CARD_COLUMNS);
    let base = width / columns;
    let remainder = width % columns;

    let mut rects = Vec::with_capacity(CORE_CONCEPTS.len());
    let mut y = top;
    for row in CORE_CONCEPTS.chunks(columns as usize) {
        let mut x = 0;
        let widths: Vec<u16> = (0..row.len() as u16)
            .map(|col| base + u16::from(col < remainder))
            .collect();
        let height = row
            .iter()
            .zip(&widths)
            .map(|(concept, &w)| ConceptCard::calculate_height(concept, w))
            .max()
            .unwrap_or(0);
        for &w in &widths {
            rects.push(Rect::new(x, y, w, height));
            x += w;
        }
        y += height;
    }
    (rects, y - top)
}

/// The whole scrollable page as one widget.
pub struct Page<'a> {
    pub layout: &'a PageLayout,
    pub selection: Selection,
    pub focused: Option<ExampleKey>,
    pub accent: Color,
}

impl Widget for Page<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let place = |rect: Rect| {
            Rect::new(area.x + rect.x, area.y + rect.y, rect.width, rect.height).intersection(area)
        };
        let heading = Style::default().fg(self.accent).add_modifier(Modifier::BOLD);

        Header::new(self.accent).render(place(self.layout.header), buf);

        Line::styled(CONCEPTS_HEADING, heading).render(place(self.layout.concepts_heading), buf);
        for (concept, rect) in CORE_CONCEPTS.iter().zip(&self.layout.cards) {
            ConceptCard::new(concept, self.accent).render(place(*rect), buf);
        }

        Line::styled(EXAMPLES_HEADING, heading).render(place(self.layout.examples_heading), buf);
        TabMenu::new(self.selection, self.focused, self.accent)
            .render(place(self.layout.menu), buf);
        ExamplePanel::new(self.selection, self.accent).render(place(self.layout.panel), buf);
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [main_area, status_area] = Layout::vertical([Min(0), Length(1)]).areas(frame.area());

    // Last column is reserved for the scrollbar
    let content_width = main_area.width.saturating_sub(1);
    let layout = PageLayout::compute(content_width, app.selection);

    tui.viewport_height = main_area.height;
    tui.page_height = layout.total_height;
    if tui.reveal_panel {
        tui.reveal(layout.menu.y, layout.panel.bottom());
        tui.reveal_panel = false;
    }
    tui.clamp_scroll();
    tui.scroll_state.set_offset(Position::new(0, tui.scroll_y));

    let page_area = Rect::new(0, 0, content_width, layout.total_height);
    let mut scroll_view = ScrollView::new(Size::new(content_width, layout.total_height))
        .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
        .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
    scroll_view.render_widget(
        Page {
            layout: &layout,
            selection: app.selection,
            focused: Some(tui.tab_menu.focused_key()),
            accent: tui.accent,
        },
        page_area,
    );
    frame.render_stateful_widget(scroll_view, main_area, &mut tui.scroll_state);

    // Buttons move with the page, so hit areas are rebuilt every frame
    let viewport = Rect::new(main_area.x, main_area.y, content_width, main_area.height);
    tui.tab_menu.hit_areas = TabMenuState::button_rects(layout.menu)
        .into_iter()
        .filter_map(|(key, rect)| {
            content_to_screen(rect, viewport, tui.scroll_y).map(|screen| (key, screen))
        })
        .collect();

    StatusBar::new(app.status_message.clone(), tui.mouse_enabled).render(frame, status_area);
}

/// Map a rect in page coordinates to the part of it visible on screen.
pub fn content_to_screen(rect: Rect, viewport: Rect, scroll_y: u16) -> Option<Rect> {
    let top = i32::from(rect.y) - i32::from(scroll_y);
    let bottom = top + i32::from(rect.height);
    let top = top.max(0);
    let bottom = bottom.min(i32::from(viewport.height));
    if top >= bottom || rect.x >= viewport.width {
        return None;
    }
    let width = rect.width.min(viewport.width - rect.x);
    Some(Rect::new(
        viewport.x + rect.x,
        viewport.y + top as u16,
        width,
        (bottom - top) as u16,
    ))
}

/// Render the page once, without a terminal, as plain text lines.
pub fn render_page_lines(app: &App, width: u16, accent: Color) -> Vec<String> {
    let layout = PageLayout::compute(width, app.selection);
    let area = Rect::new(0, 0, width, layout.total_height);
    let mut buf = Buffer::empty(area);
    Page {
        layout: &layout,
        selection: app.selection,
        focused: None,
        accent,
    }
    .render(area, &mut buf);
    buffer_lines(&buf)
}

/// Buffer rows as strings, trailing whitespace removed.
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            let row: String = (area.left()..area.right())
                .map(|x| buf[(x, y)].symbol())
                .collect();
            row.trim_end().to_string()
        })
        .collect()
}
