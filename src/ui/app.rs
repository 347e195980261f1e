use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Bar, BarChart, BarGroup, Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Wrap,
};
use ratatui::Frame;

use crate::models::{ArtistProfile, Profession, VenueProfile, Zone};
use crate::rating::submit_rating;
use crate::registry::Registry;
use crate::session::Session;
use crate::stats::{MeanPrice, Share, StatsReport};
use crate::view::{render, Page, SearchQuery, View};

use super::forms::{ArtistField, ArtistForm, VenueField, VenueForm, NAME_REQUIRED};
use super::helpers::surface_error;
use super::screens::{ArtistSearchScreen, VenueSearchScreen};

/// Title rows at the top of every frame.
const HEADER_HEIGHT: u16 = 3;
/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
const SIDEBAR_WIDTH: u16 = 30;
const SIDEBAR_INFO_HEIGHT: u16 = 5;
/// Rows given to the mean-price bar chart, borders included.
const BAR_CHART_HEIGHT: u16 = 12;
const BAR_WIDTH: u16 = 10;

const APP_TITLE: &str = "🎭 ATR Conect";
const APP_SUBTITLE: &str = "Conectando restaurantes y artistas independientes de Buenos Aires";
const WELCOME_LINES: &[&str] = &[
    "Conectamos artistas independientes con restaurantes y bares de Buenos Aires",
    "",
    "- 🎵 Artistas: Registra tu perfil, muestra tu talento y encuentra lugares para presentarte",
    "- 🍽️ Restaurantes: Encuentra artistas perfectos para tu establecimiento",
    "- ⭐ Califica y deja reseñas para construir una comunidad confiable",
];
const NO_ARTISTS: &str = "No se encontraron artistas con los filtros seleccionados";
const NO_VENUES: &str = "No se encontraron restaurantes con los filtros seleccionados";
/// Colors rotated across proportion-chart slices.
const SLICE_COLORS: &[Color] = &[
    Color::Cyan,
    Color::Magenta,
    Color::Yellow,
    Color::Green,
    Color::Blue,
    Color::Red,
    Color::LightCyan,
    Color::LightMagenta,
];

/// Whether keys drive the sidebar menu or the active view.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum Focus {
    Menu,
    Content,
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Warning,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Warning => Style::default().fg(Color::Yellow),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Central application state. Widget state (forms, filters, expanded cards)
/// lives here; everything shown about the registries is re-read into `page`
/// after each key press.
pub struct App {
    session: Session,
    view: View,
    focus: Focus,
    page: Page,
    artist_form: ArtistForm,
    venue_form: VenueForm,
    artist_search: ArtistSearchScreen,
    venue_search: VenueSearchScreen,
    status: Option<StatusMessage>,
}

impl App {
    pub fn new(session: Session) -> Result<Self> {
        let view = View::default();
        let page = render(view, &session, &SearchQuery::default())?;
        Ok(Self {
            session,
            view,
            focus: Focus::Menu,
            page,
            artist_form: ArtistForm::default(),
            venue_form: VenueForm::default(),
            artist_search: ArtistSearchScreen::default(),
            venue_search: VenueSearchScreen::default(),
            status: None,
        })
    }

    /// Apply one key press and recompute the page. Returns `true` when the
    /// user asked to quit.
    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        let mut exit = false;
        match self.focus {
            Focus::Menu => self.handle_menu_key(code, &mut exit),
            Focus::Content => self.handle_content_key(code, &mut exit),
        }
        self.refresh()?;
        Ok(exit)
    }

    fn refresh(&mut self) -> Result<()> {
        let query = SearchQuery {
            artists: self.artist_search.filter,
            venues: self.venue_search.filter,
        };
        self.page = render(self.view, &self.session, &query)?;
        match &self.page {
            Page::SearchArtists { results, .. } => self.artist_search.clamp(results.len()),
            Page::SearchVenues { results, .. } => self.venue_search.clamp(results.len()),
            _ => {}
        }
        Ok(())
    }

    fn handle_menu_key(&mut self, code: KeyCode, exit: &mut bool) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => *exit = true,
            KeyCode::Up => self.select_view(self.view.offset(-1)),
            KeyCode::Down => self.select_view(self.view.offset(1)),
            KeyCode::Enter | KeyCode::Tab | KeyCode::Right => self.focus = Focus::Content,
            _ => {}
        }
    }

    fn select_view(&mut self, view: View) {
        if view != self.view {
            self.view = view;
            self.clear_status();
        }
    }

    fn handle_content_key(&mut self, code: KeyCode, exit: &mut bool) {
        if code == KeyCode::Esc {
            self.focus = Focus::Menu;
            return;
        }
        match self.view {
            View::RegisterArtist => self.handle_artist_form(code),
            View::RegisterVenue => self.handle_venue_form(code),
            View::SearchArtists => self.handle_artist_search(code, exit),
            View::SearchVenues => self.handle_venue_search(code, exit),
            View::Home | View::Statistics => {
                if code == KeyCode::Char('q') {
                    *exit = true;
                }
            }
        }
    }

    fn handle_artist_form(&mut self, code: KeyCode) {
        let form = &mut self.artist_form;
        match code {
            KeyCode::Tab | KeyCode::Down => form.focus_next(1),
            KeyCode::BackTab | KeyCode::Up => form.focus_next(-1),
            KeyCode::Left => form.cycle_choice(-1),
            KeyCode::Right => form.cycle_choice(1),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => {
                if let Err(err) = self.save_new_artist() {
                    let message = surface_error(&err);
                    self.artist_form.error = Some(message.clone());
                    self.set_status(message, StatusKind::Error);
                }
            }
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
            }
            _ => {}
        }
    }

    fn handle_venue_form(&mut self, code: KeyCode) {
        let form = &mut self.venue_form;
        match code {
            KeyCode::Tab | KeyCode::Down => form.focus_next(1),
            KeyCode::BackTab | KeyCode::Up => form.focus_next(-1),
            KeyCode::Left => form.cycle_choice(-1),
            KeyCode::Right => form.cycle_choice(1),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => {
                if let Err(err) = self.save_new_venue() {
                    let message = surface_error(&err);
                    self.venue_form.error = Some(message.clone());
                    self.set_status(message, StatusKind::Error);
                }
            }
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
            }
            _ => {}
        }
    }

    fn handle_artist_search(&mut self, code: KeyCode, exit: &mut bool) {
        let Page::SearchArtists {
            professions,
            zones,
            results,
        } = &self.page
        else {
            return;
        };
        let screen = &mut self.artist_search;
        let current = results.get(screen.selected);
        let mut status_to_set: Option<(String, StatusKind)> = None;

        match code {
            KeyCode::Char('q') => *exit = true,
            KeyCode::Up => screen.move_selection(-1, results.len()),
            KeyCode::Down => screen.move_selection(1, results.len()),
            KeyCode::PageUp => screen.move_selection(-5, results.len()),
            KeyCode::PageDown => screen.move_selection(5, results.len()),
            KeyCode::Char('p') => screen.cycle_profession(professions, 1),
            KeyCode::Char('P') => screen.cycle_profession(professions, -1),
            KeyCode::Char('z') => screen.cycle_zone(zones, 1),
            KeyCode::Char('Z') => screen.cycle_zone(zones, -1),
            KeyCode::Enter => {
                if let Some(artist) = current {
                    screen.toggle_expanded(artist.id);
                }
            }
            KeyCode::Left | KeyCode::Right => {
                if let Some(artist) = current.filter(|artist| screen.is_expanded(artist.id)) {
                    let delta = if code == KeyCode::Left { -1 } else { 1 };
                    screen.adjust_rating(artist.id, delta);
                }
            }
            KeyCode::Char('r') => match current {
                Some(artist) if screen.is_expanded(artist.id) => {
                    let receipt = submit_rating(artist, screen.rating_for(artist.id));
                    status_to_set = Some((receipt.to_string(), StatusKind::Info));
                }
                Some(_) => {
                    status_to_set = Some((
                        "Abrí la tarjeta con Enter para calificar.".to_string(),
                        StatusKind::Warning,
                    ));
                }
                None => {
                    status_to_set = Some((
                        "No hay artista seleccionado.".to_string(),
                        StatusKind::Error,
                    ));
                }
            },
            _ => {}
        }

        if let Some((text, kind)) = status_to_set {
            self.set_status(text, kind);
        }
    }

    fn handle_venue_search(&mut self, code: KeyCode, exit: &mut bool) {
        let Page::SearchVenues { zones, results } = &self.page else {
            return;
        };
        let screen = &mut self.venue_search;

        match code {
            KeyCode::Char('q') => *exit = true,
            KeyCode::Up => screen.move_selection(-1, results.len()),
            KeyCode::Down => screen.move_selection(1, results.len()),
            KeyCode::PageUp => screen.move_selection(-5, results.len()),
            KeyCode::PageDown => screen.move_selection(5, results.len()),
            KeyCode::Char('z') => screen.cycle_zone(zones, 1),
            KeyCode::Char('Z') => screen.cycle_zone(zones, -1),
            KeyCode::Enter => {
                if let Some(venue) = results.get(screen.selected) {
                    screen.toggle_expanded(venue.id);
                }
            }
            _ => {}
        }
    }

    fn save_new_artist(&mut self) -> Result<()> {
        let draft = self.artist_form.to_draft()?;
        match self.session.artists().register(&draft)? {
            Some(artist) => {
                self.artist_form = ArtistForm::default();
                self.set_status(
                    format!("✅ {} registrado exitosamente!", artist.name),
                    StatusKind::Info,
                );
            }
            None => {
                self.artist_form.error = Some(NAME_REQUIRED.to_string());
                self.set_status(NAME_REQUIRED, StatusKind::Error);
            }
        }
        Ok(())
    }

    fn save_new_venue(&mut self) -> Result<()> {
        let draft = self.venue_form.to_draft();
        match self.session.venues().register(&draft)? {
            Some(venue) => {
                self.venue_form = VenueForm::default();
                self.set_status(
                    format!("✅ {} registrado exitosamente!", venue.name),
                    StatusKind::Info,
                );
            }
            None => {
                self.venue_form.error = Some(NAME_REQUIRED.to_string());
                self.set_status(NAME_REQUIRED, StatusKind::Error);
            }
        }
        Ok(())
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
            .split(rows[1]);

        self.draw_header(frame, rows[0]);
        self.draw_sidebar(frame, body[0]);
        self.draw_content(frame, body[1]);
        self.draw_footer(frame, rows[2]);
    }

    fn draw_header(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                APP_TITLE,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(APP_SUBTITLE, Style::default().fg(Color::Gray))),
        ];
        let header = Paragraph::new(lines).block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(header, area);
    }

    fn draw_sidebar(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(SIDEBAR_INFO_HEIGHT)])
            .split(area);

        let mut menu_block = Block::default()
            .title("Menú Principal")
            .borders(Borders::ALL);
        if self.focus == Focus::Menu {
            menu_block = menu_block.border_style(Style::default().fg(Color::Yellow));
        }
        let items: Vec<ListItem> = View::ALL
            .iter()
            .map(|view| ListItem::new(view.label()))
            .collect();
        let list = List::new(items)
            .block(menu_block)
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");
        let mut list_state = ListState::default();
        list_state.select(Some(self.view.index()));
        frame.render_stateful_widget(list, chunks[0], &mut list_state);

        let info = Paragraph::new(vec![
            Line::from(Span::styled(
                "ATR Conect v1.0",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from("Conectando la comunidad artística con la gastronómica 🎭🍽️"),
        ])
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(info, chunks[1]);
    }

    fn draw_content(&self, frame: &mut Frame, area: Rect) {
        let mut block = Block::default()
            .title(view_heading(self.view))
            .borders(Borders::ALL);
        if self.focus == Focus::Content {
            block = block.border_style(Style::default().fg(Color::Yellow));
        }
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        match &self.page {
            Page::Home {
                artist_count,
                venue_count,
            } => self.draw_home(frame, inner, *artist_count, *venue_count),
            Page::RegisterArtist => self.draw_artist_form(frame, inner),
            Page::RegisterVenue => self.draw_venue_form(frame, inner),
            Page::SearchArtists { results, .. } => self.draw_artist_search(frame, inner, results),
            Page::SearchVenues { results, .. } => self.draw_venue_search(frame, inner, results),
            Page::Statistics(report) => self.draw_statistics(frame, inner, report),
        }
    }

    fn draw_home(&self, frame: &mut Frame, area: Rect, artist_count: usize, venue_count: usize) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(WELCOME_LINES.len() as u16 + 1),
                Constraint::Length(4),
                Constraint::Min(0),
            ])
            .split(area);

        let mut lines: Vec<Line> = WELCOME_LINES.iter().map(|line| Line::from(*line)).collect();
        lines[0] = Line::from(Span::styled(
            WELCOME_LINES[0],
            Style::default().add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), chunks[0]);

        let metrics = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);
        for (chunk, (title, value)) in metrics.iter().zip([
            ("Artistas Registrados", artist_count),
            ("Restaurantes Registrados", venue_count),
        ]) {
            let metric = Paragraph::new(Line::from(Span::styled(
                value.to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )))
            .alignment(Alignment::Center)
            .block(Block::default().title(title).borders(Borders::ALL));
            frame.render_widget(metric, *chunk);
        }
    }

    fn draw_artist_form(&self, frame: &mut Frame, area: Rect) {
        let form = &self.artist_form;
        let mut lines: Vec<Line> = ArtistField::ALL
            .iter()
            .map(|field| form.build_line(*field))
            .collect();
        lines.push(Line::from(""));
        lines.push(form_hint(form.error.as_deref()));

        frame.render_widget(Paragraph::new(lines), area);

        if self.focus == Focus::Content {
            if let Some(offset) = form.cursor_offset() {
                frame.set_cursor_position((
                    area.x + offset as u16,
                    area.y + form.active_row() as u16,
                ));
            }
        }
    }

    fn draw_venue_form(&self, frame: &mut Frame, area: Rect) {
        let form = &self.venue_form;
        let mut lines: Vec<Line> = VenueField::ALL
            .iter()
            .map(|field| form.build_line(*field))
            .collect();
        lines.push(Line::from(""));
        lines.push(form_hint(form.error.as_deref()));

        frame.render_widget(Paragraph::new(lines), area);

        if self.focus == Focus::Content {
            if let Some(offset) = form.cursor_offset() {
                frame.set_cursor_position((
                    area.x + offset as u16,
                    area.y + form.active_row() as u16,
                ));
            }
        }
    }

    fn draw_artist_search(&self, frame: &mut Frame, area: Rect, results: &[ArtistProfile]) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        let filter = self.artist_search.filter;
        let filters = Line::from(vec![
            Span::raw("Filtrar por profesión: "),
            Span::styled(
                filter_label(filter.profession.map(Profession::label), "Todos"),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw("   Filtrar por zona: "),
            Span::styled(
                filter_label(filter.zone.map(Zone::label), "Todas"),
                Style::default().fg(Color::Cyan),
            ),
        ]);
        frame.render_widget(Paragraph::new(filters), chunks[0]);

        if results.is_empty() {
            frame.render_widget(no_results(NO_ARTISTS), chunks[1]);
            return;
        }

        let items: Vec<ListItem> = results
            .iter()
            .map(|artist| ListItem::new(self.artist_card(artist)))
            .collect();
        render_cards(frame, chunks[1], items, self.artist_search.selected);
    }

    fn artist_card(&self, artist: &ArtistProfile) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(Span::styled(
            artist.card_title(),
            Style::default().add_modifier(Modifier::BOLD),
        ))];
        if !self.artist_search.is_expanded(artist.id) {
            return lines;
        }

        lines.push(detail_line("Estilo", &artist.style));
        lines.push(detail_line("Precio", &format!("${}", artist.price)));
        lines.push(detail_line("Zona", artist.zone.label()));
        lines.push(detail_line("Contacto", &artist.contact));
        lines.push(detail_line("Redes", &artist.social));

        let rating = self.artist_search.rating_for(artist.id);
        lines.push(Line::from(vec![
            Span::raw(format!("    Calificar a {}: ", artist.name)),
            Span::styled(rating.stars(), Style::default().fg(Color::Yellow)),
            Span::raw(format!(" {}/5", rating.value())),
        ]));
        lines.push(Line::from(""));
        lines
    }

    fn draw_venue_search(&self, frame: &mut Frame, area: Rect, results: &[VenueProfile]) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        let filters = Line::from(vec![
            Span::raw("Filtrar por zona: "),
            Span::styled(
                filter_label(self.venue_search.filter.zone.map(Zone::label), "Todas"),
                Style::default().fg(Color::Cyan),
            ),
        ]);
        frame.render_widget(Paragraph::new(filters), chunks[0]);

        if results.is_empty() {
            frame.render_widget(no_results(NO_VENUES), chunks[1]);
            return;
        }

        let items: Vec<ListItem> = results
            .iter()
            .map(|venue| {
                let mut lines = vec![Line::from(Span::styled(
                    venue.card_title(),
                    Style::default().add_modifier(Modifier::BOLD),
                ))];
                if self.venue_search.is_expanded(venue.id) {
                    lines.push(detail_line("Zona", venue.zone.label()));
                    lines.push(detail_line("Dirección", &venue.address));
                    lines.push(detail_line("Contacto", &venue.contact));
                    lines.push(detail_line("Redes", &venue.social));
                    lines.push(Line::from(""));
                }
                ListItem::new(lines)
            })
            .collect();
        render_cards(frame, chunks[1], items, self.venue_search.selected);
    }

    /// Lay out whichever charts have data; an empty table contributes nothing.
    fn draw_statistics(&self, frame: &mut Frame, area: Rect, report: &StatsReport) {
        let mut constraints = Vec::new();
        if !report.artists_by_profession.is_empty() {
            constraints.push(Constraint::Length(
                report.artists_by_profession.len() as u16 + 2,
            ));
        }
        if report.mean_price.is_some() {
            constraints.push(Constraint::Length(BAR_CHART_HEIGHT));
        }
        if !report.venues_by_zone.is_empty() {
            constraints.push(Constraint::Length(report.venues_by_zone.len() as u16 + 2));
        }
        if constraints.is_empty() {
            return;
        }
        constraints.push(Constraint::Min(0));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);
        let mut slots = chunks.iter();

        if !report.artists_by_profession.is_empty() {
            if let Some(slot) = slots.next() {
                draw_shares(
                    frame,
                    *slot,
                    "Distribución de Artistas por Profesión",
                    &report.artists_by_profession,
                );
            }
        }
        if let Some(means) = &report.mean_price {
            if let Some(slot) = slots.next() {
                draw_mean_prices(frame, *slot, means);
            }
        }
        if !report.venues_by_zone.is_empty() {
            if let Some(slot) = slots.next() {
                draw_shares(
                    frame,
                    *slot,
                    "Distribución de Restaurantes por Zona",
                    &report.venues_by_zone,
                );
            }
        }
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let instructions = self.footer_instructions();

        let paragraph = Paragraph::new(vec![status_line, instructions]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let keys: &[(&str, &str)] = match (self.focus, self.view) {
            (Focus::Menu, _) => &[
                ("[↑↓]", " Menú   "),
                ("[Enter]", " Abrir   "),
                ("[q]", " Salir"),
            ],
            (Focus::Content, View::RegisterArtist | View::RegisterVenue) => &[
                ("[Tab/↑↓]", " Campo   "),
                ("[←→]", " Elegir   "),
                ("[Enter]", " Registrar   "),
                ("[Esc]", " Menú"),
            ],
            (Focus::Content, View::SearchArtists) => &[
                ("[↑↓]", " Mover   "),
                ("[Enter]", " Abrir   "),
                ("[p/z]", " Filtros   "),
                ("[←→]", " Puntaje   "),
                ("[r]", " Calificar   "),
                ("[Esc]", " Menú   "),
                ("[q]", " Salir"),
            ],
            (Focus::Content, View::SearchVenues) => &[
                ("[↑↓]", " Mover   "),
                ("[Enter]", " Abrir   "),
                ("[z]", " Zona   "),
                ("[Esc]", " Menú   "),
                ("[q]", " Salir"),
            ],
            (Focus::Content, View::Home | View::Statistics) => {
                &[("[Esc]", " Menú   "), ("[q]", " Salir")]
            }
        };

        let spans: Vec<Span> = keys
            .iter()
            .flat_map(|(key, action)| {
                [
                    Span::styled(key.to_string(), key_style),
                    Span::raw(action.to_string()),
                ]
            })
            .collect();
        Line::from(spans)
    }
}

fn view_heading(view: View) -> &'static str {
    match view {
        View::Home => "Bienvenido a ATR Conect",
        View::RegisterArtist => "🎨 Registrar Nuevo Artista",
        View::RegisterVenue => "🍽️ Registrar Nuevo Restaurante",
        View::SearchArtists => "🔍 Buscar Artistas",
        View::SearchVenues => "🔍 Buscar Restaurantes",
        View::Statistics => "📊 Estadísticas de ATR Conect",
    }
}

fn filter_label(value: Option<&'static str>, match_all: &'static str) -> String {
    format!("[{}]", value.unwrap_or(match_all))
}

fn form_hint(error: Option<&str>) -> Line<'static> {
    match error {
        Some(error) => Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(Color::Red),
        )),
        None => Line::from(Span::styled(
            "Enter para registrar • Tab para cambiar de campo • Esc para volver",
            Style::default().fg(Color::Gray),
        )),
    }
}

fn detail_line(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("    {label}: "),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(value.to_string()),
    ])
}

fn no_results(message: &'static str) -> Paragraph<'static> {
    Paragraph::new(Span::styled(
        format!("⚠ {message}"),
        Style::default().fg(Color::Yellow),
    ))
    .wrap(Wrap { trim: true })
}

fn render_cards(frame: &mut Frame, area: Rect, items: Vec<ListItem<'static>>, selected: usize) {
    let list = List::new(items)
        .highlight_style(Style::default().fg(Color::Yellow))
        .highlight_symbol("▶ ");
    let mut list_state = ListState::default();
    list_state.select(Some(selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// One labelled gauge per slice, standing in for a pie chart.
fn draw_shares<K: std::fmt::Display>(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    shares: &[Share<K>],
) {
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL);
    frame.render_widget(block.clone(), area);
    let inner = block.inner(area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(1); shares.len()])
        .split(inner);

    for (index, (share, row)) in shares.iter().zip(rows.iter()).enumerate() {
        let color = SLICE_COLORS[index % SLICE_COLORS.len()];
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(color))
            .ratio(share.ratio.clamp(0.0, 1.0))
            .label(format!(
                "{}: {} ({:.0}%)",
                share.key,
                share.count,
                share.ratio * 100.0
            ));
        frame.render_widget(gauge, *row);
    }
}

fn draw_mean_prices(frame: &mut Frame, area: Rect, means: &[MeanPrice]) {
    let bars: Vec<Bar> = means
        .iter()
        .map(|entry| {
            Bar::default()
                .label(Line::from(entry.profession.label()))
                .value(entry.mean.round() as u64)
                .text_value(format!("${:.0}", entry.mean))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title("Precio Promedio por Profesión")
                .borders(Borders::ALL),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(BAR_WIDTH)
        .bar_gap(2)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(Style::default().fg(Color::Black).bg(Color::Cyan));
    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ArtistDraft, ArtistFilter, VenueDraft};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn press_all(app: &mut App, codes: &[KeyCode]) -> Result<()> {
        for code in codes {
            app.handle_key(*code)?;
        }
        Ok(())
    }

    fn type_text(app: &mut App, text: &str) -> Result<()> {
        for ch in text.chars() {
            app.handle_key(KeyCode::Char(ch))?;
        }
        Ok(())
    }

    fn screen_text(app: &App) -> Result<String> {
        let mut terminal = Terminal::new(TestBackend::new(120, 40))?;
        terminal.draw(|frame| app.draw(frame))?;
        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        Ok(text)
    }

    #[test]
    fn registering_through_the_form_updates_home_metrics() -> Result<()> {
        let mut app = App::new(Session::open()?)?;
        press_all(&mut app, &[KeyCode::Down, KeyCode::Enter])?;
        assert_eq!(app.view, View::RegisterArtist);

        type_text(&mut app, "Luna")?;
        // Profession: Cantante -> ... -> DJ is four steps to the right.
        press_all(
            &mut app,
            &[
                KeyCode::Tab,
                KeyCode::Right,
                KeyCode::Right,
                KeyCode::Right,
                KeyCode::Right,
                KeyCode::Tab,
                KeyCode::Tab,
            ],
        )?;
        type_text(&mut app, "150")?;
        press_all(&mut app, &[KeyCode::Enter])?;

        let artists = app.session.artists().list_filtered(&ArtistFilter::default())?;
        assert_eq!(artists.len(), 1);
        assert_eq!(artists[0].name, "Luna");
        assert_eq!(artists[0].profession, Profession::Dj);
        assert_eq!(artists[0].zone, Zone::Palermo);
        assert_eq!(artists[0].price, 150);
        assert!(app.artist_form.name.is_empty());

        press_all(&mut app, &[KeyCode::Esc, KeyCode::Down, KeyCode::Enter])?;
        assert_eq!(app.view, View::RegisterVenue);
        type_text(&mut app, "Bar Sur")?;
        press_all(
            &mut app,
            &[
                KeyCode::Tab,
                KeyCode::Right,
                KeyCode::Right,
                KeyCode::Right,
                KeyCode::Enter,
            ],
        )?;

        press_all(&mut app, &[KeyCode::Esc, KeyCode::Up, KeyCode::Up])?;
        assert_eq!(
            app.page,
            Page::Home {
                artist_count: 1,
                venue_count: 1,
            }
        );
        Ok(())
    }

    #[test]
    fn empty_name_shows_an_error_and_stores_nothing() -> Result<()> {
        let mut app = App::new(Session::open()?)?;
        press_all(&mut app, &[KeyCode::Down, KeyCode::Enter, KeyCode::Enter])?;

        assert_eq!(app.session.artists().count()?, 0);
        assert_eq!(app.artist_form.error.as_deref(), Some(NAME_REQUIRED));
        Ok(())
    }

    #[test]
    fn whitespace_name_is_registered_as_typed() -> Result<()> {
        let mut app = App::new(Session::open()?)?;
        press_all(&mut app, &[KeyCode::Down, KeyCode::Enter])?;
        type_text(&mut app, "  ")?;
        press_all(&mut app, &[KeyCode::Enter])?;

        let artists = app.session.artists().list_filtered(&ArtistFilter::default())?;
        assert_eq!(artists.len(), 1);
        assert_eq!(artists[0].name, "  ");
        assert_eq!(app.artist_form.error, None);
        Ok(())
    }

    #[test]
    fn rating_confirms_without_touching_the_registry() -> Result<()> {
        let mut app = App::new(Session::open()?)?;
        app.session.artists().register(&ArtistDraft {
            name: "Luna".to_string(),
            profession: Profession::Dj,
            zone: Zone::Palermo,
            price: 150,
            ..ArtistDraft::default()
        })?;

        press_all(
            &mut app,
            &[
                KeyCode::Down,
                KeyCode::Down,
                KeyCode::Down,
                KeyCode::Enter,
                KeyCode::Enter,
                KeyCode::Right,
                KeyCode::Char('r'),
            ],
        )?;

        let status = app.status.as_ref().map(|status| status.text.clone());
        let status = status.unwrap_or_default();
        assert!(status.contains("Luna"));
        assert!(status.contains("4/5"));
        let artists = app.session.artists().list_filtered(&ArtistFilter::default())?;
        assert_eq!(artists[0].rating, 0.0);
        Ok(())
    }

    #[test]
    fn empty_directory_reports_no_results() -> Result<()> {
        let mut app = App::new(Session::open()?)?;
        press_all(
            &mut app,
            &[KeyCode::Down, KeyCode::Down, KeyCode::Down, KeyCode::Enter],
        )?;
        assert!(screen_text(&app)?.contains("No se encontraron artistas"));
        Ok(())
    }

    #[test]
    fn artist_filters_with_no_match_report_no_results() -> Result<()> {
        let mut app = App::new(Session::open()?)?;
        for (name, profession, zone) in [
            ("Luna", Profession::Dj, Zone::Palermo),
            ("Trío Sur", Profession::Musician, Zone::SanTelmo),
        ] {
            app.session.artists().register(&ArtistDraft {
                name: name.to_string(),
                profession,
                zone,
                ..ArtistDraft::default()
            })?;
        }

        press_all(
            &mut app,
            &[KeyCode::Down, KeyCode::Down, KeyCode::Down, KeyCode::Enter],
        )?;
        assert!(screen_text(&app)?.contains("Luna"));

        press_all(
            &mut app,
            &[KeyCode::Char('p'), KeyCode::Char('z'), KeyCode::Char('z')],
        )?;
        assert_eq!(app.artist_search.filter.profession, Some(Profession::Dj));
        assert_eq!(app.artist_search.filter.zone, Some(Zone::SanTelmo));
        let text = screen_text(&app)?;
        assert!(text.contains("No se encontraron artistas"));
        assert!(!text.contains("Trío Sur"));
        Ok(())
    }

    #[test]
    fn venue_filter_with_no_match_reports_no_results() -> Result<()> {
        let mut app = App::new(Session::open()?)?;
        app.session.venues().register(&VenueDraft {
            name: "Bar Sur".to_string(),
            zone: Zone::SanTelmo,
            ..VenueDraft::default()
        })?;

        press_all(
            &mut app,
            &[
                KeyCode::Down,
                KeyCode::Down,
                KeyCode::Down,
                KeyCode::Down,
                KeyCode::Enter,
            ],
        )?;
        assert_eq!(app.view, View::SearchVenues);
        assert!(screen_text(&app)?.contains("Bar Sur"));

        app.venue_search.filter.zone = Some(Zone::Recoleta);
        app.refresh()?;
        let text = screen_text(&app)?;
        assert!(text.contains("No se encontraron restaurantes"));
        assert!(!text.contains("Bar Sur"));
        Ok(())
    }

    #[test]
    fn every_view_draws() -> Result<()> {
        let mut app = App::new(Session::open()?)?;
        for (name, profession, price) in [
            ("Luna", Profession::Dj, 150),
            ("Trío Sur", Profession::Musician, 300),
        ] {
            app.session.artists().register(&ArtistDraft {
                name: name.to_string(),
                profession,
                price,
                ..ArtistDraft::default()
            })?;
        }

        for _ in View::ALL {
            app.handle_key(KeyCode::Down)?;
            let text = screen_text(&app)?;
            assert!(text.contains("ATR Conect"));
        }

        press_all(&mut app, &[KeyCode::Up])?;
        assert_eq!(app.view, View::Statistics);
        let text = screen_text(&app)?;
        assert!(text.contains("Precio Promedio"));
        Ok(())
    }
}
