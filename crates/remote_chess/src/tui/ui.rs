//! Stateless rendering of the session.

use crate::chess::{BOARD_SIZE, PieceCode, Side, Square};
use crate::session::{SessionController, TurnState};
use crate::view::{BoardGeometry, Cell, Shade, glyph};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

const LIGHT_SQUARE: Color = Color::Rgb(240, 217, 181);
const DARK_SQUARE: Color = Color::Rgb(181, 136, 99);
const SELECTED_SQUARE: Color = Color::Rgb(246, 246, 105);
const CURSOR_SQUARE: Color = Color::Rgb(130, 170, 220);

/// Draws the whole screen and returns where the board landed.
pub fn draw(frame: &mut Frame, session: &SessionController, cursor: Square) -> BoardGeometry {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(20),   // Board and log
            Constraint::Length(4), // Status
        ])
        .split(frame.area());

    let title = Paragraph::new("Remote Chess")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(48), Constraint::Min(24)])
        .split(chunks[1]);

    let geometry = draw_board(frame, body[0], session, cursor);
    draw_log(frame, body[1], session);
    draw_status(frame, chunks[2], session);
    geometry
}

fn draw_board(
    frame: &mut Frame,
    area: Rect,
    session: &SessionController,
    cursor: Square,
) -> BoardGeometry {
    let block = Block::default().borders(Borders::ALL).title("Board");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let geometry = BoardGeometry::centered_in(inner);
    let board = session.board();
    let show_cursor = board.is_interactive();

    for cell in board.cells() {
        let background = if session.selection() == Some(cell.square) {
            SELECTED_SQUARE
        } else if show_cursor && cell.square == cursor {
            CURSOR_SQUARE
        } else {
            match cell.shade {
                Shade::Light => LIGHT_SQUARE,
                Shade::Dark => DARK_SQUARE,
            }
        };
        draw_cell(frame, geometry.cell_rect(cell.square), cell, background);
    }

    draw_coordinates(frame, inner, geometry);
    geometry
}

fn draw_cell(frame: &mut Frame, rect: Rect, cell: Cell, background: Color) {
    let style = Style::default().bg(background).fg(piece_color(cell.piece));
    let symbol = glyph(cell.piece).unwrap_or(" ");
    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style.add_modifier(Modifier::BOLD))))
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, rect);
}

fn piece_color(piece: PieceCode) -> Color {
    match piece.side() {
        Some(Side::White) => Color::White,
        Some(Side::Black) => Color::Black,
        None => Color::Reset,
    }
}

/// Rank numbers left of the grid and file letters below it, when they fit.
fn draw_coordinates(frame: &mut Frame, inner: Rect, geometry: BoardGeometry) {
    let grid = geometry.area();
    let label_style = Style::default().fg(Color::DarkGray);

    if grid.x >= inner.x + 2 {
        for row in 0..BOARD_SIZE {
            if let Some(square) = Square::new(row, 0) {
                let rect = geometry.cell_rect(square);
                let label = Rect::new(grid.x - 2, rect.y, 1, 1);
                let rank = (BOARD_SIZE - row).to_string();
                frame.render_widget(Paragraph::new(rank).style(label_style), label);
            }
        }
    }

    if grid.bottom() < inner.bottom() {
        for col in 0..BOARD_SIZE {
            if let Some(square) = Square::new(BOARD_SIZE - 1, col) {
                let rect = geometry.cell_rect(square);
                let label = Rect::new(rect.x, grid.bottom(), rect.width, 1);
                let file = char::from(b'a' + col).to_string();
                frame.render_widget(
                    Paragraph::new(file)
                        .style(label_style)
                        .alignment(Alignment::Center),
                    label,
                );
            }
        }
    }
}

fn draw_log(frame: &mut Frame, area: Rect, session: &SessionController) {
    let block = Block::default().borders(Borders::ALL).title("Move log");
    let height = usize::from(block.inner(area).height);

    let items: Vec<ListItem> = session
        .log()
        .visible(height)
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    entry.at().format("%H:%M:%S ").to_string(),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(format!("{} {}", entry.kind().icon(), entry.text())),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn draw_status(frame: &mut Frame, area: Rect, session: &SessionController) {
    let turn_style = match session.turn() {
        TurnState::PlayerTurn => Style::default().fg(Color::Green),
        TurnState::OpponentTurn => Style::default().fg(Color::Yellow),
        TurnState::GameOver => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };

    let mut first = vec![Span::styled(session.turn().to_string(), turn_style)];
    if let Some(square) = session.selection() {
        first.push(Span::raw(format!("  selected {}", square)));
    }
    if let Some(notice) = session.notice() {
        first.push(Span::styled(
            format!("  {}", notice),
            Style::default().fg(Color::LightRed),
        ));
    }

    let help = Line::from(Span::styled(
        "click or arrows+enter: select  c: cancel  r: reset  PgUp/PgDn: log  q: quit",
        Style::default().fg(Color::DarkGray),
    ));

    let paragraph = Paragraph::new(vec![Line::from(first), help])
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}
