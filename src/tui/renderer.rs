use crate::engine::direction::Direction;
use crate::engine::session::Session;
use crate::engine::world::MoveOutcome;
use crate::map::tile::{ITEM, PLAYER, Tile, WALL};

use ratatui::{
    layout::{Constraint, Direction as Axis, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const CONTROLS: [&str; 5] = [
    "Left arrow: Move left",
    "Right arrow: Move right",
    "Up arrow: Move up",
    "Down arrow: Move down",
    "Escape: Quit",
];

pub fn render(f: &mut Frame, session: &Session) {
    let size = f.size();
    f.render_widget(Clear, size);

    if size.width < 20 || size.height < 10 {
        let msg = Paragraph::new("Terminal too small, resize to play.")
            .block(Block::default().borders(Borders::ALL).title("Console World"))
            .wrap(Wrap { trim: true });
        f.render_widget(msg, size);
        return;
    }

    let log_h = (size.height / 4).clamp(5, 8);

    let vertical = Layout::default()
        .direction(Axis::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(log_h)])
        .split(size);

    let top = vertical[0];
    let sidebar_w = (top.width / 3).clamp(24, 36);

    let horizontal = Layout::default()
        .direction(Axis::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(sidebar_w)])
        .split(top);

    draw_map(f, horizontal[0], session);
    draw_sidebar(f, horizontal[1], session);
    draw_logs(f, vertical[1], session);
}

fn tile_style(symbol: char) -> Style {
    match symbol {
        PLAYER => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        WALL => Style::default().fg(Color::DarkGray),
        ITEM => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        _ => Style::default(),
    }
}

fn draw_map(f: &mut Frame, area: Rect, session: &Session) {
    f.render_widget(Clear, area);

    let lines: Vec<Line> = session
        .world
        .render()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|c| Span::styled(c.to_string(), tile_style(c)))
                .collect();
            Line::from(spans)
        })
        .collect();

    let title = format!("Map: {}", session.map_name);
    let map_widget = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));

    f.render_widget(map_widget, area);
}

fn neighbor_span(tile: Option<Tile>) -> Span<'static> {
    match tile {
        Some(Tile::Empty) => Span::styled("empty", Style::default().fg(Color::White)),
        Some(Tile::Wall) => Span::styled("wall", Style::default().fg(Color::DarkGray)),
        Some(Tile::Item) => Span::styled("item", Style::default().fg(Color::Green)),
        Some(Tile::Invalid) => Span::styled("invalid", Style::default().fg(Color::Red)),
        None => Span::styled("edge", Style::default().fg(Color::Magenta)),
    }
}

fn draw_sidebar(f: &mut Frame, area: Rect, session: &Session) {
    f.render_widget(Clear, area);

    let (x, y) = session.display_position();
    let neighbors = session.world.neighbors();
    let grid = session.world.grid();

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            format!("Player location: ({}, {})", x, y),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("Map size: {}x{}", grid.width, grid.height)),
        Line::from(format!("Moves: {}", session.moves)),
        Line::from(""),
    ];

    for dir in Direction::ALL {
        lines.push(Line::from(vec![
            Span::raw(format!("{:>6}: ", dir.name().to_uppercase())),
            neighbor_span(neighbors.get(dir)),
        ]));
    }

    if let Some(MoveOutcome::Blocked(tile)) = session.last_outcome {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Blocked by {}", tile),
            Style::default().fg(Color::Red),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "CONTROLS",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for c in CONTROLS {
        lines.push(Line::from(c));
    }

    let sidebar = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Player"))
        .wrap(Wrap { trim: true });

    f.render_widget(sidebar, area);
}

fn draw_logs(f: &mut Frame, area: Rect, session: &Session) {
    f.render_widget(Clear, area);

    let mut lines: Vec<Line> = Vec::new();
    for msg in session.logs.iter() {
        lines.push(Line::from(msg.clone()));
    }

    let logs = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Log"))
        .wrap(Wrap { trim: true });

    f.render_widget(logs, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::world::World;
    use crate::map::loader::parse_map;
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buf = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf.get(x, y).symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_render_shows_location_and_neighbors() {
        let world = World::new(parse_map("XXXX\nXS#X\nXXXX").unwrap());
        let session = Session::new(world, "tiny");
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();

        terminal.draw(|f| render(f, &session)).unwrap();
        let text = buffer_text(&terminal);

        assert!(text.contains("Map: tiny"));
        assert!(text.contains("Player location: (2, 2)"));
        assert!(text.contains("RIGHT: item"));
        assert!(text.contains("Map size: 4x3"));
        assert!(text.contains("XO#X"));
    }

    #[test]
    fn test_tiny_terminal_message() {
        let world = World::new(parse_map("S").unwrap());
        let session = Session::new(world, "tiny");
        let mut terminal = Terminal::new(TestBackend::new(15, 5)).unwrap();

        terminal.draw(|f| render(f, &session)).unwrap();
        assert!(buffer_text(&terminal).contains("Terminal"));
    }
}
