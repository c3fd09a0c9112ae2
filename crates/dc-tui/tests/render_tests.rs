use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::Modifier;
use ratatui::widgets::Widget;

use dc_core::GameSession;
use dc_core::dungeon::{DungeonConfig, Grid};
use dc_core::player::Avatar;
use dc_tui::Theme;
use dc_tui::display::ClassicGlyphs;
use dc_tui::theme::AVATAR_TAN;
use dc_tui::widgets::{MapWidget, StatusWidget};

fn symbol_at(buf: &Buffer, x: u16, y: u16) -> &str {
    buf.cell(Position::new(x, y)).map(|c| c.symbol()).unwrap_or("")
}

#[test]
fn test_map_widget_draws_cells_and_avatar() {
    let grid = Grid::from_rows(&["#####", "#...#", "#.#.#", "#####"]);
    let avatar = Avatar::new((1, 1).into());
    let theme = Theme::dark();
    let area = Rect::new(0, 0, 7, 6);
    let mut buf = Buffer::empty(area);

    MapWidget::new(&grid, &avatar, &theme, &ClassicGlyphs).render(area, &mut buf);

    // Inside the border, map (x, y) lands at (x + 1, y + 1)
    assert_eq!(symbol_at(&buf, 1, 1), "#");
    assert_eq!(symbol_at(&buf, 2, 2), "@");
    assert_eq!(symbol_at(&buf, 3, 2), ".");
    assert_eq!(symbol_at(&buf, 3, 3), "#");
    assert_eq!(symbol_at(&buf, 4, 3), ".");

    let avatar_cell = buf.cell(Position::new(2, 2)).unwrap();
    assert_eq!(avatar_cell.fg, AVATAR_TAN);
    assert!(avatar_cell.modifier.contains(Modifier::BOLD));
}

#[test]
fn test_map_widget_clips_to_small_area() {
    let grid = Grid::new(30, 30);
    let avatar = Avatar::new((0, 0).into());
    let theme = Theme::dark();
    let area = Rect::new(0, 0, 5, 5);
    let mut buf = Buffer::empty(area);

    MapWidget::new(&grid, &avatar, &theme, &ClassicGlyphs).render(area, &mut buf);
    assert_eq!(symbol_at(&buf, 1, 1), "@");
    assert_eq!(symbol_at(&buf, 3, 3), "#");
}

fn find_avatar(buf: &Buffer, area: Rect) -> Option<(u16, u16)> {
    (area.y..area.y + area.height)
        .flat_map(|y| (area.x..area.x + area.width).map(move |x| (x, y)))
        .find(|&(x, y)| symbol_at(buf, x, y) == "@")
}

#[test]
fn test_map_widget_follows_avatar_in_short_terminal() {
    let grid = Grid::new(25, 25);
    let theme = Theme::dark();
    let area = Rect::new(0, 0, 80, 12);

    // 10 visible rows: the window scrolls down to rows 15..25
    let avatar = Avatar::new((20, 20).into());
    let mut buf = Buffer::empty(area);
    MapWidget::new(&grid, &avatar, &theme, &ClassicGlyphs).render(area, &mut buf);
    assert_eq!(find_avatar(&buf, area), Some((21, 6)));

    let avatar = Avatar::new((24, 24).into());
    let mut buf = Buffer::empty(area);
    MapWidget::new(&grid, &avatar, &theme, &ClassicGlyphs).render(area, &mut buf);
    assert_eq!(find_avatar(&buf, area), Some((25, 10)));
}

#[test]
fn test_map_widget_follows_avatar_in_narrow_terminal() {
    let grid = Grid::new(25, 25);
    let avatar = Avatar::new((22, 3).into());
    let theme = Theme::dark();
    let area = Rect::new(0, 0, 12, 30);
    let mut buf = Buffer::empty(area);
    MapWidget::new(&grid, &avatar, &theme, &ClassicGlyphs).render(area, &mut buf);
    // 10 visible columns: the window scrolls right to columns 15..25
    assert_eq!(find_avatar(&buf, area), Some((8, 4)));
}

#[test]
fn test_map_widget_handles_very_wide_grid() {
    let grid = Grid::new(65_536, 3);
    let avatar = Avatar::new((0, 1).into());
    let theme = Theme::dark();
    let area = Rect::new(0, 0, 10, 5);
    let mut buf = Buffer::empty(area);
    MapWidget::new(&grid, &avatar, &theme, &ClassicGlyphs).render(area, &mut buf);
    assert_eq!(find_avatar(&buf, area), Some((1, 2)));
    assert_eq!(symbol_at(&buf, 8, 1), "#");
}

#[test]
fn test_status_widget_lines() {
    let session = GameSession::new(DungeonConfig::default(), 99).unwrap();
    let theme = Theme::dark();
    let widget = StatusWidget::new(&session, &theme);
    let line = widget.status_line();
    assert!(line.contains("Seed:99"));
    assert!(line.contains("Map:25x25"));
    assert!(line.contains("Move:sequential"));
    assert!(line.contains(&session.avatar().pos().to_string()));

    let area = Rect::new(0, 0, 80, 2);
    let mut buf = Buffer::empty(area);
    StatusWidget::new(&session, &theme).render(area, &mut buf);
    let first: String = (0..4).map(|x| symbol_at(&buf, x, 0)).collect();
    assert_eq!(first, "Pos:");
    let second: String = (0..6).map(|x| symbol_at(&buf, x, 1)).collect();
    assert_eq!(second, "arrows");
}
