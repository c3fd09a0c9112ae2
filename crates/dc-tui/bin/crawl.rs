//! Dungeon crawler
//!
//! Main entry point: carves a dungeon and lets you walk it in the terminal.

use std::io;
use std::time::Instant;

use anyhow::Context as _;
use clap::Parser;
use crossterm::{
    event, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::info;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use dc_core::dungeon::{CorridorTopology, DungeonConfig};
use dc_core::{GameRng, GameSession, MovementPolicy};
use dc_tui::display::{detect_glyph_set, text_map};
use dc_tui::logging::{self, LoggingArgs};
use dc_tui::{App, FramePacer, GraphicsMode, Theme};

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

/// Walk a randomly carved dungeon
#[derive(Parser, Debug)]
#[command(name = "crawl")]
#[command(author, version, about = "Explore a freshly carved dungeon", long_about = None)]
struct Args {
    /// Grid width in cells
    #[arg(long, default_value_t = dc_core::DEFAULT_WIDTH)]
    width: i32,

    /// Grid height in cells
    #[arg(long, default_value_t = dc_core::DEFAULT_HEIGHT)]
    height: i32,

    /// Seed for the dungeon generator (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Fewest rooms to carve
    #[arg(long, default_value_t = dc_core::MIN_ROOMS)]
    min_rooms: u32,

    /// Most rooms to carve
    #[arg(long, default_value_t = dc_core::MAX_ROOMS)]
    max_rooms: u32,

    /// Smallest room side
    #[arg(long, default_value_t = dc_core::MIN_ROOM_SIZE)]
    min_room_size: i32,

    /// Largest room side
    #[arg(long, default_value_t = dc_core::MAX_ROOM_SIZE)]
    max_room_size: i32,

    /// Corridor layout (star, chain)
    #[arg(long, default_value_t = CorridorTopology::default())]
    topology: CorridorTopology,

    /// How held keys become moves (sequential, combined)
    #[arg(long, default_value_t = MovementPolicy::default())]
    movement: MovementPolicy,

    /// Frames per second
    #[arg(long, default_value_t = dc_core::DEFAULT_FPS)]
    fps: u32,

    /// Map glyphs (classic, fancy, auto)
    #[arg(long, default_value_t = GraphicsMode::default())]
    graphics: GraphicsMode,

    /// Use the light background theme
    #[arg(long)]
    light: bool,

    /// Print the map to stdout and exit
    #[arg(long)]
    dump: bool,

    #[command(flatten)]
    logging: LoggingArgs,
}

impl Args {
    fn dungeon_config(&self) -> DungeonConfig {
        DungeonConfig::new(self.width, self.height)
            .with_room_count(self.min_rooms, self.max_rooms)
            .with_room_size(self.min_room_size, self.max_room_size)
            .with_topology(self.topology)
    }
}

fn main() -> anyhow::Result<()> {
    // Parse command-line arguments before terminal setup
    let args = Args::parse();
    logging::install(&args.logging, args.dump)?;

    let seed = match args.seed {
        Some(seed) => seed,
        None => {
            let seed = GameRng::from_entropy().seed();
            info!("no seed given, using {seed}");
            seed
        }
    };
    let session = GameSession::new(args.dungeon_config(), seed)
        .context("failed to generate dungeon")?
        .with_policy(args.movement);

    if args.dump {
        let glyphs = detect_glyph_set(args.graphics);
        print!(
            "{}",
            text_map(session.grid(), session.avatar(), glyphs.as_ref())
        );
        println!("seed: {}", session.seed());
        return Ok(());
    }

    let theme = if args.light {
        Theme::light()
    } else {
        Theme::detect()
    };
    let app = App::new(session, theme, args.graphics);

    let mut terminal = setup_terminal().context("failed to set up terminal")?;
    let result = run(&mut terminal, app, args.fps);
    // Restore terminal even if the game loop failed
    restore_terminal(&mut terminal).context("failed to restore terminal")?;
    result
}

fn setup_terminal() -> io::Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Tui) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

/// Main loop: gather input until the frame is due, move, update, draw.
fn run(terminal: &mut Tui, mut app: App, fps: u32) -> anyhow::Result<()> {
    let mut pacer = FramePacer::new(fps, Instant::now());
    terminal.draw(|frame| app.render(frame))?;

    while !app.should_quit() {
        loop {
            let timeout = pacer.time_left(Instant::now());
            if timeout.is_zero() {
                break;
            }
            if event::poll(timeout)? {
                app.handle_event(event::read()?)?;
                if app.should_quit() {
                    break;
                }
            }
        }
        pacer.advance(Instant::now());

        if app.should_quit() {
            break;
        }

        app.end_frame();
        app.update();
        terminal.draw(|frame| app.render(frame))?;
    }

    let session = app.session();
    info!(
        "quit at {} on seed {}",
        session.avatar().pos(),
        session.seed()
    );
    Ok(())
}
