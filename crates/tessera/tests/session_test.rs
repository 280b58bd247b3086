//! # Session Integration Test
//!
//! Config file -> session -> moves -> frames, end to end.

use tessera::{CellStyle, GameConfig, GameError, GameLoop, Session, TerminalSink};
use tessera_procedural::{CachePolicy, ChunkCoord, WorldCoord};
use tessera_ui::{MoveIntent, NamedColor, RecordingSink, RenderCommand};

/// Test: Default view around the origin spans x in [-7, 7) and y in [-4, 4).
#[test]
fn test_viewport_around_origin() {
    let session = Session::new(&GameConfig::default()).unwrap();
    let window = session.window();
    assert_eq!((window.min_x, window.max_x), (-7, 7));
    assert_eq!((window.min_y, window.max_y), (-4, 4));
    assert_eq!(session.viewport().marker_cell(), (7, 4));

    let tiles = session.visible_tiles().unwrap();
    assert_eq!(tiles.len(), 112);
    for tile in &tiles {
        let x = window.min_x + tile.screen_x as i32;
        let y = window.min_y + tile.screen_y as i32;
        assert_eq!(session.cache().get_tile(x, y).unwrap(), tile.kind);
    }
    // Four chunks around the origin.
    for coord in [ChunkCoord::new(-1, -1), ChunkCoord::new(0, -1), ChunkCoord::new(-1, 0), ChunkCoord::new(0, 0)] {
        assert!(session.cache().contains(coord));
    }
    assert_eq!(session.cache().len(), 4);
}

/// Test: Right, right, down ends at (2, 1) and the next frame is centered there.
#[test]
fn test_move_composition_recenters_frame() {
    let mut session = Session::new(&GameConfig::default()).unwrap();
    let before = session.visible_tiles().unwrap();

    for intent in [MoveIntent::Right, MoveIntent::Right, MoveIntent::Down] {
        let _ = session.apply_move(intent);
    }
    assert_eq!(session.position(), WorldCoord::new(2, 1));

    let after = session.visible_tiles().unwrap();
    // Shifted view: old cell (sx, sy) is new cell (sx - 2, sy - 1).
    for tile in &after {
        if tile.screen_x + 2 < 14 && tile.screen_y + 1 < 8 {
            let old = before[((tile.screen_y + 1) * 14 + tile.screen_x + 2) as usize];
            assert_eq!(old.kind, tile.kind);
        }
    }
}

/// Test: Walking away and back returns the same view.
#[test]
fn test_revisit_is_stable() {
    let mut game = GameLoop::new(Session::new(&GameConfig::default()).unwrap(), RecordingSink::new());
    let route = "d".repeat(60) + &"a".repeat(60) + "q";
    let stats = game.run_lines(route.as_bytes()).unwrap();
    assert_eq!(stats.moves, 120);

    let (session, sink) = game.into_parts();
    assert_eq!(session.position(), WorldCoord::ORIGIN);
    let frames = sink.frames();
    assert_eq!(frames.first(), frames.last());
}

/// Test: With stable trees, a radius-bounded session sees the same world.
#[test]
fn test_bounded_cache_same_world() {
    let bounded_config = GameConfig::from_toml_str("[cache]\nkind = \"radius\"\nchunks = 1\n").unwrap();
    let mut bounded = Session::new(&bounded_config).unwrap();
    let mut unbounded = Session::new(&GameConfig::default()).unwrap();

    for step in 0..150 {
        let intent = if step % 3 == 0 { MoveIntent::Up } else { MoveIntent::Left };
        let _ = bounded.apply_move(intent);
        let _ = unbounded.apply_move(intent);
        assert_eq!(bounded.frame().unwrap(), unbounded.frame().unwrap());
    }
    assert!(bounded.cache().len() < unbounded.cache().len());
    assert!(matches!(bounded.cache().policy(), CachePolicy::Radius { chunks: 1 }));
}

/// Test: Config file on disk drives the session.
#[test]
fn test_config_file() {
    let path = std::env::temp_dir().join(format!("tessera_session_test_{}.toml", std::process::id()));
    std::fs::write(&path, "[world]\nchunk_size = 16\nseed = 7\n\n[view]\nwidth = 5\nheight = 3\n\n[inventory]\nslots = 4\n")
        .unwrap();

    let config = GameConfig::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let mut session = Session::new(&config).unwrap();
    let frame = session.frame().unwrap();
    assert_eq!(frame.len(), 5 * 3 + 1 + 4);
    let RenderCommand::Cell { fill, .. } = frame[15];
    assert_eq!(fill, NamedColor::Red);
    assert_eq!(session.viewport().marker_cell(), (2, 1));
}

/// Test: Invalid config is reported, not patched up.
#[test]
fn test_invalid_config_rejected() {
    let mut config = GameConfig::default();
    config.view.height = 0;
    assert!(matches!(Session::new(&config), Err(GameError::Procedural(_))));
}

/// Test: Terminal output has one text row per map row plus the inventory row.
#[test]
fn test_terminal_frame_shape() {
    let sink = TerminalSink::new(Vec::new(), 40, CellStyle::Glyph);
    let mut game = GameLoop::new(Session::new(&GameConfig::default()).unwrap(), sink);
    game.redraw().unwrap();

    let (_, sink) = game.into_parts();
    let text = String::from_utf8(sink.into_inner()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 9);
    assert!(lines.iter().all(|l| l.chars().count() == 28));
    // Marker at column 7 of row 4, inventory row all white.
    assert_eq!(&lines[4][14..16], "@@");
    assert_eq!(lines[8], format!("{}{}", "^".repeat(18), " ".repeat(10)));
}
