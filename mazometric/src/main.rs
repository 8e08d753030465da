//! Headless demo front-end: generate the reference 14×15 maze, watch a
//! search solve it, print the result as ASCII.
//!
//! Usage: `mazometric [bfs|dfs|astar] [seed]`

use std::time::Duration;

use mazo_core::{Point, Tile};
use mazometric::{MOVE_INTERVAL, Mode, Session, Snapshot};
use rand::RngExt;

const COLS: i32 = 14;
const ROWS: i32 = 15;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let mode = match args.next() {
        Some(name) => Mode::from_name(&name)
            .ok_or_else(|| format!("unknown mode {name:?}, expected bfs, dfs or astar"))?,
        None => Mode::BreadthFirst,
    };
    if mode == Mode::Manual {
        return Err("manual mode needs an interactive front-end".into());
    }
    let seed: u64 = match args.next() {
        Some(s) => s.parse()?,
        None => rand::rng().random(),
    };

    let maze = mazo_gen::generate_maze(COLS, ROWS, seed)?;
    let start = maze.start();
    let goal = maze.goal();
    let mut session = Session::new(maze, mode, start, goal)?;

    // Drive the session with a simulated clock instead of sleeping.
    let tick = MOVE_INTERVAL.max(Duration::from_millis(30));
    for _ in 0..200_000 {
        session.advance(tick);
        let snap = session.snapshot();
        if snap.is_won || snap.is_exhausted {
            break;
        }
    }

    let snap = session.snapshot();
    print!("{}", render(&snap));
    println!("mode: {mode:?}  seed: {seed}");
    if snap.is_won {
        if let Some(len) = snap.path_length {
            println!("solved: path of {len} cells, {} cells explored", snap.visited.len());
        }
    } else if snap.is_exhausted {
        println!("no path exists: {} cells explored", snap.visited.len());
    }
    Ok(())
}

/// Render a snapshot as one character per cell: `@` character, `G` goal,
/// `*` path, `o` explored, `#` wall, `.` floor.
fn render(snap: &Snapshot<'_>) -> String {
    let maze = snap.maze;
    let mut out = String::new();
    for y in 0..maze.height() {
        for x in 0..maze.width() {
            let p = Point::new(x, y);
            let ch = if p == snap.position {
                '@'
            } else if p == maze.goal() {
                'G'
            } else if snap.path.is_some_and(|path| path.contains(&p)) {
                '*'
            } else if snap.visited.contains(&p) {
                'o'
            } else if maze.at(p) == Some(Tile::Wall) {
                '#'
            } else {
                '.'
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}
