//! One run of the game: maze, search state, path animation, manual moves.

use std::time::Duration;

use mazo_core::{ConfigError, Direction, Maze, Point};
use mazo_paths::{AStar, BreadthFirst, DepthFirst, Search, StepResult};

/// How often one search step runs while searching.
pub const STEP_INTERVAL: Duration = Duration::from_millis(30);

/// How often the character advances one path cell while animating.
pub const MOVE_INTERVAL: Duration = Duration::from_millis(80);

/// How a session is driven: one of the three searches, or by hand.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    BreadthFirst,
    DepthFirst,
    AStar,
    Manual,
}

impl Mode {
    /// Parse a mode name as used on the command line.
    pub fn from_name(name: &str) -> Option<Mode> {
        match name {
            "bfs" => Some(Mode::BreadthFirst),
            "dfs" => Some(Mode::DepthFirst),
            "astar" => Some(Mode::AStar),
            "manual" => Some(Mode::Manual),
            _ => None,
        }
    }
}

/// Where the session is in its life cycle. Mode selection and quitting
/// belong to the host loop, not the session.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// A search is running, one step per step interval.
    Searching,
    /// A path was found (or the mode is manual) and the character moves.
    Animating,
    /// The character reached the goal.
    Won,
    /// The search emptied its frontier: the goal is unreachable. Terminal,
    /// and not an error.
    Exhausted,
}

/// Everything a renderer needs for one frame, borrowed from the session.
pub struct Snapshot<'a> {
    pub maze: &'a Maze,
    /// Search trail (search modes) or manual movement trail, in discovery
    /// order.
    pub visited: &'a [Point],
    /// The discovered start-to-goal path, once a search has found one.
    pub path: Option<&'a [Point]>,
    pub position: Point,
    pub move_count: u32,
    pub path_length: Option<usize>,
    pub is_won: bool,
    pub is_searching: bool,
    pub is_exhausted: bool,
}

/// A single run over one maze.
///
/// The host loop calls [`Session::advance`] once per frame with the elapsed
/// time and [`Session::handle_directional_input`] for key presses, then
/// renders [`Session::snapshot`]. All work is synchronous and bounded; the
/// session never sleeps or blocks.
pub struct Session {
    maze: Maze,
    mode: Mode,
    start: Point,
    goal: Point,
    search: Option<Box<dyn Search>>,
    path: Option<Vec<Point>>,
    path_index: usize,
    position: Point,
    move_count: u32,
    trail: Vec<Point>,
    trail_seen: Vec<bool>,
    phase: Phase,
    step_interval: Duration,
    move_interval: Duration,
    step_acc: Duration,
    move_acc: Duration,
}

impl Session {
    /// Create a session over `maze`. Search modes build their stepper here;
    /// manual mode goes straight to hand-driven animation.
    pub fn new(maze: Maze, mode: Mode, start: Point, goal: Point) -> Result<Self, ConfigError> {
        maze.idx(start).ok_or(ConfigError::OutOfBounds(start))?;
        maze.idx(goal).ok_or(ConfigError::OutOfBounds(goal))?;
        if start == goal {
            return Err(ConfigError::StartIsGoal(start));
        }
        let search = build_search(&maze, mode, start, goal)?;
        let phase = if search.is_some() {
            Phase::Searching
        } else {
            Phase::Animating
        };
        let trail_seen = vec![false; maze.len()];
        Ok(Self {
            maze,
            mode,
            start,
            goal,
            search,
            path: None,
            path_index: 0,
            position: start,
            move_count: 0,
            trail: Vec::new(),
            trail_seen,
            phase,
            step_interval: STEP_INTERVAL,
            move_interval: MOVE_INTERVAL,
            step_acc: Duration::ZERO,
            move_acc: Duration::ZERO,
        })
    }

    /// Override the step and move cadence (mostly for tests and replays).
    pub fn with_intervals(mut self, step: Duration, mv: Duration) -> Self {
        self.step_interval = step;
        self.move_interval = mv;
        self
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Advance the session clock. Performs at most one search step and at
    /// most one path move per call, gated on the configured intervals, so
    /// work per frame stays bounded no matter how large `elapsed` is.
    pub fn advance(&mut self, elapsed: Duration) {
        match self.phase {
            Phase::Searching => {
                self.step_acc += elapsed;
                if self.step_acc >= self.step_interval {
                    self.step_acc = Duration::ZERO;
                    self.search_step();
                }
            }
            Phase::Animating => self.animate(elapsed),
            Phase::Won | Phase::Exhausted => {}
        }
    }

    fn search_step(&mut self) {
        let Some(search) = self.search.as_mut() else {
            return;
        };
        match search.step(&self.maze) {
            StepResult::Continue => {}
            StepResult::Found(path) => {
                log::debug!("search found a path of {} cells", path.len());
                self.path = Some(path);
                self.path_index = 0;
                self.phase = Phase::Animating;
            }
            StepResult::Exhausted => {
                log::debug!("search exhausted its frontier; goal unreachable");
                self.phase = Phase::Exhausted;
            }
        }
    }

    fn animate(&mut self, elapsed: Duration) {
        // Manual mode has no path; the character only moves on input.
        let Some(path) = &self.path else {
            return;
        };
        self.move_acc += elapsed;
        if self.move_acc < self.move_interval {
            return;
        }
        self.move_acc = Duration::ZERO;
        if self.path_index < path.len() {
            self.position = path[self.path_index];
            self.path_index += 1;
        }
        if self.position == self.goal {
            log::debug!("character reached the goal");
            self.phase = Phase::Won;
        }
    }

    /// Attempt a manual move. Only meaningful in manual mode before the
    /// goal is reached; a move into a wall or out of bounds is silently
    /// ignored.
    pub fn handle_directional_input(&mut self, dir: Direction) {
        if self.mode != Mode::Manual || self.phase == Phase::Won {
            return;
        }
        let dest = self.position + dir.delta();
        if !self.maze.is_floor(dest) {
            return;
        }
        self.position = dest;
        self.move_count += 1;
        if let Some(i) = self.maze.idx(dest) {
            if !self.trail_seen[i] {
                self.trail_seen[i] = true;
                self.trail.push(dest);
            }
        }
        if self.position == self.goal {
            log::debug!("manual run reached the goal in {} moves", self.move_count);
            self.phase = Phase::Won;
        }
    }

    /// Reset the session to its initial state on the same maze.
    pub fn restart(&mut self) {
        self.position = self.start;
        self.move_count = 0;
        self.path = None;
        self.path_index = 0;
        self.trail.clear();
        self.trail_seen.fill(false);
        self.step_acc = Duration::ZERO;
        self.move_acc = Duration::ZERO;
        match self.search.as_mut() {
            Some(search) => {
                search.reset();
                self.phase = Phase::Searching;
            }
            None => self.phase = Phase::Animating,
        }
    }

    /// Borrow the current state for rendering.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            maze: &self.maze,
            visited: match &self.search {
                Some(search) => search.visited(),
                None => &self.trail,
            },
            path: self.path.as_deref(),
            position: self.position,
            move_count: self.move_count,
            path_length: self.path.as_ref().map(Vec::len),
            is_won: self.phase == Phase::Won,
            is_searching: self.phase == Phase::Searching,
            is_exhausted: self.phase == Phase::Exhausted,
        }
    }
}

fn build_search(
    maze: &Maze,
    mode: Mode,
    start: Point,
    goal: Point,
) -> Result<Option<Box<dyn Search>>, ConfigError> {
    Ok(match mode {
        Mode::BreadthFirst => Some(Box::new(BreadthFirst::new(maze, start, goal)?)),
        Mode::DepthFirst => Some(Box::new(DepthFirst::new(maze, start, goal)?)),
        Mode::AStar => Some(Box::new(AStar::new(maze, start, goal)?)),
        Mode::Manual => None,
    })
}
