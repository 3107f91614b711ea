use crate::{
    algorithm::index::PlacementIndex,
    algorithm::selection::select_next_cell,
    io::error::{Result, invariant_violation},
    io::render::{RenderedCell, render},
    spatial::board::{Board, Position},
    spatial::pattern::{Direction, Pattern, restriction_name},
    spatial::pieces::PieceCatalog,
};
use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, info, trace};

/// Runtime parameters for one solve attempt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    /// Pattern every outward-facing edge must carry
    pub border: Pattern,
    /// Stop once this many place/unplace operations have been performed
    ///
    /// Checked only before forward steps, so an aborted search leaves the
    /// board and index consistent.
    pub movement_budget: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            border: Pattern::Border,
            movement_budget: None,
        }
    }
}

/// Phase of the place/backtrack state machine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchState {
    /// Next step attempts a forward placement
    Searching,
    /// Next step undoes placements until an untried candidate is found
    Backtracking,
    /// Every cell is occupied
    Solved,
    /// Every alternative from the seed placement has been tried
    Exhausted,
    /// The movement budget ran out
    Aborted,
}

impl SearchState {
    /// Test if no further steps will change the board
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Solved | Self::Exhausted | Self::Aborted)
    }
}

/// Backtracking search over one board and its placement index
///
/// Owns all mutable state of an attempt. Concurrent attempts each build their
/// own `Search`.
pub struct Search {
    board: Board,
    index: PlacementIndex,
    /// Cells in the order they were filled; the last entry is undone first
    history: Vec<Position>,
    state: SearchState,
    config: SolverConfig,
    backtracks: u64,
    steps: u64,
}

impl Search {
    /// Build the index and board for a catalog and place the seed piece
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The catalog size is not a non-zero perfect square
    /// - No piece fits the anchor corner
    pub fn new(catalog: &PieceCatalog, config: SolverConfig) -> Result<Self> {
        let size = catalog.side_len()?;
        let mut index = PlacementIndex::build(catalog);
        let mut board = Board::new(size, config.border)?;

        let seed = board.seed(&mut index)?;
        if let Some(placement) = index.placement(seed) {
            debug!(
                "Seeded {} with piece {} facing {}",
                Position::ANCHOR,
                placement.piece_id(),
                placement.orientation()
            );
        }

        let state = if board.is_solved() {
            SearchState::Solved
        } else {
            SearchState::Searching
        };

        Ok(Self {
            board,
            index,
            history: vec![Position::ANCHOR],
            state,
            config,
            backtracks: 0,
            steps: 0,
        })
    }

    /// Advance the state machine by one forward step or one chained backtrack
    ///
    /// Terminal states are returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns an invariant violation if board, index and history disagree
    pub fn step(&mut self) -> Result<SearchState> {
        self.state = match self.state {
            SearchState::Searching => self.forward()?,
            SearchState::Backtracking => self.backtrack()?,
            terminal => terminal,
        };
        self.steps += 1;
        Ok(self.state)
    }

    /// Step until a terminal state is reached
    ///
    /// # Errors
    ///
    /// Returns an invariant violation if board, index and history disagree
    pub fn run(&mut self) -> Result<SearchState> {
        while !self.state.is_terminal() {
            self.step()?;
        }
        Ok(self.state)
    }

    fn forward(&mut self) -> Result<SearchState> {
        if let Some(budget) = self.config.movement_budget {
            if self.board.movements() >= budget {
                info!("Movement budget of {budget} exhausted");
                return Ok(SearchState::Aborted);
            }
        }

        let choice = select_next_cell(&self.board, &self.index).ok_or_else(|| {
            invariant_violation(
                "select_next_cell",
                &format!(
                    "no open cell has enough known edges with {} of {} placed",
                    self.board.placed_count(),
                    self.board.size() * self.board.size()
                ),
            )
        })?;

        debug!(
            "Will attempt piece #{} at {}",
            self.history.len() + 1,
            choice.position
        );
        if let Some(cell) = self.board.cell(choice.position) {
            let r = cell.restrictions();
            trace!(
                "  Restrictions: N={} E={} S={} W={} ({} available)",
                restriction_name(r.get(Direction::North)),
                restriction_name(r.get(Direction::East)),
                restriction_name(r.get(Direction::South)),
                restriction_name(r.get(Direction::West)),
                choice.available
            );
        }

        let candidates = self.index.candidates(choice.key);
        if candidates.is_empty() {
            debug!("  No remaining piece matches, backtracking");
            return Ok(SearchState::Backtracking);
        }

        self.board.set_pending(choice.position, candidates)?;
        let first = self.board.pop_pending(choice.position).ok_or_else(|| {
            invariant_violation("forward", &"candidate queue emptied before use")
        })?;
        self.place_logged(first, choice.position)?;

        Ok(if self.board.is_solved() {
            SearchState::Solved
        } else {
            SearchState::Searching
        })
    }

    fn backtrack(&mut self) -> Result<SearchState> {
        loop {
            let position = self
                .history
                .pop()
                .ok_or_else(|| invariant_violation("backtrack", &"placement history is empty"))?;

            debug!("Removing piece at {position}");
            self.board.unplace(&mut self.index, position)?;
            self.backtracks += 1;

            if let Some(next) = self.board.pop_pending(position) {
                self.place_logged(next, position)?;
                return Ok(if self.board.is_solved() {
                    SearchState::Solved
                } else {
                    SearchState::Searching
                });
            }

            self.board.clear_pending(position);
            if self.history.is_empty() {
                return Ok(SearchState::Exhausted);
            }
            trace!("  No more candidates for {position}, backtracking further");
        }
    }

    fn place_logged(&mut self, handle: usize, position: Position) -> Result<()> {
        if let Some(placement) = self.index.placement(handle) {
            debug!(
                "  Placing piece {} facing {} at {position}",
                placement.piece_id(),
                placement.orientation()
            );
        }
        self.board.place(&mut self.index, handle, position)?;
        self.history.push(position);
        Ok(())
    }

    /// Current phase
    pub const fn state(&self) -> SearchState {
        self.state
    }

    /// Board being filled
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Placement index backing the board
    pub const fn index(&self) -> &PlacementIndex {
        &self.index
    }

    /// Cells filled so far, in fill order
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Number of cells currently filled
    pub const fn placed_count(&self) -> usize {
        self.history.len()
    }

    /// Total place and unplace operations, including the seed
    pub const fn movement_count(&self) -> u64 {
        self.board.movements()
    }

    /// Number of placements undone while backtracking
    pub const fn backtrack_count(&self) -> u64 {
        self.backtracks
    }

    /// Number of state machine steps taken
    pub const fn step_count(&self) -> u64 {
        self.steps
    }
}

/// A completely filled board
#[derive(Debug, Clone)]
pub struct SolvedBoard {
    board: Board,
    index: PlacementIndex,
}

impl SolvedBoard {
    /// Filled board
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Index resolving the board's placement handles
    pub const fn index(&self) -> &PlacementIndex {
        &self.index
    }

    /// Piece and orientation of every cell, row-major
    pub fn render(&self) -> Vec<RenderedCell> {
        render(&self.board, &self.index)
    }
}

/// Result of one solve attempt
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    /// Terminal state the search stopped in
    pub state: SearchState,
    /// Place and unplace operations performed
    pub movements: u64,
    /// Placements undone while backtracking
    pub backtracks: u64,
    /// The filled board, present only when `state` is [`SearchState::Solved`]
    pub solution: Option<SolvedBoard>,
}

impl SolveOutcome {
    /// Total place and unplace operations performed
    pub const fn movement_count(&self) -> u64 {
        self.movements
    }

    /// Discard the statistics and keep the solution
    pub fn into_solution(self) -> Option<SolvedBoard> {
        self.solution
    }
}

/// Shuffle the catalog with `shuffle_seed` and search until solved or exhausted
///
/// The shuffle is the only source of randomness; the same seed always yields
/// the same outcome.
///
/// # Errors
///
/// Returns an error if the catalog is not square, no piece fits the anchor,
/// or an internal invariant is violated. Unsolvable shuffles are not errors.
pub fn solve(catalog: &PieceCatalog, shuffle_seed: u64, config: SolverConfig) -> Result<SolveOutcome> {
    let mut rng = StdRng::seed_from_u64(shuffle_seed);
    let shuffled = catalog.shuffled(&mut rng);

    let mut search = Search::new(&shuffled, config)?;
    let state = search.run()?;

    let movements = search.movement_count();
    let backtracks = search.backtrack_count();
    info!("Search finished as {state:?} after {movements} movements");

    let solution = if state == SearchState::Solved {
        search.board.check_consistency(&search.index)?;
        Some(SolvedBoard {
            board: search.board,
            index: search.index,
        })
    } else {
        None
    };

    Ok(SolveOutcome {
        state,
        movements,
        backtracks,
        solution,
    })
}
