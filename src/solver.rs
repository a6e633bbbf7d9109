//! A* best-first search for the Fore & Aft puzzle.
//!
//! The engine keeps a min-priority frontier ordered by `f = g + h`, a
//! g-score table of the best known cost per board key, and a closed set of
//! finalized keys. Stale frontier entries are tolerated and discarded
//! lazily on pop: only the first pop of a key is expanded, every later
//! duplicate is dropped. The loop is iterative, single-threaded, and free
//! of I/O; an optional wall-clock deadline is checked once per iteration.
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::time::{Duration, Instant};

use thiserror::Error;

use crate::engine::{generate_moves, Board, Move, Piece};
use crate::heuristics::{estimate, GoalPositions};

/// Failure modes of a solve invocation.
///
/// The first two reject the input before the search starts; the last two
/// are legitimate search outcomes, returned so a caller can tell a truly
/// unsolvable instance apart from one that merely ran out of time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SolveError {
    /// Board dimension is unusable: zero, even, or the two boards disagree.
    #[error("invalid board dimension: {0}")]
    InvalidDimension(String),

    /// A board violates a structural precondition of the puzzle.
    #[error("malformed board: {0}")]
    MalformedBoard(String),

    /// The frontier emptied without reaching the goal; no solution exists.
    /// Carries the number of states expanded before the frontier ran dry.
    #[error("search space exhausted after expanding {expanded} states, the instance is unsolvable")]
    Exhausted { expanded: u64 },

    /// The optional time budget elapsed before the search finished.
    #[error("search aborted, deadline exceeded")]
    DeadlineExceeded,
}

/// A solution returned by [`solve`].
#[derive(Clone, Debug)]
pub struct Solution {
    /// Move sequence transforming the initial board into the goal.
    pub moves: Vec<Move>,
    /// The goal board as reached by the search.
    pub final_board: Board,
    /// Number of distinct states expanded, for reporting.
    pub expanded: u64,
}

/// One frontier entry. Each node owns its board and its full move list from
/// the initial board; move lists are append-only copies, never shared, so a
/// sibling path can never corrupt another's history.
#[derive(Clone, Eq, PartialEq)]
struct SearchNode {
    f: u32,
    g: u32,
    /// Insertion counter; breaks f ties deterministically in FIFO order.
    seq: u64,
    board: Board,
    moves: Vec<Move>,
}

impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for a min-heap: lowest f first, then earliest insertion.
        other.f.cmp(&self.f).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Rejects invalid inputs before any search state is allocated.
///
/// Checks, in order: equal positive odd dimension, exactly one empty cell
/// per board, the supplied anchor matching the initial board's empty cell,
/// identical blocked-cell coordinates, and matching per-color piece counts.
fn validate(
    initial: &Board,
    goal: &Board,
    empty_anchor: (usize, usize),
) -> Result<(), SolveError> {
    let size = initial.size();
    if size == 0 || size % 2 == 0 {
        return Err(SolveError::InvalidDimension(format!(
            "expected a positive odd dimension, got {}",
            size
        )));
    }
    if goal.size() != size {
        return Err(SolveError::InvalidDimension(format!(
            "initial board is {0}x{0} but goal board is {1}x{1}",
            size,
            goal.size()
        )));
    }

    let initial_empty = initial.find_empty()?;
    goal.find_empty()?;
    if initial_empty != empty_anchor {
        return Err(SolveError::MalformedBoard(format!(
            "empty anchor {:?} does not match the initial empty cell {:?}",
            empty_anchor, initial_empty
        )));
    }

    for r in 0..size {
        for c in 0..size {
            if (initial.get(r, c) == Piece::Block) != (goal.get(r, c) == Piece::Block) {
                return Err(SolveError::MalformedBoard(format!(
                    "blocked cells differ between boards at ({},{})",
                    r, c
                )));
            }
        }
    }

    for color in [Piece::Red, Piece::Blue] {
        if initial.count(color) != goal.count(color) {
            return Err(SolveError::MalformedBoard(format!(
                "piece counts differ between boards: initial has {} {:?}, goal has {}",
                initial.count(color),
                color,
                goal.count(color)
            )));
        }
    }
    Ok(())
}

/// Searches for a short move sequence from `initial` to `goal`.
///
/// The goal test requires both cell-wise equality with `goal` and the empty
/// cell standing on `empty_anchor` again: the puzzle demands the empty slot
/// return home, not merely that the colors match. With `deadline` set, the
/// elapsed wall-clock time is checked once per loop iteration and the
/// search aborts with [`SolveError::DeadlineExceeded`], returning no
/// partial result.
///
/// The search is deterministic: fixed move enumeration order plus FIFO
/// tie-breaking within equal f means the same input always yields the same
/// sequence. The distance estimate can exceed the true remaining cost
/// where jumps pay off (see [`crate::heuristics`]), so the returned
/// sequence is shortest under the estimate's guidance but may run a few
/// moves past the true optimum on jump-heavy instances; on positions the
/// estimate never overestimates, it is exactly minimal. Memory grows with
/// the number of distinct reachable states.
pub fn solve(
    initial: &Board,
    goal: &Board,
    empty_anchor: (usize, usize),
    deadline: Option<Duration>,
) -> Result<Solution, SolveError> {
    validate(initial, goal, empty_anchor)?;

    let goals = GoalPositions::from_board(goal);
    let started = Instant::now();

    let mut frontier = BinaryHeap::new();
    let mut closed: HashSet<String> = HashSet::new();
    let mut best_g: HashMap<String, u32> = HashMap::new();
    let mut seq: u64 = 0;
    let mut expanded: u64 = 0;

    let h0 = estimate(initial, &goals);
    frontier.push(SearchNode {
        f: h0,
        g: 0,
        seq,
        board: initial.clone(),
        moves: Vec::new(),
    });
    best_g.insert(initial.key(), 0);

    while let Some(node) = frontier.pop() {
        if let Some(limit) = deadline {
            if started.elapsed() >= limit {
                return Err(SolveError::DeadlineExceeded);
            }
        }

        let key = node.board.key();
        if !closed.insert(key) {
            // Stale frontier duplicate; an earlier pop already finalized
            // this state at an equal or lower g.
            continue;
        }
        expanded += 1;

        if node.board == *goal && node.board.find_empty()? == empty_anchor {
            return Ok(Solution {
                moves: node.moves,
                final_board: node.board,
                expanded,
            });
        }

        for mv in generate_moves(&node.board) {
            let successor = node.board.apply_move(&mv);
            let successor_key = successor.key();
            if closed.contains(&successor_key) {
                continue;
            }

            let tentative_g = node.g + 1;
            let known = best_g.get(&successor_key).copied();
            if known.map_or(true, |g| tentative_g < g) {
                best_g.insert(successor_key, tentative_g);
                let h = estimate(&successor, &goals);
                let mut moves = node.moves.clone();
                moves.push(mv);
                seq += 1;
                frontier.push(SearchNode {
                    f: tentative_g + h,
                    g: tentative_g,
                    seq,
                    board: successor,
                    moves,
                });
            }
        }
    }

    Err(SolveError::Exhausted { expanded })
}

/// Replays `moves` from `initial`, returning every intermediate board.
///
/// The result starts with `initial` and has length `moves.len() + 1`. The
/// search itself never stores intermediate boards; the trail is rebuilt
/// post-hoc for reporting to bound per-state memory.
pub fn reconstruct_path(initial: &Board, moves: &[Move]) -> Vec<Board> {
    let mut path = Vec::with_capacity(moves.len() + 1);
    let mut board = initial.clone();
    path.push(board.clone());
    for mv in moves {
        board = board.apply_move(mv);
        path.push(board.clone());
    }
    path
}
