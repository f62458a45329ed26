// Engine-level tests for the search agent

use std::fmt;
use std::rc::Rc;
use std::thread;
use std::time::Duration;

use crate::game_repr::{Action, ActionList, Cell, GameState, Isolation, PlayerId};

mod search_tests;

// ==================== HELPER FUNCTIONS ====================

/// Both players placed, first player to move
pub fn placed(first: Cell, second: Cell) -> Isolation {
    Isolation::play(&[Action::Place(first), Action::Place(second)]).expect("valid placements")
}

/// Time `result()` spends entering a `Node::Slow` node
pub const SLOW_STEP: Duration = Duration::from_millis(100);

/// Shape of a synthetic game tree. Leaf values are from the first player's view.
pub enum Node {
    Leaf(f64),
    Branch(Vec<Node>),
    /// Same as the inner node, but moving into it takes `SLOW_STEP`
    Slow(Box<Node>),
}

impl Node {
    pub fn slow(inner: Node) -> Self {
        Node::Slow(Box::new(inner))
    }
}

/// Flattened synthetic tree shared by every state that walks it
struct TreeSpec {
    children: Vec<Vec<usize>>,
    values: Vec<f64>,
    slow: Vec<bool>,
}

/// Game whose states are nodes of a fixed tree; actions are child positions.
#[derive(Clone)]
pub struct TreeGame {
    spec: Rc<TreeSpec>,
    node: usize,
    ply: u32,
}

impl fmt::Debug for TreeGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TreeGame(node {}, ply {})", self.node, self.ply)
    }
}

impl TreeGame {
    pub fn new(root: Node) -> Self {
        let mut spec = TreeSpec {
            children: Vec::new(),
            values: Vec::new(),
            slow: Vec::new(),
        };
        flatten(&root, &mut spec);
        Self {
            spec: Rc::new(spec),
            node: 0,
            ply: 0,
        }
    }
}

fn flatten(node: &Node, spec: &mut TreeSpec) -> usize {
    if let Node::Slow(inner) = node {
        let id = flatten(inner, spec);
        spec.slow[id] = true;
        return id;
    }

    let id = spec.children.len();
    spec.children.push(Vec::new());
    spec.values.push(0.0);
    spec.slow.push(false);

    match node {
        Node::Leaf(value) => spec.values[id] = *value,
        Node::Branch(children) => {
            for child in children {
                let child_id = flatten(child, spec);
                spec.children[id].push(child_id);
            }
        }
        Node::Slow(_) => unreachable!(),
    }
    id
}

impl GameState for TreeGame {
    type Action = usize;

    fn actions(&self) -> ActionList<usize> {
        (0..self.spec.children[self.node].len()).collect()
    }

    fn result(&self, action: usize) -> Self {
        let node = self.spec.children[self.node][action];
        if self.spec.slow[node] {
            thread::sleep(SLOW_STEP);
        }

        Self {
            spec: Rc::clone(&self.spec),
            node,
            ply: self.ply + 1,
        }
    }

    fn terminal_test(&self) -> bool {
        self.spec.children[self.node].is_empty()
    }

    fn utility(&self, player: PlayerId) -> f64 {
        let value = self.spec.values[self.node];
        match player {
            PlayerId::First => value,
            PlayerId::Second => -value,
        }
    }

    fn liberties(&self, _loc: Option<Cell>) -> ActionList<Cell> {
        ActionList::new()
    }

    fn locs(&self) -> [Option<Cell>; 2] {
        [None, None]
    }

    fn ply_count(&self) -> u32 {
        self.ply
    }

    fn placement(&self, _cell: Cell) -> Option<usize> {
        None
    }
}

/// Plain minimax without pruning or depth limit
pub fn exhaustive_minimax<S: GameState>(state: &S, player: PlayerId, maximizing: bool) -> f64 {
    if state.terminal_test() {
        return state.utility(player);
    }

    let values = state
        .actions()
        .into_iter()
        .map(|a| exhaustive_minimax(&state.result(a), player, !maximizing));

    if maximizing {
        values.fold(f64::NEG_INFINITY, f64::max)
    } else {
        values.fold(f64::INFINITY, f64::min)
    }
}

/// Tree with leaves at depth 2, values given row by row
pub fn two_ply(rows: &[&[f64]]) -> Node {
    Node::Branch(
        rows.iter()
            .map(|row| Node::Branch(row.iter().map(|&v| Node::Leaf(v)).collect()))
            .collect(),
    )
}
