//! Scripted game trees that satisfy the Game Engine contract.
//!
//! A `SyntheticTree` is an explicit arena of nodes, each carrying the score of
//! seat 0 at that node (seat 1 always scores zero). Leaves are terminal. The
//! trees let the search be checked against brute-force minimax and timed
//! without a real board behind it.

use std::sync::Arc;

use rand::Rng;

use crate::game_state::divercite_types::{
    BoardLocation, CellContent, Direction, Inventory, Neighbor, Piece, PieceCategory, PlayerId,
    ResourceColor,
};
use crate::game_state::game_engine::{EngineError, EngineResult, GameEngineState, GeneratedAction};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntheticNode {
    pub score: i32,
    pub children: Vec<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyntheticTree {
    pub nodes: Vec<SyntheticNode>,
}

impl SyntheticTree {
    /// Random tree of exactly `depth` plies below the root. Every internal
    /// node gets between 1 and `max_branching` children; scores are drawn from
    /// `-score_range..=score_range`.
    pub fn random<R: Rng>(rng: &mut R, depth: u8, max_branching: usize, score_range: i32) -> Self {
        let mut tree = SyntheticTree::default();
        tree.grow(rng, depth, max_branching.max(1), score_range.abs());
        tree
    }

    fn grow<R: Rng>(&mut self, rng: &mut R, depth: u8, max_branching: usize, range: i32) -> usize {
        let index = self.nodes.len();
        self.nodes.push(SyntheticNode {
            score: rng.random_range(-range..=range),
            children: Vec::new(),
        });

        if depth > 0 {
            let branching = rng.random_range(1..=max_branching);
            for _ in 0..branching {
                let child = self.grow(rng, depth - 1, max_branching, range);
                self.nodes[index].children.push(child);
            }
        }

        index
    }

    /// Height of the subtree rooted at `index`.
    pub fn height(&self, index: usize) -> u32 {
        self.nodes[index]
            .children
            .iter()
            .map(|&child| 1 + self.height(child))
            .max()
            .unwrap_or(0)
    }

    pub fn root(self) -> SyntheticState {
        SyntheticState {
            tree: Arc::new(self),
            node: 0,
            ply: 0,
        }
    }
}

/// Cursor into a shared `SyntheticTree`. Seat `ply % 2` is to move.
#[derive(Debug, Clone)]
pub struct SyntheticState {
    tree: Arc<SyntheticTree>,
    node: usize,
    ply: u32,
}

impl SyntheticState {
    fn child(&self, index: usize) -> Self {
        Self {
            tree: Arc::clone(&self.tree),
            node: index,
            ply: self.ply + 1,
        }
    }
}

impl GameEngineState for SyntheticState {
    /// Index of the child node.
    type Action = usize;

    fn players(&self) -> Vec<PlayerId> {
        vec![PlayerId(0), PlayerId(1)]
    }

    fn side_to_move(&self) -> PlayerId {
        PlayerId((self.ply % 2) as u8)
    }

    fn is_terminal(&self) -> bool {
        self.tree.nodes[self.node].children.is_empty()
    }

    fn legal_actions(&self) -> EngineResult<Vec<GeneratedAction<Self>>> {
        Ok(self.tree.nodes[self.node]
            .children
            .iter()
            .map(|&child| GeneratedAction {
                action: child,
                state_after: self.child(child),
            })
            .collect())
    }

    fn apply(&self, action: &usize) -> EngineResult<Self> {
        if !self.tree.nodes[self.node].children.contains(action) {
            return Err(EngineError::IllegalAction(format!(
                "node {action} is not a child of node {}",
                self.node
            )));
        }
        Ok(self.child(*action))
    }

    fn score(&self, player: PlayerId) -> i32 {
        if player == PlayerId(0) {
            self.tree.nodes[self.node].score
        } else {
            0
        }
    }

    /// The remaining height is reported as red resources of the mover so the
    /// ply bound of the controller matches the tree.
    fn remaining_inventory(&self, player: PlayerId) -> Inventory {
        let mut inventory = Inventory::empty();
        if player == self.side_to_move() {
            let height = self.tree.height(self.node).min(u32::from(u8::MAX)) as u8;
            inventory.set(PieceCategory::Resource, ResourceColor::Red, height);
        }
        inventory
    }

    fn city_cells(&self) -> Vec<(BoardLocation, Piece)> {
        Vec::new()
    }

    fn neighbors(&self, location: BoardLocation) -> [Neighbor; 4] {
        Direction::ALL.map(|direction| Neighbor {
            direction,
            content: CellContent::OutOfBounds,
            location: location.offset(direction),
        })
    }
}
