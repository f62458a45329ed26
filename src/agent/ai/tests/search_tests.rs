// Tests for alpha-beta search and iterative deepening

use std::time::Duration;

use crate::agent::ai::{iterative_deepening_search, AlphaBeta, Deadline, Evaluator};
use crate::game_repr::{Action, Direction, GameState, Isolation, PlayerId};
use super::{exhaustive_minimax, placed, two_ply, Node, TreeGame, SLOW_STEP};

fn evaluator() -> Evaluator {
    Evaluator::default()
}

// ==================== ALPHA-BETA ====================

#[test]
fn test_textbook_tree_value() {
    let game = TreeGame::new(two_ply(&[&[3.0, 12.0, 8.0], &[2.0, 4.0, 6.0], &[14.0, 5.0, 2.0]]));
    let eval = evaluator();

    let result = AlphaBeta::new(PlayerId::First, &eval, Deadline::unbounded()).search(&game, 2);

    assert_eq!(result.score, 3.0);
    assert_eq!(result.best_move, Some(0));
    assert!(result.completed);
}

#[test]
fn test_pruning_matches_exhaustive_minimax() {
    let trees = vec![
        two_ply(&[&[3.0, 12.0, 8.0], &[2.0, 4.0, 6.0], &[14.0, 5.0, 2.0]]),
        two_ply(&[&[5.0, 1.0], &[7.0, 9.0, -3.0], &[0.0], &[6.0, 6.0, 8.0]]),
        Node::Branch(vec![
            Node::Branch(vec![
                Node::Branch(vec![Node::Leaf(4.0), Node::Leaf(-2.0)]),
                Node::Leaf(1.0),
            ]),
            Node::Branch(vec![
                Node::Branch(vec![Node::Leaf(8.0), Node::Leaf(3.0), Node::Leaf(10.0)]),
                Node::Branch(vec![Node::Leaf(-5.0)]),
            ]),
            Node::Leaf(-1.0),
        ]),
        Node::Branch(vec![
            Node::Branch(vec![Node::Leaf(f64::INFINITY), Node::Leaf(2.0)]),
            Node::Branch(vec![Node::Leaf(f64::NEG_INFINITY)]),
        ]),
    ];
    let eval = evaluator();

    for (i, tree) in trees.into_iter().enumerate() {
        let game = TreeGame::new(tree);
        let expected = exhaustive_minimax(&game, PlayerId::First, true);

        let result = AlphaBeta::new(PlayerId::First, &eval, Deadline::unbounded()).search(&game, 10);

        assert_eq!(result.score, expected, "tree {}", i);
    }
}

#[test]
fn test_pruning_matches_minimax_on_isolation_endgame() {
    // Cramped board so the full game tree is small enough to enumerate
    let mut blocked: Vec<usize> = (0..115).collect();
    for keep in [30, 57, 72, 84, 45, 16, 42, 68, 87, 99] {
        blocked.retain(|&c| c != keep);
    }
    let state = placed(30, 84).with_blocked(&blocked);
    let eval = evaluator();

    let expected = exhaustive_minimax(&state, PlayerId::First, true);
    let result = AlphaBeta::new(PlayerId::First, &eval, Deadline::unbounded()).search(&state, 20);

    assert_eq!(result.score, expected);
}

#[test]
fn test_pruning_visits_fewer_nodes() {
    let game = TreeGame::new(two_ply(&[&[3.0, 12.0, 8.0], &[2.0, 4.0, 6.0], &[14.0, 5.0, 2.0]]));
    let eval = evaluator();

    let mut search = AlphaBeta::new(PlayerId::First, &eval, Deadline::unbounded());
    search.search(&game, 2);

    // 3 min nodes + 9 leaves without pruning; the second branch stops after one leaf
    assert!(search.nodes() < 12, "visited {} nodes", search.nodes());
}

#[test]
fn test_later_action_wins_ties() {
    let game = TreeGame::new(Node::Branch(vec![Node::Leaf(5.0), Node::Leaf(5.0), Node::Leaf(1.0)]));
    let eval = evaluator();

    let result = AlphaBeta::new(PlayerId::First, &eval, Deadline::unbounded()).search(&game, 1);

    assert_eq!(result.best_move, Some(1));
    assert_eq!(result.score, 5.0);
}

#[test]
fn test_depth_zero_returns_static_evaluation() {
    let state = placed(57, 0);
    let eval = evaluator();

    let mut search = AlphaBeta::new(PlayerId::First, &eval, Deadline::unbounded());
    let result = search.search(&state, 0);

    assert_eq!(result.score, eval.score(&state, PlayerId::First));
    assert_eq!(result.best_move, None);
    assert_eq!(search.nodes(), 1, "no child should be expanded");
}

#[test]
fn test_expired_deadline_stops_before_first_root_action() {
    let state = placed(57, 0);
    let eval = evaluator();

    let result = AlphaBeta::new(PlayerId::First, &eval, Deadline::new(Duration::ZERO)).search(&state, 3);

    assert_eq!(result.best_move, None);
    assert!(!result.completed);
}

#[test]
fn test_search_returns_legal_action() {
    let state = placed(40, 70).with_blocked(&[14, 15, 16, 100]);
    let eval = evaluator();

    let result = AlphaBeta::new(PlayerId::First, &eval, Deadline::unbounded()).search(&state, 3);

    let action = result.best_move.expect("a move");
    assert!(state.actions().contains(&action));
}

#[test]
fn test_search_scores_for_the_second_player() {
    let state = Isolation::play(&[Action::Place(57), Action::Place(0), Action::Jump(Direction::Nne)])
        .unwrap();
    let eval = evaluator();

    assert_eq!(state.player(), PlayerId::Second);
    let result = AlphaBeta::new(PlayerId::Second, &eval, Deadline::unbounded()).search(&state, 2);

    assert!(state.actions().contains(&result.best_move.unwrap()));
}

// ==================== DEADLINE DURING TRAVERSAL ====================

/// Expires while the first slow step is still sleeping
fn cut_after_slow_step() -> Deadline {
    Deadline::new(SLOW_STEP / 2)
}

#[test]
fn test_root_stops_after_deadline_with_best_so_far() {
    // The deadline passes while entering the second child; the third (best)
    // child is never searched.
    let game = TreeGame::new(Node::Branch(vec![
        Node::Leaf(1.0),
        Node::slow(Node::Leaf(5.0)),
        Node::Leaf(9.0),
        Node::Leaf(7.0),
    ]));
    let eval = evaluator();

    let mut search = AlphaBeta::new(PlayerId::First, &eval, cut_after_slow_step());
    let result = search.search(&game, 1);

    assert_eq!(result.best_move, Some(1));
    assert_eq!(result.score, 5.0);
    assert!(!result.completed);
    assert_eq!(search.nodes(), 2);
}

#[test]
fn test_min_node_returns_partial_value_on_deadline() {
    let game = TreeGame::new(Node::Branch(vec![
        Node::Branch(vec![Node::slow(Node::Leaf(4.0)), Node::Leaf(2.0), Node::Leaf(-10.0)]),
        Node::Leaf(-20.0),
    ]));
    let eval = evaluator();

    let result = AlphaBeta::new(PlayerId::First, &eval, cut_after_slow_step()).search(&game, 2);

    // Untimed value would be -10; the min node stops after its first child
    assert_eq!(result.score, 4.0);
    assert_eq!(result.best_move, Some(0));
    assert!(!result.completed);
}

#[test]
fn test_max_node_returns_partial_value_on_deadline() {
    let game = TreeGame::new(Node::Branch(vec![Node::Branch(vec![Node::Branch(vec![
        Node::slow(Node::Leaf(3.0)),
        Node::Leaf(8.0),
    ])])]));
    let eval = evaluator();

    let result = AlphaBeta::new(PlayerId::First, &eval, cut_after_slow_step()).search(&game, 3);

    // Untimed value would be 8; the max node stops after its first child
    assert_eq!(result.score, 3.0);
    assert_eq!(result.best_move, Some(0));
    assert!(!result.completed);
}

// ==================== ITERATIVE DEEPENING ====================

#[test]
fn test_unlimited_time_reaches_depth_ceiling() {
    let state = placed(57, 0);
    let eval = evaluator();

    let result = iterative_deepening_search(&state, PlayerId::First, &eval, Deadline::unbounded(), 3);

    assert_eq!(result.depth, 3);
    assert!(result.completed);
    assert!(result.best_move.is_some());
    assert!(result.nodes > 0);
}

#[test]
fn test_zero_budget_attempts_one_depth_only() {
    let state = placed(57, 0);
    let eval = evaluator();

    let result = iterative_deepening_search(&state, PlayerId::First, &eval, Deadline::new(Duration::ZERO), 20);

    assert_eq!(result.depth, 1);
    assert_eq!(result.best_move, None);
    assert!(!result.completed);
}

#[test]
fn test_deepening_never_drops_a_found_move() {
    let state = placed(57, 0);
    let eval = evaluator();

    let result = iterative_deepening_search(&state, PlayerId::First, &eval, Deadline::new(Duration::from_millis(30)), 20);

    assert!(result.depth >= 1);
    let action = result.best_move.expect("depth 1 finishes well within 30ms");
    assert!(state.actions().contains(&action));
}

#[test]
fn test_zero_ceiling_still_searches_depth_one() {
    let game = TreeGame::new(Node::Branch(vec![Node::Leaf(-1.0), Node::Leaf(2.0)]));
    let eval = evaluator();

    let result = iterative_deepening_search(&game, PlayerId::First, &eval, Deadline::unbounded(), 0);

    assert_eq!(result.depth, 1);
    assert_eq!(result.best_move, Some(1));
}

#[test]
fn test_deeper_iteration_overrides_frontier_guess() {
    // Depth 1 sees only frontier evaluations (0.0 for every child), so it
    // picks the last child; depth 2 reaches the leaves and picks the winner.
    let game = TreeGame::new(two_ply(&[&[4.0, 9.0], &[-3.0, 1.0]]));
    let eval = evaluator();

    let result = iterative_deepening_search(&game, PlayerId::First, &eval, Deadline::unbounded(), 2);

    assert_eq!(result.best_move, Some(0));
    assert_eq!(result.score, 4.0);
    assert_eq!(result.depth, 2);
}

#[test]
fn test_equal_score_goes_to_deeper_iteration() {
    // Depth 1 scores both children 0.0 at the frontier and keeps the later one.
    // Depth 2 also backs up 0.0, but through the first child.
    let tree = || two_ply(&[&[0.0, 3.0], &[-1.0, 5.0]]);
    let eval = evaluator();

    let shallow = AlphaBeta::new(PlayerId::First, &eval, Deadline::unbounded()).search(&TreeGame::new(tree()), 1);
    assert_eq!(shallow.best_move, Some(1));
    assert_eq!(shallow.score, 0.0);

    let result = iterative_deepening_search(&TreeGame::new(tree()), PlayerId::First, &eval, Deadline::unbounded(), 2);

    assert_eq!(result.best_move, Some(0));
    assert_eq!(result.score, 0.0);
    assert_eq!(result.depth, 2);
}

#[test]
fn test_truncated_iteration_adopted_when_not_worse() {
    // Depth 1 completes with score 0.0 on the second child. Depth 2 is cut
    // inside the first child with a partial score of 2.0 and still wins.
    let game = TreeGame::new(Node::Branch(vec![
        Node::Branch(vec![Node::slow(Node::Leaf(2.0)), Node::Leaf(6.0)]),
        Node::Branch(vec![Node::Leaf(-3.0)]),
    ]));
    let eval = evaluator();

    let result = iterative_deepening_search(&game, PlayerId::First, &eval, cut_after_slow_step(), 20);

    assert_eq!(result.best_move, Some(0));
    assert_eq!(result.score, 2.0);
    assert_eq!(result.depth, 2);
    assert!(!result.completed);
}
