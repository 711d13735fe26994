//! End-to-end properties of the game controller and its history.

use timeline_tictactoe::{
    Board, Game, GameStatus, MoveOrder, Player, Position, Snapshot, describe_moves,
    evaluate_winner,
};

fn play(game: &mut Game, cells: &[usize]) {
    for &i in cells {
        game.click(Position::ALL[i]);
    }
}

/// Visits every game reachable by clicking from the empty board.
fn visit_reachable(game: &Game, visit: &mut impl FnMut(&Game)) {
    visit(game);
    for pos in Position::ALL {
        if let Ok(snapshot) = game.board_view().click(pos) {
            let mut next = game.clone();
            next.play(snapshot);
            visit_reachable(&next, visit);
        }
    }
}

#[test]
fn test_reachable_snapshots_alternate_marks() {
    let mut checked = 0usize;
    visit_reachable(&Game::new(), &mut |game| {
        let board = game.current_squares();
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        assert!(x == o || x == o + 1, "x={} o={} on\n{}", x, o, board.display());
        checked += 1;
    });
    // Every distinct move sequence, including the empty one.
    assert_eq!(checked, 549_946);
}

#[test]
fn test_diagonal_win_scenario() {
    let mut game = Game::new();
    play(&mut game, &[0, 1, 4, 2, 8]);

    let line = evaluate_winner(game.current_squares()).expect("X completed the diagonal");
    assert_eq!(line.player, Player::X);
    assert_eq!(
        line.cells,
        [Position::TopLeft, Position::Center, Position::BottomRight]
    );
    assert_eq!(game.status().to_string(), "Winner: X");

    let before = game.clone();
    for pos in Position::ALL {
        assert!(!game.click(pos));
    }
    assert_eq!(game, before);
}

#[test]
fn test_full_board_draw_scenario() {
    let mut game = Game::new();
    // X O X / X O O / O X X
    play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(game.current_squares().occupied(), 9);
    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(game.status().to_string(), "It's a draw!");
}

#[test]
fn test_play_from_middle_truncates() {
    let mut game = Game::new();
    play(&mut game, &[0, 1, 2]);
    let [s0, s1, _, _] = <[Snapshot; 4]>::try_from(game.history()).expect("four snapshots");

    game.jump_to(1).unwrap();
    let s1_alt = s1.successor(Position::BottomRight, Player::O);
    game.play(s1_alt);

    assert_eq!(game.history(), &[s0, s1, s1_alt]);
    assert_eq!(game.current_move(), 2);
}

#[test]
fn test_jump_to_start_restores_empty_board() {
    let mut game = Game::new();
    play(&mut game, &[4, 0, 8, 2]);
    game.jump_to(0).unwrap();
    assert_eq!(game.current_squares(), &Board::new());
    assert!(game.x_is_next());
    assert_eq!(game.status().to_string(), "Next player: X");
}

#[test]
fn test_jump_back_reopens_finished_game() {
    let mut game = Game::new();
    play(&mut game, &[0, 1, 4, 2, 8]);
    assert!(game.status().is_terminal());

    game.jump_to(4).unwrap();
    assert!(!game.status().is_terminal());
    assert!(game.click(Position::MiddleLeft));
    assert_eq!(game.history().len(), 6);
    assert_eq!(game.current_move(), 5);
}

#[test]
fn test_reordering_is_presentation_only() {
    let mut game = Game::new();
    play(&mut game, &[4, 0, 8]);
    let before = game.clone();

    let entries = describe_moves(game.history(), game.current_move());
    let reversed = MoveOrder::NewestFirst.arrange(entries.clone());
    let numbers: Vec<usize> = reversed.iter().map(|e| e.move_number).collect();
    assert_eq!(numbers, vec![3, 2, 1, 0]);
    assert_eq!(game, before);
}
