//! Round-level scenarios driven through `apply_action`.

use tui_round::core::{City, Dice, Hand, Round, Spot, TileBook};
use tui_round::types::{GameAction, BOARD_HEIGHT, BOARD_WIDTH};

fn round_with(city: City, hand: Hand) -> Round {
    Round::with_state(TileBook::standard().unwrap(), Dice::seeded(2024), city, hand)
}

#[test]
fn placing_a_held_tile_fills_the_cell_and_deals_a_new_one() {
    let mut round = round_with(City::new(), Hand::on_board(4, 2, 3));

    assert!(round.apply_action(GameAction::Place));

    assert_eq!(round.city().get(2, 3), 4);
    assert_eq!(round.city().occupied(), 1);
    assert!(!round.hand().is_onboard());
    assert!((1..=5).contains(&round.hand().code()));
}

#[test]
fn walking_onto_the_board_and_filling_a_row() {
    let mut round = Round::new(TileBook::standard().unwrap(), Dice::seeded(5));

    for x in 0..BOARD_WIDTH {
        assert!(round.apply_action(GameAction::MoveRight));
        for _ in 0..x {
            assert!(round.apply_action(GameAction::MoveRight));
        }
        assert_eq!(round.hand().position(), Some((x, 0)));
        let held = round.hand().code();
        assert!(round.apply_action(GameAction::Place));
        assert_eq!(round.city().get(x, 0), held);
    }

    assert_eq!(round.city().occupied(), BOARD_WIDTH as usize);
    assert!((0..BOARD_WIDTH).all(|x| !round.city().is_vacant(x, 0)));
    assert!((0..BOARD_WIDTH).all(|x| round.city().is_vacant(x, 1)));
}

#[test]
fn refused_actions_leave_the_round_untouched() {
    let mut city = City::new();
    city.place(0, 0, 3);
    let mut round = round_with(city, Hand::on_board(1, 0, 0));
    let before_city = round.city().clone();
    let before_hand = *round.hand();

    assert!(!round.apply_action(GameAction::Place));
    assert!(!round.apply_action(GameAction::MoveUp));

    assert_eq!(round.city(), &before_city);
    assert_eq!(round.hand(), &before_hand);
}

#[test]
fn leaving_by_the_left_edge_and_coming_back() {
    let mut round = round_with(City::new(), Hand::on_board(2, 0, BOARD_HEIGHT - 1));

    assert!(round.apply_action(GameAction::MoveLeft));
    assert_eq!(round.hand().spot(), Spot::Off { row: BOARD_HEIGHT - 1 });
    assert!(!round.apply_action(GameAction::MoveDown));

    assert!(round.apply_action(GameAction::MoveRight));
    assert_eq!(round.hand().position(), Some((0, BOARD_HEIGHT - 1)));
}

#[test]
fn redraw_swaps_the_tile_and_takes_it_off_the_board() {
    let mut round = round_with(City::new(), Hand::on_board(1, 3, 3));

    assert!(round.apply_action(GameAction::Redraw));

    assert!(!round.hand().is_onboard());
    assert!(round.book().drawable().contains(&round.hand().code()));
    assert_eq!(round.city().occupied(), 0);
}
