use super::*;

#[test]
fn test_mark_opponent() {
    assert_eq!(Mark::Human.opponent(), Mark::Engine);
    assert_eq!(Mark::Engine.opponent(), Mark::Human);
    assert_eq!(Mark::Empty.opponent(), Mark::Empty);
}

#[test]
fn test_mark_sign() {
    assert_eq!(Mark::Engine.sign(), 1);
    assert_eq!(Mark::Human.sign(), -1);
    assert_eq!(Mark::Empty.sign(), 0);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(1, 2);
    assert_eq!(pos.to_index(3), 5);
    assert_eq!(pos.to_index(4), 6);
    assert_eq!(Pos::from_index(5, 3), pos);
    assert_eq!(Pos::from_index(15, 4), Pos::new(3, 3));
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0, 3));
    assert!(Pos::is_valid(2, 2, 3));
    assert!(!Pos::is_valid(3, 0, 3));
    assert!(Pos::is_valid(3, 0, 4));
    assert!(!Pos::is_valid(-1, 0, 4));
    assert!(!Pos::is_valid(0, 4, 4));
    assert_eq!(Pos::checked(-1, -1, 3), None);
}

#[test]
fn test_pos_offset_stops_at_edge() {
    let corner = Pos::new(0, 0);
    assert_eq!(corner.offset(1, 1, 2, 3), Some(Pos::new(2, 2)));
    assert_eq!(corner.offset(1, 1, 3, 3), None);
    assert_eq!(corner.offset(1, -1, 1, 3), None);
}

#[test]
fn test_pos_ordering_is_row_major() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 2);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
}

#[test]
fn test_new_board_is_empty() {
    let board = Board4::new();
    assert_eq!(board.size(), 4);
    assert!(board.is_board_empty());
    assert!(!board.is_full());
    assert_eq!(board.empty_cells().count(), 16);
}

#[test]
fn test_empty_cells_row_major() {
    let board: Board3 = "X.O/.X./OO.".parse().unwrap();
    let cells: Vec<Pos> = board.empty_cells().collect();
    assert_eq!(
        cells,
        vec![Pos::new(0, 1), Pos::new(1, 0), Pos::new(1, 2), Pos::new(2, 2)]
    );
}

#[test]
fn test_place_and_clear_restores_board() {
    let mut board: Board3 = "X../.O./...".parse().unwrap();
    let before = board;

    for pos in before.empty_cells() {
        for mark in [Mark::Engine, Mark::Human] {
            board.place(pos, mark);
            assert_ne!(board, before);
            board.clear(pos);
            assert_eq!(board, before);
        }
    }
}

#[test]
fn test_counts() {
    let board: Board4 = "XO../.X../..O./...X".parse().unwrap();
    assert_eq!(board.count(Mark::Engine), 3);
    assert_eq!(board.count(Mark::Human), 2);
    assert_eq!(board.filled_count(), 5);
}

#[test]
fn test_full_board() {
    let board: Board3 = "XOX/XOO/OXX".parse().unwrap();
    assert!(board.is_full());
    assert_eq!(board.empty_cells().next(), None);
}

#[test]
fn test_swapped() {
    let board: Board3 = "XX./.O./...".parse().unwrap();
    let swapped = board.swapped();
    assert_eq!(swapped.to_notation(), "OO./.X./...");
    assert_eq!(swapped.swapped(), board);
}

#[test]
fn test_notation_round_trip() {
    let text = "X..O/.OX./..../O..X";
    let board: Board4 = text.parse().unwrap();
    assert_eq!(board.to_notation(), text);
}

#[test]
fn test_parse_rejects_wrong_shape() {
    let err = "XX./...".parse::<Board3>().unwrap_err();
    assert!(matches!(err, crate::Error::InvalidBoardShape { expected: 3, .. }));

    let err = "XX../..../....".parse::<Board3>().unwrap_err();
    assert!(matches!(err, crate::Error::InvalidBoardShape { .. }));
}

#[test]
fn test_parse_rejects_bad_character() {
    let err = "XX./.Q./...".parse::<Board3>().unwrap_err();
    assert_eq!(
        err,
        crate::Error::InvalidCellCharacter {
            character: 'Q',
            row: 1,
            col: 1
        }
    );
}

#[test]
fn test_display_uses_one_based_labels() {
    let board: Board3 = "X../.O./...".parse().unwrap();
    let text = board.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "    1   2   3  ");
    assert_eq!(lines[1], "1 | X |   |   |");
    assert_eq!(lines[2], "  +---+---+---+");
    assert_eq!(lines[3], "2 |   | O |   |");
    assert_eq!(lines.len(), 6);
}
