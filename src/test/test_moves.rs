mod test {
    use Direction::*;
    use crate::core::*;
    use crate::session::GameEvent;
    use crate::test::test_util::GameTestState;

    #[test]
    fn when_move_right_observes_move_right() {
        let level = r#"
|o |
"#;
        let mut game = GameTestState::new(level);
        game.assert_move(Right);

        let expected_level = r#"
| o|
"#;
        game.assert_matches(expected_level);
        assert_eq!(game.session.move_count(), 1);
    }

    #[test]
    fn when_push_pushes() {
        let level = r#"
|oX |
"#;
        let mut game = GameTestState::new(level);
        game.assert_move(Right);

        let expected_level = r#"
| oX|
"#;
        game.assert_matches(expected_level);
    }

    #[test]
    fn when_walking_into_wall_nothing_moves() {
        let level = r#"
|o |
"#;
        let mut game = GameTestState::new(level);
        let result = game.assert_blocked(Left);

        assert!(result.blocked);
        assert!(result.cell_changes.is_empty());
        assert_eq!(game.events.events(), &[GameEvent::MoveBlocked(Left)]);
    }

    #[test]
    fn when_walking_off_board_nothing_moves() {
        let level = r#"
o X*
"#;
        let mut game = GameTestState::new(level);
        let result = game.assert_blocked(Left);
        assert!(result.blocked);
        game.assert_matches("o X*");
    }

    #[test]
    fn when_block_pushed_into_wall_nothing_moves() {
        let level = r#"
| oX|
"#;
        let mut game = GameTestState::new(level);
        game.assert_blocked(Right);
        game.assert_matches("| oX|");
    }

    #[test]
    fn when_chain_fits_budget_whole_chain_moves() {
        let level = r#"
|oXX |
"#;
        let mut game = GameTestState::with_budget(level, 2);
        game.assert_move(Right);

        game.assert_matches("| oXX|");
    }

    #[test]
    fn when_chain_exceeds_budget_nothing_moves() {
        let level = r#"
|oXXX |
"#;
        let mut game = GameTestState::with_budget(level, 2);
        game.assert_blocked(Right);

        game.assert_matches("|oXXX |");
    }

    #[test]
    fn when_budget_is_three_three_blocks_move() {
        let level = r#"
|oXXX |
"#;
        let mut game = GameTestState::with_budget(level, 3);
        game.assert_move(Right);

        game.assert_matches("| oXXX|");
    }

    #[test]
    fn when_zero_budget_blocks_cannot_be_pushed() {
        let level = r#"
|oX |
"#;
        let mut game = GameTestState::with_budget(level, 0);
        game.assert_blocked(Right);
    }

    #[test]
    fn when_chain_ends_at_board_edge_nothing_moves() {
        let level = r#"
 oXX
"#;
        let mut game = GameTestState::with_budget(level, 3);
        game.assert_blocked(Right);
        game.assert_matches(" oXX");
    }

    #[test]
    fn when_chain_ends_in_wall_nothing_moves() {
        let level = r#"
|  |
|oX|
|X |
|XX|
|==|
"#;
        let mut game = GameTestState::with_budget(level, 3);
        game.assert_blocked(Down);
        game.assert_moves(&[Up, Down]);
        game.assert_blocked(Down);
    }

    #[test]
    fn cell_changes_cover_source_chain_and_destination() {
        let level = r#"
|oXX *|
"#;
        let mut game = GameTestState::new(level);
        let result = game.assert_move(Right);

        let changes: Vec<(Vec2, Occupant, Occupant)> = result
            .cell_changes
            .iter()
            .map(|c| (c.pos, c.before, c.after))
            .collect();
        assert_eq!(
            changes,
            vec![
                (Vec2::new(0, 1), Occupant::Actor, Occupant::Empty),
                (Vec2::new(0, 2), Occupant::Block, Occupant::Actor),
                (Vec2::new(0, 3), Occupant::Block, Occupant::Block),
                (Vec2::new(0, 4), Occupant::Empty, Occupant::Block),
            ]
        );
        assert!(result.cell_changes.iter().all(|c| c.direction == Right));

        let notified: Vec<CellChange> = game
            .events
            .events()
            .iter()
            .filter_map(|e| match e {
                GameEvent::OccupantChanged(change) => Some(*change),
                _ => None,
            })
            .collect();
        assert_eq!(notified, result.cell_changes);
    }

    #[test]
    fn actor_walks_over_targets() {
        let level = r#"
|o* X*|
"#;
        let mut game = GameTestState::new(level);
        game.assert_move(Right);
        game.assert_matches("| O X*|");
        game.assert_move(Right);
        game.assert_matches("| *oX*|");
        assert_eq!(game.actor(), Vec2::new(0, 3));
    }

    #[test]
    fn pushing_last_block_onto_target_solves() {
        let level = r#"
|o X*|
"#;
        let mut game = GameTestState::new(level);
        let first = game.assert_move(Right);
        assert!(!first.solved);

        let second = game.assert_move(Right);
        assert!(second.solved);
        assert!(game.session.is_solved());
        game.assert_matches("|  o#|");
        assert!(matches!(
            game.events.events().last(),
            Some(GameEvent::LevelSolved { move_count: 2, .. })
        ));
    }

    #[test]
    fn solved_session_ignores_moves() {
        let level = r#"
|  oX*  |
"#;
        let mut game = GameTestState::new(level);
        game.assert_move(Right);
        assert!(game.session.is_solved());
        game.events.drain();

        let result = game.assert_blocked(Left);
        assert!(!result.blocked);
        assert!(result.solved);
        assert!(game.events.events().is_empty());
    }

    #[test]
    fn stray_block_keeps_board_unsolved() {
        let mut game = GameTestState::new("|oX*X |");
        let result = game.assert_move(Right);

        game.assert_matches("| o#X |");
        assert!(!result.solved);
        assert!(!game.session.is_solved());
    }

    #[test]
    fn exactly_one_actor_and_fixed_terrain_after_random_walk() {
        let level = r#"
|======|
| *|   |
|* | | |
|*X|X| |
|      |
|*X  X |
| o|   |
|======|
"#;
        let mut game = GameTestState::with_budget(level, 3);
        let terrain = game.session.grid().terrain_layer().clone();

        let walk = [
            Up, Up, Right, Right, Up, Left, Down, Down, Right, Right, Right, Up, Up, Up, Left,
            Left, Down, Down, Down, Left, Up, Right, Right, Down,
        ];
        for (n, &direction) in walk.iter().cycle().take(200).enumerate() {
            let result = game.try_move(direction);
            let grid = game.session.grid();

            assert_eq!(grid.count_occupants(Occupant::Actor), 1, "after move {n}");
            assert_eq!(grid.find_actor(), Some(game.actor()), "after move {n}");
            assert_eq!(grid.terrain_layer(), &terrain, "after move {n}");
            assert_eq!(grid.count_occupants(Occupant::Block), 4, "after move {n}");
            assert!(
                result.moved != result.blocked || game.session.is_solved(),
                "move {n} was neither accepted nor blocked: {result:?}"
            );
        }
    }

    #[test]
    fn every_direction_blocked_when_boxed_in() {
        let level = r#"
|===|
|XoX|
|=X=|
"#;
        let mut game = GameTestState::with_budget(level, 3);
        for direction in [Up, Down, Left, Right] {
            game.assert_blocked(direction);
        }
        assert_eq!(game.events.events().len(), 4);
    }
}
