use focusnav_core::{Action, Cursor, Direction, NavigationOptions, ShrinkPolicy, Topology};

#[test]
fn test_next_cycles_back_to_start() {
    for len in 1..=8 {
        for start in 0..len {
            let mut index = start;
            for _ in 0..len {
                index = Cursor::new(index, len).next().unwrap();
            }
            assert_eq!(index, start, "len={len} start={start}");
        }
    }
}

#[test]
fn test_previous_cycles_back_to_start() {
    for len in 1..=8 {
        let mut index = 0;
        for _ in 0..len {
            index = Cursor::new(index, len).previous().unwrap();
        }
        assert_eq!(index, 0, "len={len}");
    }
}

#[test]
fn test_list_scenario_next_three_times() {
    let mut index = 0;
    let mut seen = Vec::new();
    for _ in 0..3 {
        index = Cursor::new(index, 3).next().unwrap();
        seen.push(index);
    }
    assert_eq!(seen, vec![1, 2, 0]);
}

#[test]
fn test_single_element_loop_forbidden_never_moves() {
    let cursor = Cursor::new(0, 1).with_loop_forbidden(true);
    for _ in 0..4 {
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.previous(), None);
    }
}

#[test]
fn test_grid_down_property() {
    for columns in 1..=5 {
        for len in 1..=12 {
            for index in 0..len {
                let looping = Cursor::new(index, len);
                let forbidden = looping.with_loop_forbidden(true);
                if index + columns < len {
                    assert_eq!(looping.down(columns), Some(index + columns));
                    assert_eq!(forbidden.down(columns), Some(index + columns));
                } else {
                    assert_eq!(looping.down(columns), Some(0), "columns={columns} len={len} index={index}");
                    assert_eq!(forbidden.down(columns), None);
                }
            }
        }
    }
}

#[test]
fn test_grid_up_inverts_down_away_from_edges() {
    for columns in 1..=5 {
        for len in 1..=12usize {
            for index in 0..len.saturating_sub(columns) {
                let down = Cursor::new(index, len).down(columns).unwrap();
                assert_eq!(
                    Cursor::new(down, len).up(columns),
                    Some(index),
                    "columns={columns} len={len} index={index}"
                );
            }
            for index in columns.min(len)..len {
                let up = Cursor::new(index, len).up(columns).unwrap();
                assert_eq!(
                    Cursor::new(up, len).down(columns),
                    Some(index),
                    "columns={columns} len={len} index={index}"
                );
            }
        }
    }
}

#[test]
fn test_grid_scenario_six_by_three() {
    let grid = Topology::grid(3).unwrap();
    let first = Cursor::new(1, 6).step(grid, Direction::Down).unwrap();
    assert_eq!(first, 4);
    // 4 is in the last row (4 >= 6 - 3), so it wraps to the first element.
    let second = Cursor::new(first, 6).step(grid, Direction::Down);
    assert_eq!(second, Some(0));
}

#[test]
fn test_stale_index_candidates_stay_out_of_range() {
    // Index 5 in a set shrunk to 3: linear moves produce out-of-range
    // candidates that callers reject.
    let cursor = Cursor::new(5, 3);
    assert_eq!(cursor.previous(), Some(4));
    assert_eq!(cursor.next(), Some(6));
}

#[test]
fn test_options_round_trip_through_json() {
    let options = NavigationOptions::builder()
        .topology(Topology::grid(2).unwrap())
        .suppress_vertical(true)
        .shrink_policy(ShrinkPolicy::Clamp)
        .build()
        .unwrap();

    let json = serde_json::to_string(&options).unwrap();
    assert!(json.contains(r#""mode":"grid""#));
    assert!(json.contains(r#""shrink_policy":"clamp""#));

    let parsed = NavigationOptions::from_json(&json).unwrap();
    assert_eq!(parsed, options);
    assert!(!parsed.binds(Action::Up));
    assert!(parsed.binds(Action::Left));
}
