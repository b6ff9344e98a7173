// Integration tests for the tower controller

use stacktty::canvas::Canvas;
use stacktty::tower::element::{color_for_id, height_for_id, Cup, PALETTE, PIXELS_PER_CM};
use stacktty::tower::{Element, Tower, ORIGIN_X, ORIGIN_Y};

fn cup_position(tower: &Tower, id: u32) -> (i32, i32) {
    tower
        .stack()
        .iter()
        .find_map(|e| e.as_cup().filter(|c| c.id() == id))
        .map(|c| c.position())
        .unwrap_or_else(|| panic!("cup {} not in stack", id))
}

fn stack_ids(tower: &Tower) -> Vec<u32> {
    tower.stack().iter().map(Element::id).collect()
}

#[test]
fn test_cup_height_is_power_of_two() {
    assert_eq!(height_for_id(1), 1);
    assert_eq!(height_for_id(2), 2);
    assert_eq!(height_for_id(3), 4);
    assert_eq!(height_for_id(4), 8);
    assert_eq!(height_for_id(10), 512);
}

#[test]
fn test_giant_identities_saturate_instead_of_wrapping() {
    assert_eq!(height_for_id(31), 1 << 30);
    assert_eq!(height_for_id(32), i32::MAX);
    assert_eq!(height_for_id(u32::MAX), i32::MAX);

    // Pushing oversize cups must clamp their arithmetic, not crash
    let mut tower = Tower::new(80, 20);
    tower.push_cup(32);
    assert!(tower.last_operation_ok());
    tower.push_cup(40);
    assert_eq!(stack_ids(&tower), vec![32, 40]);
    assert_eq!(tower.stack_height_cm(), i32::MAX);

    // Cup 40 ends up pinned far above the origin rather than wrapped below
    let (_, y) = cup_position(&tower, 40);
    assert!(y < ORIGIN_Y - 20 * PIXELS_PER_CM);

    tower.remove_cup(32);
    assert_eq!(cup_position(&tower, 40), (ORIGIN_X, ORIGIN_Y));
}

#[test]
fn test_identity_zero_does_not_underflow() {
    // The element layer leaves id 0 unvalidated but must stay total
    assert_eq!(height_for_id(0), 1);
    assert_eq!(color_for_id(0), "blue");

    let mut tower = Tower::new(80, 20);
    tower.push_cup(0);
    assert!(tower.last_operation_ok());
    assert_eq!(cup_position(&tower, 0), (ORIGIN_X, ORIGIN_Y));
}

#[test]
fn test_color_cycles_through_palette() {
    for id in 1..=21u32 {
        assert_eq!(
            color_for_id(id),
            PALETTE[((id - 1) % 7) as usize],
            "color mismatch for id {}",
            id
        );
    }
    // Ids 1 and 8 land on the same palette entry
    assert_eq!(color_for_id(1), "blue");
    assert_eq!(color_for_id(8), "blue");
    assert_eq!(color_for_id(7), "orange");
}

#[test]
fn test_cup_geometry_derives_from_identity() {
    let mut canvas = Canvas::new();
    let cup = Cup::new(3, &mut canvas);
    assert_eq!(cup.height_cm(), 4);
    assert_eq!(cup.width_px(), 15 + 3 * 3);
    assert_eq!(cup.total_height_px(), 4 * PIXELS_PER_CM);
    assert_eq!(cup.color(), "green");
    assert!(!cup.is_visible(), "cups start invisible");
    assert!(!cup.is_lidded(), "cups start unpaired");
}

#[test]
fn test_push_stacks_bottom_to_top() {
    let mut tower = Tower::new(80, 20);
    tower.push_cup(4);
    tower.push_cup(1);
    assert!(tower.last_operation_ok());
    assert_eq!(stack_ids(&tower), vec![4, 1]);

    // Cup 4 sits on the origin, cup 1 on top of its 8 cm
    assert_eq!(cup_position(&tower, 4), (ORIGIN_X, ORIGIN_Y));
    assert_eq!(
        cup_position(&tower, 1),
        (ORIGIN_X, ORIGIN_Y - 8 * PIXELS_PER_CM)
    );
}

#[test]
fn test_duplicate_push_leaves_stack_unchanged() {
    let mut tower = Tower::new(80, 20);
    tower.push_cup(2);
    tower.push_cup(5);
    tower.push_cup(2);
    assert!(!tower.last_operation_ok(), "duplicate push must fail");
    assert_eq!(stack_ids(&tower), vec![2, 5]);

    let reports = tower.take_messages();
    assert_eq!(reports.len(), 1);
    assert!(reports[0].contains("already exists"), "got: {}", reports[0]);
}

#[test]
fn test_remove_missing_cup_leaves_stack_unchanged() {
    let mut tower = Tower::new(80, 20);
    tower.push_cup(1);
    tower.remove_cup(9);
    assert!(!tower.last_operation_ok());
    assert_eq!(stack_ids(&tower), vec![1]);

    let reports = tower.take_messages();
    assert_eq!(reports.len(), 1);
    assert!(
        reports[0].contains("does not exist"),
        "got: {}",
        reports[0]
    );
}

#[test]
fn test_flag_reflects_most_recent_call_only() {
    let mut tower = Tower::new(80, 20);
    tower.push_cup(1);
    tower.push_cup(1);
    assert!(!tower.last_operation_ok());
    tower.push_cup(2);
    assert!(tower.last_operation_ok(), "success must clear the flag");
}

#[test]
fn test_remove_middle_cup_drops_everything_above() {
    // maxHeight=20, cups 1,2,3 have heights 1,2,4
    let mut tower = Tower::new(80, 20);
    tower.push_cup(1);
    tower.push_cup(2);
    tower.push_cup(3);
    assert_eq!(stack_ids(&tower), vec![1, 2, 3]);
    assert_eq!(
        cup_position(&tower, 3),
        (ORIGIN_X, ORIGIN_Y - (1 + 2) * PIXELS_PER_CM)
    );

    tower.remove_cup(2);
    assert!(tower.last_operation_ok());
    assert_eq!(stack_ids(&tower), vec![1, 3]);
    // Cup 3 now rests on cup 1 alone
    assert_eq!(
        cup_position(&tower, 3),
        (ORIGIN_X, ORIGIN_Y - PIXELS_PER_CM)
    );
    assert_eq!(tower.stack_height_cm(), 1 + 4);
}

#[test]
fn test_remove_bottom_cup_repositions_whole_stack() {
    let mut tower = Tower::new(80, 20);
    tower.push_cup(3);
    tower.push_cup(2);
    tower.push_cup(1);
    tower.remove_cup(3);

    assert_eq!(stack_ids(&tower), vec![2, 1]);
    assert_eq!(cup_position(&tower, 2), (ORIGIN_X, ORIGIN_Y));
    assert_eq!(
        cup_position(&tower, 1),
        (ORIGIN_X, ORIGIN_Y - 2 * PIXELS_PER_CM)
    );
}

#[test]
fn test_removed_cup_shapes_leave_the_canvas() {
    let mut tower = Tower::new(80, 20);
    let scaffolding = tower.canvas().len(); // frame + ticks
    tower.push_cup(1);
    assert_eq!(tower.canvas().len(), scaffolding + 3);
    tower.remove_cup(1);
    assert_eq!(tower.canvas().len(), scaffolding);
}

#[test]
fn test_frame_and_ticks_built_at_construction() {
    let tower = Tower::new(60, 12);
    // One frame rectangle plus one tick per centimeter
    assert_eq!(tower.canvas().len(), 1 + 12);

    let shapes = tower.canvas().shapes();
    let (_, frame) = shapes[0];
    assert_eq!(frame.color, "black");
    assert_eq!(frame.width, 60);
    assert_eq!(frame.height, 12 * PIXELS_PER_CM);
    assert_eq!(frame.x, ORIGIN_X);
    assert_eq!(frame.y, ORIGIN_Y - 12 * PIXELS_PER_CM);
    assert!(frame.visible);

    // Ticks sit at unit-height intervals above the origin
    for (cm, (_, tick)) in shapes[1..].iter().enumerate() {
        assert_eq!((tick.height, tick.width), (1, 5));
        assert_eq!(tick.y, ORIGIN_Y - (cm as i32 + 1) * PIXELS_PER_CM);
        assert_eq!(tick.x, ORIGIN_X);
    }
}

#[test]
fn test_pushed_cup_is_visible_only_while_tower_shown() {
    let mut tower = Tower::new(80, 20);
    tower.push_cup(1);
    assert!(tower.stack()[0].is_visible());

    tower.make_invisible();
    tower.push_cup(2);
    assert!(!tower.stack()[1].is_visible());

    tower.make_visible();
    assert!(tower.stack().iter().all(Element::is_visible));
}

#[test]
fn test_hidden_tower_reports_nothing() {
    let mut tower = Tower::new(80, 20);
    tower.make_invisible();
    tower.push_cup(1);
    tower.push_cup(1);
    assert!(!tower.last_operation_ok(), "flag is set regardless");
    assert!(
        tower.take_messages().is_empty(),
        "reports only surface while visible"
    );
}

#[test]
fn test_cup_bottom_anchored_shapes() {
    // The base's bottom edge must land exactly on the anchor y
    let mut tower = Tower::new(80, 20);
    tower.push_cup(2);
    let Some(cup) = tower.stack()[0].as_cup() else {
        panic!("expected a cup");
    };
    assert_eq!(cup.position(), (ORIGIN_X, ORIGIN_Y));

    // width 21, base 10 px tall: top-left at (50 - 10, 250 - 10)
    // The scaffolding is black; the base is the widest cup-colored shape
    let shapes = tower.canvas().shapes();
    let base = shapes
        .iter()
        .map(|(_, s)| s)
        .filter(|s| s.color == cup.color())
        .max_by_key(|s| s.width)
        .expect("base rectangle");
    assert_eq!(base.width, cup.width_px());
    assert_eq!(base.x, ORIGIN_X - cup.width_px() / 2);
    assert_eq!(base.y, ORIGIN_Y - PIXELS_PER_CM);
}
