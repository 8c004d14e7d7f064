use aurochs_sat::{
    config::Config,
    context::Context,
    structures::literal::{CLiteral, Literal},
};

fn literal(atom: u32, polarity: bool) -> CLiteral {
    CLiteral::new(atom, polarity)
}

#[test]
fn backjump_clears_levels_above_target() {
    // Levels: @1 x0 with consequences x1 x2, @2 x3 with consequence x4, @3 x5.
    let mut ctx = Context::from_config(Config::default());
    for _ in 0..6 {
        ctx.fresh_atom();
    }

    assert_eq!(ctx.trail.level(), 0);

    ctx.trail.push_fresh_level();
    ctx.value_and_queue(literal(0, true), None);
    ctx.value_and_queue(literal(1, true), None);
    ctx.value_and_queue(literal(2, true), None);
    assert_eq!(ctx.trail.level(), 1);

    ctx.trail.push_fresh_level();
    ctx.value_and_queue(literal(3, true), None);
    ctx.value_and_queue(literal(4, true), None);
    assert_eq!(ctx.trail.level(), 2);

    ctx.trail.push_fresh_level();
    ctx.value_and_queue(literal(5, true), None);
    assert_eq!(ctx.trail.level(), 3);

    ctx.backjump(1);

    assert_eq!(ctx.trail.level(), 1);
    assert_eq!(ctx.value_of(0), Some(true));
    assert_eq!(ctx.value_of(1), Some(true));
    assert_eq!(ctx.value_of(2), Some(true));
    assert_eq!(ctx.value_of(3), None);
    assert_eq!(ctx.value_of(4), None);
    assert_eq!(ctx.value_of(5), None);
}

#[test]
fn backjump_preserves_phases() {
    let mut ctx = Context::from_config(Config::default());
    for _ in 0..2 {
        ctx.fresh_atom();
    }

    ctx.trail.push_fresh_level();
    ctx.value_and_queue(literal(0, true), None);
    ctx.value_and_queue(literal(1, false), None);

    ctx.backjump(0);

    assert_eq!(ctx.value_of(0), None);
    assert_eq!(ctx.value_of(1), None);
    assert!(ctx.atom_db.previous_value_of(0));
    assert!(!ctx.atom_db.previous_value_of(1));
}

#[test]
fn level_zero_survives_any_backjump() {
    let mut ctx = Context::from_config(Config::default());

    let _ = ctx.add_clause(literal(0, true));
    assert!(ctx.bcp().is_ok());

    ctx.trail.push_fresh_level();
    ctx.value_and_queue(literal(1, true), None);

    ctx.backjump(0);

    assert_eq!(ctx.value_of(0), Some(true));
    assert_eq!(ctx.value_of(1), None);
    assert_eq!(ctx.trail.level(), 0);
}
