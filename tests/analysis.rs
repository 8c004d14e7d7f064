use aurochs_sat::{
    config::Config,
    context::Context,
    structures::literal::{CLiteral, Literal},
    types::err::BCPError,
};

fn literal(atom: u32, polarity: bool) -> CLiteral {
    CLiteral::new(atom, polarity)
}

/// Makes a decision and propagates its consequences, which must be conflict free.
fn decide(ctx: &mut Context, decision: CLiteral) {
    ctx.trail.push_fresh_level();
    ctx.value_and_queue(decision, None);
    assert!(ctx.bcp().is_ok());
}

#[test]
fn first_uip_learning() {
    // The implication graph after deciding x5, x6, and x0 funnels through x1:
    //
    //   x0 -> x1 -> x2 -> x4 (with x5)
    //              \ x3 ------\
    //                          conflict (with x6)
    let mut ctx = Context::from_config(Config::default());

    let _ = ctx.add_clause(vec![literal(0, false), literal(1, true)]);
    let _ = ctx.add_clause(vec![literal(1, false), literal(2, true)]);
    let _ = ctx.add_clause(vec![literal(1, false), literal(3, true)]);
    let _ = ctx.add_clause(vec![literal(5, false), literal(2, false), literal(4, true)]);
    let _ = ctx.add_clause(vec![literal(6, false), literal(3, false), literal(4, false)]);

    decide(&mut ctx, literal(5, true));
    decide(&mut ctx, literal(6, true));

    ctx.trail.push_fresh_level();
    ctx.value_and_queue(literal(0, true), None);

    let Err(BCPError::Conflict(key)) = ctx.bcp() else {
        panic!("Propagation missed the conflict");
    };

    let (learnt, backjump_level) = ctx.analyze(key).expect("An asserting clause");

    // The learnt clause asserts the negation of the implication point.
    assert_eq!(learnt[0], literal(1, false));

    let mut sorted = learnt.clone();
    sorted.sort_unstable();
    assert_eq!(
        sorted,
        vec![literal(1, false), literal(5, false), literal(6, false)]
    );

    assert_eq!(backjump_level, 2);

    // And is asserting: after the backjump its first literal is unvalued, the rest false.
    ctx.backjump(backjump_level);
    assert_eq!(ctx.value_of(learnt[0].atom()), None);
    for other in &learnt[1..] {
        assert_eq!(ctx.value_of(other.atom()), Some(!other.polarity()));
    }
}

#[test]
fn learnt_units_decide_quickly() {
    // (x0 v x1), (x0 v -x1): any conflict on x0 false funnels to the unit x0.
    let mut ctx = Context::from_config(Config::default());

    let _ = ctx.add_clause(vec![literal(0, true), literal(1, true)]);
    let _ = ctx.add_clause(vec![literal(0, true), literal(1, false)]);
    let _ = ctx.add_clause(vec![literal(0, false), literal(2, true)]);

    assert!(ctx.solve().is_ok());
    assert_eq!(ctx.value_of(0), Some(true));
    assert_eq!(ctx.value_of(2), Some(true));
}
