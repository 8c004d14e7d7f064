use aurochs_sat::{
    builder::ClauseOk,
    config::Config,
    context::{Context, Report},
    structures::literal::{CLiteral, Literal},
};

fn literal(atom: u32, polarity: bool) -> CLiteral {
    CLiteral::new(atom, polarity)
}

/// True if every clause has some literal agreeing with the assignment.
fn satisfies(clauses: &[Vec<CLiteral>], assignment: &[bool]) -> bool {
    clauses.iter().all(|clause| {
        clause
            .iter()
            .any(|l| assignment[l.atom() as usize] == l.polarity())
    })
}

#[test]
fn one_literal() {
    let mut ctx = Context::from_config(Config::default());
    let p = ctx.fresh_atom();

    assert_eq!(Ok(ClauseOk::Added), ctx.add_clause(literal(p, true)));

    assert!(ctx.solve().is_ok());
    assert_eq!(ctx.report(), Report::Satisfiable);
    assert_eq!(ctx.value_of(p), Some(true));
}

#[test]
fn unit_propagation_to_model() {
    let mut ctx = Context::from_config(Config::default());

    assert!(ctx.add_clause(vec![literal(0, true), literal(1, true)]).is_ok());
    assert!(ctx.add_clause(literal(0, false)).is_ok());

    assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
    assert_eq!(ctx.value_of(0), Some(false));
    assert_eq!(ctx.value_of(1), Some(true));
}

#[test]
fn satisfiable_three_clauses() {
    let mut ctx = Context::from_config(Config::default());

    let clauses = vec![
        vec![literal(0, true), literal(4, false), literal(3, true)],
        vec![
            literal(0, false),
            literal(4, true),
            literal(2, true),
            literal(3, true),
        ],
        vec![literal(2, true), literal(3, true)],
    ];

    for clause in &clauses {
        assert!(ctx.add_clause(clause.clone()).is_ok());
    }

    assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
    assert!(satisfies(&clauses, &ctx.assignment()));
}

#[test]
fn unsatisfiable_four_clauses() {
    let mut ctx = Context::from_config(Config::default());

    let clauses = vec![
        vec![literal(0, true)],
        vec![literal(0, false), literal(2, false)],
        vec![literal(0, false), literal(1, true), literal(2, true)],
        vec![literal(2, true), literal(1, false)],
    ];

    for clause in clauses {
        let _ = ctx.add_clause(clause);
    }

    assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
}

#[test]
fn unsatisfiable_is_sticky() {
    let mut ctx = Context::from_config(Config::default());

    let _ = ctx.add_clause(literal(0, true));
    let _ = ctx.add_clause(literal(0, false));

    assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));

    let iterations = ctx.counters.total_iterations;
    assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));

    // The repeat delivered the decided report without a fresh search.
    assert_eq!(ctx.counters.total_iterations, iterations);
}
