//! End-to-end tests for the token → tree → price pipeline

use karat_core::{OperatorKind, PricingContext, ValueName};
use karat_formula::{
    evaluate, evaluate_model, parse_tokens, references_base, render, to_tokens, FormulaNode,
    FormulaToken, PricingModel,
};

fn val(name: ValueName) -> FormulaToken {
    FormulaToken::Value { value: name }
}

fn num(value: f64) -> FormulaToken {
    FormulaToken::Constant { value }
}

fn op(op: OperatorKind) -> FormulaToken {
    FormulaToken::Op { op }
}

fn ctx() -> PricingContext {
    PricingContext {
        metal_cost: 100.0,
        labor: 50.0,
        other: 10.0,
        stone_cost: 20.0,
        stone_retail: 40.0,
        overhead: 5.0,
        total_materials: 130.0,
        base: None,
    }
}

/// Build a model the way the editor does: token sequences parsed into trees.
#[test]
fn test_preset_model_from_tokens() {
    use OperatorKind::*;
    use ValueName::*;

    let mut model = PricingModel::new("preset-a", "acct-1", "Preset A");
    model.set_base(parse_tokens(&[
        val(Metal),
        op(Add),
        val(Labor),
        op(Add),
        val(Other),
        op(Add),
        val(Overhead),
    ]));
    model.set_wholesale(parse_tokens(&[val(Base), op(Add), val(StoneCost)]));
    model.set_retail(parse_tokens(&[
        val(Base),
        op(Multiply),
        num(3.0),
        op(Add),
        val(StoneRetail),
    ]));

    let prices = evaluate_model(&model, &ctx());
    assert_eq!(prices.base, 165.0);
    assert_eq!(prices.wholesale, 185.0);
    assert_eq!(prices.retail, 535.0);

    // the editor's guard: only the wholesale/retail formulas reference Base
    assert!(!references_base(model.formula_base.as_ref()));
    assert!(references_base(model.formula_wholesale.as_ref()));
    assert!(references_base(model.formula_retail.as_ref()));
}

#[test]
fn test_render_of_stored_trees() {
    use OperatorKind::*;
    use ValueName::*;

    let retail = parse_tokens(&[
        val(Base),
        op(Multiply),
        num(3.0),
        op(Add),
        val(StoneRetail),
    ])
    .unwrap();
    // multiplicative half grouped, additive join bare
    assert_eq!(render(Some(&retail)), "(Base × 3) + Stone retail");

    assert_eq!(render(None), "—");
}

#[test]
fn test_stored_tree_survives_json_round_trip() {
    use OperatorKind::*;
    use ValueName::*;

    let tree = parse_tokens(&[val(Metal), op(Add), val(Labor), op(PercentOf), num(15.0)]).unwrap();
    let json = serde_json::to_string(&tree).unwrap();
    let back: FormulaNode = serde_json::from_str(&json).unwrap();
    assert_eq!(back, tree);
    assert_eq!(evaluate(Some(&back), &ctx()), evaluate(Some(&tree), &ctx()));
}

#[test]
fn test_edit_cycle_is_stable() {
    use OperatorKind::*;
    use ValueName::*;

    // load a stored tree into the editor and save it back unchanged
    let tokens = [
        val(Metal),
        op(Add),
        val(Labor),
        op(Multiply),
        num(2.0),
        op(Subtract),
        val(Overhead),
    ];
    let stored = parse_tokens(&tokens).unwrap();
    let edited = parse_tokens(&to_tokens(Some(&stored))).unwrap();
    assert_eq!(edited, stored);
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    fn any_value_name() -> impl Strategy<Value = ValueName> {
        prop::sample::select(ValueName::ALL.to_vec())
    }

    fn any_operator() -> impl Strategy<Value = OperatorKind> {
        prop::sample::select(OperatorKind::ALL.to_vec())
    }

    fn any_token() -> impl Strategy<Value = FormulaToken> {
        prop_oneof![
            any_value_name().prop_map(|value| FormulaToken::Value { value }),
            (-1000.0..1000.0f64).prop_map(|value| FormulaToken::Constant { value }),
            any_operator().prop_map(|op| FormulaToken::Op { op }),
        ]
    }

    fn any_context() -> impl Strategy<Value = PricingContext> {
        (
            0.0..10_000.0f64,
            0.0..10_000.0f64,
            0.0..10_000.0f64,
            0.0..10_000.0f64,
            0.0..10_000.0f64,
            0.0..10_000.0f64,
            0.0..10_000.0f64,
            prop::option::of(0.0..10_000.0f64),
        )
            .prop_map(
                |(metal_cost, labor, other, stone_cost, stone_retail, overhead, total_materials, base)| {
                    PricingContext {
                        metal_cost,
                        labor,
                        other,
                        stone_cost,
                        stone_retail,
                        overhead,
                        total_materials,
                        base,
                    }
                },
            )
    }

    fn any_tree() -> impl Strategy<Value = FormulaNode> {
        let leaf = prop_oneof![
            any_value_name().prop_map(FormulaNode::value),
            (-1000.0..1000.0f64).prop_map(FormulaNode::constant),
        ];
        leaf.prop_recursive(4, 32, 2, |inner| {
            (any_operator(), inner.clone(), inner)
                .prop_map(|(op, left, right)| FormulaNode::op(op, left, right))
        })
    }

    proptest! {
        #[test]
        fn evaluate_is_pure(tree in any_tree(), ctx in any_context()) {
            prop_assert_eq!(evaluate(Some(&tree), &ctx), evaluate(Some(&tree), &ctx));
        }

        #[test]
        fn divide_by_zero_is_always_zero(tree in any_tree(), ctx in any_context()) {
            let guarded = FormulaNode::op(OperatorKind::Divide, tree, FormulaNode::constant(0.0));
            prop_assert_eq!(evaluate(Some(&guarded), &ctx), 0.0);
        }

        #[test]
        fn parse_never_panics_and_is_deterministic(tokens in prop::collection::vec(any_token(), 0..12)) {
            let first = parse_tokens(&tokens);
            let second = parse_tokens(&tokens);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn parsed_trees_round_trip(tokens in prop::collection::vec(any_token(), 0..12), ctx in any_context()) {
            if let Some(tree) = parse_tokens(&tokens) {
                let reparsed = parse_tokens(&to_tokens(Some(&tree)))
                    .expect("non-empty token sequence must parse");
                prop_assert_eq!(
                    evaluate(Some(&reparsed), &ctx),
                    evaluate(Some(&tree), &ctx)
                );
            }
        }

        #[test]
        fn model_prices_are_finite(
            base in prop::option::of(any_tree()),
            wholesale in prop::option::of(any_tree()),
            retail in prop::option::of(any_tree()),
            ctx in any_context(),
        ) {
            let mut model = PricingModel::new("m", "acct", "generated");
            model.set_base(base);
            model.set_wholesale(wholesale);
            model.set_retail(retail);
            let prices = evaluate_model(&model, &ctx);
            prop_assert!(prices.base.is_finite());
            prop_assert!(prices.wholesale.is_finite());
            prop_assert!(prices.retail.is_finite());
        }
    }
}
