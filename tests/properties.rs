//! Property tests for the ROI calculators.

use proptest::prelude::*;
use rust_decimal::Decimal;

use roi_engine::calculation::{
    calculate_individual, calculate_team, evaluate_individual, evaluate_team,
    individual_payback_months, round_whole,
};
use roi_engine::models::{CalculationType, IndividualInputs, TeamInputs};
use roi_engine::validation::validate_individual_inputs;

fn calculation_type() -> impl Strategy<Value = CalculationType> {
    prop_oneof![
        Just(CalculationType::Productivity),
        Just(CalculationType::Efficiency),
    ]
}

prop_compose! {
    fn individual_inputs()(
        comp in 10_000u64..1_000_000,
        work_hours in 500u64..3_000,
        multiple_tenths in 10i64..50,
        lift_tenths in 0i64..=1_000,
        training_hours in 1u64..200,
        fees_cents in 0i64..1_000_000,
        tech_cents in 0i64..1_000_000,
    ) -> IndividualInputs {
        IndividualInputs {
            comp: Decimal::from(comp),
            work_hours: Decimal::from(work_hours),
            value_of_work_multiple: Decimal::new(multiple_tenths, 1),
            est_productivity_lift: Decimal::new(lift_tenths, 1),
            ai_training_hours: Decimal::from(training_hours),
            ai_training_license_fees: Decimal::new(fees_cents, 2),
            ai_tech_costs: Decimal::new(tech_cents, 2),
        }
    }
}

prop_compose! {
    fn team_inputs()(
        learners in 1u32..500,
        comp_per_learner in 10_000u64..300_000,
        work_hours in 500u64..3_000,
        lift_tenths in 0i64..=1_000,
        training_hours in 1u64..100,
        fees_cents in 0i64..500_000,
        tech_cents in 0i64..500_000,
    ) -> TeamInputs {
        TeamInputs {
            number_of_learners: learners,
            combined_comp: Decimal::from(comp_per_learner) * Decimal::from(learners),
            average_work_hours: Decimal::from(work_hours),
            value_of_work_multiple: Decimal::new(20, 1),
            est_productivity_lift: Decimal::new(lift_tenths, 1),
            ai_training_hours_per_learner: Decimal::from(training_hours),
            ai_training_license_fees_per_learner: Decimal::new(fees_cents, 2),
            ai_tech_costs_per_learner: Decimal::new(tech_cents, 2),
        }
    }
}

prop_compose! {
    /// Whole-number inputs anywhere up to the validation caps.
    fn bounded_individual_inputs()(
        comp in 1i64..=1_000_000_000_000,
        work_hours in 1i64..=8_784,
        multiple in 1i64..=100,
        lift in 0i64..=100,
        training_hours in 1i64..=8_784,
        fees in 0i64..=1_000_000_000_000,
        tech in 0i64..=1_000_000_000_000,
    ) -> IndividualInputs {
        IndividualInputs {
            comp: Decimal::from(comp),
            work_hours: Decimal::from(work_hours),
            value_of_work_multiple: Decimal::from(multiple),
            est_productivity_lift: Decimal::from(lift),
            ai_training_hours: Decimal::from(training_hours),
            ai_training_license_fees: Decimal::from(fees),
            ai_tech_costs: Decimal::from(tech),
        }
    }
}

proptest! {
    /// Property: identical inputs always produce identical results.
    #[test]
    fn calculation_is_deterministic(
        inputs in individual_inputs(),
        calc_type in calculation_type(),
    ) {
        let first = calculate_individual(&inputs, calc_type).unwrap();
        let second = calculate_individual(&inputs, calc_type).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Property: every generated record passes validation and calculates.
    #[test]
    fn valid_inputs_always_calculate(
        inputs in individual_inputs(),
        calc_type in calculation_type(),
    ) {
        prop_assert!(validate_individual_inputs(&inputs).is_ok());
        prop_assert!(calculate_individual(&inputs, calc_type).is_ok());
    }

    /// Property: anything validation accepts within the caps calculates.
    #[test]
    fn inputs_at_the_caps_calculate(
        inputs in bounded_individual_inputs(),
        calc_type in calculation_type(),
    ) {
        prop_assert!(validate_individual_inputs(&inputs).is_ok());
        prop_assert!(calculate_individual(&inputs, calc_type).is_ok());
    }

    /// Property: total AI costs are training costs plus tech costs.
    #[test]
    fn total_costs_are_the_sum_of_parts(
        inputs in individual_inputs(),
        calc_type in calculation_type(),
    ) {
        let exact = evaluate_individual(&inputs, calc_type).unwrap();
        prop_assert_eq!(
            exact.total_ai_training_costs,
            exact.ai_training_human_costs + inputs.ai_training_license_fees
        );
        prop_assert_eq!(
            exact.total_ai_costs,
            exact.total_ai_training_costs + inputs.ai_tech_costs
        );
    }

    /// Property: the rounded record adds up exactly as displayed.
    #[test]
    fn rounded_individual_record_adds_up(
        inputs in individual_inputs(),
        calc_type in calculation_type(),
    ) {
        let rounded = calculate_individual(&inputs, calc_type).unwrap();
        prop_assert_eq!(
            rounded.total_ai_training_costs,
            rounded.ai_training_human_costs + round_whole(inputs.ai_training_license_fees)
        );
        prop_assert_eq!(
            rounded.total_ai_costs,
            rounded.total_ai_training_costs + round_whole(inputs.ai_tech_costs)
        );
        prop_assert_eq!(
            rounded.first_year_net_value,
            rounded.value_of_productivity_lift - rounded.total_ai_costs
        );
        prop_assert_eq!(
            rounded.new_annual_value_of_work,
            rounded.annual_value_of_work + rounded.value_of_productivity_lift
        );
    }

    /// Property: the rounded team record adds up exactly as displayed.
    #[test]
    fn rounded_team_record_adds_up(
        inputs in team_inputs(),
        calc_type in calculation_type(),
    ) {
        let rounded = calculate_team(&inputs, calc_type).unwrap();
        prop_assert_eq!(
            rounded.total_ai_training_costs,
            rounded.combined_ai_training_human_costs + rounded.combined_ai_training_license_fees
        );
        prop_assert_eq!(
            rounded.total_ai_costs,
            rounded.total_ai_training_costs + rounded.total_ai_tech_costs
        );
        prop_assert_eq!(
            rounded.first_year_net_value,
            rounded.total_value_of_productivity_lift - rounded.total_ai_costs
        );
    }

    /// Property: net value is lift value minus total costs, and ROI is their ratio.
    #[test]
    fn roi_is_net_over_costs(
        inputs in individual_inputs(),
        calc_type in calculation_type(),
    ) {
        let exact = evaluate_individual(&inputs, calc_type).unwrap();
        prop_assert_eq!(
            exact.first_year_net_value,
            exact.value_of_productivity_lift - exact.total_ai_costs
        );

        let expected = exact.first_year_net_value / exact.total_ai_costs * Decimal::ONE_HUNDRED;
        let tolerance = Decimal::new(1, 12);
        prop_assert!((exact.roi - expected).abs() < tolerance);
    }

    /// Property: with no lift the whole investment is lost and never paid back.
    #[test]
    fn zero_lift_loses_the_investment(
        inputs in individual_inputs(),
        calc_type in calculation_type(),
    ) {
        let inputs = IndividualInputs { est_productivity_lift: Decimal::ZERO, ..inputs };
        let results = calculate_individual(&inputs, calc_type).unwrap();

        prop_assert_eq!(results.value_of_productivity_lift, Decimal::ZERO);
        prop_assert_eq!(results.first_year_net_value, -results.total_ai_costs);
        prop_assert_eq!(results.roi, Decimal::new(-100, 0));
        prop_assert_eq!(individual_payback_months(&results), None);
    }

    /// Property: rounding moves each leaf field by at most half a unit of its
    /// precision, and each summed field by at most half a unit per part.
    #[test]
    fn rounding_stays_within_half_a_unit(
        inputs in individual_inputs(),
        calc_type in calculation_type(),
    ) {
        let exact = evaluate_individual(&inputs, calc_type).unwrap();
        let rounded = calculate_individual(&inputs, calc_type).unwrap();

        let half_unit = Decimal::new(5, 1);
        let half_cent = Decimal::new(5, 3);
        for (e, r, parts) in [
            (exact.cost_per_hour, rounded.cost_per_hour, 1),
            (exact.annual_value_of_work, rounded.annual_value_of_work, 1),
            (exact.value_of_productivity_lift, rounded.value_of_productivity_lift, 1),
            (exact.total_ai_costs, rounded.total_ai_costs, 3),
            (exact.first_year_net_value, rounded.first_year_net_value, 4),
        ] {
            let tolerance = half_unit * Decimal::from(parts);
            prop_assert!((e - r).abs() <= tolerance, "exact {} rounded {}", e, r);
        }
        prop_assert!((exact.roi - rounded.roi).abs() <= half_cent);
    }

    /// Property: team totals scale per learner and match the team ROI identity.
    #[test]
    fn team_totals_scale_with_learners(
        inputs in team_inputs(),
        calc_type in calculation_type(),
    ) {
        let exact = evaluate_team(&inputs, calc_type).unwrap();
        let learners = inputs.learners();

        prop_assert_eq!(
            exact.combined_ai_training_license_fees,
            inputs.ai_training_license_fees_per_learner * learners
        );
        prop_assert_eq!(exact.total_ai_tech_costs, inputs.ai_tech_costs_per_learner * learners);
        prop_assert_eq!(
            exact.first_year_net_value,
            exact.total_value_of_productivity_lift - exact.total_ai_costs
        );
        prop_assert!(calculate_team(&inputs, calc_type).is_ok());
    }

    /// Property: a one-person team is priced exactly like an individual.
    #[test]
    fn single_learner_team_matches_individual(
        inputs in individual_inputs(),
        calc_type in calculation_type(),
    ) {
        let team = TeamInputs {
            number_of_learners: 1,
            combined_comp: inputs.comp,
            average_work_hours: inputs.work_hours,
            value_of_work_multiple: inputs.value_of_work_multiple,
            est_productivity_lift: inputs.est_productivity_lift,
            ai_training_hours_per_learner: inputs.ai_training_hours,
            ai_training_license_fees_per_learner: inputs.ai_training_license_fees,
            ai_tech_costs_per_learner: inputs.ai_tech_costs,
        };

        let individual = calculate_individual(&inputs, calc_type).unwrap();
        let team = calculate_team(&team, calc_type).unwrap();

        prop_assert_eq!(team.total_ai_costs, individual.total_ai_costs);
        prop_assert_eq!(team.first_year_net_value, individual.first_year_net_value);
        prop_assert_eq!(team.roi, individual.roi);
    }
}
