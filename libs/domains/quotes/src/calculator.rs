//! Quote calculator: folds the AI estimate, machine-hour cost, modeling
//! surcharge, and profit margin into the final price range.

use crate::models::{AiEstimate, Machine, PricingConfig, Quote, QuoteRequest};

/// Compute the quote for a part.
///
/// Order of operations, all in the same currency unit:
/// 1. machine cost = estimated hours × machine-hour cost
/// 2. total = AI base cost + machine cost
/// 3. the modeling fee is added when the customer has no print file
/// 4. the range is [total, total × margin multiplier]
///
/// The rationale names the selected machine ahead of the AI reasoning.
/// `price_max >= price_min` holds whenever the margin multiplier is ≥ 1.
pub fn compute_quote(
    request: &QuoteRequest,
    estimate: &AiEstimate,
    machine: &Machine,
    hourly_cost: f64,
    pricing: &PricingConfig,
) -> Quote {
    let machine_cost = estimate.estimated_hours * hourly_cost;
    let mut total_cost = estimate.base_cost + machine_cost;

    if !request.has_print_file {
        total_cost += pricing.modeling_fee;
    }

    Quote {
        price_min: total_cost,
        price_max: total_cost * pricing.margin_multiplier,
        estimated_hours: estimate.estimated_hours,
        base_cost: estimate.base_cost,
        machine_cost,
        rationale: format!("Using the {}. {}", machine.name, estimate.rationale),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn request(has_print_file: bool) -> QuoteRequest {
        QuoteRequest {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: None,
            part_type: "vase".to_string(),
            material: "PLA".to_string(),
            weight_g: 120.0,
            size_cm: 10.0,
            has_print_file,
        }
    }

    fn machine() -> Machine {
        Machine {
            name: "Bambu Lab A1 Mini".to_string(),
            investment_cost: 1200.0,
            lifetime_hours: 6000.0,
        }
    }

    fn estimate(base_cost: f64, estimated_hours: f64) -> AiEstimate {
        AiEstimate {
            base_cost,
            estimated_hours,
            rationale: "similar vase".to_string(),
        }
    }

    fn pricing() -> PricingConfig {
        PricingConfig {
            margin_multiplier: 1.20,
            modeling_fee: 25.0,
        }
    }

    #[test]
    fn test_worked_example_with_print_file() {
        let quote = compute_quote(&request(true), &estimate(50.0, 4.0), &machine(), 0.20, &pricing());

        assert!((quote.machine_cost - 0.8).abs() < TOLERANCE);
        assert!((quote.price_min - 50.8).abs() < TOLERANCE);
        assert!((quote.price_max - 60.96).abs() < TOLERANCE);
        assert_eq!(quote.estimated_hours, 4.0);
        assert_eq!(quote.base_cost, 50.0);
    }

    #[test]
    fn test_worked_example_without_print_file() {
        let quote = compute_quote(&request(false), &estimate(50.0, 4.0), &machine(), 0.20, &pricing());

        assert!((quote.price_min - 75.8).abs() < TOLERANCE);
        assert!((quote.price_max - 90.96).abs() < TOLERANCE);
    }

    #[test]
    fn test_modeling_fee_delta_is_exactly_the_fee() {
        let with_file = compute_quote(&request(true), &estimate(50.0, 4.0), &machine(), 0.20, &pricing());
        let without_file =
            compute_quote(&request(false), &estimate(50.0, 4.0), &machine(), 0.20, &pricing());

        assert!((without_file.price_min - with_file.price_min - 25.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_price_max_is_price_min_times_margin() {
        let quote = compute_quote(&request(false), &estimate(33.3, 7.7), &machine(), 0.41, &pricing());
        // Same multiplication the calculator performs, so bitwise equal.
        assert_eq!(quote.price_max, quote.price_min * 1.20);
    }

    #[test]
    fn test_margin_at_least_one_keeps_max_above_min() {
        for margin in [1.0, 1.05, 1.20, 2.5] {
            let pricing = PricingConfig {
                margin_multiplier: margin,
                modeling_fee: 25.0,
            };
            let quote = compute_quote(&request(false), &estimate(50.0, 4.0), &machine(), 0.20, &pricing);
            assert!(quote.price_max >= quote.price_min, "margin {margin}");
        }
    }

    #[test]
    fn test_monotonic_in_estimated_hours() {
        let low = compute_quote(&request(true), &estimate(50.0, 4.0), &machine(), 0.20, &pricing());
        let high = compute_quote(&request(true), &estimate(50.0, 8.0), &machine(), 0.20, &pricing());
        assert!(high.price_min >= low.price_min);
    }

    #[test]
    fn test_monotonic_in_base_cost() {
        let low = compute_quote(&request(true), &estimate(50.0, 4.0), &machine(), 0.20, &pricing());
        let high = compute_quote(&request(true), &estimate(80.0, 4.0), &machine(), 0.20, &pricing());
        assert!(high.price_min >= low.price_min);
    }

    #[test]
    fn test_monotonic_in_hourly_cost() {
        let low = compute_quote(&request(true), &estimate(50.0, 4.0), &machine(), 0.20, &pricing());
        let high = compute_quote(&request(true), &estimate(50.0, 4.0), &machine(), 0.50, &pricing());
        assert!(high.price_min >= low.price_min);
    }

    #[test]
    fn test_rationale_names_the_machine_first() {
        let quote = compute_quote(&request(true), &estimate(50.0, 4.0), &machine(), 0.20, &pricing());
        assert_eq!(quote.rationale, "Using the Bambu Lab A1 Mini. similar vase");
    }

    #[test]
    fn test_non_negative_inputs_give_non_negative_prices() {
        let quote = compute_quote(&request(false), &estimate(0.0, 0.0), &machine(), 0.0, &pricing());
        assert!(quote.price_min >= 0.0);
        assert!(quote.price_max >= 0.0);
        assert!(quote.machine_cost >= 0.0);
    }
}
