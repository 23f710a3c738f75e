//! Machine-hour cost model.

use crate::error::{QuoteError, QuoteResult};
use crate::models::Machine;

/// Depreciation-based cost per operating hour: investment cost spread over
/// the machine's rated lifetime. Undefined for a non-positive lifetime.
pub fn hourly_cost(machine: &Machine) -> QuoteResult<f64> {
    if machine.lifetime_hours <= 0.0 {
        return Err(QuoteError::Configuration(format!(
            "machine '{}' has non-positive lifetime hours ({})",
            machine.name, machine.lifetime_hours
        )));
    }

    Ok(machine.investment_cost / machine.lifetime_hours)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine(investment_cost: f64, lifetime_hours: f64) -> Machine {
        Machine {
            name: "Bambu Lab A1 Mini".to_string(),
            investment_cost,
            lifetime_hours,
        }
    }

    #[test]
    fn test_hourly_cost_reference_machine() {
        let cost = hourly_cost(&machine(1200.0, 6000.0)).unwrap();
        assert!((cost - 0.20).abs() < 1e-12);
    }

    #[test]
    fn test_hourly_cost_linear_in_investment() {
        let base = hourly_cost(&machine(1200.0, 6000.0)).unwrap();
        let doubled = hourly_cost(&machine(2400.0, 6000.0)).unwrap();
        assert!((doubled - 2.0 * base).abs() < 1e-12);
    }

    #[test]
    fn test_hourly_cost_inverse_in_lifetime() {
        let base = hourly_cost(&machine(1200.0, 6000.0)).unwrap();
        let halved_lifetime = hourly_cost(&machine(1200.0, 3000.0)).unwrap();
        assert!((halved_lifetime - 2.0 * base).abs() < 1e-12);
    }

    #[test]
    fn test_hourly_cost_times_lifetime_recovers_investment() {
        let m = machine(1437.0, 5321.0);
        let cost = hourly_cost(&m).unwrap();
        assert!((cost * m.lifetime_hours - m.investment_cost).abs() < 1e-9);
    }

    #[test]
    fn test_zero_lifetime_is_a_configuration_error() {
        let err = hourly_cost(&machine(1200.0, 0.0)).unwrap_err();
        assert!(matches!(err, QuoteError::Configuration(_)));
    }

    #[test]
    fn test_negative_lifetime_is_a_configuration_error() {
        let err = hourly_cost(&machine(1200.0, -10.0)).unwrap_err();
        assert!(matches!(err, QuoteError::Configuration(_)));
    }
}
