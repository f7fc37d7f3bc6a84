//! Configuration example tests

use darko_value::config::Config;
use darko_value::model::{DarkoModel, PricingParams, Valuation, ValuationModel};

#[test]
fn test_config_example_loads() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config.toml.example");
    let config = Config::load(path).unwrap();

    assert_eq!(config.projection.horizon_years, 5);
    assert_eq!(config.ranking.top_n, 10);
    assert!(config.projection.inflation.is_empty());

    let model = DarkoModel::from_config(&config.model);
    assert_eq!(model, DarkoModel::default());
    assert_eq!(
        model.valuate(PricingParams::new(70.0, 30.0, 3.0, 0.0)),
        Valuation::Dollars(rust_decimal_macros::dec!(39.5))
    );
}
