use numexplore::configuration::AnalysisRequest;
use numexplore::logistic;
use numexplore::logistic::mapparameters::MapParameters;
use numexplore::quadrature;
use numexplore::quadrature::quadratureparameters::QuadratureParameters;

const REQUEST: &str = r#"{
    "logistic": { "r": 3.8, "x0": 0.123456, "n": 2000, "burn_in": 200 },
    "quadrature": { "expression": "sin(1/x)", "a": 0.001, "b": 1.0,
                    "subinterval_count": 200 }
}"#;

#[test]
fn request_parses_both_parameter_blocks() {
    let request = AnalysisRequest::from_json(REQUEST).unwrap();
    let map = request.logistic().unwrap();
    assert_eq!(map.r(), 3.8);
    assert_eq!(map.n(), 2000);
    assert_eq!(map.burn_in(), 200);
    let quad = request.quadrature().unwrap();
    assert_eq!(quad.expression(), "sin(1/x)");
    assert_eq!(quad.subinterval_count(), 200);
}

#[test]
fn missing_blocks_are_simply_absent() {
    let request = AnalysisRequest::from_json(r#"{ "logistic": { "r": 2.5, "x0": 0.5, "n": 10, "burn_in": 0 } }"#).unwrap();
    assert!(request.logistic().is_some());
    assert!(request.quadrature().is_none());
}

#[test]
fn malformed_request_is_a_json_error_not_a_panic() {
    assert!(AnalysisRequest::from_json("{ not json").is_err());
}

#[test]
fn zero_subinterval_count_is_clamped_to_one() {
    let direct = QuadratureParameters::new("x".to_owned(), 0.0, 1.0, 0);
    assert_eq!(direct.subinterval_count(), 1);

    let request = AnalysisRequest::from_json(r#"{
        "quadrature": { "expression": "x", "a": 0.0, "b": 1.0, "subinterval_count": 0 }
    }"#).unwrap();
    assert_eq!(request.quadrature().unwrap().subinterval_count(), 1);
}

#[test]
fn logistic_analysis_bundles_all_derived_values() {
    let params = MapParameters::new(3.8, 0.123456, 2000, 200);
    let analysis = logistic::analysis::analyze(&params);
    assert_eq!(analysis.trajectory().len(), 2000);
    assert!(analysis.sensitivity().is_finite());
    assert!(analysis.entropy() >= 0.0);

    let json = serde_json::to_value(&analysis).unwrap();
    assert_eq!(json["trajectory"].as_array().unwrap().len(), 2000);
    assert!(json["sensitivity"].is_number());
    assert!(json["entropy"].is_number());
}

#[test]
fn quadrature_analysis_shares_one_compiled_function() {
    let params = QuadratureParameters::new("x".to_owned(), 0.0, 1.0, 100);
    let analysis = quadrature::analysis::analyze(&params);
    assert!((analysis.result().trapezoid() - 0.5).abs() < 1e-12);
    assert_eq!(analysis.series().len(), quadrature::analysis::SAMPLE_POINT_COUNT + 1);
    assert_eq!(analysis.rectangles().len(), 100);

    // The same shape the demo binary writes out.
    let json = serde_json::to_value(&analysis).unwrap();
    assert!(json["result"]["trapezoid"].is_number());
    assert!(json["result"]["step_width"].is_number());
    assert_eq!(json["rectangles"].as_array().unwrap().len(), 100);
}

#[test]
fn malformed_expression_degrades_to_nan_everywhere() {
    let params = QuadratureParameters::new(")(".to_owned(), 0.0, 1.0, 10);
    let analysis = quadrature::analysis::analyze(&params);
    assert!(analysis.result().left().is_nan());
    assert!(analysis.result().right().is_nan());
    assert!(analysis.result().trapezoid().is_nan());
    assert!(analysis.series().ys().iter().all(|y| y.is_nan()));
}

#[test]
fn undefined_series_entries_serialize_as_null() {
    let params = QuadratureParameters::new("1/x".to_owned(), -1.0, 1.0, 2);
    let analysis = quadrature::analysis::analyze(&params);
    let json = serde_json::to_value(analysis.series()).unwrap();
    let ys = json["ys"].as_array().unwrap();
    // The midpoint sits on the pole; serde_json writes the NaN sentinel
    // out as null, which is what the plot layer consumes.
    assert!(ys[ys.len() / 2].is_null());
    assert!(ys[0].is_number());
}
