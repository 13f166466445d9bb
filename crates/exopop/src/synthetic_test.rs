use occurrence::{OccurrenceModel, PopulationParams};

use crate::synthetic::SyntheticSurveyBuilder;

#[test]
fn surveys_are_reproducible() {
    let first = SyntheticSurveyBuilder::new().stars(200).seed(3).build().unwrap();
    let second = SyntheticSurveyBuilder::new().stars(200).seed(3).build().unwrap();
    assert_eq!(first.stars, second.stars);
    assert_eq!(first.detections, second.detections);
    assert_eq!(first.injected, second.injected);
}

#[test]
fn injected_planets_follow_the_rate() {
    let truth = PopulationParams::new(2.0_f64.ln(), 0.0, 0.0);
    let survey = SyntheticSurveyBuilder::new()
        .stars(1000)
        .truth(truth)
        .seed(8)
        .build()
        .unwrap();

    // Poisson total with mean 2000 and standard deviation ≈ 45
    assert_eq!(survey.stars.len(), 1000);
    assert!((survey.injected as f64 - 2000.0).abs() < 250.0);
    assert!(survey.detections.len() < survey.injected);
    assert!(survey.stars.iter().all(|star| star.is_valid()));
}

#[test]
fn detections_lie_in_the_model_domain_around_known_hosts() {
    let model = OccurrenceModel::default();
    let survey = SyntheticSurveyBuilder::new()
        .stars(500)
        .model(model)
        .seed(5)
        .build()
        .unwrap();

    assert!(!survey.detections.is_empty());
    for detection in &survey.detections {
        assert!(model.contains(detection.period, detection.radius));
        let host = detection.kepid.unwrap();
        assert!(survey.stars.iter().any(|star| star.id == host));
        assert_eq!(detection.radius_err_upper, Some(0.1 * detection.radius));
    }
}
