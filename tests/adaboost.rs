use weakboost::prelude::*;
use weakboost::BoostError;


fn separated_blobs() -> Vec<Sample> {
    gaussian_blobs(&[vec![-5.0, -5.0], vec![5.0, 5.0]], 50, 1.0, 17)
}


fn clusters() -> Vec<Sample> {
    SyntheticClusters::new(3)
        .n_samples(240)
        .variance(0.05)
        .seed(3)
        .generate()
}


fn centroid(class_index: usize) -> Sample {
    let x = (0..3)
        .map(|j| if j == class_index { 1.0 } else { -1.0 })
        .collect::<Vec<f32>>();
    Sample::new(x, class_index)
}


/// Tests for `AdaBoost`.
#[cfg(test)]
pub mod adaboost_tests {
    use super::*;


    #[test]
    fn single_svm_round_separates_blobs() {
        let samples = separated_blobs();
        let f = AdaBoost::init(&samples)
            .n_weak_learners(1)
            .run(&Svm::new())
            .unwrap();

        assert_eq!(f.n_classes(), 2);
        assert_eq!(f.n_attributes(), 2);
        assert_eq!(f.error(&samples), 0.0);
    }


    #[test]
    fn centroids_are_recovered() {
        let samples = clusters();
        let learners: Vec<AnyWeakLearner> = vec![
            LogisticRegression::new().into(),
            DecisionTree::new().max_depth(2).into(),
        ];
        for learner in learners {
            let f = AdaBoost::init(&samples)
                .n_weak_learners(3)
                .run(&learner)
                .unwrap();

            assert_eq!(f.n_classes(), 3);
            assert_eq!(f.ensembles().iter().map(|e| e.len()).sum::<usize>(), 9);
            for k in 0..3 {
                let (class, confidence) = f.label(&centroid(k));
                assert_eq!(class, k, "{}", learner.name());
                assert!(confidence > 0.5, "{}: {confidence}", learner.name());
            }
        }
    }


    #[test]
    fn model_round_trips_through_text() {
        let samples = clusters();
        let f = AdaBoost::init(&samples)
            .n_weak_learners(2)
            .run(&NaiveBayes::new())
            .unwrap();

        let params = f.export_params();
        let g = BoostedClassifier::<NaiveBayes>::import_params(&params).unwrap();
        assert_eq!(g.export_params(), params);
        assert_eq!(g.n_weak_learners(), 2);
        assert_eq!(f.predict_all(&samples), g.predict_all(&samples));
    }


    #[test]
    fn mixed_learner_model_round_trips() {
        let samples = clusters();
        let f = AdaBoost::init(&samples)
            .n_weak_learners(2)
            .run(&AnyWeakLearner::from(Svm::new().seed(11)))
            .unwrap();

        let params = f.export_params();
        assert!(params.contains("svm,"));

        let g = BoostedClassifier::<AnyWeakLearner>::import_params(&params)
            .unwrap();
        assert_eq!(g.export_params(), params);
        assert_eq!(f.predict_all(&samples), g.predict_all(&samples));
    }


    #[test]
    fn model_round_trips_through_json() {
        let samples = clusters();
        let f = AdaBoost::init(&samples)
            .n_weak_learners(2)
            .run(&DecisionTree::new().max_depth(2))
            .unwrap();

        let json = f.to_json().unwrap();
        let g = BoostedClassifier::<DecisionTree>::from_json(&json).unwrap();
        assert_eq!(f, g);
    }


    #[test]
    fn truncated_model_is_rejected() {
        let samples = separated_blobs();
        let f = AdaBoost::init(&samples)
            .n_weak_learners(1)
            .run(&LogisticRegression::new())
            .unwrap();

        let params = f.export_params();
        let cut = &params[..params.len() / 2];
        assert!(BoostedClassifier::<LogisticRegression>::import_params(cut).is_err());
    }


    #[test]
    fn ragged_attributes_are_rejected() {
        let samples = vec![
            Sample::new(vec![0.0, 1.0], 0),
            Sample::new(vec![1.0], 1),
        ];
        let err = AdaBoost::init(&samples)
            .run(&DecisionTree::new())
            .unwrap_err();
        assert!(matches!(err, BoostError::DimensionMismatch { expected: 2, actual: 1 }));
    }


    #[test]
    fn verbose_run_matches_quiet_run() {
        let samples = clusters();
        let quiet = AdaBoost::init(&samples)
            .n_weak_learners(2)
            .run(&LogisticRegression::new())
            .unwrap();
        let loud = AdaBoost::init(&samples)
            .n_weak_learners(2)
            .verbose(true)
            .run(&LogisticRegression::new())
            .unwrap();
        assert_eq!(quiet, loud);
    }


    #[test]
    fn cross_validated_error_is_small() {
        let samples = clusters();
        let errors = CrossValidation::new(&samples)
            .n_folds(4)
            .shuffle()
            .map(|(train, test)| {
                let f = AdaBoost::init(&train)
                    .n_weak_learners(2)
                    .run(&LogisticRegression::new())
                    .unwrap();
                f.error(&test)
            })
            .collect::<Vec<f32>>();

        assert_eq!(errors.len(), 4);
        assert!(errors.iter().all(|e| *e < 0.1), "{errors:?}");
    }
}
