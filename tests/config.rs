use weakboost::prelude::*;


#[test]
fn learner_configs_load_from_json() {
    let json = r#"{ "c": 0.5, "tolerance": 0.125, "clean_passes": 3,
                    "max_iter": 200, "seed": 9 }"#;
    let config: SvmConfig = serde_json::from_str(json).unwrap();
    let svm = Svm::with_config(config);
    let built = Svm::new()
        .c(0.5)
        .tolerance(0.125)
        .clean_passes(3)
        .max_iter(200)
        .seed(9);
    assert_eq!(svm.config(), built.config());

    let json = r#"{ "n_bins": 10, "max_depth": 2 }"#;
    let config: DecisionTreeConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config, DecisionTreeConfig { n_bins: 10, max_depth: Some(2) });

    let json = r#"{ "n_bins": 25, "max_depth": null }"#;
    let config: DecisionTreeConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config, DecisionTreeConfig::default());

    let json = r#"{ "learning_rate": 0.25, "max_epochs": 20, "decay": 0.5,
                    "epsilon": 0.00001, "tolerance": 0.001 }"#;
    let config: LogisticRegressionConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config.learning_rate, 0.25);
    assert_eq!(config.decay, 0.5);
    assert_eq!(config.max_epochs, 20);
}


#[test]
fn configs_survive_a_json_round_trip() {
    let svm = SvmConfig { c: 0.5, tolerance: 0.25, seed: 42, ..SvmConfig::default() };
    let json = serde_json::to_string(&svm).unwrap();
    assert_eq!(serde_json::from_str::<SvmConfig>(&json).unwrap(), svm);

    let tree = DecisionTreeConfig { n_bins: 8, max_depth: Some(4) };
    let json = serde_json::to_string(&tree).unwrap();
    assert_eq!(serde_json::from_str::<DecisionTreeConfig>(&json).unwrap(), tree);

    let boost = AdaBoostConfig { n_weak_learners: 3, verbose: true };
    let json = serde_json::to_string(&boost).unwrap();
    assert_eq!(serde_json::from_str::<AdaBoostConfig>(&json).unwrap(), boost);
}


#[test]
fn json_config_drives_training() {
    let samples = SyntheticClusters::new(2)
        .n_samples(60)
        .variance(0.05)
        .seed(5)
        .generate();

    let config: AdaBoostConfig =
        serde_json::from_str(r#"{ "n_weak_learners": 2, "verbose": false }"#)
            .unwrap();
    let f = AdaBoost::with_config(&samples, config)
        .run(&DecisionTree::new())
        .unwrap();
    assert_eq!(f.n_weak_learners(), 2);
    assert_eq!(f.n_classes(), 2);
}
