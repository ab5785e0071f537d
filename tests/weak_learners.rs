use weakboost::prelude::*;


fn two_clusters(seed: u64) -> Vec<Sample> {
    gaussian_blobs(&[vec![-2.0, 1.0, 0.0], vec![2.0, -1.0, 0.5]], 60, 0.5, seed)
}


fn probe() -> Vec<Sample> {
    gaussian_blobs(&[vec![-1.0, 0.0, 0.0], vec![1.5, -0.5, 0.5]], 20, 1.0, 99)
}


fn weighted(samples: &[Sample]) -> Vec<f32> {
    // A non-uniform distribution, as seen in later boosting rounds.
    let mut w = (0..samples.len())
        .map(|i| 1.0 + (i % 7) as f32)
        .collect::<Vec<_>>();
    let total = w.iter().sum::<f32>();
    w.iter_mut().for_each(|x| *x /= total);
    w
}


fn assert_round_trip<L>(trained: &L, mut fresh: L)
    where L: WeakLearner
{
    let params = trained.export_params();
    fresh.import_params(&params).unwrap();
    assert_eq!(fresh.export_params(), params);
    for sample in probe() {
        assert_eq!(trained.label(&sample), fresh.label(&sample));
    }
}


#[test]
fn decision_tree_single_class_is_a_leaf() {
    let samples = SyntheticClusters::new(3)
        .n_samples(40)
        .seed(8)
        .generate()
        .into_iter()
        .map(|s| Sample::new(s.x().to_vec(), 1))
        .collect::<Vec<_>>();

    let mut tree = DecisionTree::new();
    tree.train_uniform(&samples, 1);
    assert_eq!(tree.n_leaves(), 1);
    assert!(samples.iter().all(|s| tree.label(s) == 1.0));
    assert_eq!(tree.error(&samples, 1), 0.0);
}


#[test]
fn naive_bayes_separates_two_clusters() {
    let samples = two_clusters(1);
    let mut nb = NaiveBayes::new();
    nb.train_uniform(&samples, 0);
    assert!(nb.error(&samples, 0) < 0.05);

    let w = weighted(&samples);
    nb.train(&samples, &w, 1);
    assert!(nb.error(&samples, 1) < 0.05);
}


#[test]
fn logistic_regression_separates_two_clusters() {
    let samples = two_clusters(2);
    let mut lr = LogisticRegression::new();
    lr.train_uniform(&samples, 0);
    assert!(lr.error(&samples, 0) < 0.05);

    let w = weighted(&samples);
    lr.train(&samples, &w, 1);
    assert!(lr.error(&samples, 1) < 0.05);
}


#[test]
fn every_learner_round_trips() {
    let samples = two_clusters(3);
    let w = weighted(&samples);

    let mut tree = DecisionTree::new();
    tree.train(&samples, &w, 1);
    assert_round_trip(&tree, DecisionTree::new());

    let mut nb = NaiveBayes::new();
    nb.train(&samples, &w, 1);
    assert_round_trip(&nb, NaiveBayes::new());

    let mut lr = LogisticRegression::new();
    lr.train(&samples, &w, 1);
    assert_round_trip(&lr, LogisticRegression::new());

    let mut svm = Svm::new();
    svm.train(&samples, &w, 1);
    assert_round_trip(&svm, Svm::new());

    let mut any = AnyWeakLearner::from(NaiveBayes::new());
    any.train(&samples, &w, 0);
    assert_round_trip(&any, AnyWeakLearner::default());
}


#[test]
fn training_twice_gives_the_same_parameters() {
    let samples = two_clusters(4);
    let w = weighted(&samples);

    let learners: Vec<AnyWeakLearner> = vec![
        DecisionTree::new().into(),
        NaiveBayes::new().into(),
        LogisticRegression::new().into(),
        Svm::new().seed(5).into(),
    ];
    for prototype in learners {
        let mut a = prototype.clone();
        let mut b = prototype.clone();
        a.train(&samples, &w, 1);
        b.train(&samples, &w, 1);
        assert_eq!(a, b, "{} is not deterministic", a.name());

        // Training the same instance again overwrites the old parameters.
        a.train(&samples, &w, 1);
        assert_eq!(a.export_params(), b.export_params());
    }
}


#[test]
fn empty_training_set_is_tolerated() {
    let probe = Sample::new(vec![0.5, 0.5, 0.5], 0);
    let learners: Vec<AnyWeakLearner> = vec![
        DecisionTree::new().into(),
        NaiveBayes::new().into(),
        LogisticRegression::new().into(),
        Svm::new().into(),
    ];
    for mut learner in learners {
        learner.train(&[], &[], 0);
        assert_eq!(learner.label(&probe), 0.0, "{}", learner.name());
        assert_eq!(learner.error(&[], 0), 0.0);
    }
}
