use weakboost::Accumulator;


// Many tiny weights folded into a large total,
// the shape of a boosting renormalization over a large sample.
#[test]
fn compensated_sum_beats_naive_sum() {
    let n = 2_000_000;
    let mut naive = 0f32;
    let mut acc = Accumulator::new();
    for i in 0..n {
        let v = if i % 2 == 0 { 1.0_f32 } else { 1e-7_f32 };
        naive += v;
        acc += v;
    }

    let exact = n as f64 / 2.0 * (1.0 + 1e-7_f32 as f64);
    let naive_err = (naive as f64 - exact).abs();
    let acc_err = (acc.total() as f64 - exact).abs();
    assert!(acc_err < naive_err, "compensated {acc_err} vs naive {naive_err}");
    assert!(acc_err <= 0.0625, "compensated error {acc_err}");
}


#[test]
fn accumulator_is_a_value() {
    let mut a = Accumulator::new();
    a.add(2.0);
    a.subtract(0.5);
    let b = a;
    a.clear();

    assert_eq!(a.total(), 0.0);
    assert_eq!(b.total(), 1.5);

    let c: Accumulator = vec![0.25_f32; 8].into_iter().sum();
    assert_eq!(c.total(), 2.0);
}
