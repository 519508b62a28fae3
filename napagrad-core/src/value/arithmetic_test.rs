use super::*;
use approx::assert_relative_eq;

#[test]
fn test_addition() {
    let a = Value::new(2.0);
    let b = Value::new(3.0);
    let c = &a + &b;
    assert_eq!(c.value(), 5.0);
    assert_eq!(c.op(), Op::Add);
    let ops = c.operands();
    assert!(ops[0].ptr_eq(&a));
    assert!(ops[1].ptr_eq(&b));
}

#[test]
fn test_subtraction() {
    let c = Value::new(5.0) - Value::new(3.0);
    assert_eq!(c.value(), 2.0);
    assert_eq!(c.op(), Op::Sub);
}

#[test]
fn test_multiplication() {
    let c = Value::new(2.0) * Value::new(3.0);
    assert_eq!(c.value(), 6.0);
    assert_eq!(c.op(), Op::Mul);
}

#[test]
fn test_binary_ops_match_f64_arithmetic() {
    let samples = [-3.5, -1.0, 0.0, 0.25, 2.0, 7.75];
    for &x in &samples {
        for &y in &samples {
            let (a, b) = (Value::new(x), Value::new(y));
            assert_eq!((&a + &b).value(), x + y);
            assert_eq!((&a - &b).value(), x - y);
            assert_eq!((&a * &b).value(), x * y);
        }
    }
}

#[test]
fn test_power() {
    let a = Value::new(2.0);
    let b = a.pow(3.0);
    assert_eq!(b.value(), 8.0);
    assert_eq!(b.op(), Op::Pow);
    assert_eq!(b.operands()[1].value(), 3.0, "exponent is wrapped in a leaf");
}

#[test]
fn test_power_negative_base_fractional_exponent_is_nan() {
    assert!(Value::new(-2.0).pow(0.5).value().is_nan());
}

#[test]
fn test_exp_overflows_to_infinity() {
    let e = Value::new(1000.0).exp();
    assert!(e.value().is_infinite());
    assert_relative_eq!(Value::new(1.0).exp().value(), std::f64::consts::E);
}

#[test]
fn test_relu() {
    assert_eq!(Value::new(2.0).relu().value(), 2.0);
    assert_eq!(Value::new(-1.0).relu().value(), 0.0);
    assert_eq!(Value::new(0.0).relu().value(), 0.0);
    assert!(Value::new(f64::NAN).relu().value().is_nan());
}

#[test]
fn test_relu_of_negative_zero_is_positive_zero() {
    let out = Value::new(-0.0).relu().value();
    assert_eq!(out, 0.0);
    assert!(out.is_sign_positive());
    assert_eq!(format!("{:.4}", out), "0.0000");
}

#[test]
fn test_relu_matches_max() {
    for &x in &[-10.0, -0.5, 0.0, 0.5, 10.0] {
        assert_eq!(Value::new(x).relu().value(), x.max(0.0));
    }
}

#[test]
fn test_tanh() {
    assert_eq!(Value::new(0.0).tanh().value(), 0.0);
    assert_relative_eq!(Value::new(1.0).tanh().value(), 1.0f64.tanh(), epsilon = 1e-10);
}

#[test]
fn test_scalar_operands_are_wrapped() {
    let a = Value::new(2.0);
    let b = &a + 3.0;
    assert_eq!(b.value(), 5.0);
    assert!(b.operands()[1].is_leaf());
    assert_eq!((&a * 4.0).value(), 8.0);
    assert_eq!((&a - 1.0).value(), 1.0);
    assert_eq!((10.0 - &a).value(), 8.0);
    assert_eq!((3.0 * a.clone()).value(), 6.0);
}

#[test]
fn test_division_and_negation_are_composites() {
    let a = Value::new(6.0);
    let b = Value::new(4.0);
    let q = &a / &b;
    assert_eq!(q.value(), 1.5);
    assert_eq!(q.op(), Op::Mul);
    let n = -&a;
    assert_eq!(n.value(), -6.0);
    assert_eq!(n.op(), Op::Mul);
}

#[test]
fn test_operations_do_not_mutate_operands() {
    let a = Value::new(2.0);
    let _ = &(&a * &a).tanh() + 1.0;
    assert_eq!(a.value(), 2.0);
    assert_eq!(a.gradient(), 0.0);
}

#[test]
fn test_sum_of_values() {
    let xs: Vec<Value> = (1..=4).map(|i| Value::new(i as f64)).collect();
    let total: Value = xs.iter().sum();
    assert_eq!(total.value(), 10.0);
    let owned: Value = xs.into_iter().sum();
    assert_eq!(owned.value(), 10.0);
}
