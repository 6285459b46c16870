use crate::task::{share_all, SharedTask, Task};


/// The `id` attribute of each task, in order.
fn ids(tasks: &[SharedTask]) -> Vec<i64> {
    tasks.iter()
        .map(|t| t.borrow().get("id").and_then(|v| v.as_integer()).expect("Task without id"))
        .collect()
}

fn names(tasks: &[SharedTask]) -> Vec<String> {
    tasks.iter()
        .map(|t| t.borrow().name().unwrap_or("<unnamed>").to_string())
        .collect()
}

/// Three valid tasks around an invalid one, tagged with ids 0..4.
fn tasks_with_invalid() -> Vec<SharedTask> {
    share_all(vec![
        Task::new().with("id", 0).with("importance", 1),
        Task::new().with("id", 1).with("importance", 3),
        Task::example_invalid_string_importance().with("id", 2),
        Task::new().with("id", 3).with("importance", 2),
    ])
}

#[test]
fn test_policy_from_str() {
    use super::FailurePolicy;
    use std::str::FromStr;

    assert_eq!(FailurePolicy::from_str("strict").unwrap(), FailurePolicy::Strict);
    assert_eq!(FailurePolicy::from_str("tolerant").unwrap(), FailurePolicy::Tolerant);

    let res = FailurePolicy::from_str("lenient");
    assert!(res.is_err(), "Unknown policy was parsed: {:?}", res.unwrap());
    assert!(res.unwrap_err().to_string().contains("Unknown failure policy"));
}

#[test]
fn test_policy_default_is_strict() {
    use super::{FailurePolicy, TaskManager};
    use crate::context::Context;

    assert_eq!(FailurePolicy::default(), FailurePolicy::Strict);
    let manager = TaskManager::new(Vec::new(), Context::new());
    assert_eq!(manager.policy(), FailurePolicy::Strict);
}

#[test]
fn test_descending_orders_nan_last() {
    use std::cmp::Ordering;
    use super::descending;

    assert_eq!(descending(2.0, 1.0), Ordering::Less);
    assert_eq!(descending(1.0, 2.0), Ordering::Greater);
    assert_eq!(descending(0.0, -0.0), Ordering::Equal);
    assert_eq!(descending(std::f64::NAN, 1.0), Ordering::Greater);
    assert_eq!(descending(1.0, std::f64::NAN), Ordering::Less);
    assert_eq!(descending(std::f64::NAN, std::f64::NAN), Ordering::Equal);
}
