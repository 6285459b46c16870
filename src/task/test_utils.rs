use proptest::prelude::*;

use crate::context::Context;
use crate::task::Task;

// the three tasks of the worked example: with a "complex" context they score 7.8, 3.25 and 1.56

pub fn example_task_1() -> Task {
    Task::new()
        .with("name", "write the migration")
        .with("importance", 2)
        .with("urgency", 3)
}

pub fn example_task_2() -> Task {
    Task::new()
        .with("name", "pay down the parser debt")
        .with("importance", 5)
        .with("urgency", 1)
        .with("technical_debt", 10)
}

pub fn example_task_3() -> Task {
    Task::new()
        .with("name", "try the new builder pattern")
        .with("importance", 1)
        .with("urgency", 1)
        .with("introduces_new_pattern", true)
}

pub fn example_task_list() -> Vec<Task> {
    vec![
        example_task_1(),
        example_task_2(),
        example_task_3(),
    ]
}

pub fn example_complex_context() -> Context {
    Context::new().with("project_complexity", "complex")
}

// invalid tasks, impl'd directly on Task like the valid ones would be if the fields were public

impl Task {
    pub fn example_invalid_string_importance() -> Task {
        Task::new()
            .with("name", "importance is text")
            .with("importance", "very")
            .with("urgency", 2)
    }

    pub fn example_invalid_integer_pattern_flag() -> Task {
        Task::new()
            .with("name", "pattern flag is a number")
            .with("introduces_new_pattern", 1)
    }
}

// proptest gen functions

prop_compose! {
    pub fn arb_task()(importance in 0..100i64,
                      urgency in 0..100i64,
                      technical_debt in 0..30i64,
                      introduces_new_pattern in any::<bool>()) -> Task {
        Task::new()
            .with("importance", importance)
            .with("urgency", urgency)
            .with("technical_debt", technical_debt)
            .with("introduces_new_pattern", introduces_new_pattern)
    }
}

prop_compose! {
    /// Tasks drawn from a small value range so that equal scores are common. Each carries its
    /// position in the list as `id`.
    pub fn arb_task_list_with_ties()(values in prop::collection::vec((1..4i64, 1..4i64, any::<bool>()), 0..40))
        -> Vec<Task> {
            values.into_iter()
                .enumerate()
                .map(|(id, (importance, urgency, pattern))| {
                    Task::new()
                        .with("id", id as i64)
                        .with("importance", importance)
                        .with("urgency", urgency)
                        .with("introduces_new_pattern", pattern)
                })
                .collect()
    }
}

prop_compose! {
    pub fn arb_context()(complexity in prop_oneof![
                             Just("complex"),
                             Just("simple"),
                             Just("intermediate"),
                             Just(""),
                         ]) -> Context {
        Context::new().with("project_complexity", complexity)
    }
}
