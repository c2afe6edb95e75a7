//! Tests for stateful computations.

use preludium::data::state::{get, gets, modify, put};
use preludium::data::{Either, State, StateEither};
use rstest::rstest;

#[rstest]
fn a_counter_threads_its_state() {
    let next_id: State<u32, u32> = get().flat_map(|n: u32| put(n + 1).fmap(move |()| n));

    let (first, after_first) = next_id.run(0);
    let (second, after_second) = next_id.run(after_first);
    assert_eq!((first, second, after_second), (0, 1, 2));
    assert_eq!(after_first, 1);
}

#[rstest]
fn a_stack_interpreter_built_from_primitives() {
    type Stack = Vec<i32>;

    let push = |value: i32| modify(move |mut stack: Stack| {
        stack.push(value);
        stack
    });
    let pop: State<Stack, Option<i32>> = State::new(|mut stack: Stack| {
        let top = stack.pop();
        (top, stack)
    });

    let program = push(1)
        .then(push(2))
        .then(push(3))
        .then(pop.clone())
        .then(pop);

    let (top, remaining) = program.run(Vec::new());
    assert_eq!(top, Some(2));
    assert_eq!(remaining, vec![1]);
}

#[rstest]
fn map2_sequences_two_computations_in_order() {
    let record = |label: &'static str| {
        State::new(move |mut trace: Vec<&'static str>| {
            trace.push(label);
            (label.len(), trace)
        })
    };

    let combined = record("one").map2(record("three"), |a, b| a + b);
    let (total, trace) = combined.run(Vec::new());
    assert_eq!(total, 8);
    assert_eq!(trace, vec!["one", "three"]);
}

#[rstest]
fn gets_projects_without_mutating() {
    let length: State<String, usize> = gets(String::len);
    let (len, state) = length.run("hello".to_string());
    assert_eq!(len, 5);
    assert_eq!(state, "hello");
}

#[rstest]
fn product_pairs_sequential_results() {
    let double = State::new(|n: i32| (n * 2, n));
    let triple = State::new(|n: i32| (n * 3, n));
    let both = double.product(triple);
    assert_eq!(both.run(5), ((10, 15), 5));
}

#[rstest]
fn state_either_carries_failure_as_a_result_value() {
    let withdraw = |amount: i32| -> StateEither<i32, String, i32> {
        State::new(move |balance: i32| {
            if balance >= amount {
                (Either::Right(amount), balance - amount)
            } else {
                (Either::Left(format!("insufficient funds for {amount}")), balance)
            }
        })
    };

    assert_eq!(withdraw(30).run(100), (Either::Right(30), 70));
    assert_eq!(
        withdraw(30).run(10),
        (Either::Left("insufficient funds for 30".to_string()), 10)
    );
}

#[rstest]
fn eval_and_exec_are_run_projections() {
    let computation = State::new(|n: i32| (n + 1, n * 2));
    assert_eq!(computation.eval(3), 4);
    assert_eq!(computation.exec(3), 6);
}
