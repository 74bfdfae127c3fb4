//! Integration tests for transformation combinators.

#![cfg(feature = "collection")]

use lowbar::collection::{
    Criterion, Dispatch, Invocable, MethodNotFoundError, Record, invoke, map, pluck, sort_by,
};
use rstest::rstest;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
struct City {
    name: &'static str,
    population: u32,
}

impl Record for City {
    type Field = u32;

    fn field(&self, name: &str) -> Option<u32> {
        (name == "population").then_some(self.population)
    }
}

impl Dispatch for City {
    type Args = (u32,);
    type Output = String;

    fn dispatch(&self, method: &str, (growth,): &(u32,)) -> Option<String> {
        match method {
            "banner" => Some(format!("{}: {}", self.name, self.population + growth)),
            _ => None,
        }
    }
}

fn cities() -> Vec<City> {
    vec![
        City { name: "ostia", population: 30 },
        City { name: "luna", population: 10 },
        City { name: "cumae", population: 20 },
    ]
}

// =============================================================================
// map / pluck
// =============================================================================

#[rstest]
fn map_produces_one_result_per_element_in_order() {
    let names = map(&cities(), |city| city.name);
    assert_eq!(names, vec!["ostia", "luna", "cumae"]);
}

#[rstest]
fn map_over_a_mapping_produces_a_sequence() {
    let scores = BTreeMap::from([("a", 1), ("b", 2)]);
    let doubled = map(&scores, |n| n * 2);
    assert_eq!(doubled.len(), 2);
    assert!(doubled.contains(&2) && doubled.contains(&4));
}

#[rstest]
fn pluck_extracts_a_field_from_every_element() {
    assert_eq!(pluck(&cities(), "population"), vec![Some(30), Some(10), Some(20)]);
}

#[rstest]
fn pluck_of_an_absent_field_is_all_none() {
    assert_eq!(pluck(&cities(), "altitude"), vec![None, None, None]);
}

// =============================================================================
// sort_by
// =============================================================================

#[rstest]
fn sort_by_field_orders_numerically_in_place() {
    let mut collection = cities();
    let sorted = sort_by(&mut collection, Criterion::Field("population"));
    assert_eq!(
        sorted.iter().map(|city| city.name).collect::<Vec<_>>(),
        vec!["luna", "cumae", "ostia"]
    );
    // Same allocation, mutated rather than copied.
    assert_eq!(collection[0].name, "luna");
}

#[rstest]
fn sort_by_function_criterion_orders_by_rank() {
    let mut collection = cities();
    sort_by(
        &mut collection,
        Criterion::By(&|city: &City| -f64::from(city.population)),
    );
    assert_eq!(
        collection.iter().map(|city| city.population).collect::<Vec<_>>(),
        vec![30, 20, 10]
    );
}

#[rstest]
fn sort_by_missing_field_keeps_all_elements() {
    // Every rank is NaN: order is unspecified, membership is not.
    let mut collection = cities();
    sort_by(&mut collection, Criterion::Field("altitude"));
    assert_eq!(collection.len(), 3);
    for city in cities() {
        assert!(collection.contains(&city));
    }
}

// =============================================================================
// invoke
// =============================================================================

#[rstest]
fn invoke_by_method_name_collects_results() {
    let banners = invoke(&cities(), Invocable::Method("banner"), &(5,));
    assert_eq!(
        banners,
        Ok(vec![
            "ostia: 35".to_string(),
            "luna: 15".to_string(),
            "cumae: 25".to_string(),
        ])
    );
}

#[rstest]
fn invoke_with_unknown_method_reports_the_name() {
    let outcome = invoke(&cities(), Invocable::Method("raze"), &(0,));
    assert_eq!(
        outcome,
        Err(MethodNotFoundError {
            method: "raze".to_string()
        })
    );
}

#[rstest]
fn invoke_with_callable_binds_each_element() {
    let outcome = invoke(
        &cities(),
        Invocable::Callable(&|city: &City, (suffix,): &(u32,)| {
            format!("{}-{}", city.name, suffix)
        }),
        &(1,),
    );
    assert_eq!(
        outcome,
        Ok(vec![
            "ostia-1".to_string(),
            "luna-1".to_string(),
            "cumae-1".to_string(),
        ])
    );
}
