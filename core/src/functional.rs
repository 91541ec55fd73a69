//! Ready-made predicates, functions, and consumers for the higher-order
//! operations.
//!
//! Any closure works with [`IntVector`](crate::IntVector)'s `filter`, `map`,
//! `all`, and friends; these are the common ones, nameable from the command
//! line through [`predicate_by_name`] and [`function_by_name`].

/// Takes an element, answers yes or no.
pub type Predicate = fn(i32) -> bool;

/// Takes an element, returns a new one.
pub type Function = fn(i32) -> i32;

/// Takes an element, returns nothing.
pub type Consumer = fn(i32);

pub fn is_even(x: i32) -> bool {
    x % 2 == 0
}

pub fn is_odd(x: i32) -> bool {
    x % 2 != 0
}

pub fn is_positive(x: i32) -> bool {
    x > 0
}

pub fn is_negative(x: i32) -> bool {
    x < 0
}

pub fn is_zero(x: i32) -> bool {
    x == 0
}

/// `-x`, wrapping (so `negate(i32::MIN) == i32::MIN`).
pub fn negate(x: i32) -> i32 {
    x.wrapping_neg()
}

/// `x * x`, wrapping.
pub fn square(x: i32) -> i32 {
    x.wrapping_mul(x)
}

/// Prints `x` followed by a space, without a newline.
pub fn print_element(x: i32) {
    print!("{x} ");
}

const PREDICATES: &[(&str, Predicate)] = &[
    ("even", is_even),
    ("odd", is_odd),
    ("positive", is_positive),
    ("negative", is_negative),
    ("zero", is_zero),
];

const FUNCTIONS: &[(&str, Function)] = &[("negate", negate), ("square", square)];

/// Looks up a predicate by its short name (`"even"`, `"odd"`, ...).
pub fn predicate_by_name(name: &str) -> Option<Predicate> {
    PREDICATES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, p)| *p)
}

/// Looks up a function by name (`"negate"`, `"square"`).
pub fn function_by_name(name: &str) -> Option<Function> {
    FUNCTIONS.iter().find(|(n, _)| *n == name).map(|(_, f)| *f)
}

/// Names accepted by [`predicate_by_name`].
pub fn predicate_names() -> impl Iterator<Item = &'static str> {
    PREDICATES.iter().map(|(n, _)| *n)
}

/// Names accepted by [`function_by_name`].
pub fn function_names() -> impl Iterator<Item = &'static str> {
    FUNCTIONS.iter().map(|(n, _)| *n)
}
