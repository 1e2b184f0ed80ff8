/// Mapping of modules in src/ to the kind of computation they perform
/// and whether they mutate the caller's buffer
pub const PRIMITIVE_MAP: &[(&str, &str, &str)] = &[
    // Index translation
    ("mapping/domain.rs", "Index translation", "Pure"),
    ("mapping/invariant.rs", "State predicate", "Pure"),
    // Primitives
    ("placement/cyclic.rs", "In-place placement", "Mutating"),
    ("marking/presence.rs", "Sign-bit marking", "Reversible"),
    ("cycle/floyd.rs", "Functional graph cycle entrance", "Pure"),
    ("partitioning/dutch_flag.rs", "Three-way partition", "Mutating"),
    // Finders
    ("finders/missing.rs", "Missing value search", "Mutating"),
    ("finders/duplicates.rs", "Duplicate search", "Mutating"),
    ("finders/ordering.rs", "Linear-time ordering", "Mutating"),
];

pub fn mutation_of(module: &str) -> Option<&'static str> {
    PRIMITIVE_MAP
        .iter()
        .find(|(path, _, _)| *path == module)
        .map(|&(_, _, mutation)| mutation)
}
