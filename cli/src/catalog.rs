use riemann::function::{Function, FunctionRange};

use std::f64::consts::PI;

/// A named function with its fixed domain and value range.
pub struct CatalogEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub definition_range: FunctionRange,
    pub value_range: FunctionRange,
    pub evaluate: fn(f64) -> f64,
}

impl CatalogEntry {
    pub fn function(&self) -> Function {
        Function::new(self.definition_range, self.value_range, self.evaluate)
    }
}

pub static CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        name: "line",
        description: "2x - 0.5",
        definition_range: FunctionRange::Symmetric(1),
        value_range: FunctionRange::Symmetric(2),
        evaluate: |x| 2.0 * x - 0.5,
    },
    CatalogEntry {
        name: "sine",
        description: "2 sin(2 pi x)",
        definition_range: FunctionRange::Symmetric(1),
        value_range: FunctionRange::Symmetric(2),
        evaluate: |x| 2.0 * (2.0 * PI * x).sin(),
    },
    CatalogEntry {
        name: "cubic",
        description: "2x^3",
        definition_range: FunctionRange::Symmetric(1),
        value_range: FunctionRange::Symmetric(2),
        evaluate: |x| 2.0 * x.powi(3),
    },
    CatalogEntry {
        name: "shifted-cubic",
        description: "2(x - 1)^3",
        definition_range: FunctionRange::FromZero(2),
        value_range: FunctionRange::Symmetric(2),
        evaluate: |x| 2.0 * (x - 1.0).powi(3),
    },
    CatalogEntry {
        name: "cosine",
        description: "1.5 cos(2 pi x)",
        definition_range: FunctionRange::FromZero(2),
        value_range: FunctionRange::Symmetric(2),
        evaluate: |x| 1.5 * (2.0 * PI * x).cos(),
    },
    CatalogEntry {
        name: "sigmoid",
        description: "4 / (1 + 4^(-5(x - 1))) - 2",
        definition_range: FunctionRange::FromZero(2),
        value_range: FunctionRange::Symmetric(2),
        evaluate: |x| 4.0 / (1.0 + 4f64.powf(-5.0 * (x - 1.0))) - 2.0,
    },
    CatalogEntry {
        name: "castle",
        description: "two quarter-width towers with round tops",
        definition_range: FunctionRange::FromZero(1),
        value_range: FunctionRange::FromZero(1),
        evaluate: castle,
    },
    CatalogEntry {
        name: "kinked",
        description: "x^3 + 1 left of zero, x^9 + 1 right of it",
        definition_range: FunctionRange::Symmetric(1),
        value_range: FunctionRange::FromZero(2),
        evaluate: |x| if x < 0.0 { x.powi(3) + 1.0 } else { x.powi(9) + 1.0 },
    },
    CatalogEntry {
        name: "sqrt",
        description: "sqrt(x)",
        definition_range: FunctionRange::FromZero(1),
        value_range: FunctionRange::FromZero(1),
        evaluate: f64::sqrt,
    },
    CatalogEntry {
        name: "bell",
        description: "0.75 exp(-50 (x - 0.5)^2) + 0.25",
        definition_range: FunctionRange::FromZero(1),
        value_range: FunctionRange::FromZero(1),
        evaluate: |x| 0.75 * (-0.5 * (x - 0.5).powi(2) / 0.01).exp() + 0.25,
    },
    CatalogEntry {
        name: "sinc",
        description: "sin(5 pi x) / (5 pi x)",
        definition_range: FunctionRange::Symmetric(1),
        value_range: FunctionRange::Symmetric(1),
        evaluate: sinc,
    },
    CatalogEntry {
        name: "quartic",
        description: "3x^4 - 1.5x^3 - 2x^2 + x",
        definition_range: FunctionRange::Symmetric(1),
        value_range: FunctionRange::Symmetric(1),
        evaluate: |x| 3.0 * x.powi(4) - 1.5 * x.powi(3) - 2.0 * x.powi(2) + x,
    },
];

pub fn find(name: &str) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|entry| entry.name == name)
}

fn castle(x: f64) -> f64 {
    // Symmetric around 0.5.
    let x = if x > 0.5 { 1.0 - x } else { x };
    if x < 0.25 {
        0.0
    } else {
        0.625 + 1.5 * (0.0625 - (0.5 - x).powi(2)).sqrt()
    }
}

fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        return 1.0;
    }

    let x = 5.0 * PI * x;
    x.sin() / x
}

#[test]
fn names_are_unique() {
    for (i, entry) in CATALOG.iter().enumerate() {
        assert!(CATALOG[i + 1..].iter().all(|other| other.name != entry.name));
    }
    assert_eq!(CATALOG.len(), 12);
}

#[test]
fn lookup() {
    let cubic = find("cubic").unwrap();
    assert_eq!(cubic.definition_range, FunctionRange::Symmetric(1));
    assert_eq!(cubic.function().evaluate(0.5), 0.25);

    assert!(find("tangent").is_none());
}

#[test]
fn special_points() {
    assert_eq!(sinc(0.0), 1.0);
    assert!(sinc(0.2).abs() < 1e-12);

    assert_eq!(castle(0.1), 0.0);
    assert_eq!(castle(0.9), 0.0);
    assert!((castle(0.5) - 1.0).abs() < 1e-12);
    assert!((castle(0.3) - castle(0.7)).abs() < 1e-9);

    let sigmoid = find("sigmoid").unwrap().function();
    assert_eq!(sigmoid.evaluate(1.0), 0.0);
}

#[test]
fn most_of_each_function_is_visible() {
    use riemann::function::{sample_function, Viewport};

    let viewport = Viewport::new(100.0, 100.0, 1.0);
    for entry in CATALOG {
        let curve = sample_function(&entry.function(), &viewport);
        assert!(curve.len() > 50, "{} has {} visible samples", entry.name, curve.len());
    }
}
