use std::collections::HashMap;

use dataq::reflect::access::ResolveError;
use dataq::reflect::derive::Reflect;
use dataq::reflect::info::ReflectKind;
use dataq::reflect::ops::Scalar;
use dataq::surf::{DiagnosticReason, Surfer, SurferError, compare};

#[derive(Reflect)]
#[reflect(rename_all = "PascalCase")]
struct Level3 {
    x: i32,
}

#[derive(Reflect)]
#[reflect(rename_all = "PascalCase")]
struct Level2 {
    ypsilon: i32,
    omega: String,
    epsilon: Option<Box<Level3>>,
}

#[derive(Reflect)]
#[reflect(rename_all = "PascalCase")]
struct Level1 {
    alfa: f64,
    #[reflect(rename = "beta")]
    beta: String,
    gamma: Level2,
    zeta: HashMap<String, f64>,
}

fn level1() -> Level1 {
    Level1 {
        alfa: 1.0,
        beta: "b".to_string(),
        gamma: Level2 {
            ypsilon: 10,
            omega: "t2".to_string(),
            epsilon: None,
        },
        zeta: HashMap::from([("zeta1".to_string(), 1.0), ("zeta2".to_string(), 2.0)]),
    }
}

fn sorted(mut vars: Vec<String>) -> Vec<String> {
    vars.sort();
    vars
}

#[test]
fn lists_accessible_paths() {
    let root = level1();
    let vars = Surfer::new().vars(&root).unwrap();
    assert_eq!(
        sorted(vars),
        ["Alfa", "Gamma.Omega", "Gamma.Ypsilon", "Zeta.zeta1", "Zeta.zeta2"]
    );
}

#[test]
fn flat_data_round_trips() {
    let root = level1();
    let surfer = Surfer::new();

    let vars = surfer.vars(&root).unwrap();
    let data = surfer.flat_data(&root).unwrap();
    assert_eq!(data.len(), vars.len());

    for path in &vars {
        assert_eq!(surfer.get(path, &root).unwrap(), data[path], "{path}");
    }
    assert_eq!(data["Gamma.Ypsilon"], Scalar::Int(10));
    assert_eq!(data["Zeta.zeta2"], Scalar::Float64(2.0));
}

#[test]
fn lower_case_fields_are_hidden() {
    let root = level1();
    let surfer = Surfer::new();

    assert!(!surfer.vars(&root).unwrap().iter().any(|path| path == "beta"));
    assert_eq!(
        surfer.get("beta", &root),
        Err(SurferError::Resolve(ResolveError::InvalidFieldName {
            path: "beta".to_string(),
            segment: "beta".to_string(),
        }))
    );
}

#[test]
fn map_of_maps_fails() {
    #[derive(Reflect)]
    #[reflect(rename_all = "PascalCase")]
    struct Nested {
        alfa: f64,
        zeta: HashMap<String, HashMap<String, f64>>,
    }

    let root = Nested {
        alfa: 1.0,
        zeta: HashMap::from([("a".to_string(), HashMap::from([("b".to_string(), 1.0)]))]),
    };
    let surfer = Surfer::new();

    assert!(matches!(
        surfer.flat_data(&root),
        Err(SurferError::Resolve(ResolveError::UnsupportedMapValue {
            kind: ReflectKind::Map,
            ..
        }))
    ));
    assert!(surfer.vars(&root).is_err());
}

#[test]
fn nil_indirection() {
    let root = level1();
    let surfer = Surfer::new();

    assert_eq!(
        surfer.get("Gamma.Epsilon.X", &root),
        Err(SurferError::Resolve(ResolveError::NilReference {
            path: "Gamma.Epsilon".to_string(),
        }))
    );

    let mut skipped = Vec::new();
    let vars = surfer.vars_with(&root, |d| skipped.push(d)).unwrap();
    assert!(!vars.iter().any(|path| path.starts_with("Gamma.Epsilon")));
    assert!(
        skipped
            .iter()
            .any(|d| d.path == "Gamma.Epsilon" && d.reason == DiagnosticReason::NilIndirection)
    );
}

#[test]
fn present_indirection_is_traversed() {
    let mut root = level1();
    root.gamma.epsilon = Some(Box::new(Level3 { x: 7 }));
    let surfer = Surfer::new();

    assert_eq!(surfer.get_int64("Gamma.Epsilon.X", &root), Ok(7));
    surfer.set_int64("Gamma.Epsilon.X", 8, &mut root).unwrap();
    assert_eq!(surfer.flat_data(&root).unwrap()["Gamma.Epsilon.X"], Scalar::Int(8));
}

#[test]
fn set_then_get() {
    let mut root = level1();
    let surfer = Surfer::new();

    surfer.set_float64("Alfa", 2.0, &mut root).unwrap();
    assert_eq!(surfer.get_float64("Alfa", &root), Ok(2.0));
    assert_eq!(root.alfa, 2.0);

    surfer.set_float64("Zeta.zeta1", 5.0, &mut root).unwrap();
    assert_eq!(root.zeta["zeta1"], 5.0);
}

#[test]
fn string_coercion() {
    #[derive(Reflect)]
    struct Text {
        #[reflect(rename = "Alfa")]
        alfa: String,
    }

    let surfer = Surfer::new();
    assert_eq!(surfer.get_float64("Alfa", &Text { alfa: "3.5".to_string() }), Ok(3.5));
    assert!(matches!(
        surfer.get_float64("Alfa", &Text { alfa: "abc".to_string() }),
        Err(SurferError::ParseFloat { .. })
    ));
}

#[test]
fn comparator_kinds() {
    assert_eq!(compare(&5_i32, &5_i64), Ok(false));
    assert_eq!(compare(&5_i32, &5_i32), Ok(true));
}

#[test]
fn underscore_separator() {
    let root = level1();
    let surfer = Surfer::with_separator("_");

    assert_eq!(
        sorted(surfer.vars(&root).unwrap()),
        ["Alfa", "Gamma_Omega", "Gamma_Ypsilon", "Zeta_zeta1", "Zeta_zeta2"]
    );
    assert_eq!(surfer.get_string("Gamma_Omega", &root), Ok("t2"));
}

fn assert_round_trips(surfer: &Surfer, root: &dyn dataq::reflect::Reflect) -> Vec<String> {
    let vars = surfer.vars(root).unwrap();
    let data = surfer.flat_data(root).unwrap();
    assert_eq!(data.len(), vars.len());
    for path in &vars {
        assert_eq!(surfer.get(path, root).unwrap(), data[path], "{path}");
    }
    sorted(vars)
}

#[test]
fn empty_separator_round_trips() {
    let root = level1();
    let surfer = Surfer::with_separator("");

    assert_eq!(assert_round_trips(&surfer, &root), ["Alfa"]);

    let mut skipped = Vec::new();
    surfer.vars_with(&root, |d| skipped.push(d)).unwrap();
    let unaddressable = skipped
        .into_iter()
        .filter(|d| d.reason == DiagnosticReason::Unaddressable)
        .map(|d| d.path)
        .collect();
    assert_eq!(
        sorted(unaddressable),
        ["GammaEpsilon", "GammaOmega", "GammaYpsilon", "Zetazeta1", "Zetazeta2"]
    );
    assert!(surfer.get("GammaOmega", &root).is_err());
}

#[test]
fn multi_char_separator_round_trips() {
    let root = level1();
    let surfer = Surfer::with_separator("::");

    assert_eq!(
        assert_round_trips(&surfer, &root),
        ["Alfa", "Gamma::Omega", "Gamma::Ypsilon", "Zeta::zeta1", "Zeta::zeta2"]
    );
}

#[test]
fn renamed_fields_round_trip() {
    #[derive(Reflect)]
    #[reflect(rename_all = "PascalCase")]
    struct Renamed {
        #[reflect(rename = "A_B")]
        a_b: f64,
        #[reflect(rename = "C.D")]
        c_d: f64,
        gamma: Level2,
        zeta: HashMap<String, f64>,
    }

    let root = Renamed {
        a_b: 1.0,
        c_d: 2.0,
        gamma: level1().gamma,
        zeta: HashMap::from([("z_1".to_string(), 3.0)]),
    };

    let dotted = Surfer::new();
    assert_eq!(
        assert_round_trips(&dotted, &root),
        ["A_B", "Gamma.Omega", "Gamma.Ypsilon", "Zeta.z_1"]
    );

    let underscored = Surfer::with_separator("_");
    assert_eq!(
        assert_round_trips(&underscored, &root),
        ["C.D", "Gamma_Omega", "Gamma_Ypsilon", "Zeta_z_1"]
    );
    let mut skipped = Vec::new();
    underscored.vars_with(&root, |d| skipped.push(d)).unwrap();
    assert!(
        skipped
            .iter()
            .any(|d| d.path == "A_B" && d.reason == DiagnosticReason::Unaddressable)
    );
}

#[test]
fn root_behind_indirection() {
    let root = Some(Box::new(level1()));
    let surfer = Surfer::new();
    assert_eq!(surfer.get_int64("Gamma.Ypsilon", &root), Ok(10));
    assert_eq!(surfer.vars(&root).unwrap().len(), 5);

    let empty: Option<Box<Level1>> = None;
    assert!(matches!(
        surfer.get("Alfa", &empty),
        Err(SurferError::Resolve(ResolveError::NilReference { .. }))
    ));
}

#[test]
fn map_root() {
    let root: HashMap<String, f64> = HashMap::from([("a.b".to_string(), 1.0)]);
    let surfer = Surfer::new();

    assert_eq!(surfer.vars(&root).unwrap(), ["a.b"]);
    assert_eq!(surfer.get_float64("a.b", &root), Ok(1.0));
}

#[cfg(feature = "serde")]
#[test]
fn flat_data_serializes() {
    let root = level1();
    let data = Surfer::new().flat_data(&root).unwrap();

    let json = serde_json::to_value(&data).unwrap();
    assert_eq!(json["Alfa"], 1.0);
    assert_eq!(json["Gamma.Omega"], "t2");
    assert_eq!(json["Gamma.Ypsilon"], 10);
}

#[cfg(feature = "serde")]
#[test]
fn json_map_of_mixed_scalars() {
    #[derive(Reflect)]
    #[reflect(rename_all = "PascalCase")]
    struct Record {
        alfa: f64,
        extra: HashMap<String, Scalar>,
    }

    let extra: HashMap<String, Scalar> =
        serde_json::from_str(r#"{"a": 1, "b": "x", "c": true, "d": 2.5}"#).unwrap();
    let mut root = Record { alfa: 1.0, extra };
    let surfer = Surfer::new();

    let data = surfer.flat_data(&root).unwrap();
    assert_eq!(data.len(), 5);
    assert_eq!(data["Extra.a"], Scalar::Int(1));
    assert_eq!(data["Extra.b"], Scalar::from("x"));
    assert_eq!(data["Extra.c"], Scalar::Bool(true));
    assert_eq!(data["Extra.d"], Scalar::Float64(2.5));
    assert_round_trips(&surfer, &root);

    assert_eq!(surfer.get_int64("Extra.a", &root), Ok(1));
    surfer.set_float64("Extra.d", 3.0, &mut root).unwrap();
    assert_eq!(root.extra["d"], Scalar::Float64(3.0));
    surfer.set_string("Extra.b", "y", &mut root).unwrap();
    assert_eq!(root.extra["b"], Scalar::from("y"));
}
