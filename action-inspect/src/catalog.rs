use crate::classify::is_supported;
use crate::fold::{fold_key, FoldStore};
use crate::introspect::Introspector;
use crate::types::TypeDesc;
use crate::value::Value;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TargetKind {
    /// Invoked once, with no receiver.
    Static,
    /// Invoked once per selected object.
    Instance,
}

/// One marked method as reported by the introspector.
#[derive(Clone, Debug)]
pub struct MethodDesc {
    pub name: &'static str,
    /// Display-name override carried by the marker attribute.
    pub display: Option<&'static str>,
    pub target: TargetKind,
    pub params: Vec<ParamDesc>,
}

#[derive(Clone, Debug)]
pub struct ParamDesc {
    pub name: &'static str,
    pub ty: TypeDesc,
    /// Declared default value, if the registration provided one.
    pub default: Option<Value>,
}

impl ParamDesc {
    pub fn new(name: &'static str, ty: TypeDesc) -> Self {
        ParamDesc {
            name,
            ty,
            default: None,
        }
    }

    pub fn with_default(mut self, v: Value) -> Self {
        self.default = Some(v);
        self
    }
}

/// Catalog entry for one operation: display metadata plus the live
/// parameter values the form mutates in place between redraws. Rebuilt from
/// scratch when the inspected selection changes.
#[derive(Clone, Debug)]
pub struct OperationDescriptor {
    /// Position in the introspector's declared action list.
    pub index: usize,
    pub name: &'static str,
    pub display_name: String,
    pub target: TargetKind,
    pub params: Vec<ParamSlot>,
    /// True iff every parameter type is supported by the editor.
    pub fully_supported: bool,
    /// Foldout state, seeded from the fold store at build time.
    pub open: bool,
}

#[derive(Clone, Debug)]
pub struct ParamSlot {
    pub name: &'static str,
    pub ty: TypeDesc,
    pub value: Value,
}

/// Builds the operation catalog for one inspected selection. Never fails; a
/// type with no marked methods yields an empty catalog. Unsupported
/// parameter types are diagnosed once here, per parameter.
pub fn build_catalog(
    intro: &dyn Introspector,
    ident: &str,
    folds: &dyn FoldStore,
) -> Vec<OperationDescriptor> {
    let type_name = intro.type_name();
    intro
        .declared_actions()
        .into_iter()
        .enumerate()
        .map(|(index, method)| {
            let MethodDesc {
                name,
                display,
                target,
                params,
            } = method;

            let display_name = match display {
                Some(d) if !d.is_empty() => d.to_string(),
                _ => nickname(name),
            };

            let mut fully_supported = true;
            let params = params
                .into_iter()
                .map(|p| {
                    if !is_supported(&p.ty) {
                        fully_supported = false;
                        log::warn!(
                            "action `{}`: parameter `{}` has unsupported type {}",
                            name,
                            p.name,
                            p.ty
                        );
                    }
                    let value = p.default.unwrap_or_else(|| Value::default_of(&p.ty));
                    ParamSlot {
                        name: p.name,
                        ty: p.ty,
                        value,
                    }
                })
                .collect();

            let open = folds
                .get(&fold_key(ident, type_name, name))
                .unwrap_or(false);

            OperationDescriptor {
                index,
                name,
                display_name,
                target,
                params,
                fully_supported,
                open,
            }
        })
        .collect()
}

/// Human-readable nickname for a raw method or parameter name: `_` becomes a
/// space, a space is inserted at lower->upper and letter->digit transitions,
/// and every word is capitalized. `say_hello` -> `Say Hello`, `SayHello` ->
/// `Say Hello`, `multiply` -> `Multiply`.
pub fn nickname(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 4);
    let mut prev: Option<char> = None;
    let mut word_start = true;
    for c in raw.chars() {
        if c == '_' {
            if !out.is_empty() && !out.ends_with(' ') {
                out.push(' ');
            }
            word_start = true;
            prev = None;
            continue;
        }
        let boundary = matches!(prev, Some(p) if (p.is_lowercase() && c.is_uppercase())
            || (p.is_alphabetic() && c.is_ascii_digit()));
        if boundary && !out.ends_with(' ') {
            out.push(' ');
            word_start = true;
        }
        if word_start {
            out.extend(c.to_uppercase());
            word_start = false;
        } else {
            out.push(c);
        }
        prev = Some(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fold::MemFolds;
    use crate::testutil::ScriptedIntro;

    #[test]
    fn test_nickname() {
        assert_eq!(nickname("say_hello"), "Say Hello");
        assert_eq!(nickname("SayHello"), "Say Hello");
        assert_eq!(nickname("multiply"), "Multiply");
        assert_eq!(nickname("Multiply"), "Multiply");
        assert_eq!(nickname("set_hp2"), "Set Hp 2");
        assert_eq!(nickname("a"), "A");
        assert_eq!(nickname("_private"), "Private");
        assert_eq!(nickname(""), "");
    }

    #[test]
    fn test_explicit_name_wins_over_nickname() {
        let intro = ScriptedIntro::new(
            "Turret",
            vec![MethodDesc {
                name: "say_hello",
                display: Some("Say Hello"),
                target: TargetKind::Instance,
                params: vec![],
            }],
        );
        let ops = build_catalog(&intro, "sel", &MemFolds::default());
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].display_name, "Say Hello");
        assert!(ops[0].params.is_empty());
        assert!(ops[0].fully_supported);
    }

    #[test]
    fn test_empty_display_falls_back_to_nickname() {
        let intro = ScriptedIntro::new(
            "Turret",
            vec![MethodDesc {
                name: "multiply",
                display: Some(""),
                target: TargetKind::Instance,
                params: vec![
                    ParamDesc::new("a", TypeDesc::I32),
                    ParamDesc::new("b", TypeDesc::I32),
                ],
            }],
        );
        let ops = build_catalog(&intro, "sel", &MemFolds::default());
        assert_eq!(ops[0].display_name, "Multiply");
        assert_eq!(ops[0].params[0].value, Value::I32(0));
        assert_eq!(ops[0].params[1].value, Value::I32(0));
    }

    #[test]
    fn test_declared_default_wins_over_zero() {
        let intro = ScriptedIntro::new(
            "Turret",
            vec![MethodDesc {
                name: "scale",
                display: None,
                target: TargetKind::Instance,
                params: vec![
                    ParamDesc::new("factor", TypeDesc::F32).with_default(Value::F32(1.0))
                ],
            }],
        );
        let ops = build_catalog(&intro, "sel", &MemFolds::default());
        assert_eq!(ops[0].params[0].value, Value::F32(1.0));
    }

    #[test]
    fn test_unsupported_parameter_clears_fully_supported() {
        let intro = ScriptedIntro::new(
            "Turret",
            vec![MethodDesc {
                name: "poke",
                display: None,
                target: TargetKind::Instance,
                params: vec![
                    ParamDesc::new("count", TypeDesc::U32),
                    ParamDesc::new("handle", TypeDesc::Opaque("RawHandle")),
                ],
            }],
        );
        let ops = build_catalog(&intro, "sel", &MemFolds::default());
        assert!(!ops[0].fully_supported);
        assert_eq!(ops[0].params[1].value, Value::Absent);
    }

    #[test]
    fn test_no_marked_methods_yields_empty_catalog() {
        let intro = ScriptedIntro::new("Bare", vec![]);
        assert!(build_catalog(&intro, "sel", &MemFolds::default()).is_empty());
    }

    #[test]
    fn test_fold_state_is_read_at_build_time() {
        let mut folds = MemFolds::default();
        crate::fold::FoldStore::set(&mut folds, "sel/Turret/fire", true);
        let intro = ScriptedIntro::new(
            "Turret",
            vec![MethodDesc {
                name: "fire",
                display: None,
                target: TargetKind::Instance,
                params: vec![ParamDesc::new("power", TypeDesc::F32)],
            }],
        );
        let ops = build_catalog(&intro, "sel", &folds);
        assert!(ops[0].open);
    }
}
