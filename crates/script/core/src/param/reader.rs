//! Typed parameter reads with two levels of defaulting.
//!
//! The caller's default applies when a parameter is absent. When it is
//! present but names a quest variable that is not set, the same default is
//! returned without applying the expression's arithmetic.

use tracing::debug;

use super::count::CountMode;
use super::design_note::ConfigBlob;
use crate::env::{OracleError, QuestVarStore, ScriptEnv, qvar_value};
use crate::object::Vec3;
use crate::qvar::{Expression, evaluate, evaluate_or};
use crate::text::{parse_flag, split_components, unquote};

/// Reads `name` from `config` as a float expression.
///
/// Absent parameters return `default` without any parsing. Parameters that
/// fail to parse, or whose variables are unset, also return `default`.
pub fn read_float<C, S>(config: &C, store: &S, name: &str, default: f32) -> f32
where
    C: ConfigBlob + ?Sized,
    S: QuestVarStore + ?Sized,
{
    let Some(raw) = config.get_raw(name) else {
        return default;
    };

    match Expression::parse(unquote(raw.trim())) {
        Ok(expr) => evaluate_or(&expr, store, default),
        Err(error) => {
            debug!("parameter {}='{}' is not an expression: {}", name, raw, error);
            default
        }
    }
}

/// Float parameter plus the expression that produced it, kept only when the
/// expression reads quest variables.
///
/// Behaviors that react to quest-variable changes keep this around and call
/// [`refresh`](Self::refresh) instead of re-reading the config.
#[derive(Clone, Debug, PartialEq)]
pub struct FloatParam {
    pub value: f32,
    pub expr: Option<Expression<'static>>,
}

impl FloatParam {
    pub const fn constant(value: f32) -> Self {
        Self { value, expr: None }
    }

    /// True when the value depends on quest variables.
    pub fn is_dynamic(&self) -> bool {
        self.expr.is_some()
    }

    /// Names of the quest variables the value depends on.
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.expr.iter().flat_map(Expression::variables)
    }

    /// Re-evaluates against the current store. Constant parameters return
    /// their original value.
    pub fn refresh<S>(&self, store: &S, default: f32) -> f32
    where
        S: QuestVarStore + ?Sized,
    {
        match &self.expr {
            Some(expr) => evaluate_or(expr, store, default),
            None => self.value,
        }
    }
}

/// Amount plus per-step falloff, read from `Name` and `NameFalloff`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ValueFalloff {
    pub value: i32,
    pub falloff: i32,
}

/// Typed view over a config blob, bound to the quest-variable store that
/// `$name` references read from.
pub struct ParamReader<'a, C: ?Sized> {
    config: &'a C,
    qvars: &'a dyn QuestVarStore,
}

impl<'a, C: ConfigBlob + ?Sized> ParamReader<'a, C> {
    pub fn new(config: &'a C, qvars: &'a dyn QuestVarStore) -> Self {
        Self { config, qvars }
    }

    /// Binds to the quest-variable store of `env`.
    ///
    /// # Errors
    ///
    /// [`OracleError::QuestVarsNotAvailable`] if `env` carries no store.
    pub fn from_env(config: &'a C, env: &ScriptEnv<'a>) -> Result<Self, OracleError> {
        Ok(Self::new(config, env.quest()?))
    }

    fn raw(&self, name: &str) -> Option<&'a str> {
        self.config.get_raw(name).map(|raw| unquote(raw.trim()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.config.get_raw(name).is_some()
    }

    pub fn read_string(&self, name: &str, default: &'a str) -> &'a str {
        self.raw(name).unwrap_or(default)
    }

    pub fn read_float(&self, name: &str, default: f32) -> f32 {
        read_float(self.config, self.qvars, name, default)
    }

    /// Like [`read_float`](Self::read_float), but keeps the parsed expression
    /// so the value can be refreshed later.
    pub fn read_float_param(&self, name: &str, default: f32) -> FloatParam {
        let Some(raw) = self.raw(name) else {
            return FloatParam::constant(default);
        };

        match Expression::parse(raw) {
            Ok(expr) => FloatParam {
                value: evaluate_or(&expr, self.qvars, default),
                expr: expr.references_vars().then(|| expr.into_owned()),
            },
            Err(error) => {
                debug!("parameter {}='{}' is not an expression: {}", name, raw, error);
                FloatParam::constant(default)
            }
        }
    }

    /// Integer read. Fractional results truncate toward zero.
    pub fn read_int(&self, name: &str, default: i32) -> i32 {
        let Some(raw) = self.raw(name) else {
            return default;
        };

        match Expression::parse(raw).and_then(|expr| evaluate(&expr, self.qvars)) {
            Ok(value) => value as i32,
            Err(error) => {
                debug!("parameter {}='{}' unavailable: {}", name, raw, error);
                default
            }
        }
    }

    /// Accepts flag words (`true`, `off`, ...) or any expression, where
    /// nonzero is true.
    pub fn read_bool(&self, name: &str, default: bool) -> bool {
        let Some(raw) = self.raw(name) else {
            return default;
        };

        parse_flag(raw)
            .or_else(|| {
                Expression::parse(raw)
                    .and_then(|expr| evaluate(&expr, self.qvars))
                    .ok()
                    .map(|value| value != 0.0)
            })
            .unwrap_or(default)
    }

    /// Reads an `x,y,z` vector. Each component is its own expression; missing
    /// or unusable components take the matching component of `defaults`.
    ///
    /// Returns `None` when the parameter is absent.
    pub fn read_floatvec(&self, name: &str, defaults: Vec3) -> Option<Vec3> {
        let raw = self.raw(name)?;
        let parts = split_components(raw);
        let component = |index: usize, default: f32| {
            parts
                .get(index)
                .map(|part| part.trim())
                .filter(|part| !part.is_empty())
                .and_then(|part| Expression::parse(part).ok())
                .map_or(default, |expr| evaluate_or(&expr, self.qvars, default))
        };

        Some(Vec3::new(
            component(0, defaults.x),
            component(1, defaults.y),
            component(2, defaults.z),
        ))
    }

    pub fn read_count_mode(&self, name: &str, default: CountMode) -> CountMode {
        self.raw(name)
            .and_then(CountMode::parse)
            .unwrap_or(default)
    }

    /// Reads `name` and `{name}Falloff`, each zero when absent.
    pub fn read_value_falloff(&self, name: &str) -> ValueFalloff {
        ValueFalloff {
            value: self.read_int(name, 0),
            falloff: self.read_int(&format!("{name}Falloff"), 0),
        }
    }

    pub fn qvar_value(&self, name: &str, default: i32) -> i32 {
        qvar_value(self.qvars, name, default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::QuestVarSnapshot;
    use crate::param::DesignNote;

    fn qvars() -> QuestVarSnapshot {
        [("spd", 55), ("flag", 1), ("off", 0)].into_iter().collect()
    }

    #[test]
    fn float_defaults() {
        let qvars = qvars();
        let note = DesignNote::parse("A=2.5; B=$spd/10; C=$missing*4; D=fast; E=$spd/0").unwrap();
        let reader = ParamReader::new(&note, &qvars);

        assert_eq!(reader.read_float("A", 0.0), 2.5);
        assert_eq!(reader.read_float("B", 0.0), 5.5);
        assert_eq!(reader.read_float("C", 3.0), 3.0);
        assert_eq!(reader.read_float("D", 1.0), 1.0);
        assert_eq!(reader.read_float("E", 9.0), 9.0);
        assert_eq!(reader.read_float("Absent", 7.0), 7.0);
    }

    #[test]
    fn float_param_refreshes_from_store() {
        let mut qvars = qvars();
        let note = DesignNote::parse("Speed='$spd/10'; Fixed=4").unwrap();

        let speed = ParamReader::new(&note, &qvars).read_float_param("Speed", 1.0);
        assert_eq!(speed.value, 5.5);
        assert!(speed.is_dynamic());
        assert_eq!(speed.variables().collect::<Vec<_>>(), ["spd"]);

        qvars.set("spd", 20);
        assert_eq!(speed.refresh(&qvars, 1.0), 2.0);
        qvars.remove("spd");
        assert_eq!(speed.refresh(&qvars, 1.0), 1.0);

        let fixed = ParamReader::new(&note, &qvars).read_float_param("Fixed", 0.0);
        assert_eq!(fixed, FloatParam::constant(4.0));
        assert_eq!(fixed.refresh(&qvars, 0.0), 4.0);

        let absent = ParamReader::new(&note, &qvars).read_float_param("Absent", 6.0);
        assert_eq!(absent, FloatParam::constant(6.0));
    }

    #[test]
    fn ints_truncate() {
        let qvars = qvars();
        let note = DesignNote::parse("Count=$spd/10; Neg=-2.7; Bad=x").unwrap();
        let reader = ParamReader::new(&note, &qvars);

        assert_eq!(reader.read_int("Count", 0), 5);
        assert_eq!(reader.read_int("Neg", 0), -2);
        assert_eq!(reader.read_int("Bad", 8), 8);
        assert_eq!(reader.read_int("Absent", -1), -1);
    }

    #[test]
    fn bools_accept_words_numbers_and_vars() {
        let qvars = qvars();
        let note = DesignNote::parse("A=yes; B=0; C=$flag; D=$off; E=perhaps").unwrap();
        let reader = ParamReader::new(&note, &qvars);

        assert!(reader.read_bool("A", false));
        assert!(!reader.read_bool("B", true));
        assert!(reader.read_bool("C", false));
        assert!(!reader.read_bool("D", true));
        assert!(reader.read_bool("E", true));
        assert!(!reader.read_bool("Absent", false));
    }

    #[test]
    fn strings_are_unquoted() {
        let qvars = qvars();
        let mut map = std::collections::BTreeMap::new();
        map.insert("Dest".to_owned(), "'@Chest'".to_owned());
        let reader = ParamReader::new(&map, &qvars);

        assert_eq!(reader.read_string("Dest", "[me]"), "@Chest");
        assert_eq!(reader.read_string("Other", "[me]"), "[me]");
    }

    #[test]
    fn vectors_fill_missing_components() {
        let qvars = qvars();
        let note = DesignNote::parse("Full='1,2,3'; Partial='4,,$spd'; Short=5; Junk='a,b'").unwrap();
        let reader = ParamReader::new(&note, &qvars);
        let defaults = Vec3::new(-1.0, -2.0, -3.0);

        assert_eq!(reader.read_floatvec("Full", defaults), Some(Vec3::new(1.0, 2.0, 3.0)));
        assert_eq!(
            reader.read_floatvec("Partial", defaults),
            Some(Vec3::new(4.0, -2.0, 55.0))
        );
        assert_eq!(
            reader.read_floatvec("Short", defaults),
            Some(Vec3::new(5.0, -2.0, -3.0))
        );
        assert_eq!(reader.read_floatvec("Junk", defaults), Some(defaults));
        assert_eq!(reader.read_floatvec("Absent", defaults), None);
    }

    #[test]
    fn count_mode_and_falloff() {
        let qvars = qvars();
        let note = DesignNote::parse("Count=on; Bad=7; Stim=10; StimFalloff=$flag").unwrap();
        let reader = ParamReader::new(&note, &qvars);

        assert_eq!(reader.read_count_mode("Count", CountMode::Both), CountMode::TurnOn);
        assert_eq!(reader.read_count_mode("Bad", CountMode::Both), CountMode::Both);
        assert_eq!(
            reader.read_value_falloff("Stim"),
            ValueFalloff { value: 10, falloff: 1 }
        );
        assert_eq!(reader.read_value_falloff("Absent"), ValueFalloff::default());
    }

    #[test]
    fn qvar_lookup_with_default() {
        let qvars = qvars();
        let note = DesignNote::default();
        let reader = ParamReader::new(&note, &qvars);

        assert_eq!(reader.qvar_value("spd", 0), 55);
        assert_eq!(reader.qvar_value("missing", 12), 12);
    }
}
