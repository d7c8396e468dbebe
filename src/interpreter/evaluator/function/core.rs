use crate::interpreter::evaluator::{
    core::EvalResult,
    function::{builtin, min_max, random, random::RandomSource},
};

/// Type alias for builtin function handlers.
///
/// A builtin receives its evaluated arguments, the session's random source
/// and the byte position of the call for error reporting.
type BuiltinFn = fn(&[f64], &mut RandomSource, usize) -> EvalResult<f64>;

/// Number of arguments a builtin takes.
///
/// Each arity has its own table; a name registered with two arguments is
/// invisible to a lookup for one or three.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    /// `f(x)`
    One,
    /// `f(x, y)`
    Two,
    /// `f(x, y, z)`
    Three,
}

impl Arity {
    /// All arities, in the order call syntax tries them.
    pub const ALL: [Self; 3] = [Self::One, Self::Two, Self::Three];

    /// The argument count this arity stands for.
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (the registry entry),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        /// One entry of the builtin catalogue.
        pub struct BuiltinDef {
            /// Name used in call syntax.
            pub name:  &'static str,
            /// Number of arguments.
            pub arity: Arity,
            func:      BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of every builtin, in catalogue order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "abs"     => { arity: Arity::One, func: builtin::abs },
    "acos"    => { arity: Arity::One, func: builtin::acos },
    "asin"    => { arity: Arity::One, func: builtin::asin },
    "atan"    => { arity: Arity::One, func: builtin::atan },
    "atanh"   => { arity: Arity::One, func: builtin::atanh },
    "ceil"    => { arity: Arity::One, func: builtin::ceil },
    "cos"     => { arity: Arity::One, func: builtin::cos },
    "cosh"    => { arity: Arity::One, func: builtin::cosh },
    "exp"     => { arity: Arity::One, func: builtin::exp },
    "floor"   => { arity: Arity::One, func: builtin::floor },
    "log"     => { arity: Arity::One, func: builtin::log },
    "log10"   => { arity: Arity::One, func: builtin::log10 },
    "sin"     => { arity: Arity::One, func: builtin::sin },
    "sinh"    => { arity: Arity::One, func: builtin::sinh },
    "sqrt"    => { arity: Arity::One, func: builtin::sqrt },
    "tan"     => { arity: Arity::One, func: builtin::tan },
    "tanh"    => { arity: Arity::One, func: builtin::tanh },
    "int"     => { arity: Arity::One, func: builtin::int },
    "rand"    => { arity: Arity::One, func: random::rand },
    "percent" => { arity: Arity::One, func: random::percent },
    "min"     => { arity: Arity::Two, func: |args, _, _| Ok(min_max::min_max("min", args)) },
    "max"     => { arity: Arity::Two, func: |args, _, _| Ok(min_max::min_max("max", args)) },
    "mod"     => { arity: Arity::Two, func: builtin::modulo },
    "pow"     => { arity: Arity::Two, func: builtin::pow },
    "roll"    => { arity: Arity::Two, func: random::roll },
    "if"      => { arity: Arity::Three, func: builtin::if_then_else },
}

impl BuiltinDef {
    /// Runs the builtin on already evaluated arguments.
    ///
    /// `args` must hold exactly [`Arity::count`] values.
    pub fn call(&self, args: &[f64], rng: &mut RandomSource, position: usize) -> EvalResult<f64> {
        debug_assert_eq!(args.len(), self.arity.count());
        tracing::trace!(name = self.name, ?args, "builtin call");
        (self.func)(args, rng, position)
    }
}

/// Finds the builtin called `name` in the table for `arity`.
#[must_use]
pub fn lookup(name: &str, arity: Arity) -> Option<&'static BuiltinDef> {
    BUILTIN_TABLE.iter().find(|b| b.arity == arity && b.name == name)
}

/// Finds the builtin called `name`, trying one, two and then three
/// arguments.
///
/// # Example
/// ```
/// use calcexpr::interpreter::evaluator::function::core::{Arity, resolve};
///
/// assert_eq!(resolve("sqrt").map(|f| f.arity), Some(Arity::One));
/// assert_eq!(resolve("if").map(|f| f.arity), Some(Arity::Three));
/// assert!(resolve("Sqrt").is_none());
/// ```
#[must_use]
pub fn resolve(name: &str) -> Option<&'static BuiltinDef> {
    Arity::ALL.into_iter().find_map(|arity| lookup(name, arity))
}
