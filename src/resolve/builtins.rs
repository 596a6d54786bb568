//! Built-in global classes — names Ruby resolves from anywhere.
//!
//! Ruby exposes these by introspecting `Object.constants`, which also
//! trips deprecation warnings for constants such as `Fixnum`. Here the
//! set comes from a [`BuiltinProvider`], and [`builtin_classes`] mutes
//! whatever the provider logs while it runs.

use rustc_hash::FxHashSet;
use smol_str::SmolStr;
use thiserror::Error;
use tracing::subscriber::NoSubscriber;

/// Failure to enumerate built-in classes.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BuiltinError {
    #[error("builtin class enumeration failed: {0}")]
    Enumeration(SmolStr),
}

/// A source of built-in global class names.
pub trait BuiltinProvider {
    /// List every class available without qualification.
    fn enumerate(&self) -> Result<Vec<SmolStr>, BuiltinError>;
}

impl<F> BuiltinProvider for F
where
    F: Fn() -> Result<Vec<SmolStr>, BuiltinError>,
{
    fn enumerate(&self) -> Result<Vec<SmolStr>, BuiltinError> {
        self()
    }
}

/// A class defined on `Object` by the Ruby core.
#[derive(Clone, Copy, Debug)]
pub struct CoreClass {
    pub name: &'static str,
    /// Replacement for constants Ruby warns about on access.
    pub deprecated_by: Option<&'static str>,
}

const fn class(name: &'static str) -> CoreClass {
    CoreClass {
        name,
        deprecated_by: None,
    }
}

const fn deprecated(name: &'static str, replacement: &'static str) -> CoreClass {
    CoreClass {
        name,
        deprecated_by: Some(replacement),
    }
}

/// Top-level classes of the Ruby core library.
pub const CORE_CLASSES: &[CoreClass] = &[
    class("ArgumentError"),
    class("Array"),
    class("BasicObject"),
    deprecated("Bignum", "Integer"),
    class("Binding"),
    class("Class"),
    class("ClosedQueueError"),
    class("Complex"),
    class("ConditionVariable"),
    deprecated("Data", "Object"),
    class("Dir"),
    class("EOFError"),
    class("Encoding"),
    class("EncodingError"),
    class("Enumerator"),
    class("Exception"),
    class("FalseClass"),
    class("Fiber"),
    class("FiberError"),
    class("File"),
    deprecated("Fixnum", "Integer"),
    class("Float"),
    class("FloatDomainError"),
    class("FrozenError"),
    class("Hash"),
    class("IO"),
    class("IOError"),
    class("IndexError"),
    class("Integer"),
    class("Interrupt"),
    class("KeyError"),
    class("LoadError"),
    class("LocalJumpError"),
    class("MatchData"),
    class("Method"),
    class("Module"),
    class("Mutex"),
    class("NameError"),
    class("NilClass"),
    class("NoMatchingPatternError"),
    class("NoMemoryError"),
    class("NoMethodError"),
    class("NotImplementedError"),
    class("Numeric"),
    class("Object"),
    class("Proc"),
    class("Queue"),
    class("Random"),
    class("Range"),
    class("RangeError"),
    class("Rational"),
    class("Regexp"),
    class("RegexpError"),
    class("RuntimeError"),
    class("ScriptError"),
    class("SecurityError"),
    class("SignalException"),
    class("SizedQueue"),
    class("StandardError"),
    class("StopIteration"),
    class("String"),
    class("Struct"),
    class("Symbol"),
    class("SyntaxError"),
    class("SystemCallError"),
    class("SystemExit"),
    class("SystemStackError"),
    class("Thread"),
    class("ThreadError"),
    class("ThreadGroup"),
    class("Time"),
    class("TracePoint"),
    class("TrueClass"),
    class("TypeError"),
    class("UnboundMethod"),
    class("UncaughtThrowError"),
    class("ZeroDivisionError"),
];

/// The classes of the Ruby core library.
///
/// Deprecated constants log a warning when enumerated, as reading them
/// does in Ruby.
#[derive(Clone, Copy, Debug, Default)]
pub struct RubyCore;

impl BuiltinProvider for RubyCore {
    fn enumerate(&self) -> Result<Vec<SmolStr>, BuiltinError> {
        Ok(CORE_CLASSES
            .iter()
            .map(|class| {
                if let Some(replacement) = class.deprecated_by {
                    tracing::warn!(
                        constant = class.name,
                        replacement,
                        "constant ::{} is deprecated",
                        class.name
                    );
                }
                SmolStr::new_static(class.name)
            })
            .collect())
    }
}

/// Enumerate `provider` into a set, discarding anything it logs.
///
/// The thread's dispatcher is swapped for [`NoSubscriber`] during the call
/// and the previous one is back in place when this returns, whether the
/// provider succeeded, failed or panicked.
pub fn builtin_classes<P>(provider: &P) -> Result<FxHashSet<SmolStr>, BuiltinError>
where
    P: BuiltinProvider + ?Sized,
{
    let listed = {
        let _muted = tracing::subscriber::set_default(NoSubscriber::default());
        provider.enumerate()
    };
    Ok(listed?.into_iter().collect())
}
