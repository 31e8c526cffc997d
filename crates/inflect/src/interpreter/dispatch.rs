//! Typed dispatch of a single function call through the shared table.

use inflect_semantics::{FunctionId, ParamKind, accepted_function_names, resolve_function};
use log::trace;

use crate::case::{camel_case, kebab_case, pascal_case, snake_case};
use crate::engine::Engine;
use crate::interpreter::error::{CallError, compute_suggestions};
use crate::numbers::{
    currency_to_words, int_to_roman, number_to_words, ordinal, ordinal_word, roman_to_int,
};
use crate::rails::{foreign_key, humanize, titleize};
use crate::rules::Comparison;
use crate::types::Value;

/// Arguments of one call, with typed accessors that report mismatches
/// against the function's signature.
struct Args<'a> {
    function: FunctionId,
    values: &'a [Value],
}

impl<'a> Args<'a> {
    fn mismatch(&self, position: usize, expected: ParamKind) -> CallError {
        CallError::ArgumentType {
            function: self.function.name().to_string(),
            position,
            expected,
        }
    }

    fn word(&self, position: usize) -> Result<&'a str, CallError> {
        self.values
            .get(position)
            .and_then(Value::as_word)
            .ok_or_else(|| self.mismatch(position, ParamKind::Word))
    }

    fn integer(&self, position: usize) -> Result<i64, CallError> {
        self.values
            .get(position)
            .and_then(Value::as_number)
            .ok_or_else(|| self.mismatch(position, ParamKind::Integer))
    }

    fn number(&self, position: usize) -> Result<f64, CallError> {
        self.values
            .get(position)
            .and_then(Value::as_float)
            .ok_or_else(|| self.mismatch(position, ParamKind::Number))
    }

    /// A trailing optional integer: absent is `None`, present must be an
    /// integer.
    fn count(&self, position: usize) -> Result<Option<i64>, CallError> {
        if position < self.values.len() {
            self.integer(position).map(Some)
        } else {
            Ok(None)
        }
    }
}

fn comparison_text(comparison: Option<Comparison>) -> String {
    comparison.map_or_else(|| "false".to_string(), |c| c.code().to_string())
}

impl Engine {
    /// Calls an inflection function by macro name or alias.
    ///
    /// This is the typed entry point shared by the macro interpreter and
    /// the command line.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is unknown, the argument count or an
    /// argument kind does not match the function's signature, or
    /// `roman_to_int` is given a malformed numeral.
    ///
    /// ```
    /// use inflect::{Engine, Value};
    ///
    /// let engine = Engine::new();
    /// let args = [Value::from("child"), Value::from(2)];
    /// assert_eq!(engine.call("plural", &args).unwrap(), "children");
    /// assert!(engine.call("plurl", &args).is_err());
    /// ```
    pub fn call(&self, name: &str, values: &[Value]) -> Result<String, CallError> {
        let mut count = self.default_count();
        let (function, result) = self.call_counted(name, values, &mut count)?;
        if function == FunctionId::Num {
            self.num(count);
        }
        Ok(result)
    }

    /// Checks and dispatches one call against `count`, the default count
    /// of the caller's context. `num` replaces `count` instead of writing
    /// it into the engine.
    pub(super) fn call_counted(
        &self,
        name: &str,
        values: &[Value],
        count: &mut Option<i64>,
    ) -> Result<(FunctionId, String), CallError> {
        let Some(function) = resolve_function(name) else {
            return Err(CallError::UnknownFunction {
                name: name.to_string(),
                suggestions: compute_suggestions(name, accepted_function_names()),
            });
        };
        let signature = function.signature();
        if !signature.accepts(values.len()) {
            return Err(CallError::ArgumentCount {
                function: function.name().to_string(),
                expected: signature.render(),
                got: values.len(),
            });
        }

        let args = Args { function, values };
        let result = self.dispatch(&args, count)?;
        trace!("{}({values:?}) -> {result:?}", function.name());
        Ok((function, result))
    }

    fn dispatch(&self, args: &Args<'_>, count: &mut Option<i64>) -> Result<String, CallError> {
        Ok(match args.function {
            FunctionId::Plural => match args.count(1)?.or(*count) {
                Some(count) => self.plural_with_count(args.word(0)?, count),
                None => self.plural_any(args.word(0)?),
            },
            FunctionId::PluralNoun => match args.count(1)?.or(*count) {
                Some(count) => self.plural_noun_with_count(args.word(0)?, count),
                None => self.plural_noun_any(args.word(0)?),
            },
            FunctionId::PluralVerb => match args.count(1)?.or(*count) {
                Some(count) => self.plural_verb_with_count(args.word(0)?, count),
                None => self.plural_verb_any(args.word(0)?),
            },
            FunctionId::PluralAdj => match args.count(1)?.or(*count) {
                Some(count) => self.plural_adj_with_count(args.word(0)?, count),
                None => self.plural_adj_any(args.word(0)?),
            },
            FunctionId::Singular | FunctionId::SingularNoun => match args.count(1)?.or(*count) {
                Some(count) => self.singular_noun_with_count(args.word(0)?, count),
                None => self.singular_noun_any(args.word(0)?),
            },
            FunctionId::No => {
                let word = args.word(0)?;
                self.no(word, Some(args.count(1)?.or(*count).unwrap_or(0)))
            }
            FunctionId::Num => {
                *count = args.count(0)?;
                count.map(|n| n.to_string()).unwrap_or_default()
            }
            FunctionId::An => self.an(args.word(0)?),
            FunctionId::PastTense => self.past_tense(args.word(0)?),
            FunctionId::PresentParticiple => self.present_participle(args.word(0)?),
            FunctionId::PastParticiple => self.past_participle(args.word(0)?),
            FunctionId::FutureTense => self.future_tense(args.word(0)?),
            FunctionId::IsParticiple => self.is_participle(args.word(0)?).to_string(),
            FunctionId::Comparative => self.comparative(args.word(0)?),
            FunctionId::Superlative => self.superlative(args.word(0)?),
            FunctionId::Adverb => self.adverb(args.word(0)?),
            FunctionId::Possessive => self.possessive(args.word(0)?),
            FunctionId::Compare => comparison_text(self.compare(args.word(0)?, args.word(1)?)),
            FunctionId::CompareNouns => {
                comparison_text(self.compare_nouns(args.word(0)?, args.word(1)?))
            }
            FunctionId::CompareVerbs => {
                comparison_text(self.compare_verbs(args.word(0)?, args.word(1)?))
            }
            FunctionId::CompareAdjs => {
                comparison_text(self.compare_adjs(args.word(0)?, args.word(1)?))
            }
            FunctionId::Ordinal => ordinal(args.integer(0)?),
            FunctionId::OrdinalWord => ordinal_word(args.integer(0)?),
            FunctionId::NumberToWords => number_to_words(args.integer(0)?),
            FunctionId::IntToRoman => int_to_roman(args.integer(0)?),
            FunctionId::RomanToInt => roman_to_int(args.word(0)?)?.to_string(),
            FunctionId::CurrencyToWords => currency_to_words(args.number(0)?, args.word(1)?),
            FunctionId::Humanize => humanize(args.word(0)?),
            FunctionId::Titleize => titleize(args.word(0)?),
            FunctionId::Tableize => self.tableize(args.word(0)?),
            FunctionId::Classify => self.classify(args.word(0)?),
            FunctionId::ForeignKey => foreign_key(args.word(0)?),
            FunctionId::CamelCase => camel_case(args.word(0)?),
            FunctionId::PascalCase => pascal_case(args.word(0)?),
            FunctionId::SnakeCase => snake_case(args.word(0)?),
            FunctionId::KebabCase => kebab_case(args.word(0)?),
        })
    }
}
