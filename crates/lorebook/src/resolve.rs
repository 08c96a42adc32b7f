//! Resolution layer.
//!
//! A [`Resolver`] answers one query field of the combined schema: it takes
//! the field's JSON arguments and returns a JSON result. Each collection
//! contributes two of them, "fetch one" and "fetch many", and may carry
//! extra ones as extensions.
//!
//! Argument shapes are validated here, at the boundary, so malformed input
//! never reaches a composed predicate.
//!
//! | Resolver | Arguments | Result |
//! |----------|-----------|--------|
//! | fetch one | `{ id, skipExpressionEvaluation? }` | entry or `null` |
//! | fetch many | `{ filter?, skipExpressionEvaluation? }` | array of entries |

use std::sync::Arc;

use lorebook_filter::QueryValues;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::collection::Collection;
use crate::document::Entry;
use crate::error::ResolveError;

/// Key under which a serialized entry reports its concrete type.
pub const TYPENAME_FIELD: &str = "__typename";

/// Answers one query field.
pub trait Resolver: Send + Sync {
    fn resolve(&self, args: &Value, ctx: &ResolveContext) -> Result<Value, ResolveError>;
}

impl<F> Resolver for F
where
    F: Fn(&Value, &ResolveContext) -> Result<Value, ResolveError> + Send + Sync,
{
    fn resolve(&self, args: &Value, ctx: &ResolveContext) -> Result<Value, ResolveError> {
        self(args, ctx)
    }
}

/// Whether textual fields get their embedded expressions rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalMode {
    Render,
    Raw,
}

impl EvalMode {
    /// `Raw` when `skipExpressionEvaluation` is set.
    pub fn from_skip(skip: bool) -> Self {
        if skip {
            EvalMode::Raw
        } else {
            EvalMode::Render
        }
    }
}

/// Post-processes serialized documents before they are returned.
pub trait ExpressionEvaluator: Send + Sync {
    fn evaluate(&self, document: Value, mode: EvalMode) -> Result<Value, ResolveError>;
}

/// Returns documents unchanged in either mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughEvaluator;

impl ExpressionEvaluator for PassthroughEvaluator {
    fn evaluate(&self, document: Value, _mode: EvalMode) -> Result<Value, ResolveError> {
        Ok(document)
    }
}

/// Per-request state shared by every resolver.
#[derive(Clone)]
pub struct ResolveContext {
    evaluator: Arc<dyn ExpressionEvaluator>,
}

impl ResolveContext {
    pub fn new(evaluator: impl ExpressionEvaluator + 'static) -> Self {
        ResolveContext {
            evaluator: Arc::new(evaluator),
        }
    }

    pub fn evaluator(&self) -> &dyn ExpressionEvaluator {
        self.evaluator.as_ref()
    }
}

impl Default for ResolveContext {
    fn default() -> Self {
        ResolveContext::new(PassthroughEvaluator)
    }
}

impl std::fmt::Debug for ResolveContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolveContext").finish_non_exhaustive()
    }
}

/// Arguments of a fetch-one field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FetchOneArgs {
    pub id: String,
    #[serde(default, rename = "skipExpressionEvaluation")]
    pub skip_expression_evaluation: Option<bool>,
}

/// Arguments of a fetch-many field.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FetchManyArgs {
    #[serde(default)]
    pub filter: Option<QueryValues>,
    #[serde(default, rename = "skipExpressionEvaluation")]
    pub skip_expression_evaluation: Option<bool>,
}

/// Parses resolver arguments; `null` is read as an empty object.
pub fn parse_args<A: DeserializeOwned>(field: &str, args: &Value) -> Result<A, ResolveError> {
    let args = match args {
        Value::Null => Value::Object(serde_json::Map::new()),
        other => other.clone(),
    };
    serde_json::from_value(args).map_err(|err| ResolveError::InvalidArguments {
        field: field.to_string(),
        message: err.to_string(),
    })
}

/// Serializes an entry, tags it with `__typename`, and runs the evaluator.
pub fn present<D: Entry>(
    entry: &D,
    mode: EvalMode,
    ctx: &ResolveContext,
) -> Result<Value, ResolveError> {
    let mut value = serde_json::to_value(entry)?;
    if let Value::Object(map) = &mut value {
        map.insert(
            TYPENAME_FIELD.to_string(),
            Value::String(entry.type_name().to_string()),
        );
    }
    ctx.evaluator().evaluate(value, mode)
}

/// Fetch-one resolver of a collection.
pub struct FetchOne<D: Entry> {
    field: String,
    collection: Arc<Collection<D>>,
}

impl<D: Entry> FetchOne<D> {
    pub fn new(field: impl Into<String>, collection: Arc<Collection<D>>) -> Self {
        FetchOne {
            field: field.into(),
            collection,
        }
    }
}

impl<D: Entry> Resolver for FetchOne<D> {
    fn resolve(&self, args: &Value, ctx: &ResolveContext) -> Result<Value, ResolveError> {
        let args: FetchOneArgs = parse_args(&self.field, args)?;
        let mode = EvalMode::from_skip(args.skip_expression_evaluation.unwrap_or(false));
        match self.collection.fetch_one(&args.id) {
            Some(entry) => present(entry, mode, ctx),
            None => Ok(Value::Null),
        }
    }
}

/// Fetch-many resolver of a collection.
pub struct FetchMany<D: Entry> {
    field: String,
    collection: Arc<Collection<D>>,
}

impl<D: Entry> FetchMany<D> {
    pub fn new(field: impl Into<String>, collection: Arc<Collection<D>>) -> Self {
        FetchMany {
            field: field.into(),
            collection,
        }
    }
}

impl<D: Entry> Resolver for FetchMany<D> {
    fn resolve(&self, args: &Value, ctx: &ResolveContext) -> Result<Value, ResolveError> {
        let args: FetchManyArgs = parse_args(&self.field, args)?;
        let mode = EvalMode::from_skip(args.skip_expression_evaluation.unwrap_or(false));
        let filter = args.filter.unwrap_or_default();
        self.collection
            .fetch_many(&filter)
            .into_iter()
            .map(|entry| present(entry, mode, ctx))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array)
    }
}
