//! Command routing and execution
//!
//! Each subcommand maps onto one operation from [`crate::dynamic`].

use crate::cli::args::Commands;
use crate::dynamic::{self, Iteratee};
use crate::error::{common, FiError, Result};
use crate::value::Value;
use tracing::debug;

/// Apply a command to a parsed document and return the result
pub fn execute_command(command: &Commands, document: &Value) -> Result<Value> {
    debug!(?command, input_type = document.type_name(), "executing command");

    match command {
        Commands::Size => dynamic::size(document).map(Value::from),
        Commands::First { count } => dynamic::first(document, *count),
        Commands::Last { count } => dynamic::last(document, *count),
        Commands::Compact => dynamic::compact(document),
        Commands::Flatten { shallow } => Ok(dynamic::flatten(document, *shallow)),
        Commands::Uniq { sorted, by } => {
            let iteratee = by.clone().map(Iteratee::Property);
            dynamic::uniq(document, *sorted, iteratee.as_ref())
        }
        Commands::SortBy { key } => dynamic::sort_by(document, &Iteratee::from(key.clone())),
        Commands::Keys => dynamic::keys(document),
        Commands::Values => dynamic::values(document),
        Commands::Map { key } => dynamic::map(document, &Iteratee::property(key.as_str())),
        Commands::Find { key, equals } => {
            let (iteratee, target) = equality_test(key, equals)?;
            dynamic::find(document, |item| iteratee.apply(item) == target)
        }
        Commands::Filter { key, equals } => {
            let (iteratee, target) = equality_test(key, equals)?;
            dynamic::filter(document, |item| iteratee.apply(item) == target)
        }
        Commands::Sum { key } => sum(document, &Iteratee::from(key.clone())),
    }
}

fn equality_test(key: &Option<String>, equals: &str) -> Result<(Iteratee, Value)> {
    let target: Value = serde_json::from_str(equals)
        .map_err(|e| FiError::from(e).with_context(format!("in --equals {}", equals)))?;
    Ok((Iteratee::from(key.clone()), target))
}

/// Numeric total of `iteratee(element)`; an empty collection sums to 0
fn sum(document: &Value, iteratee: &Iteratee) -> Result<Value> {
    let mapped = dynamic::map(document, iteratee)?;
    let non_numeric = dynamic::as_sequence(&mapped)?
        .iter()
        .find(|item| item.as_f64().is_none());
    if let Some(item) = non_numeric {
        return Err(common::not_a_number(item.type_name()).in_operation("sum"));
    }
    let total = dynamic::reduce(
        &mapped,
        |acc, item, _| Value::Number(acc.to_number() + item.to_number()),
        Value::Undefined,
    )?;
    Ok(if total.is_undefined() {
        Value::from(0)
    } else {
        total
    })
}
