//! Rendering of [`Predicate`] trees into parameterized SQL
//!
//! Every literal goes through `push_bind`; only column names and operator
//! symbols from closed enums are written into the statement text.

use roster_core::query::Value;
use roster_core::{Column, Predicate};
use sqlx::{Postgres, QueryBuilder};

/// Qualified column of the `member m LEFT JOIN team t` source
pub const fn column_sql(column: Column) -> &'static str {
    match column {
        Column::MemberId => "m.member_id",
        Column::Username => "m.username",
        Column::Age => "m.age",
        Column::TeamId => "m.team_id",
        Column::TeamName => "t.name",
    }
}

/// Append `predicate` as a boolean SQL expression
pub fn push_predicate(builder: &mut QueryBuilder<'_, Postgres>, predicate: &Predicate) {
    match predicate {
        Predicate::True => {
            builder.push("TRUE");
        }
        Predicate::False => {
            builder.push("FALSE");
        }
        Predicate::And(preds) => push_joined(builder, preds, " AND ", "TRUE"),
        Predicate::Or(preds) => push_joined(builder, preds, " OR ", "FALSE"),
        Predicate::Not(inner) => {
            builder.push("NOT (");
            push_predicate(builder, inner);
            builder.push(")");
        }
        Predicate::Compare(cmp) => {
            builder
                .push(column_sql(cmp.column))
                .push(" ")
                .push(cmp.op.symbol())
                .push(" ");
            push_value(builder, &cmp.value);
        }
        Predicate::IsNull(column) => {
            builder.push(column_sql(*column)).push(" IS NULL");
        }
    }
}

fn push_joined(
    builder: &mut QueryBuilder<'_, Postgres>,
    preds: &[Predicate],
    separator: &str,
    identity: &str,
) {
    if preds.is_empty() {
        builder.push(identity);
        return;
    }

    builder.push("(");
    for (i, pred) in preds.iter().enumerate() {
        if i > 0 {
            builder.push(separator);
        }
        push_predicate(builder, pred);
    }
    builder.push(")");
}

fn push_value(builder: &mut QueryBuilder<'_, Postgres>, value: &Value) {
    match value {
        Value::BigInt(v) => builder.push_bind(*v),
        Value::Int(v) => builder.push_bind(*v),
        Value::Text(v) => builder.push_bind(v.clone()),
    };
}
