use crate::{
    builder::QueryBuilder,
    codec::{CursorDecoder, CursorEncoder},
    config::Config,
    error::PaginateError,
    query::{
        ast::{BinaryOperator, OrderByExpr, order_by_clause},
        binary, bind,
        dialect::dialect_for,
        render::{Render, Renderer},
        sql,
    },
    rule::{self, ResolvedRule, Rule},
};
use model::{
    core::{data_type::SqlDialect, value::Value},
    pagination::{
        cursor::{Cursor, Page},
        order::Order,
    },
    records::row::RowData,
    schema::table::TableSchema,
};
use tracing::debug;

/// Keyset pagination engine.
///
/// Holds the configuration for one pagination call: rules, page size, order,
/// and incoming cursors. Not synchronized; concurrent callers construct their
/// own instance. A call resolves rules freshly, so an instance may be reused
/// across calls on the same record type.
pub struct Paginator {
    cursor: Cursor,
    rules: Vec<Rule>,
    first: usize,
    last: usize,
    order: Order,
    invert_order: bool,
    dialect: SqlDialect,
}

impl Paginator {
    /// Creates a paginator from configuration layers, applied on top of the
    /// built-in defaults in the order given.
    pub fn new(configs: &[Config]) -> Self {
        let mut paginator = Paginator {
            cursor: Cursor::default(),
            rules: Vec::new(),
            first: 0,
            last: 0,
            order: Order::Desc,
            invert_order: false,
            dialect: SqlDialect::MySql,
        };
        Config::defaults().apply(&mut paginator);
        for config in configs {
            config.apply(&mut paginator);
        }
        paginator
    }

    pub fn set_rules(&mut self, rules: Vec<Rule>) {
        self.rules = rules;
    }

    pub fn set_keys(&mut self, keys: Vec<String>) {
        self.rules = keys.into_iter().map(|key| Rule::new(&key)).collect();
    }

    /// Requests the first N rows of the window. Clears any `last` value;
    /// page-size intent is exclusive.
    pub fn set_first(&mut self, first: usize) {
        self.first = first;
        self.last = 0;
    }

    /// Requests the last N rows of the window. Clears any `first` value.
    pub fn set_last(&mut self, last: usize) {
        self.last = last;
        self.first = 0;
    }

    pub fn set_order(&mut self, order: Order) {
        self.order = order;
    }

    pub fn set_after_cursor(&mut self, after: String) {
        self.cursor.after = Some(after);
    }

    pub fn set_before_cursor(&mut self, before: String) {
        self.cursor.before = Some(before);
    }

    /// Accepted for interface compatibility; ordering is fully determined by
    /// the rules and the pagination direction, so this flag has no effect.
    pub fn set_invert(&mut self, invert: bool) {
        self.invert_order = invert;
    }

    pub fn set_dialect(&mut self, dialect: SqlDialect) {
        self.dialect = dialect;
    }

    pub fn first(&self) -> usize {
        self.first
    }

    pub fn last(&self) -> usize {
        self.last
    }

    pub fn order(&self) -> Order {
        self.order
    }

    pub fn keys(&self) -> Vec<String> {
        self.rules.iter().map(|rule| rule.key.clone()).collect()
    }

    pub fn invert_order(&self) -> bool {
        self.invert_order
    }

    /// Runs one pagination call: validates the rules against `schema`, asks
    /// `builder` to fetch the limit-plus-one window, trims it, and encodes
    /// the boundary rows of the remaining window into a fresh cursor pair.
    ///
    /// On validation or cursor errors no query is executed and `dest` is left
    /// untouched. Collaborator errors are surfaced unchanged.
    pub fn paginate(
        &mut self,
        builder: &mut dyn QueryBuilder,
        schema: &TableSchema,
        dest: &mut Vec<RowData>,
    ) -> Result<Page, PaginateError> {
        rule::validate(&self.rules)?;
        let rules = rule::resolve(&self.rules, schema, self.order)?;

        let forward = self.is_forward();
        // Backward pages and `last` windows run the query in reverse key
        // order, so the database hands back the rows closest to the boundary
        // first.
        let flipped = !forward || self.last > 0;
        debug!(forward, flipped, table = schema.table(), "paginating");

        let boundary = self.decode_cursor(&rules, schema)?;

        let page_size = if self.first > 0 { self.first } else { self.last };
        if page_size > 0 {
            builder.limit(page_size + 1);
        }

        builder.order_by(&order_by_clause(&order_items(&rules, flipped)));

        if let Some(values) = &boundary {
            let dialect = dialect_for(self.dialect);
            let mut renderer = Renderer::new(dialect);
            keyset_predicate(&rules, values, forward).render(&mut renderer);
            let (predicate, params) = renderer.finish();
            debug!(predicate = %predicate, params = params.len(), "keyset predicate");
            builder.filter(&predicate, params);
        }

        builder.fetch_into(dest)?;

        let mut page = Page::default();
        if !dest.is_empty() {
            if page_size > 0 && dest.len() > page_size {
                page.has_more = true;
                // In the flipped case this drops the single most-distant row.
                dest.truncate(page_size);
            }
            if flipped {
                // Report rows in forward order regardless of direction.
                dest.reverse();
            }
            page.cursor = self.encode_cursor(&rules, dest)?;
        }
        Ok(page)
    }

    /// Forward when no `before` cursor is set; an `after` cursor takes
    /// precedence when both are present.
    fn is_forward(&self) -> bool {
        self.cursor.before.is_none() || self.cursor.after.is_some()
    }

    fn decode_cursor(
        &self,
        rules: &[ResolvedRule],
        schema: &TableSchema,
    ) -> Result<Option<Vec<Value>>, PaginateError> {
        let token = if self.is_forward() {
            &self.cursor.after
        } else {
            &self.cursor.before
        };
        let Some(token) = token else {
            return Ok(None);
        };

        let keys = self.keys();
        let mut values = CursorDecoder::new(&keys).decode(token, schema)?;
        // NULLs compare through the same substituted value the query uses.
        for (value, rule) in values.iter_mut().zip(rules) {
            if value.is_null()
                && let Some(replacement) = &rule.null_replacement
            {
                *value = replacement.clone();
            }
        }
        Ok(Some(values))
    }

    fn encode_cursor(
        &self,
        rules: &[ResolvedRule],
        dest: &[RowData],
    ) -> Result<Cursor, PaginateError> {
        let (Some(first_row), Some(last_row)) = (dest.first(), dest.last()) else {
            return Ok(Cursor::default());
        };
        let keys: Vec<String> = rules.iter().map(|rule| rule.key.clone()).collect();
        let encoder = CursorEncoder::new(&keys);
        Ok(Cursor {
            after: Some(encoder.encode(last_row)?),
            before: Some(encoder.encode(first_row)?),
        })
    }
}

fn order_items(rules: &[ResolvedRule], flipped: bool) -> Vec<OrderByExpr> {
    rules
        .iter()
        .map(|rule| OrderByExpr {
            expr: rule.sql_expr.clone(),
            order: if flipped {
                rule.order.flip()
            } else {
                rule.order
            },
        })
        .collect()
}

/// Builds the composite keyset predicate for a boundary tuple:
/// `k1 OP v1 OR (k1 = v1 AND k2 OP v2) OR ...`, the lexicographic expansion
/// of "strictly past the boundary tuple" across mixed-direction keys.
fn keyset_predicate(
    rules: &[ResolvedRule],
    values: &[Value],
    forward: bool,
) -> crate::query::ast::Expr {
    let mut groups = Vec::with_capacity(rules.len());
    for (i, rule) in rules.iter().enumerate() {
        let op = if (forward && rule.order == Order::Asc)
            || (!forward && rule.order == Order::Desc)
        {
            BinaryOperator::Gt
        } else {
            BinaryOperator::Lt
        };

        let mut group = binary(sql(rule.sql_expr.clone()), op, bind(values[i].clone()));
        for j in (0..i).rev() {
            let eq = binary(
                sql(rules[j].sql_expr.clone()),
                BinaryOperator::Eq,
                bind(values[j].clone()),
            );
            group = binary(eq, BinaryOperator::And, group);
        }
        groups.push(group);
    }

    groups
        .into_iter()
        .reduce(|acc, group| binary(acc, BinaryOperator::Or, group))
        .unwrap_or_else(|| sql("1 = 1"))
}
